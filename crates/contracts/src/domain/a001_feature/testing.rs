use super::aggregate::{Feature, FeatureCode};
use super::catalog::{FeatureCatalog, FeatureSaver, SaveError};
use super::draft::SaveRequest;
use super::icon::{IconCandidate, PreviewProvider};
use async_trait::async_trait;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Preview provider that hands out numbered urls and records every release
#[derive(Clone, Default)]
pub struct FakePreviews {
    state: Rc<RefCell<FakePreviewState>>,
}

#[derive(Default)]
struct FakePreviewState {
    issued: u32,
    live: Vec<String>,
    released: Vec<String>,
    fail_next: bool,
}

impl FakePreviews {
    pub fn live(&self) -> Vec<String> {
        self.state.borrow().live.clone()
    }

    pub fn released(&self) -> Vec<String> {
        self.state.borrow().released.clone()
    }

    pub fn fail_next(&self) {
        self.state.borrow_mut().fail_next = true;
    }
}

impl PreviewProvider for FakePreviews {
    type File = IconCandidate;

    fn acquire(&self, file: &IconCandidate) -> Result<String, String> {
        let mut state = self.state.borrow_mut();
        if state.fail_next {
            state.fail_next = false;
            return Err("blob store unavailable".to_string());
        }
        state.issued += 1;
        let url = format!("blob:test/{}/{}", state.issued, file.file_name);
        state.live.push(url.clone());
        Ok(url)
    }

    fn release(&self, url: &str) {
        let mut state = self.state.borrow_mut();
        state.live.retain(|u| u != url);
        state.released.push(url.to_string());
    }
}

pub fn png(name: &str) -> IconCandidate {
    IconCandidate::new(name, "image/png", 4 * 1024)
}

pub fn seed_features() -> Vec<Feature> {
    vec![
        Feature::new(
            FeatureCode::new("1001"),
            "A/C".into(),
            "مُكيّف".into(),
            None,
            false,
        ),
        Feature::new(
            FeatureCode::new("1002"),
            "Furniture".into(),
            "أثاث".into(),
            None,
            false,
        ),
    ]
}

/// Saver committing straight into a catalog, with an optional one-shot failure
pub struct TestSaver {
    pub catalog: RefCell<FeatureCatalog>,
    calls: Cell<usize>,
    failure: RefCell<Option<String>>,
}

impl TestSaver {
    pub fn new(catalog: FeatureCatalog) -> Self {
        Self {
            catalog: RefCell::new(catalog),
            calls: Cell::new(0),
            failure: RefCell::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    pub fn fail_next(&self, reason: &str) {
        *self.failure.borrow_mut() = Some(reason.to_string());
    }
}

#[async_trait(?Send)]
impl FeatureSaver<IconCandidate> for TestSaver {
    async fn save(&self, request: SaveRequest<IconCandidate>) -> Result<Feature, SaveError> {
        self.calls.set(self.calls.get() + 1);
        if let Some(reason) = self.failure.borrow_mut().take() {
            return Err(SaveError::Rejected(reason));
        }
        self.catalog
            .borrow_mut()
            .commit(&request)
            .map(|outcome| outcome.feature)
    }
}
