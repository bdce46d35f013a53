use super::ui::details::model::BrowserPreviews;
use async_trait::async_trait;
use contracts::domain::a001_feature::aggregate::{Feature, FeatureCode};
use contracts::domain::a001_feature::catalog::{FeatureCatalog, FeatureSaver, SaveError};
use contracts::domain::a001_feature::draft::SaveRequest;
use contracts::domain::a001_feature::edit_form::EditForm;
use contracts::domain::a001_feature::icon::PreviewProvider;
use contracts::shared::config::Config;
use leptos::prelude::*;

/// Reactive owner of the feature collection.
///
/// Views read through it; `save` is the only way to change a record. Previews the
/// catalog stops referencing are released through `P`.
pub struct FeatureCatalogStore<P: 'static = BrowserPreviews> {
    catalog: RwSignal<FeatureCatalog>,
    previews: StoredValue<P, LocalStorage>,
}

impl<P: 'static> Clone for FeatureCatalogStore<P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: 'static> Copy for FeatureCatalogStore<P> {}

impl FeatureCatalogStore {
    pub fn new(config: &Config) -> Self {
        Self::with_previews(config, BrowserPreviews)
    }
}

impl<P: PreviewProvider + 'static> FeatureCatalogStore<P> {
    pub fn with_previews(config: &Config, previews: P) -> Self {
        Self {
            catalog: RwSignal::new(FeatureCatalog::from_config(config)),
            previews: StoredValue::new_local(previews),
        }
    }

    /// Current records in catalog order (tracked)
    pub fn items(&self) -> Vec<Feature> {
        self.catalog.with(|c| c.items().to_vec())
    }

    /// Open `form` on the record with the given code
    pub fn select_for_edit<Q: PreviewProvider>(&self, code: &FeatureCode, form: &mut EditForm<Q>) -> bool {
        self.catalog.with_untracked(|c| c.select_for_edit(code, form))
    }
}

#[async_trait(?Send)]
impl<P: PreviewProvider + 'static> FeatureSaver<P::File> for FeatureCatalogStore<P> {
    async fn save(&self, request: SaveRequest<P::File>) -> Result<Feature, SaveError> {
        let outcome = self
            .catalog
            .try_update_untracked(|c| c.commit(&request))
            .ok_or_else(|| SaveError::Rejected("feature catalog is gone".to_string()))??;
        // Rejected commits leave the catalog as it was, so only a commit re-renders.
        self.catalog.notify();

        if let Some(url) = outcome.released_icon {
            if self.previews.try_with_value(|p| p.release(&url)).is_none() {
                log::warn!("Preview {} outlived its provider", url);
            }
        }
        Ok(outcome.feature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_feature::draft::PendingIcon;
    use contracts::domain::a001_feature::icon::IconCandidate;
    use contracts::shared::config::default_config;
    use futures::executor::block_on;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct RecordingPreviews {
        released: Rc<RefCell<Vec<String>>>,
    }

    impl PreviewProvider for RecordingPreviews {
        type File = IconCandidate;

        fn acquire(&self, file: &IconCandidate) -> Result<String, String> {
            Ok(format!("blob:{}", file.file_name))
        }

        fn release(&self, url: &str) {
            self.released.borrow_mut().push(url.to_string());
        }
    }

    fn store() -> (FeatureCatalogStore<RecordingPreviews>, RecordingPreviews) {
        let previews = RecordingPreviews::default();
        let store = FeatureCatalogStore::with_previews(&default_config(), previews.clone());
        (store, previews)
    }

    fn request(code: &str, english: &str, icon: Option<&str>) -> SaveRequest<IconCandidate> {
        let mut fields = default_config()
            .seed
            .into_iter()
            .map(Feature::from)
            .find(|f| f.code.as_str() == "1002")
            .unwrap()
            .to_dto();
        fields.id = FeatureCode::new(code);
        fields.english_title = english.to_string();
        SaveRequest {
            fields,
            icon: icon.map(|name| PendingIcon {
                file: IconCandidate::new(name, "image/png", 1024),
                preview_url: format!("blob:{}", name),
            }),
        }
    }

    #[test]
    fn test_save_replaces_record_and_releases_superseded_preview() {
        let owner = Owner::new();
        owner.set();
        let (store, previews) = store();

        let saved = block_on(store.save(request("1002", "Sofas", Some("one.png")))).unwrap();
        assert_eq!(saved.icon_url.as_deref(), Some("blob:one.png"));
        assert!(previews.released.borrow().is_empty());

        block_on(store.save(request("1002", "Sofas", Some("two.png")))).unwrap();
        assert_eq!(*previews.released.borrow(), vec!["blob:one.png".to_string()]);

        let items = store.items();
        let codes: Vec<&str> = items.iter().map(|f| f.code.as_str()).collect();
        assert_eq!(codes, vec!["1001", "1002"]);
        assert_eq!(items[1].english_title, "Sofas");
        assert_eq!(items[1].icon_url.as_deref(), Some("blob:two.png"));
    }

    #[test]
    fn test_rejected_saves_leave_catalog_untouched() {
        let owner = Owner::new();
        owner.set();
        let (store, previews) = store();
        let before = store.items();

        let err = block_on(store.save(request("4242", "Garden", None))).unwrap_err();
        assert_eq!(err, SaveError::NotFound(FeatureCode::new("4242")));

        let err = block_on(store.save(request("1002", "Sofa 2", Some("x.png")))).unwrap_err();
        assert!(matches!(err, SaveError::Invalid(_)));

        assert_eq!(store.items(), before);
        assert!(previews.released.borrow().is_empty());
    }
}
