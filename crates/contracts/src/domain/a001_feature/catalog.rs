use super::aggregate::{Feature, FeatureCode};
use super::draft::SaveRequest;
use super::edit_form::EditForm;
use super::icon::PreviewProvider;
use super::validation::{ScriptValidator, ARABIC, ENGLISH};
use crate::shared::config::Config;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SaveError {
    #[error("Feature {0} not found")]
    NotFound(FeatureCode),

    #[error("Invalid feature: {0}")]
    Invalid(String),

    #[error("Save failed: {0}")]
    Rejected(String),
}

/// Save boundary: commits a draft and resolves to the stored record
#[async_trait(?Send)]
pub trait FeatureSaver<F> {
    async fn save(&self, request: SaveRequest<F>) -> Result<Feature, SaveError>;
}

/// Result of a successful commit
#[derive(Debug, Clone, PartialEq)]
pub struct CommitOutcome {
    pub feature: Feature,
    /// Session preview the replaced record owned and nobody references any more
    pub released_icon: Option<String>,
}

/// Authoritative ordered collection of features, keyed by code
#[derive(Debug, Clone)]
pub struct FeatureCatalog {
    items: Vec<Feature>,
    english: ScriptValidator,
    arabic: ScriptValidator,
    /// Preview references adopted from drafts, owned by the catalog
    session_icons: Vec<String>,
}

impl FeatureCatalog {
    pub fn new(features: Vec<Feature>) -> Self {
        let mut items: Vec<Feature> = Vec::with_capacity(features.len());
        for feature in features {
            if items.iter().any(|f| f.code == feature.code) {
                log::warn!("Duplicate feature code {} ignored", feature.code);
                continue;
            }
            items.push(feature);
        }
        Self {
            items,
            english: ENGLISH,
            arabic: ARABIC,
            session_icons: Vec::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let features = config.seed.iter().cloned().map(Feature::from).collect();
        let mut catalog = Self::new(features);
        catalog.english = ENGLISH.with_min_letters(config.titles.min_letters);
        catalog.arabic = ARABIC.with_min_letters(config.titles.min_letters);
        catalog
    }

    pub fn items(&self) -> &[Feature] {
        &self.items
    }

    pub fn get(&self, code: &FeatureCode) -> Option<&Feature> {
        self.items.iter().find(|f| &f.code == code)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Open the edit form on the record with the given code
    pub fn select_for_edit<P: PreviewProvider>(
        &self,
        code: &FeatureCode,
        form: &mut EditForm<P>,
    ) -> bool {
        match self.get(code) {
            Some(feature) => {
                form.open_with(feature);
                true
            }
            None => {
                log::warn!("Cannot edit unknown feature {}", code);
                false
            }
        }
    }

    /// Replace the record whose code matches the request.
    ///
    /// Either the entry is fully replaced or the catalog is left untouched.
    pub fn commit<F>(&mut self, request: &SaveRequest<F>) -> Result<CommitOutcome, SaveError> {
        let code = &request.fields.id;
        let index = match self.items.iter().position(|f| &f.code == code) {
            Some(index) => index,
            None => {
                log::warn!("Save for unknown feature {} ignored", code);
                return Err(SaveError::NotFound(code.clone()));
            }
        };

        if let Some(err) = self
            .english
            .validate(&request.fields.english_title)
            .or_else(|| self.arabic.validate(&request.fields.arabic_title))
        {
            log::warn!("Rejected commit of feature {}: {}", code, err);
            return Err(SaveError::Invalid(err.message));
        }

        let mut fields = request.fields.clone();
        fields.icon_url = request.resolved_icon_url();

        let mut updated = self.items[index].clone();
        let previous_icon = updated.icon_url.clone();
        updated.update(&fields);

        let released_icon = match previous_icon {
            Some(prev) if updated.icon_url.as_deref() != Some(prev.as_str()) => {
                self.take_session_icon(&prev)
            }
            _ => None,
        };
        if let Some(pending) = &request.icon {
            self.session_icons.push(pending.preview_url.clone());
        }

        self.items[index] = updated.clone();
        log::info!(
            "Committed feature {} (version {})",
            code,
            updated.metadata.version
        );

        Ok(CommitOutcome {
            feature: updated,
            released_icon,
        })
    }

    fn take_session_icon(&mut self, url: &str) -> Option<String> {
        let pos = self.session_icons.iter().position(|u| u == url)?;
        Some(self.session_icons.swap_remove(pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_feature::aggregate::FeatureDto;
    use crate::domain::a001_feature::draft::PendingIcon;
    use crate::domain::a001_feature::icon::IconCandidate;
    use crate::domain::a001_feature::testing::{png, seed_features, FakePreviews};
    use crate::shared::config::default_config;

    fn request(code: &str, english: &str, arabic: &str, active: bool) -> SaveRequest<IconCandidate> {
        SaveRequest {
            fields: FeatureDto {
                id: FeatureCode::new(code),
                english_title: english.into(),
                arabic_title: arabic.into(),
                icon_url: None,
                active,
            },
            icon: None,
        }
    }

    #[test]
    fn test_commit_replaces_matching_entry_only() {
        let mut catalog = FeatureCatalog::new(seed_features());
        let before = catalog.items().to_vec();

        let mut req = request("1001", "Air Conditioner", "مكيف هواء", true);
        req.icon = Some(PendingIcon {
            file: png("ac.png"),
            preview_url: "blob:ac".into(),
        });
        let outcome = catalog.commit(&req).unwrap();

        let items = catalog.items();
        let codes: Vec<&str> = items.iter().map(|f| f.code.as_str()).collect();
        assert_eq!(codes, vec!["1001", "1002"]);
        assert_eq!(items[0].english_title, "Air Conditioner");
        assert_eq!(items[0].arabic_title, "مكيف هواء");
        assert!(items[0].active);
        assert_eq!(items[0].icon_url.as_deref(), Some("blob:ac"));
        assert_eq!(items[0].metadata.created_at, before[0].metadata.created_at);
        assert_eq!(items[1], before[1]);
        assert_eq!(outcome.feature, items[0]);
        assert_eq!(outcome.released_icon, None);
    }

    #[test]
    fn test_commit_unknown_code_is_noop() {
        let mut catalog = FeatureCatalog::new(seed_features());
        let before = catalog.items().to_vec();
        let err = catalog
            .commit(&request("9999", "Garden", "حديقة", true))
            .unwrap_err();
        assert_eq!(err, SaveError::NotFound(FeatureCode::new("9999")));
        assert_eq!(catalog.items(), before.as_slice());
    }

    #[test]
    fn test_commit_refuses_invalid_titles() {
        let mut catalog = FeatureCatalog::new(seed_features());
        let before = catalog.items().to_vec();
        let err = catalog.commit(&request("1002", "Furniture", "", false)).unwrap_err();
        assert_eq!(err, SaveError::Invalid("مطلوب".into()));
        let err = catalog.commit(&request("1001", "A/C", "مُكيّف", false)).unwrap_err();
        assert_eq!(err, SaveError::Invalid("English letters only".into()));
        assert_eq!(catalog.items(), before.as_slice());
    }

    #[test]
    fn test_replaced_session_icon_is_released() {
        let mut catalog = FeatureCatalog::new(seed_features());
        let mut first = request("1002", "Furniture", "أثاث", false);
        first.icon = Some(PendingIcon {
            file: png("one.png"),
            preview_url: "blob:one".into(),
        });
        catalog.commit(&first).unwrap();

        // Saving again without a new icon keeps the adopted preview alive.
        let mut again = request("1002", "Furniture", "أثاث", true);
        again.fields.icon_url = Some("blob:one".into());
        assert_eq!(catalog.commit(&again).unwrap().released_icon, None);

        let mut second = request("1002", "Furniture", "أثاث", true);
        second.icon = Some(PendingIcon {
            file: png("two.png"),
            preview_url: "blob:two".into(),
        });
        let outcome = catalog.commit(&second).unwrap();
        assert_eq!(outcome.released_icon.as_deref(), Some("blob:one"));
        assert_eq!(outcome.feature.metadata.version, 3);
    }

    #[test]
    fn test_seeded_icon_is_never_released() {
        let mut features = seed_features();
        features[1].icon_url = Some("/static/sofa.svg".into());
        let mut catalog = FeatureCatalog::new(features);
        let mut req = request("1002", "Furniture", "أثاث", false);
        req.icon = Some(PendingIcon {
            file: png("new.png"),
            preview_url: "blob:new".into(),
        });
        assert_eq!(catalog.commit(&req).unwrap().released_icon, None);
    }

    #[test]
    fn test_duplicate_codes_keep_first() {
        let mut features = seed_features();
        let mut dup = features[0].clone();
        dup.english_title = "Duplicate".into();
        features.push(dup);
        let catalog = FeatureCatalog::new(features);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.items()[0].english_title, "A/C");
    }

    #[test]
    fn test_from_config_seeds_two_records() {
        let catalog = FeatureCatalog::from_config(&default_config());
        assert_eq!(catalog.len(), 2);
        let ac = catalog.get(&FeatureCode::new("1001")).unwrap();
        assert_eq!(ac.arabic_title, "مُكيّف");
        assert_eq!(ac.status_label(), "Inactive");
    }

    #[test]
    fn test_select_for_edit() {
        let catalog = FeatureCatalog::new(seed_features());
        let mut form = EditForm::new(FakePreviews::default());
        assert!(!catalog.select_for_edit(&FeatureCode::new("4242"), &mut form));
        assert!(!form.is_open());
        assert!(catalog.select_for_edit(&FeatureCode::new("1002"), &mut form));
        assert_eq!(
            form.draft().map(|d| d.fields().english_title.as_str()),
            Some("Furniture")
        );
    }
}
