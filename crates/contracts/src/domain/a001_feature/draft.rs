use super::aggregate::{Feature, FeatureDto};
use super::icon::PreviewProvider;
use super::validation::TitleError;

/// An accepted icon file together with the preview reference issued for it
#[derive(Debug, Clone, PartialEq)]
pub struct PendingIcon<F> {
    pub file: F,
    pub preview_url: String,
}

/// Everything the save boundary needs to commit a draft
#[derive(Debug, Clone, PartialEq)]
pub struct SaveRequest<F> {
    pub fields: FeatureDto,
    pub icon: Option<PendingIcon<F>>,
}

impl<F> SaveRequest<F> {
    /// Icon reference the committed record ends up with
    pub fn resolved_icon_url(&self) -> Option<String> {
        match &self.icon {
            Some(pending) => Some(pending.preview_url.clone()),
            None => self.fields.icon_url.clone(),
        }
    }
}

/// Working copy of a feature while the edit form is open.
///
/// Never aliases the record it was opened from. A pending preview is owned by the
/// draft until it is disposed or handed over to a committed record.
#[derive(Debug)]
pub struct FeatureDraft<F> {
    fields: FeatureDto,
    pending_icon: Option<PendingIcon<F>>,
    english_error: Option<TitleError>,
    arabic_error: Option<TitleError>,
    saving: bool,
    save_error: Option<String>,
}

impl<F> FeatureDraft<F> {
    pub fn from_feature(feature: &Feature) -> Self {
        Self {
            fields: feature.to_dto(),
            pending_icon: None,
            english_error: None,
            arabic_error: None,
            saving: false,
            save_error: None,
        }
    }

    pub fn fields(&self) -> &FeatureDto {
        &self.fields
    }

    pub fn english_error(&self) -> Option<&TitleError> {
        self.english_error.as_ref()
    }

    pub fn arabic_error(&self) -> Option<&TitleError> {
        self.arabic_error.as_ref()
    }

    pub fn save_error(&self) -> Option<&str> {
        self.save_error.as_deref()
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn pending_icon(&self) -> Option<&PendingIcon<F>> {
        self.pending_icon.as_ref()
    }

    /// Pending preview if one was selected, otherwise the record's own icon
    pub fn preview(&self) -> Option<&str> {
        self.pending_icon
            .as_ref()
            .map(|p| p.preview_url.as_str())
            .or(self.fields.icon_url.as_deref())
    }

    pub fn has_errors(&self) -> bool {
        self.english_error.is_some() || self.arabic_error.is_some()
    }

    pub fn titles_present(&self) -> bool {
        !self.fields.english_title.trim().is_empty() && !self.fields.arabic_title.trim().is_empty()
    }

    pub(crate) fn set_english(&mut self, value: String, error: Option<TitleError>) {
        self.fields.english_title = value;
        self.english_error = error;
    }

    pub(crate) fn set_arabic(&mut self, value: String, error: Option<TitleError>) {
        self.fields.arabic_title = value;
        self.arabic_error = error;
    }

    pub(crate) fn set_errors(&mut self, english: Option<TitleError>, arabic: Option<TitleError>) {
        self.english_error = english;
        self.arabic_error = arabic;
    }

    pub(crate) fn set_active(&mut self, active: bool) {
        self.fields.active = active;
    }

    pub(crate) fn set_saving(&mut self, saving: bool) {
        self.saving = saving;
        if saving {
            self.save_error = None;
        }
    }

    pub(crate) fn set_save_error(&mut self, message: String) {
        self.saving = false;
        self.save_error = Some(message);
    }

    /// Install a new pending icon, returning the one it supersedes
    pub(crate) fn replace_pending(&mut self, pending: PendingIcon<F>) -> Option<PendingIcon<F>> {
        self.pending_icon.replace(pending)
    }

    /// Hand the pending icon over to the caller; the draft no longer releases it
    pub(crate) fn take_pending(&mut self) -> Option<PendingIcon<F>> {
        self.pending_icon.take()
    }

    pub fn to_save_request(&self) -> SaveRequest<F>
    where
        F: Clone,
    {
        SaveRequest {
            fields: self.fields.clone(),
            icon: self.pending_icon.clone(),
        }
    }

    /// Release every resource the draft still owns. Safe to call more than once.
    pub fn dispose<P>(&mut self, previews: &P)
    where
        P: PreviewProvider<File = F>,
    {
        if let Some(pending) = self.pending_icon.take() {
            log::debug!("Releasing icon preview {}", pending.preview_url);
            previews.release(&pending.preview_url);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_feature::icon::IconCandidate;
    use crate::domain::a001_feature::testing::{png, seed_features, FakePreviews};

    #[test]
    fn test_draft_copies_record() {
        let features = seed_features();
        let draft: FeatureDraft<IconCandidate> = FeatureDraft::from_feature(&features[1]);
        assert_eq!(draft.fields(), &features[1].to_dto());
        assert_eq!(draft.preview(), None);
        assert!(!draft.has_errors());
        assert!(draft.titles_present());
    }

    #[test]
    fn test_preview_prefers_pending_icon() {
        let mut feature = seed_features().remove(0);
        feature.icon_url = Some("/icons/ac.svg".into());
        let mut draft = FeatureDraft::from_feature(&feature);
        assert_eq!(draft.preview(), Some("/icons/ac.svg"));

        draft.replace_pending(PendingIcon {
            file: png("new.png"),
            preview_url: "blob:new".into(),
        });
        assert_eq!(draft.preview(), Some("blob:new"));
        assert_eq!(
            draft.to_save_request().resolved_icon_url(),
            Some("blob:new".to_string())
        );
    }

    #[test]
    fn test_dispose_releases_once() {
        let previews = FakePreviews::default();
        let file = png("a.png");
        let url = previews.acquire(&file).unwrap();
        let mut draft = FeatureDraft::from_feature(&seed_features()[0]);
        draft.replace_pending(PendingIcon {
            file,
            preview_url: url.clone(),
        });

        draft.dispose(&previews);
        draft.dispose(&previews);
        assert_eq!(previews.released(), vec![url]);
        assert!(previews.live().is_empty());
        assert_eq!(draft.preview(), None);
    }

    #[test]
    fn test_save_request_keeps_existing_icon_without_pending() {
        let mut feature = seed_features().remove(1);
        feature.icon_url = Some("/icons/sofa.png".into());
        let draft: FeatureDraft<IconCandidate> = FeatureDraft::from_feature(&feature);
        let request = draft.to_save_request();
        assert!(request.icon.is_none());
        assert_eq!(request.resolved_icon_url(), Some("/icons/sofa.png".to_string()));
    }
}
