//! Edit form controller.
//!
//! `Closed --open_with--> Open(draft)`. Inside `Open` the field commands mutate the
//! draft. `cancel` returns to `Closed`. Submitting is split in two because saving is
//! asynchronous: `begin_submit` re-validates and hands out a `SaveRequest`,
//! `finish_submit` applies the outcome of the save.

use super::aggregate::Feature;
use super::catalog::SaveError;
use super::draft::{FeatureDraft, PendingIcon, SaveRequest};
use super::icon::{accept_icon, IconRejection, PreviewProvider};
use super::validation::{ScriptValidator, ARABIC, ENGLISH};
use crate::shared::config::{default_config, Config, IconConfig};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitRejected {
    #[error("The edit form is not open")]
    NotOpen,

    #[error("A save is already in progress")]
    AlreadySaving,

    #[error("Please correct the highlighted fields")]
    Invalid,
}

/// Validators and icon constraints the form applies
#[derive(Debug, Clone)]
pub struct FormRules {
    pub english: ScriptValidator,
    pub arabic: ScriptValidator,
    pub icon: IconConfig,
}

impl FormRules {
    pub fn from_config(config: &Config) -> Self {
        Self {
            english: ENGLISH.with_min_letters(config.titles.min_letters),
            arabic: ARABIC.with_min_letters(config.titles.min_letters),
            icon: config.icon.clone(),
        }
    }
}

impl Default for FormRules {
    fn default() -> Self {
        Self::from_config(&default_config())
    }
}

#[derive(Debug)]
pub enum EditFormState<F> {
    Closed,
    Open(FeatureDraft<F>),
}

pub struct EditForm<P: PreviewProvider> {
    previews: P,
    rules: FormRules,
    state: EditFormState<P::File>,
}

impl<P: PreviewProvider> EditForm<P> {
    pub fn new(previews: P) -> Self {
        Self::with_rules(previews, FormRules::default())
    }

    pub fn with_rules(previews: P, rules: FormRules) -> Self {
        Self {
            previews,
            rules,
            state: EditFormState::Closed,
        }
    }

    pub fn rules(&self) -> &FormRules {
        &self.rules
    }

    pub fn state(&self) -> &EditFormState<P::File> {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, EditFormState::Open(_))
    }

    pub fn draft(&self) -> Option<&FeatureDraft<P::File>> {
        match &self.state {
            EditFormState::Open(draft) => Some(draft),
            EditFormState::Closed => None,
        }
    }

    /// Draft that still accepts field changes
    fn editable(&mut self) -> Option<&mut FeatureDraft<P::File>> {
        match &mut self.state {
            EditFormState::Open(draft) if draft.is_saving() => {
                log::debug!("Ignoring change to feature {} while saving", draft.fields().id);
                None
            }
            EditFormState::Open(draft) => Some(draft),
            EditFormState::Closed => None,
        }
    }

    pub fn open_with(&mut self, feature: &Feature) {
        self.close();
        log::debug!("Editing feature {}", feature.code);
        self.state = EditFormState::Open(FeatureDraft::from_feature(feature));
    }

    pub fn change_english(&mut self, text: &str) {
        let validator = self.rules.english;
        if let Some(draft) = self.editable() {
            let cleaned = validator.sanitize(text);
            let error = validator.validate(&cleaned);
            draft.set_english(cleaned, error);
        }
    }

    pub fn change_arabic(&mut self, text: &str) {
        let validator = self.rules.arabic;
        if let Some(draft) = self.editable() {
            let cleaned = validator.sanitize(text);
            let error = validator.validate(&cleaned);
            draft.set_arabic(cleaned, error);
        }
    }

    pub fn change_status(&mut self, active: bool) {
        if let Some(draft) = self.editable() {
            draft.set_active(active);
        }
    }

    /// Accept a new icon file. A rejected file leaves the draft untouched.
    ///
    /// Fails with `NotEditable` while the form is closed or a save is pending.
    pub fn select_icon(&mut self, file: P::File) -> Result<(), IconRejection> {
        if self.editable().is_none() {
            return Err(IconRejection::NotEditable);
        }
        accept_icon(&file, &self.rules.icon)?;
        let preview_url = self
            .previews
            .acquire(&file)
            .map_err(IconRejection::PreviewUnavailable)?;

        let superseded = match &mut self.state {
            EditFormState::Open(draft) => draft.replace_pending(PendingIcon { file, preview_url }),
            EditFormState::Closed => None,
        };
        if let Some(old) = superseded {
            self.previews.release(&old.preview_url);
        }
        Ok(())
    }

    /// Submit guard for the UI. `begin_submit` validates on its own regardless.
    pub fn can_submit(&self) -> bool {
        match &self.state {
            EditFormState::Open(draft) => {
                !draft.is_saving() && !draft.has_errors() && draft.titles_present()
            }
            EditFormState::Closed => false,
        }
    }

    pub fn begin_submit(&mut self) -> Result<SaveRequest<P::File>, SubmitRejected> {
        let english = self.rules.english;
        let arabic = self.rules.arabic;
        let draft = match &mut self.state {
            EditFormState::Open(draft) => draft,
            EditFormState::Closed => return Err(SubmitRejected::NotOpen),
        };
        if draft.is_saving() {
            return Err(SubmitRejected::AlreadySaving);
        }

        let english_error = english.validate(&draft.fields().english_title);
        let arabic_error = arabic.validate(&draft.fields().arabic_title);
        let valid = english_error.is_none() && arabic_error.is_none();
        draft.set_errors(english_error, arabic_error);
        if !valid {
            return Err(SubmitRejected::Invalid);
        }

        draft.set_saving(true);
        Ok(draft.to_save_request())
    }

    /// Apply the outcome of the save started by `begin_submit`
    pub fn finish_submit(&mut self, outcome: Result<Feature, SaveError>) {
        match outcome {
            Ok(saved) => {
                let state = std::mem::replace(&mut self.state, EditFormState::Closed);
                if let EditFormState::Open(mut draft) = state {
                    if let Some(pending) = draft.take_pending() {
                        // The committed record now owns the preview it adopted.
                        if saved.icon_url.as_deref() != Some(pending.preview_url.as_str()) {
                            self.previews.release(&pending.preview_url);
                        }
                    }
                    draft.dispose(&self.previews);
                }
                log::debug!("Edit form closed after saving feature {}", saved.code);
            }
            Err(err) => {
                if let EditFormState::Open(draft) = &mut self.state {
                    log::warn!("Saving feature {} failed: {}", draft.fields().id, err);
                    draft.set_save_error(err.to_string());
                }
            }
        }
    }

    pub fn cancel(&mut self) {
        self.close();
    }

    fn close(&mut self) {
        if let EditFormState::Open(mut draft) =
            std::mem::replace(&mut self.state, EditFormState::Closed)
        {
            draft.dispose(&self.previews);
        }
    }
}

impl<P: PreviewProvider> Drop for EditForm<P> {
    fn drop(&mut self) {
        self.close();
    }
}
