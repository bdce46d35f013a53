use super::model::{BrowserPreviews, IconFile};
use crate::domain::a001_feature::store::FeatureCatalogStore;
use crate::shared::notifications::NotificationService;
use contracts::domain::a001_feature::aggregate::FeatureCode;
use contracts::domain::a001_feature::catalog::FeatureSaver;
use contracts::domain::a001_feature::draft::FeatureDraft;
use contracts::domain::a001_feature::edit_form::{EditForm, FormRules};
use contracts::domain::a001_feature::icon::size_limit_label;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// ViewModel for the feature edit form
#[derive(Clone, Copy)]
pub struct FeatureDetailsViewModel {
    pub form: RwSignal<EditForm<BrowserPreviews>, LocalStorage>,
    store: FeatureCatalogStore,
    notifications: NotificationService,
}

impl FeatureDetailsViewModel {
    pub fn new(
        store: FeatureCatalogStore,
        notifications: NotificationService,
        rules: FormRules,
    ) -> Self {
        Self {
            form: RwSignal::new_local(EditForm::with_rules(BrowserPreviews, rules)),
            store,
            notifications,
        }
    }

    fn read<R: Default>(&self, f: impl FnOnce(&FeatureDraft<IconFile>) -> R) -> R {
        self.form.with(|form| form.draft().map(f).unwrap_or_default())
    }

    pub fn is_open(&self) -> bool {
        self.form.with(|f| f.is_open())
    }

    pub fn english_title(&self) -> String {
        self.read(|d| d.fields().english_title.clone())
    }

    pub fn arabic_title(&self) -> String {
        self.read(|d| d.fields().arabic_title.clone())
    }

    pub fn is_active(&self) -> bool {
        self.read(|d| d.fields().active)
    }

    pub fn preview(&self) -> Option<String> {
        self.read(|d| d.preview().map(str::to_string))
    }

    pub fn english_error(&self) -> Option<String> {
        self.read(|d| d.english_error().map(|e| e.message.clone()))
    }

    pub fn arabic_error(&self) -> Option<String> {
        self.read(|d| d.arabic_error().map(|e| e.message.clone()))
    }

    pub fn save_error(&self) -> Option<String> {
        self.read(|d| d.save_error().map(str::to_string))
    }

    pub fn is_saving(&self) -> bool {
        self.read(|d| d.is_saving())
    }

    pub fn can_submit(&self) -> bool {
        self.form.with(|f| f.can_submit())
    }

    pub fn english_hint(&self) -> String {
        self.form.with_untracked(|f| f.rules().english.hint())
    }

    pub fn arabic_hint(&self) -> String {
        self.form.with_untracked(|f| f.rules().arabic.hint())
    }

    pub fn icon_hint(&self) -> String {
        let max_bytes = self.form.with_untracked(|f| f.rules().icon.max_bytes);
        format!("JPG/PNG/SVG, max {}.", size_limit_label(max_bytes))
    }

    /// Open the form on a record of the catalog
    pub fn select_for_edit(&self, code: FeatureCode) {
        let store = self.store;
        let opened = self
            .form
            .try_update(|f| store.select_for_edit(&code, f))
            .unwrap_or(false);
        if !opened {
            self.notifications
                .error(format!("Feature {} is no longer available", code));
        }
    }

    pub fn change_english(&self, value: String) {
        self.form.update(|f| f.change_english(&value));
    }

    pub fn change_arabic(&self, value: String) {
        self.form.update(|f| f.change_arabic(&value));
    }

    pub fn change_status(&self, active: bool) {
        self.form.update(|f| f.change_status(active));
    }

    pub fn select_icon(&self, file: web_sys::File) {
        let name = file.name();
        if let Some(Err(rejection)) = self.form.try_update(|f| f.select_icon(IconFile(file))) {
            log::warn!("Icon {} rejected: {}", name, rejection);
            self.notifications.error(rejection.to_string());
        }
    }

    pub fn cancel(&self) {
        if self.is_saving() {
            return;
        }
        self.form.update(|f| f.cancel());
    }

    /// Validate and save; the form closes once the store has committed the record
    pub fn save_command(&self) {
        let request = match self.form.try_update(|f| f.begin_submit()) {
            Some(Ok(request)) => request,
            Some(Err(rejected)) => {
                log::debug!("Submit rejected: {}", rejected);
                return;
            }
            None => return,
        };

        let form = self.form;
        let store = self.store;
        let notifications = self.notifications;
        spawn_local(async move {
            let outcome = store.save(request).await;
            match &outcome {
                Ok(feature) => {
                    log::info!("Feature {} saved", feature.code);
                    notifications.success(format!("Feature {} saved", feature.code));
                }
                Err(e) => log::error!("Failed to save feature: {}", e),
            }
            if form.try_update(|f| f.finish_submit(outcome)).is_none() {
                log::debug!("Edit form was disposed before the save finished");
            }
        });
    }
}
