use crate::domain::a001_feature::store::FeatureCatalogStore;
use crate::domain::a001_feature::ui::page::FeaturesPage;
use crate::shared::config::load_app_config;
use crate::shared::notifications::{NotificationHost, NotificationService};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = load_app_config();

    // The catalog store is the only write path to the feature collection.
    provide_context(FeatureCatalogStore::new(&config));
    provide_context(NotificationService::new());
    provide_context(config);

    view! {
        <FeaturesPage />
        <NotificationHost />
    }
}
