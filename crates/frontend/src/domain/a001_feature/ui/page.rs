use super::details::{FeatureDetails, FeatureDetailsViewModel};
use super::list::{FeatureList, FeatureRow};
use crate::domain::a001_feature::store::FeatureCatalogStore;
use crate::shared::components::ui::Button;
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use crate::shared::notifications::NotificationService;
use contracts::domain::a001_feature::edit_form::FormRules;
use contracts::shared::config::Config;
use leptos::prelude::*;

/// Features screen: owns the edit form and routes list actions into it
#[component]
#[allow(non_snake_case)]
pub fn FeaturesPage() -> impl IntoView {
    let store = use_context::<FeatureCatalogStore>().expect("FeatureCatalogStore not found in context");
    let notifications =
        use_context::<NotificationService>().expect("NotificationService not found in context");
    let config = use_context::<Config>().expect("Config not found in context");

    let vm = FeatureDetailsViewModel::new(store, notifications, FormRules::from_config(&config));

    let rows = Signal::derive(move || store.items().iter().map(FeatureRow::from).collect::<Vec<_>>());

    view! {
        <main class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Features"}</h1>
                </div>
                <div class="header__actions">
                    <Button disabled=true title="Adding features is not available yet">
                        {icon("plus")}
                        {"Add Feature"}
                    </Button>
                </div>
            </div>

            <FeatureList
                rows=rows
                on_edit=Callback::new(move |code| vm.select_for_edit(code))
            />

            <Show when=move || vm.is_open()>
                <ModalFrame
                    on_close=Callback::new(move |_| vm.cancel())
                    can_close=Signal::derive(move || !vm.is_saving())
                    modal_class="feature-details-modal"
                >
                    <FeatureDetails vm=vm />
                </ModalFrame>
            </Show>
        </main>
    }
}
