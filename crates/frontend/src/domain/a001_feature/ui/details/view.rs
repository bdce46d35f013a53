use super::view_model::FeatureDetailsViewModel;
use crate::shared::components::ui::{Button, Input, Select};
use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;
use web_sys::HtmlInputElement;

const ICON_ACCEPT: &str = ".png,.jpg,.jpeg,.svg,image/png,image/jpeg,image/svg+xml";

const STATUS_OPTIONS: &[(&str, &str)] = &[("Active", "Active"), ("Inactive", "Inactive")];

#[component]
pub fn FeatureDetails(vm: FeatureDetailsViewModel) -> impl IntoView {
    let handle_file_select = move |ev: ev::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            vm.select_icon(file);
        }
    };

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        vm.save_command();
    };

    view! {
        <div class="details-container feature-details">
            <div class="details-header">
                <h3>{"Edit feature details"}</h3>
            </div>

            {move || vm.save_error().map(|e| view! { <div class="error">{e}</div> })}

            <form class="details-form" on:submit=handle_submit>
                <div class="form__group">
                    <label class="form__label" for="feature-icon">{"Feature Icon"}</label>
                    <div class="icon-picker">
                        <input
                            id="feature-icon"
                            class="form__input"
                            type="file"
                            accept=ICON_ACCEPT
                            disabled=move || vm.is_saving()
                            on:change=handle_file_select
                        />
                        {move || match vm.preview() {
                            Some(url) => view! {
                                <img class="icon-picker__preview" src=url alt="preview" />
                            }.into_any(),
                            None => view! {
                                <span class="icon-picker__placeholder">{icon("image")}</span>
                            }.into_any(),
                        }}
                    </div>
                    <p class="form__hint">{vm.icon_hint()}</p>
                </div>

                <Input
                    id="feature-english-title"
                    label="Feature Name (English)"
                    value=Signal::derive(move || vm.english_title())
                    on_input=Callback::new(move |v: String| vm.change_english(v))
                    error=Signal::derive(move || vm.english_error())
                    hint=vm.english_hint()
                    placeholder="e.g. Furniture"
                    disabled=Signal::derive(move || vm.is_saving())
                />

                <Input
                    id="feature-arabic-title"
                    label="Feature Name (Arabic)"
                    value=Signal::derive(move || vm.arabic_title())
                    on_input=Callback::new(move |v: String| vm.change_arabic(v))
                    error=Signal::derive(move || vm.arabic_error())
                    hint=vm.arabic_hint()
                    placeholder="أثاث"
                    dir="rtl"
                    disabled=Signal::derive(move || vm.is_saving())
                />

                <Select
                    id="feature-status"
                    label="Status"
                    value=Signal::derive(move || {
                        if vm.is_active() { "Active".to_string() } else { "Inactive".to_string() }
                    })
                    on_change=Callback::new(move |v: String| vm.change_status(v == "Active"))
                    options=STATUS_OPTIONS
                    disabled=Signal::derive(move || vm.is_saving())
                />

                <div class="details-actions">
                    <Button
                        variant="secondary"
                        disabled=Signal::derive(move || vm.is_saving())
                        on_click=Callback::new(move |_| vm.cancel())
                    >
                        {icon("cancel")}
                        {"Cancel"}
                    </Button>
                    <Button
                        button_type="submit"
                        disabled=Signal::derive(move || !vm.can_submit())
                    >
                        {icon("save")}
                        {move || if vm.is_saving() { "Saving..." } else { "Save Changes" }}
                    </Button>
                </div>
            </form>
        </div>
    }
}
