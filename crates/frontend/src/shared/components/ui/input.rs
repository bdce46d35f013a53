use leptos::prelude::*;
use web_sys::HtmlInputElement;

/// Text input with label, inline error and hint.
///
/// The value is controlled: whatever `on_input` stores is written back to the
/// element, so handlers may rewrite what the user typed.
#[component]
pub fn Input(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Error shown under the input; replaces the hint while present
    #[prop(optional, into)]
    error: Option<Signal<Option<String>>>,
    /// Hint shown under the input while there is no error
    #[prop(optional, into)]
    hint: MaybeProp<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Text direction: "ltr" (default) or "rtl"
    #[prop(optional, into)]
    dir: MaybeProp<String>,
    /// Disabled state
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// ID for the input element
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let input_dir = move || dir.get().unwrap_or_else(|| "ltr".to_string());
    let current_error = move || error.and_then(|e| e.get());

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=input_id>
                    {l}
                </label>
            })}
            <input
                id=input_id
                class=move || {
                    if current_error().is_some() {
                        "form__input form__input--error"
                    } else {
                        "form__input"
                    }
                }
                type="text"
                dir=input_dir
                prop:value=move || value.get()
                placeholder=input_placeholder
                disabled=move || disabled.get().unwrap_or(false)
                autocomplete="off"
                spellcheck="false"
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                        // Keep the element in sync when the handler dropped characters.
                        let stored = value.get_untracked();
                        let input = event_target::<HtmlInputElement>(&ev);
                        if input.value() != stored {
                            input.set_value(&stored);
                        }
                    }
                }
            />
            {move || match current_error() {
                Some(message) => view! { <p class="form__error">{message}</p> }.into_any(),
                None => view! { <p class="form__hint">{hint.get().unwrap_or_default()}</p> }.into_any(),
            }}
        </div>
    }
}
