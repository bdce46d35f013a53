use contracts::domain::a001_feature::aggregate::status_label;
use leptos::prelude::*;

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "primary", "success", "warning", "error", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Badge content
    children: Children,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let variant_class = move || badge_variant_class(variant.get().as_deref());
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("badge {} {}", variant_class(), additional_class())>
            {children()}
        </span>
    }
}

/// Two-state Active / Inactive label of a feature
#[component]
pub fn FeatureStatusBadge(
    #[prop(into)]
    active: Signal<bool>,
) -> impl IntoView {
    let variant = Signal::derive(move || {
        Some(if active.get() { "success" } else { "neutral" }.to_string())
    });

    view! {
        <Badge variant=variant class="badge--status">
            {move || status_label(active.get())}
        </Badge>
    }
}

fn badge_variant_class(variant: Option<&str>) -> &'static str {
    match variant.unwrap_or("neutral") {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_variant_class() {
        assert_eq!(badge_variant_class(Some("success")), "badge--success");
        assert_eq!(badge_variant_class(Some("unknown")), "badge--neutral");
        assert_eq!(badge_variant_class(None), "badge--neutral");
    }
}
