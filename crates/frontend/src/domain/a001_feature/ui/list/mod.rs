use crate::shared::components::ui::{Button, FeatureStatusBadge};
use crate::shared::icons::icon;
use contracts::domain::a001_feature::aggregate::{Feature, FeatureCode};
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct FeatureRow {
    pub code: FeatureCode,
    pub english_title: String,
    pub arabic_title: String,
    pub icon_url: Option<String>,
    pub active: bool,
}

impl From<&Feature> for FeatureRow {
    fn from(f: &Feature) -> Self {
        Self {
            code: f.code.clone(),
            english_title: display_or_dash(&f.english_title),
            arabic_title: display_or_dash(&f.arabic_title),
            icon_url: f.icon_url.clone(),
            active: f.active,
        }
    }
}

/// Header titles; the action column has none
const COLUMNS: [&str; 4] = ["UID", "Feature", "Status", ""];

fn display_or_dash(value: &str) -> String {
    if value.trim().is_empty() {
        "-".to_string()
    } else {
        value.to_string()
    }
}

/// Table of features with an edit action per row
#[component]
#[allow(non_snake_case)]
pub fn FeatureList(
    #[prop(into)]
    rows: Signal<Vec<FeatureRow>>,
    on_edit: Callback<FeatureCode>,
) -> impl IntoView {
    view! {
        <div class="table">
            <table class="table__data table--striped">
                <thead class="table__head">
                    <tr>
                        {COLUMNS
                            .iter()
                            .map(|title| view! { <th class="table__header-cell">{*title}</th> })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let rows = rows.get();
                        if rows.is_empty() {
                            return view! {
                                <tr class="table__row">
                                    <td class="table__cell table__cell--empty" colspan=COLUMNS.len().to_string()>{"No features"}</td>
                                </tr>
                            }.into_any();
                        }
                        rows.into_iter().map(|row| {
                            let code = row.code.clone();
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{row.code.to_string()}</td>
                                    <td class="table__cell">
                                        <div class="feature-cell">
                                            {match row.icon_url {
                                                Some(url) => view! {
                                                    <img class="feature-icon" src=url alt="" />
                                                }.into_any(),
                                                None => view! {
                                                    <span class="feature-icon feature-icon--empty"></span>
                                                }.into_any(),
                                            }}
                                            <div class="feature-cell__titles">
                                                <div class="feature-cell__title">{row.english_title}</div>
                                                <div class="feature-cell__subtitle" dir="rtl">{row.arabic_title}</div>
                                            </div>
                                        </div>
                                    </td>
                                    <td class="table__cell">
                                        <FeatureStatusBadge active=row.active />
                                    </td>
                                    <td class="table__cell table__cell--actions">
                                        <Button
                                            variant="secondary"
                                            title="Edit"
                                            on_click=Callback::new(move |_| on_edit.run(code.clone()))
                                        >
                                            {icon("edit")}
                                            {"Edit"}
                                        </Button>
                                    </td>
                                </tr>
                            }
                        }).collect_view().into_any()
                    }}
                </tbody>
            </table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_from_feature() {
        let feature = Feature::new(
            FeatureCode::new("1002"),
            "Furniture".into(),
            "أثاث".into(),
            Some("blob:sofa".into()),
            true,
        );
        let row = FeatureRow::from(&feature);
        assert_eq!(row.code, FeatureCode::new("1002"));
        assert_eq!(row.arabic_title, "أثاث");
        assert_eq!(row.icon_url.as_deref(), Some("blob:sofa"));
        assert!(row.active);
    }

    #[test]
    fn test_blank_titles_render_as_dash() {
        let feature = Feature::new(FeatureCode::new("7"), " ".into(), String::new(), None, false);
        let row = FeatureRow::from(&feature);
        assert_eq!(row.english_title, "-");
        assert_eq!(row.arabic_title, "-");
    }
}
