//! Remaining-quota bar

use antigravity_types::QuotaAppearance;
use leptos::prelude::*;

/// Class for the percentage label of a quota row.
pub fn value_class(appearance: QuotaAppearance) -> String {
    format!("quota-value quota-value--{}", appearance.as_str())
}

/// Class for the bar fill of a quota row.
pub fn fill_class(appearance: QuotaAppearance) -> String {
    format!("quota-fill quota-fill--{}", appearance.as_str())
}

#[component]
pub fn QuotaBar(
    /// CSS width of the fill, e.g. "42%"
    #[prop(into)]
    width: String,
    appearance: QuotaAppearance,
) -> impl IntoView {
    view! {
        <div class="quota-bar">
            <div class=fill_class(appearance) style=format!("width: {}", width)></div>
        </div>
    }
}
