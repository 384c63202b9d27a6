//! Button component with variants

use leptos::prelude::*;

#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
}

impl ButtonVariant {
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn--primary",
            ButtonVariant::Secondary => "btn--secondary",
        }
    }
}

#[component]
pub fn Button(
    /// Button text content
    #[prop(into)]
    text: String,
    /// Button variant
    #[prop(optional)]
    variant: ButtonVariant,
    /// Stretch to the container width
    #[prop(optional)]
    block: bool,
    /// Click handler
    on_click: impl Fn() + 'static,
) -> impl IntoView {
    let class = if block {
        format!("btn {} btn--block", variant.class())
    } else {
        format!("btn {}", variant.class())
    };

    view! {
        <button type="button" class=class on:click=move |_| on_click()>
            {text}
        </button>
    }
}
