use leptos::prelude::*;

use crate::profile::Icon;

/// Inline stroke icon. Sized and coloured through `class`, drawn in `currentColor`.
#[component]
pub fn IconGlyph(icon: Icon, #[prop(optional, into)] class: String) -> impl IntoView {
    view! {
        <svg
            class=format!("inline-block shrink-0 {class}")
            data-icon=icon.name()
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {icon.paths().iter().map(|d| view! { <path d=*d /> }).collect_view()}
        </svg>
    }
}
