//! UI Components

use leptos::prelude::*;

use checkout_core::CardBrand;

/// Transient notification banner, dismissible by click
#[component]
pub fn Snackbar(
    visible: ReadSignal<bool>,
    set_visible: WriteSignal<bool>,
    severity: &'static str,
    message: &'static str,
) -> impl IntoView {
    view! {
        <Show when=move || visible.get()>
            <div class=format!("snackbar snackbar-{severity}") role="alert">
                <span class="snackbar-message">{message}</span>
                <button class="snackbar-dismiss" on:click=move |_| set_visible.set(false)>
                    "✕"
                </button>
            </div>
        </Show>
    }
}

/// Brand badge shown inside the card-number input
#[component]
pub fn BrandBadge(brand: Signal<Option<CardBrand>>) -> impl IntoView {
    view! {
        <span class="brand-badge">
            {move || brand.get().map(CardBrand::label)}
        </span>
    }
}
