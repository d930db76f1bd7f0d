//! Main App Component

use leptos::prelude::*;

use crate::form::CardForm;

/// Order rendered by the standalone widget build
const DEMO_ORDER_ID: &str = "b222011d-0048-4376-99f3-5851d7f74b28";

/// Static theme configuration passed down to the widget
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    /// Accent color for focused inputs
    pub primary: &'static str,

    /// Border color for invalid inputs
    pub error: &'static str,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: "#1976d2",
            error: "#d32f2f",
        }
    }
}

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="app">
            <CardForm order_id=DEMO_ORDER_ID.to_string() theme=Theme::default() />
        </main>
    }
}
