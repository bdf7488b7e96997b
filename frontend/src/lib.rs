//! Inkly web client: pages, components, and the scroll/theme/animation
//! subsystems behind them.
//!
//! The crate is a library plus a thin binary so the presentation-free parts
//! (data formatting, heading extraction, scroll state) stay testable off the
//! browser.

pub mod animations;
pub mod api;
pub mod components;
pub mod config;
pub mod format;
pub mod pages;
pub mod palette;
pub mod router;
pub mod scroll;
pub mod theme;
pub mod toc;

use yew::prelude::*;

use crate::theme::ThemeProvider;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <ThemeProvider>
            <router::AppRouter />
        </ThemeProvider>
    }
}

/// Mount the application onto the document body.
pub fn run() {
    yew::Renderer::<App>::new().render();
}
