use yew::prelude::*;

use crate::{
    components::icons::{Icon, IconName},
    scroll::use_scroll_affordances,
};

/// Floating control that smooth-scrolls back to the top. Appears only once
/// the reader is deep enough into the page (past 500px).
#[function_component(ScrollToTopButton)]
pub fn scroll_to_top_button() -> Html {
    let affordances = use_scroll_affordances();

    let onclick = Callback::from(|e: MouseEvent| {
        e.prevent_default();

        if let Some(window) = web_sys::window() {
            let options = web_sys::ScrollToOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            options.set_top(0.0);
            options.set_left(0.0);

            let _ = window.scroll_with_scroll_to_options(&options);
        }
    });

    if !affordances.show_back_to_top {
        return Html::default();
    }

    html! {
        <button
            class={classes!(
                "fixed",
                "bottom-8",
                "right-8",
                "z-50",
                "w-12",
                "h-12",
                "rounded-full",
                "bg-[var(--primary)]",
                "text-white",
                "shadow-lg",
                "flex",
                "items-center",
                "justify-center",
                "transition-transform",
                "hover:scale-110"
            )}
            onclick={onclick}
            aria-label="Back to top"
            title="Back to top"
        >
            <Icon name={IconName::ChevronUp} size={24} />
        </button>
    }
}
