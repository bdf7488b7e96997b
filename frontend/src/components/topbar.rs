use serde::{Deserialize, Serialize};
use web_sys::HtmlInputElement;
use yew::{events::InputEvent, prelude::*};
use yew_router::prelude::*;

use crate::{
    components::{
        icons::{Icon, IconName},
        theme_toggle::ThemeToggle,
    },
    router::Route,
    scroll::use_scroll_affordances,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: Option<String>,
}

/// Fixed site header.
///
/// Restyles once the page scrolls past the resting zone and slides out of
/// view on sustained downward scrolling, reappearing the moment the reader
/// scrolls back up.
#[function_component(Topbar)]
pub fn topbar() -> Html {
    let navigator = use_navigator();
    let affordances = use_scroll_affordances();
    let search_query = use_state(String::new);

    let on_search_input = {
        let search_query = search_query.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                search_query.set(target.value());
            }
        })
    };

    let submit_search = {
        let search_query = search_query.clone();
        let navigator = navigator.clone();
        Callback::from(move |()| {
            let query = search_query.trim().to_string();
            if query.is_empty() {
                return;
            }
            if let Some(navigator) = navigator.as_ref() {
                let _ = navigator
                    .push_with_query(&Route::Search, &SearchQuery { q: Some(query) });
            }
        })
    };

    let on_search_keypress = {
        let submit_search = submit_search.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                submit_search.emit(());
            }
        })
    };

    let on_search_click = {
        let submit_search = submit_search.clone();
        Callback::from(move |_: MouseEvent| submit_search.emit(()))
    };

    let header_class = classes!(
        "topbar",
        "fixed",
        "top-0",
        "left-0",
        "right-0",
        "z-50",
        "transition-all",
        "duration-300",
        "ease-out",
        if affordances.scrolled { "topbar--scrolled" } else { "" },
        if affordances.hidden { "topbar--hidden" } else { "" }
    );

    html! {
        <header class={header_class}>
            <div class={classes!(
                "flex",
                "items-center",
                "justify-between",
                "w-full",
                "px-4",
                "md:px-6",
                "h-16",
                "md:h-20"
            )}>
                <Link<Route> to={Route::Home} classes={classes!(
                    "font-serif",
                    "text-2xl",
                    "font-bold",
                    "no-underline",
                    "text-[var(--text)]"
                )}>
                    { "Inkly" }
                </Link<Route>>

                <div class={classes!("hidden", "md:flex", "flex-1", "justify-center", "max-w-xl", "mx-8")}>
                    <div class={classes!(
                        "flex",
                        "items-center",
                        "gap-2",
                        "w-full",
                        "rounded-full",
                        "border",
                        "border-[var(--border)]",
                        "bg-[var(--surface)]",
                        "px-4",
                        "py-2"
                    )}>
                        <Icon name={IconName::Search} size={16} class={classes!("text-[var(--muted)]")} />
                        <input
                            type="search"
                            class={classes!(
                                "flex-1",
                                "bg-transparent",
                                "border-none",
                                "outline-none",
                                "text-sm",
                                "text-[var(--text)]"
                            )}
                            placeholder="Search articles, topics, authors..."
                            value={(*search_query).clone()}
                            oninput={on_search_input}
                            onkeypress={on_search_keypress}
                        />
                        <button
                            type="button"
                            class={classes!("sr-only")}
                            onclick={on_search_click}
                        >
                            { "Search" }
                        </button>
                    </div>
                </div>

                <div class={classes!("flex", "items-center", "gap-2", "md:gap-4")}>
                    <ThemeToggle />
                    <Link<Route> to={Route::Login} classes={classes!(
                        "inline-flex",
                        "items-center",
                        "gap-2",
                        "rounded-full",
                        "px-6",
                        "py-2",
                        "bg-[var(--primary)]",
                        "text-white",
                        "no-underline",
                        "shadow-lg",
                        "transition-all",
                        "hover:opacity-90"
                    )}>
                        <Icon name={IconName::LogIn} size={16} />
                        <span class={classes!("hidden", "sm:inline")}>{ "Sign In" }</span>
                    </Link<Route>>
                </div>
            </div>
        </header>
    }
}
