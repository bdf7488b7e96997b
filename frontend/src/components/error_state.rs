use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    components::icons::{Icon, IconName},
    router::Route,
};

#[derive(Properties, PartialEq)]
pub struct ErrorStateProps {
    pub title: AttrValue,
    pub message: AttrValue,
    /// Offer back/home escapes. Off for inline section errors.
    #[prop_or(true)]
    pub with_navigation: bool,
}

/// Recoverable error panel used by the page controllers. Both the not-found
/// and the generic failure states render through this; only the copy differs.
#[function_component(ErrorState)]
pub fn error_state(props: &ErrorStateProps) -> Html {
    let navigator = use_navigator();

    let go_back = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        if let Some(win) = web_sys::window() {
            if let Ok(history) = win.history() {
                let _ = history.back();
            }
        }
    });

    let go_home = {
        let navigator = navigator.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if let Some(nav) = navigator.as_ref() {
                nav.push(&Route::Home);
            }
        })
    };

    html! {
        <div class={classes!("flex", "items-center", "justify-center", "min-h-[60vh]", "px-4")}>
            <div class={classes!(
                "w-full",
                "max-w-md",
                "rounded-2xl",
                "border",
                "border-[var(--border)]",
                "bg-[var(--surface)]",
                "text-center",
                "py-12",
                "px-8",
                "space-y-6"
            )}>
                <div class={classes!(
                    "w-16",
                    "h-16",
                    "mx-auto",
                    "rounded-full",
                    "bg-[var(--danger-tint)]",
                    "flex",
                    "items-center",
                    "justify-center",
                    "text-[var(--danger)]"
                )}>
                    <Icon name={IconName::AlertCircle} size={32} />
                </div>
                <div class={classes!("space-y-2")}>
                    <h3 class={classes!("m-0", "text-xl", "font-serif", "font-bold")}>
                        { props.title.clone() }
                    </h3>
                    <p class={classes!("m-0", "text-[var(--muted)]")}>
                        { props.message.clone() }
                    </p>
                </div>
                {
                    if props.with_navigation {
                        html! {
                            <div class={classes!("flex", "gap-3", "justify-center")}>
                                <button
                                    type="button"
                                    class={classes!(
                                        "inline-flex",
                                        "items-center",
                                        "gap-2",
                                        "rounded-full",
                                        "px-6",
                                        "py-2",
                                        "border",
                                        "border-[var(--border)]",
                                        "bg-transparent",
                                        "text-[var(--text)]",
                                        "hover:bg-[var(--surface-alt)]"
                                    )}
                                    onclick={go_back}
                                >
                                    <Icon name={IconName::ArrowLeft} size={16} />
                                    { "Go Back" }
                                </button>
                                <button
                                    type="button"
                                    class={classes!(
                                        "rounded-full",
                                        "px-6",
                                        "py-2",
                                        "bg-[var(--primary)]",
                                        "text-white",
                                        "border-none",
                                        "hover:opacity-90"
                                    )}
                                    onclick={go_home}
                                >
                                    { "Go Home" }
                                </button>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        </div>
    }
}
