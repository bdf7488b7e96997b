use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    components::icons::{Icon, IconName},
    router::Route,
};

#[derive(Properties, Clone, PartialEq)]
pub struct PlaceholderPageProps {
    /// Human-readable name of the section, e.g. "Search".
    pub feature: AttrValue,
}

/// Stand-in for sections the client links to but does not ship yet. Keeps
/// the routes stable so navigation and deep links survive the rollout.
#[function_component(PlaceholderPage)]
pub fn placeholder_page(props: &PlaceholderPageProps) -> Html {
    html! {
        <main class={classes!(
            "min-h-[70vh]",
            "flex",
            "items-center",
            "justify-center",
            "px-4",
            "bg-[var(--bg)]"
        )}>
            <div class={classes!(
                "max-w-md",
                "w-full",
                "text-center",
                "rounded-2xl",
                "border",
                "border-[var(--border)]",
                "bg-[var(--surface)]",
                "py-12",
                "px-8",
                "space-y-6"
            )}>
                <span class={classes!(
                    "inline-flex",
                    "p-4",
                    "rounded-full",
                    "bg-[var(--primary-tint)]",
                    "text-[var(--primary)]"
                )}>
                    <Icon name={IconName::Sparkles} size={32} />
                </span>
                <h1 class={classes!("m-0", "text-2xl", "font-serif", "font-bold")}>
                    { format!("{} is coming soon", props.feature) }
                </h1>
                <p class={classes!("m-0", "text-[var(--muted)]")}>
                    { "We are still working on this part of Inkly. Check back shortly." }
                </p>
                <Link<Route> to={Route::Home} classes={classes!(
                    "inline-flex",
                    "items-center",
                    "gap-2",
                    "rounded-full",
                    "px-6",
                    "py-2",
                    "bg-[var(--primary)]",
                    "text-white",
                    "no-underline",
                    "hover:opacity-90"
                )}>
                    <Icon name={IconName::ArrowLeft} size={16} />
                    { "Back to Home" }
                </Link<Route>>
            </div>
        </main>
    }
}
