use yew::prelude::*;

use crate::components::icons::{Icon, IconName};

#[derive(Properties, PartialEq, Clone)]
pub struct StatsCardProps {
    pub icon: IconName,
    pub value: String,
    pub label: String,
    /// CSS gradient behind the icon tile.
    #[prop_or_default]
    pub accent: Option<AttrValue>,
}

#[function_component(StatsCard)]
pub fn stats_card(props: &StatsCardProps) -> Html {
    let tile_style = props
        .accent
        .as_ref()
        .map(|accent| format!("background: {};", accent))
        .unwrap_or_default();

    html! {
        <div class={classes!("text-center", "group")} role="status">
            <div
                class={classes!(
                    "inline-flex",
                    "p-4",
                    "rounded-2xl",
                    "mb-4",
                    "text-white",
                    "bg-[var(--primary)]",
                    "transition-transform",
                    "duration-300",
                    "group-hover:scale-110"
                )}
                style={tile_style}
            >
                <Icon name={props.icon} size={32} />
            </div>
            <div class={classes!("space-y-1")}>
                <div class={classes!("text-4xl", "md:text-5xl", "font-bold", "font-serif")}>
                    { props.value.clone() }
                </div>
                <div class={classes!("text-sm", "text-[var(--muted)]", "uppercase", "tracking-wider")}>
                    { props.label.clone() }
                </div>
            </div>
        </div>
    }
}
