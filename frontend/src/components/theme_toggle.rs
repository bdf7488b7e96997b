use yew::prelude::*;

use crate::{
    components::icons::{Icon, IconName},
    theme::{use_theme, Theme},
};

#[derive(Properties, PartialEq)]
pub struct ThemeToggleProps {
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ThemeToggle)]
pub fn theme_toggle(props: &ThemeToggleProps) -> Html {
    let ThemeToggleProps { class } = props;
    let context = use_theme();

    let onclick = {
        let toggle = context.toggle.clone();
        Callback::from(move |_| toggle.emit(()))
    };

    let is_dark = context.theme == Theme::Dark;
    let label = if is_dark { "Switch to light mode" } else { "Switch to dark mode" };
    let icon = if is_dark { IconName::Sun } else { IconName::Moon };

    let button_class = classes!(
        "inline-flex",
        "items-center",
        "justify-center",
        "w-10",
        "h-10",
        "rounded-full",
        "border",
        "border-[var(--border)]",
        "bg-transparent",
        "text-[var(--text)]",
        "transition-all",
        "duration-200",
        "hover:bg-[var(--surface-alt)]",
        "hover:text-[var(--primary)]",
        class.clone()
    );

    html! {
        <button
            type="button"
            class={button_class}
            {onclick}
            aria-label={label}
            title={label}
            aria-pressed={is_dark.to_string()}
        >
            <Icon name={icon} size={20} />
            <span class="sr-only">{ label }</span>
        </button>
    }
}
