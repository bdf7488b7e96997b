use web_sys::window;
use yew::prelude::*;

const STORAGE_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    fn from_str(value: &str) -> Option<Theme> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

/// Theme state handed down through context: current value plus the single
/// setter. Components never touch storage or the document directly.
#[derive(Clone, PartialEq)]
pub struct ThemeContext {
    pub theme: Theme,
    pub toggle: Callback<()>,
}

/// Persisted preference if present, else the system color scheme.
fn initial_theme() -> Theme {
    let Some(win) = window() else {
        return Theme::Light;
    };

    let stored = win
        .local_storage()
        .ok()
        .flatten()
        .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten())
        .and_then(|value| Theme::from_str(&value));
    if let Some(theme) = stored {
        return theme;
    }

    let prefers_dark = win
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false);
    if prefers_dark {
        Theme::Dark
    } else {
        Theme::Light
    }
}

/// Reflect the theme onto `<html data-theme>` and persist it.
fn apply_theme(theme: Theme) {
    let Some(win) = window() else { return };

    if let Some(root) = win.document().and_then(|doc| doc.document_element()) {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
    if let Ok(Some(storage)) = win.local_storage() {
        let _ = storage.set_item(STORAGE_KEY, theme.as_str());
    }
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    pub children: Children,
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let theme = use_state(initial_theme);

    {
        let theme = *theme;
        use_effect_with(theme, move |theme| {
            apply_theme(*theme);
            || ()
        });
    }

    let toggle = {
        let theme = theme.clone();
        Callback::from(move |_| theme.set(theme.toggled()))
    };

    let context = ThemeContext { theme: *theme, toggle };

    html! {
        <ContextProvider<ThemeContext> {context}>
            { props.children.clone() }
        </ContextProvider<ThemeContext>>
    }
}

/// Current theme context; panics only if used outside [`ThemeProvider`].
#[hook]
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeProvider is mounted at the app root")
}
