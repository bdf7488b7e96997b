use yew::prelude::*;

use crate::toc::Heading;

#[derive(Properties, PartialEq)]
pub struct TocPanelProps {
    pub headings: Vec<Heading>,
}

/// Sidebar table of contents. Level-3 entries indent under their section.
///
/// Renders nothing when the article has no extractable headings.
#[function_component(TocPanel)]
pub fn toc_panel(props: &TocPanelProps) -> Html {
    if props.headings.is_empty() {
        return Html::default();
    }

    html! {
        <div class={classes!("space-y-4")}>
            <h4 class={classes!(
                "m-0",
                "text-sm",
                "font-semibold",
                "uppercase",
                "tracking-wider",
                "text-[var(--muted)]"
            )}>
                { "Contents" }
            </h4>
            <nav class={classes!("space-y-2")} aria-label="Table of contents">
                { for props.headings.iter().map(|heading| {
                    html! {
                        <a
                            href={format!("#{}", heading.id)}
                            class={classes!(
                                "block",
                                "text-sm",
                                "text-[var(--muted)]",
                                "no-underline",
                                "transition-colors",
                                "hover:text-[var(--primary)]",
                                if heading.level == 3 { "pl-4" } else { "" }
                            )}
                        >
                            { &heading.text }
                        </a>
                    }
                }) }
            </nav>
        </div>
    }
}
