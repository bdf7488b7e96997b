use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    components::{
        icons::{Icon, IconName},
        newsletter_form::NewsletterForm,
    },
    router::Route,
};

const EXPLORE_LINKS: [(&str, Route); 3] = [
    ("Home", Route::Home),
    ("All Articles", Route::Blogs),
    ("Search", Route::Search),
];

const COMPANY_LINKS: [(&str, &str); 4] = [
    ("About Us", "/about"),
    ("Our Writers", "/writers"),
    ("Careers", "/careers"),
    ("Contact", "/contact"),
];

const LEGAL_LINKS: [(&str, &str); 3] = [
    ("Privacy Policy", "/privacy"),
    ("Terms of Service", "/terms"),
    ("Cookie Policy", "/cookies"),
];

const SOCIAL_LINKS: [(IconName, &str, &str); 4] = [
    (IconName::Github, "https://github.com", "GitHub"),
    (IconName::Twitter, "https://twitter.com", "Twitter"),
    (IconName::Mail, "mailto:contact@inkly.com", "Email"),
    (IconName::Linkedin, "https://linkedin.com", "LinkedIn"),
];

fn scroll_to_top(e: MouseEvent) {
    e.prevent_default();
    if let Some(win) = web_sys::window() {
        let options = web_sys::ScrollToOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        options.set_top(0.0);
        let _ = win.scroll_with_scroll_to_options(&options);
    }
}

fn link_column<I: IntoIterator<Item = Html>>(title: &str, items: I) -> Html {
    html! {
        <div class={classes!("space-y-4")}>
            <h4 class={classes!("m-0", "font-semibold", "text-[var(--text)]")}>{ title.to_string() }</h4>
            <ul class={classes!("list-none", "m-0", "p-0", "space-y-3")}>
                { for items.into_iter().map(|item| html! { <li>{ item }</li> }) }
            </ul>
        </div>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = js_sys::Date::new_0().get_full_year();

    let plain_link = |label: &str, href: &str| {
        html! {
            <a
                href={href.to_string()}
                class={classes!(
                    "text-[var(--muted)]",
                    "no-underline",
                    "transition-colors",
                    "hover:text-[var(--primary)]"
                )}
            >
                { label.to_string() }
            </a>
        }
    };

    html! {
        <footer class={classes!("relative", "overflow-hidden", "border-t", "border-[var(--border)]")}>
            // Newsletter band
            <div class={classes!("footer-newsletter", "border-b", "border-[var(--border)]")}>
                <div class={classes!("container", "mx-auto", "px-4", "py-16")}>
                    <div class={classes!("max-w-2xl", "mx-auto", "text-center", "space-y-6")}>
                        <span class={classes!(
                            "inline-flex",
                            "items-center",
                            "gap-2",
                            "px-4",
                            "py-2",
                            "rounded-full",
                            "bg-[var(--primary-tint)]",
                            "text-[var(--primary)]",
                            "text-sm",
                            "font-medium"
                        )}>
                            <Icon name={IconName::Sparkles} size={16} />
                            { "Join Our Community" }
                        </span>
                        <h3 class={classes!("m-0", "text-3xl", "md:text-4xl", "font-serif", "font-bold")}>
                            { "Stay Inspired, Stay Informed" }
                        </h3>
                        <p class={classes!("m-0", "text-lg", "text-[var(--muted)]", "max-w-lg", "mx-auto")}>
                            { "Get the best stories, insights, and creative inspiration delivered to your inbox every week." }
                        </p>
                        <NewsletterForm />
                    </div>
                </div>
            </div>

            <div class={classes!("bg-[var(--surface-alt)]")}>
                <div class={classes!("container", "mx-auto", "px-4", "py-16")}>
                    <div class={classes!("grid", "grid-cols-1", "md:grid-cols-2", "lg:grid-cols-6", "gap-12")}>
                        // Brand
                        <div class={classes!("lg:col-span-2", "space-y-6")}>
                            <Link<Route> to={Route::Home} classes={classes!(
                                "inline-block",
                                "font-serif",
                                "text-3xl",
                                "font-bold",
                                "no-underline",
                                "text-[var(--text)]"
                            )}>
                                { "Inkly" }
                            </Link<Route>>
                            <p class={classes!("m-0", "text-[var(--muted)]", "leading-relaxed")}>
                                { "Inkly is a modern publishing platform where writers share their \
                                   stories and readers discover inspiring content. Join thousands \
                                   of creative minds." }
                            </p>
                            <div class={classes!("grid", "grid-cols-3", "gap-4", "pt-4")}>
                                { for [
                                    (IconName::BookOpen, "10K+", "Articles"),
                                    (IconName::Users, "50K+", "Readers"),
                                    (IconName::PenTool, "500+", "Writers"),
                                ].into_iter().map(|(icon, value, label)| html! {
                                    <div class={classes!(
                                        "text-center",
                                        "p-3",
                                        "rounded-xl",
                                        "bg-[var(--surface)]"
                                    )}>
                                        <span class={classes!("text-[var(--primary)]")}>
                                            <Icon name={icon} size={20} />
                                        </span>
                                        <p class={classes!("m-0", "text-lg", "font-bold")}>{ value }</p>
                                        <p class={classes!("m-0", "text-xs", "text-[var(--muted)]")}>{ label }</p>
                                    </div>
                                }) }
                            </div>
                        </div>

                        { link_column("Explore", EXPLORE_LINKS.into_iter().map(|(label, route)| html! {
                            <Link<Route> to={route} classes={classes!(
                                "text-[var(--muted)]",
                                "no-underline",
                                "transition-colors",
                                "hover:text-[var(--primary)]"
                            )}>
                                { label }
                            </Link<Route>>
                        })) }

                        { link_column("Company", COMPANY_LINKS.into_iter().map(|(label, href)| plain_link(label, href))) }
                        { link_column("Legal", LEGAL_LINKS.into_iter().map(|(label, href)| plain_link(label, href))) }

                        <div class={classes!("space-y-4")}>
                            <h4 class={classes!("m-0", "font-semibold", "text-[var(--text)]")}>{ "Connect" }</h4>
                            <div class={classes!("flex", "flex-wrap", "gap-3")}>
                                { for SOCIAL_LINKS.into_iter().map(|(icon, href, label)| html! {
                                    <a
                                        href={href}
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        aria-label={label}
                                        class={classes!(
                                            "w-10",
                                            "h-10",
                                            "rounded-full",
                                            "bg-[var(--surface)]",
                                            "border",
                                            "border-[var(--border)]",
                                            "flex",
                                            "items-center",
                                            "justify-center",
                                            "text-[var(--muted)]",
                                            "transition-colors",
                                            "hover:text-[var(--primary)]",
                                            "hover:border-[var(--primary)]"
                                        )}
                                    >
                                        <Icon name={icon} size={20} />
                                    </a>
                                }) }
                            </div>
                            <p class={classes!("m-0", "text-sm", "text-[var(--muted)]", "pt-2")}>
                                { "Follow us for updates and creative inspiration." }
                            </p>
                        </div>
                    </div>
                </div>

                // Bottom bar
                <div class={classes!("border-t", "border-[var(--border)]")}>
                    <div class={classes!("container", "mx-auto", "px-4", "py-6")}>
                        <div class={classes!(
                            "flex",
                            "flex-col",
                            "md:flex-row",
                            "items-center",
                            "justify-between",
                            "gap-4"
                        )}>
                            <p class={classes!("m-0", "text-sm", "text-[var(--muted)]")}>
                                { format!("© {} Inkly. All rights reserved.", year) }
                            </p>
                            <button
                                type="button"
                                onclick={Callback::from(scroll_to_top)}
                                class={classes!(
                                    "group",
                                    "inline-flex",
                                    "items-center",
                                    "gap-2",
                                    "text-sm",
                                    "text-[var(--muted)]",
                                    "bg-transparent",
                                    "border-none",
                                    "cursor-pointer",
                                    "transition-colors",
                                    "hover:text-[var(--primary)]"
                                )}
                            >
                                { "Back to top" }
                                <span class={classes!(
                                    "w-8",
                                    "h-8",
                                    "rounded-full",
                                    "bg-[var(--primary-tint)]",
                                    "flex",
                                    "items-center",
                                    "justify-center",
                                    "transition-all",
                                    "group-hover:bg-[var(--primary)]",
                                    "group-hover:text-white"
                                )}>
                                    <Icon name={IconName::ChevronUp} size={16} />
                                </span>
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </footer>
    }
}
