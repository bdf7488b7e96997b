use inkly_shared::Article;
use yew::{prelude::*, virtual_dom::AttrValue};
use yew_router::prelude::{use_navigator, Link};

use crate::{
    api::fetch_article,
    components::{
        blog_card::{BlogCard, CompactCard},
        comment_list::CommentList,
        error_state::ErrorState,
        icons::{Icon, IconName},
        loading_spinner::{LoadingSpinner, SpinnerSize},
        raw_html::RawHtml,
        scroll_to_top_button::ScrollToTopButton,
        share_menu::ShareMenu,
        toc_panel::TocPanel,
    },
    format::format_date,
    palette::category_color,
    router::Route,
    scroll::use_reading_progress,
    toc::extract_headings,
};

#[derive(Properties, Clone, PartialEq)]
pub struct ArticlePageProps {
    pub identifier: String,
}

#[derive(Clone, PartialEq)]
enum FetchState {
    Loading,
    NotFound,
    Failed(String),
    Ready(Box<Article>),
}

/// Scrub API content before it reaches the live document. Heading ids are
/// kept so the table of contents can anchor into the body.
fn sanitize_article_html(content: &str) -> String {
    ammonia::Builder::default()
        .add_generic_attributes(["id"])
        .clean(content)
        .to_string()
}

#[function_component(ArticlePage)]
pub fn article_page(props: &ArticlePageProps) -> Html {
    let navigator = use_navigator();
    let state = use_state(|| FetchState::Loading);
    // Identifier currently shown; responses for any other identifier are
    // stale (the route changed while the fetch was in flight) and dropped.
    let live_identifier = use_mut_ref(String::new);

    {
        let state = state.clone();
        let live_identifier = live_identifier.clone();
        use_effect_with(props.identifier.clone(), move |identifier| {
            let identifier = identifier.clone();
            *live_identifier.borrow_mut() = identifier.clone();
            state.set(FetchState::Loading);

            wasm_bindgen_futures::spawn_local(async move {
                let result = fetch_article(&identifier).await;
                if *live_identifier.borrow() != identifier {
                    return;
                }
                match result {
                    Ok(Some(article)) => state.set(FetchState::Ready(Box::new(article))),
                    Ok(None) => state.set(FetchState::NotFound),
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("Failed to fetch article: {}", e).into(),
                        );
                        state.set(FetchState::Failed(e));
                    },
                }
            });
            || ()
        });
    }

    let progress = use_reading_progress();

    let handle_back = {
        let navigator = navigator.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();

            if let Some(win) = web_sys::window() {
                if let Ok(history) = win.history() {
                    if let Ok(length) = history.length() {
                        if length > 1 {
                            let _ = history.back();
                            return;
                        }
                    }
                }
            }

            if let Some(nav) = navigator.as_ref() {
                nav.push(&Route::Home);
            }
        })
    };

    let body = match &*state {
        FetchState::Loading => html! {
            <div class={classes!("flex", "items-center", "justify-center", "min-h-[60vh]")}>
                <LoadingSpinner size={SpinnerSize::Large} label="Loading article..." />
            </div>
        },
        FetchState::NotFound => html! {
            <ErrorState
                title="Article Not Found"
                message="The article you are looking for does not exist or has been removed."
            />
        },
        FetchState::Failed(message) => html! {
            <ErrorState
                title="Something went wrong"
                message={format!("Failed to load the article. {}", message)}
            />
        },
        FetchState::Ready(article) => render_article(article, &handle_back),
    };

    html! {
        <main class={classes!("min-h-screen", "bg-[var(--bg)]")}>
            // Reading progress bar
            <div class={classes!("reading-progress")} aria-hidden="true">
                <div
                    class={classes!("reading-progress-bar")}
                    style={format!("transform: scaleX({:.4});", progress)}
                />
            </div>

            { body }

            <ScrollToTopButton />
        </main>
    }
}

fn render_article(article: &Article, handle_back: &Callback<MouseEvent>) -> Html {
    let headings = extract_headings(&article.content);
    let content_html = sanitize_article_html(&article.content);
    let color = category_color(article.category_name());
    let hero_image = article.cover_image().map(str::to_string);

    html! {
        <>
            <header class={classes!("relative")}>
                {
                    if let Some(image) = hero_image.clone() {
                        html! {
                            <div class={classes!("relative", "h-[50vh]", "md:h-[60vh]", "overflow-hidden")}>
                                <div
                                    class={classes!("absolute", "inset-0", "bg-cover", "bg-center")}
                                    style={format!("background-image: url({});", image)}
                                />
                                <div class={classes!("absolute", "inset-0", "article-hero-overlay")} />
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }

                <div class={classes!(
                    "container",
                    "mx-auto",
                    "px-4",
                    if hero_image.is_some() { "article-header--overlap" } else { "pt-12" }
                )}>
                    <div class={classes!("max-w-4xl", "mx-auto")}>
                        <div class={classes!("mb-8")}>
                            <button
                                type="button"
                                class={classes!(
                                    "inline-flex",
                                    "items-center",
                                    "gap-2",
                                    "rounded-full",
                                    "px-4",
                                    "py-2",
                                    "border-none",
                                    "bg-transparent",
                                    "text-[var(--text)]",
                                    "cursor-pointer",
                                    "hover:bg-[var(--surface-alt)]"
                                )}
                                onclick={handle_back.clone()}
                            >
                                <Icon name={IconName::ArrowLeft} size={16} />
                                { "Back" }
                            </button>
                        </div>

                        {
                            if let Some(category) = article.category.as_ref() {
                                let name = category.name().unwrap_or("General").to_string();
                                let slug = category
                                    .link_target()
                                    .unwrap_or_default()
                                    .to_string();
                                // Backend-supplied category colors win over the
                                // static palette.
                                let style = match category.color() {
                                    Some(custom) => format!(
                                        "border-color: {custom}; color: {custom}; \
                                         background-color: {custom}15;"
                                    ),
                                    None => color.badge_style(),
                                };
                                html! {
                                    <div class={classes!("mb-6")}>
                                        <Link<Route> to={Route::Category { slug }} classes={classes!("no-underline")}>
                                            <span class={classes!("category-badge", "text-sm", "px-4", "py-1.5")} {style}>
                                                { name }
                                            </span>
                                        </Link<Route>>
                                    </div>
                                }
                            } else {
                                html! {}
                            }
                        }

                        <h1 class={classes!(
                            "m-0",
                            "mb-6",
                            "text-4xl",
                            "md:text-5xl",
                            "font-serif",
                            "font-bold",
                            "leading-tight"
                        )}>
                            { &article.title }
                        </h1>

                        {
                            if let Some(excerpt) = article.excerpt.as_ref().filter(|e| !e.trim().is_empty()) {
                                html! {
                                    <p class={classes!(
                                        "m-0",
                                        "mb-8",
                                        "text-xl",
                                        "text-[var(--muted)]",
                                        "leading-relaxed"
                                    )}>
                                        { excerpt.clone() }
                                    </p>
                                }
                            } else {
                                html! {}
                            }
                        }

                        <div class={classes!(
                            "flex",
                            "flex-col",
                            "md:flex-row",
                            "md:items-center",
                            "md:justify-between",
                            "gap-6",
                            "py-6",
                            "border-y",
                            "border-[var(--border)]"
                        )}>
                            <div class={classes!("flex", "items-center", "gap-4")}>
                                { render_avatar(article, 56) }
                                <div>
                                    <p class={classes!("m-0", "font-semibold", "text-lg")}>
                                        { article.author_name() }
                                    </p>
                                    <div class={classes!("flex", "items-center", "gap-4", "text-sm", "text-[var(--muted)]")}>
                                        <span class={classes!("inline-flex", "items-center", "gap-1")}>
                                            <Icon name={IconName::Calendar} size={16} />
                                            { format_date(article.published_date()) }
                                        </span>
                                        <span class={classes!("inline-flex", "items-center", "gap-1")}>
                                            <Icon name={IconName::Clock} size={16} />
                                            { format!("{} min read", article.reading_minutes()) }
                                        </span>
                                    </div>
                                </div>
                            </div>

                            <div class={classes!("flex", "items-center", "gap-4", "text-sm", "text-[var(--muted)]")}>
                                <span class={classes!("inline-flex", "items-center", "gap-1")}>
                                    <Icon name={IconName::Eye} size={16} />
                                    { article.view_count() }
                                </span>
                                <span class={classes!("inline-flex", "items-center", "gap-1")}>
                                    <Icon name={IconName::Heart} size={16} />
                                    { article.like_count() }
                                </span>
                                <span class={classes!("inline-flex", "items-center", "gap-1")}>
                                    <Icon name={IconName::MessageCircle} size={16} />
                                    { article.comment_count() }
                                </span>
                            </div>
                        </div>
                    </div>
                </div>
            </header>

            <div class={classes!("container", "mx-auto", "px-4", "py-12")}>
                <div class={classes!("flex", "gap-12", "max-w-7xl", "mx-auto")}>
                    // Sidebar: share rail + table of contents
                    <aside class={classes!("hidden", "lg:block", "w-64", "shrink-0")}>
                        <div class={classes!("sticky", "top-24", "space-y-8")}>
                            <div class={classes!("space-y-4")}>
                                <h4 class={classes!(
                                    "m-0",
                                    "text-sm",
                                    "font-semibold",
                                    "uppercase",
                                    "tracking-wider",
                                    "text-[var(--muted)]"
                                )}>
                                    { "Share" }
                                </h4>
                                <ShareMenu title={article.title.clone()} vertical={true} />
                            </div>
                            <TocPanel headings={headings.clone()} />
                        </div>
                    </aside>

                    <article class={classes!("flex-1", "max-w-4xl", "min-w-0")}>
                        <RawHtml
                            html={AttrValue::from(content_html)}
                            class={classes!("article-content", "prose")}
                        />

                        {
                            if article.tags.is_empty() {
                                html! {}
                            } else {
                                html! {
                                    <div class={classes!("mt-12", "pt-8", "border-t", "border-[var(--border)]")}>
                                        <div class={classes!("flex", "items-center", "gap-2", "flex-wrap")}>
                                            <span class={classes!("text-[var(--muted)]")}>
                                                <Icon name={IconName::Hash} size={20} />
                                            </span>
                                            { for article.tags.iter().map(|tag| html! {
                                                <span class={classes!(
                                                    "rounded-full",
                                                    "px-4",
                                                    "py-1",
                                                    "text-sm",
                                                    "bg-[var(--surface-alt)]",
                                                    "text-[var(--muted)]"
                                                )}>
                                                    { tag.clone() }
                                                </span>
                                            }) }
                                        </div>
                                    </div>
                                }
                            }
                        }

                        // Share actions repeated for narrow viewports
                        <div class={classes!("lg:hidden", "mt-8")}>
                            <ShareMenu title={article.title.clone()} />
                        </div>

                        { render_author_bio(article) }

                        <CommentList comments={article.comment_list().to_vec()} />

                        {
                            if article.related_articles.is_empty() {
                                html! {}
                            } else {
                                html! {
                                    <section class={classes!("mt-16")}>
                                        <h3 class={classes!(
                                            "m-0",
                                            "mb-8",
                                            "text-2xl",
                                            "font-serif",
                                            "font-bold",
                                            "flex",
                                            "items-center",
                                            "gap-2"
                                        )}>
                                            <Icon name={IconName::BookOpen} size={24} />
                                            { "Related Articles" }
                                        </h3>
                                        <div class={classes!(
                                            "hidden",
                                            "md:grid",
                                            "md:grid-cols-2",
                                            "lg:grid-cols-3",
                                            "gap-6"
                                        )}>
                                            { for article.related_articles.iter().enumerate().map(|(index, related)| html! {
                                                <BlogCard
                                                    key={related.identifier().to_string()}
                                                    article={related.clone()}
                                                    index={index}
                                                />
                                            }) }
                                        </div>
                                        // Narrow viewports get the compact list instead
                                        <div class={classes!("md:hidden", "space-y-2")}>
                                            { for article.related_articles.iter().enumerate().map(|(index, related)| html! {
                                                <CompactCard
                                                    key={related.identifier().to_string()}
                                                    article={related.clone()}
                                                    index={index}
                                                />
                                            }) }
                                        </div>
                                    </section>
                                }
                            }
                        }
                    </article>
                </div>
            </div>
        </>
    }
}

fn render_avatar(article: &Article, size: u32) -> Html {
    let avatar = article
        .author
        .as_ref()
        .and_then(|author| author.avatar.as_deref())
        .filter(|value| !value.trim().is_empty());
    let dimension = format!("width: {size}px; height: {size}px;");

    match avatar {
        Some(src) => html! {
            <img
                src={src.to_string()}
                alt={article.author_name().to_string()}
                class={classes!("rounded-full", "object-cover")}
                style={dimension}
            />
        },
        None => html! {
            <span
                class={classes!(
                    "rounded-full",
                    "bg-[var(--surface-alt)]",
                    "inline-flex",
                    "items-center",
                    "justify-center",
                    "text-[var(--primary)]",
                    "shrink-0"
                )}
                style={dimension}
            >
                <Icon name={IconName::User} size={size / 2} />
            </span>
        },
    }
}

fn render_author_bio(article: &Article) -> Html {
    let Some(bio) = article
        .author
        .as_ref()
        .and_then(|author| author.bio.as_ref())
        .filter(|bio| !bio.trim().is_empty())
    else {
        return Html::default();
    };

    html! {
        <div class={classes!("mt-12")}>
            <div class={classes!(
                "rounded-2xl",
                "bg-[var(--surface-alt)]",
                "p-8"
            )}>
                <div class={classes!("flex", "items-start", "gap-6")}>
                    { render_avatar(article, 80) }
                    <div class={classes!("flex-1")}>
                        <p class={classes!(
                            "m-0",
                            "mb-1",
                            "text-sm",
                            "text-[var(--muted)]",
                            "uppercase",
                            "tracking-wider"
                        )}>
                            { "Written by" }
                        </p>
                        <h3 class={classes!("m-0", "mb-2", "text-xl", "font-serif", "font-bold")}>
                            { article.author_name() }
                        </h3>
                        <p class={classes!("m-0", "text-[var(--muted)]", "leading-relaxed")}>
                            { bio.clone() }
                        </p>
                    </div>
                </div>
            </div>
        </div>
    }
}
