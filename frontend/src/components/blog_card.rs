use inkly_shared::Article;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    animations::{HERO_ENTRANCE, STAGGER, STAGGER_FAST, STAGGER_SLOW},
    components::{
        icons::{Icon, IconName},
        image_with_fallback::ImageWithFallback,
    },
    config::{fallback_cover_sized, FALLBACK_COVER_IMAGE},
    format::{card_excerpt, format_date},
    palette::category_color,
    router::Route,
};

#[derive(Properties, PartialEq, Clone)]
pub struct BlogCardProps {
    pub article: Article,
    /// Position in the list, used only to stagger the entrance.
    #[prop_or(0)]
    pub index: usize,
}

fn article_route(article: &Article) -> Route {
    Route::Article { identifier: article.identifier().to_string() }
}

fn category_badge(article: &Article, extra_class: &'static str) -> Html {
    let color = category_color(article.category_name());
    let label = article.category_name().unwrap_or("General").to_string();

    html! {
        <span
            class={classes!("category-badge", extra_class)}
            style={color.badge_style()}
        >
            { label }
        </span>
    }
}

fn author_avatar(article: &Article, size_class: &'static str) -> Html {
    let avatar = article
        .author
        .as_ref()
        .and_then(|author| author.avatar.as_deref())
        .filter(|value| !value.trim().is_empty());

    match avatar {
        Some(src) => html! {
            <img
                src={src.to_string()}
                alt={article.author_name().to_string()}
                class={classes!(size_class, "rounded-full", "object-cover")}
                loading="lazy"
            />
        },
        None => html! {
            <span class={classes!(
                size_class,
                "rounded-full",
                "bg-[var(--surface-alt)]",
                "inline-flex",
                "items-center",
                "justify-center",
                "text-[var(--primary)]"
            )}>
                <Icon name={IconName::User} size={16} />
            </span>
        },
    }
}

/// Standard card used in article grids.
#[function_component(BlogCard)]
pub fn blog_card(props: &BlogCardProps) -> Html {
    let article = &props.article;
    let image_src = article
        .cover_image()
        .map(str::to_string)
        .unwrap_or_else(|| FALLBACK_COVER_IMAGE.to_string());
    let summary = card_excerpt(article.excerpt.as_deref(), &article.content, 120);
    let entrance = STAGGER.item(props.index).animation_style("fade-in-up");

    html! {
        <article
            class={classes!(
                "group",
                "relative",
                "overflow-hidden",
                "rounded-2xl",
                "bg-[var(--surface)]",
                "border",
                "border-[var(--border)]"
            )}
            style={entrance}
        >
            <Link<Route> to={article_route(article)} classes={classes!("block", "no-underline", "text-inherit")}>
                <div class={classes!("relative", "aspect-[16/10]", "overflow-hidden")}>
                    <ImageWithFallback
                        src={image_src}
                        alt={article.title.clone()}
                        fallback={FALLBACK_COVER_IMAGE.to_string()}
                        class={classes!(
                            "w-full",
                            "h-full",
                            "object-cover",
                            "transition-transform",
                            "duration-700",
                            "ease-out",
                            "group-hover:scale-110"
                        )}
                        container_class={classes!("w-full", "h-full")}
                    />
                    <div class={classes!("absolute", "top-4", "left-4", "z-10")}>
                        { category_badge(article, "backdrop-blur-sm") }
                    </div>
                    {
                        if article.view_count() > 1000 {
                            html! {
                                <div class={classes!("absolute", "top-4", "right-4", "z-10")}>
                                    <span class={classes!(
                                        "trending-badge",
                                        "inline-flex",
                                        "items-center",
                                        "gap-1",
                                        "text-white"
                                    )}>
                                        <Icon name={IconName::TrendingUp} size={12} />
                                        { "Trending" }
                                    </span>
                                </div>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>

                <div class={classes!("p-6", "space-y-4")}>
                    <h3 class={classes!(
                        "font-serif",
                        "text-xl",
                        "font-bold",
                        "leading-tight",
                        "line-clamp-2",
                        "group-hover:text-[var(--primary)]",
                        "transition-colors"
                    )}>
                        { &article.title }
                    </h3>

                    <p class={classes!("text-[var(--muted)]", "text-sm", "line-clamp-2", "leading-relaxed")}>
                        { summary }
                    </p>

                    <div class={classes!(
                        "flex",
                        "items-center",
                        "justify-between",
                        "pt-4",
                        "border-t",
                        "border-[var(--border)]"
                    )}>
                        <div class={classes!("flex", "items-center", "gap-3")}>
                            { author_avatar(article, "w-8 h-8") }
                            <div class={classes!("flex", "flex-col")}>
                                <span class={classes!("text-sm", "font-medium")}>
                                    { article.author_name() }
                                </span>
                                <span class={classes!("text-xs", "text-[var(--muted)]")}>
                                    { format_date(article.published_date()) }
                                </span>
                            </div>
                        </div>
                        <span class={classes!("inline-flex", "items-center", "gap-1", "text-xs", "text-[var(--muted)]")}>
                            <Icon name={IconName::Clock} size={12} />
                            { format!("{} min", article.reading_minutes()) }
                        </span>
                    </div>

                    <div class={classes!("flex", "items-center", "gap-4", "text-xs", "text-[var(--muted)]")}>
                        <span class={classes!("inline-flex", "items-center", "gap-1")}>
                            <Icon name={IconName::Heart} size={14} />
                            { article.like_count() }
                        </span>
                        <span class={classes!("inline-flex", "items-center", "gap-1")}>
                            <Icon name={IconName::MessageCircle} size={14} />
                            { article.comment_count() }
                        </span>
                        <span class={classes!("inline-flex", "items-center", "gap-1")}>
                            <Icon name={IconName::Eye} size={14} />
                            { article.view_count() }
                        </span>
                    </div>
                </div>
            </Link<Route>>
        </article>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct HeroCardProps {
    pub article: Article,
}

/// Full-width hero treatment for the featured story.
#[function_component(HeroCard)]
pub fn hero_card(props: &HeroCardProps) -> Html {
    let article = &props.article;
    let image_src = article
        .cover_image()
        .map(str::to_string)
        .unwrap_or_else(|| fallback_cover_sized(1200, 800));
    let summary = card_excerpt(article.excerpt.as_deref(), &article.content, 180);
    let background = format!("background-image: url({});", image_src);

    html! {
        <article
            class={classes!(
                "group",
                "relative",
                "min-h-[70vh]",
                "rounded-3xl",
                "overflow-hidden",
                "cursor-pointer"
            )}
            style={HERO_ENTRANCE.animation_style("fade-in-up")}
        >
            <Link<Route> to={article_route(article)} classes={classes!("block", "h-full", "no-underline", "text-inherit")}>
                <div
                    class={classes!(
                        "absolute",
                        "inset-0",
                        "bg-cover",
                        "bg-center",
                        "transition-transform",
                        "duration-[8s]",
                        "ease-out",
                        "group-hover:scale-105"
                    )}
                    style={background}
                />
                <div class={classes!("absolute", "inset-0", "hero-overlay")} />

                <div class={classes!("absolute", "bottom-0", "left-0", "right-0", "p-8", "md:p-12", "lg:p-16")}>
                    <div class={classes!("max-w-3xl", "space-y-6")}>
                        <div class={classes!("flex", "flex-wrap", "items-center", "gap-4")}>
                            { category_badge(article, "backdrop-blur-sm") }
                            <div class={classes!("flex", "items-center", "gap-4", "text-white/80", "text-sm")}>
                                <span>{ format_date(article.published_date()) }</span>
                                <span>{ "•" }</span>
                                <span class={classes!("inline-flex", "items-center", "gap-1")}>
                                    <Icon name={IconName::Clock} size={16} />
                                    { format!("{} min read", article.reading_minutes()) }
                                </span>
                            </div>
                        </div>

                        <h1 class={classes!(
                            "text-3xl",
                            "md:text-5xl",
                            "font-serif",
                            "font-bold",
                            "text-white",
                            "leading-tight"
                        )}>
                            { &article.title }
                        </h1>

                        <p class={classes!("text-lg", "text-white/80", "line-clamp-2", "max-w-2xl", "leading-relaxed")}>
                            { summary }
                        </p>

                        <div class={classes!("flex", "items-center", "gap-4", "pt-4")}>
                            { author_avatar(article, "w-12 h-12") }
                            <div>
                                <p class={classes!("m-0", "text-white", "font-medium")}>{ article.author_name() }</p>
                                <div class={classes!("flex", "items-center", "gap-3", "text-white/60", "text-sm")}>
                                    <span class={classes!("inline-flex", "items-center", "gap-1")}>
                                        <Icon name={IconName::Eye} size={16} />
                                        { format!("{} views", article.view_count()) }
                                    </span>
                                    <span class={classes!("inline-flex", "items-center", "gap-1")}>
                                        <Icon name={IconName::Heart} size={16} />
                                        { article.like_count() }
                                    </span>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </Link<Route>>
        </article>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct FeaturedCardProps {
    pub article: Article,
    #[prop_or(0)]
    pub index: usize,
}

/// Medium featured card for the trending grid.
#[function_component(FeaturedCard)]
pub fn featured_card(props: &FeaturedCardProps) -> Html {
    let article = &props.article;
    let image_src = article
        .cover_image()
        .map(str::to_string)
        .unwrap_or_else(|| fallback_cover_sized(800, 600));
    let summary = card_excerpt(article.excerpt.as_deref(), &article.content, 100);
    let background = format!("background-image: url({});", image_src);
    let entrance = STAGGER_SLOW.item(props.index).animation_style("fade-in-up");

    html! {
        <article
            class={classes!(
                "group",
                "relative",
                "h-full",
                "min-h-[240px]",
                "rounded-2xl",
                "overflow-hidden",
                "cursor-pointer"
            )}
            style={entrance}
        >
            <Link<Route> to={article_route(article)} classes={classes!("block", "h-full", "no-underline", "text-inherit")}>
                <div
                    class={classes!(
                        "absolute",
                        "inset-0",
                        "bg-cover",
                        "bg-center",
                        "transition-transform",
                        "duration-700",
                        "ease-out",
                        "group-hover:scale-110"
                    )}
                    style={background}
                />
                <div class={classes!("absolute", "inset-0", "featured-overlay")} />

                <div class={classes!("absolute", "top-4", "left-4", "z-10")}>
                    { category_badge(article, "backdrop-blur-sm") }
                </div>

                <div class={classes!("absolute", "bottom-0", "left-0", "right-0", "p-6", "space-y-3")}>
                    <h3 class={classes!(
                        "text-xl",
                        "md:text-2xl",
                        "font-serif",
                        "font-bold",
                        "text-white",
                        "leading-tight",
                        "line-clamp-2"
                    )}>
                        { &article.title }
                    </h3>

                    <p class={classes!("m-0", "text-white/70", "text-sm", "line-clamp-2")}>
                        { summary }
                    </p>

                    <div class={classes!("flex", "items-center", "justify-between", "pt-3")}>
                        <div class={classes!("flex", "items-center", "gap-2")}>
                            { author_avatar(article, "w-8 h-8") }
                            <span class={classes!("text-white/80", "text-sm")}>{ article.author_name() }</span>
                        </div>
                        <span class={classes!("inline-flex", "items-center", "gap-1", "text-white/60", "text-sm")}>
                            <Icon name={IconName::Clock} size={16} />
                            { format!("{} min", article.reading_minutes()) }
                        </span>
                    </div>
                </div>
            </Link<Route>>
        </article>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct CompactCardProps {
    pub article: Article,
    #[prop_or(0)]
    pub index: usize,
}

/// Small horizontal card for sidebars and related lists.
#[function_component(CompactCard)]
pub fn compact_card(props: &CompactCardProps) -> Html {
    let article = &props.article;
    let image_src = article
        .cover_image()
        .map(str::to_string)
        .unwrap_or_else(|| fallback_cover_sized(200, 150));
    let entrance = STAGGER_FAST.item(props.index).animation_style("fade-in-up");

    html! {
        <article
            class={classes!(
                "group",
                "flex",
                "gap-4",
                "p-3",
                "rounded-xl",
                "transition-colors",
                "hover:bg-[var(--surface-alt)]"
            )}
            style={entrance}
        >
            <Link<Route> to={article_route(article)} classes={classes!("flex", "gap-4", "w-full", "no-underline", "text-inherit")}>
                <div class={classes!("w-20", "h-20", "rounded-lg", "overflow-hidden", "shrink-0")}>
                    <ImageWithFallback
                        src={image_src}
                        alt={article.title.clone()}
                        fallback={FALLBACK_COVER_IMAGE.to_string()}
                        class={classes!(
                            "w-full",
                            "h-full",
                            "object-cover",
                            "transition-transform",
                            "duration-300",
                            "group-hover:scale-110"
                        )}
                        container_class={classes!("w-full", "h-full")}
                    />
                </div>

                <div class={classes!("flex-1", "min-w-0", "space-y-1")}>
                    <h4 class={classes!(
                        "m-0",
                        "font-medium",
                        "text-sm",
                        "line-clamp-2",
                        "group-hover:text-[var(--primary)]",
                        "transition-colors"
                    )}>
                        { &article.title }
                    </h4>
                    <div class={classes!("flex", "items-center", "gap-2", "text-xs", "text-[var(--muted)]")}>
                        <span>{ format_date(article.published_date()) }</span>
                        <span>{ "•" }</span>
                        <span>{ format!("{} min", article.reading_minutes()) }</span>
                    </div>
                </div>
            </Link<Route>>
        </article>
    }
}

/// Placeholder card shown while a grid is loading.
#[function_component(BlogCardSkeleton)]
pub fn blog_card_skeleton() -> Html {
    html! {
        <div class={classes!(
            "rounded-2xl",
            "bg-[var(--surface)]",
            "border",
            "border-[var(--border)]",
            "overflow-hidden"
        )}>
            <div class={classes!("aspect-[16/10]", "skeleton")} />
            <div class={classes!("p-6", "space-y-4")}>
                <div class={classes!("h-6", "skeleton", "w-3/4")} />
                <div class={classes!("space-y-2")}>
                    <div class={classes!("h-4", "skeleton", "w-full")} />
                    <div class={classes!("h-4", "skeleton", "w-2/3")} />
                </div>
                <div class={classes!("flex", "items-center", "gap-3", "pt-4", "border-t", "border-[var(--border)]")}>
                    <div class={classes!("w-8", "h-8", "rounded-full", "skeleton")} />
                    <div class={classes!("space-y-1")}>
                        <div class={classes!("h-4", "skeleton", "w-24")} />
                        <div class={classes!("h-3", "skeleton", "w-16")} />
                    </div>
                </div>
            </div>
        </div>
    }
}
