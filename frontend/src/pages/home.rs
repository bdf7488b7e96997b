use inkly_shared::{stat_or, Article, Category, SiteStats};
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    api::{fetch_articles, fetch_categories, fetch_stats},
    components::{
        blog_card::{BlogCard, BlogCardSkeleton, FeaturedCard, HeroCard},
        error_state::ErrorState,
        icons::{Icon, IconName},
        newsletter_form::NewsletterForm,
        stats_card::StatsCard,
    },
    router::Route,
};

fn category_icon(name: &str) -> IconName {
    match name.to_lowercase().as_str() {
        "technology" => IconName::Zap,
        "design" => IconName::Sparkles,
        "business" => IconName::TrendingUp,
        "lifestyle" => IconName::Globe,
        "health" => IconName::Award,
        "travel" => IconName::Globe,
        _ => IconName::BookOpen,
    }
}

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let featured_posts = use_state(Vec::<Article>::new);
    let latest_posts = use_state(Vec::<Article>::new);
    let categories = use_state(Vec::<Category>::new);
    let stats = use_state(SiteStats::default);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    {
        let featured_posts = featured_posts.clone();
        let latest_posts = latest_posts.clone();
        let categories = categories.clone();
        let stats = stats.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                // All three requests go out together; each section degrades
                // on its own if its request fails.
                let (articles_result, categories_result, stats_result) =
                    futures::join!(fetch_articles(10), fetch_categories(), fetch_stats());

                match articles_result {
                    Ok(articles) => {
                        featured_posts.set(articles.iter().take(4).cloned().collect());
                        latest_posts.set(articles.into_iter().take(6).collect());
                    },
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("Failed to fetch articles: {}", e).into(),
                        );
                        error.set(Some(e));
                    },
                }

                match categories_result {
                    Ok(data) => categories.set(data.into_iter().take(8).collect()),
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("Failed to fetch categories: {}", e).into(),
                        );
                    },
                }

                // Stats failure is invisible to the reader.
                stats.set(stats_result.unwrap_or_else(|_| SiteStats::fallback()));

                loading.set(false);
            });
            || ()
        });
    }

    let stat_tiles = [
        (
            IconName::BookOpen,
            stat_or(&stats.total_articles, "150+"),
            "Articles",
            "linear-gradient(135deg, #3b82f6, #06b6d4)",
        ),
        (
            IconName::Users,
            stat_or(&stats.total_writers, "25+"),
            "Writers",
            "linear-gradient(135deg, #a855f7, #ec4899)",
        ),
        (
            IconName::TrendingUp,
            stat_or(&stats.monthly_views, "50K+"),
            "Monthly Reads",
            "linear-gradient(135deg, #f97316, #ef4444)",
        ),
        (
            IconName::Star,
            stat_or(&stats.rating, "4.9"),
            "Rating",
            "linear-gradient(135deg, #eab308, #f97316)",
        ),
    ];

    html! {
        <div class={classes!("flex-1", "w-full", "min-h-screen", "bg-[var(--bg)]", "overflow-hidden")}>
            // Hero
            <section class={classes!(
                "relative",
                "min-h-[90vh]",
                "flex",
                "items-center",
                "justify-center",
                "overflow-hidden",
                "home-hero"
            )}>
                <div class={classes!("relative", "z-10", "mx-auto", "max-w-7xl", "px-6", "py-20", "text-center")}>
                    <div class={classes!("space-y-8")}>
                        <span class={classes!(
                            "inline-flex",
                            "items-center",
                            "gap-2",
                            "px-4",
                            "py-2",
                            "rounded-full",
                            "text-sm",
                            "font-medium",
                            "bg-[var(--primary-tint)]",
                            "text-[var(--primary)]"
                        )}>
                            <Icon name={IconName::Sparkles} size={16} />
                            { "Welcome to the future of storytelling" }
                        </span>

                        <h1 class={classes!(
                            "m-0",
                            "text-5xl",
                            "md:text-7xl",
                            "font-serif",
                            "font-bold",
                            "tracking-tight"
                        )}>
                            <span class={classes!("block")}>{ "Where Stories" }</span>
                            <span class={classes!("block", "gradient-text")}>{ "Come Alive" }</span>
                        </h1>

                        <p class={classes!(
                            "m-0",
                            "text-xl",
                            "md:text-2xl",
                            "text-[var(--muted)]",
                            "max-w-3xl",
                            "mx-auto",
                            "leading-relaxed"
                        )}>
                            { "Discover extraordinary stories, insights, and perspectives from \
                               our community of passionate writers." }
                        </p>

                        <div class={classes!(
                            "flex",
                            "flex-col",
                            "sm:flex-row",
                            "gap-4",
                            "justify-center",
                            "items-center",
                            "pt-4"
                        )}>
                            <Link<Route> to={Route::Writer} classes={classes!(
                                "inline-flex",
                                "items-center",
                                "gap-2",
                                "text-lg",
                                "px-8",
                                "py-4",
                                "rounded-full",
                                "text-white",
                                "no-underline",
                                "cta-gradient",
                                "shadow-lg"
                            )}>
                                <Icon name={IconName::PenTool} size={20} />
                                { "Start Writing" }
                            </Link<Route>>
                            <Link<Route> to={Route::Blogs} classes={classes!(
                                "inline-flex",
                                "items-center",
                                "gap-2",
                                "text-lg",
                                "px-8",
                                "py-4",
                                "rounded-full",
                                "border-2",
                                "border-[var(--border)]",
                                "text-[var(--text)]",
                                "no-underline",
                                "hover:border-[var(--primary)]"
                            )}>
                                { "Explore Stories" }
                                <Icon name={IconName::ArrowRight} size={20} />
                            </Link<Route>>
                        </div>
                    </div>
                </div>
            </section>

            // Stats band
            <section class={classes!("py-16", "px-6", "bg-[var(--surface-alt)]", "border-y", "border-[var(--border)]")}>
                <div class={classes!("mx-auto", "max-w-7xl")}>
                    <div class={classes!("grid", "grid-cols-2", "md:grid-cols-4", "gap-8")}>
                        { for stat_tiles.into_iter().map(|(icon, value, label, accent)| html! {
                            <StatsCard
                                icon={icon}
                                value={value}
                                label={label.to_string()}
                                accent={Some(AttrValue::from(accent))}
                            />
                        }) }
                    </div>
                </div>
            </section>

            {
                if let Some(message) = (*error).clone() {
                    html! {
                        <section class={classes!("py-16", "px-6")}>
                            <ErrorState
                                title="Unable to load stories"
                                message={format!("Something went wrong while fetching articles. {}", message)}
                                with_navigation={false}
                            />
                        </section>
                    }
                } else {
                    html! {
                        <>
                            // Featured story
                            {
                                if let Some(first) = featured_posts.first() {
                                    html! {
                                        <section class={classes!("py-16", "px-6")}>
                                            <div class={classes!("mx-auto", "max-w-7xl")}>
                                                <div class={classes!("mb-8")}>
                                                    <h2 class={classes!("m-0", "text-3xl", "md:text-4xl", "font-serif", "font-bold")}>
                                                        { "Featured Story" }
                                                    </h2>
                                                    <p class={classes!("m-0", "mt-2", "text-[var(--muted)]")}>
                                                        { "Our editor's pick for today" }
                                                    </p>
                                                </div>
                                                <HeroCard article={first.clone()} />
                                            </div>
                                        </section>
                                    }
                                } else {
                                    html! {}
                                }
                            }

                            // Trending grid
                            {
                                if featured_posts.len() > 1 {
                                    html! {
                                        <section class={classes!("py-16", "px-6", "bg-[var(--surface-alt)]")}>
                                            <div class={classes!("mx-auto", "max-w-7xl")}>
                                                <div class={classes!("flex", "items-center", "justify-between", "mb-10")}>
                                                    <div>
                                                        <h2 class={classes!("m-0", "text-3xl", "md:text-4xl", "font-serif", "font-bold")}>
                                                            { "Trending Now" }
                                                        </h2>
                                                        <p class={classes!("m-0", "mt-2", "text-[var(--muted)]")}>
                                                            { "Stories capturing everyone's attention" }
                                                        </p>
                                                    </div>
                                                    <Link<Route> to={Route::Blogs} classes={classes!(
                                                        "inline-flex",
                                                        "items-center",
                                                        "gap-1",
                                                        "no-underline",
                                                        "text-[var(--text)]",
                                                        "hover:text-[var(--primary)]"
                                                    )}>
                                                        { "View all" }
                                                        <Icon name={IconName::ChevronRight} size={16} />
                                                    </Link<Route>>
                                                </div>

                                                <div class={classes!("grid", "grid-cols-1", "md:grid-cols-2", "lg:grid-cols-3", "gap-6")}>
                                                    <div class={classes!("md:col-span-2", "lg:col-span-2", "lg:row-span-2")}>
                                                        <FeaturedCard article={featured_posts[1].clone()} index={0} />
                                                    </div>
                                                    { for featured_posts.iter().skip(2).take(2).enumerate().map(|(idx, post)| html! {
                                                        <div key={post.identifier().to_string()} class={classes!("h-[240px]", "md:h-auto")}>
                                                            <FeaturedCard article={post.clone()} index={idx + 1} />
                                                        </div>
                                                    }) }
                                                </div>
                                            </div>
                                        </section>
                                    }
                                } else {
                                    html! {}
                                }
                            }

                            // Latest stories
                            <section class={classes!("py-20", "px-6")}>
                                <div class={classes!("mx-auto", "max-w-7xl")}>
                                    <div class={classes!("flex", "items-center", "justify-between", "mb-10")}>
                                        <div>
                                            <h2 class={classes!("m-0", "text-3xl", "md:text-4xl", "font-serif", "font-bold")}>
                                                { "Latest Stories" }
                                            </h2>
                                            <p class={classes!("m-0", "mt-2", "text-[var(--muted)]")}>
                                                { "Fresh perspectives from our community" }
                                            </p>
                                        </div>
                                        <Link<Route> to={Route::Blogs} classes={classes!(
                                            "inline-flex",
                                            "items-center",
                                            "gap-1",
                                            "no-underline",
                                            "text-[var(--text)]",
                                            "hover:text-[var(--primary)]"
                                        )}>
                                            { "Browse all" }
                                            <Icon name={IconName::ChevronRight} size={16} />
                                        </Link<Route>>
                                    </div>

                                    {
                                        if *loading {
                                            html! {
                                                <div class={classes!("grid", "gap-8", "md:grid-cols-2", "lg:grid-cols-3")}>
                                                    { for (0..6).map(|i| html! { <BlogCardSkeleton key={i.to_string()} /> }) }
                                                </div>
                                            }
                                        } else {
                                            html! {
                                                <div class={classes!("grid", "gap-8", "md:grid-cols-2", "lg:grid-cols-3")}>
                                                    { for latest_posts.iter().enumerate().map(|(index, post)| html! {
                                                        <BlogCard
                                                            key={post.identifier().to_string()}
                                                            article={post.clone()}
                                                            index={index}
                                                        />
                                                    }) }
                                                </div>
                                            }
                                        }
                                    }

                                    <div class={classes!("text-center", "mt-12")}>
                                        <Link<Route> to={Route::Blogs} classes={classes!(
                                            "inline-flex",
                                            "items-center",
                                            "gap-2",
                                            "rounded-full",
                                            "px-8",
                                            "py-3",
                                            "border",
                                            "border-[var(--border)]",
                                            "text-[var(--text)]",
                                            "no-underline",
                                            "hover:border-[var(--primary)]"
                                        )}>
                                            { "View All Articles" }
                                            <Icon name={IconName::ArrowRight} size={20} />
                                        </Link<Route>>
                                    </div>
                                </div>
                            </section>
                        </>
                    }
                }
            }

            // Categories
            <section class={classes!("py-20", "px-6", "bg-[var(--surface-alt)]")}>
                <div class={classes!("mx-auto", "max-w-7xl")}>
                    <div class={classes!("text-center", "mb-12")}>
                        <h2 class={classes!("m-0", "text-3xl", "md:text-4xl", "font-serif", "font-bold")}>
                            { "Explore by Topic" }
                        </h2>
                        <p class={classes!("m-0", "mt-2", "text-[var(--muted)]", "max-w-2xl", "mx-auto")}>
                            { "Dive into the subjects that interest you most" }
                        </p>
                    </div>

                    {
                        if categories.is_empty() {
                            html! {
                                <div class={classes!("text-center", "py-12", "text-[var(--muted)]")}>
                                    <Icon name={IconName::BookOpen} size={48} class={classes!("opacity-50", "mb-4")} />
                                    <p class={classes!("m-0")}>{ "Categories coming soon" }</p>
                                </div>
                            }
                        } else {
                            html! {
                                <div class={classes!("grid", "grid-cols-2", "md:grid-cols-4", "gap-4")}>
                                    { for categories.iter().map(|category| {
                                        let slug = category
                                            .link_target()
                                            .unwrap_or(&category.name)
                                            .to_string();
                                        html! {
                                            <Link<Route>
                                                key={slug.clone()}
                                                to={Route::Category { slug: slug.clone() }}
                                                classes={classes!("no-underline", "text-inherit")}
                                            >
                                                <div class={classes!(
                                                    "group",
                                                    "relative",
                                                    "p-6",
                                                    "rounded-2xl",
                                                    "bg-[var(--surface)]",
                                                    "border",
                                                    "border-[var(--border)]",
                                                    "transition-all",
                                                    "duration-300",
                                                    "cursor-pointer",
                                                    "overflow-hidden",
                                                    "hover:border-[var(--primary)]",
                                                    "hover:shadow-lg"
                                                )}>
                                                    <div class={classes!("relative", "space-y-3")}>
                                                        <div class={classes!(
                                                            "w-12",
                                                            "h-12",
                                                            "rounded-xl",
                                                            "bg-[var(--primary-tint)]",
                                                            "text-[var(--primary)]",
                                                            "flex",
                                                            "items-center",
                                                            "justify-center",
                                                            "transition-transform",
                                                            "duration-300",
                                                            "group-hover:scale-110"
                                                        )}>
                                                            <Icon name={category_icon(&category.name)} size={24} />
                                                        </div>
                                                        <h3 class={classes!(
                                                            "m-0",
                                                            "font-semibold",
                                                            "text-lg",
                                                            "transition-colors",
                                                            "group-hover:text-[var(--primary)]"
                                                        )}>
                                                            { &category.name }
                                                        </h3>
                                                        <span class={classes!(
                                                            "inline-block",
                                                            "text-xs",
                                                            "rounded-full",
                                                            "px-3",
                                                            "py-1",
                                                            "bg-[var(--surface-alt)]",
                                                            "text-[var(--muted)]"
                                                        )}>
                                                            { format!("{} articles", category.total_articles()) }
                                                        </span>
                                                    </div>
                                                </div>
                                            </Link<Route>>
                                        }
                                    }) }
                                </div>
                            }
                        }
                    }
                </div>
            </section>

            // Newsletter
            <section class={classes!("py-20", "px-6")}>
                <div class={classes!("mx-auto", "max-w-4xl")}>
                    <div class={classes!("newsletter-section", "text-center", "text-white")}>
                        <div class={classes!("relative", "z-10", "space-y-6")}>
                            <span class={classes!(
                                "inline-flex",
                                "p-3",
                                "rounded-full",
                                "bg-white/10",
                                "backdrop-blur-sm",
                                "mb-4"
                            )}>
                                <Icon name={IconName::Mail} size={32} />
                            </span>
                            <h2 class={classes!("m-0", "text-3xl", "md:text-4xl", "font-serif", "font-bold")}>
                                { "Stay in the Loop" }
                            </h2>
                            <p class={classes!("m-0", "text-lg", "text-white/80", "max-w-xl", "mx-auto")}>
                                { "Get the best stories delivered straight to your inbox. No spam, \
                                   just quality content twice a week." }
                            </p>
                            <NewsletterForm class={classes!("newsletter-form--inverted", "pt-4")} />
                            <p class={classes!("m-0", "text-sm", "text-white/60")}>
                                { "Join 10,000+ readers. Unsubscribe anytime." }
                            </p>
                        </div>
                    </div>
                </div>
            </section>

            // Closing call to action
            <section class={classes!("py-24", "px-6", "border-t", "border-[var(--border)]")}>
                <div class={classes!("mx-auto", "max-w-5xl", "text-center")}>
                    <div class={classes!("space-y-8")}>
                        <h2 class={classes!("m-0", "text-4xl", "md:text-6xl", "font-serif", "font-bold")}>
                            { "Ready to Share Your" }
                            <span class={classes!("block", "gradient-text")}>{ "Story?" }</span>
                        </h2>
                        <p class={classes!("m-0", "text-xl", "text-[var(--muted)]", "max-w-2xl", "mx-auto")}>
                            { "Join thousands of writers who have found their voice on Inkly." }
                        </p>
                        <div class={classes!("flex", "justify-center", "pt-4")}>
                            <Link<Route> to={Route::Writer} classes={classes!(
                                "inline-flex",
                                "items-center",
                                "gap-2",
                                "text-lg",
                                "px-10",
                                "py-5",
                                "rounded-full",
                                "text-white",
                                "no-underline",
                                "cta-gradient",
                                "shadow-lg"
                            )}>
                                <Icon name={IconName::PenTool} size={20} />
                                { "Start Writing Today" }
                            </Link<Route>>
                        </div>
                    </div>
                </div>
            </section>
        </div>
    }
}
