use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    components::{footer::Footer, topbar::Topbar},
    pages,
};

#[derive(Routable, Clone, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,

    #[at("/article/:identifier")]
    Article { identifier: String },

    #[at("/category/:slug")]
    Category { slug: String },

    #[at("/blogs")]
    Blogs,

    #[at("/search")]
    Search,

    #[at("/profile")]
    Profile,

    #[at("/writer")]
    Writer,

    #[at("/admin")]
    Admin,

    #[at("/login")]
    Login,

    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <pages::home::HomePage /> },
        Route::Article { identifier } => {
            html! { <pages::article::ArticlePage identifier={identifier} /> }
        },
        Route::Category { .. } => {
            html! { <pages::placeholder::PlaceholderPage feature="Category browsing" /> }
        },
        Route::Blogs => {
            html! { <pages::placeholder::PlaceholderPage feature="The article index" /> }
        },
        Route::Search => html! { <pages::placeholder::PlaceholderPage feature="Search" /> },
        Route::Profile => {
            html! { <pages::placeholder::PlaceholderPage feature="Your profile" /> }
        },
        Route::Writer => {
            html! { <pages::placeholder::PlaceholderPage feature="The writer dashboard" /> }
        },
        Route::Admin => {
            html! { <pages::placeholder::PlaceholderPage feature="The admin dashboard" /> }
        },
        Route::Login => html! { <pages::placeholder::PlaceholderPage feature="Sign in" /> },
        Route::NotFound => html! { <pages::not_found::NotFoundPage /> },
    }
}

#[function_component(AppRouter)]
pub fn app_router() -> Html {
    html! {
        <BrowserRouter>
            <div class={classes!("flex", "flex-col", "bg-[var(--bg)]")} style="min-height: 100vh;">
                <Topbar />
                <div class={classes!("flex-1", "pt-16", "md:pt-20")}>
                    <Switch<Route> render={switch} />
                </div>
                <Footer />
            </div>
        </BrowserRouter>
    }
}
