use yew::prelude::*;

use crate::components::error_state::ErrorState;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <main class={classes!("min-h-screen", "bg-[var(--bg)]")}>
            <ErrorState
                title="404 - Page Not Found"
                message="The page you are looking for does not exist."
            />
        </main>
    }
}
