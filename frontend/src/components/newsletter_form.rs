use gloo_timers::callback::Timeout;
use web_sys::HtmlInputElement;
use yew::{events::InputEvent, prelude::*};

use crate::components::icons::{Icon, IconName};

#[derive(Clone, PartialEq)]
enum SubmitState {
    Idle,
    Sending,
    Confirmed,
}

#[derive(Properties, PartialEq)]
pub struct NewsletterFormProps {
    /// Styling hook so the form blends into light and inverted sections.
    #[prop_or_default]
    pub class: Classes,
}

/// Email capture form. Submission is acknowledged locally; there is no
/// newsletter backend yet, matching the production behavior.
#[function_component(NewsletterForm)]
pub fn newsletter_form(props: &NewsletterFormProps) -> Html {
    let email = use_state(String::new);
    let state = use_state(|| SubmitState::Idle);

    let on_input = {
        let email = email.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                email.set(target.value());
            }
        })
    };

    let onsubmit = {
        let email = email.clone();
        let state = state.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if email.trim().is_empty() || *state == SubmitState::Sending {
                return;
            }
            state.set(SubmitState::Sending);

            let email = email.clone();
            let state = state.clone();
            Timeout::new(1000, move || {
                email.set(String::new());
                state.set(SubmitState::Confirmed);
            })
            .forget();
        })
    };

    let sending = *state == SubmitState::Sending;

    html! {
        <form
            class={classes!(
                props.class.clone(),
                "flex",
                "flex-col",
                "sm:flex-row",
                "gap-3",
                "max-w-md",
                "mx-auto"
            )}
            {onsubmit}
        >
            <input
                type="email"
                required={true}
                class={classes!(
                    "newsletter-input",
                    "flex-1",
                    "h-12",
                    "rounded-full",
                    "px-6"
                )}
                placeholder="Enter your email"
                value={(*email).clone()}
                oninput={on_input}
                disabled={sending}
            />
            <button
                type="submit"
                class={classes!(
                    "newsletter-submit",
                    "h-12",
                    "px-8",
                    "rounded-full",
                    "inline-flex",
                    "items-center",
                    "justify-center",
                    "gap-2",
                    "font-semibold"
                )}
                disabled={sending}
            >
                {
                    match *state {
                        SubmitState::Sending => html! {
                            <Icon name={IconName::Send} size={20} class={classes!("animate-spin")} />
                        },
                        _ => html! {
                            <>
                                { "Subscribe" }
                                <Icon name={IconName::ArrowRight} size={16} />
                            </>
                        },
                    }
                }
            </button>
            {
                if *state == SubmitState::Confirmed {
                    html! {
                        <p class={classes!("m-0", "text-sm", "self-center")} role="status">
                            { "Thanks for subscribing!" }
                        </p>
                    }
                } else {
                    html! {}
                }
            }
        </form>
    }
}
