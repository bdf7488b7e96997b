use web_sys::HtmlImageElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ImageWithFallbackProps {
    pub src: String,
    pub alt: String,
    /// Swapped in when `src` fails to load at render time.
    pub fallback: String,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub container_class: Classes,
}

/// Image with a loading shimmer and a runtime fallback source.
///
/// A failed load swaps the element's `src` to the fallback in place instead
/// of re-rendering, so the error handler fires at most once per source.
#[function_component(ImageWithFallback)]
pub fn image_with_fallback(props: &ImageWithFallbackProps) -> Html {
    let image_loaded = use_state(|| false);

    let on_image_load = {
        let image_loaded = image_loaded.clone();
        Callback::from(move |_: Event| image_loaded.set(true))
    };
    let on_image_error = {
        let image_loaded = image_loaded.clone();
        let fallback = props.fallback.clone();
        Callback::from(move |event: Event| {
            if let Some(img) = event
                .target_dyn_into::<HtmlImageElement>()
                .filter(|img| img.src() != fallback)
            {
                img.set_src(&fallback);
            }
            image_loaded.set(true);
        })
    };

    let container_classes = classes!(
        props.container_class.clone(),
        "relative",
        "overflow-hidden",
        if !*image_loaded { "bg-[var(--surface-alt)]" } else { "" }
    );

    let image_classes = classes!(
        props.class.clone(),
        "transition-opacity",
        "duration-500",
        if *image_loaded { "opacity-100" } else { "opacity-0" }
    );

    html! {
        <div class={container_classes}>
            {
                if !*image_loaded {
                    html! {
                        <div class={classes!(
                            "absolute",
                            "inset-0",
                            "bg-gradient-to-br",
                            "from-[var(--surface-alt)]",
                            "to-[var(--surface)]",
                            "animate-pulse",
                            "pointer-events-none"
                        )} />
                    }
                } else {
                    html! {}
                }
            }
            <img
                src={props.src.clone()}
                alt={props.alt.clone()}
                class={image_classes}
                loading="lazy"
                onload={on_image_load}
                onerror={on_image_error}
            />
        </div>
    }
}
