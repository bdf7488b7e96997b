use web_sys::Element;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct RawHtmlProps {
    /// Already-sanitized HTML. Callers scrub API content before passing it.
    pub html: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Render HTML into a host element without letting Yew diff its children.
/// Keeps the VDOM out of content the browser may mutate (anchors scrolled to,
/// images swapped).
#[function_component(RawHtml)]
pub fn raw_html(props: &RawHtmlProps) -> Html {
    let host_ref = use_node_ref();

    {
        let host_ref = host_ref.clone();
        use_effect_with(props.html.clone(), move |next_html| {
            if let Some(host) = host_ref.cast::<Element>() {
                host.set_inner_html(next_html.as_str());
            }
            || ()
        });
    }

    html! {
        <div ref={host_ref} class={props.class.clone()} />
    }
}
