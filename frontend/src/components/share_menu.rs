use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::JsFuture;
use web_sys::{window, ShareData};
use yew::prelude::*;

use crate::components::icons::{Icon, IconName};

#[derive(Clone, Copy, PartialEq)]
enum ShareTarget {
    Twitter,
    Facebook,
    Linkedin,
    CopyLink,
    Native,
}

impl ShareTarget {
    fn label(&self) -> &'static str {
        match self {
            ShareTarget::Twitter => "Twitter",
            ShareTarget::Facebook => "Facebook",
            ShareTarget::Linkedin => "LinkedIn",
            ShareTarget::CopyLink => "Copy Link",
            ShareTarget::Native => "Share...",
        }
    }

    fn icon(&self) -> IconName {
        match self {
            ShareTarget::Twitter => IconName::Twitter,
            ShareTarget::Facebook => IconName::Facebook,
            ShareTarget::Linkedin => IconName::Linkedin,
            ShareTarget::CopyLink => IconName::LinkIcon,
            ShareTarget::Native => IconName::Share,
        }
    }
}

fn share_url(target: ShareTarget, url: &str, title: &str) -> Option<String> {
    let encoded_url = urlencoding::encode(url);
    match target {
        ShareTarget::Twitter => Some(format!(
            "https://twitter.com/intent/tweet?url={}&text={}",
            encoded_url,
            urlencoding::encode(title)
        )),
        ShareTarget::Facebook => Some(format!(
            "https://www.facebook.com/sharer/sharer.php?u={}",
            encoded_url
        )),
        ShareTarget::Linkedin => Some(format!(
            "https://www.linkedin.com/sharing/share-offsite/?url={}",
            encoded_url
        )),
        ShareTarget::CopyLink | ShareTarget::Native => None,
    }
}

fn current_url() -> String {
    window()
        .and_then(|win| win.location().href().ok())
        .unwrap_or_default()
}

fn native_share_supported() -> bool {
    window()
        .map(|win| {
            js_sys::Reflect::has(
                win.navigator().as_ref(),
                &wasm_bindgen::JsValue::from_str("share"),
            )
            .unwrap_or(false)
        })
        .unwrap_or(false)
}

#[derive(Properties, PartialEq)]
pub struct ShareMenuProps {
    pub title: String,
    /// Stack the buttons vertically (sidebar rail) instead of in a row.
    #[prop_or(false)]
    pub vertical: bool,
}

/// Share actions for an article: the explicit targets, clipboard copy with
/// inline feedback, and the native share sheet where the browser offers one.
#[function_component(ShareMenu)]
pub fn share_menu(props: &ShareMenuProps) -> Html {
    let copied = use_state(|| false);

    let on_share = {
        let title = props.title.clone();
        let copied = copied.clone();
        Callback::from(move |target: ShareTarget| {
            let url = current_url();

            match target {
                ShareTarget::CopyLink => {
                    let copied = copied.clone();
                    wasm_bindgen_futures::spawn_local(async move {
                        let Some(win) = window() else { return };
                        let promise = win.navigator().clipboard().write_text(&url);
                        if JsFuture::from(promise).await.is_ok() {
                            copied.set(true);
                            let copied = copied.clone();
                            Timeout::new(2000, move || copied.set(false)).forget();
                        } else {
                            web_sys::console::error_1(&"Failed to copy link".into());
                        }
                    });
                },
                ShareTarget::Native => {
                    let title = title.clone();
                    wasm_bindgen_futures::spawn_local(async move {
                        let Some(win) = window() else { return };
                        let data = ShareData::new();
                        data.set_title(&title);
                        data.set_url(&url);
                        // The user dismissing the sheet rejects the promise.
                        let _ = JsFuture::from(win.navigator().share_with_data(&data)).await;
                    });
                },
                _ => {
                    if let Some(share_url) = share_url(target, &url, &title) {
                        if let Some(win) = window() {
                            let _ = win.open_with_url_and_target_and_features(
                                &share_url,
                                "_blank",
                                "width=600,height=400",
                            );
                        }
                    }
                },
            }
        })
    };

    let mut targets = vec![
        ShareTarget::Twitter,
        ShareTarget::Facebook,
        ShareTarget::Linkedin,
        ShareTarget::CopyLink,
    ];
    if native_share_supported() {
        targets.push(ShareTarget::Native);
    }

    let list_class = if props.vertical {
        classes!("flex", "flex-col", "gap-2")
    } else {
        classes!("flex", "flex-wrap", "gap-2", "justify-center")
    };

    html! {
        <div class={list_class}>
            { for targets.into_iter().map(|target| {
                let on_share = on_share.clone();
                let label = if target == ShareTarget::CopyLink && *copied {
                    "Copied!"
                } else {
                    target.label()
                };
                html! {
                    <button
                        type="button"
                        class={classes!(
                            "inline-flex",
                            "items-center",
                            "gap-2",
                            "rounded-full",
                            "border",
                            "border-[var(--border)]",
                            "bg-[var(--surface)]",
                            "text-[var(--text)]",
                            "text-sm",
                            "px-4",
                            "py-2",
                            "transition-colors",
                            "hover:border-[var(--primary)]",
                            "hover:text-[var(--primary)]"
                        )}
                        onclick={Callback::from(move |_| on_share.emit(target))}
                    >
                        <Icon name={target.icon()} size={16} />
                        { label }
                    </button>
                }
            }) }
        </div>
    }
}
