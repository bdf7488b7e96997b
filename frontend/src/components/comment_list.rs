use inkly_shared::Comment;
use yew::prelude::*;

use crate::{
    components::icons::{Icon, IconName},
    format::format_date,
};

#[derive(Properties, PartialEq)]
pub struct CommentListProps {
    pub comments: Vec<Comment>,
}

/// Read-only comment thread under an article. Hidden entirely when the
/// payload carried no embedded comments.
#[function_component(CommentList)]
pub fn comment_list(props: &CommentListProps) -> Html {
    if props.comments.is_empty() {
        return Html::default();
    }

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
                <Icon name={IconName::MessageCircle} size={24} />
                { format!("Comments ({})", props.comments.len()) }
            </h3>
            <div class={classes!("space-y-6")}>
                { for props.comments.iter().enumerate().map(|(index, comment)| {
                    let key = comment
                        .record_id
                        .clone()
                        .or_else(|| comment.id.clone())
                        .unwrap_or_else(|| index.to_string());
                    let avatar = comment
                        .user
                        .as_ref()
                        .and_then(|user| user.avatar.clone())
                        .filter(|value| !value.trim().is_empty());

                    html! {
                        <article
                            key={key}
                            class={classes!(
                                "rounded-xl",
                                "border",
                                "border-[var(--border)]",
                                "border-l-4",
                                "border-l-[var(--primary)]",
                                "bg-[var(--surface)]",
                                "p-6"
                            )}
                        >
                            <div class={classes!("flex", "items-start", "gap-4")}>
                                {
                                    match avatar {
                                        Some(src) => html! {
                                            <img
                                                src={src}
                                                alt={comment.author_name().to_string()}
                                                class={classes!("w-10", "h-10", "rounded-full", "object-cover")}
                                                loading="lazy"
                                            />
                                        },
                                        None => html! {
                                            <span class={classes!(
                                                "w-10",
                                                "h-10",
                                                "rounded-full",
                                                "bg-[var(--surface-alt)]",
                                                "inline-flex",
                                                "items-center",
                                                "justify-center",
                                                "text-[var(--muted)]"
                                            )}>
                                                <Icon name={IconName::User} size={20} />
                                            </span>
                                        },
                                    }
                                }
                                <div class={classes!("flex-1")}>
                                    <div class={classes!("flex", "items-center", "gap-2", "mb-2")}>
                                        <span class={classes!("font-semibold")}>
                                            { comment.author_name() }
                                        </span>
                                        <span class={classes!("text-sm", "text-[var(--muted)]")}>
                                            { format_date(comment.created_at.as_deref()) }
                                        </span>
                                    </div>
                                    <p class={classes!("m-0", "text-[var(--muted)]", "leading-relaxed")}>
                                        { &comment.content }
                                    </p>
                                </div>
                            </div>
                        </article>
                    }
                }) }
            </div>
        </section>
    }
}
