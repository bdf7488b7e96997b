// Reusable components live here.

pub mod blog_card;
pub mod comment_list;
pub mod error_state;
pub mod footer;
pub mod icons;
pub mod image_with_fallback;
pub mod loading_spinner;
pub mod newsletter_form;
pub mod raw_html;
pub mod scroll_to_top_button;
pub mod share_menu;
pub mod stats_card;
pub mod theme_toggle;
pub mod toc_panel;
pub mod topbar;
