use yew::prelude::*;

/// Lucide icon set, inlined as SVG path data.
///
/// Paths come from <https://lucide.dev> and render as stroked outlines in a
/// 24x24 viewBox.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IconName {
    // Navigation
    ArrowLeft,
    ArrowRight,
    ChevronRight,
    ChevronUp,

    // Content
    BookOpen,
    Calendar,
    Clock,
    Eye,
    Hash,
    Heart,
    MessageCircle,
    Star,
    TrendingUp,

    // People
    User,
    Users,
    PenTool,

    // Actions
    LogIn,
    Mail,
    Menu,
    Search,
    Send,
    Share,
    X,

    // Share targets
    Facebook,
    Github,
    LinkIcon,
    Linkedin,
    Twitter,

    // Theme
    Moon,
    Sun,

    // Decorations
    AlertCircle,
    Award,
    Globe,
    Sparkles,
    Zap,
}

impl IconName {
    pub fn path(&self) -> &'static str {
        match self {
            IconName::ArrowLeft => "M12 19l-7-7 7-7M5 12h14",
            IconName::ArrowRight => "M5 12h14M12 5l7 7-7 7",
            IconName::ChevronRight => "m9 18 6-6-6-6",
            IconName::ChevronUp => "m18 15-6-6-6 6",

            IconName::BookOpen => {
                "M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2zM22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 \
                 3-3h7z"
            },
            IconName::Calendar => {
                "M8 2v4M16 2v4M3 10h18M5 4h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 \
                 1-2-2V6a2 2 0 0 1 2-2z"
            },
            IconName::Clock => "M12 6v6l4 2M21 12a9 9 0 1 1-18 0 9 9 0 0 1 18 0z",
            IconName::Eye => {
                "M2 12s3-7 10-7 10 7 10 7-3 7-10 7-10-7-10-7zM15 12a3 3 0 1 1-6 0 3 3 0 0 1 6 0z"
            },
            IconName::Hash => "M4 9h16M4 15h16M10 3L8 21M16 3l-2 18",
            IconName::Heart => {
                "M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 \
                 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7z"
            },
            IconName::MessageCircle => {
                "M21 11.5a8.38 8.38 0 0 1-.9 3.8 8.5 8.5 0 0 1-7.6 4.7 8.38 8.38 0 0 \
                 1-3.8-.9L3 21l1.9-5.7a8.38 8.38 0 0 1-.9-3.8 8.5 8.5 0 0 1 4.7-7.6 8.38 8.38 0 \
                 0 1 3.8-.9h.5a8.48 8.48 0 0 1 8 8z"
            },
            IconName::Star => {
                "M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 \
                 9.27l6.91-1.01z"
            },
            IconName::TrendingUp => "M22 7l-8.5 8.5-5-5L2 17M16 7h6v6",

            IconName::User => {
                "M20 21v-2a4 4 0 0 0-4-4H8a4 4 0 0 0-4 4v2M16 7a4 4 0 1 1-8 0 4 4 0 0 1 8 0z"
            },
            IconName::Users => {
                "M17 21v-2a4 4 0 0 0-4-4H5a4 4 0 0 0-4 4v2M13 7a4 4 0 1 1-8 0 4 4 0 0 1 8 \
                 0zM23 21v-2a4 4 0 0 0-3-3.87M16 3.13a4 4 0 0 1 0 7.75"
            },
            IconName::PenTool => {
                "M12 19l7-7 3 3-7 7zM18 13l-1.5-7.5L2 2l3.5 14.5L13 18zM2 2l7.586 7.586M11 \
                 13a2 2 0 1 0 0-4 2 2 0 0 0 0 4z"
            },

            IconName::LogIn => {
                "M15 3h4a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2h-4M10 17l5-5-5-5M15 12H3"
            },
            IconName::Mail => {
                "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 \
                 2-2zM22 6l-10 7L2 6"
            },
            IconName::Menu => "M4 12h16M4 6h16M4 18h16",
            IconName::Search => "m21 21-6-6m2-5a7 7 0 1 1-14 0 7 7 0 0 1 14 0z",
            IconName::Send => "M22 2L11 13M22 2l-7 20-4-9-9-4z",
            IconName::Share => {
                "M15.5 6.5l-7 4M15.5 17.5l-7-4M21 5a3 3 0 1 1-6 0 3 3 0 0 1 6 0zM9 12a3 3 0 1 \
                 1-6 0 3 3 0 0 1 6 0zM21 19a3 3 0 1 1-6 0 3 3 0 0 1 6 0z"
            },
            IconName::X => "M18 6 6 18M6 6l12 12",

            IconName::Facebook => {
                "M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z"
            },
            IconName::Github => {
                "M9 19c-5 1.5-5-2.5-7-3m14 6v-3.87a3.37 3.37 0 0 0-.94-2.61c3.14-.35 \
                 6.44-1.54 6.44-7A5.44 5.44 0 0 0 20 4.77 5.07 5.07 0 0 0 19.91 1S18.73.65 16 \
                 2.48a13.38 13.38 0 0 0-7 0C6.27.65 5.09 1 5.09 1A5.07 5.07 0 0 0 5 \
                 4.77a5.44 5.44 0 0 0-1.5 3.78c0 5.42 3.3 6.61 6.44 7A3.37 3.37 0 0 0 9 \
                 18.13V22"
            },
            IconName::LinkIcon => {
                "M10 13a5 5 0 0 0 7.54.54l3-3a5 5 0 0 0-7.07-7.07l-1.72 1.71M14 11a5 5 0 0 \
                 0-7.54-.54l-3 3a5 5 0 0 0 7.07 7.07l1.71-1.71"
            },
            IconName::Linkedin => {
                "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-4 0v7h-4V8h4v1.5A6 6 0 0 1 16 8zM6 \
                 9H2v12h4zM4 6a2 2 0 1 0 0-4 2 2 0 0 0 0 4z"
            },
            IconName::Twitter => {
                "M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 \
                 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z"
            },

            IconName::Moon => "M21 12.79A9 9 0 1 1 11.21 3 7 7 0 0 0 21 12.79z",
            IconName::Sun => {
                "M12 17a5 5 0 1 0 0-10 5 5 0 0 0 0 10zM12 1v2M12 21v2M4.22 4.22l1.42 \
                 1.42M18.36 18.36l1.42 1.42M1 12h2M21 12h2M4.22 19.78l1.42-1.42M18.36 \
                 5.64l1.42-1.42"
            },

            IconName::AlertCircle => "M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20zM12 8v4M12 16h.01",
            IconName::Award => {
                "M12 15a7 7 0 1 0 0-14 7 7 0 0 0 0 14zM8.21 13.89L7 23l5-3 5 3-1.21-9.12"
            },
            IconName::Globe => {
                "M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20zM2 12h20M12 2a15.3 15.3 0 0 1 4 10 \
                 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z"
            },
            IconName::Sparkles => {
                "M12 3l1.9 5.8a2 2 0 0 0 1.3 1.3L21 12l-5.8 1.9a2 2 0 0 0-1.3 1.3L12 \
                 21l-1.9-5.8a2 2 0 0 0-1.3-1.3L3 12l5.8-1.9a2 2 0 0 0 1.3-1.3z"
            },
            IconName::Zap => "M13 2L3 14h9l-1 8 10-12h-9l1-8z",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub name: IconName,

    #[prop_or(24)]
    pub size: u32,

    #[prop_or_else(|| "currentColor".to_string())]
    pub color: String,

    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    let IconProps { name, size, color, class } = props;

    let stroke_width = if *size <= 16 { 2.5 } else { 2.0 };

    html! {
        <svg
            class={classes!("inline-flex", "shrink-0", class.clone())}
            width={size.to_string()}
            height={size.to_string()}
            viewBox="0 0 24 24"
            fill="none"
            stroke={color.clone()}
            stroke-width={stroke_width.to_string()}
            stroke-linecap="round"
            stroke-linejoin="round"
            xmlns="http://www.w3.org/2000/svg"
            aria-hidden="true"
        >
            <path d={name.path()} />
        </svg>
    }
}
