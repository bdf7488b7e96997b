/// Configuration for the frontend application.
///
/// The API host is baked in at compile time so the deployed bundle carries no
/// runtime configuration step. Production builds set `INKLY_API_BASE` in the
/// release workflow; local development falls back to the dev server.
pub const API_BASE: &str = match option_env!("INKLY_API_BASE") {
    Some(url) => url,
    None => "http://localhost:3000/api",
};

/// Placeholder shown when an article carries no usable cover image, or when
/// the chosen image fails to load.
pub const FALLBACK_COVER_IMAGE: &str =
    "https://images.unsplash.com/photo-1461749280684-dccba630e2f6?w=600&h=400&fit=crop";

/// Same placeholder scaled for the larger card variants.
pub fn fallback_cover_sized(width: u32, height: u32) -> String {
    format!(
        "https://images.unsplash.com/photo-1461749280684-dccba630e2f6?w={}&h={}&fit=crop",
        width, height
    )
}

/// Helper to construct asset paths relative to the site root.
pub fn asset_path(path: &str) -> String {
    let path = path.strip_prefix('/').unwrap_or(path);
    format!("/{}", path)
}
