use gloo_net::http::Request;
use inkly_shared::{ApiEnvelope, Article, Category, SiteStats};
use serde::Deserialize;

use crate::config::API_BASE;

#[derive(Debug, Deserialize)]
struct ArticleListData {
    #[serde(default)]
    articles: Vec<Article>,
}

#[derive(Debug, Deserialize)]
struct CategoryListData {
    #[serde(default)]
    categories: Vec<Category>,
}

/// Fetch one article by identifier. `Ok(None)` means the backend has no
/// record for it (404); `Err` covers every other failure.
pub async fn fetch_article(identifier: &str) -> Result<Option<Article>, String> {
    let url = format!("{}/users/articles/{}", API_BASE, urlencoding::encode(identifier));

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Network error: {:?}", e))?;

    if response.status() == 404 {
        return Ok(None);
    }
    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let envelope: ApiEnvelope<Article> = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {:?}", e))?;

    unwrap_envelope(envelope).map(Some)
}

/// Fetch the newest articles, capped at `limit`.
pub async fn fetch_articles(limit: usize) -> Result<Vec<Article>, String> {
    let url = format!("{}/users/articles?limit={}", API_BASE, limit);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Network error: {:?}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let envelope: ApiEnvelope<ArticleListData> = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {:?}", e))?;

    unwrap_envelope(envelope).map(|data| data.articles)
}

/// Fetch all categories.
pub async fn fetch_categories() -> Result<Vec<Category>, String> {
    let url = format!("{}/categories", API_BASE);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Network error: {:?}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let envelope: ApiEnvelope<CategoryListData> = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {:?}", e))?;

    unwrap_envelope(envelope).map(|data| data.categories)
}

/// Fetch site-level counters for the home page stats band.
pub async fn fetch_stats() -> Result<SiteStats, String> {
    let url = format!("{}/stats", API_BASE);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Network error: {:?}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let envelope: ApiEnvelope<SiteStats> = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {:?}", e))?;

    unwrap_envelope(envelope)
}

fn unwrap_envelope<T>(envelope: ApiEnvelope<T>) -> Result<T, String> {
    if !envelope.success {
        return Err(envelope
            .message
            .unwrap_or_else(|| "Request rejected by the server".to_string()));
    }
    envelope
        .data
        .ok_or_else(|| "Response envelope carried no data".to_string())
}
