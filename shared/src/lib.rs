use serde::{Deserialize, Serialize};

// Response envelope shared by every content endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

/// One article as delivered by the content API.
///
/// The backend payload is loosely typed: identifier, cover image, timestamps
/// and reading time each arrive under one of several historical field names,
/// and most fields can be absent. Every tolerated spelling gets its own
/// serde field here, and the accessor methods implement the documented
/// coalescing order exactly once. Render code must go through the accessors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    #[serde(default, rename = "_id")]
    pub record_id: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    // Server-rendered HTML, not Markdown.
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub category: Option<CategoryRef>,
    #[serde(default)]
    pub author: Option<Author>,
    #[serde(default, rename = "publishedAt")]
    pub published_at: Option<String>,
    #[serde(default, rename = "createdAt")]
    pub created_at_camel: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub featured_image: Option<String>,
    #[serde(default, rename = "featuredImage")]
    pub featured_image_camel: Option<String>,
    #[serde(default, rename = "readingTime")]
    pub reading_time: Option<u32>,
    #[serde(default, rename = "readTime")]
    pub read_time: Option<u32>,
    #[serde(default)]
    pub views: Option<u64>,
    #[serde(default)]
    pub likes: Option<u64>,
    #[serde(default)]
    pub comments: Option<Comments>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, rename = "relatedArticles")]
    pub related_articles: Vec<Article>,
}

impl Article {
    /// Stable route identifier: `_id`, then `id`, then `slug`.
    pub fn identifier(&self) -> &str {
        non_empty(&self.record_id)
            .or_else(|| non_empty(&self.id))
            .or_else(|| non_empty(&self.slug))
            .unwrap_or_default()
    }

    /// First non-empty of `image`, `featured_image`, `featuredImage`.
    pub fn cover_image(&self) -> Option<&str> {
        non_empty(&self.image)
            .or_else(|| non_empty(&self.featured_image))
            .or_else(|| non_empty(&self.featured_image_camel))
    }

    pub fn category_name(&self) -> Option<&str> {
        self.category.as_ref().and_then(CategoryRef::name)
    }

    pub fn author_name(&self) -> &str {
        self.author
            .as_ref()
            .and_then(|author| non_empty(&author.full_name))
            .unwrap_or("Anonymous")
    }

    /// Publish timestamp: `publishedAt`, then `createdAt`, then `created_at`.
    pub fn published_date(&self) -> Option<&str> {
        non_empty(&self.published_at)
            .or_else(|| non_empty(&self.created_at_camel))
            .or_else(|| non_empty(&self.created_at))
    }

    /// Estimated reading time in minutes, defaulting to 5.
    pub fn reading_minutes(&self) -> u32 {
        self.reading_time.or(self.read_time).unwrap_or(5)
    }

    pub fn view_count(&self) -> u64 {
        self.views.unwrap_or(0)
    }

    pub fn like_count(&self) -> u64 {
        self.likes.unwrap_or(0)
    }

    pub fn comment_count(&self) -> u64 {
        self.comments.as_ref().map(Comments::count).unwrap_or(0)
    }

    pub fn comment_list(&self) -> &[Comment] {
        self.comments.as_ref().map(Comments::list).unwrap_or(&[])
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    #[serde(default, rename = "fullName")]
    pub full_name: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
}

/// Category field of an article: either a full record or a bare name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoryRef {
    Info(Category),
    Name(String),
}

impl CategoryRef {
    pub fn name(&self) -> Option<&str> {
        match self {
            CategoryRef::Info(category) => non_empty_str(&category.name),
            CategoryRef::Name(name) => non_empty_str(name),
        }
    }

    /// Route target for the category, preferring `_id` over `slug`.
    pub fn link_target(&self) -> Option<&str> {
        match self {
            CategoryRef::Info(category) => category.link_target(),
            CategoryRef::Name(name) => non_empty_str(name),
        }
    }

    pub fn color(&self) -> Option<&str> {
        match self {
            CategoryRef::Info(category) => non_empty(&category.color),
            CategoryRef::Name(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default, rename = "_id")]
    pub record_id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default, rename = "articleCount")]
    pub article_count: Option<u64>,
}

impl Category {
    pub fn link_target(&self) -> Option<&str> {
        non_empty(&self.record_id).or_else(|| non_empty(&self.slug))
    }

    pub fn total_articles(&self) -> u64 {
        self.count.or(self.article_count).unwrap_or(0)
    }
}

/// Comments field of an article: the API returns either the embedded list or
/// just a count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Comments {
    List(Vec<Comment>),
    Count(u64),
}

impl Comments {
    pub fn count(&self) -> u64 {
        match self {
            Comments::List(comments) => comments.len() as u64,
            Comments::Count(count) => *count,
        }
    }

    pub fn list(&self) -> &[Comment] {
        match self {
            Comments::List(comments) => comments,
            Comments::Count(_) => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(default, rename = "_id")]
    pub record_id: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub user: Option<Author>,
    #[serde(default)]
    pub content: String,
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<String>,
}

impl Comment {
    pub fn author_name(&self) -> &str {
        self.user
            .as_ref()
            .and_then(|user| non_empty(&user.full_name))
            .unwrap_or("Anonymous")
    }
}

/// Site-level counters for the home page stats band. Values arrive as either
/// numbers or pre-formatted display strings depending on backend version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SiteStats {
    #[serde(default, rename = "totalArticles")]
    pub total_articles: Option<StatValue>,
    #[serde(default, rename = "totalWriters")]
    pub total_writers: Option<StatValue>,
    #[serde(default, rename = "monthlyViews")]
    pub monthly_views: Option<StatValue>,
    #[serde(default)]
    pub rating: Option<StatValue>,
}

impl SiteStats {
    /// Static values shown when the stats endpoint is unavailable.
    pub fn fallback() -> Self {
        SiteStats {
            total_articles: Some(StatValue::Text("150+".to_string())),
            total_writers: Some(StatValue::Text("25+".to_string())),
            monthly_views: Some(StatValue::Text("50K+".to_string())),
            rating: Some(StatValue::Text("4.9".to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    Number(f64),
    Text(String),
}

impl std::fmt::Display for StatValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatValue::Number(value) if value.fract() == 0.0 => {
                write!(f, "{}", *value as i64)
            },
            StatValue::Number(value) => write!(f, "{value}"),
            StatValue::Text(text) => f.write_str(text),
        }
    }
}

/// Display helper used by the stats band: the value, or a fixed fallback.
pub fn stat_or(value: &Option<StatValue>, fallback: &str) -> String {
    match value {
        Some(value) => value.to_string(),
        None => fallback.to_string(),
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().and_then(non_empty_str)
}

fn non_empty_str(value: &str) -> Option<&str> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_payload_defaults_every_field() {
        let article: Article = serde_json::from_str("{}").expect("deserialize empty object");

        assert_eq!(article.identifier(), "");
        assert_eq!(article.title, "");
        assert_eq!(article.cover_image(), None);
        assert_eq!(article.category_name(), None);
        assert_eq!(article.author_name(), "Anonymous");
        assert_eq!(article.published_date(), None);
        assert_eq!(article.reading_minutes(), 5);
        assert_eq!(article.view_count(), 0);
        assert_eq!(article.like_count(), 0);
        assert_eq!(article.comment_count(), 0);
        assert!(article.tags.is_empty());
    }

    #[test]
    fn identifier_prefers_record_id_then_id_then_slug() {
        let both: Article =
            serde_json::from_str(r#"{"_id":"abc123","id":"other","slug":"my-post"}"#)
                .expect("deserialize");
        assert_eq!(both.identifier(), "abc123");

        let slug_only: Article =
            serde_json::from_str(r#"{"slug":"my-post"}"#).expect("deserialize");
        assert_eq!(slug_only.identifier(), "my-post");
    }

    #[test]
    fn cover_image_walks_the_field_chain_and_skips_empties() {
        let article: Article = serde_json::from_str(
            r#"{"image":"","featured_image":"a.jpg","featuredImage":"b.jpg"}"#,
        )
        .expect("deserialize");
        assert_eq!(article.cover_image(), Some("a.jpg"));

        let camel_only: Article =
            serde_json::from_str(r#"{"featuredImage":"b.jpg"}"#).expect("deserialize");
        assert_eq!(camel_only.cover_image(), Some("b.jpg"));
    }

    #[test]
    fn category_accepts_bare_name_or_record() {
        let named: Article =
            serde_json::from_str(r#"{"category":"Technology"}"#).expect("deserialize");
        assert_eq!(named.category_name(), Some("Technology"));

        let record: Article = serde_json::from_str(
            r##"{"category":{"_id":"c1","name":"Design","color":"#ec4899"}}"##,
        )
        .expect("deserialize");
        assert_eq!(record.category_name(), Some("Design"));
        assert_eq!(record.category.as_ref().and_then(CategoryRef::color), Some("#ec4899"));
        assert_eq!(record.category.as_ref().and_then(CategoryRef::link_target), Some("c1"));
    }

    #[test]
    fn comments_accept_count_list_or_null() {
        let counted: Article =
            serde_json::from_str(r#"{"comments":7}"#).expect("deserialize");
        assert_eq!(counted.comment_count(), 7);
        assert!(counted.comment_list().is_empty());

        let listed: Article = serde_json::from_str(
            r#"{"comments":[{"content":"Nice read","user":{"fullName":"Ada"}}]}"#,
        )
        .expect("deserialize");
        assert_eq!(listed.comment_count(), 1);
        assert_eq!(listed.comment_list()[0].author_name(), "Ada");

        let null: Article = serde_json::from_str(r#"{"comments":null}"#).expect("deserialize");
        assert_eq!(null.comment_count(), 0);
    }

    #[test]
    fn published_date_falls_back_through_timestamp_spellings() {
        let snake: Article =
            serde_json::from_str(r#"{"created_at":"2024-01-02"}"#).expect("deserialize");
        assert_eq!(snake.published_date(), Some("2024-01-02"));

        let preferred: Article = serde_json::from_str(
            r#"{"publishedAt":"2024-03-05","created_at":"2024-01-02"}"#,
        )
        .expect("deserialize");
        assert_eq!(preferred.published_date(), Some("2024-03-05"));
    }

    #[test]
    fn stats_tolerate_numbers_and_strings() {
        let stats: SiteStats = serde_json::from_str(
            r#"{"totalArticles":152,"monthlyViews":"50K+","rating":4.9}"#,
        )
        .expect("deserialize");

        assert_eq!(stat_or(&stats.total_articles, "150+"), "152");
        assert_eq!(stat_or(&stats.total_writers, "25+"), "25+");
        assert_eq!(stat_or(&stats.monthly_views, "50K+"), "50K+");
        assert_eq!(stat_or(&stats.rating, "4.9"), "4.9");
    }

    #[test]
    fn envelope_carries_optional_data_and_message() {
        let ok: ApiEnvelope<SiteStats> =
            serde_json::from_str(r#"{"success":true,"data":{"rating":5}}"#)
                .expect("deserialize");
        assert!(ok.success);
        assert!(ok.data.is_some());

        let failed: ApiEnvelope<SiteStats> =
            serde_json::from_str(r#"{"success":false,"message":"Article not found"}"#)
                .expect("deserialize");
        assert!(!failed.success);
        assert_eq!(failed.message.as_deref(), Some("Article not found"));
    }
}
