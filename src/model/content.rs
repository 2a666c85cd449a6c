use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ContentListItemDto {
    pub slug: String,
    pub title: String,
    pub category: String,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ContentDto {
    pub slug: String,
    pub title: String,
    pub category: String,
    /// Body rendered from markdown to HTML server-side.
    pub html: String,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateContentDto {
    pub slug: String,
    pub title: String,
    /// Markdown source.
    pub body: String,
    pub category: String,
    #[serde(default)]
    pub published: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateContentDto {
    pub title: Option<String>,
    pub body: Option<String>,
    pub category: Option<String>,
    pub published: Option<bool>,
}

/// Admin view of a content item, markdown source included.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AdminContentDto {
    pub id: i32,
    pub slug: String,
    pub title: String,
    pub body: String,
    pub category: String,
    pub published: bool,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub updated_at: DateTime<Utc>,
}
