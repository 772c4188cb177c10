use super::{calculate_read_time, generate_id, generate_slug};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum BlogPostStatus {
    Draft,
    Published,
}

impl BlogPostStatus {
    pub fn as_str(&self) -> &str {
        match self {
            BlogPostStatus::Draft => "draft",
            BlogPostStatus::Published => "published",
        }
    }
}

impl std::fmt::Display for BlogPostStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Search engine and social sharing metadata attached to a post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SeoMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_url: Option<String>,
}

/// A blog post as persisted in the posts file.
///
/// Field names follow the camelCase layout of the on-disk JSON array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: String,
    pub author: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<String>,
    pub published_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub status: BlogPostStatus,
    #[serde(default)]
    pub seo: SeoMetadata,
    pub read_time: u32,
    #[serde(default)]
    pub views: u64,
}

impl BlogPost {
    /// Build a fresh record: new id, derived slug and read time, zero views.
    pub fn create(new_post: NewBlogPost, now: DateTime<Utc>) -> Self {
        BlogPost {
            id: generate_id(),
            slug: generate_slug(&new_post.title),
            read_time: calculate_read_time(&new_post.content),
            title: new_post.title,
            content: new_post.content,
            excerpt: new_post.excerpt,
            author: new_post.author,
            category: new_post.category,
            tags: new_post.tags,
            featured_image: new_post.featured_image,
            published_at: now,
            updated_at: now,
            status: new_post.status,
            seo: new_post.seo.unwrap_or_default(),
            views: 0,
        }
    }

    /// Replace the editable fields. `id`, `published_at` and `views` survive.
    pub fn apply_update(&mut self, update: UpdateBlogPost, now: DateTime<Utc>) {
        self.slug = generate_slug(&update.title);
        self.read_time = calculate_read_time(&update.content);
        self.title = update.title;
        self.content = update.content;
        self.excerpt = update.excerpt;
        self.author = update.author;
        self.category = update.category;
        self.tags = update.tags;
        self.featured_image = update.featured_image;
        self.status = update.status;
        if let Some(seo) = update.seo {
            self.seo = seo;
        }
        self.updated_at = now;
    }

    pub fn is_published(&self) -> bool {
        self.status == BlogPostStatus::Published
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

#[derive(Debug, Clone, Deserialize, Validate, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewBlogPost {
    #[validate(custom(function = "not_blank"))]
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured_image: Option<String>,
    pub status: BlogPostStatus,
    #[serde(default)]
    pub seo: Option<SeoMetadata>,
}

#[derive(Debug, Clone, Deserialize, Validate, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBlogPost {
    #[validate(custom(function = "not_blank"))]
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured_image: Option<String>,
    pub status: BlogPostStatus,
    #[serde(default)]
    pub seo: Option<SeoMetadata>,
}
