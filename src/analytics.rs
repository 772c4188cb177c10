//! Aggregates derived from a loaded blog collection.

use crate::domain::BlogPost;
use serde::Serialize;
use std::collections::HashMap;

/// Number of tags reported in the analytics summary.
pub const TOP_TAG_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct TagCount {
    pub tag: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlogAnalytics {
    pub total_posts: usize,
    pub published_posts: usize,
    pub draft_posts: usize,
    pub total_views: u64,
    pub categories: Vec<CategoryCount>,
    pub top_tags: Vec<TagCount>,
}

impl BlogAnalytics {
    pub fn from_posts(posts: &[BlogPost]) -> Self {
        let published_posts = published(posts).count();
        BlogAnalytics {
            total_posts: posts.len(),
            published_posts,
            draft_posts: posts.len() - published_posts,
            total_views: total_views(posts),
            categories: category_counts(posts),
            top_tags: top_tags(posts, TOP_TAG_LIMIT),
        }
    }
}

pub fn published(posts: &[BlogPost]) -> impl Iterator<Item = &BlogPost> {
    posts.iter().filter(|post| post.is_published())
}

pub fn total_views(posts: &[BlogPost]) -> u64 {
    posts.iter().map(|post| post.views).sum()
}

/// Occurrences of each category, highest count first, ties by name.
pub fn category_counts(posts: &[BlogPost]) -> Vec<CategoryCount> {
    ranked(posts.iter().map(|post| post.category.as_str()))
        .into_iter()
        .map(|(category, count)| CategoryCount { category, count })
        .collect()
}

/// Occurrences of each tag across all posts, highest count first, ties by
/// name. A tag listed twice on one post counts twice.
pub fn tag_frequencies(posts: &[BlogPost]) -> Vec<TagCount> {
    ranked(posts.iter().flat_map(|post| post.tags.iter().map(String::as_str)))
        .into_iter()
        .map(|(tag, count)| TagCount { tag, count })
        .collect()
}

pub fn top_tags(posts: &[BlogPost], limit: usize) -> Vec<TagCount> {
    let mut tags = tag_frequencies(posts);
    tags.truncate(limit);
    tags
}

fn ranked<'a>(values: impl Iterator<Item = &'a str>) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for value in values {
        *counts.entry(value).or_default() += 1;
    }
    let mut ranked: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(value, count)| (value.to_owned(), count))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked
}
