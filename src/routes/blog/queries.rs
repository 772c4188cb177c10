//! Async entry points into the blocking blog store.

use crate::blog_store::{BlogStore, DeletePostResult, Snapshot, StoreError};
use crate::domain::{BlogPost, NewBlogPost, UpdateBlogPost};
use crate::telemetry::spawn_blocking_with_tracing;
use anyhow::Context;
use std::sync::Arc;

async fn with_store<T, F>(store: &Arc<BlogStore>, f: F) -> Result<T, anyhow::Error>
where
    F: FnOnce(&BlogStore) -> Result<T, StoreError> + Send + 'static,
    T: Send + 'static,
{
    let store = Arc::clone(store);
    let result = spawn_blocking_with_tracing(move || f(&store))
        .await
        .context("Failed to spawn blocking task.")?;
    Ok(result?)
}

#[tracing::instrument(name = "Fetch published blog posts from store", skip(store))]
pub async fn get_published_posts(store: &Arc<BlogStore>) -> Result<Snapshot, anyhow::Error> {
    with_store(store, |store| store.published_posts()).await
}

#[tracing::instrument(name = "Fetch all blog posts from store", skip(store))]
pub async fn get_all_posts(store: &Arc<BlogStore>) -> Result<Snapshot, anyhow::Error> {
    with_store(store, |store| store.read()).await
}

#[tracing::instrument(name = "Fetch blog post by id from store", skip(store))]
pub async fn find_post_by_id(
    store: &Arc<BlogStore>,
    post_id: String,
) -> Result<Snapshot, anyhow::Error> {
    with_store(store, move |store| store.find_by_id(&post_id)).await
}

#[tracing::instrument(name = "Fetch published blog post by slug from store", skip(store))]
pub async fn find_published_post(
    store: &Arc<BlogStore>,
    slug: String,
) -> Result<Option<BlogPost>, anyhow::Error> {
    with_store(store, move |store| store.find_by_slug(&slug)).await
}

#[tracing::instrument(name = "Record a view of a published blog post", skip(store))]
pub async fn view_published_post(
    store: &Arc<BlogStore>,
    slug: String,
) -> Result<Option<BlogPost>, anyhow::Error> {
    with_store(store, move |store| store.record_view(&slug)).await
}

#[tracing::instrument(name = "Insert blog post into store", skip(store, new_post))]
pub async fn insert_post(
    store: &Arc<BlogStore>,
    new_post: NewBlogPost,
) -> Result<BlogPost, anyhow::Error> {
    with_store(store, move |store| store.create_post(new_post)).await
}

#[tracing::instrument(name = "Update blog post in store", skip(store, update))]
pub async fn update_post(
    store: &Arc<BlogStore>,
    post_id: String,
    update: UpdateBlogPost,
) -> Result<Option<BlogPost>, anyhow::Error> {
    with_store(store, move |store| store.update_post(&post_id, update)).await
}

#[tracing::instrument(name = "Delete blog post from store", skip(store))]
pub async fn delete_post(
    store: &Arc<BlogStore>,
    post_id: String,
) -> Result<DeletePostResult, anyhow::Error> {
    with_store(store, move |store| store.delete_post(&post_id)).await
}
