use super::{BlogStore, Change, Snapshot, StoreError};
use crate::domain::{BlogPost, NewBlogPost, UpdateBlogPost};
use chrono::Utc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletePostResult {
    pub is_deleted: bool,
    pub title: String,
}

impl BlogStore {
    #[tracing::instrument(name = "Create blog post", skip(self, new_post), fields(title = %new_post.title))]
    pub fn create_post(&self, new_post: NewBlogPost) -> Result<BlogPost, StoreError> {
        let post = BlogPost::create(new_post, Utc::now());
        self.modify(|posts| {
            if posts.iter().any(|existing| existing.slug == post.slug) {
                tracing::warn!(slug = %post.slug, "Another post already uses this slug");
            }
            posts.push(post.clone());
            Change::Commit(post)
        })
    }

    #[tracing::instrument(name = "Update blog post", skip(self, update))]
    pub fn update_post(
        &self,
        post_id: &str,
        update: UpdateBlogPost,
    ) -> Result<Option<BlogPost>, StoreError> {
        self.modify(|posts| match posts.iter_mut().find(|post| post.id == post_id) {
            Some(post) => {
                post.apply_update(update, Utc::now());
                Change::Commit(Some(post.clone()))
            }
            None => Change::Discard(None),
        })
    }

    #[tracing::instrument(name = "Delete blog post", skip(self))]
    pub fn delete_post(&self, post_id: &str) -> Result<DeletePostResult, StoreError> {
        self.modify(|posts| {
            let Some(position) = posts.iter().position(|post| post.id == post_id) else {
                return Change::Discard(DeletePostResult {
                    is_deleted: false,
                    title: String::new(),
                });
            };
            let removed = posts.remove(position);
            Change::Commit(DeletePostResult {
                is_deleted: true,
                title: removed.title,
            })
        })
    }

    /// Increment the view counter of the first published post with `slug`.
    #[tracing::instrument(name = "Record blog post view", skip(self))]
    pub fn record_view(&self, slug: &str) -> Result<Option<BlogPost>, StoreError> {
        self.modify(|posts| {
            match posts
                .iter_mut()
                .find(|post| post.slug == slug && post.is_published())
            {
                Some(post) => {
                    post.views += 1;
                    Change::Commit(Some(post.clone()))
                }
                None => Change::Discard(None),
            }
        })
    }

    /// Snapshot narrowed to the post with `post_id`. `posts` holds at most
    /// one entry; `degraded` is kept so callers can tell "missing" from
    /// "unreadable".
    pub fn find_by_id(&self, post_id: &str) -> Result<Snapshot, StoreError> {
        let mut snapshot = self.read()?;
        snapshot.posts.retain(|post| post.id == post_id);
        snapshot.posts.truncate(1);
        Ok(snapshot)
    }

    /// First published post carrying `slug`, in collection order. Slugs are
    /// not unique. Does not touch the view counter.
    pub fn find_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, StoreError> {
        let snapshot = self.published_posts()?;
        Ok(snapshot.posts.into_iter().find(|post| post.slug == slug))
    }

    pub fn published_posts(&self) -> Result<Snapshot, StoreError> {
        let mut snapshot = self.read()?;
        snapshot.posts.retain(BlogPost::is_published);
        Ok(snapshot)
    }
}
