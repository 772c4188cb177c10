use crate::blog_store::Snapshot;
use crate::domain::{BlogPost, NewBlogPost, UpdateBlogPost};
use crate::routes::blog::{BlogApiError, ErrorResponse, queries};
use crate::startup::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use serde::Serialize;
use validator::Validate;

#[derive(Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeletePostResponse {
    /// Whether the post was deleted
    pub is_deleted: bool,
    /// Title of the deleted post
    pub title: String,
}

/// Admin callers must not mistake an unreadable store for an empty one.
fn require_healthy(snapshot: Snapshot) -> Result<Vec<BlogPost>, BlogApiError> {
    if snapshot.degraded {
        return Err(BlogApiError::StorageUnavailable);
    }
    Ok(snapshot.posts)
}

/// Admin: Get all blog posts
///
/// Returns all blog posts regardless of status.
#[utoipa::path(
    get,
    path = "/api/admin/blog/posts",
    tag = "admin-blog",
    responses(
        (status = 200, description = "List of all blog posts", body = Vec<BlogPost>),
        (status = 503, description = "Blog storage unreadable", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[tracing::instrument(name = "Admin: Get all blog posts", skip(state))]
pub async fn admin_get_all_posts(
    State(state): State<AppState>,
) -> Result<Json<Vec<BlogPost>>, BlogApiError> {
    let snapshot = queries::get_all_posts(&state.store).await?;
    Ok(Json(require_healthy(snapshot)?))
}

/// Admin: Get single blog post by ID
///
/// Returns a specific blog post regardless of status.
#[utoipa::path(
    get,
    path = "/api/admin/blog/posts/{id}",
    tag = "admin-blog",
    params(
        ("id" = String, Path, description = "Blog post identifier")
    ),
    responses(
        (status = 200, description = "Blog post found", body = BlogPost),
        (status = 404, description = "Blog post not found", body = ErrorResponse),
        (status = 503, description = "Blog storage unreadable", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[tracing::instrument(name = "Admin: Get blog post by id", skip(state))]
pub async fn admin_get_post_by_id(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
) -> Result<Json<BlogPost>, BlogApiError> {
    let snapshot = queries::find_post_by_id(&state.store, post_id).await?;
    require_healthy(snapshot)?
        .into_iter()
        .next()
        .map(Json)
        .ok_or(BlogApiError::NotFound)
}

/// Admin: Create new blog post
///
/// The id, slug, read time and timestamps are generated server side.
#[utoipa::path(
    post,
    path = "/api/admin/blog/posts",
    tag = "admin-blog",
    request_body = NewBlogPost,
    responses(
        (status = 201, description = "Blog post created", body = BlogPost),
        (status = 400, description = "Blank title", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[tracing::instrument(name = "Admin: Create blog post", skip(state, new_post))]
pub async fn admin_create_post(
    State(state): State<AppState>,
    Json(new_post): Json<NewBlogPost>,
) -> Result<impl IntoResponse, BlogApiError> {
    new_post.validate()?;
    let post = queries::insert_post(&state.store, new_post).await?;
    tracing::info!(post_id = %post.id, slug = %post.slug, "Created blog post");
    Ok((StatusCode::CREATED, Json(post)))
}

/// Admin: Update existing blog post
///
/// Replaces the editable fields. Slug and read time are recomputed.
#[utoipa::path(
    put,
    path = "/api/admin/blog/posts/{id}",
    tag = "admin-blog",
    params(
        ("id" = String, Path, description = "Blog post identifier")
    ),
    request_body = UpdateBlogPost,
    responses(
        (status = 200, description = "Blog post updated", body = BlogPost),
        (status = 400, description = "Blank title", body = ErrorResponse),
        (status = 404, description = "Blog post not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[tracing::instrument(name = "Admin: Update blog post", skip(state, update_post))]
pub async fn admin_update_post(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
    Json(update_post): Json<UpdateBlogPost>,
) -> Result<Json<BlogPost>, BlogApiError> {
    update_post.validate()?;
    queries::update_post(&state.store, post_id, update_post)
        .await?
        .map(Json)
        .ok_or(BlogApiError::NotFound)
}

/// Admin: Delete blog post
///
/// Permanently removes a blog post. Deleting an unknown id is not an error.
#[utoipa::path(
    delete,
    path = "/api/admin/blog/posts/{id}",
    tag = "admin-blog",
    params(
        ("id" = String, Path, description = "Blog post identifier")
    ),
    responses(
        (status = 200, description = "Delete processed", body = DeletePostResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[tracing::instrument(name = "Admin: Delete blog post", skip(state))]
pub async fn admin_delete_post(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
) -> Result<Json<DeletePostResponse>, BlogApiError> {
    let result = queries::delete_post(&state.store, post_id).await?;

    Ok(Json(DeletePostResponse {
        is_deleted: result.is_deleted,
        title: result.title,
    }))
}
