pub mod queries;

use crate::domain::BlogPost;
use crate::routes::constants::{
    ERROR_POST_NOT_FOUND, ERROR_SOMETHING_WENT_WRONG, ERROR_STORAGE_UNAVAILABLE,
};
use crate::startup::AppState;
use crate::telemetry::error_chain_fmt;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;

#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    /// Always `false`
    pub success: bool,
    /// Human readable error message
    pub error: String,
}

#[derive(thiserror::Error)]
pub enum BlogApiError {
    #[error("{}", ERROR_POST_NOT_FOUND)]
    NotFound,
    #[error("Invalid blog post: {0}")]
    ValidationError(#[from] validator::ValidationErrors),
    #[error("{}", ERROR_STORAGE_UNAVAILABLE)]
    StorageUnavailable,
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for BlogApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl IntoResponse for BlogApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            BlogApiError::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            BlogApiError::ValidationError(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            BlogApiError::StorageUnavailable => {
                (StatusCode::SERVICE_UNAVAILABLE, self.to_string())
            }
            BlogApiError::UnexpectedError(_) => {
                tracing::error!("Blog API request failed: {:?}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ERROR_SOMETHING_WENT_WRONG.to_string(),
                )
            }
        };
        let body = ErrorResponse {
            success: false,
            error: message,
        };
        (status, Json(body)).into_response()
    }
}

/// Get all published blog posts
///
/// Returns every post with "published" status. An unreadable posts file
/// yields an empty list.
#[utoipa::path(
    get,
    path = "/api/blog/posts",
    tag = "blog",
    responses(
        (status = 200, description = "List of published blog posts", body = Vec<BlogPost>),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[tracing::instrument(name = "Get published blog posts", skip(state))]
pub async fn get_published_posts(
    State(state): State<AppState>,
) -> Result<Json<Vec<BlogPost>>, BlogApiError> {
    let snapshot = queries::get_published_posts(&state.store).await?;
    if snapshot.degraded {
        tracing::warn!("Serving an empty published post listing");
    }
    Ok(Json(snapshot.posts))
}

/// Get a published blog post by slug
///
/// Counts as a read: the post's view counter is incremented. A view that
/// cannot be saved is logged and the post is served with its stored count.
#[utoipa::path(
    get,
    path = "/api/blog/posts/{slug}",
    tag = "blog",
    params(
        ("slug" = String, Path, description = "URL slug derived from the post title")
    ),
    responses(
        (status = 200, description = "Blog post found", body = BlogPost),
        (status = 404, description = "Blog post not found or not published", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[tracing::instrument(name = "Get blog post by slug", skip(state))]
pub async fn get_post_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<BlogPost>, BlogApiError> {
    let post = queries::find_published_post(&state.store, slug.clone())
        .await?
        .ok_or(BlogApiError::NotFound)?;

    match queries::view_published_post(&state.store, slug).await {
        Ok(Some(viewed)) => Ok(Json(viewed)),
        // Unpublished or deleted since the lookup.
        Ok(None) => Err(BlogApiError::NotFound),
        Err(error) => {
            tracing::warn!(
                error.cause_chain = ?error,
                post_id = %post.id,
                "Failed to record blog post view"
            );
            Ok(Json(post))
        }
    }
}
