use crate::analytics::BlogAnalytics;
use crate::routes::blog::{BlogApiError, ErrorResponse, queries};
use crate::startup::AppState;
use axum::extract::State;
use axum::response::Json;

/// Blog analytics
///
/// Post counts by status, total views, posts per category and the ten most
/// used tags, computed over the whole collection.
#[utoipa::path(
    get,
    path = "/api/blog/analytics",
    tag = "blog",
    responses(
        (status = 200, description = "Aggregated blog statistics", body = BlogAnalytics),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[tracing::instrument(name = "Get blog analytics", skip(state))]
pub async fn get_blog_analytics(
    State(state): State<AppState>,
) -> Result<Json<BlogAnalytics>, BlogApiError> {
    let snapshot = queries::get_all_posts(&state.store).await?;
    if snapshot.degraded {
        tracing::warn!("Computing analytics over an empty collection after a storage failure");
    }
    Ok(Json(BlogAnalytics::from_posts(&snapshot.posts)))
}
