use crate::telemetry::error_chain_fmt;
use crate::tools::{Course, GpaError, GpaSummary, calculate_gpa};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Deserialize;

use super::blog::ErrorResponse;

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct GpaRequest {
    pub courses: Vec<Course>,
}

#[derive(thiserror::Error)]
pub enum ToolsError {
    #[error(transparent)]
    InvalidInput(#[from] GpaError),
}

impl std::fmt::Debug for ToolsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl IntoResponse for ToolsError {
    fn into_response(self) -> Response {
        let status = match self {
            ToolsError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        };
        let body = ErrorResponse {
            success: false,
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Calculate a GPA
///
/// Credit-weighted grade point average on the 4.0 scale.
#[utoipa::path(
    post,
    path = "/api/tools/gpa",
    tag = "tools",
    request_body = GpaRequest,
    responses(
        (status = 200, description = "Calculated GPA", body = GpaSummary),
        (status = 400, description = "Invalid credits", body = ErrorResponse),
        (status = 422, description = "Unknown letter grade or malformed body"),
    )
)]
#[tracing::instrument(name = "Calculate GPA", skip(request))]
pub async fn calculate_gpa_endpoint(
    Json(request): Json<GpaRequest>,
) -> Result<Json<GpaSummary>, ToolsError> {
    let summary = calculate_gpa(&request.courses)?;
    Ok(Json(summary))
}
