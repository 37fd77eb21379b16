//! Instance Handlers
//!
//! HTTP handlers exposing the instance summary.

use axum::{
    extract::{Extension, State},
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use crate::domain::models::instance::InstanceSummary;
use crate::infrastructure::driving_adapters::api_rest::dto::instance::InstanceSummaryDto;
use crate::infrastructure::driving_adapters::api_rest::middleware::RequestId;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for instance endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_instance_summary))
        .route("/json", get(get_instance_summary_json))
}

/// GET / - Instance summary as a single text line
///
/// # Responses
///
/// * 200 OK - `[VM Name]:<name>   [Zone]:<zone>   [PrivateIP]:<ip> \n`
/// * 502 Bad Gateway - Metadata endpoint unreachable, failing or incomplete
#[axum::debug_handler]
async fn get_instance_summary(
    State(state): State<AppState>,
    request_id: Option<Extension<RequestId>>,
) -> Result<Response, ApiError> {
    let summary = summarize(&state, request_id).await?;

    Ok((
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        summary.to_string(),
    )
        .into_response())
}

/// GET /json - Instance summary as JSON
///
/// # Responses
///
/// * 200 OK - `{"name", "zone", "private_ip"}`
/// * 502 Bad Gateway - Metadata endpoint unreachable, failing or incomplete
#[axum::debug_handler]
async fn get_instance_summary_json(
    State(state): State<AppState>,
    request_id: Option<Extension<RequestId>>,
) -> Result<Json<InstanceSummaryDto>, ApiError> {
    let summary = summarize(&state, request_id).await?;

    Ok(Json(InstanceSummaryDto::from(summary)))
}

/// Any other path answers GET with the text summary
pub async fn fallback(
    method: Method,
    state: State<AppState>,
    request_id: Option<Extension<RequestId>>,
) -> Result<Response, ApiError> {
    if method != Method::GET && method != Method::HEAD {
        return Ok(StatusCode::METHOD_NOT_ALLOWED.into_response());
    }
    get_instance_summary(state, request_id).await
}

async fn summarize(
    state: &AppState,
    request_id: Option<Extension<RequestId>>,
) -> Result<InstanceSummary, ApiError> {
    state
        .get_instance_summary_use_case
        .execute()
        .await
        .map_err(|e| ApiError::from(e).with_request_id(request_id.map(|Extension(id)| id.0)))
}
