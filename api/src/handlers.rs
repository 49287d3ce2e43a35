use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use common::domain::{Activity, DirectoryError};
use indexmap::IndexMap;
use serde::Deserialize;
use std::sync::Arc;

use crate::models::{ErrorDetail, MessageResponse};
use crate::AppState;

#[derive(Deserialize)]
pub struct SignupParams {
    email: String,
}

/// Maps roster errors onto the HTTP contract: unknown activity is 404,
/// both membership conflicts are 400, body is always `{"detail": ...}`.
pub struct ApiError(DirectoryError);

impl From<DirectoryError> for ApiError {
    fn from(err: DirectoryError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            DirectoryError::ActivityNotFound => StatusCode::NOT_FOUND,
            DirectoryError::AlreadyEnrolled | DirectoryError::NotEnrolled => {
                StatusCode::BAD_REQUEST
            }
        };

        (
            status,
            Json(ErrorDetail {
                detail: self.0.to_string(),
            }),
        )
            .into_response()
    }
}

pub async fn list_activities(
    State(state): State<Arc<AppState>>,
) -> Json<IndexMap<String, Activity>> {
    Json(state.directory.read().await.snapshot())
}

pub async fn signup(
    State(state): State<Arc<AppState>>,
    Path(activity_name): Path<String>,
    Query(params): Query<SignupParams>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .directory
        .write()
        .await
        .signup(&activity_name, &params.email)?;

    tracing::info!(activity = %activity_name, email = %params.email, "signed up");

    Ok(Json(MessageResponse {
        message: format!("Signed up {} for {}", params.email, activity_name),
    }))
}

pub async fn unregister(
    State(state): State<Arc<AppState>>,
    Path(activity_name): Path<String>,
    Query(params): Query<SignupParams>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .directory
        .write()
        .await
        .unregister(&activity_name, &params.email)?;

    tracing::info!(activity = %activity_name, email = %params.email, "unregistered");

    Ok(Json(MessageResponse {
        message: format!("Unregistered {} from {}", params.email, activity_name),
    }))
}
