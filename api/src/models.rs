use serde::Serialize;

/// Success body for roster mutations: a human-readable confirmation that
/// names both the student and the activity.
#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Error body shape shared by all client-input failures.
#[derive(Serialize)]
pub struct ErrorDetail {
    pub detail: String,
}
