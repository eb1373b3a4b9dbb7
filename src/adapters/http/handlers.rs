//! Activity and health handlers

use crate::adapters::http::error::ApiResult;
use crate::adapters::http::state::AppState;
use crate::domain::model::{ActivityListing, MessageResponse};
use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

/// `?email=` query shared by signup and unregister
#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: String,
    pub activities: usize,
    pub uptime: String,
}

pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: "activity-signup",
        version: state.version.clone(),
        activities: state.store.len(),
        uptime: state.uptime(),
    })
}

/// List every activity with its participants
pub async fn list_activities(State(state): State<AppState>) -> Json<ActivityListing> {
    Json(state.store.list().await)
}

/// Sign a participant up for an activity
pub async fn signup(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> ApiResult<Json<MessageResponse>> {
    // Missing or malformed email is answered with the same JSON error body
    let Query(query) = query?;

    let message = state.store.signup(&activity_name, &query.email).await?;

    tracing::info!(activity = %activity_name, email = %query.email, "Signed up participant");

    Ok(Json(MessageResponse { message }))
}

/// Remove a participant from an activity
pub async fn unregister(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> ApiResult<Json<MessageResponse>> {
    // Missing or malformed email is answered with the same JSON error body
    let Query(query) = query?;

    let message = state.store.unregister(&activity_name, &query.email).await?;

    tracing::info!(activity = %activity_name, email = %query.email, "Unregistered participant");

    Ok(Json(MessageResponse { message }))
}
