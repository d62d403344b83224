use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{ApiResponse, ApiResult, AppState};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateSettingsRequest {
    /// `H:MM AM/PM` wall-clock cutoff for same-day pauses.
    pub pause_cutoff_time: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SettingsResponse {
    pub pause_cutoff_time: String,
    pub updated_at: DateTime<Utc>,
}

/// Fetch the operational settings
pub async fn get_settings(State(state): State<AppState>) -> ApiResult<SettingsResponse> {
    let row = state.services.settings.get().await?;
    Ok(Json(ApiResponse::success(SettingsResponse {
        pause_cutoff_time: row.pause_cutoff_time,
        updated_at: row.updated_at,
    })))
}

/// Update the pause cutoff time
pub async fn update_settings(
    State(state): State<AppState>,
    Json(payload): Json<UpdateSettingsRequest>,
) -> ApiResult<SettingsResponse> {
    let row = state
        .services
        .settings
        .update_pause_cutoff(&payload.pause_cutoff_time)
        .await?;
    Ok(Json(ApiResponse::success(SettingsResponse {
        pause_cutoff_time: row.pause_cutoff_time,
        updated_at: row.updated_at,
    })))
}
