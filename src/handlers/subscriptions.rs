use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::services::calendar;
use crate::services::subscriptions::{
    CreateSubscriptionRequest, FranchiseScope, PauseDeliveryResponse, ResumeDeliveryResponse,
    SubscriptionDetailResponse, SubscriptionListResponse, UpdateDeliveryStatusRequest,
};
use crate::{ApiResponse, ApiResult, AppState, ListQuery};

/// Sentinel accepted in `franchise_ids` to target every franchise.
const ALL_FRANCHISES: &str = "all";

#[derive(Debug, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct BulkPauseRequest {
    /// Franchise UUIDs, or the single sentinel `"all"`.
    pub franchise_ids: Vec<String>,
    /// Delivery date to pause, `YYYY-MM-DD`.
    pub date: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BulkPauseResponse {
    pub date: String,
    pub paused_count: u64,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct AssignPartnerRequest {
    pub delivery_partner_id: Uuid,
}

/// Create a subscription order and generate its delivery calendars
#[utoipa::path(
    post,
    path = "/api/v1/subscriptions",
    request_body = CreateSubscriptionRequest,
    responses(
        (status = 201, description = "Subscription created"),
        (status = 400, description = "Invalid request", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse)
    ),
    tag = "subscriptions"
)]
pub async fn create_subscription(
    State(state): State<AppState>,
    Json(payload): Json<CreateSubscriptionRequest>,
) -> Result<(StatusCode, Json<ApiResponse<SubscriptionDetailResponse>>), ServiceError> {
    let detail = state.services.subscriptions.create_subscription(payload).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(detail))))
}

/// List subscription orders
#[utoipa::path(
    get,
    path = "/api/v1/subscriptions",
    params(
        ("page" = Option<u64>, Query, description = "1-based page number"),
        ("limit" = Option<u64>, Query, description = "Page size")
    ),
    responses((status = 200, description = "Subscriptions returned")),
    tag = "subscriptions"
)]
pub async fn list_subscriptions(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> ApiResult<SubscriptionListResponse> {
    let list = state
        .services
        .subscriptions
        .list_subscriptions(query.page, query.limit)
        .await?;
    Ok(Json(ApiResponse::success(list)))
}

/// Fetch a subscription with its sub-orders and calendars
#[utoipa::path(
    get,
    path = "/api/v1/subscriptions/{id}",
    params(("id" = Uuid, Path, description = "Subscription ID")),
    responses(
        (status = 200, description = "Subscription returned"),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse)
    ),
    tag = "subscriptions"
)]
pub async fn get_subscription(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<SubscriptionDetailResponse> {
    let detail = state.services.subscriptions.get_subscription(id).await?;
    Ok(Json(ApiResponse::success(detail)))
}

/// Pause one delivery day; a makeup day is appended to the schedule tail
#[utoipa::path(
    post,
    path = "/api/v1/subscriptions/{id}/deliveries/{delivery_id}/pause",
    params(
        ("id" = Uuid, Path, description = "Subscription ID"),
        ("delivery_id" = Uuid, Path, description = "Delivery date ID")
    ),
    responses(
        (status = 200, description = "Delivery paused"),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse),
        (status = 409, description = "Already paused", body = crate::errors::ErrorResponse),
        (status = 422, description = "Cutoff exceeded", body = crate::errors::ErrorResponse)
    ),
    tag = "subscriptions"
)]
pub async fn pause_delivery(
    State(state): State<AppState>,
    Path((id, delivery_id)): Path<(Uuid, Uuid)>,
) -> ApiResult<PauseDeliveryResponse> {
    let cutoff = state.services.settings.pause_cutoff().await?;
    let outcome = state
        .services
        .subscriptions
        .pause_delivery(id, delivery_id, &cutoff, Utc::now())
        .await?;
    Ok(Json(ApiResponse::success(outcome)))
}

/// Resume a paused delivery day, removing its makeup day when possible
#[utoipa::path(
    post,
    path = "/api/v1/subscriptions/{id}/deliveries/{delivery_id}/resume",
    params(
        ("id" = Uuid, Path, description = "Subscription ID"),
        ("delivery_id" = Uuid, Path, description = "Delivery date ID")
    ),
    responses(
        (status = 200, description = "Delivery resumed"),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse),
        (status = 409, description = "Not paused", body = crate::errors::ErrorResponse)
    ),
    tag = "subscriptions"
)]
pub async fn resume_delivery(
    State(state): State<AppState>,
    Path((id, delivery_id)): Path<(Uuid, Uuid)>,
) -> ApiResult<ResumeDeliveryResponse> {
    let outcome = state
        .services
        .subscriptions
        .resume_delivery(id, delivery_id)
        .await?;
    Ok(Json(ApiResponse::success(outcome)))
}

/// Pause a delivery date across every subscription in the franchise scope
#[utoipa::path(
    post,
    path = "/api/v1/subscriptions/bulk-pause",
    request_body = BulkPauseRequest,
    responses(
        (status = 200, description = "Bulk pause applied"),
        (status = 400, description = "Invalid request", body = crate::errors::ErrorResponse),
        (status = 422, description = "Cutoff exceeded", body = crate::errors::ErrorResponse)
    ),
    tag = "subscriptions"
)]
pub async fn bulk_pause(
    State(state): State<AppState>,
    Json(payload): Json<BulkPauseRequest>,
) -> ApiResult<BulkPauseResponse> {
    let scope = parse_franchise_scope(&payload.franchise_ids)?;
    let date = calendar::parse_date(&payload.date)?;

    let cutoff = state.services.settings.pause_cutoff().await?;
    let paused_count = state
        .services
        .subscriptions
        .bulk_pause(scope, date, &cutoff, Utc::now())
        .await?;

    Ok(Json(ApiResponse::success(BulkPauseResponse {
        date: payload.date,
        paused_count,
    })))
}

/// Record a delivery outcome or reschedule a slot
pub async fn update_delivery_status(
    State(state): State<AppState>,
    Path((id, delivery_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<UpdateDeliveryStatusRequest>,
) -> ApiResult<crate::services::subscriptions::DeliveryDateResponse> {
    let updated = state
        .services
        .subscriptions
        .update_delivery_status(id, delivery_id, payload)
        .await?;
    Ok(Json(ApiResponse::success(updated)))
}

/// Assign a delivery partner to an upcoming slot
pub async fn assign_delivery_partner(
    State(state): State<AppState>,
    Path((id, delivery_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<AssignPartnerRequest>,
) -> ApiResult<crate::services::subscriptions::DeliveryDateResponse> {
    let updated = state
        .services
        .subscriptions
        .assign_delivery_partner(id, delivery_id, payload.delivery_partner_id)
        .await?;
    Ok(Json(ApiResponse::success(updated)))
}

fn parse_franchise_scope(raw: &[String]) -> Result<FranchiseScope, ServiceError> {
    if raw.iter().any(|id| id.eq_ignore_ascii_case(ALL_FRANCHISES)) {
        return Ok(FranchiseScope::All);
    }
    let ids = raw
        .iter()
        .map(|id| {
            Uuid::parse_str(id).map_err(|_| {
                ServiceError::InvalidInput(format!("Invalid franchise id '{}'", id))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(FranchiseScope::Selected(ids))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn all_sentinel_wins_over_explicit_ids() {
        let scope =
            parse_franchise_scope(&[Uuid::new_v4().to_string(), "all".to_string()]).unwrap();
        assert_matches!(scope, FranchiseScope::All);
    }

    #[test]
    fn explicit_ids_are_parsed() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let scope = parse_franchise_scope(&[a.to_string(), b.to_string()]).unwrap();
        assert_matches!(scope, FranchiseScope::Selected(ids) if ids == vec![a, b]);
    }

    #[test]
    fn malformed_id_is_rejected() {
        let err = parse_franchise_scope(&["not-a-uuid".to_string()]).unwrap_err();
        assert_matches!(err, ServiceError::InvalidInput(_));
    }
}
