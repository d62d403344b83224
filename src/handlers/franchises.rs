use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::models::GeoPoint;
use crate::services::franchises::{
    CreateFranchiseRequest, FranchiseResponse, UpdateFranchiseRequest,
};
use crate::services::geofence::FranchiseMatch;
use crate::{ApiResponse, ApiResult, AppState};

#[derive(Debug, Deserialize, ToSchema)]
pub struct ResolveQuery {
    pub lat: f64,
    pub lng: f64,
}

/// Create a franchise service area
#[utoipa::path(
    post,
    path = "/api/v1/franchises",
    request_body = CreateFranchiseRequest,
    responses(
        (status = 201, description = "Franchise created"),
        (status = 400, description = "Invalid request", body = crate::errors::ErrorResponse)
    ),
    tag = "franchises"
)]
pub async fn create_franchise(
    State(state): State<AppState>,
    Json(payload): Json<CreateFranchiseRequest>,
) -> Result<(StatusCode, Json<ApiResponse<FranchiseResponse>>), ServiceError> {
    let created = state.services.franchises.create_franchise(payload).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(created))))
}

/// List active franchises
pub async fn list_franchises(State(state): State<AppState>) -> ApiResult<Vec<FranchiseResponse>> {
    let franchises = state.services.franchises.list_franchises().await?;
    Ok(Json(ApiResponse::success(franchises)))
}

/// Fetch a franchise by ID
pub async fn get_franchise(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<FranchiseResponse> {
    let franchise = state.services.franchises.get_franchise(id).await?;
    Ok(Json(ApiResponse::success(franchise)))
}

/// Update a franchise
pub async fn update_franchise(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateFranchiseRequest>,
) -> ApiResult<FranchiseResponse> {
    let updated = state.services.franchises.update_franchise(id, payload).await?;
    Ok(Json(ApiResponse::success(updated)))
}

/// Resolve which franchises serve a coordinate, with delivery pricing
#[utoipa::path(
    get,
    path = "/api/v1/franchises/resolve",
    params(
        ("lat" = f64, Query, description = "Latitude"),
        ("lng" = f64, Query, description = "Longitude")
    ),
    responses(
        (status = 200, description = "Matching franchises returned"),
        (status = 404, description = "No franchise serves this location", body = crate::errors::ErrorResponse)
    ),
    tag = "franchises"
)]
pub async fn resolve_location(
    State(state): State<AppState>,
    Query(query): Query<ResolveQuery>,
) -> ApiResult<Vec<FranchiseMatch>> {
    if !GeoPoint::new(query.lat, query.lng).in_bounds() {
        return Err(ServiceError::InvalidInput(
            "lat/lng outside the valid coordinate range".to_string(),
        ));
    }
    let matches = state.services.geofence.resolve(query.lat, query.lng).await?;
    Ok(Json(ApiResponse::success(matches)))
}
