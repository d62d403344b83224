//! FreshRoute API Library
//!
//! Backend for subscription grocery delivery: delivery calendar
//! generation, pause/resume lifecycle with a same-day cutoff window, and
//! franchise service-area geofencing with distance-based pricing.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

pub mod config;
pub mod db;
pub mod entities;
pub mod errors;
pub mod events;
pub mod handlers;
pub mod migrator;
pub mod models;
pub mod openapi;
pub mod services;

use axum::{
    routing::{get, post, put},
    Json, Router,
};
use chrono::Utc;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

// App state definition
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    pub config: config::AppConfig,
    pub event_sender: events::EventSender,
    pub services: handlers::AppServices,
}

// Common query parameters for list endpoints
#[derive(Debug, Deserialize, ToSchema)]
pub struct ListQuery {
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_page() -> u64 {
    1
}
fn default_limit() -> u64 {
    20
}

// Common response wrappers
#[derive(Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
    pub errors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<ResponseMeta>,
}

#[derive(Serialize, ToSchema)]
pub struct ResponseMeta {
    pub timestamp: String,
}

impl ResponseMeta {
    fn capture() -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            errors: None,
            meta: Some(ResponseMeta::capture()),
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message),
            errors: None,
            meta: Some(ResponseMeta::capture()),
        }
    }
}

/// Standard API result type for JSON responses
pub type ApiResult<T> = Result<Json<ApiResponse<T>>, errors::ServiceError>;

// API v1 routes, grouped per resource
pub fn api_v1_routes() -> Router<AppState> {
    let subscriptions = Router::new()
        .route(
            "/subscriptions",
            get(handlers::subscriptions::list_subscriptions)
                .post(handlers::subscriptions::create_subscription),
        )
        .route(
            "/subscriptions/bulk-pause",
            post(handlers::subscriptions::bulk_pause),
        )
        .route(
            "/subscriptions/{id}",
            get(handlers::subscriptions::get_subscription),
        )
        .route(
            "/subscriptions/{id}/deliveries/{delivery_id}/pause",
            post(handlers::subscriptions::pause_delivery),
        )
        .route(
            "/subscriptions/{id}/deliveries/{delivery_id}/resume",
            post(handlers::subscriptions::resume_delivery),
        )
        .route(
            "/subscriptions/{id}/deliveries/{delivery_id}/status",
            put(handlers::subscriptions::update_delivery_status),
        )
        .route(
            "/subscriptions/{id}/deliveries/{delivery_id}/partner",
            put(handlers::subscriptions::assign_delivery_partner),
        );

    let franchises = Router::new()
        .route(
            "/franchises",
            get(handlers::franchises::list_franchises).post(handlers::franchises::create_franchise),
        )
        .route(
            "/franchises/resolve",
            get(handlers::franchises::resolve_location),
        )
        .route(
            "/franchises/{id}",
            get(handlers::franchises::get_franchise).put(handlers::franchises::update_franchise),
        );

    let settings = Router::new().route(
        "/settings",
        get(handlers::settings::get_settings).put(handlers::settings::update_settings),
    );

    Router::new()
        .route("/status", get(handlers::health::api_status))
        .route("/openapi.json", get(openapi_json))
        .merge(subscriptions)
        .merge(franchises)
        .merge(settings)
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    use utoipa::OpenApi;
    Json(openapi::ApiDoc::openapi())
}
