use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument, warn};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::db::DbPool;
use crate::entities::franchise::{self, Entity as FranchiseEntity};
use crate::errors::ServiceError;
use crate::events::{Event, EventSender};
use crate::models::GeoPoint;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateFranchiseRequest {
    #[validate(length(min = 1, max = 120))]
    pub name: String,

    /// Ordered service-area ring; implicitly closed.
    #[validate(length(min = 3, message = "Polygon needs at least three vertices"))]
    pub polygon: Vec<GeoPoint>,

    pub free_delivery_radius_km: Decimal,
    pub charge_per_extra_km: Decimal,
    pub total_delivery_radius_km: Decimal,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateFranchiseRequest {
    #[validate(length(min = 1, max = 120))]
    pub name: Option<String>,
    #[validate(length(min = 3, message = "Polygon needs at least three vertices"))]
    pub polygon: Option<Vec<GeoPoint>>,
    pub free_delivery_radius_km: Option<Decimal>,
    pub charge_per_extra_km: Option<Decimal>,
    pub total_delivery_radius_km: Option<Decimal>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FranchiseResponse {
    pub id: Uuid,
    pub name: String,
    pub polygon: Vec<GeoPoint>,
    pub free_delivery_radius_km: Decimal,
    pub charge_per_extra_km: Decimal,
    pub total_delivery_radius_km: Decimal,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Clone)]
pub struct FranchiseService {
    db_pool: Arc<DbPool>,
    event_sender: Option<Arc<EventSender>>,
}

impl FranchiseService {
    pub fn new(db_pool: Arc<DbPool>, event_sender: Option<Arc<EventSender>>) -> Self {
        Self {
            db_pool,
            event_sender,
        }
    }

    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create_franchise(
        &self,
        request: CreateFranchiseRequest,
    ) -> Result<FranchiseResponse, ServiceError> {
        request.validate()?;
        validate_radii(
            &request.free_delivery_radius_km,
            &request.charge_per_extra_km,
            &request.total_delivery_radius_km,
        )?;

        let now = Utc::now();
        let model = franchise::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(request.name),
            polygon: Set(serde_json::to_value(&request.polygon)
                .map_err(|e| ServiceError::InternalError(e.to_string()))?),
            free_delivery_radius_km: Set(request.free_delivery_radius_km),
            charge_per_extra_km: Set(request.charge_per_extra_km),
            total_delivery_radius_km: Set(request.total_delivery_radius_km),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(None),
        };

        let created = model.insert(&*self.db_pool).await?;
        info!(franchise_id = %created.id, "Franchise created");

        if let Some(event_sender) = &self.event_sender {
            if let Err(e) = event_sender.send(Event::FranchiseCreated(created.id)).await {
                warn!(error = %e, franchise_id = %created.id, "Failed to send franchise created event");
            }
        }

        self.model_to_response(created)
    }

    pub async fn get_franchise(&self, id: Uuid) -> Result<FranchiseResponse, ServiceError> {
        let model = FranchiseEntity::find_by_id(id)
            .one(&*self.db_pool)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Franchise {} not found", id)))?;
        self.model_to_response(model)
    }

    pub async fn list_franchises(&self) -> Result<Vec<FranchiseResponse>, ServiceError> {
        let models = FranchiseEntity::find()
            .filter(franchise::Column::IsActive.eq(true))
            .order_by_asc(franchise::Column::Name)
            .all(&*self.db_pool)
            .await?;

        models
            .into_iter()
            .map(|m| self.model_to_response(m))
            .collect()
    }

    #[instrument(skip(self, request), fields(franchise_id = %id))]
    pub async fn update_franchise(
        &self,
        id: Uuid,
        request: UpdateFranchiseRequest,
    ) -> Result<FranchiseResponse, ServiceError> {
        request.validate()?;

        let model = FranchiseEntity::find_by_id(id)
            .one(&*self.db_pool)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Franchise {} not found", id)))?;

        let mut active: franchise::ActiveModel = model.into();
        if let Some(name) = request.name {
            active.name = Set(name);
        }
        if let Some(polygon) = request.polygon {
            active.polygon = Set(serde_json::to_value(&polygon)
                .map_err(|e| ServiceError::InternalError(e.to_string()))?);
        }
        if let Some(v) = request.free_delivery_radius_km {
            active.free_delivery_radius_km = Set(v);
        }
        if let Some(v) = request.charge_per_extra_km {
            active.charge_per_extra_km = Set(v);
        }
        if let Some(v) = request.total_delivery_radius_km {
            active.total_delivery_radius_km = Set(v);
        }
        if let Some(v) = request.is_active {
            active.is_active = Set(v);
        }
        active.updated_at = Set(Some(Utc::now()));

        let updated = active.update(&*self.db_pool).await?;
        info!(franchise_id = %updated.id, "Franchise updated");
        self.model_to_response(updated)
    }

    fn model_to_response(&self, model: franchise::Model) -> Result<FranchiseResponse, ServiceError> {
        let polygon: Vec<GeoPoint> = serde_json::from_value(model.polygon)
            .map_err(|e| ServiceError::InternalError(format!("Malformed polygon: {}", e)))?;
        Ok(FranchiseResponse {
            id: model.id,
            name: model.name,
            polygon,
            free_delivery_radius_km: model.free_delivery_radius_km,
            charge_per_extra_km: model.charge_per_extra_km,
            total_delivery_radius_km: model.total_delivery_radius_km,
            is_active: model.is_active,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

fn validate_radii(
    free: &Decimal,
    per_km: &Decimal,
    total: &Decimal,
) -> Result<(), ServiceError> {
    if free.is_sign_negative() || per_km.is_sign_negative() || total.is_sign_negative() {
        return Err(ServiceError::ValidationError(
            "Radii and charges must be non-negative".to_string(),
        ));
    }
    if total < free {
        return Err(ServiceError::ValidationError(
            "total_delivery_radius_km must not be smaller than free_delivery_radius_km".to_string(),
        ));
    }
    Ok(())
}
