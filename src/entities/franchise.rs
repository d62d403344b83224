use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A franchise service area: an ordered polygon ring (JSON array of
/// `{lat, lng}` vertices, implicitly closed) plus distance-based pricing.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "franchises")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub name: String,
    #[sea_orm(column_type = "Json")]
    pub polygon: Json,
    pub free_delivery_radius_km: Decimal,
    pub charge_per_extra_km: Decimal,
    pub total_delivery_radius_km: Decimal,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::subscription_order::Entity")]
    SubscriptionOrders,
}

impl Related<super::subscription_order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SubscriptionOrders.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
