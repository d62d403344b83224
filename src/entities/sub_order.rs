use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::WeekdayPattern;

/// One line item of a subscription order, carrying its own delivery
/// calendar. `remaining_days` only ever decreases; zero marks the
/// sub-order exhausted.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sub_orders")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub subscription_order_id: Uuid,
    pub product_name: String,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub weekday_pattern: WeekdayPattern,
    pub start_date: String,
    pub repeat_multiplier: i32,
    pub remaining_days: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::subscription_order::Entity",
        from = "Column::SubscriptionOrderId",
        to = "super::subscription_order::Column::Id"
    )]
    SubscriptionOrder,
    #[sea_orm(has_many = "super::delivery_date::Entity")]
    DeliveryDates,
}

impl Related<super::subscription_order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SubscriptionOrder.def()
    }
}

impl Related<super::delivery_date::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DeliveryDates.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
