use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{PaymentType, SubscriptionStatus};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "subscription_orders")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub order_number: String,
    pub customer_id: Uuid,
    pub total_amount: Decimal,
    pub delivery_address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub subscription_status: SubscriptionStatus,
    pub payment_type: PaymentType,
    pub assigned_franchise_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::sub_order::Entity")]
    SubOrders,
    #[sea_orm(
        belongs_to = "super::franchise::Entity",
        from = "Column::AssignedFranchiseId",
        to = "super::franchise::Column::Id"
    )]
    Franchise,
}

impl Related<super::sub_order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SubOrders.def()
    }
}

impl Related<super::franchise::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Franchise.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
