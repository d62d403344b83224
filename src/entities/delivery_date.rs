use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::DeliveryStatus;

/// One calendar slot within a sub-order's schedule. `date` is a
/// `YYYY-MM-DD` string already normalized to the delivery region's fixed
/// UTC offset, so lexicographic order equals chronological order.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "delivery_dates")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub sub_order_id: Uuid,
    pub date: String,
    pub status: DeliveryStatus,
    pub delivery_partner_id: Option<Uuid>,
    pub description: Option<String>,
    pub delivery_time: Option<String>,
    pub rating: Option<i32>,
    pub delivery_image: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::sub_order::Entity",
        from = "Column::SubOrderId",
        to = "super::sub_order::Column::Id"
    )]
    SubOrder,
}

impl Related<super::sub_order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SubOrder.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
