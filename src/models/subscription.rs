use chrono::Weekday;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Overall status of a subscription order.
#[derive(
    Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, strum::Display, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
pub enum SubscriptionStatus {
    #[sea_orm(string_value = "Active")]
    Active,
    #[sea_orm(string_value = "Inactive")]
    Inactive,
    #[sea_orm(string_value = "Cancelled")]
    Cancelled,
}

/// How the subscription was paid for.
#[derive(
    Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, strum::Display, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentType {
    #[sea_orm(string_value = "COD")]
    Cod,
    #[sea_orm(string_value = "ONLINE")]
    Online,
    #[sea_orm(string_value = "FAILED")]
    Failed,
}

/// Which weekdays a sub-order delivers on. Days outside the pattern are
/// emitted as inert holiday slots by the calendar generator.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
    strum::Display,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "kebab-case")]
pub enum WeekdayPattern {
    #[sea_orm(string_value = "mon-fri")]
    MonFri,
    #[sea_orm(string_value = "mon-sat")]
    MonSat,
}

impl WeekdayPattern {
    pub fn is_holiday(&self, weekday: Weekday) -> bool {
        match self {
            WeekdayPattern::MonFri => matches!(weekday, Weekday::Sat | Weekday::Sun),
            WeekdayPattern::MonSat => weekday == Weekday::Sun,
        }
    }

    /// Raw calendar slots allotted per unit of `repeat_multiplier`. The
    /// padding over 26 delivery days absorbs the pattern's holidays.
    pub fn slots_per_multiplier(&self) -> u32 {
        match self {
            WeekdayPattern::MonFri => 34,
            WeekdayPattern::MonSat => 30,
        }
    }
}
