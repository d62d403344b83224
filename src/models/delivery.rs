use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Description set on an entry when a customer pauses it.
pub const PAUSE_DESCRIPTION: &str = "Paused by customer";

/// Description marking a makeup entry appended to the schedule tail by a
/// pause. Resume removes the latest-dated entry only when it carries this
/// exact marker.
pub const MAKEUP_DESCRIPTION: &str = "Added due to pause";

/// Status of a single delivery calendar slot.
#[derive(
    Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, strum::Display, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
pub enum DeliveryStatus {
    #[sea_orm(string_value = "Pending")]
    Pending,
    #[sea_orm(string_value = "Holiday")]
    Holiday,
    #[sea_orm(string_value = "Scheduled")]
    Scheduled,
    #[sea_orm(string_value = "Paused")]
    Paused,
    #[sea_orm(string_value = "Delivered")]
    Delivered,
    #[sea_orm(string_value = "Failed")]
    Failed,
    #[sea_orm(string_value = "Cancelled")]
    Cancelled,
    #[sea_orm(string_value = "non delivery day")]
    NonDeliveryDay,
}

impl DeliveryStatus {
    /// Canonical transition table for delivery slots. Holidays and final
    /// outcomes are terminal; a paused slot can only be resumed back to
    /// `Scheduled`.
    pub fn can_transition_to(&self, next: &DeliveryStatus) -> bool {
        use DeliveryStatus::*;
        matches!(
            (self, next),
            (Pending, Scheduled | Paused | Delivered | Failed | Cancelled)
                | (Scheduled, Paused | Delivered | Failed | Cancelled)
                | (Paused, Scheduled)
        )
    }

    /// True for slots that still represent an upcoming delivery attempt.
    pub fn is_open(&self) -> bool {
        matches!(self, DeliveryStatus::Pending | DeliveryStatus::Scheduled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(DeliveryStatus::Pending, DeliveryStatus::Delivered, true)]
    #[case(DeliveryStatus::Pending, DeliveryStatus::Paused, true)]
    #[case(DeliveryStatus::Scheduled, DeliveryStatus::Failed, true)]
    #[case(DeliveryStatus::Paused, DeliveryStatus::Scheduled, true)]
    #[case(DeliveryStatus::Holiday, DeliveryStatus::Delivered, false)]
    #[case(DeliveryStatus::Holiday, DeliveryStatus::Paused, false)]
    #[case(DeliveryStatus::Delivered, DeliveryStatus::Pending, false)]
    #[case(DeliveryStatus::Paused, DeliveryStatus::Paused, false)]
    #[case(DeliveryStatus::Cancelled, DeliveryStatus::Scheduled, false)]
    #[case(DeliveryStatus::NonDeliveryDay, DeliveryStatus::Delivered, false)]
    fn transition_table(
        #[case] from: DeliveryStatus,
        #[case] to: DeliveryStatus,
        #[case] allowed: bool,
    ) {
        assert_eq!(from.can_transition_to(&to), allowed);
    }

    #[test]
    fn db_string_round_trip_preserves_legacy_value() {
        use sea_orm::ActiveEnum;
        assert_eq!(DeliveryStatus::NonDeliveryDay.to_value(), "non delivery day");
        assert_eq!(DeliveryStatus::Paused.to_value(), "Paused");
    }
}
