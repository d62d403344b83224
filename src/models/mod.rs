pub mod cutoff;
pub mod delivery;
pub mod geo;
pub mod subscription;

pub use cutoff::CutoffTime;
pub use delivery::{DeliveryStatus, MAKEUP_DESCRIPTION, PAUSE_DESCRIPTION};
pub use geo::GeoPoint;
pub use subscription::{PaymentType, SubscriptionStatus, WeekdayPattern};

use chrono::FixedOffset;

/// Seconds east of UTC for the delivery region (UTC+05:30).
const DELIVERY_UTC_OFFSET_SECS: i32 = 5 * 3600 + 30 * 60;

/// All calendar dates and cutoff comparisons are anchored to this fixed
/// offset so schedules stay stable regardless of where the server runs.
pub fn delivery_offset() -> FixedOffset {
    FixedOffset::east_opt(DELIVERY_UTC_OFFSET_SECS).expect("static UTC offset is in range")
}
