pub mod franchises;
pub mod health;
pub mod settings;
pub mod subscriptions;

use std::sync::Arc;

use crate::db::DbPool;
use crate::events::EventSender;

// Re-export AppState so handler modules can import it as crate::handlers::AppState
pub use crate::AppState;

/// Services layer that encapsulates business logic used by HTTP handlers
#[derive(Clone)]
pub struct AppServices {
    pub subscriptions: Arc<crate::services::subscriptions::SubscriptionService>,
    pub franchises: Arc<crate::services::franchises::FranchiseService>,
    pub geofence: Arc<crate::services::geofence::GeofenceService>,
    pub settings: Arc<crate::services::settings::SettingsService>,
}

impl AppServices {
    pub fn new(
        db_pool: Arc<DbPool>,
        event_sender: Arc<EventSender>,
        default_pause_cutoff: String,
    ) -> Self {
        let subscriptions = Arc::new(crate::services::subscriptions::SubscriptionService::new(
            db_pool.clone(),
            Some(event_sender.clone()),
        ));
        let franchises = Arc::new(crate::services::franchises::FranchiseService::new(
            db_pool.clone(),
            Some(event_sender.clone()),
        ));
        let geofence = Arc::new(crate::services::geofence::GeofenceService::new(
            db_pool.clone(),
        ));
        let settings = Arc::new(crate::services::settings::SettingsService::new(
            db_pool,
            Some(event_sender),
            default_pause_cutoff,
        ));

        Self {
            subscriptions,
            franchises,
            geofence,
            settings,
        }
    }
}
