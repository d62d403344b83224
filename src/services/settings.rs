use chrono::Utc;
use sea_orm::{ActiveModelTrait, EntityTrait, Set};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::db::DbPool;
use crate::entities::setting::{self, Entity as SettingEntity};
use crate::errors::ServiceError;
use crate::events::{Event, EventSender};
use crate::models::CutoffTime;

/// The settings table holds exactly one row.
const SETTINGS_ROW_ID: i32 = 1;

/// Operational settings live in a mutable database row, not in process
/// config: admins change the cutoff without a redeploy, and lifecycle
/// operations read it fresh on every call.
#[derive(Clone)]
pub struct SettingsService {
    db_pool: Arc<DbPool>,
    event_sender: Option<Arc<EventSender>>,
    default_cutoff: String,
}

impl SettingsService {
    pub fn new(
        db_pool: Arc<DbPool>,
        event_sender: Option<Arc<EventSender>>,
        default_cutoff: String,
    ) -> Self {
        Self {
            db_pool,
            event_sender,
            default_cutoff,
        }
    }

    /// Fetches the settings row, seeding it from the configured default on
    /// first access.
    pub async fn get(&self) -> Result<setting::Model, ServiceError> {
        let db = &*self.db_pool;

        if let Some(row) = SettingEntity::find_by_id(SETTINGS_ROW_ID).one(db).await? {
            return Ok(row);
        }

        let seeded = setting::ActiveModel {
            id: Set(SETTINGS_ROW_ID),
            pause_cutoff_time: Set(self.default_cutoff.clone()),
            updated_at: Set(Utc::now()),
        };
        let row = seeded.insert(db).await?;
        info!(cutoff = %row.pause_cutoff_time, "Seeded settings row with default cutoff");
        Ok(row)
    }

    /// The currently configured pause cutoff, parsed and ready to compare.
    pub async fn pause_cutoff(&self) -> Result<CutoffTime, ServiceError> {
        let row = self.get().await?;
        CutoffTime::parse(&row.pause_cutoff_time)
    }

    #[instrument(skip(self))]
    pub async fn update_pause_cutoff(&self, raw: &str) -> Result<setting::Model, ServiceError> {
        // Reject malformed values before they reach the row.
        CutoffTime::parse(raw)?;

        let current = self.get().await?;
        let mut active: setting::ActiveModel = current.into();
        active.pause_cutoff_time = Set(raw.trim().to_string());
        active.updated_at = Set(Utc::now());
        let updated = active.update(&*self.db_pool).await?;

        info!(cutoff = %updated.pause_cutoff_time, "Pause cutoff updated");

        if let Some(event_sender) = &self.event_sender {
            if let Err(e) = event_sender.send(Event::SettingsUpdated).await {
                tracing::warn!(error = %e, "Failed to send settings updated event");
            }
        }

        Ok(updated)
    }
}
