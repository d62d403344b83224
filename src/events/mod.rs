use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::{debug, info};
use uuid::Uuid;

/// Events emitted after successful mutations. Delivery is best-effort:
/// a full channel is logged and dropped, never surfaced to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    SubscriptionCreated(Uuid),
    DeliveryPaused {
        subscription_id: Uuid,
        delivery_date_id: Uuid,
        makeup_date: String,
    },
    DeliveryResumed {
        subscription_id: Uuid,
        delivery_date_id: Uuid,
        makeup_removed: bool,
    },
    DeliveryStatusChanged {
        delivery_date_id: Uuid,
        old_status: String,
        new_status: String,
    },
    BulkPauseApplied {
        date: NaiveDate,
        paused_count: u64,
    },
    FranchiseCreated(Uuid),
    SettingsUpdated,
}

#[derive(Debug, Clone)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
}

impl EventSender {
    /// Creates a new EventSender
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    /// Sends an event asynchronously
    pub async fn send(&self, event: Event) -> Result<(), String> {
        self.sender
            .send(event)
            .await
            .map_err(|e| format!("Failed to send event: {}", e))
    }
}

/// Drains the event channel, logging every event. Spawned once from
/// `main`; exits when the last sender is dropped.
pub async fn process_events(mut receiver: mpsc::Receiver<Event>) {
    info!("Event processor started");
    while let Some(event) = receiver.recv().await {
        match &event {
            Event::SubscriptionCreated(id) => {
                info!(subscription_id = %id, "Subscription created");
            }
            Event::DeliveryPaused {
                subscription_id,
                delivery_date_id,
                makeup_date,
            } => {
                info!(
                    subscription_id = %subscription_id,
                    delivery_date_id = %delivery_date_id,
                    makeup_date = %makeup_date,
                    "Delivery paused"
                );
            }
            Event::DeliveryResumed {
                subscription_id,
                delivery_date_id,
                makeup_removed,
            } => {
                info!(
                    subscription_id = %subscription_id,
                    delivery_date_id = %delivery_date_id,
                    makeup_removed = makeup_removed,
                    "Delivery resumed"
                );
            }
            Event::DeliveryStatusChanged {
                delivery_date_id,
                old_status,
                new_status,
            } => {
                info!(
                    delivery_date_id = %delivery_date_id,
                    old_status = %old_status,
                    new_status = %new_status,
                    "Delivery status changed"
                );
            }
            Event::BulkPauseApplied { date, paused_count } => {
                info!(date = %date, paused_count = paused_count, "Bulk pause applied");
            }
            Event::FranchiseCreated(id) => {
                info!(franchise_id = %id, "Franchise created");
            }
            Event::SettingsUpdated => {
                debug!("Settings updated");
            }
        }
    }
    info!("Event processor stopped");
}
