use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, ModelTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument, warn};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::db::DbPool;
use crate::entities::delivery_date::{self, Entity as DeliveryDateEntity};
use crate::entities::sub_order::{self, Entity as SubOrderEntity};
use crate::entities::subscription_order::{self, Entity as SubscriptionOrderEntity};
use crate::errors::ServiceError;
use crate::events::{Event, EventSender};
use crate::models::{
    CutoffTime, DeliveryStatus, GeoPoint, PaymentType, SubscriptionStatus, WeekdayPattern,
    MAKEUP_DESCRIPTION, PAUSE_DESCRIPTION,
};
use crate::services::calendar;

/// Which franchises a bulk pause applies to.
#[derive(Debug, Clone)]
pub enum FranchiseScope {
    All,
    Selected(Vec<Uuid>),
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateSubscriptionRequest {
    pub customer_id: Uuid,

    #[validate(length(min = 1, message = "Delivery address is required"))]
    pub delivery_address: String,

    pub latitude: f64,
    pub longitude: f64,

    pub payment_type: PaymentType,
    pub assigned_franchise_id: Option<Uuid>,

    #[validate(length(min = 1, message = "At least one item is required"))]
    pub items: Vec<CreateSubOrderRequest>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateSubOrderRequest {
    #[validate(length(min = 1, max = 120))]
    pub product_name: String,

    #[validate(range(min = 1))]
    pub quantity: i32,

    pub unit_price: Decimal,

    pub weekday_pattern: WeekdayPattern,

    /// Instant the subscription starts; projected onto the delivery
    /// region's calendar before generation.
    pub start_date: DateTime<Utc>,

    #[validate(range(min = 1, max = 52))]
    pub repeat_multiplier: i32,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateDeliveryStatusRequest {
    pub status: DeliveryStatus,
    pub description: Option<String>,
    pub delivery_time: Option<String>,
    #[validate(range(min = 1, max = 5))]
    pub rating: Option<i32>,
    pub delivery_image: Option<String>,
    pub delivery_partner_id: Option<Uuid>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DeliveryDateResponse {
    pub id: Uuid,
    pub date: String,
    pub status: DeliveryStatus,
    pub delivery_partner_id: Option<Uuid>,
    pub description: Option<String>,
    pub delivery_time: Option<String>,
    pub rating: Option<i32>,
    pub delivery_image: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SubOrderResponse {
    pub id: Uuid,
    pub product_name: String,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub weekday_pattern: WeekdayPattern,
    pub start_date: String,
    pub repeat_multiplier: i32,
    pub remaining_days: i32,
    pub delivery_dates: Vec<DeliveryDateResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SubscriptionResponse {
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

#[derive(Debug, Serialize, ToSchema)]
pub struct SubscriptionDetailResponse {
    pub subscription: SubscriptionResponse,
    pub sub_orders: Vec<SubOrderResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PauseDeliveryResponse {
    pub paused: DeliveryDateResponse,
    pub makeup: DeliveryDateResponse,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ResumeDeliveryResponse {
    pub resumed: DeliveryDateResponse,
    pub makeup_removed: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SubscriptionListResponse {
    pub subscriptions: Vec<SubscriptionResponse>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
}

/// Service for subscription orders and their delivery calendars.
///
/// Writes follow the source system's model: a subscription document is
/// read, mutated and written back with last-writer-wins semantics. There
/// is deliberately no optimistic-concurrency check here.
#[derive(Clone)]
pub struct SubscriptionService {
    db_pool: Arc<DbPool>,
    event_sender: Option<Arc<EventSender>>,
}

impl SubscriptionService {
    pub fn new(db_pool: Arc<DbPool>, event_sender: Option<Arc<EventSender>>) -> Self {
        Self {
            db_pool,
            event_sender,
        }
    }

    /// Creates a subscription order, generating each sub-order's delivery
    /// calendar up front.
    #[instrument(skip(self, request), fields(customer_id = %request.customer_id))]
    pub async fn create_subscription(
        &self,
        request: CreateSubscriptionRequest,
    ) -> Result<SubscriptionDetailResponse, ServiceError> {
        request.validate()?;
        if !GeoPoint::new(request.latitude, request.longitude).in_bounds() {
            return Err(ServiceError::ValidationError(
                "latitude/longitude out of range".to_string(),
            ));
        }

        let now = Utc::now();
        let order_id = Uuid::new_v4();

        // Generate every calendar before touching the database so a bad
        // item fails the whole request up front.
        let mut total_amount = Decimal::ZERO;
        let mut prepared = Vec::with_capacity(request.items.len());
        for item in &request.items {
            item.validate()?;
            let start_local = calendar::local_date(item.start_date);
            let (slots, active_days) =
                calendar::generate(start_local, item.repeat_multiplier, item.weekday_pattern);
            total_amount +=
                item.unit_price * Decimal::from(item.quantity) * Decimal::from(active_days);
            prepared.push((item, start_local, slots, active_days));
        }

        let txn = self.db_pool.begin().await?;

        subscription_order::ActiveModel {
            id: Set(order_id),
            order_number: Set(order_number(order_id)),
            customer_id: Set(request.customer_id),
            total_amount: Set(total_amount),
            delivery_address: Set(request.delivery_address.clone()),
            latitude: Set(request.latitude),
            longitude: Set(request.longitude),
            subscription_status: Set(SubscriptionStatus::Active),
            payment_type: Set(request.payment_type.clone()),
            assigned_franchise_id: Set(request.assigned_franchise_id),
            created_at: Set(now),
            updated_at: Set(None),
        }
        .insert(&txn)
        .await?;

        for (item, start_local, slots, active_days) in prepared {
            let sub_id = Uuid::new_v4();
            sub_order::ActiveModel {
                id: Set(sub_id),
                subscription_order_id: Set(order_id),
                product_name: Set(item.product_name.clone()),
                quantity: Set(item.quantity),
                unit_price: Set(item.unit_price),
                weekday_pattern: Set(item.weekday_pattern),
                start_date: Set(calendar::format_date(start_local)),
                repeat_multiplier: Set(item.repeat_multiplier),
                remaining_days: Set(active_days as i32),
                created_at: Set(now),
            }
            .insert(&txn)
            .await?;

            let rows = slots.into_iter().map(|slot| delivery_date::ActiveModel {
                id: Set(Uuid::new_v4()),
                sub_order_id: Set(sub_id),
                date: Set(slot.date),
                status: Set(slot.status),
                delivery_partner_id: Set(None),
                description: Set(None),
                delivery_time: Set(None),
                rating: Set(None),
                delivery_image: Set(None),
                created_at: Set(now),
            });
            DeliveryDateEntity::insert_many(rows).exec(&txn).await?;
        }

        txn.commit().await?;

        info!(subscription_id = %order_id, total_amount = %total_amount, "Subscription created");

        if let Some(event_sender) = &self.event_sender {
            if let Err(e) = event_sender.send(Event::SubscriptionCreated(order_id)).await {
                warn!(error = %e, subscription_id = %order_id, "Failed to send subscription created event");
            }
        }

        self.get_subscription(order_id).await
    }

    /// Fetches one subscription with its sub-orders and full calendars.
    #[instrument(skip(self), fields(subscription_id = %id))]
    pub async fn get_subscription(
        &self,
        id: Uuid,
    ) -> Result<SubscriptionDetailResponse, ServiceError> {
        let db = &*self.db_pool;

        let order = SubscriptionOrderEntity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Subscription {} not found", id)))?;

        let subs = order
            .find_related(SubOrderEntity)
            .order_by_asc(sub_order::Column::CreatedAt)
            .all(db)
            .await?;

        let mut sub_responses = Vec::with_capacity(subs.len());
        for sub in subs {
            let dates = sub
                .find_related(DeliveryDateEntity)
                .order_by_asc(delivery_date::Column::Date)
                .all(db)
                .await?;
            sub_responses.push(sub_order_to_response(sub, dates));
        }

        Ok(SubscriptionDetailResponse {
            subscription: subscription_to_response(order),
            sub_orders: sub_responses,
        })
    }

    /// Lists subscriptions with pagination, newest first.
    #[instrument(skip(self))]
    pub async fn list_subscriptions(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<SubscriptionListResponse, ServiceError> {
        let page = page.max(1);
        let paginator = SubscriptionOrderEntity::find()
            .order_by_desc(subscription_order::Column::CreatedAt)
            .paginate(&*self.db_pool, per_page);

        let total = paginator.num_items().await?;
        let orders = paginator.fetch_page(page - 1).await?;

        Ok(SubscriptionListResponse {
            subscriptions: orders.into_iter().map(subscription_to_response).collect(),
            total,
            page,
            per_page,
        })
    }

    /// Pauses one delivery slot and appends its makeup day to the
    /// schedule tail.
    #[instrument(skip(self, cutoff), fields(subscription_id = %subscription_id, delivery_date_id = %delivery_date_id))]
    pub async fn pause_delivery(
        &self,
        subscription_id: Uuid,
        delivery_date_id: Uuid,
        cutoff: &CutoffTime,
        now: DateTime<Utc>,
    ) -> Result<PauseDeliveryResponse, ServiceError> {
        check_cutoff(cutoff, now)?;

        let txn = self.db_pool.begin().await?;
        let (entry, sub) = load_entry(&txn, subscription_id, delivery_date_id).await?;

        if entry.status == DeliveryStatus::Paused {
            return Err(ServiceError::AlreadyPaused(format!(
                "Delivery date {} is already paused",
                delivery_date_id
            )));
        }
        if !entry.status.can_transition_to(&DeliveryStatus::Paused) {
            return Err(ServiceError::InvalidStatus(format!(
                "Cannot pause a delivery in status {}",
                entry.status
            )));
        }

        let (paused, makeup) = apply_pause(&txn, entry, &sub).await?;
        txn.commit().await?;

        info!(makeup_date = %makeup.date, "Delivery paused, makeup day appended");

        if let Some(event_sender) = &self.event_sender {
            let event = Event::DeliveryPaused {
                subscription_id,
                delivery_date_id,
                makeup_date: makeup.date.clone(),
            };
            if let Err(e) = event_sender.send(event).await {
                warn!(error = %e, "Failed to send delivery paused event");
            }
        }

        Ok(PauseDeliveryResponse {
            paused: delivery_date_to_response(paused),
            makeup: delivery_date_to_response(makeup),
        })
    }

    /// Resumes a paused delivery slot, undoing at most one makeup day.
    ///
    /// Only the latest-dated entry is eligible for removal, and only when
    /// it carries the pause marker: pauses and resumes pair LIFO on the
    /// makeup tail.
    #[instrument(skip(self), fields(subscription_id = %subscription_id, delivery_date_id = %delivery_date_id))]
    pub async fn resume_delivery(
        &self,
        subscription_id: Uuid,
        delivery_date_id: Uuid,
    ) -> Result<ResumeDeliveryResponse, ServiceError> {
        let txn = self.db_pool.begin().await?;
        let (entry, sub) = load_entry(&txn, subscription_id, delivery_date_id).await?;

        if entry.status != DeliveryStatus::Paused {
            return Err(ServiceError::NotPaused(format!(
                "Delivery date {} is not paused",
                delivery_date_id
            )));
        }

        let mut active: delivery_date::ActiveModel = entry.into();
        active.status = Set(DeliveryStatus::Scheduled);
        active.description = Set(None);
        let resumed = active.update(&txn).await?;

        let tail = DeliveryDateEntity::find()
            .filter(delivery_date::Column::SubOrderId.eq(sub.id))
            .order_by_desc(delivery_date::Column::Date)
            .one(&txn)
            .await?;

        let mut makeup_removed = false;
        if let Some(tail) = tail {
            if tail.description.as_deref() == Some(MAKEUP_DESCRIPTION) {
                DeliveryDateEntity::delete_by_id(tail.id).exec(&txn).await?;
                makeup_removed = true;
            }
        }

        txn.commit().await?;

        info!(makeup_removed = makeup_removed, "Delivery resumed");

        if let Some(event_sender) = &self.event_sender {
            let event = Event::DeliveryResumed {
                subscription_id,
                delivery_date_id,
                makeup_removed,
            };
            if let Err(e) = event_sender.send(event).await {
                warn!(error = %e, "Failed to send delivery resumed event");
            }
        }

        Ok(ResumeDeliveryResponse {
            resumed: delivery_date_to_response(resumed),
            makeup_removed,
        })
    }

    /// Pauses the slot dated `date` for every active subscription in the
    /// franchise scope. At most one slot per sub-order is touched.
    ///
    /// Sub-orders persist one at a time; a failure mid-batch leaves the
    /// pauses already applied in place.
    #[instrument(skip(self, cutoff), fields(date = %date))]
    pub async fn bulk_pause(
        &self,
        scope: FranchiseScope,
        date: NaiveDate,
        cutoff: &CutoffTime,
        now: DateTime<Utc>,
    ) -> Result<u64, ServiceError> {
        check_cutoff(cutoff, now)?;

        let date_str = calendar::format_date(date);
        let mut query = SubscriptionOrderEntity::find().filter(
            subscription_order::Column::SubscriptionStatus.eq(SubscriptionStatus::Active),
        );
        if let FranchiseScope::Selected(ids) = &scope {
            if ids.is_empty() {
                return Err(ServiceError::InvalidInput(
                    "franchise_ids must name at least one franchise or 'all'".to_string(),
                ));
            }
            query = query.filter(
                subscription_order::Column::AssignedFranchiseId.is_in(ids.iter().copied()),
            );
        }

        let orders = query.all(&*self.db_pool).await?;

        let mut paused_count = 0u64;
        for order in orders {
            let subs = order
                .find_related(SubOrderEntity)
                .all(&*self.db_pool)
                .await?;
            for sub in subs {
                let entry = DeliveryDateEntity::find()
                    .filter(delivery_date::Column::SubOrderId.eq(sub.id))
                    .filter(delivery_date::Column::Date.eq(date_str.clone()))
                    .filter(delivery_date::Column::Status.is_in([
                        DeliveryStatus::Pending,
                        DeliveryStatus::Scheduled,
                    ]))
                    .one(&*self.db_pool)
                    .await?;

                let Some(entry) = entry else { continue };

                let txn = self.db_pool.begin().await?;
                apply_pause(&txn, entry, &sub).await?;
                txn.commit().await?;
                paused_count += 1;
            }
        }

        info!(paused_count = paused_count, "Bulk pause applied");

        if let Some(event_sender) = &self.event_sender {
            let event = Event::BulkPauseApplied { date, paused_count };
            if let Err(e) = event_sender.send(event).await {
                warn!(error = %e, "Failed to send bulk pause event");
            }
        }

        Ok(paused_count)
    }

    /// Records the outcome of a delivery attempt (or cancels/schedules
    /// it), enforcing the canonical transition table.
    #[instrument(skip(self, request), fields(subscription_id = %subscription_id, delivery_date_id = %delivery_date_id, new_status = %request.status))]
    pub async fn update_delivery_status(
        &self,
        subscription_id: Uuid,
        delivery_date_id: Uuid,
        request: UpdateDeliveryStatusRequest,
    ) -> Result<DeliveryDateResponse, ServiceError> {
        request.validate()?;

        let txn = self.db_pool.begin().await?;
        let (entry, sub) = load_entry(&txn, subscription_id, delivery_date_id).await?;

        let old_status = entry.status.clone();
        if !old_status.can_transition_to(&request.status) {
            return Err(ServiceError::InvalidStatus(format!(
                "Cannot transition delivery from {} to {}",
                old_status, request.status
            )));
        }

        let new_status = request.status.clone();
        let mut active: delivery_date::ActiveModel = entry.into();
        active.status = Set(new_status.clone());
        if let Some(description) = request.description {
            active.description = Set(Some(description));
        }
        if let Some(delivery_time) = request.delivery_time {
            active.delivery_time = Set(Some(delivery_time));
        }
        if let Some(rating) = request.rating {
            active.rating = Set(Some(rating));
        }
        if let Some(delivery_image) = request.delivery_image {
            active.delivery_image = Set(Some(delivery_image));
        }
        if let Some(partner) = request.delivery_partner_id {
            active.delivery_partner_id = Set(Some(partner));
        }
        let updated = active.update(&txn).await?;

        if new_status == DeliveryStatus::Delivered {
            self.settle_delivered_day(&txn, &sub).await?;
        }

        txn.commit().await?;

        info!(old_status = %old_status, "Delivery status updated");

        if let Some(event_sender) = &self.event_sender {
            let event = Event::DeliveryStatusChanged {
                delivery_date_id,
                old_status: old_status.to_string(),
                new_status: new_status.to_string(),
            };
            if let Err(e) = event_sender.send(event).await {
                warn!(error = %e, "Failed to send delivery status changed event");
            }
        }

        Ok(delivery_date_to_response(updated))
    }

    /// Assigns a delivery partner to an upcoming slot.
    #[instrument(skip(self), fields(subscription_id = %subscription_id, delivery_date_id = %delivery_date_id))]
    pub async fn assign_delivery_partner(
        &self,
        subscription_id: Uuid,
        delivery_date_id: Uuid,
        partner_id: Uuid,
    ) -> Result<DeliveryDateResponse, ServiceError> {
        let db = &*self.db_pool;
        let (entry, _sub) = load_entry(db, subscription_id, delivery_date_id).await?;

        if !entry.status.is_open() {
            return Err(ServiceError::InvalidStatus(format!(
                "Cannot assign a partner to a delivery in status {}",
                entry.status
            )));
        }

        let mut active: delivery_date::ActiveModel = entry.into();
        active.delivery_partner_id = Set(Some(partner_id));
        let updated = active.update(db).await?;

        info!(partner_id = %partner_id, "Delivery partner assigned");
        Ok(delivery_date_to_response(updated))
    }

    /// Delivered days consume `remaining_days`; a sub-order reaching zero
    /// may retire the whole subscription.
    async fn settle_delivered_day<C: ConnectionTrait>(
        &self,
        conn: &C,
        sub: &sub_order::Model,
    ) -> Result<(), ServiceError> {
        let remaining = (sub.remaining_days - 1).max(0);
        let mut sub_active: sub_order::ActiveModel = sub.clone().into();
        sub_active.remaining_days = Set(remaining);
        sub_active.update(conn).await?;

        if remaining > 0 {
            return Ok(());
        }

        let open_siblings = SubOrderEntity::find()
            .filter(sub_order::Column::SubscriptionOrderId.eq(sub.subscription_order_id))
            .filter(sub_order::Column::RemainingDays.gt(0))
            .count(conn)
            .await?;

        if open_siblings == 0 {
            let order = SubscriptionOrderEntity::find_by_id(sub.subscription_order_id)
                .one(conn)
                .await?
                .ok_or_else(|| {
                    ServiceError::NotFound(format!(
                        "Subscription {} not found",
                        sub.subscription_order_id
                    ))
                })?;
            let mut active: subscription_order::ActiveModel = order.into();
            active.subscription_status = Set(SubscriptionStatus::Inactive);
            active.updated_at = Set(Some(Utc::now()));
            active.update(conn).await?;
            info!(subscription_id = %sub.subscription_order_id, "All sub-orders exhausted, subscription retired");
        }

        Ok(())
    }
}

fn check_cutoff(cutoff: &CutoffTime, now: DateTime<Utc>) -> Result<(), ServiceError> {
    if cutoff.is_past(now) {
        return Err(ServiceError::CutoffExceeded(format!(
            "Same-day schedule changes close at {}",
            cutoff
        )));
    }
    Ok(())
}

/// Loads a delivery entry and its owning sub-order, verifying the entry
/// actually belongs to the given subscription.
async fn load_entry<C: ConnectionTrait>(
    conn: &C,
    subscription_id: Uuid,
    delivery_date_id: Uuid,
) -> Result<(delivery_date::Model, sub_order::Model), ServiceError> {
    let entry = DeliveryDateEntity::find_by_id(delivery_date_id)
        .one(conn)
        .await?
        .ok_or_else(|| {
            ServiceError::NotFound(format!("Delivery date {} not found", delivery_date_id))
        })?;

    let sub = SubOrderEntity::find_by_id(entry.sub_order_id)
        .one(conn)
        .await?
        .ok_or_else(|| {
            ServiceError::NotFound(format!("Sub-order {} not found", entry.sub_order_id))
        })?;

    if sub.subscription_order_id != subscription_id {
        return Err(ServiceError::NotFound(format!(
            "Delivery date {} not found on subscription {}",
            delivery_date_id, subscription_id
        )));
    }

    Ok((entry, sub))
}

/// The pause effect shared by single and bulk pause: mark the entry
/// paused, then append its makeup day after the schedule's latest date.
async fn apply_pause<C: ConnectionTrait>(
    conn: &C,
    entry: delivery_date::Model,
    sub: &sub_order::Model,
) -> Result<(delivery_date::Model, delivery_date::Model), ServiceError> {
    let mut active: delivery_date::ActiveModel = entry.into();
    active.status = Set(DeliveryStatus::Paused);
    active.description = Set(Some(PAUSE_DESCRIPTION.to_string()));
    let paused = active.update(conn).await?;

    // Zero-padded ISO dates sort lexicographically, so the latest row is
    // the schedule tail.
    let latest = DeliveryDateEntity::find()
        .filter(delivery_date::Column::SubOrderId.eq(sub.id))
        .order_by_desc(delivery_date::Column::Date)
        .one(conn)
        .await?
        .ok_or_else(|| {
            ServiceError::InternalError(format!("Sub-order {} has no delivery dates", sub.id))
        })?;

    let makeup_date =
        calendar::next_delivery_day(calendar::parse_date(&latest.date)?, sub.weekday_pattern);

    let makeup = delivery_date::ActiveModel {
        id: Set(Uuid::new_v4()),
        sub_order_id: Set(sub.id),
        date: Set(calendar::format_date(makeup_date)),
        status: Set(DeliveryStatus::Scheduled),
        delivery_partner_id: Set(None),
        description: Set(Some(MAKEUP_DESCRIPTION.to_string())),
        delivery_time: Set(None),
        rating: Set(None),
        delivery_image: Set(None),
        created_at: Set(Utc::now()),
    }
    .insert(conn)
    .await?;

    Ok((paused, makeup))
}

fn order_number(id: Uuid) -> String {
    let simple = id.simple().to_string();
    format!("SUB-{}", simple[..8].to_ascii_uppercase())
}

fn subscription_to_response(model: subscription_order::Model) -> SubscriptionResponse {
    SubscriptionResponse {
        id: model.id,
        order_number: model.order_number,
        customer_id: model.customer_id,
        total_amount: model.total_amount,
        delivery_address: model.delivery_address,
        latitude: model.latitude,
        longitude: model.longitude,
        subscription_status: model.subscription_status,
        payment_type: model.payment_type,
        assigned_franchise_id: model.assigned_franchise_id,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

fn sub_order_to_response(
    model: sub_order::Model,
    dates: Vec<delivery_date::Model>,
) -> SubOrderResponse {
    SubOrderResponse {
        id: model.id,
        product_name: model.product_name,
        quantity: model.quantity,
        unit_price: model.unit_price,
        weekday_pattern: model.weekday_pattern,
        start_date: model.start_date,
        repeat_multiplier: model.repeat_multiplier,
        remaining_days: model.remaining_days,
        delivery_dates: dates.into_iter().map(delivery_date_to_response).collect(),
    }
}

fn delivery_date_to_response(model: delivery_date::Model) -> DeliveryDateResponse {
    DeliveryDateResponse {
        id: model.id,
        date: model.date,
        status: model.status,
        delivery_partner_id: model.delivery_partner_id,
        description: model.description,
        delivery_time: model.delivery_time,
        rating: model.rating,
        delivery_image: model.delivery_image,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_numbers_are_short_and_prefixed() {
        let id = Uuid::new_v4();
        let number = order_number(id);
        assert!(number.starts_with("SUB-"));
        assert_eq!(number.len(), 12);
    }
}
