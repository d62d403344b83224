use utoipa::OpenApi;

use crate::errors::ErrorResponse;
use crate::handlers;
use crate::handlers::subscriptions::{BulkPauseRequest, BulkPauseResponse};
use crate::models::{DeliveryStatus, GeoPoint, PaymentType, SubscriptionStatus, WeekdayPattern};
use crate::services::franchises::{CreateFranchiseRequest, FranchiseResponse, UpdateFranchiseRequest};
use crate::services::geofence::FranchiseMatch;
use crate::services::subscriptions::{
    CreateSubOrderRequest, CreateSubscriptionRequest, DeliveryDateResponse, PauseDeliveryResponse,
    ResumeDeliveryResponse, SubOrderResponse, SubscriptionDetailResponse, SubscriptionResponse,
    UpdateDeliveryStatusRequest,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "FreshRoute API",
        description = "Subscription grocery delivery backend: delivery calendars, \
                       pause/resume lifecycle, and franchise geofencing."
    ),
    paths(
        handlers::subscriptions::create_subscription,
        handlers::subscriptions::list_subscriptions,
        handlers::subscriptions::get_subscription,
        handlers::subscriptions::pause_delivery,
        handlers::subscriptions::resume_delivery,
        handlers::subscriptions::bulk_pause,
        handlers::franchises::create_franchise,
        handlers::franchises::resolve_location,
    ),
    components(schemas(
        ErrorResponse,
        GeoPoint,
        DeliveryStatus,
        SubscriptionStatus,
        PaymentType,
        WeekdayPattern,
        CreateSubscriptionRequest,
        CreateSubOrderRequest,
        UpdateDeliveryStatusRequest,
        SubscriptionResponse,
        SubscriptionDetailResponse,
        SubOrderResponse,
        DeliveryDateResponse,
        PauseDeliveryResponse,
        ResumeDeliveryResponse,
        BulkPauseRequest,
        BulkPauseResponse,
        CreateFranchiseRequest,
        UpdateFranchiseRequest,
        FranchiseResponse,
        FranchiseMatch,
    )),
    tags(
        (name = "subscriptions", description = "Subscription orders and delivery calendars"),
        (name = "franchises", description = "Franchise service areas and geofence resolution")
    )
)]
pub struct ApiDoc;
