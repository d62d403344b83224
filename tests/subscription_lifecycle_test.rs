mod common;

use axum::http::{Method, StatusCode};
use chrono::{TimeZone, Utc};
use serde_json::{json, Value};
use uuid::Uuid;

use assert_matches::assert_matches;
use common::TestApp;
use freshroute_api::errors::ServiceError;
use freshroute_api::models::CutoffTime;
use freshroute_api::services::subscriptions::FranchiseScope;

/// A `now` comfortably before the 6:00 PM cutoff (10:30 at UTC+05:30).
fn before_cutoff() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 3, 5, 0, 0).unwrap()
}

/// A `now` past the 6:00 PM cutoff (19:30 at UTC+05:30).
fn after_cutoff() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 3, 14, 0, 0).unwrap()
}

fn cutoff() -> CutoffTime {
    CutoffTime::parse("6:00 PM").unwrap()
}

/// Creates a single-item mon-fri subscription starting Monday 2024-01-01
/// and returns the detail payload.
async fn create_mon_fri_subscription(app: &TestApp, franchise_id: Option<Uuid>) -> Value {
    let payload = json!({
        "customer_id": Uuid::new_v4().to_string(),
        "delivery_address": "14, 4th Block Jayanagar, Bengaluru",
        "latitude": 12.93,
        "longitude": 77.58,
        "payment_type": "ONLINE",
        "assigned_franchise_id": franchise_id.map(|id| id.to_string()),
        "items": [{
            "product_name": "Farm Fresh Milk 1L",
            "quantity": 2,
            "unit_price": 30,
            "weekday_pattern": "mon-fri",
            "start_date": "2024-01-01T04:30:00Z",
            "repeat_multiplier": 1
        }]
    });

    let (status, body) = app
        .request(Method::POST, "/api/v1/subscriptions", Some(payload))
        .await;
    assert_eq!(status, StatusCode::CREATED, "create failed: {body}");
    assert_eq!(body["success"], json!(true));
    body["data"].clone()
}

fn subscription_id(detail: &Value) -> Uuid {
    Uuid::parse_str(detail["subscription"]["id"].as_str().unwrap()).unwrap()
}

fn delivery_dates(detail: &Value) -> &Vec<Value> {
    detail["sub_orders"][0]["delivery_dates"].as_array().unwrap()
}

fn entry_id_by_date(detail: &Value, date: &str) -> Uuid {
    let entry = delivery_dates(detail)
        .iter()
        .find(|e| e["date"] == date)
        .unwrap_or_else(|| panic!("no delivery entry dated {date}"));
    Uuid::parse_str(entry["id"].as_str().unwrap()).unwrap()
}

async fn fetch_detail(app: &TestApp, id: Uuid) -> Value {
    let (status, body) = app
        .request(Method::GET, &format!("/api/v1/subscriptions/{id}"), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    body["data"].clone()
}

#[tokio::test]
async fn create_generates_calendar_with_weekend_holidays() {
    let app = TestApp::new().await;
    let detail = create_mon_fri_subscription(&app, None).await;

    let dates = delivery_dates(&detail);
    assert_eq!(dates.len(), 34);
    assert_eq!(dates[0]["date"], "2024-01-01");
    assert_eq!(dates[0]["status"], "Pending");
    assert_eq!(dates[33]["date"], "2024-02-03");

    let pending = dates.iter().filter(|e| e["status"] == "Pending").count();
    let holidays = dates.iter().filter(|e| e["status"] == "Holiday").count();
    assert_eq!(pending, 25);
    assert_eq!(holidays, 9);

    // The first weekend of 2024.
    assert_eq!(dates[5]["date"], "2024-01-06");
    assert_eq!(dates[5]["status"], "Holiday");
    assert_eq!(dates[6]["status"], "Holiday");

    assert_eq!(detail["sub_orders"][0]["remaining_days"], 25);

    // 2 units x 30 x 25 active days.
    let total: f64 = detail["subscription"]["total_amount"]
        .as_str()
        .unwrap()
        .parse()
        .unwrap();
    assert_eq!(total, 1500.0);
}

#[tokio::test]
async fn pause_appends_makeup_day_after_schedule_tail() {
    let app = TestApp::new().await;
    let detail = create_mon_fri_subscription(&app, None).await;
    let sub_id = subscription_id(&detail);
    let entry_id = entry_id_by_date(&detail, "2024-01-03");

    let outcome = app
        .state
        .services
        .subscriptions
        .pause_delivery(sub_id, entry_id, &cutoff(), before_cutoff())
        .await
        .expect("pause should succeed");

    assert_eq!(outcome.paused.description.as_deref(), Some("Paused by customer"));
    // Tail is Saturday 2024-02-03; the next mon-fri delivery day is Monday.
    assert_eq!(outcome.makeup.date, "2024-02-05");
    assert_eq!(outcome.makeup.description.as_deref(), Some("Added due to pause"));

    let after = fetch_detail(&app, sub_id).await;
    let dates = delivery_dates(&after);
    assert_eq!(dates.len(), 35);
    assert_eq!(dates.last().unwrap()["date"], "2024-02-05");
    assert_eq!(dates.last().unwrap()["status"], "Scheduled");

    let paused = dates.iter().find(|e| e["date"] == "2024-01-03").unwrap();
    assert_eq!(paused["status"], "Paused");
}

#[tokio::test]
async fn pausing_a_paused_entry_fails_without_mutation() {
    let app = TestApp::new().await;
    let detail = create_mon_fri_subscription(&app, None).await;
    let sub_id = subscription_id(&detail);
    let entry_id = entry_id_by_date(&detail, "2024-01-03");
    let svc = &app.state.services.subscriptions;

    svc.pause_delivery(sub_id, entry_id, &cutoff(), before_cutoff())
        .await
        .expect("first pause");

    let err = svc
        .pause_delivery(sub_id, entry_id, &cutoff(), before_cutoff())
        .await
        .expect_err("second pause must fail");
    assert_matches!(err, ServiceError::AlreadyPaused(_));

    // Exactly one makeup day from the first pause.
    let after = fetch_detail(&app, sub_id).await;
    assert_eq!(delivery_dates(&after).len(), 35);
}

#[tokio::test]
async fn pause_unknown_entry_is_not_found() {
    let app = TestApp::new().await;
    let detail = create_mon_fri_subscription(&app, None).await;
    let sub_id = subscription_id(&detail);

    let err = app
        .state
        .services
        .subscriptions
        .pause_delivery(sub_id, Uuid::new_v4(), &cutoff(), before_cutoff())
        .await
        .expect_err("unknown entry");
    assert_matches!(err, ServiceError::NotFound(_));
}

#[tokio::test]
async fn resume_restores_status_and_removes_the_makeup_day() {
    let app = TestApp::new().await;
    let detail = create_mon_fri_subscription(&app, None).await;
    let sub_id = subscription_id(&detail);
    let entry_id = entry_id_by_date(&detail, "2024-01-03");

    app.state
        .services
        .subscriptions
        .pause_delivery(sub_id, entry_id, &cutoff(), before_cutoff())
        .await
        .expect("pause");

    let (status, body) = app
        .request(
            Method::POST,
            &format!("/api/v1/subscriptions/{sub_id}/deliveries/{entry_id}/resume"),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK, "resume failed: {body}");
    assert_eq!(body["data"]["makeup_removed"], json!(true));
    assert_eq!(body["data"]["resumed"]["status"], "Scheduled");

    // Net schedule length is unchanged after pause + resume.
    let after = fetch_detail(&app, sub_id).await;
    assert_eq!(delivery_dates(&after).len(), 34);
}

#[tokio::test]
async fn resuming_a_non_paused_entry_conflicts() {
    let app = TestApp::new().await;
    let detail = create_mon_fri_subscription(&app, None).await;
    let sub_id = subscription_id(&detail);
    let entry_id = entry_id_by_date(&detail, "2024-01-03");

    let (status, body) = app
        .request(
            Method::POST,
            &format!("/api/v1/subscriptions/{sub_id}/deliveries/{entry_id}/resume"),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT, "unexpected: {body}");
    assert_eq!(body["error"], "Conflict");
}

#[tokio::test]
async fn consecutive_pauses_resume_lifo_on_the_makeup_tail() {
    let app = TestApp::new().await;
    let detail = create_mon_fri_subscription(&app, None).await;
    let sub_id = subscription_id(&detail);
    let first = entry_id_by_date(&detail, "2024-01-03");
    let second = entry_id_by_date(&detail, "2024-01-04");
    let svc = &app.state.services.subscriptions;

    let first_outcome = svc
        .pause_delivery(sub_id, first, &cutoff(), before_cutoff())
        .await
        .expect("first pause");
    let second_outcome = svc
        .pause_delivery(sub_id, second, &cutoff(), before_cutoff())
        .await
        .expect("second pause");
    assert_eq!(first_outcome.makeup.date, "2024-02-05");
    assert_eq!(second_outcome.makeup.date, "2024-02-06");

    // Resuming the *first* pause still removes the newest makeup day.
    let resume = svc.resume_delivery(sub_id, first).await.expect("resume");
    assert!(resume.makeup_removed);

    let after = fetch_detail(&app, sub_id).await;
    let dates = delivery_dates(&after);
    assert_eq!(dates.len(), 35);
    assert_eq!(dates.last().unwrap()["date"], "2024-02-05");
}

#[tokio::test]
async fn pause_after_cutoff_is_rejected_without_mutation() {
    let app = TestApp::new().await;
    let detail = create_mon_fri_subscription(&app, None).await;
    let sub_id = subscription_id(&detail);
    let entry_id = entry_id_by_date(&detail, "2024-01-03");

    let err = app
        .state
        .services
        .subscriptions
        .pause_delivery(sub_id, entry_id, &cutoff(), after_cutoff())
        .await
        .expect_err("past cutoff");
    assert_matches!(err, ServiceError::CutoffExceeded(_));

    let after = fetch_detail(&app, sub_id).await;
    let dates = delivery_dates(&after);
    assert_eq!(dates.len(), 34);
    let entry = dates.iter().find(|e| e["date"] == "2024-01-03").unwrap();
    assert_eq!(entry["status"], "Pending");
}

#[tokio::test]
async fn bulk_pause_touches_every_active_subscription_once() {
    let app = TestApp::new().await;
    let first = create_mon_fri_subscription(&app, None).await;
    let second = create_mon_fri_subscription(&app, None).await;
    let svc = &app.state.services.subscriptions;

    let paused = svc
        .bulk_pause(
            FranchiseScope::All,
            chrono::NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            &cutoff(),
            before_cutoff(),
        )
        .await
        .expect("bulk pause");
    assert_eq!(paused, 2);

    for detail in [&first, &second] {
        let after = fetch_detail(&app, subscription_id(detail)).await;
        let dates = delivery_dates(&after);
        assert_eq!(dates.len(), 35);
        let entry = dates.iter().find(|e| e["date"] == "2024-01-10").unwrap();
        assert_eq!(entry["status"], "Paused");
    }

    // A second bulk pause finds nothing eligible on that date.
    let again = svc
        .bulk_pause(
            FranchiseScope::All,
            chrono::NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            &cutoff(),
            before_cutoff(),
        )
        .await
        .expect("repeat bulk pause");
    assert_eq!(again, 0);
}

#[tokio::test]
async fn bulk_pause_respects_franchise_scope() {
    let app = TestApp::new().await;

    let franchise_payload = json!({
        "name": "Jayanagar South",
        "polygon": [
            {"lat": 12.90, "lng": 77.55},
            {"lat": 12.90, "lng": 77.65},
            {"lat": 13.00, "lng": 77.65},
            {"lat": 13.00, "lng": 77.55}
        ],
        "free_delivery_radius_km": 5,
        "charge_per_extra_km": 10,
        "total_delivery_radius_km": 50
    });
    let (status, body) = app
        .request(Method::POST, "/api/v1/franchises", Some(franchise_payload))
        .await;
    assert_eq!(status, StatusCode::CREATED, "franchise create failed: {body}");
    let franchise_id = Uuid::parse_str(body["data"]["id"].as_str().unwrap()).unwrap();

    let assigned = create_mon_fri_subscription(&app, Some(franchise_id)).await;
    let unassigned = create_mon_fri_subscription(&app, None).await;

    let paused = app
        .state
        .services
        .subscriptions
        .bulk_pause(
            FranchiseScope::Selected(vec![franchise_id]),
            chrono::NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            &cutoff(),
            before_cutoff(),
        )
        .await
        .expect("scoped bulk pause");
    assert_eq!(paused, 1);

    let assigned_after = fetch_detail(&app, subscription_id(&assigned)).await;
    assert_eq!(delivery_dates(&assigned_after).len(), 35);

    let unassigned_after = fetch_detail(&app, subscription_id(&unassigned)).await;
    assert_eq!(delivery_dates(&unassigned_after).len(), 34);
}

#[tokio::test]
async fn delivered_status_consumes_remaining_days() {
    let app = TestApp::new().await;
    let detail = create_mon_fri_subscription(&app, None).await;
    let sub_id = subscription_id(&detail);
    let entry_id = entry_id_by_date(&detail, "2024-01-02");

    let payload = json!({
        "status": "Delivered",
        "delivery_time": "08:15 AM",
        "rating": 5,
        "delivery_partner_id": Uuid::new_v4().to_string()
    });
    let (status, body) = app
        .request(
            Method::PUT,
            &format!("/api/v1/subscriptions/{sub_id}/deliveries/{entry_id}/status"),
            Some(payload),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "status update failed: {body}");
    assert_eq!(body["data"]["status"], "Delivered");
    assert_eq!(body["data"]["rating"], 5);

    let after = fetch_detail(&app, sub_id).await;
    assert_eq!(after["sub_orders"][0]["remaining_days"], 24);
}

#[tokio::test]
async fn holiday_entries_never_become_delivered() {
    let app = TestApp::new().await;
    let detail = create_mon_fri_subscription(&app, None).await;
    let sub_id = subscription_id(&detail);
    // 2024-01-06 is a Saturday, a holiday under mon-fri.
    let entry_id = entry_id_by_date(&detail, "2024-01-06");

    let (status, body) = app
        .request(
            Method::PUT,
            &format!("/api/v1/subscriptions/{sub_id}/deliveries/{entry_id}/status"),
            Some(json!({"status": "Delivered"})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST, "unexpected: {body}");
}

#[tokio::test]
async fn partner_assignment_requires_an_open_slot() {
    let app = TestApp::new().await;
    let detail = create_mon_fri_subscription(&app, None).await;
    let sub_id = subscription_id(&detail);
    let open = entry_id_by_date(&detail, "2024-01-02");
    let holiday = entry_id_by_date(&detail, "2024-01-06");
    let partner = Uuid::new_v4();

    let (status, body) = app
        .request(
            Method::PUT,
            &format!("/api/v1/subscriptions/{sub_id}/deliveries/{open}/partner"),
            Some(json!({"delivery_partner_id": partner.to_string()})),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "assign failed: {body}");
    assert_eq!(
        body["data"]["delivery_partner_id"],
        json!(partner.to_string())
    );

    let (status, _) = app
        .request(
            Method::PUT,
            &format!("/api/v1/subscriptions/{sub_id}/deliveries/{holiday}/partner"),
            Some(json!({"delivery_partner_id": partner.to_string()})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn settings_round_trip_and_validation() {
    let app = TestApp::new().await;

    let (status, body) = app.request(Method::GET, "/api/v1/settings", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["pause_cutoff_time"], "11:59 PM");

    let (status, body) = app
        .request(
            Method::PUT,
            "/api/v1/settings",
            Some(json!({"pause_cutoff_time": "7:00 AM"})),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "update failed: {body}");
    assert_eq!(body["data"]["pause_cutoff_time"], "7:00 AM");

    let (status, _) = app
        .request(
            Method::PUT,
            "/api/v1/settings",
            Some(json!({"pause_cutoff_time": "19:00"})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn listing_paginates_newest_first() {
    let app = TestApp::new().await;
    create_mon_fri_subscription(&app, None).await;
    create_mon_fri_subscription(&app, None).await;
    create_mon_fri_subscription(&app, None).await;

    let (status, body) = app
        .request(Method::GET, "/api/v1/subscriptions?page=1&limit=2", None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["total"], 3);
    assert_eq!(body["data"]["subscriptions"].as_array().unwrap().len(), 2);
}
