use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use serde_json::{json, Value};
use tokio::sync::Notify;
use tower::ServiceExt;

use vehicle_booking::config::environment::EnvironmentConfig;
use vehicle_booking::models::BookingRequest;
use vehicle_booking::routes::create_app;
use vehicle_booking::services::{catalog_from_json_str, BookingService};
use vehicle_booking::state::AppState;
use vehicle_booking::utils::errors::SubmissionError;

const TEST_CATALOG: &str = r#"{
    "vehicleTypes": [{"id": 1, "name": "Car"}, {"id": 2, "name": "Van"}],
    "vehicleModels": {
        "1": [{"id": 10, "name": "Sedan", "description": "Four doors", "image": "sedan.png"}],
        "2": [{"id": 20, "name": "Cargo Van", "description": "Big"}]
    },
    "bookedDates": [{"startDate": "2024-01-05", "endDate": "2024-01-10"}]
}"#;

fn create_test_state() -> AppState {
    let catalog = catalog_from_json_str(TEST_CATALOG).unwrap();
    AppState::new(EnvironmentConfig::default(), catalog)
}

fn create_test_app() -> Router {
    create_app(create_test_state())
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn create_session(app: &Router) -> String {
    let (status, body) = send(app, "POST", "/api/booking/sessions", None).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["state"], "incomplete");
    body["data"]["sessionId"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app();
    let (status, body) = send(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_catalog_endpoints() {
    let app = create_test_app();

    let (status, body) = send(&app, "GET", "/api/catalog/types", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    let (status, body) = send(&app, "GET", "/api/catalog/types/1/models", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["name"], "Sedan");

    let (status, body) = send(&app, "GET", "/api/catalog/types/1/models/10", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["description"], "Four doors");
    assert_eq!(body["data"]["image"], "sedan.png");

    let (status, _) = send(&app, "GET", "/api/catalog/types/1/models/20", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "GET", "/api/catalog/types/9/models", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_availability_endpoints() {
    let app = create_test_app();

    let (status, body) = send(&app, "GET", "/api/availability/date?date=2024-01-05", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["booked"], true);

    let (_, body) = send(&app, "GET", "/api/availability/date?date=2024-01-11", None).await;
    assert_eq!(body["data"]["booked"], false);

    let (status, body) = send(&app, "GET", "/api/availability/date?date=not-a-date", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");

    let (status, body) = send(&app, "GET", "/api/availability/month?year=2024&month=1", None).await;
    assert_eq!(status, StatusCode::OK);
    let days = body["data"]["days"].as_array().unwrap();
    assert_eq!(days.len(), 31);
    assert_eq!(days.iter().filter(|d| d["booked"] == true).count(), 6);

    let (status, _) = send(&app, "GET", "/api/availability/month?year=2024&month=13", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(&app, "GET", "/api/availability/presets?today=2024-01-03", None).await;
    assert_eq!(status, StatusCode::OK);
    let presets = body["data"].as_array().unwrap();
    assert_eq!(presets.len(), 4);
    assert_eq!(presets[2]["label"], "This Week");
    assert_eq!(presets[2]["startDate"], "2024-01-01");
    assert_eq!(presets[2]["free"], false);
    assert_eq!(presets[0]["free"], true);
}

#[tokio::test]
async fn test_booking_session_flow() {
    let app = create_test_app();
    let id = create_session(&app).await;
    let base = format!("/api/booking/sessions/{}", id);

    // Enviar incompleto: error de validación visible, sin cambio de estado
    let (status, body) = send(&app, "POST", &format!("{}/submit", base), None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"], "Please fill in all required details before booking.");

    let (status, _) = send(
        &app,
        "PUT",
        &format!("{}/customer", base),
        Some(json!({"firstName": "A", "lastName": "B"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    send(&app, "PUT", &format!("{}/vehicle-type", base), Some(json!({"vehicleTypeId": 1}))).await;
    send(&app, "PUT", &format!("{}/vehicle-model", base), Some(json!({"vehicleModelId": 10}))).await;

    // Extremo reservado: rechazado
    let (status, _) = send(
        &app,
        "PUT",
        &format!("{}/dates", base),
        Some(json!({"startDate": "2024-01-10", "endDate": "2024-01-12"})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, body) = send(
        &app,
        "PUT",
        &format!("{}/dates", base),
        Some(json!({"startDate": "2024-01-11", "endDate": "2024-01-12"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["state"], "ready");
    assert_eq!(body["data"]["summary"]["eligible"], true);
    assert_eq!(
        body["data"]["summary"]["text"],
        "Customer: A B\nVehicle Type: Car\nVehicle Model: Sedan\nDates: 2024-01-11 to 2024-01-12\n"
    );

    let (status, body) = send(&app, "POST", &format!("{}/submit", base), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "You have been booked successfully!");
    assert_eq!(body["data"]["state"], "submitted");
    assert_eq!(body["data"]["booking"]["vehicleType"], 1);

    let (status, body) = send(&app, "POST", &format!("{}/submit", base), None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "ALREADY_SUBMITTED");
}

#[tokio::test]
async fn test_type_change_clears_model() {
    let app = create_test_app();
    let id = create_session(&app).await;
    let base = format!("/api/booking/sessions/{}", id);

    send(&app, "PUT", &format!("{}/vehicle-type", base), Some(json!({"vehicleTypeId": 1}))).await;
    let (_, body) = send(&app, "PUT", &format!("{}/vehicle-model", base), Some(json!({"vehicleModelId": 10}))).await;
    assert_eq!(body["data"]["selection"]["selectedModelId"], 10);

    let (_, body) = send(&app, "PUT", &format!("{}/vehicle-type", base), Some(json!({"vehicleTypeId": 2}))).await;
    assert_eq!(body["data"]["selection"]["selectedTypeId"], 2);
    assert_eq!(body["data"]["selection"]["selectedModelId"], Value::Null);
    assert_eq!(body["data"]["summary"]["text"], "Vehicle Type: Van\n");
}

#[tokio::test]
async fn test_unknown_and_deleted_sessions() {
    let app = create_test_app();

    let missing = format!("/api/booking/sessions/{}", uuid::Uuid::new_v4());
    let (status, _) = send(&app, "GET", &missing, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let id = create_session(&app).await;
    let base = format!("/api/booking/sessions/{}", id);
    let (status, _) = send(&app, "DELETE", &base, None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, "GET", &base, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_partial_dates_are_rejected() {
    let app = create_test_app();
    let id = create_session(&app).await;

    let (status, _) = send(
        &app,
        "PUT",
        &format!("/api/booking/sessions/{}/dates", id),
        Some(json!({"startDate": "2024-01-11"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_presets_near_calendar_limit_are_rejected() {
    let app = create_test_app();
    let uri = format!(
        "/api/availability/presets?today={}",
        NaiveDate::MAX.to_string().replace('+', "%2B")
    );

    let (status, body) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");

    // El servidor sigue respondiendo
    let (status, _) = send(&app, "GET", "/api/availability/presets?today=2024-01-03", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_unknown_session_is_reported_before_date_checks() {
    let app = create_test_app();
    let uri = format!("/api/booking/sessions/{}/dates", uuid::Uuid::new_v4());

    let (status, body) = send(
        &app,
        "PUT",
        &uri,
        Some(json!({"startDate": "2024-01-05", "endDate": "2024-01-06"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");

    let (status, _) = send(&app, "PUT", &uri, Some(json!({"startDate": "2024-01-11"}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_expired_and_submitted_sessions_are_purged() {
    let state = create_test_state();
    let app = create_app(state.clone());

    let stale = create_session(&app).await;
    let cutoff = Utc::now() + state.config.session_ttl() + chrono::Duration::minutes(1);
    assert_eq!(state.cleanup_sessions_at(cutoff).await, 1);

    let (status, _) = send(&app, "GET", &format!("/api/booking/sessions/{}", stale), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Una sesión enviada se descarta en la siguiente purga
    let id = create_session(&app).await;
    let base = format!("/api/booking/sessions/{}", id);
    fill_ready_session(&app, &base).await;
    let (status, _) = send(&app, "POST", &format!("{}/submit", base), None).await;
    assert_eq!(status, StatusCode::OK);

    let fresh = create_session(&app).await;
    assert_eq!(state.sessions.read().await.len(), 1);
    let (status, _) = send(&app, "GET", &base, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&app, "GET", &format!("/api/booking/sessions/{}", fresh), None).await;
    assert_eq!(status, StatusCode::OK);
}

/// Servicio que retiene cada envío hasta que el test lo libera
#[derive(Default)]
struct GatedService {
    entered: Notify,
    release: Notify,
}

#[async_trait]
impl BookingService for GatedService {
    async fn submit(&self, _request: &BookingRequest) -> Result<(), SubmissionError> {
        self.entered.notify_one();
        self.release.notified().await;
        Ok(())
    }
}

#[tokio::test]
async fn test_slow_booking_service_does_not_block_other_sessions() {
    let service = Arc::new(GatedService::default());
    let catalog = catalog_from_json_str(TEST_CATALOG).unwrap();
    let app = create_app(AppState::with_booking_service(
        EnvironmentConfig::default(),
        catalog,
        service.clone(),
    ));

    let id = create_session(&app).await;
    let base = format!("/api/booking/sessions/{}", id);
    fill_ready_session(&app, &base).await;
    let other = create_session(&app).await;

    let pending = {
        let app = app.clone();
        let uri = format!("{}/submit", base);
        tokio::spawn(async move { send(&app, "POST", &uri, None).await })
    };
    service.entered.notified().await;

    // Otras sesiones siguen disponibles mientras el servicio responde
    let (status, _) = tokio::time::timeout(
        Duration::from_secs(1),
        send(&app, "GET", &format!("/api/booking/sessions/{}", other), None),
    )
    .await
    .expect("store locked while the booking service was pending");
    assert_eq!(status, StatusCode::OK);

    let (status, body) = tokio::time::timeout(
        Duration::from_secs(1),
        send(&app, "POST", &format!("{}/submit", base), None),
    )
    .await
    .unwrap();
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "SUBMISSION_IN_PROGRESS");

    let (status, _) = send(&app, "PUT", &format!("{}/customer", base), Some(json!({"firstName": "X", "lastName": "Y"}))).await;
    assert_eq!(status, StatusCode::CONFLICT);

    service.release.notify_one();
    let (status, body) = pending.await.unwrap();
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["state"], "submitted");
    assert_eq!(body["data"]["booking"]["firstName"], "A");
}

async fn fill_ready_session(app: &Router, base: &str) {
    send(app, "PUT", &format!("{}/customer", base), Some(json!({"firstName": "A", "lastName": "B"}))).await;
    send(app, "PUT", &format!("{}/vehicle-type", base), Some(json!({"vehicleTypeId": 1}))).await;
    send(app, "PUT", &format!("{}/vehicle-model", base), Some(json!({"vehicleModelId": 10}))).await;
    let (status, body) = send(
        app,
        "PUT",
        &format!("{}/dates", base),
        Some(json!({"startDate": "2024-01-11", "endDate": "2024-01-12"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["state"], "ready");
}
