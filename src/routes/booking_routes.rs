use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::booking_controller::BookingController;
use crate::dto::booking_dto::{
    ApiResponse, SelectVehicleModelRequest, SelectVehicleTypeRequest, SubmissionResponse,
    UpdateCustomerRequest, UpdateDatesRequest,
};
use crate::services::SessionSnapshot;
use crate::state::AppState;
use crate::utils::errors::{not_found_error, AppError, BOOKING_SUCCESS_MESSAGE};

pub fn create_booking_router() -> Router<AppState> {
    Router::new()
        .route("/sessions", post(create_session))
        .route("/sessions/:id", get(get_session).delete(delete_session))
        .route("/sessions/:id/customer", put(update_customer))
        .route("/sessions/:id/vehicle-type", put(select_vehicle_type))
        .route("/sessions/:id/vehicle-model", put(select_vehicle_model))
        .route("/sessions/:id/dates", put(update_dates))
        .route("/sessions/:id/submit", post(submit_booking))
}

async fn create_session(
    State(state): State<AppState>,
) -> (StatusCode, Json<ApiResponse<SessionSnapshot>>) {
    let session = state.open_session().await;
    (
        StatusCode::CREATED,
        Json(ApiResponse::success(session.snapshot(&state.catalog))),
    )
}

async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<SessionSnapshot>>, AppError> {
    let controller = BookingController::new(&state);
    let response = controller.get(id).await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn update_customer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateCustomerRequest>,
) -> Result<Json<ApiResponse<SessionSnapshot>>, AppError> {
    let controller = BookingController::new(&state);
    let response = controller.update_customer(id, request).await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn select_vehicle_type(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<SelectVehicleTypeRequest>,
) -> Result<Json<ApiResponse<SessionSnapshot>>, AppError> {
    let controller = BookingController::new(&state);
    let response = controller.select_type(id, request).await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn select_vehicle_model(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<SelectVehicleModelRequest>,
) -> Result<Json<ApiResponse<SessionSnapshot>>, AppError> {
    let controller = BookingController::new(&state);
    let response = controller.select_model(id, request).await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn update_dates(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateDatesRequest>,
) -> Result<Json<ApiResponse<SessionSnapshot>>, AppError> {
    let controller = BookingController::new(&state);
    let response = controller.update_dates(id, request).await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn submit_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<SubmissionResponse>>, AppError> {
    let controller = BookingController::new(&state);
    let response = controller.submit(id).await?;
    Ok(Json(ApiResponse::success_with_message(
        response,
        BOOKING_SUCCESS_MESSAGE.to_string(),
    )))
}

async fn delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    if !state.close_session(id).await {
        return Err(not_found_error("Booking session", &id.to_string()));
    }
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Booking session discarded"
    })))
}
