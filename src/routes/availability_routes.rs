use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use chrono::Utc;

use crate::controllers::availability_controller::AvailabilityController;
use crate::dto::booking_dto::{
    ApiResponse, DateAvailabilityResponse, DateQuery, MonthAvailabilityResponse, MonthQuery,
    PresetQuery, PresetRangeResponse,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_availability_router() -> Router<AppState> {
    Router::new()
        .route("/date", get(check_date))
        .route("/month", get(month_calendar))
        .route("/presets", get(date_presets))
}

async fn check_date(
    State(state): State<AppState>,
    Query(query): Query<DateQuery>,
) -> Result<Json<ApiResponse<DateAvailabilityResponse>>, AppError> {
    let controller = AvailabilityController::new(state.catalog.clone());
    let response = controller.check_date(&query.date)?;
    Ok(Json(ApiResponse::success(response)))
}

async fn month_calendar(
    State(state): State<AppState>,
    Query(query): Query<MonthQuery>,
) -> Result<Json<ApiResponse<MonthAvailabilityResponse>>, AppError> {
    let controller = AvailabilityController::new(state.catalog.clone());
    let response = controller.month(query)?;
    Ok(Json(ApiResponse::success(response)))
}

async fn date_presets(
    State(state): State<AppState>,
    Query(query): Query<PresetQuery>,
) -> Result<Json<ApiResponse<Vec<PresetRangeResponse>>>, AppError> {
    let today = query.today.unwrap_or_else(|| Utc::now().date_naive());
    let controller = AvailabilityController::new(state.catalog.clone());
    let response = controller.presets(today)?;
    Ok(Json(ApiResponse::success(response)))
}
