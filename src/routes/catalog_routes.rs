use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::controllers::catalog_controller::CatalogController;
use crate::dto::booking_dto::ApiResponse;
use crate::models::{VehicleModel, VehicleModelId, VehicleType, VehicleTypeId};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_catalog_router() -> Router<AppState> {
    Router::new()
        .route("/types", get(list_types))
        .route("/types/:type_id/models", get(list_models))
        .route("/types/:type_id/models/:model_id", get(get_model_details))
}

async fn list_types(State(state): State<AppState>) -> Json<ApiResponse<Vec<VehicleType>>> {
    let controller = CatalogController::new(state.catalog.clone());
    Json(ApiResponse::success(controller.list_types()))
}

async fn list_models(
    State(state): State<AppState>,
    Path(type_id): Path<VehicleTypeId>,
) -> Result<Json<ApiResponse<Vec<VehicleModel>>>, AppError> {
    let controller = CatalogController::new(state.catalog.clone());
    let response = controller.list_models(type_id)?;
    Ok(Json(ApiResponse::success(response)))
}

async fn get_model_details(
    State(state): State<AppState>,
    Path((type_id, model_id)): Path<(VehicleTypeId, VehicleModelId)>,
) -> Result<Json<ApiResponse<VehicleModel>>, AppError> {
    let controller = CatalogController::new(state.catalog.clone());
    let response = controller.model_details(type_id, model_id)?;
    Ok(Json(ApiResponse::success(response)))
}
