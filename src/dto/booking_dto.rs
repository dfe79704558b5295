use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{BookingRequest, SubmissionState, VehicleModelId, VehicleTypeId};
use crate::services::DayAvailability;

// Response genérica
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }
}

// Request para actualizar el nombre del cliente (vacío = limpiar)
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCustomerRequest {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

// Request para seleccionar tipo de vehículo (null = limpiar)
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectVehicleTypeRequest {
    pub vehicle_type_id: Option<VehicleTypeId>,
}

// Request para seleccionar modelo (null = limpiar)
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectVehicleModelRequest {
    pub vehicle_model_id: Option<VehicleModelId>,
}

// Request para fijar fechas: ambas o ninguna
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDatesRequest {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

// Query de disponibilidad de un día
#[derive(Debug, Deserialize)]
pub struct DateQuery {
    pub date: String,
}

// Query del calendario mensual
#[derive(Debug, Deserialize, Validate)]
pub struct MonthQuery {
    #[validate(range(min = 1, max = 9999))]
    pub year: i32,
    #[validate(range(min = 1, max = 12))]
    pub month: u32,
}

// Query de presets; sin `today` se usa la fecha UTC actual
#[derive(Debug, Deserialize)]
pub struct PresetQuery {
    pub today: Option<NaiveDate>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DateAvailabilityResponse {
    pub date: NaiveDate,
    pub booked: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MonthAvailabilityResponse {
    pub year: i32,
    pub month: u32,
    pub days: Vec<DayAvailability>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetRangeResponse {
    pub label: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub free: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SubmissionResponse {
    pub booking: BookingRequest,
    pub state: SubmissionState,
}
