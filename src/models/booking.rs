//! Modelo de Booking
//!
//! Este módulo contiene la selección en curso de un usuario, el registro
//! de envío que se entrega al servicio de reservas y el resumen derivado.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::vehicle::{VehicleModelId, VehicleTypeId};
use crate::utils::validation::validate_date_order;

/// Selección en curso para un intento de reserva.
///
/// Los nombres vacíos cuentan como ausentes; el resto de campos son
/// explícitamente opcionales.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    #[serde(default)]
    pub customer_first_name: String,
    #[serde(default)]
    pub customer_last_name: String,
    pub selected_type_id: Option<VehicleTypeId>,
    pub selected_model_id: Option<VehicleModelId>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl Selection {
    pub fn has_customer_name(&self) -> bool {
        !self.customer_first_name.is_empty() && !self.customer_last_name.is_empty()
    }

    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        self.start_date.zip(self.end_date)
    }
}

/// Registro de envío entregado al servicio de reservas externo
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_booking_dates"))]
pub struct BookingRequest {
    #[validate(length(min = 1))]
    pub first_name: String,
    #[validate(length(min = 1))]
    pub last_name: String,
    pub vehicle_type: VehicleTypeId,
    pub vehicle_model: VehicleModelId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

fn validate_booking_dates(request: &BookingRequest) -> Result<(), ValidationError> {
    validate_date_order(request.start_date, request.end_date)
}

/// Resumen legible y flag de elegibilidad para enviar
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookingSummary {
    pub text: String,
    pub eligible: bool,
}

/// Estado del gate de envío
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionState {
    Incomplete,
    Ready,
    Submitted,
}

impl SubmissionState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, SubmissionState::Submitted)
    }
}
