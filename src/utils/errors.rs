//! Sistema de manejo de errores
//!
//! Este módulo define los tipos de errores del motor de reservas
//! y su conversión a respuestas HTTP apropiadas.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

/// Mensaje mostrado al usuario cuando intenta reservar con campos vacíos
pub const INCOMPLETE_BOOKING_MESSAGE: &str = "Please fill in all required details before booking.";

/// Mensaje mostrado al usuario tras una reserva válida
pub const BOOKING_SUCCESS_MESSAGE: &str = "You have been booked successfully!";

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error(transparent)]
    Submission(#[from] SubmissionError),
}

/// Errores del gate de envío de una reserva
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    /// Falta al menos uno de los seis campos requeridos
    #[error("{}", INCOMPLETE_BOOKING_MESSAGE)]
    Incomplete,

    /// La sesión ya fue enviada y es terminal
    #[error("This booking has already been submitted")]
    AlreadySubmitted,

    /// Hay un envío en curso para esta sesión
    #[error("A submission for this booking is already in progress")]
    InProgress,

    /// El servicio de reservas externo rechazó el registro
    #[error("Booking service rejected the request: {0}")]
    Rejected(String),
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_response) = match self {
            AppError::Validation(e) => {
                warn!("Validation error: {}", e);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        error: "Validation Error".to_string(),
                        message: "The provided data is invalid".to_string(),
                        details: Some(json!(e)),
                        code: Some("VALIDATION_ERROR".to_string()),
                    },
                )
            }

            AppError::NotFound(msg) => {
                warn!("Resource not found: {}", msg);
                (
                    StatusCode::NOT_FOUND,
                    ErrorResponse {
                        error: "Not Found".to_string(),
                        message: msg,
                        details: None,
                        code: Some("NOT_FOUND".to_string()),
                    },
                )
            }

            AppError::Conflict(msg) => {
                warn!("Conflict: {}", msg);
                (
                    StatusCode::CONFLICT,
                    ErrorResponse {
                        error: "Conflict".to_string(),
                        message: msg,
                        details: None,
                        code: Some("CONFLICT".to_string()),
                    },
                )
            }

            AppError::BadRequest(msg) => {
                warn!("Bad request: {}", msg);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        error: "Bad Request".to_string(),
                        message: msg,
                        details: None,
                        code: Some("BAD_REQUEST".to_string()),
                    },
                )
            }

            AppError::Catalog(msg) => {
                error!("Catalog error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Catalog Error".to_string(),
                        message: "The vehicle catalog could not be read".to_string(),
                        details: Some(json!({ "catalog_error": msg })),
                        code: Some("CATALOG_ERROR".to_string()),
                    },
                )
            }

            AppError::Submission(e) => {
                warn!("Submission refused: {}", e);
                let (status, code) = match &e {
                    SubmissionError::Incomplete => (StatusCode::UNPROCESSABLE_ENTITY, "INCOMPLETE_BOOKING"),
                    SubmissionError::AlreadySubmitted => (StatusCode::CONFLICT, "ALREADY_SUBMITTED"),
                    SubmissionError::InProgress => (StatusCode::CONFLICT, "SUBMISSION_IN_PROGRESS"),
                    SubmissionError::Rejected(_) => (StatusCode::BAD_GATEWAY, "BOOKING_REJECTED"),
                };
                (
                    status,
                    ErrorResponse {
                        error: "Submission Error".to_string(),
                        message: e.to_string(),
                        details: None,
                        code: Some(code.to_string()),
                    },
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de validación de un solo campo
pub fn validation_error(field: &'static str, error: validator::ValidationError) -> AppError {
    let mut errors = validator::ValidationErrors::new();
    errors.add(field, error);
    AppError::Validation(errors)
}

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(resource: &str, id: &str) -> AppError {
    AppError::NotFound(format!("{} with id '{}' not found", resource, id))
}

/// Función helper para crear errores de conflicto con fechas reservadas
pub fn booked_date_error(date: &str) -> AppError {
    AppError::Conflict(format!("Date '{}' is already booked", date))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incomplete_message_is_user_facing() {
        assert_eq!(SubmissionError::Incomplete.to_string(), INCOMPLETE_BOOKING_MESSAGE);
    }

    #[test]
    fn test_submission_status_codes() {
        let response = AppError::from(SubmissionError::Incomplete).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let response = AppError::from(SubmissionError::AlreadySubmitted).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let response = AppError::from(SubmissionError::InProgress).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_validation_error_helper() {
        match validation_error("month", validator::ValidationError::new("range")) {
            AppError::Validation(errors) => assert!(errors.field_errors().contains_key("month")),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
