//! Servicio de reservas externo
//!
//! El contrato real (persistencia, idempotencia) pertenece al colaborador
//! externo. Aquí solo existe el stub que registra el envío en los logs.

use async_trait::async_trait;
use tracing::info;

use crate::models::BookingRequest;
use crate::utils::errors::SubmissionError;

/// Colaborador que recibe los registros de reserva ya validados
#[async_trait]
pub trait BookingService: Send + Sync {
    async fn submit(&self, request: &BookingRequest) -> Result<(), SubmissionError>;
}

/// Stub: registra el envío y acepta siempre
#[derive(Debug, Default, Clone)]
pub struct LoggingBookingService;

#[async_trait]
impl BookingService for LoggingBookingService {
    async fn submit(&self, request: &BookingRequest) -> Result<(), SubmissionError> {
        let payload = serde_json::to_string(request).map_err(|e| SubmissionError::Rejected(e.to_string()))?;
        info!("📨 Booking data: {}", payload);
        Ok(())
    }
}
