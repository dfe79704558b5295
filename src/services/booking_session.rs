//! Sesión de reserva
//!
//! Dueña de la `Selection` de un intento de reserva y del gate de envío
//! Incomplete → Ready → Submitted. Submitted es terminal.
//!
//! Cada sesión caduca tras `ttl` sin actividad; el store las purga.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;
use validator::Validate;

use super::booking_service::BookingService;
use super::summary::{compute_summary, is_eligible};
use crate::models::{
    BookingRequest, BookingSummary, Catalog, Selection, SubmissionState, VehicleModelId, VehicleTypeId,
};
use crate::utils::errors::{not_found_error, validation_error, AppError, AppResult, SubmissionError};
use crate::utils::validation::validate_date_order;

/// Duración por defecto de una sesión inactiva
pub const DEFAULT_SESSION_TTL_MINUTES: u32 = 30;

#[derive(Debug, Clone)]
pub struct BookingSession {
    id: Uuid,
    selection: Selection,
    state: SubmissionState,
    submitting: bool,
    ttl: Duration,
    expires_at: DateTime<Utc>,
}

/// Vista serializable de una sesión
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub session_id: Uuid,
    pub selection: Selection,
    pub summary: BookingSummary,
    pub state: SubmissionState,
    pub expires_at: DateTime<Utc>,
}

impl Default for BookingSession {
    fn default() -> Self {
        Self::new()
    }
}

impl BookingSession {
    pub fn new() -> Self {
        Self::with_ttl(Duration::minutes(i64::from(DEFAULT_SESSION_TTL_MINUTES)))
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            id: Uuid::new_v4(),
            selection: Selection::default(),
            state: SubmissionState::Incomplete,
            submitting: false,
            ttl,
            expires_at: Utc::now() + ttl,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// Verificar si la sesión ha caducado
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    pub fn summary(&self, catalog: &Catalog) -> BookingSummary {
        compute_summary(&self.selection, catalog)
    }

    pub fn snapshot(&self, catalog: &Catalog) -> SessionSnapshot {
        SessionSnapshot {
            session_id: self.id,
            selection: self.selection.clone(),
            summary: self.summary(catalog),
            state: self.state,
            expires_at: self.expires_at,
        }
    }

    /// Actualizar nombre y apellido. Un string vacío limpia el campo.
    pub fn set_customer(
        &mut self,
        catalog: &Catalog,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> AppResult<SubmissionState> {
        self.ensure_open()?;
        self.selection.customer_first_name = first_name.into();
        self.selection.customer_last_name = last_name.into();
        Ok(self.refresh(catalog))
    }

    /// Seleccionar (o limpiar) el tipo de vehículo.
    /// Cambiar de tipo invalida el modelo elegido.
    pub fn select_type(&mut self, catalog: &Catalog, type_id: Option<VehicleTypeId>) -> AppResult<SubmissionState> {
        self.ensure_open()?;
        if let Some(id) = type_id {
            if catalog.vehicle_type(id).is_none() {
                return Err(not_found_error("Vehicle type", &id.to_string()));
            }
        }

        if self.selection.selected_type_id != type_id {
            self.selection.selected_model_id = None;
        }
        self.selection.selected_type_id = type_id;
        Ok(self.refresh(catalog))
    }

    /// Seleccionar (o limpiar) el modelo dentro del tipo actual
    pub fn select_model(&mut self, catalog: &Catalog, model_id: Option<VehicleModelId>) -> AppResult<SubmissionState> {
        self.ensure_open()?;
        if let Some(id) = model_id {
            let type_id = self
                .selection
                .selected_type_id
                .ok_or_else(|| AppError::BadRequest("Select a vehicle type before choosing a model".to_string()))?;
            if catalog.vehicle_model(type_id, id).is_none() {
                return Err(not_found_error("Vehicle model", &id.to_string()));
            }
        }

        self.selection.selected_model_id = model_id;
        Ok(self.refresh(catalog))
    }

    /// Fijar (o limpiar) el rango de fechas
    pub fn set_dates(
        &mut self,
        catalog: &Catalog,
        range: Option<(NaiveDate, NaiveDate)>,
    ) -> AppResult<SubmissionState> {
        self.ensure_open()?;
        if let Some((start, end)) = range {
            validate_date_order(start, end).map_err(|e| validation_error("endDate", e))?;
        }

        self.selection.start_date = range.map(|(start, _)| start);
        self.selection.end_date = range.map(|(_, end)| end);
        Ok(self.refresh(catalog))
    }

    /// Construir el registro de envío si los seis campos están presentes
    pub fn prepare_submission(&self, catalog: &Catalog) -> Result<BookingRequest, SubmissionError> {
        if self.state.is_terminal() {
            return Err(SubmissionError::AlreadySubmitted);
        }
        if !is_eligible(&self.selection, catalog) {
            return Err(SubmissionError::Incomplete);
        }

        let selection = &self.selection;
        match (
            selection.selected_type_id,
            selection.selected_model_id,
            selection.date_range(),
        ) {
            (Some(vehicle_type), Some(vehicle_model), Some((start_date, end_date))) => Ok(BookingRequest {
                first_name: selection.customer_first_name.clone(),
                last_name: selection.customer_last_name.clone(),
                vehicle_type,
                vehicle_model,
                start_date,
                end_date,
            }),
            _ => Err(SubmissionError::Incomplete),
        }
    }

    /// Reservar el envío: valida el registro y bloquea la sesión hasta
    /// `finish_submission`. Mientras tanto no admite mutaciones ni otro envío.
    pub fn begin_submission(&mut self, catalog: &Catalog) -> AppResult<BookingRequest> {
        if self.submitting {
            return Err(SubmissionError::InProgress.into());
        }
        let request = self.prepare_submission(catalog)?;
        request.validate()?;

        self.submitting = true;
        self.touch();
        Ok(request)
    }

    /// Aplicar la respuesta del servicio de reservas.
    /// Un rechazo deja la sesión en Ready.
    pub fn finish_submission(&mut self, outcome: Result<(), SubmissionError>) -> AppResult<SubmissionState> {
        self.submitting = false;
        outcome?;

        self.state = SubmissionState::Submitted;
        info!("✅ Reserva enviada para sesión {}", self.id);
        Ok(self.state)
    }

    /// Enviar la reserva al colaborador externo.
    /// Si la sesión está incompleta no hay cambio de estado.
    pub async fn submit(
        &mut self,
        catalog: &Catalog,
        service: &dyn BookingService,
    ) -> AppResult<BookingRequest> {
        let request = self.begin_submission(catalog)?;
        let outcome = service.submit(&request).await;
        self.finish_submission(outcome)?;
        Ok(request)
    }

    fn ensure_open(&self) -> Result<(), SubmissionError> {
        if self.state.is_terminal() {
            return Err(SubmissionError::AlreadySubmitted);
        }
        if self.submitting {
            return Err(SubmissionError::InProgress);
        }
        Ok(())
    }

    fn touch(&mut self) {
        self.expires_at = Utc::now() + self.ttl;
    }

    fn refresh(&mut self, catalog: &Catalog) -> SubmissionState {
        self.touch();
        let next = if is_eligible(&self.selection, catalog) {
            SubmissionState::Ready
        } else {
            SubmissionState::Incomplete
        };
        if next != self.state {
            debug!("🔄 Sesión {}: {:?} -> {:?}", self.id, self.state, next);
            self.state = next;
        }
        self.state
    }
}
