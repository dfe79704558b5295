use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{info, warn};
use uuid::Uuid;

use crate::dto::booking_dto::{
    SelectVehicleModelRequest, SelectVehicleTypeRequest, SubmissionResponse, UpdateCustomerRequest,
    UpdateDatesRequest,
};
use crate::models::{Catalog, SubmissionState};
use crate::services::availability::is_date_booked;
use crate::services::{BookingService, BookingSession, SessionSnapshot};
use crate::state::AppState;
use crate::utils::errors::{booked_date_error, not_found_error, AppError, AppResult};

pub struct BookingController {
    catalog: Arc<Catalog>,
    sessions: Arc<RwLock<HashMap<Uuid, BookingSession>>>,
    booking_service: Arc<dyn BookingService>,
}

impl BookingController {
    pub fn new(state: &AppState) -> Self {
        Self {
            catalog: state.catalog.clone(),
            sessions: state.sessions.clone(),
            booking_service: state.booking_service.clone(),
        }
    }

    pub async fn get(&self, id: Uuid) -> AppResult<SessionSnapshot> {
        let sessions = self.sessions.read().await;
        let session = sessions
            .get(&id)
            .filter(|session| !session.is_expired() || session.is_submitting())
            .ok_or_else(|| session_not_found(id))?;
        Ok(session.snapshot(&self.catalog))
    }

    pub async fn update_customer(&self, id: Uuid, request: UpdateCustomerRequest) -> AppResult<SessionSnapshot> {
        self.mutate(id, |session, catalog| {
            session.set_customer(catalog, request.first_name, request.last_name)
        })
        .await
    }

    pub async fn select_type(&self, id: Uuid, request: SelectVehicleTypeRequest) -> AppResult<SessionSnapshot> {
        self.mutate(id, |session, catalog| session.select_type(catalog, request.vehicle_type_id))
            .await
    }

    pub async fn select_model(&self, id: Uuid, request: SelectVehicleModelRequest) -> AppResult<SessionSnapshot> {
        self.mutate(id, |session, catalog| session.select_model(catalog, request.vehicle_model_id))
            .await
    }

    pub async fn update_dates(&self, id: Uuid, request: UpdateDatesRequest) -> AppResult<SessionSnapshot> {
        self.mutate(id, |session, catalog| {
            let range = match (request.start_date, request.end_date) {
                (Some(start), Some(end)) => Some((start, end)),
                (None, None) => None,
                _ => {
                    return Err(AppError::BadRequest(
                        "startDate and endDate must be set together".to_string(),
                    ))
                }
            };

            // Los días reservados no se pueden elegir como extremo del rango
            if let Some((start, end)) = range {
                for date in [start, end] {
                    if is_date_booked(date, &catalog.booked_dates) {
                        return Err(booked_date_error(&date.to_string()));
                    }
                }
            }

            session.set_dates(catalog, range)
        })
        .await
    }

    /// Enviar la reserva. El lock del store no se mantiene mientras
    /// responde el servicio de reservas.
    pub async fn submit(&self, id: Uuid) -> AppResult<SubmissionResponse> {
        let booking = {
            let mut sessions = self.sessions.write().await;
            live_session(&mut sessions, id)?.begin_submission(&self.catalog)?
        };

        let outcome = self.booking_service.submit(&booking).await;

        let mut sessions = self.sessions.write().await;
        let state = match sessions.get_mut(&id) {
            Some(session) => session.finish_submission(outcome)?,
            None => {
                outcome?;
                warn!("⚠️ Sesión {} descartada durante el envío", id);
                SubmissionState::Submitted
            }
        };

        info!("📦 Reserva confirmada: sesión {} modelo {}", id, booking.vehicle_model);
        Ok(SubmissionResponse { booking, state })
    }

    async fn mutate<F>(&self, id: Uuid, apply: F) -> AppResult<SessionSnapshot>
    where
        F: FnOnce(&mut BookingSession, &Catalog) -> AppResult<SubmissionState>,
    {
        let mut sessions = self.sessions.write().await;
        let session = live_session(&mut sessions, id)?;

        apply(session, self.catalog.as_ref())?;
        Ok(session.snapshot(&self.catalog))
    }
}

fn session_not_found(id: Uuid) -> AppError {
    not_found_error("Booking session", &id.to_string())
}

/// Sesión vigente; una sesión caducada se descarta y cuenta como inexistente
fn live_session(sessions: &mut HashMap<Uuid, BookingSession>, id: Uuid) -> AppResult<&mut BookingSession> {
    if sessions.get(&id).is_some_and(|session| session.is_expired() && !session.is_submitting()) {
        sessions.remove(&id);
        info!("⌛ Sesión de reserva caducada: {}", id);
    }
    sessions.get_mut(&id).ok_or_else(|| session_not_found(id))
}
