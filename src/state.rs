//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::config::environment::EnvironmentConfig;
use crate::models::Catalog;
use crate::services::{BookingService, BookingSession, LoggingBookingService};

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub catalog: Arc<Catalog>,
    pub sessions: Arc<RwLock<HashMap<Uuid, BookingSession>>>,
    pub booking_service: Arc<dyn BookingService>,
}

impl AppState {
    pub fn new(config: EnvironmentConfig, catalog: Catalog) -> Self {
        Self::with_booking_service(config, catalog, Arc::new(LoggingBookingService))
    }

    pub fn with_booking_service(
        config: EnvironmentConfig,
        catalog: Catalog,
        booking_service: Arc<dyn BookingService>,
    ) -> Self {
        Self {
            config,
            catalog: Arc::new(catalog),
            sessions: Arc::new(RwLock::new(HashMap::new())),
            booking_service,
        }
    }

    /// Crear y almacenar una sesión vacía
    pub async fn open_session(&self) -> BookingSession {
        self.cleanup_expired_sessions().await;

        let session = BookingSession::with_ttl(self.config.session_ttl());
        let mut sessions = self.sessions.write().await;
        sessions.insert(session.id(), session.clone());
        info!("🆕 Sesión de reserva creada: {} (activas: {})", session.id(), sessions.len());
        session
    }

    /// Purgar sesiones caducadas y las ya enviadas
    pub async fn cleanup_expired_sessions(&self) -> usize {
        self.cleanup_sessions_at(Utc::now()).await
    }

    pub async fn cleanup_sessions_at(&self, now: DateTime<Utc>) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| {
            session.is_submitting()
                || (!session.is_expired_at(now) && !session.state().is_terminal())
        });
        let removed = before - sessions.len();
        if removed > 0 {
            info!("🧹 {} sesiones de reserva purgadas (activas: {})", removed, sessions.len());
        }
        removed
    }

    /// Descartar una sesión. Devuelve false si no existía.
    pub async fn close_session(&self, id: Uuid) -> bool {
        let removed = self.sessions.write().await.remove(&id).is_some();
        if removed {
            info!("🗑️ Sesión de reserva descartada: {}", id);
        }
        removed
    }
}
