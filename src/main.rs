use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, Result};
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info};

use vehicle_booking::config::environment::EnvironmentConfig;
use vehicle_booking::routes::create_app;
use vehicle_booking::services::load_catalog;
use vehicle_booking::state::AppState;

const CLEANUP_INTERVAL: Duration = Duration::from_secs(60);

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::from_env().context("Configuración de entorno inválida")?;

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(config.log_level())
        .init();

    info!("🚗 Vehicle Booking - Disponibilidad y Resumen");
    info!("============================================");
    info!("⚙️ Entorno: {} (sesiones caducan tras {} min)", config.environment, config.session_ttl_minutes);

    // Cargar catálogo estático
    let catalog = match load_catalog(&config.catalog_path) {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("❌ Error cargando el catálogo: {}", e);
            return Err(anyhow::anyhow!("Error de catálogo: {}", e));
        }
    };

    let addr: SocketAddr = config
        .server_url()
        .parse()
        .with_context(|| format!("Dirección de servidor inválida: {}", config.server_url()))?;

    let state = AppState::new(config, catalog);
    spawn_session_cleanup(state.clone());
    let app = create_app(state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("📚 Catálogo:");
    info!("   GET  /api/catalog/types - Tipos de vehículo");
    info!("   GET  /api/catalog/types/:type_id/models - Modelos de un tipo");
    info!("   GET  /api/catalog/types/:type_id/models/:model_id - Detalle de modelo");
    info!("📅 Disponibilidad:");
    info!("   GET  /api/availability/date?date= - ¿Fecha reservada?");
    info!("   GET  /api/availability/month?year=&month= - Calendario mensual");
    info!("   GET  /api/availability/presets?today= - Rangos rápidos");
    info!("📝 Sesiones de reserva:");
    info!("   POST /api/booking/sessions - Crear sesión");
    info!("   GET  /api/booking/sessions/:id - Resumen y estado");
    info!("   PUT  /api/booking/sessions/:id/customer - Nombre del cliente");
    info!("   PUT  /api/booking/sessions/:id/vehicle-type - Tipo de vehículo");
    info!("   PUT  /api/booking/sessions/:id/vehicle-model - Modelo");
    info!("   PUT  /api/booking/sessions/:id/dates - Rango de fechas");
    info!("   POST /api/booking/sessions/:id/submit - Enviar reserva");
    info!("   DELETE /api/booking/sessions/:id - Descartar sesión");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Servidor terminó con error: {}", e);
        return Err(e.into());
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Purga periódica de sesiones caducadas
fn spawn_session_cleanup(state: AppState) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(CLEANUP_INTERVAL);
        loop {
            interval.tick().await;
            state.cleanup_expired_sessions().await;
        }
    });
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo instalar el handler de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el handler de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
