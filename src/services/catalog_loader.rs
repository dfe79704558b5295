//! Carga del catálogo estático
//!
//! Lee el JSON empaquetado una sola vez al arrancar.

use std::path::Path;

use tracing::{info, warn};

use crate::models::Catalog;
use crate::utils::errors::{AppError, AppResult};

/// Parsear el catálogo desde un string JSON
pub fn catalog_from_json_str(raw: &str) -> AppResult<Catalog> {
    let catalog: Catalog =
        serde_json::from_str(raw).map_err(|e| AppError::Catalog(format!("invalid catalog JSON: {}", e)))?;

    for range in catalog.booked_dates.iter().filter(|r| r.is_inverted()) {
        warn!(
            "⚠️ Rango reservado invertido ignorado: {} > {}",
            range.start_date, range.end_date
        );
    }

    Ok(catalog)
}

/// Cargar el catálogo desde un archivo
pub fn load_catalog(path: impl AsRef<Path>) -> AppResult<Catalog> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)
        .map_err(|e| AppError::Catalog(format!("cannot read '{}': {}", path.display(), e)))?;

    let catalog = catalog_from_json_str(&raw)?;
    info!(
        "📚 Catálogo cargado desde {}: {} tipos, {} rangos reservados",
        path.display(),
        catalog.vehicle_types.len(),
        catalog.booked_dates.len()
    );
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_json_is_catalog_error() {
        assert!(matches!(catalog_from_json_str("{not json"), Err(AppError::Catalog(_))));
    }

    #[test]
    fn test_missing_collections_default_to_empty() {
        let catalog = catalog_from_json_str("{}").unwrap();
        assert!(catalog.vehicle_types.is_empty());
        assert!(catalog.booked_dates.is_empty());
    }

    #[test]
    fn test_missing_file_is_catalog_error() {
        assert!(matches!(
            load_catalog("does/not/exist.json"),
            Err(AppError::Catalog(_))
        ));
    }

    #[test]
    fn test_bundled_catalog_loads() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/booking_data.json");
        let catalog = load_catalog(path).unwrap();
        assert!(!catalog.vehicle_types.is_empty());
        for vehicle_type in &catalog.vehicle_types {
            assert!(!catalog.models_for(vehicle_type.id).is_empty());
        }
    }
}
