//! Resumen de reserva y elegibilidad
//!
//! Un id que no resuelve contra el catálogo se trata como campo ausente:
//! no genera línea y no cuenta para la elegibilidad.

use std::fmt::Write;

use crate::models::{BookingSummary, Catalog, Selection, VehicleModel, VehicleType};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Tipo seleccionado, resuelto contra el catálogo
pub fn resolve_type<'a>(selection: &Selection, catalog: &'a Catalog) -> Option<&'a VehicleType> {
    selection
        .selected_type_id
        .and_then(|type_id| catalog.vehicle_type(type_id))
}

/// Modelo seleccionado, resuelto dentro de los modelos del tipo seleccionado
pub fn resolve_model<'a>(selection: &Selection, catalog: &'a Catalog) -> Option<&'a VehicleModel> {
    let type_id = selection.selected_type_id?;
    let model_id = selection.selected_model_id?;
    catalog.vehicle_model(type_id, model_id)
}

/// Verificar que los seis campos requeridos estén presentes
pub fn is_eligible(selection: &Selection, catalog: &Catalog) -> bool {
    selection.has_customer_name()
        && resolve_type(selection, catalog).is_some()
        && resolve_model(selection, catalog).is_some()
        && selection.date_range().is_some()
}

/// Construir el resumen multilínea y el flag de elegibilidad
pub fn compute_summary(selection: &Selection, catalog: &Catalog) -> BookingSummary {
    let mut text = String::new();

    // writeln! sobre String no falla
    if selection.has_customer_name() {
        let _ = writeln!(
            text,
            "Customer: {} {}",
            selection.customer_first_name, selection.customer_last_name
        );
    }
    if let Some(vehicle_type) = resolve_type(selection, catalog) {
        let _ = writeln!(text, "Vehicle Type: {}", vehicle_type.name);
    }
    if let Some(model) = resolve_model(selection, catalog) {
        let _ = writeln!(text, "Vehicle Model: {}", model.name);
    }
    if let Some((start, end)) = selection.date_range() {
        let _ = writeln!(
            text,
            "Dates: {} to {}",
            start.format(DATE_FORMAT),
            end.format(DATE_FORMAT)
        );
    }

    BookingSummary {
        text,
        eligible: is_eligible(selection, catalog),
    }
}
