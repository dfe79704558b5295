//! Catálogo estático de reservas
//!
//! Mapea exactamente al JSON empaquetado:
//! `{vehicleTypes, vehicleModels, bookedDates}`.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::vehicle::{VehicleModel, VehicleModelId, VehicleType, VehicleTypeId};

/// Intervalo ya reservado, cerrado en ambos extremos
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BookedRange {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl BookedRange {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self { start_date, end_date }
    }

    /// Verificar si la fecha cae dentro de [start_date, end_date]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// Verificar si el intervalo [start, end] se solapa con este rango
    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        start <= self.end_date && self.start_date <= end
    }

    pub fn is_inverted(&self) -> bool {
        self.start_date > self.end_date
    }
}

/// Catálogo completo: tipos, modelos por tipo y fechas reservadas
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    #[serde(default)]
    pub vehicle_types: Vec<VehicleType>,
    #[serde(default)]
    pub vehicle_models: BTreeMap<VehicleTypeId, Vec<VehicleModel>>,
    #[serde(default)]
    pub booked_dates: Vec<BookedRange>,
}

impl Catalog {
    /// Buscar un tipo de vehículo por id
    pub fn vehicle_type(&self, type_id: VehicleTypeId) -> Option<&VehicleType> {
        self.vehicle_types.iter().find(|t| t.id == type_id)
    }

    /// Modelos de un tipo, en el orden del catálogo. Vacío si el tipo no tiene modelos.
    pub fn models_for(&self, type_id: VehicleTypeId) -> &[VehicleModel] {
        self.vehicle_models
            .get(&type_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Buscar un modelo dentro de los modelos del tipo indicado
    pub fn vehicle_model(
        &self,
        type_id: VehicleTypeId,
        model_id: VehicleModelId,
    ) -> Option<&VehicleModel> {
        self.models_for(type_id).iter().find(|m| m.id == model_id)
    }
}
