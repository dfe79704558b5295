use std::sync::Arc;

use crate::models::{Catalog, VehicleModel, VehicleModelId, VehicleType, VehicleTypeId};
use crate::utils::errors::{not_found_error, AppError};

pub struct CatalogController {
    catalog: Arc<Catalog>,
}

impl CatalogController {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn list_types(&self) -> Vec<VehicleType> {
        self.catalog.vehicle_types.clone()
    }

    pub fn list_models(&self, type_id: VehicleTypeId) -> Result<Vec<VehicleModel>, AppError> {
        // Verificar que el tipo existe
        if self.catalog.vehicle_type(type_id).is_none() {
            return Err(not_found_error("Vehicle type", &type_id.to_string()));
        }
        Ok(self.catalog.models_for(type_id).to_vec())
    }

    pub fn model_details(
        &self,
        type_id: VehicleTypeId,
        model_id: VehicleModelId,
    ) -> Result<VehicleModel, AppError> {
        self.catalog
            .vehicle_model(type_id, model_id)
            .cloned()
            .ok_or_else(|| not_found_error("Vehicle model", &model_id.to_string()))
    }
}
