//! Modelo de Vehicle
//!
//! Tipos de vehículo y modelos concretos del catálogo estático.
//! Ambos son inmutables una vez cargados.

use serde::{Deserialize, Serialize};

/// Identificador de un tipo de vehículo
pub type VehicleTypeId = u32;

/// Identificador de un modelo de vehículo
pub type VehicleModelId = u32;

/// Tipo de vehículo (Car, Van, ...)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VehicleType {
    pub id: VehicleTypeId,
    pub name: String,
}

/// Modelo concreto asociado a exactamente un tipo de vehículo
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VehicleModel {
    pub id: VehicleModelId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}
