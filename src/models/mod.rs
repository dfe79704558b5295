//! Modelos de datos
//!
//! Catálogo de vehículos, rangos reservados y selección de reserva.

pub mod booking;
pub mod catalog;
pub mod vehicle;

pub use booking::*;
pub use catalog::*;
pub use vehicle::*;
