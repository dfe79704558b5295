//! Configuración del proyecto
//!
//! Este módulo contiene las variables de entorno del servidor de reservas.

pub mod environment;

pub use environment::*;
