//! Motor de disponibilidad y resumen de reservas de vehículos
//!
//! Núcleo puro (disponibilidad de fechas, resumen y elegibilidad) más una
//! API HTTP fina que mantiene las sesiones de reserva.

pub mod config;
pub mod controllers;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

pub use models::{BookedRange, BookingRequest, BookingSummary, Catalog, Selection, SubmissionState};
pub use services::{compute_summary, is_date_booked};
