//! Servicios del motor de reservas
//!
//! Núcleo puro (disponibilidad, resumen) y la sesión que lo envuelve.

pub mod availability;
pub mod booking_service;
pub mod booking_session;
pub mod catalog_loader;
pub mod summary;

pub use availability::{is_date_booked, month_availability, range_is_free, DatePreset, DayAvailability};
pub use booking_service::{BookingService, LoggingBookingService};
pub use booking_session::{BookingSession, SessionSnapshot, DEFAULT_SESSION_TTL_MINUTES};
pub use catalog_loader::{catalog_from_json_str, load_catalog};
pub use summary::compute_summary;
