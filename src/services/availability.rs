//! Disponibilidad de fechas
//!
//! El bloqueo es global al catálogo: un rango reservado bloquea esas fechas
//! para todos los vehículos, no solo para el modelo reservado.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::BookedRange;

/// Verificar si una fecha cae dentro de algún rango reservado (extremos inclusivos)
pub fn is_date_booked(candidate: NaiveDate, booked_ranges: &[BookedRange]) -> bool {
    booked_ranges.iter().any(|range| range.contains(candidate))
}

/// Verificar que ningún día de [start, end] esté reservado
pub fn range_is_free(start: NaiveDate, end: NaiveDate, booked_ranges: &[BookedRange]) -> bool {
    !booked_ranges
        .iter()
        .filter(|range| !range.is_inverted())
        .any(|range| range.overlaps(start, end))
}

/// Día del calendario con su estado de reserva
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DayAvailability {
    pub date: NaiveDate,
    pub booked: bool,
}

/// Todos los días del mes que empieza en `first_day`, con su flag de reserva
pub fn month_availability(first_day: NaiveDate, booked_ranges: &[BookedRange]) -> Vec<DayAvailability> {
    let first_day = first_day.with_day(1).unwrap_or(first_day);
    first_day
        .iter_days()
        .take_while(|day| day.month() == first_day.month())
        .map(|date| DayAvailability {
            date,
            booked: is_date_booked(date, booked_ranges),
        })
        .collect()
}

/// Rangos rápidos del selector de fechas
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DatePreset {
    Today,
    Tomorrow,
    ThisWeek,
    NextWeek,
}

impl DatePreset {
    pub const ALL: [DatePreset; 4] = [
        DatePreset::Today,
        DatePreset::Tomorrow,
        DatePreset::ThisWeek,
        DatePreset::NextWeek,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DatePreset::Today => "Today",
            DatePreset::Tomorrow => "Tomorrow",
            DatePreset::ThisWeek => "This Week",
            DatePreset::NextWeek => "Next Week",
        }
    }

    /// Resolver el preset a un rango [inicio, fin] relativo a `today`.
    /// Las semanas van de lunes a domingo. `None` si el rango sale de las
    /// fechas representables.
    pub fn resolve(&self, today: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
        let monday = today.checked_sub_days(Days::new(u64::from(today.weekday().num_days_from_monday())))?;
        let week = |offset: u64| -> Option<(NaiveDate, NaiveDate)> {
            Some((
                monday.checked_add_days(Days::new(offset))?,
                monday.checked_add_days(Days::new(offset + 6))?,
            ))
        };
        match self {
            DatePreset::Today => Some((today, today)),
            DatePreset::Tomorrow => {
                let tomorrow = today.checked_add_days(Days::new(1))?;
                Some((tomorrow, tomorrow))
            }
            DatePreset::ThisWeek => week(0),
            DatePreset::NextWeek => week(7),
        }
    }
}
