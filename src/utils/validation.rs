//! Utilidades de validación
//!
//! Funciones helper para validar fechas y rangos de reserva
//! antes de que lleguen al núcleo puro.

use chrono::NaiveDate;
use validator::ValidationError;

/// Validar y convertir string a fecha (formato YYYY-MM-DD)
pub fn validate_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        let mut error = ValidationError::new("date");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"YYYY-MM-DD".to_string());
        error
    })
}

/// Validar que la fecha de inicio no sea posterior a la de fin
pub fn validate_date_order(start: NaiveDate, end: NaiveDate) -> Result<(), ValidationError> {
    if start > end {
        let mut error = ValidationError::new("date_order");
        error.add_param("start_date".into(), &start.to_string());
        error.add_param("end_date".into(), &end.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar un par año/mes de calendario
pub fn validate_year_month(year: i32, month: u32) -> Result<NaiveDate, ValidationError> {
    NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
        let mut error = ValidationError::new("year_month");
        error.add_param("year".into(), &year);
        error.add_param("month".into(), &month);
        error
    })
}
