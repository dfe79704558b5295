use std::sync::Arc;

use chrono::NaiveDate;
use validator::{Validate, ValidationError};

use crate::dto::booking_dto::{
    DateAvailabilityResponse, MonthAvailabilityResponse, MonthQuery, PresetRangeResponse,
};
use crate::models::Catalog;
use crate::services::availability::{is_date_booked, month_availability, range_is_free, DatePreset};
use crate::utils::errors::{validation_error, AppError};
use crate::utils::validation::{validate_date, validate_year_month};

pub struct AvailabilityController {
    catalog: Arc<Catalog>,
}

impl AvailabilityController {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn check_date(&self, raw_date: &str) -> Result<DateAvailabilityResponse, AppError> {
        let date = validate_date(raw_date).map_err(|e| validation_error("date", e))?;

        Ok(DateAvailabilityResponse {
            date,
            booked: is_date_booked(date, &self.catalog.booked_dates),
        })
    }

    pub fn month(&self, query: MonthQuery) -> Result<MonthAvailabilityResponse, AppError> {
        query.validate()?;
        let first_day =
            validate_year_month(query.year, query.month).map_err(|e| validation_error("month", e))?;

        Ok(MonthAvailabilityResponse {
            year: query.year,
            month: query.month,
            days: month_availability(first_day, &self.catalog.booked_dates),
        })
    }

    pub fn presets(&self, today: NaiveDate) -> Result<Vec<PresetRangeResponse>, AppError> {
        DatePreset::ALL
            .iter()
            .map(|preset| {
                let (start_date, end_date) = preset.resolve(today).ok_or_else(|| {
                    let mut error = ValidationError::new("date_range");
                    error.message = Some("Date is too close to the calendar limits for presets".into());
                    validation_error("today", error)
                })?;
                Ok(PresetRangeResponse {
                    label: preset.label().to_string(),
                    start_date,
                    end_date,
                    free: range_is_free(start_date, end_date, &self.catalog.booked_dates),
                })
            })
            .collect()
    }
}
