//! Command and query handlers.
//!
//! Thin flows between the presentation layer and the stores: they parse
//! raw form input, enforce creation-time rules, and hand read snapshots
//! to the analytics engine. All handlers are synchronous.

pub mod get_dashboard;
pub mod record_sample;
pub mod register_animal;
pub mod remove_animal;
pub mod update_animal;

pub use get_dashboard::{DashboardView, GetDashboardHandler};
pub use record_sample::{RecordSampleForm, RecordSampleHandler};
pub use register_animal::{RegisterAnimalCommand, RegisterAnimalHandler};
pub use remove_animal::{RemoveAnimalCommand, RemoveAnimalHandler};
pub use update_animal::{UpdateAnimalCommand, UpdateAnimalHandler};

use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::foundation::{AnimalId, ValidationError};
use crate::ports::{RegistryError, SampleLogError};

/// Errors surfaced by the command handlers.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    SampleLog(#[from] SampleLogError),

    /// A sample named an animal the registry does not know.
    #[error("Cannot record sample: unknown animal {0}")]
    UnknownAnimal(AnimalId),
}

/// Parses ISO `YYYY-MM-DD` form input into a calendar date.
fn parse_date(field: &str, value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| ValidationError::invalid_format(field, format!("'{value}' is not a date")))
}

/// Parses numeric form text, rejecting anything that is not a finite number.
fn parse_number(field: &str, value: &str) -> Result<f64, ValidationError> {
    let parsed: f64 = value
        .trim()
        .parse()
        .map_err(|_| ValidationError::invalid_format(field, format!("'{value}' is not a number")))?;
    if !parsed.is_finite() {
        return Err(ValidationError::invalid_format(
            field,
            format!("'{value}' is not a finite number"),
        ));
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_accepts_iso_input() {
        assert_eq!(
            parse_date("date", "2025-11-27").unwrap(),
            NaiveDate::from_ymd_opt(2025, 11, 27).unwrap()
        );
    }

    #[test]
    fn parse_date_rejects_garbage() {
        assert!(parse_date("date", "27/11/2025").is_err());
        assert!(parse_date("date", "").is_err());
    }

    #[test]
    fn parse_number_rejects_non_numeric_text() {
        assert!(parse_number("volume", "abc").is_err());
        assert!(parse_number("volume", "NaN").is_err());
        assert!(parse_number("volume", "inf").is_err());
        assert_eq!(parse_number("volume", " 25.5 ").unwrap(), 25.5);
    }
}
