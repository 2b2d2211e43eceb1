//! Quality sample entity and its measurement values.
//!
//! A sample records one milk-quality measurement event for one animal on
//! one date. Samples are immutable once recorded; they disappear only when
//! their owning animal is removed from the registry.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AnimalId, SampleId, ValidationError};

/// The measured values of one milk sample.
///
/// The analytics engine assumes every field is a valid finite number;
/// [`Measurements::validate`] is the gate that guarantees it, called by the
/// registration flow before a sample is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurements {
    /// Milk volume in liters.
    pub volume: f64,
    /// Fat content, percent.
    pub fat: f64,
    /// Protein content, percent.
    pub protein: f64,
    /// Lactose content, percent.
    pub lactose: f64,
    /// Somatic cell count, thousands per ml.
    pub scc: f64,
    /// Storage temperature, degrees Celsius.
    pub temperature: f64,
    /// Acidity, 0-14.
    pub ph: f64,
}

impl Measurements {
    /// Checks every field against its physical range.
    ///
    /// # Errors
    ///
    /// - `InvalidFormat` if any field is NaN or infinite
    /// - `Negative` if volume, fat, protein, lactose or SCC is negative
    /// - `OutOfRange` if pH falls outside 0-14
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [
            ("volume", self.volume),
            ("fat", self.fat),
            ("protein", self.protein),
            ("lactose", self.lactose),
            ("scc", self.scc),
            ("temperature", self.temperature),
            ("ph", self.ph),
        ] {
            if !value.is_finite() {
                return Err(ValidationError::invalid_format(field, "not a finite number"));
            }
        }
        for (field, value) in [
            ("volume", self.volume),
            ("fat", self.fat),
            ("protein", self.protein),
            ("lactose", self.lactose),
            ("scc", self.scc),
        ] {
            if value < 0.0 {
                return Err(ValidationError::negative(field, value));
            }
        }
        if !(0.0..=14.0).contains(&self.ph) {
            return Err(ValidationError::out_of_range("ph", 0.0, 14.0, self.ph));
        }
        Ok(())
    }
}

/// One milk-quality measurement event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualitySample {
    /// Unique identifier, assigned at creation.
    id: SampleId,

    /// The animal this sample was taken from. Resolved against the
    /// registry at creation time only; a later removal without cascade
    /// leaves a dangling reference the engine tolerates.
    #[serde(rename = "cowId")]
    animal_id: AnimalId,

    /// Sampling date. Not unique per animal.
    date: NaiveDate,

    #[serde(flatten)]
    measurements: Measurements,
}

impl QualitySample {
    /// Records a new sample.
    ///
    /// # Errors
    ///
    /// Fails with the first measurement that is non-finite or out of range.
    pub fn new(
        id: SampleId,
        animal_id: AnimalId,
        date: NaiveDate,
        measurements: Measurements,
    ) -> Result<Self, ValidationError> {
        measurements.validate()?;
        Ok(Self {
            id,
            animal_id,
            date,
            measurements,
        })
    }

    pub fn id(&self) -> SampleId {
        self.id
    }

    pub fn animal_id(&self) -> AnimalId {
        self.animal_id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn measurements(&self) -> &Measurements {
        &self.measurements
    }

    pub fn volume(&self) -> f64 {
        self.measurements.volume
    }

    pub fn fat(&self) -> f64 {
        self.measurements.fat
    }

    pub fn protein(&self) -> f64 {
        self.measurements.protein
    }

    pub fn lactose(&self) -> f64 {
        self.measurements.lactose
    }

    pub fn scc(&self) -> f64 {
        self.measurements.scc
    }

    pub fn temperature(&self) -> f64 {
        self.measurements.temperature
    }

    pub fn ph(&self) -> f64 {
        self.measurements.ph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn good_measurements() -> Measurements {
        Measurements {
            volume: 25.0,
            fat: 3.8,
            protein: 3.2,
            lactose: 4.5,
            scc: 180.0,
            temperature: 4.2,
            ph: 6.7,
        }
    }

    #[test]
    fn valid_sample_is_accepted() {
        let sample = QualitySample::new(
            SampleId::new(),
            AnimalId::new(),
            NaiveDate::from_ymd_opt(2025, 11, 27).unwrap(),
            good_measurements(),
        );
        assert!(sample.is_ok());
    }

    #[test]
    fn negative_volume_is_rejected() {
        let measurements = Measurements {
            volume: -1.0,
            ..good_measurements()
        };
        let result = measurements.validate();
        assert!(matches!(
            result,
            Err(ValidationError::Negative { ref field, .. }) if field == "volume"
        ));
    }

    #[test]
    fn nan_measurement_is_rejected() {
        let measurements = Measurements {
            scc: f64::NAN,
            ..good_measurements()
        };
        assert!(matches!(
            measurements.validate(),
            Err(ValidationError::InvalidFormat { ref field, .. }) if field == "scc"
        ));
    }

    #[test]
    fn ph_outside_scale_is_rejected() {
        let measurements = Measurements {
            ph: 14.5,
            ..good_measurements()
        };
        assert!(matches!(
            measurements.validate(),
            Err(ValidationError::OutOfRange { ref field, .. }) if field == "ph"
        ));
    }

    #[test]
    fn sample_serializes_with_form_field_names() {
        let sample = QualitySample::new(
            SampleId::new(),
            AnimalId::new(),
            NaiveDate::from_ymd_opt(2025, 11, 26).unwrap(),
            good_measurements(),
        )
        .unwrap();

        let json = serde_json::to_value(&sample).unwrap();
        assert!(json.get("cowId").is_some());
        assert!(json.get("scc").is_some());
        assert_eq!(json["date"], "2025-11-26");
    }
}
