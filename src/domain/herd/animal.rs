//! Animal registry entity.
//!
//! Animals are the owning side of the sample relationship: removing an
//! animal cascades to its quality samples (handled by the application
//! layer, since samples live in their own store).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AnimalId, ValidationError};

/// Maximum length for an animal's display name.
pub const MAX_NAME_LENGTH: usize = 120;

/// Lifecycle status of an animal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimalStatus {
    /// In production; included in per-animal aggregates.
    Active,
    /// Dried off, sold, or otherwise out of production.
    Inactive,
}

impl AnimalStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, AnimalStatus::Active)
    }
}

/// A registered animal.
///
/// # Invariants
///
/// - `id` is globally unique and immutable
/// - `name` is 1-120 characters, non-empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Animal {
    /// Unique identifier, assigned at registration.
    id: AnimalId,

    /// Display name.
    name: String,

    /// External ear-tag number. Free text, conventionally unique.
    tag: String,

    /// Breed, free text.
    breed: String,

    /// Date of birth.
    birth_date: NaiveDate,

    /// Current lifecycle status.
    status: AnimalStatus,
}

impl Animal {
    /// Registers a new animal.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the name is blank
    /// - `OutOfRange` if the name exceeds [`MAX_NAME_LENGTH`]
    pub fn new(
        id: AnimalId,
        name: String,
        tag: String,
        breed: String,
        birth_date: NaiveDate,
        status: AnimalStatus,
    ) -> Result<Self, ValidationError> {
        Self::validate_name(&name)?;
        Ok(Self {
            id,
            name,
            tag,
            breed,
            birth_date,
            status,
        })
    }

    /// Replaces every field except the id.
    ///
    /// # Errors
    ///
    /// Same validation as [`Animal::new`].
    pub fn update(
        &mut self,
        name: String,
        tag: String,
        breed: String,
        birth_date: NaiveDate,
        status: AnimalStatus,
    ) -> Result<(), ValidationError> {
        Self::validate_name(&name)?;
        self.name = name;
        self.tag = tag;
        self.breed = breed;
        self.birth_date = birth_date;
        self.status = status;
        Ok(())
    }

    fn validate_name(name: &str) -> Result<(), ValidationError> {
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if name.len() > MAX_NAME_LENGTH {
            return Err(ValidationError::out_of_range(
                "name",
                1.0,
                MAX_NAME_LENGTH as f64,
                name.len() as f64,
            ));
        }
        Ok(())
    }

    pub fn id(&self) -> AnimalId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn breed(&self) -> &str {
        &self.breed
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    pub fn status(&self) -> AnimalStatus {
        self.status
    }

    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }
}
