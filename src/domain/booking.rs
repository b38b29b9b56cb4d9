//! Booking entity and its validated field types.
//!
//! A booking links a patient to a department and (optionally) a doctor. Its
//! lifecycle is the one-way machine Pending → Completed; the transition is
//! owned exclusively by [`crate::domain::booking_service`].

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;
use utoipa::ToSchema;

use super::department::{Department, DoctorId};

/// Stable booking identifier assigned by the persistence collaborator.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
pub struct BookingId(u64);

impl BookingId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Validation errors for booking fields.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum BookingValidationError {
    #[error("patient name must not be empty")]
    EmptyPatientName,
    #[error("patient name must be at most {max} characters")]
    PatientNameTooLong { max: usize },
    #[error("age must be between {min} and {max}")]
    AgeOutOfRange { min: u8, max: u8 },
}

/// Patient identity a record is filed under.
///
/// ## Invariants
/// - Trimmed and non-empty, at most [`PatientName::MAX_LEN`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "String", into = "String")]
pub struct PatientName(String);

impl PatientName {
    /// Maximum accepted name length in characters.
    pub const MAX_LEN: usize = 64;

    /// Validate and construct a patient name.
    pub fn new(name: impl Into<String>) -> Result<Self, BookingValidationError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(BookingValidationError::EmptyPatientName);
        }
        if trimmed.chars().count() > Self::MAX_LEN {
            return Err(BookingValidationError::PatientNameTooLong { max: Self::MAX_LEN });
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for PatientName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for PatientName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<PatientName> for String {
    fn from(value: PatientName) -> Self {
        value.0
    }
}

impl TryFrom<String> for PatientName {
    type Error = BookingValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Patient age in years, restricted to a plausible clinical range.
///
/// Violations fail validation outright; the value is never silently clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "u8", into = "u8")]
pub struct Age(u8);

impl Age {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 120;

    /// Validate and construct an age.
    pub fn new(years: u8) -> Result<Self, BookingValidationError> {
        if (Self::MIN..=Self::MAX).contains(&years) {
            Ok(Self(years))
        } else {
            Err(BookingValidationError::AgeOutOfRange {
                min: Self::MIN,
                max: Self::MAX,
            })
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl From<Age> for u8 {
    fn from(value: Age) -> Self {
        value.0
    }
}

impl TryFrom<u8> for Age {
    type Error = BookingValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Patient gender as captured on the booking form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

/// Booking lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum BookingStatus {
    Pending,
    Completed,
}

/// A scheduled clinical visit.
///
/// ## Invariants
/// - `doctor_id`, when set, referenced a doctor whose department equalled
///   `department` at creation time (not re-validated retroactively).
/// - `status` only ever moves Pending → Completed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: BookingId,
    pub patient_name: PatientName,
    pub age: Age,
    pub gender: Gender,
    pub department: Department,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doctor_id: Option<DoctorId>,
    pub status: BookingStatus,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTime<Utc>,
}

/// Validated draft handed to the repository for insertion.
///
/// Always starts its life `Pending`; the id and timestamp are assigned by
/// the persistence collaborator.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBooking {
    pub patient_name: PatientName,
    pub age: Age,
    pub gender: Gender,
    pub department: Department,
    pub doctor_id: Option<DoctorId>,
}
