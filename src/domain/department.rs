//! Department taxonomy and the doctor roster.
//!
//! The taxonomy is static for the lifetime of a deployment; changes arrive
//! through administration, not at runtime. Doctor records are read through
//! [`crate::domain::ports::DoctorDirectory`] and are read-mostly data that
//! adapters may cache.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;
use utoipa::ToSchema;

/// Clinical department a doctor belongs to and a booking is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Department {
    InternalMedicine,
    Surgery,
    Pediatrics,
    Orthopedics,
    Emergency,
}

impl Department {
    /// Every department, in stable display order.
    pub const ALL: [Department; 5] = [
        Department::InternalMedicine,
        Department::Surgery,
        Department::Pediatrics,
        Department::Orthopedics,
        Department::Emergency,
    ];

    /// Wire identifier, identical to the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Department::InternalMedicine => "internal_medicine",
            Department::Surgery => "surgery",
            Department::Pediatrics => "pediatrics",
            Department::Orthopedics => "orthopedics",
            Department::Emergency => "emergency",
        }
    }

    /// Display label shown on the booking form.
    pub fn label(self) -> &'static str {
        match self {
            Department::InternalMedicine => "内科 (Internal Med)",
            Department::Surgery => "外科 (Surgery)",
            Department::Pediatrics => "儿科 (Pediatrics)",
            Department::Orthopedics => "骨科 (Orthopedics)",
            Department::Emergency => "急诊 (Emergency)",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stable doctor identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
pub struct DoctorId(u64);

impl DoctorId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for DoctorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Doctor roster record. A doctor belongs to exactly one department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    pub id: DoctorId,
    pub username: String,
    pub department: Department,
}

/// Why a (department, doctor) pairing was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ThisError)]
pub enum PairingError {
    /// The referenced doctor does not exist in the roster.
    #[error("doctor does not exist")]
    UnknownDoctor,
    /// The doctor belongs to a different department than the booking names.
    #[error("doctor belongs to {actual}, not {requested}")]
    DepartmentMismatch {
        requested: Department,
        actual: Department,
    },
}

/// Validate that a booking's department matches the chosen doctor.
///
/// Enforced server-side at booking creation regardless of what the client
/// already filtered: the client-side cascade is a UX convenience, not a
/// security boundary.
pub fn validate_pairing(
    department: Department,
    doctor: Option<&Doctor>,
) -> Result<(), PairingError> {
    let doctor = doctor.ok_or(PairingError::UnknownDoctor)?;
    if doctor.department == department {
        Ok(())
    } else {
        Err(PairingError::DepartmentMismatch {
            requested: department,
            actual: doctor.department,
        })
    }
}
