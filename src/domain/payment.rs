//! Payment order entity.
//!
//! Orders are generated by the external billing collaborator once clinical
//! service is rendered; this core only consumes them. The lifecycle is the
//! one-way machine Unpaid → Paid, transitioned exactly once by
//! [`crate::domain::payment_service`].

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;
use utoipa::ToSchema;

use super::booking::PatientName;

/// Stable payment order identifier assigned by the billing collaborator.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
pub struct OrderId(u64);

impl OrderId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Validation errors for payment fields.
#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum PaymentValidationError {
    #[error("total amount must be a finite, non-negative number")]
    InvalidAmount,
}

/// Monetary amount set at order-generation time.
///
/// Treated as opaque by this core: it is validated once at the boundary
/// (finite, non-negative) and never recomputed here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "f64", into = "f64")]
pub struct Amount(f64);

impl Amount {
    /// Validate and construct an amount.
    pub fn new(value: f64) -> Result<Self, PaymentValidationError> {
        if value.is_finite() && value >= 0.0 {
            Ok(Self(value))
        } else {
            Err(PaymentValidationError::InvalidAmount)
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<Amount> for f64 {
    fn from(value: Amount) -> Self {
        value.0
    }
}

impl TryFrom<f64> for Amount {
    type Error = PaymentValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Payment order lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum PaymentStatus {
    Unpaid,
    Paid,
}

/// A billable record tied to rendered clinical service.
///
/// ## Invariants
/// - `status` transitions Unpaid → Paid exactly once; a second settlement
///   attempt is rejected as `AlreadySettled`, never applied twice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentOrder {
    pub id: OrderId,
    pub patient_name: PatientName,
    pub total_amount: Amount,
    pub status: PaymentStatus,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTime<Utc>,
}

/// Draft produced by the billing collaborator for insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPaymentOrder {
    pub patient_name: PatientName,
    pub total_amount: Amount,
}
