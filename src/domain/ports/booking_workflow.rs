//! Driving port for the booking workflow.
//!
//! Inbound adapters call this trait; [`crate::domain::booking_service`]
//! implements it. Every operation takes the acting [`Actor`] explicitly.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::booking::{Booking, BookingId, BookingStatus, Gender};
use crate::domain::department::{Department, DoctorId};
use crate::domain::error::Error;
use crate::domain::role::Actor;

/// Booking creation payload as submitted by a front-end.
///
/// Field-level invariants (age range, name shape, pairing) are validated by
/// the workflow, not trusted from the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub patient_name: String,
    pub age: u8,
    pub gender: Gender,
    pub department: Department,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doctor_id: Option<DoctorId>,
}

/// Result of advancing a booking.
///
/// `changed` is false when the booking was already Completed: an
/// idempotent no-op success, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdvanceOutcome {
    pub booking_id: BookingId,
    pub status: BookingStatus,
    pub changed: bool,
}

/// Domain use-case port for booking lifecycle operations.
#[async_trait]
pub trait BookingWorkflow: Send + Sync {
    /// Create a booking (self-service or on behalf of a patient).
    async fn create(&self, actor: &Actor, request: CreateBookingRequest)
        -> Result<Booking, Error>;

    /// Advance a Pending booking to Completed.
    async fn advance(&self, actor: &Actor, id: BookingId) -> Result<AdvanceOutcome, Error>;

    /// List bookings visible to the actor.
    async fn list(&self, actor: &Actor) -> Result<Vec<Booking>, Error>;
}
