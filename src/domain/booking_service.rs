//! Booking workflow service.
//!
//! Owns the Pending → Completed lifecycle. Every operation checks the
//! permission rule table before touching the store, re-validates the
//! department/doctor pairing server-side, and applies the status transition
//! as an atomic compare-and-set through the repository port.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::booking::{Age, Booking, BookingId, BookingStatus, NewBooking, PatientName};
use crate::domain::department::{validate_pairing, PairingError};
use crate::domain::error::Error;
use crate::domain::ports::{
    AdvanceOutcome, BookingPersistenceError, BookingRepository, BookingWorkflow,
    CreateBookingRequest, DirectoryPersistenceError, DoctorDirectory, StatusCas,
};
use crate::domain::rbac::{evaluate, ResourceAction};
use crate::domain::role::{Actor, Role};

fn map_repository_error(error: BookingPersistenceError) -> Error {
    match error {
        BookingPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("booking store unavailable: {message}"))
        }
        BookingPersistenceError::Query { message } => {
            Error::internal(format!("booking store error: {message}"))
        }
        BookingPersistenceError::Conflict => {
            Error::conflict("booking changed concurrently; retry the request")
        }
    }
}

fn map_directory_error(error: DirectoryPersistenceError) -> Error {
    match error {
        DirectoryPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("doctor directory unavailable: {message}"))
        }
        DirectoryPersistenceError::Query { message } => {
            Error::internal(format!("doctor directory error: {message}"))
        }
    }
}

fn map_pairing_error(error: PairingError) -> Error {
    Error::validation("doctorId", error.to_string())
}

/// Booking workflow over a repository and the doctor directory.
pub struct BookingService<R, D> {
    bookings: Arc<R>,
    directory: Arc<D>,
}

impl<R, D> BookingService<R, D> {
    /// Create the service from its driven ports.
    pub fn new(bookings: Arc<R>, directory: Arc<D>) -> Self {
        Self {
            bookings,
            directory,
        }
    }
}

#[async_trait]
impl<R, D> BookingWorkflow for BookingService<R, D>
where
    R: BookingRepository,
    D: DoctorDirectory,
{
    async fn create(&self, actor: &Actor, request: CreateBookingRequest)
        -> Result<Booking, Error> {
        if !evaluate(actor.role, ResourceAction::BookingsCreate, None).is_allowed() {
            return Err(Error::forbidden("access denied"));
        }

        // Self-registration is always filed under the actor's own identity,
        // whatever name the client submitted.
        let patient_name = if actor.role == Role::GeneralUser {
            actor.username.clone()
        } else {
            request.patient_name
        };
        let patient_name = PatientName::new(patient_name)
            .map_err(|err| Error::validation("patientName", err.to_string()))?;
        let age = Age::new(request.age).map_err(|err| Error::validation("age", err.to_string()))?;

        if let Some(doctor_id) = request.doctor_id {
            let doctor = self
                .directory
                .find(doctor_id)
                .await
                .map_err(map_directory_error)?;
            validate_pairing(request.department, doctor.as_ref()).map_err(map_pairing_error)?;
        }

        let booking = self
            .bookings
            .insert(NewBooking {
                patient_name,
                age,
                gender: request.gender,
                department: request.department,
                doctor_id: request.doctor_id,
            })
            .await
            .map_err(map_repository_error)?;

        info!(
            booking_id = booking.id.value(),
            department = %booking.department,
            actor_role = %actor.role,
            "booking created",
        );
        Ok(booking)
    }

    async fn advance(&self, actor: &Actor, id: BookingId) -> Result<AdvanceOutcome, Error> {
        if !evaluate(actor.role, ResourceAction::BookingsAdvance, None).is_allowed() {
            return Err(Error::forbidden("access denied"));
        }

        // One retry on an optimistic-adapter conflict, then surface it.
        let mut outcome = self.bookings.complete(id).await;
        if matches!(outcome, Err(BookingPersistenceError::Conflict)) {
            outcome = self.bookings.complete(id).await;
        }

        match outcome.map_err(map_repository_error)? {
            None => Err(Error::not_found(format!("booking {id} not found"))),
            Some(StatusCas::Applied) => {
                info!(booking_id = id.value(), actor_role = %actor.role, "booking completed");
                Ok(AdvanceOutcome {
                    booking_id: id,
                    status: BookingStatus::Completed,
                    changed: true,
                })
            }
            // Concurrent double-submission of "mark seen" must not corrupt
            // state: an already-Completed booking is a no-op success.
            Some(StatusCas::AlreadyDone) => Ok(AdvanceOutcome {
                booking_id: id,
                status: BookingStatus::Completed,
                changed: false,
            }),
        }
    }

    async fn list(&self, actor: &Actor) -> Result<Vec<Booking>, Error> {
        if !evaluate(actor.role, ResourceAction::BookingsList, None).is_allowed() {
            return Err(Error::forbidden("access denied"));
        }
        self.bookings
            .list(&actor.scope())
            .await
            .map_err(map_repository_error)
    }
}

#[cfg(test)]
#[path = "booking_service_tests.rs"]
mod tests;
