//! Tests for the booking workflow service.

use std::sync::Arc;

use chrono::Utc;

use super::*;
use crate::domain::department::{Department, Doctor, DoctorId};
use crate::domain::error::ErrorCode;
use crate::domain::ports::{MockBookingRepository, MockDoctorDirectory};
use crate::domain::role::{PatientScope, UserId};

fn actor(role: Role, username: &str) -> Actor {
    Actor::new(UserId::random(), username, role)
}

fn sample_request() -> CreateBookingRequest {
    CreateBookingRequest {
        patient_name: "Alice".to_owned(),
        age: 30,
        gender: crate::domain::booking::Gender::Female,
        department: Department::InternalMedicine,
        doctor_id: Some(DoctorId::new(1)),
    }
}

fn internist() -> Doctor {
    Doctor {
        id: DoctorId::new(1),
        username: "dr_wang".to_owned(),
        department: Department::InternalMedicine,
    }
}

fn surgeon() -> Doctor {
    Doctor {
        id: DoctorId::new(2),
        username: "dr_li".to_owned(),
        department: Department::Surgery,
    }
}

fn stored_booking(draft: NewBooking) -> Booking {
    Booking {
        id: BookingId::new(1),
        patient_name: draft.patient_name,
        age: draft.age,
        gender: draft.gender,
        department: draft.department,
        doctor_id: draft.doctor_id,
        status: BookingStatus::Pending,
        created_at: Utc::now(),
    }
}

#[tokio::test]
async fn registration_creates_a_booking_for_any_patient() {
    let mut repo = MockBookingRepository::new();
    repo.expect_insert()
        .times(1)
        .returning(|draft| Ok(stored_booking(draft)));
    let mut directory = MockDoctorDirectory::new();
    directory
        .expect_find()
        .times(1)
        .returning(|_| Ok(Some(internist())));

    let service = BookingService::new(Arc::new(repo), Arc::new(directory));
    let booking = service
        .create(&actor(Role::Registration, "reception"), sample_request())
        .await
        .expect("create succeeds");

    assert_eq!(booking.patient_name.as_str(), "Alice");
    assert_eq!(booking.status, BookingStatus::Pending);
}

#[tokio::test]
async fn general_user_bookings_are_forced_onto_their_own_name() {
    let mut repo = MockBookingRepository::new();
    repo.expect_insert()
        .times(1)
        .returning(|draft| Ok(stored_booking(draft)));
    let mut directory = MockDoctorDirectory::new();
    directory
        .expect_find()
        .times(1)
        .returning(|_| Ok(Some(internist())));

    let service = BookingService::new(Arc::new(repo), Arc::new(directory));
    let mut request = sample_request();
    request.patient_name = "Somebody Else".to_owned();

    let booking = service
        .create(&actor(Role::GeneralUser, "Bob"), request)
        .await
        .expect("create succeeds");

    assert_eq!(booking.patient_name.as_str(), "Bob");
}

#[tokio::test]
async fn mismatched_pairing_fails_validation_even_past_client_filters() {
    let repo = MockBookingRepository::new();
    let mut directory = MockDoctorDirectory::new();
    // The roster resolves the id to a surgeon while the request names
    // internal medicine, as a bypassed client-side cascade would submit.
    directory
        .expect_find()
        .times(1)
        .returning(|_| Ok(Some(surgeon())));

    let service = BookingService::new(Arc::new(repo), Arc::new(directory));
    let mut request = sample_request();
    request.doctor_id = Some(DoctorId::new(2));

    let err = service
        .create(&actor(Role::GeneralUser, "Alice"), request)
        .await
        .expect_err("mismatched pairing must fail");

    assert_eq!(err.code(), ErrorCode::InvalidRequest);
    let details = err.details().expect("field details");
    assert_eq!(details["field"], "doctorId");
}

#[tokio::test]
async fn unknown_doctor_fails_validation() {
    let repo = MockBookingRepository::new();
    let mut directory = MockDoctorDirectory::new();
    directory.expect_find().times(1).returning(|_| Ok(None));

    let service = BookingService::new(Arc::new(repo), Arc::new(directory));
    let err = service
        .create(&actor(Role::Registration, "reception"), sample_request())
        .await
        .expect_err("unknown doctor must fail");

    assert_eq!(err.code(), ErrorCode::InvalidRequest);
}

#[tokio::test]
async fn out_of_range_age_is_rejected_not_clamped() {
    let repo = MockBookingRepository::new();
    let directory = MockDoctorDirectory::new();

    let service = BookingService::new(Arc::new(repo), Arc::new(directory));
    let mut request = sample_request();
    request.age = 0;

    let err = service
        .create(&actor(Role::Registration, "reception"), request)
        .await
        .expect_err("zero age must fail");

    assert_eq!(err.code(), ErrorCode::InvalidRequest);
    let details = err.details().expect("field details");
    assert_eq!(details["field"], "age");
}

#[tokio::test]
async fn storekeeper_may_not_create_bookings() {
    let service = BookingService::new(
        Arc::new(MockBookingRepository::new()),
        Arc::new(MockDoctorDirectory::new()),
    );
    let err = service
        .create(&actor(Role::Storekeeper, "keeper"), sample_request())
        .await
        .expect_err("storekeeper denied");
    assert_eq!(err.code(), ErrorCode::Forbidden);
}

#[tokio::test]
async fn doctor_advances_any_patients_pending_booking() {
    let mut repo = MockBookingRepository::new();
    repo.expect_complete()
        .times(1)
        .returning(|_| Ok(Some(StatusCas::Applied)));

    let service = BookingService::new(Arc::new(repo), Arc::new(MockDoctorDirectory::new()));
    let outcome = service
        .advance(&actor(Role::Doctor, "dr_wang"), BookingId::new(9))
        .await
        .expect("advance succeeds");

    assert_eq!(outcome.status, BookingStatus::Completed);
    assert!(outcome.changed);
}

#[tokio::test]
async fn advancing_a_completed_booking_is_a_noop_success() {
    let mut repo = MockBookingRepository::new();
    repo.expect_complete()
        .times(1)
        .returning(|_| Ok(Some(StatusCas::AlreadyDone)));

    let service = BookingService::new(Arc::new(repo), Arc::new(MockDoctorDirectory::new()));
    let outcome = service
        .advance(&actor(Role::Doctor, "dr_wang"), BookingId::new(9))
        .await
        .expect("idempotent advance succeeds");

    assert_eq!(outcome.status, BookingStatus::Completed);
    assert!(!outcome.changed);
}

#[tokio::test]
async fn registration_and_patients_may_not_advance() {
    let service = BookingService::new(
        Arc::new(MockBookingRepository::new()),
        Arc::new(MockDoctorDirectory::new()),
    );
    for role in [Role::Registration, Role::GeneralUser] {
        let err = service
            .advance(&actor(role, "someone"), BookingId::new(9))
            .await
            .expect_err("advance denied");
        assert_eq!(err.code(), ErrorCode::Forbidden, "{role} should be denied");
    }
}

#[tokio::test]
async fn advancing_a_missing_booking_is_not_found() {
    let mut repo = MockBookingRepository::new();
    repo.expect_complete().times(1).returning(|_| Ok(None));

    let service = BookingService::new(Arc::new(repo), Arc::new(MockDoctorDirectory::new()));
    let err = service
        .advance(&actor(Role::GlobalAdmin, "admin"), BookingId::new(404))
        .await
        .expect_err("missing booking");
    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[tokio::test]
async fn advance_retries_once_after_a_conflict() {
    let mut repo = MockBookingRepository::new();
    let mut first = true;
    repo.expect_complete().times(2).returning(move |_| {
        if first {
            first = false;
            Err(BookingPersistenceError::Conflict)
        } else {
            Ok(Some(StatusCas::Applied))
        }
    });

    let service = BookingService::new(Arc::new(repo), Arc::new(MockDoctorDirectory::new()));
    let outcome = service
        .advance(&actor(Role::Doctor, "dr_wang"), BookingId::new(9))
        .await
        .expect("retry succeeds");
    assert!(outcome.changed);
}

#[tokio::test]
async fn general_user_lists_with_their_own_scope() {
    let mut repo = MockBookingRepository::new();
    repo.expect_list()
        .times(1)
        .withf(|scope| *scope == PatientScope::Named("Bob".to_owned()))
        .returning(|_| Ok(Vec::new()));

    let service = BookingService::new(Arc::new(repo), Arc::new(MockDoctorDirectory::new()));
    service
        .list(&actor(Role::GeneralUser, "Bob"))
        .await
        .expect("list succeeds");
}

#[tokio::test]
async fn staff_list_with_full_scope() {
    let mut repo = MockBookingRepository::new();
    repo.expect_list()
        .times(1)
        .withf(|scope| *scope == PatientScope::All)
        .returning(|_| Ok(Vec::new()));

    let service = BookingService::new(Arc::new(repo), Arc::new(MockDoctorDirectory::new()));
    service
        .list(&actor(Role::Registration, "reception"))
        .await
        .expect("list succeeds");
}

#[tokio::test]
async fn store_outage_maps_to_service_unavailable() {
    let mut repo = MockBookingRepository::new();
    repo.expect_list()
        .times(1)
        .returning(|_| Err(BookingPersistenceError::connection("pool exhausted")));

    let service = BookingService::new(Arc::new(repo), Arc::new(MockDoctorDirectory::new()));
    let err = service
        .list(&actor(Role::OrgAdmin, "director"))
        .await
        .expect_err("outage must fail");
    assert_eq!(err.code(), ErrorCode::ServiceUnavailable);
}
