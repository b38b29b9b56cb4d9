//! In-memory reference adapter for every driven port.
//!
//! All records live behind a single mutex. Status transitions run their
//! read-check-write cycle while holding the lock, which makes `complete`
//! and `settle` atomic compare-and-set operations, and the statistics
//! totals are computed under the same lock so they never straddle a
//! half-applied settlement. Distinct entities share the one lock here for
//! simplicity; the port contract only requires per-entity atomicity, which
//! a database-backed adapter would satisfy with row-level compare-and-set.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::booking::{
    Age, Booking, BookingId, BookingStatus, Gender, NewBooking, PatientName,
};
use crate::domain::department::{Department, Doctor, DoctorId};
use crate::domain::inventory::{Medicine, MedicineId};
use crate::domain::payment::{Amount, NewPaymentOrder, OrderId, PaymentOrder, PaymentStatus};
use crate::domain::ports::{
    BookingPersistenceError, BookingRepository, DirectoryPersistenceError, DoctorDirectory,
    InventoryPersistenceError, MedicineInventory, PaymentPersistenceError, PaymentRepository,
    StatsSource, StatsSourceError, StatusCas, UserDirectory, UserDirectoryError,
};
use crate::domain::role::{PatientScope, Role, User, UserId};
use crate::domain::stats::StatsTotals;

/// Shared in-memory store backing all driven ports.
pub struct MemoryStore {
    inner: Mutex<StoreInner>,
}

#[derive(Default)]
struct StoreInner {
    users: BTreeMap<UserId, User>,
    doctors: BTreeMap<DoctorId, Doctor>,
    bookings: BTreeMap<BookingId, Booking>,
    orders: BTreeMap<OrderId, PaymentOrder>,
    medicines: BTreeMap<MedicineId, Medicine>,
    next_booking_id: u64,
    next_order_id: u64,
}

/// The store mutex was poisoned by a panicking writer.
struct PoisonedStore;

impl From<PoisonedStore> for BookingPersistenceError {
    fn from(_: PoisonedStore) -> Self {
        Self::connection("store mutex poisoned")
    }
}

impl From<PoisonedStore> for PaymentPersistenceError {
    fn from(_: PoisonedStore) -> Self {
        Self::connection("store mutex poisoned")
    }
}

impl From<PoisonedStore> for DirectoryPersistenceError {
    fn from(_: PoisonedStore) -> Self {
        Self::connection("store mutex poisoned")
    }
}

impl From<PoisonedStore> for UserDirectoryError {
    fn from(_: PoisonedStore) -> Self {
        Self::connection("store mutex poisoned")
    }
}

impl From<PoisonedStore> for InventoryPersistenceError {
    fn from(_: PoisonedStore) -> Self {
        Self::connection("store mutex poisoned")
    }
}

impl From<PoisonedStore> for StatsSourceError {
    fn from(_: PoisonedStore) -> Self {
        Self::connection("store mutex poisoned")
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(StoreInner::default()),
        }
    }

    /// Create a store seeded with the demo dashboard world: one user per
    /// role, a doctor per department, sample bookings, unpaid and settled
    /// orders, and a medicine shelf.
    pub fn with_demo_data() -> Self {
        let mut inner = StoreInner::default();

        for (username, role) in [
            ("admin", Role::GlobalAdmin),
            ("director", Role::OrgAdmin),
            ("dr_wang", Role::Doctor),
            ("reception", Role::Registration),
            ("cashier", Role::Finance),
            ("keeper", Role::Storekeeper),
            ("Alice", Role::GeneralUser),
            ("Bob", Role::GeneralUser),
        ] {
            seed_user(&mut inner, username, role);
        }

        for (id, username, department) in [
            (1, "dr_wang", Department::InternalMedicine),
            (2, "dr_li", Department::Surgery),
            (3, "dr_zhao", Department::Pediatrics),
            (4, "dr_chen", Department::Orthopedics),
            (5, "dr_sun", Department::Emergency),
        ] {
            seed_doctor(&mut inner, id, username, department);
        }

        seed_booking(
            &mut inner,
            "Alice",
            34,
            Gender::Female,
            Department::InternalMedicine,
            Some(DoctorId::new(1)),
            BookingStatus::Pending,
        );
        seed_booking(
            &mut inner,
            "Bob",
            41,
            Gender::Male,
            Department::Surgery,
            Some(DoctorId::new(2)),
            BookingStatus::Completed,
        );

        seed_order(&mut inner, "Alice", 150.5, PaymentStatus::Unpaid);
        seed_order(&mut inner, "Bob", 80.0, PaymentStatus::Unpaid);
        seed_order(&mut inner, "Bob", 230.0, PaymentStatus::Paid);

        for (id, name, unit, stock) in [
            (1, "Amoxicillin", "box", 120_u32),
            (2, "Ibuprofen", "bottle", 80),
            (3, "Saline 0.9%", "bag", 200),
            (4, "Insulin", "pen", 45),
        ] {
            inner.medicines.insert(
                MedicineId::new(id),
                Medicine {
                    id: MedicineId::new(id),
                    name: name.to_owned(),
                    unit: unit.to_owned(),
                    stock,
                },
            );
        }

        Self {
            inner: Mutex::new(inner),
        }
    }

    fn guard(&self) -> Result<MutexGuard<'_, StoreInner>, PoisonedStore> {
        self.inner.lock().map_err(|_| PoisonedStore)
    }
}

fn seed_user(inner: &mut StoreInner, username: &str, role: Role) -> User {
    let user = User {
        id: UserId::random(),
        username: username.to_owned(),
        role,
        created_at: Utc::now(),
    };
    inner.users.insert(user.id, user.clone());
    user
}

fn seed_doctor(inner: &mut StoreInner, id: u64, username: &str, department: Department) {
    let doctor = Doctor {
        id: DoctorId::new(id),
        username: username.to_owned(),
        department,
    };
    inner.doctors.insert(doctor.id, doctor);
}

fn seed_booking(
    inner: &mut StoreInner,
    patient: &str,
    age: u8,
    gender: Gender,
    department: Department,
    doctor_id: Option<DoctorId>,
    status: BookingStatus,
) {
    inner.next_booking_id += 1;
    let id = BookingId::new(inner.next_booking_id);
    let booking = Booking {
        id,
        patient_name: PatientName::new(patient).expect("seed patient name is valid"),
        age: Age::new(age).expect("seed age is valid"),
        gender,
        department,
        doctor_id,
        status,
        created_at: Utc::now(),
    };
    inner.bookings.insert(id, booking);
}

fn seed_order(inner: &mut StoreInner, patient: &str, amount: f64, status: PaymentStatus) {
    inner.next_order_id += 1;
    let id = OrderId::new(inner.next_order_id);
    let order = PaymentOrder {
        id,
        patient_name: PatientName::new(patient).expect("seed patient name is valid"),
        total_amount: Amount::new(amount).expect("seed amount is valid"),
        status,
        created_at: Utc::now(),
    };
    inner.orders.insert(id, order);
}

#[async_trait]
impl BookingRepository for MemoryStore {
    async fn insert(&self, draft: NewBooking) -> Result<Booking, BookingPersistenceError> {
        let mut inner = self.guard()?;
        inner.next_booking_id += 1;
        let booking = Booking {
            id: BookingId::new(inner.next_booking_id),
            patient_name: draft.patient_name,
            age: draft.age,
            gender: draft.gender,
            department: draft.department,
            doctor_id: draft.doctor_id,
            status: BookingStatus::Pending,
            created_at: Utc::now(),
        };
        inner.bookings.insert(booking.id, booking.clone());
        Ok(booking)
    }

    async fn find_by_id(&self, id: BookingId) -> Result<Option<Booking>, BookingPersistenceError> {
        let inner = self.guard()?;
        Ok(inner.bookings.get(&id).cloned())
    }

    async fn list(&self, scope: &PatientScope) -> Result<Vec<Booking>, BookingPersistenceError> {
        let inner = self.guard()?;
        Ok(inner
            .bookings
            .values()
            .filter(|booking| scope.permits(booking.patient_name.as_str()))
            .cloned()
            .collect())
    }

    async fn complete(
        &self,
        id: BookingId,
    ) -> Result<Option<StatusCas>, BookingPersistenceError> {
        let mut inner = self.guard()?;
        match inner.bookings.get_mut(&id) {
            None => Ok(None),
            Some(booking) if booking.status == BookingStatus::Completed => {
                Ok(Some(StatusCas::AlreadyDone))
            }
            Some(booking) => {
                booking.status = BookingStatus::Completed;
                Ok(Some(StatusCas::Applied))
            }
        }
    }
}

#[async_trait]
impl PaymentRepository for MemoryStore {
    async fn insert(
        &self,
        draft: NewPaymentOrder,
    ) -> Result<PaymentOrder, PaymentPersistenceError> {
        let mut inner = self.guard()?;
        inner.next_order_id += 1;
        let order = PaymentOrder {
            id: OrderId::new(inner.next_order_id),
            patient_name: draft.patient_name,
            total_amount: draft.total_amount,
            status: PaymentStatus::Unpaid,
            created_at: Utc::now(),
        };
        inner.orders.insert(order.id, order.clone());
        Ok(order)
    }

    async fn find_by_id(
        &self,
        id: OrderId,
    ) -> Result<Option<PaymentOrder>, PaymentPersistenceError> {
        let inner = self.guard()?;
        Ok(inner.orders.get(&id).cloned())
    }

    async fn list(
        &self,
        status: PaymentStatus,
        scope: &PatientScope,
    ) -> Result<Vec<PaymentOrder>, PaymentPersistenceError> {
        let inner = self.guard()?;
        Ok(inner
            .orders
            .values()
            .filter(|order| order.status == status)
            .filter(|order| scope.permits(order.patient_name.as_str()))
            .cloned()
            .collect())
    }

    async fn settle(&self, id: OrderId) -> Result<Option<StatusCas>, PaymentPersistenceError> {
        let mut inner = self.guard()?;
        match inner.orders.get_mut(&id) {
            None => Ok(None),
            Some(order) if order.status == PaymentStatus::Paid => Ok(Some(StatusCas::AlreadyDone)),
            Some(order) => {
                order.status = PaymentStatus::Paid;
                Ok(Some(StatusCas::Applied))
            }
        }
    }
}

#[async_trait]
impl DoctorDirectory for MemoryStore {
    async fn list(
        &self,
        department: Option<Department>,
    ) -> Result<Vec<Doctor>, DirectoryPersistenceError> {
        let inner = self.guard()?;
        Ok(inner
            .doctors
            .values()
            .filter(|doctor| department.map_or(true, |wanted| doctor.department == wanted))
            .cloned()
            .collect())
    }

    async fn find(&self, id: DoctorId) -> Result<Option<Doctor>, DirectoryPersistenceError> {
        let inner = self.guard()?;
        Ok(inner.doctors.get(&id).cloned())
    }
}

#[async_trait]
impl UserDirectory for MemoryStore {
    async fn list(&self) -> Result<Vec<User>, UserDirectoryError> {
        let inner = self.guard()?;
        Ok(inner.users.values().cloned().collect())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserDirectoryError> {
        let inner = self.guard()?;
        Ok(inner
            .users
            .values()
            .find(|user| user.username == username)
            .cloned())
    }

    async fn delete(&self, id: UserId) -> Result<Option<()>, UserDirectoryError> {
        let mut inner = self.guard()?;
        Ok(inner.users.remove(&id).map(|_| ()))
    }
}

#[async_trait]
impl MedicineInventory for MemoryStore {
    async fn list(&self) -> Result<Vec<Medicine>, InventoryPersistenceError> {
        let inner = self.guard()?;
        Ok(inner.medicines.values().cloned().collect())
    }
}

#[async_trait]
impl StatsSource for MemoryStore {
    async fn totals(&self) -> Result<StatsTotals, StatsSourceError> {
        // One guard acquisition covers all four figures.
        let inner = self.guard()?;
        let income = inner
            .orders
            .values()
            .filter(|order| order.status == PaymentStatus::Paid)
            .map(|order| order.total_amount.value())
            .sum();
        Ok(StatsTotals {
            income,
            patient_count: inner.bookings.len() as u64,
            doctor_count: inner.doctors.len() as u64,
            medicine_kind_count: inner.medicines.len() as u64,
        })
    }
}
