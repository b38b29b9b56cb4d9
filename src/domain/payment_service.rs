//! Payment workflow service.
//!
//! Owns the Unpaid → Paid lifecycle. Settlement is conditionally idempotent:
//! the transition applies exactly once, and a repeat attempt is rejected
//! with a distinct `AlreadySettled` outcome so a cashier can tell "nothing
//! to do" apart from a failed charge. The amount is opaque here, fixed at
//! order generation and never recomputed.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::error::Error;
use crate::domain::payment::{OrderId, PaymentOrder, PaymentStatus};
use crate::domain::ports::{
    PaymentPersistenceError, PaymentRepository, PaymentWorkflow, StatusCas,
};
use crate::domain::rbac::{evaluate, OwnershipContext, ResourceAction};
use crate::domain::role::{Actor, Role};

fn map_repository_error(error: PaymentPersistenceError) -> Error {
    match error {
        PaymentPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("payment store unavailable: {message}"))
        }
        PaymentPersistenceError::Query { message } => {
            Error::internal(format!("payment store error: {message}"))
        }
        PaymentPersistenceError::Conflict => {
            Error::conflict("payment order changed concurrently; retry the request")
        }
    }
}

/// Payment workflow over the order repository.
pub struct PaymentService<R> {
    orders: Arc<R>,
}

impl<R> PaymentService<R> {
    /// Create the service from its driven port.
    pub fn new(orders: Arc<R>) -> Self {
        Self { orders }
    }
}

impl<R> PaymentService<R>
where
    R: PaymentRepository,
{
    async fn list(&self, actor: &Actor, action: ResourceAction, status: PaymentStatus)
        -> Result<Vec<PaymentOrder>, Error> {
        if !evaluate(actor.role, action, None).is_allowed() {
            return Err(Error::forbidden("access denied"));
        }
        self.orders
            .list(status, &actor.scope())
            .await
            .map_err(map_repository_error)
    }
}

#[async_trait]
impl<R> PaymentWorkflow for PaymentService<R>
where
    R: PaymentRepository,
{
    async fn list_unpaid(&self, actor: &Actor) -> Result<Vec<PaymentOrder>, Error> {
        self.list(actor, ResourceAction::PaymentsList, PaymentStatus::Unpaid)
            .await
    }

    async fn list_history(&self, actor: &Actor) -> Result<Vec<PaymentOrder>, Error> {
        self.list(actor, ResourceAction::PaymentsHistory, PaymentStatus::Paid)
            .await
    }

    async fn settle(&self, actor: &Actor, id: OrderId) -> Result<(), Error> {
        // Coarse role check before touching the store, so a role outside the
        // rule cannot probe order existence through error differences.
        let own = OwnershipContext {
            actor_username: &actor.username,
            record_patient: &actor.username,
        };
        if !evaluate(actor.role, ResourceAction::PaymentsSettle, Some(&own)).is_allowed() {
            return Err(Error::forbidden("access denied"));
        }

        let order = self
            .orders
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found(format!("payment order {id} not found")))?;

        let ownership = OwnershipContext {
            actor_username: &actor.username,
            record_patient: order.patient_name.as_str(),
        };
        if !evaluate(actor.role, ResourceAction::PaymentsSettle, Some(&ownership)).is_allowed() {
            // Another patient's order is reported as missing rather than
            // denied, so its existence is not confirmed to the viewer.
            return Err(if actor.role == Role::GeneralUser {
                Error::not_found(format!("payment order {id} not found"))
            } else {
                Error::forbidden("access denied")
            });
        }

        // One retry on an optimistic-adapter conflict, then surface it. The
        // compare-and-set makes a blind retry after an ambiguous failure
        // safe: a transition that already happened lands on AlreadyDone.
        let mut outcome = self.orders.settle(id).await;
        if matches!(outcome, Err(PaymentPersistenceError::Conflict)) {
            outcome = self.orders.settle(id).await;
        }

        match outcome.map_err(map_repository_error)? {
            None => Err(Error::not_found(format!("payment order {id} not found"))),
            Some(StatusCas::Applied) => {
                info!(
                    order_id = id.value(),
                    amount = order.total_amount.value(),
                    actor_role = %actor.role,
                    "payment order settled",
                );
                Ok(())
            }
            Some(StatusCas::AlreadyDone) => Err(Error::already_settled(format!(
                "payment order {id} is already settled",
            ))),
        }
    }
}

#[cfg(test)]
#[path = "payment_service_tests.rs"]
mod tests;
