//! Payment endpoints.
//!
//! ```text
//! GET  /api/v1/payments/unpaid
//! GET  /api/v1/payments/history
//! POST /api/v1/payments/{id}/settle
//! ```

use actix_web::{get, post, web, HttpResponse};

use super::guard;
use super::session::SessionContext;
use super::state::HttpState;
use super::ApiResult;
use crate::domain::rbac::ResourceAction;
use crate::domain::{Error, OrderId, PaymentOrder};

/// List unpaid orders visible to the session actor.
#[utoipa::path(
    get,
    path = "/api/v1/payments/unpaid",
    responses(
        (status = 200, description = "Unpaid orders visible to the actor", body = [PaymentOrder]),
        (status = 401, description = "Unauthenticated", body = Error),
        (status = 403, description = "Role not permitted", body = Error)
    ),
    tags = ["payments"],
    operation_id = "listUnpaidOrders"
)]
#[get("/payments/unpaid")]
pub async fn list_unpaid(
    session: SessionContext,
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<PaymentOrder>>> {
    let actor = guard::require(&session, ResourceAction::PaymentsList)?;
    Ok(web::Json(state.payments.list_unpaid(&actor).await?))
}

/// List settled orders visible to the session actor.
#[utoipa::path(
    get,
    path = "/api/v1/payments/history",
    responses(
        (status = 200, description = "Settled orders visible to the actor", body = [PaymentOrder]),
        (status = 401, description = "Unauthenticated", body = Error),
        (status = 403, description = "Role not permitted", body = Error)
    ),
    tags = ["payments"],
    operation_id = "listPaymentHistory"
)]
#[get("/payments/history")]
pub async fn list_history(
    session: SessionContext,
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<PaymentOrder>>> {
    let actor = guard::require(&session, ResourceAction::PaymentsHistory)?;
    Ok(web::Json(state.payments.list_history(&actor).await?))
}

/// Settle an unpaid order exactly once.
///
/// A repeat settlement returns `409` with code `already_settled`; the
/// caller should surface it as "no action needed", not retry.
#[utoipa::path(
    post,
    path = "/api/v1/payments/{id}/settle",
    params(("id" = u64, Path, description = "Payment order identifier")),
    responses(
        (status = 204, description = "Order settled"),
        (status = 401, description = "Unauthenticated", body = Error),
        (status = 403, description = "Role not permitted", body = Error),
        (status = 404, description = "No such order", body = Error),
        (status = 409, description = "Already settled or concurrent update", body = Error)
    ),
    tags = ["payments"],
    operation_id = "settleOrder"
)]
#[post("/payments/{id}/settle")]
pub async fn settle(
    session: SessionContext,
    state: web::Data<HttpState>,
    path: web::Path<u64>,
) -> ApiResult<HttpResponse> {
    let actor = guard::require(&session, ResourceAction::PaymentsSettle)?;
    state
        .payments
        .settle(&actor, OrderId::new(path.into_inner()))
        .await?;
    Ok(HttpResponse::NoContent().finish())
}
