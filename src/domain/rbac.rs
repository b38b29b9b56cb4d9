//! Permission evaluator and route authorization gate.
//!
//! One declarative rule table maps each [`ResourceAction`] to the roles that
//! may perform it. Both the per-operation [`evaluate`] check and the
//! route-level [`authorize`] gate read this table, so the two can never
//! drift apart. Evaluation is deterministic and side-effect free: identical
//! inputs always yield the identical decision.
//!
//! The default is fail-closed: a role absent from an action's rule is
//! denied, except for `global_admin`, which is an unconditional superuser.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::role::{Actor, Role};

/// Protected resource/action pair, named `resource:action` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ResourceAction {
    BookingsList,
    BookingsCreate,
    BookingsAdvance,
    DoctorsList,
    PaymentsList,
    PaymentsHistory,
    PaymentsSettle,
    StatsView,
    MedicinesList,
    UsersList,
    UsersDelete,
}

impl ResourceAction {
    /// Every protected action, used to exercise the full rule matrix.
    pub const ALL: [ResourceAction; 11] = [
        ResourceAction::BookingsList,
        ResourceAction::BookingsCreate,
        ResourceAction::BookingsAdvance,
        ResourceAction::DoctorsList,
        ResourceAction::PaymentsList,
        ResourceAction::PaymentsHistory,
        ResourceAction::PaymentsSettle,
        ResourceAction::StatsView,
        ResourceAction::MedicinesList,
        ResourceAction::UsersList,
        ResourceAction::UsersDelete,
    ];

    /// Wire identifier in `resource:action` form.
    pub fn as_str(self) -> &'static str {
        match self {
            ResourceAction::BookingsList => "bookings:list",
            ResourceAction::BookingsCreate => "bookings:create",
            ResourceAction::BookingsAdvance => "bookings:advance",
            ResourceAction::DoctorsList => "doctors:list",
            ResourceAction::PaymentsList => "payments:list",
            ResourceAction::PaymentsHistory => "payments:history",
            ResourceAction::PaymentsSettle => "payments:settle",
            ResourceAction::StatsView => "stats:view",
            ResourceAction::MedicinesList => "medicines:list",
            ResourceAction::UsersList => "users:list",
            ResourceAction::UsersDelete => "users:delete",
        }
    }
}

impl std::fmt::Display for ResourceAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a permission check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny,
}

impl Decision {
    /// True when the decision permits the action.
    pub fn is_allowed(self) -> bool {
        matches!(self, Decision::Allow)
    }
}

/// Identity pairing for self-scoped mutations.
///
/// Carries the actor's own username and the patient the target record is
/// filed under. Only consulted for actions listed in the self-scoped rule
/// set; other checks ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OwnershipContext<'a> {
    pub actor_username: &'a str,
    pub record_patient: &'a str,
}

impl OwnershipContext<'_> {
    fn matches(&self) -> bool {
        self.actor_username == self.record_patient
    }
}

/// The declarative rule table: roles allowed per action.
///
/// `global_admin` is intentionally absent: it is granted by [`evaluate`]
/// unconditionally rather than repeated on every row. This is the single
/// source of truth consulted by the route gate, the workflow services, and
/// any menu-rendering front-end.
pub fn allowed_roles(action: ResourceAction) -> &'static [Role] {
    match action {
        ResourceAction::BookingsList | ResourceAction::BookingsCreate => {
            &[Role::Registration, Role::OrgAdmin, Role::GeneralUser]
        }
        ResourceAction::BookingsAdvance => &[Role::Doctor],
        ResourceAction::DoctorsList => &[
            Role::Registration,
            Role::OrgAdmin,
            Role::Doctor,
            Role::GeneralUser,
        ],
        ResourceAction::PaymentsList | ResourceAction::PaymentsHistory => &[
            Role::Finance,
            Role::Registration,
            Role::OrgAdmin,
            Role::GeneralUser,
        ],
        ResourceAction::PaymentsSettle => &[Role::Finance, Role::OrgAdmin, Role::GeneralUser],
        ResourceAction::StatsView => &[
            Role::OrgAdmin,
            Role::Doctor,
            Role::Registration,
            Role::Finance,
            Role::Storekeeper,
        ],
        ResourceAction::MedicinesList => &[Role::Storekeeper, Role::OrgAdmin],
        ResourceAction::UsersList | ResourceAction::UsersDelete => &[Role::OrgAdmin],
    }
}

/// Actions where a general user may only touch records filed under their
/// own name. Listing actions are scoped at the query boundary instead (see
/// [`Actor::scope`]), so they are not in this set.
fn requires_ownership(role: Role, action: ResourceAction) -> bool {
    role == Role::GeneralUser && matches!(action, ResourceAction::PaymentsSettle)
}

/// Evaluate a permission rule for a role.
///
/// Never raises; callers treat `Deny` uniformly as an access-denied outcome
/// distinct from not-found, so record existence is not leaked.
pub fn evaluate(
    role: Role,
    action: ResourceAction,
    ownership: Option<&OwnershipContext<'_>>,
) -> Decision {
    if role == Role::GlobalAdmin {
        return Decision::Allow;
    }
    if !allowed_roles(action).contains(&role) {
        return Decision::Deny;
    }
    if requires_ownership(role, action) {
        // Fail closed when the caller could not supply an ownership pairing.
        return match ownership {
            Some(ownership) if ownership.matches() => Decision::Allow,
            _ => Decision::Deny,
        };
    }
    Decision::Allow
}

/// Where a denied request is redirected instead of receiving a raw error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectTarget {
    /// Anonymous entry point for unauthenticated callers.
    Login,
    /// Neutral landing surface for authenticated-but-unauthorized callers,
    /// so error detail cannot be used to enumerate role assignments.
    Landing,
}

impl RedirectTarget {
    /// Path understood by the presentation collaborator.
    pub fn as_path(self) -> &'static str {
        match self {
            RedirectTarget::Login => "/login",
            RedirectTarget::Landing => "/dashboard",
        }
    }
}

/// Gate decision for a protected route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Allowed,
    Denied(RedirectTarget),
}

/// Generic guard usable ahead of any protected operation.
///
/// The caller declares the allowed-role set; the gate itself knows nothing
/// about the business meaning of the resource.
pub fn authorize_roles(actor: Option<&Actor>, allowed: &[Role]) -> GateDecision {
    let Some(actor) = actor else {
        return GateDecision::Denied(RedirectTarget::Login);
    };
    if actor.role == Role::GlobalAdmin || allowed.contains(&actor.role) {
        GateDecision::Allowed
    } else {
        GateDecision::Denied(RedirectTarget::Landing)
    }
}

/// Route gate bound to the shared rule table.
///
/// Equivalent to `authorize_roles(actor, allowed_roles(action))`; routes use
/// this form so their allowed-role sets cannot drift from the evaluator.
pub fn authorize(actor: Option<&Actor>, action: ResourceAction) -> GateDecision {
    authorize_roles(actor, allowed_roles(action))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::role::UserId;
    use rstest::rstest;

    fn actor(role: Role) -> Actor {
        Actor::new(UserId::random(), "test-user", role)
    }

    #[rstest]
    fn global_admin_is_allowed_everything() {
        for action in ResourceAction::ALL {
            assert_eq!(
                evaluate(Role::GlobalAdmin, action, None),
                Decision::Allow,
                "global_admin denied {action}",
            );
        }
    }

    #[rstest]
    #[case(Role::GeneralUser, ResourceAction::UsersList)]
    #[case(Role::GeneralUser, ResourceAction::BookingsAdvance)]
    #[case(Role::Registration, ResourceAction::BookingsAdvance)]
    #[case(Role::Finance, ResourceAction::MedicinesList)]
    #[case(Role::Storekeeper, ResourceAction::PaymentsSettle)]
    #[case(Role::Doctor, ResourceAction::UsersDelete)]
    fn unlisted_roles_are_denied(#[case] role: Role, #[case] action: ResourceAction) {
        assert_eq!(evaluate(role, action, None), Decision::Deny);
    }

    #[rstest]
    #[case(Role::Registration, ResourceAction::BookingsCreate)]
    #[case(Role::Doctor, ResourceAction::BookingsAdvance)]
    #[case(Role::Finance, ResourceAction::PaymentsSettle)]
    #[case(Role::Storekeeper, ResourceAction::MedicinesList)]
    #[case(Role::OrgAdmin, ResourceAction::UsersDelete)]
    fn listed_roles_are_allowed(#[case] role: Role, #[case] action: ResourceAction) {
        assert_eq!(evaluate(role, action, None), Decision::Allow);
    }

    #[rstest]
    fn general_user_settle_requires_matching_ownership() {
        let own = OwnershipContext {
            actor_username: "Bob",
            record_patient: "Bob",
        };
        let other = OwnershipContext {
            actor_username: "Bob",
            record_patient: "Alice",
        };
        let action = ResourceAction::PaymentsSettle;
        assert_eq!(
            evaluate(Role::GeneralUser, action, Some(&own)),
            Decision::Allow
        );
        assert_eq!(
            evaluate(Role::GeneralUser, action, Some(&other)),
            Decision::Deny
        );
        // Missing context fails closed.
        assert_eq!(evaluate(Role::GeneralUser, action, None), Decision::Deny);
    }

    #[rstest]
    fn ownership_is_ignored_for_staff_settle() {
        let other = OwnershipContext {
            actor_username: "cashier",
            record_patient: "Alice",
        };
        assert_eq!(
            evaluate(Role::Finance, ResourceAction::PaymentsSettle, Some(&other)),
            Decision::Allow
        );
    }

    #[rstest]
    fn anonymous_callers_redirect_to_login() {
        for action in ResourceAction::ALL {
            assert_eq!(
                authorize(None, action),
                GateDecision::Denied(RedirectTarget::Login)
            );
        }
    }

    #[rstest]
    fn unauthorized_roles_redirect_to_landing() {
        let patient = actor(Role::GeneralUser);
        assert_eq!(
            authorize(Some(&patient), ResourceAction::UsersList),
            GateDecision::Denied(RedirectTarget::Landing)
        );
    }

    /// The gate and the evaluator must agree for every (role, action) pair.
    #[rstest]
    fn gate_matches_evaluator_across_full_matrix() {
        for role in Role::ALL {
            for action in ResourceAction::ALL {
                let caller = actor(role);
                let gate_allows = authorize(Some(&caller), action) == GateDecision::Allowed;
                // The gate runs before any record is loaded, so compare
                // against the evaluator's ownership-free decision with a
                // matching pairing for self-scoped actions.
                let ownership = OwnershipContext {
                    actor_username: &caller.username,
                    record_patient: &caller.username,
                };
                let evaluator_allows = evaluate(role, action, Some(&ownership)).is_allowed();
                assert_eq!(
                    gate_allows, evaluator_allows,
                    "gate and evaluator diverge for {role} on {action}",
                );
            }
        }
    }

    #[rstest]
    fn caller_supplied_role_sets_behave_like_the_table() {
        let reception = actor(Role::Registration);
        let decision = authorize_roles(Some(&reception), allowed_roles(ResourceAction::UsersList));
        assert_eq!(decision, GateDecision::Denied(RedirectTarget::Landing));
    }
}
