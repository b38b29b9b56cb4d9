//! Role registry: the closed role set, actor context, and visibility scopes.
//!
//! Roles are immutable once assigned; reassignment is an administrative
//! action handled by the identity collaborator, not this core. The registry
//! only ever reads user records (through [`crate::domain::ports::UserDirectory`]).

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Closed permission class assigned to every user.
///
/// The variant order of [`Role::ALL`] is the stable display order used by
/// administrative listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    GlobalAdmin,
    OrgAdmin,
    Doctor,
    Registration,
    Finance,
    Storekeeper,
    GeneralUser,
}

impl Role {
    /// Every role, in stable display order.
    pub const ALL: [Role; 7] = [
        Role::GlobalAdmin,
        Role::OrgAdmin,
        Role::Doctor,
        Role::Registration,
        Role::Finance,
        Role::Storekeeper,
        Role::GeneralUser,
    ];

    /// Wire identifier, identical to the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::GlobalAdmin => "global_admin",
            Role::OrgAdmin => "org_admin",
            Role::Doctor => "doctor",
            Role::Registration => "registration",
            Role::Finance => "finance",
            Role::Storekeeper => "storekeeper",
            Role::GeneralUser => "general_user",
        }
    }

    /// Display label shown in administrative listings.
    pub fn label(self) -> &'static str {
        match self {
            Role::GlobalAdmin => "超级管理员",
            Role::OrgAdmin => "院区负责人",
            Role::Doctor => "医生",
            Role::Registration => "挂号员",
            Role::Finance => "财务",
            Role::Storekeeper => "库管员",
            Role::GeneralUser => "患者/普通用户",
        }
    }

    /// True for every role except the self-service patient role.
    pub fn is_staff(self) -> bool {
        !matches!(self, Role::GeneralUser)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stable user identifier issued by the identity collaborator.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    /// Wrap an identifier supplied by the identity collaborator.
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    /// Generate a fresh random identifier (seeding and tests).
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The authenticated identity issuing a request into the core.
///
/// Always passed explicitly into every operation; the core never reads the
/// acting identity from ambient or global storage, which keeps the workflow
/// services testable without a simulated session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Actor {
    pub id: UserId,
    pub username: String,
    pub role: Role,
}

impl Actor {
    /// Build an actor from an already-authenticated identity.
    pub fn new(id: UserId, username: impl Into<String>, role: Role) -> Self {
        Self {
            id,
            username: username.into(),
            role,
        }
    }

    /// The record-visibility scope this actor is entitled to.
    ///
    /// Staff roles see every record; a general user only sees records filed
    /// under their own username. The scope is applied at the query boundary
    /// so other patients' records are never materialized into a general
    /// user's result set.
    pub fn scope(&self) -> PatientScope {
        if self.role.is_staff() {
            PatientScope::All
        } else {
            PatientScope::Named(self.username.clone())
        }
    }
}

/// Visibility filter applied when listing bookings or payment orders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatientScope {
    /// Full visibility (staff roles).
    All,
    /// Only records whose patient name matches exactly.
    Named(String),
}

impl PatientScope {
    /// Whether a record filed under `patient_name` is visible in this scope.
    pub fn permits(&self, patient_name: &str) -> bool {
        match self {
            PatientScope::All => true,
            PatientScope::Named(own) => own == patient_name,
        }
    }
}

/// User record as read from the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub role: Role,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTime<Utc>,
}
