//! Role-scoped operational statistics.
//!
//! [`StatsTotals`] is the raw consistent snapshot produced by the
//! [`crate::domain::ports::StatsSource`] port; [`StatsSnapshot`] is the
//! role-masked projection handed to callers. Masking happens before the
//! payload leaves the domain, so a role never materializes figures outside
//! its permission scope.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::role::Role;

/// Unmasked aggregate figures read in a single consistent snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatsTotals {
    /// Sum of all settled payment orders.
    pub income: f64,
    /// Bookings on file (visits, not distinct persons).
    pub patient_count: u64,
    /// Doctors currently on the roster.
    pub doctor_count: u64,
    /// Distinct medicine kinds in stock.
    pub medicine_kind_count: u64,
}

/// Role-filtered statistics projection.
///
/// Absent fields are omitted from the wire payload entirely rather than
/// zeroed, so a caller cannot tell a masked figure from a small one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatsSnapshot {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub income: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doctor_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medicine_kind_count: Option<u64>,
}

impl StatsSnapshot {
    /// Project the raw totals down to what `role` may view.
    pub fn for_role(role: Role, totals: StatsTotals) -> Self {
        let all = Self {
            income: Some(totals.income),
            patient_count: Some(totals.patient_count),
            doctor_count: Some(totals.doctor_count),
            medicine_kind_count: Some(totals.medicine_kind_count),
        };
        let empty = Self {
            income: None,
            patient_count: None,
            doctor_count: None,
            medicine_kind_count: None,
        };
        match role {
            Role::GlobalAdmin | Role::OrgAdmin => all,
            Role::Finance => Self {
                income: Some(totals.income),
                ..empty
            },
            Role::Doctor => Self {
                patient_count: Some(totals.patient_count),
                medicine_kind_count: Some(totals.medicine_kind_count),
                ..empty
            },
            Role::Storekeeper => Self {
                medicine_kind_count: Some(totals.medicine_kind_count),
                ..empty
            },
            Role::Registration => Self {
                patient_count: Some(totals.patient_count),
                ..empty
            },
            Role::GeneralUser => empty,
        }
    }
}
