//! Row-level access rules: role × operation × ownership.

use serde::{Deserialize, Serialize};

use memberhub_entity::member::MemberRole;

/// The acting identity, derived from a verified capability (or its absence).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Identity {
    /// No valid capability was presented.
    Anonymous,
    /// A verified capability for `member_id` carrying `role`.
    Authenticated {
        /// Subject member id from the capability.
        member_id: i64,
        /// Role fixed at issuance.
        role: MemberRole,
    },
}

impl Identity {
    /// The subject id, if authenticated.
    pub fn member_id(&self) -> Option<i64> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated { member_id, .. } => Some(*member_id),
        }
    }

    /// Whether this identity carries the admin role.
    pub fn is_admin(&self) -> bool {
        matches!(
            self,
            Self::Authenticated {
                role: MemberRole::Admin,
                ..
            }
        )
    }
}

/// Operations the policy gates. Delete is not exposed to any role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowOperation {
    /// Read a member row.
    Read,
    /// Update a member row's profile fields.
    Update,
}

/// The predicate form of a policy decision, applied by the data layer.
///
/// Using a filter instead of a yes/no check keeps out-of-scope rows
/// indistinguishable from absent ones: queries return empty/not-found
/// rather than "denied", so existence never leaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowFilter {
    /// Every row is visible.
    All,
    /// Only the row owned by this member id is visible.
    Own(i64),
    /// No row is visible.
    Nothing,
}

/// Evaluates row-level access for member rows.
///
/// Rules:
/// - `admin` may read and update any row.
/// - `member` may read and update only the row whose id equals the
///   capability's subject.
/// - `anonymous` has no row access (registration and login are the only
///   anonymous-reachable operations, and they live outside this table).
#[derive(Debug, Clone, Default)]
pub struct PolicyEngine;

impl PolicyEngine {
    /// Creates a new policy engine.
    pub fn new() -> Self {
        Self
    }

    /// Returns the filter predicate for the given identity and operation.
    ///
    /// Read and update share one rule table; the operation parameter exists
    /// so a future asymmetric rule has a seam to land in.
    pub fn row_filter(&self, identity: &Identity, _operation: RowOperation) -> RowFilter {
        match identity {
            Identity::Anonymous => RowFilter::Nothing,
            Identity::Authenticated { role, member_id } => match role {
                MemberRole::Admin => RowFilter::All,
                MemberRole::Member => RowFilter::Own(*member_id),
            },
        }
    }

    /// Direct per-row check: may `identity` perform `operation` on the row
    /// owned by `row_owner_id`?
    pub fn can_access(
        &self,
        identity: &Identity,
        operation: RowOperation,
        row_owner_id: i64,
    ) -> bool {
        match self.row_filter(identity, operation) {
            RowFilter::All => true,
            RowFilter::Own(own_id) => own_id == row_owner_id,
            RowFilter::Nothing => false,
        }
    }
}
