//! Request context carrying the verified acting identity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use memberhub_auth::policy::Identity;
use memberhub_entity::member::MemberRole;

/// Context for the current authenticated request.
///
/// Built by the API layer from verified capability claims and passed into
/// service methods so that every operation knows *who* is acting. This is
/// the `currentIdentity()` boundary the data layer consults before any
/// row-level rule is evaluated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated member's ID.
    pub member_id: i64,
    /// The role fixed into the capability at issuance.
    pub role: MemberRole,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(member_id: i64, role: MemberRole) -> Self {
        Self {
            member_id,
            role,
            request_time: Utc::now(),
        }
    }

    /// The policy-engine identity for this request.
    pub fn identity(&self) -> Identity {
        Identity::Authenticated {
            member_id: self.member_id,
            role: self.role,
        }
    }

    /// Returns whether the current member is an admin.
    pub fn is_admin(&self) -> bool {
        matches!(self.role, MemberRole::Admin)
    }
}
