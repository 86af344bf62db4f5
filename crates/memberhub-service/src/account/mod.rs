//! Account flows — registration and authentication.

pub mod authentication;
pub mod registration;

use memberhub_auth::jwt::IssuedCapability;
use memberhub_entity::member::Member;

pub use authentication::AuthenticationService;
pub use registration::{RegisterMember, RegistrationService};

/// Result of a successful registration or login.
#[derive(Debug, Clone, serde::Serialize)]
pub struct AuthSuccess {
    /// The issued capability.
    pub capability: IssuedCapability,
    /// The authenticated member.
    pub member: Member,
}
