//! # memberhub-service
//!
//! Business logic service layer for MemberHub. Each service orchestrates
//! repositories and the auth primitives to implement application-level
//! use cases.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references.

pub mod account;
pub mod context;
pub mod member;

pub use account::{AuthSuccess, AuthenticationService, RegistrationService};
pub use context::RequestContext;
pub use member::MemberService;
