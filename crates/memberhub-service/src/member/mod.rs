//! Member row access, gated by the row-level policy.

pub mod service;

pub use service::MemberService;
