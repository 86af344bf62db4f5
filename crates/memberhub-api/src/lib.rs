//! # memberhub-api
//!
//! HTTP API layer for MemberHub built on Axum.
//!
//! Provides the REST endpoints, middleware (CORS, logging), extractors,
//! DTOs, and error mapping. The handlers are a thin transport shell; all
//! semantics live in `memberhub-service` and below.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
