//! Capability tokens — signed, time-bound claim sets.
//!
//! A capability asserts a subject member id and a role. It is minted by
//! [`JwtEncoder`] at registration/login and checked by [`JwtDecoder`] on
//! every subsequent request. Nothing is persisted; the token is
//! self-contained and there is no revocation list — rotating the signing
//! key invalidates everything outstanding.

pub mod claims;
pub mod decoder;
pub mod encoder;

pub use claims::Claims;
pub use decoder::JwtDecoder;
pub use encoder::{IssuedCapability, JwtEncoder};
