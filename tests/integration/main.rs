//! Integration test harness.
//!
//! These tests exercise the full router against a real PostgreSQL
//! instance and are `#[ignore]`d by default. Point
//! `MEMBERHUB_TEST_DATABASE_URL` at a scratch database and run
//! `cargo test -- --ignored` to execute them.

mod auth_test;
mod helpers;
mod member_test;
