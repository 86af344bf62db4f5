//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use memberhub_auth::jwt::{JwtDecoder, JwtEncoder};
use memberhub_auth::password::{PasswordHasher, PasswordPolicy};
use memberhub_auth::policy::PolicyEngine;
use memberhub_core::config::AppConfig;
use memberhub_database::repositories::member::MemberRepository;
use memberhub_service::account::{AuthenticationService, RegistrationService};
use memberhub_service::member::MemberService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool
    pub db_pool: PgPool,
    /// Capability encoder
    pub jwt_encoder: Arc<JwtEncoder>,
    /// Capability decoder
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Member repository
    pub member_repo: Arc<MemberRepository>,
    /// Registration flow
    pub registration_service: Arc<RegistrationService>,
    /// Authentication flow
    pub authentication_service: Arc<AuthenticationService>,
    /// Member row access
    pub member_service: Arc<MemberService>,
}

impl AppState {
    /// Wires up the full dependency graph from configuration and a pool.
    pub fn new(config: AppConfig, db_pool: PgPool) -> Self {
        let password_hasher = Arc::new(PasswordHasher::new());
        let password_policy = Arc::new(PasswordPolicy::new(&config.auth));
        let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));
        let policy_engine = Arc::new(PolicyEngine::new());

        let member_repo = Arc::new(MemberRepository::new(db_pool.clone()));

        let registration_service = Arc::new(RegistrationService::new(
            Arc::clone(&member_repo),
            Arc::clone(&password_hasher),
            Arc::clone(&password_policy),
            Arc::clone(&jwt_encoder),
        ));
        let authentication_service = Arc::new(AuthenticationService::new(
            Arc::clone(&member_repo),
            Arc::clone(&password_hasher),
            Arc::clone(&jwt_encoder),
        ));
        let member_service = Arc::new(MemberService::new(
            Arc::clone(&member_repo),
            Arc::clone(&policy_engine),
        ));

        Self {
            config: Arc::new(config),
            db_pool,
            jwt_encoder,
            jwt_decoder,
            member_repo,
            registration_service,
            authentication_service,
            member_service,
        }
    }
}
