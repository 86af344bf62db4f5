//! Registration flow — the only path that creates member rows.

use std::sync::Arc;

use tracing::info;

use memberhub_auth::jwt::JwtEncoder;
use memberhub_auth::password::{PasswordHasher, PasswordPolicy};
use memberhub_core::error::AppError;
use memberhub_database::repositories::member::MemberRepository;
use memberhub_entity::member::{CreateMember, MemberRole};

use super::AuthSuccess;

/// Data submitted by a registering member.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct RegisterMember {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Login handle.
    pub email: String,
    /// Plaintext password. Hashed immediately; never stored or logged.
    pub password: String,
}

/// Handles member registration.
#[derive(Debug, Clone)]
pub struct RegistrationService {
    /// Member repository.
    member_repo: Arc<MemberRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Password policy.
    policy: Arc<PasswordPolicy>,
    /// Capability encoder.
    jwt_encoder: Arc<JwtEncoder>,
}

impl RegistrationService {
    /// Creates a new registration service.
    pub fn new(
        member_repo: Arc<MemberRepository>,
        hasher: Arc<PasswordHasher>,
        policy: Arc<PasswordPolicy>,
        jwt_encoder: Arc<JwtEncoder>,
    ) -> Self {
        Self {
            member_repo,
            hasher,
            policy,
            jwt_encoder,
        }
    }

    /// Registers a new member and issues their first capability.
    ///
    /// Input problems fail before any storage access. The duplicate-email
    /// pre-check is a fast path only; the insert's unique constraint is
    /// the arbiter under concurrency, so a race between two identical
    /// registrations still admits exactly one.
    pub async fn register(&self, req: RegisterMember) -> Result<AuthSuccess, AppError> {
        self.validate_fields(&req)?;
        self.policy.validate(&req.password)?;

        if self
            .member_repo
            .find_by_email(&req.email)
            .await?
            .is_some()
        {
            return Err(AppError::conflict(format!(
                "Email '{}' is already registered",
                req.email
            )));
        }

        let password_hash = self.hasher.hash_password(&req.password)?;

        let member = self
            .member_repo
            .insert(&CreateMember {
                first_name: req.first_name,
                last_name: req.last_name,
                email: req.email,
                password_hash,
                // Registration never grants the elevated role.
                is_admin: false,
            })
            .await?;

        let capability = self.jwt_encoder.issue(member.id, MemberRole::Member)?;

        info!(member_id = member.id, "Member registered");

        Ok(AuthSuccess { capability, member })
    }

    /// Field validation. Empty or malformed fields are caller-input
    /// errors, distinct from the duplicate-email conflict.
    fn validate_fields(&self, req: &RegisterMember) -> Result<(), AppError> {
        if req.first_name.trim().is_empty() {
            return Err(AppError::validation("First name is required"));
        }
        if req.last_name.trim().is_empty() {
            return Err(AppError::validation("Last name is required"));
        }
        if req.email.trim().is_empty() {
            return Err(AppError::validation("Email is required"));
        }
        if !req.email.contains('@') || !req.email.contains('.') {
            return Err(AppError::validation("Invalid email format"));
        }
        Ok(())
    }
}
