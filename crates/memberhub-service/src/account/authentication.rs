//! Authentication flow — verifies credentials and issues a capability.

use std::sync::Arc;

use tracing::info;

use memberhub_auth::jwt::JwtEncoder;
use memberhub_auth::password::PasswordHasher;
use memberhub_core::error::AppError;
use memberhub_database::repositories::member::MemberRepository;

use super::AuthSuccess;

/// Handles member login.
#[derive(Debug, Clone)]
pub struct AuthenticationService {
    /// Member repository.
    member_repo: Arc<MemberRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Capability encoder.
    jwt_encoder: Arc<JwtEncoder>,
}

impl AuthenticationService {
    /// Creates a new authentication service.
    pub fn new(
        member_repo: Arc<MemberRepository>,
        hasher: Arc<PasswordHasher>,
        jwt_encoder: Arc<JwtEncoder>,
    ) -> Self {
        Self {
            member_repo,
            hasher,
            jwt_encoder,
        }
    }

    /// Verifies a claimed identity and issues a capability on success.
    ///
    /// An unknown email and a wrong password return the identical error;
    /// the caller cannot enumerate accounts through the login endpoint.
    /// The role is resolved from `is_admin` here, at issuance, and rides
    /// in the capability until it expires — a flag change takes effect on
    /// the next login.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthSuccess, AppError> {
        let member = self
            .member_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::unauthorized("Invalid email or password"))?;

        let password_valid = self
            .hasher
            .verify_password(password, &member.password_hash)?;

        if !password_valid {
            return Err(AppError::unauthorized("Invalid email or password"));
        }

        let capability = self.jwt_encoder.issue(member.id, member.role())?;

        info!(member_id = member.id, role = %member.role(), "Login successful");

        Ok(AuthSuccess { capability, member })
    }
}
