//! Capability creation with configurable signing key and TTL.

use chrono::{DateTime, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;

use memberhub_core::config::auth::AuthConfig;
use memberhub_core::error::AppError;
use memberhub_entity::member::MemberRole;

use super::claims::Claims;

/// Creates signed capability tokens.
///
/// Holds the process-wide signing key: built once at startup from
/// configuration, read-only thereafter.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Issuer claim stamped into every capability.
    issuer: String,
    /// Capability TTL in minutes.
    ttl_minutes: i64,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("issuer", &self.issuer)
            .field("ttl_minutes", &self.ttl_minutes)
            .finish()
    }
}

/// Result of a successful capability issuance.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct IssuedCapability {
    /// The signed token.
    pub token: String,
    /// Expiration timestamp.
    pub expires_at: DateTime<Utc>,
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            issuer: config.issuer.clone(),
            ttl_minutes: config.token_ttl_minutes as i64,
        }
    }

    /// Issues a capability for the given subject and role.
    ///
    /// Sets `iat` to now and `exp` per the configured lifetime. The role is
    /// fixed into the claim set here and never re-derived downstream.
    pub fn issue(&self, member_id: i64, role: MemberRole) -> Result<IssuedCapability, AppError> {
        let now = Utc::now();
        let expires_at = now + chrono::Duration::minutes(self.ttl_minutes);

        let claims = Claims {
            sub: member_id,
            role,
            iss: self.issuer.clone(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
            jti: Uuid::new_v4(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode capability: {e}")))?;

        Ok(IssuedCapability { token, expires_at })
    }
}
