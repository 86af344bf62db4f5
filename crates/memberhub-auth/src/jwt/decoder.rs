//! Capability validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use tracing::debug;

use memberhub_core::config::auth::AuthConfig;
use memberhub_core::error::AppError;

use super::claims::Claims;

/// Validates capability tokens.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5; // 5 seconds leeway for clock skew
        validation.set_issuer(&[config.issuer.as_str()]);

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates a capability token.
    ///
    /// Checks signature integrity, expiration, and issuer. Every failure —
    /// bad signature, expired, malformed, wrong issuer — collapses into a
    /// single `Unauthorized` outcome so the caller learns nothing beyond
    /// "re-authenticate". No partially trusted claims ever escape.
    pub fn decode(&self, token: &str) -> Result<Claims, AppError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                debug!(reason = %e, "Capability rejected");
                AppError::unauthorized("Invalid or expired capability")
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::encoder::JwtEncoder;
    use chrono::Utc;
    use jsonwebtoken::{EncodingKey, Header, encode};
    use memberhub_core::error::ErrorKind;
    use memberhub_entity::member::MemberRole;
    use uuid::Uuid;

    fn config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "test-secret".to_string(),
            ..AuthConfig::default()
        }
    }

    #[test]
    fn test_round_trip() {
        let encoder = JwtEncoder::new(&config());
        let decoder = JwtDecoder::new(&config());

        let issued = encoder.issue(42, MemberRole::Admin).unwrap();
        let claims = decoder.decode(&issued.token).unwrap();

        assert_eq!(claims.member_id(), 42);
        assert_eq!(claims.role, MemberRole::Admin);
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_tampered_token_rejected() {
        let encoder = JwtEncoder::new(&config());
        let decoder = JwtDecoder::new(&config());

        let issued = encoder.issue(42, MemberRole::Member).unwrap();
        let mut bytes = issued.token.into_bytes();
        let last = *bytes.last().unwrap();
        *bytes.last_mut().unwrap() = if last == b'A' { b'B' } else { b'A' };
        let tampered = String::from_utf8(bytes).unwrap();

        let err = decoder.decode(&tampered).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthorized);
    }

    #[test]
    fn test_expired_token_rejected() {
        let decoder = JwtDecoder::new(&config());

        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: 42,
            role: MemberRole::Member,
            iss: config().issuer,
            iat: now - 3600,
            exp: now - 600,
            jti: Uuid::new_v4(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config().jwt_secret.as_bytes()),
        )
        .unwrap();

        let err = decoder.decode(&token).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthorized);
    }

    #[test]
    fn test_wrong_key_rejected_with_same_error() {
        let encoder = JwtEncoder::new(&AuthConfig {
            jwt_secret: "a-different-secret".to_string(),
            ..AuthConfig::default()
        });
        let decoder = JwtDecoder::new(&config());

        let issued = encoder.issue(1, MemberRole::Member).unwrap();
        let err = decoder.decode(&issued.token).unwrap_err();

        // Indistinguishable from the expired/tampered outcomes.
        assert_eq!(err.kind, ErrorKind::Unauthorized);
        assert_eq!(err.message, "Invalid or expired capability");
    }

    #[test]
    fn test_wrong_issuer_rejected() {
        let encoder = JwtEncoder::new(&AuthConfig {
            jwt_secret: "test-secret".to_string(),
            issuer: "someone-else".to_string(),
            ..AuthConfig::default()
        });
        let decoder = JwtDecoder::new(&config());

        let issued = encoder.issue(1, MemberRole::Member).unwrap();
        assert!(decoder.decode(&issued.token).is_err());
    }

    #[test]
    fn test_garbage_rejected() {
        let decoder = JwtDecoder::new(&config());
        assert!(decoder.decode("not-a-jwt").is_err());
    }
}
