//! Member entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::role::MemberRole;

/// A registered member of the organization.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Member {
    /// Unique member identifier. Immutable after creation; the only value
    /// ever embedded in a capability as the subject.
    pub id: i64,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Login handle. Unique across all members, case-sensitive as stored.
    pub email: String,
    /// Argon2 password hash. Never leaves the store in serialized form.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Grants the elevated `admin` role at next capability issuance.
    pub is_admin: bool,
    /// When the member was created.
    pub created_at: DateTime<Utc>,
    /// When the member was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Member {
    /// The role this member's capabilities carry, derived from `is_admin`
    /// at issuance time.
    pub fn role(&self) -> MemberRole {
        if self.is_admin {
            MemberRole::Admin
        } else {
            MemberRole::Member
        }
    }

    /// Check if this member has admin privileges.
    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    /// Full display name.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Data required to create a new member.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMember {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Login handle.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Admin flag. The registration flow always passes `false`.
    pub is_admin: bool,
}

/// Data for updating an existing member's profile fields.
///
/// `None` fields are left unchanged. The password hash and admin flag are
/// deliberately absent; neither is a profile field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateMemberProfile {
    /// New given name.
    pub first_name: Option<String>,
    /// New family name.
    pub last_name: Option<String>,
    /// New email. Subject to the same uniqueness constraint as creation.
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(is_admin: bool) -> Member {
        Member {
            id: 7,
            first_name: "Alice".to_string(),
            last_name: "Doe".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: "$argon2id$stub".to_string(),
            is_admin,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_role_derivation() {
        assert_eq!(sample(false).role(), MemberRole::Member);
        assert_eq!(sample(true).role(), MemberRole::Admin);
    }

    #[test]
    fn test_password_hash_never_serialized() {
        let json = serde_json::to_value(sample(false)).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json.get("email").unwrap(), "alice@example.com");
    }
}
