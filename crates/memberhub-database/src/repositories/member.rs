//! Member repository implementation.
//!
//! The visibility-scoped methods take a [`RowFilter`] from the policy
//! engine and inject it into the SQL predicate, so rows outside the
//! caller's scope are indistinguishable from rows that do not exist.

use sqlx::PgPool;

use memberhub_auth::policy::RowFilter;
use memberhub_core::error::{AppError, ErrorKind};
use memberhub_core::result::AppResult;
use memberhub_entity::member::{CreateMember, Member, UpdateMemberProfile};

/// Repository for member rows.
///
/// `insert` is reachable only from the registration flow; the migration
/// additionally revokes direct INSERT on the table from all other database
/// roles.
#[derive(Debug, Clone)]
pub struct MemberRepository {
    pool: PgPool,
}

impl MemberRepository {
    /// Create a new member repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new member row.
    ///
    /// The unique constraint on `email` is the arbiter for concurrent
    /// registrations: of two racing inserts with the same email, exactly
    /// one succeeds and the other maps to a conflict here.
    pub async fn insert(&self, data: &CreateMember) -> AppResult<Member> {
        sqlx::query_as::<_, Member>(
            "INSERT INTO members (first_name, last_name, email, password_hash, is_admin) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING *",
        )
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(&data.email)
        .bind(&data.password_hash)
        .bind(data.is_admin)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("members_email_key") => {
                AppError::conflict(format!("Email '{}' is already registered", data.email))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create member", e),
        })
    }

    /// Find a member by email. Exact match; emails are case-sensitive as
    /// stored.
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<Member>> {
        sqlx::query_as::<_, Member>("SELECT * FROM members WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find member by email", e)
            })
    }

    /// Find a member by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Member>> {
        sqlx::query_as::<_, Member>("SELECT * FROM members WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find member by id", e))
    }

    /// Find a member by id within the caller's visibility scope.
    ///
    /// Returns `None` both for rows that do not exist and for rows the
    /// filter hides.
    pub async fn find_visible_by_id(&self, filter: &RowFilter, id: i64) -> AppResult<Option<Member>> {
        match filter {
            RowFilter::All => self.find_by_id(id).await,
            RowFilter::Own(own_id) => {
                sqlx::query_as::<_, Member>("SELECT * FROM members WHERE id = $1 AND id = $2")
                    .bind(id)
                    .bind(own_id)
                    .fetch_optional(&self.pool)
                    .await
                    .map_err(|e| {
                        AppError::with_source(ErrorKind::Database, "Failed to find member by id", e)
                    })
            }
            RowFilter::Nothing => Ok(None),
        }
    }

    /// List members within the caller's visibility scope.
    pub async fn list_visible(&self, filter: &RowFilter) -> AppResult<Vec<Member>> {
        match filter {
            RowFilter::All => sqlx::query_as::<_, Member>("SELECT * FROM members ORDER BY id")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to list members", e)
                }),
            RowFilter::Own(own_id) => {
                sqlx::query_as::<_, Member>("SELECT * FROM members WHERE id = $1")
                    .bind(own_id)
                    .fetch_all(&self.pool)
                    .await
                    .map_err(|e| {
                        AppError::with_source(ErrorKind::Database, "Failed to list members", e)
                    })
            }
            RowFilter::Nothing => Ok(Vec::new()),
        }
    }

    /// Update a member's profile fields within the caller's visibility
    /// scope.
    ///
    /// Returns `None` when the target row is absent or hidden by the
    /// filter. An email change hitting the unique constraint maps to a
    /// conflict, same as creation.
    pub async fn update_profile(
        &self,
        filter: &RowFilter,
        id: i64,
        data: &UpdateMemberProfile,
    ) -> AppResult<Option<Member>> {
        let scope_id = match filter {
            RowFilter::All => id,
            RowFilter::Own(own_id) => *own_id,
            RowFilter::Nothing => return Ok(None),
        };

        sqlx::query_as::<_, Member>(
            "UPDATE members SET first_name = COALESCE($3, first_name), \
                                last_name  = COALESCE($4, last_name), \
                                email      = COALESCE($5, email), \
                                updated_at = NOW() \
             WHERE id = $1 AND id = $2 RETURNING *",
        )
        .bind(id)
        .bind(scope_id)
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(&data.email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("members_email_key") => {
                AppError::conflict("Email is already registered".to_string())
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to update member", e),
        })
    }
}
