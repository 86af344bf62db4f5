//! Member viewing and profile updates through the row-level policy.

use std::sync::Arc;

use tracing::info;

use memberhub_auth::policy::{PolicyEngine, RowOperation};
use memberhub_core::error::AppError;
use memberhub_database::repositories::member::MemberRepository;
use memberhub_entity::member::{Member, UpdateMemberProfile};

use crate::context::RequestContext;

/// Handles member row reads and profile updates.
///
/// Every operation resolves a row filter from the policy engine first and
/// hands it to the repository, so out-of-scope rows surface as not-found
/// rather than forbidden.
#[derive(Debug, Clone)]
pub struct MemberService {
    /// Member repository.
    member_repo: Arc<MemberRepository>,
    /// Row-level policy engine.
    policy: Arc<PolicyEngine>,
}

impl MemberService {
    /// Creates a new member service.
    pub fn new(member_repo: Arc<MemberRepository>, policy: Arc<PolicyEngine>) -> Self {
        Self {
            member_repo,
            policy,
        }
    }

    /// Gets the current member's own row.
    pub async fn get_profile(&self, ctx: &RequestContext) -> Result<Member, AppError> {
        self.member_repo
            .find_by_id(ctx.member_id)
            .await?
            .ok_or_else(|| AppError::not_found("Member not found"))
    }

    /// Gets a member row by id, within the caller's visibility scope.
    pub async fn get_member(&self, ctx: &RequestContext, id: i64) -> Result<Member, AppError> {
        let filter = self.policy.row_filter(&ctx.identity(), RowOperation::Read);

        self.member_repo
            .find_visible_by_id(&filter, id)
            .await?
            .ok_or_else(|| AppError::not_found("Member not found"))
    }

    /// Lists the member rows visible to the caller — all of them for an
    /// admin, the caller's own row otherwise.
    pub async fn list_members(&self, ctx: &RequestContext) -> Result<Vec<Member>, AppError> {
        let filter = self.policy.row_filter(&ctx.identity(), RowOperation::Read);
        self.member_repo.list_visible(&filter).await
    }

    /// Updates a member's profile fields, within the caller's visibility
    /// scope.
    pub async fn update_member(
        &self,
        ctx: &RequestContext,
        id: i64,
        update: UpdateMemberProfile,
    ) -> Result<Member, AppError> {
        self.validate_update(&update)?;

        let filter = self
            .policy
            .row_filter(&ctx.identity(), RowOperation::Update);

        let member = self
            .member_repo
            .update_profile(&filter, id, &update)
            .await?
            .ok_or_else(|| AppError::not_found("Member not found"))?;

        info!(member_id = member.id, actor = ctx.member_id, "Profile updated");

        Ok(member)
    }

    /// Rejects empty replacement values before any storage access.
    fn validate_update(&self, update: &UpdateMemberProfile) -> Result<(), AppError> {
        if let Some(first_name) = &update.first_name {
            if first_name.trim().is_empty() {
                return Err(AppError::validation("First name cannot be empty"));
            }
        }
        if let Some(last_name) = &update.last_name {
            if last_name.trim().is_empty() {
                return Err(AppError::validation("Last name cannot be empty"));
            }
        }
        if let Some(email) = &update.email {
            if !email.contains('@') || !email.contains('.') {
                return Err(AppError::validation("Invalid email format"));
            }
        }
        Ok(())
    }
}
