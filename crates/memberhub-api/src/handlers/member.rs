//! Member row handlers. Visibility is decided by the policy engine; a
//! row outside the caller's scope is a plain 404 here.

use axum::Json;
use axum::extract::{Path, State};

use memberhub_entity::member::UpdateMemberProfile;

use crate::dto::request::UpdateMemberRequest;
use crate::dto::response::{ApiResponse, MemberResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/members
pub async fn list_members(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<MemberResponse>>>, ApiError> {
    let members = state.member_service.list_members(&auth).await?;

    Ok(Json(ApiResponse::ok(
        members.into_iter().map(MemberResponse::from).collect(),
    )))
}

/// GET /api/members/{id}
pub async fn get_member(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<MemberResponse>>, ApiError> {
    let member = state.member_service.get_member(&auth, id).await?;

    Ok(Json(ApiResponse::ok(member.into())))
}

/// PUT /api/members/{id}
pub async fn update_member(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
    Json(req): Json<UpdateMemberRequest>,
) -> Result<Json<ApiResponse<MemberResponse>>, ApiError> {
    let member = state
        .member_service
        .update_member(
            &auth,
            id,
            UpdateMemberProfile {
                first_name: req.first_name,
                last_name: req.last_name,
                email: req.email,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(member.into())))
}
