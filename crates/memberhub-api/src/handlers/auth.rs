//! Auth handlers — register, login, me.

use axum::Json;
use axum::extract::State;
use validator::Validate;

use memberhub_core::error::AppError;
use memberhub_service::account::registration::RegisterMember;

use crate::dto::request::{LoginRequest, RegisterRequest};
use crate::dto::response::{ApiResponse, AuthResponse, MemberResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<ApiResponse<AuthResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let result = state
        .registration_service
        .register(RegisterMember {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok(Json(ApiResponse::ok(AuthResponse {
        token: result.capability.token,
        expires_at: result.capability.expires_at,
        member: result.member.into(),
    })))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<AuthResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let result = state
        .authentication_service
        .login(&req.email, &req.password)
        .await?;

    Ok(Json(ApiResponse::ok(AuthResponse {
        token: result.capability.token,
        expires_at: result.capability.expires_at,
        member: result.member.into(),
    })))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<MemberResponse>>, ApiError> {
    let member = state.member_service.get_profile(&auth).await?;

    Ok(Json(ApiResponse::ok(member.into())))
}
