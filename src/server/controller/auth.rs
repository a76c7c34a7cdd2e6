//! Session login, logout and account management endpoints.

use axum::extract::State;
use tower_sessions::Session;

use crate::{
    model::{
        api::{ApiResponse, EmptyDto, ValidationErrorsDto},
        auth::{ChangePasswordDto, LoginDto},
        user::UserDto,
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            session::AuthSession,
        },
        model::{
            status::RecordStatus,
            user::{ChangePasswordParams, LoginParams},
        },
        service::auth::AuthService,
        state::AppState,
        util::extract::{IdPath, JsonBody},
    },
};

pub static AUTH_TAG: &str = "auth";

/// POST /api/auth/login - Log in with email and password
///
/// Stores the user id in the session; the session cookie identifies later requests.
///
/// # Returns
/// - `200 OK`: The logged-in user
/// - `401 Unauthorized`: Unknown email or wrong password
/// - `403 Forbidden`: User is inactive
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = ApiResponse<UserDto>),
        (status = 401, description = "Invalid credentials", body = ApiResponse<EmptyDto>),
        (status = 403, description = "User is inactive", body = ApiResponse<EmptyDto>),
        (status = 422, description = "Invalid fields", body = ApiResponse<ValidationErrorsDto>)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    JsonBody(payload): JsonBody<LoginDto>,
) -> Result<ApiResponse<UserDto>, AppError> {
    let user = AuthService::new(&state.db, state.password_hasher())
        .login(LoginParams::from_dto(payload))
        .await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok(ApiResponse::success(
        user.into_dto(),
        "Login realizado com sucesso",
    ))
}

#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Session cleared", body = ApiResponse<EmptyDto>)
    ),
)]
pub async fn logout(session: Session) -> Result<ApiResponse<EmptyDto>, AppError> {
    AuthSession::new(&session).clear().await?;

    Ok(ApiResponse::message("Logout realizado com sucesso"))
}

#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "The logged-in user", body = ApiResponse<UserDto>),
        (status = 401, description = "Not logged in", body = ApiResponse<EmptyDto>)
    ),
)]
pub async fn me(
    State(state): State<AppState>,
    session: Session,
) -> Result<ApiResponse<UserDto>, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok(ApiResponse::success(
        user.into_dto(),
        "Usuário autenticado",
    ))
}

/// PUT /api/auth/change-password - Change the logged-in user's password
///
/// # Returns
/// - `200 OK`: Password changed
/// - `401 Unauthorized`: Not logged in or wrong current password
/// - `422 Unprocessable Entity`: New password too short
#[utoipa::path(
    put,
    path = "/api/auth/change-password",
    tag = AUTH_TAG,
    request_body = ChangePasswordDto,
    responses(
        (status = 200, description = "Password changed", body = ApiResponse<EmptyDto>),
        (status = 401, description = "Not logged in or wrong current password", body = ApiResponse<EmptyDto>),
        (status = 422, description = "Invalid fields", body = ApiResponse<ValidationErrorsDto>)
    ),
)]
pub async fn change_password(
    State(state): State<AppState>,
    session: Session,
    JsonBody(payload): JsonBody<ChangePasswordDto>,
) -> Result<ApiResponse<EmptyDto>, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    AuthService::new(&state.db, state.password_hasher())
        .change_password(ChangePasswordParams::from_dto(user.id, payload))
        .await?;

    Ok(ApiResponse::message("Senha alterada com sucesso"))
}

#[utoipa::path(
    patch,
    path = "/api/auth/users/{id}/activate",
    tag = AUTH_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User activated", body = ApiResponse<UserDto>),
        (status = 401, description = "Not logged in", body = ApiResponse<EmptyDto>),
        (status = 403, description = "Admin role required", body = ApiResponse<EmptyDto>),
        (status = 404, description = "User not found", body = ApiResponse<EmptyDto>)
    ),
)]
pub async fn activate_user(
    State(state): State<AppState>,
    session: Session,
    IdPath(id): IdPath,
) -> Result<ApiResponse<UserDto>, AppError> {
    set_user_status(&state, &session, id, RecordStatus::Active, "Usuário ativado com sucesso")
        .await
}

#[utoipa::path(
    patch,
    path = "/api/auth/users/{id}/deactivate",
    tag = AUTH_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User deactivated", body = ApiResponse<UserDto>),
        (status = 400, description = "Admin tried to deactivate themselves", body = ApiResponse<EmptyDto>),
        (status = 401, description = "Not logged in", body = ApiResponse<EmptyDto>),
        (status = 403, description = "Admin role required", body = ApiResponse<EmptyDto>),
        (status = 404, description = "User not found", body = ApiResponse<EmptyDto>)
    ),
)]
pub async fn deactivate_user(
    State(state): State<AppState>,
    session: Session,
    IdPath(id): IdPath,
) -> Result<ApiResponse<UserDto>, AppError> {
    set_user_status(
        &state,
        &session,
        id,
        RecordStatus::Inactive,
        "Usuário desativado com sucesso",
    )
    .await
}

async fn set_user_status(
    state: &AppState,
    session: &Session,
    id: i32,
    status: RecordStatus,
    message: &str,
) -> Result<ApiResponse<UserDto>, AppError> {
    let admin = AuthGuard::new(&state.db, session)
        .require(&[Permission::Admin])
        .await?;

    let user = AuthService::new(&state.db, state.password_hasher())
        .set_status(admin.id, id, status)
        .await?;

    Ok(ApiResponse::success(user.into_dto(), message))
}
