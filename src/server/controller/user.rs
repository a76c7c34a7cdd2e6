use axum::extract::State;
use tower_sessions::Session;

use crate::{
    model::{
        api::{ApiResponse, EmptyDto, ValidationErrorsDto},
        user::{CreateUserDto, UpdateUserDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::user::{CreateUserParams, UpdateUserParams},
        service::user::UserService,
        state::AppState,
        util::extract::{IdPath, JsonBody, PageQuery},
    },
};

pub static USER_TAG: &str = "security";

#[utoipa::path(
    get,
    path = "/api/security/users",
    tag = USER_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)")
    ),
    responses(
        (status = 200, description = "Users for the requested page", body = ApiResponse<Vec<UserDto>>),
        (status = 400, description = "Invalid pagination parameters", body = ApiResponse<EmptyDto>),
        (status = 500, description = "Internal server error", body = ApiResponse<EmptyDto>)
    ),
)]
pub async fn list_users(
    State(state): State<AppState>,
    PageQuery(page): PageQuery,
) -> Result<ApiResponse<Vec<UserDto>>, AppError> {
    let users = UserService::new(state.reader(), state.password_hasher())
        .list(page)
        .await?;

    Ok(ApiResponse::paginated(
        users.map(|user| user.into_dto()),
        "Usuários listados com sucesso",
    ))
}

#[utoipa::path(
    get,
    path = "/api/security/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "The user", body = ApiResponse<UserDto>),
        (status = 404, description = "User not found", body = ApiResponse<EmptyDto>)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<ApiResponse<UserDto>, AppError> {
    let user = UserService::new(state.reader(), state.password_hasher())
        .get(id)
        .await?;

    Ok(ApiResponse::success(user.into_dto(), "Usuário encontrado"))
}

/// POST /api/security/users - Create a user
///
/// The password is stored as a bcrypt hash and never returned. Creating an admin
/// requires an admin session.
///
/// # Returns
/// - `201 Created`: The created user
/// - `401 Unauthorized`: Admin role requested without a session
/// - `403 Forbidden`: Admin role requested by a non-admin
/// - `409 Conflict`: Email already registered
/// - `422 Unprocessable Entity`: Field validation failed
#[utoipa::path(
    post,
    path = "/api/security/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User created", body = ApiResponse<UserDto>),
        (status = 400, description = "Malformed JSON", body = ApiResponse<EmptyDto>),
        (status = 401, description = "Admin role requested without a session", body = ApiResponse<EmptyDto>),
        (status = 403, description = "Admin role requested by a non-admin", body = ApiResponse<EmptyDto>),
        (status = 409, description = "Email already registered", body = ApiResponse<EmptyDto>),
        (status = 415, description = "Body is not JSON", body = ApiResponse<EmptyDto>),
        (status = 422, description = "Invalid fields", body = ApiResponse<ValidationErrorsDto>)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    session: Session,
    JsonBody(payload): JsonBody<CreateUserDto>,
) -> Result<ApiResponse<UserDto>, AppError> {
    let params = CreateUserParams::from_dto(payload);
    if params.grants_admin() {
        AuthGuard::new(&state.db, &session)
            .require(&[Permission::Admin])
            .await?;
    }

    let user = UserService::new(&state.db, state.password_hasher())
        .create(params)
        .await?;

    Ok(ApiResponse::created(
        user.into_dto(),
        "Usuário criado com sucesso",
    ))
}

#[utoipa::path(
    put,
    path = "/api/security/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "User updated", body = ApiResponse<UserDto>),
        (status = 401, description = "Role change without a session", body = ApiResponse<EmptyDto>),
        (status = 403, description = "Role change by a non-admin", body = ApiResponse<EmptyDto>),
        (status = 404, description = "User not found", body = ApiResponse<EmptyDto>),
        (status = 409, description = "Email already registered", body = ApiResponse<EmptyDto>),
        (status = 422, description = "Invalid fields", body = ApiResponse<ValidationErrorsDto>)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    session: Session,
    IdPath(id): IdPath,
    JsonBody(payload): JsonBody<UpdateUserDto>,
) -> Result<ApiResponse<UserDto>, AppError> {
    let params = UpdateUserParams::from_dto(id, payload);
    if params.changes_role() {
        AuthGuard::new(&state.db, &session)
            .require(&[Permission::Admin])
            .await?;
    }

    let user = UserService::new(&state.db, state.password_hasher())
        .update(params)
        .await?;

    Ok(ApiResponse::success(
        user.into_dto(),
        "Usuário atualizado com sucesso",
    ))
}

#[utoipa::path(
    delete,
    path = "/api/security/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User deleted", body = ApiResponse<EmptyDto>),
        (status = 404, description = "User not found", body = ApiResponse<EmptyDto>)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<ApiResponse<EmptyDto>, AppError> {
    UserService::new(&state.db, state.password_hasher())
        .delete(id)
        .await?;

    Ok(ApiResponse::message("Usuário removido com sucesso"))
}
