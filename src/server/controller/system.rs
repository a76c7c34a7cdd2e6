use axum::{extract::State, http::StatusCode};

use crate::{
    model::{
        api::ApiResponse,
        system::{ApiInfoDto, AppStatusDto, DatabaseStatusDto, HealthDto, SystemInfoDto},
    },
    server::{service::system::SystemService, state::AppState},
};

pub static SYSTEM_TAG: &str = "system";

pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

#[utoipa::path(
    get,
    path = "/",
    tag = SYSTEM_TAG,
    responses(
        (status = 200, description = "API name, version and registered modules", body = ApiResponse<ApiInfoDto>)
    ),
)]
pub async fn api_info(State(state): State<AppState>) -> ApiResponse<ApiInfoDto> {
    ApiResponse::success(
        ApiInfoDto {
            name: APP_NAME.to_string(),
            version: APP_VERSION.to_string(),
            modules: state.modules.iter().map(|name| name.to_string()).collect(),
        },
        "API em funcionamento",
    )
}

/// GET /health - Liveness check including a database ping
///
/// # Returns
/// - `200 OK`: Database answered
/// - `503 Service Unavailable`: Database ping failed; the report is still in `data`
#[utoipa::path(
    get,
    path = "/health",
    tag = SYSTEM_TAG,
    responses(
        (status = 200, description = "Service and database are up", body = ApiResponse<HealthDto>),
        (status = 503, description = "Database unreachable", body = ApiResponse<HealthDto>)
    ),
)]
pub async fn health(State(state): State<AppState>) -> ApiResponse<HealthDto> {
    if SystemService::new(&state).database_up().await {
        ApiResponse::success(
            HealthDto {
                status: "ok".to_string(),
                database: "up".to_string(),
            },
            "Serviço saudável",
        )
    } else {
        ApiResponse::error_with_data(
            StatusCode::SERVICE_UNAVAILABLE.as_u16(),
            HealthDto {
                status: "degraded".to_string(),
                database: "down".to_string(),
            },
            "Banco de dados indisponível",
        )
    }
}

#[utoipa::path(
    get,
    path = "/app-status",
    tag = SYSTEM_TAG,
    responses(
        (status = 200, description = "Version, environment and uptime", body = ApiResponse<AppStatusDto>)
    ),
)]
pub async fn app_status(State(state): State<AppState>) -> ApiResponse<AppStatusDto> {
    ApiResponse::success(
        AppStatusDto {
            version: APP_VERSION.to_string(),
            environment: state.config.app_env.clone(),
            uptime_seconds: state.uptime().as_secs(),
        },
        "Status da aplicação",
    )
}

#[utoipa::path(
    get,
    path = "/api/system/info",
    tag = SYSTEM_TAG,
    responses(
        (status = 200, description = "Process and platform information", body = ApiResponse<SystemInfoDto>)
    ),
)]
pub async fn system_info(State(state): State<AppState>) -> ApiResponse<SystemInfoDto> {
    ApiResponse::success(
        SystemInfoDto {
            name: APP_NAME.to_string(),
            version: APP_VERSION.to_string(),
            environment: state.config.app_env.clone(),
            os: std::env::consts::OS.to_string(),
            arch: std::env::consts::ARCH.to_string(),
            pid: std::process::id(),
            uptime_seconds: state.uptime().as_secs(),
        },
        "Informações do sistema",
    )
}

/// GET /api/system/database - Connectivity of the primary and replica databases
///
/// # Returns
/// - `200 OK`: Every configured connection answered
/// - `503 Service Unavailable`: At least one connection failed; details in `data`
#[utoipa::path(
    get,
    path = "/api/system/database",
    tag = SYSTEM_TAG,
    responses(
        (status = 200, description = "All databases reachable", body = ApiResponse<DatabaseStatusDto>),
        (status = 503, description = "A database is unreachable", body = ApiResponse<DatabaseStatusDto>)
    ),
)]
pub async fn database_status(State(state): State<AppState>) -> ApiResponse<DatabaseStatusDto> {
    let status = SystemService::new(&state).database_status().await;

    if status.all_up() {
        ApiResponse::success(status.into_dto(), "Banco de dados conectado")
    } else {
        ApiResponse::error_with_data(
            StatusCode::SERVICE_UNAVAILABLE.as_u16(),
            status.into_dto(),
            "Banco de dados indisponível",
        )
    }
}
