//! Module route providers and application assembly.

use axum::{
    middleware::from_fn,
    routing::{get, patch, post, put},
    Router,
};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};
use tower_sessions::{SessionManagerLayer, SessionStore};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    bootstrap::{ModuleRegistry, RouteProvider},
    controller::{
        auth::{activate_user, change_password, deactivate_user, login, logout, me},
        bank_account::{
            create_bank_account, delete_bank_account, get_bank_account, list_bank_accounts,
            update_bank_account,
        },
        product::{create_product, delete_product, get_product, list_products, update_product},
        system::{api_info, app_status, database_status, health, system_info},
        user::{create_user, delete_user, get_user, list_users, update_user},
    },
    docs::ApiDoc,
    error::internal::InternalError,
    middleware::{
        content_type::require_json_content_type,
        cors::cors_layer,
        fallback::{handle_panic, method_not_allowed, not_found},
        json::normalize_json,
    },
    state::AppState,
};

pub struct SystemModule;

impl RouteProvider for SystemModule {
    fn name(&self) -> &'static str {
        "system"
    }

    fn priority(&self) -> i32 {
        0
    }

    fn routes(&self) -> Router<AppState> {
        Router::new()
            .route("/", get(api_info))
            .route("/health", get(health))
            .route("/app-status", get(app_status))
            .route("/api/system/info", get(system_info))
            .route("/api/system/database", get(database_status))
    }
}

pub struct AuthModule;

impl RouteProvider for AuthModule {
    fn name(&self) -> &'static str {
        "auth"
    }

    fn priority(&self) -> i32 {
        10
    }

    fn routes(&self) -> Router<AppState> {
        Router::new()
            .route("/api/auth/login", post(login))
            .route("/api/auth/logout", post(logout))
            .route("/api/auth/me", get(me))
            .route("/api/auth/change-password", put(change_password))
            .route("/api/auth/users/{id}/activate", patch(activate_user))
            .route("/api/auth/users/{id}/deactivate", patch(deactivate_user))
    }
}

/// User management.
pub struct SecurityModule;

impl RouteProvider for SecurityModule {
    fn name(&self) -> &'static str {
        "security"
    }

    fn priority(&self) -> i32 {
        20
    }

    fn routes(&self) -> Router<AppState> {
        Router::new()
            .route("/api/security/users", get(list_users).post(create_user))
            .route(
                "/api/security/users/{id}",
                get(get_user).put(update_user).delete(delete_user),
            )
    }
}

pub struct ProductModule;

impl RouteProvider for ProductModule {
    fn name(&self) -> &'static str {
        "product"
    }

    fn priority(&self) -> i32 {
        30
    }

    fn routes(&self) -> Router<AppState> {
        Router::new()
            .route("/api/products", get(list_products).post(create_product))
            .route(
                "/api/products/{id}",
                get(get_product).put(update_product).delete(delete_product),
            )
    }
}

pub struct FinancialModule;

impl RouteProvider for FinancialModule {
    fn name(&self) -> &'static str {
        "financial"
    }

    fn priority(&self) -> i32 {
        40
    }

    fn routes(&self) -> Router<AppState> {
        Router::new()
            .route(
                "/api/financial/bank-account",
                get(list_bank_accounts).post(create_bank_account),
            )
            .route(
                "/api/financial/bank-account/{id}",
                get(get_bank_account)
                    .put(update_bank_account)
                    .delete(delete_bank_account),
            )
    }
}

/// Registers every functional module of the API.
pub fn registry() -> Result<ModuleRegistry, InternalError> {
    let mut registry = ModuleRegistry::new();
    registry.register(SystemModule)?;
    registry.register(AuthModule)?;
    registry.register(SecurityModule)?;
    registry.register(ProductModule)?;
    registry.register(FinancialModule)?;

    Ok(registry)
}

/// Assembles the application router.
///
/// Layers, from the outermost: request tracing, panic recovery, CORS, sessions, JSON/UTF-8
/// normalization, content-type validation. Unknown paths and unsupported methods fall
/// back to the 404 and 405 envelopes.
pub fn build_app<Store>(
    registry: ModuleRegistry,
    state: AppState,
    session_layer: SessionManagerLayer<Store>,
) -> Router
where
    Store: SessionStore + Clone,
{
    let cors = cors_layer(&state.config.cors_allowed_origins);

    registry
        .into_router()
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()))
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(from_fn(require_json_content_type))
        .layer(from_fn(normalize_json))
        .layer(session_layer)
        .layer(cors)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
