use utoipa::OpenApi;

use crate::server::controller::{
    auth::{self, AUTH_TAG},
    bank_account::{self, BANK_ACCOUNT_TAG},
    product::{self, PRODUCT_TAG},
    system::{self, SYSTEM_TAG},
    user::{self, USER_TAG},
};

/// OpenAPI document served under `/api/docs`.
#[derive(OpenApi)]
#[openapi(
    info(title = "Storefront API"),
    paths(
        system::api_info,
        system::health,
        system::app_status,
        system::system_info,
        system::database_status,
        auth::login,
        auth::logout,
        auth::me,
        auth::change_password,
        auth::activate_user,
        auth::deactivate_user,
        user::list_users,
        user::get_user,
        user::create_user,
        user::update_user,
        user::delete_user,
        product::list_products,
        product::get_product,
        product::create_product,
        product::update_product,
        product::delete_product,
        bank_account::list_bank_accounts,
        bank_account::get_bank_account,
        bank_account::create_bank_account,
        bank_account::update_bank_account,
        bank_account::delete_bank_account,
    ),
    tags(
        (name = SYSTEM_TAG, description = "Service status and information"),
        (name = AUTH_TAG, description = "Session login and account management"),
        (name = USER_TAG, description = "User management"),
        (name = PRODUCT_TAG, description = "Product catalog"),
        (name = BANK_ACCOUNT_TAG, description = "Bank accounts"),
    )
)]
pub struct ApiDoc;
