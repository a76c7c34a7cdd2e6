use axum::extract::State;

use crate::{
    model::{
        api::{ApiResponse, EmptyDto, ValidationErrorsDto},
        bank_account::{BankAccountDto, CreateBankAccountDto, UpdateBankAccountDto},
    },
    server::{
        error::AppError,
        model::bank_account::{CreateBankAccountParams, UpdateBankAccountParams},
        service::bank_account::BankAccountService,
        state::AppState,
        util::extract::{IdPath, JsonBody, PageQuery},
    },
};

pub static BANK_ACCOUNT_TAG: &str = "financial";

#[utoipa::path(
    get,
    path = "/api/financial/bank-account",
    tag = BANK_ACCOUNT_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)")
    ),
    responses(
        (status = 200, description = "Bank accounts for the requested page", body = ApiResponse<Vec<BankAccountDto>>),
        (status = 400, description = "Invalid pagination parameters", body = ApiResponse<EmptyDto>)
    ),
)]
pub async fn list_bank_accounts(
    State(state): State<AppState>,
    PageQuery(page): PageQuery,
) -> Result<ApiResponse<Vec<BankAccountDto>>, AppError> {
    let accounts = BankAccountService::new(state.reader()).list(page).await?;

    Ok(ApiResponse::paginated(
        accounts.map(|account| account.into_dto()),
        "Contas bancárias listadas com sucesso",
    ))
}

#[utoipa::path(
    get,
    path = "/api/financial/bank-account/{id}",
    tag = BANK_ACCOUNT_TAG,
    params(("id" = i32, Path, description = "Bank account ID")),
    responses(
        (status = 200, description = "The bank account", body = ApiResponse<BankAccountDto>),
        (status = 404, description = "Bank account not found", body = ApiResponse<EmptyDto>)
    ),
)]
pub async fn get_bank_account(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<ApiResponse<BankAccountDto>, AppError> {
    let account = BankAccountService::new(state.reader()).get(id).await?;

    Ok(ApiResponse::success(
        account.into_dto(),
        "Conta bancária encontrada",
    ))
}

/// POST /api/financial/bank-account - Create a bank account
///
/// `holder_document` accepts a CPF or CNPJ with or without punctuation and is stored
/// as digits only.
///
/// # Returns
/// - `201 Created`: The created account
/// - `422 Unprocessable Entity`: Field validation failed, e.g. bad check digits
#[utoipa::path(
    post,
    path = "/api/financial/bank-account",
    tag = BANK_ACCOUNT_TAG,
    request_body = CreateBankAccountDto,
    responses(
        (status = 201, description = "Bank account created", body = ApiResponse<BankAccountDto>),
        (status = 400, description = "Malformed JSON", body = ApiResponse<EmptyDto>),
        (status = 415, description = "Body is not JSON", body = ApiResponse<EmptyDto>),
        (status = 422, description = "Invalid fields", body = ApiResponse<ValidationErrorsDto>)
    ),
)]
pub async fn create_bank_account(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateBankAccountDto>,
) -> Result<ApiResponse<BankAccountDto>, AppError> {
    let account = BankAccountService::new(&state.db)
        .create(CreateBankAccountParams::from_dto(payload))
        .await?;

    Ok(ApiResponse::created(
        account.into_dto(),
        "Conta bancária criada com sucesso",
    ))
}

#[utoipa::path(
    put,
    path = "/api/financial/bank-account/{id}",
    tag = BANK_ACCOUNT_TAG,
    params(("id" = i32, Path, description = "Bank account ID")),
    request_body = UpdateBankAccountDto,
    responses(
        (status = 200, description = "Bank account updated", body = ApiResponse<BankAccountDto>),
        (status = 404, description = "Bank account not found", body = ApiResponse<EmptyDto>),
        (status = 422, description = "Invalid fields", body = ApiResponse<ValidationErrorsDto>)
    ),
)]
pub async fn update_bank_account(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    JsonBody(payload): JsonBody<UpdateBankAccountDto>,
) -> Result<ApiResponse<BankAccountDto>, AppError> {
    let account = BankAccountService::new(&state.db)
        .update(UpdateBankAccountParams::from_dto(id, payload))
        .await?;

    Ok(ApiResponse::success(
        account.into_dto(),
        "Conta bancária atualizada com sucesso",
    ))
}

#[utoipa::path(
    delete,
    path = "/api/financial/bank-account/{id}",
    tag = BANK_ACCOUNT_TAG,
    params(("id" = i32, Path, description = "Bank account ID")),
    responses(
        (status = 200, description = "Bank account deleted", body = ApiResponse<EmptyDto>),
        (status = 404, description = "Bank account not found", body = ApiResponse<EmptyDto>)
    ),
)]
pub async fn delete_bank_account(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<ApiResponse<EmptyDto>, AppError> {
    BankAccountService::new(&state.db).delete(id).await?;

    Ok(ApiResponse::message("Conta bancária removida com sucesso"))
}
