use axum::extract::State;

use crate::{
    model::{
        api::{ApiResponse, EmptyDto, ValidationErrorsDto},
        product::{CreateProductDto, ProductDto, UpdateProductDto},
    },
    server::{
        error::AppError,
        model::product::{CreateProductParams, UpdateProductParams},
        service::product::ProductService,
        state::AppState,
        util::extract::{IdPath, JsonBody, PageQuery},
    },
};

pub static PRODUCT_TAG: &str = "product";

#[utoipa::path(
    get,
    path = "/api/products",
    tag = PRODUCT_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)")
    ),
    responses(
        (status = 200, description = "Products for the requested page", body = ApiResponse<Vec<ProductDto>>),
        (status = 400, description = "Invalid pagination parameters", body = ApiResponse<EmptyDto>)
    ),
)]
pub async fn list_products(
    State(state): State<AppState>,
    PageQuery(page): PageQuery,
) -> Result<ApiResponse<Vec<ProductDto>>, AppError> {
    let products = ProductService::new(state.reader()).list(page).await?;

    Ok(ApiResponse::paginated(
        products.map(|product| product.into_dto()),
        "Produtos listados com sucesso",
    ))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = PRODUCT_TAG,
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "The product", body = ApiResponse<ProductDto>),
        (status = 404, description = "Product not found", body = ApiResponse<EmptyDto>)
    ),
)]
pub async fn get_product(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<ApiResponse<ProductDto>, AppError> {
    let product = ProductService::new(state.reader()).get(id).await?;

    Ok(ApiResponse::success(product.into_dto(), "Produto encontrado"))
}

#[utoipa::path(
    post,
    path = "/api/products",
    tag = PRODUCT_TAG,
    request_body = CreateProductDto,
    responses(
        (status = 201, description = "Product created", body = ApiResponse<ProductDto>),
        (status = 400, description = "Malformed JSON", body = ApiResponse<EmptyDto>),
        (status = 415, description = "Body is not JSON", body = ApiResponse<EmptyDto>),
        (status = 422, description = "Invalid fields", body = ApiResponse<ValidationErrorsDto>)
    ),
)]
pub async fn create_product(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateProductDto>,
) -> Result<ApiResponse<ProductDto>, AppError> {
    let product = ProductService::new(&state.db)
        .create(CreateProductParams::from_dto(payload))
        .await?;

    Ok(ApiResponse::created(
        product.into_dto(),
        "Produto criado com sucesso",
    ))
}

#[utoipa::path(
    put,
    path = "/api/products/{id}",
    tag = PRODUCT_TAG,
    params(("id" = i32, Path, description = "Product ID")),
    request_body = UpdateProductDto,
    responses(
        (status = 200, description = "Product updated", body = ApiResponse<ProductDto>),
        (status = 404, description = "Product not found", body = ApiResponse<EmptyDto>),
        (status = 422, description = "Invalid fields", body = ApiResponse<ValidationErrorsDto>)
    ),
)]
pub async fn update_product(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    JsonBody(payload): JsonBody<UpdateProductDto>,
) -> Result<ApiResponse<ProductDto>, AppError> {
    let product = ProductService::new(&state.db)
        .update(UpdateProductParams::from_dto(id, payload))
        .await?;

    Ok(ApiResponse::success(
        product.into_dto(),
        "Produto atualizado com sucesso",
    ))
}

#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = PRODUCT_TAG,
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product deleted", body = ApiResponse<EmptyDto>),
        (status = 404, description = "Product not found", body = ApiResponse<EmptyDto>)
    ),
)]
pub async fn delete_product(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<ApiResponse<EmptyDto>, AppError> {
    ProductService::new(&state.db).delete(id).await?;

    Ok(ApiResponse::message("Produto removido com sucesso"))
}
