//! Product domain models and parameters.

use chrono::{DateTime, Utc};
use validator::Validate;

use crate::{
    model::product::{CreateProductDto, ProductDto, UpdateProductDto},
    server::{
        error::{internal::InternalError, AppError},
        model::status::RecordStatus,
        util::validation::{not_blank, valid_status},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i32,
    pub uuid: String,
    pub name: String,
    pub price: f64,
    pub category: String,
    pub status: RecordStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    pub fn from_entity(entity: entity::product::Model) -> Result<Self, AppError> {
        let status =
            entity
                .status
                .parse::<RecordStatus>()
                .map_err(|value| InternalError::InvalidStoredValue {
                    column: "product.status",
                    value,
                })?;

        Ok(Self {
            id: entity.id,
            uuid: entity.uuid,
            name: entity.name,
            price: entity.price,
            category: entity.category,
            status,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> ProductDto {
        ProductDto {
            id: self.id,
            uuid: self.uuid,
            name: self.name,
            price: self.price,
            category: self.category,
            status: self.status.to_string(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone, Validate)]
pub struct CreateProductParams {
    #[validate(
        length(min = 1, max = 255, message = "Nome deve ter entre 1 e 255 caracteres"),
        custom(function = "not_blank")
    )]
    pub name: String,
    #[validate(range(exclusive_min = 0.0, message = "Preço deve ser maior que zero"))]
    pub price: f64,
    #[validate(
        length(min = 1, max = 100, message = "Categoria deve ter entre 1 e 100 caracteres"),
        custom(function = "not_blank")
    )]
    pub category: String,
    #[validate(custom(function = "valid_status"))]
    pub status: String,
}

impl CreateProductParams {
    pub fn from_dto(dto: CreateProductDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            price: dto.price,
            category: dto.category.trim().to_string(),
            status: dto
                .status
                .unwrap_or_else(|| RecordStatus::Active.to_string()),
        }
    }
}

#[derive(Debug, Clone, Validate)]
pub struct UpdateProductParams {
    pub id: i32,
    #[validate(
        length(min = 1, max = 255, message = "Nome deve ter entre 1 e 255 caracteres"),
        custom(function = "not_blank")
    )]
    pub name: Option<String>,
    #[validate(range(exclusive_min = 0.0, message = "Preço deve ser maior que zero"))]
    pub price: Option<f64>,
    #[validate(
        length(min = 1, max = 100, message = "Categoria deve ter entre 1 e 100 caracteres"),
        custom(function = "not_blank")
    )]
    pub category: Option<String>,
    #[validate(custom(function = "valid_status"))]
    pub status: Option<String>,
}

impl UpdateProductParams {
    pub fn from_dto(id: i32, dto: UpdateProductDto) -> Self {
        Self {
            id,
            name: dto.name.map(|name| name.trim().to_string()),
            price: dto.price,
            category: dto.category.map(|category| category.trim().to_string()),
            status: dto.status,
        }
    }
}
