use sea_orm::DatabaseConnection;
use validator::Validate;

use crate::server::{
    data::product::ProductRepository,
    error::AppError,
    model::{
        pagination::{PageRequest, Paginated},
        product::{CreateProductParams, Product, UpdateProductParams},
    },
};

fn product_not_found() -> AppError {
    AppError::NotFound("Produto não encontrado".to_string())
}

pub struct ProductService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProductService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self, request: PageRequest) -> Result<Paginated<Product>, AppError> {
        let (products, total) = ProductRepository::new(self.db)
            .get_paginated(request)
            .await?;

        let products = products
            .into_iter()
            .map(Product::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Paginated::new(products, total, request))
    }

    pub async fn get(&self, id: i32) -> Result<Product, AppError> {
        let product = ProductRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(product_not_found)?;

        Product::from_entity(product)
    }

    pub async fn create(&self, params: CreateProductParams) -> Result<Product, AppError> {
        params.validate()?;

        let product = ProductRepository::new(self.db).create(params).await?;

        Product::from_entity(product)
    }

    pub async fn update(&self, params: UpdateProductParams) -> Result<Product, AppError> {
        params.validate()?;

        let product = ProductRepository::new(self.db)
            .update(params)
            .await?
            .ok_or_else(product_not_found)?;

        Product::from_entity(product)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !ProductRepository::new(self.db).delete(id).await? {
            return Err(product_not_found());
        }

        Ok(())
    }
}
