use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder,
};

use crate::server::model::{
    pagination::PageRequest,
    product::{CreateProductParams, UpdateProductParams},
};

pub struct ProductRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProductRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new product with a random UUID
    pub async fn create(
        &self,
        params: CreateProductParams,
    ) -> Result<entity::product::Model, DbErr> {
        let now = Utc::now();
        entity::product::ActiveModel {
            uuid: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
            name: ActiveValue::Set(params.name),
            price: ActiveValue::Set(params.price),
            category: ActiveValue::Set(params.category),
            status: ActiveValue::Set(params.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::product::Model>, DbErr> {
        entity::prelude::Product::find_by_id(id).one(self.db).await
    }

    /// Gets one page of products ordered by id
    pub async fn get_paginated(
        &self,
        request: PageRequest,
    ) -> Result<(Vec<entity::product::Model>, u64), DbErr> {
        let paginator = entity::prelude::Product::find()
            .order_by_asc(entity::product::Column::Id)
            .paginate(self.db, request.limit);

        let total = paginator.num_items().await?;
        if request.is_past_end(total) {
            return Ok((Vec::new(), total));
        }

        let products = paginator.fetch_page(request.index()).await?;

        Ok((products, total))
    }

    /// Applies the provided fields of a partial update
    pub async fn update(
        &self,
        params: UpdateProductParams,
    ) -> Result<Option<entity::product::Model>, DbErr> {
        let Some(product) = self.find_by_id(params.id).await? else {
            return Ok(None);
        };

        let mut active_model: entity::product::ActiveModel = product.into();
        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(price) = params.price {
            active_model.price = ActiveValue::Set(price);
        }
        if let Some(category) = params.category {
            active_model.category = ActiveValue::Set(category);
        }
        if let Some(status) = params.status {
            active_model.status = ActiveValue::Set(status);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(active_model.update(self.db).await?))
    }

    /// Deletes a product, returning whether a row was removed
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Product::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Product::find().count(self.db).await
    }
}
