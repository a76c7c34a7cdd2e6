//! User data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{
    pagination::PageRequest,
    user::{CreateUserParams, UpdateUserParams},
};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user.
    ///
    /// A random UUID is assigned and both timestamps are set to now.
    ///
    /// # Arguments
    /// - `params` - Validated creation parameters; the plain password is ignored
    /// - `password_hash` - bcrypt hash to store
    ///
    /// # Returns
    /// - `Ok(Model)` - The inserted user
    /// - `Err(DbErr)` - Database error, including unique violations on email
    pub async fn create(
        &self,
        params: &CreateUserParams,
        password_hash: String,
    ) -> Result<entity::user::Model, DbErr> {
        let now = Utc::now();
        entity::user::ActiveModel {
            uuid: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
            name: ActiveValue::Set(params.name.clone()),
            email: ActiveValue::Set(params.email.clone()),
            password: ActiveValue::Set(password_hash),
            role: ActiveValue::Set(params.role.clone()),
            status: ActiveValue::Set(params.status.clone()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Checks whether an email belongs to a user other than `exclude_id`.
    ///
    /// Pass `None` when creating a user so every existing row counts.
    pub async fn email_taken(&self, email: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let mut query =
            entity::prelude::User::find().filter(entity::user::Column::Email.eq(email));

        if let Some(id) = exclude_id {
            query = query.filter(entity::user::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Gets one page of users ordered by id.
    ///
    /// # Returns
    /// - `Ok((users, total))` - Users for the requested page and total user count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_paginated(
        &self,
        request: PageRequest,
    ) -> Result<(Vec<entity::user::Model>, u64), DbErr> {
        let paginator = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .paginate(self.db, request.limit);

        let total = paginator.num_items().await?;
        if request.is_past_end(total) {
            return Ok((Vec::new(), total));
        }

        let users = paginator.fetch_page(request.index()).await?;

        Ok((users, total))
    }

    /// Applies the provided fields of a partial update.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Updated user
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error
    pub async fn update(
        &self,
        params: UpdateUserParams,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        let Some(user) = self.find_by_id(params.id).await? else {
            return Ok(None);
        };

        let mut active_model: entity::user::ActiveModel = user.into();
        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(email) = params.email {
            active_model.email = ActiveValue::Set(email);
        }
        if let Some(role) = params.role {
            active_model.role = ActiveValue::Set(role);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(active_model.update(self.db).await?))
    }

    /// Sets the status column of a user.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Updated user
    /// - `Ok(None)` - No user with that id
    pub async fn set_status(
        &self,
        id: i32,
        status: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        let Some(user) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active_model: entity::user::ActiveModel = user.into();
        active_model.status = ActiveValue::Set(status.to_string());
        active_model.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(active_model.update(self.db).await?))
    }

    /// Replaces the stored password hash.
    ///
    /// # Returns
    /// - `Ok(true)` - Hash replaced
    /// - `Ok(false)` - No user with that id
    pub async fn update_password(&self, id: i32, password_hash: String) -> Result<bool, DbErr> {
        let Some(user) = self.find_by_id(id).await? else {
            return Ok(false);
        };

        let mut active_model: entity::user::ActiveModel = user.into();
        active_model.password = ActiveValue::Set(password_hash);
        active_model.updated_at = ActiveValue::Set(Utc::now());
        active_model.update(self.db).await?;

        Ok(true)
    }

    /// Deletes a user.
    ///
    /// # Returns
    /// - `Ok(true)` - A row was deleted
    /// - `Ok(false)` - No user with that id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::User::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::User::find().count(self.db).await
    }
}
