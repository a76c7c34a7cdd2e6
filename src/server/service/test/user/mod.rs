use super::test_hasher;
use crate::{
    model::user::{CreateUserDto, UpdateUserDto},
    server::{
        data::user::UserRepository,
        error::AppError,
        model::{
            pagination::PageRequest,
            user::{CreateUserParams, Role, UpdateUserParams},
        },
        service::user::{map_unique_violation, UserService},
    },
};
use axum::http::StatusCode;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get;
mod list;
mod update;

fn create_params(email: &str) -> CreateUserParams {
    CreateUserParams::from_dto(CreateUserDto {
        name: "Ana Souza".to_string(),
        email: email.to_string(),
        password: "secret1".to_string(),
        role: None,
        status: None,
    })
}
