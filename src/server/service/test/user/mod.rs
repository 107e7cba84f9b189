use crate::server::{
    error::AppError,
    model::user::{CreateUserParams, ListUsersParams, UpdateUserParams},
    service::user::UserService,
};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod activity;
mod get_by_id;
mod list;
mod update;

fn create_params(email: &str, username: &str) -> CreateUserParams {
    CreateUserParams {
        email: email.to_string(),
        username: username.to_string(),
        password: "password123".to_string(),
    }
}
