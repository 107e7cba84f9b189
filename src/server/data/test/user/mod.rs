use crate::server::{
    data::user::UserRepository,
    model::user::{NewUser, UserChanges},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find;
mod get_page;

fn new_user(email: &str, username: &str) -> NewUser {
    NewUser {
        email: email.to_string(),
        username: username.to_string(),
        hashed_password: "salt$digest".to_string(),
    }
}
