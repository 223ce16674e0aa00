use async_trait::async_trait;
use std::sync::Arc;

use parley_types::errors::{AppError, ApplicationError};

use crate::{
    auth::verify_password,
    config::Config,
    cqrs::{Query, QueryHandler, queries::AuthenticateUser},
    uow::UnitOfWork,
};

pub struct AuthenticateUserHandler {}

impl AuthenticateUserHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<AuthenticateUser> for AuthenticateUserHandler {
    async fn handle(
        &self,
        query: AuthenticateUser,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<<AuthenticateUser as Query>::Output, ApplicationError> {
        let user_repo = uow.users();
        let username = query.username.trim();
        let user = user_repo.get_by_username(username).await?;
        if verify_password(user.password_hash(), &query.password).is_err() {
            return Err(ApplicationError::App(AppError::WrongAuthCredentials));
        }
        Ok(user)
    }
}
