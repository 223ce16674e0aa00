use async_trait::async_trait;
use std::sync::Arc;

use parley_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{Query, QueryHandler, queries::GetUserByUsername},
    uow::UnitOfWork,
};

pub struct GetUserByUsernameHandler {}

impl GetUserByUsernameHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<GetUserByUsername> for GetUserByUsernameHandler {
    async fn handle(
        &self,
        query: GetUserByUsername,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<<GetUserByUsername as Query>::Output, ApplicationError> {
        uow.users().get_by_username(query.username.trim()).await
    }
}
