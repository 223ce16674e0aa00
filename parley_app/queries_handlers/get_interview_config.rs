use async_trait::async_trait;
use std::sync::Arc;

use parley_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{Query, QueryHandler, queries::GetInterviewConfig},
    uow::UnitOfWork,
};

pub struct GetInterviewConfigHandler {}

impl GetInterviewConfigHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<GetInterviewConfig> for GetInterviewConfigHandler {
    async fn handle(
        &self,
        query: GetInterviewConfig,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<<GetInterviewConfig as Query>::Output, ApplicationError> {
        uow.interview_configs()
            .get_for_user(query.id, query.user_id)
            .await
    }
}
