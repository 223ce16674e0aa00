use async_trait::async_trait;
use std::sync::Arc;

use parley_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{Query, QueryHandler, queries::ListInterviewConfigs},
    uow::UnitOfWork,
};

pub struct ListInterviewConfigsHandler {}

impl ListInterviewConfigsHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<ListInterviewConfigs> for ListInterviewConfigsHandler {
    async fn handle(
        &self,
        query: ListInterviewConfigs,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<<ListInterviewConfigs as Query>::Output, ApplicationError> {
        uow.interview_configs()
            .list_by_user_id(query.user_id)
            .await
    }
}
