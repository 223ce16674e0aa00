use async_trait::async_trait;
use std::sync::Arc;

use parley_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{Query, QueryHandler, queries::ListTranscripts},
    uow::UnitOfWork,
};

pub struct ListTranscriptsHandler {}

impl ListTranscriptsHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<ListTranscripts> for ListTranscriptsHandler {
    async fn handle(
        &self,
        query: ListTranscripts,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<<ListTranscripts as Query>::Output, ApplicationError> {
        uow.transcripts()
            .list_by_user_id(query.user_id, query.page)
            .await
    }
}
