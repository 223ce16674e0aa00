use async_trait::async_trait;
use std::sync::Arc;

use parley_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{Query, QueryHandler, queries::GetTranscript},
    uow::UnitOfWork,
};

pub struct GetTranscriptHandler {}

impl GetTranscriptHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<GetTranscript> for GetTranscriptHandler {
    async fn handle(
        &self,
        query: GetTranscript,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<<GetTranscript as Query>::Output, ApplicationError> {
        uow.transcripts()
            .get_for_user(query.id, query.user_id)
            .await
    }
}
