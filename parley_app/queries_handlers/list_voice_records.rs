use async_trait::async_trait;
use std::sync::Arc;

use parley_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{Query, QueryHandler, queries::ListVoiceRecords},
    uow::UnitOfWork,
};

pub struct ListVoiceRecordsHandler {}

impl ListVoiceRecordsHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<ListVoiceRecords> for ListVoiceRecordsHandler {
    async fn handle(
        &self,
        query: ListVoiceRecords,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<<ListVoiceRecords as Query>::Output, ApplicationError> {
        uow.voice_records()
            .list_by_user_id(query.user_id, query.unread_only, query.page)
            .await
    }
}
