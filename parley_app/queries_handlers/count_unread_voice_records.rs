use async_trait::async_trait;
use std::sync::Arc;

use parley_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{Query, QueryHandler, queries::CountUnreadVoiceRecords},
    uow::UnitOfWork,
};

pub struct CountUnreadVoiceRecordsHandler {}

impl CountUnreadVoiceRecordsHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<CountUnreadVoiceRecords> for CountUnreadVoiceRecordsHandler {
    async fn handle(
        &self,
        query: CountUnreadVoiceRecords,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<<CountUnreadVoiceRecords as Query>::Output, ApplicationError> {
        uow.voice_records().count_unread(query.user_id).await
    }
}
