use async_trait::async_trait;
use std::sync::Arc;

use parley_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{Query, QueryHandler, queries::GetVoiceRecord},
    uow::UnitOfWork,
};

pub struct GetVoiceRecordHandler {}

impl GetVoiceRecordHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<GetVoiceRecord> for GetVoiceRecordHandler {
    async fn handle(
        &self,
        query: GetVoiceRecord,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<<GetVoiceRecord as Query>::Output, ApplicationError> {
        uow.voice_records()
            .get_for_user(query.id, query.user_id)
            .await
    }
}
