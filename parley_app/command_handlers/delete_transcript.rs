use std::sync::Arc;

use parley_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{CommandHandler, commands::DeleteTranscript},
    uow::UnitOfWork,
};

pub struct DeleteTranscriptCommandHandler;

impl DeleteTranscriptCommandHandler {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl CommandHandler<DeleteTranscript> for DeleteTranscriptCommandHandler {
    async fn handle(
        &self,
        command: DeleteTranscript,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<(), ApplicationError> {
        uow.transcripts().remove(command.id, command.user_id).await
    }
}
