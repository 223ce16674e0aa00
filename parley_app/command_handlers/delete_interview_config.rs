use std::sync::Arc;

use parley_types::Result;

use crate::{
    config::Config,
    cqrs::{CommandHandler, commands::DeleteInterviewConfig},
    uow::UnitOfWork,
};

pub struct DeleteInterviewConfigCommandHandler {}

impl DeleteInterviewConfigCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<DeleteInterviewConfig> for DeleteInterviewConfigCommandHandler {
    async fn handle(
        &self,
        command: DeleteInterviewConfig,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<()> {
        let configs = uow.interview_configs();
        // ownership check before touching dependent rows
        let config = configs.get_for_user(command.id, command.user_id).await?;

        uow.voice_records().detach_config(config.id).await?;
        uow.transcripts().remove_by_config_id(config.id).await?;
        configs.remove(config.id, command.user_id).await
    }
}
