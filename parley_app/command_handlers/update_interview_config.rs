use chrono::Utc;
use std::sync::Arc;

use parley_types::Result;

use crate::{
    config::Config,
    cqrs::{CommandHandler, commands::UpdateInterviewConfig},
    uow::UnitOfWork,
};

pub struct UpdateInterviewConfigCommandHandler {}

impl UpdateInterviewConfigCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<UpdateInterviewConfig> for UpdateInterviewConfigCommandHandler {
    async fn handle(
        &self,
        command: UpdateInterviewConfig,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<()> {
        let repo = uow.interview_configs();
        let mut config = repo.get_for_user(command.id, command.user_id).await?;
        config.apply(command.changes, Utc::now());
        config.ensure_required_fields()?;
        repo.save(&config).await
    }
}
