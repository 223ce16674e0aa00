use chrono::Utc;
use std::sync::Arc;

use parley_types::{Result, interview::InterviewConfig};

use crate::{
    config::Config,
    cqrs::{CommandHandler, commands::CreateInterviewConfig},
    uow::UnitOfWork,
};

pub struct CreateInterviewConfigCommandHandler {}

impl CreateInterviewConfigCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<CreateInterviewConfig> for CreateInterviewConfigCommandHandler {
    async fn handle(
        &self,
        command: CreateInterviewConfig,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<()> {
        let now = Utc::now();
        let config = InterviewConfig {
            id: command.id,
            user_id: command.user_id,
            name: command.name,
            candidate_name: command.candidate_name,
            position: command.position,
            company: command.company,
            job_title: command.job_title,
            resume: command.resume,
            detailed_experience: command.detailed_experience,
            job_description: command.job_description,
            created_at: now,
            updated_at: now,
        };
        config.ensure_required_fields()?;

        uow.interview_configs().save(&config).await
    }
}
