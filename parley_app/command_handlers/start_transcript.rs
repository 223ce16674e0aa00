//! Persistence side of transcript generation: the generator opens the
//! transcript here. No HTTP route starts one.

use chrono::Utc;
use std::sync::Arc;

use parley_types::{
    Result,
    transcripts::{Transcript, TranscriptStatus},
};

use crate::{
    config::Config,
    cqrs::{CommandHandler, commands::StartTranscript},
    uow::UnitOfWork,
};

pub struct StartTranscriptCommandHandler {}

impl StartTranscriptCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<StartTranscript> for StartTranscriptCommandHandler {
    async fn handle(
        &self,
        command: StartTranscript,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<()> {
        let config = uow
            .interview_configs()
            .get_for_user(command.config_id, command.user_id)
            .await?;

        let transcript = Transcript {
            id: command.id,
            user_id: command.user_id,
            config_id: config.id,
            title: format!("{} {} interview transcript", config.company, config.job_title),
            content: String::new(),
            status: TranscriptStatus::Generating,
            created_at: Utc::now(),
            completed_at: None,
            config_name: Some(config.name),
            company: Some(config.company),
            job_title: Some(config.job_title),
        };

        uow.transcripts().save(&transcript).await
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use parley_types::interview::InterviewConfig;

    use super::*;
    use crate::test_utils::tests::{MockUnitOfWork, test_config};

    #[tokio::test]
    async fn test_start_transcript_titles_from_config() -> Result<()> {
        let mock_uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(MockUnitOfWork::new());
        let config = test_config();
        let user_id = Uuid::new_v4();
        let now = Utc::now();
        let interview = InterviewConfig {
            id: Uuid::new_v4(),
            user_id,
            name: "Globex prep".to_string(),
            candidate_name: "Li".to_string(),
            position: "Engineer".to_string(),
            company: "Globex".to_string(),
            job_title: "Staff Engineer".to_string(),
            resume: String::new(),
            detailed_experience: String::new(),
            job_description: String::new(),
            created_at: now,
            updated_at: now,
        };
        mock_uow.interview_configs().save(&interview).await?;

        let cmd = StartTranscript::new(user_id, interview.id);
        StartTranscriptCommandHandler::new()
            .handle(cmd.clone(), &mock_uow, &config)
            .await?;

        let transcript = mock_uow.transcripts().get_for_user(cmd.id, user_id).await?;
        assert_eq!(transcript.title, "Globex Staff Engineer interview transcript");
        assert_eq!(transcript.status, TranscriptStatus::Generating);
        assert_eq!(transcript.config_name.as_deref(), Some("Globex prep"));
        assert!(transcript.content.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_start_transcript_requires_owned_config() {
        let mock_uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(MockUnitOfWork::new());
        let config = test_config();

        let res = StartTranscriptCommandHandler::new()
            .handle(
                StartTranscript::new(Uuid::new_v4(), Uuid::new_v4()),
                &mock_uow,
                &config,
            )
            .await;
        assert!(res.is_err());
    }
}
