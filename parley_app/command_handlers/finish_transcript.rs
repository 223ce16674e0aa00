//! Closes a transcript once generation finishes or fails. Called by the
//! transcript generator, not by an HTTP route.

use chrono::Utc;
use std::sync::Arc;

use parley_types::{Result, transcripts::TranscriptStatus};

use crate::{
    config::Config,
    cqrs::{
        CommandHandler,
        commands::{CompleteTranscript, FailTranscript},
    },
    uow::UnitOfWork,
};

pub struct CompleteTranscriptCommandHandler {}

impl CompleteTranscriptCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<CompleteTranscript> for CompleteTranscriptCommandHandler {
    async fn handle(
        &self,
        command: CompleteTranscript,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<()> {
        let repo = uow.transcripts();
        let mut transcript = repo.get_for_user(command.id, command.user_id).await?;
        transcript.content = command.content;
        transcript.status = TranscriptStatus::Completed;
        transcript.completed_at = Some(Utc::now());
        repo.save(&transcript).await
    }
}

pub struct FailTranscriptCommandHandler {}

impl FailTranscriptCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<FailTranscript> for FailTranscriptCommandHandler {
    async fn handle(
        &self,
        command: FailTranscript,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<()> {
        tracing::warn!(transcript_id = %command.id, reason = %command.reason, "transcript generation failed");

        let repo = uow.transcripts();
        let mut transcript = repo.get_for_user(command.id, command.user_id).await?;
        transcript.content = format!("Generation failed: {}", command.reason);
        transcript.status = TranscriptStatus::Failed;
        transcript.completed_at = Some(Utc::now());
        repo.save(&transcript).await
    }
}
