//! Closes an answer record once generation finishes or fails. Called by the
//! answer pipeline, not by an HTTP route.

use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use parley_types::{Result, records::VoiceRecordStatus};

use crate::{
    config::Config,
    cqrs::{
        CommandHandler,
        commands::{CompleteVoiceRecord, FailVoiceRecord},
    },
    uow::UnitOfWork,
};

async fn finish(
    uow: &Box<dyn UnitOfWork<'_> + '_>,
    id: Uuid,
    user_id: Uuid,
    status: VoiceRecordStatus,
    answer: String,
) -> Result<()> {
    let repo = uow.voice_records();
    let mut record = repo.get_for_user(id, user_id).await?;
    record.finish(status, answer, Utc::now());
    repo.save(&record).await
}

pub struct CompleteVoiceRecordCommandHandler {}

impl CompleteVoiceRecordCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<CompleteVoiceRecord> for CompleteVoiceRecordCommandHandler {
    async fn handle(
        &self,
        command: CompleteVoiceRecord,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<()> {
        finish(
            uow,
            command.id,
            command.user_id,
            VoiceRecordStatus::Completed,
            command.answer,
        )
        .await
    }
}

pub struct FailVoiceRecordCommandHandler {}

impl FailVoiceRecordCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<FailVoiceRecord> for FailVoiceRecordCommandHandler {
    async fn handle(
        &self,
        command: FailVoiceRecord,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<()> {
        tracing::warn!(record_id = %command.id, reason = %command.reason, "answer generation failed");
        finish(
            uow,
            command.id,
            command.user_id,
            VoiceRecordStatus::Failed,
            command.reason,
        )
        .await
    }
}
