//! Persistence side of answer generation: the worker that produces an answer
//! opens the record here. No HTTP route starts one.

use chrono::Utc;
use std::sync::Arc;

use parley_types::{Result, records::VoiceRecord};

use crate::{
    config::Config,
    cqrs::{CommandHandler, commands::StartVoiceRecord},
    uow::UnitOfWork,
};

/// Opens a new answer record. Any answer of the same user still being
/// generated is superseded and flagged as interrupted.
pub struct StartVoiceRecordCommandHandler {}

impl StartVoiceRecordCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<StartVoiceRecord> for StartVoiceRecordCommandHandler {
    async fn handle(
        &self,
        command: StartVoiceRecord,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<()> {
        if let Some(config_id) = command.config_id {
            uow.interview_configs()
                .get_for_user(config_id, command.user_id)
                .await?;
        }

        let records = uow.voice_records();
        let interrupted = records.interrupt_generating(command.user_id).await?;
        if interrupted > 0 {
            tracing::debug!(
                user_id = %command.user_id,
                interrupted,
                "superseded answers still being generated"
            );
        }

        let record = VoiceRecord::new(
            command.id,
            command.user_id,
            command.config_id,
            command.question,
            Utc::now(),
        );
        records.save(&record).await
    }
}
