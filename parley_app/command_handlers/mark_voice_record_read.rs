use std::sync::Arc;

use parley_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{CommandHandler, commands::MarkVoiceRecordRead},
    uow::UnitOfWork,
};

pub struct MarkVoiceRecordReadCommandHandler;

impl MarkVoiceRecordReadCommandHandler {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl CommandHandler<MarkVoiceRecordRead> for MarkVoiceRecordReadCommandHandler {
    async fn handle(
        &self,
        command: MarkVoiceRecordRead,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<(), ApplicationError> {
        uow.voice_records()
            .mark_as_read(command.id, command.user_id)
            .await
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use parley_types::{errors::DbError, records::VoiceRecord};

    use super::*;
    use crate::test_utils::tests::{MockUnitOfWork, test_config};

    #[tokio::test]
    async fn test_mark_voice_record_read() -> Result<(), ApplicationError> {
        let mock_uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(MockUnitOfWork::new());
        let config = test_config();
        let user_id = Uuid::new_v4();
        let record = VoiceRecord::new(Uuid::new_v4(), user_id, None, None, Utc::now());
        mock_uow.voice_records().save(&record).await?;
        assert_eq!(mock_uow.voice_records().count_unread(user_id).await?, 1);

        let handler = MarkVoiceRecordReadCommandHandler::new();
        let res = handler
            .handle(
                MarkVoiceRecordRead {
                    id: record.id,
                    user_id: Uuid::new_v4(),
                },
                &mock_uow,
                &config,
            )
            .await;
        assert!(matches!(
            res,
            Err(ApplicationError::Db(DbError::VoiceRecordNotFound(_)))
        ));

        handler
            .handle(
                MarkVoiceRecordRead {
                    id: record.id,
                    user_id,
                },
                &mock_uow,
                &config,
            )
            .await?;
        assert_eq!(mock_uow.voice_records().count_unread(user_id).await?, 0);

        Ok(())
    }
}
