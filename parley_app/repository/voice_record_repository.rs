use uuid::Uuid;

use parley_types::{
    errors::ApplicationError,
    pagination::{Page, PageRequest},
    records::VoiceRecord,
};

#[async_trait::async_trait]
pub trait VoiceRecordRepository: Send + Sync {
    /// Inserts or updates a record. `config_name` is ignored.
    async fn save(&self, record: &VoiceRecord) -> Result<(), ApplicationError>;

    async fn get_for_user(&self, id: Uuid, user_id: Uuid) -> Result<VoiceRecord, ApplicationError>;

    /// Lists the records of a user, newest first.
    async fn list_by_user_id(
        &self,
        user_id: Uuid,
        unread_only: bool,
        page: PageRequest,
    ) -> Result<Page<VoiceRecord>, ApplicationError>;

    async fn count_unread(&self, user_id: Uuid) -> Result<u64, ApplicationError>;

    async fn mark_as_read(&self, id: Uuid, user_id: Uuid) -> Result<(), ApplicationError>;

    /// Flags every record of the user still generating as interrupted.
    /// Returns how many records were touched.
    async fn interrupt_generating(&self, user_id: Uuid) -> Result<u64, ApplicationError>;

    /// Unlinks all records from a config that is going away.
    async fn detach_config(&self, config_id: Uuid) -> Result<(), ApplicationError>;
}
