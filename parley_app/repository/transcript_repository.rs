use uuid::Uuid;

use parley_types::{
    errors::ApplicationError,
    pagination::{Page, PageRequest},
    transcripts::Transcript,
};

#[async_trait::async_trait]
pub trait TranscriptRepository: Send + Sync {
    /// Inserts or updates a transcript. The config-derived fields are ignored.
    async fn save(&self, transcript: &Transcript) -> Result<(), ApplicationError>;

    async fn get_for_user(&self, id: Uuid, user_id: Uuid) -> Result<Transcript, ApplicationError>;

    /// Lists the transcripts of a user, newest first.
    async fn list_by_user_id(
        &self,
        user_id: Uuid,
        page: PageRequest,
    ) -> Result<Page<Transcript>, ApplicationError>;

    async fn remove(&self, id: Uuid, user_id: Uuid) -> Result<(), ApplicationError>;

    async fn remove_by_config_id(&self, config_id: Uuid) -> Result<(), ApplicationError>;
}
