use uuid::Uuid;

use parley_types::{errors::ApplicationError, interview::InterviewConfig};

#[async_trait::async_trait]
pub trait InterviewConfigRepository: Send + Sync {
    /// Inserts or updates a config.
    async fn save(&self, config: &InterviewConfig) -> Result<(), ApplicationError>;

    /// Fetches a config owned by `user_id`.
    async fn get_for_user(&self, id: Uuid, user_id: Uuid)
    -> Result<InterviewConfig, ApplicationError>;

    /// Lists the configs of a user, most recently updated first.
    async fn list_by_user_id(&self, user_id: Uuid)
    -> Result<Vec<InterviewConfig>, ApplicationError>;

    async fn remove(&self, id: Uuid, user_id: Uuid) -> Result<(), ApplicationError>;
}
