use uuid::Uuid;

use parley_types::{common::User, errors::ApplicationError};

#[async_trait::async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts a new user. Fails with `DbError::UsernameTaken` on duplicates.
    async fn save(&self, user: &User) -> Result<(), ApplicationError>;

    async fn get_by_username(&self, username: &str) -> Result<User, ApplicationError>;

    async fn get_by_id(&self, id: Uuid) -> Result<User, ApplicationError>;
}
