use chrono::Utc;
use std::sync::Arc;

use parley_types::{
    Result,
    common::{MIN_PASSWORD_LENGTH, User},
    errors::AppError,
};

use crate::{
    auth::hash_password,
    config::Config,
    cqrs::{CommandHandler, commands::RegisterUser},
    uow::UnitOfWork,
};

pub struct RegisterUserCommandHandler {}

impl Default for RegisterUserCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterUserCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<RegisterUser> for RegisterUserCommandHandler {
    async fn handle(
        &self,
        command: RegisterUser,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<()> {
        let username = command.username.trim();

        if username.is_empty() || command.password.is_empty() {
            return Err(AppError::MissingCredentials.into());
        }
        if command.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AppError::PasswordTooShort {
                min: MIN_PASSWORD_LENGTH,
            }
            .into());
        }
        if command.password != command.confirm_password {
            return Err(AppError::PasswordMismatch.into());
        }

        let password_hash = hash_password(&command.password)?;
        let user = User::new(command.id, username.to_string(), password_hash, Utc::now());
        uow.users().save(&user).await?;

        tracing::info!(user_id = %user.id, username = %user.username, "registered new user");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use parley_types::errors::{ApplicationError, DbError};

    use super::*;
    use crate::{
        auth::verify_password,
        test_utils::tests::{MockUnitOfWork, test_config},
    };

    fn command(username: &str, password: &str, confirm: &str) -> RegisterUser {
        RegisterUser::new(
            username.to_string(),
            password.to_string(),
            confirm.to_string(),
        )
    }

    #[tokio::test]
    async fn test_register_user_handler_success() -> Result<()> {
        let mock_uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(MockUnitOfWork::new());
        let config = test_config();
        let handler = RegisterUserCommandHandler::new();

        let cmd = command("  alice ", "secret1", "secret1");
        handler.handle(cmd.clone(), &mock_uow, &config).await?;

        let saved = mock_uow.users().get_by_username("alice").await?;
        assert_eq!(saved.id, cmd.id);
        assert_ne!(saved.password_hash(), "secret1");
        verify_password(saved.password_hash(), "secret1")?;

        Ok(())
    }

    #[tokio::test]
    async fn test_register_user_rejects_invalid_input() {
        let mock_uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(MockUnitOfWork::new());
        let config = test_config();
        let handler = RegisterUserCommandHandler::new();

        let res = handler
            .handle(command("   ", "secret1", "secret1"), &mock_uow, &config)
            .await;
        assert!(matches!(
            res,
            Err(ApplicationError::App(AppError::MissingCredentials))
        ));

        let res = handler
            .handle(command("bob", "", ""), &mock_uow, &config)
            .await;
        assert!(matches!(
            res,
            Err(ApplicationError::App(AppError::MissingCredentials))
        ));

        let res = handler
            .handle(command("bob", "12345", "12345"), &mock_uow, &config)
            .await;
        assert!(matches!(
            res,
            Err(ApplicationError::App(AppError::PasswordTooShort { min: 6 }))
        ));

        let res = handler
            .handle(command("bob", "secret1", "secret2"), &mock_uow, &config)
            .await;
        assert!(matches!(
            res,
            Err(ApplicationError::App(AppError::PasswordMismatch))
        ));

        assert!(mock_uow.users().get_by_username("bob").await.is_err());
    }

    #[tokio::test]
    async fn test_register_user_duplicate_username() -> Result<()> {
        let mock_uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(MockUnitOfWork::new());
        let config = test_config();
        let handler = RegisterUserCommandHandler::new();

        handler
            .handle(command("carol", "secret1", "secret1"), &mock_uow, &config)
            .await?;
        let res = handler
            .handle(command("carol", "other-secret", "other-secret"), &mock_uow, &config)
            .await;

        assert!(matches!(
            res,
            Err(ApplicationError::Db(DbError::UsernameTaken(ref name))) if name == "carol"
        ));
        Ok(())
    }
}
