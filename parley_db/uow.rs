use sqlx::{PgPool, Postgres, Transaction};
use std::sync::Arc;
use tokio::sync::Mutex;

use parley_app::{
    repository::*,
    uow::{UnitOfWork, UnitOfWorkProvider},
};
use parley_types::errors::{ApplicationError, DbError};

use crate::repository::*;

#[derive(Debug, Clone)]
pub struct PostgresUnitOfWorkProvider {
    pool: PgPool,
}

impl PostgresUnitOfWorkProvider {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl UnitOfWorkProvider for PostgresUnitOfWorkProvider {
    async fn begin<'p>(&'p self) -> Result<Box<dyn UnitOfWork<'p> + 'p>, ApplicationError> {
        let tx = self.pool.begin().await.map_err(DbError::Database)?;

        Ok(Box::new(PostgresUnitOfWork {
            tx: Arc::new(Mutex::new(tx)),
        }))
    }
}

#[derive(Debug, Clone)]
pub struct PostgresUnitOfWork<'a> {
    tx: Arc<Mutex<Transaction<'a, Postgres>>>,
}

impl<'a> PostgresUnitOfWork<'a> {
    fn into_transaction(self) -> Result<Transaction<'a, Postgres>, ApplicationError> {
        // Repositories handed out by this unit of work must be dropped by now.
        Arc::try_unwrap(self.tx)
            .map(Mutex::into_inner)
            .map_err(|_| {
                DbError::Transaction("transaction still has multiple owners".to_string()).into()
            })
    }
}

#[async_trait::async_trait]
impl<'a> UnitOfWork<'a> for PostgresUnitOfWork<'a> {
    fn users(&self) -> Arc<dyn UserRepository + 'a> {
        Arc::new(PostgresUserRepository::new(self.tx.clone()))
    }

    fn interview_configs(&self) -> Arc<dyn InterviewConfigRepository + 'a> {
        Arc::new(PostgresInterviewConfigRepository::new(self.tx.clone()))
    }

    fn voice_records(&self) -> Arc<dyn VoiceRecordRepository + 'a> {
        Arc::new(PostgresVoiceRecordRepository::new(self.tx.clone()))
    }

    fn transcripts(&self) -> Arc<dyn TranscriptRepository + 'a> {
        Arc::new(PostgresTranscriptRepository::new(self.tx.clone()))
    }

    async fn commit(self: Box<Self>) -> Result<(), ApplicationError> {
        self.into_transaction()?
            .commit()
            .await
            .map_err(DbError::Database)?;
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> Result<(), ApplicationError> {
        // A transaction still shared is rolled back on drop anyway.
        if let Ok(tx) = self.into_transaction() {
            tx.rollback().await.map_err(DbError::Database)?;
        }
        Ok(())
    }
}
