use sqlx::{Postgres, Transaction};
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

use parley_app::repository::InterviewConfigRepository;
use parley_types::errors::{ApplicationError, DbError};
use parley_types::interview::InterviewConfig;

use crate::models as db_models;

const COLUMNS: &str = "id, user_id, name, candidate_name, position, company, job_title, \
                       resume, detailed_experience, job_description, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresInterviewConfigRepository<'a> {
    tx: Arc<Mutex<Transaction<'a, Postgres>>>,
}

impl<'a> PostgresInterviewConfigRepository<'a> {
    pub fn new(tx: Arc<Mutex<Transaction<'a, Postgres>>>) -> Self {
        Self { tx }
    }
}

#[async_trait::async_trait]
impl<'a> InterviewConfigRepository for PostgresInterviewConfigRepository<'a> {
    async fn save(&self, config: &InterviewConfig) -> Result<(), ApplicationError> {
        let mut tx_guard = self.tx.lock().await;

        sqlx::query(
            r#"
            INSERT INTO interview_configs
                (id, user_id, name, candidate_name, position, company, job_title,
                 resume, detailed_experience, job_description, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            ON CONFLICT (id) DO UPDATE
            SET
                name = EXCLUDED.name,
                candidate_name = EXCLUDED.candidate_name,
                position = EXCLUDED.position,
                company = EXCLUDED.company,
                job_title = EXCLUDED.job_title,
                resume = EXCLUDED.resume,
                detailed_experience = EXCLUDED.detailed_experience,
                job_description = EXCLUDED.job_description,
                updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(config.id)
        .bind(config.user_id)
        .bind(&config.name)
        .bind(&config.candidate_name)
        .bind(&config.position)
        .bind(&config.company)
        .bind(&config.job_title)
        .bind(&config.resume)
        .bind(&config.detailed_experience)
        .bind(&config.job_description)
        .bind(config.created_at)
        .bind(config.updated_at)
        .execute(&mut **tx_guard)
        .await
        .map_err(DbError::Database)?;

        Ok(())
    }

    async fn get_for_user(
        &self,
        id: Uuid,
        user_id: Uuid,
    ) -> Result<InterviewConfig, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;
        let sql = format!("SELECT {COLUMNS} FROM interview_configs WHERE id = $1 AND user_id = $2");

        let rec = sqlx::query_as::<_, db_models::InterviewConfig>(&sql)
            .bind(id)
            .bind(user_id)
            .fetch_optional(&mut **tx_guard)
            .await
            .map_err(DbError::Database)?
            .ok_or(DbError::InterviewConfigNotFound(id))?;

        Ok(rec.into())
    }

    async fn list_by_user_id(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<InterviewConfig>, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;
        let sql = format!(
            "SELECT {COLUMNS} FROM interview_configs WHERE user_id = $1 ORDER BY updated_at DESC"
        );

        let rows = sqlx::query_as::<_, db_models::InterviewConfig>(&sql)
            .bind(user_id)
            .fetch_all(&mut **tx_guard)
            .await
            .map_err(DbError::Database)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn remove(&self, id: Uuid, user_id: Uuid) -> Result<(), ApplicationError> {
        let mut tx_guard = self.tx.lock().await;

        let res = sqlx::query("DELETE FROM interview_configs WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&mut **tx_guard)
            .await
            .map_err(DbError::Database)?;

        if res.rows_affected() == 0 {
            return Err(DbError::InterviewConfigNotFound(id).into());
        }
        Ok(())
    }
}
