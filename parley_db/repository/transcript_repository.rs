use sqlx::{Postgres, Transaction};
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

use parley_app::repository::TranscriptRepository;
use parley_types::{
    errors::{ApplicationError, DbError},
    pagination::{Page, PageRequest},
    transcripts::Transcript,
};

use crate::models as db_models;

const SELECT_TRANSCRIPTS: &str = r#"
    SELECT t.id, t.user_id, t.config_id, t.title, t.content, t.status, t.created_at,
           t.completed_at, c.name AS config_name, c.company, c.job_title
    FROM transcripts t
    LEFT JOIN interview_configs c ON c.id = t.config_id
"#;

#[derive(Clone)]
pub struct PostgresTranscriptRepository<'a> {
    tx: Arc<Mutex<Transaction<'a, Postgres>>>,
}

impl<'a> PostgresTranscriptRepository<'a> {
    pub fn new(tx: Arc<Mutex<Transaction<'a, Postgres>>>) -> Self {
        Self { tx }
    }
}

#[async_trait::async_trait]
impl<'a> TranscriptRepository for PostgresTranscriptRepository<'a> {
    async fn save(&self, transcript: &Transcript) -> Result<(), ApplicationError> {
        let mut tx_guard = self.tx.lock().await;

        sqlx::query(
            r#"
            INSERT INTO transcripts
                (id, user_id, config_id, title, content, status, created_at, completed_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (id) DO UPDATE
            SET
                title = EXCLUDED.title,
                content = EXCLUDED.content,
                status = EXCLUDED.status,
                completed_at = EXCLUDED.completed_at
            "#,
        )
        .bind(transcript.id)
        .bind(transcript.user_id)
        .bind(transcript.config_id)
        .bind(&transcript.title)
        .bind(&transcript.content)
        .bind(transcript.status.as_str())
        .bind(transcript.created_at)
        .bind(transcript.completed_at)
        .execute(&mut **tx_guard)
        .await
        .map_err(DbError::Database)?;

        Ok(())
    }

    async fn get_for_user(&self, id: Uuid, user_id: Uuid) -> Result<Transcript, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;
        let sql = format!("{SELECT_TRANSCRIPTS} WHERE t.id = $1 AND t.user_id = $2");

        let rec = sqlx::query_as::<_, db_models::Transcript>(&sql)
            .bind(id)
            .bind(user_id)
            .fetch_optional(&mut **tx_guard)
            .await
            .map_err(DbError::Database)?
            .ok_or(DbError::TranscriptNotFound(id))?;

        Ok(Transcript::try_from(rec)?)
    }

    async fn list_by_user_id(
        &self,
        user_id: Uuid,
        page: PageRequest,
    ) -> Result<Page<Transcript>, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM transcripts WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(&mut **tx_guard)
            .await
            .map_err(DbError::Database)?;

        let sql = format!(
            "{SELECT_TRANSCRIPTS} WHERE t.user_id = $1 ORDER BY t.created_at DESC LIMIT $2 OFFSET $3"
        );
        let rows = sqlx::query_as::<_, db_models::Transcript>(&sql)
            .bind(user_id)
            .bind(page.limit() as i64)
            .bind(page.offset() as i64)
            .fetch_all(&mut **tx_guard)
            .await
            .map_err(DbError::Database)?;

        let items = rows
            .into_iter()
            .map(Transcript::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::new(items, page, total.max(0) as u64))
    }

    async fn remove(&self, id: Uuid, user_id: Uuid) -> Result<(), ApplicationError> {
        let mut tx_guard = self.tx.lock().await;

        let res = sqlx::query("DELETE FROM transcripts WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&mut **tx_guard)
            .await
            .map_err(DbError::Database)?;

        if res.rows_affected() == 0 {
            return Err(DbError::TranscriptNotFound(id).into());
        }
        Ok(())
    }

    async fn remove_by_config_id(&self, config_id: Uuid) -> Result<(), ApplicationError> {
        let mut tx_guard = self.tx.lock().await;

        sqlx::query("DELETE FROM transcripts WHERE config_id = $1")
            .bind(config_id)
            .execute(&mut **tx_guard)
            .await
            .map_err(DbError::Database)?;

        Ok(())
    }
}
