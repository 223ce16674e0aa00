use sqlx::{Postgres, Transaction};
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

use parley_app::repository::VoiceRecordRepository;
use parley_types::{
    errors::{ApplicationError, DbError},
    pagination::{Page, PageRequest},
    records::{VoiceRecord, VoiceRecordStatus},
};

use crate::models as db_models;

const SELECT_RECORDS: &str = r#"
    SELECT r.id, r.user_id, r.config_id, c.name AS config_name, r.question, r.answer,
           r.status, r.created_at, r.completed_at, r.is_read
    FROM voice_records r
    LEFT JOIN interview_configs c ON c.id = r.config_id
"#;

#[derive(Clone)]
pub struct PostgresVoiceRecordRepository<'a> {
    tx: Arc<Mutex<Transaction<'a, Postgres>>>,
}

impl<'a> PostgresVoiceRecordRepository<'a> {
    pub fn new(tx: Arc<Mutex<Transaction<'a, Postgres>>>) -> Self {
        Self { tx }
    }
}

#[async_trait::async_trait]
impl<'a> VoiceRecordRepository for PostgresVoiceRecordRepository<'a> {
    async fn save(&self, record: &VoiceRecord) -> Result<(), ApplicationError> {
        let mut tx_guard = self.tx.lock().await;

        sqlx::query(
            r#"
            INSERT INTO voice_records
                (id, user_id, config_id, question, answer, status, created_at, completed_at, is_read)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT (id) DO UPDATE
            SET
                config_id = EXCLUDED.config_id,
                question = EXCLUDED.question,
                answer = EXCLUDED.answer,
                status = EXCLUDED.status,
                completed_at = EXCLUDED.completed_at,
                is_read = EXCLUDED.is_read
            "#,
        )
        .bind(record.id)
        .bind(record.user_id)
        .bind(record.config_id)
        .bind(&record.question)
        .bind(&record.answer)
        .bind(record.status.as_str())
        .bind(record.created_at)
        .bind(record.completed_at)
        .bind(record.is_read)
        .execute(&mut **tx_guard)
        .await
        .map_err(DbError::Database)?;

        Ok(())
    }

    async fn get_for_user(&self, id: Uuid, user_id: Uuid) -> Result<VoiceRecord, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;
        let sql = format!("{SELECT_RECORDS} WHERE r.id = $1 AND r.user_id = $2");

        let rec = sqlx::query_as::<_, db_models::VoiceRecord>(&sql)
            .bind(id)
            .bind(user_id)
            .fetch_optional(&mut **tx_guard)
            .await
            .map_err(DbError::Database)?
            .ok_or(DbError::VoiceRecordNotFound(id))?;

        Ok(VoiceRecord::try_from(rec)?)
    }

    async fn list_by_user_id(
        &self,
        user_id: Uuid,
        unread_only: bool,
        page: PageRequest,
    ) -> Result<Page<VoiceRecord>, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;

        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM voice_records WHERE user_id = $1 AND (NOT $2 OR NOT is_read)",
        )
        .bind(user_id)
        .bind(unread_only)
        .fetch_one(&mut **tx_guard)
        .await
        .map_err(DbError::Database)?;

        let sql = format!(
            "{SELECT_RECORDS} WHERE r.user_id = $1 AND (NOT $2 OR NOT r.is_read)
             ORDER BY r.created_at DESC LIMIT $3 OFFSET $4"
        );
        let rows = sqlx::query_as::<_, db_models::VoiceRecord>(&sql)
            .bind(user_id)
            .bind(unread_only)
            .bind(page.limit() as i64)
            .bind(page.offset() as i64)
            .fetch_all(&mut **tx_guard)
            .await
            .map_err(DbError::Database)?;

        let items = rows
            .into_iter()
            .map(VoiceRecord::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::new(items, page, total.max(0) as u64))
    }

    async fn count_unread(&self, user_id: Uuid) -> Result<u64, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;

        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM voice_records WHERE user_id = $1 AND NOT is_read",
        )
        .bind(user_id)
        .fetch_one(&mut **tx_guard)
        .await
        .map_err(DbError::Database)?;

        Ok(count.max(0) as u64)
    }

    async fn mark_as_read(&self, id: Uuid, user_id: Uuid) -> Result<(), ApplicationError> {
        let mut tx_guard = self.tx.lock().await;

        let res = sqlx::query("UPDATE voice_records SET is_read = TRUE WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&mut **tx_guard)
            .await
            .map_err(DbError::Database)?;

        if res.rows_affected() == 0 {
            return Err(DbError::VoiceRecordNotFound(id).into());
        }
        Ok(())
    }

    async fn interrupt_generating(&self, user_id: Uuid) -> Result<u64, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;

        let res = sqlx::query("UPDATE voice_records SET status = $1 WHERE user_id = $2 AND status = $3")
            .bind(VoiceRecordStatus::Interrupted.as_str())
            .bind(user_id)
            .bind(VoiceRecordStatus::Generating.as_str())
            .execute(&mut **tx_guard)
            .await
            .map_err(DbError::Database)?;

        Ok(res.rows_affected())
    }

    async fn detach_config(&self, config_id: Uuid) -> Result<(), ApplicationError> {
        let mut tx_guard = self.tx.lock().await;

        sqlx::query("UPDATE voice_records SET config_id = NULL WHERE config_id = $1")
            .bind(config_id)
            .execute(&mut **tx_guard)
            .await
            .map_err(DbError::Database)?;

        Ok(())
    }
}
