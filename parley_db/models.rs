use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, FromRow, Clone)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, FromRow, Clone)]
pub struct InterviewConfig {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub candidate_name: String,
    pub position: String,
    pub company: String,
    pub job_title: String,
    pub resume: String,
    pub detailed_experience: String,
    pub job_description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, FromRow, Clone)]
pub struct VoiceRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub config_id: Option<Uuid>,
    pub config_name: Option<String>,
    pub question: Option<String>,
    pub answer: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub is_read: bool,
}

#[derive(Debug, FromRow, Clone)]
pub struct Transcript {
    pub id: Uuid,
    pub user_id: Uuid,
    pub config_id: Uuid,
    pub title: String,
    pub content: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub config_name: Option<String>,
    pub company: Option<String>,
    pub job_title: Option<String>,
}
