use parley_types::{
    common::User, errors::DbError, interview::InterviewConfig, records::VoiceRecord,
    transcripts::Transcript,
};

use crate::models as db_models;

fn decode_error(msg: String) -> DbError {
    DbError::Database(sqlx::Error::Decode(msg.into()))
}

impl From<db_models::User> for User {
    fn from(user: db_models::User) -> Self {
        User::new(user.id, user.username, user.password_hash, user.created_at)
    }
}

impl From<db_models::InterviewConfig> for InterviewConfig {
    fn from(c: db_models::InterviewConfig) -> Self {
        InterviewConfig {
            id: c.id,
            user_id: c.user_id,
            name: c.name,
            candidate_name: c.candidate_name,
            position: c.position,
            company: c.company,
            job_title: c.job_title,
            resume: c.resume,
            detailed_experience: c.detailed_experience,
            job_description: c.job_description,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

impl TryFrom<db_models::VoiceRecord> for VoiceRecord {
    type Error = DbError;

    fn try_from(r: db_models::VoiceRecord) -> Result<Self, Self::Error> {
        Ok(VoiceRecord {
            id: r.id,
            user_id: r.user_id,
            config_id: r.config_id,
            config_name: r.config_name,
            question: r.question,
            answer: r.answer,
            status: r.status.parse().map_err(decode_error)?,
            created_at: r.created_at,
            completed_at: r.completed_at,
            is_read: r.is_read,
        })
    }
}

impl TryFrom<db_models::Transcript> for Transcript {
    type Error = DbError;

    fn try_from(t: db_models::Transcript) -> Result<Self, Self::Error> {
        Ok(Transcript {
            id: t.id,
            user_id: t.user_id,
            config_id: t.config_id,
            title: t.title,
            content: t.content,
            status: t.status.parse().map_err(decode_error)?,
            created_at: t.created_at,
            completed_at: t.completed_at,
            config_name: t.config_name,
            company: t.company,
            job_title: t.job_title,
        })
    }
}
