use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;

/// The candidate profile an interview session is prepared against.
#[derive(Debug, Clone, Serialize)]
pub struct InterviewConfig {
    pub id: Uuid,
    #[serde(skip)]
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

/// Partial update of an interview config. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InterviewConfigChanges {
    pub name: Option<String>,
    pub candidate_name: Option<String>,
    pub position: Option<String>,
    pub company: Option<String>,
    pub job_title: Option<String>,
    pub resume: Option<String>,
    pub detailed_experience: Option<String>,
    pub job_description: Option<String>,
}

impl InterviewConfig {
    /// Fails with the first required field that is blank.
    pub fn ensure_required_fields(&self) -> Result<(), AppError> {
        let required = [
            ("name", &self.name),
            ("candidate_name", &self.candidate_name),
            ("position", &self.position),
            ("company", &self.company),
            ("job_title", &self.job_title),
        ];
        match required.into_iter().find(|(_, v)| v.trim().is_empty()) {
            Some((field, _)) => Err(AppError::MissingField(field)),
            None => Ok(()),
        }
    }

    pub fn apply(&mut self, changes: InterviewConfigChanges, now: DateTime<Utc>) {
        let InterviewConfigChanges {
            name,
            candidate_name,
            position,
            company,
            job_title,
            resume,
            detailed_experience,
            job_description,
        } = changes;

        if let Some(v) = name {
            self.name = v;
        }
        if let Some(v) = candidate_name {
            self.candidate_name = v;
        }
        if let Some(v) = position {
            self.position = v;
        }
        if let Some(v) = company {
            self.company = v;
        }
        if let Some(v) = job_title {
            self.job_title = v;
        }
        if let Some(v) = resume {
            self.resume = v;
        }
        if let Some(v) = detailed_experience {
            self.detailed_experience = v;
        }
        if let Some(v) = job_description {
            self.job_description = v;
        }
        self.updated_at = now;
    }
}
