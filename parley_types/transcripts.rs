use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranscriptStatus {
    Generating,
    Completed,
    Failed,
}

impl TranscriptStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TranscriptStatus::Generating => "generating",
            TranscriptStatus::Completed => "completed",
            TranscriptStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for TranscriptStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TranscriptStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "generating" => Ok(TranscriptStatus::Generating),
            "completed" => Ok(TranscriptStatus::Completed),
            "failed" => Ok(TranscriptStatus::Failed),
            other => Err(format!("unknown transcript status '{other}'")),
        }
    }
}

/// A full mock-interview script generated from an interview config.
#[derive(Debug, Clone, Serialize)]
pub struct Transcript {
    pub id: Uuid,
    #[serde(skip)]
    pub user_id: Uuid,
    #[serde(skip)]
    pub config_id: Uuid,
    pub title: String,
    pub content: String,
    pub status: TranscriptStatus,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub config_name: Option<String>,
    pub company: Option<String>,
    pub job_title: Option<String>,
}
