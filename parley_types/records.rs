use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoiceRecordStatus {
    Generating,
    Completed,
    Interrupted,
    Failed,
}

impl VoiceRecordStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VoiceRecordStatus::Generating => "generating",
            VoiceRecordStatus::Completed => "completed",
            VoiceRecordStatus::Interrupted => "interrupted",
            VoiceRecordStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for VoiceRecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VoiceRecordStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "generating" => Ok(VoiceRecordStatus::Generating),
            "completed" => Ok(VoiceRecordStatus::Completed),
            "interrupted" => Ok(VoiceRecordStatus::Interrupted),
            "failed" => Ok(VoiceRecordStatus::Failed),
            other => Err(format!("unknown voice record status '{other}'")),
        }
    }
}

/// A question asked during an interview and the answer produced for it.
#[derive(Debug, Clone)]
pub struct VoiceRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub config_id: Option<Uuid>,
    /// Name of the linked interview config, resolved on read.
    pub config_name: Option<String>,
    pub question: Option<String>,
    pub answer: Option<String>,
    pub status: VoiceRecordStatus,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub is_read: bool,
}

impl VoiceRecord {
    pub fn new(
        id: Uuid,
        user_id: Uuid,
        config_id: Option<Uuid>,
        question: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            config_id,
            config_name: None,
            question,
            answer: None,
            status: VoiceRecordStatus::Generating,
            created_at,
            completed_at: None,
            is_read: false,
        }
    }

    pub fn finish(&mut self, status: VoiceRecordStatus, answer: String, at: DateTime<Utc>) {
        self.status = status;
        self.answer = Some(answer);
        self.completed_at = Some(at);
    }
}
