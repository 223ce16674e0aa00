use uuid::Uuid;

use parley_types::interview::InterviewConfigChanges;

use crate::cqrs::Command;

/// Creates a new account.
#[derive(Debug, Clone)]
pub struct RegisterUser {
    pub id: Uuid,
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterUser {
    pub fn new(username: String, password: String, confirm_password: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
            password,
            confirm_password,
        }
    }
}

impl Command for RegisterUser {}

#[derive(Debug, Clone)]
pub struct CreateInterviewConfig {
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
}

impl Command for CreateInterviewConfig {}

#[derive(Debug, Clone)]
pub struct UpdateInterviewConfig {
    pub id: Uuid,
    pub user_id: Uuid,
    pub changes: InterviewConfigChanges,
}

impl Command for UpdateInterviewConfig {}

#[derive(Debug, Clone)]
pub struct DeleteInterviewConfig {
    pub id: Uuid,
    pub user_id: Uuid,
}

impl Command for DeleteInterviewConfig {}

/// Opens a new answer record for a question being processed.
#[derive(Debug, Clone)]
pub struct StartVoiceRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub config_id: Option<Uuid>,
    pub question: Option<String>,
}

impl StartVoiceRecord {
    pub fn new(user_id: Uuid, config_id: Option<Uuid>, question: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            config_id,
            question,
        }
    }
}

impl Command for StartVoiceRecord {}

#[derive(Debug, Clone)]
pub struct CompleteVoiceRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub answer: String,
}

impl Command for CompleteVoiceRecord {}

#[derive(Debug, Clone)]
pub struct FailVoiceRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub reason: String,
}

impl Command for FailVoiceRecord {}

#[derive(Debug, Clone)]
pub struct MarkVoiceRecordRead {
    pub id: Uuid,
    pub user_id: Uuid,
}

impl Command for MarkVoiceRecordRead {}

/// Opens a new transcript generated from an interview config.
#[derive(Debug, Clone)]
pub struct StartTranscript {
    pub id: Uuid,
    pub user_id: Uuid,
    pub config_id: Uuid,
}

impl StartTranscript {
    pub fn new(user_id: Uuid, config_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            config_id,
        }
    }
}

impl Command for StartTranscript {}

#[derive(Debug, Clone)]
pub struct CompleteTranscript {
    pub id: Uuid,
    pub user_id: Uuid,
    pub content: String,
}

impl Command for CompleteTranscript {}

#[derive(Debug, Clone)]
pub struct FailTranscript {
    pub id: Uuid,
    pub user_id: Uuid,
    pub reason: String,
}

impl Command for FailTranscript {}

#[derive(Debug, Clone)]
pub struct DeleteTranscript {
    pub id: Uuid,
    pub user_id: Uuid,
}

impl Command for DeleteTranscript {}
