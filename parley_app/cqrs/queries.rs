use uuid::Uuid;

use parley_types::{
    common::User,
    interview::InterviewConfig,
    pagination::{Page, PageRequest},
    records::VoiceRecord,
    transcripts::Transcript,
};

use crate::cqrs::Query;

/// Checks if a user is authenticated with username and password.
pub struct AuthenticateUser {
    pub username: String,
    pub password: String,
}

impl Query for AuthenticateUser {
    type Output = User;
}

/// Fetch a user by username without checking password.
pub struct GetUserByUsername {
    pub username: String,
}

impl Query for GetUserByUsername {
    type Output = User;
}

/// Fetch a user by id (for authenticated sessions).
pub struct GetUserById {
    pub id: Uuid,
}

impl Query for GetUserById {
    type Output = User;
}

pub struct ListInterviewConfigs {
    pub user_id: Uuid,
}

impl Query for ListInterviewConfigs {
    type Output = Vec<InterviewConfig>;
}

pub struct GetInterviewConfig {
    pub id: Uuid,
    pub user_id: Uuid,
}

impl Query for GetInterviewConfig {
    type Output = InterviewConfig;
}

pub struct ListVoiceRecords {
    pub user_id: Uuid,
    pub unread_only: bool,
    pub page: PageRequest,
}

impl Query for ListVoiceRecords {
    type Output = Page<VoiceRecord>;
}

pub struct GetVoiceRecord {
    pub id: Uuid,
    pub user_id: Uuid,
}

impl Query for GetVoiceRecord {
    type Output = VoiceRecord;
}

pub struct CountUnreadVoiceRecords {
    pub user_id: Uuid,
}

impl Query for CountUnreadVoiceRecords {
    type Output = u64;
}

pub struct ListTranscripts {
    pub user_id: Uuid,
    pub page: PageRequest,
}

impl Query for ListTranscripts {
    type Output = Page<Transcript>;
}

pub struct GetTranscript {
    pub id: Uuid,
    pub user_id: Uuid,
}

impl Query for GetTranscript {
    type Output = Transcript;
}
