mod authenticate_user;
mod count_unread_voice_records;
mod get_interview_config;
mod get_transcript;
mod get_user_by_id;
mod get_user_by_username;
mod get_voice_record;
mod list_interview_configs;
mod list_transcripts;
mod list_voice_records;

pub use authenticate_user::AuthenticateUserHandler;
pub use count_unread_voice_records::CountUnreadVoiceRecordsHandler;
pub use get_interview_config::GetInterviewConfigHandler;
pub use get_transcript::GetTranscriptHandler;
pub use get_user_by_id::GetUserByIdHandler;
pub use get_user_by_username::GetUserByUsernameHandler;
pub use get_voice_record::GetVoiceRecordHandler;
pub use list_interview_configs::ListInterviewConfigsHandler;
pub use list_transcripts::ListTranscriptsHandler;
pub use list_voice_records::ListVoiceRecordsHandler;
