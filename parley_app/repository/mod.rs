mod interview_config_repository;
mod transcript_repository;
mod user_repository;
mod voice_record_repository;

pub use interview_config_repository::InterviewConfigRepository;
pub use transcript_repository::TranscriptRepository;
pub use user_repository::UserRepository;
pub use voice_record_repository::VoiceRecordRepository;
