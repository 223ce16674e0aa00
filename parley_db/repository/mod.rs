mod interview_config_repository;
mod transcript_repository;
mod user_repository;
mod voice_record_repository;

pub use interview_config_repository::PostgresInterviewConfigRepository;
pub use transcript_repository::PostgresTranscriptRepository;
pub use user_repository::PostgresUserRepository;
pub use voice_record_repository::PostgresVoiceRecordRepository;
