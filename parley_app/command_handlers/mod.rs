mod create_interview_config;
mod delete_interview_config;
mod delete_transcript;
mod finish_transcript;
mod finish_voice_record;
mod mark_voice_record_read;
mod register_user;
mod start_transcript;
mod start_voice_record;
mod update_interview_config;

pub use create_interview_config::CreateInterviewConfigCommandHandler;
pub use delete_interview_config::DeleteInterviewConfigCommandHandler;
pub use delete_transcript::DeleteTranscriptCommandHandler;
pub use finish_transcript::{CompleteTranscriptCommandHandler, FailTranscriptCommandHandler};
pub use finish_voice_record::{CompleteVoiceRecordCommandHandler, FailVoiceRecordCommandHandler};
pub use mark_voice_record_read::MarkVoiceRecordReadCommandHandler;
pub use register_user::RegisterUserCommandHandler;
pub use start_transcript::StartTranscriptCommandHandler;
pub use start_voice_record::StartVoiceRecordCommandHandler;
pub use update_interview_config::UpdateInterviewConfigCommandHandler;
