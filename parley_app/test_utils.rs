#[cfg(not(tarpaulin_include))]
pub mod tests {
    use async_trait::async_trait;
    use std::{
        collections::HashMap,
        sync::{Arc, Mutex},
    };
    use uuid::Uuid;

    use parley_types::{
        common::User,
        errors::{ApplicationError, DbError},
        interview::InterviewConfig,
        pagination::{Page, PageRequest},
        records::{VoiceRecord, VoiceRecordStatus},
        transcripts::Transcript,
    };

    use crate::{
        config::{Config, MIN_COOKIE_SECRET_LEN},
        repository::{
            InterviewConfigRepository, TranscriptRepository, UserRepository,
            VoiceRecordRepository,
        },
        uow::{UnitOfWork, UnitOfWorkProvider},
    };

    /// Config suitable for tests: a valid cookie secret and default knobs.
    pub fn test_config() -> Arc<Config> {
        let secret = "parley-test-secret-".repeat(MIN_COOKIE_SECRET_LEN / 10);
        Arc::new(
            Config::new(secret, 0, "en".to_string(), 10).expect("test config should be valid"),
        )
    }

    /// In-memory tables shared by all the mock repositories of a provider.
    #[derive(Default)]
    pub struct MockStore {
        users: HashMap<Uuid, User>,
        configs: HashMap<Uuid, InterviewConfig>,
        records: HashMap<Uuid, VoiceRecord>,
        transcripts: HashMap<Uuid, Transcript>,
    }

    type SharedStore = Arc<Mutex<MockStore>>;

    #[derive(Default, Clone)]
    pub struct MockUserRepository {
        store: SharedStore,
    }

    #[async_trait]
    impl UserRepository for MockUserRepository {
        async fn save(&self, user: &User) -> Result<(), ApplicationError> {
            let mut store = self.store.lock().unwrap();
            if store
                .users
                .values()
                .any(|u| u.username == user.username && u.id != user.id)
            {
                return Err(ApplicationError::Db(DbError::UsernameTaken(
                    user.username.clone(),
                )));
            }
            store.users.insert(user.id, user.clone());
            Ok(())
        }

        async fn get_by_username(&self, username: &str) -> Result<User, ApplicationError> {
            let store = self.store.lock().unwrap();
            store
                .users
                .values()
                .find(|u| u.username == username)
                .cloned()
                .ok_or_else(|| {
                    ApplicationError::Db(DbError::UserByUsernameNotFound(username.to_string()))
                })
        }

        async fn get_by_id(&self, id: Uuid) -> Result<User, ApplicationError> {
            let store = self.store.lock().unwrap();
            store
                .users
                .get(&id)
                .cloned()
                .ok_or_else(|| ApplicationError::Db(DbError::UserByIdNotFound(id)))
        }
    }

    #[derive(Default, Clone)]
    pub struct MockInterviewConfigRepository {
        store: SharedStore,
    }

    #[async_trait]
    impl InterviewConfigRepository for MockInterviewConfigRepository {
        async fn save(&self, config: &InterviewConfig) -> Result<(), ApplicationError> {
            self.store
                .lock()
                .unwrap()
                .configs
                .insert(config.id, config.clone());
            Ok(())
        }

        async fn get_for_user(
            &self,
            id: Uuid,
            user_id: Uuid,
        ) -> Result<InterviewConfig, ApplicationError> {
            let store = self.store.lock().unwrap();
            store
                .configs
                .get(&id)
                .filter(|c| c.user_id == user_id)
                .cloned()
                .ok_or_else(|| ApplicationError::Db(DbError::InterviewConfigNotFound(id)))
        }

        async fn list_by_user_id(
            &self,
            user_id: Uuid,
        ) -> Result<Vec<InterviewConfig>, ApplicationError> {
            let store = self.store.lock().unwrap();
            let mut configs: Vec<InterviewConfig> = store
                .configs
                .values()
                .filter(|c| c.user_id == user_id)
                .cloned()
                .collect();
            configs.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
            Ok(configs)
        }

        async fn remove(&self, id: Uuid, user_id: Uuid) -> Result<(), ApplicationError> {
            let mut store = self.store.lock().unwrap();
            match store.configs.get(&id) {
                Some(c) if c.user_id == user_id => {
                    store.configs.remove(&id);
                    Ok(())
                }
                _ => Err(ApplicationError::Db(DbError::InterviewConfigNotFound(id))),
            }
        }
    }

    #[derive(Default, Clone)]
    pub struct MockVoiceRecordRepository {
        store: SharedStore,
    }

    impl MockVoiceRecordRepository {
        fn with_config_name(store: &MockStore, mut record: VoiceRecord) -> VoiceRecord {
            record.config_name = record
                .config_id
                .and_then(|id| store.configs.get(&id))
                .map(|c| c.name.clone());
            record
        }
    }

    #[async_trait]
    impl VoiceRecordRepository for MockVoiceRecordRepository {
        async fn save(&self, record: &VoiceRecord) -> Result<(), ApplicationError> {
            self.store
                .lock()
                .unwrap()
                .records
                .insert(record.id, record.clone());
            Ok(())
        }

        async fn get_for_user(
            &self,
            id: Uuid,
            user_id: Uuid,
        ) -> Result<VoiceRecord, ApplicationError> {
            let store = self.store.lock().unwrap();
            let record = store
                .records
                .get(&id)
                .filter(|r| r.user_id == user_id)
                .cloned()
                .ok_or_else(|| ApplicationError::Db(DbError::VoiceRecordNotFound(id)))?;
            Ok(Self::with_config_name(&store, record))
        }

        async fn list_by_user_id(
            &self,
            user_id: Uuid,
            unread_only: bool,
            page: PageRequest,
        ) -> Result<Page<VoiceRecord>, ApplicationError> {
            let store = self.store.lock().unwrap();
            let mut records: Vec<VoiceRecord> = store
                .records
                .values()
                .filter(|r| r.user_id == user_id && (!unread_only || !r.is_read))
                .cloned()
                .map(|r| Self::with_config_name(&store, r))
                .collect();
            records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            Ok(Page::from_ordered(records, page))
        }

        async fn count_unread(&self, user_id: Uuid) -> Result<u64, ApplicationError> {
            let store = self.store.lock().unwrap();
            Ok(store
                .records
                .values()
                .filter(|r| r.user_id == user_id && !r.is_read)
                .count() as u64)
        }

        async fn mark_as_read(&self, id: Uuid, user_id: Uuid) -> Result<(), ApplicationError> {
            let mut store = self.store.lock().unwrap();
            match store.records.get_mut(&id) {
                Some(r) if r.user_id == user_id => {
                    r.is_read = true;
                    Ok(())
                }
                _ => Err(ApplicationError::Db(DbError::VoiceRecordNotFound(id))),
            }
        }

        async fn interrupt_generating(&self, user_id: Uuid) -> Result<u64, ApplicationError> {
            let mut store = self.store.lock().unwrap();
            let mut touched = 0;
            for record in store.records.values_mut() {
                if record.user_id == user_id && record.status == VoiceRecordStatus::Generating {
                    record.status = VoiceRecordStatus::Interrupted;
                    touched += 1;
                }
            }
            Ok(touched)
        }

        async fn detach_config(&self, config_id: Uuid) -> Result<(), ApplicationError> {
            let mut store = self.store.lock().unwrap();
            for record in store.records.values_mut() {
                if record.config_id == Some(config_id) {
                    record.config_id = None;
                }
            }
            Ok(())
        }
    }

    #[derive(Default, Clone)]
    pub struct MockTranscriptRepository {
        store: SharedStore,
    }

    impl MockTranscriptRepository {
        fn with_config(store: &MockStore, mut transcript: Transcript) -> Transcript {
            if let Some(config) = store.configs.get(&transcript.config_id) {
                transcript.config_name = Some(config.name.clone());
                transcript.company = Some(config.company.clone());
                transcript.job_title = Some(config.job_title.clone());
            }
            transcript
        }
    }

    #[async_trait]
    impl TranscriptRepository for MockTranscriptRepository {
        async fn save(&self, transcript: &Transcript) -> Result<(), ApplicationError> {
            self.store
                .lock()
                .unwrap()
                .transcripts
                .insert(transcript.id, transcript.clone());
            Ok(())
        }

        async fn get_for_user(
            &self,
            id: Uuid,
            user_id: Uuid,
        ) -> Result<Transcript, ApplicationError> {
            let store = self.store.lock().unwrap();
            let transcript = store
                .transcripts
                .get(&id)
                .filter(|t| t.user_id == user_id)
                .cloned()
                .ok_or_else(|| ApplicationError::Db(DbError::TranscriptNotFound(id)))?;
            Ok(Self::with_config(&store, transcript))
        }

        async fn list_by_user_id(
            &self,
            user_id: Uuid,
            page: PageRequest,
        ) -> Result<Page<Transcript>, ApplicationError> {
            let store = self.store.lock().unwrap();
            let mut transcripts: Vec<Transcript> = store
                .transcripts
                .values()
                .filter(|t| t.user_id == user_id)
                .cloned()
                .map(|t| Self::with_config(&store, t))
                .collect();
            transcripts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            Ok(Page::from_ordered(transcripts, page))
        }

        async fn remove(&self, id: Uuid, user_id: Uuid) -> Result<(), ApplicationError> {
            let mut store = self.store.lock().unwrap();
            match store.transcripts.get(&id) {
                Some(t) if t.user_id == user_id => {
                    store.transcripts.remove(&id);
                    Ok(())
                }
                _ => Err(ApplicationError::Db(DbError::TranscriptNotFound(id))),
            }
        }

        async fn remove_by_config_id(&self, config_id: Uuid) -> Result<(), ApplicationError> {
            self.store
                .lock()
                .unwrap()
                .transcripts
                .retain(|_, t| t.config_id != config_id);
            Ok(())
        }
    }

    /// Unit of work over the in-memory store. Writes are applied immediately,
    /// so commit and rollback are no-ops.
    #[derive(Default, Clone)]
    pub struct MockUnitOfWork {
        users: Arc<MockUserRepository>,
        interview_configs: Arc<MockInterviewConfigRepository>,
        voice_records: Arc<MockVoiceRecordRepository>,
        transcripts: Arc<MockTranscriptRepository>,
    }

    impl MockUnitOfWork {
        pub fn new() -> Self {
            Self::with_store(SharedStore::default())
        }

        fn with_store(store: SharedStore) -> Self {
            Self {
                users: Arc::new(MockUserRepository {
                    store: store.clone(),
                }),
                interview_configs: Arc::new(MockInterviewConfigRepository {
                    store: store.clone(),
                }),
                voice_records: Arc::new(MockVoiceRecordRepository {
                    store: store.clone(),
                }),
                transcripts: Arc::new(MockTranscriptRepository { store }),
            }
        }
    }

    #[async_trait]
    impl<'a> UnitOfWork<'a> for MockUnitOfWork {
        fn users(&self) -> Arc<dyn UserRepository + 'a> {
            self.users.clone()
        }

        fn interview_configs(&self) -> Arc<dyn InterviewConfigRepository + 'a> {
            self.interview_configs.clone()
        }

        fn voice_records(&self) -> Arc<dyn VoiceRecordRepository + 'a> {
            self.voice_records.clone()
        }

        fn transcripts(&self) -> Arc<dyn TranscriptRepository + 'a> {
            self.transcripts.clone()
        }

        async fn commit(self: Box<Self>) -> Result<(), ApplicationError> {
            Ok(())
        }

        async fn rollback(self: Box<Self>) -> Result<(), ApplicationError> {
            Ok(())
        }
    }

    /// Hands out units of work that all see the same in-memory store.
    #[derive(Default, Clone)]
    pub struct MockUnitOfWorkProvider {
        store: SharedStore,
    }

    impl MockUnitOfWorkProvider {
        pub fn new() -> Self {
            Self::default()
        }
    }

    #[async_trait]
    impl UnitOfWorkProvider for MockUnitOfWorkProvider {
        async fn begin<'p>(&'p self) -> Result<Box<dyn UnitOfWork<'p> + 'p>, ApplicationError> {
            Ok(Box::new(MockUnitOfWork::with_store(self.store.clone())))
        }
    }
}
