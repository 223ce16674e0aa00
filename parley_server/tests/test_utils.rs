#[cfg(test)]
pub mod tests {
    use async_trait::async_trait;
    use reqwest::{Client, Response, redirect::Policy};
    use sqlx::{Postgres, Transaction};
    use std::{collections::HashMap, sync::Arc};
    use tokio::{net::TcpListener, sync::Mutex};
    use uuid::Uuid;

    use parley_app::{
        app::AppBus,
        command_handlers::RegisterUserCommandHandler,
        config::Config,
        cqrs::commands::RegisterUser,
        repository::{
            InterviewConfigRepository, TranscriptRepository, UserRepository,
            VoiceRecordRepository,
        },
        test_utils::tests::{MockUnitOfWorkProvider, test_config},
        uow::{UnitOfWork, UnitOfWorkProvider},
    };
    use parley_db::{
        DbPool, PostgresInterviewConfigRepository, PostgresTranscriptRepository,
        PostgresUserRepository, PostgresVoiceRecordRepository, establish_test_connection_pool,
    };
    use parley_types::{
        Result,
        errors::{AppError, ApplicationError, DbError},
    };
    use parley_web::{AppState, WebRouter};

    pub const PASSWORD: &str = "parley-secret";

    /// A running web app.
    pub struct TestApp {
        pub base_url: String,
        pub app_bus: Arc<AppBus>,
    }

    impl TestApp {
        pub fn url(&self, path: &str) -> String {
            format!("{}{}", self.base_url, path)
        }
    }

    /// Unit of work living inside the master transaction of a test. Each one
    /// opens a savepoint, so commit and rollback behave as they do in
    /// production while nothing ever reaches the database for good.
    #[derive(Clone)]
    pub struct TestUnitOfWork {
        tx: Arc<Mutex<Transaction<'static, Postgres>>>,
    }

    impl TestUnitOfWork {
        async fn run(&self, statement: &'static str) -> Result<()> {
            let mut tx_guard = self.tx.lock().await;
            sqlx::query(statement)
                .execute(&mut **tx_guard)
                .await
                .map_err(DbError::Database)?;
            Ok(())
        }
    }

    #[async_trait]
    impl<'p> UnitOfWork<'p> for TestUnitOfWork {
        fn users(&self) -> Arc<dyn UserRepository + 'p> {
            Arc::new(PostgresUserRepository::new(self.tx.clone()))
        }

        fn interview_configs(&self) -> Arc<dyn InterviewConfigRepository + 'p> {
            Arc::new(PostgresInterviewConfigRepository::new(self.tx.clone()))
        }

        fn voice_records(&self) -> Arc<dyn VoiceRecordRepository + 'p> {
            Arc::new(PostgresVoiceRecordRepository::new(self.tx.clone()))
        }

        fn transcripts(&self) -> Arc<dyn TranscriptRepository + 'p> {
            Arc::new(PostgresTranscriptRepository::new(self.tx.clone()))
        }

        async fn commit(self: Box<Self>) -> Result<(), ApplicationError> {
            self.run("RELEASE SAVEPOINT parley_uow").await
        }

        async fn rollback(self: Box<Self>) -> Result<(), ApplicationError> {
            self.run("ROLLBACK TO SAVEPOINT parley_uow").await?;
            self.run("RELEASE SAVEPOINT parley_uow").await
        }
    }

    #[derive(Clone)]
    pub struct TestUnitOfWorkProvider {
        tx: Arc<Mutex<Transaction<'static, Postgres>>>,
    }

    impl TestUnitOfWorkProvider {
        pub fn new(tx: Arc<Mutex<Transaction<'static, Postgres>>>) -> Self {
            Self { tx }
        }
    }

    #[async_trait]
    impl UnitOfWorkProvider for TestUnitOfWorkProvider {
        async fn begin<'p>(&'p self) -> Result<Box<dyn UnitOfWork<'p> + 'p>, ApplicationError> {
            let uow = TestUnitOfWork {
                tx: self.tx.clone(),
            };
            uow.run("SAVEPOINT parley_uow").await?;

            Ok(Box::new(uow))
        }
    }

    /// Connects to `TEST_DATABASE_URL` and applies the migrations.
    /// Returns `None` when no test database is configured.
    #[allow(dead_code)]
    pub async fn setup_db_pool() -> Result<Option<DbPool>> {
        let pool = match establish_test_connection_pool().await {
            Ok(pool) => pool,
            Err(ApplicationError::App(AppError::MissingEnv(var))) => {
                eprintln!("{var} is not set, skipping database test");
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        sqlx::migrate!("../migrations")
            .run(&pool)
            .await
            .map_err(|e| ApplicationError::Infrastructure(e.to_string()))?;

        Ok(Some(pool))
    }

    /// App bus over the Postgres repositories, wrapped in a master
    /// transaction that is dropped (rolled back) with the bus.
    #[allow(dead_code)]
    pub async fn setup_db_app() -> Result<Option<(Arc<AppBus>, Arc<Config>)>> {
        let Some(pool) = setup_db_pool().await? else {
            return Ok(None);
        };

        let master_tx = pool.begin().await.map_err(DbError::Database)?;
        let uow_provider: Arc<dyn UnitOfWorkProvider> = Arc::new(TestUnitOfWorkProvider::new(
            Arc::new(Mutex::new(master_tx)),
        ));
        let config = test_config();

        Ok(Some((
            Arc::new(AppBus::new(config.clone(), uow_provider)),
            config,
        )))
    }

    async fn spawn_app(app_bus: Arc<AppBus>, config: Arc<Config>) -> Result<TestApp> {
        let state = AppState::new(app_bus.clone(), &config);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .map_err(|e| ApplicationError::Infrastructure(e.to_string()))?;
        let port = listener
            .local_addr()
            .map_err(|e| ApplicationError::Infrastructure(e.to_string()))?
            .port();

        tokio::spawn(WebRouter::serve_on(state, listener));

        Ok(TestApp {
            base_url: format!("http://localhost:{port}"),
            app_bus,
        })
    }

    #[allow(dead_code)]
    pub async fn setup_web_app() -> Result<TestApp> {
        let config = test_config();
        let uow_provider = Arc::new(MockUnitOfWorkProvider::new());
        let app_bus = Arc::new(AppBus::new(config.clone(), uow_provider));

        spawn_app(app_bus, config).await
    }

    /// Same as [`setup_web_app`], backed by the test database.
    #[allow(dead_code)]
    pub async fn setup_db_web_app() -> Result<Option<TestApp>> {
        let Some((app_bus, config)) = setup_db_app().await? else {
            return Ok(None);
        };

        spawn_app(app_bus, config).await.map(Some)
    }

    /// Client with a cookie store that does not follow redirects.
    #[allow(dead_code)]
    pub fn setup_http_client() -> Client {
        Client::builder()
            .cookie_store(true)
            .redirect(Policy::none())
            .build()
            .unwrap()
    }

    /// Loads a page with a form and extracts its hidden CSRF token.
    #[allow(dead_code)]
    pub async fn fetch_csrf_token(client: &Client, url: &str) -> Result<String> {
        let body = client.get(url).send().await.unwrap().text().await.unwrap();

        let field = body
            .find(r#"name="csrf_token""#)
            .ok_or_else(|| ApplicationError::Unknown("no csrf field in page".to_string()))?;
        let rest = &body[field..];
        let start = rest
            .find(r#"value=""#)
            .ok_or_else(|| ApplicationError::Unknown("csrf field has no value".to_string()))?
            + r#"value=""#.len();
        let end = rest[start..]
            .find('"')
            .ok_or_else(|| ApplicationError::Unknown("unterminated csrf value".to_string()))?;

        Ok(rest[start..start + end].to_string())
    }

    /// Registers a user directly through the app bus.
    #[allow(dead_code)]
    pub async fn register_user(app: &TestApp, username: &str) -> Result<Uuid> {
        let command = RegisterUser::new(
            username.to_string(),
            PASSWORD.to_string(),
            PASSWORD.to_string(),
        );
        let user_id = command.id;
        app.app_bus
            .execute(command, RegisterUserCommandHandler::new())
            .await?;

        Ok(user_id)
    }

    /// Submits the login form.
    #[allow(dead_code)]
    pub async fn submit_login(
        client: &Client,
        app: &TestApp,
        username: &str,
        password: &str,
    ) -> Result<Response> {
        let csrf_token = fetch_csrf_token(client, &app.url("/login")).await?;

        let mut form = HashMap::new();
        form.insert("username", username);
        form.insert("password", password);
        form.insert("csrf_token", csrf_token.as_str());

        Ok(client
            .post(app.url("/login"))
            .form(&form)
            .send()
            .await
            .unwrap())
    }

    /// Submits the registration form.
    #[allow(dead_code)]
    pub async fn submit_register(
        client: &Client,
        app: &TestApp,
        username: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<Response> {
        let csrf_token = fetch_csrf_token(client, &app.url("/register")).await?;

        let mut form = HashMap::new();
        form.insert("username", username);
        form.insert("password", password);
        form.insert("confirm_password", confirm_password);
        form.insert("csrf_token", csrf_token.as_str());

        Ok(client
            .post(app.url("/register"))
            .form(&form)
            .send()
            .await
            .unwrap())
    }

    /// Registers `username` and returns a client logged in as that user.
    #[allow(dead_code)]
    pub async fn logged_in_client(app: &TestApp, username: &str) -> Result<(Client, Uuid)> {
        let user_id = register_user(app, username).await?;
        let client = setup_http_client();

        let res = submit_login(&client, app, username, PASSWORD).await?;
        assert_eq!(res.status(), reqwest::StatusCode::SEE_OTHER);

        Ok((client, user_id))
    }
}
