use axum::{
    Router,
    extract::FromRef,
    routing::{get, post},
};
use axum_extra::extract::cookie::Key;
use std::{io::Error, net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tower_http::{services::ServeDir, trace::TraceLayer};

use parley_app::{app::AppBus, config::Config};
use parley_types::{Result, errors::ApplicationError};

use crate::{
    handlers::{
        api::{configs, profile, transcripts, voice_records},
        home, login, login_page, logout, register, register_page,
    },
    routes::Route,
};

#[derive(Clone)]
pub struct AppState {
    pub app_bus: Arc<AppBus>,
    pub cookie_key: Key,
}

impl AppState {
    pub fn new(app_bus: Arc<AppBus>, config: &Config) -> AppState {
        // Config guarantees a secret long enough for Key::from.
        let cookie_key = Key::from(config.auth_cookie_secret.as_bytes());

        AppState {
            app_bus,
            cookie_key,
        }
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.cookie_key.clone()
    }
}

pub struct WebRouter {}

impl WebRouter {
    pub fn router(state: AppState) -> Router {
        let api = Router::new()
            .route("/user/profile", get(profile::profile))
            .route(
                "/configs",
                get(configs::list_configs).post(configs::create_config),
            )
            .route(
                "/configs/{id}",
                get(configs::get_config)
                    .put(configs::update_config)
                    .delete(configs::delete_config),
            )
            .route("/voice-records", get(voice_records::list_records))
            .route(
                "/voice-records/unread-count",
                get(voice_records::unread_count),
            )
            .route("/voice-records/{id}", get(voice_records::get_record))
            .route(
                "/voice-records/{id}/mark-read",
                post(voice_records::mark_read),
            )
            .route("/transcripts", get(transcripts::list_transcripts))
            .route(
                "/transcripts/{id}",
                get(transcripts::get_transcript).delete(transcripts::delete_transcript),
            );

        Router::new()
            .nest_service(Route::Assets.path(), ServeDir::new("parley_web/assets"))
            .route(Route::Home.path(), get(home))
            .route(Route::Login.path(), get(login_page).post(login))
            .route(Route::Register.path(), get(register_page).post(register))
            .route(Route::Logout.path(), get(logout))
            .nest("/api", api)
            .with_state(state)
            .layer(TraceLayer::new_for_http())
    }

    pub async fn serve(state: AppState, port: u16) -> Result<(), ApplicationError> {
        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        let listener = TcpListener::bind(addr).await.map_err(infra_error)?;

        tracing::info!("HTTP Server started, listening on http://{}", addr);
        Self::serve_on(state, listener).await
    }

    /// Serves on an already bound listener.
    pub async fn serve_on(state: AppState, listener: TcpListener) -> Result<(), ApplicationError> {
        axum::serve(listener, Self::router(state))
            .await
            .map_err(infra_error)?;

        Ok(())
    }
}

fn infra_error(e: Error) -> ApplicationError {
    let err = format!("{:#?}", e);
    ApplicationError::Infrastructure(err)
}
