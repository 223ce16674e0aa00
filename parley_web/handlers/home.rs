use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use dioxus::prelude::*;

use parley_app::{
    cqrs::queries::{CountUnreadVoiceRecords, ListInterviewConfigs},
    queries_handlers::{CountUnreadVoiceRecordsHandler, ListInterviewConfigsHandler},
};

use crate::{
    components::{ConfigSummary, DashboardPage, LayoutData, PageLayout},
    handlers::{CurrentUser, internal_error, render_html},
    http::AppState,
};

/// GET / - Dashboard
pub async fn home(State(state): State<AppState>, CurrentUser(user): CurrentUser) -> Response {
    let configs = match state
        .app_bus
        .query(
            ListInterviewConfigs { user_id: user.id },
            ListInterviewConfigsHandler::new(),
        )
        .await
    {
        Ok(configs) => configs,
        Err(e) => {
            tracing::error!("Dashboard configs error: {}", e);
            return internal_error();
        }
    };

    let unread_count = match state
        .app_bus
        .query(
            CountUnreadVoiceRecords { user_id: user.id },
            CountUnreadVoiceRecordsHandler::new(),
        )
        .await
    {
        Ok(count) => count,
        Err(e) => {
            tracing::error!("Dashboard unread count error: {}", e);
            return internal_error();
        }
    };

    let configs: Vec<ConfigSummary> = configs.iter().map(ConfigSummary::from).collect();
    let layout_data = LayoutData::for_user(&user.username);

    let body_content = dioxus_ssr::render_element(rsx! {
        PageLayout {
            data: layout_data,
            DashboardPage {
                username: user.username.clone(),
                unread_count: unread_count,
                configs: configs,
            }
        }
    });

    render_html(body_content, None).into_response()
}
