use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use uuid::Uuid;

use parley_app::{
    command_handlers::{
        CreateInterviewConfigCommandHandler, DeleteInterviewConfigCommandHandler,
        UpdateInterviewConfigCommandHandler,
    },
    cqrs::{
        commands::{CreateInterviewConfig, DeleteInterviewConfig, UpdateInterviewConfig},
        queries::{GetInterviewConfig, ListInterviewConfigs},
    },
    queries_handlers::{GetInterviewConfigHandler, ListInterviewConfigsHandler},
};
use parley_types::interview::{InterviewConfig, InterviewConfigChanges};

use super::{ApiError, ApiResult, ApiUser, MessageResponse};
use crate::http::AppState;

/// Body of POST /api/configs. Missing fields are treated as empty.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct NewConfigBody {
    pub name: String,
    pub candidate_name: String,
    pub position: String,
    pub company: String,
    pub job_title: String,
    pub resume: String,
    pub detailed_experience: String,
    pub job_description: String,
}

/// GET /api/configs
pub async fn list_configs(
    State(state): State<AppState>,
    ApiUser(user): ApiUser,
) -> ApiResult<Json<Vec<InterviewConfig>>> {
    state
        .app_bus
        .query(
            ListInterviewConfigs { user_id: user.id },
            ListInterviewConfigsHandler::new(),
        )
        .await
        .map(Json)
        .map_err(|e| ApiError::from_app(e, "Failed to list configs"))
}

/// POST /api/configs
pub async fn create_config(
    State(state): State<AppState>,
    ApiUser(user): ApiUser,
    Json(body): Json<NewConfigBody>,
) -> ApiResult<(StatusCode, Json<InterviewConfig>)> {
    let id = Uuid::new_v4();
    let command = CreateInterviewConfig {
        id,
        user_id: user.id,
        name: body.name,
        candidate_name: body.candidate_name,
        position: body.position,
        company: body.company,
        job_title: body.job_title,
        resume: body.resume,
        detailed_experience: body.detailed_experience,
        job_description: body.job_description,
    };

    state
        .app_bus
        .execute(command, CreateInterviewConfigCommandHandler::new())
        .await
        .map_err(|e| ApiError::from_app(e, "Failed to create config"))?;

    let config = fetch_config(&state, id, user.id).await?;
    Ok((StatusCode::CREATED, Json(config)))
}

/// GET /api/configs/{id}
pub async fn get_config(
    State(state): State<AppState>,
    ApiUser(user): ApiUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<InterviewConfig>> {
    fetch_config(&state, id, user.id).await.map(Json)
}

/// PUT /api/configs/{id}
pub async fn update_config(
    State(state): State<AppState>,
    ApiUser(user): ApiUser,
    Path(id): Path<Uuid>,
    Json(changes): Json<InterviewConfigChanges>,
) -> ApiResult<Json<InterviewConfig>> {
    let command = UpdateInterviewConfig {
        id,
        user_id: user.id,
        changes,
    };

    state
        .app_bus
        .execute(command, UpdateInterviewConfigCommandHandler::new())
        .await
        .map_err(|e| ApiError::from_app(e, "Failed to update config"))?;

    fetch_config(&state, id, user.id).await.map(Json)
}

/// DELETE /api/configs/{id}
pub async fn delete_config(
    State(state): State<AppState>,
    ApiUser(user): ApiUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<MessageResponse>> {
    state
        .app_bus
        .execute(
            DeleteInterviewConfig {
                id,
                user_id: user.id,
            },
            DeleteInterviewConfigCommandHandler::new(),
        )
        .await
        .map_err(|e| ApiError::from_app(e, "Failed to delete config"))?;

    Ok(MessageResponse::new(t!("api.messages.config_deleted")))
}

async fn fetch_config(state: &AppState, id: Uuid, user_id: Uuid) -> ApiResult<InterviewConfig> {
    state
        .app_bus
        .query(
            GetInterviewConfig { id, user_id },
            GetInterviewConfigHandler::new(),
        )
        .await
        .map_err(|e| ApiError::from_app(e, "Failed to fetch config"))
}
