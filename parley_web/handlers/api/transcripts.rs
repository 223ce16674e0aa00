use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Serialize;
use uuid::Uuid;

use parley_app::{
    command_handlers::DeleteTranscriptCommandHandler,
    cqrs::{
        commands::DeleteTranscript,
        queries::{GetTranscript, ListTranscripts},
    },
    queries_handlers::{GetTranscriptHandler, ListTranscriptsHandler},
};
use parley_types::{pagination::PageInfo, transcripts::Transcript};

use super::{ApiError, ApiResult, ApiUser, MessageResponse, PageParams};
use crate::http::AppState;

#[derive(Debug, Serialize)]
pub struct TranscriptsResponse {
    pub transcripts: Vec<Transcript>,
    pub pagination: PageInfo,
}

/// GET /api/transcripts
pub async fn list_transcripts(
    State(state): State<AppState>,
    ApiUser(user): ApiUser,
    Query(params): Query<PageParams>,
) -> ApiResult<Json<TranscriptsResponse>> {
    let query = ListTranscripts {
        user_id: user.id,
        page: params.to_request(state.app_bus.config().page_size),
    };

    let page = state
        .app_bus
        .query(query, ListTranscriptsHandler::new())
        .await
        .map_err(|e| ApiError::from_app(e, "Failed to list transcripts"))?;

    Ok(Json(TranscriptsResponse {
        pagination: page.info(),
        transcripts: page.items,
    }))
}

/// GET /api/transcripts/{id}
pub async fn get_transcript(
    State(state): State<AppState>,
    ApiUser(user): ApiUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Transcript>> {
    state
        .app_bus
        .query(
            GetTranscript {
                id,
                user_id: user.id,
            },
            GetTranscriptHandler::new(),
        )
        .await
        .map(Json)
        .map_err(|e| ApiError::from_app(e, "Failed to fetch transcript"))
}

/// DELETE /api/transcripts/{id}
pub async fn delete_transcript(
    State(state): State<AppState>,
    ApiUser(user): ApiUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<MessageResponse>> {
    state
        .app_bus
        .execute(
            DeleteTranscript {
                id,
                user_id: user.id,
            },
            DeleteTranscriptCommandHandler::new(),
        )
        .await
        .map_err(|e| ApiError::from_app(e, "Failed to delete transcript"))?;

    Ok(MessageResponse::new(t!("api.messages.transcript_deleted")))
}
