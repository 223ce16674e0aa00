use axum::{
    Json,
    extract::{Path, Query, State},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use parley_app::{
    command_handlers::MarkVoiceRecordReadCommandHandler,
    cqrs::{
        commands::MarkVoiceRecordRead,
        queries::{CountUnreadVoiceRecords, GetVoiceRecord, ListVoiceRecords},
    },
    queries_handlers::{
        CountUnreadVoiceRecordsHandler, GetVoiceRecordHandler, ListVoiceRecordsHandler,
    },
};
use parley_types::{
    pagination::PageInfo,
    records::{VoiceRecord, VoiceRecordStatus},
};

use super::{ApiError, ApiResult, ApiUser, MessageResponse, PageParams};
use crate::http::AppState;

#[derive(Debug, Serialize)]
pub struct VoiceRecordView {
    pub id: Uuid,
    pub question: String,
    pub answer: String,
    pub status: VoiceRecordStatus,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub is_read: bool,
    pub config_name: Option<String>,
}

impl From<VoiceRecord> for VoiceRecordView {
    fn from(record: VoiceRecord) -> Self {
        VoiceRecordView {
            id: record.id,
            question: record
                .question
                .unwrap_or_else(|| t!("records.default_question").to_string()),
            answer: record.answer.unwrap_or_default(),
            status: record.status,
            created_at: record.created_at,
            completed_at: record.completed_at,
            is_read: record.is_read,
            config_name: record.config_name,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ListRecordsParams {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub unread_only: Option<String>,
}

impl ListRecordsParams {
    fn page_params(&self) -> PageParams {
        PageParams {
            page: self.page,
            per_page: self.per_page,
        }
    }

    fn unread_only(&self) -> bool {
        self.unread_only
            .as_deref()
            .is_some_and(|v| v.eq_ignore_ascii_case("true"))
    }
}

#[derive(Debug, Serialize)]
pub struct RecordsResponse {
    pub records: Vec<VoiceRecordView>,
    pub pagination: PageInfo,
}

#[derive(Debug, Serialize)]
pub struct CountResponse {
    pub count: u64,
}

/// GET /api/voice-records
pub async fn list_records(
    State(state): State<AppState>,
    ApiUser(user): ApiUser,
    Query(params): Query<ListRecordsParams>,
) -> ApiResult<Json<RecordsResponse>> {
    let query = ListVoiceRecords {
        user_id: user.id,
        unread_only: params.unread_only(),
        page: params
            .page_params()
            .to_request(state.app_bus.config().page_size),
    };

    let page = state
        .app_bus
        .query(query, ListVoiceRecordsHandler::new())
        .await
        .map_err(|e| ApiError::from_app(e, "Failed to list voice records"))?;

    let pagination = page.info();
    let records = page.items.into_iter().map(VoiceRecordView::from).collect();

    Ok(Json(RecordsResponse {
        records,
        pagination,
    }))
}

/// GET /api/voice-records/{id}
pub async fn get_record(
    State(state): State<AppState>,
    ApiUser(user): ApiUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<VoiceRecordView>> {
    state
        .app_bus
        .query(
            GetVoiceRecord {
                id,
                user_id: user.id,
            },
            GetVoiceRecordHandler::new(),
        )
        .await
        .map(|record| Json(record.into()))
        .map_err(|e| ApiError::from_app(e, "Failed to fetch voice record"))
}

/// POST /api/voice-records/{id}/mark-read
pub async fn mark_read(
    State(state): State<AppState>,
    ApiUser(user): ApiUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<MessageResponse>> {
    state
        .app_bus
        .execute(
            MarkVoiceRecordRead {
                id,
                user_id: user.id,
            },
            MarkVoiceRecordReadCommandHandler::new(),
        )
        .await
        .map_err(|e| ApiError::from_app(e, "Failed to mark voice record as read"))?;

    Ok(MessageResponse::new(t!("api.messages.marked_read")))
}

/// GET /api/voice-records/unread-count
pub async fn unread_count(
    State(state): State<AppState>,
    ApiUser(user): ApiUser,
) -> ApiResult<Json<CountResponse>> {
    state
        .app_bus
        .query(
            CountUnreadVoiceRecords { user_id: user.id },
            CountUnreadVoiceRecordsHandler::new(),
        )
        .await
        .map(|count| Json(CountResponse { count }))
        .map_err(|e| ApiError::from_app(e, "Failed to count unread voice records"))
}
