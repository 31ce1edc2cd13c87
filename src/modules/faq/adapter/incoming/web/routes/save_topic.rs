use actix_web::{post, put, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::auth::AdminUser,
    faq::application::ports::incoming::use_cases::{
        SaveTopicCommand, SaveTopicCommandError, SaveTopicError, SaveTopicOutcome,
    },
    shared::api::ApiResponse,
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Request / Response DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, ToSchema)]
pub struct SaveTopicRequest {
    /// Topic name
    #[schema(example = "Shipping")]
    pub topic: Option<String>,

    /// Existing topic id; omit to create
    #[schema(example = 1)]
    pub id: Option<i32>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SaveTopicResponse {
    #[schema(example = "Shipping")]
    pub name: String,

    /// True when a previously deleted topic was reactivated
    #[serde(rename = "restoredData")]
    #[schema(example = false)]
    pub restored_data: bool,
}

impl From<SaveTopicOutcome> for SaveTopicResponse {
    fn from(outcome: SaveTopicOutcome) -> Self {
        Self {
            name: outcome.name,
            restored_data: outcome.restored,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Routes
// ──────────────────────────────────────────────────────────
//

/// Create or revive a topic
///
/// A soft-deleted topic with the same name is reactivated instead of creating a new row.
#[utoipa::path(
    post,
    path = "/faq",
    tag = "faq",
    request_body = SaveTopicRequest,
    responses(
        (
            status = 200,
            description = "Topic saved",
            body = inline(SuccessResponse<SaveTopicResponse>),
            example = json!({
                "success": true,
                "data": { "name": "Shipping", "restoredData": true }
            })
        ),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Admin role required", body = ErrorResponse),
        (
            status = 409,
            description = "Topic name already in use",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "DUPLICATE_TOPIC", "message": "Cannot add duplicated data" }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
#[post("/faq")]
pub async fn create_topic_handler(
    user: AdminUser,
    data: web::Data<AppState>,
    payload: web::Json<SaveTopicRequest>,
) -> impl Responder {
    save_topic(user, data, payload.into_inner()).await
}

/// Update or revive a topic
///
/// Renaming a topic rewrites the topic name on all of its active details.
#[utoipa::path(
    put,
    path = "/faq",
    tag = "faq",
    request_body = SaveTopicRequest,
    responses(
        (
            status = 200,
            description = "Topic saved",
            body = inline(SuccessResponse<SaveTopicResponse>),
            example = json!({
                "success": true,
                "data": { "name": "Returns", "restoredData": false }
            })
        ),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Admin role required", body = ErrorResponse),
        (
            status = 404,
            description = "Unknown topic id",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "TOPIC_NOT_FOUND", "message": "invalid Topic id: data not found" }
            })
        ),
        (status = 409, description = "Topic name already in use", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
#[put("/faq")]
pub async fn update_topic_handler(
    user: AdminUser,
    data: web::Data<AppState>,
    payload: web::Json<SaveTopicRequest>,
) -> impl Responder {
    save_topic(user, data, payload.into_inner()).await
}

async fn save_topic(
    user: AdminUser,
    data: web::Data<AppState>,
    payload: SaveTopicRequest,
) -> HttpResponse {
    let command = match SaveTopicCommand::new(payload.topic, payload.id) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.faq.save_topic.execute(&user.principal, command).await {
        Ok(outcome) => ApiResponse::success(SaveTopicResponse::from(outcome)),
        Err(err) => map_save_topic_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_command_error(err: SaveTopicCommandError) -> HttpResponse {
    ApiResponse::bad_request("VALIDATION_ERROR", &err.to_string())
}

fn map_save_topic_error(err: SaveTopicError) -> HttpResponse {
    match err {
        SaveTopicError::Forbidden => ApiResponse::forbidden("FORBIDDEN", &err.to_string()),
        SaveTopicError::TopicNotFound => {
            ApiResponse::not_found("TOPIC_NOT_FOUND", &err.to_string())
        }
        SaveTopicError::DuplicateTopicName => {
            ApiResponse::conflict("DUPLICATE_TOPIC", &err.to_string())
        }
        SaveTopicError::RepositoryError(ref msg) => {
            error!(error = %msg, "Failed to save topic");
            ApiResponse::internal_error()
        }
    }
}
