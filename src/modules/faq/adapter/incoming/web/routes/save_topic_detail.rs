use actix_web::{post, put, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::auth::AdminUser,
    faq::application::{
        domain::entities::TopicDetail,
        ports::incoming::use_cases::{
            SaveTopicDetailCommand, SaveTopicDetailCommandError, SaveTopicDetailError,
        },
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct SaveTopicDetailRequest {
    /// Owning topic
    #[schema(example = 1)]
    pub topic_id: Option<i32>,

    #[schema(example = "When will my order ship?")]
    pub question: Option<String>,

    #[schema(example = "Within two business days.")]
    pub answer: Option<String>,

    /// Existing entry id; omit to create
    #[schema(example = 9)]
    pub id: Option<i32>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SaveTopicDetailResponse {
    /// Name of the owning topic
    #[schema(example = "Shipping")]
    pub topic: String,

    #[schema(example = "When will my order ship?")]
    pub question: String,

    #[schema(example = "Within two business days.")]
    pub answer: String,
}

impl From<TopicDetail> for SaveTopicDetailResponse {
    fn from(detail: TopicDetail) -> Self {
        Self {
            topic: detail.topic_name,
            question: detail.question,
            answer: detail.answer,
        }
    }
}

/// Create an FAQ entry
#[utoipa::path(
    post,
    path = "/faq_detail",
    tag = "faq",
    request_body = SaveTopicDetailRequest,
    responses(
        (
            status = 200,
            description = "Entry saved",
            body = inline(SuccessResponse<SaveTopicDetailResponse>),
            example = json!({
                "success": true,
                "data": {
                    "topic": "Shipping",
                    "question": "When will my order ship?",
                    "answer": "Within two business days."
                }
            })
        ),
        (
            status = 400,
            description = "Validation error",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "VALIDATION_ERROR", "message": "please provide question" }
            })
        ),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Admin role required", body = ErrorResponse),
        (status = 404, description = "Unknown topic id", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
#[post("/faq_detail")]
pub async fn create_topic_detail_handler(
    user: AdminUser,
    data: web::Data<AppState>,
    payload: web::Json<SaveTopicDetailRequest>,
) -> impl Responder {
    save_topic_detail(user, data, payload.into_inner()).await
}

/// Update an FAQ entry
#[utoipa::path(
    put,
    path = "/faq_detail",
    tag = "faq",
    request_body = SaveTopicDetailRequest,
    responses(
        (status = 200, description = "Entry saved", body = inline(SuccessResponse<SaveTopicDetailResponse>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Admin role required", body = ErrorResponse),
        (
            status = 404,
            description = "Unknown topic or entry id",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "DETAIL_NOT_FOUND", "message": "invalid FAQDetail id: data not found" }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
#[put("/faq_detail")]
pub async fn update_topic_detail_handler(
    user: AdminUser,
    data: web::Data<AppState>,
    payload: web::Json<SaveTopicDetailRequest>,
) -> impl Responder {
    save_topic_detail(user, data, payload.into_inner()).await
}

async fn save_topic_detail(
    user: AdminUser,
    data: web::Data<AppState>,
    payload: SaveTopicDetailRequest,
) -> HttpResponse {
    let command = match SaveTopicDetailCommand::new(
        payload.topic_id,
        payload.question,
        payload.answer,
        payload.id,
    ) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.faq.save_detail.execute(&user.principal, command).await {
        Ok(detail) => ApiResponse::success(SaveTopicDetailResponse::from(detail)),
        Err(err) => map_save_detail_error(err),
    }
}

fn map_command_error(err: SaveTopicDetailCommandError) -> HttpResponse {
    ApiResponse::bad_request("VALIDATION_ERROR", &err.to_string())
}

fn map_save_detail_error(err: SaveTopicDetailError) -> HttpResponse {
    match err {
        SaveTopicDetailError::Forbidden => ApiResponse::forbidden("FORBIDDEN", &err.to_string()),
        SaveTopicDetailError::TopicNotFound(_) => {
            ApiResponse::not_found("TOPIC_NOT_FOUND", &err.to_string())
        }
        SaveTopicDetailError::DetailNotFound => {
            ApiResponse::not_found("DETAIL_NOT_FOUND", &err.to_string())
        }
        SaveTopicDetailError::RepositoryError(ref msg) => {
            error!(error = %msg, "Failed to save topic detail");
            ApiResponse::internal_error()
        }
    }
}
