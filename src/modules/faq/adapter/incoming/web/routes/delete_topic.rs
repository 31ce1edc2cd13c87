use actix_web::{delete, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::auth::AdminUser,
    faq::application::ports::incoming::use_cases::{DeleteCommand, DeleteTopicError},
    shared::api::{ApiResponse, EmptyData},
    AppState,
};

/// `?id=` of both delete endpoints.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DeleteQuery {
    /// Row to soft-delete
    #[param(example = 1)]
    pub id: Option<i32>,
}

/// Soft-delete a topic
///
/// Also soft-deletes every active detail of the topic.
#[utoipa::path(
    delete,
    path = "/faq",
    tag = "faq",
    params(DeleteQuery),
    responses(
        (
            status = 200,
            description = "Topic deleted",
            body = inline(SuccessResponse<EmptyData>),
            example = json!({ "success": true, "data": {} })
        ),
        (status = 400, description = "Missing id", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Admin role required", body = ErrorResponse),
        (status = 404, description = "Unknown topic id", body = ErrorResponse),
        (
            status = 409,
            description = "Topic already deleted",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "ALREADY_DELETED", "message": "data with given id has been deleted" }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
#[delete("/faq")]
pub async fn delete_topic_handler(
    user: AdminUser,
    data: web::Data<AppState>,
    query: web::Query<DeleteQuery>,
) -> impl Responder {
    let command = match DeleteCommand::new(query.id) {
        Ok(cmd) => cmd,
        Err(err) => return ApiResponse::bad_request("VALIDATION_ERROR", &err.to_string()),
    };

    match data.faq.delete_topic.execute(&user.principal, command).await {
        Ok(()) => ApiResponse::success(EmptyData {}),
        Err(err) => map_delete_topic_error(err),
    }
}

fn map_delete_topic_error(err: DeleteTopicError) -> HttpResponse {
    match err {
        DeleteTopicError::Forbidden => ApiResponse::forbidden("FORBIDDEN", &err.to_string()),
        DeleteTopicError::TopicNotFound => {
            ApiResponse::not_found("TOPIC_NOT_FOUND", &err.to_string())
        }
        DeleteTopicError::AlreadyDeleted => {
            ApiResponse::conflict("ALREADY_DELETED", &err.to_string())
        }
        DeleteTopicError::RepositoryError(ref msg) => {
            error!(error = %msg, "Failed to delete topic");
            ApiResponse::internal_error()
        }
    }
}
