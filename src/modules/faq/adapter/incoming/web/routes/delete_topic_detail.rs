use actix_web::{delete, web, HttpResponse, Responder};
use tracing::error;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::auth::AdminUser,
    faq::application::ports::incoming::use_cases::{DeleteCommand, DeleteTopicDetailError},
    shared::api::{ApiResponse, EmptyData},
    AppState,
};

use super::delete_topic::DeleteQuery;

/// Soft-delete an FAQ entry
#[utoipa::path(
    delete,
    path = "/faq_detail",
    tag = "faq",
    params(DeleteQuery),
    responses(
        (
            status = 200,
            description = "Entry deleted",
            body = inline(SuccessResponse<EmptyData>),
            example = json!({ "success": true, "data": {} })
        ),
        (status = 400, description = "Missing id", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Admin role required", body = ErrorResponse),
        (status = 404, description = "Unknown entry id", body = ErrorResponse),
        (status = 409, description = "Entry already deleted", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
#[delete("/faq_detail")]
pub async fn delete_topic_detail_handler(
    user: AdminUser,
    data: web::Data<AppState>,
    query: web::Query<DeleteQuery>,
) -> impl Responder {
    let command = match DeleteCommand::new(query.id) {
        Ok(cmd) => cmd,
        Err(err) => return ApiResponse::bad_request("VALIDATION_ERROR", &err.to_string()),
    };

    match data.faq.delete_detail.execute(&user.principal, command).await {
        Ok(()) => ApiResponse::success(EmptyData {}),
        Err(err) => map_delete_detail_error(err),
    }
}

fn map_delete_detail_error(err: DeleteTopicDetailError) -> HttpResponse {
    match err {
        DeleteTopicDetailError::Forbidden => ApiResponse::forbidden("FORBIDDEN", &err.to_string()),
        DeleteTopicDetailError::DetailNotFound => {
            ApiResponse::not_found("DETAIL_NOT_FOUND", &err.to_string())
        }
        DeleteTopicDetailError::AlreadyDeleted => {
            ApiResponse::conflict("ALREADY_DELETED", &err.to_string())
        }
        DeleteTopicDetailError::RepositoryError(ref msg) => {
            error!(error = %msg, "Failed to delete topic detail");
            ApiResponse::internal_error()
        }
    }
}
