use actix_web::{get, http::StatusCode, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::{IntoParams, ToSchema};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::faq::application::ports::outgoing::{PageRequest, TopicListItem};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Query string of `GET /faq`.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListTopicsQuery {
    /// 1-based page number
    #[param(example = 1)]
    pub page_index: Option<u64>,

    /// Rows per page; omit to return every row
    #[param(example = 10)]
    pub page_size: Option<u64>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TopicResponse {
    #[schema(example = 1)]
    pub id: i32,

    #[schema(example = "Shipping")]
    pub name: String,
}

impl From<TopicListItem> for TopicResponse {
    fn from(item: TopicListItem) -> Self {
        Self {
            id: item.id,
            name: item.name,
        }
    }
}

/// List FAQ topics
///
/// Active topics ordered by id.
#[utoipa::path(
    get,
    path = "/faq",
    tag = "faq",
    params(ListTopicsQuery),
    responses(
        (
            status = 200,
            description = "Topics",
            body = inline(SuccessResponse<Vec<TopicResponse>>),
            example = json!({
                "success": true,
                "data": [
                    { "id": 1, "name": "Shipping" },
                    { "id": 2, "name": "Returns" }
                ]
            })
        ),
        (status = 400, description = "Malformed query", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/faq")]
pub async fn list_topics_handler(
    data: web::Data<AppState>,
    query: web::Query<ListTopicsQuery>,
) -> impl Responder {
    let query = query.into_inner();
    let page = PageRequest::new(query.page_index, query.page_size);

    match data.faq.list_topics.execute(page).await {
        Ok(topics) => ApiResponse::success(
            topics
                .into_iter()
                .map(TopicResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(e) => {
            error!(error = %e, "Failed to list topics");
            ApiResponse::failure(
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An unexpected error occurred",
                Vec::<TopicResponse>::new(),
            )
        }
    }
}
