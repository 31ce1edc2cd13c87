use actix_web::{get, http::StatusCode, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::{IntoParams, ToSchema};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::faq::application::ports::outgoing::{
    PageRequest, TopicDetailFilter, TopicDetailListItem,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListTopicDetailsQuery {
    /// 1-based page number
    #[param(example = 1)]
    pub page_index: Option<u64>,

    /// Rows per page; omit to return every row
    #[param(example = 10)]
    pub page_size: Option<u64>,

    /// Exact topic name to filter on
    #[param(example = "Shipping")]
    pub topic: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TopicDetailResponse {
    #[schema(example = "Shipping")]
    pub topic: String,

    #[schema(example = 9)]
    pub id: i32,

    #[schema(example = "When will my order ship?")]
    pub question: String,

    #[schema(example = "Within two business days.")]
    pub answer: String,
}

impl From<TopicDetailListItem> for TopicDetailResponse {
    fn from(item: TopicDetailListItem) -> Self {
        Self {
            topic: item.topic,
            id: item.id,
            question: item.question,
            answer: item.answer,
        }
    }
}

/// List FAQ entries
///
/// Active entries ordered by topic name, optionally restricted to one topic.
#[utoipa::path(
    get,
    path = "/faq_detail",
    tag = "faq",
    params(ListTopicDetailsQuery),
    responses(
        (
            status = 200,
            description = "FAQ entries",
            body = inline(SuccessResponse<Vec<TopicDetailResponse>>),
            example = json!({
                "success": true,
                "data": [{
                    "topic": "Shipping",
                    "id": 9,
                    "question": "When will my order ship?",
                    "answer": "Within two business days."
                }]
            })
        ),
        (status = 400, description = "Malformed query", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/faq_detail")]
pub async fn list_topic_details_handler(
    data: web::Data<AppState>,
    query: web::Query<ListTopicDetailsQuery>,
) -> impl Responder {
    let query = query.into_inner();
    let page = PageRequest::new(query.page_index, query.page_size);
    let filter = TopicDetailFilter {
        topic_name: query.topic.filter(|t| !t.is_empty()),
    };

    match data.faq.list_details.execute(filter, page).await {
        Ok(details) => ApiResponse::success(
            details
                .into_iter()
                .map(TopicDetailResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(e) => {
            error!(error = %e, "Failed to list topic details");
            ApiResponse::failure(
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An unexpected error occurred",
                Vec::<TopicDetailResponse>::new(),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    use crate::faq::application::ports::incoming::use_cases::{
        ListTopicDetailsError, ListTopicDetailsUseCase,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::StubListTopicDetailsUseCase;

    #[derive(Clone, Default)]
    struct RecordingListTopicDetailsUseCase {
        seen: Arc<Mutex<Option<(TopicDetailFilter, PageRequest)>>>,
    }

    #[async_trait]
    impl ListTopicDetailsUseCase for RecordingListTopicDetailsUseCase {
        async fn execute(
            &self,
            filter: TopicDetailFilter,
            page: PageRequest,
        ) -> Result<Vec<TopicDetailListItem>, ListTopicDetailsError> {
            *self.seen.lock().unwrap() = Some((filter, page));
            Ok(vec![])
        }
    }

    struct FailingListTopicDetailsUseCase;

    #[async_trait]
    impl ListTopicDetailsUseCase for FailingListTopicDetailsUseCase {
        async fn execute(
            &self,
            _filter: TopicDetailFilter,
            _page: PageRequest,
        ) -> Result<Vec<TopicDetailListItem>, ListTopicDetailsError> {
            Err(ListTopicDetailsError::QueryFailed("timeout".to_string()))
        }
    }

    async fn read_json(resp: actix_web::dev::ServiceResponse) -> serde_json::Value {
        let body = test::read_body(resp).await;
        serde_json::from_slice(&body).unwrap()
    }

    #[actix_web::test]
    async fn lists_details() {
        let state = TestAppStateBuilder::default()
            .with_list_details(StubListTopicDetailsUseCase::success(vec![
                TopicDetailListItem {
                    topic: "Shipping".to_string(),
                    id: 9,
                    question: "When will my order ship?".to_string(),
                    answer: "Within two business days.".to_string(),
                },
            ]))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(list_topic_details_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/faq_detail").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let json = read_json(resp).await;
        assert_eq!(json["data"][0]["topic"], "Shipping");
        assert_eq!(json["data"][0]["id"], 9);
        assert_eq!(json["data"][0]["answer"], "Within two business days.");
    }

    #[actix_web::test]
    async fn forwards_topic_filter_and_page() {
        let recorder = RecordingListTopicDetailsUseCase::default();
        let state = TestAppStateBuilder::default()
            .with_list_details(recorder.clone())
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(list_topic_details_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/faq_detail?topic=Shipping&page_index=2&page_size=10")
            .to_request();
        test::call_service(&app, req).await;

        let seen = recorder.seen.lock().unwrap().clone();
        assert_eq!(
            seen,
            Some((
                TopicDetailFilter {
                    topic_name: Some("Shipping".to_string())
                },
                PageRequest::new(Some(2), Some(10))
            ))
        );
    }

    #[actix_web::test]
    async fn empty_topic_means_no_filter() {
        let recorder = RecordingListTopicDetailsUseCase::default();
        let state = TestAppStateBuilder::default()
            .with_list_details(recorder.clone())
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(list_topic_details_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/faq_detail?topic=")
            .to_request();
        test::call_service(&app, req).await;

        let seen = recorder.seen.lock().unwrap().clone();
        assert_eq!(seen.map(|(filter, _)| filter), Some(TopicDetailFilter::default()));
    }

    #[actix_web::test]
    async fn failure_returns_empty_list_fallback() {
        let state = TestAppStateBuilder::default()
            .with_list_details(FailingListTopicDetailsUseCase)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(list_topic_details_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/faq_detail").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = read_json(resp).await;
        assert_eq!(json["data"], serde_json::json!([]));
    }
}
