use crate::api::schemas::{ErrorDetail, ErrorResponse};
use crate::shared::api::EmptyData;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::faq::adapter::incoming::web::routes::{
    SaveTopicDetailRequest, SaveTopicDetailResponse, SaveTopicRequest, SaveTopicResponse,
    TopicDetailResponse, TopicResponse,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "FAQ Knowledge Base API",
        version = "1.0.0",
        description = "Topics and question/answer entries of the FAQ knowledge base",
    ),
    paths(
        // Topics
        crate::faq::adapter::incoming::web::routes::list_topics_handler,
        crate::faq::adapter::incoming::web::routes::create_topic_handler,
        crate::faq::adapter::incoming::web::routes::update_topic_handler,
        crate::faq::adapter::incoming::web::routes::delete_topic_handler,

        // Entries
        crate::faq::adapter::incoming::web::routes::list_topic_details_handler,
        crate::faq::adapter::incoming::web::routes::create_topic_detail_handler,
        crate::faq::adapter::incoming::web::routes::update_topic_detail_handler,
        crate::faq::adapter::incoming::web::routes::delete_topic_detail_handler,
    ),
    components(
        schemas(
            // Response wrappers
            ErrorResponse,
            ErrorDetail,
            EmptyData,

            // FAQ DTOs
            TopicResponse,
            SaveTopicRequest,
            SaveTopicResponse,
            TopicDetailResponse,
            SaveTopicDetailRequest,
            SaveTopicDetailResponse
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "faq", description = "FAQ topics and entries"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Admin access token"))
                        .build(),
                ),
            )
        }
    }
}
