use async_trait::async_trait;

use crate::faq::application::ports::outgoing::{
    PageRequest, TopicDetailFilter, TopicDetailListItem,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListTopicDetailsError {
    #[error("Failed to fetch topic details: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait ListTopicDetailsUseCase: Send + Sync {
    async fn execute(
        &self,
        filter: TopicDetailFilter,
        page: PageRequest,
    ) -> Result<Vec<TopicDetailListItem>, ListTopicDetailsError>;
}
