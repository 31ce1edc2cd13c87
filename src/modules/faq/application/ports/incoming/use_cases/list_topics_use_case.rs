use async_trait::async_trait;

use crate::faq::application::ports::outgoing::{PageRequest, TopicListItem};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListTopicsError {
    #[error("Failed to fetch topics: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait ListTopicsUseCase: Send + Sync {
    async fn execute(&self, page: PageRequest) -> Result<Vec<TopicListItem>, ListTopicsError>;
}
