use async_trait::async_trait;

use crate::faq::application::ports::{
    incoming::use_cases::{ListTopicsError, ListTopicsUseCase},
    outgoing::{FaqQuery, PageRequest, TopicListItem},
};

#[derive(Debug, Clone)]
pub struct ListTopicsService<Q>
where
    Q: FaqQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListTopicsService<Q>
where
    Q: FaqQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListTopicsUseCase for ListTopicsService<Q>
where
    Q: FaqQuery + Send + Sync,
{
    async fn execute(&self, page: PageRequest) -> Result<Vec<TopicListItem>, ListTopicsError> {
        self.query
            .list_topics(page)
            .await
            .map_err(|e| ListTopicsError::QueryFailed(e.to_string()))
    }
}
