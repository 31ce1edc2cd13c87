use async_trait::async_trait;

use crate::faq::application::ports::{
    incoming::use_cases::{ListTopicDetailsError, ListTopicDetailsUseCase},
    outgoing::{FaqQuery, PageRequest, TopicDetailFilter, TopicDetailListItem},
};

#[derive(Debug, Clone)]
pub struct ListTopicDetailsService<Q>
where
    Q: FaqQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListTopicDetailsService<Q>
where
    Q: FaqQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListTopicDetailsUseCase for ListTopicDetailsService<Q>
where
    Q: FaqQuery + Send + Sync,
{
    async fn execute(
        &self,
        filter: TopicDetailFilter,
        page: PageRequest,
    ) -> Result<Vec<TopicDetailListItem>, ListTopicDetailsError> {
        self.query
            .list_topic_details(filter, page)
            .await
            .map_err(|e| ListTopicDetailsError::QueryFailed(e.to_string()))
    }
}
