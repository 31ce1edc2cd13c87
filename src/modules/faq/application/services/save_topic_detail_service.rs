use async_trait::async_trait;
use tracing::info;

use crate::{
    auth::application::domain::entities::Principal,
    faq::application::{
        domain::entities::{AuditStamp, TopicDetail},
        ports::{
            incoming::use_cases::{
                SaveTopicDetailCommand, SaveTopicDetailError, SaveTopicDetailUseCase,
            },
            outgoing::{FaqRepository, FaqRepositoryError, TopicDetailData},
        },
    },
};

#[derive(Debug, Clone)]
pub struct SaveTopicDetailService<R>
where
    R: FaqRepository + Send + Sync,
{
    repository: R,
}

impl<R> SaveTopicDetailService<R>
where
    R: FaqRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> SaveTopicDetailUseCase for SaveTopicDetailService<R>
where
    R: FaqRepository + Send + Sync,
{
    async fn execute(
        &self,
        principal: &Principal,
        command: SaveTopicDetailCommand,
    ) -> Result<TopicDetail, SaveTopicDetailError> {
        if !principal.is_admin() {
            return Err(SaveTopicDetailError::Forbidden);
        }

        let topic_id = command.topic_id();
        let map_error = |e: FaqRepositoryError| match e {
            FaqRepositoryError::TopicNotFound => SaveTopicDetailError::TopicNotFound(topic_id),
            FaqRepositoryError::DetailNotFound => SaveTopicDetailError::DetailNotFound,
            other => SaveTopicDetailError::RepositoryError(other.to_string()),
        };

        // Owning topic is resolved regardless of its status.
        let topic = self
            .repository
            .find_topic(topic_id)
            .await
            .map_err(map_error)?
            .ok_or(SaveTopicDetailError::TopicNotFound(topic_id))?;

        let data = TopicDetailData {
            topic_id: topic.id,
            topic_name: topic.name,
            question: command.question().to_string(),
            answer: command.answer().to_string(),
        };
        let stamp = AuditStamp::by(principal);

        let detail = match command.detail_id() {
            Some(detail_id) => self
                .repository
                .update_detail(detail_id, data, &stamp)
                .await
                .map_err(map_error)?,
            None => self
                .repository
                .create_detail(data, &stamp)
                .await
                .map_err(map_error)?,
        };

        info!(
            detail_id = detail.id,
            topic_id = detail.topic_id,
            actor = %stamp.actor,
            "Topic detail saved"
        );

        Ok(detail)
    }
}
