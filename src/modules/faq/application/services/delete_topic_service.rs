use async_trait::async_trait;
use tracing::info;

use crate::{
    auth::application::domain::entities::Principal,
    faq::application::{
        domain::entities::AuditStamp,
        ports::{
            incoming::use_cases::{DeleteCommand, DeleteTopicError, DeleteTopicUseCase},
            outgoing::{FaqRepository, FaqRepositoryError},
        },
    },
};

#[derive(Debug, Clone)]
pub struct DeleteTopicService<R>
where
    R: FaqRepository + Send + Sync,
{
    repository: R,
}

impl<R> DeleteTopicService<R>
where
    R: FaqRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

fn map_repository_error(e: FaqRepositoryError) -> DeleteTopicError {
    match e {
        FaqRepositoryError::TopicNotFound => DeleteTopicError::TopicNotFound,
        FaqRepositoryError::AlreadyDeleted => DeleteTopicError::AlreadyDeleted,
        other => DeleteTopicError::RepositoryError(other.to_string()),
    }
}

#[async_trait]
impl<R> DeleteTopicUseCase for DeleteTopicService<R>
where
    R: FaqRepository + Send + Sync,
{
    async fn execute(
        &self,
        principal: &Principal,
        command: DeleteCommand,
    ) -> Result<(), DeleteTopicError> {
        if !principal.is_admin() {
            return Err(DeleteTopicError::Forbidden);
        }

        let topic = self
            .repository
            .find_topic(command.id())
            .await
            .map_err(map_repository_error)?
            .ok_or(DeleteTopicError::TopicNotFound)?;

        if !topic.is_active() {
            return Err(DeleteTopicError::AlreadyDeleted);
        }

        let stamp = AuditStamp::by(principal);
        let cascaded = self
            .repository
            .soft_delete_topic(topic.id, &stamp)
            .await
            .map_err(map_repository_error)?;

        info!(
            topic_id = topic.id,
            details_deleted = cascaded,
            actor = %stamp.actor,
            "Topic soft-deleted"
        );

        Ok(())
    }
}
