use async_trait::async_trait;
use tracing::info;

use crate::{
    auth::application::domain::entities::Principal,
    faq::application::{
        domain::entities::AuditStamp,
        ports::{
            incoming::use_cases::{
                SaveTopicCommand, SaveTopicError, SaveTopicOutcome, SaveTopicUseCase,
            },
            outgoing::{FaqRepository, FaqRepositoryError},
        },
    },
};

#[derive(Debug, Clone)]
pub struct SaveTopicService<R>
where
    R: FaqRepository + Send + Sync,
{
    repository: R,
}

impl<R> SaveTopicService<R>
where
    R: FaqRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

fn map_repository_error(e: FaqRepositoryError) -> SaveTopicError {
    match e {
        FaqRepositoryError::TopicNotFound => SaveTopicError::TopicNotFound,
        FaqRepositoryError::DuplicateTopicName => SaveTopicError::DuplicateTopicName,
        other => SaveTopicError::RepositoryError(other.to_string()),
    }
}

#[async_trait]
impl<R> SaveTopicUseCase for SaveTopicService<R>
where
    R: FaqRepository + Send + Sync,
{
    async fn execute(
        &self,
        principal: &Principal,
        command: SaveTopicCommand,
    ) -> Result<SaveTopicOutcome, SaveTopicError> {
        if !principal.is_admin() {
            return Err(SaveTopicError::Forbidden);
        }

        let stamp = AuditStamp::by(principal);

        // A soft-deleted topic with the same name is revived, whatever id was sent.
        if let Some(deleted) = self
            .repository
            .find_deleted_topic_by_name(command.name())
            .await
            .map_err(map_repository_error)?
        {
            let topic = self
                .repository
                .restore_topic(deleted.id, &stamp)
                .await
                .map_err(map_repository_error)?;

            info!(topic_id = topic.id, actor = %stamp.actor, "Topic restored");
            return Ok(SaveTopicOutcome {
                name: topic.name,
                restored: true,
            });
        }

        match command.topic_id() {
            Some(topic_id) => {
                let existing = self
                    .repository
                    .find_topic(topic_id)
                    .await
                    .map_err(map_repository_error)?
                    .ok_or(SaveTopicError::TopicNotFound)?;

                let cascaded = self
                    .repository
                    .rename_topic(existing.id, command.name(), &stamp)
                    .await
                    .map_err(map_repository_error)?;

                info!(
                    topic_id = existing.id,
                    details_updated = cascaded,
                    actor = %stamp.actor,
                    "Topic renamed"
                );
            }
            None => {
                let topic = self
                    .repository
                    .create_topic(command.name(), &stamp)
                    .await
                    .map_err(map_repository_error)?;

                info!(topic_id = topic.id, actor = %stamp.actor, "Topic created");
            }
        }

        Ok(SaveTopicOutcome {
            name: command.name().to_string(),
            restored: false,
        })
    }
}
