use async_trait::async_trait;
use tracing::info;

use crate::{
    auth::application::domain::entities::Principal,
    faq::application::{
        domain::entities::AuditStamp,
        ports::{
            incoming::use_cases::{DeleteCommand, DeleteTopicDetailError, DeleteTopicDetailUseCase},
            outgoing::{FaqRepository, FaqRepositoryError},
        },
    },
};

#[derive(Debug, Clone)]
pub struct DeleteTopicDetailService<R>
where
    R: FaqRepository + Send + Sync,
{
    repository: R,
}

impl<R> DeleteTopicDetailService<R>
where
    R: FaqRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

fn map_repository_error(e: FaqRepositoryError) -> DeleteTopicDetailError {
    match e {
        FaqRepositoryError::DetailNotFound => DeleteTopicDetailError::DetailNotFound,
        FaqRepositoryError::AlreadyDeleted => DeleteTopicDetailError::AlreadyDeleted,
        other => DeleteTopicDetailError::RepositoryError(other.to_string()),
    }
}

#[async_trait]
impl<R> DeleteTopicDetailUseCase for DeleteTopicDetailService<R>
where
    R: FaqRepository + Send + Sync,
{
    async fn execute(
        &self,
        principal: &Principal,
        command: DeleteCommand,
    ) -> Result<(), DeleteTopicDetailError> {
        if !principal.is_admin() {
            return Err(DeleteTopicDetailError::Forbidden);
        }

        let detail = self
            .repository
            .find_detail(command.id())
            .await
            .map_err(map_repository_error)?
            .ok_or(DeleteTopicDetailError::DetailNotFound)?;

        if !detail.is_active() {
            return Err(DeleteTopicDetailError::AlreadyDeleted);
        }

        let stamp = AuditStamp::by(principal);
        self.repository
            .soft_delete_detail(detail.id, &stamp)
            .await
            .map_err(map_repository_error)?;

        info!(detail_id = detail.id, actor = %stamp.actor, "Topic detail soft-deleted");

        Ok(())
    }
}
