use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::Principal,
    faq::application::ports::incoming::use_cases::DeleteCommand,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeleteTopicDetailError {
    #[error("Forbidden access")]
    Forbidden,

    #[error("invalid FAQ id: data not found")]
    DetailNotFound,

    #[error("data with given id has been deleted")]
    AlreadyDeleted,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteTopicDetailUseCase: Send + Sync {
    async fn execute(
        &self,
        principal: &Principal,
        command: DeleteCommand,
    ) -> Result<(), DeleteTopicDetailError>;
}
