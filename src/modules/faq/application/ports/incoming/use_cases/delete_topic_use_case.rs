use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::Principal,
    faq::application::ports::incoming::use_cases::DeleteCommand,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeleteTopicError {
    #[error("Forbidden access")]
    Forbidden,

    #[error("invalid topic id: data not found")]
    TopicNotFound,

    #[error("data with given id has been deleted")]
    AlreadyDeleted,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteTopicUseCase: Send + Sync {
    async fn execute(
        &self,
        principal: &Principal,
        command: DeleteCommand,
    ) -> Result<(), DeleteTopicError>;
}
