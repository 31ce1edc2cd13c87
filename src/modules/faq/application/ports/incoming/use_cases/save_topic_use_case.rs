use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::Principal,
    faq::application::domain::entities::TOPIC_NAME_MAX_LEN,
};

//
// ──────────────────────────────────────────────────────────
// Save Topic Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveTopicCommand {
    name: String,
    topic_id: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SaveTopicCommandError {
    #[error("please provide topic")]
    MissingTopic,

    #[error("topic must be at most 128 characters")]
    TopicTooLong,
}

impl SaveTopicCommand {
    /// An id of 0 is treated as absent, i.e. a create request.
    pub fn new(name: Option<String>, topic_id: Option<i32>) -> Result<Self, SaveTopicCommandError> {
        let name = name.unwrap_or_default();
        let name = name.trim();

        if name.is_empty() {
            return Err(SaveTopicCommandError::MissingTopic);
        }

        if name.chars().count() > TOPIC_NAME_MAX_LEN {
            return Err(SaveTopicCommandError::TopicTooLong);
        }

        Ok(Self {
            name: name.to_string(),
            topic_id: topic_id.filter(|id| *id != 0),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn topic_id(&self) -> Option<i32> {
        self.topic_id
    }
}

//
// ──────────────────────────────────────────────────────────
// Outcome / Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveTopicOutcome {
    pub name: String,
    /// True when a soft-deleted topic with this name was reactivated.
    pub restored: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SaveTopicError {
    #[error("Forbidden access")]
    Forbidden,

    #[error("invalid Topic id: data not found")]
    TopicNotFound,

    #[error("Cannot add duplicated data")]
    DuplicateTopicName,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait SaveTopicUseCase: Send + Sync {
    async fn execute(
        &self,
        principal: &Principal,
        command: SaveTopicCommand,
    ) -> Result<SaveTopicOutcome, SaveTopicError>;
}
