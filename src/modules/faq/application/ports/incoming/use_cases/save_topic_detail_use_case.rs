use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::Principal,
    faq::application::domain::entities::{TopicDetail, QUESTION_MAX_LEN},
};

//
// ──────────────────────────────────────────────────────────
// Save Topic Detail Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveTopicDetailCommand {
    topic_id: i32,
    question: String,
    answer: String,
    detail_id: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SaveTopicDetailCommandError {
    #[error("please provide topic_id")]
    MissingTopicId,

    #[error("please provide question")]
    MissingQuestion,

    #[error("please provide answer")]
    MissingAnswer,

    #[error("question must be at most 500 characters")]
    QuestionTooLong,
}

impl SaveTopicDetailCommand {
    /// Fields are checked in request order: topic_id, question, answer.
    pub fn new(
        topic_id: Option<i32>,
        question: Option<String>,
        answer: Option<String>,
        detail_id: Option<i32>,
    ) -> Result<Self, SaveTopicDetailCommandError> {
        let topic_id = topic_id
            .filter(|id| *id != 0)
            .ok_or(SaveTopicDetailCommandError::MissingTopicId)?;

        let question = question
            .filter(|q| !q.trim().is_empty())
            .ok_or(SaveTopicDetailCommandError::MissingQuestion)?;

        let answer = answer
            .filter(|a| !a.trim().is_empty())
            .ok_or(SaveTopicDetailCommandError::MissingAnswer)?;

        if question.chars().count() > QUESTION_MAX_LEN {
            return Err(SaveTopicDetailCommandError::QuestionTooLong);
        }

        Ok(Self {
            topic_id,
            question,
            answer,
            detail_id: detail_id.filter(|id| *id != 0),
        })
    }

    pub fn topic_id(&self) -> i32 {
        self.topic_id
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn detail_id(&self) -> Option<i32> {
        self.detail_id
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SaveTopicDetailError {
    #[error("Forbidden access")]
    Forbidden,

    #[error("topic with id:{0} is not found")]
    TopicNotFound(i32),

    #[error("invalid FAQDetail id: data not found")]
    DetailNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait SaveTopicDetailUseCase: Send + Sync {
    async fn execute(
        &self,
        principal: &Principal,
        command: SaveTopicDetailCommand,
    ) -> Result<TopicDetail, SaveTopicDetailError>;
}
