use async_trait::async_trait;

use crate::faq::application::domain::entities::{AuditStamp, Topic, TopicDetail};

/// Fields written on every detail create/update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicDetailData {
    pub topic_id: i32,
    pub topic_name: String,
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FaqRepositoryError {
    #[error("Topic not found")]
    TopicNotFound,

    #[error("Topic detail not found")]
    DetailNotFound,

    #[error("Record has already been deleted")]
    AlreadyDeleted,

    #[error("Topic name already exists")]
    DuplicateTopicName,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Write-side port over topics and their details.
///
/// Operations that touch both tables (`rename_topic`, `soft_delete_topic`)
/// must apply the topic change and the detail cascade atomically.
#[async_trait]
pub trait FaqRepository: Send + Sync {
    async fn find_topic(&self, topic_id: i32) -> Result<Option<Topic>, FaqRepositoryError>;

    /// Soft-deleted topic carrying exactly `name`, if any.
    async fn find_deleted_topic_by_name(
        &self,
        name: &str,
    ) -> Result<Option<Topic>, FaqRepositoryError>;

    async fn create_topic(
        &self,
        name: &str,
        stamp: &AuditStamp,
    ) -> Result<Topic, FaqRepositoryError>;

    async fn restore_topic(
        &self,
        topic_id: i32,
        stamp: &AuditStamp,
    ) -> Result<Topic, FaqRepositoryError>;

    /// Renames the topic and copies the new name onto its active details.
    /// Returns the number of details rewritten.
    async fn rename_topic(
        &self,
        topic_id: i32,
        name: &str,
        stamp: &AuditStamp,
    ) -> Result<u64, FaqRepositoryError>;

    /// Soft-deletes the topic and its active details.
    /// Returns the number of details deleted alongside it.
    async fn soft_delete_topic(
        &self,
        topic_id: i32,
        stamp: &AuditStamp,
    ) -> Result<u64, FaqRepositoryError>;

    async fn find_detail(&self, detail_id: i32)
        -> Result<Option<TopicDetail>, FaqRepositoryError>;

    async fn create_detail(
        &self,
        data: TopicDetailData,
        stamp: &AuditStamp,
    ) -> Result<TopicDetail, FaqRepositoryError>;

    async fn update_detail(
        &self,
        detail_id: i32,
        data: TopicDetailData,
        stamp: &AuditStamp,
    ) -> Result<TopicDetail, FaqRepositoryError>;

    async fn soft_delete_detail(
        &self,
        detail_id: i32,
        stamp: &AuditStamp,
    ) -> Result<(), FaqRepositoryError>;
}
