use std::sync::Mutex;

use async_trait::async_trait;

use crate::faq::application::{
    domain::entities::{AuditStamp, RowStatus, Topic, TopicDetail},
    ports::outgoing::{FaqRepository, FaqRepositoryError, TopicDetailData},
};

#[derive(Debug, Clone)]
pub struct StoredTopic {
    pub topic: Topic,
    pub modified_by: Option<String>,
}

#[derive(Debug, Clone)]
pub struct StoredDetail {
    pub detail: TopicDetail,
    pub modified_by: Option<String>,
}

#[derive(Debug, Default)]
struct Tables {
    topics: Vec<StoredTopic>,
    details: Vec<StoredDetail>,
    writes: usize,
}

/// Store double that applies the same cascade rules as the Postgres adapter,
/// so services can be tested against observable row state.
#[derive(Debug, Default)]
pub struct InMemoryFaqRepository {
    tables: Mutex<Tables>,
}

impl InMemoryFaqRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_topic(self, id: i32, name: &str, status: RowStatus) -> Self {
        self.tables.lock().unwrap().topics.push(StoredTopic {
            topic: Topic {
                id,
                name: name.to_string(),
                status,
            },
            modified_by: None,
        });
        self
    }

    pub fn with_detail(self, id: i32, topic_id: i32, status: RowStatus) -> Self {
        {
            let mut tables = self.tables.lock().unwrap();
            let topic_name = tables
                .topics
                .iter()
                .find(|t| t.topic.id == topic_id)
                .map(|t| t.topic.name.clone())
                .unwrap_or_default();
            tables.details.push(StoredDetail {
                detail: TopicDetail {
                    id,
                    topic_id,
                    topic_name,
                    question: format!("question {}", id),
                    answer: format!("answer {}", id),
                    status,
                },
                modified_by: None,
            });
        }
        self
    }

    pub fn topic(&self, id: i32) -> Option<StoredTopic> {
        let tables = self.tables.lock().unwrap();
        tables.topics.iter().find(|t| t.topic.id == id).cloned()
    }

    pub fn detail(&self, id: i32) -> Option<StoredDetail> {
        let tables = self.tables.lock().unwrap();
        tables.details.iter().find(|d| d.detail.id == id).cloned()
    }

    pub fn topic_count(&self) -> usize {
        self.tables.lock().unwrap().topics.len()
    }

    /// Number of mutating calls that changed state.
    pub fn writes(&self) -> usize {
        self.tables.lock().unwrap().writes
    }
}

impl Tables {
    fn next_topic_id(&self) -> i32 {
        self.topics.iter().map(|t| t.topic.id).max().unwrap_or(0) + 1
    }

    fn next_detail_id(&self) -> i32 {
        self.details.iter().map(|d| d.detail.id).max().unwrap_or(0) + 1
    }

    fn active_name_taken(&self, name: &str, except: Option<i32>) -> bool {
        self.topics.iter().any(|t| {
            t.topic.is_active() && t.topic.name == name && Some(t.topic.id) != except
        })
    }
}

#[async_trait]
impl FaqRepository for InMemoryFaqRepository {
    async fn find_topic(&self, topic_id: i32) -> Result<Option<Topic>, FaqRepositoryError> {
        Ok(self.topic(topic_id).map(|t| t.topic))
    }

    async fn find_deleted_topic_by_name(
        &self,
        name: &str,
    ) -> Result<Option<Topic>, FaqRepositoryError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .topics
            .iter()
            .find(|t| !t.topic.is_active() && t.topic.name == name)
            .map(|t| t.topic.clone()))
    }

    async fn create_topic(
        &self,
        name: &str,
        stamp: &AuditStamp,
    ) -> Result<Topic, FaqRepositoryError> {
        let mut tables = self.tables.lock().unwrap();
        if tables.active_name_taken(name, None) {
            return Err(FaqRepositoryError::DuplicateTopicName);
        }

        let topic = Topic {
            id: tables.next_topic_id(),
            name: name.to_string(),
            status: RowStatus::Active,
        };
        tables.topics.push(StoredTopic {
            topic: topic.clone(),
            modified_by: Some(stamp.actor.clone()),
        });
        tables.writes += 1;
        Ok(topic)
    }

    async fn restore_topic(
        &self,
        topic_id: i32,
        stamp: &AuditStamp,
    ) -> Result<Topic, FaqRepositoryError> {
        let mut tables = self.tables.lock().unwrap();
        let name = tables
            .topics
            .iter()
            .find(|t| t.topic.id == topic_id)
            .map(|t| t.topic.name.clone())
            .ok_or(FaqRepositoryError::TopicNotFound)?;
        if tables.active_name_taken(&name, Some(topic_id)) {
            return Err(FaqRepositoryError::DuplicateTopicName);
        }

        let stored = tables
            .topics
            .iter_mut()
            .find(|t| t.topic.id == topic_id)
            .ok_or(FaqRepositoryError::TopicNotFound)?;
        stored.topic.status = RowStatus::Active;
        stored.modified_by = Some(stamp.actor.clone());
        let topic = stored.topic.clone();
        tables.writes += 1;
        Ok(topic)
    }

    async fn rename_topic(
        &self,
        topic_id: i32,
        name: &str,
        stamp: &AuditStamp,
    ) -> Result<u64, FaqRepositoryError> {
        let mut tables = self.tables.lock().unwrap();
        let renamed_is_active = tables
            .topics
            .iter()
            .find(|t| t.topic.id == topic_id)
            .ok_or(FaqRepositoryError::TopicNotFound)?
            .topic
            .is_active();
        // The unique index only covers active rows.
        if renamed_is_active && tables.active_name_taken(name, Some(topic_id)) {
            return Err(FaqRepositoryError::DuplicateTopicName);
        }

        let stored = tables
            .topics
            .iter_mut()
            .find(|t| t.topic.id == topic_id)
            .ok_or(FaqRepositoryError::TopicNotFound)?;
        stored.topic.name = name.to_string();
        stored.modified_by = Some(stamp.actor.clone());

        let mut cascaded = 0;
        for stored in tables
            .details
            .iter_mut()
            .filter(|d| d.detail.topic_id == topic_id && d.detail.is_active())
        {
            stored.detail.topic_name = name.to_string();
            stored.modified_by = Some(stamp.actor.clone());
            cascaded += 1;
        }
        tables.writes += 1;
        Ok(cascaded)
    }

    async fn soft_delete_topic(
        &self,
        topic_id: i32,
        stamp: &AuditStamp,
    ) -> Result<u64, FaqRepositoryError> {
        let mut tables = self.tables.lock().unwrap();
        let stored = tables
            .topics
            .iter_mut()
            .find(|t| t.topic.id == topic_id)
            .ok_or(FaqRepositoryError::TopicNotFound)?;
        if !stored.topic.is_active() {
            return Err(FaqRepositoryError::AlreadyDeleted);
        }
        stored.topic.status = RowStatus::Deleted;
        stored.modified_by = Some(stamp.actor.clone());

        let mut cascaded = 0;
        for stored in tables
            .details
            .iter_mut()
            .filter(|d| d.detail.topic_id == topic_id && d.detail.is_active())
        {
            stored.detail.status = RowStatus::Deleted;
            stored.modified_by = Some(stamp.actor.clone());
            cascaded += 1;
        }
        tables.writes += 1;
        Ok(cascaded)
    }

    async fn find_detail(
        &self,
        detail_id: i32,
    ) -> Result<Option<TopicDetail>, FaqRepositoryError> {
        Ok(self.detail(detail_id).map(|d| d.detail))
    }

    async fn create_detail(
        &self,
        data: TopicDetailData,
        stamp: &AuditStamp,
    ) -> Result<TopicDetail, FaqRepositoryError> {
        let mut tables = self.tables.lock().unwrap();
        let detail = TopicDetail {
            id: tables.next_detail_id(),
            topic_id: data.topic_id,
            topic_name: data.topic_name,
            question: data.question,
            answer: data.answer,
            status: RowStatus::Active,
        };
        tables.details.push(StoredDetail {
            detail: detail.clone(),
            modified_by: Some(stamp.actor.clone()),
        });
        tables.writes += 1;
        Ok(detail)
    }

    async fn update_detail(
        &self,
        detail_id: i32,
        data: TopicDetailData,
        stamp: &AuditStamp,
    ) -> Result<TopicDetail, FaqRepositoryError> {
        let mut tables = self.tables.lock().unwrap();
        let stored = tables
            .details
            .iter_mut()
            .find(|d| d.detail.id == detail_id)
            .ok_or(FaqRepositoryError::DetailNotFound)?;
        stored.detail.topic_id = data.topic_id;
        stored.detail.topic_name = data.topic_name;
        stored.detail.question = data.question;
        stored.detail.answer = data.answer;
        stored.modified_by = Some(stamp.actor.clone());
        let detail = stored.detail.clone();
        tables.writes += 1;
        Ok(detail)
    }

    async fn soft_delete_detail(
        &self,
        detail_id: i32,
        stamp: &AuditStamp,
    ) -> Result<(), FaqRepositoryError> {
        let mut tables = self.tables.lock().unwrap();
        let stored = tables
            .details
            .iter_mut()
            .find(|d| d.detail.id == detail_id)
            .ok_or(FaqRepositoryError::DetailNotFound)?;
        if !stored.detail.is_active() {
            return Err(FaqRepositoryError::AlreadyDeleted);
        }
        stored.detail.status = RowStatus::Deleted;
        stored.modified_by = Some(stamp.actor.clone());
        tables.writes += 1;
        Ok(())
    }
}
