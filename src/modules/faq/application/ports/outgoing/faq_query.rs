use async_trait::async_trait;

const MAX_SQL_BIGINT: u64 = i64::MAX as u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based
    pub page_index: u64,
    /// `None` returns every matching row.
    pub page_size: Option<u64>,
}

impl PageRequest {
    pub fn new(page_index: Option<u64>, page_size: Option<u64>) -> Self {
        Self {
            page_index: page_index.filter(|p| *p > 0).unwrap_or(1),
            page_size: page_size.filter(|s| *s > 0),
        }
    }

    pub fn all() -> Self {
        Self::new(None, None)
    }

    /// `(offset, limit)` to apply, or `None` when unpaginated.
    ///
    /// Both are capped at `i64::MAX`, the largest value Postgres accepts.
    pub fn window(&self) -> Option<(u64, u64)> {
        self.page_size.map(|size| {
            let size = size.min(MAX_SQL_BIGINT);
            let offset = self
                .page_index
                .saturating_sub(1)
                .saturating_mul(size)
                .min(MAX_SQL_BIGINT);
            (offset, size)
        })
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::all()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicListItem {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicDetailListItem {
    pub topic: String,
    pub id: i32,
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopicDetailFilter {
    /// Exact match on the detail's denormalized topic name.
    pub topic_name: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum FaqQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Read-side port. Only active rows are ever returned.
#[async_trait]
pub trait FaqQuery: Send + Sync {
    /// Ordered by id ascending.
    async fn list_topics(&self, page: PageRequest) -> Result<Vec<TopicListItem>, FaqQueryError>;

    /// Ordered by topic name ascending.
    async fn list_topic_details(
        &self,
        filter: TopicDetailFilter,
        page: PageRequest,
    ) -> Result<Vec<TopicDetailListItem>, FaqQueryError>;
}
