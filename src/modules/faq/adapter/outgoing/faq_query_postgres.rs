use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::sync::Arc;
use tracing::error;

use crate::faq::application::{
    domain::entities::RowStatus,
    ports::outgoing::{
        FaqQuery, FaqQueryError, PageRequest, TopicDetailFilter, TopicDetailListItem,
        TopicListItem,
    },
};

use super::sea_orm_entity::{topic_details, topics};

#[derive(Debug, Clone)]
pub struct FaqQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl FaqQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

/// Applies offset/limit only when a page size was requested.
fn paginate<S: QuerySelect>(query: S, page: PageRequest) -> S {
    match page.window() {
        Some((offset, limit)) => query.offset(offset).limit(limit),
        None => query,
    }
}

fn map_db_err(e: sea_orm::DbErr) -> FaqQueryError {
    error!(error = %e, "FAQ list query failed");
    FaqQueryError::DatabaseError(e.to_string())
}

#[async_trait]
impl FaqQuery for FaqQueryPostgres {
    async fn list_topics(&self, page: PageRequest) -> Result<Vec<TopicListItem>, FaqQueryError> {
        let query = topics::Entity::find()
            .filter(topics::Column::Rowstatus.eq(RowStatus::Active.as_i32()))
            .order_by_asc(topics::Column::Id);

        let models = paginate(query, page)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models
            .into_iter()
            .map(|m| TopicListItem {
                id: m.id,
                name: m.name,
            })
            .collect())
    }

    async fn list_topic_details(
        &self,
        filter: TopicDetailFilter,
        page: PageRequest,
    ) -> Result<Vec<TopicDetailListItem>, FaqQueryError> {
        let mut query = topic_details::Entity::find()
            .filter(topic_details::Column::Rowstatus.eq(RowStatus::Active.as_i32()));

        if let Some(topic_name) = filter.topic_name {
            query = query.filter(topic_details::Column::FaqName.eq(topic_name));
        }

        let query = query
            .order_by_asc(topic_details::Column::FaqName)
            .order_by_asc(topic_details::Column::Id);

        let models = paginate(query, page)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models
            .into_iter()
            .map(|m| TopicDetailListItem {
                topic: m.faq_name.unwrap_or_default(),
                id: m.id,
                question: m.question,
                answer: m.answer,
            })
            .collect())
    }
}
