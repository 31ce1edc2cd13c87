use async_trait::async_trait;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, Set, SqlErr, TransactionTrait,
};
use std::sync::Arc;
use tracing::error;

use crate::faq::application::{
    domain::entities::{AuditStamp, RowStatus, Topic, TopicDetail},
    ports::outgoing::{FaqRepository, FaqRepositoryError, TopicDetailData},
};

use super::sea_orm_entity::{topic_details, topics};

#[derive(Debug, Clone)]
pub struct FaqRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl FaqRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> FaqRepositoryError {
        if is_unique_violation(&e) {
            return FaqRepositoryError::DuplicateTopicName;
        }
        error!(error = %e, "FAQ store operation failed");
        FaqRepositoryError::DatabaseError(e.to_string())
    }
}

fn is_unique_violation(e: &DbErr) -> bool {
    if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
        return true;
    }

    let err_str = e.to_string().to_lowercase();
    err_str.contains("23505")
        || err_str.contains("duplicate key")
        || err_str.contains("unique constraint")
}

#[async_trait]
impl FaqRepository for FaqRepositoryPostgres {
    async fn find_topic(&self, topic_id: i32) -> Result<Option<Topic>, FaqRepositoryError> {
        let model = topics::Entity::find_by_id(topic_id)
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(model.map(|m| m.to_domain()))
    }

    async fn find_deleted_topic_by_name(
        &self,
        name: &str,
    ) -> Result<Option<Topic>, FaqRepositoryError> {
        let model = topics::Entity::find()
            .filter(topics::Column::Name.eq(name))
            .filter(topics::Column::Rowstatus.eq(RowStatus::Deleted.as_i32()))
            .order_by_desc(topics::Column::Id)
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(model.map(|m| m.to_domain()))
    }

    async fn create_topic(
        &self,
        name: &str,
        stamp: &AuditStamp,
    ) -> Result<Topic, FaqRepositoryError> {
        let now = stamp.at.fixed_offset();
        let active = topics::ActiveModel {
            name: Set(name.to_string()),
            rowstatus: Set(RowStatus::Active.as_i32()),
            created_by: Set(Some(stamp.actor.clone())),
            created_date: Set(now),
            modified_by: Set(Some(stamp.actor.clone())),
            modified_date: Set(Some(now)),
            ..Default::default()
        };

        let inserted = active.insert(&*self.db).await.map_err(Self::map_db_err)?;

        Ok(inserted.to_domain())
    }

    async fn restore_topic(
        &self,
        topic_id: i32,
        stamp: &AuditStamp,
    ) -> Result<Topic, FaqRepositoryError> {
        let active = topics::ActiveModel {
            id: Set(topic_id),
            rowstatus: Set(RowStatus::Active.as_i32()),
            modified_by: Set(Some(stamp.actor.clone())),
            modified_date: Set(Some(stamp.at.fixed_offset())),
            ..Default::default()
        };

        let updated = active.update(&*self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => FaqRepositoryError::TopicNotFound,
            other => Self::map_db_err(other),
        })?;

        Ok(updated.to_domain())
    }

    async fn rename_topic(
        &self,
        topic_id: i32,
        name: &str,
        stamp: &AuditStamp,
    ) -> Result<u64, FaqRepositoryError> {
        let now = stamp.at.fixed_offset();
        let txn = self.db.begin().await.map_err(Self::map_db_err)?;

        let renamed = match topics::Entity::update_many()
            .col_expr(topics::Column::Name, Expr::value(name.to_string()))
            .col_expr(topics::Column::ModifiedBy, Expr::value(stamp.actor.clone()))
            .col_expr(topics::Column::ModifiedDate, Expr::value(now))
            .filter(topics::Column::Id.eq(topic_id))
            .exec(&txn)
            .await
        {
            Ok(res) => res,
            Err(e) => {
                let _ = txn.rollback().await;
                return Err(Self::map_db_err(e));
            }
        };

        if renamed.rows_affected == 0 {
            let _ = txn.rollback().await;
            return Err(FaqRepositoryError::TopicNotFound);
        }

        // Deleted details keep the name they had when they were deleted.
        let cascaded = match topic_details::Entity::update_many()
            .col_expr(topic_details::Column::FaqName, Expr::value(name.to_string()))
            .col_expr(topic_details::Column::ModifiedBy, Expr::value(stamp.actor.clone()))
            .col_expr(topic_details::Column::ModifiedDate, Expr::value(now))
            .filter(topic_details::Column::FaqId.eq(topic_id))
            .filter(topic_details::Column::Rowstatus.eq(RowStatus::Active.as_i32()))
            .exec(&txn)
            .await
        {
            Ok(res) => res,
            Err(e) => {
                let _ = txn.rollback().await;
                return Err(Self::map_db_err(e));
            }
        };

        txn.commit().await.map_err(Self::map_db_err)?;

        Ok(cascaded.rows_affected)
    }

    async fn soft_delete_topic(
        &self,
        topic_id: i32,
        stamp: &AuditStamp,
    ) -> Result<u64, FaqRepositoryError> {
        let now = stamp.at.fixed_offset();
        let txn = self.db.begin().await.map_err(Self::map_db_err)?;

        let deleted = match topics::Entity::update_many()
            .col_expr(
                topics::Column::Rowstatus,
                Expr::value(RowStatus::Deleted.as_i32()),
            )
            .col_expr(topics::Column::ModifiedBy, Expr::value(stamp.actor.clone()))
            .col_expr(topics::Column::ModifiedDate, Expr::value(now))
            .filter(topics::Column::Id.eq(topic_id))
            .filter(topics::Column::Rowstatus.eq(RowStatus::Active.as_i32()))
            .exec(&txn)
            .await
        {
            Ok(res) => res,
            Err(e) => {
                let _ = txn.rollback().await;
                return Err(Self::map_db_err(e));
            }
        };

        // Guarded on rowstatus, so a concurrent delete lands here.
        if deleted.rows_affected == 0 {
            let _ = txn.rollback().await;
            return Err(FaqRepositoryError::AlreadyDeleted);
        }

        let cascaded = match topic_details::Entity::update_many()
            .col_expr(
                topic_details::Column::Rowstatus,
                Expr::value(RowStatus::Deleted.as_i32()),
            )
            .col_expr(topic_details::Column::ModifiedBy, Expr::value(stamp.actor.clone()))
            .col_expr(topic_details::Column::ModifiedDate, Expr::value(now))
            .filter(topic_details::Column::FaqId.eq(topic_id))
            .filter(topic_details::Column::Rowstatus.eq(RowStatus::Active.as_i32()))
            .exec(&txn)
            .await
        {
            Ok(res) => res,
            Err(e) => {
                let _ = txn.rollback().await;
                return Err(Self::map_db_err(e));
            }
        };

        txn.commit().await.map_err(Self::map_db_err)?;

        Ok(cascaded.rows_affected)
    }

    async fn find_detail(
        &self,
        detail_id: i32,
    ) -> Result<Option<TopicDetail>, FaqRepositoryError> {
        let model = topic_details::Entity::find_by_id(detail_id)
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(model.map(|m| m.to_domain()))
    }

    async fn create_detail(
        &self,
        data: TopicDetailData,
        stamp: &AuditStamp,
    ) -> Result<TopicDetail, FaqRepositoryError> {
        let now = stamp.at.fixed_offset();
        let active = topic_details::ActiveModel {
            question: Set(data.question),
            answer: Set(data.answer),
            faq_name: Set(Some(data.topic_name)),
            faq_id: Set(data.topic_id),
            rowstatus: Set(RowStatus::Active.as_i32()),
            created_by: Set(Some(stamp.actor.clone())),
            created_date: Set(now),
            modified_by: Set(Some(stamp.actor.clone())),
            modified_date: Set(Some(now)),
            ..Default::default()
        };

        let inserted = active.insert(&*self.db).await.map_err(Self::map_db_err)?;

        Ok(inserted.to_domain())
    }

    async fn update_detail(
        &self,
        detail_id: i32,
        data: TopicDetailData,
        stamp: &AuditStamp,
    ) -> Result<TopicDetail, FaqRepositoryError> {
        let active = topic_details::ActiveModel {
            id: Set(detail_id),
            question: Set(data.question),
            answer: Set(data.answer),
            faq_name: Set(Some(data.topic_name)),
            faq_id: Set(data.topic_id),
            modified_by: Set(Some(stamp.actor.clone())),
            modified_date: Set(Some(stamp.at.fixed_offset())),
            ..Default::default()
        };

        let updated = active.update(&*self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => FaqRepositoryError::DetailNotFound,
            other => Self::map_db_err(other),
        })?;

        Ok(updated.to_domain())
    }

    async fn soft_delete_detail(
        &self,
        detail_id: i32,
        stamp: &AuditStamp,
    ) -> Result<(), FaqRepositoryError> {
        let result = topic_details::Entity::update_many()
            .col_expr(
                topic_details::Column::Rowstatus,
                Expr::value(RowStatus::Deleted.as_i32()),
            )
            .col_expr(topic_details::Column::ModifiedBy, Expr::value(stamp.actor.clone()))
            .col_expr(
                topic_details::Column::ModifiedDate,
                Expr::value(stamp.at.fixed_offset()),
            )
            .filter(topic_details::Column::Id.eq(detail_id))
            .filter(topic_details::Column::Rowstatus.eq(RowStatus::Active.as_i32()))
            .exec(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        if result.rows_affected == 0 {
            return Err(FaqRepositoryError::AlreadyDeleted);
        }

        Ok(())
    }
}
