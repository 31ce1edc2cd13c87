use sea_orm::entity::prelude::*;

use crate::faq::application::domain::entities::{RowStatus, TopicDetail};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "master_faq_detail")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub question: String,

    #[sea_orm(column_type = "Text")]
    pub answer: String,

    /// Copy of the owning topic's name, rewritten on rename.
    pub faq_name: Option<String>,

    pub faq_id: i32,

    pub rowstatus: i32,

    pub created_by: Option<String>,

    pub created_date: DateTimeWithTimeZone,

    pub modified_by: Option<String>,

    pub modified_date: Option<DateTimeWithTimeZone>,
}

impl Model {
    pub fn to_domain(&self) -> TopicDetail {
        TopicDetail {
            id: self.id,
            topic_id: self.faq_id,
            topic_name: self.faq_name.clone().unwrap_or_default(),
            question: self.question.clone(),
            answer: self.answer.clone(),
            status: RowStatus::from_i32(self.rowstatus),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::topics::Entity",
        from = "Column::FaqId",
        to = "super::topics::Column::Id"
    )]
    Topic,
}

impl Related<super::topics::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Topic.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
