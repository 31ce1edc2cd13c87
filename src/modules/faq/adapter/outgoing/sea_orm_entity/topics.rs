use sea_orm::entity::prelude::*;

use crate::faq::application::domain::entities::{RowStatus, Topic};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "master_faq")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub name: String,

    pub rowstatus: i32,

    pub created_by: Option<String>,

    pub created_date: DateTimeWithTimeZone,

    pub modified_by: Option<String>,

    pub modified_date: Option<DateTimeWithTimeZone>,
}

impl Model {
    pub fn to_domain(&self) -> Topic {
        Topic {
            id: self.id,
            name: self.name.clone(),
            status: RowStatus::from_i32(self.rowstatus),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::topic_details::Entity")]
    TopicDetails,
}

impl Related<super::topic_details::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TopicDetails.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
