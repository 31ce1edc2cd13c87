mod faq_query;
mod faq_repository;

pub use faq_query::{
    FaqQuery, FaqQueryError, PageRequest, TopicDetailFilter, TopicDetailListItem, TopicListItem,
};
pub use faq_repository::{FaqRepository, FaqRepositoryError, TopicDetailData};
