mod faq_query_postgres;
mod faq_repository_postgres;
pub mod sea_orm_entity;

pub use faq_query_postgres::FaqQueryPostgres;
pub use faq_repository_postgres::FaqRepositoryPostgres;
