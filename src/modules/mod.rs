pub mod auth;
pub mod faq;
