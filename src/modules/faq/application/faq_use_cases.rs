use std::sync::Arc;

use crate::faq::application::ports::incoming::use_cases::{
    DeleteTopicDetailUseCase, DeleteTopicUseCase, ListTopicDetailsUseCase, ListTopicsUseCase,
    SaveTopicDetailUseCase, SaveTopicUseCase,
};

#[derive(Clone)]
pub struct FaqUseCases {
    pub list_topics: Arc<dyn ListTopicsUseCase + Send + Sync>,
    pub save_topic: Arc<dyn SaveTopicUseCase + Send + Sync>,
    pub delete_topic: Arc<dyn DeleteTopicUseCase + Send + Sync>,
    pub list_details: Arc<dyn ListTopicDetailsUseCase + Send + Sync>,
    pub save_detail: Arc<dyn SaveTopicDetailUseCase + Send + Sync>,
    pub delete_detail: Arc<dyn DeleteTopicDetailUseCase + Send + Sync>,
}
