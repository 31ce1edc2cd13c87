use std::sync::Arc;

use actix_web::web;

use crate::faq::application::faq_use_cases::FaqUseCases;
use crate::faq::application::ports::incoming::use_cases::{
    DeleteTopicDetailUseCase, DeleteTopicUseCase, ListTopicDetailsUseCase, ListTopicsUseCase,
    SaveTopicDetailUseCase, SaveTopicUseCase,
};
use crate::tests::support::stubs::*;
use crate::AppState;

pub struct TestAppStateBuilder {
    list_topics: Arc<dyn ListTopicsUseCase + Send + Sync>,
    save_topic: Arc<dyn SaveTopicUseCase + Send + Sync>,
    delete_topic: Arc<dyn DeleteTopicUseCase + Send + Sync>,
    list_details: Arc<dyn ListTopicDetailsUseCase + Send + Sync>,
    save_detail: Arc<dyn SaveTopicDetailUseCase + Send + Sync>,
    delete_detail: Arc<dyn DeleteTopicDetailUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            list_topics: Arc::new(StubListTopicsUseCase::default()),
            save_topic: Arc::new(StubSaveTopicUseCase),
            delete_topic: Arc::new(StubDeleteTopicUseCase),
            list_details: Arc::new(StubListTopicDetailsUseCase::default()),
            save_detail: Arc::new(StubSaveTopicDetailUseCase),
            delete_detail: Arc::new(StubDeleteTopicDetailUseCase),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_list_topics(mut self, uc: impl ListTopicsUseCase + Send + Sync + 'static) -> Self {
        self.list_topics = Arc::new(uc);
        self
    }

    pub fn with_save_topic(mut self, uc: impl SaveTopicUseCase + Send + Sync + 'static) -> Self {
        self.save_topic = Arc::new(uc);
        self
    }

    pub fn with_delete_topic(
        mut self,
        uc: impl DeleteTopicUseCase + Send + Sync + 'static,
    ) -> Self {
        self.delete_topic = Arc::new(uc);
        self
    }

    pub fn with_list_details(
        mut self,
        uc: impl ListTopicDetailsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.list_details = Arc::new(uc);
        self
    }

    pub fn with_save_detail(
        mut self,
        uc: impl SaveTopicDetailUseCase + Send + Sync + 'static,
    ) -> Self {
        self.save_detail = Arc::new(uc);
        self
    }

    pub fn with_delete_detail(
        mut self,
        uc: impl DeleteTopicDetailUseCase + Send + Sync + 'static,
    ) -> Self {
        self.delete_detail = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            faq: FaqUseCases {
                list_topics: self.list_topics,
                save_topic: self.save_topic,
                delete_topic: self.delete_topic,
                list_details: self.list_details,
                save_detail: self.save_detail,
                delete_detail: self.delete_detail,
            },
        })
    }
}
