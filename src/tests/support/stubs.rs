use async_trait::async_trait;

use crate::auth::application::domain::entities::Principal;
use crate::faq::application::domain::entities::TopicDetail;
use crate::faq::application::ports::incoming::use_cases::{
    DeleteCommand, DeleteTopicDetailError, DeleteTopicDetailUseCase, DeleteTopicError,
    DeleteTopicUseCase, ListTopicDetailsError, ListTopicDetailsUseCase, ListTopicsError,
    ListTopicsUseCase, SaveTopicCommand, SaveTopicDetailCommand, SaveTopicDetailError,
    SaveTopicDetailUseCase, SaveTopicError, SaveTopicOutcome, SaveTopicUseCase,
};
use crate::faq::application::ports::outgoing::{
    PageRequest, TopicDetailFilter, TopicDetailListItem, TopicListItem,
};

#[derive(Default, Clone)]
pub struct StubListTopicsUseCase {
    topics: Vec<TopicListItem>,
}

impl StubListTopicsUseCase {
    pub fn success(topics: Vec<TopicListItem>) -> Self {
        Self { topics }
    }
}

#[async_trait]
impl ListTopicsUseCase for StubListTopicsUseCase {
    async fn execute(&self, _page: PageRequest) -> Result<Vec<TopicListItem>, ListTopicsError> {
        Ok(self.topics.clone())
    }
}

#[derive(Default, Clone)]
pub struct StubListTopicDetailsUseCase {
    details: Vec<TopicDetailListItem>,
}

impl StubListTopicDetailsUseCase {
    pub fn success(details: Vec<TopicDetailListItem>) -> Self {
        Self { details }
    }
}

#[async_trait]
impl ListTopicDetailsUseCase for StubListTopicDetailsUseCase {
    async fn execute(
        &self,
        _filter: TopicDetailFilter,
        _page: PageRequest,
    ) -> Result<Vec<TopicDetailListItem>, ListTopicDetailsError> {
        Ok(self.details.clone())
    }
}

#[derive(Default, Clone)]
pub struct StubSaveTopicUseCase;

#[async_trait]
impl SaveTopicUseCase for StubSaveTopicUseCase {
    async fn execute(
        &self,
        _principal: &Principal,
        _command: SaveTopicCommand,
    ) -> Result<SaveTopicOutcome, SaveTopicError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteTopicUseCase;

#[async_trait]
impl DeleteTopicUseCase for StubDeleteTopicUseCase {
    async fn execute(
        &self,
        _principal: &Principal,
        _command: DeleteCommand,
    ) -> Result<(), DeleteTopicError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubSaveTopicDetailUseCase;

#[async_trait]
impl SaveTopicDetailUseCase for StubSaveTopicDetailUseCase {
    async fn execute(
        &self,
        _principal: &Principal,
        _command: SaveTopicDetailCommand,
    ) -> Result<TopicDetail, SaveTopicDetailError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteTopicDetailUseCase;

#[async_trait]
impl DeleteTopicDetailUseCase for StubDeleteTopicDetailUseCase {
    async fn execute(
        &self,
        _principal: &Principal,
        _command: DeleteCommand,
    ) -> Result<(), DeleteTopicDetailError> {
        unimplemented!("Not used in this test")
    }
}
