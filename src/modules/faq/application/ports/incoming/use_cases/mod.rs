mod delete_command;
mod delete_topic_detail_use_case;
mod delete_topic_use_case;
mod list_topic_details_use_case;
mod list_topics_use_case;
mod save_topic_detail_use_case;
mod save_topic_use_case;

pub use delete_command::{DeleteCommand, DeleteCommandError};
pub use delete_topic_detail_use_case::{DeleteTopicDetailError, DeleteTopicDetailUseCase};
pub use delete_topic_use_case::{DeleteTopicError, DeleteTopicUseCase};
pub use list_topic_details_use_case::{ListTopicDetailsError, ListTopicDetailsUseCase};
pub use list_topics_use_case::{ListTopicsError, ListTopicsUseCase};
pub use save_topic_detail_use_case::{
    SaveTopicDetailCommand, SaveTopicDetailCommandError, SaveTopicDetailError,
    SaveTopicDetailUseCase,
};
pub use save_topic_use_case::{
    SaveTopicCommand, SaveTopicCommandError, SaveTopicError, SaveTopicOutcome, SaveTopicUseCase,
};
