mod delete_topic_detail_service;
mod delete_topic_service;
mod list_topic_details_service;
mod list_topics_service;
mod save_topic_detail_service;
mod save_topic_service;

pub use delete_topic_detail_service::DeleteTopicDetailService;
pub use delete_topic_service::DeleteTopicService;
pub use list_topic_details_service::ListTopicDetailsService;
pub use list_topics_service::ListTopicsService;
pub use save_topic_detail_service::SaveTopicDetailService;
pub use save_topic_service::SaveTopicService;
