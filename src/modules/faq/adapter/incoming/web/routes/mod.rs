mod delete_topic;
mod delete_topic_detail;
mod list_topic_details;
mod list_topics;
mod save_topic;
mod save_topic_detail;

pub use delete_topic::*;
pub use delete_topic_detail::*;
pub use list_topic_details::*;
pub use list_topics::*;
pub use save_topic::*;
pub use save_topic_detail::*;
