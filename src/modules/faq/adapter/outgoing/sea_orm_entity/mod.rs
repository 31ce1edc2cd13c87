pub mod topic_details;
pub mod topics;
