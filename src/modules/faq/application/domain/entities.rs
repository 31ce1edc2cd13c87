use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::auth::application::domain::entities::Principal;

pub const TOPIC_NAME_MAX_LEN: usize = 128;
pub const QUESTION_MAX_LEN: usize = 500;

/// Soft-delete flag stored in the `rowstatus` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RowStatus {
    Deleted = 0,
    Active = 1,
}

impl RowStatus {
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Anything other than 0 counts as active.
    pub fn from_i32(value: i32) -> Self {
        if value == 0 {
            RowStatus::Deleted
        } else {
            RowStatus::Active
        }
    }

    pub fn is_active(self) -> bool {
        self == RowStatus::Active
    }
}

/// Who changed a row and when; written to the `*_by` / `*_date` columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditStamp {
    pub actor: String,
    pub at: DateTime<Utc>,
}

impl AuditStamp {
    pub fn new(actor: impl Into<String>, at: DateTime<Utc>) -> Self {
        Self {
            actor: actor.into(),
            at,
        }
    }

    pub fn by(principal: &Principal) -> Self {
        Self::new(principal.username.clone(), Utc::now())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    pub id: i32,
    pub name: String,
    pub status: RowStatus,
}

impl Topic {
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicDetail {
    pub id: i32,
    pub topic_id: i32,
    pub topic_name: String,
    pub question: String,
    pub answer: String,
    pub status: RowStatus,
}

impl TopicDetail {
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }
}
