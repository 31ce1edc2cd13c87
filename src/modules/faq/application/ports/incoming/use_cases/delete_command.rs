/// Shared input of the topic and detail delete endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteCommand {
    id: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeleteCommandError {
    #[error("please provide id to be deleted")]
    MissingId,
}

impl DeleteCommand {
    pub fn new(id: Option<i32>) -> Result<Self, DeleteCommandError> {
        match id {
            Some(id) if id != 0 => Ok(Self { id }),
            _ => Err(DeleteCommandError::MissingId),
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }
}
