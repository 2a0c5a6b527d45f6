#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LevelError {
    #[error("Level {0} is out of range (expected 0..=4)")]
    OutOfRange(i64),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Expected a non-empty list")]
pub struct EmptyListError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    #[error("Duplicate category label: {0}")]
    DuplicateCategory(String),

    #[error("Category {0} has no entries")]
    EmptyCategory(String),
}
