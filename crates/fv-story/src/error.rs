use thiserror::Error;

pub type StoryResult<T> = Result<T, StoryError>;

#[derive(Debug, Error)]
pub enum StoryError {
    #[error("story has no chapters")]
    EmptyStory,
    #[error("invalid story settings: {0}")]
    InvalidSettings(&'static str),
}
