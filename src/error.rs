use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum OffsetError {
    #[error("Unknown direction: '{0}'")]
    UnknownDirection(String),

    #[error("Invalid shape: {0}")]
    Shape(String),
}
