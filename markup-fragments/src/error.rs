use thiserror::Error;

pub type FragmentResult<T> = Result<T, FragmentError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FragmentError {
    #[error("Validation error: value '{value}' {reason}")]
    ValidationError { value: String, reason: String },

    #[error("Invalid fragment description '{kind}': {reason}")]
    InvalidDescription { kind: String, reason: String },

    #[error("Deserialization error: {0}")]
    DeserializationError(String),

    #[error("Empty document: no fragments found")]
    EmptyDocument,
}

impl From<serde_yaml::Error> for FragmentError {
    fn from(err: serde_yaml::Error) -> Self {
        FragmentError::DeserializationError(err.to_string())
    }
}
