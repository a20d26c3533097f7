#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConversionError {
    #[error("Empty not allowed")]
    Empty,
    #[error("Maximum length exceeded. {max} allowed but found {actual}")]
    MaxExceeded { max: usize, actual: usize },
    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
}

#[derive(Debug, thiserror::Error)]
#[error("The user has not logged in")]
pub struct NotLoggedInError;
