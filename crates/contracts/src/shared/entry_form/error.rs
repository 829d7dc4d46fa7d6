use serde::Serialize;
use thiserror::Error;

/// Rejection reasons of an entry-form submission. All are recoverable: the
/// draft is kept so the user can correct it and resubmit.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "code", content = "field", rename_all = "snake_case")]
pub enum EntryFormError {
    #[error("required field `{0}` is empty")]
    MissingRequiredField(String),

    #[error("an entry dated {0} was already submitted")]
    DuplicateKey(String),

    #[error("field `{0}` is not a valid non-negative number in range")]
    InvalidNumericValue(String),

    #[error("at least one value must be greater than zero")]
    NoDataProvided,

    #[error("field `{0}` is required by its checkbox")]
    MissingConditionalField(String),

    #[error("a submission is already in progress")]
    SubmissionInProgress,

    #[error("submission failed: {0}")]
    Transport(String),

    #[error("the session ended before the submission finished")]
    SessionClosed,
}
