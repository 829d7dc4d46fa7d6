//! Generic entry-form workflow shared by every data-entry screen.
//!
//! A screen is described by a [`FormSpec`]; its in-progress values live in an
//! [`EntryForm`]. Submitting runs [`validate`] against the session's
//! [`RejectionList`] and hands the record to a [`SubmitTransport`]. The
//! outcome is all or nothing: either the record is accepted, its date is
//! recorded and the form resets, or nothing changes.

pub mod draft;
pub mod error;
pub mod rejection;
pub mod spec;
pub mod submission;
pub mod validator;

pub use draft::{parse_number, EntryDraft, NumericInput};
pub use error::EntryFormError;
pub use rejection::RejectionList;
pub use spec::{ConditionalRule, DataRule, FormSpec, NumericField, TextField};
pub use submission::{
    AcceptedRecord, EntryForm, ImmediateTransport, PendingSubmission, SubmissionId,
    SubmitTransport,
};
pub use validator::validate;
