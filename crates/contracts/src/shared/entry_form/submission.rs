use super::draft::EntryDraft;
use super::error::EntryFormError;
use super::rejection::RejectionList;
use super::spec::FormSpec;
use super::validator::validate;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Identifier handed out for each accepted record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubmissionId(pub Uuid);

impl SubmissionId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_string(&self) -> String {
        self.0.to_string()
    }
}

// ============================================================================
// Records
// ============================================================================

/// Normalized snapshot of a draft that passed validation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AcceptedRecord {
    pub id: SubmissionId,
    pub form_id: &'static str,
    pub date: String,
    pub numbers: BTreeMap<String, f64>,
    pub texts: BTreeMap<String, String>,
    pub flags: BTreeMap<String, bool>,
    pub total: f64,
    pub accepted_at: DateTime<Utc>,
}

/// Validated record waiting for its transport to finish.
///
/// Obtained from [`EntryForm::begin_submit`]; consumed by
/// [`EntryForm::commit`] or dropped after [`EntryForm::abort`].
#[derive(Debug, Clone, PartialEq)]
pub struct PendingSubmission {
    record: AcceptedRecord,
}

impl PendingSubmission {
    pub fn record(&self) -> &AcceptedRecord {
        &self.record
    }
}

// ============================================================================
// Transport
// ============================================================================

/// Where accepted records go. The dashboard has no backend, so the browser
/// build plugs in a transport that only waits; a real API client can replace
/// it without touching validation.
#[async_trait(?Send)]
pub trait SubmitTransport {
    async fn deliver(&self, record: &AcceptedRecord) -> Result<(), EntryFormError>;
}

/// Transport that accepts immediately
#[derive(Debug, Clone, Copy, Default)]
pub struct ImmediateTransport;

#[async_trait(?Send)]
impl SubmitTransport for ImmediateTransport {
    async fn deliver(&self, _record: &AcceptedRecord) -> Result<(), EntryFormError> {
        Ok(())
    }
}

// ============================================================================
// Form state
// ============================================================================

/// State owned by one entry-form page: the draft and the in-flight flag.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryForm {
    spec: &'static FormSpec,
    draft: EntryDraft,
    is_submitting: bool,
}

impl EntryForm {
    pub fn new(spec: &'static FormSpec) -> Self {
        Self {
            spec,
            draft: EntryDraft::new(spec),
            is_submitting: false,
        }
    }

    pub fn spec(&self) -> &'static FormSpec {
        self.spec
    }

    pub fn draft(&self) -> &EntryDraft {
        &self.draft
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn total(&self) -> f64 {
        self.draft.total()
    }

    pub fn set_date(&mut self, date: impl Into<String>) {
        self.draft.date = date.into();
    }

    /// Store raw input for a numeric field and recompute the total.
    /// Unknown field names are ignored.
    pub fn set_number(&mut self, field: &str, raw: impl Into<String>) {
        if let Some(slot) = self.draft.numbers.get_mut(field) {
            *slot = raw.into();
            self.draft.recompute_total(self.spec);
        }
    }

    pub fn set_text(&mut self, field: &str, value: impl Into<String>) {
        if let Some(slot) = self.draft.texts.get_mut(field) {
            *slot = value.into();
        }
    }

    pub fn set_flag(&mut self, field: &str, value: bool) {
        if let Some(slot) = self.draft.flags.get_mut(field) {
            *slot = value;
        }
    }

    pub fn validate(&self, rejections: &RejectionList) -> Result<(), EntryFormError> {
        validate(self.spec, &self.draft, rejections)
    }

    /// Validate and lock the form. Nothing changes on error.
    pub fn begin_submit(
        &mut self,
        rejections: &RejectionList,
    ) -> Result<PendingSubmission, EntryFormError> {
        if self.is_submitting {
            return Err(EntryFormError::SubmissionInProgress);
        }
        if let Err(err) = self.validate(rejections) {
            log::warn!("{}: submission rejected: {}", self.spec.id, err);
            return Err(err);
        }
        self.is_submitting = true;
        log::debug!("{}: submitting {}", self.spec.id, self.draft.date.trim());
        Ok(PendingSubmission {
            record: self.snapshot(),
        })
    }

    /// Finish a submission: record the date key and reset the form.
    ///
    /// The key is checked again so that a date accepted while this record
    /// was in flight cannot be accepted twice; in that case the draft stays.
    pub fn commit(
        &mut self,
        pending: PendingSubmission,
        rejections: &mut RejectionList,
    ) -> Result<AcceptedRecord, EntryFormError> {
        self.is_submitting = false;
        let mut record = pending.record;
        if !rejections.insert(record.date.clone()) {
            return Err(EntryFormError::DuplicateKey(record.date));
        }
        record.accepted_at = Utc::now();
        self.reset();
        log::info!(
            "{}: accepted {} (total {})",
            record.form_id,
            record.date,
            record.total
        );
        Ok(record)
    }

    /// Unlock after a failed transport; the draft is kept.
    pub fn abort(&mut self) {
        self.is_submitting = false;
    }

    pub fn reset(&mut self) {
        self.draft = EntryDraft::new(self.spec);
    }

    /// Whole workflow in one call: validate, deliver, commit.
    pub async fn submit<T>(
        &mut self,
        rejections: &mut RejectionList,
        transport: &T,
    ) -> Result<AcceptedRecord, EntryFormError>
    where
        T: SubmitTransport + ?Sized,
    {
        let pending = self.begin_submit(rejections)?;
        if let Err(err) = transport.deliver(pending.record()).await {
            log::warn!("{}: transport failed: {}", self.spec.id, err);
            self.abort();
            return Err(err);
        }
        self.commit(pending, rejections)
    }

    fn snapshot(&self) -> AcceptedRecord {
        AcceptedRecord {
            id: SubmissionId::new_v4(),
            form_id: self.spec.id,
            date: self.draft.date.trim().to_string(),
            numbers: self
                .spec
                .numeric_fields
                .iter()
                .map(|f| (f.name.to_string(), self.draft.number(f.name).or_zero()))
                .collect(),
            texts: self
                .draft
                .texts
                .iter()
                .map(|(k, v)| (k.clone(), v.trim().to_string()))
                .collect(),
            flags: self.draft.flags.clone(),
            total: self.draft.total(),
            accepted_at: Utc::now(),
        }
    }
}
