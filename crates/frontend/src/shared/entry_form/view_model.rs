use super::messages::error_message;
use super::transport::SimulatedTransport;
use crate::layout::global_context::AppGlobalContext;
use contracts::shared::entry_form::{
    AcceptedRecord, EntryForm, EntryFormError, FormSpec, PendingSubmission, SubmitTransport,
};
use leptos::logging::log;
use leptos::prelude::*;

/// ViewModel for an entry-form page
#[derive(Clone, Copy)]
pub struct EntryFormViewModel {
    pub form: RwSignal<EntryForm>,
    pub error: RwSignal<Option<String>>,
    /// Last accepted date, shown as a confirmation under the form
    pub last_accepted: RwSignal<Option<String>>,
}

impl EntryFormViewModel {
    pub fn new(spec: &'static FormSpec) -> Self {
        Self {
            form: RwSignal::new(EntryForm::new(spec)),
            error: RwSignal::new(None),
            last_accepted: RwSignal::new(None),
        }
    }

    pub fn spec(&self) -> &'static FormSpec {
        self.form.with_untracked(|f| f.spec())
    }

    pub fn is_submitting(&self) -> bool {
        self.form.with(|f| f.is_submitting())
    }

    pub fn total(&self) -> f64 {
        self.form.with(|f| f.total())
    }

    pub fn set_date(&self, value: String) {
        self.form.update(|f| f.set_date(value));
    }

    pub fn set_number(&self, field: &'static str, raw: String) {
        self.form.update(|f| f.set_number(field, raw));
    }

    pub fn set_text(&self, field: &'static str, value: String) {
        self.form.update(|f| f.set_text(field, value));
    }

    pub fn set_flag(&self, field: &'static str, value: bool) {
        self.form.update(|f| f.set_flag(field, value));
    }

    /// Validate, wait for the transport, then commit into the session.
    pub fn submit_command(&self, ctx: AppGlobalContext) {
        let Some((form, pending)) = self.begin(ctx) else {
            return;
        };

        let vm = *self;
        let transport = SimulatedTransport::new(ctx.submission_delay_ms());
        wasm_bindgen_futures::spawn_local(async move {
            let (form, outcome) = deliver_and_commit(ctx, &transport, form, pending).await;
            vm.finish(form, outcome);
        });
    }

    fn begin(&self, ctx: AppGlobalContext) -> Option<(EntryForm, PendingSubmission)> {
        let spec = self.spec();
        let mut form = self.form.get_untracked();
        match ctx.begin_submission(&mut form) {
            Ok(pending) => {
                self.form.set(form.clone());
                self.error.set(None);
                self.last_accepted.set(None);
                Some((form, pending))
            }
            Err(e) => {
                self.error.set(Some(error_message(spec, &e)));
                None
            }
        }
    }

    /// Show the outcome, unless the page was closed in the meantime.
    fn finish(&self, form: EntryForm, outcome: Result<AcceptedRecord, EntryFormError>) {
        let spec = form.spec();
        if self.form.try_set(form).is_some() {
            log!("{}: page closed before the submission finished", spec.id);
            return;
        }
        match outcome {
            Ok(record) => {
                self.last_accepted.try_set(Some(record.date));
            }
            Err(e) => {
                self.error.try_set(Some(error_message(spec, &e)));
            }
        }
    }

    pub fn reset_command(&self) {
        if self.form.with_untracked(|f| f.is_submitting()) {
            return;
        }
        self.form.update(|f| f.reset());
        self.error.set(None);
    }
}

/// Deliver a pending record and commit it through the global context.
///
/// Touches no page-owned signal, so it completes even if the page that
/// started it has been unmounted.
pub async fn deliver_and_commit<T: SubmitTransport>(
    ctx: AppGlobalContext,
    transport: &T,
    mut form: EntryForm,
    pending: PendingSubmission,
) -> (EntryForm, Result<AcceptedRecord, EntryFormError>) {
    let outcome = match transport.deliver(pending.record()).await {
        Ok(()) => ctx.commit_submission(&mut form, pending),
        Err(e) => {
            form.abort();
            Err(e)
        }
    };
    if let Ok(record) = &outcome {
        log!("{}: accepted {}", record.form_id, record.date);
    }
    (form, outcome)
}
