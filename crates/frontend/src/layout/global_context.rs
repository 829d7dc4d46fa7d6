//! Global UI store.
//!
//! Wraps the core `AppController` in one signal so every transition goes
//! through a single place, drains the controller's events after it, and
//! turns them into toasts.

use crate::layout::toasts::{event_toast, Toast, ToastKind};
use contracts::shared::config::DashboardConfig;
use contracts::shared::entry_form::{AcceptedRecord, EntryForm, EntryFormError, PendingSubmission};
use contracts::system::app_state::AppController;
use contracts::system::router::RouteChange;
use contracts::system::auth::LoginError;
use contracts::system::events::AppEvent;
use gloo_timers::future::TimeoutFuture;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::Arc;

/// How long a toast stays on screen
const TOAST_LIFETIME_MS: u32 = 4000;

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub app: RwSignal<AppController>,
    /// Current route id, kept in step by a router observer
    pub route: RwSignal<String>,
    pub config: StoredValue<DashboardConfig>,
    pub left_open: RwSignal<bool>,
    pub right_open: RwSignal<bool>,
    pub toasts: RwSignal<Vec<Toast>>,
    /// Records accepted during the current session, newest first
    pub activity: RwSignal<Vec<AcceptedRecord>>,
    next_toast_id: StoredValue<u64>,
}

impl AppGlobalContext {
    pub fn new(config: DashboardConfig) -> Self {
        let mut app = AppController::from_config(&config);
        log!("AppController created with policy {:?}", app.policy());

        let route = RwSignal::new(app.current_route().to_string());
        app.subscribe_routes(Arc::new(move |change: &RouteChange| {
            route.try_set(change.to.clone());
        }));

        Self {
            app: RwSignal::new(app),
            route,
            config: StoredValue::new(config),
            left_open: RwSignal::new(true),
            right_open: RwSignal::new(false),
            toasts: RwSignal::new(vec![]),
            activity: RwSignal::new(vec![]),
            next_toast_id: StoredValue::new(0),
        }
    }

    /// Run one controller transition, then publish whatever it emitted.
    fn apply(&self, f: impl FnOnce(&mut AppController)) {
        let events = self.app.try_update(|app| {
            f(app);
            app.drain_events()
        });
        for event in events.unwrap_or_default() {
            self.publish(event);
        }
    }

    fn publish(&self, event: AppEvent) {
        log!("event: {:?}", event);
        if let Some((kind, message)) = event_toast(&event) {
            self.push_toast(kind, message);
        }
    }

    // ─── Session ────────────────────────────────────────────────────────────

    pub fn login(&self, username: &str, password: &str, role_code: &str) -> Result<(), LoginError> {
        let mut outcome = Ok(());
        self.apply(|app| outcome = app.login(username, password, role_code).map(|_| ()));
        outcome
    }

    pub fn logout(&self) {
        self.apply(|app| app.logout());
        self.activity.set(vec![]);
    }

    pub fn title(&self) -> String {
        self.config.with_value(|c| c.app.title.clone())
    }

    pub fn submission_delay_ms(&self) -> u32 {
        self.config.with_value(|c| c.submission.delay_ms)
    }

    // ─── Navigation ─────────────────────────────────────────────────────────

    /// Denials are reported as a toast, so the result is not returned.
    pub fn navigate(&self, route_id: &str) {
        log!("navigate: '{}'", route_id);
        self.apply(|app| {
            let _ = app.navigate(route_id);
        });
    }

    pub fn set_search(&self, query: String) {
        self.apply(|app| app.set_search_query(query));
    }

    // ─── Entry forms ────────────────────────────────────────────────────────

    pub fn begin_submission(
        &self,
        form: &mut EntryForm,
    ) -> Result<PendingSubmission, EntryFormError> {
        self.app
            .try_update_untracked(|app| app.begin_submission(form))
            .unwrap_or(Err(EntryFormError::SessionClosed))
    }

    pub fn commit_submission(
        &self,
        form: &mut EntryForm,
        pending: PendingSubmission,
    ) -> Result<AcceptedRecord, EntryFormError> {
        let mut outcome = Err(EntryFormError::SessionClosed);
        self.apply(|app| outcome = app.commit_submission(form, pending));
        if outcome.is_err() {
            form.abort();
        }
        if let Ok(record) = &outcome {
            let record = record.clone();
            self.activity.update(|items| items.insert(0, record));
        }
        outcome
    }

    // ─── Toasts ─────────────────────────────────────────────────────────────

    pub fn push_toast(&self, kind: ToastKind, message: String) {
        let id = self.next_toast_id.get_value();
        self.next_toast_id.set_value(id + 1);
        self.toasts.update(|items| items.push(Toast { id, kind, message }));

        let toasts = self.toasts;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_LIFETIME_MS).await;
            toasts.update(|items| items.retain(|t| t.id != id));
        });
    }

    pub fn dismiss_toast(&self, id: u64) {
        self.toasts.update(|items| items.retain(|t| t.id != id));
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }

    pub fn toggle_right(&self) {
        self.right_open.update(|val| *val = !*val);
    }
}
