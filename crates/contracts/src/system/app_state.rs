//! Application controller: the one owner of session, route and
//! session-scoped form state. The UI keeps a single instance in context
//! and mutates it only through the transition methods below.

use super::auth::{LoginError, Session, SessionManager};
use super::events::AppEvent;
use super::pages::{resolve, PageKey};
use super::rbac::{self, MenuGroup, QuickAction};
use super::router::{RouteChange, RouteObserver, Router};
use crate::enums::Role;
use crate::shared::config::DashboardConfig;
use crate::shared::entry_form::{
    AcceptedRecord, EntryForm, EntryFormError, PendingSubmission, RejectionList, SubmissionId,
};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// Whether `navigate` consults the role registry.
///
/// Under `Permissive` the menu hides entries but any route can still be
/// opened directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoutePolicy {
    #[default]
    Enforce,
    Permissive,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("not logged in")]
    NotAuthenticated,

    #[error("role `{role}` may not open `{route}`")]
    PermissionDenied { role: Role, route: String },
}

/// What the presentation layer should render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Page(PageKey),
}

#[derive(Debug, Clone, Default)]
pub struct AppController {
    session: SessionManager,
    router: Router,
    policy: RoutePolicy,
    rejections: HashMap<String, RejectionList>,
    /// Submissions begun in the current session and not yet committed
    in_flight: HashSet<SubmissionId>,
    search_query: String,
    events: Vec<AppEvent>,
}

impl AppController {
    pub fn new(policy: RoutePolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn from_config(config: &DashboardConfig) -> Self {
        let policy = if config.navigation.enforce_permissions {
            RoutePolicy::Enforce
        } else {
            RoutePolicy::Permissive
        };
        Self::new(policy)
    }

    // ─── Session ────────────────────────────────────────────────────────────

    pub fn login(
        &mut self,
        username: &str,
        password: &str,
        role_code: &str,
    ) -> Result<Session, LoginError> {
        let session = self.session.login(username, password, role_code)?.clone();
        self.router.reset();
        self.rejections.clear();
        self.in_flight.clear();
        self.events.push(AppEvent::LoggedIn {
            username: session.username.clone(),
            role: session.role,
        });
        Ok(session)
    }

    /// Tear down the session and everything scoped to it.
    pub fn logout(&mut self) {
        self.session.logout();
        self.router.reset();
        self.rejections.clear();
        self.in_flight.clear();
        self.search_query.clear();
        self.events.push(AppEvent::LoggedOut);
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.current()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn role(&self) -> Option<Role> {
        self.session.role()
    }

    // ─── Navigation ─────────────────────────────────────────────────────────

    /// Route change requested by the UI.
    pub fn navigate(&mut self, route_id: &str) -> Result<RouteChange, NavigationError> {
        let role = self.session.role().ok_or(NavigationError::NotAuthenticated)?;

        if self.policy == RoutePolicy::Enforce && !rbac::is_allowed(role, route_id) {
            log::warn!("navigation to '{}' denied for {}", route_id, role);
            self.events.push(AppEvent::NavigationDenied {
                route: route_id.to_string(),
            });
            return Err(NavigationError::PermissionDenied {
                role,
                route: route_id.to_string(),
            });
        }

        let change = self.router.change_route(route_id);
        self.events.push(AppEvent::RouteChanged {
            from: change.from.clone(),
            to: change.to.clone(),
        });
        Ok(change)
    }

    pub fn current_route(&self) -> &str {
        self.router.current()
    }

    /// Raw router access. Changes made here bypass the route policy.
    pub fn router_mut(&mut self) -> &mut Router {
        &mut self.router
    }

    pub fn subscribe_routes(&mut self, observer: RouteObserver) {
        self.router.subscribe(observer);
    }

    pub fn policy(&self) -> RoutePolicy {
        self.policy
    }

    /// Only the login screen is reachable without a session.
    pub fn screen(&self) -> Screen {
        if self.session.is_authenticated() {
            Screen::Page(resolve(self.router.current()))
        } else {
            Screen::Login
        }
    }

    pub fn visible_menu(&self) -> Vec<MenuGroup> {
        self.role().map(rbac::grouped_items_for).unwrap_or_default()
    }

    pub fn visible_quick_actions(&self) -> Vec<&'static QuickAction> {
        self.role().map(rbac::quick_actions_for).unwrap_or_default()
    }

    // ─── Search (input hook only) ───────────────────────────────────────────

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        if query != self.search_query {
            self.search_query = query.clone();
            self.events.push(AppEvent::SearchQueryChanged { query });
        }
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    // ─── Entry forms ────────────────────────────────────────────────────────

    pub fn rejection_list(&self, form_id: &str) -> Option<&RejectionList> {
        self.rejections.get(form_id)
    }

    /// Validate `form` against this session's accepted dates and lock it.
    pub fn begin_submission(
        &mut self,
        form: &mut EntryForm,
    ) -> Result<PendingSubmission, EntryFormError> {
        if !self.is_authenticated() {
            return Err(EntryFormError::SessionClosed);
        }
        let empty = RejectionList::new();
        let rejections = self.rejections.get(form.spec().id).unwrap_or(&empty);
        let pending = form.begin_submit(rejections)?;
        self.in_flight.insert(pending.record().id);
        Ok(pending)
    }

    /// Commit a delivered submission into this session.
    ///
    /// A submission begun before the last login or logout is dropped and
    /// the form unlocked; its date never reaches the new session.
    pub fn commit_submission(
        &mut self,
        form: &mut EntryForm,
        pending: PendingSubmission,
    ) -> Result<AcceptedRecord, EntryFormError> {
        if !self.in_flight.remove(&pending.record().id) {
            log::warn!("{}: submission outlived its session, dropped", form.spec().id);
            form.abort();
            return Err(EntryFormError::SessionClosed);
        }
        let rejections = self.rejections.entry(form.spec().id.to_string()).or_default();
        let record = form.commit(pending, rejections)?;
        self.events.push(AppEvent::EntryAccepted {
            form_id: record.form_id.to_string(),
            date: record.date.clone(),
            total: record.total,
        });
        Ok(record)
    }

    // ─── Events ─────────────────────────────────────────────────────────────

    pub fn drain_events(&mut self) -> Vec<AppEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{e101_water_entry, e102_irrigation_entry};
    use std::sync::{Arc, Mutex};

    fn logged_in(role: &str, policy: RoutePolicy) -> AppController {
        let mut app = AppController::new(policy);
        app.login("user", "pw", role).unwrap();
        app.drain_events();
        app
    }

    #[test]
    fn test_starts_logged_out_on_login_screen() {
        let app = AppController::default();
        assert_eq!(app.screen(), Screen::Login);
        assert!(app.visible_menu().is_empty());
        assert!(app.visible_quick_actions().is_empty());
    }

    #[test]
    fn test_unauthenticated_always_sees_login() {
        let mut app = AppController::new(RoutePolicy::Permissive);
        assert_eq!(app.navigate("users"), Err(NavigationError::NotAuthenticated));
        app.router_mut().change_route("users");
        assert_eq!(app.screen(), Screen::Login);
        app.router_mut().change_route("water_entry");
        assert_eq!(app.screen(), Screen::Login);
    }

    #[test]
    fn test_login_failures_do_not_authenticate() {
        let mut app = AppController::default();
        assert!(app.login("", "pw", "admin").is_err());
        assert!(app.login("user", "", "admin").is_err());
        assert!(app.login("user", "pw", "").is_err());
        assert!(!app.is_authenticated());
        assert!(app.drain_events().is_empty());
    }

    #[test]
    fn test_login_resets_route_and_emits_welcome() {
        let mut app = AppController::default();
        app.router_mut().change_route("reports");
        let session = app.login("Huda", "pw", "president").unwrap();
        assert_eq!(session.role, Role::President);
        assert_eq!(app.current_route(), "dashboard");
        assert_eq!(app.screen(), Screen::Page(PageKey::Dashboard));
        assert_eq!(
            app.drain_events().last(),
            Some(&AppEvent::LoggedIn {
                username: "Huda".into(),
                role: Role::President
            })
        );
    }

    #[test]
    fn test_logout_resets_route_and_clears_session() {
        let mut app = logged_in("admin", RoutePolicy::Enforce);
        app.navigate("users").unwrap();
        app.set_search_query("pump");
        app.logout();
        assert_eq!(app.current_route(), "dashboard");
        assert!(app.session().is_none());
        assert!(app.role().is_none());
        assert_eq!(app.search_query(), "");
        assert_eq!(app.screen(), Screen::Login);
    }

    #[test]
    fn test_router_level_change_ignores_role() {
        // The router itself never blocks; only the menu hides the entry.
        let mut app = logged_in("employee", RoutePolicy::Enforce);
        app.router_mut().change_route("users");
        assert_eq!(app.current_route(), "users");
        assert_eq!(app.screen(), Screen::Page(PageKey::Users));
        assert!(rbac::items_for(Role::Employee).iter().all(|i| i.id != "users"));
    }

    #[test]
    fn test_permissive_navigate_matches_router() {
        let mut app = logged_in("employee", RoutePolicy::Permissive);
        let change = app.navigate("users").unwrap();
        assert_eq!(change.to, "users");
        assert_eq!(app.screen(), Screen::Page(PageKey::Users));
    }

    #[test]
    fn test_enforced_navigate_denies() {
        let mut app = logged_in("employee", RoutePolicy::Enforce);
        assert_eq!(
            app.navigate("users"),
            Err(NavigationError::PermissionDenied {
                role: Role::Employee,
                route: "users".into()
            })
        );
        assert_eq!(app.current_route(), "dashboard");
        assert_eq!(
            app.drain_events(),
            vec![AppEvent::NavigationDenied {
                route: "users".into()
            }]
        );

        assert!(app.navigate("water_entry").is_ok());
        assert_eq!(app.screen(), Screen::Page(PageKey::WaterEntry));
    }

    #[test]
    fn test_unknown_route_resolves_to_dashboard_page() {
        let mut app = logged_in("admin", RoutePolicy::Permissive);
        app.navigate("does_not_exist").unwrap();
        assert_eq!(app.current_route(), "does_not_exist");
        assert_eq!(app.screen(), Screen::Page(PageKey::Dashboard));
    }

    #[test]
    fn test_route_observers_see_logout_reset() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let mut app = logged_in("admin", RoutePolicy::Enforce);
        app.subscribe_routes(Arc::new(move |c: &RouteChange| {
            sink.lock().unwrap().push(c.to.clone());
        }));
        app.navigate("cameras").unwrap();
        app.logout();
        assert_eq!(*seen.lock().unwrap(), vec!["cameras", "dashboard"]);
    }

    #[test]
    fn test_search_query_event_only_on_change() {
        let mut app = logged_in("admin", RoutePolicy::Enforce);
        app.set_search_query("valve");
        app.set_search_query("valve");
        assert_eq!(
            app.drain_events(),
            vec![AppEvent::SearchQueryChanged {
                query: "valve".into()
            }]
        );
    }

    #[test]
    fn test_submission_is_scoped_per_form_and_session() {
        let mut app = logged_in("employee", RoutePolicy::Enforce);

        let mut water = EntryForm::new(&e101_water_entry::FORM_SPEC);
        water.set_date("2024-10-01");
        water.set_text("recorded_by", "Ali");
        water.set_number("station_north", "300");
        let pending = app.begin_submission(&mut water).unwrap();
        let record = app.commit_submission(&mut water, pending).unwrap();
        assert_eq!(record.total, 300.0);
        assert!(app.rejection_list("water_entry").unwrap().contains("2024-10-01"));

        // Same date on another form is a different key space.
        let mut irrigation = EntryForm::new(&e102_irrigation_entry::FORM_SPEC);
        irrigation.set_date("2024-10-01");
        irrigation.set_number("farm_zone_a", "5");
        assert!(app.begin_submission(&mut irrigation).is_ok());

        water.set_date("2024-10-01");
        water.set_text("recorded_by", "Ali");
        water.set_number("station_north", "1");
        assert_eq!(
            app.begin_submission(&mut water),
            Err(EntryFormError::DuplicateKey("2024-10-01".into()))
        );

        app.logout();
        assert!(app.rejection_list("water_entry").is_none());
    }

    fn filled_water(date: &str) -> EntryForm {
        let mut water = EntryForm::new(&e101_water_entry::FORM_SPEC);
        water.set_date(date);
        water.set_text("recorded_by", "Ali");
        water.set_number("station_north", "300");
        water
    }

    #[test]
    fn test_commit_after_logout_is_dropped() {
        let mut app = logged_in("employee", RoutePolicy::Enforce);
        let mut water = filled_water("2024-10-01");
        let pending = app.begin_submission(&mut water).unwrap();

        app.logout();
        assert_eq!(
            app.commit_submission(&mut water, pending),
            Err(EntryFormError::SessionClosed)
        );
        assert!(!water.is_submitting());
        assert!(app.rejection_list("water_entry").is_none());

        // The next user may submit the same date.
        app.login("other", "pw", "employee").unwrap();
        let mut fresh = filled_water("2024-10-01");
        let pending = app.begin_submission(&mut fresh).unwrap();
        assert!(app.commit_submission(&mut fresh, pending).is_ok());
    }

    #[test]
    fn test_commit_after_relogin_is_dropped() {
        let mut app = logged_in("employee", RoutePolicy::Enforce);
        let mut water = filled_water("2024-10-02");
        let pending = app.begin_submission(&mut water).unwrap();

        app.logout();
        app.login("other", "pw", "employee").unwrap();
        assert_eq!(
            app.commit_submission(&mut water, pending),
            Err(EntryFormError::SessionClosed)
        );
        assert!(app.rejection_list("water_entry").is_none());
    }

    #[test]
    fn test_begin_requires_session() {
        let mut app = AppController::default();
        let mut water = filled_water("2024-10-03");
        assert_eq!(app.begin_submission(&mut water), Err(EntryFormError::SessionClosed));
        assert!(!water.is_submitting());
    }

    #[test]
    fn test_from_config() {
        let mut config = DashboardConfig::default();
        assert_eq!(AppController::from_config(&config).policy(), RoutePolicy::Enforce);
        config.navigation.enforce_permissions = false;
        assert_eq!(AppController::from_config(&config).policy(), RoutePolicy::Permissive);
    }
}
