//! Navigation router: a flat state machine over route ids.
//!
//! The router itself does not consult the role registry. A route change is
//! always committed and broadcast; permission checks live one level up in
//! [`AppController::navigate`](crate::system::app_state::AppController::navigate).

use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// Route shown after login, after logout and for unknown ids
pub const DEFAULT_ROUTE: &str = "dashboard";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteChange {
    pub from: String,
    pub to: String,
}

/// Callback invoked after every committed route change
pub type RouteObserver = Arc<dyn Fn(&RouteChange) + Send + Sync>;

#[derive(Clone)]
pub struct Router {
    current: String,
    observers: Vec<RouteObserver>,
}

impl Router {
    pub fn new() -> Self {
        Self {
            current: DEFAULT_ROUTE.to_string(),
            observers: Vec::new(),
        }
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    /// Commit a transition to `route_id` and notify observers.
    pub fn change_route(&mut self, route_id: impl Into<String>) -> RouteChange {
        let to = route_id.into();
        let from = std::mem::replace(&mut self.current, to.clone());
        let change = RouteChange { from, to };
        log::debug!("route: {} -> {}", change.from, change.to);
        for observer in &self.observers {
            observer(&change);
        }
        change
    }

    pub fn reset(&mut self) -> RouteChange {
        self.change_route(DEFAULT_ROUTE)
    }

    pub fn subscribe(&mut self, observer: RouteObserver) {
        self.observers.push(observer);
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("current", &self.current)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_starts_on_dashboard() {
        assert_eq!(Router::new().current(), "dashboard");
    }

    #[test]
    fn test_change_route_is_unconditional() {
        let mut router = Router::new();
        let change = router.change_route("users");
        assert_eq!(router.current(), "users");
        assert_eq!(change.from, "dashboard");
        assert_eq!(change.to, "users");

        router.change_route("not_a_real_page");
        assert_eq!(router.current(), "not_a_real_page");
    }

    #[test]
    fn test_observers_receive_every_change() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut router = Router::new();
        let sink = seen.clone();
        router.subscribe(Arc::new(move |change: &RouteChange| {
            sink.lock().unwrap().push(change.to.clone());
        }));

        router.change_route("cameras");
        router.change_route("gis_layers");
        router.reset();

        assert_eq!(
            *seen.lock().unwrap(),
            vec!["cameras", "gis_layers", "dashboard"]
        );
    }

    #[test]
    fn test_clones_share_observers() {
        let count = Arc::new(Mutex::new(0));
        let mut router = Router::new();
        let sink = count.clone();
        router.subscribe(Arc::new(move |_: &RouteChange| {
            *sink.lock().unwrap() += 1;
        }));

        let mut copy = router.clone();
        copy.change_route("reports");
        router.change_route("reports");
        assert_eq!(*count.lock().unwrap(), 2);
    }
}
