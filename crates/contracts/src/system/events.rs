//! Events emitted by the controller for the presentation layer.
//!
//! The UI drains them after each transition and decides how to show them
//! (toasts, activity panel). Message wording is not part of the core.

use crate::enums::Role;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AppEvent {
    LoggedIn { username: String, role: Role },
    LoggedOut,
    RouteChanged { from: String, to: String },
    NavigationDenied { route: String },
    EntryAccepted { form_id: String, date: String, total: f64 },
    SearchQueryChanged { query: String },
}
