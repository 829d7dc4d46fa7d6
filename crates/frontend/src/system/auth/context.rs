//! Read-only views of the session for components.

use crate::layout::global_context::AppGlobalContext;
use contracts::enums::Role;
use contracts::system::auth::Session;
use leptos::prelude::*;

/// Current session, re-evaluated only when it actually changes.
pub fn use_session() -> Memo<Option<Session>> {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    Memo::new(move |_| ctx.app.with(|app| app.session().cloned()))
}

pub fn use_role() -> Memo<Option<Role>> {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    Memo::new(move |_| ctx.app.with(|app| app.role()))
}
