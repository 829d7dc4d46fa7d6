pub mod app_state;
pub mod auth;
pub mod events;
pub mod pages;
pub mod rbac;
pub mod router;
