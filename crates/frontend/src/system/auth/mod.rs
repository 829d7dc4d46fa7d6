pub mod context;

pub use context::{use_role, use_session};
