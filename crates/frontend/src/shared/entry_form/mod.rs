//! Browser side of the entry-form workflow: one generic page driven by a
//! `FormSpec`, its view model, Arabic error messages and the simulated
//! transport.

pub mod list;
pub mod messages;
pub mod transport;
pub mod view;
pub mod view_model;

pub use list::EntryLogPage;
pub use view::EntryFormPage;
