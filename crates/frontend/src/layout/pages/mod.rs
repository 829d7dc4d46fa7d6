//! Content area: the current route's page.
//!
//! - `registry` maps a `PageKey` to its view (the only place that does)
//! - `page` re-renders the content when the resolved page changes

pub mod page;
pub mod registry;

pub use page::CurrentPage;
