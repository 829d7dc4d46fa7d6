//! Page category constants.
//!
//! Every page rendered in the content area declares:
//!   - HTML `id` in the format `{route}--{category}` (e.g. `"water_entry--entry"`)
//!   - `data-page-category` with one of the constants below

/// Overview / statistics page.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Data-entry form page.
pub const PAGE_CAT_ENTRY: &str = "entry";

/// Management screen (cameras, layers, records, reports).
pub const PAGE_CAT_MANAGEMENT: &str = "management";

/// System administration page (users, settings).
pub const PAGE_CAT_SYSTEM: &str = "system";

pub const ALL_CATEGORIES: &[&str] = &[
    PAGE_CAT_DASHBOARD,
    PAGE_CAT_ENTRY,
    PAGE_CAT_MANAGEMENT,
    PAGE_CAT_SYSTEM,
];

/// Validate that a page id matches the `{route}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((route, category)) => !route.is_empty() && ALL_CATEGORIES.contains(&category),
        None => false,
    }
}

/// Page id for a route, e.g. `page_id("users", PAGE_CAT_SYSTEM) == "users--system"`
pub fn page_id(route_id: &str, category: &str) -> String {
    format!("{route_id}--{category}")
}
