//! Role registry: the static menu and quick-action catalog and the
//! role filters over it.

pub mod catalog;
pub mod registry;

pub use catalog::{MenuItem, QuickAction, MENU_ITEMS, QUICK_ACTIONS};
pub use registry::{
    grouped_items_for, is_allowed, items_for, items_for_code, quick_actions_for,
    quick_actions_for_code, MenuGroup,
};
