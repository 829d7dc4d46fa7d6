pub mod menu_category;
pub mod role;

pub use menu_category::MenuCategory;
pub use role::Role;
