pub mod activity_panel;
pub mod right;

pub use activity_panel::ActivityPanel;
pub use right::Right;
