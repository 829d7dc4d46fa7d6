pub mod summary;
pub mod view;

pub use view::OverviewDashboard;
