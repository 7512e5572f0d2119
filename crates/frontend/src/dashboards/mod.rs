pub mod overview;

pub use overview::ui::dashboard::OverviewDashboard;
