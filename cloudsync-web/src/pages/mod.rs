mod dashboard;
mod layout;

pub use dashboard::Dashboard;
pub use layout::AppShell;
