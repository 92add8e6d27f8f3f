pub mod panel;
pub mod route;

pub use panel::DashboardPage;
pub use route::DashboardRoute;
