mod dashboard_service;

pub use dashboard_service::{
    DashboardError, DashboardService, DashboardStats, DashboardUser, UserRole, DEMO_EMAIL,
    DEMO_PASSWORD,
};
