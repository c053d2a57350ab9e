pub mod adapter;
pub mod application;

pub use application::ports::outgoing::{
    AdminGateway, AdminGatewayError, AuthenticatedUser, CaseStudyCreate, CaseStudyPatch,
    LoginRedirect, MentorshipCreate, MentorshipPatch, NoRedirect, TestimonialCreate,
    TestimonialPatch,
};
pub use application::service::{
    DashboardError, DashboardService, DashboardStats, DashboardUser, UserRole, DEMO_EMAIL,
    DEMO_PASSWORD,
};
