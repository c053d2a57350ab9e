mod admin_gateway;
mod login_redirect;

pub use admin_gateway::{
    AdminGateway, AdminGatewayError, AuthenticatedUser, CaseStudyCreate, CaseStudyPatch,
    MentorshipCreate, MentorshipPatch, TestimonialCreate, TestimonialPatch,
};
pub use login_redirect::{LoginRedirect, NoRedirect};
