use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::modules::content::application::domain::entities::{
    CaseStudy, KeyMetric, Mentorship, SessionTestimonial, SessionType, Testimonial,
    TestimonialType,
};
use crate::shared::patch::PatchField;

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
// Create DTOs carry every writable field; a form builds one with
// `..Default::default()` for whatever it leaves blank. Patch DTOs use
// merge-patch cells: required fields as Option (Some => replace),
// optional fields as PatchField (Null => clear).
//

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseStudyCreate {
    pub title: String,
    pub slug: String,
    pub cover_image: String,
    pub case_study_image: String,
    pub problem_statement: String,
    pub my_role: String,
    pub key_metrics: Vec<KeyMetric>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prototype_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_link: Option<String>,
    pub tags: Vec<String>,
    pub is_featured: bool,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseStudyPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// When set, also becomes the key the update is addressed by.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_study_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub problem_statement: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub my_role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_metrics: Option<Vec<KeyMetric>>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub prototype_link: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub video_link: PatchField<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialCreate {
    pub quote: String,
    pub author_name: String,
    pub author_title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_linked_in: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub testimonial_type: Option<TestimonialType>,
    pub is_featured: bool,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_title: Option<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub client_company: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub author_image: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub author_linked_in: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub rating: PatchField<u8>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub project_name: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub testimonial_type: PatchField<TestimonialType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MentorshipCreate {
    pub title: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_type: Option<SessionType>,
    pub target_audience: String,
    pub description: String,
    pub what_to_expect: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preparation_required: Option<String>,
    pub duration: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offer_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offer_end_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    pub booking_link: String,
    pub testimonials: Vec<SessionTestimonial>,
    pub is_active: bool,
    pub is_featured: bool,
}

impl Default for MentorshipCreate {
    fn default() -> Self {
        Self {
            title: String::new(),
            slug: String::new(),
            session_type: None,
            target_audience: String::new(),
            description: String::new(),
            what_to_expect: vec![],
            preparation_required: None,
            duration: String::new(),
            price: 0.0,
            offer_price: None,
            offer_end_date: None,
            currency: None,
            booking_link: String::new(),
            testimonials: vec![],
            // New offerings are purchasable until deactivated.
            is_active: true,
            is_featured: false,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MentorshipPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// When set, also becomes the key the update is addressed by.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub session_type: PatchField<SessionType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_audience: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub what_to_expect: Option<Vec<String>>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub preparation_required: PatchField<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub offer_price: PatchField<f64>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub offer_end_date: PatchField<DateTime<Utc>>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub currency: PatchField<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub testimonials: Option<Vec<SessionTestimonial>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
}

//
// ──────────────────────────────────────────────────────────
// Login response
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatedUser {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub token: String,
    #[serde(default)]
    pub is_admin: bool,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum AdminGatewayError {
    /// Token rejected (401). The service turns this into a session wipe
    /// plus a login redirect; implementations only report it.
    #[error("Unauthorized")]
    Unauthorized,

    #[error("Resource not found")]
    NotFound,

    /// Backend validation or business error; the message reaches the
    /// admin user verbatim.
    #[error("{0}")]
    Rejected(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Decode error: {0}")]
    Decode(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (authenticated remote CRUD)
// ──────────────────────────────────────────────────────────
//
// `key` is the backend's resource key: the slug for case studies and
// mentorship, the id for testimonials. Which value ends up there is the
// service's decision, not the adapter's.
//

#[async_trait]
pub trait AdminGateway: Send + Sync {
    async fn login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthenticatedUser, AdminGatewayError>;

    async fn list_case_studies(&self, token: &str) -> Result<Vec<CaseStudy>, AdminGatewayError>;

    async fn create_case_study(
        &self,
        token: &str,
        data: &CaseStudyCreate,
    ) -> Result<CaseStudy, AdminGatewayError>;

    async fn update_case_study(
        &self,
        token: &str,
        key: &str,
        patch: &CaseStudyPatch,
    ) -> Result<CaseStudy, AdminGatewayError>;

    async fn delete_case_study(&self, token: &str, key: &str) -> Result<(), AdminGatewayError>;

    async fn list_testimonials(&self, token: &str) -> Result<Vec<Testimonial>, AdminGatewayError>;

    async fn create_testimonial(
        &self,
        token: &str,
        data: &TestimonialCreate,
    ) -> Result<Testimonial, AdminGatewayError>;

    async fn update_testimonial(
        &self,
        token: &str,
        key: &str,
        patch: &TestimonialPatch,
    ) -> Result<Testimonial, AdminGatewayError>;

    async fn delete_testimonial(&self, token: &str, key: &str) -> Result<(), AdminGatewayError>;

    async fn list_mentorship_sessions(
        &self,
        token: &str,
    ) -> Result<Vec<Mentorship>, AdminGatewayError>;

    async fn create_mentorship_session(
        &self,
        token: &str,
        data: &MentorshipCreate,
    ) -> Result<Mentorship, AdminGatewayError>;

    async fn update_mentorship_session(
        &self,
        token: &str,
        key: &str,
        patch: &MentorshipPatch,
    ) -> Result<Mentorship, AdminGatewayError>;

    async fn delete_mentorship_session(
        &self,
        token: &str,
        key: &str,
    ) -> Result<(), AdminGatewayError>;
}
