use async_trait::async_trait;

use crate::modules::content::application::domain::entities::{
    CaseStudy, ContactAck, ContactMessage, Course, Mentorship, Testimonial, YouTubeVideo,
};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContentSourceError {
    #[error("Resource not found")]
    NotFound,

    /// Non-2xx response carrying the backend's message.
    #[error("{0}")]
    Rejected(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Decode error: {0}")]
    Decode(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (the remote content API, unauthenticated reads)
// ──────────────────────────────────────────────────────────
//
// `featured_only` is each implementation's to honor: the HTTP adapter
// forwards it as the `featured=true` query parameter, the sample adapter
// filters locally. Callers get the same subset either way.
//

#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn fetch_case_studies(
        &self,
        featured_only: bool,
    ) -> Result<Vec<CaseStudy>, ContentSourceError>;

    async fn fetch_case_study(&self, slug: &str) -> Result<CaseStudy, ContentSourceError>;

    async fn fetch_testimonials(
        &self,
        featured_only: bool,
    ) -> Result<Vec<Testimonial>, ContentSourceError>;

    async fn fetch_testimonial(&self, id: &str) -> Result<Testimonial, ContentSourceError>;

    async fn fetch_mentorship_sessions(
        &self,
        featured_only: bool,
    ) -> Result<Vec<Mentorship>, ContentSourceError>;

    async fn fetch_mentorship_session(&self, slug: &str)
        -> Result<Mentorship, ContentSourceError>;

    async fn fetch_courses(&self, featured_only: bool) -> Result<Vec<Course>, ContentSourceError>;

    async fn fetch_course(&self, slug: &str) -> Result<Course, ContentSourceError>;

    async fn fetch_youtube_videos(&self) -> Result<Vec<YouTubeVideo>, ContentSourceError>;

    async fn send_contact(
        &self,
        message: &ContactMessage,
    ) -> Result<ContactAck, ContentSourceError>;
}
