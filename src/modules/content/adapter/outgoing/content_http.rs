use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::modules::content::application::domain::entities::{
    CaseStudy, ContactAck, ContactMessage, Course, Mentorship, Testimonial, YouTubeVideo,
};
use crate::modules::content::application::ports::outgoing::{ContentSource, ContentSourceError};
use crate::shared::http::{read_json, HttpError};

/// reqwest-backed implementation of `ContentSource`.
///
/// Unauthenticated JSON reads against the public content endpoints.
/// `featured=true` is forwarded as a query parameter so the backend does
/// the filtering. No timeout is configured; a hung request is the
/// caller's to outwait, matching the browser client this replaces.
pub struct HttpContentSource {
    client: reqwest::Client,
    base_url: String,
}

fn map_http_error(err: HttpError) -> ContentSourceError {
    match err {
        HttpError::NotFound => ContentSourceError::NotFound,
        // The public endpoints are unauthenticated; a 401 here is a
        // backend misconfiguration and is reported like any rejection.
        HttpError::Unauthorized => ContentSourceError::Rejected("Unauthorized".to_string()),
        HttpError::Rejected(message) => ContentSourceError::Rejected(message),
        HttpError::Network(message) => ContentSourceError::Network(message),
        HttpError::Decode(message) => ContentSourceError::Decode(message),
    }
}

impl HttpContentSource {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.api_base.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        featured_only: bool,
    ) -> Result<T, ContentSourceError> {
        let mut request = self.client.get(self.url(path));
        if featured_only {
            request = request.query(&[("featured", "true")]);
        }
        let response = request
            .send()
            .await
            .map_err(|e| ContentSourceError::Network(e.to_string()))?;
        read_json(response).await.map_err(map_http_error)
    }
}

#[async_trait]
impl ContentSource for HttpContentSource {
    async fn fetch_case_studies(
        &self,
        featured_only: bool,
    ) -> Result<Vec<CaseStudy>, ContentSourceError> {
        self.get_json("/case-studies", featured_only).await
    }

    async fn fetch_case_study(&self, slug: &str) -> Result<CaseStudy, ContentSourceError> {
        self.get_json(&format!("/case-studies/{slug}"), false).await
    }

    async fn fetch_testimonials(
        &self,
        featured_only: bool,
    ) -> Result<Vec<Testimonial>, ContentSourceError> {
        self.get_json("/testimonials", featured_only).await
    }

    async fn fetch_testimonial(&self, id: &str) -> Result<Testimonial, ContentSourceError> {
        self.get_json(&format!("/testimonials/{id}"), false).await
    }

    async fn fetch_mentorship_sessions(
        &self,
        featured_only: bool,
    ) -> Result<Vec<Mentorship>, ContentSourceError> {
        self.get_json("/mentorship", featured_only).await
    }

    async fn fetch_mentorship_session(
        &self,
        slug: &str,
    ) -> Result<Mentorship, ContentSourceError> {
        self.get_json(&format!("/mentorship/{slug}"), false).await
    }

    async fn fetch_courses(&self, featured_only: bool) -> Result<Vec<Course>, ContentSourceError> {
        self.get_json("/courses", featured_only).await
    }

    async fn fetch_course(&self, slug: &str) -> Result<Course, ContentSourceError> {
        self.get_json(&format!("/courses/{slug}"), false).await
    }

    async fn fetch_youtube_videos(&self) -> Result<Vec<YouTubeVideo>, ContentSourceError> {
        self.get_json("/youtube", false).await
    }

    async fn send_contact(
        &self,
        message: &ContactMessage,
    ) -> Result<ContactAck, ContentSourceError> {
        let response = self
            .client
            .post(self.url("/contact"))
            .json(message)
            .send()
            .await
            .map_err(|e| ContentSourceError::Network(e.to_string()))?;
        read_json(response).await.map_err(map_http_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RuntimeMode;

    #[test]
    fn test_base_url_trailing_slash_is_normalized() {
        let config = ClientConfig::fixed("http://localhost:5000/api/", RuntimeMode::Production);
        let source = HttpContentSource::new(&config);

        assert_eq!(
            source.url("/case-studies"),
            "http://localhost:5000/api/case-studies"
        );
    }
}
