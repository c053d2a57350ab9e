use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crate::config::{ClientConfig, RuntimeMode};
use crate::modules::content::application::domain::entities::{
    CaseStudy, ContactAck, ContactMessage, Course, Mentorship, Testimonial, YouTubeVideo,
};
use crate::modules::content::application::ports::outgoing::{ContentSource, ContentSourceError};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentError {
    #[error("{entity} not found")]
    NotFound { entity: &'static str },
}

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

/// Public Content Access Facade.
///
/// Generic over two [`ContentSource`] implementations chosen at startup:
/// `live` (the HTTP adapter) and `fallback` (the bundled sample data).
/// In development mode the live source is never touched; in production a
/// failing live call is answered from the fallback instead of erroring,
/// so the public site degrades to sample content rather than breaking.
///
/// Fallback and development answers are delayed by the configured
/// simulated latency so loading-state UI behaves the same as against the
/// real API.
pub struct ContentService<S, F>
where
    S: ContentSource,
    F: ContentSource,
{
    live: S,
    fallback: F,
    mode: RuntimeMode,
    simulated_latency: Duration,
    api_available: AtomicBool,
}

impl<S, F> ContentService<S, F>
where
    S: ContentSource,
    F: ContentSource,
{
    pub fn new(live: S, fallback: F, config: &ClientConfig) -> Self {
        if config.mode.is_development() {
            tracing::info!(
                api_base = %config.api_base,
                "development mode: serving bundled sample data, the live API will not be called"
            );
        }
        Self {
            live,
            fallback,
            mode: config.mode,
            simulated_latency: config.simulated_latency,
            api_available: AtomicBool::new(!config.mode.is_development()),
        }
    }

    /// Whether the last live call succeeded. Lets a "using sample data"
    /// banner reflect the current source without re-deriving the logic.
    pub fn is_api_available(&self) -> bool {
        self.api_available.load(Ordering::Relaxed)
    }

    pub fn is_development(&self) -> bool {
        self.mode.is_development()
    }

    async fn fallback_pause(&self) {
        tokio::time::sleep(self.simulated_latency).await;
    }

    fn mark_available(&self, available: bool) {
        self.api_available.store(available, Ordering::Relaxed);
    }

    // ------------------------
    // Case studies
    // ------------------------

    pub async fn get_case_studies(
        &self,
        featured: bool,
    ) -> Result<Vec<CaseStudy>, ContentError> {
        if self.mode.is_development() {
            self.fallback_pause().await;
            return Ok(self
                .fallback
                .fetch_case_studies(featured)
                .await
                .unwrap_or_default());
        }
        match self.live.fetch_case_studies(featured).await {
            Ok(items) => {
                self.mark_available(true);
                Ok(items)
            }
            Err(err) => {
                tracing::warn!(error = %err, "case studies fetch failed, serving sample data");
                self.mark_available(false);
                self.fallback_pause().await;
                Ok(self
                    .fallback
                    .fetch_case_studies(featured)
                    .await
                    .unwrap_or_default())
            }
        }
    }

    pub async fn get_case_study(&self, slug: &str) -> Result<CaseStudy, ContentError> {
        const ENTITY: &str = "Case study";
        if self.mode.is_development() {
            self.fallback_pause().await;
            return self
                .fallback
                .fetch_case_study(slug)
                .await
                .map_err(|_| ContentError::NotFound { entity: ENTITY });
        }
        match self.live.fetch_case_study(slug).await {
            Ok(item) => {
                self.mark_available(true);
                Ok(item)
            }
            Err(err) => {
                tracing::warn!(slug, error = %err, "case study fetch failed, trying sample data");
                self.mark_available(false);
                self.fallback_pause().await;
                self.fallback
                    .fetch_case_study(slug)
                    .await
                    .map_err(|_| ContentError::NotFound { entity: ENTITY })
            }
        }
    }

    // ------------------------
    // Testimonials
    // ------------------------

    pub async fn get_testimonials(
        &self,
        featured: bool,
    ) -> Result<Vec<Testimonial>, ContentError> {
        if self.mode.is_development() {
            self.fallback_pause().await;
            return Ok(self
                .fallback
                .fetch_testimonials(featured)
                .await
                .unwrap_or_default());
        }
        match self.live.fetch_testimonials(featured).await {
            Ok(items) => {
                self.mark_available(true);
                Ok(items)
            }
            Err(err) => {
                tracing::warn!(error = %err, "testimonials fetch failed, serving sample data");
                self.mark_available(false);
                self.fallback_pause().await;
                Ok(self
                    .fallback
                    .fetch_testimonials(featured)
                    .await
                    .unwrap_or_default())
            }
        }
    }

    pub async fn get_testimonial(&self, id: &str) -> Result<Testimonial, ContentError> {
        const ENTITY: &str = "Testimonial";
        if self.mode.is_development() {
            self.fallback_pause().await;
            return self
                .fallback
                .fetch_testimonial(id)
                .await
                .map_err(|_| ContentError::NotFound { entity: ENTITY });
        }
        match self.live.fetch_testimonial(id).await {
            Ok(item) => {
                self.mark_available(true);
                Ok(item)
            }
            Err(err) => {
                tracing::warn!(id, error = %err, "testimonial fetch failed, trying sample data");
                self.mark_available(false);
                self.fallback_pause().await;
                self.fallback
                    .fetch_testimonial(id)
                    .await
                    .map_err(|_| ContentError::NotFound { entity: ENTITY })
            }
        }
    }

    // ------------------------
    // Mentorship
    // ------------------------

    pub async fn get_mentorship_sessions(
        &self,
        featured: bool,
    ) -> Result<Vec<Mentorship>, ContentError> {
        if self.mode.is_development() {
            self.fallback_pause().await;
            return Ok(self
                .fallback
                .fetch_mentorship_sessions(featured)
                .await
                .unwrap_or_default());
        }
        match self.live.fetch_mentorship_sessions(featured).await {
            Ok(items) => {
                self.mark_available(true);
                Ok(items)
            }
            Err(err) => {
                tracing::warn!(error = %err, "mentorship fetch failed, serving sample data");
                self.mark_available(false);
                self.fallback_pause().await;
                Ok(self
                    .fallback
                    .fetch_mentorship_sessions(featured)
                    .await
                    .unwrap_or_default())
            }
        }
    }

    pub async fn get_mentorship_session(&self, slug: &str) -> Result<Mentorship, ContentError> {
        const ENTITY: &str = "Mentorship session";
        if self.mode.is_development() {
            self.fallback_pause().await;
            return self
                .fallback
                .fetch_mentorship_session(slug)
                .await
                .map_err(|_| ContentError::NotFound { entity: ENTITY });
        }
        match self.live.fetch_mentorship_session(slug).await {
            Ok(item) => {
                self.mark_available(true);
                Ok(item)
            }
            Err(err) => {
                tracing::warn!(slug, error = %err, "mentorship session fetch failed, trying sample data");
                self.mark_available(false);
                self.fallback_pause().await;
                self.fallback
                    .fetch_mentorship_session(slug)
                    .await
                    .map_err(|_| ContentError::NotFound { entity: ENTITY })
            }
        }
    }

    // ------------------------
    // Courses and videos
    // ------------------------

    pub async fn get_courses(&self, featured: bool) -> Result<Vec<Course>, ContentError> {
        if self.mode.is_development() {
            self.fallback_pause().await;
            return Ok(self
                .fallback
                .fetch_courses(featured)
                .await
                .unwrap_or_default());
        }
        match self.live.fetch_courses(featured).await {
            Ok(items) => {
                self.mark_available(true);
                Ok(items)
            }
            Err(err) => {
                tracing::warn!(error = %err, "courses fetch failed, serving sample data");
                self.mark_available(false);
                self.fallback_pause().await;
                Ok(self
                    .fallback
                    .fetch_courses(featured)
                    .await
                    .unwrap_or_default())
            }
        }
    }

    pub async fn get_course(&self, slug: &str) -> Result<Course, ContentError> {
        const ENTITY: &str = "Course";
        if self.mode.is_development() {
            self.fallback_pause().await;
            return self
                .fallback
                .fetch_course(slug)
                .await
                .map_err(|_| ContentError::NotFound { entity: ENTITY });
        }
        match self.live.fetch_course(slug).await {
            Ok(item) => {
                self.mark_available(true);
                Ok(item)
            }
            Err(err) => {
                tracing::warn!(slug, error = %err, "course fetch failed, trying sample data");
                self.mark_available(false);
                self.fallback_pause().await;
                self.fallback
                    .fetch_course(slug)
                    .await
                    .map_err(|_| ContentError::NotFound { entity: ENTITY })
            }
        }
    }

    pub async fn get_youtube_videos(&self) -> Result<Vec<YouTubeVideo>, ContentError> {
        if self.mode.is_development() {
            self.fallback_pause().await;
            return Ok(self.fallback.fetch_youtube_videos().await.unwrap_or_default());
        }
        match self.live.fetch_youtube_videos().await {
            Ok(items) => {
                self.mark_available(true);
                Ok(items)
            }
            Err(err) => {
                tracing::warn!(error = %err, "videos fetch failed, serving sample data");
                self.mark_available(false);
                self.fallback_pause().await;
                Ok(self.fallback.fetch_youtube_videos().await.unwrap_or_default())
            }
        }
    }

    // ------------------------
    // Contact
    // ------------------------

    /// Submits the contact form. When the endpoint is skipped or down,
    /// the fallback acknowledges without delivering: the visitor still
    /// gets a confirmation, and nothing is sent.
    pub async fn submit_contact(
        &self,
        message: &ContactMessage,
    ) -> Result<ContactAck, ContentError> {
        const LOCAL_ACK: &str = "Thank you for your message! I will get back to you soon.";
        if self.mode.is_development() {
            self.fallback_pause().await;
            return Ok(self.fallback.send_contact(message).await.unwrap_or(ContactAck {
                message: LOCAL_ACK.to_string(),
            }));
        }
        match self.live.send_contact(message).await {
            Ok(ack) => {
                self.mark_available(true);
                Ok(ack)
            }
            Err(err) => {
                tracing::warn!(error = %err, "contact submission failed, acknowledging locally");
                self.mark_available(false);
                self.fallback_pause().await;
                Ok(self.fallback.send_contact(message).await.unwrap_or(ContactAck {
                    message: LOCAL_ACK.to_string(),
                }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::AtomicUsize;

    use crate::modules::content::adapter::outgoing::{
        sample_case_studies, SampleContentSource,
    };

    /// Live-source stand-in that counts calls and either fails everything
    /// or serves a fixed dataset.
    #[derive(Default)]
    struct MockLiveSource {
        calls: AtomicUsize,
        fail_all: bool,
        case_studies: Vec<CaseStudy>,
    }

    impl MockLiveSource {
        fn failing() -> Self {
            Self {
                fail_all: true,
                ..Default::default()
            }
        }

        fn with_case_studies(case_studies: Vec<CaseStudy>) -> Self {
            Self {
                case_studies,
                ..Default::default()
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::Relaxed)
        }

        fn record(&self) -> Result<(), ContentSourceError> {
            self.calls.fetch_add(1, Ordering::Relaxed);
            if self.fail_all {
                Err(ContentSourceError::Network("connection refused".to_string()))
            } else {
                Ok(())
            }
        }
    }

    #[async_trait]
    impl ContentSource for MockLiveSource {
        async fn fetch_case_studies(
            &self,
            featured_only: bool,
        ) -> Result<Vec<CaseStudy>, ContentSourceError> {
            self.record()?;
            Ok(self
                .case_studies
                .iter()
                .filter(|c| !featured_only || c.is_featured)
                .cloned()
                .collect())
        }

        async fn fetch_case_study(&self, slug: &str) -> Result<CaseStudy, ContentSourceError> {
            self.record()?;
            self.case_studies
                .iter()
                .find(|c| c.slug == slug)
                .cloned()
                .ok_or(ContentSourceError::NotFound)
        }

        async fn fetch_testimonials(
            &self,
            _featured_only: bool,
        ) -> Result<Vec<Testimonial>, ContentSourceError> {
            self.record()?;
            Ok(vec![])
        }

        async fn fetch_testimonial(&self, _id: &str) -> Result<Testimonial, ContentSourceError> {
            self.record()?;
            Err(ContentSourceError::NotFound)
        }

        async fn fetch_mentorship_sessions(
            &self,
            _featured_only: bool,
        ) -> Result<Vec<Mentorship>, ContentSourceError> {
            self.record()?;
            Ok(vec![])
        }

        async fn fetch_mentorship_session(
            &self,
            _slug: &str,
        ) -> Result<Mentorship, ContentSourceError> {
            self.record()?;
            Err(ContentSourceError::NotFound)
        }

        async fn fetch_courses(
            &self,
            _featured_only: bool,
        ) -> Result<Vec<Course>, ContentSourceError> {
            self.record()?;
            Ok(vec![])
        }

        async fn fetch_course(&self, _slug: &str) -> Result<Course, ContentSourceError> {
            self.record()?;
            Err(ContentSourceError::NotFound)
        }

        async fn fetch_youtube_videos(&self) -> Result<Vec<YouTubeVideo>, ContentSourceError> {
            self.record()?;
            Ok(vec![])
        }

        async fn send_contact(
            &self,
            _message: &ContactMessage,
        ) -> Result<ContactAck, ContentSourceError> {
            self.record()?;
            Ok(ContactAck {
                message: "delivered".to_string(),
            })
        }
    }

    fn dev_config() -> ClientConfig {
        ClientConfig::fixed("http://localhost:5000/api", RuntimeMode::Development)
            .with_simulated_latency(Duration::ZERO)
    }

    fn prod_config() -> ClientConfig {
        ClientConfig::fixed("http://localhost:5000/api", RuntimeMode::Production)
            .with_simulated_latency(Duration::ZERO)
    }

    fn service(
        live: MockLiveSource,
        config: &ClientConfig,
    ) -> ContentService<MockLiveSource, SampleContentSource> {
        ContentService::new(live, SampleContentSource::new(), config)
    }

    // =====================================================
    // Development mode
    // =====================================================

    #[tokio::test]
    async fn test_development_mode_never_calls_live_source() {
        let svc = service(MockLiveSource::default(), &dev_config());

        svc.get_case_studies(false).await.unwrap();
        svc.get_case_study("fintech-onboarding").await.unwrap();
        svc.get_testimonials(true).await.unwrap();
        svc.get_mentorship_sessions(false).await.unwrap();
        svc.get_courses(false).await.unwrap();
        svc.get_youtube_videos().await.unwrap();
        svc.submit_contact(&ContactMessage {
            name: "A".to_string(),
            email: "a@b.c".to_string(),
            message: "hi".to_string(),
            subject: None,
        })
        .await
        .unwrap();

        assert_eq!(svc.live.call_count(), 0);
        assert!(svc.is_development());
        assert!(!svc.is_api_available());
    }

    #[tokio::test]
    async fn test_development_mode_serves_sample_data() {
        let svc = service(MockLiveSource::default(), &dev_config());

        let all = svc.get_case_studies(false).await.unwrap();
        assert_eq!(all.len(), sample_case_studies().len());
    }

    // =====================================================
    // Featured filter
    // =====================================================

    #[tokio::test]
    async fn test_featured_filter_identical_for_both_sources() {
        // Fallback path.
        let svc = service(MockLiveSource::default(), &dev_config());
        let fallback_featured = svc.get_case_studies(true).await.unwrap();
        assert!(!fallback_featured.is_empty());
        assert!(fallback_featured.iter().all(|c| c.is_featured));

        // Live path, same dataset behind the mock.
        let svc = service(
            MockLiveSource::with_case_studies(sample_case_studies()),
            &prod_config(),
        );
        let live_featured = svc.get_case_studies(true).await.unwrap();
        assert_eq!(live_featured, fallback_featured);
    }

    // =====================================================
    // Availability flag and fallback substitution
    // =====================================================

    #[tokio::test]
    async fn test_live_success_marks_api_available() {
        let svc = service(
            MockLiveSource::with_case_studies(sample_case_studies()),
            &prod_config(),
        );

        svc.get_case_studies(false).await.unwrap();
        assert!(svc.is_api_available());
    }

    #[tokio::test]
    async fn test_live_failure_substitutes_sample_data_and_marks_unavailable() {
        let svc = service(MockLiveSource::failing(), &prod_config());

        let items = svc.get_case_studies(false).await.unwrap();
        assert_eq!(items.len(), sample_case_studies().len());
        assert_eq!(svc.live.call_count(), 1);
        assert!(!svc.is_api_available());
    }

    // =====================================================
    // Not-found
    // =====================================================

    #[tokio::test]
    async fn test_unknown_slug_rejects_from_fallback_path() {
        let svc = service(MockLiveSource::default(), &dev_config());

        let err = svc.get_case_study("nonexistent-slug").await.unwrap_err();
        assert_eq!(err, ContentError::NotFound { entity: "Case study" });
        assert_eq!(err.to_string(), "Case study not found");
    }

    #[tokio::test]
    async fn test_unknown_slug_rejects_from_live_path_too() {
        // Live source answers, but has no such slug; the fallback does not
        // either, so the lookup must still reject.
        let svc = service(MockLiveSource::with_case_studies(vec![]), &prod_config());

        let err = svc.get_case_study("nonexistent-slug").await.unwrap_err();
        assert_eq!(err, ContentError::NotFound { entity: "Case study" });
    }

    #[tokio::test]
    async fn test_course_lookup_has_no_fallback_entry() {
        let svc = service(MockLiveSource::failing(), &prod_config());

        let err = svc.get_course("any-course").await.unwrap_err();
        assert_eq!(err, ContentError::NotFound { entity: "Course" });

        // The courses listing still degrades to an empty collection.
        assert!(svc.get_courses(false).await.unwrap().is_empty());
    }

    // =====================================================
    // Contact
    // =====================================================

    #[tokio::test]
    async fn test_contact_failure_returns_local_ack() {
        let svc = service(MockLiveSource::failing(), &prod_config());

        let ack = svc
            .submit_contact(&ContactMessage {
                name: "A".to_string(),
                email: "a@b.c".to_string(),
                message: "hi".to_string(),
                subject: Some("Hello".to_string()),
            })
            .await
            .unwrap();

        assert!(ack.message.starts_with("Thank you"));
        assert!(!svc.is_api_available());
    }
}
