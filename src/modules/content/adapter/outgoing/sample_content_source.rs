//! Bundled sample content, served when the live API is skipped or down.
//!
//! Implements [`ContentSource`] over a static dataset so the facade can
//! treat it exactly like the real backend. The seed functions are also
//! what the dashboard's demo collections start from.

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

use crate::modules::content::application::domain::entities::{
    CaseStudy, ContactAck, ContactMessage, Course, KeyMetric, Mentorship, SessionTestimonial,
    SessionType, Testimonial, TestimonialType, YouTubeVideo,
};
use crate::modules::content::application::ports::outgoing::{ContentSource, ContentSourceError};

fn date(year: i32, month: u32, day: u32) -> Option<DateTime<Utc>> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).single()
}

pub fn sample_case_studies() -> Vec<CaseStudy> {
    vec![
        CaseStudy {
            id: Some("cs-fintech-onboarding".to_string()),
            title: "Reimagining Onboarding for a Fintech App".to_string(),
            slug: "fintech-onboarding".to_string(),
            cover_image: "/images/case-studies/fintech-onboarding-cover.webp".to_string(),
            case_study_image: "/images/case-studies/fintech-onboarding-full.webp".to_string(),
            problem_statement: "Seven out of ten new users abandoned account creation before \
                                verifying their identity."
                .to_string(),
            my_role: "Lead Product Designer".to_string(),
            key_metrics: vec![
                KeyMetric {
                    metric: "Signup completion".to_string(),
                    value: "+38%".to_string(),
                    description: Some("after the three-step flow shipped".to_string()),
                },
                KeyMetric {
                    metric: "Time to first deposit".to_string(),
                    value: "6 min".to_string(),
                    description: None,
                },
            ],
            prototype_link: Some("https://www.figma.com/proto/fintech-onboarding".to_string()),
            video_link: None,
            tags: vec![
                "fintech".to_string(),
                "mobile".to_string(),
                "research".to_string(),
            ],
            is_featured: true,
            created_at: date(2025, 3, 14),
        },
        CaseStudy {
            id: Some("cs-care-portal".to_string()),
            title: "A Calmer Patient Portal for a Care Network".to_string(),
            slug: "care-portal".to_string(),
            cover_image: "/images/case-studies/care-portal-cover.webp".to_string(),
            case_study_image: "/images/case-studies/care-portal-full.webp".to_string(),
            problem_statement: "Appointment no-shows climbed while support calls about the \
                                portal doubled."
                .to_string(),
            my_role: "Product Designer".to_string(),
            key_metrics: vec![KeyMetric {
                metric: "No-show rate".to_string(),
                value: "-21%".to_string(),
                description: Some("across three clinics in the pilot".to_string()),
            }],
            prototype_link: None,
            video_link: Some("https://youtu.be/care-portal-walkthrough".to_string()),
            tags: vec!["healthcare".to_string(), "accessibility".to_string()],
            is_featured: true,
            created_at: date(2024, 11, 2),
        },
        CaseStudy {
            id: Some("cs-design-system".to_string()),
            title: "A Design System the Whole Team Actually Uses".to_string(),
            slug: "design-system".to_string(),
            cover_image: "/images/case-studies/design-system-cover.webp".to_string(),
            case_study_image: "/images/case-studies/design-system-full.webp".to_string(),
            problem_statement: "Four product squads shipped four different button styles in \
                                the same quarter."
                .to_string(),
            my_role: "Design Systems Lead".to_string(),
            key_metrics: vec![KeyMetric {
                metric: "Component reuse".to_string(),
                value: "92%".to_string(),
                description: None,
            }],
            prototype_link: None,
            video_link: None,
            tags: vec!["design systems".to_string()],
            is_featured: false,
            created_at: date(2024, 6, 20),
        },
    ]
}

pub fn sample_testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            id: Some("t-sara".to_string()),
            quote: "Amgad turned a vague brief into a product our users describe as \
                    'finally obvious'."
                .to_string(),
            author_name: "Sara Haddad".to_string(),
            author_title: "Head of Product".to_string(),
            client_company: Some("Nuvola Pay".to_string()),
            author_image: None,
            author_linked_in: Some("https://linkedin.com/in/sara-haddad".to_string()),
            rating: Some(5),
            project_name: Some("Fintech onboarding".to_string()),
            testimonial_type: Some(TestimonialType::Client),
            is_featured: true,
            created_at: date(2025, 4, 2),
        },
        Testimonial {
            id: Some("t-omar".to_string()),
            quote: "The mentorship sessions gave me the portfolio feedback I could not get \
                    anywhere else."
                .to_string(),
            author_name: "Omar Khalil".to_string(),
            author_title: "Junior UX Designer".to_string(),
            client_company: None,
            author_image: None,
            author_linked_in: None,
            rating: Some(5),
            project_name: None,
            testimonial_type: Some(TestimonialType::Mentee),
            is_featured: true,
            created_at: date(2025, 1, 18),
        },
        Testimonial {
            id: Some("t-lena".to_string()),
            quote: "Working alongside Amgad raised the bar for every designer on the team."
                .to_string(),
            author_name: "Lena Fischer".to_string(),
            author_title: "Engineering Manager".to_string(),
            client_company: Some("Care Network".to_string()),
            author_image: None,
            author_linked_in: None,
            rating: Some(4),
            project_name: Some("Patient portal".to_string()),
            testimonial_type: Some(TestimonialType::Colleague),
            is_featured: false,
            created_at: date(2024, 12, 9),
        },
        Testimonial {
            id: Some("t-yusuf".to_string()),
            quote: "The design systems course finally made tokens click for me.".to_string(),
            author_name: "Yusuf Demir".to_string(),
            author_title: "Design Student".to_string(),
            client_company: None,
            author_image: None,
            author_linked_in: None,
            rating: None,
            project_name: None,
            testimonial_type: Some(TestimonialType::Student),
            is_featured: false,
            created_at: date(2024, 9, 30),
        },
    ]
}

pub fn sample_mentorship_sessions() -> Vec<Mentorship> {
    vec![
        Mentorship {
            id: Some("m-portfolio-review".to_string()),
            title: "Portfolio Deep Dive".to_string(),
            slug: "portfolio-deep-dive".to_string(),
            session_type: Some(SessionType::OneOnOne),
            target_audience: "Designers preparing for their next role".to_string(),
            description: "A focused review of your portfolio with concrete rewrites of your \
                          weakest case study."
                .to_string(),
            what_to_expect: vec![
                "A recorded walkthrough of your portfolio".to_string(),
                "Case-study structure feedback".to_string(),
                "A prioritized fix list".to_string(),
            ],
            preparation_required: Some("Send your portfolio link 48 hours ahead".to_string()),
            duration: "60 min".to_string(),
            price: 120.0,
            offer_price: Some(90.0),
            offer_end_date: date(2030, 1, 1),
            currency: Some("USD".to_string()),
            booking_link: "https://cal.com/amgad/portfolio-deep-dive".to_string(),
            testimonials: vec![SessionTestimonial {
                author: "Omar Khalil".to_string(),
                quote: "Three sessions in, I had two interviews lined up.".to_string(),
            }],
            is_active: true,
            is_featured: true,
            created_at: date(2025, 2, 1),
        },
        Mentorship {
            id: Some("m-group-critique".to_string()),
            title: "Group Critique Circle".to_string(),
            slug: "group-critique-circle".to_string(),
            session_type: Some(SessionType::Group),
            target_audience: "Small groups of early-career designers".to_string(),
            description: "Monthly critique with peers, moderated so feedback stays specific \
                          and kind."
                .to_string(),
            what_to_expect: vec![
                "Two work-in-progress presentations".to_string(),
                "Structured critique rounds".to_string(),
            ],
            preparation_required: None,
            duration: "90 min".to_string(),
            price: 45.0,
            offer_price: None,
            offer_end_date: None,
            currency: Some("USD".to_string()),
            booking_link: "https://cal.com/amgad/group-critique".to_string(),
            testimonials: vec![],
            is_active: true,
            is_featured: false,
            created_at: date(2024, 10, 15),
        },
        Mentorship {
            id: Some("m-systems-workshop".to_string()),
            title: "Design Tokens Workshop".to_string(),
            slug: "design-tokens-workshop".to_string(),
            session_type: Some(SessionType::Workshop),
            target_audience: "Teams adopting a design system".to_string(),
            description: "Hands-on workshop: name, structure and ship a token set for one \
                          real product screen."
                .to_string(),
            what_to_expect: vec![
                "Token naming exercises".to_string(),
                "A migration plan template".to_string(),
            ],
            preparation_required: Some("Bring one screen from your product".to_string()),
            duration: "Half day".to_string(),
            price: 600.0,
            offer_price: None,
            offer_end_date: None,
            currency: Some("USD".to_string()),
            booking_link: "https://cal.com/amgad/tokens-workshop".to_string(),
            testimonials: vec![],
            is_active: true,
            is_featured: true,
            created_at: date(2025, 5, 7),
        },
    ]
}

/// No bundled courses yet; the section renders its empty state offline.
pub fn sample_courses() -> Vec<Course> {
    vec![]
}

pub fn sample_youtube_videos() -> Vec<YouTubeVideo> {
    vec![]
}

//
// ──────────────────────────────────────────────────────────
// Adapter
// ──────────────────────────────────────────────────────────
//

#[derive(Default)]
pub struct SampleContentSource;

impl SampleContentSource {
    pub fn new() -> Self {
        Self
    }
}

fn only_featured<T>(items: Vec<T>, featured_only: bool, is_featured: impl Fn(&T) -> bool) -> Vec<T> {
    if featured_only {
        items.into_iter().filter(is_featured).collect()
    } else {
        items
    }
}

#[async_trait]
impl ContentSource for SampleContentSource {
    async fn fetch_case_studies(
        &self,
        featured_only: bool,
    ) -> Result<Vec<CaseStudy>, ContentSourceError> {
        Ok(only_featured(sample_case_studies(), featured_only, |c| {
            c.is_featured
        }))
    }

    async fn fetch_case_study(&self, slug: &str) -> Result<CaseStudy, ContentSourceError> {
        sample_case_studies()
            .into_iter()
            .find(|c| c.slug == slug)
            .ok_or(ContentSourceError::NotFound)
    }

    async fn fetch_testimonials(
        &self,
        featured_only: bool,
    ) -> Result<Vec<Testimonial>, ContentSourceError> {
        Ok(only_featured(sample_testimonials(), featured_only, |t| {
            t.is_featured
        }))
    }

    async fn fetch_testimonial(&self, id: &str) -> Result<Testimonial, ContentSourceError> {
        sample_testimonials()
            .into_iter()
            .find(|t| t.id.as_deref() == Some(id))
            .ok_or(ContentSourceError::NotFound)
    }

    async fn fetch_mentorship_sessions(
        &self,
        featured_only: bool,
    ) -> Result<Vec<Mentorship>, ContentSourceError> {
        Ok(only_featured(
            sample_mentorship_sessions(),
            featured_only,
            |m| m.is_featured,
        ))
    }

    async fn fetch_mentorship_session(
        &self,
        slug: &str,
    ) -> Result<Mentorship, ContentSourceError> {
        sample_mentorship_sessions()
            .into_iter()
            .find(|m| m.slug == slug)
            .ok_or(ContentSourceError::NotFound)
    }

    async fn fetch_courses(&self, featured_only: bool) -> Result<Vec<Course>, ContentSourceError> {
        Ok(only_featured(sample_courses(), featured_only, |c| {
            c.is_featured
        }))
    }

    async fn fetch_course(&self, slug: &str) -> Result<Course, ContentSourceError> {
        sample_courses()
            .into_iter()
            .find(|c| c.slug == slug)
            .ok_or(ContentSourceError::NotFound)
    }

    async fn fetch_youtube_videos(&self) -> Result<Vec<YouTubeVideo>, ContentSourceError> {
        Ok(sample_youtube_videos())
    }

    /// Acknowledges without delivering anything. The facade only reaches
    /// for this when the real endpoint is skipped or unreachable, and the
    /// public site should still thank the visitor.
    async fn send_contact(
        &self,
        message: &ContactMessage,
    ) -> Result<ContactAck, ContentSourceError> {
        tracing::debug!(from = %message.email, "contact message acknowledged locally, not delivered");
        Ok(ContactAck {
            message: "Thank you for your message! I will get back to you soon.".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_featured_listing_is_exact_subset() {
        let source = SampleContentSource::new();

        let all = source.fetch_case_studies(false).await.unwrap();
        let featured = source.fetch_case_studies(true).await.unwrap();

        assert!(featured.iter().all(|c| c.is_featured));
        assert_eq!(
            featured.len(),
            all.iter().filter(|c| c.is_featured).count()
        );
        assert!(featured.len() < all.len());
    }

    #[tokio::test]
    async fn test_unknown_slug_is_not_found() {
        let source = SampleContentSource::new();
        let result = source.fetch_case_study("nonexistent-slug").await;
        assert!(matches!(result, Err(ContentSourceError::NotFound)));
    }

    #[tokio::test]
    async fn test_courses_are_empty_not_missing() {
        let source = SampleContentSource::new();
        assert!(source.fetch_courses(false).await.unwrap().is_empty());
        assert!(matches!(
            source.fetch_course("any").await,
            Err(ContentSourceError::NotFound)
        ));
    }

    #[test]
    fn test_seed_ids_and_slugs_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for cs in sample_case_studies() {
            assert!(seen.insert(cs.id.clone().unwrap()));
            assert!(seen.insert(cs.slug.clone()));
        }
        for t in sample_testimonials() {
            assert!(seen.insert(t.id.clone().unwrap()));
        }
        for m in sample_mentorship_sessions() {
            assert!(seen.insert(m.id.clone().unwrap()));
            assert!(seen.insert(m.slug.clone()));
        }
    }
}
