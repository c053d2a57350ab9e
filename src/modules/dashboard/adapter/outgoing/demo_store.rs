use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};

use chrono::Utc;

use crate::modules::content::adapter::outgoing::{
    sample_case_studies, sample_mentorship_sessions, sample_testimonials,
};
use crate::modules::content::application::domain::entities::{CaseStudy, Mentorship, Testimonial};
use crate::modules::dashboard::application::ports::outgoing::{
    CaseStudyCreate, CaseStudyPatch, MentorshipCreate, MentorshipPatch, TestimonialCreate,
    TestimonialPatch,
};

/// In-memory collections backing demo mode.
///
/// Seeded from the same sample dataset the public facade falls back to,
/// mutated in place by the dashboard's demo path, and re-seeded on
/// logout so demo edits never outlive the session. One instance lives
/// for the whole app session; same-thread execution serializes access,
/// the mutex only guards against embedders that share it across tasks.
pub struct DemoStore {
    state: Mutex<DemoData>,
}

struct DemoData {
    case_studies: Vec<CaseStudy>,
    testimonials: Vec<Testimonial>,
    mentorship: Vec<Mentorship>,
}

impl DemoData {
    fn seed() -> Self {
        Self {
            case_studies: sample_case_studies(),
            testimonials: sample_testimonials(),
            mentorship: sample_mentorship_sessions(),
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum DemoStoreError {
    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    #[error("Demo data unavailable")]
    Poisoned,
}

/// Identity for demo-created entities: unique within the session, never
/// colliding with seed ids or with each other even in the same
/// millisecond.
fn demo_id() -> String {
    static SEQ: AtomicU64 = AtomicU64::new(0);
    let seq = SEQ.fetch_add(1, Ordering::Relaxed);
    format!("demo-{}-{}", Utc::now().timestamp_millis(), seq)
}

impl Default for DemoStore {
    fn default() -> Self {
        Self::seeded()
    }
}

impl DemoStore {
    pub fn seeded() -> Self {
        Self {
            state: Mutex::new(DemoData::seed()),
        }
    }

    /// Discard all demo edits and restore the seed dataset.
    pub fn reset(&self) -> Result<(), DemoStoreError> {
        *self.lock()? = DemoData::seed();
        Ok(())
    }

    fn lock(&self) -> Result<MutexGuard<'_, DemoData>, DemoStoreError> {
        self.state.lock().map_err(|_| DemoStoreError::Poisoned)
    }

    // ------------------------
    // Case studies
    // ------------------------

    pub fn case_studies(&self) -> Result<Vec<CaseStudy>, DemoStoreError> {
        Ok(self.lock()?.case_studies.clone())
    }

    pub fn insert_case_study(
        &self,
        data: CaseStudyCreate,
    ) -> Result<CaseStudy, DemoStoreError> {
        let entity = CaseStudy {
            id: Some(demo_id()),
            title: data.title,
            slug: data.slug,
            cover_image: data.cover_image,
            case_study_image: data.case_study_image,
            problem_statement: data.problem_statement,
            my_role: data.my_role,
            key_metrics: data.key_metrics,
            prototype_link: data.prototype_link,
            video_link: data.video_link,
            tags: data.tags,
            is_featured: data.is_featured,
            created_at: Some(Utc::now()),
        };
        self.lock()?.case_studies.push(entity.clone());
        Ok(entity)
    }

    pub fn patch_case_study(
        &self,
        key: &str,
        patch: &CaseStudyPatch,
    ) -> Result<CaseStudy, DemoStoreError> {
        let mut state = self.lock()?;
        let entity = state
            .case_studies
            .iter_mut()
            .find(|c| c.matches_key(key))
            .ok_or(DemoStoreError::NotFound {
                entity: "Case study",
            })?;

        if let Some(v) = &patch.title {
            entity.title = v.clone();
        }
        if let Some(v) = &patch.slug {
            entity.slug = v.clone();
        }
        if let Some(v) = &patch.cover_image {
            entity.cover_image = v.clone();
        }
        if let Some(v) = &patch.case_study_image {
            entity.case_study_image = v.clone();
        }
        if let Some(v) = &patch.problem_statement {
            entity.problem_statement = v.clone();
        }
        if let Some(v) = &patch.my_role {
            entity.my_role = v.clone();
        }
        if let Some(v) = &patch.key_metrics {
            entity.key_metrics = v.clone();
        }
        patch.prototype_link.apply_to(&mut entity.prototype_link);
        patch.video_link.apply_to(&mut entity.video_link);
        if let Some(v) = &patch.tags {
            entity.tags = v.clone();
        }
        if let Some(v) = patch.is_featured {
            entity.is_featured = v;
        }

        Ok(entity.clone())
    }

    /// Idempotent: removing an absent entity is a success.
    pub fn remove_case_study(&self, key: &str) -> Result<(), DemoStoreError> {
        self.lock()?.case_studies.retain(|c| !c.matches_key(key));
        Ok(())
    }

    // ------------------------
    // Testimonials
    // ------------------------

    pub fn testimonials(&self) -> Result<Vec<Testimonial>, DemoStoreError> {
        Ok(self.lock()?.testimonials.clone())
    }

    pub fn insert_testimonial(
        &self,
        data: TestimonialCreate,
    ) -> Result<Testimonial, DemoStoreError> {
        let entity = Testimonial {
            id: Some(demo_id()),
            quote: data.quote,
            author_name: data.author_name,
            author_title: data.author_title,
            client_company: data.client_company,
            author_image: data.author_image,
            author_linked_in: data.author_linked_in,
            rating: data.rating,
            project_name: data.project_name,
            testimonial_type: data.testimonial_type,
            is_featured: data.is_featured,
            created_at: Some(Utc::now()),
        };
        self.lock()?.testimonials.push(entity.clone());
        Ok(entity)
    }

    pub fn patch_testimonial(
        &self,
        key: &str,
        patch: &TestimonialPatch,
    ) -> Result<Testimonial, DemoStoreError> {
        let mut state = self.lock()?;
        let entity = state
            .testimonials
            .iter_mut()
            .find(|t| t.matches_key(key))
            .ok_or(DemoStoreError::NotFound {
                entity: "Testimonial",
            })?;

        if let Some(v) = &patch.quote {
            entity.quote = v.clone();
        }
        if let Some(v) = &patch.author_name {
            entity.author_name = v.clone();
        }
        if let Some(v) = &patch.author_title {
            entity.author_title = v.clone();
        }
        patch.client_company.apply_to(&mut entity.client_company);
        patch.author_image.apply_to(&mut entity.author_image);
        patch
            .author_linked_in
            .apply_to(&mut entity.author_linked_in);
        patch.rating.apply_to(&mut entity.rating);
        patch.project_name.apply_to(&mut entity.project_name);
        patch
            .testimonial_type
            .apply_to(&mut entity.testimonial_type);
        if let Some(v) = patch.is_featured {
            entity.is_featured = v;
        }

        Ok(entity.clone())
    }

    pub fn remove_testimonial(&self, key: &str) -> Result<(), DemoStoreError> {
        self.lock()?.testimonials.retain(|t| !t.matches_key(key));
        Ok(())
    }

    // ------------------------
    // Mentorship
    // ------------------------

    pub fn mentorship_sessions(&self) -> Result<Vec<Mentorship>, DemoStoreError> {
        Ok(self.lock()?.mentorship.clone())
    }

    pub fn insert_mentorship_session(
        &self,
        data: MentorshipCreate,
    ) -> Result<Mentorship, DemoStoreError> {
        let entity = Mentorship {
            id: Some(demo_id()),
            title: data.title,
            slug: data.slug,
            session_type: data.session_type,
            target_audience: data.target_audience,
            description: data.description,
            what_to_expect: data.what_to_expect,
            preparation_required: data.preparation_required,
            duration: data.duration,
            price: data.price,
            offer_price: data.offer_price,
            offer_end_date: data.offer_end_date,
            currency: data.currency,
            booking_link: data.booking_link,
            testimonials: data.testimonials,
            is_active: data.is_active,
            is_featured: data.is_featured,
            created_at: Some(Utc::now()),
        };
        self.lock()?.mentorship.push(entity.clone());
        Ok(entity)
    }

    pub fn patch_mentorship_session(
        &self,
        key: &str,
        patch: &MentorshipPatch,
    ) -> Result<Mentorship, DemoStoreError> {
        let mut state = self.lock()?;
        let entity = state
            .mentorship
            .iter_mut()
            .find(|m| m.matches_key(key))
            .ok_or(DemoStoreError::NotFound {
                entity: "Mentorship session",
            })?;

        if let Some(v) = &patch.title {
            entity.title = v.clone();
        }
        if let Some(v) = &patch.slug {
            entity.slug = v.clone();
        }
        patch.session_type.apply_to(&mut entity.session_type);
        if let Some(v) = &patch.target_audience {
            entity.target_audience = v.clone();
        }
        if let Some(v) = &patch.description {
            entity.description = v.clone();
        }
        if let Some(v) = &patch.what_to_expect {
            entity.what_to_expect = v.clone();
        }
        patch
            .preparation_required
            .apply_to(&mut entity.preparation_required);
        if let Some(v) = &patch.duration {
            entity.duration = v.clone();
        }
        if let Some(v) = patch.price {
            entity.price = v;
        }
        patch.offer_price.apply_to(&mut entity.offer_price);
        patch.offer_end_date.apply_to(&mut entity.offer_end_date);
        patch.currency.apply_to(&mut entity.currency);
        if let Some(v) = &patch.booking_link {
            entity.booking_link = v.clone();
        }
        if let Some(v) = &patch.testimonials {
            entity.testimonials = v.clone();
        }
        if let Some(v) = patch.is_active {
            entity.is_active = v;
        }
        if let Some(v) = patch.is_featured {
            entity.is_featured = v;
        }

        Ok(entity.clone())
    }

    pub fn remove_mentorship_session(&self, key: &str) -> Result<(), DemoStoreError> {
        self.lock()?.mentorship.retain(|m| !m.matches_key(key));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::patch::PatchField;

    #[test]
    fn test_insert_assigns_unique_ids() {
        let store = DemoStore::seeded();

        let first = store
            .insert_case_study(CaseStudyCreate {
                title: "One".to_string(),
                slug: "one".to_string(),
                ..Default::default()
            })
            .unwrap();
        let second = store
            .insert_case_study(CaseStudyCreate {
                title: "Two".to_string(),
                slug: "two".to_string(),
                ..Default::default()
            })
            .unwrap();

        assert_ne!(first.id, second.id);
        assert!(first.id.unwrap().starts_with("demo-"));
    }

    #[test]
    fn test_patch_by_slug_merges_only_given_fields() {
        let store = DemoStore::seeded();

        let patched = store
            .patch_case_study(
                "fintech-onboarding",
                &CaseStudyPatch {
                    title: Some("Renamed".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(patched.title, "Renamed");
        // Everything else kept its seeded value.
        assert_eq!(patched.my_role, "Lead Product Designer");
        assert!(patched.is_featured);
    }

    #[test]
    fn test_patch_null_clears_optional_field() {
        let store = DemoStore::seeded();

        let patched = store
            .patch_case_study(
                "fintech-onboarding",
                &CaseStudyPatch {
                    prototype_link: PatchField::Null,
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(patched.prototype_link, None);
    }

    #[test]
    fn test_patch_unknown_key_is_not_found() {
        let store = DemoStore::seeded();
        let result = store.patch_case_study("missing", &CaseStudyPatch::default());
        assert!(matches!(result, Err(DemoStoreError::NotFound { .. })));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let store = DemoStore::seeded();
        let before = store.case_studies().unwrap().len();

        store.remove_case_study("fintech-onboarding").unwrap();
        store.remove_case_study("fintech-onboarding").unwrap();

        assert_eq!(store.case_studies().unwrap().len(), before - 1);
    }

    #[test]
    fn test_remove_accepts_id_or_slug() {
        let store = DemoStore::seeded();
        store.remove_mentorship_session("m-portfolio-review").unwrap();
        assert!(store
            .mentorship_sessions()
            .unwrap()
            .iter()
            .all(|m| m.slug != "portfolio-deep-dive"));
    }

    #[test]
    fn test_reset_restores_seed() {
        let store = DemoStore::seeded();
        store
            .insert_testimonial(TestimonialCreate {
                quote: "Temp".to_string(),
                author_name: "Nobody".to_string(),
                ..Default::default()
            })
            .unwrap();
        store.remove_case_study("care-portal").unwrap();

        store.reset().unwrap();

        assert_eq!(
            store.testimonials().unwrap().len(),
            sample_testimonials().len()
        );
        assert_eq!(
            store.case_studies().unwrap().len(),
            sample_case_studies().len()
        );
    }
}
