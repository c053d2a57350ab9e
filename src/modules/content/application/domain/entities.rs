//! Content entities, normalized at the deserialization boundary.
//!
//! The backend grew organically and some fields arrive in more than one
//! shape: `keyMetrics` is either the current array-of-objects form or a
//! legacy `{name: number}` object, and `testimonialType` has lowercase
//! legacy spellings. Both are normalized here, once, so nothing
//! downstream ever branches on shape.

use chrono::{DateTime, Utc};
use serde::de::{MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

fn default_true() -> bool {
    true
}

//
// ──────────────────────────────────────────────────────────
// Key metrics
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyMetric {
    pub metric: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Accepts both metric shapes and produces the canonical ordered form.
///
/// Legacy object entries are converted in document order, with the key as
/// the metric name and the number rendered as the value.
pub(crate) fn deserialize_key_metrics<'de, D>(deserializer: D) -> Result<Vec<KeyMetric>, D::Error>
where
    D: Deserializer<'de>,
{
    struct KeyMetricsVisitor;

    impl<'de> Visitor<'de> for KeyMetricsVisitor {
        type Value = Vec<KeyMetric>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a sequence of key metrics or a map of metric names to numbers")
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where
            A: SeqAccess<'de>,
        {
            let mut metrics = Vec::new();
            while let Some(metric) = seq.next_element::<KeyMetric>()? {
                metrics.push(metric);
            }
            Ok(metrics)
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut metrics = Vec::new();
            while let Some((metric, value)) = map.next_entry::<String, serde_json::Number>()? {
                metrics.push(KeyMetric {
                    metric,
                    value: value.to_string(),
                    description: None,
                });
            }
            Ok(metrics)
        }
    }

    deserializer.deserialize_any(KeyMetricsVisitor)
}

//
// ──────────────────────────────────────────────────────────
// Case study
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseStudy {
    #[serde(
        rename = "_id",
        alias = "id",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub cover_image: String,
    #[serde(default)]
    pub case_study_image: String,
    #[serde(default)]
    pub problem_statement: String,
    #[serde(default)]
    pub my_role: String,
    #[serde(default, deserialize_with = "deserialize_key_metrics")]
    pub key_metrics: Vec<KeyMetric>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prototype_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_link: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl CaseStudy {
    /// True when `key` is this entity's id or slug.
    pub fn matches_key(&self, key: &str) -> bool {
        self.id.as_deref() == Some(key) || self.slug == key
    }
}

//
// ──────────────────────────────────────────────────────────
// Testimonial
// ──────────────────────────────────────────────────────────
//

/// Closed testimonial category.
///
/// Parsing maps the lowercase legacy spellings onto the canonical
/// variants and folds the retired `peer`/`manager` values into
/// `Colleague`. Anything else is rejected at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TestimonialType {
    Client,
    Mentee,
    Colleague,
    Student,
}

impl std::str::FromStr for TestimonialType {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "Client" | "client" => Ok(TestimonialType::Client),
            "Mentee" | "mentee" => Ok(TestimonialType::Mentee),
            "Colleague" | "colleague" | "peer" | "manager" => Ok(TestimonialType::Colleague),
            "Student" | "student" => Ok(TestimonialType::Student),
            other => Err(format!("unrecognized testimonial type: {other:?}")),
        }
    }
}

impl<'de> Deserialize<'de> for TestimonialType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    #[serde(
        rename = "_id",
        alias = "id",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    pub quote: String,
    pub author_name: String,
    #[serde(default)]
    pub author_title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_linked_in: Option<String>,
    /// 1-5 when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub testimonial_type: Option<TestimonialType>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Testimonial {
    pub fn matches_key(&self, key: &str) -> bool {
        self.id.as_deref() == Some(key)
    }
}

//
// ──────────────────────────────────────────────────────────
// Mentorship
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionType {
    #[serde(rename = "one-on-one")]
    OneOnOne,
    #[serde(rename = "group")]
    Group,
    #[serde(rename = "workshop")]
    Workshop,
    #[serde(rename = "course")]
    Course,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionTestimonial {
    pub author: String,
    pub quote: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mentorship {
    #[serde(
        rename = "_id",
        alias = "id",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    pub title: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_type: Option<SessionType>,
    #[serde(default)]
    pub target_audience: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub what_to_expect: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preparation_required: Option<String>,
    #[serde(default)]
    pub duration: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offer_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offer_end_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default)]
    pub booking_link: String,
    #[serde(default)]
    pub testimonials: Vec<SessionTestimonial>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Mentorship {
    /// An offer is active only while both a discounted price and a future
    /// end date are present. An `offerPrice` whose window has closed must
    /// never be displayed.
    pub fn has_active_offer(&self, now: DateTime<Utc>) -> bool {
        match (self.offer_price, self.offer_end_date) {
            (Some(_), Some(end)) => end > now,
            _ => false,
        }
    }

    /// The price to display: the offer price while the offer is active,
    /// the regular price otherwise.
    pub fn current_price(&self, now: DateTime<Utc>) -> f64 {
        if self.has_active_offer(now) {
            self.offer_price.unwrap_or(self.price)
        } else {
            self.price
        }
    }

    pub fn matches_key(&self, key: &str) -> bool {
        self.id.as_deref() == Some(key) || self.slug == key
    }
}

//
// ──────────────────────────────────────────────────────────
// Courses and videos (read-only)
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseLevel {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[serde(
        rename = "_id",
        alias = "id",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    pub title: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<CourseLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enrollment_link: Option<String>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YouTubeVideo {
    #[serde(
        rename = "_id",
        alias = "id",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    pub title: String,
    pub video_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

//
// ──────────────────────────────────────────────────────────
// Contact
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactAck {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn minimal_case_study(extra: serde_json::Value) -> CaseStudy {
        let mut base = serde_json::json!({
            "title": "Redesign",
            "slug": "redesign",
        });
        base.as_object_mut()
            .unwrap()
            .extend(extra.as_object().unwrap().clone());
        serde_json::from_value(base).unwrap()
    }

    // =====================================================
    // Key metrics normalization
    // =====================================================

    #[test]
    fn test_key_metrics_array_form_parses_as_is() {
        let cs = minimal_case_study(serde_json::json!({
            "keyMetrics": [
                { "metric": "Conversion", "value": "+32%", "description": "checkout flow" },
                { "metric": "NPS", "value": "61" }
            ]
        }));

        assert_eq!(cs.key_metrics.len(), 2);
        assert_eq!(cs.key_metrics[0].metric, "Conversion");
        assert_eq!(cs.key_metrics[0].value, "+32%");
        assert_eq!(cs.key_metrics[1].description, None);
    }

    #[test]
    fn test_key_metrics_legacy_object_form_is_normalized_in_order() {
        // Parsed from a string so the legacy object's document order
        // reaches the visitor, as it does when decoding a response body.
        let raw = r#"{
            "title": "Redesign",
            "slug": "redesign",
            "keyMetrics": { "Retention": 87, "Churn": 2.5 }
        }"#;
        let cs: CaseStudy = serde_json::from_str(raw).unwrap();

        assert_eq!(cs.key_metrics.len(), 2);
        assert_eq!(cs.key_metrics[0].metric, "Retention");
        assert_eq!(cs.key_metrics[0].value, "87");
        assert_eq!(cs.key_metrics[1].metric, "Churn");
        assert_eq!(cs.key_metrics[1].value, "2.5");
    }

    #[test]
    fn test_key_metrics_absent_means_empty() {
        let cs = minimal_case_study(serde_json::json!({}));
        assert!(cs.key_metrics.is_empty());
    }

    // =====================================================
    // Identity and defaults
    // =====================================================

    #[test]
    fn test_underscore_id_and_plain_id_both_accepted() {
        let with_underscore = minimal_case_study(serde_json::json!({ "_id": "abc" }));
        let with_plain = minimal_case_study(serde_json::json!({ "id": "abc" }));

        assert_eq!(with_underscore.id.as_deref(), Some("abc"));
        assert_eq!(with_plain.id.as_deref(), Some("abc"));
    }

    #[test]
    fn test_matches_key_by_id_or_slug() {
        let cs = minimal_case_study(serde_json::json!({ "_id": "abc" }));

        assert!(cs.matches_key("abc"));
        assert!(cs.matches_key("redesign"));
        assert!(!cs.matches_key("other"));
    }

    #[test]
    fn test_is_featured_defaults_false() {
        let cs = minimal_case_study(serde_json::json!({}));
        assert!(!cs.is_featured);
    }

    #[test]
    fn test_mentorship_is_active_defaults_true() {
        let m: Mentorship = serde_json::from_value(serde_json::json!({
            "title": "Portfolio Review",
            "slug": "portfolio-review",
            "price": 80.0
        }))
        .unwrap();

        assert!(m.is_active);
        assert!(!m.is_featured);
    }

    // =====================================================
    // Testimonial type normalization
    // =====================================================

    #[test]
    fn test_testimonial_type_canonical_and_legacy_spellings() {
        for (raw, expected) in [
            ("Client", TestimonialType::Client),
            ("client", TestimonialType::Client),
            ("Mentee", TestimonialType::Mentee),
            ("mentee", TestimonialType::Mentee),
            ("Colleague", TestimonialType::Colleague),
            ("peer", TestimonialType::Colleague),
            ("manager", TestimonialType::Colleague),
            ("Student", TestimonialType::Student),
            ("student", TestimonialType::Student),
        ] {
            let parsed: TestimonialType =
                serde_json::from_value(serde_json::json!(raw)).unwrap();
            assert_eq!(parsed, expected, "raw value {raw:?}");
        }
    }

    #[test]
    fn test_testimonial_type_rejects_unknown_values() {
        let result: Result<TestimonialType, _> =
            serde_json::from_value(serde_json::json!("sponsor"));
        assert!(result.is_err());
    }

    #[test]
    fn test_testimonial_type_serializes_canonically() {
        let json = serde_json::to_value(TestimonialType::Colleague).unwrap();
        assert_eq!(json, serde_json::json!("Colleague"));
    }

    // =====================================================
    // Offer window
    // =====================================================

    fn session_with_offer(
        price: f64,
        offer_price: Option<f64>,
        offer_end_date: Option<DateTime<Utc>>,
    ) -> Mentorship {
        Mentorship {
            id: None,
            title: "UX Coaching".to_string(),
            slug: "ux-coaching".to_string(),
            session_type: Some(SessionType::OneOnOne),
            target_audience: String::new(),
            description: String::new(),
            what_to_expect: vec![],
            preparation_required: None,
            duration: "60 min".to_string(),
            price,
            offer_price,
            offer_end_date,
            currency: Some("USD".to_string()),
            booking_link: String::new(),
            testimonials: vec![],
            is_active: true,
            is_featured: false,
            created_at: None,
        }
    }

    #[test]
    fn test_offer_inactive_when_end_date_passed() {
        let now = Utc.with_ymd_and_hms(2026, 6, 1, 12, 0, 0).unwrap();
        let yesterday = now - Duration::days(1);
        let session = session_with_offer(100.0, Some(70.0), Some(yesterday));

        assert!(!session.has_active_offer(now));
        assert_eq!(session.current_price(now), 100.0);
    }

    #[test]
    fn test_offer_inactive_without_offer_price() {
        let now = Utc.with_ymd_and_hms(2026, 6, 1, 12, 0, 0).unwrap();
        let tomorrow = now + Duration::days(1);
        let session = session_with_offer(100.0, None, Some(tomorrow));

        assert!(!session.has_active_offer(now));
        assert_eq!(session.current_price(now), 100.0);
    }

    #[test]
    fn test_offer_inactive_without_end_date() {
        let now = Utc.with_ymd_and_hms(2026, 6, 1, 12, 0, 0).unwrap();
        let session = session_with_offer(100.0, Some(70.0), None);

        assert!(!session.has_active_offer(now));
        assert_eq!(session.current_price(now), 100.0);
    }

    #[test]
    fn test_offer_active_with_price_and_future_end_date() {
        let now = Utc.with_ymd_and_hms(2026, 6, 1, 12, 0, 0).unwrap();
        let tomorrow = now + Duration::days(1);
        let session = session_with_offer(100.0, Some(70.0), Some(tomorrow));

        assert!(session.has_active_offer(now));
        assert_eq!(session.current_price(now), 70.0);
    }

    // =====================================================
    // Session type wire format
    // =====================================================

    #[test]
    fn test_session_type_uses_hyphenated_wire_names() {
        let parsed: SessionType = serde_json::from_value(serde_json::json!("one-on-one")).unwrap();
        assert_eq!(parsed, SessionType::OneOnOne);

        let json = serde_json::to_value(SessionType::Workshop).unwrap();
        assert_eq!(json, serde_json::json!("workshop"));
    }
}
