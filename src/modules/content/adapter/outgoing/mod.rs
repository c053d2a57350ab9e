mod content_http;
mod sample_content_source;

pub use content_http::HttpContentSource;
pub use sample_content_source::{
    sample_case_studies, sample_mentorship_sessions, sample_testimonials, SampleContentSource,
};
