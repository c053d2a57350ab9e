mod content_service;

pub use content_service::{ContentError, ContentService};
