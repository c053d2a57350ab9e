mod content_source;

pub use content_source::{ContentSource, ContentSourceError};
