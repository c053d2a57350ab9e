pub mod adapter;
pub mod application;

pub use application::domain::entities;
pub use application::ports::outgoing::{ContentSource, ContentSourceError};
pub use application::service::{ContentError, ContentService};
