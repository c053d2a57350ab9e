mod admin_http;
mod demo_store;

pub use admin_http::HttpAdminGateway;
pub use demo_store::{DemoStore, DemoStoreError};
