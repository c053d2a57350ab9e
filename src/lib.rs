pub mod config;
pub mod modules;
pub mod shared;

pub use modules::content;
pub use modules::dashboard;
pub use modules::session;
