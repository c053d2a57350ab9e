pub mod empty_state;
pub mod http;
pub mod patch;
