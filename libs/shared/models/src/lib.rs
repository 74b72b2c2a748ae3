pub mod auth;
pub mod error;
pub mod response;
pub mod serde_hhmm;
