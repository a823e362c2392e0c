//! Shared types for the authentication layer

pub mod log_level;

pub use log_level::*;
