// Library surface for the binary and integration tests.
pub mod app_dirs;
pub mod config;
pub mod error;
pub mod log_streams;
pub mod logging;
pub mod practice;
