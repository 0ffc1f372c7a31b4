//! CLI command implementations
//!
//! Every command returns its process exit code:
//! 0 success, 1 aborted or failed, 2 configuration or input error,
//! 130 interrupted.

pub mod harvest;
pub mod init;
pub mod status;
pub mod validate;
