//! Cross-crate integration tests.

pub mod permissioning;
