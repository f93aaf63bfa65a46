//! # Shared Types Crate
//!
//! Domain entities shared across node subsystems.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: Types that cross a subsystem boundary are
//!   defined here, never duplicated in the subsystem crates.
//! - **Plain data**: Entities carry no behavior beyond derivation of their
//!   own identity (e.g. [`Transaction::hash`]); policy lives in the
//!   subsystems that consume them.

pub mod entities;

pub use entities::*;
