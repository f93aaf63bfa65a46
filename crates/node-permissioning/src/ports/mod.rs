//! Ports layer for the Permissioning subsystem.
//!
//! - Inbound (Driving) port: registration API exposed to the plugin loader
//! - Outbound (Driven) ports: provider capability traits the plugins implement

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
