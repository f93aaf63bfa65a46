//! # Permissioning Subsystem
//!
//! Aggregates externally supplied permissioning providers into allow/deny
//! decisions for peer connections, protocol messages, and transactions.
//!
//! ## Purpose
//!
//! The node itself ships no permissioning policy. Plugins register providers
//! for up to three capability kinds; this subsystem owns the registration
//! order and folds the providers' independent verdicts into one decision.
//! Every registered provider is a hard veto: the aggregate is a logical AND
//! with short-circuit on the first rejection.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | INVARIANT-1 | Providers are never removed or reordered after registration | `domain/registry.rs` - append-only `Vec`s, no removal API |
//! | INVARIANT-2 | Evaluation never mutates the registry | `domain/registry.rs` - `is_transaction_permitted(&self)` |
//! | INVARIANT-3 | Evaluation order equals registration order | `domain/registry.rs` - in-order iteration |
//! | INVARIANT-4 | Zero providers means permitted (vacuous truth) | `domain/registry.rs` - loop falls through to `Ok(true)` |
//!
//! ## Module Structure (Hexagonal Architecture)
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │  ports/inbound.rs  - PermissioningService (plugin-facing API)  │
//! │  ports/outbound.rs - the three provider capability traits      │
//! └────────────────────────────────────────────────────────────────┘
//!                          ↑ uses ↑
//! ┌────────────────────────────────────────────────────────────────┐
//! │  domain/registry.rs - PermissioningRegistry                    │
//! │  domain/errors.rs   - ProviderFault                            │
//! └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Lifecycle
//!
//! Registration is `&mut self` and happens single-threaded during node
//! startup; afterwards the registry is shared (e.g. in an `Arc`) and serves
//! concurrent read-only evaluation for the life of the process. There is no
//! unregister operation and no teardown protocol.
//!
//! ## Known Asymmetries (source behavior, preserved deliberately)
//!
//! - Only transaction provider registration emits an informational log line.
//! - Only transaction providers get a built-in aggregate evaluation
//!   ([`PermissioningRegistry::is_transaction_permitted`]); connection and
//!   message providers are exposed as raw ordered sequences for the
//!   connection/message layers to run their own aggregation loop with
//!   context this subsystem does not model.

pub mod domain;
pub mod ports;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use domain::{PermissioningRegistry, ProviderFault};
pub use ports::inbound::PermissioningService;
pub use ports::outbound::{
    ConnectionPermissioningProvider, MessagePermissioningProvider,
    TransactionPermissioningProvider,
};
