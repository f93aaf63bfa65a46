//! Outbound (Driven) ports for the Permissioning subsystem.
//!
//! These traits are the three capability contracts a plugin can implement.
//! They are deliberately three distinct traits rather than one generic
//! provider abstraction: the decision inputs differ per kind (peer pair,
//! peer plus message code, transaction), and a shared supertype would only
//! weaken type safety.
//!
//! All decision functions return `Result<bool, ProviderFault>`:
//! `Ok(true)`/`Ok(false)` is the provider's verdict, `Err` is a fault in the
//! provider itself. The registry forwards faults to the caller unchanged; it
//! never retries, swallows, or translates them.
//!
//! # Thread Safety
//!
//! Providers are registered once and then invoked from whatever thread is
//! evaluating, so implementations must be `Send + Sync`. They are expected
//! to be stateless or internally synchronized, and pure with respect to
//! their inputs: repeated evaluation of the same input must yield the same
//! verdict.

use crate::domain::ProviderFault;
use shared_types::{MessageCode, PeerEndpoint, Transaction};

/// Decides whether a connection between two peers is permitted.
///
/// Invoked by the connection layer for both inbound and outbound
/// connections; `source` is the dialing side, `destination` the listening
/// side.
pub trait ConnectionPermissioningProvider: Send + Sync {
    /// Returns the provider's verdict on the connection.
    ///
    /// # Errors
    /// A fault in the provider itself (e.g. a policy backend became
    /// unreachable). The connection is then not decided at all.
    fn is_connection_permitted(
        &self,
        source: &PeerEndpoint,
        destination: &PeerEndpoint,
    ) -> Result<bool, ProviderFault>;
}

/// Decides whether a specific protocol message may be exchanged with a peer.
pub trait MessagePermissioningProvider: Send + Sync {
    /// Returns the provider's verdict on sending a message with the given
    /// code to `destination`.
    ///
    /// # Errors
    /// A fault in the provider itself; the message is then not decided.
    fn is_message_permitted(
        &self,
        destination: &PeerEndpoint,
        code: MessageCode,
    ) -> Result<bool, ProviderFault>;
}

/// Decides whether a transaction is permitted into the node.
///
/// Unlike the other two kinds, transaction providers are aggregated
/// internally by
/// [`PermissioningRegistry::is_transaction_permitted`](crate::PermissioningRegistry::is_transaction_permitted)
/// rather than exposed as a raw sequence.
pub trait TransactionPermissioningProvider: Send + Sync {
    /// Returns the provider's verdict on the transaction.
    ///
    /// # Errors
    /// A fault in the provider itself; it propagates unchanged through the
    /// aggregate evaluation and no verdict is produced.
    fn is_transaction_permitted(&self, transaction: &Transaction) -> Result<bool, ProviderFault>;
}
