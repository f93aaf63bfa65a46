//! # Core Domain Entities
//!
//! Defines the entities that cross subsystem boundaries.
//!
//! ## Clusters
//!
//! - **Chain**: [`Transaction`] and its identity types
//! - **Networking**: [`NodeId`], [`PeerEndpoint`], [`MessageCode`]

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, Bytes};

// Re-export U256 from primitive-types for use across all subsystems
pub use primitive_types::U256;

// =============================================================================
// CLUSTER A: THE CHAIN
// =============================================================================

/// A 32-byte hash (SHA-256).
pub type Hash = [u8; 32];

/// A 64-byte signature.
pub type Signature = [u8; 64];

/// A 20-byte account address.
pub type Address = [u8; 20];

/// A transaction as submitted to the node for inclusion.
///
/// The [`hash`](Transaction::hash) is the stable identifier used in
/// diagnostics and indexes; it covers every field that determines the
/// transaction's effect, and excludes the signature so that the identity
/// survives re-signing.
#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Sender address.
    pub from: Address,
    /// Recipient address (`None` for contract creation).
    pub to: Option<Address>,
    /// Transferred value in base units.
    pub value: U256,
    /// Sender's nonce, prevents replay.
    pub nonce: u64,
    /// Gas price in base units.
    pub gas_price: U256,
    /// Gas limit for execution.
    pub gas_limit: u64,
    /// Call data or contract init code.
    pub payload: Vec<u8>,
    /// Sender's signature over the transaction.
    #[serde_as(as = "Bytes")]
    pub signature: Signature,
}

impl Transaction {
    /// Computes the transaction hash (SHA-256 over all effect-determining
    /// fields, signature excluded).
    pub fn hash(&self) -> Hash {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(self.from);
        if let Some(to) = &self.to {
            hasher.update(to);
        }
        let mut value_bytes = [0u8; 32];
        self.value.to_big_endian(&mut value_bytes);
        hasher.update(value_bytes);
        hasher.update(self.nonce.to_le_bytes());
        let mut gas_price_bytes = [0u8; 32];
        self.gas_price.to_big_endian(&mut gas_price_bytes);
        hasher.update(gas_price_bytes);
        hasher.update(self.gas_limit.to_le_bytes());
        hasher.update(&self.payload);
        hasher.finalize().into()
    }
}

// =============================================================================
// CLUSTER B: NETWORKING
// =============================================================================

/// Unique identifier for a node in the network (its public identity key).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct NodeId(pub [u8; 32]);

/// A protocol message code, relative to the capability the message belongs
/// to (e.g. `0x02` for a transactions broadcast within the wire protocol).
pub type MessageCode = u64;

/// Network identity of a peer as advertised for connections.
///
/// Equivalent to an enode-style URL: who the peer is plus where it listens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeerEndpoint {
    /// The peer's node ID.
    pub node_id: NodeId,
    /// Listening address (`ip:port`).
    pub address: String,
}

impl PeerEndpoint {
    /// Creates an endpoint from its parts.
    pub fn new(node_id: NodeId, address: impl Into<String>) -> Self {
        Self {
            node_id,
            address: address.into(),
        }
    }
}
