//! Centralized Testing Utilities
//!
//! Deterministic provider doubles and fixtures used by the in-crate unit
//! tests and, via the `test-utils` feature, by the workspace test suite.

use std::sync::{Arc, Mutex};

use crate::domain::ProviderFault;
use crate::ports::outbound::{
    ConnectionPermissioningProvider, MessagePermissioningProvider,
    TransactionPermissioningProvider,
};
use shared_types::{MessageCode, NodeId, PeerEndpoint, Transaction, U256};

/// Shared log of provider invocations, in call order.
///
/// Clones share the underlying log, so one recorder can be handed to several
/// [`RecordingTransactionProvider`]s to observe their relative ordering.
#[derive(Debug, Clone, Default)]
pub struct CallRecorder {
    calls: Arc<Mutex<Vec<&'static str>>>,
}

impl CallRecorder {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a call label.
    pub fn record(&self, label: &'static str) {
        self.calls.lock().unwrap().push(label);
    }

    /// The labels recorded so far, in call order.
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    /// Discards all recorded labels.
    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }
}

/// Transaction provider returning a fixed verdict.
#[derive(Debug, Clone, Copy)]
pub struct FixedTransactionProvider {
    verdict: bool,
}

impl FixedTransactionProvider {
    /// Creates a provider that always answers `verdict`.
    pub fn new(verdict: bool) -> Self {
        Self { verdict }
    }
}

impl TransactionPermissioningProvider for FixedTransactionProvider {
    fn is_transaction_permitted(&self, _transaction: &Transaction) -> Result<bool, ProviderFault> {
        Ok(self.verdict)
    }
}

/// Transaction provider that records its invocation before answering.
#[derive(Debug, Clone)]
pub struct RecordingTransactionProvider {
    label: &'static str,
    verdict: bool,
    recorder: CallRecorder,
}

impl RecordingTransactionProvider {
    /// Creates a provider labelled `label` that answers `verdict` and logs
    /// each invocation to `recorder`.
    pub fn new(label: &'static str, verdict: bool, recorder: &CallRecorder) -> Self {
        Self {
            label,
            verdict,
            recorder: recorder.clone(),
        }
    }
}

impl TransactionPermissioningProvider for RecordingTransactionProvider {
    fn is_transaction_permitted(&self, _transaction: &Transaction) -> Result<bool, ProviderFault> {
        self.recorder.record(self.label);
        Ok(self.verdict)
    }
}

/// Transaction provider that faults on every invocation.
#[derive(Debug, Clone)]
pub struct FaultingTransactionProvider {
    reason: String,
}

impl FaultingTransactionProvider {
    /// Creates a provider that raises a fault with the given reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl TransactionPermissioningProvider for FaultingTransactionProvider {
    fn is_transaction_permitted(&self, _transaction: &Transaction) -> Result<bool, ProviderFault> {
        Err(ProviderFault::new(self.reason.clone()))
    }
}

/// Connection provider returning a fixed verdict.
#[derive(Debug, Clone, Copy)]
pub struct FixedConnectionProvider {
    verdict: bool,
}

impl FixedConnectionProvider {
    /// Creates a provider that always answers `verdict`.
    pub fn new(verdict: bool) -> Self {
        Self { verdict }
    }
}

impl ConnectionPermissioningProvider for FixedConnectionProvider {
    fn is_connection_permitted(
        &self,
        _source: &PeerEndpoint,
        _destination: &PeerEndpoint,
    ) -> Result<bool, ProviderFault> {
        Ok(self.verdict)
    }
}

/// Message provider that permits every code below a cutoff.
#[derive(Debug, Clone, Copy)]
pub struct CodeCutoffMessageProvider {
    cutoff: MessageCode,
}

impl CodeCutoffMessageProvider {
    /// Creates a provider permitting codes strictly below `cutoff`.
    pub fn new(cutoff: MessageCode) -> Self {
        Self { cutoff }
    }
}

impl MessagePermissioningProvider for CodeCutoffMessageProvider {
    fn is_message_permitted(
        &self,
        _destination: &PeerEndpoint,
        code: MessageCode,
    ) -> Result<bool, ProviderFault> {
        Ok(code < self.cutoff)
    }
}

/// A well-formed transaction with the given nonce; all other fields fixed.
pub fn sample_transaction(nonce: u64) -> Transaction {
    Transaction {
        from: [0xAA; 20],
        to: Some([0xBB; 20]),
        value: U256::from(1_000u64),
        nonce,
        gas_price: U256::from(50u64),
        gas_limit: 21_000,
        payload: vec![],
        signature: [0u8; 64],
    }
}

/// A (source, destination) peer pair on distinct node IDs.
pub fn sample_peer_pair() -> (PeerEndpoint, PeerEndpoint) {
    (
        PeerEndpoint::new(NodeId([0x01; 32]), "10.0.0.1:30303"),
        PeerEndpoint::new(NodeId([0x02; 32]), "10.0.0.2:30303"),
    )
}
