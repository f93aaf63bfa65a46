//! Permissioning error types.

use thiserror::Error;

/// Fault raised by a provider's decision function.
///
/// This is a failure of the provider itself, not a "deny" verdict. The
/// registry forwards it to the evaluation caller as-is; the affected
/// connection, message, or transaction is then simply not decided rather
/// than defaulted to permitted or denied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("permissioning provider fault: {reason}")]
pub struct ProviderFault {
    /// Description supplied by the faulting provider.
    pub reason: String,
}

impl ProviderFault {
    /// Creates a fault with the given description.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}
