//! The provider registry and its aggregate evaluation.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::ProviderFault;
use crate::ports::inbound::PermissioningService;
use crate::ports::outbound::{
    ConnectionPermissioningProvider, MessagePermissioningProvider,
    TransactionPermissioningProvider,
};
use shared_types::Transaction;

/// Central registry for permissioning providers.
///
/// Owns three append-only, order-preserving provider sequences, one per
/// capability kind. Created empty at node startup; plugins fill it through
/// the [`PermissioningService`] port; afterwards it serves read-only
/// evaluation (shareable behind an `Arc`) until process teardown.
///
/// Duplicates are accepted: registering the same provider twice yields two
/// evaluations. There is no unregister operation.
pub struct PermissioningRegistry {
    /// Connection providers in registration order.
    connection_providers: Vec<Arc<dyn ConnectionPermissioningProvider>>,
    /// Message providers in registration order.
    message_providers: Vec<Arc<dyn MessagePermissioningProvider>>,
    /// Transaction providers in registration order.
    transaction_providers: Vec<Arc<dyn TransactionPermissioningProvider>>,
}

impl PermissioningRegistry {
    /// Creates a registry with no providers registered.
    pub fn new() -> Self {
        Self {
            connection_providers: Vec::new(),
            message_providers: Vec::new(),
            transaction_providers: Vec::new(),
        }
    }

    /// The registered connection providers, in registration order.
    ///
    /// The connection layer aggregates these itself: it iterates the
    /// sequence per connection attempt with the peer context it holds.
    pub fn connection_providers(&self) -> &[Arc<dyn ConnectionPermissioningProvider>] {
        &self.connection_providers
    }

    /// The registered message providers, in registration order.
    ///
    /// Aggregated by the message layer, same as connection providers.
    pub fn message_providers(&self) -> &[Arc<dyn MessagePermissioningProvider>] {
        &self.message_providers
    }

    /// Evaluates all registered transaction providers against `transaction`.
    ///
    /// Providers are consulted in registration order and every one of them
    /// is a hard veto: the first `Ok(false)` short-circuits the fold and the
    /// remaining providers are not invoked. With no providers registered the
    /// aggregation is vacuously true.
    ///
    /// # Errors
    /// The first [`ProviderFault`] raised by a provider, forwarded unchanged.
    /// Providers already consulted are not reconsidered and no partial
    /// verdict is retained.
    pub fn is_transaction_permitted(
        &self,
        transaction: &Transaction,
    ) -> Result<bool, ProviderFault> {
        let hash = transaction.hash();
        for (position, provider) in self.transaction_providers.iter().enumerate() {
            if !provider.is_transaction_permitted(transaction)? {
                debug!(
                    "[Permissioning] Transaction {} not permitted by provider at position {}",
                    hex::encode(hash),
                    position
                );
                return Ok(false);
            }
        }
        debug!("[Permissioning] Transaction {} permitted", hex::encode(hash));
        Ok(true)
    }
}

impl PermissioningService for PermissioningRegistry {
    fn register_connection_provider(&mut self, provider: Arc<dyn ConnectionPermissioningProvider>) {
        self.connection_providers.push(provider);
    }

    fn register_message_provider(&mut self, provider: Arc<dyn MessagePermissioningProvider>) {
        self.message_providers.push(provider);
    }

    fn register_transaction_provider(
        &mut self,
        provider: Arc<dyn TransactionPermissioningProvider>,
    ) {
        self.transaction_providers.push(provider);
        // Source behavior: only this kind logs its registration.
        info!("[Permissioning] Registered new transaction permissioning provider");
    }
}

impl Default for PermissioningRegistry {
    fn default() -> Self {
        Self::new()
    }
}
