//! # Inbound Port - PermissioningService
//!
//! Primary driving port: the registration API handed to the plugin loader.
//!
//! Plugins see only this trait, not the concrete registry, so they can
//! register providers but cannot reorder, remove, or inspect what other
//! plugins registered. The node keeps the concrete
//! [`PermissioningRegistry`](crate::PermissioningRegistry) for the accessor
//! and evaluation side of the contract.

use std::sync::Arc;

use crate::ports::outbound::{
    ConnectionPermissioningProvider, MessagePermissioningProvider,
    TransactionPermissioningProvider,
};

/// Registration API for permissioning providers.
///
/// Registration is append-only and order-preserving: providers are evaluated
/// in the order they were registered, and registering the same provider
/// twice means it is consulted twice. All registration happens single
/// threaded during node startup, before evaluation traffic begins; the
/// `&mut self` receivers enforce that no registration can race an
/// evaluation on a shared registry.
pub trait PermissioningService: Send {
    /// Appends a connection permissioning provider.
    fn register_connection_provider(&mut self, provider: Arc<dyn ConnectionPermissioningProvider>);

    /// Appends a message permissioning provider.
    fn register_message_provider(&mut self, provider: Arc<dyn MessagePermissioningProvider>);

    /// Appends a transaction permissioning provider.
    fn register_transaction_provider(
        &mut self,
        provider: Arc<dyn TransactionPermissioningProvider>,
    );
}
