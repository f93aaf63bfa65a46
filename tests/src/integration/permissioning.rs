//! # Permissioning Integration Flows
//!
//! Exercises the permissioning registry the way its real collaborators do:
//!
//! 1. **Plugin loader → registry**: registration through the
//!    `PermissioningService` trait object, not the concrete type
//! 2. **Connection/message layers → registry**: external aggregation loops
//!    over the raw provider sequences
//! 3. **Transaction pipeline → registry**: the built-in aggregate verdict,
//!    concurrently from several threads

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use node_permissioning::test_utils::{
        sample_peer_pair, sample_transaction, CallRecorder, CodeCutoffMessageProvider,
        FixedConnectionProvider, FixedTransactionProvider, RecordingTransactionProvider,
    };
    use node_permissioning::{
        ConnectionPermissioningProvider, PermissioningRegistry, PermissioningService,
        ProviderFault,
    };
    use shared_types::PeerEndpoint;

    use crate::init_tracing;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    /// Stand-in for the plugin loader: registers one provider of each kind
    /// through the driving port, without access to the concrete registry.
    fn load_plugins(service: &mut dyn PermissioningService, recorder: &CallRecorder) {
        service.register_connection_provider(Arc::new(FixedConnectionProvider::new(true)));
        service.register_message_provider(Arc::new(CodeCutoffMessageProvider::new(0x10)));
        service.register_transaction_provider(Arc::new(RecordingTransactionProvider::new(
            "plugin_tx_policy",
            true,
            recorder,
        )));
    }

    /// The connection layer's own aggregation loop: every provider is a
    /// hard veto, same fold the registry applies to transactions.
    fn connection_layer_permits(
        registry: &PermissioningRegistry,
        source: &PeerEndpoint,
        destination: &PeerEndpoint,
    ) -> Result<bool, ProviderFault> {
        for provider in registry.connection_providers() {
            if !provider.is_connection_permitted(source, destination)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    // =============================================================================
    // FLOWS
    // =============================================================================

    #[test]
    fn test_plugin_loader_registers_through_service_trait() {
        init_tracing();

        let mut registry = PermissioningRegistry::new();
        let recorder = CallRecorder::new();
        load_plugins(&mut registry, &recorder);

        assert_eq!(registry.connection_providers().len(), 1);
        assert_eq!(registry.message_providers().len(), 1);
        assert_eq!(
            registry.is_transaction_permitted(&sample_transaction(1)),
            Ok(true)
        );
        assert_eq!(recorder.calls(), vec!["plugin_tx_policy"]);
    }

    #[test]
    fn test_connection_layer_aggregation_over_raw_sequence() {
        let (source, destination) = sample_peer_pair();

        let mut registry = PermissioningRegistry::new();
        registry.register_connection_provider(Arc::new(FixedConnectionProvider::new(true)));
        assert_eq!(
            connection_layer_permits(&registry, &source, &destination),
            Ok(true)
        );

        registry.register_connection_provider(Arc::new(FixedConnectionProvider::new(false)));
        assert_eq!(
            connection_layer_permits(&registry, &source, &destination),
            Ok(false)
        );
    }

    #[test]
    fn test_message_layer_filters_by_code() {
        let (_, destination) = sample_peer_pair();

        let mut registry = PermissioningRegistry::new();
        registry.register_message_provider(Arc::new(CodeCutoffMessageProvider::new(0x10)));

        let provider = &registry.message_providers()[0];
        assert_eq!(provider.is_message_permitted(&destination, 0x02), Ok(true));
        assert_eq!(provider.is_message_permitted(&destination, 0x10), Ok(false));
    }

    #[test]
    fn test_verdict_is_identical_with_subscriber_installed() {
        let mut silent = PermissioningRegistry::new();
        silent.register_transaction_provider(Arc::new(FixedTransactionProvider::new(false)));
        let before = silent.is_transaction_permitted(&sample_transaction(2));

        init_tracing();

        let mut logged = PermissioningRegistry::new();
        logged.register_transaction_provider(Arc::new(FixedTransactionProvider::new(false)));
        let after = logged.is_transaction_permitted(&sample_transaction(2));

        assert_eq!(before, after);
        assert_eq!(after, Ok(false));
    }

    #[test]
    fn test_concurrent_evaluation_on_shared_registry() {
        let mut registry = PermissioningRegistry::new();
        registry.register_transaction_provider(Arc::new(FixedTransactionProvider::new(true)));
        registry.register_transaction_provider(Arc::new(FixedTransactionProvider::new(false)));

        // Registration is complete; from here on the registry is shared
        // read-only.
        let registry = Arc::new(registry);

        let handles: Vec<_> = (0..8u64)
            .map(|nonce| {
                let registry = Arc::clone(&registry);
                thread::spawn(move || registry.is_transaction_permitted(&sample_transaction(nonce)))
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), Ok(false));
        }
    }

    #[test]
    fn test_verdicts_deterministic_over_arbitrary_transactions() {
        use rand::Rng;

        let mut registry = PermissioningRegistry::new();
        // Permit only even nonces, as a policy that actually inspects input.
        struct EvenNonceProvider;
        impl node_permissioning::TransactionPermissioningProvider for EvenNonceProvider {
            fn is_transaction_permitted(
                &self,
                transaction: &shared_types::Transaction,
            ) -> Result<bool, ProviderFault> {
                Ok(transaction.nonce % 2 == 0)
            }
        }
        registry.register_transaction_provider(Arc::new(EvenNonceProvider));

        let mut rng = rand::thread_rng();
        for _ in 0..64 {
            let tx = sample_transaction(rng.gen());
            let first = registry.is_transaction_permitted(&tx);
            let second = registry.is_transaction_permitted(&tx);
            assert_eq!(first, second);
            assert_eq!(first, Ok(tx.nonce % 2 == 0));
        }
    }
}
