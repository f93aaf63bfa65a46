//! Domain layer for the Permissioning subsystem.

pub mod errors;
pub mod registry;

pub use errors::ProviderFault;
pub use registry::PermissioningRegistry;
