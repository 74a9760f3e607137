mod build_log;
mod credential_store;
mod host_connection_registry;
mod test_runner;

pub use build_log::BuildLog;
pub use credential_store::CredentialStore;
pub use host_connection_registry::HostConnectionRegistry;
pub use test_runner::TestRunner;
