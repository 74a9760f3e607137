pub mod command_test_runner;
pub mod console_build_log;
pub mod memory_credential_store;
pub mod memory_host_registry;
