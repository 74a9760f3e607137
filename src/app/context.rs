use crate::ports::{CredentialStore, HostConnectionRegistry, TestRunner};

/// Application context holding the host-provided collaborators of a step.
pub struct StepContext<C: CredentialStore, H: HostConnectionRegistry, R: TestRunner> {
    credentials: C,
    hosts: H,
    runner: R,
}

impl<C: CredentialStore, H: HostConnectionRegistry, R: TestRunner> StepContext<C, H, R> {
    /// Create a new step context.
    pub fn new(credentials: C, hosts: H, runner: R) -> Self {
        Self { credentials, hosts, runner }
    }

    /// Get a reference to the credential store.
    pub fn credentials(&self) -> &C {
        &self.credentials
    }

    /// Get a reference to the host connection registry.
    pub fn hosts(&self) -> &H {
        &self.hosts
    }

    /// Get a reference to the test runner.
    pub fn runner(&self) -> &R {
        &self.runner
    }
}
