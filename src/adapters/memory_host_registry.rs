use crate::domain::HostConnection;
use crate::ports::HostConnectionRegistry;

/// Host connection registry backed by an in-memory list.
#[derive(Debug, Clone, Default)]
pub struct MemoryHostRegistry {
    connections: Vec<HostConnection>,
}

impl MemoryHostRegistry {
    pub fn new(connections: Vec<HostConnection>) -> Self {
        Self { connections }
    }
}

impl HostConnectionRegistry for MemoryHostRegistry {
    fn list(&self) -> Vec<HostConnection> {
        self.connections.clone()
    }
}
