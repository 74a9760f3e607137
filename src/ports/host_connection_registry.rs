use crate::domain::HostConnection;

/// Port for the globally configured host connections.
pub trait HostConnectionRegistry {
    /// Configured connections in registry order.
    fn list(&self) -> Vec<HostConnection>;
}
