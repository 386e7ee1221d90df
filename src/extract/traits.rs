use crate::cluster::Cluster;
use crate::error::Result;
use crate::profile::Reachability;

/// Common interface for turning a reachability profile into flat clusters.
pub trait ClusterExtraction {
    /// Run the full extraction pipeline on a reachability profile.
    ///
    /// Implementations return a complete cluster list or an error — never a
    /// partial result.
    fn extract(&self, profile: &[Reachability]) -> Result<Vec<Cluster>>;
}
