//! Cluster extraction from OPTICS reachability profiles.
//!
//! `ravine` takes the 1D reachability profile produced by a density-based
//! ordering pass (OPTICS) and extracts flat clusters from its valleys using
//! the gradient clustering method of Brecheisen et al. (2004).
//!
//! The primary public API is under [`extract`], which provides:
//! - [`GradientExtractor`]: boundary tracking plus the full pipeline
//! - [`filter_large_clusters`] / [`merge_similar_clusters`]: the
//!   post-processing stages, usable on their own
//!
//! Input types (the ordering collaborator's output contract) live in
//! [`profile`], the cluster value type in [`cluster`]. The ordering pass
//! itself, distance computation, and visualization are out of scope: this
//! crate operates purely on a 1D sequence of reachability values and integer
//! indices into it.

#![forbid(unsafe_code)]

pub mod cluster;
pub mod error;
pub mod extract;
pub mod profile;

pub use cluster::{Cluster, ClusterIter};
pub use error::{Error, Result};
pub use extract::{
    filter_large_clusters, merge_similar_clusters, ClusterExtraction, GradientExtractor,
};
pub use profile::{
    cluster_summary, reachability_profile, resolve_profile, ClusterSummary, OrderedPoint,
    Reachability, DEFAULT_UNDEFINED_SURROGATE,
};
