//! Cluster extraction from reachability profiles.
//!
//! An OPTICS ordering pass linearizes a point set so that cluster structure
//! shows up as valleys in the 1D reachability profile. This module turns such
//! a profile into discrete clusters of point indices in three stages:
//!
//! 1. **Boundary tracking** ([`GradientExtractor::track`]): a single forward
//!    pass detects valley boundaries from per-point curvature signals
//!    ([`geometry`]) and emits candidate clusters as index ranges.
//! 2. **Size filtering** ([`filter_large_clusters`]): candidates covering too
//!    large a fraction of the input are dropped.
//! 3. **Similarity merging** ([`merge_similar_clusters`]): candidates sharing
//!    most of their members are merged until the cluster count stabilizes.
//!
//! [`ClusterExtraction::extract`] runs all three.
//!
//! ## Usage
//!
//! ```rust
//! use ravine::{ClusterExtraction, GradientExtractor, Reachability};
//!
//! // Two flat valleys separated by a ridge.
//! let profile: Vec<Reachability> = [
//!     5.0, 5.0, 1.0, 1.0, 1.0, 5.0, 5.0, 2.0, 2.0, 2.0, 5.0, 5.0,
//! ]
//! .into_iter()
//! .map(Reachability::Finite)
//! .collect();
//!
//! let extractor = GradientExtractor::new(2);
//! let clusters = extractor.extract(&profile).unwrap();
//!
//! assert!(!clusters.is_empty());
//! for cluster in &clusters {
//!     assert!(cluster.len() >= 2);
//! }
//! ```

pub mod geometry;
mod gradient;
mod postprocess;
mod traits;

pub use gradient::GradientExtractor;
pub use postprocess::{filter_large_clusters, merge_similar_clusters};
pub use traits::ClusterExtraction;
