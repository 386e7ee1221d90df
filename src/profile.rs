//! Reachability profile input types.
//!
//! An OPTICS run produces an *ordered* point list; reading off each point's
//! reachability distance in that order gives a 1D profile whose valleys are
//! clusters. Points with no predecessor within the neighborhood radius have no
//! defined reachability — conceptually an infinite distance. This module keeps
//! that distinction explicit as a sum type and converts to a large finite
//! surrogate only at the numeric boundary, so the sentinel never leaks into
//! arithmetic by accident.

use crate::cluster::Cluster;

/// Default finite surrogate for [`Reachability::Undefined`]: `2^31 - 1`.
///
/// Raise this (via [`GradientExtractor::with_undefined_surrogate`]) if your
/// finite reachability distances approach `10^8` or more.
///
/// [`GradientExtractor::with_undefined_surrogate`]: crate::extract::GradientExtractor::with_undefined_surrogate
pub const DEFAULT_UNDEFINED_SURROGATE: f64 = i32::MAX as f64;

/// A single reachability distance: either a finite value or undefined.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Reachability {
    /// Finite, non-negative reachability distance.
    Finite(f64),
    /// No defined reachability (no predecessor within the radius).
    Undefined,
}

impl Reachability {
    /// The numeric value of this reachability, with `Undefined` mapped to
    /// `surrogate`.
    #[inline]
    pub fn resolve(self, surrogate: f64) -> f64 {
        match self {
            Reachability::Finite(v) => v,
            Reachability::Undefined => surrogate,
        }
    }

    /// Whether this reachability is undefined.
    #[inline]
    pub fn is_undefined(self) -> bool {
        matches!(self, Reachability::Undefined)
    }
}

impl From<f64> for Reachability {
    fn from(v: f64) -> Self {
        Reachability::Finite(v)
    }
}

/// Rewrite every undefined reachability to a finite surrogate.
///
/// This is the one-time sentinel rewrite the tracker requires before any
/// differences or comparisons are taken. It is a pure function of its input,
/// so applying it repeatedly is safe (if pointless).
pub fn resolve_profile(profile: &[Reachability], surrogate: f64) -> Vec<f64> {
    profile.iter().map(|r| r.resolve(surrogate)).collect()
}

/// One record of the ordering collaborator's output.
///
/// This mirrors the per-point output of an OPTICS ordering pass. The core
/// consumes only the `reachability` column; `coordinates` exist for
/// downstream reporting (see [`cluster_summary`]) and visualization layers.
#[derive(Clone, Debug, PartialEq)]
pub struct OrderedPoint {
    /// Whether the ordering pass processed this point (always true on a
    /// completed run).
    pub processed: bool,
    /// Reachability distance from the point's predecessor in the ordering.
    pub reachability: Reachability,
    /// Core distance (undefined for noise at the given radius/min-points).
    pub core_distance: Reachability,
    /// Original coordinates of the point, untouched by the core.
    pub coordinates: Vec<f64>,
}

/// Extract the 1D reachability profile from an ordered point list.
pub fn reachability_profile(points: &[OrderedPoint]) -> Vec<Reachability> {
    points.iter().map(|p| p.reachability).collect()
}

/// Per-cluster summary statistics over the members' original coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct ClusterSummary {
    /// Number of member points.
    pub size: usize,
    /// Per-dimension mean of member coordinates.
    pub centroid: Vec<f64>,
    /// Per-dimension population standard deviation of member coordinates.
    pub stddev: Vec<f64>,
}

/// Summarize a cluster's members in coordinate space.
///
/// Returns `None` if the cluster is empty or any member index falls outside
/// `points`. Dimensionality is taken from the first member.
pub fn cluster_summary(cluster: &Cluster, points: &[OrderedPoint]) -> Option<ClusterSummary> {
    let first = cluster.iter().next()?;
    let dim = points.get(first)?.coordinates.len();

    let mut sum = vec![0.0f64; dim];
    let mut sum_sq = vec![0.0f64; dim];
    let mut size = 0usize;

    for idx in cluster.iter() {
        let coords = &points.get(idx)?.coordinates;
        if coords.len() != dim {
            return None;
        }
        for (d, &c) in coords.iter().enumerate() {
            sum[d] += c;
            sum_sq[d] += c * c;
        }
        size += 1;
    }

    let n = size as f64;
    let centroid: Vec<f64> = sum.iter().map(|s| s / n).collect();
    let stddev: Vec<f64> = sum_sq
        .iter()
        .zip(&centroid)
        .map(|(sq, m)| (sq / n - m * m).max(0.0).sqrt())
        .collect();

    Some(ClusterSummary {
        size,
        centroid,
        stddev,
    })
}
