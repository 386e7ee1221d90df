//! Gradient clustering: boundary tracking over a reachability profile.
//!
//! Single left-to-right pass over the profile. A stack of open start-points
//! holds the left boundaries of valleys the pass has entered but not yet
//! left; sharp direction changes (inflection index above the angle threshold)
//! trigger stack maintenance and cluster emission, with the sign of the
//! gradient determinant deciding between the two cases:
//!
//! - **positive** (the profile bends downward after the point): the ascent
//!   that led here is over. Flush the current cluster, close every open
//!   start-point that is not deeper than this point, and open a new
//!   start-point if the profile descends again.
//! - **non-positive**: the descent continues, or the point is a true local
//!   minimum. In the latter case remember `i + 1` as the latest endpoint and
//!   tentatively span a cluster from the innermost open start-point to it.
//!
//! After the pass, still-open start-points that sit higher than the profile's
//! final value are drained as clusters reaching the right edge.
//!
//! Source paper: Brecheisen, Kriegel, Kröger, Pfeifle (2004). "Visually
//! Mining through Cluster Hierarchies." SDM 2004, section 3.2.

use super::geometry::{gradient_determinant, inflection_index};
use super::postprocess::{filter_large_clusters, merge_similar_clusters};
use super::traits::ClusterExtraction;
use crate::cluster::Cluster;
use crate::error::{Error, Result};
use crate::profile::{resolve_profile, Reachability, DEFAULT_UNDEFINED_SURROGATE};

/// Gradient clustering extractor.
///
/// Extracts flat clusters from a 1D reachability profile. Candidate clusters
/// come out of the boundary-tracking pass ([`track`](Self::track)); the full
/// pipeline ([`ClusterExtraction::extract`]) additionally drops oversized
/// clusters and merges near-duplicates.
#[derive(Debug, Clone)]
pub struct GradientExtractor {
    /// Minimum cluster size.
    min_pts: usize,
    /// Minimum inflection angle, degrees.
    angle_threshold_degrees: f64,
    /// Horizontal step width between profile points.
    w: f64,
    /// Maximum cluster size as a fraction of the profile length.
    max_cluster_fraction: f64,
    /// Minimum shared-member ratio for two clusters to merge.
    similarity_threshold: f64,
    /// Finite stand-in for undefined reachability values.
    undefined_surrogate: f64,
}

impl GradientExtractor {
    /// Create an extractor with the given minimum cluster size.
    ///
    /// Remaining parameters start at the customary values: angle threshold
    /// 150°, `w = 0.025`, maximum cluster fraction 0.5, similarity threshold
    /// 0.7, undefined surrogate `2^31 - 1`.
    pub fn new(min_pts: usize) -> Self {
        Self {
            min_pts,
            angle_threshold_degrees: 150.0,
            w: 0.025,
            max_cluster_fraction: 0.5,
            similarity_threshold: 0.7,
            undefined_surrogate: DEFAULT_UNDEFINED_SURROGATE,
        }
    }

    /// Set the inflection angle threshold in degrees.
    ///
    /// A point counts as a boundary candidate when the angle formed by its
    /// neighbor vectors is sharper than this. Values in 120–160 work well;
    /// values outside that range degrade detection (smaller angles flag
    /// almost nothing, angles near 180° flag almost everything) but are not
    /// rejected.
    pub fn with_angle_threshold(mut self, degrees: f64) -> Self {
        self.angle_threshold_degrees = degrees;
        self
    }

    /// Set the horizontal step width `w` between profile points.
    ///
    /// Controls sensitivity: smaller `w` makes the curvature signals react to
    /// smaller reachability fluctuations. Must be positive; ≈0.025 works well.
    pub fn with_step_width(mut self, w: f64) -> Self {
        self.w = w;
        self
    }

    /// Set the maximum cluster size as a fraction of the profile length.
    ///
    /// Expected in `(0, 1]`. Values ≥ 1 keep every cluster, values ≤ 0 drop
    /// them all.
    pub fn with_max_cluster_fraction(mut self, fraction: f64) -> Self {
        self.max_cluster_fraction = fraction;
        self
    }

    /// Set the similarity threshold for merging near-duplicate clusters.
    ///
    /// Expected in `(0, 1]`: two clusters merge when they share at least this
    /// fraction of the larger one's members. Values above 1 disable merging;
    /// values ≤ 0 merge everything that overlaps at all (or not — every pair
    /// trivially satisfies a non-positive bound, so disjoint clusters merge
    /// too).
    pub fn with_similarity_threshold(mut self, threshold: f64) -> Self {
        self.similarity_threshold = threshold;
        self
    }

    /// Set the finite surrogate used for undefined reachability values.
    ///
    /// Must comfortably exceed every finite reachability in the profile.
    pub fn with_undefined_surrogate(mut self, surrogate: f64) -> Self {
        self.undefined_surrogate = surrogate;
        self
    }

    fn validate(&self, profile_len: usize) -> Result<()> {
        if self.min_pts == 0 {
            return Err(Error::InvalidParameter {
                name: "min_pts",
                message: "must be at least 1",
            });
        }
        if self.w <= 0.0 || !self.w.is_finite() {
            return Err(Error::InvalidParameter {
                name: "w",
                message: "must be positive and finite",
            });
        }
        if !self.undefined_surrogate.is_finite() {
            return Err(Error::InvalidParameter {
                name: "undefined_surrogate",
                message: "must be finite",
            });
        }
        if profile_len < 3 {
            return Err(Error::ProfileTooShort { len: profile_len });
        }
        Ok(())
    }

    /// Run only the boundary-tracking pass, returning candidate clusters.
    ///
    /// Every returned cluster is a contiguous half-open index range of length
    /// ≥ `min_pts`. The list is unordered and may contain nested or
    /// overlapping candidates; [`ClusterExtraction::extract`] is the full
    /// pipeline that normalizes it.
    pub fn track(&self, profile: &[Reachability]) -> Result<Vec<Cluster>> {
        self.validate(profile.len())?;
        let reach = resolve_profile(profile, self.undefined_surrogate);
        Ok(self.boundary_pass(&reach))
    }

    fn boundary_pass(&self, reach: &[f64]) -> Vec<Cluster> {
        let n = reach.len();
        let t = self.angle_threshold_degrees.to_radians().cos();

        let mut start_pts: Vec<usize> = vec![0];
        let mut clusters: Vec<Cluster> = Vec::new();
        let mut curr_cluster = Cluster::range(0, 0);
        let mut last_endpoint = n - 1;

        for i in 1..n - 1 {
            let cos = inflection_index(reach, i, self.w);
            // Non-finite inflection (degenerate geometry) counts as "below
            // threshold": the point is not a boundary candidate.
            if !cos.is_finite() || cos <= t {
                continue;
            }

            if gradient_determinant(reach, i, self.w) > 0.0 {
                // Ascent ends here: flush the tentative cluster.
                if curr_cluster.len() >= self.min_pts {
                    clusters.push(curr_cluster);
                }
                curr_cluster = Cluster::range(0, 0);

                // A start-point no deeper than this ascent cannot bound a
                // valley ending here; discard the innermost such one.
                if let Some(&top) = start_pts.last() {
                    if reach[top] <= reach[i] {
                        start_pts.pop();
                    }
                }

                if !start_pts.is_empty() {
                    // Close every open start-point shallower than this point.
                    while let Some(&top) = start_pts.last() {
                        if reach[top] >= reach[i] {
                            break;
                        }
                        let temp = Cluster::range(top, last_endpoint);
                        if temp.len() >= self.min_pts {
                            clusters.push(temp);
                        }
                        start_pts.pop();
                    }

                    // The first deeper start-point also spans a candidate,
                    // but stays open for valleys still to come.
                    if let Some(&top) = start_pts.last() {
                        let temp = Cluster::range(top, last_endpoint);
                        if temp.len() >= self.min_pts {
                            clusters.push(temp);
                        }
                    }
                }

                // About to descend again: this point opens a new valley.
                if reach[i + 1] < reach[i] {
                    start_pts.push(i);
                }
            } else if reach[i + 1] > reach[i] {
                // True local minimum about to rise: remember the endpoint
                // (i + 1, so the minimum itself is included in the half-open
                // range) and span a tentative cluster from the innermost
                // open start-point. Flushed only by a later ascent end.
                last_endpoint = i + 1;
                if let Some(&top) = start_pts.last() {
                    curr_cluster = Cluster::range(top, last_endpoint);
                }
            }
        }

        // Valleys still open at the right edge.
        while let Some(top) = start_pts.pop() {
            let drained = Cluster::range(top, n);
            if reach[top] > reach[n - 1] && drained.len() >= self.min_pts {
                clusters.push(drained);
            }
        }

        clusters
    }
}

impl Default for GradientExtractor {
    fn default() -> Self {
        Self::new(5)
    }
}

impl ClusterExtraction for GradientExtractor {
    /// Full pipeline: boundary tracking, size filtering, similarity merging.
    ///
    /// The result is sorted by descending size.
    fn extract(&self, profile: &[Reachability]) -> Result<Vec<Cluster>> {
        let candidates = self.track(profile)?;
        let filtered =
            filter_large_clusters(candidates, profile.len(), self.max_cluster_fraction);
        Ok(merge_similar_clusters(filtered, self.similarity_threshold))
    }
}
