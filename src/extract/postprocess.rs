//! Candidate-set normalization: size filtering and similarity merging.
//!
//! The boundary tracker over-produces: nested valleys emit overlapping
//! candidates, and an outer valley can appear several times with slightly
//! different endpoints. Downstream consumers want one cluster per valley, so
//! the candidate set is first stripped of oversized clusters and then merged
//! to a fixed point.

use crate::cluster::Cluster;

/// Drop clusters that cover too large a fraction of the input.
///
/// Keeps a cluster iff `0 < len < max_fraction * total_points`. Pure and
/// order-preserving. `max_fraction` is expected in `(0, 1]`; values ≥ 1 keep
/// every non-empty cluster and values ≤ 0 drop everything.
pub fn filter_large_clusters(
    clusters: Vec<Cluster>,
    total_points: usize,
    max_fraction: f64,
) -> Vec<Cluster> {
    let limit = max_fraction * total_points as f64;
    clusters
        .into_iter()
        .filter(|c| !c.is_empty() && (c.len() as f64) < limit)
        .collect()
}

/// Merge clusters sharing a high fraction of members, to a fixed point.
///
/// Two clusters merge when their intersection holds at least
/// `similarity_threshold * max(|A|, |B|)` members. Each pass walks the
/// clusters in descending size order and gives each cluster at most one merge
/// partner; passes repeat until one performs no further reduction in the
/// cluster count. The count never increases across passes, so the iteration
/// terminates; a hard cap on passes backstops that argument.
///
/// The result is sorted by descending size. Merged clusters are explicit
/// sorted index sets ([`Cluster::Set`]); unmerged ones are carried through
/// unchanged.
pub fn merge_similar_clusters(
    mut clusters: Vec<Cluster>,
    similarity_threshold: f64,
) -> Vec<Cluster> {
    // Each reducing pass removes at least one cluster, plus one confirming
    // pass at the end.
    let max_passes = clusters.len() + 1;

    for _ in 0..max_passes {
        let before = clusters.len();
        clusters = merge_pass(clusters, similarity_threshold);
        if clusters.len() == before {
            break;
        }
    }

    sort_by_size_desc(&mut clusters);
    clusters
}

/// One merge pass. At most one partner per cluster; a merged pair's union is
/// not reconsidered until the next pass.
fn merge_pass(mut clusters: Vec<Cluster>, threshold: f64) -> Vec<Cluster> {
    sort_by_size_desc(&mut clusters);

    let mut consumed = vec![false; clusters.len()];
    let mut out: Vec<Cluster> = Vec::with_capacity(clusters.len());

    for i in 0..clusters.len() {
        if consumed[i] {
            continue;
        }

        let mut merged: Option<Cluster> = None;
        for j in (i + 1)..clusters.len() {
            if consumed[j] {
                continue;
            }

            let shared = clusters[i].intersection_len(&clusters[j]);
            let bigger = clusters[i].len().max(clusters[j].len());
            if shared as f64 >= threshold * bigger as f64 {
                merged = Some(clusters[i].union(&clusters[j]));
                consumed[j] = true;
                break;
            }
        }

        out.push(merged.unwrap_or_else(|| clusters[i].clone()));
    }

    out
}

fn sort_by_size_desc(clusters: &mut [Cluster]) {
    // Stable: order among equal sizes is preserved (not contractual).
    clusters.sort_by(|a, b| b.len().cmp(&a.len()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_keeps_only_small_nonempty_clusters() {
        let clusters = vec![
            Cluster::range(0, 10),
            Cluster::range(0, 60),
            Cluster::range(5, 5),
        ];
        let kept = filter_large_clusters(clusters, 100, 0.5);
        assert_eq!(kept, vec![Cluster::range(0, 10)]);
    }

    #[test]
    fn filter_boundary_is_strict() {
        // Exactly at the limit is rejected.
        let clusters = vec![Cluster::range(0, 50)];
        assert!(filter_large_clusters(clusters, 100, 0.5).is_empty());
    }

    #[test]
    fn filter_degrades_gracefully_out_of_range() {
        let clusters = vec![Cluster::range(0, 10), Cluster::range(0, 90)];

        let all = filter_large_clusters(clusters.clone(), 100, 2.0);
        assert_eq!(all.len(), 2);

        let none = filter_large_clusters(clusters, 100, 0.0);
        assert!(none.is_empty());
    }

    #[test]
    fn filter_is_idempotent() {
        let clusters = vec![
            Cluster::range(0, 10),
            Cluster::range(0, 60),
            Cluster::set(vec![1, 2, 3]),
        ];
        let once = filter_large_clusters(clusters, 100, 0.5);
        let twice = filter_large_clusters(once.clone(), 100, 0.5);
        assert_eq!(once, twice);
    }

    #[test]
    fn merge_overlapping_pair() {
        // Intersection 3, larger size 5: 3 >= 0.5 * 5, so the pair merges.
        let clusters = vec![Cluster::range(0, 5), Cluster::range(2, 7)];
        let merged = merge_similar_clusters(clusters, 0.5);
        assert_eq!(merged, vec![Cluster::Set(vec![0, 1, 2, 3, 4, 5, 6])]);
    }

    #[test]
    fn merge_respects_threshold() {
        // Same pair, but 3 < 0.7 * 5: no merge.
        let clusters = vec![Cluster::range(0, 5), Cluster::range(2, 7)];
        let merged = merge_similar_clusters(clusters, 0.7);
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn merge_chains_across_passes() {
        // a∪b forms in pass one; the union then absorbs c in pass two.
        let a = Cluster::range(0, 6);
        let b = Cluster::range(0, 5);
        let c = Cluster::range(3, 9);
        let merged = merge_similar_clusters(vec![a, b, c], 0.5);
        assert_eq!(merged, vec![Cluster::Set((0..9).collect())]);
    }

    #[test]
    fn merge_result_is_sorted_by_descending_size() {
        let clusters = vec![
            Cluster::range(0, 2),
            Cluster::range(10, 17),
            Cluster::range(20, 24),
        ];
        let merged = merge_similar_clusters(clusters, 0.9);
        let sizes: Vec<usize> = merged.iter().map(Cluster::len).collect();
        assert_eq!(sizes, vec![7, 4, 2]);
    }

    #[test]
    fn merge_is_idempotent_at_the_fixed_point() {
        let clusters = vec![
            Cluster::range(0, 5),
            Cluster::range(2, 7),
            Cluster::range(20, 26),
            Cluster::range(21, 26),
        ];
        let once = merge_similar_clusters(clusters, 0.5);
        let twice = merge_similar_clusters(once.clone(), 0.5);
        assert_eq!(once, twice);
    }

    #[test]
    fn merge_empty_input() {
        assert!(merge_similar_clusters(Vec::new(), 0.5).is_empty());
    }

    #[test]
    fn merge_single_cluster_is_untouched() {
        let clusters = vec![Cluster::range(3, 8)];
        let merged = merge_similar_clusters(clusters, 0.5);
        assert_eq!(merged, vec![Cluster::range(3, 8)]);
    }

    #[test]
    fn identical_clusters_collapse() {
        let clusters = vec![Cluster::range(0, 4); 3];
        let merged = merge_similar_clusters(clusters, 1.0);
        assert_eq!(merged, vec![Cluster::Set(vec![0, 1, 2, 3])]);
    }
}
