//! Cluster value type.
//!
//! The boundary tracker emits clusters as contiguous half-open index ranges;
//! the similarity merger needs set semantics (union, intersection), and a
//! union of two ranges is not contiguous in general. A cluster is therefore a
//! variant over the two representations. Both keep member indices in
//! ascending order, which the intersection and union operations rely on.

use std::ops::Range;

/// A cluster of point indices into a reachability profile.
///
/// Immutable snapshot: no back-reference to the profile it was extracted
/// from. Note that derived equality is representational — `Range(0..2)` and
/// `Set(vec![0, 1])` have the same members but compare unequal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Cluster {
    /// Contiguous half-open index range `[start, end)`.
    Range(Range<usize>),
    /// Explicit member set, sorted ascending, deduplicated.
    Set(Vec<usize>),
}

impl Cluster {
    /// Cluster covering the half-open range `[start, end)`.
    pub fn range(start: usize, end: usize) -> Self {
        Cluster::Range(start..end)
    }

    /// Cluster from an explicit member list (sorted and deduplicated here).
    pub fn set(mut indices: Vec<usize>) -> Self {
        indices.sort_unstable();
        indices.dedup();
        Cluster::Set(indices)
    }

    /// Number of member points.
    pub fn len(&self) -> usize {
        match self {
            Cluster::Range(r) => r.end.saturating_sub(r.start),
            Cluster::Set(s) => s.len(),
        }
    }

    /// Whether the cluster has no members.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Member indices in ascending order.
    pub fn iter(&self) -> ClusterIter<'_> {
        match self {
            Cluster::Range(r) => ClusterIter::Range(r.clone()),
            Cluster::Set(s) => ClusterIter::Set(s.iter()),
        }
    }

    /// Whether `idx` is a member.
    pub fn contains(&self, idx: usize) -> bool {
        match self {
            Cluster::Range(r) => r.contains(&idx),
            Cluster::Set(s) => s.binary_search(&idx).is_ok(),
        }
    }

    /// Number of indices shared with `other`.
    pub fn intersection_len(&self, other: &Cluster) -> usize {
        match (self, other) {
            (Cluster::Range(a), Cluster::Range(b)) => {
                let lo = a.start.max(b.start);
                let hi = a.end.min(b.end);
                hi.saturating_sub(lo)
            }
            (Cluster::Range(r), Cluster::Set(s)) | (Cluster::Set(s), Cluster::Range(r)) => {
                s.iter().filter(|idx| r.contains(idx)).count()
            }
            (Cluster::Set(a), Cluster::Set(b)) => {
                let mut count = 0;
                let (mut i, mut j) = (0, 0);
                while i < a.len() && j < b.len() {
                    match a[i].cmp(&b[j]) {
                        std::cmp::Ordering::Less => i += 1,
                        std::cmp::Ordering::Greater => j += 1,
                        std::cmp::Ordering::Equal => {
                            count += 1;
                            i += 1;
                            j += 1;
                        }
                    }
                }
                count
            }
        }
    }

    /// Union of the two member sets, as an explicit sorted [`Cluster::Set`].
    pub fn union(&self, other: &Cluster) -> Cluster {
        let mut merged: Vec<usize> = Vec::with_capacity(self.len() + other.len());
        merged.extend(self.iter());
        merged.extend(other.iter());
        Cluster::set(merged)
    }
}

/// Iterator over a cluster's member indices, ascending.
#[derive(Clone, Debug)]
pub enum ClusterIter<'a> {
    /// Iterating a contiguous range.
    Range(Range<usize>),
    /// Iterating an explicit member set.
    Set(std::slice::Iter<'a, usize>),
}

impl Iterator for ClusterIter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        match self {
            ClusterIter::Range(r) => r.next(),
            ClusterIter::Set(s) => s.next().copied(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            ClusterIter::Range(r) => r.size_hint(),
            ClusterIter::Set(s) => s.size_hint(),
        }
    }
}

impl ExactSizeIterator for ClusterIter<'_> {}

impl<'a> IntoIterator for &'a Cluster {
    type Item = usize;
    type IntoIter = ClusterIter<'a>;

    fn into_iter(self) -> ClusterIter<'a> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_len_and_members() {
        let c = Cluster::range(2, 6);
        assert_eq!(c.len(), 4);
        assert!(!c.is_empty());
        assert_eq!(c.iter().collect::<Vec<_>>(), vec![2, 3, 4, 5]);
        assert!(c.contains(5));
        assert!(!c.contains(6));
    }

    #[test]
    fn empty_range() {
        let c = Cluster::range(3, 3);
        assert_eq!(c.len(), 0);
        assert!(c.is_empty());
        assert_eq!(c.iter().count(), 0);
    }

    #[test]
    fn set_constructor_sorts_and_dedups() {
        let c = Cluster::set(vec![5, 1, 3, 1, 5]);
        assert_eq!(c.iter().collect::<Vec<_>>(), vec![1, 3, 5]);
        assert_eq!(c.len(), 3);
    }

    #[test]
    fn intersection_range_range() {
        let a = Cluster::range(0, 5);
        let b = Cluster::range(3, 8);
        assert_eq!(a.intersection_len(&b), 2);
        assert_eq!(b.intersection_len(&a), 2);

        let disjoint = Cluster::range(10, 12);
        assert_eq!(a.intersection_len(&disjoint), 0);
    }

    #[test]
    fn intersection_range_set() {
        let a = Cluster::range(0, 5);
        let b = Cluster::set(vec![2, 4, 9]);
        assert_eq!(a.intersection_len(&b), 2);
        assert_eq!(b.intersection_len(&a), 2);
    }

    #[test]
    fn intersection_set_set() {
        let a = Cluster::set(vec![1, 2, 3, 7]);
        let b = Cluster::set(vec![2, 3, 4, 8]);
        assert_eq!(a.intersection_len(&b), 2);
    }

    #[test]
    fn union_explodes_to_sorted_set() {
        let a = Cluster::range(0, 3);
        let b = Cluster::set(vec![2, 5, 7]);
        let u = a.union(&b);
        assert_eq!(u, Cluster::Set(vec![0, 1, 2, 5, 7]));
        assert_eq!(u.len(), 5);
    }
}
