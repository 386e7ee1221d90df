//! Full extraction pipeline on a synthetic reachability profile.
//!
//! Stands in for the output of an OPTICS ordering pass: three groups of
//! points, each showing up as a valley in the reachability profile.

use rand::prelude::*;
use ravine::{cluster_summary, reachability_profile, ClusterExtraction, GradientExtractor, OrderedPoint, Reachability};

/// Fake one ordered group: a ridge entry point followed by a flat valley.
fn push_group(
    points: &mut Vec<OrderedPoint>,
    center: (f64, f64),
    reach: f64,
    size: usize,
    rng: &mut StdRng,
) {
    for i in 0..size {
        let reachability = if i == 0 {
            // First point of a group is reached from far away.
            Reachability::Finite(reach * 8.0)
        } else {
            Reachability::Finite(reach + rng.random::<f64>() * 0.05)
        };
        points.push(OrderedPoint {
            processed: true,
            reachability,
            core_distance: Reachability::Finite(reach),
            coordinates: vec![
                center.0 + rng.random::<f64>() - 0.5,
                center.1 + rng.random::<f64>() - 0.5,
            ],
        });
    }
}

fn main() {
    let mut rng = StdRng::seed_from_u64(1);

    let mut points = Vec::new();
    points.push(OrderedPoint {
        processed: true,
        reachability: Reachability::Undefined,
        core_distance: Reachability::Finite(0.2),
        coordinates: vec![-5.0, 6.0],
    });
    push_group(&mut points, (-5.0, 6.0), 0.3, 30, &mut rng);
    push_group(&mut points, (8.0, 5.0), 0.5, 25, &mut rng);
    push_group(&mut points, (4.0, -1.0), 0.4, 40, &mut rng);

    let profile = reachability_profile(&points);

    let extractor = GradientExtractor::new(10)
        .with_angle_threshold(150.0)
        .with_step_width(0.025)
        .with_max_cluster_fraction(0.5)
        .with_similarity_threshold(0.7);

    let clusters = extractor.extract(&profile).unwrap();

    println!("=== Gradient clustering ({} points) ===", points.len());
    println!("{} clusters found\n", clusters.len());

    for (i, cluster) in clusters.iter().enumerate() {
        let summary = cluster_summary(cluster, &points).unwrap();
        println!(
            "cluster {:2}: {:3} points, centroid ({:6.2}, {:6.2}), stddev ({:5.2}, {:5.2})",
            i,
            summary.size,
            summary.centroid[0],
            summary.centroid[1],
            summary.stddev[0],
            summary.stddev[1],
        );
    }
}
