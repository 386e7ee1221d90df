//! Per-point curvature signals on the reachability profile.
//!
//! Both signals look at a point together with its two neighbors, treating
//! consecutive profile points as 2D vectors `(w, Δreachability)` where `w` is
//! the horizontal step width of the reachability plot. Smaller `w` makes both
//! signals more sensitive to small reachability fluctuations.

/// Cosine of the angle between the incoming and outgoing profile vectors at
/// index `i`.
///
/// With `x = profile[i-1]`, `y = profile[i]`, `z = profile[i+1]` and the two
/// vectors `prev = (w, y-x)`, `next = (w, z-y)`, this returns
/// `(-w² + (x-y)(z-y)) / (|prev|·|next|)` — the cosine of the angle formed at
/// the point. Values near 1 flag a sharp V or inverted-V; a flat profile
/// yields -1 (a 180° angle).
///
/// Requires `1 <= i <= profile.len() - 2`. For `w > 0` both vector magnitudes
/// are at least `w`, so the result is finite; callers treat a non-finite
/// result (degenerate configuration) as "not a boundary".
pub fn inflection_index(profile: &[f64], i: usize, w: f64) -> f64 {
    debug_assert!(i >= 1 && i + 1 < profile.len());

    let x = profile[i - 1];
    let y = profile[i];
    let z = profile[i + 1];

    let prev_mag = (w * w + (y - x) * (y - x)).sqrt();
    let next_mag = (w * w + (z - y) * (z - y)).sqrt();

    (-(w * w) + (x - y) * (z - y)) / (prev_mag * next_mag)
}

/// Signed second difference of the profile at index `i`, scaled by `w`.
///
/// Returns `w·(y-x) - w·(z-y)`. Only the sign is meaningful: positive means
/// the slope is decreasing through the point (a valley-exit ascent begins),
/// non-positive means the descent continues or a peak is about to turn down.
///
/// Requires `1 <= i <= profile.len() - 2`.
pub fn gradient_determinant(profile: &[f64], i: usize, w: f64) -> f64 {
    debug_assert!(i >= 1 && i + 1 < profile.len());

    let x = profile[i - 1];
    let y = profile[i];
    let z = profile[i + 1];

    w * (y - x) - w * (z - y)
}
