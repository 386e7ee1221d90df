use thiserror::Error;

/// Errors returned by the extraction pipeline in this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Reachability profile is too short for boundary detection.
    ///
    /// The gradient method inspects each point together with both of its
    /// neighbors, so a profile needs at least 3 points to be meaningful.
    #[error("reachability profile too short: {len} points, need at least 3")]
    ProfileTooShort {
        /// Number of points in the rejected profile.
        len: usize,
    },

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Human-readable explanation.
        message: &'static str,
    },
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
