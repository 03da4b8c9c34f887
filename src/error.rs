/// Failures raised while constructing or traversing navigational values
///
/// Construction errors are raised eagerly: no value can exist in an
/// invalid state. `LegOutOfBounds` is the one positional error, raised
/// by [`Route`](crate::Route) accessors.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{quantity} must be a finite number (got {value})")]
    NonFinite { quantity: &'static str, value: f64 },

    #[error("distance must be zero or greater (got {0} nautical miles)")]
    NegativeDistance(f64),

    #[error("speed must be zero or greater (got {0} knots)")]
    NegativeSpeed(f64),

    #[error("time must be a positive, non-zero number of seconds (got {0})")]
    NonPositiveTime(i64),

    #[error("bearing must be between 0 and 360 degrees (got {0})")]
    BearingOutOfRange(i32),

    #[error("invalid compass point {0:?} (expected N, E, S or W)")]
    InvalidCompassPoint(char),

    #[error("at least two of speed, distance and time must be provided")]
    UnderdeterminedTriple,

    #[error("route must contain at least one leg")]
    EmptyRoute,

    #[error("no leg at position {position} (route has {count} legs)")]
    LegOutOfBounds { position: i64, count: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
