//! Error type shared across the crate.

use thiserror::Error;

/// Errors produced while validating input, ordering spots, or loading data.
///
/// An empty spot list is not an error for the orderers: they return an empty
/// [`Route`](crate::models::Route). [`RoutingError::EmptyInput`] is reserved
/// for operations that need at least one stop, such as building a deep link.
#[derive(Debug, Error)]
pub enum RoutingError {
    /// Latitude/longitude is non-finite or outside [-90, 90] / [-180, 180].
    #[error("invalid coordinate ({latitude}, {longitude})")]
    InvalidCoordinate {
        /// Offending latitude in degrees.
        latitude: f64,
        /// Offending longitude in degrees.
        longitude: f64,
    },

    /// Coordinate text could not be parsed as `lat,lon`.
    #[error("cannot parse coordinate from {input:?}, expected \"lat,lon\"")]
    ParseCoordinate {
        /// The rejected text.
        input: String,
    },

    /// A spot attribute (wait time, visit duration) is negative or non-finite.
    #[error("spot {spot:?} has invalid {field}: {value}")]
    InvalidAttribute {
        /// Spot name.
        spot: String,
        /// Attribute name.
        field: &'static str,
        /// Rejected value.
        value: f64,
    },

    /// The exhaustive orderer was given more destinations than it enumerates.
    #[error("exhaustive ordering supports at most {max} destinations, got {count}")]
    TooManyDestinations {
        /// Number of destinations supplied.
        count: usize,
        /// Configured cap.
        max: usize,
    },

    /// Two spots share a name within one candidate list.
    #[error("duplicate spot name {name:?}")]
    DuplicateSpot {
        /// The repeated name.
        name: String,
    },

    /// No spots to work with.
    #[error("route has no stops")]
    EmptyInput,

    /// Strategy or travel mode name not recognised.
    #[error("unknown {kind} {name:?}")]
    UnknownVariant {
        /// What was being parsed ("strategy", "travel mode").
        kind: &'static str,
        /// The rejected name.
        name: String,
    },

    /// No live session under this id.
    #[error("session {0} not found")]
    SessionNotFound(uuid::Uuid),

    /// Configuration values out of range.
    #[error("invalid configuration: {message}")]
    Config {
        /// What is wrong.
        message: String,
    },

    /// Failed to read a file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed spot CSV.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Malformed TOML configuration.
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Deep link base is not a valid URL.
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, RoutingError>;
