use std::fmt;

// ---------------------------------------------------------------------------
// Error codes
// ---------------------------------------------------------------------------

/// Machine-readable error codes for callers that branch on failure kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ConfigParseError,
    InvalidBands,
    InputReadError,
    InputParseError,
    InvalidRecord,
    UnknownAirport,
    InternalUnexpected,
}

impl ErrorCode {
    /// Stable code identifier (`E####`) for machine parsing.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::ConfigParseError => "E1001",
            Self::InvalidBands => "E1002",
            Self::InputReadError => "E2001",
            Self::InputParseError => "E2002",
            Self::InvalidRecord => "E3001",
            Self::UnknownAirport => "E3002",
            Self::InternalUnexpected => "E9001",
        }
    }

    /// Short human-facing summary for logs and terminal output.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::ConfigParseError => "Config file parse error",
            Self::InvalidBands => "Distribution bands are misordered",
            Self::InputReadError => "Route input could not be read",
            Self::InputParseError => "Route input is not valid JSON",
            Self::InvalidRecord => "Invalid route record",
            Self::UnknownAirport => "Airport not present in route data",
            Self::InternalUnexpected => "Internal unexpected error",
        }
    }

    /// Optional remediation hint that can be surfaced to operators.
    #[must_use]
    pub const fn hint(self) -> Option<&'static str> {
        match self {
            Self::ConfigParseError => Some("Fix syntax in routenet.toml and retry."),
            Self::InvalidBands => {
                Some("Each *_below threshold must be finite and below its *_from threshold.")
            }
            Self::InputReadError => Some("Check the input path and read permissions."),
            Self::InputParseError => {
                Some("Provide a JSON array of route records or one record per line.")
            }
            Self::InvalidRecord => Some(
                "Frequency must lie in [0, 1000000], price must be non-negative and demand_score must lie in [0, 1].",
            ),
            Self::UnknownAirport => Some("Use an airport code that appears in the route data."),
            Self::InternalUnexpected => Some("Retry once. If persistent, report a bug with logs."),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ---------------------------------------------------------------------------
// Analysis errors
// ---------------------------------------------------------------------------

/// The constraint a rejected [`crate::RouteRecord`] violated.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RecordDefect {
    #[error("frequency {0} is negative")]
    NegativeFrequency(i64),

    #[error("frequency {0} exceeds the weekly maximum of {max}", max = crate::model::MAX_WEEKLY_FREQUENCY)]
    FrequencyTooLarge(i64),

    #[error("average price {0} is negative")]
    NegativePrice(f64),

    #[error("average price is not a finite number")]
    NonFinitePrice,

    #[error("demand score {0} is outside [0, 1]")]
    DemandOutOfRange(f64),

    #[error("demand score is not a finite number")]
    NonFiniteDemand,

    #[error("{0} airport code is empty")]
    EmptyAirportCode(&'static str),

    #[error("airline name is empty")]
    EmptyAirline,

    #[error("route {0} -> {0} starts and ends at the same airport")]
    SelfLoop(String),
}

/// Errors returned by the analytics engine.
///
/// The engine is pure arithmetic over in-memory data, so the only fault is a
/// malformed input batch. A batch containing any invalid record is rejected
/// as a whole; no partial summary is ever produced.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnalysisError {
    /// The record at `index` violates a shape constraint.
    #[error("invalid route record at index {index}: {defect}")]
    InvalidRecord {
        index: usize,
        #[source]
        defect: RecordDefect,
    },

    /// Distribution thresholds are not finite or not strictly ordered.
    #[error("invalid distribution bands: {0}")]
    InvalidBands(String),
}

impl AnalysisError {
    /// Machine-readable code for this error.
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::InvalidRecord { .. } => ErrorCode::InvalidRecord,
            Self::InvalidBands(_) => ErrorCode::InvalidBands,
        }
    }

    /// Index of the offending record, when the error refers to one.
    #[must_use]
    pub const fn record_index(&self) -> Option<usize> {
        match self {
            Self::InvalidRecord { index, .. } => Some(*index),
            Self::InvalidBands(_) => None,
        }
    }
}
