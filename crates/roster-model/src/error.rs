use chrono::NaiveDate;
use thiserror::Error;

/// Which uniqueness key a candidate record collided on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum CollisionField {
    Name,
    Identifier,
    Both,
}

impl std::fmt::Display for CollisionField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            CollisionField::Name => "name",
            CollisionField::Identifier => "IC number",
            CollisionField::Both => "name and IC number",
        };
        write!(f, "{text}")
    }
}

/// Error taxonomy for roster operations.
///
/// Every variant is terminal for the triggering action and non-fatal for
/// the session: callers surface the message and let the user retry.
#[derive(Debug, Error)]
pub enum RosterError {
    /// A required field was left empty or on its placeholder value.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// A numeric field fell outside its allowed range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: u32,
        max: u32,
    },

    /// The candidate record matched an existing roster entry.
    #[error("a patient with this {0} is already registered")]
    Collision(CollisionField),

    /// A wizard submission arrived for the wrong step.
    #[error("{0}")]
    WizardState(&'static str),

    /// The selected record no longer exists in a freshly loaded roster.
    #[error("selection no longer exists; reload the roster and reselect")]
    NotFound,

    /// The backing store could not be read or written.
    #[error("record store unavailable: {0}")]
    StoreUnavailable(String),

    /// An export was requested with start after end.
    #[error("invalid export range: {start} is after {end}")]
    InvertedRange { start: NaiveDate, end: NaiveDate },
}

impl RosterError {
    /// Wrap any store-level failure (I/O, parsing, backend) as unavailable.
    pub fn store(source: impl std::fmt::Display) -> Self {
        RosterError::StoreUnavailable(source.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;
