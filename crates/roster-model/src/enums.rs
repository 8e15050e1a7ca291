//! Type-safe enumerations for roster record fields.
//!
//! The backing table stores every field as free text; these enums give the
//! fixed value sets compile-time shape and one canonical spelling on the
//! wire. Parsing is case-insensitive because hand-entered sheets drift.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Patient sex as collected on the intake form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "Male",
            Sex::Female => "Female",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Sex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "MALE" | "M" => Ok(Sex::Male),
            "FEMALE" | "F" => Ok(Sex::Female),
            _ => Err(format!("unknown sex: {s}")),
        }
    }
}

/// Ward code from the hospital's fixed ward list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ward {
    W1A,
    W2A,
    W3A,
    W3B,
    Ccu,
    Icu,
}

impl Ward {
    /// All wards in display order.
    pub const ALL: [Ward; 6] = [Ward::W1A, Ward::W2A, Ward::W3A, Ward::W3B, Ward::Ccu, Ward::Icu];

    pub fn as_str(&self) -> &'static str {
        match self {
            Ward::W1A => "1A",
            Ward::W2A => "2A",
            Ward::W3A => "3A",
            Ward::W3B => "3B",
            Ward::Ccu => "CCU",
            Ward::Icu => "ICU",
        }
    }
}

impl fmt::Display for Ward {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Ward {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "1A" => Ok(Ward::W1A),
            "2A" => Ok(Ward::W2A),
            "3A" => Ok(Ward::W3A),
            "3B" => Ok(Ward::W3B),
            "CCU" => Ok(Ward::Ccu),
            "ICU" => Ok(Ward::Icu),
            _ => Err(format!("unknown ward: {s}")),
        }
    }
}

/// Hospital floor, "1" through "5" on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Floor {
    First,
    Second,
    Third,
    Fourth,
    Fifth,
}

impl Floor {
    pub const ALL: [Floor; 5] = [
        Floor::First,
        Floor::Second,
        Floor::Third,
        Floor::Fourth,
        Floor::Fifth,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Floor::First => "1",
            Floor::Second => "2",
            Floor::Third => "3",
            Floor::Fourth => "4",
            Floor::Fifth => "5",
        }
    }
}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Floor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Floor::First),
            "2" => Ok(Floor::Second),
            "3" => Ok(Floor::Third),
            "4" => Ok(Floor::Fourth),
            "5" => Ok(Floor::Fifth),
            _ => Err(format!("unknown floor: {s}")),
        }
    }
}

/// Clinical status shown on the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PatientStatus {
    Stable,
    Critical,
    UnderObservation,
    Discharged,
}

impl PatientStatus {
    pub const ALL: [PatientStatus; 4] = [
        PatientStatus::Stable,
        PatientStatus::Critical,
        PatientStatus::UnderObservation,
        PatientStatus::Discharged,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PatientStatus::Stable => "Stable",
            PatientStatus::Critical => "Critical",
            PatientStatus::UnderObservation => "Under Observation",
            PatientStatus::Discharged => "Discharged",
        }
    }
}

impl fmt::Display for PatientStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PatientStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "STABLE" => Ok(PatientStatus::Stable),
            "CRITICAL" => Ok(PatientStatus::Critical),
            "UNDER OBSERVATION" => Ok(PatientStatus::UnderObservation),
            "DISCHARGED" => Ok(PatientStatus::Discharged),
            _ => Err(format!("unknown patient status: {s}")),
        }
    }
}
