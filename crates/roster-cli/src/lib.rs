//! Shared CLI infrastructure for the ward roster binary.

pub mod logging;
