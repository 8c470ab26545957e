//! # Error Types
//!
//! This module defines all error types for the fretboard library.
//!
//! All computation in this crate is total over the validated domain, so every
//! error here is an input-validation failure raised at a public function
//! boundary. There are no recoverable runtime errors: once inputs pass
//! validation, geometry and scale enumeration cannot fail.
//!
//! ## Error Types
//! - `InvalidInput` - Degenerate geometry inputs (non-positive scale length, zero frets)
//! - `UnknownKey` / `UnknownScale` - Name lookup failures (no silent defaulting)
//! - `PositionOutOfRange` - Coordinate lookup outside the configured grid
//! - `ConfigError` - A config file that parses but violates structural invariants
//!
//! ## Usage
//! ```rust
//! use fretboard::{map_scale, FretboardConfig, FretboardError};
//!
//! let config = FretboardConfig::default();
//! match map_scale("H", "major", &config) {
//!     Err(FretboardError::UnknownKey(name)) => assert_eq!(name, "H"),
//!     other => panic!("expected UnknownKey, got {:?}", other),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FretboardError {
    /// Degenerate numeric input to a geometry function.
    ///
    /// Raised for non-positive or non-finite scale lengths, a fret count of
    /// zero, or a placement sequence that cannot be projected.
    ///
    /// # Example
    /// ```
    /// # use fretboard::FretboardError;
    /// let err = FretboardError::InvalidInput("scale length must be positive, got -1".to_string());
    /// assert_eq!(err.to_string(), "Invalid input: scale length must be positive, got -1");
    /// ```
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A key name that is not one of the twelve recognized spellings.
    ///
    /// Keys use flat spellings for the black keys: Ab, A, Bb, B, C, Db, D,
    /// Eb, E, F, Gb, G (Unicode `♭` is accepted too).
    #[error("Unknown key: {0}")]
    UnknownKey(String),

    /// A scale name with no entry in the scale library.
    #[error("Unknown scale: {0}")]
    UnknownScale(String),

    /// A (string, fret) pair outside the configured grid.
    ///
    /// Strings are 1-indexed; frets run from 0 (open) through the configured
    /// fret count inclusive.
    ///
    /// # Example
    /// ```
    /// # use fretboard::FretboardError;
    /// let err = FretboardError::PositionOutOfRange { string: 7, fret: 0 };
    /// assert_eq!(err.to_string(), "Position out of range: string 7, fret 0");
    /// ```
    #[error("Position out of range: string {string}, fret {fret}")]
    PositionOutOfRange { string: u8, fret: u8 },

    /// A configuration that deserialized cleanly but is structurally invalid,
    /// e.g. the string-edge count does not match the tuning's string count.
    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}
