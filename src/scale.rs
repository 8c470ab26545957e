//! # Scale Engine
//!
//! This module decides which (string, fret) positions belong to a musical
//! scale.
//!
//! ## Pipeline
//! ```text
//! transpose_scale(key, pattern)              C-relative offsets -> absolute pitch classes
//!   -> enumerate_positions(classes, tuning)  filter the full string x fret grid
//! ```
//!
//! ## Membership Rule
//! A fretted note's pitch class is `(open_note + fret) mod 12`; a position
//! belongs to the scale iff that pitch class is in the transposed set. The
//! grid runs over strings 1..=num_strings and frets 0..=num_frets (fret 0 is
//! the open string and is always enumerated).
//!
//! ## Example
//! ```rust
//! use fretboard::{enumerate_positions, transpose_scale, Key, ScaleLibrary, Tuning};
//!
//! let scales = ScaleLibrary::default();
//! let classes = transpose_scale(Key::C, scales.get("major")?);
//! let positions = enumerate_positions(&classes, &Tuning::default(), 21);
//! assert!(positions.iter().any(|p| p.string == 1 && p.fret == 1)); // F on the high E string
//! # Ok::<(), fretboard::FretboardError>(())
//! ```
//!
//! ## Related Modules
//! - `model` - `Key`, `ScalePattern`, `Tuning`, `Position`
//! - `layout` - Pairs the enumerated positions with marker coordinates

use crate::error::FretboardError;
use crate::model::{Key, PitchClass, Position, ScalePattern, Tuning, SEMITONES};

/// Transpose a C-relative interval pattern to an absolute pitch-class set.
///
/// Each offset moves up by the key's semitone distance from C, mod 12; the
/// pattern's order is preserved. Transposing by C is the identity.
pub fn transpose_scale(key: Key, pattern: &ScalePattern) -> Vec<PitchClass> {
    let distance = key.semitones_from_c();
    pattern
        .offsets()
        .iter()
        .map(|&offset| (offset + distance) % SEMITONES)
        .collect()
}

/// Pitch class sounded at a (string, fret) position.
///
/// # Errors
/// Returns [`FretboardError::PositionOutOfRange`] when the string is not in
/// the tuning. Fret range is the caller's concern; any fret produces a valid
/// pitch class mod 12.
pub fn get_note(tuning: &Tuning, string: u8, fret: u8) -> Result<PitchClass, FretboardError> {
    let open = tuning.open_note(string).map_err(|_| {
        FretboardError::PositionOutOfRange { string, fret }
    })?;
    Ok((open + (fret % SEMITONES)) % SEMITONES)
}

/// Enumerate every position on the grid whose pitch class is in the set.
///
/// Order is string-major, fret-minor: all frets of string 1 (ascending, fret
/// 0 through `num_frets` inclusive), then string 2, and so on. A position
/// appears iff `get_note(string, fret)` is a member of `pitch_classes`.
pub fn enumerate_positions(
    pitch_classes: &[PitchClass],
    tuning: &Tuning,
    num_frets: u8,
) -> Vec<Position> {
    let mut positions = Vec::new();
    for string in 1..=tuning.num_strings() {
        // open_note cannot fail inside the tuning's own string range
        let open = match tuning.open_note(string) {
            Ok(open) => open,
            Err(_) => continue,
        };
        for fret in 0..=num_frets {
            let note = (open + (fret % SEMITONES)) % SEMITONES;
            if pitch_classes.contains(&note) {
                positions.push(Position::new(string, fret));
            }
        }
    }
    positions
}
