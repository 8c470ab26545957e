//! # Fretboard Value Types
//!
//! This module defines the value types shared by the geometry and scale
//! modules. Everything here is a plain owned value: computed on demand,
//! compared structurally, discarded after use. Nothing carries identity or
//! interior mutability.
//!
//! ## Type Hierarchy
//! ```text
//! FretboardConfig
//!   ├── layout: FretboardLayout (string edges, scale length, fret count)
//!   ├── tuning: Tuning (open pitch class per string)
//!   └── scales: ScaleLibrary (named interval patterns)
//!
//! Position { string, fret }        1-indexed string, fret 0 = open
//! Coordinate2D { x, y }            percentage offsets in a 0-100 space
//! StringEdge { nut, bridge }       the line segment one string's frets lie on
//! PitchClass                       u8 in [0, 11], 0 = C
//! Key                              the 12 chromatic roots, flat spellings
//! ScalePattern                     ordered pitch-class offsets relative to C
//! ```
//!
//! ## Coordinate Convention
//! Coordinates are percentages of the fingerboard's bounding box, with y
//! increasing upward (CSS "bottom offset" convention). The convention is
//! preserved end to end so a renderer can place markers without unit
//! conversion.
//!
//! ## Related Modules
//! - `geometry` - Computes fret and marker coordinates from these types
//! - `scale` - Computes scale membership over the position grid
//! - `layout` - Ships the calibrated default instrument

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::FretboardError;
use crate::layout::FretboardLayout;

/// A note identity modulo octave, encoded 0-11 with C = 0.
pub type PitchClass = u8;

/// Number of pitch classes in the equal-tempered octave.
pub const SEMITONES: u8 = 12;

/// A single playable location on the fretboard.
///
/// `string` is 1-indexed from the highest-pitched string; `fret` 0 is the
/// open string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub string: u8,
    pub fret: u8,
}

impl Position {
    pub fn new(string: u8, fret: u8) -> Self {
        Self { string, fret }
    }
}

/// A point in the fingerboard's percentage coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate2D {
    pub x: f64,
    pub y: f64,
}

impl Coordinate2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Linear interpolation between `self` and `other`.
    /// `t = 0` yields `self` exactly; `t = 1` yields `other` exactly.
    pub fn lerp(&self, other: &Coordinate2D, t: f64) -> Coordinate2D {
        Coordinate2D {
            x: (1.0 - t) * self.x + t * other.x,
            y: (1.0 - t) * self.y + t * other.y,
        }
    }

    /// Arithmetic mean of the two points, per axis.
    pub fn midpoint(&self, other: &Coordinate2D) -> Coordinate2D {
        Coordinate2D {
            x: 0.5 * self.x + 0.5 * other.x,
            y: 0.5 * self.y + 0.5 * other.y,
        }
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Coordinate2D) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// The line segment a single string's frets lie on, from its position at the
/// nut to its position at the bridge. The six configured edges are not
/// parallel to each other; that taper is intentional and must be preserved
/// per string.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StringEdge {
    pub nut: Coordinate2D,
    pub bridge: Coordinate2D,
}

impl StringEdge {
    pub fn new(nut: Coordinate2D, bridge: Coordinate2D) -> Self {
        Self { nut, bridge }
    }
}

/// The twelve chromatic keys, spelled with flats for the black keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    AFlat,
    A,
    BFlat,
    B,
    C,
    DFlat,
    D,
    EFlat,
    E,
    F,
    GFlat,
    G,
}

impl Key {
    pub const ALL: [Key; 12] = [
        Key::AFlat,
        Key::A,
        Key::BFlat,
        Key::B,
        Key::C,
        Key::DFlat,
        Key::D,
        Key::EFlat,
        Key::E,
        Key::F,
        Key::GFlat,
        Key::G,
    ];

    /// Parse a key name. Accepts ASCII flats (`"Ab"`) and Unicode flats
    /// (`"A♭"`). Unknown names are an error, never a default.
    pub fn from_name(name: &str) -> Result<Key, FretboardError> {
        match name.trim() {
            "Ab" | "A♭" => Ok(Key::AFlat),
            "A" => Ok(Key::A),
            "Bb" | "B♭" => Ok(Key::BFlat),
            "B" => Ok(Key::B),
            "C" => Ok(Key::C),
            "Db" | "D♭" => Ok(Key::DFlat),
            "D" => Ok(Key::D),
            "Eb" | "E♭" => Ok(Key::EFlat),
            "E" => Ok(Key::E),
            "F" => Ok(Key::F),
            "Gb" | "G♭" => Ok(Key::GFlat),
            "G" => Ok(Key::G),
            other => Err(FretboardError::UnknownKey(other.to_string())),
        }
    }

    /// Canonical ASCII spelling.
    pub fn name(&self) -> &'static str {
        match self {
            Key::AFlat => "Ab",
            Key::A => "A",
            Key::BFlat => "Bb",
            Key::B => "B",
            Key::C => "C",
            Key::DFlat => "Db",
            Key::D => "D",
            Key::EFlat => "Eb",
            Key::E => "E",
            Key::F => "F",
            Key::GFlat => "Gb",
            Key::G => "G",
        }
    }

    /// Semitone distance from C, i.e. the transposition this key applies to
    /// a C-relative pattern.
    pub fn semitones_from_c(&self) -> PitchClass {
        match self {
            Key::C => 0,
            Key::DFlat => 1,
            Key::D => 2,
            Key::EFlat => 3,
            Key::E => 4,
            Key::F => 5,
            Key::GFlat => 6,
            Key::G => 7,
            Key::AFlat => 8,
            Key::A => 9,
            Key::BFlat => 10,
            Key::B => 11,
        }
    }
}

/// An ordered set of pitch-class offsets relative to a root of C.
///
/// The major pattern is `[0, 2, 4, 5, 7, 9, 11]`; transposing moves every
/// offset by the key's distance from C, mod 12.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScalePattern(pub Vec<PitchClass>);

impl ScalePattern {
    pub fn offsets(&self) -> &[PitchClass] {
        &self.0
    }
}

/// Named scale patterns, looked up by the parametrized entry points.
///
/// The default library ships major, mixolydian, natural_minor, and the two
/// pentatonics; a config file can add or replace entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScaleLibrary(pub BTreeMap<String, ScalePattern>);

impl ScaleLibrary {
    /// Look up a pattern by name. Unknown names are an error; the message
    /// lists the available names so the caller can correct the input.
    pub fn get(&self, name: &str) -> Result<&ScalePattern, FretboardError> {
        self.0.get(name).ok_or_else(|| {
            let known: Vec<&str> = self.0.keys().map(String::as_str).collect();
            FretboardError::UnknownScale(format!("{} (known scales: {})", name, known.join(", ")))
        })
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl Default for ScaleLibrary {
    fn default() -> Self {
        let mut patterns = BTreeMap::new();
        patterns.insert("major".to_string(), ScalePattern(vec![0, 2, 4, 5, 7, 9, 11]));
        patterns.insert("mixolydian".to_string(), ScalePattern(vec![0, 2, 4, 5, 7, 9, 10]));
        patterns.insert("natural_minor".to_string(), ScalePattern(vec![0, 2, 3, 5, 7, 8, 10]));
        patterns.insert("major_pentatonic".to_string(), ScalePattern(vec![0, 2, 4, 7, 9]));
        patterns.insert("minor_pentatonic".to_string(), ScalePattern(vec![0, 3, 5, 7, 10]));
        Self(patterns)
    }
}

/// The pitch class each string sounds when played open. Index 0 holds
/// string 1 (the highest-pitched string).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tuning(pub Vec<PitchClass>);

impl Tuning {
    pub fn num_strings(&self) -> u8 {
        self.0.len() as u8
    }

    /// Open pitch class of a 1-indexed string.
    pub fn open_note(&self, string: u8) -> Result<PitchClass, FretboardError> {
        if string == 0 || string > self.num_strings() {
            return Err(FretboardError::PositionOutOfRange { string, fret: 0 });
        }
        Ok(self.0[(string - 1) as usize])
    }
}

impl Default for Tuning {
    /// Standard 6-string tuning, high E to low E: E B G D A E.
    fn default() -> Self {
        Self(vec![4, 11, 7, 2, 9, 4])
    }
}

/// Full instrument description: physical layout, tuning, and the scale
/// library. Deserializable from YAML so alternate instruments need no code
/// changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FretboardConfig {
    pub layout: FretboardLayout,
    pub tuning: Tuning,
    pub scales: ScaleLibrary,
}

impl Default for FretboardConfig {
    fn default() -> Self {
        Self {
            layout: FretboardLayout::default(),
            tuning: Tuning::default(),
            scales: ScaleLibrary::default(),
        }
    }
}

impl FretboardConfig {
    /// Check structural invariants that deserialization cannot enforce:
    /// at least one string, one edge per string, pitch classes in range,
    /// and a usable fret count.
    pub fn validate(&self) -> Result<(), FretboardError> {
        if self.tuning.0.is_empty() {
            return Err(FretboardError::ConfigError(
                "tuning must define at least one string".to_string(),
            ));
        }
        if let Some(&pc) = self.tuning.0.iter().find(|&&pc| pc >= SEMITONES) {
            return Err(FretboardError::ConfigError(format!(
                "tuning pitch class {} is out of range (expected 0-11)",
                pc
            )));
        }
        if self.layout.string_edges.len() != self.tuning.0.len() {
            return Err(FretboardError::ConfigError(format!(
                "layout has {} string edges but tuning has {} strings",
                self.layout.string_edges.len(),
                self.tuning.0.len()
            )));
        }
        if self.layout.num_frets == 0 {
            return Err(FretboardError::ConfigError(
                "num_frets must be at least 1".to_string(),
            ));
        }
        if !(self.layout.scale_length > 0.0) {
            return Err(FretboardError::ConfigError(format!(
                "scale_length must be positive, got {}",
                self.layout.scale_length
            )));
        }
        for (name, pattern) in &self.scales.0 {
            if let Some(&pc) = pattern.0.iter().find(|&&pc| pc >= SEMITONES) {
                return Err(FretboardError::ConfigError(format!(
                    "scale '{}' contains offset {} out of range (expected 0-11)",
                    name, pc
                )));
            }
        }
        Ok(())
    }
}
