//! # Instrument Layout
//!
//! This module holds the physical description of the fingerboard and runs the
//! geometry pipeline over every configured string.
//!
//! ## Calibration Data
//! The six default string edges are calibration data tuned to look like a
//! tapered 6-string neck in the 0-100 percentage space; no physical model
//! generates them. The default scale length is twice the nut-to-12th-fret
//! reference distance of that same calibration.
//!
//! ## Output
//! `marker_grid()` produces one marker coordinate per (string, fret) cell;
//! `ScaleMap` pairs those coordinates with the positions the scale engine
//! selected, which is everything a renderer needs.
//!
//! ## Related Modules
//! - `geometry` - The per-string placement/projection/midpoint pipeline
//! - `scale` - Selects the positions a `ScaleMap` carries

use serde::{Deserialize, Serialize};

use crate::error::FretboardError;
use crate::geometry::{fret_placements, marker_positions, project_frets};
use crate::model::{Coordinate2D, PitchClass, Position, StringEdge};

/// Physical fingerboard description: one edge per string, the scale length,
/// and the number of frets. All fields are parameters; the defaults describe
/// the calibrated 21-fret 6-string instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FretboardLayout {
    pub string_edges: Vec<StringEdge>,
    pub scale_length: f64,
    pub num_frets: u8,
}

impl Default for FretboardLayout {
    fn default() -> Self {
        let edge = |ny: f64, by: f64| {
            StringEdge::new(Coordinate2D::new(3.8, ny), Coordinate2D::new(96.4, by))
        };
        // Scale length is twice the nut-to-12th-fret distance of the
        // calibrated artwork.
        let nut_ref = Coordinate2D::new(3.8, 11.0);
        let octave_ref = Coordinate2D::new(69.6, 5.0);
        Self {
            string_edges: vec![
                edge(80.0, 87.0),
                edge(67.0, 71.0),
                edge(55.5, 55.0),
                edge(43.0, 38.0),
                edge(32.0, 21.0),
                edge(19.0, 5.0),
            ],
            scale_length: 2.0 * nut_ref.distance(&octave_ref),
            num_frets: 21,
        }
    }
}

impl FretboardLayout {
    pub fn num_strings(&self) -> u8 {
        self.string_edges.len() as u8
    }

    /// Compute the marker coordinate for every (string, fret) cell.
    ///
    /// Placements are computed once (they are independent of string) and then
    /// projected along each string's own edge, so the taper of each string is
    /// preserved. `grid[s][f]` is the marker for 1-indexed string `s + 1` at
    /// fret `f`; each row has `num_frets + 1` entries.
    pub fn marker_grid(&self) -> Result<Vec<Vec<Coordinate2D>>, FretboardError> {
        let placements = fret_placements(self.scale_length, self.num_frets as usize)?;
        self.string_edges
            .iter()
            .map(|edge| {
                let coords = project_frets(edge, &placements)?;
                Ok(marker_positions(&coords))
            })
            .collect()
    }

    /// Range-checked lookup of a position's marker coordinate in a grid
    /// produced by [`marker_grid`](Self::marker_grid).
    pub fn coordinate_at(
        &self,
        grid: &[Vec<Coordinate2D>],
        position: Position,
    ) -> Result<Coordinate2D, FretboardError> {
        if position.string == 0
            || position.string > self.num_strings()
            || position.fret > self.num_frets
        {
            return Err(FretboardError::PositionOutOfRange {
                string: position.string,
                fret: position.fret,
            });
        }
        Ok(grid[(position.string - 1) as usize][position.fret as usize])
    }
}

/// One renderable marker: a scale position and where it sits on the board.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub position: Position,
    pub coords: Coordinate2D,
}

/// The full result of mapping a key and scale onto an instrument.
///
/// `positions` and `markers` are parallel: `markers[i].position` is
/// `positions[i]`, in string-major fret-minor order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleMap {
    /// Absolute pitch classes of the transposed scale, in pattern order.
    pub pitch_classes: Vec<PitchClass>,
    /// Every grid position whose note is in the scale.
    pub positions: Vec<Position>,
    /// The same positions paired with marker coordinates.
    pub markers: Vec<Marker>,
}
