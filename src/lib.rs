pub mod error;
pub mod geometry;
pub mod layout;
pub mod model;
pub mod scale;

pub use error::FretboardError;
pub use geometry::{fret_placements, marker_positions, project_frets, FRET_RATIO};
pub use layout::{FretboardLayout, Marker, ScaleMap};
pub use model::{
    Coordinate2D, FretboardConfig, Key, PitchClass, Position, ScaleLibrary, ScalePattern,
    StringEdge, Tuning,
};
pub use scale::{enumerate_positions, get_note, transpose_scale};

/// Map a key and scale onto an instrument.
/// This is the main entry point for the library.
///
/// Parses the key name, looks up the scale pattern, transposes it, and pairs
/// every matching (string, fret) position with its marker coordinate on the
/// configured layout.
///
/// # Example
/// ```rust
/// use fretboard::{map_scale, FretboardConfig};
///
/// let config = FretboardConfig::default();
/// let map = map_scale("A", "mixolydian", &config)?;
/// assert_eq!(map.positions.len(), map.markers.len());
/// # Ok::<(), fretboard::FretboardError>(())
/// ```
///
/// # Errors
/// Returns [`FretboardError`] for an unknown key or scale name, an invalid
/// configuration, or degenerate layout geometry.
pub fn map_scale(
    key_name: &str,
    scale_name: &str,
    config: &FretboardConfig,
) -> Result<ScaleMap, FretboardError> {
    config.validate()?;

    let key = Key::from_name(key_name)?;
    let pattern = config.scales.get(scale_name)?;
    let pitch_classes = transpose_scale(key, pattern);

    let positions = enumerate_positions(&pitch_classes, &config.tuning, config.layout.num_frets);
    let grid = config.layout.marker_grid()?;

    let markers = positions
        .iter()
        .map(|&position| {
            let coords = config.layout.coordinate_at(&grid, position)?;
            Ok(Marker { position, coords })
        })
        .collect::<Result<Vec<Marker>, FretboardError>>()?;

    Ok(ScaleMap {
        pitch_classes,
        positions,
        markers,
    })
}
