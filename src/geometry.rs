//! # Fretboard Geometry
//!
//! This module computes where frets and fingering markers sit on the
//! fingerboard.
//!
//! ## Pipeline
//! ```text
//! fret_placements(scale_length, num_frets)   1D distances from the nut
//!   -> project_frets(edge, placements)       2D coordinates along one string
//!   -> marker_positions(coords)              midpoints where fingers press
//! ```
//!
//! ## Fret Spacing
//! Equal temperament divides the octave into 12 steps of ratio 2^(1/12).
//! Luthiers approximate the resulting spacing with the "rule of 18" constant
//! 17.835: each fret sits 1/17.835 of the *remaining* string length past the
//! previous fret, so the spacing shrinks geometrically toward the bridge.
//!
//! ## Taper
//! Each string gets its own nut and bridge endpoint, and the placements are
//! interpolated along that string's own segment. Because the edges are not
//! parallel, fret lines across strings are not perfectly straight. That
//! models the physical fingerboard taper and is preserved per string, never
//! averaged across strings.
//!
//! ## Related Modules
//! - `model` - `Coordinate2D` and `StringEdge` types
//! - `layout` - Runs this pipeline over all configured strings

use crate::error::FretboardError;
use crate::model::{Coordinate2D, StringEdge};

/// The equal-tempered fret-spacing constant ("rule of 18").
pub const FRET_RATIO: f64 = 17.835;

/// Compute the distance of each fret from the nut along an idealized straight
/// string.
///
/// Returns exactly `num_frets + 1` values: index 0 is the nut (always 0.0)
/// and index `i` is fret `i`. The sequence is strictly increasing and shared
/// by every string of the instrument.
///
/// # Errors
/// Returns [`FretboardError::InvalidInput`] if `scale_length` is not a
/// positive finite number or `num_frets` is zero.
pub fn fret_placements(scale_length: f64, num_frets: usize) -> Result<Vec<f64>, FretboardError> {
    if !scale_length.is_finite() || scale_length <= 0.0 {
        return Err(FretboardError::InvalidInput(format!(
            "scale length must be positive, got {}",
            scale_length
        )));
    }
    if num_frets == 0 {
        return Err(FretboardError::InvalidInput(
            "fret count must be at least 1".to_string(),
        ));
    }

    let mut placements = Vec::with_capacity(num_frets + 1);
    let mut prev = 0.0;
    placements.push(prev);
    for _ in 0..num_frets {
        let bridge_to_prev = scale_length - prev;
        prev += bridge_to_prev / FRET_RATIO;
        placements.push(prev);
    }
    Ok(placements)
}

/// Project 1D fret placements onto one string's nut-to-bridge segment.
///
/// Each placement `p` maps to the point a fraction `p / last_placement` of
/// the way from `edge.nut` to `edge.bridge`. The output has the same length
/// and order as `placements`; the first coordinate equals `edge.nut` exactly
/// and the last equals `edge.bridge` exactly.
///
/// # Errors
/// Returns [`FretboardError::InvalidInput`] for an empty placement sequence
/// or one whose final value is not positive (the projection would divide by
/// zero).
pub fn project_frets(
    edge: &StringEdge,
    placements: &[f64],
) -> Result<Vec<Coordinate2D>, FretboardError> {
    let end_point = match placements.last() {
        Some(&last) if last > 0.0 && last.is_finite() => last,
        Some(&last) => {
            return Err(FretboardError::InvalidInput(format!(
                "final fret placement must be positive, got {}",
                last
            )))
        }
        None => {
            return Err(FretboardError::InvalidInput(
                "placement sequence is empty".to_string(),
            ))
        }
    };

    Ok(placements
        .iter()
        .map(|&p| {
            let segment_ratio = p / end_point;
            edge.nut.lerp(&edge.bridge, segment_ratio)
        })
        .collect())
}

/// Derive the visual marker position for each fret coordinate.
///
/// A fretted note is stopped between two fret wires, not on the wire, so
/// marker `i >= 1` is the midpoint of fret coordinates `i - 1` and `i`. The
/// open-string marker (index 0) stays at the nut. Output length equals input
/// length; an empty input yields an empty output.
pub fn marker_positions(coords: &[Coordinate2D]) -> Vec<Coordinate2D> {
    coords
        .iter()
        .enumerate()
        .map(|(i, coord)| {
            if i == 0 {
                *coord
            } else {
                coords[i - 1].midpoint(coord)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn edge(nx: f64, ny: f64, bx: f64, by: f64) -> StringEdge {
        StringEdge::new(Coordinate2D::new(nx, ny), Coordinate2D::new(bx, by))
    }

    #[test]
    fn test_placements_length_and_origin() {
        let placements = fret_placements(100.0, 21).unwrap();
        assert_eq!(placements.len(), 22);
        assert_eq!(placements[0], 0.0);
    }

    #[test]
    fn test_placements_strictly_increasing() {
        let placements = fret_placements(64.77, 21).unwrap();
        for window in placements.windows(2) {
            assert!(window[1] > window[0], "placements must strictly increase");
        }
    }

    #[test]
    fn test_first_fret_is_scale_length_over_ratio() {
        let placements = fret_placements(100.0, 1).unwrap();
        assert!((placements[1] - 100.0 / FRET_RATIO).abs() < EPSILON);
    }

    #[test]
    fn test_twelfth_fret_near_half_scale_length() {
        // The 17.835 rule approximates 2^(1/12); the octave fret lands very
        // close to half the string.
        let placements = fret_placements(100.0, 12).unwrap();
        assert!((placements[12] - 50.0).abs() < 0.05);
    }

    #[test]
    fn test_placements_reject_zero_frets() {
        assert!(matches!(
            fret_placements(100.0, 0),
            Err(FretboardError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_placements_reject_non_positive_scale_length() {
        assert!(fret_placements(0.0, 21).is_err());
        assert!(fret_placements(-64.0, 21).is_err());
        assert!(fret_placements(f64::NAN, 21).is_err());
    }

    #[test]
    fn test_projection_endpoints_exact() {
        let e = edge(3.8, 80.0, 96.4, 87.0);
        let placements = fret_placements(132.0, 21).unwrap();
        let coords = project_frets(&e, &placements).unwrap();
        assert_eq!(coords.len(), placements.len());
        assert_eq!(coords[0], e.nut);
        assert_eq!(*coords.last().unwrap(), e.bridge);
    }

    #[test]
    fn test_projection_is_per_string_taper() {
        // Two non-parallel edges must disagree on where fret 1 sits in y.
        let placements = fret_placements(132.0, 21).unwrap();
        let top = project_frets(&edge(3.8, 80.0, 96.4, 87.0), &placements).unwrap();
        let bottom = project_frets(&edge(3.8, 19.0, 96.4, 5.0), &placements).unwrap();
        assert!(top[1].y > top[0].y);
        assert!(bottom[1].y < bottom[0].y);
    }

    #[test]
    fn test_projection_preserves_order_along_x() {
        let e = edge(3.8, 55.5, 96.4, 55.0);
        let placements = fret_placements(132.0, 21).unwrap();
        let coords = project_frets(&e, &placements).unwrap();
        for window in coords.windows(2) {
            assert!(window[1].x > window[0].x);
        }
    }

    #[test]
    fn test_projection_rejects_empty_placements() {
        let e = edge(0.0, 0.0, 100.0, 0.0);
        assert!(project_frets(&e, &[]).is_err());
    }

    #[test]
    fn test_projection_rejects_zero_end_point() {
        let e = edge(0.0, 0.0, 100.0, 0.0);
        assert!(project_frets(&e, &[0.0]).is_err());
    }

    #[test]
    fn test_markers_open_position_unchanged() {
        let coords = vec![
            Coordinate2D::new(3.8, 80.0),
            Coordinate2D::new(9.0, 80.4),
            Coordinate2D::new(13.9, 80.8),
        ];
        let markers = marker_positions(&coords);
        assert_eq!(markers.len(), coords.len());
        assert_eq!(markers[0], coords[0]);
    }

    #[test]
    fn test_markers_are_exact_means() {
        let coords = vec![
            Coordinate2D::new(0.0, 0.0),
            Coordinate2D::new(10.0, 4.0),
            Coordinate2D::new(18.0, 7.0),
        ];
        let markers = marker_positions(&coords);
        for i in 1..coords.len() {
            let expected = coords[i - 1].midpoint(&coords[i]);
            assert_eq!(markers[i], expected);
            // Equidistant from both neighbors.
            let d_prev = markers[i].distance(&coords[i - 1]);
            let d_next = markers[i].distance(&coords[i]);
            assert!((d_prev - d_next).abs() < EPSILON);
        }
    }

    #[test]
    fn test_markers_empty_input() {
        assert!(marker_positions(&[]).is_empty());
    }
}
