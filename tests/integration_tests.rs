//! Integration tests for the fretboard library
//!
//! Tests the full pipeline from key/scale names to rendered marker
//! coordinates over the default instrument.

use fretboard::{map_scale, FretboardConfig, FretboardError, Position};

#[test]
fn test_c_major_end_to_end() {
    let config = FretboardConfig::default();
    let map = map_scale("C", "major", &config).unwrap();

    assert_eq!(map.pitch_classes, vec![0, 2, 4, 5, 7, 9, 11]);
    assert_eq!(map.positions.len(), map.markers.len());

    // F on the high E string is in C major; F# is not.
    assert!(map.positions.contains(&Position::new(1, 1)));
    assert!(!map.positions.contains(&Position::new(1, 2)));

    // Frets 0-11 contribute the 7 scale degrees once; frets 12-21 repeat the
    // first 10 chromatic steps, 6 of which are degrees for every standard
    // open note. 13 per string.
    for string in 1..=6 {
        let per_string = map.positions.iter().filter(|p| p.string == string).count();
        assert_eq!(per_string, 13, "string {}", string);
    }
}

#[test]
fn test_markers_are_parallel_to_positions() {
    let config = FretboardConfig::default();
    let map = map_scale("C", "major", &config).unwrap();
    for (position, marker) in map.positions.iter().zip(&map.markers) {
        assert_eq!(*position, marker.position);
    }
}

#[test]
fn test_open_string_marker_sits_on_the_nut() {
    let config = FretboardConfig::default();
    // E major keeps the high E string's open note in the scale.
    let map = map_scale("E", "major", &config).unwrap();
    let open = map
        .markers
        .iter()
        .find(|m| m.position == Position::new(1, 0))
        .expect("open high E should be in E major");
    assert_eq!(open.coords, config.layout.string_edges[0].nut);
}

#[test]
fn test_a_mixolydian_end_to_end() {
    let config = FretboardConfig::default();
    let map = map_scale("A", "mixolydian", &config).unwrap();

    assert_eq!(map.pitch_classes, vec![9, 11, 1, 2, 4, 6, 7]);
    // Open B string (pitch class 11) is a member.
    assert!(map.positions.contains(&Position::new(2, 0)));
}

#[test]
fn test_unknown_key_is_rejected() {
    let config = FretboardConfig::default();
    let err = map_scale("Cb", "major", &config).unwrap_err();
    assert!(matches!(err, FretboardError::UnknownKey(_)));
}

#[test]
fn test_unknown_scale_is_rejected() {
    let config = FretboardConfig::default();
    let err = map_scale("C", "locrian", &config).unwrap_err();
    assert!(matches!(err, FretboardError::UnknownScale(_)));
}

#[test]
fn test_invalid_config_is_rejected_before_computing() {
    let mut config = FretboardConfig::default();
    config.layout.num_frets = 0;
    let err = map_scale("C", "major", &config).unwrap_err();
    assert!(matches!(err, FretboardError::ConfigError(_)));
}

#[test]
fn test_config_yaml_round_trip() {
    let config = FretboardConfig::default();
    let yaml = serde_yaml::to_string(&config).unwrap();
    let parsed: FretboardConfig = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_partial_yaml_config_uses_defaults() {
    // A config that only overrides the tuning keeps the default layout and
    // scale library.
    let yaml = "tuning: [4, 11, 7, 2, 9, 4]\n";
    let parsed: FretboardConfig = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(parsed, FretboardConfig::default());
}

#[test]
fn test_alternate_tuning_changes_membership() {
    // Drop D: lower the 6th string from E (4) to D (2).
    let mut config = FretboardConfig::default();
    config.tuning.0[5] = 2;
    let map = map_scale("C", "major", &config).unwrap();
    // Open D and fret 2 (E) are in C major; fret 1 (Eb) is not.
    assert!(map.positions.contains(&Position::new(6, 0)));
    assert!(map.positions.contains(&Position::new(6, 2)));
    assert!(!map.positions.contains(&Position::new(6, 1)));
}

#[test]
fn test_custom_scale_from_config() {
    let mut config = FretboardConfig::default();
    config.scales.0.insert(
        "whole_tone".to_string(),
        fretboard::ScalePattern(vec![0, 2, 4, 6, 8, 10]),
    );
    let map = map_scale("C", "whole_tone", &config).unwrap();
    assert_eq!(map.pitch_classes, vec![0, 2, 4, 6, 8, 10]);
    // On the high E string only even-offset frets from E (4) are members.
    assert!(map.positions.contains(&Position::new(1, 0)));
    assert!(!map.positions.contains(&Position::new(1, 1)));
    assert!(map.positions.contains(&Position::new(1, 2)));
}

#[test]
fn test_fret_count_is_a_parameter() {
    let mut config = FretboardConfig::default();
    config.layout.num_frets = 12;
    let map = map_scale("C", "major", &config).unwrap();
    assert!(map.positions.iter().all(|p| p.fret <= 12));
    // Fret 12 repeats the open note, so it is a member wherever fret 0 is.
    assert!(map.positions.contains(&Position::new(1, 12)));
}

#[test]
fn test_scale_map_serializes_to_yaml() {
    let config = FretboardConfig::default();
    let map = map_scale("G", "major_pentatonic", &config).unwrap();
    let yaml = serde_yaml::to_string(&map).unwrap();
    assert!(yaml.contains("positions"));
    assert!(yaml.contains("markers"));
    assert!(yaml.contains("pitch_classes"));
}
