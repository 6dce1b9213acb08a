//! Config files feeding a live surface.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use tempfile::TempDir;

use reveal_config::{ConfigError, RevealConfig};
use reveal_engine::{Rect, RevealState, RevealSurface};
use reveal_types::{DEFAULT_TRANSITION, Rgb};

fn write_config(contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, contents).unwrap();
    (dir, path)
}

#[test]
fn config_file_drives_surface() {
    let (_dir, path) = write_config(
        r##"
        [palette]
        primary_start = "#102030"

        [strings]
        swipe = "Pull for archive"

        [animation]
        duration_ms = 40
        reduced_motion = true
        "##,
    );
    let config = RevealConfig::load_from(&path).unwrap();
    let mut surface = RevealSurface::new(Rect::new(0.0, 0.0, 100.0, 100.0), config.theme());
    surface.set_reduced_motion(config.reduced_motion());

    assert_eq!(surface.label().text(), "Pull for archive");
    assert_eq!(surface.theme().transition, Duration::from_millis(40));
    assert_eq!(surface.primary().indicator().tint(), Rgb::new(0x10, 0x20, 0x30));
    assert_eq!(surface.secondary().indicator().tint(), Rgb::new(173, 181, 190));

    surface.apply(RevealState::Expanding);
    assert!(!surface.advance(Duration::ZERO));
    assert_eq!(surface.label().text(), "Release for archive");
}

#[test]
fn missing_sections_keep_defaults() {
    let (_dir, path) = write_config("[app]\nascii_only = true\n");
    let config = RevealConfig::load_from(&path).unwrap();
    assert!(config.ascii_only());
    assert!(!config.reduced_motion());
    assert_eq!(config.theme().transition, DEFAULT_TRANSITION);
}

#[test]
fn bad_color_names_the_value() {
    let (_dir, path) = write_config("[palette]\nbadge = \"#GG0000\"\n");
    match RevealConfig::load_from(&path) {
        Err(ConfigError::Parse { path: reported, source }) => {
            assert_eq!(reported, path);
            assert!(source.to_string().contains("#GG0000"), "{source}");
        }
        other => panic!("expected a parse error, got {other:?}"),
    }
}

#[test]
fn unreadable_path_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = RevealConfig::load_from(dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
    assert!(err.to_string().contains("failed to read config"));
}
