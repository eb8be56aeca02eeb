//! Board options, read from a TOML file. Every key is optional.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use stats::{DurationFormat, Palette, Resolution};

/// Pie charts show this many slices, the last one being the "Others" bucket.
pub const DEFAULT_VISIBLE_CATEGORIES: usize = 5;
pub const UNKNOWN_LABEL: &str = "Unknown";
pub const OTHERS_LABEL: &str = "Others";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct BoardConfig {
    pub visible_categories: usize,
    /// Forces a resolution instead of picking one from the series length.
    pub resolution: Option<Resolution>,
    /// Substituted for missing organization names.
    pub unknown_label: String,
    pub others_label: String,
    pub palette: Palette,
    pub duration: DurationFormat,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            visible_categories: DEFAULT_VISIBLE_CATEGORIES,
            resolution: None,
            unknown_label: UNKNOWN_LABEL.to_owned(),
            others_label: OTHERS_LABEL.to_owned(),
            palette: Palette::default(),
            duration: DurationFormat::default(),
        }
    }
}

/// Loads the board config. Returns `BoardConfig::default()` if the file
/// doesn't exist; propagates other I/O and parse errors.
pub fn load(path: &Path) -> io::Result<BoardConfig> {
    match fs::read_to_string(path) {
        Ok(content) => parse(&content),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(BoardConfig::default()),
        Err(e) => Err(e),
    }
}

pub fn parse(content: &str) -> io::Result<BoardConfig> {
    toml::from_str(content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Renders a config back to TOML, e.g. to show the effective settings.
pub fn to_toml(config: &BoardConfig) -> io::Result<String> {
    toml::to_string_pretty(config).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use stats::DurationUnit;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, BoardConfig::default());
    }

    #[test]
    fn reads_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("statsboard.toml");
        fs::write(
            &path,
            indoc! {r##"
                visible_categories = 7
                resolution = "month"

                [duration]
                shorten = true
                largest_unit = "hour"

                [palette]
                colors = ["#111111", "#222222"]
            "##},
        )
        .unwrap();

        let config = load(&path).unwrap();
        assert_eq!(config.visible_categories, 7);
        assert_eq!(config.resolution, Some(Resolution::Month));
        assert!(config.duration.shorten);
        assert_eq!(config.duration.largest_unit, DurationUnit::Hour);
        assert_eq!(config.duration.stop, 2);
        assert_eq!(config.palette.colors.len(), 2);
        assert_eq!(config.palette.fallback, "#808080");
        assert_eq!(config.others_label, OTHERS_LABEL);
    }

    #[test]
    fn invalid_toml_is_invalid_data() {
        let err = parse("visible_categories = \"five\"").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn rendered_config_parses_back() {
        let config = BoardConfig {
            resolution: Some(Resolution::Year),
            ..Default::default()
        };
        let rendered = to_toml(&config).unwrap();
        assert_eq!(parse(&rendered).unwrap(), config);
    }
}
