use crate::aggregate::Orientation;
use crate::formatting::BoxChars;
use crate::shot::InvalidRecordPolicy;
use crate::stats::DEFAULT_PITCH_LENGTH_METERS;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;
use xdg::BaseDirectories;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
    pub log_file: String,
    pub data_dir: String,
    pub invalid_records: InvalidRecordPolicy,
    pub orientation: Orientation,
    pub pitch_length_meters: f64,
    pub use_unicode: bool,
    pub style: StyleConfig,
}

/// Colours handed to the renderer
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct StyleConfig {
    #[serde(deserialize_with = "deserialize_color")]
    pub background: Rgb,
    #[serde(deserialize_with = "deserialize_color")]
    pub main: Rgb,
    #[serde(deserialize_with = "deserialize_color")]
    pub accent: Rgb,
    /// Shade ramp for zone fills, lightest first
    #[serde(deserialize_with = "deserialize_color_list")]
    pub zone_ramp: Vec<Rgb>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "info".to_string(),
            log_file: "/dev/null".to_string(),
            data_dir: "./data".to_string(),
            invalid_records: InvalidRecordPolicy::Abort,
            orientation: Orientation::Vertical,
            pitch_length_meters: DEFAULT_PITCH_LENGTH_METERS,
            use_unicode: true,
            style: StyleConfig::default(),
        }
    }
}

impl Config {
    pub fn box_chars(&self) -> BoxChars {
        BoxChars::from_use_unicode(self.use_unicode)
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        StyleConfig {
            background: Rgb(0x0c, 0x0a, 0x09),
            main: Rgb(0xe5, 0xe7, 0xeb),
            accent: Rgb(0xc0, 0x84, 0xfc),
            zone_ramp: vec![
                Rgb(0x93, 0x33, 0xea),
                Rgb(0x7e, 0x22, 0xce),
                Rgb(0x6b, 0x21, 0xa8),
                Rgb(0x58, 0x1c, 0x87),
                Rgb(0x3b, 0x07, 0x64),
            ],
        }
    }
}

impl StyleConfig {
    /// Colour at `fraction` (0.0–1.0) along the zone ramp, interpolated
    pub fn ramp_color(&self, fraction: f64) -> Rgb {
        match self.zone_ramp.len() {
            0 => self.accent,
            1 => self.zone_ramp[0],
            n => {
                let position = fraction.clamp(0.0, 1.0) * (n - 1) as f64;
                let lower = position.floor() as usize;
                let upper = (lower + 1).min(n - 1);
                self.zone_ramp[lower].mix(self.zone_ramp[upper], position - lower as f64)
            }
        }
    }
}

/// 24-bit colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Linear blend towards `other`; `t = 0.0` keeps `self`
    pub fn mix(self, other: Rgb, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Rgb(lerp(self.0, other.0), lerp(self.1, other.1), lerp(self.2, other.2))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl Serialize for Rgb {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

/// Deserialize a color from a string (supports named colors, RGB hex, or RGB tuple)
fn deserialize_color<'de, D>(deserializer: D) -> Result<Rgb, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_color(&s).ok_or_else(|| serde::de::Error::custom(format!("Invalid color: {}", s)))
}

fn deserialize_color_list<'de, D>(deserializer: D) -> Result<Vec<Rgb>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let values: Vec<String> = Vec::deserialize(deserializer)?;
    values
        .iter()
        .map(|s| parse_color(s).ok_or_else(|| serde::de::Error::custom(format!("Invalid color: {}", s))))
        .collect()
}

/// Parse a color string
/// Supports:
/// - Named colors: "black", "white", "purple", "orange", ...
/// - Hex colors: "#9333ea", "#93e"
/// - RGB tuples: "147,51,234"
fn parse_color(s: &str) -> Option<Rgb> {
    let s = s.trim().to_lowercase();

    match s.as_str() {
        "black" => return Some(Rgb(0, 0, 0)),
        "white" => return Some(Rgb(255, 255, 255)),
        "red" => return Some(Rgb(255, 0, 0)),
        "green" => return Some(Rgb(0, 128, 0)),
        "blue" => return Some(Rgb(0, 0, 255)),
        "purple" => return Some(Rgb(128, 0, 128)),
        "orange" => return Some(Rgb(255, 165, 0)),
        "gray" | "grey" => return Some(Rgb(128, 128, 128)),
        _ => {}
    }

    if let Some(hex) = s.strip_prefix('#') {
        if hex.len() == 6 {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            return Some(Rgb(r, g, b));
        } else if hex.len() == 3 {
            let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()?;
            return Some(Rgb(r, g, b));
        }
    }

    if s.contains(',') {
        let parts: Vec<&str> = s.split(',').collect();
        if parts.len() == 3 {
            let r = parts[0].trim().parse::<u8>().ok()?;
            let g = parts[1].trim().parse::<u8>().ok()?;
            let b = parts[2].trim().parse::<u8>().ok()?;
            return Some(Rgb(r, g, b));
        }
    }

    None
}

pub fn get_config_path() -> Option<PathBuf> {
    let pgm = env!("CARGO_PKG_NAME");
    let xdg_dirs = BaseDirectories::with_prefix(pgm);
    let config_home = xdg_dirs.get_config_home()?;
    Some(config_home.join("config.toml"))
}

pub fn read() -> Config {
    let config_path = match get_config_path() {
        Some(path) => path,
        None => return Config::default(),
    };

    if !config_path.exists() {
        return Config::default();
    }

    let content = match fs::read_to_string(&config_path) {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!("Failed to read {}: {}", config_path.display(), e);
            return Config::default();
        }
    };

    toml::from_str(&content).unwrap_or_else(|e| {
        tracing::warn!("Ignoring malformed config {}: {}", config_path.display(), e);
        Config::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color_named() {
        assert_eq!(parse_color("black"), Some(Rgb(0, 0, 0)));
        assert_eq!(parse_color("orange"), Some(Rgb(255, 165, 0)));
        assert_eq!(parse_color("WHITE"), Some(Rgb(255, 255, 255)));
    }

    #[test]
    fn test_parse_color_hex() {
        assert_eq!(parse_color("#9333ea"), Some(Rgb(0x93, 0x33, 0xea)));
        assert_eq!(parse_color("#9333EA"), Some(Rgb(0x93, 0x33, 0xea)));
        assert_eq!(parse_color("#f60"), Some(Rgb(255, 102, 0)));
    }

    #[test]
    fn test_parse_color_rgb_tuple() {
        assert_eq!(parse_color("12, 10, 9"), Some(Rgb(12, 10, 9)));
    }

    #[test]
    fn test_parse_color_invalid() {
        assert_eq!(parse_color("mauve-ish"), None);
        assert_eq!(parse_color("#GGGGGG"), None);
        assert_eq!(parse_color("256,0,0"), None);
    }

    #[test]
    fn test_rgb_display_is_hex() {
        assert_eq!(Rgb(0x0c, 0x0a, 0x09).to_string(), "#0c0a09");
    }

    #[test]
    fn test_ramp_endpoints() {
        let style = StyleConfig::default();
        assert_eq!(style.ramp_color(0.0), Rgb(0x93, 0x33, 0xea));
        assert_eq!(style.ramp_color(1.0), Rgb(0x3b, 0x07, 0x64));
        assert_eq!(style.ramp_color(0.25), Rgb(0x7e, 0x22, 0xce));
    }

    #[test]
    fn test_empty_ramp_falls_back_to_accent() {
        let style = StyleConfig {
            zone_ramp: vec![],
            ..Default::default()
        };
        assert_eq!(style.ramp_color(0.5), style.accent);
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.invalid_records, InvalidRecordPolicy::Abort);
        assert_eq!(config.orientation, Orientation::Vertical);
        assert_eq!(config.pitch_length_meters, 105.0);
    }

    #[test]
    fn test_config_from_toml() {
        let toml_str = r##"
log_level = "debug"
data_dir = "/tmp/shots"
invalid_records = "skip"
orientation = "horizontal"
pitch_length_meters = 100.0

[style]
accent = "#00ffff"
zone_ramp = ["white", "0,0,0"]
        "##;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.data_dir, "/tmp/shots");
        assert_eq!(config.invalid_records, InvalidRecordPolicy::Skip);
        assert_eq!(config.orientation, Orientation::Horizontal);
        assert_eq!(config.style.accent, Rgb(0, 255, 255));
        assert_eq!(config.style.zone_ramp, vec![Rgb(255, 255, 255), Rgb(0, 0, 0)]);
        // Unset keys keep their defaults
        assert_eq!(config.style.background, Rgb(0x0c, 0x0a, 0x09));
        assert_eq!(config.log_file, "/dev/null");
    }

    #[test]
    fn test_config_rejects_bad_color() {
        let toml_str = r#"
[style]
main = "not-a-colour"
        "#;
        assert!(toml::from_str::<Config>(toml_str).is_err());
    }
}
