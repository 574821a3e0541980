//! Session configuration.
//!
//! Every field has a default matching the stock 400 × 560 deck, so a JSON
//! file only needs the keys it changes:
//!
//! ```json
//! { "output_dir": "out/cards", "atlas_path": "art/faces.png" }
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::card::Suit;
use crate::color::Color;
use crate::path::DEFAULT_CURVE_SAMPLES;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckConfig {
    /// Card canvas width in pixels.
    pub card_width: u32,
    /// Card canvas height in pixels.
    pub card_height: u32,
    pub background: Color,
    /// Ink for hearts and diamonds.
    pub red: Color,
    /// Ink for spades and clubs.
    pub black: Color,

    /// Height of the header band at the top of every card.
    pub header_height: u32,
    pub header_color: Color,
    /// Horizontal inset of the rank label and header glyph.
    pub header_padding: f32,
    /// Header glyph size as a fraction of the band height.
    pub header_suit_ratio: f32,
    pub header_font_size: f32,
    /// CSS-style fallback chain for the rank label.
    pub header_font_family: String,
    pub header_font_weight: u16,

    /// Gap between the header band and the content zone, and below the
    /// content zone.
    pub content_margin: u32,

    /// Pip size is `min(pip_width_ratio · W, pip_zone_ratio · zone_h)`.
    pub pip_width_ratio: f32,
    pub pip_zone_ratio: f32,
    /// Ace glyph size is `min(ace_width_ratio · W, ace_zone_ratio · zone_h)`.
    pub ace_width_ratio: f32,
    pub ace_zone_ratio: f32,
    /// Face art box is `face_width_ratio · W` by
    /// `min(face_zone_ratio · zone_h, face_height_ratio · H)`.
    pub face_width_ratio: f32,
    pub face_zone_ratio: f32,
    pub face_height_ratio: f32,
    pub face_border_width: u32,

    /// Line segments per cubic Bezier when flattening glyphs.
    pub curve_samples: usize,

    pub output_dir: PathBuf,
    /// Face-card atlas (3 × 4 grid). `None` renders court cards without art.
    pub atlas_path: Option<PathBuf>,
    /// When set, the atlas cells are also written out as standalone images.
    pub face_export_dir: Option<PathBuf>,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            card_width: 400,
            card_height: 560,
            background: Color::WHITE,
            red: Color::rgb(0xd3, 0x2f, 0x2f),
            black: Color::rgb(0x21, 0x21, 0x21),
            header_height: 170,
            header_color: Color::rgb(0xf5, 0xf5, 0xf5),
            header_padding: 24.0,
            header_suit_ratio: 0.6,
            header_font_size: 140.0,
            header_font_family: "Arial, Helvetica, sans-serif".to_string(),
            header_font_weight: 700,
            content_margin: 24,
            pip_width_ratio: 0.22,
            pip_zone_ratio: 0.25,
            ace_width_ratio: 0.58,
            ace_zone_ratio: 0.85,
            face_width_ratio: 0.7,
            face_zone_ratio: 0.9,
            face_height_ratio: 0.65,
            face_border_width: 2,
            curve_samples: DEFAULT_CURVE_SAMPLES,
            output_dir: PathBuf::from("public/cards"),
            atlas_path: None,
            face_export_dir: None,
        }
    }
}

impl DeckConfig {
    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded deck config from {}", path.display());
        Ok(config)
    }

    /// Ink used for a suit's glyphs, label and face border.
    pub fn ink(&self, suit: Suit) -> Color {
        if suit.is_red() {
            self.red
        } else {
            self.black
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.card_width == 0 || self.card_height == 0 {
            return Err(ConfigError::Invalid("card dimensions must be positive".into()));
        }
        if self.header_height + 2 * self.content_margin >= self.card_height {
            return Err(ConfigError::Invalid(format!(
                "header ({}) and margins ({}) leave no content zone in a {} px card",
                self.header_height, self.content_margin, self.card_height
            )));
        }
        if self.curve_samples == 0 {
            return Err(ConfigError::Invalid("curve_samples must be at least 1".into()));
        }
        Ok(())
    }
}

// ===================================================================
// Tests
// ===================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = DeckConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.card_width, 400);
        assert_eq!(config.card_height, 560);
        assert_eq!(config.curve_samples, 20);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = DeckConfig::from_json(r##"{ "card_width": 200, "red": "#ff0000" }"##).unwrap();
        assert_eq!(config.card_width, 200);
        assert_eq!(config.red, Color::rgb(255, 0, 0));
        assert_eq!(config.card_height, 560);
        assert_eq!(config.black, Color::rgb(0x21, 0x21, 0x21));
    }

    #[test]
    fn test_bad_color_rejected() {
        let err = DeckConfig::from_json(r#"{ "red": "crimson" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_header_too_tall_rejected() {
        let err = DeckConfig::from_json(r#"{ "card_height": 200 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_ink_by_suit() {
        let config = DeckConfig::default();
        assert_eq!(config.ink(Suit::Hearts), config.red);
        assert_eq!(config.ink(Suit::Diamonds), config.red);
        assert_eq!(config.ink(Suit::Spades), config.black);
        assert_eq!(config.ink(Suit::Clubs), config.black);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.json");
        std::fs::write(&path, r#"{ "output_dir": "out" }"#).unwrap();
        let config = DeckConfig::load(&path).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("out"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = DeckConfig::load(Path::new("/nonexistent/deck.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
