//! Environment overrides for the `deck-gen` binary.
//!
//! | variable               | effect                              |
//! |------------------------|-------------------------------------|
//! | `DECK_CONFIG`          | JSON config file to start from      |
//! | `DECK_OUTPUT_DIR`      | replaces `output_dir`               |
//! | `DECK_ATLAS`           | replaces `atlas_path`               |
//! | `DECK_FACE_EXPORT_DIR` | replaces `face_export_dir`          |

use deck_core::DeckConfig;
use std::path::{Path, PathBuf};

use crate::error::DeckError;

pub const CONFIG_VAR: &str = "DECK_CONFIG";
pub const OUTPUT_DIR_VAR: &str = "DECK_OUTPUT_DIR";
pub const ATLAS_VAR: &str = "DECK_ATLAS";
pub const FACE_EXPORT_DIR_VAR: &str = "DECK_FACE_EXPORT_DIR";

/// Config from the process environment.
pub fn config_from_env() -> Result<DeckConfig, DeckError> {
    config_from_lookup(|key| std::env::var(key).ok())
}

/// Config from an arbitrary variable lookup. Empty values count as unset.
pub fn config_from_lookup(
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<DeckConfig, DeckError> {
    let get = |key: &str| lookup(key).filter(|value| !value.is_empty());

    let mut config = match get(CONFIG_VAR) {
        Some(path) => DeckConfig::load(Path::new(&path))?,
        None => DeckConfig::default(),
    };
    if let Some(dir) = get(OUTPUT_DIR_VAR) {
        config.output_dir = PathBuf::from(dir);
    }
    if let Some(atlas) = get(ATLAS_VAR) {
        config.atlas_path = Some(PathBuf::from(atlas));
    }
    if let Some(dir) = get(FACE_EXPORT_DIR_VAR) {
        config.face_export_dir = Some(PathBuf::from(dir));
    }
    Ok(config)
}

// ===================================================================
// Tests
// ===================================================================
