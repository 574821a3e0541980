//! Face export — slice the atlas into one PNG per court card.

use deck_core::AtlasCell;
use deck_raster::FaceAtlas;
use std::path::{Path, PathBuf};

use crate::error::DeckError;

/// Write the twelve atlas cells at native resolution as
/// `{suit}-{jack|queen|king}.png` into `dir` (created if absent).
pub fn export_faces(atlas: &FaceAtlas, dir: &Path) -> Result<Vec<PathBuf>, DeckError> {
    std::fs::create_dir_all(dir).map_err(|source| DeckError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::with_capacity(12);
    for (suit, face, cell) in AtlasCell::all() {
        let path = dir.join(format!("{}-{}.png", suit.name(), face.name()));
        atlas.crop(cell).save(&path).map_err(|source| DeckError::Encode {
            path: path.clone(),
            source,
        })?;
        log::debug!("export_faces: wrote {}", path.display());
        written.push(path);
    }

    log::info!("Exported {} face images to {}", written.len(), dir.display());
    Ok(written)
}

/// Open the atlas at `atlas_path` and export its faces.
pub fn export_faces_from(atlas_path: &Path, dir: &Path) -> Result<Vec<PathBuf>, DeckError> {
    let atlas = FaceAtlas::open(atlas_path).map_err(|source| DeckError::Atlas {
        path: atlas_path.to_path_buf(),
        source,
    })?;
    export_faces(&atlas, dir)
}

// ===================================================================
// Tests
// ===================================================================
