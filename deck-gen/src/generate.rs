//! Deck generation — render all 52 cards and write them as PNG.
//!
//! ```text
//! generate_deck(config)
//!   ├── validate config, create output dir
//!   ├── RenderSession::new        (atlas load, font discovery)
//!   ├── for card in Card::all():  render_card → RGB PNG
//!   ├── export_faces              (if face_export_dir and atlas)
//!   └── GenerationReport { cards, faces, warnings }
//! ```

use deck_core::{Card, DeckConfig, MissingAsset};
use deck_layout::RenderSession;
use image::DynamicImage;
use std::path::{Path, PathBuf};

use crate::error::DeckError;
use crate::export::export_faces;

/// What a run produced.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GenerationReport {
    /// Card images, in `Card::all()` order.
    pub cards: Vec<PathBuf>,
    /// Exported face images, if face export ran.
    pub faces: Vec<PathBuf>,
    pub warnings: Vec<MissingAsset>,
}

impl GenerationReport {
    /// No asset fell back.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    /// One-line run summary. Warnings are counted, not repeated; each was
    /// logged by the component that raised it.
    pub fn summary(&self) -> String {
        format!(
            "{} cards, {} face exports, {} warning(s)",
            self.cards.len(),
            self.faces.len(),
            self.warnings.len()
        )
    }
}

/// Render the whole deck described by `config`.
pub fn generate_deck(config: &DeckConfig) -> Result<GenerationReport, DeckError> {
    config.validate()?;
    let mut session = RenderSession::new(config);
    let mut report = render_deck(&mut session, &config.output_dir)?;

    if let Some(dir) = &config.face_export_dir {
        match session.atlas() {
            Some(atlas) => report.faces = export_faces(atlas, dir)?,
            None => log::warn!("Face export to {} skipped: no atlas loaded", dir.display()),
        }
    }

    report.warnings.extend(session.take_warnings());
    log::info!(
        "Generated {} cards in {} ({} warning(s))",
        report.cards.len(),
        config.output_dir.display(),
        report.warnings.len()
    );
    Ok(report)
}

/// Render every card with an existing session into `dir`.
pub fn render_deck(session: &mut RenderSession, dir: &Path) -> Result<GenerationReport, DeckError> {
    std::fs::create_dir_all(dir).map_err(|source| DeckError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;
    session.prewarm()?;

    let mut report = GenerationReport::default();
    for card in Card::all() {
        let canvas = session.render_card(card)?;
        let path = dir.join(card.file_name());
        DynamicImage::ImageRgba8(canvas)
            .into_rgb8()
            .save(&path)
            .map_err(|source| DeckError::Encode {
                path: path.clone(),
                source,
            })?;
        log::debug!("Generated {}", path.display());
        report.cards.push(path);
    }
    report.warnings = session.take_warnings();
    Ok(report)
}

// ===================================================================
// Tests
// ===================================================================
