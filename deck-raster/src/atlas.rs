//! Face-card atlas — crop a grid cell and fit it into a target box.

use deck_core::AtlasCell;
use image::{imageops, imageops::FilterType, ImageResult, RgbaImage};
use std::path::Path;

/// Decoded face artwork sheet (3 columns × 4 rows).
#[derive(Clone, Debug)]
pub struct FaceAtlas {
    image: RgbaImage,
}

impl FaceAtlas {
    /// Decode an atlas image from disk.
    pub fn open(path: &Path) -> ImageResult<Self> {
        let image = image::open(path)?.to_rgba8();
        log::info!(
            "FaceAtlas: loaded {} ({}×{})",
            path.display(),
            image.width(),
            image.height()
        );
        Ok(Self { image })
    }

    pub fn from_image(image: RgbaImage) -> Self {
        Self { image }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Cell contents at native resolution.
    pub fn crop(&self, cell: AtlasCell) -> RgbaImage {
        let (w, h) = self.dimensions();
        let rect = cell.source_rect(w, h);
        let x = rect.x.round() as u32;
        let y = rect.y.round() as u32;
        let right = (rect.right().round() as u32).min(w);
        let bottom = (rect.bottom().round() as u32).min(h);
        imageops::crop_imm(
            &self.image,
            x,
            y,
            right.saturating_sub(x),
            bottom.saturating_sub(y),
        )
        .to_image()
    }

    /// Cell contents scaled (Lanczos3) to the largest size that fits in
    /// `max_width × max_height` without changing the aspect ratio.
    pub fn fit(&self, cell: AtlasCell, max_width: u32, max_height: u32) -> RgbaImage {
        let face = self.crop(cell);
        let (fw, fh) = fit_dimensions(face.dimensions(), (max_width, max_height));
        imageops::resize(&face, fw, fh, FilterType::Lanczos3)
    }
}

/// Largest `(w, h)` with the source's aspect ratio inside `bounds`.
pub fn fit_dimensions(source: (u32, u32), bounds: (u32, u32)) -> (u32, u32) {
    let (sw, sh) = (source.0.max(1) as f32, source.1.max(1) as f32);
    let scale = (bounds.0 as f32 / sw).min(bounds.1 as f32 / sh);
    let w = ((sw * scale).round() as u32).clamp(1, bounds.0.max(1));
    let h = ((sh * scale).round() as u32).clamp(1, bounds.1.max(1));
    (w, h)
}

// ===================================================================
// Tests
// ===================================================================
