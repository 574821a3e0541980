//! Opacity masks and the polygon rasterizer.
//!
//! Polygons are fitted into a square `size × size` buffer: scaled uniformly
//! against the viewbox's longer side and centered on both axes. Each ring
//! is filled independently at full opacity (even-odd within a ring, union
//! across rings), sampling pixel centres. No antialiasing.

use deck_core::{ParseError, Point, Polygon, SymbolId, ViewBox};
use image::{GrayImage, Luma};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RasterError {
    #[error("mask size must be positive, got {0}")]
    InvalidSize(i32),
    #[error("symbol {symbol} failed to parse: {source}")]
    Parse {
        symbol: SymbolId,
        #[source]
        source: ParseError,
    },
}

// ── Mask ────────────────────────────────────────────────────────────

/// Square single-channel opacity buffer. Immutable once built.
#[derive(Clone, Debug, PartialEq)]
pub struct Mask {
    image: GrayImage,
}

impl Mask {
    /// Side length in pixels.
    pub fn size(&self) -> u32 {
        self.image.width()
    }

    /// Row-major opacity bytes (`size * size`).
    pub fn pixels(&self) -> &[u8] {
        self.image.as_raw()
    }

    pub fn get(&self, x: u32, y: u32) -> u8 {
        self.image.get_pixel(x, y).0[0]
    }

    pub fn as_image(&self) -> &GrayImage {
        &self.image
    }

    /// Number of fully covered pixels.
    pub fn covered(&self) -> usize {
        self.pixels().iter().filter(|&&a| a == u8::MAX).count()
    }

    /// Inclusive column range that contains any coverage.
    pub fn column_extent(&self) -> Option<(u32, u32)> {
        let size = self.size();
        let covered = |x: u32| (0..size).any(|y| self.get(x, y) > 0);
        let first = (0..size).find(|&x| covered(x))?;
        let last = (0..size).rev().find(|&x| covered(x))?;
        Some((first, last))
    }
}

// ── Fit transform ───────────────────────────────────────────────────

/// Viewbox → mask pixel mapping: `offset + point * scale`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitTransform {
    pub scale: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

impl FitTransform {
    pub fn new(viewbox: ViewBox, size: u32) -> Self {
        let size = size as f32;
        let scale = size / viewbox.max_side();
        Self {
            scale,
            offset_x: (size - viewbox.width * scale) / 2.0,
            offset_y: (size - viewbox.height * scale) / 2.0,
        }
    }

    #[inline]
    pub fn apply(&self, p: Point) -> Point {
        Point::new(self.offset_x + p.x * self.scale, self.offset_y + p.y * self.scale)
    }
}

// ── Rasterizer ──────────────────────────────────────────────────────

/// Rasterize a symbol's rings into a `size × size` mask.
///
/// Rejects `size <= 0` with [`RasterError::InvalidSize`]; callers that
/// derive sizes from layout ratios clamp to 1 before calling.
pub fn rasterize(polygons: &[Polygon], viewbox: ViewBox, size: i32) -> Result<Mask, RasterError> {
    let side = checked_size(size)?;
    let transform = FitTransform::new(viewbox, side);
    let mut buffer = GrayImage::new(side, side);

    let mut ring: Vec<Point> = Vec::new();
    let mut crossings: Vec<f32> = Vec::new();
    for polygon in polygons {
        ring.clear();
        ring.extend(polygon.points().iter().map(|&p| transform.apply(p)));
        fill_ring(&mut buffer, &ring, &mut crossings);
    }

    Ok(Mask { image: buffer })
}

/// Validate a requested mask size.
pub(crate) fn checked_size(size: i32) -> Result<u32, RasterError> {
    u32::try_from(size)
        .ok()
        .filter(|&s| s > 0)
        .ok_or(RasterError::InvalidSize(size))
}

/// Scanline fill of one closed ring, sampling at pixel centres.
fn fill_ring(buffer: &mut GrayImage, ring: &[Point], crossings: &mut Vec<f32>) {
    if ring.len() < 3 {
        return; // No area.
    }
    let size = buffer.width() as i64;

    let (min_y, max_y) = ring
        .iter()
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), p| (lo.min(p.y), hi.max(p.y)));
    let row_start = ((min_y - 0.5).ceil() as i64).max(0);
    let row_end = ((max_y - 0.5).floor() as i64).min(size - 1);

    for row in row_start..=row_end {
        let sy = row as f32 + 0.5;
        crossings.clear();

        for (i, a) in ring.iter().enumerate() {
            let b = ring[(i + 1) % ring.len()];
            if (a.y <= sy) != (b.y <= sy) {
                crossings.push(a.x + (sy - a.y) * (b.x - a.x) / (b.y - a.y));
            }
        }
        crossings.sort_by(f32::total_cmp);

        for span in crossings.chunks_exact(2) {
            let col_start = ((span[0] - 0.5).ceil() as i64).max(0);
            let col_end = ((span[1] - 0.5).ceil() as i64).min(size);
            for col in col_start..col_end {
                buffer.put_pixel(col as u32, row as u32, Luma([u8::MAX]));
            }
        }
    }
}

// ===================================================================
// Tests
// ===================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use deck_core::{Path, SymbolLibrary, DEFAULT_CURVE_SAMPLES};

    const VIEWBOX: ViewBox = ViewBox::new(100.0, 130.0);

    fn rings(text: &str) -> Vec<Polygon> {
        Path::parse(text, VIEWBOX).unwrap().flatten(DEFAULT_CURVE_SAMPLES)
    }

    fn symbol_rings(id: SymbolId) -> Vec<Polygon> {
        SymbolLibrary::standard().parse(id).unwrap().flatten(DEFAULT_CURVE_SAMPLES)
    }

    #[test]
    fn test_mask_dimensions_match_size() {
        let polygons = symbol_rings(SymbolId::Club);
        for size in [1, 2, 17, 64, 93, 200] {
            let mask = rasterize(&polygons, VIEWBOX, size).unwrap();
            assert_eq!(mask.size(), size as u32);
            assert_eq!(mask.pixels().len(), (size * size) as usize);
        }
    }

    #[test]
    fn test_non_positive_size_rejected() {
        let polygons = symbol_rings(SymbolId::Heart);
        assert_eq!(rasterize(&polygons, VIEWBOX, 0), Err(RasterError::InvalidSize(0)));
        assert_eq!(rasterize(&polygons, VIEWBOX, -5), Err(RasterError::InvalidSize(-5)));
    }

    #[test]
    fn test_fit_transform_uses_longer_side() {
        let t = FitTransform::new(VIEWBOX, 200);
        assert!((t.scale - 200.0 / 130.0).abs() < 1e-6);
        assert!(t.offset_y.abs() < 1e-4);
        assert!((t.offset_x - (200.0 - 100.0 * t.scale) / 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_full_viewbox_rectangle() {
        // Scale 1 at size 130: the viewbox occupies columns 15..115.
        let polygons = rings("M0,0 L100,0 L100,130 L0,130 Z");
        let mask = rasterize(&polygons, VIEWBOX, 130).unwrap();
        assert_eq!(mask.column_extent(), Some((15, 114)));
        assert_eq!(mask.covered(), 100 * 130);
        assert_eq!(mask.get(14, 60), 0);
        assert_eq!(mask.get(15, 0), 255);
        assert_eq!(mask.get(114, 129), 255);
    }

    #[test]
    fn test_symbol_is_horizontally_centered() {
        for id in SymbolId::ALL {
            let mask = rasterize(&symbol_rings(id), VIEWBOX, 200).unwrap();
            let (first, last) = mask.column_extent().unwrap();
            let left = first as i64;
            let right = 199 - last as i64;
            assert!((left - right).abs() <= 1, "{id}: left {left}, right {right}");
        }
    }

    #[test]
    fn test_compound_rings_fill_same_buffer() {
        let both = rings("M0,0 L10,0 L10,10 L0,10 Z M50,50 L60,50 L60,60 L50,60 Z");
        let first = rings("M0,0 L10,0 L10,10 L0,10 Z");
        let a = rasterize(&both, VIEWBOX, 130).unwrap();
        let b = rasterize(&first, VIEWBOX, 130).unwrap();
        assert_eq!(a.covered(), 2 * b.covered());
    }

    #[test]
    fn test_diamond_center_covered_corners_empty() {
        let mask = rasterize(&symbol_rings(SymbolId::Diamond), VIEWBOX, 130).unwrap();
        assert_eq!(mask.get(65, 65), 255);
        assert_eq!(mask.get(0, 0), 0);
        assert_eq!(mask.get(129, 129), 0);
    }

    #[test]
    fn test_degenerate_ring_fills_nothing() {
        let polygons = rings("M10,10 L20,20 Z");
        let mask = rasterize(&polygons, VIEWBOX, 50).unwrap();
        assert_eq!(mask.covered(), 0);
    }

    #[test]
    fn test_rasterize_is_deterministic() {
        let polygons = symbol_rings(SymbolId::Spade);
        let a = rasterize(&polygons, VIEWBOX, 77).unwrap();
        let b = rasterize(&polygons, VIEWBOX, 77).unwrap();
        assert_eq!(a, b);
    }
}
