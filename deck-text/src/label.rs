//! Label renderer — shapes a short string with `cosmic-text` and blends
//! the rasterized glyphs straight onto an RGBA canvas.
//!
//! Only single-line labels are needed (the header rank). The renderer
//! resolves the requested family chain with [`match_family`] once per
//! distinct request, warns on fallbacks, and skips drawing entirely when no
//! font is installed.
//!
//! ```text
//! draw_label(text, style)
//!   ├── resolve family      (fontdb query, cached per request)
//!   ├── Buffer::set_text    (shape)
//!   ├── swash get_image     (per glyph, Mask or Color content)
//!   └── overlay at (left, center_y − ink_height/2)
//! ```

use cosmic_text::{
    fontdb, Attrs, Buffer, Family, FontSystem, Metrics, Shaping, Style as CStyle, SwashCache,
    SwashContent, Weight,
};
use deck_core::{Color, MissingAsset};
use image::{imageops, Rgba, RgbaImage};
use rustc_hash::FxHashMap;

use crate::fonts::{match_family, MatchType};

// ── Label style ─────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct LabelStyle {
    /// CSS-style family chain, e.g. `"Arial, Helvetica, sans-serif"`.
    pub family: String,
    pub font_size: f32,
    /// 400 = regular, 700 = bold.
    pub weight: u16,
    pub color: Color,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            family: "sans-serif".into(),
            font_size: 16.0,
            weight: 400,
            color: Color::rgb(0, 0, 0),
        }
    }
}

/// Ink extent of a drawn label, in canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LabelBounds {
    pub left: i32,
    pub top: i32,
    pub width: u32,
    pub height: u32,
}

/// A rasterized glyph positioned relative to the pen origin.
struct GlyphBitmap {
    x: i32,
    y: i32,
    width: u32,
    height: u32,
    /// One coverage byte per pixel.
    coverage: Vec<u8>,
}

/// Resolved family for one requested chain. `None` when no font exists.
type Resolution = Option<String>;

// ── Renderer ────────────────────────────────────────────────────────

pub struct LabelRenderer {
    font_system: FontSystem,
    swash_cache: SwashCache,
    resolved: FxHashMap<(String, u16), Resolution>,
    warnings: Vec<MissingAsset>,
}

impl LabelRenderer {
    /// Renderer over the system fonts.
    pub fn new() -> Self {
        Self::with_font_system(FontSystem::new())
    }

    /// Renderer with an empty font database. Labels are skipped with a
    /// [`MissingAsset::NoFonts`] warning; useful for headless runs.
    pub fn without_fonts() -> Self {
        Self::with_font_system(FontSystem::new_with_locale_and_db(
            "en-US".into(),
            fontdb::Database::new(),
        ))
    }

    /// Renderer over a caller-provided font system.
    pub fn with_font_system(font_system: FontSystem) -> Self {
        Self {
            font_system,
            swash_cache: SwashCache::new(),
            resolved: FxHashMap::default(),
            warnings: Vec::new(),
        }
    }

    /// Whether any font face is installed.
    pub fn has_fonts(&self) -> bool {
        self.font_system.db().faces().next().is_some()
    }

    /// Asset warnings raised since the last call. Each distinct request
    /// warns at most once per renderer.
    pub fn take_warnings(&mut self) -> Vec<MissingAsset> {
        std::mem::take(&mut self.warnings)
    }

    /// Draw `text` with its pen origin at `left` and its ink box vertically
    /// centered on `center_y`. Returns the ink bounds, or `None` if nothing
    /// was drawn (empty text, whitespace only, or no fonts).
    pub fn draw_label(
        &mut self,
        canvas: &mut RgbaImage,
        text: &str,
        style: &LabelStyle,
        left: f32,
        center_y: f32,
    ) -> Option<LabelBounds> {
        let family = self.resolve(style)?;
        let glyphs = self.shape(text, style, &family);

        let top = glyphs.iter().map(|g| g.y).min()?;
        let bottom = glyphs.iter().map(|g| g.y + g.height as i32).max()?;
        let ink_left = glyphs.iter().map(|g| g.x).min()?;
        let ink_right = glyphs.iter().map(|g| g.x + g.width as i32).max()?;

        let height = (bottom - top) as f32;
        let origin_x = left as i32;
        let origin_y = (center_y - height / 2.0) as i32 - top;

        for glyph in &glyphs {
            blend_coverage(canvas, glyph, origin_x, origin_y, style.color);
        }

        Some(LabelBounds {
            left: origin_x + ink_left,
            top: origin_y + top,
            width: (ink_right - ink_left) as u32,
            height: (bottom - top) as u32,
        })
    }

    /// Family name to hand to cosmic-text for this style.
    fn resolve(&mut self, style: &LabelStyle) -> Option<String> {
        let key = (style.family.clone(), style.weight);
        if let Some(resolution) = self.resolved.get(&key) {
            return resolution.clone();
        }

        let found = match_family(self.font_system.db(), &style.family, style.weight);
        let resolution = match found {
            Some(found) => {
                if found.match_type == MatchType::Fallback {
                    let warning = MissingAsset::Font {
                        requested: style.family.clone(),
                        fallback: found.family.clone(),
                    };
                    log::warn!("{warning}");
                    self.warnings.push(warning);
                } else {
                    log::debug!(
                        "LabelRenderer: {:?} resolved to {} ({})",
                        style.family,
                        found.family,
                        found.postscript_name
                    );
                }
                Some(found.family)
            }
            None => {
                let warning = MissingAsset::NoFonts {
                    requested: style.family.clone(),
                };
                log::warn!("{warning}");
                self.warnings.push(warning);
                None
            }
        };

        self.resolved.insert(key, resolution.clone());
        resolution
    }

    /// Shape a single line and rasterize each glyph's coverage.
    fn shape(&mut self, text: &str, style: &LabelStyle, family: &str) -> Vec<GlyphBitmap> {
        let metrics = Metrics::new(style.font_size, style.font_size * 1.2);
        let attrs = Attrs::new()
            .family(Family::Name(family))
            .weight(Weight(style.weight))
            .style(CStyle::Normal);

        let mut buffer = Buffer::new(&mut self.font_system, metrics);
        buffer.set_size(&mut self.font_system, None, None);
        buffer.set_text(&mut self.font_system, text, attrs, Shaping::Advanced);
        buffer.shape_until_scroll(&mut self.font_system, false);

        let mut glyphs = Vec::new();
        for run in buffer.layout_runs() {
            for glyph in run.glyphs.iter() {
                let physical = glyph.physical((0.0, 0.0), 1.0);
                let Some(image) = self
                    .swash_cache
                    .get_image(&mut self.font_system, physical.cache_key)
                else {
                    continue; // whitespace or missing glyph
                };

                let (width, height) = (image.placement.width, image.placement.height);
                if width == 0 || height == 0 {
                    continue;
                }

                let coverage = match image.content {
                    SwashContent::Mask => image.data.clone(),
                    // Emoji-style glyphs: keep alpha only.
                    SwashContent::Color => image.data.chunks_exact(4).map(|px| px[3]).collect(),
                    SwashContent::SubpixelMask => image
                        .data
                        .chunks_exact(4)
                        .map(|px| ((px[0] as u16 + px[1] as u16 + px[2] as u16) / 3) as u8)
                        .collect(),
                };

                glyphs.push(GlyphBitmap {
                    x: physical.x + image.placement.left,
                    y: run.line_y as i32 + physical.y - image.placement.top,
                    width,
                    height,
                    coverage,
                });
            }
        }
        glyphs
    }
}

impl Default for LabelRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Source-over of one glyph's coverage in a flat color, clipped to the
/// canvas.
fn blend_coverage(
    canvas: &mut RgbaImage,
    glyph: &GlyphBitmap,
    origin_x: i32,
    origin_y: i32,
    color: Color,
) {
    let sprite = RgbaImage::from_fn(glyph.width, glyph.height, |x, y| {
        let index = (y * glyph.width + x) as usize;
        Rgba(color.with_alpha(glyph.coverage.get(index).copied().unwrap_or(0)))
    });
    let left = i64::from(origin_x) + i64::from(glyph.x);
    let top = i64::from(origin_y) + i64::from(glyph.y);
    imageops::overlay(canvas, &sprite, left, top);
}

// ===================================================================
// Tests
// ===================================================================
