//! Render session — executes layout plans onto RGBA canvases.
//!
//! A session owns every piece of per-run state: the mask cache, the label
//! renderer (font system + glyph cache), the decoded face atlas if any, and
//! the missing-asset warnings raised so far. Dropping the session drops the
//! caches.
//!
//! ```text
//! RenderSession
//!   ├── layout:  CardLayout      (metrics from DeckConfig)
//!   ├── masks:   MaskCache       (symbol, size) → Arc<Mask>
//!   ├── labels:  LabelRenderer   cosmic-text shaping
//!   ├── atlas:   Option<FaceAtlas>
//!   └── render_card(card) → RgbaImage
//! ```

use deck_core::{Card, Color, DeckConfig, MissingAsset, SymbolId, SymbolLibrary};
use deck_raster::{paste_at, place, FaceAtlas, MaskCache};
use deck_text::LabelRenderer;
use image::{Rgba, RgbaImage};
use std::path::PathBuf;

use crate::plan::{CardLayout, DrawOp, FaceBox, LayoutError, LayoutPlan};

pub struct RenderSession {
    layout: CardLayout,
    width: u32,
    height: u32,
    background: Color,
    masks: MaskCache,
    labels: LabelRenderer,
    atlas: Option<FaceAtlas>,
    warnings: Vec<MissingAsset>,
}

impl RenderSession {
    /// Session over the standard symbols, system fonts, and the atlas named
    /// in `config` (missing or unreadable atlas → warning, no face art).
    pub fn new(config: &DeckConfig) -> Self {
        let mut warnings = Vec::new();
        let atlas = match &config.atlas_path {
            Some(path) => match FaceAtlas::open(path) {
                Ok(atlas) => Some(atlas),
                Err(err) => {
                    warnings.push(MissingAsset::Atlas {
                        path: path.clone(),
                        reason: err.to_string(),
                    });
                    None
                }
            },
            None => {
                warnings.push(MissingAsset::Atlas {
                    path: PathBuf::new(),
                    reason: "no atlas path configured".into(),
                });
                None
            }
        };
        for warning in &warnings {
            log::warn!("{warning}");
        }

        Self {
            layout: CardLayout::new(config),
            width: config.card_width,
            height: config.card_height,
            background: config.background,
            masks: MaskCache::new(SymbolLibrary::standard(), config.curve_samples),
            labels: LabelRenderer::new(),
            atlas,
            warnings,
        }
    }

    /// Replace the label renderer (e.g. one over a fixed font set).
    pub fn with_labels(mut self, labels: LabelRenderer) -> Self {
        self.labels = labels;
        self
    }

    /// Replace the symbol library; the mask cache starts empty.
    pub fn with_symbols(mut self, library: SymbolLibrary, curve_samples: usize) -> Self {
        self.masks = MaskCache::new(library, curve_samples);
        self
    }

    /// Replace the face atlas.
    pub fn with_atlas(mut self, atlas: Option<FaceAtlas>) -> Self {
        self.atlas = atlas;
        self
    }

    pub fn layout(&self) -> &CardLayout {
        &self.layout
    }

    pub fn masks(&self) -> &MaskCache {
        &self.masks
    }

    pub fn atlas(&self) -> Option<&FaceAtlas> {
        self.atlas.as_ref()
    }

    /// Warnings raised so far, including the label renderer's.
    pub fn take_warnings(&mut self) -> Vec<MissingAsset> {
        let mut warnings = std::mem::take(&mut self.warnings);
        warnings.extend(self.labels.take_warnings());
        warnings
    }

    /// Build every distinct mask the deck needs before rendering.
    pub fn prewarm(&self) -> Result<(), LayoutError> {
        let sizes = [
            self.layout.pip_size(),
            self.layout.ace_size(),
            self.layout.header_suit_size(),
        ];
        self.masks.prewarm(&SymbolId::ALL, &sizes)?;
        Ok(())
    }

    /// Fresh canvas for one card, filled with the background color.
    pub fn blank_canvas(&self) -> RgbaImage {
        RgbaImage::from_pixel(self.width, self.height, Rgba(self.background.with_alpha(255)))
    }

    /// Plan and render one card.
    pub fn render_card(&mut self, card: Card) -> Result<RgbaImage, LayoutError> {
        let plan = self.layout.build_plan(card.rank, card.suit);
        let mut canvas = self.blank_canvas();
        self.render(&plan, &mut canvas)?;
        log::debug!("RenderSession: rendered {card} ({} ops)", plan.ops.len());
        Ok(canvas)
    }

    /// Execute `plan` in order. Only `canvas` is mutated.
    pub fn render(&mut self, plan: &LayoutPlan, canvas: &mut RgbaImage) -> Result<(), LayoutError> {
        for op in &plan.ops {
            match op {
                DrawOp::HeaderBand { height, color } => fill_rows(canvas, *height, *color),
                DrawOp::Label {
                    text,
                    left,
                    center_y,
                    style,
                } => {
                    self.labels.draw_label(canvas, text, style, *left, *center_y);
                }
                DrawOp::Symbol { glyph, .. } => place(&self.masks, canvas, glyph)?,
                DrawOp::FaceArt {
                    cell,
                    dest,
                    border,
                    border_width,
                } => {
                    // Missing atlas was reported when the session started.
                    let Some(atlas) = &self.atlas else {
                        continue;
                    };
                    let art = atlas.fit(*cell, dest.width, dest.height);
                    let left = dest.x + (dest.width - art.width()) as i64 / 2;
                    let top = dest.y + (dest.height - art.height()) as i64 / 2;
                    paste_at(canvas, &art, left, top);
                    stroke_rect(
                        canvas,
                        FaceBox {
                            x: left,
                            y: top,
                            width: art.width(),
                            height: art.height(),
                        },
                        *border,
                        *border_width,
                    );
                }
            }
        }
        Ok(())
    }
}

/// Fill rows `0..height` with `color`.
fn fill_rows(canvas: &mut RgbaImage, height: u32, color: Color) {
    let pixel = Rgba(color.with_alpha(255));
    let rows = height.min(canvas.height());
    for y in 0..rows {
        for x in 0..canvas.width() {
            canvas.put_pixel(x, y, pixel);
        }
    }
}

/// Outline `[x, x + width] × [y, y + height]` (inclusive) with a stroke
/// growing inward. Clipped to the canvas.
fn stroke_rect(canvas: &mut RgbaImage, rect: FaceBox, color: Color, stroke: u32) {
    let pixel = Rgba(color.with_alpha(255));
    let (cw, ch) = (canvas.width() as i64, canvas.height() as i64);
    let (x0, y0) = (rect.x, rect.y);
    let (x1, y1) = (rect.x + rect.width as i64, rect.y + rect.height as i64);
    let s = stroke as i64;

    for y in y0..=y1 {
        for x in x0..=x1 {
            let edge = x < x0 + s || x > x1 - s || y < y0 + s || y > y1 - s;
            if edge && x >= 0 && y >= 0 && x < cw && y < ch {
                canvas.put_pixel(x as u32, y as u32, pixel);
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
    use deck_core::{Rank, Suit, ATLAS_COLUMNS, ATLAS_ROWS};

    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

    fn session() -> RenderSession {
        RenderSession::new(&DeckConfig::default()).with_labels(LabelRenderer::without_fonts())
    }

    fn green_atlas() -> FaceAtlas {
        FaceAtlas::from_image(RgbaImage::from_pixel(
            60 * ATLAS_COLUMNS,
            90 * ATLAS_ROWS,
            Rgba([0, 200, 0, 255]),
        ))
    }

    #[test]
    fn test_canvas_has_configured_size() {
        let mut session = session();
        let canvas = session.render_card(Card::new(Rank::Seven, Suit::Hearts)).unwrap();
        assert_eq!(canvas.dimensions(), (400, 560));
    }

    #[test]
    fn test_header_band_filled() {
        let mut session = session();
        let canvas = session.render_card(Card::new(Rank::Two, Suit::Spades)).unwrap();
        // Left of the suit glyph, away from any label ink.
        assert_eq!(canvas.get_pixel(2, 2).0, [0xf5, 0xf5, 0xf5, 255]);
        assert_eq!(canvas.get_pixel(2, 169).0, [0xf5, 0xf5, 0xf5, 255]);
        assert_eq!(*canvas.get_pixel(2, 170), WHITE);
    }

    #[test]
    fn test_ace_glyph_at_centre() {
        let mut session = session();
        let canvas = session.render_card(Card::new(Rank::Ace, Suit::Diamonds)).unwrap();
        assert_eq!(canvas.get_pixel(200, 365).0, [0xd3, 0x2f, 0x2f, 255]);
    }

    #[test]
    fn test_missing_atlas_still_renders_and_warns() {
        let mut session = session();
        let canvas = session.render_card(Card::new(Rank::King, Suit::Clubs)).unwrap();
        // Face box interior stays background.
        assert_eq!(*canvas.get_pixel(200, 365), WHITE);

        let warnings = session.take_warnings();
        assert_eq!(warnings.len(), 2, "{warnings:?}");
        assert!(matches!(warnings[0], MissingAsset::Atlas { .. }));
        assert!(matches!(warnings[1], MissingAsset::NoFonts { .. }));
        assert!(session.take_warnings().is_empty());
    }

    #[test]
    fn test_face_art_fitted_and_outlined() {
        let mut session = session().with_atlas(Some(green_atlas()));
        let canvas = session.render_card(Card::new(Rank::Queen, Suit::Hearts)).unwrap();

        // 60×90 cell into 280×307: height-limited → 205×307 at x = 60 + 37.
        let (left, top) = (60 + 37, 211);
        let is_green = |p: &Rgba<u8>| p.0[0] < 10 && p.0[1] > 190 && p.0[2] < 10;
        assert!(is_green(canvas.get_pixel(200, 365)));
        let red = [0xd3, 0x2f, 0x2f, 255];
        assert_eq!(canvas.get_pixel(left, 300).0, red);
        assert_eq!(canvas.get_pixel(left + 1, 300).0, red);
        assert!(is_green(canvas.get_pixel(left + 2, 300)));
        assert_eq!(canvas.get_pixel(200, top).0, red);
        assert_eq!(*canvas.get_pixel(left - 1, 300), WHITE);
    }

    #[test]
    fn test_pips_reuse_cached_masks() {
        let mut session = session();
        session.render_card(Card::new(Rank::Ten, Suit::Spades)).unwrap();
        session.render_card(Card::new(Rank::Nine, Suit::Spades)).unwrap();
        let stats = session.masks().stats();
        // Pip size and header size for spades only.
        assert_eq!(stats.rasterizations, 2);
        assert_eq!(stats.parses, 1);
    }

    #[test]
    fn test_prewarm_covers_deck() {
        let mut session = session();
        session.prewarm().unwrap();
        let before = session.masks().stats().rasterizations;
        assert_eq!(before, 12);
        for card in Card::all() {
            session.render_card(card).unwrap();
        }
        assert_eq!(session.masks().stats().rasterizations, before);
    }

    #[test]
    fn test_bad_symbol_path_propagates() {
        let library = SymbolLibrary::standard().with_path(SymbolId::Heart, "M0,0 Q1,1");
        let mut session = session().with_symbols(library, 20);
        let err = session.render_card(Card::new(Rank::Two, Suit::Hearts)).unwrap_err();
        assert!(matches!(err, LayoutError::Raster(_)));
    }

    #[test]
    fn test_stroke_rect_inclusive_edges() {
        let mut canvas = RgbaImage::from_pixel(10, 10, WHITE);
        let rect = FaceBox {
            x: 2,
            y: 2,
            width: 5,
            height: 5,
        };
        stroke_rect(&mut canvas, rect, Color::rgb(0, 0, 0), 1);
        assert_eq!(canvas.get_pixel(2, 2).0, [0, 0, 0, 255]);
        assert_eq!(canvas.get_pixel(7, 7).0, [0, 0, 0, 255]);
        assert_eq!(*canvas.get_pixel(4, 4), WHITE);
        assert_eq!(*canvas.get_pixel(8, 8), WHITE);
    }
}
