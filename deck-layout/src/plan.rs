//! Layout plans — (rank, suit) → ordered draw operations.
//!
//! A plan is pure data: nothing is rasterized until a
//! [`RenderSession`](crate::render::RenderSession) executes it, so plans
//! can be built and inspected in tests without fonts or atlas art.
//!
//! ```text
//! CardLayout::build_plan(rank, suit)
//!   ├── HeaderBand            (all ranks)
//!   ├── Label  "10"           (all ranks)
//!   ├── Symbol  Header        (all ranks, upright)
//!   └── match CardClass
//!         ├── Face(J|Q|K) → FaceArt { atlas cell, box, border }
//!         ├── Ace         → Symbol  Ace
//!         └── Number(n)   → Symbol  Pip × n   (from PIP_TABLE)
//! ```

use deck_core::{
    AtlasCell, Card, Color, DeckConfig, FaceRank, InvalidCardError, Point, Rank, Suit,
};
use deck_raster::{Glyph, RasterError};
use deck_text::LabelStyle;
use thiserror::Error;

use crate::pips::pip_slots;
use crate::zone::ContentZone;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error(transparent)]
    InvalidCard(#[from] InvalidCardError),
    #[error("raster error: {0}")]
    Raster(#[from] RasterError),
}

// ── Rank classification ─────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CardClass {
    Face(FaceRank),
    Ace,
    /// Pip count, 2..=10.
    Number(u8),
}

impl CardClass {
    pub fn of(rank: Rank) -> Self {
        match (rank.face(), rank.pip_count()) {
            (Some(face), _) => CardClass::Face(face),
            (None, Some(count)) => CardClass::Number(count),
            (None, None) => CardClass::Ace,
        }
    }

    pub fn is_face(self) -> bool {
        matches!(self, CardClass::Face(_))
    }
}

// ── Draw operations ─────────────────────────────────────────────────

/// Which part of the card a glyph belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GlyphRole {
    Header,
    Ace,
    Pip,
}

/// Destination box for face artwork, in canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaceBox {
    pub x: i64,
    pub y: i64,
    pub width: u32,
    pub height: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// Fill rows `0..height` across the full width.
    HeaderBand { height: u32, color: Color },
    /// Text with its pen origin at `left`, ink centered on `center_y`.
    Label {
        text: &'static str,
        left: f32,
        center_y: f32,
        style: LabelStyle,
    },
    Symbol { glyph: Glyph, role: GlyphRole },
    /// Atlas cell fitted into `dest` and outlined in `border`.
    FaceArt {
        cell: AtlasCell,
        dest: FaceBox,
        border: Color,
        border_width: u32,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct LayoutPlan {
    pub card: Card,
    pub class: CardClass,
    pub ops: Vec<DrawOp>,
}

impl LayoutPlan {
    /// Pip glyphs in table order (empty for faces and aces).
    pub fn pips(&self) -> impl Iterator<Item = &Glyph> {
        self.glyphs(GlyphRole::Pip)
    }

    pub fn glyphs(&self, role: GlyphRole) -> impl Iterator<Item = &Glyph> {
        self.ops.iter().filter_map(move |op| match op {
            DrawOp::Symbol { glyph, role: r } if *r == role => Some(glyph),
            _ => None,
        })
    }

    pub fn face_art(&self) -> Option<(AtlasCell, FaceBox)> {
        self.ops.iter().find_map(|op| match op {
            DrawOp::FaceArt { cell, dest, .. } => Some((*cell, *dest)),
            _ => None,
        })
    }
}

// ── Card layout ─────────────────────────────────────────────────────

/// Pixel metrics derived once from a [`DeckConfig`].
#[derive(Clone, Debug, PartialEq)]
pub struct CardLayout {
    width: f32,
    zone: ContentZone,
    header_height: u32,
    header_color: Color,
    header_padding: f32,
    header_suit_size: i32,
    label: LabelStyle,
    pip_size: i32,
    ace_size: i32,
    face_box: FaceBox,
    face_border_width: u32,
    /// Ink per suit, indexed by `Suit::index`.
    inks: [Color; 4],
}

impl CardLayout {
    pub fn new(config: &DeckConfig) -> Self {
        let width = config.card_width as f32;
        let height = config.card_height as f32;
        let zone = ContentZone::from_config(config);
        let content_h = zone.height();

        // Glyph sizes never drop below one pixel, whatever the ratios.
        let pip_cap = truncate(width * config.pip_width_ratio) as f32;
        let pip_size = truncate(pip_cap.min(content_h * config.pip_zone_ratio)).max(1);
        let ace_size = truncate(
            (width * config.ace_width_ratio).min(content_h * config.ace_zone_ratio),
        )
        .max(1);
        let header_suit_size =
            truncate(config.header_height as f32 * config.header_suit_ratio).max(1);

        let face_w = truncate(width * config.face_width_ratio).max(1);
        let face_h = truncate(content_h * config.face_zone_ratio)
            .min(truncate(height * config.face_height_ratio))
            .max(1);
        let face_box = FaceBox {
            x: ((width - face_w as f32) / 2.0) as i64,
            y: (zone.top + (content_h - face_h as f32) / 2.0) as i64,
            width: face_w as u32,
            height: face_h as u32,
        };

        Self {
            width,
            zone,
            header_height: config.header_height,
            header_color: config.header_color,
            header_padding: config.header_padding,
            header_suit_size,
            label: LabelStyle {
                family: config.header_font_family.clone(),
                font_size: config.header_font_size,
                weight: config.header_font_weight,
                color: config.black,
            },
            pip_size,
            ace_size,
            face_box,
            face_border_width: config.face_border_width,
            inks: Suit::ALL.map(|suit| config.ink(suit)),
        }
    }

    pub fn zone(&self) -> ContentZone {
        self.zone
    }

    pub fn pip_size(&self) -> i32 {
        self.pip_size
    }

    pub fn ace_size(&self) -> i32 {
        self.ace_size
    }

    pub fn header_suit_size(&self) -> i32 {
        self.header_suit_size
    }

    pub fn face_box(&self) -> FaceBox {
        self.face_box
    }

    /// Plan for a card given by rank and suit labels (`"10"`, `"hearts"`).
    pub fn plan_from_labels(&self, rank: &str, suit: &str) -> Result<LayoutPlan, LayoutError> {
        Ok(self.build_plan(Rank::from_label(rank)?, Suit::from_name(suit)?))
    }

    /// Plan for a card given by rank label and suit index (0..4).
    pub fn plan_from_index(
        &self,
        rank: &str,
        suit_index: usize,
    ) -> Result<LayoutPlan, LayoutError> {
        Ok(self.build_plan(Rank::from_label(rank)?, Suit::from_index(suit_index)?))
    }

    pub fn build_plan(&self, rank: Rank, suit: Suit) -> LayoutPlan {
        let card = Card::new(rank, suit);
        let class = CardClass::of(rank);
        let ink = self.inks[suit.index()];
        let symbol = suit.symbol();

        let mut ops = self.header_ops(rank, suit, ink);

        match class {
            CardClass::Face(face) => ops.push(DrawOp::FaceArt {
                cell: AtlasCell::new(suit, face),
                dest: self.face_box,
                border: ink,
                border_width: self.face_border_width,
            }),
            CardClass::Ace => ops.push(DrawOp::Symbol {
                glyph: Glyph {
                    symbol,
                    center: Point::new(self.width / 2.0, self.zone.center_y()),
                    size: self.ace_size,
                    color: ink,
                    rotated: false,
                },
                role: GlyphRole::Ace,
            }),
            CardClass::Number(count) => {
                ops.extend(pip_slots(count).iter().map(|slot| DrawOp::Symbol {
                    glyph: Glyph {
                        symbol,
                        center: Point::new(
                            self.width * slot.column.fraction(),
                            self.zone.y_at(slot.row),
                        ),
                        size: self.pip_size,
                        color: ink,
                        rotated: slot.inverted,
                    },
                    role: GlyphRole::Pip,
                }));
            }
        }

        LayoutPlan { card, class, ops }
    }

    fn header_ops(&self, rank: Rank, suit: Suit, ink: Color) -> Vec<DrawOp> {
        let band_h = self.header_height as f32;
        let size = self.header_suit_size;
        vec![
            DrawOp::HeaderBand {
                height: self.header_height,
                color: self.header_color,
            },
            DrawOp::Label {
                text: rank.label(),
                left: self.header_padding,
                center_y: band_h / 2.0,
                style: LabelStyle {
                    color: ink,
                    ..self.label.clone()
                },
            },
            DrawOp::Symbol {
                glyph: Glyph {
                    symbol: suit.symbol(),
                    center: Point::new(
                        self.width - self.header_padding - size as f32 / 2.0,
                        band_h / 2.0,
                    ),
                    size,
                    color: ink,
                    rotated: false,
                },
                role: GlyphRole::Header,
            },
        ]
    }
}

impl Default for CardLayout {
    fn default() -> Self {
        Self::new(&DeckConfig::default())
    }
}

/// Truncate toward zero, absorbing f32 error in ratio products so that
/// e.g. `400 × 0.22` lands on 88 rather than 87.
fn truncate(value: f32) -> i32 {
    (value + 1e-3).trunc() as i32
}

// ===================================================================
// Tests
// ===================================================================
