//! Static pip table for number cards.
//!
//! Columns sit at 25 / 50 / 75 % of the card width; rows are ratios of the
//! content zone. The off-grid rows (0.35 / 0.38, 0.62 / 0.65) are distinct
//! on purpose: sevens and eights put their centre pips slightly higher
//! than the nines and tens put their inner pairs.
//!
//! ```text
//!   rank 10           rank 8
//!   L  .  R  0.05     L  .  R  0.05
//!   .  C  .  0.25     .  .  .
//!   L  .  R  0.38     .  C  .  0.35
//!                     L  .  R  0.50
//!   L↓ .  R↓ 0.62     .  C↓ .  0.65
//!   .  C↓ .  0.75
//!   L↓ .  R↓ 0.95     L↓ .  R↓ 0.95
//! ```

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PipColumn {
    Left,
    Center,
    Right,
}

impl PipColumn {
    /// Fraction of the card width.
    pub fn fraction(self) -> f32 {
        match self {
            PipColumn::Left => 0.25,
            PipColumn::Center => 0.5,
            PipColumn::Right => 0.75,
        }
    }
}

// ── Row ratios ──────────────────────────────────────────────────────

pub const ROW_TOP: f32 = 0.05;
pub const ROW_UPPER: f32 = 0.25;
pub const ROW_SEVEN: f32 = 0.35;
pub const ROW_INNER_UPPER: f32 = 0.38;
pub const ROW_MIDDLE: f32 = 0.50;
pub const ROW_INNER_LOWER: f32 = 0.62;
pub const ROW_EIGHT: f32 = 0.65;
pub const ROW_LOWER: f32 = 0.75;
pub const ROW_BOTTOM: f32 = 0.95;

/// One pip position. `inverted` pips are drawn rotated 180°.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PipSlot {
    pub column: PipColumn,
    pub row: f32,
    pub inverted: bool,
}

const fn up(column: PipColumn, row: f32) -> PipSlot {
    PipSlot {
        column,
        row,
        inverted: false,
    }
}

const fn down(column: PipColumn, row: f32) -> PipSlot {
    PipSlot {
        column,
        row,
        inverted: true,
    }
}

use PipColumn::{Center as C, Left as L, Right as R};

const TWO: &[PipSlot] = &[up(C, ROW_TOP), down(C, ROW_BOTTOM)];
const THREE: &[PipSlot] = &[up(C, ROW_TOP), down(C, ROW_BOTTOM), up(C, ROW_MIDDLE)];
const FOUR: &[PipSlot] = &[
    up(L, ROW_TOP),
    up(R, ROW_TOP),
    down(L, ROW_BOTTOM),
    down(R, ROW_BOTTOM),
];
const FIVE: &[PipSlot] = &[
    up(L, ROW_TOP),
    up(R, ROW_TOP),
    down(L, ROW_BOTTOM),
    down(R, ROW_BOTTOM),
    up(C, ROW_MIDDLE),
];
const SIX: &[PipSlot] = &[
    up(L, ROW_TOP),
    up(R, ROW_TOP),
    down(L, ROW_BOTTOM),
    down(R, ROW_BOTTOM),
    up(L, ROW_MIDDLE),
    up(R, ROW_MIDDLE),
];
const SEVEN: &[PipSlot] = &[
    up(L, ROW_TOP),
    up(R, ROW_TOP),
    down(L, ROW_BOTTOM),
    down(R, ROW_BOTTOM),
    up(L, ROW_MIDDLE),
    up(R, ROW_MIDDLE),
    up(C, ROW_SEVEN),
];
const EIGHT: &[PipSlot] = &[
    up(L, ROW_TOP),
    up(R, ROW_TOP),
    down(L, ROW_BOTTOM),
    down(R, ROW_BOTTOM),
    up(L, ROW_MIDDLE),
    up(R, ROW_MIDDLE),
    up(C, ROW_SEVEN),
    down(C, ROW_EIGHT),
];
const NINE: &[PipSlot] = &[
    up(L, ROW_TOP),
    up(R, ROW_TOP),
    down(L, ROW_BOTTOM),
    down(R, ROW_BOTTOM),
    up(L, ROW_INNER_UPPER),
    up(R, ROW_INNER_UPPER),
    down(L, ROW_INNER_LOWER),
    down(R, ROW_INNER_LOWER),
    up(C, ROW_MIDDLE),
];
const TEN: &[PipSlot] = &[
    up(L, ROW_TOP),
    up(R, ROW_TOP),
    down(L, ROW_BOTTOM),
    down(R, ROW_BOTTOM),
    up(L, ROW_INNER_UPPER),
    up(R, ROW_INNER_UPPER),
    down(L, ROW_INNER_LOWER),
    down(R, ROW_INNER_LOWER),
    up(C, ROW_UPPER),
    down(C, ROW_LOWER),
];

/// Pip slots indexed by `count - 2`.
pub static PIP_TABLE: [&[PipSlot]; 9] = [TWO, THREE, FOUR, FIVE, SIX, SEVEN, EIGHT, NINE, TEN];

/// Slots for a number card with `count` pips; empty outside 2..=10.
pub fn pip_slots(count: u8) -> &'static [PipSlot] {
    match count {
        2..=10 => PIP_TABLE[(count - 2) as usize],
        _ => &[],
    }
}

// ===================================================================
// Tests
// ===================================================================
