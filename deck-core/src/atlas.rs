//! Face-card atlas contract.
//!
//! The atlas is one image split into a uniform grid: one row per suit in
//! [`Suit::ALL`](crate::Suit::ALL) order, one column per court rank
//! (jack, queen, king).

use crate::card::{Card, FaceRank, Suit};
use crate::geometry::Rect;

pub const ATLAS_COLUMNS: u32 = 3;
pub const ATLAS_ROWS: u32 = 4;

/// Grid cell holding one court card's artwork.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AtlasCell {
    pub row: u32,
    pub col: u32,
}

impl AtlasCell {
    pub fn new(suit: Suit, face: FaceRank) -> Self {
        Self {
            row: suit.index() as u32,
            col: face.column() as u32,
        }
    }

    /// Cell for a card, or `None` for non-court ranks.
    pub fn for_card(card: Card) -> Option<Self> {
        card.rank.face().map(|face| Self::new(card.suit, face))
    }

    /// Source rectangle inside an atlas of the given pixel size.
    pub fn source_rect(&self, atlas_width: u32, atlas_height: u32) -> Rect {
        let cell_w = atlas_width as f32 / ATLAS_COLUMNS as f32;
        let cell_h = atlas_height as f32 / ATLAS_ROWS as f32;
        Rect::new(self.col as f32 * cell_w, self.row as f32 * cell_h, cell_w, cell_h)
    }

    /// All twelve cells, row-major.
    pub fn all() -> impl Iterator<Item = (Suit, FaceRank, AtlasCell)> {
        Suit::ALL.into_iter().flat_map(|suit| {
            [FaceRank::Jack, FaceRank::Queen, FaceRank::King]
                .into_iter()
                .map(move |face| (suit, face, AtlasCell::new(suit, face)))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Rank;

    #[test]
    fn test_hearts_queen_cell() {
        let cell = AtlasCell::for_card(Card::new(Rank::Queen, Suit::Hearts)).unwrap();
        assert_eq!(cell, AtlasCell { row: 1, col: 1 });
        assert_eq!(cell.source_rect(300, 400), Rect::new(100.0, 100.0, 100.0, 100.0));
    }

    #[test]
    fn test_non_face_has_no_cell() {
        assert!(AtlasCell::for_card(Card::new(Rank::Ten, Suit::Clubs)).is_none());
    }

    #[test]
    fn test_all_cells_cover_grid() {
        let cells: Vec<_> = AtlasCell::all().collect();
        assert_eq!(cells.len(), (ATLAS_COLUMNS * ATLAS_ROWS) as usize);
        let (_, _, last) = cells[cells.len() - 1];
        assert_eq!(last, AtlasCell { row: 3, col: 2 });
    }
}
