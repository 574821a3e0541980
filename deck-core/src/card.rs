//! Card identity — the fixed 13 × 4 domain the generator iterates.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::symbol::SymbolId;

/// A rank or suit outside the fixed deck domain.
///
/// The generator only iterates [`Card::all()`], so this is a contract
/// violation by a caller rather than a runtime condition.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidCardError {
    #[error("unknown rank {0:?} (expected A, 2-10, J, Q or K)")]
    UnknownRank(String),
    #[error("unknown suit {0:?} (expected spades, hearts, clubs or diamonds)")]
    UnknownSuit(String),
    #[error("suit index {0} out of range (0-3)")]
    SuitIndex(usize),
}

// ── Suit ────────────────────────────────────────────────────────────

/// Card suit. Declaration order is the atlas row order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Spades,
    Hearts,
    Clubs,
    Diamonds,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Clubs, Suit::Diamonds];

    /// Position in [`Suit::ALL`]; also the face atlas row.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Result<Self, InvalidCardError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(InvalidCardError::SuitIndex(index))
    }

    pub fn from_name(name: &str) -> Result<Self, InvalidCardError> {
        Self::ALL
            .into_iter()
            .find(|s| s.name() == name)
            .ok_or_else(|| InvalidCardError::UnknownSuit(name.to_string()))
    }

    /// Lowercase plural name used in output file names.
    pub fn name(self) -> &'static str {
        match self {
            Suit::Spades => "spades",
            Suit::Hearts => "hearts",
            Suit::Clubs => "clubs",
            Suit::Diamonds => "diamonds",
        }
    }

    /// Hearts and diamonds use the red ink; spades and clubs the black.
    pub fn is_red(self) -> bool {
        matches!(self, Suit::Hearts | Suit::Diamonds)
    }

    /// Glyph drawn for this suit.
    pub fn symbol(self) -> SymbolId {
        match self {
            Suit::Spades => SymbolId::Spade,
            Suit::Hearts => SymbolId::Heart,
            Suit::Clubs => SymbolId::Club,
            Suit::Diamonds => SymbolId::Diamond,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ── Rank ────────────────────────────────────────────────────────────

/// Court ranks, in atlas column order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FaceRank {
    Jack,
    Queen,
    King,
}

impl FaceRank {
    /// Face atlas column.
    pub fn column(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            FaceRank::Jack => "jack",
            FaceRank::Queen => "queen",
            FaceRank::King => "king",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Header label: `A`, `2`..`10`, `J`, `Q`, `K`.
    pub fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }

    pub fn from_label(label: &str) -> Result<Self, InvalidCardError> {
        Self::ALL
            .into_iter()
            .find(|r| r.label() == label)
            .ok_or_else(|| InvalidCardError::UnknownRank(label.to_string()))
    }

    /// Pip count for number ranks 2–10.
    pub fn pip_count(self) -> Option<u8> {
        match self {
            Rank::Ace | Rank::Jack | Rank::Queen | Rank::King => None,
            number => Some(number as u8 + 1),
        }
    }

    pub fn face(self) -> Option<FaceRank> {
        match self {
            Rank::Jack => Some(FaceRank::Jack),
            Rank::Queen => Some(FaceRank::Queen),
            Rank::King => Some(FaceRank::King),
            _ => None,
        }
    }

    /// Rank part of the output file name (`jack`/`queen`/`king` for faces).
    pub fn file_stem(self) -> &'static str {
        match self.face() {
            Some(face) => face.name(),
            None => self.label(),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ── Card ────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    /// Number of cards in the generated deck.
    pub const DECK_SIZE: usize = 52;

    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Build a card from its textual rank label and suit name.
    pub fn from_labels(rank: &str, suit: &str) -> Result<Self, InvalidCardError> {
        Ok(Self::new(Rank::from_label(rank)?, Suit::from_name(suit)?))
    }

    /// Every card, suit-major (all spades, then hearts, …).
    pub fn all() -> impl Iterator<Item = Card> {
        Suit::ALL
            .into_iter()
            .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| Card::new(rank, suit)))
    }

    /// `{suit}-{rankname}.png`
    pub fn file_name(&self) -> String {
        format!("{}-{}.png", self.suit.name(), self.rank.file_stem())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

// ===================================================================
// Tests
// ===================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_deck_has_52_unique_cards() {
        let cards: Vec<Card> = Card::all().collect();
        assert_eq!(cards.len(), Card::DECK_SIZE);
        let names: HashSet<String> = cards.iter().map(Card::file_name).collect();
        assert_eq!(names.len(), Card::DECK_SIZE);
    }

    #[test]
    fn test_file_names() {
        assert_eq!(Card::new(Rank::Ten, Suit::Hearts).file_name(), "hearts-10.png");
        assert_eq!(Card::new(Rank::Queen, Suit::Clubs).file_name(), "clubs-queen.png");
        assert_eq!(Card::new(Rank::Ace, Suit::Spades).file_name(), "spades-A.png");
        assert_eq!(Card::new(Rank::King, Suit::Diamonds).file_name(), "diamonds-king.png");
    }

    #[test]
    fn test_pip_counts() {
        assert_eq!(Rank::Ace.pip_count(), None);
        assert_eq!(Rank::Two.pip_count(), Some(2));
        assert_eq!(Rank::Ten.pip_count(), Some(10));
        assert_eq!(Rank::Jack.pip_count(), None);
    }

    #[test]
    fn test_face_columns() {
        assert_eq!(Rank::Jack.face().map(FaceRank::column), Some(0));
        assert_eq!(Rank::Queen.face().map(FaceRank::column), Some(1));
        assert_eq!(Rank::King.face().map(FaceRank::column), Some(2));
        assert_eq!(Rank::Nine.face(), None);
    }

    #[test]
    fn test_suit_rows_and_colors() {
        assert_eq!(Suit::Spades.index(), 0);
        assert_eq!(Suit::Hearts.index(), 1);
        assert_eq!(Suit::Diamonds.index(), 3);
        assert!(Suit::Hearts.is_red());
        assert!(!Suit::Clubs.is_red());
    }

    #[test]
    fn test_from_labels() {
        let card = Card::from_labels("Q", "hearts").unwrap();
        assert_eq!(card, Card::new(Rank::Queen, Suit::Hearts));
        assert_eq!(
            Card::from_labels("11", "hearts"),
            Err(InvalidCardError::UnknownRank("11".into()))
        );
        assert_eq!(
            Card::from_labels("A", "stars"),
            Err(InvalidCardError::UnknownSuit("stars".into()))
        );
        assert_eq!(Suit::from_index(4), Err(InvalidCardError::SuitIndex(4)));
    }
}
