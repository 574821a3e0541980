//! Suit glyph identities and the path text they are drawn from.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::path::{ParseError, Path, ViewBox};

/// Authored coordinate space of every standard suit glyph.
pub const SUIT_VIEWBOX: ViewBox = ViewBox::new(100.0, 130.0);

const SPADE_PATH: &str = "M50,10 C50,10 95,40 95,75 C95,95 80,105 60,95 L65,125 L35,125 \
    L40,95 C20,105 5,95 5,75 C5,40 50,10 50,10 Z";
const HEART_PATH: &str =
    "M50,30 C50,30 90,0 95,35 C98,55 50,95 50,95 C50,95 2,55 5,35 C10,0 50,30 50,30 Z";
const CLUB_PATH: &str = "M50,20 C65,20 75,30 75,45 C75,55 65,65 55,65 C65,60 85,60 90,75 \
    C95,90 80,105 60,95 L65,125 L35,125 L40,95 C20,105 5,90 10,75 C15,60 35,60 45,65 \
    C35,65 25,55 25,45 C25,30 35,20 50,20 Z";
const DIAMOND_PATH: &str = "M50,10 L90,65 L50,120 L10,65 Z";

/// One of the four suit glyphs. Cache key component.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolId {
    Spade,
    Heart,
    Club,
    Diamond,
}

impl SymbolId {
    pub const ALL: [SymbolId; 4] = [
        SymbolId::Spade,
        SymbolId::Heart,
        SymbolId::Club,
        SymbolId::Diamond,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SymbolId::Spade => "spade",
            SymbolId::Heart => "heart",
            SymbolId::Club => "club",
            SymbolId::Diamond => "diamond",
        }
    }
}

impl fmt::Display for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Path text for each symbol plus the shared viewbox.
///
/// [`SymbolLibrary::standard()`] holds the stock glyphs; individual paths
/// can be replaced with [`SymbolLibrary::with_path`].
#[derive(Clone, Debug)]
pub struct SymbolLibrary {
    paths: FxHashMap<SymbolId, String>,
    viewbox: ViewBox,
}

impl Default for SymbolLibrary {
    fn default() -> Self {
        Self::standard()
    }
}

impl SymbolLibrary {
    pub fn standard() -> Self {
        let mut paths = FxHashMap::default();
        paths.insert(SymbolId::Spade, SPADE_PATH.to_string());
        paths.insert(SymbolId::Heart, HEART_PATH.to_string());
        paths.insert(SymbolId::Club, CLUB_PATH.to_string());
        paths.insert(SymbolId::Diamond, DIAMOND_PATH.to_string());
        Self {
            paths,
            viewbox: SUIT_VIEWBOX,
        }
    }

    /// Replace the path text of one symbol.
    pub fn with_path(mut self, id: SymbolId, text: impl Into<String>) -> Self {
        self.paths.insert(id, text.into());
        self
    }

    pub fn viewbox(&self) -> ViewBox {
        self.viewbox
    }

    pub fn path_text(&self, id: SymbolId) -> &str {
        self.paths.get(&id).map(String::as_str).unwrap_or_default()
    }

    /// Parse one symbol's path.
    pub fn parse(&self, id: SymbolId) -> Result<Path, ParseError> {
        Path::parse(self.path_text(id), self.viewbox)
    }
}
