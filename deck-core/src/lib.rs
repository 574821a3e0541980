//! # deck-core
//!
//! Domain types shared by every crate in the deck renderer: card identity,
//! geometry, colors, the suit-symbol path grammar and the session
//! configuration.
//!
//! ## Architecture
//!
//! ```text
//! SymbolLibrary (path text per suit)
//!     │
//!     ▼
//! Path::parse(text) ──► Path { Vec<PathCommand>, ViewBox }
//!     │
//!     ▼
//! Path::flatten(samples) ──► Vec<Polygon>   (input to deck-raster)
//! ```
//!
//! - **`card`** — suits, ranks, the fixed 52-card domain, output naming.
//! - **`path`** — path grammar parser and cubic Bezier flattener.
//! - **`symbol`** — suit glyph identities and their authored paths.
//! - **`asset`** — recoverable missing-asset conditions.
//! - **`atlas`** — face-card atlas grid contract.
//! - **`config`** — `DeckConfig` loaded from JSON.

pub mod asset;
pub mod atlas;
pub mod card;
pub mod color;
pub mod config;
pub mod geometry;
pub mod path;
pub mod symbol;

// Re-exports for ergonomic use.
pub use asset::MissingAsset;
pub use atlas::{AtlasCell, ATLAS_COLUMNS, ATLAS_ROWS};
pub use card::{Card, FaceRank, InvalidCardError, Rank, Suit};
pub use color::{Color, ColorParseError};
pub use config::{ConfigError, DeckConfig};
pub use geometry::{Point, Rect};
pub use path::{ParseError, Path, PathCommand, Polygon, ViewBox, DEFAULT_CURVE_SAMPLES};
pub use symbol::{SymbolId, SymbolLibrary};
