//! # deck-text
//!
//! Header label rendering for the deck renderer. Font discovery and
//! shaping come from `cosmic-text`; family chains are resolved with
//! queries against its `fontdb` database.
//!
//! ## Architecture
//!
//! ```text
//! FontSystem (cosmic-text) ──► fontdb::Database
//!     │                              │
//!     ▼                              ▼
//! LabelRenderer::draw_label ◄── match_family("Arial, Helvetica, sans-serif")
//!     │
//!     ▼
//! RgbaImage (glyph coverage blended in the label color)
//! ```
//!
//! - **`fonts`** — Family chain parsing and fallback lookup.
//! - **`label`** — Single-line label shaping and compositing.

pub mod fonts;
pub mod label;

// Re-exports for ergonomic use.
pub use fonts::{match_family, parse_family_chain, FamilyName, FontMatch, MatchType};
pub use label::{LabelBounds, LabelRenderer, LabelStyle};
