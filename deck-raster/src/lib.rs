//! # deck-raster
//!
//! CPU raster stage of the deck renderer: polygon fill into opacity masks,
//! a session-owned mask cache, sprite compositing, and the face-card atlas.
//!
//! ## Architecture
//!
//! ```text
//! SymbolLibrary ──parse once──► Vec<Polygon>
//!                                   │
//!                                   ▼
//! MaskCache::get_or_create(symbol, size) ──► Arc<Mask>   (memoized)
//!                                   │
//!                                   ▼
//! compositor::place(canvas, glyph)  ◀── colorize + rotate 180° + blend
//! ```
//!
//! - **`mask`** — `Mask` buffer and the scanline polygon rasterizer.
//! - **`cache`** — `MaskCache` keyed by (symbol, pixel size).
//! - **`compositor`** — sprite colorizing and centered alpha paste.
//! - **`atlas`** — `FaceAtlas` crop and aspect-preserving resize.

pub mod atlas;
pub mod cache;
pub mod compositor;
pub mod mask;

// Re-exports for ergonomic use.
pub use atlas::{fit_dimensions, FaceAtlas};
pub use cache::{CacheStats, MaskCache, MaskKey};
pub use compositor::{colorize, paste_at, paste_centered, place, rotate_half_turn, Glyph};
pub use mask::{rasterize, FitTransform, Mask, RasterError};
