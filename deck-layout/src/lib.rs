//! # deck-layout
//!
//! Card layout engine: classifies each (rank, suit), resolves it into a
//! [`LayoutPlan`] of draw operations, and renders plans through a
//! [`RenderSession`].
//!
//! ## Architecture
//!
//! ```text
//! DeckConfig ──► CardLayout (pixel metrics, ContentZone)
//!                    │
//!                    ▼
//!      build_plan(rank, suit) ──► LayoutPlan { Vec<DrawOp> }
//!                    │                 ▲
//!                    │            PIP_TABLE (static)
//!                    ▼
//! RenderSession::render(plan, canvas)
//!     ├── MaskCache + compositor   (suit glyphs)
//!     ├── LabelRenderer            (header rank)
//!     └── FaceAtlas                (court art, optional)
//! ```
//!
//! - **`zone`** — Content zone ratio → y mapping.
//! - **`pips`** — Static pip table for ranks 2–10.
//! - **`plan`** — Rank classification and draw operations.
//! - **`render`** — Session state and plan execution.

pub mod pips;
pub mod plan;
pub mod render;
pub mod zone;

// Re-exports for ergonomic use.
pub use pips::{pip_slots, PipColumn, PipSlot, PIP_TABLE};
pub use plan::{CardClass, CardLayout, DrawOp, FaceBox, GlyphRole, LayoutError, LayoutPlan};
pub use render::RenderSession;
pub use zone::ContentZone;
