//! # deck-gen
//!
//! Batch generator for the 52-card deck: renders every (rank, suit) with a
//! [`RenderSession`](deck_layout::RenderSession) and writes one PNG each.
//!
//! ## Architecture
//!
//! ```text
//! env (DECK_*) ──► DeckConfig ──► generate_deck
//!                                     │
//!                     ┌───────────────┼────────────────┐
//!                     ▼               ▼                ▼
//!               render_deck     export_faces     GenerationReport
//!          {suit}-{rank}.png   {suit}-{face}.png   paths + warnings
//! ```
//!
//! - **`generate`** — Whole-deck rendering and PNG output.
//! - **`export`** — Atlas slicing into per-face images.
//! - **`env`** — Environment overrides for the binary.
//! - **`error`** — `DeckError`.

pub mod env;
pub mod error;
pub mod export;
pub mod generate;

// Re-exports for ergonomic use.
pub use env::{config_from_env, config_from_lookup};
pub use error::DeckError;
pub use export::{export_faces, export_faces_from};
pub use generate::{generate_deck, render_deck, GenerationReport};
