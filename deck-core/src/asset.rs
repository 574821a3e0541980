//! Recoverable asset conditions.
//!
//! These never abort a run. The component that hits one logs it with
//! `log::warn!`, substitutes its fallback and hands the value up so the
//! generator can report it.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MissingAsset {
    /// Face atlas missing or undecodable; court cards render without art.
    #[error("face atlas {path:?} unavailable ({reason}); face art omitted")]
    Atlas { path: PathBuf, reason: String },
    /// No configured family matched; the system default font is used.
    #[error("font {requested:?} unavailable; using {fallback:?}")]
    Font { requested: String, fallback: String },
    /// No usable font at all; labels are omitted.
    #[error("no fonts available for {requested:?}; labels omitted")]
    NoFonts { requested: String },
}
