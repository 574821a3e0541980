//! Font lookup — resolves a CSS-style family chain against the `fontdb`
//! database that `cosmic-text` already loads.
//!
//! Each entry of the chain (`"Arial, Helvetica, sans-serif"`) is handed to
//! [`fontdb::Database::query`] in turn. When none matches, the system
//! sans-serif is tried, then the alphabetically first installed family.
//!
//! ```text
//! match_family(db, chain, weight)
//!   ├── chain entries        → MatchType::Exact
//!   ├── sans-serif           → MatchType::Fallback
//!   └── first family (A–Z)   → MatchType::Fallback
//! ```

use cosmic_text::fontdb;

/// One entry of a CSS family chain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FamilyName {
    Named(String),
    Serif,
    SansSerif,
    Monospace,
    Cursive,
    Fantasy,
}

impl FamilyName {
    /// Generic keywords are case-insensitive; anything else is a family name
    /// with surrounding quotes stripped.
    pub fn parse(entry: &str) -> Self {
        let name = entry.trim().trim_matches(|c| c == '"' || c == '\'');
        match name.to_ascii_lowercase().as_str() {
            "serif" => Self::Serif,
            "sans-serif" => Self::SansSerif,
            "monospace" => Self::Monospace,
            "cursive" => Self::Cursive,
            "fantasy" => Self::Fantasy,
            _ => Self::Named(name.to_string()),
        }
    }
}

/// Split `"'Open Sans', Arial, sans-serif"` into its entries, dropping
/// empty ones.
pub fn parse_family_chain(css: &str) -> Vec<FamilyName> {
    css.split(',')
        .filter(|entry| !entry.trim().is_empty())
        .map(FamilyName::parse)
        .collect()
}

/// Result of a lookup.
#[derive(Clone, Debug, PartialEq)]
pub struct FontMatch {
    /// Installed family name, ready for `cosmic_text::Family::Name`.
    pub family: String,
    pub postscript_name: String,
    pub match_type: MatchType,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchType {
    /// An entry of the requested chain matched.
    Exact,
    /// Nothing in the chain is installed.
    Fallback,
}

/// Resolve `css` at `weight`. `None` only when the database has no faces.
pub fn match_family(db: &fontdb::Database, css: &str, weight: u16) -> Option<FontMatch> {
    if let Some(found) = parse_family_chain(css)
        .iter()
        .find_map(|name| query(db, name, weight))
    {
        return Some(found);
    }

    let fallback = query(db, &FamilyName::SansSerif, weight).or_else(|| {
        let first = db
            .faces()
            .filter_map(|face| face.families.first())
            .map(|(name, _)| name.as_str())
            .min()?;
        query(db, &FamilyName::Named(first.to_string()), weight)
    })?;

    Some(FontMatch {
        match_type: MatchType::Fallback,
        ..fallback
    })
}

fn query(db: &fontdb::Database, name: &FamilyName, weight: u16) -> Option<FontMatch> {
    let family = match name {
        FamilyName::Named(name) => fontdb::Family::Name(installed_name(db, name)?),
        FamilyName::Serif => fontdb::Family::Serif,
        FamilyName::SansSerif => fontdb::Family::SansSerif,
        FamilyName::Monospace => fontdb::Family::Monospace,
        FamilyName::Cursive => fontdb::Family::Cursive,
        FamilyName::Fantasy => fontdb::Family::Fantasy,
    };
    let id = db.query(&fontdb::Query {
        families: &[family],
        weight: fontdb::Weight(weight),
        ..fontdb::Query::default()
    })?;
    let face = db.face(id)?;
    let (family, _) = face.families.first()?;
    Some(FontMatch {
        family: family.clone(),
        postscript_name: face.post_script_name.clone(),
        match_type: MatchType::Exact,
    })
}

/// `fontdb` compares names exactly; CSS family names are case-insensitive.
fn installed_name<'a>(db: &'a fontdb::Database, name: &str) -> Option<&'a str> {
    db.faces()
        .flat_map(|face| face.families.iter())
        .map(|(family, _)| family.as_str())
        .find(|family| family.eq_ignore_ascii_case(name))
}

// ===================================================================
// Tests
// ===================================================================
