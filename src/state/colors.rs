//! Language color table shared by every repository widget.
//!
//! DESIGN
//! ======
//! The table is fetched once at mount and provided through context as an
//! explicit, injectable value rather than a module global. Widgets hold off
//! rendering until `loaded` flips, so color lookups are always possible once
//! rendering begins.

#[cfg(test)]
#[path = "colors_test.rs"]
mod colors_test;

use std::collections::HashMap;

use crate::util::color::normalize_hex_color;

/// Color used when a language has no (usable) entry in the table. The
/// aggregate "Other" bar segment uses it as well.
pub const DEFAULT_FALLBACK_COLOR: &str = "#cccccc";

/// Read-only mapping from language name to a normalized `#rrggbb` color.
#[derive(Clone, Debug)]
pub struct ColorTable {
    colors: HashMap<String, String>,
    fallback: String,
}

impl ColorTable {
    pub fn new() -> Self {
        Self::with_fallback(DEFAULT_FALLBACK_COLOR)
    }

    /// An empty table resolving everything to `fallback`. The fallback policy
    /// is deliberately a parameter; observed site revisions disagreed on it.
    pub fn with_fallback(fallback: &str) -> Self {
        Self {
            colors: HashMap::new(),
            fallback: normalize_hex_color(fallback, DEFAULT_FALLBACK_COLOR),
        }
    }

    /// Build a table from raw color-definition entries, skipping languages
    /// whose entry carries no color.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, Option<String>)>,
    {
        let mut table = Self::new();
        for (language, color) in entries {
            if let Some(color) = color {
                table.insert(language, &color);
            }
        }
        table
    }

    pub fn insert(&mut self, language: impl Into<String>, color: &str) {
        let normalized = normalize_hex_color(color, &self.fallback);
        self.colors.insert(language.into(), normalized);
    }

    /// Resolve a language to its display color, or the fallback when absent.
    pub fn resolve(&self, language: &str) -> &str {
        self.colors.get(language).map_or(self.fallback.as_str(), String::as_str)
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Default for ColorTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Context wrapper tracking whether the one-shot table fetch has settled.
#[derive(Clone, Debug, Default)]
pub struct ColorTableState {
    pub table: ColorTable,
    pub loaded: bool,
}
