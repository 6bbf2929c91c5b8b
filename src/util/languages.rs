//! Language-composition math for repository widgets.
//!
//! DESIGN
//! ======
//! The byte breakdown keeps its wire order, so bar segments and legend rows
//! come out in the same order the API reported them; no sorting happens here.

#[cfg(test)]
#[path = "languages_test.rs"]
mod languages_test;

/// Minimum share (in percent) a language needs to be displayed individually.
/// Languages below it are folded into the aggregate "Other" entry; a language
/// at exactly the threshold is displayed on its own.
pub const DISPLAY_THRESHOLD_PCT: f64 = 1.0;

/// Display name used for the aggregated below-threshold entry.
pub const OTHER_LABEL: &str = "Other";

/// One individually displayed language and its share of the total bytes.
#[derive(Clone, Debug, PartialEq)]
pub struct LanguageShare {
    pub name: String,
    /// Share of total bytes, 0–100.
    pub percentage: f64,
}

/// Derived view of a language-byte breakdown: the individually displayed
/// shares in breakdown order, plus the aggregate "Other" share when any
/// below-threshold bytes exist.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LanguageDisplay {
    pub shares: Vec<LanguageShare>,
    pub other_percentage: Option<f64>,
}

impl LanguageDisplay {
    pub fn is_empty(&self) -> bool {
        self.shares.is_empty() && self.other_percentage.is_none()
    }
}

#[allow(clippy::cast_precision_loss)]
fn share_of(bytes: u64, total: u64) -> f64 {
    (bytes as f64 / total as f64) * 100.0
}

/// Split a breakdown into displayed shares and the "Other" aggregate.
///
/// Entries whose share is at least [`DISPLAY_THRESHOLD_PCT`] are kept in
/// input order; the rest have their byte counts summed into one aggregate
/// percentage, present only when that sum is non-zero. An empty or all-zero
/// breakdown yields an empty display.
pub fn displayed_languages(breakdown: &[(String, u64)]) -> LanguageDisplay {
    let total: u64 = breakdown.iter().map(|(_, bytes)| *bytes).sum();
    if total == 0 {
        return LanguageDisplay::default();
    }

    let mut shares = Vec::new();
    let mut other_bytes = 0_u64;
    for (name, bytes) in breakdown {
        let percentage = share_of(*bytes, total);
        if percentage >= DISPLAY_THRESHOLD_PCT {
            shares.push(LanguageShare {
                name: name.clone(),
                percentage,
            });
        } else {
            other_bytes += *bytes;
        }
    }

    let other_percentage = (other_bytes > 0).then(|| share_of(other_bytes, total));
    LanguageDisplay {
        shares,
        other_percentage,
    }
}

/// Legend row text, e.g. `Rust: 61.38%`.
pub fn share_label(name: &str, percentage: f64) -> String {
    format!("{name}: {percentage:.2}%")
}
