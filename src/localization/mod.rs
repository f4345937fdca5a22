//! Display names and icons for phases.
//!
//! Unknown languages fall back to English; unknown phases render as
//! `"Unknown"` with a `❓` icon.

use crate::models::Phase;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    De,
    Bg,
}

impl Language {
    /// Case-insensitive; anything unrecognised is English.
    pub fn from_code(code: &str) -> Language {
        match code.trim().to_ascii_lowercase().as_str() {
            "de" => Language::De,
            "bg" => Language::Bg,
            _ => Language::En,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::De => "de",
            Language::Bg => "bg",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

pub const UNKNOWN_NAME: &str = "Unknown";
pub const UNKNOWN_ICON: &str = "❓";

/// `[en, de, bg]`, indexed by phase ordinal.
static PHASE_NAMES: [[&str; 3]; 7] = [
    ["Learned", "Gelernt", "Научен"],
    ["New", "Neu", "Нов"],
    ["Learning", "Lernen", "Учене"],
    ["Familiar", "Vertraut", "Познат"],
    ["Known", "Bekannt", "Известен"],
    ["Mastered", "Gemeistert", "Овладян"],
    ["Expert", "Experte", "Експерт"],
];

static PHASE_ICONS: [&str; 7] = ["🎓", "🌱", "📖", "👁️", "✅", "⭐", "🏆"];

pub fn phase_name(phase: i64, language: Language) -> &'static str {
    match Phase::from_ordinal(phase) {
        Some(known) => PHASE_NAMES[known as usize][language as usize],
        None => UNKNOWN_NAME,
    }
}

pub fn phase_icon(phase: i64) -> &'static str {
    match Phase::from_ordinal(phase) {
        Some(known) => PHASE_ICONS[known as usize],
        None => UNKNOWN_ICON,
    }
}

/// Icon and name, e.g. `"🌱 Neu"`.
pub fn phase_label(phase: i64, language: Language) -> String {
    format!("{} {}", phase_icon(phase), phase_name(phase, language))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_per_language() {
        assert_eq!(phase_name(0, Language::En), "Learned");
        assert_eq!(phase_name(0, Language::De), "Gelernt");
        assert_eq!(phase_name(0, Language::Bg), "Научен");
        assert_eq!(phase_name(5, Language::De), "Gemeistert");
        assert_eq!(phase_name(6, Language::Bg), "Експерт");
    }

    #[test]
    fn test_unknown_language_falls_back_to_english() {
        assert_eq!(Language::from_code("fr"), Language::En);
        assert_eq!(Language::from_code(""), Language::En);
        assert_eq!(Language::from_code("DE"), Language::De);
        assert_eq!(phase_name(3, Language::from_code("pl")), "Familiar");
    }

    #[test]
    fn test_unknown_phase() {
        assert_eq!(phase_name(7, Language::De), "Unknown");
        assert_eq!(phase_name(-2, Language::En), "Unknown");
        assert_eq!(phase_icon(99), "❓");
    }

    #[test]
    fn test_icons() {
        assert_eq!(phase_icon(0), "🎓");
        assert_eq!(phase_icon(1), "🌱");
        assert_eq!(phase_icon(6), "🏆");
    }

    #[test]
    fn test_label() {
        assert_eq!(phase_label(1, Language::De), "🌱 Neu");
        assert_eq!(phase_label(8, Language::Bg), "❓ Unknown");
    }

    #[test]
    fn test_english_names_match_thresholds() {
        for phase in Phase::ALL {
            assert_eq!(
                phase_name(phase.ordinal() as i64, Language::En),
                phase.threshold().display_name
            );
        }
    }

    #[test]
    fn test_language_serde() {
        assert_eq!(serde_json::to_string(&Language::Bg).unwrap(), "\"bg\"");
        let lang: Language = serde_json::from_str("\"de\"").unwrap();
        assert_eq!(lang, Language::De);
    }
}
