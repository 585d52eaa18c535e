//! UI languages: Urdu, English, and Roman Urdu.
//!
//! The language picks the static string table ([`crate::locale`]), the
//! directive embedded in the analysis prompt, and the speech recognizer tag.

use serde::{Deserialize, Serialize};

/// Interface language. Roman Urdu renders with the English string table but
/// keeps its own prompt directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    #[default]
    Ur,
    Roman,
}

impl Language {
    /// Short tag as stored in `ZEENAT_LANG` (`en` / `ur` / `roman`).
    pub fn tag(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ur => "ur",
            Language::Roman => "roman",
        }
    }

    /// Parses a short tag; unknown tags return `None`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_lowercase().as_str() {
            "en" => Some(Language::En),
            "ur" => Some(Language::Ur),
            "roman" => Some(Language::Roman),
            _ => None,
        }
    }

    /// Language name used in the prompt directive ("Respond entirely in ...").
    pub fn directive_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Ur => "Urdu",
            Language::Roman => "Roman Urdu",
        }
    }

    /// BCP-47 tag handed to the platform speech recognizer. Roman Urdu is
    /// dictated against the English recognition model.
    pub fn speech_tag(self) -> &'static str {
        match self {
            Language::Ur => "ur-PK",
            Language::En | Language::Roman => "en-US",
        }
    }

    /// True for the one right-to-left script language.
    pub fn is_urdu(self) -> bool {
        matches!(self, Language::Ur)
    }
}
