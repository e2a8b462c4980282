use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageCode {
    /// Auto-detect sentinel. Valid as a source language only.
    Auto,
    Ja,
    En,
    Zh,
    Ko,
    Es,
    Fr,
    De,
}

impl LanguageCode {
    pub const ALL: [LanguageCode; 8] = [
        LanguageCode::Auto,
        LanguageCode::Ja,
        LanguageCode::En,
        LanguageCode::Zh,
        LanguageCode::Ko,
        LanguageCode::Es,
        LanguageCode::Fr,
        LanguageCode::De,
    ];

    pub fn code(self) -> &'static str {
        match self {
            LanguageCode::Auto => "auto",
            LanguageCode::Ja => "ja",
            LanguageCode::En => "en",
            LanguageCode::Zh => "zh",
            LanguageCode::Ko => "ko",
            LanguageCode::Es => "es",
            LanguageCode::Fr => "fr",
            LanguageCode::De => "de",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.code() == code)
    }

    pub fn is_auto(self) -> bool {
        self == LanguageCode::Auto
    }

    /// Languages a user may pick as a translation target.
    pub fn targets() -> impl Iterator<Item = LanguageCode> {
        Self::ALL.into_iter().filter(|lang| !lang.is_auto())
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_lowercase_on_the_wire() {
        let json = serde_json::to_string(&LanguageCode::Ja).unwrap();
        assert_eq!(json, "\"ja\"");
        let back: LanguageCode = serde_json::from_str("\"auto\"").unwrap();
        assert_eq!(back, LanguageCode::Auto);
    }

    #[test]
    fn targets_exclude_auto() {
        assert!(LanguageCode::targets().all(|lang| lang != LanguageCode::Auto));
        assert_eq!(LanguageCode::targets().count(), LanguageCode::ALL.len() - 1);
    }

    #[test]
    fn from_code_rejects_unknown() {
        assert_eq!(LanguageCode::from_code("de"), Some(LanguageCode::De));
        assert_eq!(LanguageCode::from_code("xx"), None);
    }
}
