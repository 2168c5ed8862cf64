//! Supported language catalog.

use std::fmt;

/// A language the translation service accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    code: &'static str,
    name: &'static str,
    speech_tag: &'static str,
}

/// Fixed list of languages offered by the selectors, in display order.
pub const LANGUAGES: [Language; 6] = [
    Language::new("en", "English", "en-US"),
    Language::new("zh", "中文", "zh-CN"),
    Language::new("ja", "日本語", "ja-JP"),
    Language::new("ko", "한국어", "ko-KR"),
    Language::new("es", "Español", "es-ES"),
    Language::new("fr", "Français", "fr-FR"),
];

impl Language {
    const fn new(code: &'static str, name: &'static str, speech_tag: &'static str) -> Self {
        Self {
            code,
            name,
            speech_tag,
        }
    }

    /// Looks up a language by its code, ignoring case.
    #[must_use]
    pub fn find(code: &str) -> Option<Self> {
        let code = code.trim();
        LANGUAGES
            .iter()
            .copied()
            .find(|lang| lang.code.eq_ignore_ascii_case(code))
    }

    /// Code sent to the translation API.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        self.code
    }

    /// Native display name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// BCP 47 tag handed to speech backends.
    #[must_use]
    pub const fn speech_tag(&self) -> &'static str {
        self.speech_tag
    }

    /// Next language in the catalog, wrapping at the end.
    #[must_use]
    pub fn next(self) -> Self {
        let index = self.index();
        LANGUAGES[(index + 1) % LANGUAGES.len()]
    }

    /// Previous language in the catalog, wrapping at the start.
    #[must_use]
    pub fn previous(self) -> Self {
        let index = self.index();
        LANGUAGES[(index + LANGUAGES.len() - 1) % LANGUAGES.len()]
    }

    fn index(self) -> usize {
        LANGUAGES
            .iter()
            .position(|lang| lang.code == self.code)
            .unwrap_or(0)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("en", "English" ; "english")]
    #[test_case("zh", "中文" ; "chinese")]
    #[test_case("JA", "日本語" ; "uppercase_code")]
    #[test_case(" ko ", "한국어" ; "padded_code")]
    fn test_find_known_language(code: &str, expected_name: &str) {
        let lang = Language::find(code).unwrap();
        assert_eq!(lang.name(), expected_name);
    }

    #[test]
    fn test_find_unknown_language() {
        assert!(Language::find("de").is_none());
        assert!(Language::find("").is_none());
    }

    #[test]
    fn test_next_wraps_around() {
        let last = LANGUAGES[LANGUAGES.len() - 1];
        assert_eq!(last.next(), LANGUAGES[0]);
        assert_eq!(LANGUAGES[0].next(), LANGUAGES[1]);
    }

    #[test]
    fn test_previous_wraps_around() {
        assert_eq!(LANGUAGES[0].previous(), LANGUAGES[LANGUAGES.len() - 1]);
        assert_eq!(LANGUAGES[2].previous(), LANGUAGES[1]);
    }

    #[test]
    fn test_codes_are_unique() {
        for (i, a) in LANGUAGES.iter().enumerate() {
            for b in &LANGUAGES[i + 1..] {
                assert_ne!(a.code(), b.code());
            }
        }
    }
}
