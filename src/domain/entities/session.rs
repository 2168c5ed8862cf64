//! Ephemeral translation session state.

use std::time::{Duration, Instant};

use super::Language;

/// How long the copy confirmation stays visible.
pub const COPY_INDICATOR_DURATION: Duration = Duration::from_secs(2);

/// One of the two text panes of the translator view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pane {
    /// Editable source text.
    #[default]
    Source,
    /// Read-only translated text.
    Translation,
}

impl Pane {
    /// Returns the other pane.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Source => Self::Translation,
            Self::Translation => Self::Source,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CopyIndicator {
    pane: Pane,
    since: Instant,
}

/// State of a single translator view, discarded when the view closes.
#[derive(Debug, Clone)]
pub struct Session {
    source_language: Language,
    target_language: Language,
    source_text: String,
    translated_text: String,
    loading: bool,
    copied: Option<CopyIndicator>,
}

impl Session {
    /// Creates an empty session for the given language pair.
    #[must_use]
    pub const fn new(source_language: Language, target_language: Language) -> Self {
        Self {
            source_language,
            target_language,
            source_text: String::new(),
            translated_text: String::new(),
            loading: false,
            copied: None,
        }
    }

    /// Language of the source pane.
    #[must_use]
    pub const fn source_language(&self) -> Language {
        self.source_language
    }

    /// Language of the translation pane.
    #[must_use]
    pub const fn target_language(&self) -> Language {
        self.target_language
    }

    /// Sets the source language.
    pub fn set_source_language(&mut self, language: Language) {
        self.source_language = language;
    }

    /// Sets the target language.
    pub fn set_target_language(&mut self, language: Language) {
        self.target_language = language;
    }

    /// Text typed by the user.
    #[must_use]
    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    /// Last successful translation.
    #[must_use]
    pub fn translated_text(&self) -> &str {
        &self.translated_text
    }

    /// Replaces the source text.
    pub fn set_source_text(&mut self, text: impl Into<String>) {
        self.source_text = text.into();
    }

    /// Empties the source. The translation is kept.
    pub fn clear_source_text(&mut self) {
        self.source_text.clear();
    }

    /// Replaces the translated text.
    pub fn set_translated_text(&mut self, text: impl Into<String>) {
        self.translated_text = text.into();
    }

    /// Text shown in the given pane.
    #[must_use]
    pub fn text_of(&self, pane: Pane) -> &str {
        match pane {
            Pane::Source => &self.source_text,
            Pane::Translation => &self.translated_text,
        }
    }

    /// Language of the text shown in the given pane.
    #[must_use]
    pub const fn language_of(&self, pane: Pane) -> Language {
        match pane {
            Pane::Source => self.source_language,
            Pane::Translation => self.target_language,
        }
    }

    /// Exchanges both the language pair and the two texts in one step.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.source_language, &mut self.target_language);
        std::mem::swap(&mut self.source_text, &mut self.translated_text);
    }

    /// A request is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether a translation may be submitted right now.
    #[must_use]
    pub fn can_translate(&self) -> bool {
        !self.loading && !self.source_text.is_empty()
    }

    /// Enters the loading state. Returns `false` and leaves the state
    /// untouched when a translation cannot be submitted.
    pub fn start_loading(&mut self) -> bool {
        if !self.can_translate() {
            return false;
        }
        self.loading = true;
        true
    }

    /// Clears the loading flag after a request settles.
    pub fn finish_loading(&mut self) {
        self.loading = false;
    }

    /// Shows the copy confirmation for `pane` starting at `now`.
    pub fn mark_copied(&mut self, pane: Pane, now: Instant) {
        self.copied = Some(CopyIndicator { pane, since: now });
    }

    /// Pane whose copy confirmation is visible at `now`, if any.
    #[must_use]
    pub fn copied_pane(&self, now: Instant) -> Option<Pane> {
        self.copied
            .filter(|indicator| {
                now.saturating_duration_since(indicator.since) < COPY_INDICATOR_DURATION
            })
            .map(|indicator| indicator.pane)
    }

    /// Drops an elapsed copy confirmation. Returns `true` when it was removed.
    pub fn expire_copied(&mut self, now: Instant) -> bool {
        if self.copied.is_some() && self.copied_pane(now).is_none() {
            self.copied = None;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lang(code: &str) -> Language {
        Language::find(code).unwrap()
    }

    fn session() -> Session {
        Session::new(lang("en"), lang("zh"))
    }

    #[test]
    fn test_new_session_is_idle_and_empty() {
        let session = session();
        assert_eq!(session.source_language().code(), "en");
        assert_eq!(session.target_language().code(), "zh");
        assert!(session.source_text().is_empty());
        assert!(session.translated_text().is_empty());
        assert!(!session.is_loading());
    }

    #[test]
    fn test_swap_exchanges_languages_and_texts() {
        let mut session = session();
        session.set_source_text("hello");
        session.set_translated_text("你好");

        session.swap();

        assert_eq!(session.source_language().code(), "zh");
        assert_eq!(session.target_language().code(), "en");
        assert_eq!(session.source_text(), "你好");
        assert_eq!(session.translated_text(), "hello");
    }

    #[test]
    fn test_swap_twice_restores_state() {
        let mut session = session();
        session.set_source_text("bonjour");
        session.set_translated_text("hello");
        session.set_source_language(lang("fr"));
        session.set_target_language(lang("en"));

        session.swap();
        session.swap();

        assert_eq!(session.source_language().code(), "fr");
        assert_eq!(session.target_language().code(), "en");
        assert_eq!(session.source_text(), "bonjour");
        assert_eq!(session.translated_text(), "hello");
    }

    #[test]
    fn test_cannot_translate_empty_text() {
        let mut session = session();
        assert!(!session.can_translate());
        assert!(!session.start_loading());
        assert!(!session.is_loading());
    }

    #[test]
    fn test_whitespace_counts_as_text() {
        let mut session = session();
        session.set_source_text(" ");
        assert!(session.can_translate());
    }

    #[test]
    fn test_cannot_translate_while_loading() {
        let mut session = session();
        session.set_source_text("hello");

        assert!(session.start_loading());
        assert!(!session.can_translate());
        assert!(!session.start_loading());

        session.finish_loading();
        assert!(session.can_translate());
    }

    #[test]
    fn test_copy_indicator_reverts_after_two_seconds() {
        let mut session = session();
        let start = Instant::now();

        session.mark_copied(Pane::Source, start);
        assert_eq!(session.copied_pane(start), Some(Pane::Source));
        assert_eq!(
            session.copied_pane(start + Duration::from_millis(1999)),
            Some(Pane::Source)
        );
        assert!(!session.expire_copied(start + Duration::from_millis(1999)));

        let later = start + COPY_INDICATOR_DURATION;
        assert_eq!(session.copied_pane(later), None);
        assert!(session.expire_copied(later));
        assert!(!session.expire_copied(later));
    }

    #[test]
    fn test_copy_indicator_restarts_on_second_copy() {
        let mut session = session();
        let start = Instant::now();

        session.mark_copied(Pane::Source, start);
        session.mark_copied(Pane::Translation, start + Duration::from_secs(1));

        let check = start + Duration::from_millis(2500);
        assert_eq!(session.copied_pane(check), Some(Pane::Translation));
    }

    #[test]
    fn test_pane_accessors() {
        let mut session = session();
        session.set_source_text("a");
        session.set_translated_text("b");

        assert_eq!(session.text_of(Pane::Source), "a");
        assert_eq!(session.text_of(Pane::Translation), "b");
        assert_eq!(session.language_of(Pane::Translation).code(), "zh");
        assert_eq!(Pane::Source.toggled(), Pane::Translation);
    }
}
