//! User-facing message catalog
//!
//! Notices shown by the TUI are looked up here instead of being formatted
//! inline, so they can follow the user's locale. The locale is taken from
//! `LANG`; anything that is not recognized falls back to English.

/// Supported locales
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Locale {
    En,
    De,
}

/// Resolves message ids to localized text
#[derive(Clone, Copy, Debug)]
pub struct Messages {
    locale: Locale,
}

impl Messages {
    pub fn from_env() -> Self {
        let lang = std::env::var("LANG").unwrap_or_default();
        Self::from_lang(&lang)
    }

    fn from_lang(lang: &str) -> Self {
        let locale = if lang.to_lowercase().starts_with("de") {
            Locale::De
        } else {
            Locale::En
        };
        Self { locale }
    }

    /// Notice shown after a favorite toggle was requested
    pub fn favorites_updated(&self) -> &'static str {
        match self.locale {
            Locale::En => "Favorites updated",
            Locale::De => "Favoriten aktualisiert",
        }
    }
}
