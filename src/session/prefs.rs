//! Session preferences.

use std::sync::Mutex;

use clap::ValueEnum;

/// The languages offered by the selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Language {
    English,
    Hindi,
    Punjabi,
    Gujarati,
    Marathi,
}

impl Language {
    /// The selector label, in the language's own script.
    pub fn label(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "हिंदी",
            Language::Punjabi => "ਪੰਜਾਬੀ",
            Language::Gujarati => "ગુજરાતી",
            Language::Marathi => "मराठी",
        }
    }

    /// Parse a selector value, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "english" => Some(Language::English),
            "hindi" => Some(Language::Hindi),
            "punjabi" => Some(Language::Punjabi),
            "gujarati" => Some(Language::Gujarati),
            "marathi" => Some(Language::Marathi),
            _ => None,
        }
    }
}

/// Per-session preferences. The language value is held but, as in the
/// reference app, never consumed by any rendering path — all displayed
/// text stays English regardless of the selection.
pub struct Preferences {
    language: Mutex<Language>,
}

impl Preferences {
    pub fn new(language: Language) -> Self {
        Self {
            language: Mutex::new(language),
        }
    }

    pub fn language(&self) -> Language {
        *self.language.lock().unwrap()
    }

    pub fn set_language(&self, language: Language) {
        *self.language.lock().unwrap() = language;
    }
}

impl Default for Preferences {
    fn default() -> Self {
        Self::new(Language::English)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_is_case_insensitive() {
        assert_eq!(Language::from_name("Hindi"), Some(Language::Hindi));
        assert_eq!(Language::from_name("MARATHI"), Some(Language::Marathi));
        assert_eq!(Language::from_name("klingon"), None);
    }

    #[test]
    fn labels_use_native_script() {
        assert_eq!(Language::Hindi.label(), "हिंदी");
        assert_eq!(Language::English.label(), "English");
    }

    #[test]
    fn set_language_changes_only_the_stored_value() {
        let prefs = Preferences::default();
        assert_eq!(prefs.language(), Language::English);
        prefs.set_language(Language::Punjabi);
        assert_eq!(prefs.language(), Language::Punjabi);
    }
}
