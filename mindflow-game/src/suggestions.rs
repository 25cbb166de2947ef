//! Habit name suggestions behind a trait seam, so the web layer can
//! plug in a remote model while tests and offline builds stay local.

use crate::state::Language;

pub const MAX_SUGGESTIONS: usize = 3;

/// Source of short, RPG-flavored habit names for a focus area.
/// Implementations never see or touch game state.
pub trait HabitSuggester {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Suggest up to [`MAX_SUGGESTIONS`] habit names.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing source is unreachable.
    fn suggest(&self, focus_area: &str, language: Language) -> Result<Vec<String>, Self::Error>;
}

/// The built-in fallback list, also used when a remote source fails.
#[must_use]
pub fn fallback_list(language: Language) -> Vec<String> {
    let names: [&str; MAX_SUGGESTIONS] = match language {
        Language::Tr => ["Kadim Parşömenleri Oku", "Kılıç Talimi Yap", "Meditasyon"],
        Language::En => ["Read the Ancient Scrolls", "Sword Training Drill", "Meditate at Dawn"],
    };
    names.into_iter().map(String::from).collect()
}

/// Offline suggester backed by the fixed per-language list.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticSuggester;

impl HabitSuggester for StaticSuggester {
    type Error = std::convert::Infallible;

    fn suggest(&self, _focus_area: &str, language: Language) -> Result<Vec<String>, Self::Error> {
        Ok(fallback_list(language))
    }
}
