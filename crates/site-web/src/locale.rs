use site_core::content::{self, Language, Translations, UnknownLanguage};
use std::cell::Cell;
use std::rc::Rc;

/// Shared handle to the active language. Cloned into every closure that
/// renders copy, so a toggle is seen by all of them.
#[derive(Clone, Debug, Default)]
pub struct LanguageContext(Rc<Cell<Language>>);

impl LanguageContext {
    pub fn new(language: Language) -> Self {
        Self(Rc::new(Cell::new(language)))
    }

    pub fn get(&self) -> Language {
        self.0.get()
    }

    pub fn set(&self, language: Language) {
        self.0.set(language);
    }

    /// Flip between the two languages and return the new one.
    pub fn toggle(&self) -> Language {
        let next = self.get().toggled();
        self.set(next);
        next
    }

    pub fn translations(&self) -> &'static Translations {
        content::get(self.get())
    }
}

/// Reads `lang` from a `location.search` string such as `?lang=pt&x=1`.
///
/// `Ok(None)` when the parameter is absent or empty.
pub fn language_from_query(search: &str) -> Result<Option<Language>, UnknownLanguage> {
    let query = search.strip_prefix('?').unwrap_or(search);
    let value = query
        .split('&')
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .find(|(k, _)| *k == "lang")
        .map(|(_, v)| v);
    match value {
        Some(v) if !v.is_empty() => v.parse().map(Some),
        _ => Ok(None),
    }
}
