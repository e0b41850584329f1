// Host-side tests for language selection.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod locale {
    include!("../src/locale.rs");
}

use locale::*;
use site_core::content::Language;

#[test]
fn query_without_lang_defaults() {
    assert_eq!(language_from_query(""), Ok(None));
    assert_eq!(language_from_query("?"), Ok(None));
    assert_eq!(language_from_query("?utm_source=ig"), Ok(None));
    assert_eq!(language_from_query("?lang="), Ok(None));
}

#[test]
fn query_selects_supported_languages() {
    assert_eq!(language_from_query("?lang=pt"), Ok(Some(Language::Pt)));
    assert_eq!(language_from_query("?x=1&lang=EN"), Ok(Some(Language::En)));
    assert_eq!(language_from_query("lang=pt"), Ok(Some(Language::Pt)));
}

#[test]
fn query_reports_unsupported_languages() {
    let err = language_from_query("?lang=fr").unwrap_err();
    assert_eq!(err.0, "fr");
}

#[test]
fn context_clones_share_the_active_language() {
    let ctx = LanguageContext::new(Language::En);
    let other = ctx.clone();
    assert_eq!(ctx.toggle(), Language::Pt);
    assert_eq!(other.get(), Language::Pt);
    assert_eq!(other.translations().language, Language::Pt);
    other.set(Language::En);
    assert_eq!(ctx.translations().nav.contact, "Contact");
}
