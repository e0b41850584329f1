//! Attribute-driven rendering of page copy.
//!
//! Markup marks translatable nodes with `data-i18n="dotted.key"` (text) or
//! `data-i18n-list="dotted.key"` (rebuilt as `<li>` items), and booking
//! anchors with `data-whatsapp="info|cash|card"`. Re-running [`render`]
//! after a language toggle rewrites all of them in place.

use crate::dom;
use crate::locale::LanguageContext;
use crate::sections;
use site_core::content::Translations;
use site_core::BookingIntent;
use web_sys as web;

pub fn render(document: &web::Document, ctx: &LanguageContext) {
    let t = ctx.translations();
    apply_document_meta(document, t);
    apply_text(document, t);
    apply_lists(document, t);
    apply_booking_links(document, t);
    if let Some(toggle) = document.get_element_by_id("lang-toggle") {
        toggle.set_text_content(Some(t.language.toggle_label()));
    }
    if let Err(e) = sections::render_all(document, t) {
        log::error!("section render error: {:?}", e);
    }
    log::debug!("rendered page in {}", t.language);
}

fn apply_document_meta(document: &web::Document, t: &Translations) {
    document.set_title(t.meta.title);
    if let Some(root) = document.document_element() {
        let _ = root.set_attribute("lang", t.language.code());
    }
    if let Ok(Some(meta)) = document.query_selector("meta[name=description]") {
        let _ = meta.set_attribute("content", t.meta.description);
    }
}

fn apply_text(document: &web::Document, t: &Translations) {
    for el in dom::select_all(document, "[data-i18n]") {
        let Some(key) = el.get_attribute("data-i18n") else {
            continue;
        };
        match t.text(&key) {
            Some(text) => el.set_text_content(Some(text)),
            None => log::warn!("no text for data-i18n key {key:?}"),
        }
    }
}

fn apply_lists(document: &web::Document, t: &Translations) {
    for el in dom::select_all(document, "[data-i18n-list]") {
        let Some(key) = el.get_attribute("data-i18n-list") else {
            continue;
        };
        let Some(items) = t.list(&key) else {
            log::warn!("no list for data-i18n-list key {key:?}");
            continue;
        };
        el.set_text_content(None);
        for item in items {
            if let Ok(li) = dom::element(document, "li", "", Some(*item)) {
                let _ = el.append_child(&li);
            }
        }
    }
}

fn apply_booking_links(document: &web::Document, t: &Translations) {
    for el in dom::select_all(document, "[data-whatsapp]") {
        let raw = el.get_attribute("data-whatsapp").unwrap_or_default();
        match raw.parse::<BookingIntent>() {
            Ok(intent) => {
                let _ = el.set_attribute("href", &intent.url(t));
                let _ = el.set_attribute("target", "_blank");
                let _ = el.set_attribute("rel", "noopener noreferrer");
            }
            Err(e) => log::warn!("{e}"),
        }
    }
}
