//! Sections whose markup is generated from structured content rather than
//! single strings.

use crate::dom::{element, replace_children};
use site_core::content::{Translations, GALLERY_PHOTO_COUNT, GALLERY_VIDEO_COUNT};
use site_core::{instagram_url, MAPS_EMBED_URL};
use wasm_bindgen::JsValue;
use web_sys as web;

const STAR_COUNT: usize = 5;

pub fn render_all(document: &web::Document, t: &Translations) -> Result<(), JsValue> {
    highlights(document, t)?;
    extras(document, t)?;
    gallery(document, t)?;
    testimonials(document, t)?;
    faq(document, t)?;
    hours(document, t)?;
    instagram_links(document, t);
    map(document);
    footer(document, t);
    Ok(())
}

fn highlights(document: &web::Document, t: &Translations) -> Result<(), JsValue> {
    let mut cards = Vec::with_capacity(t.hero.highlights.len());
    for h in &t.hero.highlights {
        let card = element(document, "div", "highlight", None)?;
        card.append_child(&element(document, "h3", "highlight-title", Some(h.title))?)?;
        card.append_child(&element(document, "p", "highlight-text", Some(h.text))?)?;
        cards.push(card);
    }
    replace_children(document, "hero-highlights", cards)
}

fn extras(document: &web::Document, t: &Translations) -> Result<(), JsValue> {
    let mut rows = Vec::with_capacity(t.prices.extras.len());
    for extra in t.prices.extras {
        let row = element(document, "div", "extra", None)?;
        let info = element(document, "div", "extra-info", None)?;
        info.append_child(&element(document, "h4", "extra-title", Some(extra.title))?)?;
        info.append_child(&element(
            document,
            "p",
            "extra-description",
            Some(extra.description),
        )?)?;
        row.append_child(&info)?;
        row.append_child(&element(document, "span", "extra-price", Some(extra.price))?)?;
        rows.push(row);
    }
    replace_children(document, "price-extras", rows)
}

fn gallery(document: &web::Document, t: &Translations) -> Result<(), JsValue> {
    let g = &t.gallery;
    let mut photos = Vec::with_capacity(GALLERY_PHOTO_COUNT);
    for i in 0..GALLERY_PHOTO_COUNT {
        let figure = element(document, "figure", "gallery-photo", None)?;
        let img = element(document, "img", "", None)?;
        img.set_attribute("src", &format!("/gallery-{}.jpg", i + 1))?;
        img.set_attribute("alt", &format!("Hang Gliding {}", i + 1))?;
        img.set_attribute("loading", "lazy")?;
        figure.append_child(&img)?;
        figure.append_child(&element(
            document,
            "figcaption",
            "",
            Some(g.photo_description(i)),
        )?)?;
        photos.push(figure);
    }
    replace_children(document, "gallery-photos", photos)?;

    let mut videos = Vec::with_capacity(GALLERY_VIDEO_COUNT);
    for i in 0..GALLERY_VIDEO_COUNT {
        let tile = element(document, "div", "gallery-video", None)?;
        tile.append_child(&element(document, "span", "play", Some("▶"))?)?;
        if let Some(caption) = g.video_description(i) {
            tile.append_child(&element(document, "p", "", Some(caption))?)?;
        }
        videos.push(tile);
    }
    replace_children(document, "gallery-videos", videos)
}

fn testimonials(document: &web::Document, t: &Translations) -> Result<(), JsValue> {
    let mut cards = Vec::with_capacity(t.testimonials.items.len());
    for (i, item) in t.testimonials.items.iter().enumerate() {
        let card = element(document, "article", "testimonial", None)?;
        let avatar = element(document, "img", "avatar", None)?;
        avatar.set_attribute("src", &format!("/testimonial-{}.jpg", i + 1))?;
        avatar.set_attribute("alt", item.name)?;
        card.append_child(&avatar)?;
        let stars = element(document, "div", "stars", None)?;
        stars.set_attribute("aria-label", "5/5")?;
        for _ in 0..STAR_COUNT {
            stars.append_child(&element(document, "span", "star", Some("★"))?)?;
        }
        card.append_child(&stars)?;
        let quote = format!("\"{}\"", item.text);
        card.append_child(&element(document, "p", "quote", Some(&quote))?)?;
        card.append_child(&element(document, "p", "name", Some(item.name))?)?;
        card.append_child(&element(document, "p", "location", Some(item.location))?)?;
        cards.push(card);
    }
    replace_children(document, "testimonials-list", cards)
}

fn faq(document: &web::Document, t: &Translations) -> Result<(), JsValue> {
    let mut items = Vec::with_capacity(t.faq.items.len());
    for item in t.faq.items {
        let details = element(document, "details", "faq-item", None)?;
        // Shared name makes the browser keep a single item open.
        details.set_attribute("name", "faq")?;
        details.append_child(&element(document, "summary", "", Some(item.question))?)?;
        details.append_child(&element(document, "p", "", Some(item.answer))?)?;
        items.push(details);
    }
    replace_children(document, "faq-list", items)
}

fn hours(document: &web::Document, t: &Translations) -> Result<(), JsValue> {
    let h = &t.contact.hours;
    let mut rows = Vec::with_capacity(2);
    for day in [&h.weekdays, &h.weekends] {
        let row = element(document, "div", "hours-row", None)?;
        row.append_child(&element(document, "span", "day", Some(day.day))?)?;
        row.append_child(&element(document, "span", "hours", Some(day.hours))?)?;
        rows.push(row);
    }
    replace_children(document, "contact-hours", rows)
}

fn instagram_links(document: &web::Document, t: &Translations) {
    let handle = t.contact.instagram.value;
    for el in crate::dom::select_all(document, "[data-instagram]") {
        let _ = el.set_attribute("href", &instagram_url(handle));
        let _ = el.set_attribute("target", "_blank");
        let _ = el.set_attribute("rel", "noopener noreferrer");
    }
}

fn map(document: &web::Document) {
    if let Some(frame) = document.get_element_by_id("contact-map") {
        if frame.get_attribute("src").as_deref() != Some(MAPS_EMBED_URL) {
            let _ = frame.set_attribute("src", MAPS_EMBED_URL);
        }
    }
}

fn footer(document: &web::Document, t: &Translations) {
    if let Some(el) = document.get_element_by_id("footer-copyright") {
        let year = js_sys::Date::new_0().get_full_year();
        el.set_text_content(Some(&t.footer.copyright(year)));
    }
}
