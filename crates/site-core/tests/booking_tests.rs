// Host-side tests for outbound booking links.

use site_core::content::{self, Language};
use site_core::{instagram_url, whatsapp_url, BookingIntent};

#[test]
fn whatsapp_url_percent_encodes_the_message() {
    let url = whatsapp_url("Hello! I'd like information about hang gliding flights");
    assert_eq!(
        url,
        "https://wa.me/5521975931852?text=Hello%21%20I%27d%20like%20information%20about%20hang%20gliding%20flights"
    );
}

#[test]
fn whatsapp_url_handles_non_ascii() {
    let url = whatsapp_url("Olá");
    assert!(url.ends_with("?text=Ol%C3%A1"));
}

#[test]
fn intents_parse_from_markup_attributes() {
    assert_eq!("info".parse::<BookingIntent>(), Ok(BookingIntent::Info));
    assert_eq!("cash".parse::<BookingIntent>(), Ok(BookingIntent::Cash));
    assert_eq!("card".parse::<BookingIntent>(), Ok(BookingIntent::Card));
    let err = "paypal".parse::<BookingIntent>().unwrap_err();
    assert_eq!(err.0, "paypal");
}

#[test]
fn intent_urls_follow_the_active_language() {
    let en = content::get(Language::En);
    let pt = content::get(Language::Pt);
    let cash_en = BookingIntent::Cash.url(en);
    assert!(cash_en.contains("%28cash%20payment%29"));
    let card_pt = BookingIntent::Card.url(pt);
    assert!(card_pt.contains("cart%C3%A3o"));
    assert_ne!(BookingIntent::Info.url(en), BookingIntent::Info.url(pt));
}

#[test]
fn instagram_url_drops_the_at_sign() {
    assert_eq!(
        instagram_url("@hanggliding.rio"),
        "https://www.instagram.com/hanggliding.rio/"
    );
    assert_eq!(
        instagram_url("flyhanggliderio"),
        "https://www.instagram.com/flyhanggliderio/"
    );
}
