// Host-side tests for the bilingual content store.

use site_core::content::{self, Entry, Language, GALLERY_PHOTO_COUNT, LIST_KEYS, TEXT_KEYS};

#[test]
fn every_text_key_resolves_in_both_languages() {
    for lang in Language::ALL {
        let t = content::get(lang);
        for key in TEXT_KEYS {
            match t.lookup(key) {
                Some(Entry::Text(s)) => assert!(!s.is_empty(), "{lang}: empty {key}"),
                other => panic!("{lang}: {key} resolved to {other:?}"),
            }
        }
    }
}

#[test]
fn every_list_key_resolves_to_matching_lengths() {
    let en = content::get(Language::En);
    let pt = content::get(Language::Pt);
    for key in LIST_KEYS {
        let a = en.list(key).unwrap_or_else(|| panic!("en missing {key}"));
        let b = pt.list(key).unwrap_or_else(|| panic!("pt missing {key}"));
        assert!(!a.is_empty());
        assert_eq!(a.len(), b.len(), "{key} differs in length");
    }
}

#[test]
fn unknown_keys_and_kind_mismatches_are_none() {
    let t = content::get(Language::En);
    assert!(t.lookup("nav").is_none());
    assert!(t.lookup("nav.missing").is_none());
    assert!(t.text("about.features").is_none());
    assert!(t.list("about.title").is_none());
}

#[test]
fn trees_are_selected_by_language() {
    let en = content::get(Language::En);
    let pt = content::get(Language::Pt);
    assert_eq!(en.language, Language::En);
    assert_eq!(pt.language, Language::Pt);
    assert_eq!(en.text("nav.about"), Some("About the Flight"));
    assert_eq!(pt.text("nav.about"), Some("Sobre o Voo"));
    assert_eq!(en.hero.talk_to_us, "TALK TO US");
    assert_eq!(pt.hero.talk_to_us, "FALE CONOSCO");
}

#[test]
fn structured_sections_line_up_across_languages() {
    let en = content::get(Language::En);
    let pt = content::get(Language::Pt);
    assert_eq!(en.faq.items.len(), 8);
    assert_eq!(pt.faq.items.len(), en.faq.items.len());
    assert_eq!(en.testimonials.items.len(), 3);
    assert_eq!(pt.testimonials.items.len(), en.testimonials.items.len());
    assert_eq!(en.prices.extras.len(), 2);
    assert_eq!(pt.prices.extras.len(), en.prices.extras.len());
    for (a, b) in en.prices.extras.iter().zip(pt.prices.extras) {
        assert_eq!(a.price, b.price);
    }
    assert_eq!(en.prices.cash_price, pt.prices.cash_price);
    assert_eq!(en.contact.phone.value, pt.contact.phone.value);
}

#[test]
fn language_codes_parse_and_reject() {
    assert_eq!("en".parse::<Language>(), Ok(Language::En));
    assert_eq!("PT".parse::<Language>(), Ok(Language::Pt));
    assert_eq!(" pt ".parse::<Language>(), Ok(Language::Pt));
    let err = "es".parse::<Language>().unwrap_err();
    assert_eq!(err.0, "es");
    assert!(err.to_string().contains("\"es\""));
    assert!("".parse::<Language>().is_err());
}

#[test]
fn toggle_flips_language_and_label() {
    assert_eq!(Language::default(), Language::En);
    assert_eq!(Language::En.toggled(), Language::Pt);
    assert_eq!(Language::Pt.toggled(), Language::En);
    assert_eq!(Language::En.toggle_label(), "PT");
    assert_eq!(Language::Pt.toggle_label(), "EN");
    assert_eq!(Language::Pt.to_string(), "pt");
}

#[test]
fn gallery_captions_repeat_for_extra_photos() {
    let g = &content::get(Language::En).gallery;
    for i in 0..GALLERY_PHOTO_COUNT {
        assert_eq!(g.photo_description(i), g.photo_descriptions[i % 3]);
    }
    assert_eq!(g.photo_description(3), "Stunning view of Rio de Janeiro from above");
    assert_eq!(g.video_description(1), Some("Takeoff and landing experience"));
    assert_eq!(g.video_description(2), None);
}

#[test]
fn footer_copyright_names_the_brand() {
    let en = content::get(Language::En);
    assert_eq!(
        en.footer.copyright(2026),
        "© 2026 Hang Gliding Rio. All rights reserved."
    );
    let pt = content::get(Language::Pt);
    assert!(pt.footer.copyright(2026).ends_with("Todos os direitos reservados."));
}
