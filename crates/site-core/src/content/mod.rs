//! Bilingual copy for the page.
//!
//! Each supported [`Language`] maps to one static [`Translations`] tree.
//! Markup refers to strings through dotted semantic keys (`"nav.about"`,
//! `"about.features"`) resolved by [`Translations::lookup`]; structured
//! sections (testimonials, FAQ, extras) are read straight off the tree.

mod en;
mod pt;

use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    En,
    Pt,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported language code {0:?} (expected \"en\" or \"pt\")")]
pub struct UnknownLanguage(pub String);

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Pt];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Pt => "pt",
        }
    }

    pub fn toggled(self) -> Language {
        match self {
            Language::En => Language::Pt,
            Language::Pt => Language::En,
        }
    }

    /// Label of the switch button: names the language it switches to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Language::En => "PT",
            Language::Pt => "EN",
        }
    }
}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "pt" => Ok(Language::Pt),
            _ => Err(UnknownLanguage(s.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Translation tree for `language`.
pub fn get(language: Language) -> &'static Translations {
    match language {
        Language::En => &en::EN,
        Language::Pt => &pt::PT,
    }
}

pub type List = &'static [&'static str];

#[derive(Debug)]
pub struct Meta {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug)]
pub struct Nav {
    pub about: &'static str,
    pub prices: &'static str,
    pub gallery: &'static str,
    pub testimonials: &'static str,
    pub faq: &'static str,
    pub contact: &'static str,
    pub book_flight: &'static str,
}

#[derive(Debug)]
pub struct Highlight {
    pub title: &'static str,
    pub text: &'static str,
}

#[derive(Debug)]
pub struct Hero {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub book_now: &'static str,
    pub learn_more: &'static str,
    pub headline_lead: &'static str,
    pub headline_mid: &'static str,
    pub headline_accent: &'static str,
    pub intro: &'static str,
    pub talk_to_us: &'static str,
    pub highlights: [Highlight; 3],
}

#[derive(Debug)]
pub struct About {
    pub title: &'static str,
    pub paragraph1: &'static str,
    pub paragraph2: &'static str,
    pub features: List,
}

#[derive(Debug)]
pub struct AboutFly {
    pub title: &'static str,
    pub paragraph1: &'static str,
    pub paragraph2: &'static str,
}

#[derive(Debug)]
pub struct Extra {
    pub title: &'static str,
    pub description: &'static str,
    pub price: &'static str,
}

#[derive(Debug)]
pub struct Prices {
    pub title: &'static str,
    pub cash_price: &'static str,
    pub cash_payment: &'static str,
    pub card_price: &'static str,
    pub card_payment: &'static str,
    pub features: List,
    pub book_flight: &'static str,
    pub extras_title: &'static str,
    pub extras: &'static [Extra],
}

#[derive(Debug)]
pub struct Gallery {
    pub title: &'static str,
    pub photos: &'static str,
    pub videos: &'static str,
    pub photo_descriptions: List,
    pub video_descriptions: List,
}

pub const GALLERY_PHOTO_COUNT: usize = 6;
pub const GALLERY_VIDEO_COUNT: usize = 2;

impl Gallery {
    /// Photos outnumber the captions; captions repeat in order.
    pub fn photo_description(&self, index: usize) -> &'static str {
        match self.photo_descriptions.len() {
            0 => "",
            n => self.photo_descriptions[index % n],
        }
    }

    pub fn video_description(&self, index: usize) -> Option<&'static str> {
        self.video_descriptions.get(index).copied()
    }
}

#[derive(Debug)]
pub struct Testimonial {
    pub name: &'static str,
    pub location: &'static str,
    pub text: &'static str,
}

#[derive(Debug)]
pub struct Testimonials {
    pub title: &'static str,
    pub items: &'static [Testimonial],
}

#[derive(Debug)]
pub struct FaqItem {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug)]
pub struct Faq {
    pub title: &'static str,
    pub items: &'static [FaqItem],
}

#[derive(Debug)]
pub struct LabeledValue {
    pub title: &'static str,
    pub value: &'static str,
}

#[derive(Debug)]
pub struct DayHours {
    pub day: &'static str,
    pub hours: &'static str,
}

#[derive(Debug)]
pub struct Hours {
    pub title: &'static str,
    pub weekdays: DayHours,
    pub weekends: DayHours,
    pub note: &'static str,
}

#[derive(Debug)]
pub struct Contact {
    pub title: &'static str,
    pub phone: LabeledValue,
    pub instagram: LabeledValue,
    pub location: LabeledValue,
    pub hours: Hours,
    pub map_caption: &'static str,
    pub book_now: &'static str,
}

#[derive(Debug)]
pub struct Footer {
    pub description: &'static str,
    pub quick_links: &'static str,
    pub contact: &'static str,
    pub whatsapp: &'static str,
    pub instagram: &'static str,
    pub location: &'static str,
    pub location_value: &'static str,
    pub rights: &'static str,
}

pub const BRAND: &str = "Hang Gliding Rio";

impl Footer {
    pub fn copyright(&self, year: u32) -> String {
        format!("© {year} {BRAND}. {}", self.rights)
    }
}

/// Prefilled chat messages for the booking links.
#[derive(Debug)]
pub struct Booking {
    pub info_message: &'static str,
    pub cash_message: &'static str,
    pub card_message: &'static str,
}

#[derive(Debug)]
pub struct Translations {
    pub language: Language,
    pub meta: Meta,
    pub nav: Nav,
    pub hero: Hero,
    pub about: About,
    pub about_fly: AboutFly,
    pub prices: Prices,
    pub gallery: Gallery,
    pub testimonials: Testimonials,
    pub faq: Faq,
    pub contact: Contact,
    pub footer: Footer,
    pub booking: Booking,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Entry {
    Text(&'static str),
    List(List),
}

impl Entry {
    pub fn as_text(self) -> Option<&'static str> {
        match self {
            Entry::Text(s) => Some(s),
            Entry::List(_) => None,
        }
    }

    pub fn as_list(self) -> Option<List> {
        match self {
            Entry::List(l) => Some(l),
            Entry::Text(_) => None,
        }
    }
}

/// Every key that resolves to [`Entry::Text`].
pub const TEXT_KEYS: &[&str] = &[
    "meta.title",
    "meta.description",
    "nav.about",
    "nav.prices",
    "nav.gallery",
    "nav.testimonials",
    "nav.faq",
    "nav.contact",
    "nav.bookFlight",
    "hero.title",
    "hero.subtitle",
    "hero.bookNow",
    "hero.learnMore",
    "hero.headlineLead",
    "hero.headlineMid",
    "hero.headlineAccent",
    "hero.intro",
    "hero.talkToUs",
    "about.title",
    "about.paragraph1",
    "about.paragraph2",
    "aboutFly.title",
    "aboutFly.paragraph1",
    "aboutFly.paragraph2",
    "prices.title",
    "prices.cashPrice",
    "prices.cashPayment",
    "prices.cardPrice",
    "prices.cardPayment",
    "prices.bookFlight",
    "prices.extrasTitle",
    "gallery.title",
    "gallery.photos",
    "gallery.videos",
    "testimonials.title",
    "faq.title",
    "contact.title",
    "contact.phone.title",
    "contact.phone.value",
    "contact.instagram.title",
    "contact.instagram.value",
    "contact.location.title",
    "contact.location.value",
    "contact.hours.title",
    "contact.hours.weekdays.day",
    "contact.hours.weekdays.hours",
    "contact.hours.weekends.day",
    "contact.hours.weekends.hours",
    "contact.hours.note",
    "contact.mapCaption",
    "contact.bookNow",
    "footer.description",
    "footer.quickLinks",
    "footer.contact",
    "footer.whatsapp",
    "footer.instagram",
    "footer.location",
    "footer.locationValue",
    "footer.rights",
];

/// Every key that resolves to [`Entry::List`].
pub const LIST_KEYS: &[&str] = &[
    "about.features",
    "prices.features",
    "gallery.photoDescriptions",
    "gallery.videoDescriptions",
];

impl Translations {
    pub fn lookup(&self, key: &str) -> Option<Entry> {
        use Entry::{List, Text};
        let entry = match key {
            "meta.title" => Text(self.meta.title),
            "meta.description" => Text(self.meta.description),

            "nav.about" => Text(self.nav.about),
            "nav.prices" => Text(self.nav.prices),
            "nav.gallery" => Text(self.nav.gallery),
            "nav.testimonials" => Text(self.nav.testimonials),
            "nav.faq" => Text(self.nav.faq),
            "nav.contact" => Text(self.nav.contact),
            "nav.bookFlight" => Text(self.nav.book_flight),

            "hero.title" => Text(self.hero.title),
            "hero.subtitle" => Text(self.hero.subtitle),
            "hero.bookNow" => Text(self.hero.book_now),
            "hero.learnMore" => Text(self.hero.learn_more),
            "hero.headlineLead" => Text(self.hero.headline_lead),
            "hero.headlineMid" => Text(self.hero.headline_mid),
            "hero.headlineAccent" => Text(self.hero.headline_accent),
            "hero.intro" => Text(self.hero.intro),
            "hero.talkToUs" => Text(self.hero.talk_to_us),

            "about.title" => Text(self.about.title),
            "about.paragraph1" => Text(self.about.paragraph1),
            "about.paragraph2" => Text(self.about.paragraph2),
            "about.features" => List(self.about.features),

            "aboutFly.title" => Text(self.about_fly.title),
            "aboutFly.paragraph1" => Text(self.about_fly.paragraph1),
            "aboutFly.paragraph2" => Text(self.about_fly.paragraph2),

            "prices.title" => Text(self.prices.title),
            "prices.cashPrice" => Text(self.prices.cash_price),
            "prices.cashPayment" => Text(self.prices.cash_payment),
            "prices.cardPrice" => Text(self.prices.card_price),
            "prices.cardPayment" => Text(self.prices.card_payment),
            "prices.features" => List(self.prices.features),
            "prices.bookFlight" => Text(self.prices.book_flight),
            "prices.extrasTitle" => Text(self.prices.extras_title),

            "gallery.title" => Text(self.gallery.title),
            "gallery.photos" => Text(self.gallery.photos),
            "gallery.videos" => Text(self.gallery.videos),
            "gallery.photoDescriptions" => List(self.gallery.photo_descriptions),
            "gallery.videoDescriptions" => List(self.gallery.video_descriptions),

            "testimonials.title" => Text(self.testimonials.title),
            "faq.title" => Text(self.faq.title),

            "contact.title" => Text(self.contact.title),
            "contact.phone.title" => Text(self.contact.phone.title),
            "contact.phone.value" => Text(self.contact.phone.value),
            "contact.instagram.title" => Text(self.contact.instagram.title),
            "contact.instagram.value" => Text(self.contact.instagram.value),
            "contact.location.title" => Text(self.contact.location.title),
            "contact.location.value" => Text(self.contact.location.value),
            "contact.hours.title" => Text(self.contact.hours.title),
            "contact.hours.weekdays.day" => Text(self.contact.hours.weekdays.day),
            "contact.hours.weekdays.hours" => Text(self.contact.hours.weekdays.hours),
            "contact.hours.weekends.day" => Text(self.contact.hours.weekends.day),
            "contact.hours.weekends.hours" => Text(self.contact.hours.weekends.hours),
            "contact.hours.note" => Text(self.contact.hours.note),
            "contact.mapCaption" => Text(self.contact.map_caption),
            "contact.bookNow" => Text(self.contact.book_now),

            "footer.description" => Text(self.footer.description),
            "footer.quickLinks" => Text(self.footer.quick_links),
            "footer.contact" => Text(self.footer.contact),
            "footer.whatsapp" => Text(self.footer.whatsapp),
            "footer.instagram" => Text(self.footer.instagram),
            "footer.location" => Text(self.footer.location),
            "footer.locationValue" => Text(self.footer.location_value),
            "footer.rights" => Text(self.footer.rights),

            _ => return None,
        };
        Some(entry)
    }

    pub fn text(&self, key: &str) -> Option<&'static str> {
        self.lookup(key).and_then(Entry::as_text)
    }

    pub fn list(&self, key: &str) -> Option<List> {
        self.lookup(key).and_then(Entry::as_list)
    }
}
