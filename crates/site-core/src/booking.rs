use crate::constants::WHATSAPP_NUMBER;
use crate::content::Translations;
use std::str::FromStr;

pub const MAPS_EMBED_URL: &str = "https://www.google.com/maps?q=Av.+Pref.+Mendes+de+Morais,+1502+-+CSCVL+-+S%C3%A3o+Conrado,+Rio+de+Janeiro+-+RJ,+22610-095&output=embed";

/// Chat deep link with `message` prefilled.
pub fn whatsapp_url(message: &str) -> String {
    format!(
        "https://wa.me/{}?text={}",
        WHATSAPP_NUMBER,
        urlencoding::encode(message)
    )
}

/// Profile link for a handle as shown on the page (`@name`).
pub fn instagram_url(handle: &str) -> String {
    format!("https://www.instagram.com/{}/", handle.trim_start_matches('@'))
}

/// Which conversation a booking link opens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BookingIntent {
    Info,
    Cash,
    Card,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown booking intent {0:?}")]
pub struct UnknownBookingIntent(pub String);

impl BookingIntent {
    pub fn message(self, t: &Translations) -> &'static str {
        match self {
            BookingIntent::Info => t.booking.info_message,
            BookingIntent::Cash => t.booking.cash_message,
            BookingIntent::Card => t.booking.card_message,
        }
    }

    pub fn url(self, t: &Translations) -> String {
        whatsapp_url(self.message(t))
    }
}

impl FromStr for BookingIntent {
    type Err = UnknownBookingIntent;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "info" => Ok(BookingIntent::Info),
            "cash" => Ok(BookingIntent::Cash),
            "card" => Ok(BookingIntent::Card),
            other => Err(UnknownBookingIntent(other.to_string())),
        }
    }
}
