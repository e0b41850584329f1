use super::*;

pub(super) static EN: Translations = Translations {
    language: Language::En,
    meta: Meta {
        title: "Hang Gliding Rio - Hang Gliding Experience in São Conrado",
        description: "Experience the unique sensation of hang gliding over the stunning landscapes of Rio de Janeiro. Flights departing from Pedra Bonita with landing at São Conrado Beach.",
    },
    nav: Nav {
        about: "About the Flight",
        prices: "Prices",
        gallery: "Gallery",
        testimonials: "Testimonials",
        faq: "FAQ",
        contact: "Contact",
        book_flight: "Book Flight",
    },
    hero: Hero {
        title: "Hang Gliding in São Conrado",
        subtitle: "Unforgettable experience in the skies of Rio de Janeiro!",
        book_now: "Book your flight now",
        learn_more: "Learn more",
        headline_lead: "CONNECT WITH NATURE AND",
        headline_mid: "DISCOVER THE",
        headline_accent: "BEAUTY OF LIFE",
        intro: "At Hang Gliding Rio, we want you to experience an incredible journey over breathtaking landscapes and discover sides of yourself you haven't explored yet.",
        talk_to_us: "TALK TO US",
        highlights: [
            Highlight {
                title: "Safety First",
                text: "Certified instructors and regularly inspected equipment for your peace of mind.",
            },
            Highlight {
                title: "Unforgettable Experience",
                text: "10-15 minutes of pure adrenaline and breathtaking views of Rio de Janeiro.",
            },
            Highlight {
                title: "Memories for Life",
                text: "Photos and videos included to capture your amazing adventure from the sky.",
            },
        ],
    },
    about: About {
        title: "About the Flight",
        paragraph1: "Experience the unique sensation of flying like a bird over the stunning landscapes of Rio de Janeiro. Our hang gliding flights take off from Pedra Bonita and land on São Conrado Beach.",
        paragraph2: "The experience is conducted by professional instructors with years of experience and all the necessary certifications to ensure your safety and enjoyment.",
        features: &[
            "Average flight duration: 10-15 minutes",
            "Takeoff: Pedra Bonita Ramp (altitude 520m)",
            "Landing: São Conrado Beach",
            "Instructors certified by ABVL",
        ],
    },
    about_fly: AboutFly {
        title: "About FlyHangGlidingRio",
        paragraph1: "FlyHangGlidingRio connects you with the best hang gliding instructors in Rio de Janeiro. Our role is to make your experience easy from the very first contact, ensuring you fly with certified, passionate, and experienced professionals.",
        paragraph2: "We work with highly qualified pilots who prioritize safety, fun, and professionalism to make your flight unforgettable. Book with us and feel the thrill of hang gliding over the breathtaking scenery of São Conrado!",
    },
    prices: Prices {
        title: "Prices",
        cash_price: "R$800",
        cash_payment: "Cash Payment",
        card_price: "R$880",
        card_payment: "Card Payment",
        features: &[
            "Flight with certified instructor",
            "Front camera included",
            "Transportation to takeoff ramp",
            "Safety equipment",
        ],
        book_flight: "Book Flight",
        extras_title: "Optional Extras",
        extras: &[
            Extra {
                title: "Side Camera",
                description: "Capture different angles of your flight",
                price: "R$100",
            },
            Extra {
                title: "360° Camera",
                description: "Complete immersive experience",
                price: "R$150",
            },
        ],
    },
    gallery: Gallery {
        title: "Gallery",
        photos: "Photos",
        videos: "Videos",
        photo_descriptions: &[
            "Stunning view of Rio de Janeiro from above",
            "Flying over São Conrado Beach",
            "Pedra Bonita takeoff point",
        ],
        video_descriptions: &[
            "Hang gliding flight in São Conrado",
            "Takeoff and landing experience",
        ],
    },
    testimonials: Testimonials {
        title: "Testimonials",
        items: &[
            Testimonial {
                name: "Ana Silva",
                location: "São Paulo, Brazil",
                text: "An incredible experience! The instructor made me feel super comfortable and the views of Rio are breathtaking. Highly recommend!",
            },
            Testimonial {
                name: "Carlos Mendes",
                location: "Rio de Janeiro, Brazil",
                text: "I always wanted to hang glide and finally fulfilled this dream. Super capable and attentive professionals. I'll definitely be back!",
            },
            Testimonial {
                name: "Julia Santos",
                location: "Curitiba, Brazil",
                text: "Best experience of my trip to Rio! The photos and videos turned out amazing, and the instructor was very patient with my initial nervousness.",
            },
        ],
    },
    faq: Faq {
        title: "Frequently Asked Questions",
        items: &[
            FaqItem {
                question: "What are the days and times for the flight?",
                answer: "Flights are available every day from 8 AM to 4:30 PM. However, prior scheduling is required due to weather conditions.",
            },
            FaqItem {
                question: "How long does the flight last?",
                answer: "The flight usually lasts between 8 and 15 minutes, depending on weather conditions.",
            },
            FaqItem {
                question: "What is included in the package?",
                answer: "The package includes a GoPro video + photos, transportation from the club to the ramp, all fees, and insurance required by the São Conrado Free Flight Club. Contact us for pricing.",
            },
            FaqItem {
                question: "What if the weather is not good?",
                answer: "If the weather doesn't allow it due to rain or unfavorable winds, the flight will be rescheduled for the next available day.",
            },
            FaqItem {
                question: "What should I wear?",
                answer: "Wear comfortable clothes that allow movement, preferably in dark colors to avoid overexposure in photos. Sportswear is fine, sneakers are the most recommended footwear. On colder days, wear a jacket. Avoid skirts and flip-flops.",
            },
            FaqItem {
                question: "What is the maximum allowed weight?",
                answer: "Passengers over 110kg must consult us in advance.",
            },
            FaqItem {
                question: "What is the minimum age allowed?",
                answer: "The minimum age allowed for tandem flights is 14 years old.",
            },
            FaqItem {
                question: "Where does it take place?",
                answer: "Flights take place at São Conrado Beach, from the Pedra Bonita ramp, which is approximately 500 meters high and located within the Tijuca National Park in Rio de Janeiro.",
            },
        ],
    },
    contact: Contact {
        title: "Contact and Booking",
        phone: LabeledValue {
            title: "Phone/WhatsApp",
            value: "(21) 97593-1852",
        },
        instagram: LabeledValue {
            title: "Instagram",
            value: "@hanggliding.rio",
        },
        location: LabeledValue {
            title: "Meeting Point",
            value: "Av. Pref. Mendes de Morais, 1502 - CSCVL - São Conrado, Rio de Janeiro - RJ, 22610-095",
        },
        hours: Hours {
            title: "Flight Hours",
            weekdays: DayHours {
                day: "Monday to Friday",
                hours: "8am to 6pm",
            },
            weekends: DayHours {
                day: "Saturdays and Sundays",
                hours: "8am to 4pm",
            },
            note: "*Hours subject to favorable weather conditions",
        },
        map_caption: "São Conrado Beach - Meeting Point",
        book_now: "Book your flight now via WhatsApp",
    },
    footer: Footer {
        description: "Unforgettable hang gliding experiences in Rio de Janeiro, with the best views of the marvelous city.",
        quick_links: "Quick Links",
        contact: "Contact",
        whatsapp: "WhatsApp",
        instagram: "Instagram",
        location: "Location",
        location_value: "São Conrado Beach, Rio de Janeiro - RJ",
        rights: "All rights reserved.",
    },
    booking: Booking {
        info_message: "Hello! I'd like information about hang gliding flights",
        cash_message: "Hello! I'd like to book a hang gliding flight (cash payment)",
        card_message: "Hello! I'd like to book a hang gliding flight (card payment)",
    },
};
