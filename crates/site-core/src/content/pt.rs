use super::*;

pub(super) static PT: Translations = Translations {
    language: Language::Pt,
    meta: Meta {
        title: "Hang Gliding Rio - Voo de Asa-Delta em São Conrado",
        description: "Viva a sensação única de voar de asa-delta sobre as paisagens deslumbrantes do Rio de Janeiro. Voos decolando da Pedra Bonita com pouso na Praia de São Conrado.",
    },
    nav: Nav {
        about: "Sobre o Voo",
        prices: "Preços",
        gallery: "Galeria",
        testimonials: "Depoimentos",
        faq: "FAQ",
        contact: "Contato",
        book_flight: "Agendar Voo",
    },
    hero: Hero {
        title: "Voe de Asa-Delta em São Conrado",
        subtitle: "Experiência inesquecível no céu do Rio de Janeiro!",
        book_now: "Agende seu voo agora",
        learn_more: "Saiba mais",
        headline_lead: "CONECTE-SE À NATUREZA E",
        headline_mid: "DESCUBRA AS",
        headline_accent: "BELEZAS DA VIDA",
        intro: "Na Hang Gliding Rio, queremos que você viva uma experiência incrível sobre paisagens deslumbrantes e conheça lados de si mesmo que ainda não explorou.",
        talk_to_us: "FALE CONOSCO",
        highlights: [
            Highlight {
                title: "Segurança em Primeiro Lugar",
                text: "Instrutores certificados e equipamentos regularmente inspecionados para sua tranquilidade.",
            },
            Highlight {
                title: "Experiência Inesquecível",
                text: "10-15 minutos de pura adrenalina e vistas deslumbrantes do Rio de Janeiro.",
            },
            Highlight {
                title: "Memórias para a Vida",
                text: "Fotos e vídeos incluídos para capturar sua incrível aventura pelos céus.",
            },
        ],
    },
    about: About {
        title: "Sobre o Voo",
        paragraph1: "Experimente a sensação única de voar como um pássaro sobre as paisagens deslumbrantes do Rio de Janeiro. Nossos voos de asa-delta decolam da Pedra Bonita e pousam na Praia de São Conrado.",
        paragraph2: "A experiência é conduzida por instrutores profissionais com anos de experiência e todas as certificações necessárias para garantir sua segurança e diversão.",
        features: &[
            "Duração média do voo: 10-15 minutos",
            "Decolagem: Rampa da Pedra Bonita (altitude 520m)",
            "Pouso: Praia de São Conrado",
            "Instrutores certificados pela ABVL",
        ],
    },
    about_fly: AboutFly {
        title: "Sobre o FlyHangGlidingRio",
        paragraph1: "O FlyHangGlidingRio conecta você aos melhores instrutores de voo livre no Rio de Janeiro. Nosso papel é facilitar sua experiência desde o primeiro contato, garantindo que você voe com profissionais experientes, certificados e apaixonados por voar.",
        paragraph2: "Trabalhamos com pilotos altamente qualificados, que priorizam segurança, diversão e profissionalismo para tornar seu voo inesquecível. Agende com a gente e viva a emoção de voar de asa-delta na paisagem deslumbrante de São Conrado!",
    },
    prices: Prices {
        title: "Preços",
        cash_price: "R$800",
        cash_payment: "Pagamento em Dinheiro",
        card_price: "R$880",
        card_payment: "Pagamento com Cartão",
        features: &[
            "Voo com instrutor certificado",
            "Câmera frontal inclusa",
            "Transporte até a rampa de decolagem",
            "Equipamento de segurança",
        ],
        book_flight: "Agendar Voo",
        extras_title: "Extras Opcionais",
        extras: &[
            Extra {
                title: "Câmera Lateral",
                description: "Capture ângulos diferentes do seu voo",
                price: "R$100",
            },
            Extra {
                title: "Câmera 360º",
                description: "Experiência imersiva completa",
                price: "R$150",
            },
        ],
    },
    gallery: Gallery {
        title: "Galeria",
        photos: "Fotos",
        videos: "Vídeos",
        photo_descriptions: &[
            "Vista deslumbrante do Rio de Janeiro do alto",
            "Voando sobre a Praia de São Conrado",
            "Ponto de decolagem da Pedra Bonita",
        ],
        video_descriptions: &[
            "Voo de asa-delta em São Conrado",
            "Experiência de decolagem e pouso",
        ],
    },
    testimonials: Testimonials {
        title: "Depoimentos",
        items: &[
            Testimonial {
                name: "Ana Silva",
                location: "São Paulo, SP",
                text: "Uma experiência incrível! O instrutor me deixou super tranquila e as vistas do Rio são de tirar o fôlego. Recomendo muito!",
            },
            Testimonial {
                name: "Carlos Mendes",
                location: "Rio de Janeiro, RJ",
                text: "Sempre quis voar de asa-delta e finalmente realizei esse sonho. Profissionais super capacitados e atenciosos. Voltarei com certeza!",
            },
            Testimonial {
                name: "Julia Santos",
                location: "Curitiba, PR",
                text: "Melhor experiência da minha viagem ao Rio! As fotos e vídeos ficaram incríveis, e o instrutor foi muito paciente com meu nervosismo inicial.",
            },
        ],
    },
    faq: Faq {
        title: "Perguntas Frequentes",
        items: &[
            FaqItem {
                question: "Quais os dias e horários para o voo?",
                answer: "De segunda a segunda, das 8h as 16:30. Porém precisamos agendar antes devido as condições climáticas.",
            },
            FaqItem {
                question: "Quanto tempo dura o voo?",
                answer: "O vôo normalmente dura entre 08 e 15 minutos dependendo das condições do tempo.",
            },
            FaqItem {
                question: "O que está incluso no pacote?",
                answer: "No pacote está incluso vídeo feito pela câmera GoPro + fotos, transporte do clube até a Rampa, todas as taxas e seguro exigidos pelo Clube São Conrado de Voo Livre. Consulte-nos sobre os valores.",
            },
            FaqItem {
                question: "E se o clima não estiver bom?",
                answer: "Caso o tempo não permita por questão de chuva ou vento desfavorável, o voo é remarcado para o próximo dia.",
            },
            FaqItem {
                question: "Que roupa devo usar?",
                answer: "Venha com roupas confortáveis que permitam movimentos e de preferência cores escuras para não estourar nas fotos. Pode ser roupa de treino, tênis é o calçado mais indicado, nos dias frios usar casaco. Não usar saia e sandálias tipo havaianas.",
            },
            FaqItem {
                question: "Qual o peso máximo permitido?",
                answer: "Passageiros com mais de 110kg devem fazer consulta prévia.",
            },
            FaqItem {
                question: "Qual a idade mínima permitida?",
                answer: "A idade mínima permitida para o voo duplo é de 14 anos.",
            },
            FaqItem {
                question: "Onde fica?",
                answer: "Os voos são realizados na Praia de São Conrado, na rampa da Pedra Bonita que tem aproximadamente 500 metros de altura e que fica dentro do Parque Nacional da Tijuca no Rio de Janeiro.",
            },
        ],
    },
    contact: Contact {
        title: "Contato e Agendamento",
        phone: LabeledValue {
            title: "Telefone/WhatsApp",
            value: "(21) 97593-1852",
        },
        instagram: LabeledValue {
            title: "Instagram",
            value: "@flyhanggliderio",
        },
        location: LabeledValue {
            title: "Local de Encontro",
            value: "Av. Pref. Mendes de Morais, 1502 - CSCVL - São Conrado, Rio de Janeiro - RJ, 22610-095",
        },
        hours: Hours {
            title: "Horários de Atendimento",
            weekdays: DayHours {
                day: "Segunda a Sexta",
                hours: "8h às 18h",
            },
            weekends: DayHours {
                day: "Sábados e Domingos",
                hours: "8h às 16h",
            },
            note: "*Horários sujeitos a condições climáticas favoráveis",
        },
        map_caption: "Praia de São Conrado - Ponto de Encontro",
        book_now: "Agende seu voo agora pelo WhatsApp",
    },
    footer: Footer {
        description: "Experiências inesquecíveis de voo de asa-delta no Rio de Janeiro, com as melhores vistas da cidade maravilhosa.",
        quick_links: "Links Rápidos",
        contact: "Contato",
        whatsapp: "WhatsApp",
        instagram: "Instagram",
        location: "Local",
        location_value: "Praia de São Conrado, Rio de Janeiro - RJ",
        rights: "Todos os direitos reservados.",
    },
    booking: Booking {
        info_message: "Olá! Gostaria de informações sobre voos de asa-delta",
        cash_message: "Olá! Gostaria de agendar um voo de asa-delta (pagamento em dinheiro)",
        card_message: "Olá! Gostaria de agendar um voo de asa-delta (pagamento com cartão)",
    },
};
