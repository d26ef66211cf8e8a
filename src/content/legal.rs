#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegalDoc {
    Privacy,
    Terms,
    Cookies,
}

pub struct LegalSection {
    pub heading: &'static str,
    pub body: &'static str,
}

impl LegalDoc {
    pub fn title(self) -> &'static str {
        match self {
            LegalDoc::Privacy => "Privacy Policy",
            LegalDoc::Terms => "Terms of Service",
            LegalDoc::Cookies => "Cookie Policy",
        }
    }

    pub fn sections(self) -> &'static [LegalSection] {
        match self {
            LegalDoc::Privacy => &PRIVACY,
            LegalDoc::Terms => &TERMS,
            LegalDoc::Cookies => &COOKIES,
        }
    }
}

static PRIVACY: [LegalSection; 3] = [
    LegalSection {
        heading: "What we collect",
        body: "When you contact us we receive the details you choose to share: your name, email address, phone number, organisation and message.",
    },
    LegalSection {
        heading: "How we use it",
        body: "We use your details only to respond to your enquiry and to arrange the programs you ask about. We never sell personal information.",
    },
    LegalSection {
        heading: "Your choices",
        body: "You may ask us at any time to correct or delete the information we hold about you by writing to moledecc2@gmail.com.",
    },
];

static TERMS: [LegalSection; 3] = [
    LegalSection {
        heading: "Use of this site",
        body: "The content of this website is provided for general information about our programs and may change without notice.",
    },
    LegalSection {
        heading: "Programs and bookings",
        body: "Participation in workshops, forums and coaching programs is governed by the agreement signed for each engagement.",
    },
    LegalSection {
        heading: "Intellectual property",
        body: "Training materials, text and images on this site belong to Moledecc or their respective owners and may not be reused without permission.",
    },
];

static COOKIES: [LegalSection; 2] = [
    LegalSection {
        heading: "Cookies we use",
        body: "This site does not set tracking or advertising cookies. Embedded content from third parties may set their own cookies.",
    },
    LegalSection {
        heading: "Managing cookies",
        body: "You can block or delete cookies through your browser settings at any time.",
    },
];
