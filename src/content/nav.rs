#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
}

const fn item(label: &'static str, path: &'static str) -> NavItem {
    NavItem { label, path }
}

pub const PRIMARY_NAV: [NavItem; 6] = [
    item("Home", "/"),
    item("About", "/about"),
    item("Services", "/services"),
    item("Projects", "/projects"),
    item("Blog", "/blog"),
    item("Contact", "/contact"),
];

pub const FOOTER_COMPANY: [NavItem; 3] = [
    item("About Us", "/about"),
    item("Our Services", "/services"),
    item("Case Studies", "/projects"),
];

pub const FOOTER_RESOURCES: [NavItem; 2] = [item("Blog", "/blog"), item("Contact", "/contact")];

pub const LEGAL_NAV: [NavItem; 3] = [
    item("Privacy Policy", "/privacy"),
    item("Terms of Service", "/terms"),
    item("Cookie Policy", "/cookies"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink { name: "Facebook", href: "https://facebook.com/moledecc" },
    SocialLink { name: "Instagram", href: "https://instagram.com/moledecc" },
    SocialLink { name: "X", href: "https://x.com/moledecc" },
    SocialLink { name: "TikTok", href: "https://tiktok.com/@moledecc" },
];

/// A way to reach the office. `href` is empty for plain text entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactChannel {
    pub icon: &'static str,
    pub title: &'static str,
    pub text: &'static str,
    pub href: &'static str,
}

pub const CONTACT_CHANNELS: [ContactChannel; 4] = [
    ContactChannel {
        icon: "☎",
        title: "Call Us",
        text: "+254723463564\n+254789618945",
        href: "tel:+254723463564",
    },
    ContactChannel {
        icon: "✉",
        title: "Email Us",
        text: "moledecc2@gmail.com",
        href: "mailto:moledecc2@gmail.com",
    },
    ContactChannel {
        icon: "⌖",
        title: "Visit Us",
        text: "Mombasa, Kenya",
        href: "https://maps.google.com",
    },
    ContactChannel {
        icon: "◷",
        title: "Working Hours",
        text: "Monday - Friday: 9:00 AM - 6:00 PM\nSaturday: 10:00 AM - 2:00 PM",
        href: "",
    },
];
