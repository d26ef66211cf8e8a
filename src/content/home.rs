#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slide {
    pub title: &'static str,
    pub highlight: &'static str,
    pub subtitle: &'static str,
    pub primary_cta: &'static str,
    pub secondary_cta: &'static str,
    pub image: &'static str,
}

pub const SLIDES: [Slide; 3] = [
    Slide {
        title: "Ignite Your",
        highlight: "Leadership Potential",
        subtitle: "Dynamic sessions to inspire confidence, strategic thinking and effective communication.",
        primary_cta: "Get Started",
        secondary_cta: "Learn More",
        image: "https://images.unsplash.com/photo-1497366754035-f200968a6e72?auto=format&fit=crop&w=1920&q=80",
    },
    Slide {
        title: "Unlock Your",
        highlight: "True Potential",
        subtitle: "Tailored mentorship and coaching to empower growth and achieve meaningful goals.",
        primary_cta: "Our Services",
        secondary_cta: "View Portfolio",
        image: "https://images.unsplash.com/photo-1451187580459-43490279c0fa?auto=format&fit=crop&w=1920&q=80",
    },
    Slide {
        title: "Connect, Learn",
        highlight: ", Innovate",
        subtitle: "Engaging conferences and workshops that promote knowledge-sharing and professional growth.",
        primary_cta: "Contact Us",
        secondary_cta: "Our Process",
        image: "https://images.unsplash.com/photo-1486312338219-ce68d2c6f44d?auto=format&fit=crop&w=1920&q=80",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureArt {
    Icon(&'static str),
    Image(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub art: FeatureArt,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [Feature; 5] = [
    Feature {
        art: FeatureArt::Icon("👥"),
        title: "Leadership Training & Workshops",
        description: "Comprehensive leadership development programs designed to build essential skills and foster effective leadership practices through interactive workshops and hands-on training.",
    },
    Feature {
        art: FeatureArt::Icon("★"),
        title: "Youth Empowerment Forums",
        description: "Empowering young people with the skills, confidence, and opportunities to become future leaders and change-makers through targeted forums and engagement programs.",
    },
    Feature {
        art: FeatureArt::Image("/images/women.jpg"),
        title: "Women In Business & Leadership Forums",
        description: "Supporting women in breaking barriers and achieving excellence in business and leadership roles through specialized forums and networking opportunities.",
    },
    Feature {
        art: FeatureArt::Image("/images/gbv.png"),
        title: "Governance & GBV Awareness Campaigns",
        description: "Promoting good governance practices and raising awareness about gender-based violence prevention and response through targeted campaigns and educational initiatives.",
    },
    Feature {
        art: FeatureArt::Icon("◷"),
        title: "Mentorship & Coaching Programs",
        description: "Structured mentorship and coaching programs to support personal and professional growth through one-on-one guidance and group coaching sessions.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: u32,
    pub suffix: &'static str,
    pub label: &'static str,
}

pub const STATS: [Stat; 4] = [
    Stat { value: 15, suffix: "+", label: "Years Experience" },
    Stat { value: 200, suffix: "+", label: "Projects Completed" },
    Stat { value: 98, suffix: "%", label: "Client Satisfaction" },
    Stat { value: 50, suffix: "+", label: "Team Members" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "Through Moledecc's youth programs, I learned skills that go beyond academics. My confidence has skyrocketed and I now feel ready to take on leadership and entrepreneurial opportunities. This program truly transforms lives.",
        author: "Brian O.",
        role: "Student & Youth Leader",
    },
    Testimonial {
        quote: "Moledecc's workshops are unlike anything I've attended before. They are engaging, highly interactive and full of practical insights. I left feeling motivated, inspired and equipped with tools I immediately applied in my work.",
        author: "Michael Chen",
        role: "HR Manager",
    },
    Testimonial {
        quote: "Moledecc doesn't just provide training they create transformation. Every session I've attended has left me inspired, motivated and ready to take bold action. Their approach to personal and professional growth is unmatched.",
        author: "Emily Rodriguez",
        role: "Corporate Executive, Nairobi",
    },
];
