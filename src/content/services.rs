#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub features: &'static [&'static str],
    pub accent: &'static str,
}

pub const SERVICES: [Service; 5] = [
    Service {
        name: "Leadership Training & Workshops",
        description: "Comprehensive leadership development programs designed to build essential skills and foster effective leadership practices.",
        icon: "👥",
        features: &[
            "Leadership Skills Training",
            "Team Building Workshops",
            "Communication Excellence",
            "Strategic Thinking",
            "Decision Making",
        ],
        accent: "blue",
    },
    Service {
        name: "Youth Empowerment Forums",
        description: "Empowering young people with the skills, confidence, and opportunities to become future leaders and change-makers.",
        icon: "★",
        features: &[
            "Youth Leadership Programs",
            "Skill Development Workshops",
            "Mentorship Opportunities",
            "Community Engagement",
            "Career Guidance",
        ],
        accent: "emerald",
    },
    Service {
        name: "Women in Business & Leadership Forums",
        description: "Supporting women in breaking barriers and achieving excellence in business and leadership roles.",
        icon: "🌍",
        features: &[
            "Women Leadership Training",
            "Business Development Skills",
            "Networking Opportunities",
            "Career Advancement",
            "Work-Life Balance Strategies",
        ],
        accent: "purple",
    },
    Service {
        name: "Governance & GBV Awareness Campaigns",
        description: "Promoting good governance practices and raising awareness about gender-based violence prevention and response.",
        icon: "💡",
        features: &[
            "Governance Training",
            "GBV Prevention Programs",
            "Policy Development",
            "Community Awareness",
            "Support Systems",
        ],
        accent: "amber",
    },
    Service {
        name: "Mentorship & Coaching Programs",
        description: "Structured mentorship and coaching programs to support personal and professional growth.",
        icon: "◷",
        features: &[
            "One-on-One Mentoring",
            "Group Coaching Sessions",
            "Skills Transfer Programs",
            "Career Coaching",
            "Personal Development",
        ],
        accent: "blue",
    },
];

/// Options offered in the contact form's service picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceOption {
    pub id: &'static str,
    pub name: &'static str,
}

pub const SERVICE_OPTIONS: [ServiceOption; 5] = [
    ServiceOption { id: "leadership", name: "Leadership Transformation" },
    ServiceOption { id: "org-coaching", name: "Organizational Coaching" },
    ServiceOption { id: "mentorship", name: "Mentorship & Capacity Building" },
    ServiceOption { id: "strategy", name: "Strategic Planning & Execution" },
    ServiceOption { id: "other", name: "Other (Please specify in message)" },
];
