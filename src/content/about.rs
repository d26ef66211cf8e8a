#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamMember {
    pub id: u32,
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
    pub image: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub linkedin: Option<&'static str>,
    pub twitter: Option<&'static str>,
    pub github: Option<&'static str>,
}

impl TeamMember {
    pub fn initial(&self) -> char {
        self.name
            .trim_start_matches("Dr. ")
            .chars()
            .next()
            .unwrap_or('?')
    }
}

pub static TEAM: [TeamMember; 6] = [
    TeamMember {
        id: 1,
        name: "Dr. Sarah Johnson",
        role: "CEO & Founder",
        bio: "20+ years of experience in organizational leadership and strategic development. Passionate about driving innovation and growth.",
        image: "/images/team/team-1.jpg",
        email: "sarah@example.com",
        phone: "+1 (555) 123-4567",
        linkedin: Some("#"),
        twitter: Some("#"),
        github: None,
    },
    TeamMember {
        id: 2,
        name: "Michael Chen",
        role: "CTO",
        bio: "Technology visionary with expertise in digital transformation and software architecture. Leads our technical strategy and innovation.",
        image: "/images/team/team-2.jpg",
        email: "michael@example.com",
        phone: "+1 (555) 234-5678",
        linkedin: Some("#"),
        twitter: Some("#"),
        github: None,
    },
    TeamMember {
        id: 3,
        name: "Amina Diallo",
        role: "Head of Operations",
        bio: "Operations specialist with a focus on process optimization and team leadership. Ensures seamless project delivery.",
        image: "/images/team/team-3.jpg",
        email: "amina@example.com",
        phone: "+1 (555) 345-6789",
        linkedin: Some("#"),
        twitter: Some("#"),
        github: None,
    },
    TeamMember {
        id: 4,
        name: "David Kim",
        role: "Lead Developer",
        bio: "Full-stack developer with expertise in modern web technologies. Leads our development team in creating robust solutions.",
        image: "/images/team/team-4.jpg",
        email: "david@example.com",
        phone: "+1 (555) 456-7890",
        linkedin: Some("#"),
        twitter: None,
        github: Some("#"),
    },
    TeamMember {
        id: 5,
        name: "Emily Rodriguez",
        role: "UX/UI Designer",
        bio: "Creative designer focused on creating intuitive and beautiful user experiences. Passionate about human-centered design.",
        image: "/images/team/team-5.jpg",
        email: "emily@example.com",
        phone: "+1 (555) 567-8901",
        linkedin: Some("#"),
        twitter: Some("#"),
        github: None,
    },
    TeamMember {
        id: 6,
        name: "James Wilson",
        role: "Marketing Director",
        bio: "Marketing strategist with expertise in digital marketing and brand development. Drives our market presence and growth.",
        image: "/images/team/team-6.jpg",
        email: "james@example.com",
        phone: "+1 (555) 678-9012",
        linkedin: Some("#"),
        twitter: Some("#"),
        github: None,
    },
];

/// Leadership shown up front; the rest appear in the secondary grid.
pub const FEATURED_TEAM: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Milestone {
    pub year: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const MILESTONES: [Milestone; 5] = [
    Milestone {
        year: "2007",
        title: "Company Founded",
        description: "Launched with a vision to transform how organizations approach leadership and operational excellence.",
    },
    Milestone {
        year: "2015",
        title: "First Major Client",
        description: "Secured our first national client, marking the beginning of our institutional transformation journey.",
    },
    Milestone {
        year: "2018",
        title: "Regional Expansion",
        description: "Expanded programs across the coast and into East Africa, establishing a wider presence.",
    },
    Milestone {
        year: "2020",
        title: "Innovation Award",
        description: "Recognized as a leader in community-centred transformation programs.",
    },
    Milestone {
        year: "2023",
        title: "Growing Stronger",
        description: "Celebrated thousands of leaders trained across youth, women and governance programs.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoreValue {
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub accent: &'static str,
}

pub const CORE_VALUES: [CoreValue; 6] = [
    CoreValue {
        name: "Excellence",
        description: "We pursue the highest standards in everything we do, delivering exceptional quality and value to our clients.",
        icon: "🎓",
        accent: "blue",
    },
    CoreValue {
        name: "Integrity",
        description: "We operate with honesty, transparency, and ethical behavior in all our interactions.",
        icon: "✔",
        accent: "emerald",
    },
    CoreValue {
        name: "Innovation",
        description: "We embrace creativity and forward-thinking to develop cutting-edge solutions for our clients.",
        icon: "💡",
        accent: "amber",
    },
    CoreValue {
        name: "Collaboration",
        description: "We believe in the power of partnership and work closely with our clients to achieve shared success.",
        icon: "👥",
        accent: "indigo",
    },
    CoreValue {
        name: "Impact",
        description: "We measure our success by the tangible, positive change we create for our clients and communities.",
        icon: "📊",
        accent: "purple",
    },
    CoreValue {
        name: "Continuous Learning",
        description: "We foster a culture of growth, curiosity, and knowledge-sharing to stay at the forefront of our field.",
        icon: "🎓",
        accent: "cyan",
    },
];

pub const MISSION: &str = "To inspire and empower individuals and communities through motivation, leadership development, coaching and strategic engagement, unlocking potential and creating lasting positive change.";

pub const VISION: &str = "To be a global leader in personal, leadership and community transformation, raising empowered leaders who shape a just, prosperous and purpose-driven society.";

pub fn member_facts(member: &TeamMember) -> [(&'static str, &'static str); 4] {
    [
        ("Experience", "15+ years"),
        ("Expertise", member.role),
        ("Education", "PhD in Business Administration"),
        ("Location", "Nairobi, Kenya"),
    ]
}
