use crate::state::filter::{Searchable, ALL};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub client: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub results: &'static [&'static str],
}

impl Searchable for Project {
    fn category(&self) -> &str {
        self.category
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title, self.client, self.description]
    }
}

pub static PROJECTS: [Project; 5] = [
    Project {
        id: 1,
        title: "Leadership Training and Workshops",
        client: "Educational Institutions",
        category: "Leadership Development",
        description: "Our leadership training programs are designed for students, professionals, community leaders, and institutions. The workshops focus on building practical leadership competencies such as communication, decision-making, emotional intelligence, conflict resolution, ethical leadership, and strategic thinking.",
        image: "/images/leadership.jpg",
        results: &[
            "Enhanced leadership confidence and competence",
            "Improved team management and communication skills",
            "Strong ethical and values-based leadership practices",
        ],
    },
    Project {
        id: 2,
        title: "Youth Empowerment Forum",
        client: "Community Organizations",
        category: "Youth Development",
        description: "The Youth Empowerment Forum is a dynamic platform that equips young people with leadership skills, life skills, entrepreneurship knowledge, and civic awareness. The forum encourages youth participation in governance, innovation, and community development.",
        image: "/images/empowerment.png",
        results: &[
            "Youth leadership and civic engagement",
            "Career guidance and entrepreneurship",
            "Life skills and personal development",
            "Talent identification and mentorship",
        ],
    },
    Project {
        id: 3,
        title: "Women in Business and Leadership Forum",
        client: "Business Organizations",
        category: "Women Empowerment",
        description: "This initiative is dedicated to empowering women to take up leadership roles in business, governance, and community development. The forum provides training, mentorship, networking opportunities, and advocacy for gender equity.",
        image: "https://images.unsplash.com/photo-1576091160550-2173dba999ef?auto=format&fit=crop&w=1000&q=80",
        results: &[
            "Women entrepreneurship and financial literacy",
            "Leadership confidence and negotiation skills",
            "Gender-inclusive leadership",
            "Networking and peer mentorship",
        ],
    },
    Project {
        id: 4,
        title: "Governance and GBV Awareness Campaigns",
        client: "Government Agencies",
        category: "Governance",
        description: "Moledecc conducts governance and Gender-Based Violence (GBV) awareness campaigns aimed at promoting accountability, human rights, and safe communities. These campaigns engage communities, institutions, and youth through sensitization forums, advocacy drives, and stakeholder dialogues.",
        image: "https://images.unsplash.com/photo-1522202176988-66273c2fd55f?auto=format&fit=crop&w=1000&q=80",
        results: &[
            "Good governance and civic responsibility",
            "Human rights education",
            "GBV prevention and awareness",
            "Community engagement and advocacy",
        ],
    },
    Project {
        id: 5,
        title: "Mentorship and Coaching Programs",
        client: "Educational Institutions",
        category: "Mentorship",
        description: "Our mentorship and coaching programs connect participants with experienced mentors and certified coaches to support personal growth, career development, and leadership advancement. The programs are structured, goal-oriented, and impact-driven.",
        image: "https://images.unsplash.com/photo-1521791136064-7986c2920216?auto=format&fit=crop&w=1000&q=80",
        results: &[
            "One-on-one and group mentorship",
            "Leadership and career coaching",
            "Personal development planning",
            "Continuous learning and accountability",
        ],
    },
];

/// Chip labels: the `All` sentinel followed by each distinct category in
/// listing order.
pub fn project_categories() -> Vec<&'static str> {
    let mut labels = vec![ALL];
    for project in &PROJECTS {
        if !labels.contains(&project.category) {
            labels.push(project.category);
        }
    }
    labels
}

#[cfg(test)]
pub fn project_by_id(id: u32) -> Option<&'static Project> {
    PROJECTS.iter().find(|project| project.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_start_with_all_and_are_distinct() {
        let labels = project_categories();
        assert_eq!(labels[0], ALL);
        assert_eq!(labels.len(), 6);
        assert!(labels.contains(&"Women Empowerment"));
    }

    #[test]
    fn lookup_by_id() {
        assert_eq!(project_by_id(3).map(|p| p.client), Some("Business Organizations"));
        assert!(project_by_id(0).is_none());
    }
}
