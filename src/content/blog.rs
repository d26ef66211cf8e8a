use crate::state::filter::Searchable;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogPost {
    pub id: u32,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub body: &'static [&'static str],
    pub author: &'static str,
    pub date: &'static str,
    pub read_time: &'static str,
    pub category: &'static str,
    pub image: &'static str,
    pub tags: &'static [&'static str],
}

impl BlogPost {
    /// "Grace Wanjiru" -> "GW"
    pub fn author_initials(&self) -> String {
        self.author
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect()
    }
}

impl Searchable for BlogPost {
    fn category(&self) -> &str {
        self.category
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title, self.excerpt];
        fields.extend(self.tags.iter().copied());
        fields
    }
}

pub const BLOG_CATEGORIES: [&str; 7] = [
    "All",
    "Leadership",
    "Organizational Development",
    "Digital Transformation",
    "Innovation",
    "Future of Work",
    "Strategy",
];

pub static BLOG_POSTS: [BlogPost; 7] = [
    BlogPost {
        id: 1,
        title: "Leading With Purpose in Uncertain Times",
        excerpt: "Why leaders who anchor decisions in clear values keep their teams steady when plans keep changing.",
        body: &[
            "Uncertainty is not a temporary condition for most organisations any more. Budgets shift, priorities move and teams are asked to deliver while the ground moves under them.",
            "Purpose-driven leaders respond by making their values explicit. When people know what will not change, they can adapt everything else with confidence.",
            "Start small: name three principles that guide your decisions and refer to them out loud the next time you make a hard call.",
        ],
        author: "Grace Wanjiru",
        date: "March 12, 2025",
        read_time: "6 min read",
        category: "Leadership",
        image: "https://images.unsplash.com/photo-1552664730-d307ca884978?auto=format&fit=crop&w=1200&q=80",
        tags: &["Leadership", "Values", "Resilience"],
    },
    BlogPost {
        id: 2,
        title: "Building a Coaching Culture Inside Your Organization",
        excerpt: "Coaching is not only for executives. Here is how managers at every level can grow the people around them.",
        body: &[
            "A coaching culture is one where asking good questions is valued as much as giving good answers.",
            "Begin by training line managers in short, structured coaching conversations and give them space in the calendar to hold them.",
            "Measure progress by how often people bring problems with a proposed solution instead of waiting for instructions.",
        ],
        author: "Daniel Mwangi",
        date: "February 27, 2025",
        read_time: "8 min read",
        category: "Organizational Development",
        image: "https://images.unsplash.com/photo-1522071820081-009f0129c71c?auto=format&fit=crop&w=1200&q=80",
        tags: &["Coaching", "Culture", "Teams"],
    },
    BlogPost {
        id: 3,
        title: "Digital Tools Every Community Leader Should Know",
        excerpt: "From shared calendars to simple survey tools, small digital habits multiply the reach of community programs.",
        body: &[
            "Community programmes run on goodwill and limited time. The right digital tools protect both.",
            "Shared calendars reduce double booking, short online surveys capture feedback while it is fresh, and group messaging keeps volunteers aligned.",
            "Pick one tool at a time and make sure everyone can use it before adding the next.",
        ],
        author: "Amina Diallo",
        date: "February 10, 2025",
        read_time: "5 min read",
        category: "Digital Transformation",
        image: "https://images.unsplash.com/photo-1451187580459-43490279c0fa?auto=format&fit=crop&w=1200&q=80",
        tags: &["Digital", "Community", "Tools"],
    },
    BlogPost {
        id: 4,
        title: "Innovation Starts With Listening",
        excerpt: "The best ideas in our youth forums came from participants, not facilitators. Here is what we learned.",
        body: &[
            "When we redesigned our youth forums we stopped presenting first and started listening first.",
            "Participants arrived with problems they knew intimately: transport, access to mentors, the cost of starting a business.",
            "Innovation followed naturally once the room agreed on which problems mattered most.",
        ],
        author: "Brian Otieno",
        date: "January 22, 2025",
        read_time: "4 min read",
        category: "Innovation",
        image: "https://images.unsplash.com/photo-1522202176988-66273c2fd55f?auto=format&fit=crop&w=1200&q=80",
        tags: &["Youth", "Innovation", "Listening"],
    },
    BlogPost {
        id: 5,
        title: "The Future of Work Is Hybrid and Human",
        excerpt: "Flexible work is here to stay. Leaders must learn to build trust across distance without losing the human touch.",
        body: &[
            "Hybrid teams succeed when expectations are explicit and trust is earned through consistent follow-through.",
            "Hold regular one-to-ones, make decisions visible in writing and celebrate progress publicly.",
            "Technology connects people, but leadership keeps them together.",
        ],
        author: "Grace Wanjiru",
        date: "January 8, 2025",
        read_time: "7 min read",
        category: "Future of Work",
        image: "https://images.unsplash.com/photo-1497366754035-f200968a6e72?auto=format&fit=crop&w=1200&q=80",
        tags: &["Hybrid Work", "Trust", "Teams"],
    },
    BlogPost {
        id: 6,
        title: "From Strategy on Paper to Strategy in Practice",
        excerpt: "Most strategic plans fail in execution. A few simple rituals keep a strategy alive all year.",
        body: &[
            "A strategy that lives in a binder is not a strategy. It becomes real only when it shapes weekly decisions.",
            "Translate each goal into quarterly commitments with a named owner, and review them in a short monthly meeting.",
            "Drop what no longer serves the goal. Focus is a strategic choice too.",
        ],
        author: "Daniel Mwangi",
        date: "December 15, 2024",
        read_time: "6 min read",
        category: "Strategy",
        image: "https://images.unsplash.com/photo-1486312338219-ce68d2c6f44d?auto=format&fit=crop&w=1200&q=80",
        tags: &["Strategy", "Execution", "Planning"],
    },
    BlogPost {
        id: 7,
        title: "Women Leading Change in Coastal Kenya",
        excerpt: "Stories from our Women in Business and Leadership Forum on breaking barriers and lifting others along the way.",
        body: &[
            "The women who join our forum arrive with ambition and leave with a network.",
            "Mentorship circles, financial literacy sessions and negotiation practice give them the tools to lead businesses and communities.",
            "Each graduate commits to mentoring another woman, so the impact keeps growing.",
        ],
        author: "Amina Diallo",
        date: "November 30, 2024",
        read_time: "5 min read",
        category: "Leadership",
        image: "https://images.unsplash.com/photo-1573164713988-8665fc963095?auto=format&fit=crop&w=1200&q=80",
        tags: &["Women", "Leadership", "Mentorship"],
    },
];

pub fn post_by_id(id: u32) -> Option<&'static BlogPost> {
    BLOG_POSTS.iter().find(|post| post.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique_and_categories_known() {
        let ids: HashSet<u32> = BLOG_POSTS.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), BLOG_POSTS.len());
        for post in &BLOG_POSTS {
            assert!(BLOG_CATEGORIES[1..].contains(&post.category), "{}", post.category);
        }
    }

    #[test]
    fn initials_and_lookup() {
        assert_eq!(post_by_id(1).unwrap().author_initials(), "GW");
        assert!(post_by_id(404).is_none());
    }
}
