//! Static site copy and data. Everything here is compile-time constant.

pub mod about;
pub mod blog;
pub mod chat;
pub mod home;
pub mod legal;
pub mod nav;
pub mod projects;
pub mod services;

#[cfg(test)]
mod tests {
    use super::about::{CORE_VALUES, FEATURED_TEAM, TEAM};
    use super::home::{SLIDES, STATS, TESTIMONIALS};
    use super::nav::{FOOTER_COMPANY, FOOTER_RESOURCES, LEGAL_NAV, PRIMARY_NAV};

    #[test]
    fn every_internal_link_points_at_a_routed_path() {
        let routed = [
            "/", "/about", "/services", "/projects", "/blog", "/contact", "/privacy", "/terms",
            "/cookies",
        ];
        for item in PRIMARY_NAV
            .iter()
            .chain(&FOOTER_COMPANY)
            .chain(&FOOTER_RESOURCES)
            .chain(&LEGAL_NAV)
        {
            assert!(routed.contains(&item.path), "{} -> {}", item.label, item.path);
        }
    }

    #[test]
    fn carousels_have_slides() {
        assert!(!SLIDES.is_empty());
        assert!(!TESTIMONIALS.is_empty());
        assert_eq!(CORE_VALUES.len(), 6);
        assert!(STATS.iter().all(|s| s.value > 0));
    }

    #[test]
    fn team_split_is_in_bounds() {
        assert!(FEATURED_TEAM <= TEAM.len());
        assert_eq!(TEAM[0].initial(), 'S');
    }
}
