use crate::content::nav::NavItem;

/// A link is active only when its path equals the current path exactly.
pub fn is_active(current_path: &str, item: &NavItem) -> bool {
    current_path == item.path
}

pub fn is_mobile_width(width: f64, breakpoint: f64) -> bool {
    width <= breakpoint
}

/// Mobile menu visibility, tied to the path it was opened on.
///
/// The menu only reports itself open while the router is still on that path.
/// [`MobileMenu::follow_route`] drops the stored path once the route moves, so
/// coming back to the same page later finds the menu closed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MobileMenu {
    opened_on: Option<String>,
}

impl MobileMenu {
    pub fn is_open(&self, current_path: &str) -> bool {
        self.opened_on.as_deref() == Some(current_path)
    }

    pub fn toggle(&mut self, current_path: &str) {
        if self.is_open(current_path) {
            self.opened_on = None;
        } else {
            self.opened_on = Some(current_path.to_string());
        }
    }

    pub fn close(&mut self) {
        self.opened_on = None;
    }

    /// Closes the menu if it was opened on a path other than `current_path`.
    pub fn follow_route(&mut self, current_path: &str) {
        if self.opened_on.as_deref().is_some_and(|path| path != current_path) {
            self.opened_on = None;
        }
    }
}

/// Header "scrolled" flag with change detection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollHeader {
    threshold: f64,
    scrolled: bool,
}

impl ScrollHeader {
    /// A header already reflecting scroll offset `y`, for pages restored mid-scroll.
    pub fn at(threshold: f64, y: f64) -> Self {
        Self {
            threshold,
            scrolled: y > threshold,
        }
    }

    pub fn scrolled(&self) -> bool {
        self.scrolled
    }

    /// The new flag for scroll offset `y`, or `None` when nothing would change.
    pub fn transition(&self, y: f64) -> Option<bool> {
        let next = y > self.threshold;
        (next != self.scrolled).then_some(next)
    }

    pub fn set_scrolled(&mut self, scrolled: bool) {
        self.scrolled = scrolled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::nav::PRIMARY_NAV;

    #[test]
    fn only_exact_path_is_active() {
        let active: Vec<_> = PRIMARY_NAV
            .iter()
            .filter(|item| is_active("/about", item))
            .map(|item| item.label)
            .collect();
        assert_eq!(active, vec!["About"]);

        // "/" must not light up for every page.
        assert!(!PRIMARY_NAV.iter().any(|item| is_active("/about/team", item)));
    }

    #[test]
    fn menu_closes_when_route_changes() {
        let mut menu = MobileMenu::default();
        menu.toggle("/services");
        assert!(menu.is_open("/services"));

        assert!(!menu.is_open("/projects"));

        menu.toggle("/projects");
        assert!(menu.is_open("/projects"));
        menu.toggle("/projects");
        assert!(!menu.is_open("/projects"));
    }

    #[test]
    fn menu_stays_closed_after_leaving_and_returning() {
        let mut menu = MobileMenu::default();
        menu.toggle("/about");

        menu.follow_route("/blog");
        assert!(!menu.is_open("/blog"));

        menu.follow_route("/about");
        assert!(!menu.is_open("/about"));
        assert_eq!(menu, MobileMenu::default());
    }

    #[test]
    fn following_the_same_route_keeps_menu_open() {
        let mut menu = MobileMenu::default();
        menu.toggle("/contact");
        menu.follow_route("/contact");
        assert!(menu.is_open("/contact"));
    }

    #[test]
    fn close_is_idempotent() {
        let mut menu = MobileMenu::default();
        menu.close();
        menu.toggle("/");
        menu.close();
        menu.close();
        assert_eq!(menu, MobileMenu::default());
    }

    #[test]
    fn header_reports_only_transitions() {
        let mut header = ScrollHeader::at(10.0, 0.0);
        assert_eq!(header.transition(0.0), None);
        assert_eq!(header.transition(10.0), None);
        assert_eq!(header.transition(10.5), Some(true));

        header.set_scrolled(true);
        assert_eq!(header.transition(400.0), None);
        assert_eq!(header.transition(3.0), Some(false));
    }

    #[test]
    fn header_starts_from_current_offset() {
        let restored = ScrollHeader::at(10.0, 250.0);
        assert!(restored.scrolled());
        assert_eq!(restored.transition(300.0), None);
        assert_eq!(restored.transition(0.0), Some(false));

        assert!(!ScrollHeader::at(10.0, 0.0).scrolled());
    }

    #[test]
    fn breakpoint_is_inclusive() {
        assert!(is_mobile_width(768.0, 768.0));
        assert!(!is_mobile_width(769.0, 768.0));
    }
}
