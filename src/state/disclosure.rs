/// Accordion where at most one card is expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Disclosure {
    expanded: Option<usize>,
}

impl Disclosure {
    #[cfg(test)]
    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded == Some(index)
    }

    pub fn toggle(&mut self, index: usize) {
        self.expanded = if self.is_expanded(index) { None } else { Some(index) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_switches_and_collapses() {
        let mut cards = Disclosure::default();
        cards.toggle(2);
        assert!(cards.is_expanded(2));
        cards.toggle(4);
        assert_eq!(cards.expanded(), Some(4));
        assert!(!cards.is_expanded(2));
        cards.toggle(4);
        assert_eq!(cards.expanded(), None);
    }
}
