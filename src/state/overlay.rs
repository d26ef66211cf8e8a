use std::collections::BTreeSet;

/// Whatever actually stops the page behind an overlay from scrolling.
pub trait ScrollSurface {
    fn set_scroll_locked(&mut self, locked: bool);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OverlayId(u32);

/// Owns the page scroll lock on behalf of every overlay.
///
/// Each open overlay holds the lock under its own id. The surface is only
/// touched when the first holder arrives and when the last one leaves, so
/// overlays can never leave the page locked or unlock it under each other.
#[derive(Debug)]
pub struct OverlayManager<S> {
    surface: S,
    holders: BTreeSet<OverlayId>,
    next_id: u32,
}

impl<S: ScrollSurface> OverlayManager<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            holders: BTreeSet::new(),
            next_id: 0,
        }
    }

    pub fn register(&mut self) -> OverlayId {
        let id = OverlayId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn acquire(&mut self, id: OverlayId) {
        if self.holders.insert(id) && self.holders.len() == 1 {
            self.surface.set_scroll_locked(true);
        }
    }

    pub fn release(&mut self, id: OverlayId) {
        if self.holders.remove(&id) && self.holders.is_empty() {
            self.surface.set_scroll_locked(false);
        }
    }

    pub fn release_all(&mut self) {
        if !self.holders.is_empty() {
            self.holders.clear();
            self.surface.set_scroll_locked(false);
        }
    }

    pub fn is_locked(&self) -> bool {
        !self.holders.is_empty()
    }

    #[cfg(test)]
    pub fn surface(&self) -> &S {
        &self.surface
    }
}

/// A detail overlay showing at most one item.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlaySlot<T> {
    id: OverlayId,
    selected: Option<T>,
}

impl<T> OverlaySlot<T> {
    pub fn new(id: OverlayId) -> Self {
        Self { id, selected: None }
    }

    pub fn selected(&self) -> Option<&T> {
        self.selected.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    /// Show `item`, replacing whatever was showing before.
    pub fn open<S: ScrollSurface>(&mut self, item: T, manager: &mut OverlayManager<S>) {
        self.selected = Some(item);
        manager.acquire(self.id);
    }

    pub fn close<S: ScrollSurface>(&mut self, manager: &mut OverlayManager<S>) {
        self.selected = None;
        manager.release(self.id);
    }

    /// Close on Escape. Returns whether the key was consumed.
    pub fn handle_key<S: ScrollSurface>(&mut self, key: &str, manager: &mut OverlayManager<S>) -> bool {
        if key == "Escape" && self.is_open() {
            self.close(manager);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::projects::{project_by_id, Project};

    #[derive(Debug, Default)]
    struct Recorder {
        writes: Vec<bool>,
    }

    impl ScrollSurface for Recorder {
        fn set_scroll_locked(&mut self, locked: bool) {
            self.writes.push(locked);
        }
    }

    #[test]
    fn escape_closes_project_and_unlocks_scroll() {
        let mut manager = OverlayManager::new(Recorder::default());
        let mut slot: OverlaySlot<&'static Project> = OverlaySlot::new(manager.register());

        let project = project_by_id(3).unwrap();
        slot.open(project, &mut manager);
        assert_eq!(slot.selected().map(|p| p.id), Some(3));
        assert!(manager.is_locked());

        assert!(slot.handle_key("Escape", &mut manager));
        assert!(slot.selected().is_none());
        assert!(!manager.is_locked());
        assert_eq!(manager.surface().writes, vec![true, false]);
    }

    #[test]
    fn reopening_replaces_instead_of_stacking() {
        let mut manager = OverlayManager::new(Recorder::default());
        let mut slot = OverlaySlot::new(manager.register());

        slot.open(1, &mut manager);
        slot.open(2, &mut manager);
        assert_eq!(slot.selected(), Some(&2));
        assert_eq!(manager.surface().writes, vec![true]);

        slot.close(&mut manager);
        assert!(!manager.is_locked());
    }

    #[test]
    fn other_keys_are_ignored() {
        let mut manager = OverlayManager::new(Recorder::default());
        let mut slot = OverlaySlot::new(manager.register());
        assert!(!slot.handle_key("Escape", &mut manager));

        slot.open("x", &mut manager);
        assert!(!slot.handle_key("Enter", &mut manager));
        assert!(slot.is_open());
    }

    #[test]
    fn lock_is_reference_counted() {
        let mut manager = OverlayManager::new(Recorder::default());
        let a = manager.register();
        let b = manager.register();
        assert_ne!(a, b);

        manager.acquire(a);
        manager.acquire(b);
        manager.acquire(b);
        manager.release(a);
        assert!(manager.is_locked());
        manager.release(b);
        manager.release(b);
        assert!(!manager.is_locked());
        assert_eq!(manager.surface().writes, vec![true, false]);
    }

    #[test]
    fn release_all_unlocks_once() {
        let mut manager = OverlayManager::new(Recorder::default());
        manager.release_all();
        let id = manager.register();
        manager.acquire(id);
        manager.release_all();
        manager.release_all();
        assert_eq!(manager.surface().writes, vec![true, false]);
    }
}
