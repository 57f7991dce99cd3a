use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

/// Visible fraction at which the host's observer delivers entries.
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1;

/// Stable handle for an observed element, assigned by the host in query order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementId(pub usize);

/// One intersection record delivered by the host's observer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntersectionEntry {
    pub target: ElementId,
    pub is_intersecting: bool,
    pub intersection_ratio: f64,
}

impl IntersectionEntry {
    #[must_use]
    pub fn new(target: ElementId, is_intersecting: bool, intersection_ratio: f64) -> Self {
        Self {
            target,
            is_intersecting,
            intersection_ratio,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RevealState {
    /// Monotonic: never goes back to `false`.
    pub revealed: bool,
    /// Intersecting entries seen, including those after the reveal.
    pub crossings: u32,
}

/// Tracks the observed element set and which members were revealed.
///
/// Revealed elements stay observed; later crossings are counted and
/// otherwise ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevealObserver {
    threshold: f64,
    elements: IndexMap<ElementId, RevealState>,
}

impl Default for RevealObserver {
    fn default() -> Self {
        Self::new(DEFAULT_REVEAL_THRESHOLD)
    }
}

impl RevealObserver {
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            elements: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn set_threshold(&mut self, threshold: f64) {
        self.threshold = threshold;
    }

    /// Adds `element` to the observed set. Returns `false` if already present.
    pub fn observe(&mut self, element: ElementId) -> bool {
        if self.elements.contains_key(&element) {
            return false;
        }
        self.elements.insert(element, RevealState::default());
        true
    }

    #[must_use]
    pub fn is_observed(&self, element: ElementId) -> bool {
        self.elements.contains_key(&element)
    }

    #[must_use]
    pub fn is_revealed(&self, element: ElementId) -> bool {
        self.elements
            .get(&element)
            .is_some_and(|state| state.revealed)
    }

    #[must_use]
    pub fn state(&self, element: ElementId) -> Option<RevealState> {
        self.elements.get(&element).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.elements.values().filter(|state| state.revealed).count()
    }

    pub fn observed(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.elements.keys().copied()
    }

    /// Applies a batch of entries and returns the elements revealed by it.
    ///
    /// Any intersecting entry reveals its target. The threshold only shapes
    /// when the host delivers entries, so an element that can never reach it
    /// (taller than the viewport, clipped by a container) still reveals on
    /// its first `is_intersecting` flip. Entries for elements outside the
    /// observed set are skipped.
    pub fn process(&mut self, entries: &[IntersectionEntry]) -> SmallVec<[ElementId; 8]> {
        let mut newly_revealed = SmallVec::new();
        for entry in entries {
            if !entry.is_intersecting {
                continue;
            }
            let Some(state) = self.elements.get_mut(&entry.target) else {
                continue;
            };
            state.crossings = state.crossings.saturating_add(1);
            if !state.revealed {
                state.revealed = true;
                trace!(
                    element = entry.target.0,
                    ratio = entry.intersection_ratio,
                    "element revealed"
                );
                newly_revealed.push(entry.target);
            }
        }
        newly_revealed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_follows_the_intersecting_flag() {
        let mut observer = RevealObserver::default();
        observer.observe(ElementId(0));
        observer.observe(ElementId(1));

        let leaving = observer.process(&[IntersectionEntry::new(ElementId(0), false, 0.5)]);
        assert!(leaving.is_empty());
        assert!(!observer.is_revealed(ElementId(0)));

        let sliver = observer.process(&[IntersectionEntry::new(ElementId(0), true, 0.05)]);
        assert_eq!(sliver.as_slice(), &[ElementId(0)]);
        let at = observer.process(&[IntersectionEntry::new(ElementId(1), true, 0.1)]);
        assert_eq!(at.as_slice(), &[ElementId(1)]);
        assert_eq!(observer.revealed_count(), 2);
    }

    #[test]
    fn repeated_crossings_stay_observed_and_revealed() {
        let mut observer = RevealObserver::default();
        observer.observe(ElementId(3));
        observer.process(&[IntersectionEntry::new(ElementId(3), true, 0.4)]);
        observer.process(&[IntersectionEntry::new(ElementId(3), false, 0.0)]);
        let again = observer.process(&[IntersectionEntry::new(ElementId(3), true, 0.9)]);

        assert!(again.is_empty());
        assert!(observer.is_observed(ElementId(3)));
        assert_eq!(
            observer.state(ElementId(3)),
            Some(RevealState {
                revealed: true,
                crossings: 2
            })
        );
    }

    #[test]
    fn unknown_targets_are_skipped() {
        let mut observer = RevealObserver::default();
        observer.observe(ElementId(1));
        let revealed = observer.process(&[
            IntersectionEntry::new(ElementId(9), true, 1.0),
            IntersectionEntry::new(ElementId(1), false, 1.0),
        ]);
        assert!(revealed.is_empty());
        assert!(!observer.is_observed(ElementId(9)));
        assert_eq!(observer.revealed_count(), 0);
    }

    #[test]
    fn observe_is_idempotent_and_keeps_query_order() {
        let mut observer = RevealObserver::default();
        assert!(observer.observe(ElementId(2)));
        assert!(observer.observe(ElementId(0)));
        assert!(!observer.observe(ElementId(2)));
        let order: Vec<_> = observer.observed().collect();
        assert_eq!(order, vec![ElementId(2), ElementId(0)]);
    }
}
