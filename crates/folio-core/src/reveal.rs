//! Reveal-on-scroll tracking.
//!
//! Each target goes from hidden to revealed exactly once. After that it is
//! unobserved and later entries for it are ignored.

use tracing::debug;

/// What the host can do for animations, read once at start-up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MotionCapabilities {
    pub prefers_reduced_motion: bool,
    pub has_intersection_observer: bool,
}

impl MotionCapabilities {
    /// Reveal everything up front instead of animating on scroll.
    pub fn reveal_immediately(&self) -> bool {
        self.prefers_reduced_motion || !self.has_intersection_observer
    }
}

/// Viewport-intersection watcher.
pub trait ViewportObserver {
    type Element: Clone + PartialEq;

    fn observe(&self, element: &Self::Element);
    fn unobserve(&self, element: &Self::Element);
}

pub struct RevealTracker<E> {
    targets: Vec<(E, bool)>,
}

impl<E: Clone + PartialEq> RevealTracker<E> {
    pub fn new(elements: Vec<E>) -> Self {
        Self {
            targets: elements.into_iter().map(|el| (el, false)).collect(),
        }
    }

    pub fn is_revealed(&self, element: &E) -> bool {
        self.targets
            .iter()
            .any(|(el, revealed)| *revealed && el == element)
    }

    /// Start tracking. Returns the elements the host must mark visible now:
    /// all of them when animation is off, none otherwise.
    pub fn start<O>(&mut self, caps: MotionCapabilities, observer: Option<&O>) -> Vec<E>
    where
        O: ViewportObserver<Element = E>,
    {
        match observer {
            Some(observer) if !caps.reveal_immediately() => {
                for (el, _) in &self.targets {
                    observer.observe(el);
                }
                Vec::new()
            }
            _ => {
                debug!("revealing {} elements without animation", self.targets.len());
                self.targets
                    .iter_mut()
                    .map(|(el, revealed)| {
                        *revealed = true;
                        el.clone()
                    })
                    .collect()
            }
        }
    }

    /// Handle one intersection entry. Returns true when the element has just
    /// been revealed and should be marked visible.
    pub fn on_intersection<O>(&mut self, element: &E, intersecting: bool, observer: &O) -> bool
    where
        O: ViewportObserver<Element = E>,
    {
        if !intersecting {
            return false;
        }
        let Some((_, revealed)) = self.targets.iter_mut().find(|(el, _)| el == element) else {
            return false;
        };
        if *revealed {
            return false;
        }
        *revealed = true;
        observer.unobserve(element);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingObserver {
        observed: RefCell<Vec<&'static str>>,
    }

    impl ViewportObserver for RecordingObserver {
        type Element = &'static str;

        fn observe(&self, element: &&'static str) {
            self.observed.borrow_mut().push(*element);
        }

        fn unobserve(&self, element: &&'static str) {
            self.observed.borrow_mut().retain(|el| el != element);
        }
    }

    const ANIMATED: MotionCapabilities = MotionCapabilities {
        prefers_reduced_motion: false,
        has_intersection_observer: true,
    };

    #[test]
    fn reduced_motion_reveals_everything_at_once() {
        let observer = RecordingObserver::default();
        let mut tracker = RevealTracker::new(vec!["hero", "about"]);
        let caps = MotionCapabilities {
            prefers_reduced_motion: true,
            has_intersection_observer: true,
        };
        assert_eq!(tracker.start(caps, Some(&observer)), vec!["hero", "about"]);
        assert!(observer.observed.borrow().is_empty());
        assert!(tracker.is_revealed(&"about"));
    }

    #[test]
    fn missing_observer_reveals_everything() {
        let mut tracker = RevealTracker::new(vec!["hero"]);
        let caps = MotionCapabilities::default();
        assert_eq!(tracker.start::<RecordingObserver>(caps, None), vec!["hero"]);
    }

    #[test]
    fn reveal_is_one_shot() {
        let observer = RecordingObserver::default();
        let mut tracker = RevealTracker::new(vec!["hero", "about"]);
        assert!(tracker.start(ANIMATED, Some(&observer)).is_empty());
        assert_eq!(*observer.observed.borrow(), vec!["hero", "about"]);

        assert!(!tracker.on_intersection(&"about", false, &observer));
        assert!(!tracker.is_revealed(&"about"));

        assert!(tracker.on_intersection(&"about", true, &observer));
        assert!(tracker.is_revealed(&"about"));
        assert_eq!(*observer.observed.borrow(), vec!["hero"]);

        assert!(!tracker.on_intersection(&"about", true, &observer));
        assert!(!tracker.on_intersection(&"about", false, &observer));
        assert!(tracker.is_revealed(&"about"));
    }

    #[test]
    fn unknown_targets_are_ignored() {
        let observer = RecordingObserver::default();
        let mut tracker = RevealTracker::new(vec!["hero"]);
        tracker.start(ANIMATED, Some(&observer));
        assert!(!tracker.on_intersection(&"footer", true, &observer));
    }
}
