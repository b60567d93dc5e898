/// Attribute marking an element whose reveal waits for it to scroll into view.
pub const TARGET_SELECTOR: &str = "[data-animate]";
/// Attribute marking a descendant that reveals in a staggered cascade.
pub const CHILD_SELECTOR: &str = "[data-animate-child]";
pub const VISIBLE_CLASS: &str = "in-view";
pub const CHILD_REVEALED_CLASS: &str = "animate-child-in";

// Browsers can report a ratio a hair under the threshold that fired the callback.
const RATIO_EPSILON: f64 = 1e-3;

#[derive(Clone, Debug, PartialEq)]
pub struct RevealOptions {
    /// Fraction of the target's box that must be inside the viewport.
    pub threshold: f64,
    /// How far the bottom edge of the viewport is pulled up, in pixels.
    pub bottom_margin_px: u32,
    pub stagger_ms: u32,
    /// Wait before observing so nested components have rendered.
    pub mount_delay_ms: u32,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            bottom_margin_px: 50,
            stagger_ms: 100,
            mount_delay_ms: 100,
        }
    }
}

impl RevealOptions {
    pub fn root_margin(&self) -> String {
        format!("0px 0px -{}px 0px", self.bottom_margin_px)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TargetId(usize);

/// One intersection report for a target.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Intersection {
    pub is_intersecting: bool,
    pub ratio: f64,
    /// A target taller than the viewport can never reach the threshold
    /// ratio, so for those any overlap counts.
    pub taller_than_root: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChildReveal {
    pub index: usize,
    pub delay_ms: u32,
}

/// Children to reveal after a target became visible, in document order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevealPlan {
    pub target: TargetId,
    pub children: Vec<ChildReveal>,
}

#[derive(Debug)]
struct Target {
    visible: bool,
    children: Vec<bool>,
}

/// Visibility bookkeeping for one page mount.
///
/// Every transition is one-way: targets go hidden to visible and children go
/// hidden to revealed, never back. Once torn down the tracker ignores
/// everything, so late browser callbacks and timers become no-ops.
#[derive(Debug)]
pub struct RevealTracker {
    options: RevealOptions,
    targets: Vec<Target>,
    torn_down: bool,
}

impl RevealTracker {
    pub fn new(options: RevealOptions) -> Self {
        Self {
            options,
            targets: Vec::new(),
            torn_down: false,
        }
    }

    pub fn options(&self) -> &RevealOptions {
        &self.options
    }

    pub fn register(&mut self, child_count: usize) -> TargetId {
        self.targets.push(Target {
            visible: false,
            children: vec![false; child_count],
        });
        TargetId(self.targets.len() - 1)
    }

    /// Feeds one intersection report. Returns the stagger plan only on the
    /// report that first makes the target visible.
    pub fn on_intersection(&mut self, id: TargetId, report: Intersection) -> Option<RevealPlan> {
        if self.torn_down || !self.qualifies(report) {
            return None;
        }
        let stagger_ms = self.options.stagger_ms;
        let target = self.targets.get_mut(id.0)?;
        if target.visible {
            return None;
        }
        target.visible = true;

        let children = (0..target.children.len())
            .map(|index| ChildReveal {
                index,
                delay_ms: index as u32 * stagger_ms,
            })
            .collect();
        Some(RevealPlan { target: id, children })
    }

    fn qualifies(&self, report: Intersection) -> bool {
        report.is_intersecting
            && (report.taller_than_root || report.ratio + RATIO_EPSILON >= self.options.threshold)
    }

    /// Returns true only the first time a child is revealed.
    pub fn reveal_child(&mut self, id: TargetId, index: usize) -> bool {
        if self.torn_down {
            return false;
        }
        match self
            .targets
            .get_mut(id.0)
            .and_then(|t| t.children.get_mut(index))
        {
            Some(revealed) if !*revealed => {
                *revealed = true;
                true
            }
            _ => false,
        }
    }

    /// Marks every target and child visible at once. Used when the platform
    /// cannot tell us what is on screen. Returns the targets that changed.
    pub fn reveal_all(&mut self) -> Vec<TargetId> {
        if self.torn_down {
            return Vec::new();
        }
        let mut changed = Vec::new();
        for (i, target) in self.targets.iter_mut().enumerate() {
            let was_complete = target.visible && target.children.iter().all(|c| *c);
            target.visible = true;
            target.children.iter_mut().for_each(|c| *c = true);
            if !was_complete {
                changed.push(TargetId(i));
            }
        }
        changed
    }

    pub fn is_visible(&self, id: TargetId) -> bool {
        self.targets.get(id.0).map_or(false, |t| t.visible)
    }

    pub fn is_child_revealed(&self, id: TargetId, index: usize) -> bool {
        self.targets
            .get(id.0)
            .and_then(|t| t.children.get(index))
            .copied()
            .unwrap_or(false)
    }

    pub fn teardown(&mut self) {
        self.torn_down = true;
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> RevealTracker {
        RevealTracker::new(RevealOptions::default())
    }

    fn seen(ratio: f64) -> Intersection {
        Intersection {
            is_intersecting: true,
            ratio,
            taller_than_root: false,
        }
    }

    #[test]
    fn default_options_match_observer_settings() {
        let options = RevealOptions::default();
        assert_eq!(options.threshold, 0.1);
        assert_eq!(options.root_margin(), "0px 0px -50px 0px");
        assert_eq!(options.stagger_ms, 100);
    }

    #[test]
    fn target_becomes_visible_once() {
        let mut t = tracker();
        let id = t.register(2);
        assert!(!t.is_visible(id));

        assert!(t.on_intersection(id, seen(0.5)).is_some());
        assert!(t.is_visible(id));
        assert_eq!(t.on_intersection(id, seen(1.0)), None);
        assert_eq!(t.on_intersection(id, Intersection::default()), None);
        assert!(t.is_visible(id));
    }

    #[test]
    fn below_threshold_does_not_reveal() {
        let mut t = tracker();
        let id = t.register(0);
        assert_eq!(t.on_intersection(id, seen(0.05)), None);
        let not_intersecting = Intersection {
            ratio: 0.3,
            ..Intersection::default()
        };
        assert_eq!(t.on_intersection(id, not_intersecting), None);
        assert!(!t.is_visible(id));
        assert!(t.on_intersection(id, seen(0.0999)).is_some());
    }

    #[test]
    fn target_taller_than_viewport_reveals_on_any_overlap() {
        let mut t = tracker();
        let id = t.register(1);
        let tall = Intersection {
            is_intersecting: true,
            ratio: 0.05,
            taller_than_root: true,
        };
        assert_eq!(t.on_intersection(id, seen(0.05)), None);
        assert_eq!(
            t.on_intersection(
                id,
                Intersection {
                    is_intersecting: false,
                    ..tall
                }
            ),
            None
        );
        assert!(t.on_intersection(id, tall).is_some());
        assert!(t.is_visible(id));
    }

    #[test]
    fn child_delays_are_index_times_stagger() {
        let mut t = tracker();
        let id = t.register(7);
        let plan = t.on_intersection(id, seen(0.2)).unwrap();
        assert_eq!(plan.target, id);
        for (n, child) in plan.children.iter().enumerate() {
            assert_eq!(child.index, n);
            assert_eq!(child.delay_ms, n as u32 * 100);
        }
    }

    #[test]
    fn custom_stagger_is_respected() {
        let mut t = RevealTracker::new(RevealOptions {
            stagger_ms: 250,
            ..RevealOptions::default()
        });
        let id = t.register(3);
        let delays: Vec<u32> = t
            .on_intersection(id, seen(1.0))
            .unwrap()
            .children
            .iter()
            .map(|c| c.delay_ms)
            .collect();
        assert_eq!(delays, vec![0, 250, 500]);
    }

    #[test]
    fn entering_viewport_cascades_three_children() {
        let mut t = tracker();
        let hero = t.register(3);
        let other = t.register(1);

        let plan = t.on_intersection(hero, seen(0.4)).unwrap();
        let mut timeline: Vec<ChildReveal> = plan.children.clone();
        timeline.sort_by_key(|c| c.delay_ms);
        assert_eq!(
            timeline.iter().map(|c| c.delay_ms).collect::<Vec<_>>(),
            vec![0, 100, 200]
        );

        for (step, child) in timeline.iter().enumerate() {
            assert!(t.reveal_child(hero, child.index));
            for later in &timeline[step + 1..] {
                assert!(!t.is_child_revealed(hero, later.index));
            }
        }
        assert!((0..3).all(|i| t.is_child_revealed(hero, i)));
        assert!(!t.is_visible(other));
    }

    #[test]
    fn retrigger_does_not_reset_children() {
        let mut t = tracker();
        let id = t.register(2);
        t.on_intersection(id, seen(1.0)).unwrap();
        assert!(t.reveal_child(id, 0));

        assert_eq!(t.on_intersection(id, seen(1.0)), None);
        assert!(t.is_child_revealed(id, 0));
        assert!(!t.reveal_child(id, 0));
        assert!(t.reveal_child(id, 1));
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut t = tracker();
        let id = t.register(1);
        assert!(!t.reveal_child(id, 5));
        assert!(!t.is_child_revealed(TargetId(9), 0));
        assert_eq!(t.on_intersection(TargetId(9), seen(1.0)), None);
    }

    #[test]
    fn reveal_all_marks_everything_without_intersection() {
        let mut t = tracker();
        let a = t.register(3);
        let b = t.register(0);
        let c = t.register(1);
        t.on_intersection(c, seen(1.0));
        t.reveal_child(c, 0);

        let changed = t.reveal_all();
        assert_eq!(changed, vec![a, b]);
        for id in [a, b, c] {
            assert!(t.is_visible(id));
        }
        assert!((0..3).all(|i| t.is_child_revealed(a, i)));
        assert!(t.reveal_all().is_empty());
    }

    #[test]
    fn nothing_happens_after_teardown() {
        let mut t = tracker();
        let a = t.register(2);
        let b = t.register(1);
        let plan = t.on_intersection(a, seen(1.0)).unwrap();
        t.teardown();

        assert!(t.is_torn_down());
        for child in plan.children {
            assert!(!t.reveal_child(a, child.index));
        }
        assert_eq!(t.on_intersection(b, seen(1.0)), None);
        assert!(t.reveal_all().is_empty());
        assert!(!t.is_visible(b));
    }
}
