//! Scroll sampling pipeline behind the fixed navigation bar.
//!
//! The browser fires scroll notifications far faster than the page needs
//! them, so samples go through three gates: a trailing throttle timer that a
//! newer notification replaces, a single in-flight animation-frame read, and
//! a dead zone around the last published offset. The DOM wiring lives in
//! `app::hooks`; everything here is plain state so it can be tested without
//! a browser.

/// Trailing throttle window between a scroll notification and the sample
/// read, one frame at 60Hz.
pub const THROTTLE_MS: u64 = 16;

/// Offsets closer than this to the last published value are not republished.
pub const DEAD_ZONE_PX: f64 = 10.0;

/// Allowance for the fixed header when deciding which section the viewport
/// is inside.
pub const HEADER_OFFSET_PX: f64 = 100.0;

/// Suppresses publications that stay within a threshold of the last
/// published value.
#[derive(Debug)]
pub struct DeadZone {
    last: f64,
    threshold: f64,
}

impl DeadZone {
    pub fn new(threshold: f64) -> Self {
        Self {
            last: 0.0,
            threshold,
        }
    }

    /// Accepts `value` as the new published offset if it moved beyond the
    /// threshold, otherwise keeps the previous one.
    pub fn accept(&mut self, value: f64) -> Option<f64> {
        if (value - self.last).abs() > self.threshold {
            self.last = value;
            Some(value)
        } else {
            None
        }
    }

    pub fn last_published(&self) -> f64 {
        self.last
    }
}

/// Decides when the environment should actually read the scroll offset.
///
/// The caller owns the timers: every native scroll notification replaces the
/// pending throttle timer (last write wins), the timer callback asks
/// [`ScrollObserver::begin_sample`] whether to request an animation frame,
/// and the frame callback hands the live offset to
/// [`ScrollObserver::finish_sample`]. At most one read is ever in flight.
#[derive(Debug)]
pub struct ScrollObserver {
    dead_zone: DeadZone,
    sample_in_flight: bool,
}

impl Default for ScrollObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollObserver {
    pub fn new() -> Self {
        Self {
            dead_zone: DeadZone::new(DEAD_ZONE_PX),
            sample_in_flight: false,
        }
    }

    /// The throttle timer fired. Returns true when the caller should request
    /// an animation frame for the read; false while a previous request has
    /// not flushed yet.
    pub fn begin_sample(&mut self) -> bool {
        if self.sample_in_flight {
            return false;
        }
        self.sample_in_flight = true;
        true
    }

    /// The animation frame fired with the offset read from the environment.
    /// Returns the value to publish, if it escaped the dead zone.
    pub fn finish_sample(&mut self, offset: f64) -> Option<f64> {
        self.sample_in_flight = false;
        self.dead_zone.accept(offset)
    }

    pub fn last_published(&self) -> f64 {
        self.dead_zone.last_published()
    }
}

/// Vertical extent of one labelled page section, measured from the document
/// top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionExtent {
    pub id: &'static str,
    pub top: f64,
    pub height: f64,
}

/// Picks the navigation section the viewport is currently inside: the first
/// section in document order whose extent contains the scroll offset plus
/// the fixed-header allowance.
pub fn active_section(scroll_y: f64, sections: &[SectionExtent]) -> Option<&'static str> {
    let pos = scroll_y + HEADER_OFFSET_PX;
    sections
        .iter()
        .find(|s| pos >= s.top && pos < s.top + s.height)
        .map(|s| s.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal stand-in for the browser's timer and frame scheduling: one
    /// replaceable timer slot and one frame slot, like the real wiring.
    #[derive(Debug, Default)]
    struct FakeScheduler {
        timers_replaced: u32,
        timer_pending: bool,
        frame_pending: bool,
    }

    impl FakeScheduler {
        fn notify_scroll(&mut self) {
            if self.timer_pending {
                self.timers_replaced += 1;
            }
            self.timer_pending = true;
        }

        fn fire_timer(&mut self, observer: &mut ScrollObserver) {
            assert!(self.timer_pending, "no timer to fire");
            self.timer_pending = false;
            if observer.begin_sample() {
                self.frame_pending = true;
            }
        }

        fn fire_frame(&mut self, observer: &mut ScrollObserver, offset: f64) -> Option<f64> {
            assert!(self.frame_pending, "no frame to fire");
            self.frame_pending = false;
            observer.finish_sample(offset)
        }
    }

    #[test]
    fn burst_of_events_publishes_once() {
        let mut observer = ScrollObserver::new();
        let mut sched = FakeScheduler::default();

        for _ in 0..100 {
            sched.notify_scroll();
        }
        assert!(sched.timer_pending);
        assert_eq!(sched.timers_replaced, 99);

        sched.fire_timer(&mut observer);
        assert!(sched.frame_pending);

        let published = sched.fire_frame(&mut observer, 480.0);
        assert_eq!(published, Some(480.0));
        assert!(!sched.frame_pending);
    }

    #[test]
    fn timer_firing_mid_sample_requests_nothing() {
        let mut observer = ScrollObserver::new();

        assert!(observer.begin_sample());
        // A second throttle window elapsing before the frame flushed must
        // not queue a second read.
        assert!(!observer.begin_sample());

        assert_eq!(observer.finish_sample(120.0), Some(120.0));
        assert!(observer.begin_sample());
    }

    #[test]
    fn dead_zone_suppresses_jitter() {
        let mut observer = ScrollObserver::new();

        observer.begin_sample();
        assert_eq!(observer.finish_sample(100.0), Some(100.0));

        observer.begin_sample();
        assert_eq!(observer.finish_sample(105.0), None);
        assert_eq!(observer.last_published(), 100.0);

        observer.begin_sample();
        assert_eq!(observer.finish_sample(120.0), Some(120.0));
    }

    #[test]
    fn dead_zone_tracks_published_value_not_raw_samples() {
        let mut zone = DeadZone::new(DEAD_ZONE_PX);

        assert_eq!(zone.accept(100.0), Some(100.0));
        // Suppressed samples must not move the reference point.
        assert_eq!(zone.accept(109.0), None);
        assert_eq!(zone.accept(111.0), Some(111.0));
    }

    #[test]
    fn scrolling_back_to_top_publishes() {
        let mut zone = DeadZone::new(DEAD_ZONE_PX);

        assert_eq!(zone.accept(400.0), Some(400.0));
        assert_eq!(zone.accept(0.0), Some(0.0));
        assert_eq!(zone.accept(4.0), None);
    }

    fn page() -> Vec<SectionExtent> {
        vec![
            SectionExtent {
                id: "home",
                top: 0.0,
                height: 900.0,
            },
            SectionExtent {
                id: "about",
                top: 900.0,
                height: 700.0,
            },
            SectionExtent {
                id: "work",
                top: 1600.0,
                height: 1200.0,
            },
        ]
    }

    #[test]
    fn active_section_honors_header_allowance() {
        let sections = page();

        // 850 + 100 lands inside "about" even though the raw offset is
        // still within "home".
        assert_eq!(active_section(850.0, &sections), Some("about"));
        assert_eq!(active_section(0.0, &sections), Some("home"));
    }

    #[test]
    fn active_section_prefers_document_order_on_overlap() {
        let mut sections = page();
        // Overlap "about" into "work" territory.
        sections[1].height = 1000.0;

        assert_eq!(active_section(1550.0, &sections), Some("about"));
    }

    #[test]
    fn active_section_none_outside_any_extent() {
        let sections = page();

        assert_eq!(active_section(2900.0, &sections), None);
        assert_eq!(active_section(f64::MAX, &sections), None);
    }

    #[test]
    fn active_section_none_for_empty_page() {
        assert_eq!(active_section(100.0, &[]), None);
    }
}
