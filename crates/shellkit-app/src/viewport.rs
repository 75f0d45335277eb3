//! Viewport width observation: breakpoint watchers and media queries
//!
//! Widths are in pixels. The terminal front end converts its column count
//! with [`columns_to_px`] before feeding these watchers.
//!
//! Watchers report a deterministic default (`false`) until mounted, i.e.
//! until the first frame has been drawn and a real width is known.

use std::time::{Duration, Instant};

/// Default breakpoint of a bare [`BreakpointWatcher`]
pub const DEFAULT_MOBILE_BREAKPOINT: u32 = 768;

/// Default breakpoint used by the shell panels
pub const DEFAULT_PANEL_BREAKPOINT: u32 = 1024;

/// Default pixel width of one terminal column
pub const DEFAULT_PX_PER_COLUMN: u32 = 8;

/// Stability window for debounced queries
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(150);

/// Default mid-width band
pub const DEFAULT_MID_WIDTH_MIN: u32 = 1000;
pub const DEFAULT_MID_WIDTH_MAX: u32 = 1170;

/// Convert a terminal width in columns to a viewport width in pixels
pub fn columns_to_px(columns: u16, px_per_column: u32) -> u32 {
    u32::from(columns).saturating_mul(px_per_column.max(1))
}

// ─────────────────────────────────────────────────────────────────────────────
// BreakpointWatcher
// ─────────────────────────────────────────────────────────────────────────────

/// Reports whether the viewport is narrower than a breakpoint.
#[derive(Debug, Clone)]
pub struct BreakpointWatcher {
    breakpoint: u32,
    /// `None` until mounted, and again after unmount
    width: Option<u32>,
}

impl BreakpointWatcher {
    pub fn new(breakpoint: u32) -> Self {
        Self {
            breakpoint,
            width: None,
        }
    }

    pub fn breakpoint(&self) -> u32 {
        self.breakpoint
    }

    pub fn is_mounted(&self) -> bool {
        self.width.is_some()
    }

    /// Start observing. Returns the new reading.
    pub fn mount(&mut self, width: u32) -> bool {
        self.width = Some(width);
        self.is_below()
    }

    /// Feed a new width. Ignored while unmounted. Returns true if the reading changed.
    pub fn resize(&mut self, width: u32) -> bool {
        if !self.is_mounted() {
            return false;
        }
        let before = self.is_below();
        self.width = Some(width);
        before != self.is_below()
    }

    /// Stop observing and fall back to the deterministic default
    pub fn unmount(&mut self) {
        self.width = None;
    }

    /// `true` iff mounted and `width < breakpoint`
    pub fn is_below(&self) -> bool {
        self.width.is_some_and(|w| w < self.breakpoint)
    }
}

impl Default for BreakpointWatcher {
    fn default() -> Self {
        Self::new(DEFAULT_MOBILE_BREAKPOINT)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// MediaQuery
// ─────────────────────────────────────────────────────────────────────────────

/// A width media query. Both bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaQuery {
    MinWidth(u32),
    MaxWidth(u32),
    Range { min: u32, max: u32 },
}

impl MediaQuery {
    pub fn matches(&self, width: u32) -> bool {
        match *self {
            MediaQuery::MinWidth(min) => width >= min,
            MediaQuery::MaxWidth(max) => width <= max,
            MediaQuery::Range { min, max } => width >= min && width <= max,
        }
    }
}

impl std::fmt::Display for MediaQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaQuery::MinWidth(min) => write!(f, "(min-width: {min}px)"),
            MediaQuery::MaxWidth(max) => write!(f, "(max-width: {max}px)"),
            MediaQuery::Range { min, max } => {
                write!(f, "(min-width: {min}px) and (max-width: {max}px)")
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// DebouncedQuery
// ─────────────────────────────────────────────────────────────────────────────

/// A media query whose reported value only follows the raw match once it has
/// been stable for the debounce delay. Rapid changes restart the timer.
///
/// Time is supplied by the caller so the runner's tick drives it.
#[derive(Debug, Clone)]
pub struct DebouncedQuery {
    query: MediaQuery,
    delay: Option<Duration>,
    raw: bool,
    reported: bool,
    pending_since: Option<Instant>,
    mounted: bool,
}

impl DebouncedQuery {
    pub fn new(query: MediaQuery, delay: Option<Duration>) -> Self {
        Self {
            query,
            delay,
            raw: false,
            reported: false,
            pending_since: None,
            mounted: false,
        }
    }

    pub fn query(&self) -> MediaQuery {
        self.query
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Start observing at `width`.
    pub fn mount(&mut self, width: u32, now: Instant) -> bool {
        self.mounted = true;
        self.observe(width, now)
    }

    /// Feed the current width. Returns true if the reported value changed.
    pub fn observe(&mut self, width: u32, now: Instant) -> bool {
        if !self.mounted {
            return false;
        }
        let raw = self.query.matches(width);
        match self.delay {
            None => {
                self.raw = raw;
                let changed = self.reported != raw;
                self.reported = raw;
                changed
            }
            Some(_) => {
                if raw != self.raw {
                    self.raw = raw;
                    self.pending_since = Some(now);
                }
                false
            }
        }
    }

    /// Advance time. Returns true if the reported value changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let (Some(delay), Some(since)) = (self.delay, self.pending_since) else {
            return false;
        };
        if now.saturating_duration_since(since) < delay {
            return false;
        }
        self.pending_since = None;
        let changed = self.reported != self.raw;
        self.reported = self.raw;
        changed
    }

    pub fn unmount(&mut self) {
        self.mounted = false;
        self.raw = false;
        self.reported = false;
        self.pending_since = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending_since.is_some()
    }

    /// Debounced reading
    pub fn matches(&self) -> bool {
        self.reported
    }
}

/// `min <= width <= max`, debounced
pub fn mid_width(min: u32, max: u32) -> DebouncedQuery {
    DebouncedQuery::new(MediaQuery::Range { min, max }, Some(DEBOUNCE_DELAY))
}

/// `width <= px`, debounced
pub fn max_width(px: u32) -> DebouncedQuery {
    DebouncedQuery::new(MediaQuery::MaxWidth(px), Some(DEBOUNCE_DELAY))
}

/// `width >= px`, immediate
pub fn min_width(px: u32) -> DebouncedQuery {
    DebouncedQuery::new(MediaQuery::MinWidth(px), None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watcher_false_before_mount() {
        let watcher = BreakpointWatcher::new(768);
        assert!(!watcher.is_below());
        assert!(!watcher.is_mounted());
    }

    #[test]
    fn test_watcher_strictly_below_breakpoint() {
        let mut watcher = BreakpointWatcher::new(768);
        assert!(watcher.mount(767));
        watcher.resize(768);
        assert!(!watcher.is_below());
        watcher.resize(1200);
        assert!(!watcher.is_below());
    }

    #[test]
    fn test_watcher_resize_reports_change() {
        let mut watcher = BreakpointWatcher::new(1024);
        watcher.mount(1280);
        assert!(!watcher.resize(1100));
        assert!(watcher.resize(800));
        assert!(watcher.is_below());
    }

    #[test]
    fn test_watcher_ignores_resize_while_unmounted() {
        let mut watcher = BreakpointWatcher::new(1024);
        assert!(!watcher.resize(10));
        assert!(!watcher.is_below());
        watcher.mount(10);
        watcher.unmount();
        assert!(!watcher.is_below());
    }

    #[test]
    fn test_default_breakpoint() {
        assert_eq!(BreakpointWatcher::default().breakpoint(), 768);
    }

    #[test]
    fn test_media_query_bounds_inclusive() {
        let q = MediaQuery::Range { min: 1000, max: 1170 };
        assert!(q.matches(1000));
        assert!(q.matches(1170));
        assert!(!q.matches(999));
        assert!(!q.matches(1171));
        assert!(MediaQuery::MaxWidth(640).matches(640));
        assert!(MediaQuery::MinWidth(640).matches(640));
    }

    #[test]
    fn test_media_query_display() {
        assert_eq!(
            MediaQuery::Range { min: 1000, max: 1170 }.to_string(),
            "(min-width: 1000px) and (max-width: 1170px)"
        );
    }

    #[test]
    fn test_debounced_waits_for_delay() {
        let t0 = Instant::now();
        let mut q = mid_width(DEFAULT_MID_WIDTH_MIN, DEFAULT_MID_WIDTH_MAX);
        q.mount(1100, t0);
        assert!(!q.matches());
        assert!(!q.tick(t0 + Duration::from_millis(100)));
        assert!(q.tick(t0 + Duration::from_millis(150)));
        assert!(q.matches());
    }

    #[test]
    fn test_debounced_restarts_on_rapid_change() {
        let t0 = Instant::now();
        let mut q = max_width(800);
        q.mount(1200, t0);
        q.observe(700, t0);
        q.observe(900, t0 + Duration::from_millis(100));
        q.observe(700, t0 + Duration::from_millis(200));
        assert!(!q.tick(t0 + Duration::from_millis(300)));
        assert!(!q.matches());
        assert!(q.tick(t0 + Duration::from_millis(350)));
        assert!(q.matches());
    }

    #[test]
    fn test_debounced_flip_back_settles_unchanged() {
        let t0 = Instant::now();
        let mut q = max_width(800);
        q.mount(1200, t0);
        q.observe(700, t0);
        q.observe(900, t0 + Duration::from_millis(50));
        assert!(!q.tick(t0 + Duration::from_millis(400)));
        assert!(!q.matches());
        assert!(!q.is_pending());
    }

    #[test]
    fn test_min_width_is_immediate() {
        let t0 = Instant::now();
        let mut q = min_width(1024);
        assert!(q.mount(1280, t0));
        assert!(q.matches());
        assert!(q.observe(800, t0));
        assert!(!q.matches());
    }

    #[test]
    fn test_columns_to_px() {
        assert_eq!(columns_to_px(128, 8), 1024);
        assert_eq!(columns_to_px(80, 0), 80);
    }
}
