use std::time::{Duration, Instant};

/// Snapshot returned when a frame is due.
#[derive(Debug, Copy, Clone)]
pub struct FrameTick {
    /// Time since the previous tick (zero for the first one).
    pub dt: Duration,

    /// Timestamp the tick was observed at.
    pub now: Instant,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Fixed-interval frame ticker.
///
/// Deadlines advance by whole intervals so the average rate stays on target
/// when wake-ups are late by a little. After a stall longer than one interval
/// the schedule is re-anchored to `now` instead of firing a burst of
/// catch-up frames.
#[derive(Debug, Clone)]
pub struct FrameTicker {
    interval: Duration,
    next: Option<Instant>,
    last: Option<Instant>,
    frame_index: u64,
}

impl FrameTicker {
    /// Creates a ticker. `interval` must be non-zero.
    pub fn new(interval: Duration) -> Self {
        debug_assert!(!interval.is_zero());
        Self {
            interval,
            next: None,
            last: None,
            frame_index: 0,
        }
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    #[inline]
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    /// Deadline of the next frame. `None` until the first tick.
    #[inline]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.next
    }

    /// Whether a frame is due at `now`. The first poll is always due.
    pub fn is_due(&self, now: Instant) -> bool {
        self.next.is_none_or(|deadline| now >= deadline)
    }

    /// Consumes a due frame, scheduling the next one.
    pub fn poll(&mut self, now: Instant) -> Option<FrameTick> {
        if !self.is_due(now) {
            return None;
        }

        let next = match self.next {
            Some(deadline) if now.saturating_duration_since(deadline) < self.interval => {
                deadline + self.interval
            }
            Some(_) => {
                log::trace!("frame ticker fell behind; re-anchoring");
                now + self.interval
            }
            None => now + self.interval,
        };
        self.next = Some(next);

        let dt = self
            .last
            .map_or(Duration::ZERO, |last| now.saturating_duration_since(last));
        self.last = Some(now);

        let tick = FrameTick {
            dt,
            now,
            frame_index: self.frame_index,
        };
        self.frame_index = self.frame_index.wrapping_add(1);
        Some(tick)
    }

    /// Forgets the schedule; the next poll fires immediately.
    ///
    /// Useful when resuming from suspension.
    pub fn reset(&mut self) {
        self.next = None;
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS16: Duration = Duration::from_millis(16);

    #[test]
    fn first_poll_fires_immediately() {
        let mut t = FrameTicker::new(MS16);
        let now = Instant::now();
        assert!(t.is_due(now));
        let tick = t.poll(now).unwrap();
        assert_eq!(tick.frame_index, 0);
        assert_eq!(tick.dt, Duration::ZERO);
        assert_eq!(t.next_deadline(), Some(now + MS16));
    }

    #[test]
    fn not_due_before_deadline() {
        let mut t = FrameTicker::new(MS16);
        let start = Instant::now();
        t.poll(start).unwrap();
        assert!(t.poll(start + Duration::from_millis(10)).is_none());
        assert_eq!(t.frame_index(), 1);
    }

    #[test]
    fn late_wakeups_keep_the_cadence() {
        let mut t = FrameTicker::new(MS16);
        let start = Instant::now();
        t.poll(start).unwrap();

        let tick = t.poll(start + Duration::from_millis(18)).unwrap();
        assert_eq!(tick.frame_index, 1);
        assert_eq!(tick.dt, Duration::from_millis(18));
        assert_eq!(t.next_deadline(), Some(start + MS16 * 2));
    }

    #[test]
    fn long_stall_reanchors_instead_of_bursting() {
        let mut t = FrameTicker::new(MS16);
        let start = Instant::now();
        t.poll(start).unwrap();

        let late = start + Duration::from_millis(500);
        t.poll(late).unwrap();
        assert_eq!(t.next_deadline(), Some(late + MS16));
        assert!(t.poll(late + Duration::from_millis(1)).is_none());
    }

    #[test]
    fn reset_makes_next_poll_due() {
        let mut t = FrameTicker::new(MS16);
        let start = Instant::now();
        t.poll(start).unwrap();
        t.reset();
        assert!(t.is_due(start));
        assert_eq!(t.poll(start).unwrap().frame_index, 1);
    }
}
