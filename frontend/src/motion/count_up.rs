pub const DEFAULT_DURATION_MS: u32 = 2000;

/// Fraction of the run that has elapsed, clamped to [0, 1].
pub fn progress(elapsed_ms: f64, duration_ms: u32) -> f64 {
    if duration_ms == 0 {
        return 1.0;
    }
    if !(elapsed_ms > 0.0) {
        return 0.0;
    }
    (elapsed_ms / f64::from(duration_ms)).min(1.0)
}

/// Fast start, slow settle.
pub fn ease_out_cubic(progress: f64) -> f64 {
    1.0 - (1.0 - progress).powi(3)
}

/// Displayed value `elapsed_ms` into a run towards `end`.
pub fn value_at(elapsed_ms: f64, duration_ms: u32, end: i64) -> i64 {
    let p = progress(elapsed_ms, duration_ms);
    if p >= 1.0 {
        // pinned, never trust the rounded curve at the very end
        return end;
    }
    (end as f64 * ease_out_cubic(p)).round() as i64
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    Idle,
    Running { started_at: f64 },
    Done,
}

/// What the scheduler should do after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame {
    Again,
    Finished,
}

/// Counts from 0 to `end` exactly once.
///
/// Timestamps are milliseconds on any monotonic clock; the animator only ever
/// looks at differences between them.
#[derive(Debug, Clone, PartialEq)]
pub struct CountUpAnimator {
    end: i64,
    duration_ms: u32,
    phase: Phase,
    current: i64,
}

impl CountUpAnimator {
    pub fn new(end: i64, duration_ms: u32) -> Self {
        Self {
            end,
            duration_ms,
            phase: Phase::Idle,
            current: 0,
        }
    }

    /// Starts the run. Only the first call out of `Idle` does anything.
    pub fn trigger(&mut self, now: f64) -> bool {
        if self.phase != Phase::Idle {
            return false;
        }
        self.phase = Phase::Running { started_at: now };
        self.current = 0;
        true
    }

    pub fn tick(&mut self, now: f64) -> Frame {
        let Phase::Running { started_at } = self.phase else {
            return Frame::Finished;
        };

        let elapsed = now - started_at;
        if progress(elapsed, self.duration_ms) >= 1.0 {
            self.current = self.end;
            self.phase = Phase::Done;
            return Frame::Finished;
        }

        self.current = value_at(elapsed, self.duration_ms, self.end);
        Frame::Again
    }

    /// Jumps straight to the end value without animating.
    pub fn settle(&mut self) {
        self.current = self.end;
        self.phase = Phase::Done;
    }

    pub fn current(&self) -> i64 {
        self.current
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_idle(&self) -> bool {
        self.phase == Phase::Idle
    }

    pub fn render(&self, suffix: &str) -> String {
        format!("{}{}", self.current, suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(animator: &mut CountUpAnimator, step_ms: f64, until_ms: f64) -> Vec<i64> {
        let mut seen = vec![animator.current()];
        let mut t = 0.0;
        while t <= until_ms {
            animator.tick(t);
            seen.push(animator.current());
            t += step_ms;
        }
        seen
    }

    #[test]
    fn easing_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_eq!(ease_out_cubic(0.5), 0.875);
    }

    #[test]
    fn progress_is_clamped() {
        assert_eq!(progress(-40.0, 2000), 0.0);
        assert_eq!(progress(f64::NAN, 2000), 0.0);
        assert_eq!(progress(1000.0, 2000), 0.5);
        assert_eq!(progress(9000.0, 2000), 1.0);
        assert_eq!(progress(0.0, 0), 1.0);
    }

    #[test]
    fn values_rise_monotonically_and_stay_below_end() {
        let mut animator = CountUpAnimator::new(500, DEFAULT_DURATION_MS);
        animator.trigger(0.0);
        let seen = run(&mut animator, 16.7, 2100.0);

        assert!(seen.windows(2).all(|pair| pair[0] <= pair[1]));
        assert!(seen.iter().all(|&v| (0..=500).contains(&v)));
    }

    #[test]
    fn settles_exactly_on_end() {
        for end in [1, 7, 90, 500, 12_345] {
            assert_eq!(value_at(2000.0, 2000, end), end);
            assert_eq!(value_at(2500.0, 2000, end), end);

            let mut animator = CountUpAnimator::new(end, 2000);
            animator.trigger(100.0);
            assert_eq!(animator.tick(2099.0), Frame::Again);
            assert_eq!(animator.tick(2100.0), Frame::Finished);
            assert_eq!(animator.current(), end);
            assert_eq!(animator.phase(), Phase::Done);
        }
    }

    #[test]
    fn seven_kinds_counter() {
        let mut animator = CountUpAnimator::new(7, 2000);
        assert!(animator.trigger(0.0));
        assert_eq!(animator.render("가지"), "0가지");

        let mut rendered = Vec::new();
        for t in [0.0, 250.0, 500.0, 1000.0] {
            assert_eq!(animator.tick(t), Frame::Again);
            rendered.push(animator.render("가지"));
        }
        assert_eq!(rendered, ["0가지", "2가지", "4가지", "6가지"]);

        for t in [2000.0, 2001.0, 60_000.0] {
            assert_eq!(animator.tick(t), Frame::Finished);
            assert_eq!(animator.render("가지"), "7가지");
        }
    }

    #[test]
    fn runs_at_most_once() {
        let mut animator = CountUpAnimator::new(90, 2000);
        assert!(animator.trigger(0.0));
        assert!(!animator.trigger(10.0));
        animator.tick(2000.0);
        assert_eq!(animator.current(), 90);

        assert!(!animator.trigger(5000.0));
        assert_eq!(animator.tick(5001.0), Frame::Finished);
        assert_eq!(animator.current(), 90);
        assert_eq!(animator.phase(), Phase::Done);
    }

    #[test]
    fn idle_animator_does_not_move() {
        let mut animator = CountUpAnimator::new(500, 2000);
        assert_eq!(animator.tick(1000.0), Frame::Finished);
        assert_eq!(animator.current(), 0);
        assert!(animator.is_idle());
    }

    #[test]
    fn zero_duration_settles_on_first_tick() {
        let mut animator = CountUpAnimator::new(42, 0);
        animator.trigger(3.0);
        assert_eq!(animator.tick(3.0), Frame::Finished);
        assert_eq!(animator.current(), 42);
    }

    #[test]
    fn frame_timestamp_before_trigger_reads_as_zero() {
        let mut animator = CountUpAnimator::new(500, 2000);
        animator.trigger(1000.0);
        assert_eq!(animator.tick(990.0), Frame::Again);
        assert_eq!(animator.current(), 0);
    }

    #[test]
    fn negative_end_mirrors_positive() {
        for t in [0.0, 123.0, 1000.0, 1999.0, 2000.0] {
            assert_eq!(value_at(t, 2000, -500), -value_at(t, 2000, 500));
        }
    }

    #[test]
    fn settle_skips_animation() {
        let mut animator = CountUpAnimator::new(500, 2000);
        animator.settle();
        assert_eq!(animator.render("+"), "500+");
        assert!(!animator.trigger(0.0));
    }
}
