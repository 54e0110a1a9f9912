/// Splash progress driven by a fixed-rate timer.
///
/// Progress ramps linearly from 0 to 100 over `duration_ms`, advancing once
/// per `interval_ms` tick. Completion is reported exactly once; ticks after
/// that (or after [`LoadingSequencer::cancel`]) are ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadingSequencer {
    increment: f64,
    progress: f64,
    finished: bool,
    cancelled: bool,
}

/// What a single timer tick produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tick {
    /// Still loading; carries the new progress.
    Progress(f64),
    /// Progress just reached 100. The caller stops the timer, hides the
    /// splash and scrolls to the top.
    Completed,
    /// The sequencer had already finished or was cancelled.
    Idle,
}

impl LoadingSequencer {
    pub const MAX: f64 = 100.0;

    pub fn new(duration_ms: u32, interval_ms: u32) -> Self {
        let increment = if duration_ms == 0 || interval_ms == 0 || interval_ms >= duration_ms {
            Self::MAX
        } else {
            Self::MAX * f64::from(interval_ms) / f64::from(duration_ms)
        };
        Self {
            increment,
            progress: 0.0,
            finished: false,
            cancelled: false,
        }
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn is_loading(&self) -> bool {
        self.progress < Self::MAX
    }

    pub fn tick(&mut self) -> Tick {
        if self.finished || self.cancelled {
            return Tick::Idle;
        }
        let next = self.progress + self.increment;
        // Float accumulation can land a hair under 100 on the final step.
        if next >= Self::MAX - 1e-9 {
            self.progress = Self::MAX;
            self.finished = true;
            Tick::Completed
        } else {
            self.progress = next;
            Tick::Progress(next)
        }
    }

    /// Stops the sequence without completing it.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn caption_opacity(&self) -> f64 {
        caption_opacity(self.progress)
    }
}

/// Opacity of the welcome caption under the splash progress bar.
pub fn caption_opacity(progress: f64) -> f64 {
    (progress / LoadingSequencer::MAX).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_completion(seq: &mut LoadingSequencer) -> (usize, usize) {
        let mut ticks = 0;
        let mut completions = 0;
        for _ in 0..10_000 {
            ticks += 1;
            match seq.tick() {
                Tick::Completed => completions += 1,
                Tick::Idle => break,
                Tick::Progress(_) => {}
            }
        }
        (ticks, completions)
    }

    #[test]
    fn ramps_linearly() {
        let mut seq = LoadingSequencer::new(1500, 50);
        assert_eq!(seq.progress(), 0.0);
        assert!(seq.is_loading());

        for n in 1..30 {
            let Tick::Progress(p) = seq.tick() else {
                panic!("completed early at tick {n}");
            };
            let expected = (n as f64 * 100.0 * 50.0 / 1500.0).min(100.0);
            assert!((p - expected).abs() < 1e-9, "tick {n}: {p} != {expected}");
            assert!(seq.is_loading());
        }
        assert_eq!(seq.tick(), Tick::Completed);
        assert_eq!(seq.progress(), 100.0);
        assert!(!seq.is_loading());
    }

    #[test]
    fn completes_exactly_once() {
        for (duration, interval) in [(1500, 50), (1000, 50), (1000, 30), (100, 7), (50, 50), (50, 500)] {
            let mut seq = LoadingSequencer::new(duration, interval);
            let (_, completions) = run_to_completion(&mut seq);
            assert_eq!(completions, 1, "{duration}/{interval}");
            assert_eq!(seq.tick(), Tick::Idle);
            assert_eq!(seq.progress(), 100.0);
        }
    }

    #[test]
    fn progress_never_decreases() {
        let mut seq = LoadingSequencer::new(1000, 30);
        let mut last = seq.progress();
        while seq.tick() != Tick::Idle {
            assert!(seq.progress() >= last);
            assert!(seq.progress() <= 100.0);
            last = seq.progress();
        }
    }

    #[test]
    fn zero_duration_completes_on_first_tick() {
        let mut seq = LoadingSequencer::new(0, 50);
        assert_eq!(seq.tick(), Tick::Completed);
    }

    #[test]
    fn zero_interval_completes_on_first_tick() {
        let mut seq = LoadingSequencer::new(1500, 0);
        assert_eq!(seq.tick(), Tick::Completed);
        assert!(!seq.is_loading());
        assert_eq!(seq.tick(), Tick::Idle);
    }

    #[test]
    fn cancelled_sequence_ignores_ticks() {
        let mut seq = LoadingSequencer::new(1500, 50);
        seq.tick();
        let before = seq.progress();
        seq.cancel();
        for _ in 0..100 {
            assert_eq!(seq.tick(), Tick::Idle);
        }
        assert_eq!(seq.progress(), before);
        assert!(seq.is_loading());
    }

    #[test]
    fn caption_fades_in_with_progress() {
        let mut seq = LoadingSequencer::new(200, 50);
        assert_eq!(seq.caption_opacity(), 0.0);
        seq.tick();
        assert!((seq.caption_opacity() - 0.25).abs() < 1e-9);
        run_to_completion(&mut seq);
        assert_eq!(seq.caption_opacity(), 1.0);
    }
}
