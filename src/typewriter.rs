use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterTimings {
    /// Delay before each typed character.
    pub speed: Duration,
    /// Delay before each deleted character.
    pub delete_speed: Duration,
    /// How long the full text is held before deleting starts.
    pub delay_between: Duration,
}

impl Default for TypewriterTimings {
    fn default() -> Self {
        Self {
            speed: Duration::from_millis(100),
            delete_speed: Duration::from_millis(50),
            delay_between: Duration::from_millis(2000),
        }
    }
}

/// The index is the number of characters currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Typing(usize),
    Paused,
    Deleting(usize),
}

/// A looping type/hold/delete animation over a fixed string.
///
/// Nothing here owns a timer: callers ask [`Typewriter::delay`] how long to
/// wait, then call [`Typewriter::tick`]. [`Typewriter::advance`] does both for
/// an arbitrary stretch of elapsed time, which is how tests drive it.
#[derive(Debug, Clone)]
pub struct Typewriter {
    chars: Vec<char>,
    timings: TypewriterTimings,
    phase: Phase,
    // time already spent waiting on the current step
    waited: Duration,
}

impl Typewriter {
    pub fn new(text: &str, timings: TypewriterTimings) -> Self {
        Self {
            chars: text.chars().collect(),
            timings,
            phase: Phase::Typing(0),
            waited: Duration::ZERO,
        }
    }

    #[cfg(test)]
    fn phase(&self) -> Phase {
        self.phase
    }

    fn shown(&self) -> usize {
        match self.phase {
            Phase::Typing(i) | Phase::Deleting(i) => i,
            Phase::Paused => self.chars.len(),
        }
    }

    pub fn display(&self) -> String {
        self.chars[..self.shown()].iter().collect()
    }

    /// Empty text never animates.
    pub fn is_idle(&self) -> bool {
        self.chars.is_empty()
    }

    /// Time until the next step.
    pub fn delay(&self) -> Duration {
        match self.phase {
            Phase::Typing(_) => self.timings.speed,
            Phase::Paused => self.timings.delay_between,
            Phase::Deleting(_) => self.timings.delete_speed,
        }
    }

    /// Performs one step of the loop.
    pub fn tick(&mut self) {
        let len = self.chars.len();
        if len == 0 {
            return;
        }
        self.waited = Duration::ZERO;
        self.phase = match self.phase {
            Phase::Typing(i) if i + 1 >= len => Phase::Paused,
            Phase::Typing(i) => Phase::Typing(i + 1),
            Phase::Paused => Phase::Deleting(len),
            Phase::Deleting(i) if i <= 1 => Phase::Typing(0),
            Phase::Deleting(i) => Phase::Deleting(i - 1),
        };
    }

    /// Feeds `elapsed` time into the machine, stepping as many times as fit.
    /// Returns true if the display may have changed.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        if self.is_idle() {
            return false;
        }
        let mut budget = self.waited + elapsed;
        let mut stepped = false;
        loop {
            let delay = self.delay();
            if budget < delay {
                self.waited = budget;
                return stepped;
            }
            budget -= delay;
            self.tick();
            stepped = true;
        }
    }

    /// Back to an empty display at the start of typing.
    pub fn restart(&mut self) {
        self.phase = Phase::Typing(0);
        self.waited = Duration::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T: Duration = Duration::from_millis(100);
    const D: Duration = Duration::from_millis(50);
    const PAUSE: Duration = Duration::from_millis(2000);

    fn ab() -> Typewriter {
        Typewriter::new(
            "AB",
            TypewriterTimings {
                speed: T,
                delete_speed: D,
                delay_between: PAUSE,
            },
        )
    }

    #[test]
    fn test_full_cycle() {
        let mut tw = ab();
        assert_eq!(tw.display(), "");

        tw.advance(T);
        assert_eq!(tw.display(), "A");
        tw.advance(T);
        assert_eq!(tw.display(), "AB");
        assert_eq!(tw.phase(), Phase::Paused);

        // held for the whole pause
        tw.advance(PAUSE - Duration::from_millis(1));
        assert_eq!(tw.display(), "AB");
        tw.advance(Duration::from_millis(1));
        assert_eq!(tw.phase(), Phase::Deleting(2));
        assert_eq!(tw.display(), "AB");

        tw.advance(D);
        assert_eq!(tw.display(), "A");
        tw.advance(D);
        assert_eq!(tw.display(), "");
        assert_eq!(tw.phase(), Phase::Typing(0));

        tw.advance(T);
        assert_eq!(tw.display(), "A");
    }

    #[test]
    fn test_loops_indefinitely() {
        let mut tw = ab();
        let cycle = T * 2 + PAUSE + D * 2;
        for _ in 0..50 {
            tw.advance(cycle);
            assert_eq!(tw.phase(), Phase::Typing(0));
            assert_eq!(tw.display(), "");
        }
    }

    #[test]
    fn test_partial_waits_accumulate() {
        let mut tw = ab();
        assert!(!tw.advance(Duration::from_millis(60)));
        assert_eq!(tw.display(), "");
        assert!(tw.advance(Duration::from_millis(40)));
        assert_eq!(tw.display(), "A");
    }

    #[test]
    fn test_restart_returns_to_empty_typing() {
        let mut tw = ab();
        tw.advance(T * 2 + PAUSE);
        assert_eq!(tw.phase(), Phase::Deleting(2));
        tw.restart();
        assert_eq!(tw.phase(), Phase::Typing(0));
        assert_eq!(tw.display(), "");
        tw.advance(T);
        assert_eq!(tw.display(), "A");
    }

    #[test]
    fn test_multibyte_characters() {
        let mut tw = Typewriter::new("héllo", TypewriterTimings::default());
        tw.tick();
        tw.tick();
        assert_eq!(tw.display(), "hé");
    }

    #[test]
    fn test_empty_text_is_idle() {
        let mut tw = Typewriter::new("", TypewriterTimings::default());
        assert!(tw.is_idle());
        assert!(!tw.advance(Duration::from_secs(60)));
        tw.tick();
        assert_eq!(tw.display(), "");
        assert_eq!(tw.phase(), Phase::Typing(0));
    }

    #[test]
    fn test_single_char_cycle() {
        let mut tw = Typewriter::new("x", TypewriterTimings::default());
        tw.tick();
        assert_eq!(tw.phase(), Phase::Paused);
        tw.tick();
        assert_eq!(tw.phase(), Phase::Deleting(1));
        tw.tick();
        assert_eq!(tw.phase(), Phase::Typing(0));
    }
}
