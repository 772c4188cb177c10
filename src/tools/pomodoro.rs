use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Focus,
    ShortBreak,
    LongBreak,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PomodoroSettings {
    pub focus: Duration,
    pub short_break: Duration,
    pub long_break: Duration,
    /// Every n-th completed focus session is followed by a long break.
    pub sessions_before_long_break: u32,
}

impl Default for PomodoroSettings {
    fn default() -> Self {
        Self {
            focus: Duration::from_secs(25 * 60),
            short_break: Duration::from_secs(5 * 60),
            long_break: Duration::from_secs(15 * 60),
            sessions_before_long_break: 4,
        }
    }
}

impl PomodoroSettings {
    fn duration_of(&self, phase: Phase) -> Duration {
        match phase {
            Phase::Focus => self.focus,
            Phase::ShortBreak => self.short_break,
            Phase::LongBreak => self.long_break,
        }
    }
}

/// Pomodoro countdown.
///
/// The timer does not own a clock; callers feed elapsed time through
/// [`PomodoroTimer::tick`]. When a phase runs out the timer moves to the next
/// phase and pauses.
#[derive(Debug, Clone)]
pub struct PomodoroTimer {
    settings: PomodoroSettings,
    phase: Phase,
    remaining: Duration,
    running: bool,
    completed_focus_sessions: u32,
}

impl Default for PomodoroTimer {
    fn default() -> Self {
        Self::new(PomodoroSettings::default())
    }
}

impl PomodoroTimer {
    pub fn new(settings: PomodoroSettings) -> Self {
        Self {
            settings,
            phase: Phase::Focus,
            remaining: settings.focus,
            running: false,
            completed_focus_sessions: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn completed_focus_sessions(&self) -> u32 {
        self.completed_focus_sessions
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Pause and refill the current phase.
    pub fn reset(&mut self) {
        self.running = false;
        self.remaining = self.settings.duration_of(self.phase);
    }

    /// Abandon the current phase without counting it as completed.
    pub fn skip(&mut self) -> Phase {
        let next = match self.phase {
            Phase::Focus => Phase::ShortBreak,
            Phase::ShortBreak | Phase::LongBreak => Phase::Focus,
        };
        self.enter(next);
        next
    }

    /// Advance the countdown. Returns the new phase when the current one ran
    /// out. Time past the end of a phase is discarded.
    pub fn tick(&mut self, elapsed: Duration) -> Option<Phase> {
        if !self.running {
            return None;
        }
        self.remaining = self.remaining.saturating_sub(elapsed);
        if !self.remaining.is_zero() {
            return None;
        }
        let next = match self.phase {
            Phase::Focus => {
                self.completed_focus_sessions += 1;
                let every = self.settings.sessions_before_long_break.max(1);
                if self.completed_focus_sessions % every == 0 {
                    Phase::LongBreak
                } else {
                    Phase::ShortBreak
                }
            }
            Phase::ShortBreak | Phase::LongBreak => Phase::Focus,
        };
        self.enter(next);
        Some(next)
    }

    fn enter(&mut self, phase: Phase) {
        self.phase = phase;
        self.remaining = self.settings.duration_of(phase);
        self.running = false;
    }
}
