//! State behind the portfolio statistics counter.
//!
//! Each counter climbs to its own target on its own timer. Manual increments
//! bypass the targets; only the experience counter has a manual ceiling.

pub const EXPERIENCE_MANUAL_MAX: u32 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StatKind {
    Experience,
    Projects,
    Technologies,
}

impl StatKind {
    pub const ALL: [StatKind; 3] = [
        StatKind::Experience,
        StatKind::Projects,
        StatKind::Technologies,
    ];

    pub fn target(self) -> u32 {
        match self {
            StatKind::Experience => 3,
            StatKind::Projects => 10,
            StatKind::Technologies => 15,
        }
    }

    pub fn tick_ms(self) -> u32 {
        match self {
            StatKind::Experience => 300,
            StatKind::Projects => 150,
            StatKind::Technologies => 100,
        }
    }

    pub fn index(self) -> usize {
        match self {
            StatKind::Experience => 0,
            StatKind::Projects => 1,
            StatKind::Technologies => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StatKind::Experience => "Years Experience",
            StatKind::Projects => "Projects Completed",
            StatKind::Technologies => "Technologies Used",
        }
    }

    pub fn action_label(self) -> &'static str {
        match self {
            StatKind::Experience => "+ Add Year",
            StatKind::Projects => "+ Add Project",
            StatKind::Technologies => "+ Add Technology",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            StatKind::Experience => "💼",
            StatKind::Projects => "🚀",
            StatKind::Technologies => "⚡",
        }
    }

    fn manual_max(self) -> Option<u32> {
        match self {
            StatKind::Experience => Some(EXPERIENCE_MANUAL_MAX),
            StatKind::Projects | StatKind::Technologies => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// The counter moved and its timer should keep running.
    Running,
    /// The counter sits at its target; the timer should be cancelled.
    Finished,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatCounters {
    values: [u32; 3],
    started: bool,
}

impl StatCounters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, kind: StatKind) -> u32 {
        self.values[kind.index()]
    }

    pub fn values(&self) -> (u32, u32, u32) {
        (self.values[0], self.values[1], self.values[2])
    }

    pub fn started(&self) -> bool {
        self.started
    }

    /// Marks the automatic animation as started. Returns `false` if it already
    /// was, in which case no timers should be armed.
    pub fn start(&mut self) -> bool {
        if self.started {
            return false;
        }
        self.started = true;
        true
    }

    /// One timer tick for `kind`. Never leaves the counter above its target.
    pub fn tick(&mut self, kind: StatKind) -> TickOutcome {
        let target = kind.target();
        let slot = &mut self.values[kind.index()];
        if *slot >= target {
            *slot = target;
            return TickOutcome::Finished;
        }
        *slot += 1;
        if *slot >= target {
            TickOutcome::Finished
        } else {
            TickOutcome::Running
        }
    }

    pub fn increment(&mut self, kind: StatKind) -> u32 {
        let slot = &mut self.values[kind.index()];
        let next = slot.saturating_add(1);
        *slot = match kind.manual_max() {
            Some(max) => next.min(max),
            None => next,
        };
        *slot
    }

    pub fn reset(&mut self) {
        self.values = [0; 3];
        self.started = false;
    }
}
