//! One-shot reveal bookkeeping for elements that fade in on scroll.

/// Share of an element that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;
/// Browsers report ratios at the threshold with float noise.
const RATIO_EPSILON: f64 = 1.0e-3;
/// Observer root margin; the bottom 100px of the viewport do not count.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -100px 0px";

pub const REVEAL_SELECTOR: &str = ".skill-category, .project-card, .contact-item";
pub const REVEAL_ID_ATTR: &str = "data-reveal-id";

pub const HIDDEN_OPACITY: &str = "0";
pub const HIDDEN_TRANSFORM: &str = "translateY(30px)";
pub const VISIBLE_OPACITY: &str = "1";
pub const VISIBLE_TRANSFORM: &str = "translateY(0)";
pub const REVEAL_TRANSITION: &str = "opacity 0.8s ease, transform 0.8s ease";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    Hidden,
    Visible,
}

impl RevealState {
    pub fn opacity(self) -> &'static str {
        match self {
            RevealState::Hidden => HIDDEN_OPACITY,
            RevealState::Visible => VISIBLE_OPACITY,
        }
    }

    pub fn transform(self) -> &'static str {
        match self {
            RevealState::Hidden => HIDDEN_TRANSFORM,
            RevealState::Visible => VISIBLE_TRANSFORM,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct RevealTracker {
    states: Vec<RevealState>,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a hidden element and returns its id.
    pub fn register(&mut self) -> usize {
        self.states.push(RevealState::Hidden);
        self.states.len() - 1
    }

    pub fn state(&self, id: usize) -> Option<RevealState> {
        self.states.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn visible_count(&self) -> usize {
        self.states
            .iter()
            .filter(|state| **state == RevealState::Visible)
            .count()
    }

    /// Feeds one intersection report. Returns `true` only on the
    /// hidden-to-visible transition; later reports are no-ops.
    pub fn observe(&mut self, id: usize, is_intersecting: bool, ratio: f64) -> bool {
        let Some(state) = self.states.get_mut(id) else {
            return false;
        };
        if *state == RevealState::Visible {
            return false;
        }
        if !is_intersecting || !(ratio + RATIO_EPSILON >= REVEAL_THRESHOLD) {
            return false;
        }
        *state = RevealState::Visible;
        true
    }
}
