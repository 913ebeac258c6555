pub mod color;
pub mod contrast;
pub mod counter;
pub mod host;
pub mod motion;
pub mod profile;
pub mod reveal;
pub mod route;

pub use color::{scroll_percentage, text_color_for_scroll, Rgb, ScrollBand};
pub use contrast::{ContrastPreset, GroupStyle, CONTRAST_THRESHOLD};
pub use counter::{StatCounters, StatKind, TickOutcome};
pub use host::{HostError, CURSOR_GLOW_ID, SCROLL_INDICATOR_ID};
pub use profile::{Profile, PROFILE};
pub use reveal::{RevealState, RevealTracker};
pub use route::{EffectsMode, InitConfig, PageView};
