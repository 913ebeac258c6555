use std::fmt;

pub const SCROLL_PERCENT_MIN: f64 = 0.0;
pub const SCROLL_PERCENT_MAX: f64 = 100.0;

const DARK_TONE: f64 = 25.0;
const MID_TONE: f64 = 100.0;
const LIGHT_TONE: f64 = 155.0;
const LIGHTEST_TONE: f64 = 250.0;

const MID_BAND_START: f64 = 30.0;
const LIGHT_BAND_START: f64 = 50.0;
const LIGHTEST_BAND_START: f64 = 70.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn grey(level: u8) -> Self {
        Self::new(level, level, level)
    }

    pub fn to_css(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Segment of the scroll range with its own linear colour ramp.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollBand {
    Dark,
    Mid,
    Light,
    Lightest,
}

impl ScrollBand {
    pub fn for_percent(percent: f64) -> Self {
        let percent = clamp_percent(percent);
        if percent < MID_BAND_START {
            ScrollBand::Dark
        } else if percent < LIGHT_BAND_START {
            ScrollBand::Mid
        } else if percent < LIGHTEST_BAND_START {
            ScrollBand::Light
        } else {
            ScrollBand::Lightest
        }
    }

    /// `(band start, band width, tone at start, tone span)`.
    fn ramp(self) -> (f64, f64, f64, f64) {
        match self {
            ScrollBand::Dark => (SCROLL_PERCENT_MIN, MID_BAND_START, DARK_TONE, 0.0),
            ScrollBand::Mid => (
                MID_BAND_START,
                LIGHT_BAND_START - MID_BAND_START,
                DARK_TONE,
                MID_TONE - DARK_TONE,
            ),
            ScrollBand::Light => (
                LIGHT_BAND_START,
                LIGHTEST_BAND_START - LIGHT_BAND_START,
                MID_TONE,
                LIGHT_TONE - MID_TONE,
            ),
            ScrollBand::Lightest => (
                LIGHTEST_BAND_START,
                SCROLL_PERCENT_MAX - LIGHTEST_BAND_START,
                LIGHT_TONE,
                LIGHTEST_TONE - LIGHT_TONE,
            ),
        }
    }

    /// Interpolation factor of `percent` inside this band. Not clamped, so
    /// evaluating a band at its neighbour's start yields 1.0.
    pub fn factor(self, percent: f64) -> f64 {
        let (start, width, _, _) = self.ramp();
        if width <= 0.0 {
            return 0.0;
        }
        (percent - start) / width
    }

    /// Raw tone this band's formula produces at `percent`.
    pub fn tone(self, percent: f64) -> f64 {
        let (_, _, base, span) = self.ramp();
        base + span * self.factor(percent)
    }

    pub fn color(self, percent: f64) -> Rgb {
        Rgb::grey(tone_to_channel(self.tone(percent)))
    }
}

/// Progress through the scrollable height as a percentage in [0, 100].
pub fn scroll_percentage(scroll_top: f64, scroll_height: f64, client_height: f64) -> f64 {
    let scrollable = scroll_height - client_height;
    if !scrollable.is_finite() || scrollable <= 0.0 || !scroll_top.is_finite() {
        return SCROLL_PERCENT_MIN;
    }
    clamp_percent(scroll_top / scrollable * 100.0)
}

pub fn text_color_for_scroll(percent: f64) -> Rgb {
    let percent = clamp_percent(percent);
    ScrollBand::for_percent(percent).color(percent)
}

fn clamp_percent(percent: f64) -> f64 {
    if percent.is_nan() {
        return SCROLL_PERCENT_MIN;
    }
    percent.clamp(SCROLL_PERCENT_MIN, SCROLL_PERCENT_MAX)
}

fn tone_to_channel(tone: f64) -> u8 {
    tone.round().clamp(0.0, 255.0) as u8
}
