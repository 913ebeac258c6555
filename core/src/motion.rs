pub const PARALLAX_SPEED: f64 = 0.5;
pub const PARALLAX_SELECTOR: &str = ".hero, .section-header";
pub const DYNAMIC_TEXT_SELECTOR: &str = ".dynamic-text";
pub const SKILL_TAG_SELECTOR: &str = ".skill-tag";
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

pub const SKILL_TAG_HOVER_TRANSFORM: &str = "translateY(-3px) scale(1.05)";
pub const SKILL_TAG_REST_TRANSFORM: &str = "translateY(0) scale(1)";

pub fn parallax_offset(scroll_y: f64) -> f64 {
    if !scroll_y.is_finite() {
        return 0.0;
    }
    scroll_y * PARALLAX_SPEED
}

pub fn parallax_transform(scroll_y: f64) -> String {
    format!("translateY({}px)", parallax_offset(scroll_y))
}

pub fn px(value: f64) -> String {
    format!("{value}px")
}

pub fn percent(value: f64) -> String {
    format!("{value}%")
}

/// Selector for a same-page anchor's target, or `None` when the href does not
/// name a fragment.
pub fn anchor_target(href: &str) -> Option<&str> {
    let href = href.trim();
    let fragment = href.strip_prefix('#')?;
    if fragment.trim().is_empty() {
        return None;
    }
    Some(href)
}
