/// Scroll percentage above which the page is treated as a dark section.
pub const CONTRAST_THRESHOLD: f64 = 60.0;

pub const SKILL_CATEGORY_SELECTOR: &str = ".skill-category";
pub const CONTACT_ITEM_SELECTOR: &str = ".contact-item";
pub const PROJECT_CARD_SELECTOR: &str = ".project-card";

/// Border and background applied to one class-tagged group. `None` leaves the
/// property untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GroupStyle {
    pub border_color: Option<&'static str>,
    pub background: Option<&'static str>,
    pub border_left_color: Option<&'static str>,
}

impl GroupStyle {
    const fn boxed(border_color: &'static str, background: &'static str) -> Self {
        Self {
            border_color: Some(border_color),
            background: Some(background),
            border_left_color: None,
        }
    }

    const fn left_rule(border_left_color: &'static str) -> Self {
        Self {
            border_color: None,
            background: None,
            border_left_color: Some(border_left_color),
        }
    }

    /// CSS `(property, value)` pairs in application order.
    pub fn declarations(&self) -> Vec<(&'static str, &'static str)> {
        let mut out = Vec::with_capacity(3);
        if let Some(value) = self.border_color {
            out.push(("border-color", value));
        }
        if let Some(value) = self.background {
            out.push(("background", value));
        }
        if let Some(value) = self.border_left_color {
            out.push(("border-left-color", value));
        }
        out
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContrastPreset {
    LightSection,
    DarkSection,
}

impl ContrastPreset {
    /// Step function over the scroll percentage; there is no blend.
    pub fn for_scroll(percent: f64) -> Self {
        if percent > CONTRAST_THRESHOLD {
            ContrastPreset::DarkSection
        } else {
            ContrastPreset::LightSection
        }
    }

    pub fn skill_category(self) -> GroupStyle {
        match self {
            ContrastPreset::DarkSection => {
                GroupStyle::boxed("rgba(255, 255, 255, 0.2)", "rgba(255, 255, 255, 0.08)")
            }
            ContrastPreset::LightSection => {
                GroupStyle::boxed("rgba(0, 0, 0, 0.1)", "rgba(255, 255, 255, 0.3)")
            }
        }
    }

    pub fn contact_item(self) -> GroupStyle {
        match self {
            ContrastPreset::DarkSection => {
                GroupStyle::boxed("rgba(255, 255, 255, 0.2)", "rgba(255, 255, 255, 0.08)")
            }
            ContrastPreset::LightSection => {
                GroupStyle::boxed("rgba(0, 0, 0, 0.1)", "rgba(255, 255, 255, 0.2)")
            }
        }
    }

    pub fn project_card(self) -> GroupStyle {
        match self {
            ContrastPreset::DarkSection => GroupStyle::left_rule("rgba(255, 255, 255, 0.3)"),
            ContrastPreset::LightSection => GroupStyle::left_rule("rgba(0, 0, 0, 0.1)"),
        }
    }

    /// Every styled group as `(selector, style)`.
    pub fn groups(self) -> [(&'static str, GroupStyle); 3] {
        [
            (SKILL_CATEGORY_SELECTOR, self.skill_category()),
            (CONTACT_ITEM_SELECTOR, self.contact_item()),
            (PROJECT_CARD_SELECTOR, self.project_card()),
        ]
    }
}
