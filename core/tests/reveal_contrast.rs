use folio_core::contrast::{CONTACT_ITEM_SELECTOR, PROJECT_CARD_SELECTOR};
use folio_core::{ContrastPreset, RevealState, RevealTracker};

#[test]
fn reveal_happens_once_and_sticks() {
    let mut tracker = RevealTracker::new();
    let first = tracker.register();
    let second = tracker.register();
    assert_eq!(tracker.state(first), Some(RevealState::Hidden));

    assert!(!tracker.observe(first, false, 0.0));
    assert!(!tracker.observe(first, true, 0.05));
    assert_eq!(tracker.state(first), Some(RevealState::Hidden));

    assert!(tracker.observe(first, true, 0.1));
    assert_eq!(tracker.state(first), Some(RevealState::Visible));

    assert!(!tracker.observe(first, true, 1.0));
    assert!(!tracker.observe(first, false, 0.0));
    assert_eq!(tracker.state(first), Some(RevealState::Visible));

    assert_eq!(tracker.state(second), Some(RevealState::Hidden));
    assert_eq!(tracker.visible_count(), 1);
}

#[test]
fn threshold_tolerance_is_one_thousandth() {
    let mut tracker = RevealTracker::new();
    let below = tracker.register();
    let near = tracker.register();
    assert!(!tracker.observe(below, true, 0.0989));
    assert_eq!(tracker.state(below), Some(RevealState::Hidden));
    assert!(tracker.observe(near, true, 0.0995));
    assert_eq!(tracker.state(near), Some(RevealState::Visible));
}

#[test]
fn unknown_ids_are_ignored() {
    let mut tracker = RevealTracker::new();
    assert!(!tracker.observe(3, true, 1.0));
    assert!(tracker.is_empty());
}

#[test]
fn reveal_styles() {
    assert_eq!(RevealState::Hidden.opacity(), "0");
    assert_eq!(RevealState::Hidden.transform(), "translateY(30px)");
    assert_eq!(RevealState::Visible.opacity(), "1");
    assert_eq!(RevealState::Visible.transform(), "translateY(0)");
}

#[test]
fn contrast_flips_after_sixty_percent() {
    assert_eq!(ContrastPreset::for_scroll(0.0), ContrastPreset::LightSection);
    assert_eq!(ContrastPreset::for_scroll(60.0), ContrastPreset::LightSection);
    assert_eq!(ContrastPreset::for_scroll(60.01), ContrastPreset::DarkSection);
    assert_eq!(ContrastPreset::for_scroll(100.0), ContrastPreset::DarkSection);
}

#[test]
fn contact_items_switch_between_two_presets_only() {
    let light = ContrastPreset::for_scroll(59.9).contact_item();
    let dark = ContrastPreset::for_scroll(60.1).contact_item();
    assert_eq!(
        light.declarations(),
        vec![
            ("border-color", "rgba(0, 0, 0, 0.1)"),
            ("background", "rgba(255, 255, 255, 0.2)"),
        ]
    );
    assert_eq!(
        dark.declarations(),
        vec![
            ("border-color", "rgba(255, 255, 255, 0.2)"),
            ("background", "rgba(255, 255, 255, 0.08)"),
        ]
    );
    let mut percent = 0.0;
    while percent <= 100.0 {
        let style = ContrastPreset::for_scroll(percent).contact_item();
        assert!(style == light || style == dark, "intermediate style at {percent}");
        percent += 0.5;
    }
}

#[test]
fn project_cards_only_touch_left_border() {
    for preset in [ContrastPreset::LightSection, ContrastPreset::DarkSection] {
        let groups = preset.groups();
        let (selector, style) = groups[2];
        assert_eq!(selector, PROJECT_CARD_SELECTOR);
        assert_eq!(style.border_color, None);
        assert_eq!(style.background, None);
        assert!(style.border_left_color.is_some());
        assert_eq!(groups[1].0, CONTACT_ITEM_SELECTOR);
    }
    assert_eq!(
        ContrastPreset::LightSection.skill_category().background,
        Some("rgba(255, 255, 255, 0.3)")
    );
}
