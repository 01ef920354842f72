//! Tests for the profile toggle component
//!
//! These tests cover:
//! - Visibility parity after any number of toggles
//! - Conditional rendering of the profile block
//! - Render purity (same state, same description)
//! - The three end-to-end scenarios: hidden, shown, shown-then-hidden

mod common;

use common::toggled;
use profile_toggle::ui::{
    ProfileRecord, ProfileToggle, ProfileToggleAction, TITLE, TOGGLE_LABEL, Visibility,
};

// ============================================================================
// Toggle state machine
// ============================================================================

#[test]
fn test_visibility_matches_toggle_parity() {
    for n in 0..16 {
        let component = toggled(n);
        assert_eq!(
            component.is_visible(),
            n % 2 == 1,
            "wrong visibility after {n} toggles"
        );
    }
}

#[test]
fn test_double_toggle_restores_state() {
    let mut component = toggled(1);
    let before = component.visibility();
    component.toggle_visibility();
    component.toggle_visibility();
    assert_eq!(component.visibility(), before);
}

#[test]
fn test_toggle_returns_current_visibility() {
    let mut component = ProfileToggle::new();
    let returned = component.toggle_visibility();
    assert_eq!(returned, component.visibility());
    assert_eq!(returned, Visibility::Shown);
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn test_hidden_render_omits_every_profile_field() {
    let component = toggled(0);
    let profile = component.profile();
    let view = component.render();
    assert!(view.details.is_none());

    let text = view.to_string();
    for field in [
        profile.full_name(),
        profile.profession(),
        profile.bio(),
        profile.img_src(),
    ] {
        assert!(!text.contains(field), "hidden render leaked {field:?}");
    }
}

#[test]
fn test_shown_render_includes_fields_verbatim() {
    let component = toggled(1);
    let profile = component.profile();
    let details = component.render().details.expect("details while shown");

    assert_eq!(details.full_name, profile.full_name());
    assert_eq!(details.profession, profile.profession());
    assert_eq!(details.bio, profile.bio());
    assert_eq!(details.img_src, profile.img_src());
}

#[test]
fn test_render_is_idempotent() {
    for n in 0..2 {
        let component = toggled(n);
        let first = component.render();
        let second = component.render();
        assert_eq!(first, second);
        assert_eq!(first.to_string(), second.to_string());
    }
}

#[test]
fn test_render_always_has_title_and_control() {
    for n in 0..2 {
        let component = toggled(n);
        let view = component.render();
        assert_eq!(view.title, TITLE);
        assert_eq!(view.toggle_label, TOGGLE_LABEL);
    }
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_scenario_initial_render_is_hidden() {
    let component = ProfileToggle::new();
    let text = component.render().to_string();
    assert!(text.contains(TITLE));
    assert!(text.contains(TOGGLE_LABEL));
    assert!(!text.contains("Profession:"));
    assert!(!text.contains("Bio:"));
}

#[test]
fn test_scenario_one_toggle_shows_profile() {
    let mut component = ProfileToggle::new();
    component.toggle_visibility();
    let details = component.render().details.expect("details while shown");
    assert_eq!(details.full_name, "quavo");
    assert_eq!(details.profession, "musician");
}

#[test]
fn test_scenario_two_toggles_hide_profile_again() {
    let mut component = ProfileToggle::new();
    component.toggle_visibility();
    component.toggle_visibility();
    assert!(component.render().details.is_none());
}

// ============================================================================
// egui painting (headless)
// ============================================================================

#[test]
fn test_show_headless_frames_do_not_toggle() {
    let ctx = egui::Context::default();
    let mut component = toggled(1);

    let _ = ctx.run(egui::RawInput::default(), |ctx| {
        assert_eq!(component.show(ctx), ProfileToggleAction::None);
    });

    assert!(component.is_visible());
    assert_eq!(component.profile(), &ProfileRecord::default());
}
