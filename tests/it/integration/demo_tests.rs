//! The scripted demo scenarios produce the counters a viewer would see.

use gesturebutton::constants::DEMO_LONG_PRESS_DELAY;
use gesturebutton::demo;
use gesturebutton::gesture::GestureConfig;
use gesturebutton::presenter::GesturePresenter;

fn run_scenarios() -> Vec<(&'static str, GesturePresenter)> {
    let config = GestureConfig::default().with_long_press_delay(DEMO_LONG_PRESS_DELAY);
    demo::run_all(config)
        .into_iter()
        .map(|(name, button)| (name, button.presenter()))
        .collect()
}

fn scenario(results: &[(&'static str, GesturePresenter)], name: &str) -> GesturePresenter {
    results
        .iter()
        .find(|(n, _)| *n == name)
        .unwrap_or_else(|| panic!("no scenario named {name}"))
        .1
        .clone()
}

#[test]
fn test_every_scenario_ends_with_no_button_pressed() {
    let results = run_scenarios();
    assert_eq!(results.len(), 6);
    for (name, presenter) in &results {
        assert!(!presenter.pressed, "scenario {name} left the button pressed");
        assert_eq!(
            presenter.press_count, presenter.end_count,
            "scenario {name} lost an end event"
        );
    }
}

#[test]
fn test_single_tap_scenario() {
    let results = run_scenarios();
    let presenter = scenario(&results, "single tap");

    assert_eq!(presenter.press_count, 1);
    assert_eq!(presenter.release_inside_count, 1);
    assert_eq!(presenter.double_tap_count, 0);
    assert_eq!(presenter.long_press_count, 0);
    assert_eq!(presenter.repeat_count, 0);
}

#[test]
fn test_double_tap_scenario() {
    let results = run_scenarios();
    let presenter = scenario(&results, "double tap");

    assert_eq!(presenter.press_count, 2);
    assert_eq!(presenter.double_tap_count, 1);
}

#[test]
fn test_triple_tap_scenario_pairs_only_once() {
    let results = run_scenarios();
    let presenter = scenario(&results, "triple tap");

    assert_eq!(presenter.press_count, 3);
    assert_eq!(presenter.double_tap_count, 1);
}

#[test]
fn test_long_press_scenario() {
    let results = run_scenarios();
    let presenter = scenario(&results, "long press hold");

    assert_eq!(presenter.long_press_count, 1);
    assert_eq!(presenter.release_inside_count, 1);
}

#[test]
fn test_repeat_scenario_ticks_while_held() {
    let results = run_scenarios();
    let presenter = scenario(&results, "repeat hold");

    assert!(presenter.repeat_count >= 1);
    assert_eq!(presenter.end_count, 1);
}

#[test]
fn test_drag_out_scenario_releases_outside() {
    let results = run_scenarios();
    let presenter = scenario(&results, "drag out and release");

    assert_eq!(presenter.release_outside_count, 1);
    assert_eq!(presenter.release_inside_count, 0);
    assert!(presenter.drag_changed.is_some());
}
