//! Keyboard-driven calculator sessions, from key presses to estimates.

use std::fs;

use buildcost_engine::{AppSettings, CityType, ConstructionType, FormField, NoticeKind, View};
use crossterm::event::KeyCode;
use tempfile::tempdir;

use crate::common::{app_printing_to, app_with_recording_share, press, type_text};

fn final_total(app: &buildcost_engine::App) -> f64 {
    app.result().expect("estimate").final_total
}

#[test]
fn default_session_shows_reference_estimate() {
    let dir = tempdir().unwrap();
    let app = app_printing_to(AppSettings::default(), dir.path());

    let result = app.result().unwrap();
    assert!((result.base_cost - 2_400_000.0).abs() < 1e-6);
    assert!((result.material_adjustment - 120_000.0).abs() < 1e-6);
    assert!((result.contingency - 126_000.0).abs() < 1e-6);
    assert!((result.final_total - 2_646_000.0).abs() < 1e-6);
}

#[test]
fn premium_metro_session_via_keys() {
    let dir = tempdir().unwrap();
    let mut app = app_printing_to(AppSettings::default(), dir.path());

    // Retype the area as 2000.
    for _ in 0..4 {
        press(&mut app, KeyCode::Backspace);
    }
    type_text(&mut app, "2000");

    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Right);
    assert_eq!(app.form().construction_type, ConstructionType::Premium);

    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Left);
    assert_eq!(app.form().city_type, CityType::Tier1);

    press(&mut app, KeyCode::Tab);
    for _ in 0..5 {
        press(&mut app, KeyCode::Right);
    }
    assert_eq!(app.form().material_percent.value(), 10);

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus(), FormField::Calculate);
    press(&mut app, KeyCode::Enter);

    let result = app.result().unwrap();
    assert!((result.base_cost - 5_600_000.0).abs() < 1e-6);
    assert!((result.city_adjusted_cost - 6_720_000.0).abs() < 1e-6);
    assert!((result.subtotal - 7_392_000.0).abs() < 1e-6);
    assert!((result.contingency - 369_600.0).abs() < 1e-6);
    assert!((result.final_total - 7_761_600.0).abs() < 1e-6);
    assert!((result.cost_per_sq_ft - 3_880.8).abs() < 1e-9);
}

#[test]
fn clearing_area_hides_estimate_until_retyped() {
    let dir = tempdir().unwrap();
    let mut app = app_printing_to(AppSettings::default(), dir.path());

    press(&mut app, KeyCode::Delete);
    assert!(app.result().is_none());
    assert!(app.notice().is_none(), "invalid area is not an error");

    type_text(&mut app, "800");
    assert!((final_total(&app) - 1_764_000.0).abs() < 1e-6);
}

#[test]
fn slider_saturates_under_repeated_keys() {
    let dir = tempdir().unwrap();
    let mut app = app_printing_to(AppSettings::default(), dir.path());
    app.set_focus(FormField::Material);

    for _ in 0..40 {
        press(&mut app, KeyCode::Right);
    }
    assert_eq!(app.form().material_percent.value(), 20);

    for _ in 0..40 {
        press(&mut app, KeyCode::Left);
    }
    assert_eq!(app.form().material_percent.value(), 0);
    assert_eq!(app.result().unwrap().material_adjustment, 0.0);
}

#[test]
fn visiting_a_page_and_returning_recomputes() {
    let dir = tempdir().unwrap();
    let mut app = app_printing_to(AppSettings::default(), dir.path());
    let before = final_total(&app);

    press(&mut app, KeyCode::Char('d'));
    assert_eq!(app.view(), View::Disclaimer);
    press(&mut app, KeyCode::Char('b'));
    assert_eq!(app.view(), View::Calculator);

    assert_eq!(final_total(&app).to_bits(), before.to_bits());
}

#[test]
fn share_key_hands_summary_to_clipboard() {
    let dir = tempdir().unwrap();
    let (mut app, shared) = app_with_recording_share(AppSettings::default(), dir.path());

    press(&mut app, KeyCode::Char('s'));

    let shared = shared.borrow();
    assert_eq!(shared.len(), 1);
    assert_eq!(
        shared[0].text,
        "BuildCost 2026 Estimate:\n\
         Total Area: 1200 sq ft\n\
         Estimated Total: ₹26,46,000.00\n\
         Check yours at: https://buildcost.example.com"
    );
    let notice = app.notice().unwrap();
    assert_eq!(notice.kind, NoticeKind::Info);
    assert_eq!(notice.message, "Estimate copied to the clipboard.");
}

#[test]
fn print_key_writes_quote_file() {
    let dir = tempdir().unwrap();
    let mut app = app_printing_to(AppSettings::default(), dir.path());

    press(&mut app, KeyCode::Char('p'));

    let files: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .collect();
    assert_eq!(files.len(), 1);
    let name = files[0].file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("buildcost-quote-"), "{name}");
    assert!(name.ends_with(".txt"), "{name}");

    let body = fs::read_to_string(&files[0]).unwrap();
    assert!(body.contains("Final estimated total     ₹26,46,000.00"));
    assert!(
        app.notice()
            .is_some_and(|n| n.message.starts_with("Quote saved to "))
    );
}

#[test]
fn quit_from_any_view() {
    let dir = tempdir().unwrap();
    let mut app = app_printing_to(AppSettings::default(), dir.path());
    press(&mut app, KeyCode::Char('c'));
    assert_eq!(app.view(), View::Contact);
    assert!(press(&mut app, KeyCode::Char('q')));
    assert!(app.should_quit());
}
