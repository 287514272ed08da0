//! Full-frame rendering against ratatui's `TestBackend`.

use buildcost_engine::{AppSettings, UiOptions};
use crossterm::event::KeyCode;
use tempfile::tempdir;

use crate::common::{app_printing_to, press, render, render_sized, type_text};

#[test]
fn calculator_shows_form_results_and_footer() {
    let dir = tempdir().unwrap();
    let app = app_printing_to(AppSettings::default(), dir.path());

    let screen = render(&app);
    for expected in [
        "BuildCost",
        "2026 Construction Cost Estimator for India",
        "Total Area (sq ft)",
        "1200▏",
        "Standard (₹2,000/sq ft)",
        "Tier 2 (Developing City)",
        "Material Finish: +5%",
        "Economy",
        "Ultra Luxury",
        "[ Calculate Estimate ]",
        "Estimated Budget (2026 Index)",
        "₹2,205.00",
        "₹24,00,000.00",
        "₹1,20,000.00",
        "₹25,20,000.00",
        "₹1,26,000.00",
        "Final Estimated Total",
        "₹26,46,000.00",
        "for 1200 sq. ft. build area",
        "Advertisement - middle-feed",
        "[a] About Us",
        "[d] Disclaimer",
        "© 2026 BuildCost India – Precision Estimating.",
    ] {
        assert!(screen.contains(expected), "missing {expected:?} in\n{screen}");
    }
}

#[test]
fn results_panel_is_absent_without_valid_area() {
    let dir = tempdir().unwrap();
    let mut app = app_printing_to(AppSettings::default(), dir.path());
    press(&mut app, KeyCode::Delete);
    type_text(&mut app, "0");

    let screen = render(&app);
    assert!(!screen.contains("Estimated Budget"));
    assert!(!screen.contains("Final Estimated Total"));
    assert!(screen.contains("Total Area (sq ft)"));
}

#[test]
fn ad_slot_hidden_when_disabled() {
    let dir = tempdir().unwrap();
    let settings = AppSettings {
        ui_options: UiOptions {
            show_ads: false,
            ..UiOptions::default()
        },
        ..AppSettings::default()
    };
    let app = app_printing_to(settings, dir.path());

    assert!(!render(&app).contains("Advertisement"));
}

#[test]
fn ascii_mode_uses_rs_prefix() {
    let dir = tempdir().unwrap();
    let settings = AppSettings {
        ui_options: UiOptions {
            ascii_only: true,
            ..UiOptions::default()
        },
        ..AppSettings::default()
    };
    let app = app_printing_to(settings, dir.path());

    let screen = render(&app);
    assert!(screen.contains("Rs. 26,46,000.00"), "{screen}");
    assert!(screen.contains("(c) 2026 BuildCost India - Precision Estimating."));
    assert!(!screen.contains('₹'));
}

#[test]
fn static_pages_render_with_back_hint() {
    let dir = tempdir().unwrap();
    let mut app = app_printing_to(AppSettings::default(), dir.path());

    for (key, heading, body) in [
        ('v', "Privacy Policy", "Data Collection"),
        ('t', "Terms of Service", "Usage"),
        ('d', "Disclaimer", "general guidance only"),
        ('a', "About Us", "Indian market"),
        ('c', "Contact Us", "hello@buildcost.example.com"),
    ] {
        press(&mut app, KeyCode::Char(key));
        let screen = render(&app);
        assert!(screen.contains(heading), "{heading}\n{screen}");
        assert!(screen.contains(body), "{body}\n{screen}");
        assert!(screen.contains("Back to Calculator"));
        assert!(!screen.contains("Final Estimated Total"));
    }
}

#[test]
fn share_fallback_notice_appears_in_status_bar() {
    let dir = tempdir().unwrap();
    let mut app = app_printing_to(AppSettings::default(), dir.path());

    press(&mut app, KeyCode::Char('s'));

    let screen = render(&app);
    let status = screen.lines().last().unwrap();
    assert!(
        status.contains("Warning: Sharing is not supported on this terminal."),
        "{status}"
    );
}

#[test]
fn key_hints_shown_without_notice() {
    let dir = tempdir().unwrap();
    let app = app_printing_to(AppSettings::default(), dir.path());

    let screen = render(&app);
    let status = screen.lines().last().unwrap();
    assert!(status.contains("Tab next field"), "{status}");
    assert!(status.contains("q quit"), "{status}");
}

#[test]
fn small_terminal_does_not_panic() {
    let dir = tempdir().unwrap();
    let app = app_printing_to(AppSettings::default(), dir.path());

    let screen = render_sized(&app, 20, 6);
    assert_eq!(screen.lines().count(), 6);
}
