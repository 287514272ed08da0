//! Config-file driven startup.

use std::fs;

use buildcost_engine::{AppSettings, BuildcostConfig, CityType, ConfigError, ConstructionType};
use crossterm::event::KeyCode;
use insta::assert_snapshot;
use tempfile::tempdir;

use crate::common::{app_printing_to, press, render};

#[test]
fn defaults_section_seeds_the_form() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[app]
show_ads = false

[defaults]
area = 2000
construction = "premium"
city = "tier1"
material_percent = 10
"#,
    )
    .unwrap();

    let config = BuildcostConfig::load_from(&path).unwrap().unwrap();
    let settings = AppSettings::from_config(Some(&config));
    assert!(!settings.ui_options.show_ads);

    let app = app_printing_to(settings, dir.path());
    assert_eq!(app.form().area_text, "2000");
    assert_eq!(app.form().construction_type, ConstructionType::Premium);
    assert_eq!(app.form().city_type, CityType::Tier1);
    assert!((app.result().unwrap().final_total - 7_761_600.0).abs() < 1e-6);

    let screen = render(&app);
    assert!(screen.contains("₹77,61,600.00"), "{screen}");
    assert!(!screen.contains("Advertisement"));
}

#[test]
fn malformed_config_reports_its_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[defaults\narea = 1").unwrap();

    let err = BuildcostConfig::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert_eq!(err.path(), &path);
}

#[test]
fn configured_print_dir_receives_quotes() {
    let dir = tempdir().unwrap();
    let quotes = dir.path().join("quotes");
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        format!("[print]\ndir = {:?}\n", quotes.display().to_string()),
    )
    .unwrap();

    let config = BuildcostConfig::load_from(&path).unwrap().unwrap();
    let settings = AppSettings::from_config(Some(&config));
    assert_eq!(settings.print_dir, quotes);

    let print_dir = settings.print_dir.clone();
    let mut app = app_printing_to(settings, &print_dir);
    press(&mut app, KeyCode::Char('p'));

    let entry = fs::read_dir(&quotes).unwrap().next().unwrap().unwrap();
    assert_snapshot!(fs::read_to_string(entry.path()).unwrap(), @r"
    BuildCost Estimate (2026 Index)
    =======================================
    Total area                1200 sq ft
    Construction quality      Standard (₹2,000/sq ft)
    City tier                 Tier 2 (Developing City)
    Material finish           +5%
    ---------------------------------------
    Cost per sq ft                ₹2,205.00
    Base construction cost    ₹24,00,000.00
    City adjusted cost        ₹24,00,000.00
    Material adjustment cost   ₹1,20,000.00
    Subtotal                  ₹25,20,000.00
    5% contingency             ₹1,26,000.00
    ---------------------------------------
    Final estimated total     ₹26,46,000.00

    Estimates are for guidance only. Verify local market rates before building.
    ");
}
