use contrast_audit::catalog::{BUILTIN_COMBINATIONS, Catalog, ColorCombination};
use contrast_audit::report::generate_report;
use palette::Srgb;

#[test]
fn test_builtin_catalog_matches_table() {
    let catalog = Catalog::builtin();
    assert_eq!(catalog.len(), BUILTIN_COMBINATIONS.len());

    let names: Vec<&str> = catalog.iter().map(|c| c.name.as_str()).collect();
    let expected: Vec<&str> = BUILTIN_COMBINATIONS.iter().map(|(n, _, _)| *n).collect();
    assert_eq!(names, expected);
}

#[test]
fn test_catalog_ratios_are_precomputed() {
    let catalog = Catalog::builtin();
    let combo = catalog.get("primaryOnWhite").unwrap();
    assert_eq!(combo.foreground, Srgb::new(0, 54, 61));
    assert!((combo.ratio - 13.17).abs() < 0.01);

    // Rebuilding yields identical values
    assert_eq!(Catalog::builtin().get("primaryOnWhite"), Some(combo));
}

#[test]
fn test_bucket_completeness() {
    let catalog = Catalog::builtin();
    let report = generate_report(&catalog);
    assert_eq!(report.total(), catalog.len());
    assert_eq!(report.passing.len(), 8);
    assert_eq!(report.warnings.len(), 2);
    assert_eq!(report.failing.len(), 6);
    assert!(report.has_failures());
}

#[test]
fn test_lines_follow_catalog_order() {
    let report = generate_report(&Catalog::builtin());
    assert_eq!(
        report.warnings,
        vec![
            "⚠️ errorOnWhite: 3.76:1 (Only passes AA for large text)".to_string(),
            "⚠️ infoOnWhite: 3.68:1 (Only passes AA for large text)".to_string(),
        ]
    );
    assert_eq!(
        report.passing.first().map(String::as_str),
        Some("✅ primaryOnWhite: 13.17:1 (Passes AA for all text)")
    );
    assert_eq!(
        report.failing.first().map(String::as_str),
        Some("❌ secondaryOnWhite: 1.43:1 (Fails WCAG standards)")
    );
}

#[test]
fn test_white_on_accent_is_classified_from_computed_ratio() {
    let report = generate_report(&Catalog::builtin());
    let line = report
        .failing
        .iter()
        .chain(&report.warnings)
        .find(|l| l.contains("whiteOnAccent"))
        .expect("whiteOnAccent should not pass");
    assert!(line.contains("1.91:1"));
}

#[test]
fn test_empty_catalog_has_no_failures() {
    let catalog = Catalog::build(false, std::iter::empty());
    let report = generate_report(&catalog);
    assert!(catalog.is_empty());
    assert_eq!(report.total(), 0);
    assert!(!report.has_failures());
}

#[test]
fn test_extra_entries_replace_by_name() {
    let extra = vec![
        ColorCombination::from_hex("accentOnWhite", "#845317", "#FFFFFF"),
        ColorCombination::from_hex("goldOnTeal", "#ecb157", "#00363d"),
    ];
    let catalog = Catalog::build(true, extra);
    assert_eq!(catalog.len(), BUILTIN_COMBINATIONS.len() + 1);

    let names: Vec<&str> = catalog.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names[4], "accentOnWhite");
    assert_eq!(names.last(), Some(&"goldOnTeal"));

    let report = generate_report(&catalog);
    assert!(report.passing.iter().any(|l| l.contains("accentOnWhite")));
    assert_eq!(report.total(), catalog.len());
}

#[test]
fn test_malformed_hex_in_combination_is_black() {
    let combo = ColorCombination::from_hex("broken", "not-a-color", "#FFFFFF");
    assert_eq!(combo.foreground, Srgb::new(0, 0, 0));
    assert!((combo.ratio - 21.0).abs() < 1e-6);
}
