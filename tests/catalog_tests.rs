use std::fs;

use epicycles::{Catalog, CatalogError, Category};

#[test]
fn builtin_concepts_cover_all_categories() {
    let catalog = Catalog::builtin();
    assert!(!catalog.by_category(&Category::FourierSeries).is_empty());
    assert!(!catalog.by_category(&Category::ParametricCurves).is_empty());
    assert!(!catalog.by_category(&Category::TaylorSeries).is_empty());
}

#[test]
fn display_entries_round_trip() {
    // parse_selection(entry) must return a concept that re-formats to the
    // exact same entry, for every entry.
    let catalog = Catalog::builtin();
    let entries = catalog.display_entries();
    assert_eq!(entries.len(), catalog.len());
    for entry in &entries {
        let concept = catalog
            .parse_selection(entry)
            .unwrap_or_else(|| panic!("unresolvable entry {:?}", entry));
        assert_eq!(&concept.display_entry(), entry);
    }
}

#[test]
fn entries_are_sorted_and_display_spaced() {
    let catalog = Catalog::builtin();
    let entries = catalog.display_entries();
    let mut sorted = entries.clone();
    sorted.sort();
    assert_eq!(entries, sorted);
    assert!(entries.iter().any(|e| e.starts_with("Fourier Series - ")));
    assert!(entries.iter().any(|e| e.starts_with("Parametric Curves - ")));
    assert!(entries.iter().all(|e| !e.starts_with("FourierSeries")));
}

#[test]
fn selection_without_separator_is_rejected() {
    let catalog = Catalog::builtin();
    assert!(catalog.parse_selection("Square Wave").is_none());
    assert!(catalog.parse_selection("").is_none());
}

#[test]
fn lookup_takes_first_duplicate() {
    let catalog = Catalog::from_json_str(
        r#"{
            "FourierSeries": [{"name": "Twin", "equation": "first"}],
            "TaylorSeries": [{"name": "Twin", "equation": "second"}]
        }"#,
    )
    .unwrap();
    assert_eq!(catalog.lookup("Twin").unwrap().equation, "first");
}

#[test]
fn missing_file_reports_not_found() {
    let err = Catalog::from_path("/no/such/catalog.json").unwrap_err();
    assert!(matches!(err, CatalogError::NotFound(_)), "got {:?}", err);
}

#[test]
fn corrupt_file_reports_parse_error() {
    let path = std::env::temp_dir().join("epicycles_corrupt_catalog.json");
    fs::write(&path, "{ not json").unwrap();
    let err = Catalog::from_path(&path).unwrap_err();
    assert!(matches!(err, CatalogError::Parse(_)), "got {:?}", err);
    fs::remove_file(&path).ok();
}

#[test]
fn load_or_builtin_degrades_instead_of_failing() {
    let catalog = Catalog::load_or_builtin("/no/such/catalog.json");
    assert_eq!(catalog.len(), Catalog::builtin().len());
}

#[test]
fn wrong_shape_is_a_parse_error() {
    let err = Catalog::from_json_str(r#"["not", "a", "map"]"#).unwrap_err();
    assert!(matches!(err, CatalogError::Parse(_)));
}
