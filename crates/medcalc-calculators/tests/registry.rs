use std::collections::HashSet;

use medcalc_calculators::error::CalculatorError;
use medcalc_calculators::{all_calculators, calculate_score, catalog, get_calculator};
use medcalc_core::models::specialty::Specialty;
use serde_json::json;

#[test]
fn registers_44_calculators_with_unique_ids() {
    let ids: Vec<&str> = all_calculators().iter().map(|c| c.id()).collect();
    assert_eq!(ids.len(), 44);
    let unique: HashSet<&str> = ids.iter().copied().collect();
    assert_eq!(unique.len(), ids.len());
}

#[test]
fn ids_are_snake_case() {
    for calculator in all_calculators() {
        let id = calculator.id();
        assert!(
            id.chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'),
            "{id}"
        );
    }
}

#[test]
fn every_calculator_declares_parameters() {
    for calculator in all_calculators() {
        let metadata = calculator.score_metadata();
        assert!(!metadata.title.is_empty(), "{}", metadata.id);
        assert!(!metadata.parameters.is_empty(), "{}", metadata.id);
    }
}

#[test]
fn lookup_by_id() {
    assert!(get_calculator("rox_index").is_some());
    assert!(get_calculator("ROX_INDEX").is_none());
    assert!(get_calculator("not_a_score").is_none());
}

#[test]
fn unknown_calculator_is_not_a_validation_error() {
    let err = calculate_score("not_a_score", json!({})).unwrap_err();
    assert!(matches!(err, CalculatorError::UnknownCalculator(ref id) if id == "not_a_score"));
    assert!(!err.is_validation());
}

#[test]
fn missing_parameters_are_all_reported() {
    let err = calculate_score("rox_index", json!({"spo2": 95})).unwrap_err();
    let CalculatorError::Validation(errors) = &err else {
        panic!("expected validation error, got {err:?}");
    };
    let names: Vec<&str> = errors.iter().map(|e| e.parameter.as_str()).collect();
    assert_eq!(names, ["fio2", "respiratory_rate"]);
    assert_eq!(errors[0].message, "Missing required parameter: fio2");
    assert!(err.is_validation());
}

#[test]
fn out_of_range_values_are_rejected() {
    let err = calculate_score(
        "rox_index",
        json!({"spo2": 95, "fio2": 1.5, "respiratory_rate": 20}),
    )
    .unwrap_err();
    let CalculatorError::Validation(errors) = err else {
        panic!("expected validation error");
    };
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "fio2 must be between 0.21 and 1, got 1.5");
}

#[test]
fn unknown_choice_is_rejected() {
    let err = calculate_score(
        "corrected_qt_interval",
        json!({"qt_interval": 400, "heart_rate": 60, "formula": "mystery"}),
    )
    .unwrap_err();
    let CalculatorError::Validation(errors) = err else {
        panic!("expected validation error");
    };
    assert_eq!(errors[0].parameter, "formula");
    assert!(errors[0].message.starts_with("formula must be one of: "));
    assert!(errors[0].message.ends_with("got 'mystery'"));
}

#[test]
fn wrong_type_is_rejected() {
    let err = calculate_score(
        "rox_index",
        json!({"spo2": "high", "fio2": 0.4, "respiratory_rate": 20}),
    )
    .unwrap_err();
    assert!(err.is_validation());
}

#[test]
fn non_object_body_is_rejected() {
    let err = calculate_score("rox_index", json!([1, 2, 3])).unwrap_err();
    assert!(err.is_validation());
}

#[test]
fn undeclared_fields_are_ignored() {
    let value = calculate_score(
        "rox_index",
        json!({"spo2": 95, "fio2": 0.4, "respiratory_rate": 20, "note": "extra"}),
    )
    .unwrap();
    assert_eq!(value["unit"], "index");
}

#[test]
fn search_matches_title_and_category() {
    let hits: Vec<&str> = catalog::search("rox").iter().map(|m| m.id.as_str()).collect();
    assert!(hits.contains(&"rox_index"));

    let oncology = catalog::search("ONCOLOGY");
    assert!(oncology.iter().any(|m| m.id == "ctcae"));

    assert_eq!(catalog::search("").len(), 44);
    assert!(catalog::search("zzzz").is_empty());
}

#[test]
fn by_category_filters() {
    let pediatrics: Vec<&str> = catalog::by_category(Specialty::Pediatrics)
        .iter()
        .map(|m| m.id.as_str())
        .collect();
    assert_eq!(pediatrics, ["capd", "cheops_pain_scale", "dhaka_score"]);
}

#[test]
fn categories_are_distinct_and_sorted() {
    let categories = catalog::categories();
    let names: Vec<&str> = categories.iter().map(|c| c.as_str()).collect();
    let mut sorted = names.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(names, sorted);
    assert!(categories.contains(&Specialty::Emergency));
}
