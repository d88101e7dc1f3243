use medcalc_core::models::metadata::{Parameter, ParameterKind, ScoreMetadata};
use medcalc_core::models::result::CalculationResult;
use medcalc_core::models::specialty::Specialty;
use serde::Serialize;
use serde_json::json;

fn sample() -> ScoreMetadata {
    ScoreMetadata::new("rox_index", "ROX Index", Specialty::Emergency)
        .description("Predicts high-flow nasal cannula success.")
        .parameters(vec![
            Parameter::number("spo2", "Oxygen saturation", 50.0, 100.0).unit("%"),
            Parameter::integer("respiratory_rate", "Respiratory rate", 5, 60),
            Parameter::yes_no("on_hfnc", "On high-flow nasal cannula").optional(),
        ])
        .result("ROX index", "ratio")
}

#[test]
fn builder_defaults() {
    let metadata = ScoreMetadata::new("x", "X", Specialty::Cardiology);
    assert_eq!(metadata.version, "1.0");
    assert_eq!(metadata.result.name, "score");
    assert_eq!(metadata.result.unit, "points");
    assert!(metadata.parameters.is_empty());
}

#[test]
fn parameters_are_required_unless_marked_optional() {
    let metadata = sample();
    assert!(metadata.parameter("spo2").is_some_and(|p| p.required));
    assert!(metadata.parameter("on_hfnc").is_some_and(|p| !p.required));
    assert!(metadata.parameter("missing").is_none());
}

#[test]
fn yes_no_is_a_two_option_choice() {
    let metadata = sample();
    let kind = &metadata.parameter("on_hfnc").map(|p| p.kind.clone());
    assert_eq!(
        kind,
        &Some(ParameterKind::Choice {
            options: vec!["yes".to_string(), "no".to_string()]
        })
    );
}

#[test]
fn parameter_kind_serializes_with_type_tag() {
    let value = serde_json::to_value(ParameterKind::Integer { min: 0, max: 4 }).unwrap();
    assert_eq!(value, json!({"type": "integer", "min": 0, "max": 4}));
}

#[test]
fn matches_is_case_insensitive_over_id_title_and_category() {
    let metadata = sample();
    assert!(metadata.matches("ROX"));
    assert!(metadata.matches("nasal"));
    assert!(metadata.matches("EMERG"));
    assert!(metadata.matches("  "));
    assert!(!metadata.matches("dermatology"));
}

#[test]
fn summary_drops_parameters() {
    let summary = serde_json::to_value(sample().summary()).unwrap();
    assert_eq!(summary["id"], "rox_index");
    assert_eq!(summary["category"], "emergency");
    assert!(summary.get("parameters").is_none());
}

#[test]
fn specialty_parses_loosely() {
    assert_eq!(
        "Infectious Disease".parse::<Specialty>().unwrap(),
        Specialty::InfectiousDisease
    );
    assert_eq!(
        "infectious-disease".parse::<Specialty>().unwrap(),
        Specialty::InfectiousDisease
    );
    assert!("podiatry".parse::<Specialty>().is_err());
}

#[test]
fn specialty_all_is_sorted_by_name() {
    let names: Vec<&str> = Specialty::ALL.iter().map(|s| s.as_str()).collect();
    let mut sorted = names.clone();
    sorted.sort_unstable();
    assert_eq!(names, sorted);
}

#[derive(Serialize)]
struct Extra {
    risk_factors: Vec<&'static str>,
}

#[test]
fn result_details_are_flattened() {
    let result = CalculationResult::new(3, "points", "Moderate.", "Moderate", "Moderate risk")
        .with_details(Extra {
            risk_factors: vec!["age"],
        });
    let value = serde_json::to_value(result).unwrap();
    assert_eq!(
        value,
        json!({
            "result": 3,
            "unit": "points",
            "interpretation": "Moderate.",
            "stage": "Moderate",
            "stage_description": "Moderate risk",
            "risk_factors": ["age"],
        })
    );
}

#[test]
fn result_without_details_has_five_fields() {
    let value = serde_json::to_value(CalculationResult::new(
        "Positive",
        "diagnosis",
        "Criteria met.",
        "Criteria Met",
        "Meets criteria",
    ))
    .unwrap();
    assert_eq!(value.as_object().map(|o| o.len()), Some(5));
}

#[test]
fn parameter_kinds_are_integer_number_or_choice() {
    let choice: ParameterKind =
        serde_json::from_value(json!({"type": "choice", "options": ["yes", "no"]})).unwrap();
    assert_eq!(Parameter::yes_no("x", "x").kind, choice);

    assert!(serde_json::from_value::<ParameterKind>(json!({"type": "boolean"})).is_err());
}
