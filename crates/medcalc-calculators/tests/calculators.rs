use medcalc_calculators::calculate_score;
use medcalc_calculators::calculators::oncology::damico::{ClinicalStage, RiskGroup, risk_group};
use medcalc_calculators::calculators::ophthalmology::color_vision::EyeStatus;
use medcalc_calculators::error::CalculatorError;
use serde_json::{Value, json};

fn calc(id: &str, params: Value) -> Value {
    match calculate_score(id, params) {
        Ok(value) => value,
        Err(err) => panic!("{id} failed: {err}"),
    }
}

#[test]
fn rox_index_bands() {
    let high = calc(
        "rox_index",
        json!({"spo2": 88, "fio2": 1.0, "respiratory_rate": 30}),
    );
    assert_eq!(high["result"].as_f64(), Some(2.93));
    assert_eq!(high["stage"], "High Risk for HFNC Failure");

    let low = calc(
        "rox_index",
        json!({"spo2": 95, "fio2": 0.4, "respiratory_rate": 20}),
    );
    assert_eq!(low["stage"], "Lower Risk for Intubation");
    assert_eq!(low["unit"], "index");
}

#[test]
fn qtc_bazett_at_sixty_bpm_equals_measured_qt() {
    let value = calc(
        "corrected_qt_interval",
        json!({"qt_interval": 400, "heart_rate": 60, "formula": "bazett"}),
    );
    assert_eq!(value["result"].as_f64(), Some(400.0));
    assert_eq!(value["unit"], "ms");
    assert_eq!(value["stage"], "Normal");
}

#[test]
fn rule_of_7s_counts_findings() {
    let low = calc(
        "rule_of_7s_lyme_meningitis",
        json!({"headache_days": 3, "csf_mononuclear_percentage": 50.0, "cranial_nerve_palsy": "absent"}),
    );
    assert_eq!(low["result"], 0);
    assert_eq!(low["stage"], "Low Risk for Lyme Meningitis");

    let high = calc(
        "rule_of_7s_lyme_meningitis",
        json!({"headache_days": 10, "csf_mononuclear_percentage": 80.0, "cranial_nerve_palsy": "present"}),
    );
    assert_eq!(high["result"], 3);
    assert_eq!(high["stage"], "Not Low Risk for Lyme Meningitis");
}

#[test]
fn cheops_range_is_four_to_thirteen() {
    let calm = calc(
        "cheops_pain_scale",
        json!({
            "cry": "no_crying",
            "facial": "smiling",
            "verbal": "positive",
            "torso": "neutral",
            "touch": "not_touching",
            "legs": "neutral",
        }),
    );
    assert_eq!(calm["result"], 4);
    assert_eq!(calm["stage"], "No Pain");

    let distressed = calc(
        "cheops_pain_scale",
        json!({
            "cry": "screaming",
            "facial": "grimace",
            "verbal": "pain_complaints",
            "torso": "shifting_tense",
            "touch": "reaching_touching",
            "legs": "squirming_tensed",
        }),
    );
    assert_eq!(distressed["result"], 13);
    assert_eq!(distressed["stage"], "Severe Pain");
}

#[test]
fn dhaka_extremes() {
    let well = calc(
        "dhaka_score",
        json!({"general_appearance": "normal", "respirations": "normal", "skin_pinch": "normal", "tears": "normal"}),
    );
    assert_eq!(well["result"], 0);
    assert_eq!(well["stage"], "No Dehydration");

    let severe = calc(
        "dhaka_score",
        json!({
            "general_appearance": "lethargic_unconscious",
            "respirations": "deep",
            "skin_pinch": "very_slow",
            "tears": "absent",
        }),
    );
    assert_eq!(severe["result"], 12);
    assert_eq!(severe["stage"], "Severe Dehydration");
}

#[test]
fn decaf_bands() {
    let none = calc(
        "decaf_score",
        json!({
            "emrcd_dyspnea": "not_too_dyspneic",
            "eosinopenia": "no",
            "consolidation": "no",
            "acidemia": "no",
            "atrial_fibrillation": "no",
        }),
    );
    assert_eq!(none["result"], 0);
    assert_eq!(none["stage"], "Low Risk");

    let high = calc(
        "decaf_score",
        json!({
            "emrcd_dyspnea": "too_dyspneic_dependent",
            "eosinopenia": "yes",
            "consolidation": "yes",
            "acidemia": "no",
            "atrial_fibrillation": "no",
        }),
    );
    assert_eq!(high["result"], 4);
    assert_eq!(high["stage"], "High Risk");
}

#[test]
fn ctcae_grades_neutropenia() {
    let value = calc(
        "ctcae",
        json!({"adverse_event_type": "neutropenia", "patient_sex": "male", "neutrophil_count": 400.0}),
    );
    assert_eq!(value["result"], 3);
    assert_eq!(value["stage"], "Grade 3");
    assert_eq!(value["unit"], "grade");
}

#[test]
fn ctcae_anemia_uses_sex_specific_lower_limit() {
    let female = calc(
        "ctcae",
        json!({"adverse_event_type": "anemia", "patient_sex": "female", "hemoglobin": 13.0}),
    );
    assert_eq!(female["result"], 0);

    let male = calc(
        "ctcae",
        json!({"adverse_event_type": "anemia", "patient_sex": "male", "hemoglobin": 13.0}),
    );
    assert_eq!(male["result"], 1);
}

#[test]
fn ctcae_requires_lab_for_selected_event() {
    let err = calculate_score(
        "ctcae",
        json!({"adverse_event_type": "anemia", "patient_sex": "female"}),
    )
    .unwrap_err();
    assert!(matches!(err, CalculatorError::InvalidInput(_)));
    assert!(err.is_validation());
}

#[test]
fn damico_takes_worst_criterion() {
    assert_eq!(risk_group(8.5, 6, ClinicalStage::T1c), RiskGroup::Low);
    assert_eq!(risk_group(15.0, 6, ClinicalStage::T1c), RiskGroup::Intermediate);
    assert_eq!(risk_group(8.5, 8, ClinicalStage::T1c), RiskGroup::High);
    assert_eq!(risk_group(4.0, 6, ClinicalStage::T2c), RiskGroup::High);

    let value = calc(
        "damico_risk_classification",
        json!({"psa_level": 8.5, "gleason_score": 6, "clinical_stage": "T1c"}),
    );
    assert_eq!(value["result"], "low");
    assert_eq!(value["stage"], "Low Risk");
}

#[test]
fn manchester_counts_adverse_factors() {
    let good = calc(
        "manchester_score_prognosis_sclc",
        json!({
            "serum_ldh": "normal",
            "serum_sodium": 140.0,
            "serum_alkaline_phosphatase": "1.1_to_1.5_times_normal",
            "serum_bicarbonate": 26.0,
            "disease_stage": "limited",
            "karnofsky_performance_status": 90,
        }),
    );
    assert_eq!(good["result"], 0);
    assert_eq!(good["stage"], "Good Prognosis");

    let poor = calc(
        "manchester_score_prognosis_sclc",
        json!({
            "serum_ldh": "elevated",
            "serum_sodium": 130.0,
            "serum_alkaline_phosphatase": "greater_than_1.5_times_normal",
            "serum_bicarbonate": 20.0,
            "disease_stage": "extensive",
            "karnofsky_performance_status": 40,
        }),
    );
    assert_eq!(poor["result"], 6);
    assert_eq!(poor["stage"], "Poor Prognosis");
    assert_eq!(poor["factor_scores"]["kps_score"], 1);
}

#[test]
fn cas_threshold_is_nine() {
    let below = calc(
        "cas",
        json!({"dizzy_news": 2, "sleep_problems": 2, "paralyzed_frozen": 2, "appetite_loss": 2, "nausea_stomach": 0}),
    );
    assert_eq!(below["result"], 8);
    assert_eq!(below["stage"], "No Dysfunctional Anxiety");

    let at = calc(
        "cas",
        json!({"dizzy_news": 2, "sleep_problems": 2, "paralyzed_frozen": 2, "appetite_loss": 2, "nausea_stomach": 1}),
    );
    assert_eq!(at["result"], 9);
    assert_eq!(at["stage"], "Dysfunctional Anxiety");
    assert_eq!(at["severity_level"], "mild");
}

#[test]
fn capd_returns_structured_assessment() {
    let domains = [
        "eye_contact",
        "purposeful_actions",
        "aware_surroundings",
        "communicates_needs",
        "restless",
        "inconsolable",
        "underactive",
        "slow_response",
    ];
    let mut params = serde_json::Map::new();
    for domain in domains {
        params.insert(domain.to_string(), json!(2));
    }
    params.insert("patient_age".to_string(), json!(4));

    let value = calc("capd", Value::Object(params));
    assert_eq!(value["stage"], "CAPD Positive");
    assert_eq!(value["result"]["total_score"], 16);
    assert_eq!(value["result"]["severity"], "moderate");
    assert_eq!(value["result"]["age_group"]["group"], "Preschool");
}

#[test]
fn color_vision_status_from_plates() {
    assert_eq!(EyeStatus::from_correct_plates(14), EyeStatus::Normal);
    assert_eq!(EyeStatus::from_correct_plates(12), EyeStatus::Normal);
    assert_eq!(EyeStatus::from_correct_plates(9), EyeStatus::PossibleDeficiency);
    assert_eq!(EyeStatus::from_correct_plates(5), EyeStatus::LikelyDeficiency);

    let value = calc(
        "color_vision_screening",
        json!({
            "correct_plates_right_eye": 5,
            "correct_plates_left_eye": 14,
            "visual_acuity_adequate": "yes",
            "patient_age": 30,
        }),
    );
    assert_eq!(value["stage"], "Color Vision Deficiency");
    assert_eq!(value["result"]["right_eye"]["status"], "Likely Deficiency");
    assert_eq!(value["result"]["left_eye"]["status"], "Normal");
}

#[test]
fn color_vision_in_young_children_is_less_reliable() {
    let value = calc(
        "color_vision_screening",
        json!({
            "correct_plates_right_eye": 14,
            "correct_plates_left_eye": 14,
            "visual_acuity_adequate": "yes",
            "patient_age": 4,
        }),
    );
    assert_eq!(value["result"]["test_limitations"]["test_reliability"], "Reduced");
}

#[test]
fn rose_rule_any_positive_criterion_is_high_risk() {
    let fields = [
        "bnp_level",
        "bradycardia",
        "fecal_occult_blood",
        "anemia",
        "chest_pain",
        "q_wave_ecg",
        "oxygen_saturation",
    ];
    let mut params: serde_json::Map<String, Value> =
        fields.iter().map(|f| (f.to_string(), json!("no"))).collect();
    assert_eq!(calc("rose_rule", Value::Object(params.clone()))["stage"], "Low Risk");

    params.insert("bradycardia".to_string(), json!("yes"));
    assert_eq!(calc("rose_rule", Value::Object(params))["stage"], "High Risk");
}

fn charlson_params(age: i32, yes: &[&str]) -> Value {
    let fields = [
        "myocardial_infarction",
        "congestive_heart_failure",
        "peripheral_vascular_disease",
        "cerebrovascular_disease",
        "dementia",
        "chronic_pulmonary_disease",
        "connective_tissue_disease",
        "peptic_ulcer_disease",
        "hemiplegia",
        "moderate_severe_ckd",
        "localized_solid_tumor",
        "leukemia",
        "lymphoma",
        "metastatic_solid_tumor",
        "aids",
    ];
    let mut params: serde_json::Map<String, Value> = fields
        .iter()
        .map(|f| {
            let answer = if yes.contains(f) { "yes" } else { "no" };
            (f.to_string(), json!(answer))
        })
        .collect();
    params.insert("age".to_string(), json!(age));
    params.insert("liver_disease".to_string(), json!("none"));
    params.insert("diabetes".to_string(), json!("none"));
    Value::Object(params)
}

#[test]
fn charlson_age_only_is_minimal_comorbidity() {
    let value = calc("charlson_comorbidity_index", charlson_params(70, &[]));
    assert_eq!(value["result"]["total_score"], 3);
    assert_eq!(value["result"]["age_points"], 3);
    assert_eq!(value["result"]["ten_year_survival_probability"].as_f64(), Some(95.48));
    assert_eq!(value["result"]["risk_category"], "Low Risk");
    assert_eq!(value["stage"], "Minimal Comorbidity");
}

#[test]
fn charlson_survival_crosses_ninety_percent_between_six_and_seven() {
    let six = calc(
        "charlson_comorbidity_index",
        charlson_params(40, &["metastatic_solid_tumor"]),
    );
    assert_eq!(six["result"]["total_score"], 6);
    assert_eq!(six["result"]["ten_year_survival_probability"].as_f64(), Some(91.16));
    assert_eq!(six["stage"], "Minimal Comorbidity");

    let seven = calc(
        "charlson_comorbidity_index",
        charlson_params(40, &["metastatic_solid_tumor", "myocardial_infarction"]),
    );
    assert_eq!(seven["result"]["total_score"], 7);
    assert_eq!(seven["result"]["ten_year_survival_probability"].as_f64(), Some(89.76));
    assert_eq!(seven["stage"], "Moderate Comorbidity");
}

fn rhig(fetal_cell_percentage: f64) -> Value {
    calc(
        "maternal_fetal_hemorrhage_rhd_immune_globulin_dosage",
        json!({"maternal_blood_volume": 5000, "fetal_cell_percentage": fetal_cell_percentage}),
    )
}

#[test]
fn rhig_exact_vial_multiple_gets_one_extra_vial() {
    let value = rhig(0.6);
    let outcome = &value["result"];
    assert_eq!(outcome["fetal_blood_volume_ml"].as_f64(), Some(30.0));
    assert_eq!(outcome["calculated_vials_raw"].as_f64(), Some(1.0));
    assert_eq!(outcome["total_vials"], 2);
    assert_eq!(outcome["safety_margin_applied"], 1);
    assert_eq!(outcome["protection_per_vial_ml"], 30);
    assert_eq!(outcome["total_dose_mcg"], 600);
    assert_eq!(outcome["clinical_assessment"]["total_protection_ml"], 60);
    assert_eq!(outcome["clinical_assessment"]["alloimmunization_risk"], "Significant");
    assert_eq!(value["unit"], "vials");
    assert_eq!(value["stage"], "Moderate Hemorrhage");
}

#[test]
fn rhig_fractional_vials_round_by_half() {
    let small = rhig(0.1);
    assert_eq!(small["result"]["total_vials"], 1);
    assert_eq!(small["stage"], "Standard Dose");

    // 45 mL is 1.5 vials: round up, then add one.
    let half = rhig(0.9);
    assert_eq!(half["result"]["total_vials"], 3);
    assert_eq!(half["result"]["clinical_assessment"]["follow_up_needed"], false);
    assert_eq!(half["stage"], "Moderate Hemorrhage");
}

/// Adult EASI inputs with every region clear except those listed as
/// `(region, area, [erythema, edema, excoriation, lichenification])`.
fn easi_params(regions: &[(&str, u8, [u8; 4])]) -> Value {
    let mut params = serde_json::Map::new();
    params.insert("age_category".to_string(), json!("adult_8_plus"));
    for region in ["head_neck", "upper_extremities", "trunk", "lower_extremities"] {
        let (area, signs) = regions
            .iter()
            .find(|(name, _, _)| *name == region)
            .map(|(_, area, signs)| (*area, *signs))
            .unwrap_or((0, [0; 4]));
        params.insert(format!("{region}_area"), json!(area));
        for (sign, severity) in ["erythema", "edema", "excoriation", "lichenification"]
            .iter()
            .zip(signs)
        {
            params.insert(format!("{region}_{sign}"), json!(severity));
        }
    }
    Value::Object(params)
}

#[test]
fn easi_band_edges_are_inclusive() {
    let clear = calc("eczema_area_severity_index", easi_params(&[]));
    assert_eq!(clear["result"].as_f64(), Some(0.0));
    assert_eq!(clear["stage"], "Clear");

    let one = calc(
        "eczema_area_severity_index",
        easi_params(&[("head_neck", 2, [2, 3, 0, 0])]),
    );
    assert_eq!(one["result"].as_f64(), Some(1.0));
    assert_eq!(one["stage"], "Almost Clear");

    let seven = calc(
        "eczema_area_severity_index",
        easi_params(&[("upper_extremities", 5, [3, 3, 1, 0])]),
    );
    assert_eq!(seven["result"].as_f64(), Some(7.0));
    assert_eq!(seven["stage"], "Mild");

    let above_seven = calc(
        "eczema_area_severity_index",
        easi_params(&[("upper_extremities", 5, [3, 3, 1, 0]), ("head_neck", 1, [1, 0, 0, 0])]),
    );
    assert_eq!(above_seven["result"].as_f64(), Some(7.1));
    assert_eq!(above_seven["stage"], "Moderate");

    let twenty_one = calc(
        "eczema_area_severity_index",
        easi_params(&[("lower_extremities", 5, [3, 3, 3, 1]), ("head_neck", 1, [3, 3, 3, 1])]),
    );
    assert_eq!(twenty_one["result"].as_f64(), Some(21.0));
    assert_eq!(twenty_one["stage"], "Moderate");
}

#[test]
fn easi_child_head_multiplier_is_doubled() {
    let mut params = easi_params(&[("head_neck", 2, [2, 3, 0, 0])]);
    params["age_category"] = json!("child_0_7");
    let value = calc("eczema_area_severity_index", params);
    assert_eq!(value["result"].as_f64(), Some(2.0));
    assert_eq!(value["stage"], "Mild");
}

fn chip_params(yes: &[&str]) -> Value {
    let fields = [
        "pedestrian_cyclist_vehicle",
        "ejected_from_vehicle",
        "vomiting",
        "amnesia_4_hours_or_more",
        "clinical_skull_fracture",
        "gcs_less_than_15",
        "gcs_deterioration_2_points",
        "anticoagulant_use",
        "post_traumatic_seizure",
        "age_60_or_older",
        "fall_from_elevation",
        "anterograde_amnesia",
        "amnesia_2_to_4_hours",
        "skull_contusion",
        "neurologic_deficit",
        "loss_of_consciousness",
        "gcs_deterioration_1_point",
        "age_40_to_60",
    ];
    Value::Object(
        fields
            .iter()
            .map(|f| {
                let answer = if yes.contains(f) { "yes" } else { "no" };
                (f.to_string(), json!(answer))
            })
            .collect(),
    )
}

#[test]
fn chip_minor_criteria_threshold() {
    let none = calc("chip_prediction_rule", chip_params(&[]));
    assert_eq!(none["stage"], "CT Not Indicated");
    assert_eq!(none["result"]["risk_level"], "Low Risk");

    let one_minor = calc("chip_prediction_rule", chip_params(&["skull_contusion"]));
    assert_eq!(one_minor["stage"], "Clinical Judgment");
    assert_eq!(one_minor["result"]["minor_criteria_count"], 1);

    let two_minor = calc(
        "chip_prediction_rule",
        chip_params(&["skull_contusion", "age_40_to_60"]),
    );
    assert_eq!(two_minor["stage"], "CT Recommended");
    assert_eq!(two_minor["result"]["risk_level"], "Moderate to High Risk");
    assert_eq!(
        two_minor["result"]["minor_criteria_present"],
        json!(["Skull contusion present", "Age 40-60 years"])
    );
}

#[test]
fn chip_single_major_criterion_recommends_ct() {
    let value = calc("chip_prediction_rule", chip_params(&["anticoagulant_use"]));
    assert_eq!(value["stage"], "CT Recommended");
    assert_eq!(value["result"]["risk_level"], "High Risk");
    assert_eq!(value["result"]["major_criteria_count"], 1);
    assert_eq!(value["result"]["minor_criteria_count"], 0);
}

#[test]
fn hacor_high_risk_starts_above_five() {
    let five = calc(
        "hacor_score",
        json!({
            "heart_rate": 100,
            "ph": 7.40,
            "gcs": 15,
            "pao2_fio2_ratio": 110,
            "respiratory_rate": 25,
        }),
    );
    assert_eq!(five["result"], 5);
    assert_eq!(five["component_scores"]["oxygenation_points"], 5);
    assert_eq!(five["stage"], "Low Risk");

    let six = calc(
        "hacor_score",
        json!({
            "heart_rate": 100,
            "ph": 7.40,
            "gcs": 15,
            "pao2_fio2_ratio": 110,
            "respiratory_rate": 32,
        }),
    );
    assert_eq!(six["result"], 6);
    assert_eq!(six["component_scores"]["respiratory_rate_points"], 1);
    assert_eq!(six["stage"], "High Risk");
}

#[test]
fn gupta_pneumonia_fixed_inputs() {
    let low = calc(
        "gupta_postoperative_pneumonia_risk",
        json!({
            "age": 50,
            "copd": "no",
            "functional_status": "independent",
            "asa_class": "1",
            "sepsis_status": "none",
            "smoking": "no",
            "procedure_type": "breast",
        }),
    );
    assert_eq!(low["result"].as_f64(), Some(0.01));
    assert_eq!(low["stage"], "Very Low Risk");
    assert_eq!(low["unit"], "percentage");

    let high = calc(
        "gupta_postoperative_pneumonia_risk",
        json!({
            "age": 80,
            "copd": "yes",
            "functional_status": "totally_dependent",
            "asa_class": "4",
            "sepsis_status": "septic_shock",
            "smoking": "yes",
            "procedure_type": "aortic",
        }),
    );
    let risk = high["result"].as_f64().unwrap();
    assert!((risk - 50.73).abs() < 0.02, "risk was {risk}");
    assert_eq!(high["stage"], "Very High Risk");
}

#[test]
fn local_anesthetic_maximum_dose() {
    let lidocaine = calc(
        "local_anesthetic_dosing_calculator",
        json!({"drug_type": "lidocaine", "patient_weight": 70, "concentration_percentage": 1.0}),
    );
    assert_eq!(lidocaine["result"]["max_dose_mg"].as_f64(), Some(315.0));
    assert_eq!(lidocaine["result"]["max_volume_ml"].as_f64(), Some(31.5));
    assert_eq!(lidocaine["result"]["concentration_mg_ml"].as_f64(), Some(10.0));

    let bupivacaine = calc(
        "local_anesthetic_dosing_calculator",
        json!({"drug_type": "bupivacaine", "patient_weight": 70, "concentration_percentage": 0.25}),
    );
    assert_eq!(bupivacaine["result"]["max_dose_mg"].as_f64(), Some(140.0));
    assert_eq!(bupivacaine["result"]["max_volume_ml"].as_f64(), Some(56.0));
}

fn mabl(weight: f64, initial: f64, final_hb: f64) -> Result<Value, CalculatorError> {
    calculate_score(
        "maximum_allowable_blood_loss_without_transfusion",
        json!({
            "age_group": "infant",
            "body_weight": weight,
            "initial_hemoglobin": initial,
            "final_hemoglobin": final_hb,
        }),
    )
}

#[test]
fn mabl_low_volume_band_ends_at_500_ml() {
    let at_limit = mabl(31.25, 11.0, 9.0).unwrap();
    let outcome = &at_limit["result"];
    assert_eq!(outcome["estimated_blood_volume_ml"].as_f64(), Some(2500.0));
    assert_eq!(outcome["maximum_allowable_blood_loss_ml"].as_f64(), Some(500.0));
    assert_eq!(outcome["percentage_of_blood_volume"].as_f64(), Some(20.0));
    assert_eq!(outcome["accuracy_reliable"], true);
    assert_eq!(at_limit["stage"], "Low Volume Loss");

    let above = mabl(31.5, 11.0, 9.0).unwrap();
    assert_eq!(above["result"]["maximum_allowable_blood_loss_ml"].as_f64(), Some(504.0));
    assert_eq!(above["stage"], "Moderate Volume Loss");
}

#[test]
fn mabl_rejects_final_hemoglobin_not_below_initial() {
    for final_hb in [10.0, 12.0] {
        let err = mabl(20.0, 10.0, final_hb).unwrap_err();
        assert!(matches!(err, CalculatorError::InvalidInput(_)), "{err:?}");
    }
}

fn cci(time: &str) -> Value {
    calc(
        "corrected_count_increment",
        json!({
            "pre_transfusion_count": 10000,
            "post_transfusion_count": 20000,
            "time_after_transfusion": time,
            "patient_height": 70,
            "patient_weight": 150,
            "platelet_unit_content": 3.0,
        }),
    )
}

#[test]
fn cci_threshold_depends_on_time_point() {
    let one_hour = cci("1_hour");
    let value = one_hour["result"].as_f64().unwrap();
    assert!((value - 6110.4).abs() < 0.5, "cci was {value}");
    assert_eq!(one_hour["calculation_details"]["count_increment"], 10000);
    assert_eq!(one_hour["calculation_details"]["body_surface_area"].as_f64(), Some(1.83));
    assert_eq!(one_hour["calculation_details"]["threshold"], 7500);
    assert_eq!(one_hour["stage"], "Poor Response");

    let twenty_hour = cci("20_hour");
    assert_eq!(twenty_hour["calculation_details"]["threshold"], 4800);
    assert_eq!(twenty_hour["calculation_details"]["response_adequate"], true);
    assert_eq!(twenty_hour["stage"], "Successful Transfusion");
}

fn h2fpef(age: i32, bmi: f64, ee: f64, pasp: i32, af: &str) -> Value {
    calc(
        "h2fpef_score",
        json!({
            "age": age,
            "bmi": bmi,
            "e_e_prime_ratio": ee,
            "pasp": pasp,
            "atrial_fibrillation": af,
        }),
    )
}

#[test]
fn h2fpef_probability_bands() {
    let low = h2fpef(40, 22.0, 8.0, 25, "no");
    assert_eq!(low["result"].as_f64(), Some(7.4));
    assert_eq!(low["stage"], "Low Probability");

    let intermediate = h2fpef(60, 30.0, 10.0, 35, "no");
    assert_eq!(intermediate["stage"], "Intermediate Probability");

    let with_af = h2fpef(60, 30.0, 10.0, 35, "yes");
    assert!(with_af["result"].as_f64() > intermediate["result"].as_f64());
    assert_eq!(with_af["stage"], "High Probability");
}

fn vacs(hepatitis_c: &str) -> Value {
    calc(
        "vacs_2_0_index",
        json!({
            "age": 40,
            "sex": "male",
            "race": "non_black",
            "cd4_count": 900,
            "hiv_rna_log": 0.0,
            "hemoglobin": 15.0,
            "platelets": 250,
            "ast": 20,
            "alt": 25,
            "creatinine": 0.9,
            "albumin": 4.5,
            "wbc_count": 6.0,
            "bmi": 25.0,
            "hepatitis_c": hepatitis_c,
        }),
    )
}

#[test]
fn vacs_components_and_hepatitis_c_points() {
    let without = vacs("no");
    assert_eq!(without["composite_biomarkers"]["fib4"].as_f64(), Some(0.64));
    assert_eq!(without["component_scores"]["age_score"].as_f64(), Some(38.0));
    assert_eq!(without["component_scores"]["cd4_score"].as_f64(), Some(0.0));
    assert_eq!(without["component_scores"]["hemoglobin_score"].as_f64(), Some(0.0));
    assert_eq!(without["stage"], "Very High Risk");

    let with = vacs("yes");
    assert_eq!(with["component_scores"]["hcv_score"].as_f64(), Some(6.0));
    let delta = with["result"].as_f64().unwrap() - without["result"].as_f64().unwrap();
    assert!((delta - 6.0).abs() < 1e-9, "delta was {delta}");
}

fn wpss(who: &str, karyotype: &str, transfusion: &str) -> Value {
    calc(
        "wpss_mds",
        json!({
            "who_category": who,
            "karyotype": karyotype,
            "transfusion_requirement": transfusion,
        }),
    )
}

#[test]
fn wpss_intermediate_to_high_boundary() {
    let two = wpss("rcmd_rcmd_rs", "intermediate", "none");
    assert_eq!(two["result"], 2);
    assert_eq!(two["stage"], "Intermediate Risk");
    assert_eq!(two["median_survival_months"], 48);

    let three = wpss("rcmd_rcmd_rs", "intermediate", "regular");
    assert_eq!(three["result"], 3);
    assert_eq!(three["stage"], "High Risk");
    assert_eq!(three["median_survival_months"], 26);
    let recommendations = three["recommendations"].as_array().unwrap();
    assert!(recommendations.contains(&json!(
        "Iron overload assessment and chelation therapy consideration"
    )));

    let six = wpss("raeb_2", "poor", "regular");
    assert_eq!(six["result"], 6);
    assert_eq!(six["stage"], "Very High Risk");
}

fn maps(age: i32, platelets: f64, alp: &str) -> Value {
    calc(
        "mayo_alliance_prognostic_system_maps_score",
        json!({
            "sm_type": "advanced_sm",
            "patient_age": age,
            "platelet_count": platelets,
            "serum_alp": alp,
            "adverse_mutations": "absent",
        }),
    )
}

#[test]
fn maps_thresholds_are_strict() {
    let two = maps(60, 150.0, "normal");
    assert_eq!(two["result"], 2);
    assert_eq!(two["component_scores"]["age"], 0);
    assert_eq!(two["component_scores"]["platelets"], 0);
    assert_eq!(two["stage"], "Low Risk");

    let three = maps(61, 150.0, "normal");
    assert_eq!(three["result"], 3);
    assert_eq!(three["stage"], "Intermediate Risk");

    let five = maps(61, 149.0, "elevated");
    assert_eq!(five["result"], 5);
    assert_eq!(five["stage"], "High Risk");
}
