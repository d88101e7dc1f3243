pub mod blast_lung_injury;
pub mod chip_prediction_rule;
pub mod danger_assessment;
pub mod gupta;
pub mod gupta_pneumonia;
pub mod gupta_respiratory_failure;
pub mod hacor_score;
pub mod local_anesthetic_dosing;
pub mod mangled_extremity;
pub mod rose_rule;
pub mod rox_index;
pub mod rule_of_7s;
pub mod rule_of_nines;
