pub mod diabetes_distress_scale;
pub mod dka_mpm_score;
