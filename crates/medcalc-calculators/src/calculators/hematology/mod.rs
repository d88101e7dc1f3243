pub mod corrected_count_increment;
pub mod duval_cibmtr;
pub mod mabl;
pub mod malt_ipi;
pub mod maps_score;
pub mod rhig_dosage;
pub mod wpss;
