pub mod corrected_qt_interval;
pub mod h2fpef_score;
pub mod subtle_anterior_stemi;
