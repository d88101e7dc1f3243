pub mod choles_score;
pub mod rome_iv_rumination;
pub mod rome_iv_unspecified_fbd;
