pub mod crs_grading;
pub mod ctcae;
pub mod damico;
