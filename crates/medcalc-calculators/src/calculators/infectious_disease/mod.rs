pub mod denver_hiv;
pub mod vacs_2_0;
