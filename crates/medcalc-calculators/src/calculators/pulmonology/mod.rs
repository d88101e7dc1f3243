pub mod decaf;
pub mod manchester_sclc;
