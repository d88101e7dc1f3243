pub mod cas;
pub mod comm;
