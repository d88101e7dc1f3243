pub mod capd;
pub mod cheops;
pub mod dhaka;
