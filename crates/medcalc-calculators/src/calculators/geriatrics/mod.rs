pub mod charlson;
