pub mod easi;
