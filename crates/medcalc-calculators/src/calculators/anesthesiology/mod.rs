pub mod el_ganzouri;
