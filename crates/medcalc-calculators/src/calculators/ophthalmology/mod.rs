pub mod color_vision;
