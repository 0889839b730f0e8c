pub mod header;
pub mod drop_zone;
pub mod spinner;
pub mod results_area;
pub mod action_buttons;
