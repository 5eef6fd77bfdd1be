pub mod hint_bar;
pub mod mode_indicator;
pub mod slider;
