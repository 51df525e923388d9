pub mod panels;
pub mod plot;
pub mod views;
pub mod widgets;
