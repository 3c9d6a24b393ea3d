// Reusable UI widgets

pub mod text_input;

pub use text_input::{TextInputWidget, TextInputWidgetExt};
