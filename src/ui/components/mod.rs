//! Reusable UI components.

pub mod input_field;
pub mod tab_selector;

pub use input_field::{render_input_field, InputFieldConfig};
pub use tab_selector::{render_tab_selector, TabItem};
