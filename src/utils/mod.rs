pub mod account_validation;
pub mod layout;
pub mod list_navigation;
pub mod path;
pub mod style;
pub mod text_input;

pub use account_validation::{validate_account_email, validate_account_name};
pub use layout::{center_fixed_height, create_standard_layout};
pub use list_navigation::ListStateExt;
pub use path::{get_config_dir, get_config_path, get_home_dir, get_log_dir};
pub use style::{
    error_text_style, focused_border_style, input_placeholder_style, input_text_style,
    list_highlight_style, muted_text_style, unfocused_border_style,
};
pub use text_input::TextInput;
