mod banner;
mod empty_message;
mod help;
mod status;

pub use help::KEY_HELP;

/// Small reusable widgets, one constructor per file.
pub struct UiComponent;
