pub mod app;
pub mod args;
pub mod colors;
pub mod display;
pub mod json_output;
pub mod logging;
pub mod prompt;

// Re-export commonly used items
pub use app::SixDegreesApp;
pub use args::{Args, Command, SearchArgs};
pub use display::{DisplayOptions, format_number};
