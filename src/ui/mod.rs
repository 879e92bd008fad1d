pub mod formatting;

pub use formatting::{format_menu, format_selection};
