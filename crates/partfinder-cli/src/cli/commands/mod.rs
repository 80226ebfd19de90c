//! CLI command handlers. Each command is in its own file.

mod catalog;
mod form;
mod plate;
mod theme;

pub use catalog::{run_brands, run_models, run_versions};
pub use form::{run_form_check, run_form_template};
pub use plate::run_plate;
pub use theme::run_theme;
