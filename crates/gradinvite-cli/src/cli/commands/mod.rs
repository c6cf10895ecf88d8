//! CLI command handlers. Each command is in its own file.

mod completions;
mod create;
mod edit;
mod list;
mod remove;
mod resolve;
mod view;

pub use completions::{run_completions, run_manpage};
pub use create::run_create;
pub use edit::run_edit;
pub use list::run_list;
pub use remove::run_remove;
pub use resolve::run_resolve;
pub use view::run_view;

use gradinvite_core::drive_link;

/// Prints a note when a photo link was stored as entered because it could not be resolved.
fn note_unresolved_photo(entered: Option<&str>) {
    if let Some(photo) = entered.map(str::trim).filter(|s| !s.is_empty()) {
        if drive_link::normalize(Some(photo)).is_none() {
            println!("  (photo link could not be resolved to an image; stored as entered)");
        }
    }
}
