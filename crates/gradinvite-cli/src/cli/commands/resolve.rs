//! `gradinvite resolve <link>` – run the photo link resolver on its own.

use anyhow::Result;
use gradinvite_core::drive_link;

/// Prints the direct image URL (or just the Drive file ID with `id_only`).
/// Fails when nothing can be resolved so scripts can check the exit status.
pub fn run_resolve(link: &str, id_only: bool) -> Result<()> {
    let resolved = if id_only {
        drive_link::extract_identifier(Some(link)).map(|id| id.into_string())
    } else {
        drive_link::normalize(Some(link))
    };
    tracing::debug!(input = link, resolved = ?resolved, id_only, "resolve link");

    match resolved {
        Some(out) => {
            println!("{out}");
            Ok(())
        }
        None => anyhow::bail!("could not resolve {:?} to an image link", link.trim()),
    }
}
