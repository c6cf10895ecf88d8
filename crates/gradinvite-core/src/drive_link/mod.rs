//! Google Drive photo link resolution.
//!
//! Users paste whatever Drive gave them (file-view links, `open?id=` links,
//! `uc` download links, bare file IDs, already-embeddable thumbnail links) or
//! an unrelated image URL. This module turns those into one directly loadable
//! image URL, or `None` when the input cannot be resolved to a single image.
//!
//! Everything here is pure: no I/O, no logging, no panics on any input.

mod file_id;
mod normalize;
mod patterns;

pub use file_id::FileId;
pub use normalize::{extract_identifier, normalize};

/// Host used for the canonical thumbnail endpoint.
pub const DRIVE_HOST: &str = "drive.google.com";

/// Requested thumbnail width in the canonical URL.
pub const THUMBNAIL_SIZE: &str = "w1000";

/// Builds the canonical thumbnail URL for a file ID.
///
/// `https://drive.google.com/thumbnail?id=<id>&sz=w1000`
pub fn thumbnail_url(id: &FileId) -> String {
    format!(
        "https://{}/thumbnail?id={}&sz={}",
        DRIVE_HOST,
        id.as_str(),
        THUMBNAIL_SIZE
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thumbnail_url_format() {
        let id = FileId::parse("1AbCdEfGhIjKlMnOpQrStUvWxYz").unwrap();
        assert_eq!(
            thumbnail_url(&id),
            "https://drive.google.com/thumbnail?id=1AbCdEfGhIjKlMnOpQrStUvWxYz&sz=w1000"
        );
    }
}
