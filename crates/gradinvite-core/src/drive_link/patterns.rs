//! Compiled patterns and the ordered fallback tables.

use regex::Regex;
use std::sync::LazyLock;

use super::file_id::FileId;

/// One entry of a first-match-wins extraction table. Group 1 holds the file ID.
pub(super) struct IdPattern {
    pub name: &'static str,
    pub regex: Regex,
}

impl IdPattern {
    fn new(name: &'static str, pattern: &str) -> Self {
        IdPattern {
            name,
            regex: Regex::new(pattern).unwrap(),
        }
    }

    fn extract(&self, input: &str) -> Option<FileId> {
        self.regex
            .captures(input)
            .and_then(|c| c.get(1))
            .and_then(|m| FileId::parse(m.as_str()))
    }
}

/// Already-embeddable Drive thumbnail links.
pub(super) static DIRECT_THUMBNAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"drive\.google\.com/thumbnail\?").unwrap());

/// Google's static image-serving host.
pub(super) static DIRECT_IMAGE_HOST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(https://)?lh3\.googleusercontent\.com/").unwrap());

/// `/d/<id>` or `/file/d/<id>` in a parsed URL path.
pub(super) static PATH_FILE_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/(?:file/)?d/([A-Za-z0-9_-]{25,})").unwrap());

/// Tried against the raw input when structured parsing found nothing.
pub(super) static FALLBACK_PATTERNS: LazyLock<[IdPattern; 4]> = LazyLock::new(|| {
    [
        IdPattern::new("path-d", r"/d/([A-Za-z0-9_-]{25,})"),
        IdPattern::new("query-id", r"[?&]id=([A-Za-z0-9_-]{25,})"),
        IdPattern::new("file-d", r"file/d/([A-Za-z0-9_-]{25,})"),
        IdPattern::new("thumbnail-id", r"thumbnail\?id=([A-Za-z0-9_-]{25,})"),
    ]
});

/// Used by `extract_identifier`; the last entry only matches a bare ID.
pub(super) static EXTRACT_PATTERNS: LazyLock<[IdPattern; 3]> = LazyLock::new(|| {
    [
        IdPattern::new("path-d", r"/d/([A-Za-z0-9_-]{25,})"),
        IdPattern::new("query-id", r"[?&]id=([A-Za-z0-9_-]{25,})"),
        IdPattern::new("bare", r"^([A-Za-z0-9_-]{25,})$"),
    ]
});

/// First pattern in `table` that yields an ID, together with its name.
pub(super) fn first_match<'a>(
    table: &'a [IdPattern],
    input: &str,
) -> Option<(&'a str, FileId)> {
    table
        .iter()
        .find_map(|p| p.extract(input).map(|id| (p.name, id)))
}
