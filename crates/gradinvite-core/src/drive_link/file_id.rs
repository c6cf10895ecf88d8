//! Drive file identifier.

use std::fmt;

/// An opaque Drive file ID: at least 25 characters from `[A-Za-z0-9_-]`.
///
/// Real IDs are usually 33 characters; 25 is the lower bound that separates
/// them from short incidental matches in pasted text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileId(String);

impl FileId {
    pub const MIN_LEN: usize = 25;

    /// Returns `Some` only if the whole of `s` is a valid file ID.
    pub fn parse(s: &str) -> Option<Self> {
        if is_file_id(s) {
            Some(FileId(s.to_string()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FileId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

fn is_file_id(s: &str) -> bool {
    s.len() >= FileId::MIN_LEN
        && s
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_url_safe_alphabet() {
        let id = FileId::parse("1a2B3c4D5e6F7g8H9i0J_kL-mN").unwrap();
        assert_eq!(id.as_str(), "1a2B3c4D5e6F7g8H9i0J_kL-mN");
        assert_eq!(id.to_string(), "1a2B3c4D5e6F7g8H9i0J_kL-mN");
    }

    #[test]
    fn rejects_short() {
        assert!(FileId::parse("abcdefghijklmnopqrstuvwx").is_none()); // 24
        assert!(FileId::parse("abcdefghijklmnopqrstuvwxy").is_some()); // 25
    }

    #[test]
    fn rejects_foreign_characters() {
        assert!(FileId::parse("abcdefghijklmnopqrstuvwxy.z").is_none());
        assert!(FileId::parse("abcdefghijklmnopqrstuvwxyz ").is_none());
        assert!(FileId::parse("ábcdefghijklmnopqrstuvwxyz").is_none());
        assert!(FileId::parse("").is_none());
    }
}
