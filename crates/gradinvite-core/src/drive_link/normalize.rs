//! Link normalization and ID extraction.

use url::Url;

use super::file_id::FileId;
use super::patterns::{
    first_match, DIRECT_IMAGE_HOST, DIRECT_THUMBNAIL, EXTRACT_PATTERNS, FALLBACK_PATTERNS,
    PATH_FILE_ID,
};
use super::{thumbnail_url, DRIVE_HOST};

/// Normalizes a pasted photo link into a directly loadable image URL.
///
/// Resolution order:
/// 1. empty or missing input resolves to `None`;
/// 2. Drive thumbnail links and `lh3.googleusercontent.com` links are returned as-is;
/// 3. for parsed URLs on a Google host, the file ID is taken from `/d/<id>` in
///    the path, then from the `id` query parameter; folder links resolve to `None`;
/// 4. the fallback pattern table runs over the raw text (handles partial links);
/// 5. a bare file ID becomes a thumbnail link;
/// 6. anything else mentioning `drive.google.com` resolves to `None`;
/// 7. any other `http`/`https` URL with a host is returned unchanged; everything
///    else (plain text, `mailto:`, `javascript:`, Windows paths) resolves to `None`.
///
/// Whitespace around the input is ignored and never part of the result.
pub fn normalize(input: Option<&str>) -> Option<String> {
    let trimmed = input.map(str::trim).filter(|s| !s.is_empty())?;

    if DIRECT_THUMBNAIL.is_match(trimmed) || DIRECT_IMAGE_HOST.is_match(trimmed) {
        return Some(trimmed.to_string());
    }

    let parsed = Url::parse(trimmed).ok();

    if let Some(url) = parsed.as_ref().filter(|u| is_google_host(u)) {
        match from_google_url(url) {
            GoogleLink::File(id) => return Some(thumbnail_url(&id)),
            GoogleLink::Folder => return None,
            GoogleLink::Unknown => {}
        }
    }

    if let Some((_, id)) = first_match(&FALLBACK_PATTERNS[..], trimmed) {
        return Some(thumbnail_url(&id));
    }

    if let Some(id) = FileId::parse(trimmed) {
        return Some(thumbnail_url(&id));
    }

    if trimmed.contains(DRIVE_HOST) {
        return None;
    }

    parsed
        .filter(is_web_url)
        .map(|_| trimmed.to_string())
}

/// Extracts a Drive file ID from a link or a bare ID.
///
/// Tries `/d/<id>`, then `?id=`/`&id=`, then the whole input as a bare ID.
/// Unlike [`normalize`], folders and direct links get no special handling.
pub fn extract_identifier(input: Option<&str>) -> Option<FileId> {
    let trimmed = input.map(str::trim).filter(|s| !s.is_empty())?;
    first_match(&EXTRACT_PATTERNS[..], trimmed).map(|(_, id)| id)
}

enum GoogleLink {
    File(FileId),
    Folder,
    Unknown,
}

fn is_web_url(url: &Url) -> bool {
    matches!(url.scheme(), "http" | "https") && url.host().is_some()
}

fn is_google_host(url: &Url) -> bool {
    match url.host_str() {
        Some(host) => {
            let host = host.to_ascii_lowercase();
            host == "google.com" || host.ends_with(".google.com")
        }
        None => false,
    }
}

fn from_google_url(url: &Url) -> GoogleLink {
    let path = url.path();

    if let Some(id) = PATH_FILE_ID
        .captures(path)
        .and_then(|c| c.get(1))
        .and_then(|m| FileId::parse(m.as_str()))
    {
        return GoogleLink::File(id);
    }

    // First `id` parameter wins.
    if let Some((_, value)) = url.query_pairs().find(|(k, _)| k == "id") {
        if let Some(id) = FileId::parse(&value) {
            return GoogleLink::File(id);
        }
    }

    if path.to_ascii_lowercase().contains("/folders/") {
        return GoogleLink::Folder;
    }

    GoogleLink::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID: &str = "1AbCdEfGhIjKlMnOpQrStUvWxYz0123";

    fn canonical(id: &str) -> String {
        format!("https://drive.google.com/thumbnail?id={id}&sz=w1000")
    }

    #[test]
    fn empty_and_missing() {
        assert_eq!(normalize(None), None);
        assert_eq!(normalize(Some("")), None);
        assert_eq!(normalize(Some("   \t\n")), None);
        assert_eq!(extract_identifier(None), None);
        assert_eq!(extract_identifier(Some("  ")), None);
    }

    #[test]
    fn file_view_and_preview_links() {
        for suffix in ["/view", "/preview", "/view?usp=sharing", "", "/"] {
            let link = format!("https://drive.google.com/file/d/{ID}{suffix}");
            assert_eq!(normalize(Some(&link)), Some(canonical(ID)), "{link}");
        }
    }

    #[test]
    fn open_and_uc_links() {
        let open = format!("https://drive.google.com/open?id={ID}");
        assert_eq!(normalize(Some(&open)), Some(canonical(ID)));
        let uc = format!("https://drive.google.com/uc?export=view&id={ID}");
        assert_eq!(normalize(Some(&uc)), Some(canonical(ID)));
    }

    #[test]
    fn other_google_subdomain() {
        let link = format!("https://docs.google.com/uc?id={ID}");
        assert_eq!(normalize(Some(&link)), Some(canonical(ID)));
    }

    #[test]
    fn short_query_id_is_not_a_file() {
        let link = "https://drive.google.com/open?id=tooshort";
        assert_eq!(normalize(Some(link)), None);
    }

    #[test]
    fn folders_are_unresolvable() {
        assert_eq!(
            normalize(Some("https://drive.google.com/drive/folders/abc")),
            None
        );
        let link = format!("https://drive.google.com/drive/u/0/folders/{ID}?usp=sharing");
        assert_eq!(normalize(Some(&link)), None);
    }

    #[test]
    fn direct_links_pass_through_untouched() {
        let thumb = format!("  {}  ", canonical(ID));
        assert_eq!(normalize(Some(&thumb)), Some(canonical(ID)));
        let lh3 = "https://lh3.googleusercontent.com/d/abc=w1000";
        assert_eq!(normalize(Some(lh3)), Some(lh3.to_string()));
    }

    #[test]
    fn partial_links_use_fallback_table() {
        let partial = format!("drive.google.com/file/d/{ID}/view");
        assert_eq!(normalize(Some(&partial)), Some(canonical(ID)));
        let query_only = format!("?id={ID}");
        assert_eq!(normalize(Some(&query_only)), Some(canonical(ID)));
    }

    #[test]
    fn bare_identifier() {
        assert_eq!(normalize(Some(ID)), Some(canonical(ID)));
        assert_eq!(normalize(Some(&format!(" {ID} "))), Some(canonical(ID)));
    }

    #[test]
    fn unrecognized_drive_links_are_unresolvable() {
        assert_eq!(normalize(Some("https://drive.google.com/drive/my-drive")), None);
        assert_eq!(normalize(Some("see drive.google.com somewhere")), None);
    }

    #[test]
    fn foreign_urls_pass_through() {
        let url = "https://example.com/photo.jpg";
        assert_eq!(normalize(Some(url)), Some(url.to_string()));
        let cdn = "https://images.example.org/a/b.png?w=300&id=small";
        assert_eq!(normalize(Some(cdn)), Some(cdn.to_string()));
    }

    #[test]
    fn plain_text_is_unresolvable() {
        assert_eq!(normalize(Some("not a url at all")), None);
        assert_eq!(normalize(Some("photo.jpg")), None);
    }

    #[test]
    fn scheme_like_text_is_unresolvable() {
        for input in [
            "anh: xem link",
            "note: see attached photo",
            "C:\\Users\\me\\pic.jpg",
            "javascript:alert(1)",
            "mailto:a@b.c",
            "ftp://files.example.com/photo.jpg",
            "file:///home/me/photo.jpg",
        ] {
            assert_eq!(normalize(Some(input)), None, "{input}");
        }
        let plain_http = "http://example.com/photo.jpg";
        assert_eq!(normalize(Some(plain_http)), Some(plain_http.to_string()));
    }

    #[test]
    fn extract_from_each_shape() {
        let view = format!("https://drive.google.com/file/d/{ID}/view");
        assert_eq!(extract_identifier(Some(&view)).unwrap().as_str(), ID);
        let open = format!("https://drive.google.com/open?id={ID}");
        assert_eq!(extract_identifier(Some(&open)).unwrap().as_str(), ID);
        assert_eq!(extract_identifier(Some(ID)).unwrap().as_str(), ID);
        assert_eq!(extract_identifier(Some(&canonical(ID))).unwrap().as_str(), ID);
    }

    #[test]
    fn extract_ignores_folder_semantics() {
        let folder = format!("https://drive.google.com/drive/folders/x?id={ID}");
        assert_eq!(extract_identifier(Some(&folder)).unwrap().as_str(), ID);
        assert_eq!(extract_identifier(Some("https://example.com/photo.jpg")), None);
    }
}
