//! Resolver behaviour through the public API: the shapes users actually paste.

use gradinvite_core::drive_link::{extract_identifier, normalize, thumbnail_url, FileId};

const IDS: [&str; 3] = [
    "1AbCdEfGhIjKlMnOpQrStUvWxY",
    "1x_Y-z0123456789abcdefghijklmnopq",
    "0B7Hc1RgwE8kPZmJ3eVl5T0lOcmNnYkx4",
];

fn canonical(id: &str) -> String {
    format!("https://drive.google.com/thumbnail?id={id}&sz=w1000")
}

#[test]
fn blank_input_is_unresolvable() {
    for input in [None, Some(""), Some(" "), Some("\n\t  ")] {
        assert_eq!(normalize(input), None, "{input:?}");
    }
}

#[test]
fn share_link_shapes_resolve_to_thumbnail() {
    for id in IDS {
        let shapes = [
            format!("https://drive.google.com/file/d/{id}/view"),
            format!("https://drive.google.com/file/d/{id}/view?usp=drive_link"),
            format!("https://drive.google.com/file/d/{id}/preview"),
            format!("https://drive.google.com/open?id={id}"),
            format!("https://drive.google.com/uc?export=download&id={id}"),
            format!("drive.google.com/file/d/{id}"),
            id.to_string(),
        ];
        for shape in &shapes {
            assert_eq!(normalize(Some(shape)), Some(canonical(id)), "{shape}");
        }
    }
}

#[test]
fn normalize_is_idempotent() {
    let inputs = [
        format!("https://drive.google.com/file/d/{}/view", IDS[0]),
        format!("https://drive.google.com/open?id={}", IDS[1]),
        IDS[2].to_string(),
        canonical(IDS[0]),
        "https://lh3.googleusercontent.com/d/xyz=w600".to_string(),
        "https://example.com/photo.jpg".to_string(),
        "  https://cdn.example.org/img/1.webp  ".to_string(),
    ];
    for input in &inputs {
        let once = normalize(Some(input)).expect("resolvable");
        assert_eq!(normalize(Some(&once)), Some(once.clone()), "{input}");
    }
}

#[test]
fn folders_and_unknown_drive_pages() {
    for input in [
        "https://drive.google.com/drive/folders/1AbCdEfGhIjKlMnOpQrStUvWxYz",
        "https://drive.google.com/drive/folders/short",
        "https://drive.google.com/drive/u/1/my-drive",
    ] {
        assert_eq!(normalize(Some(input)), None, "{input}");
    }
}

#[test]
fn foreign_urls_and_plain_text() {
    assert_eq!(
        normalize(Some("https://example.com/photo.jpg")).as_deref(),
        Some("https://example.com/photo.jpg")
    );
    for text in [
        "not a url at all",
        "anh: xem link",
        "javascript:alert(1)",
        "mailto:a@b.c",
    ] {
        assert_eq!(normalize(Some(text)), None, "{text}");
    }
}

#[test]
fn extracted_ids_satisfy_invariant() {
    for id in IDS {
        let from_thumb = extract_identifier(Some(&canonical(id))).unwrap();
        assert_eq!(from_thumb.as_str(), id);
        assert!(from_thumb.as_str().len() >= FileId::MIN_LEN);
        assert_eq!(thumbnail_url(&from_thumb), canonical(id));
    }
    assert_eq!(extract_identifier(Some("https://example.com/d/short")), None);
}
