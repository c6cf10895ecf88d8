//! Plain-text rendering of an invitation for recipients.

use regex::Regex;
use std::sync::LazyLock;
use url::Url;

use crate::config::InviteConfig;
use crate::drive_link;
use crate::store::Invitation;

/// One entry of the ceremony programme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineEvent {
    pub time: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const TIMELINE: [TimelineEvent; 5] = [
    TimelineEvent {
        time: "13:30 - 14:00",
        title: "Đón tiếp khách mời",
        description: "Đăng ký và nhận tài liệu",
    },
    TimelineEvent {
        time: "14:00 - 14:30",
        title: "Nghi thức chào cờ",
        description: "Hát quốc ca và chào cờ tổ quốc",
    },
    TimelineEvent {
        time: "14:30 - 16:00",
        title: "Lễ trao bằng tốt nghiệp",
        description: "Trao bằng tốt nghiệp cho sinh viên",
    },
    TimelineEvent {
        time: "16:00 - 16:30",
        title: "Phát biểu của sinh viên",
        description: "Đại diện sinh viên phát biểu cảm nghĩ",
    },
    TimelineEvent {
        time: "16:30 - 17:00",
        title: "Chụp ảnh lưu niệm",
        description: "Chụp ảnh tập thể và gia đình",
    },
];

static GRANDPARENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"ông|bà").unwrap());
static PARENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(ba|bố|mẹ|gia ?đình)\b").unwrap());
static OLDER_SIBLING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b(anh|chị)\b").unwrap());
static FRIEND: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(bạn|bạn bè|ban be|bè|be)\b").unwrap());

/// How the sender refers to themself when addressing someone with `relation`.
///
/// Grandparents get "Cháu", parents and family "Con", older siblings "Em",
/// friends (or a younger sibling, "em") "Tôi". Anything else falls back to "Em".
pub fn sender_pronoun(relation: &str) -> &'static str {
    let r = relation.trim().to_lowercase();
    if GRANDPARENT.is_match(&r) {
        "Cháu"
    } else if PARENT.is_match(&r) {
        "Con"
    } else if OLDER_SIBLING.is_match(&r) {
        "Em"
    } else if FRIEND.is_match(&r) || r == "em" {
        "Tôi"
    } else {
        "Em"
    }
}

/// Image URL to show for a stored photo link.
///
/// Uses the normalized link when there is one, otherwise the stored text
/// as-is (the viewer may still manage to load it), otherwise `placeholder`.
pub fn photo_for_view(photo_url: Option<&str>, placeholder: &str) -> String {
    match photo_url.map(str::trim).filter(|s| !s.is_empty()) {
        Some(photo) => drive_link::normalize(Some(photo)).unwrap_or_else(|| photo.to_string()),
        None => placeholder.to_string(),
    }
}

/// Link recipients open to view an invitation: `<base>?code=<code>`.
///
/// Other query parameters on `base` are kept; an existing `code` is replaced.
pub fn share_link(base: &str, code: &str) -> String {
    match Url::parse(base.trim()) {
        Ok(mut url) => {
            let kept: Vec<(String, String)> = url
                .query_pairs()
                .filter(|(k, _)| k != "code")
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect();
            url.query_pairs_mut()
                .clear()
                .extend_pairs(kept.iter())
                .append_pair("code", code);
            url.to_string()
        }
        Err(_) => format!("{}?code={}", base.trim(), code),
    }
}

/// Renders the invitation page as text.
pub fn render_invitation(inv: &Invitation, cfg: &InviteConfig) -> String {
    let relation = inv
        .relation
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(&cfg.default_relation);
    let pronoun = sender_pronoun(relation);
    let photo = photo_for_view(inv.photo_url.as_deref(), &cfg.placeholder_photo);

    let event = cfg.event.as_ref();
    let mut lines = Vec::new();
    if let Some(title) = event.and_then(|e| e.title.as_deref()) {
        lines.extend([title.to_string(), String::new()]);
    }
    lines.push(format!("Thân gửi: {}", inv.recipient_name));
    lines.push(format!(
        "{pronoun} rất vui mừng được mời {relation} tham dự buổi lễ tốt nghiệp trang trọng, \
         đánh dấu cột mốc quan trọng trong hành trình học vấn của {}.",
        pronoun.to_lowercase()
    ));
    lines.push(String::new());
    lines.extend(event.and_then(|e| e.date.as_deref()).map(|d| format!("Thời gian: {d}")));
    lines.extend(event.and_then(|e| e.venue.as_deref()).map(|v| format!("Địa điểm: {v}")));
    lines.push("Chương trình:".to_string());
    lines.extend(
        TIMELINE
            .iter()
            .map(|e| format!("  {}  {}: {}", e.time, e.title, e.description)),
    );
    lines.push(String::new());
    lines.push(format!("Ảnh: {photo}"));
    lines.join("\n")
}
