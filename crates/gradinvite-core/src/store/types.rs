//! Types used by the invitation store.

use serde::Serialize;

/// Invitation identifier (SQLite row id).
pub type InvitationId = i64;

/// A stored invitation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Invitation {
    pub id: InvitationId,
    pub recipient_name: String,
    pub share_code: String,
    /// How the recipient relates to the sender, e.g. "Ba mẹ", "anh", "bạn".
    pub relation: Option<String>,
    pub photo_url: Option<String>,
    pub views_count: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Fields supplied when creating an invitation.
#[derive(Debug, Clone, Default)]
pub struct NewInvitation {
    pub recipient_name: String,
    pub relation: Option<String>,
    pub photo_url: Option<String>,
}

/// Partial update. `None` keeps the stored value; an empty string clears
/// `relation` or `photo_url`.
#[derive(Debug, Clone, Default)]
pub struct InvitationEdit {
    pub recipient_name: Option<String>,
    pub relation: Option<String>,
    pub photo_url: Option<String>,
}
