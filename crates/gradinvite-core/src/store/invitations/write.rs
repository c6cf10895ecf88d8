//! Invitation write operations: create, update, record view, remove.

use anyhow::Result;

use super::super::db::{unix_timestamp, InvitationDb};
use super::super::types::{Invitation, InvitationEdit, InvitationId, NewInvitation};
use super::read::{invitation_from_row, SELECT_COLUMNS};
use crate::drive_link;
use crate::error::InviteError;
use crate::share_code;

/// Trimmed, non-empty recipient name.
fn clean_name(name: &str) -> Result<String, InviteError> {
    let name = name.trim();
    if name.is_empty() {
        Err(InviteError::EmptyRecipientName)
    } else {
        Ok(name.to_string())
    }
}

/// Trimmed text, or `None` when blank.
fn clean_optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Normalized photo link. Links that cannot be normalized are kept as entered
/// so the user still sees what they pasted.
fn clean_photo(value: Option<&str>) -> Option<String> {
    let raw = clean_optional(value)?;
    match drive_link::normalize(Some(&raw)) {
        Some(normalized) => Some(normalized),
        None => {
            tracing::warn!(photo = %raw, "photo link could not be normalized; storing as entered");
            Some(raw)
        }
    }
}

impl InvitationDb {
    /// Insert a new invitation with a freshly issued share code and zero views.
    pub async fn create(&self, new: &NewInvitation) -> Result<Invitation> {
        let name = clean_name(&new.recipient_name)?;
        let relation = clean_optional(new.relation.as_deref());
        let photo_url = clean_photo(new.photo_url.as_deref());
        let code = share_code::generate();
        let now = unix_timestamp();

        let id = sqlx::query(
            r#"
            INSERT INTO invitations (
                recipient_name, share_code, relation, photo_url,
                views_count, created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, 0, ?5, ?6)
            "#,
        )
        .bind(&name)
        .bind(&code)
        .bind(&relation)
        .bind(&photo_url)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?
        .last_insert_rowid();

        tracing::info!(id, share_code = %code, "created invitation");

        Ok(Invitation {
            id,
            recipient_name: name,
            share_code: code,
            relation,
            photo_url,
            views_count: 0,
            created_at: now,
            updated_at: now,
        })
    }

    /// Apply a partial edit and return the updated invitation.
    pub async fn update(&self, id: InvitationId, edit: &InvitationEdit) -> Result<Invitation> {
        let current = self.get(id).await?.ok_or(InviteError::UnknownId(id))?;

        let recipient_name = match edit.recipient_name.as_deref() {
            Some(name) => clean_name(name)?,
            None => current.recipient_name,
        };
        let relation = match edit.relation.as_deref() {
            Some(relation) => clean_optional(Some(relation)),
            None => current.relation,
        };
        let photo_url = match edit.photo_url.as_deref() {
            Some(photo) => clean_photo(Some(photo)),
            None => current.photo_url,
        };
        let now = unix_timestamp();

        sqlx::query(
            r#"
            UPDATE invitations
            SET recipient_name = ?1,
                relation = ?2,
                photo_url = ?3,
                updated_at = ?4
            WHERE id = ?5
            "#,
        )
        .bind(&recipient_name)
        .bind(&relation)
        .bind(&photo_url)
        .bind(now)
        .bind(id)
        .execute(&self.pool)
        .await?;

        tracing::info!(id, "updated invitation");

        Ok(Invitation {
            recipient_name,
            relation,
            photo_url,
            updated_at: now,
            ..current
        })
    }

    /// Look up an invitation by share code and count one view.
    ///
    /// Returns the invitation as it was before the increment.
    pub async fn record_view(&self, code: &str) -> Result<Invitation> {
        let mut tx = self.pool.begin().await?;
        let sql = format!("{SELECT_COLUMNS} WHERE share_code = ?1");
        let row = sqlx::query(&sql)
            .bind(code)
            .fetch_optional(&mut *tx)
            .await?;
        let Some(row) = row else {
            tx.commit().await?;
            return Err(InviteError::UnknownShareCode(code.to_string()).into());
        };
        let invitation = invitation_from_row(&row);

        sqlx::query(
            r#"
            UPDATE invitations
            SET views_count = views_count + 1
            WHERE id = ?1
            "#,
        )
        .bind(invitation.id)
        .execute(&mut *tx)
        .await?;
        tx.commit().await?;

        tracing::debug!(id = invitation.id, share_code = code, "recorded view");
        Ok(invitation)
    }

    /// Delete an invitation permanently.
    pub async fn remove(&self, id: InvitationId) -> Result<()> {
        let affected = sqlx::query("DELETE FROM invitations WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();
        if affected == 0 {
            return Err(InviteError::UnknownId(id).into());
        }
        tracing::info!(id, "removed invitation");
        Ok(())
    }
}
