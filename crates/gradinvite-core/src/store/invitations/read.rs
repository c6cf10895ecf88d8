//! Invitation read operations: get, find by share code, list.

use anyhow::Result;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use super::super::db::InvitationDb;
use super::super::types::{Invitation, InvitationId};

pub(super) const SELECT_COLUMNS: &str = "SELECT id, recipient_name, share_code, relation, \
     photo_url, views_count, created_at, updated_at FROM invitations";

pub(super) fn invitation_from_row(row: &SqliteRow) -> Invitation {
    Invitation {
        id: row.get("id"),
        recipient_name: row.get("recipient_name"),
        share_code: row.get("share_code"),
        relation: row.get("relation"),
        photo_url: row.get("photo_url"),
        views_count: row.get("views_count"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

impl InvitationDb {
    /// List all invitations, newest first.
    pub async fn list(&self) -> Result<Vec<Invitation>> {
        let sql = format!("{SELECT_COLUMNS} ORDER BY created_at DESC, id DESC");
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;
        Ok(rows.iter().map(invitation_from_row).collect())
    }

    /// Fetch a single invitation by id.
    pub async fn get(&self, id: InvitationId) -> Result<Option<Invitation>> {
        let sql = format!("{SELECT_COLUMNS} WHERE id = ?1");
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.as_ref().map(invitation_from_row))
    }

    /// Fetch a single invitation by its share code, without counting a view.
    pub async fn find_by_code(&self, code: &str) -> Result<Option<Invitation>> {
        let sql = format!("{SELECT_COLUMNS} WHERE share_code = ?1");
        let row = sqlx::query(&sql)
            .bind(code)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.as_ref().map(invitation_from_row))
    }
}
