//! `gradinvite edit <id>` – change name, relation or photo.

use anyhow::Result;
use gradinvite_core::store::{InvitationDb, InvitationEdit};

use super::note_unresolved_photo;

pub async fn run_edit(db: &InvitationDb, id: i64, edit: &InvitationEdit) -> Result<()> {
    let inv = db.update(id, edit).await?;
    println!("Updated invitation {id}: {}", inv.recipient_name);
    if let Some(relation) = inv.relation.as_deref() {
        println!("  relation: {relation}");
    }
    if let Some(photo) = inv.photo_url.as_deref() {
        println!("  photo: {photo}");
    }
    note_unresolved_photo(edit.photo_url.as_deref());
    Ok(())
}
