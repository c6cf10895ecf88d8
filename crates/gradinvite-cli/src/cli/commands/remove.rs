//! `gradinvite remove <id>` – delete an invitation.

use anyhow::Result;
use gradinvite_core::store::InvitationDb;

pub async fn run_remove(db: &InvitationDb, id: i64) -> Result<()> {
    db.remove(id).await?;
    println!("Removed invitation {id}");
    Ok(())
}
