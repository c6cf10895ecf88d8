//! `gradinvite create <name>` – create an invitation and print its share link.

use anyhow::Result;
use gradinvite_core::config::InviteConfig;
use gradinvite_core::render::share_link;
use gradinvite_core::store::{InvitationDb, NewInvitation};

use super::note_unresolved_photo;

pub async fn run_create(db: &InvitationDb, cfg: &InviteConfig, new: &NewInvitation) -> Result<()> {
    let inv = db.create(new).await?;
    println!("Created invitation {} for {}", inv.id, inv.recipient_name);
    println!("Share link: {}", share_link(&cfg.share_base_url, &inv.share_code));
    note_unresolved_photo(new.photo_url.as_deref());
    Ok(())
}
