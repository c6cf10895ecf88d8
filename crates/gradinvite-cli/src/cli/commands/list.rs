//! `gradinvite list` – show all invitations.

use anyhow::Result;
use gradinvite_core::config::InviteConfig;
use gradinvite_core::render::share_link;
use gradinvite_core::store::InvitationDb;

pub async fn run_list(db: &InvitationDb, cfg: &InviteConfig, json: bool) -> Result<()> {
    let invitations = db.list().await?;
    if json {
        println!("{}", serde_json::to_string_pretty(&invitations)?);
        return Ok(());
    }
    if invitations.is_empty() {
        println!("No invitations yet.");
        return Ok(());
    }

    println!(
        "{:<6} {:<24} {:<12} {:<6} {}",
        "ID", "RECIPIENT", "RELATION", "VIEWS", "LINK"
    );
    for inv in invitations {
        println!(
            "{:<6} {:<24} {:<12} {:<6} {}",
            inv.id,
            inv.recipient_name,
            inv.relation.as_deref().unwrap_or("-"),
            inv.views_count,
            share_link(&cfg.share_base_url, &inv.share_code)
        );
    }
    Ok(())
}
