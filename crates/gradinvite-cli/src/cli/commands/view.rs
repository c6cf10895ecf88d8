//! `gradinvite view <code>` – render an invitation and count the view.

use anyhow::Result;
use gradinvite_core::config::InviteConfig;
use gradinvite_core::render::render_invitation;
use gradinvite_core::share_code;
use gradinvite_core::store::InvitationDb;

pub async fn run_view(db: &InvitationDb, cfg: &InviteConfig, code: &str) -> Result<()> {
    let code = share_code::parse(code)?;
    let inv = db.record_view(code).await?;
    println!("{}", render_invitation(&inv, cfg));
    Ok(())
}
