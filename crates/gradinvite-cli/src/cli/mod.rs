//! CLI for gradinvite.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use gradinvite_core::config;
use gradinvite_core::store::{InvitationDb, InvitationEdit, NewInvitation};

use commands::{
    run_completions, run_create, run_edit, run_list, run_manpage, run_remove, run_resolve,
    run_view,
};

/// Top-level CLI for gradinvite.
#[derive(Debug, Parser)]
#[command(name = "gradinvite")]
#[command(about = "Create, share and view personalized graduation invitations", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Create an invitation and print its share link.
    Create {
        /// Recipient's name as it should appear on the invitation.
        name: String,
        /// How the recipient relates to you (e.g. "Ba mẹ", "anh", "bạn").
        #[arg(long)]
        relation: Option<String>,
        /// Photo link: Google Drive share link, file ID, or any image URL.
        #[arg(long)]
        photo: Option<String>,
    },

    /// Open an invitation by share code (counts as a view).
    View {
        /// Share code from the invitation link.
        code: String,
    },

    /// List all invitations, newest first.
    List {
        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Edit an invitation by its ID. Pass an empty string to clear the relation.
    Edit {
        /// Invitation identifier.
        id: i64,
        /// New recipient name.
        #[arg(long)]
        name: Option<String>,
        /// New relation.
        #[arg(long)]
        relation: Option<String>,
        /// New photo link (normalized like on create).
        #[arg(long, conflicts_with = "clear_photo")]
        photo: Option<String>,
        /// Remove the stored photo.
        #[arg(long)]
        clear_photo: bool,
    },

    /// Delete an invitation by its ID.
    Remove {
        /// Invitation identifier.
        id: i64,
    },

    /// Resolve a photo link to a direct image URL without storing anything.
    Resolve {
        /// Drive share link, file ID, or image URL.
        link: String,
        /// Print only the Drive file ID.
        #[arg(long)]
        id_only: bool,
    },

    /// Print shell completions.
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print a man page (roff).
    Manpage,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match &cli.command {
            CliCommand::Resolve { link, id_only } => return run_resolve(link, *id_only),
            CliCommand::Completions { shell } => return run_completions(*shell),
            CliCommand::Manpage => return run_manpage(),
            _ => {}
        }

        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let db = InvitationDb::open_default().await?;

        match cli.command {
            CliCommand::Create {
                name,
                relation,
                photo,
            } => {
                let new = NewInvitation {
                    recipient_name: name,
                    relation,
                    photo_url: photo,
                };
                run_create(&db, &cfg, &new).await?;
            }
            CliCommand::View { code } => run_view(&db, &cfg, &code).await?,
            CliCommand::List { json } => run_list(&db, &cfg, json).await?,
            CliCommand::Edit {
                id,
                name,
                relation,
                photo,
                clear_photo,
            } => {
                let edit = InvitationEdit {
                    recipient_name: name,
                    relation,
                    photo_url: if clear_photo { Some(String::new()) } else { photo },
                };
                run_edit(&db, id, &edit).await?;
            }
            CliCommand::Remove { id } => run_remove(&db, id).await?,
            CliCommand::Resolve { .. } | CliCommand::Completions { .. } | CliCommand::Manpage => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
