//! Domain errors callers may want to match on.
//!
//! Plumbing failures (I/O, SQLite, TOML) travel as `anyhow::Error`; these are
//! wrapped into it at the store boundary and can be recovered with
//! `err.downcast_ref::<InviteError>()`.

use thiserror::Error;

use crate::store::InvitationId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InviteError {
    #[error("recipient name must not be empty")]
    EmptyRecipientName,

    #[error("no invitation with share code {0:?}")]
    UnknownShareCode(String),

    #[error("no invitation with id {0}")]
    UnknownId(InvitationId),

    #[error("invalid share code {0:?}: expected lowercase letters and digits")]
    InvalidShareCode(String),
}
