//! Persistent invitation store (SQLite via sqlx).
//!
//! One table of invitation records keyed by row id, with a unique share code
//! per invitation and a running view counter.

pub mod db;
mod invitations;
pub mod types;

pub use db::*;
pub use types::*;
