pub mod config;
pub mod drive_link;
pub mod error;
pub mod logging;
pub mod render;
pub mod share_code;
pub mod store;

pub use error::InviteError;
