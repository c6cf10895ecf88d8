//! Short shareable codes for invitations.
//!
//! A code is 8 random base-36 characters followed by the base-36 Unix time in
//! milliseconds, e.g. `k3x9q0ab` + `m1z2y3x4`.

use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

use crate::error::InviteError;

const RANDOM_LEN: u32 = 8;
const MAX_LEN: usize = 32;
const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generates a fresh share code using the current time.
pub fn generate() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64;
    generate_at(millis)
}

/// Generates a share code for a given timestamp (milliseconds since the epoch).
pub fn generate_at(unix_millis: u64) -> String {
    let mut code = random_prefix();
    code.push_str(&to_base36(unix_millis));
    code
}

/// `RANDOM_LEN` random base-36 digits, zero-padded.
fn random_prefix() -> String {
    let digits = to_base36(random_u64() % 36u64.pow(RANDOM_LEN));
    format!("{digits:0>width$}", width = RANDOM_LEN as usize)
}

/// 48 random bits. The crate's only randomness source is the v4 UUID generator;
/// its low 48 bits carry no version or variant markers.
fn random_u64() -> u64 {
    (Uuid::new_v4().as_u128() & 0xFFFF_FFFF_FFFF) as u64
}

/// True if `code` looks like something [`generate`] could have produced.
pub fn is_valid(code: &str) -> bool {
    !code.is_empty()
        && code.len() <= MAX_LEN
        && code
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
}

/// Trims `code` and checks it, for codes typed or pasted by a user.
pub fn parse(code: &str) -> Result<&str, InviteError> {
    let code = code.trim();
    if is_valid(code) {
        Ok(code)
    } else {
        Err(InviteError::InvalidShareCode(code.to_string()))
    }
}

fn to_base36(mut n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while n > 0 {
        digits.push(ALPHABET[(n % 36) as usize]);
        n /= 36;
    }
    digits.reverse();
    String::from_utf8_lossy(&digits).into_owned()
}
