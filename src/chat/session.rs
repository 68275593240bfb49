//! Session identifier generation.
//!
//! One opaque id is generated per run and sent unchanged on every request
//! so the remote service can correlate the exchange. Shape:
//! `session_<unix-millis>_<random base-36 suffix>`.

use chrono::Utc;
use rand::{Rng, rng};

use crate::constants::SESSION_SUFFIX_LEN;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generate a fresh session id.
pub fn generate_session_id() -> String {
    format!(
        "session_{}_{}",
        Utc::now().timestamp_millis(),
        random_base36(SESSION_SUFFIX_LEN)
    )
}

/// A random base-36 string of `len` chars.
fn random_base36(len: usize) -> String {
    let mut rng = rng();
    (0..len)
        .map(|_| BASE36[rng.random_range(0..BASE36.len())] as char)
        .collect()
}
