//! Password hashing for stored credentials.
//!
//! Hashes are stored as `hex(salt)$hex(sha256(salt || password))` with a fresh random
//! 16-byte salt per hash.

use sha2::{Digest, Sha256};

const SALT_LEN: usize = 16;

// TODO: move to a memory-hard KDF (argon2) once one is part of the dependency set.
pub fn hash_password(password: &str) -> String {
    let salt: [u8; SALT_LEN] = rand::random();
    format!("{}${}", hex::encode(salt), hex::encode(digest(&salt, password)))
}

/// Checks `password` against a hash produced by [`hash_password`].
///
/// A stored value that is not in `salt$digest` hex form never matches.
pub fn verify_password(stored: &str, password: &str) -> bool {
    let Some((salt_hex, digest_hex)) = stored.split_once('$') else {
        return false;
    };
    let (Ok(salt), Ok(expected)) = (hex::decode(salt_hex), hex::decode(digest_hex)) else {
        return false;
    };

    digest(&salt, password) == expected
}

fn digest(salt: &[u8], password: &str) -> Vec<u8> {
    let mut hasher = Sha256::new();
    hasher.update(salt);
    hasher.update(password.as_bytes());
    hasher.finalize().to_vec()
}
