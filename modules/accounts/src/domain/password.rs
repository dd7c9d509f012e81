//! Password hashing
//!
//! Stored hashes take the form `s2$<salt_hex>$<digest_hex>`: a random
//! 16-byte salt and the SHA-256 of salt then password. The scheme tag in
//! front leaves room to migrate stored hashes to another scheme without a
//! flag day.

use rand::RngCore;
use sha2::{Digest, Sha256};

const SCHEME: &str = "s2";
const SALT_LEN: usize = 16;

/// Hash a password under a fresh random salt
pub fn hash_password(password: &str) -> String {
    let mut salt = [0u8; SALT_LEN];
    rand::rng().fill_bytes(&mut salt);
    let digest = digest_with_salt(&salt, password);
    format!("{SCHEME}${}${}", hex::encode(salt), hex::encode(digest))
}

/// Check a password against a stored hash; malformed hashes never match
pub fn verify_password(password: &str, stored: &str) -> bool {
    let mut parts = stored.split('$');
    let (Some(scheme), Some(salt_hex), Some(digest_hex), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return false;
    };
    if scheme != SCHEME {
        return false;
    }
    let Ok(salt) = hex::decode(salt_hex) else {
        return false;
    };
    let Ok(expected) = hex::decode(digest_hex) else {
        return false;
    };
    digest_with_salt(&salt, password).as_slice() == expected.as_slice()
}

fn digest_with_salt(salt: &[u8], password: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(salt);
    hasher.update(password.as_bytes());
    hasher.finalize().into()
}
