//! Password to cipher key derivation.
//!
//! Every scrambled Inti Creates container is keyed by a short ASCII
//! password. The key is a 64-bit accumulator seeded with a fixed base
//! value and folded over the password bytes with wrapping add/multiply
//! steps. Unsigned overflow is part of the scheme, not an error.

/// Base value every key derivation starts from.
pub const BASE_KEY: u64 = 0xA1B3_4F58_CAD7_05B2;

/// Multiplier shared by key derivation and the keystream feedback.
pub const KEY_MULT: u64 = 141;

/// Derive a 64-bit cipher key from a password.
///
/// An empty password yields `BASE_KEY` unchanged.
pub fn derive_key(password: &[u8]) -> u64 {
    let mut key = BASE_KEY;
    for &b in password {
        key = key.wrapping_add(b as u64).wrapping_mul(KEY_MULT);
    }
    key
}
