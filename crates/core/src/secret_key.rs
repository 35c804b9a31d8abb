//! One-time secret keys issued at admin signup.
//!
//! The plaintext is returned to the caller exactly once; only a salted hash
//! is ever persisted (hashing lives next to password hashing in the API
//! crate).

use rand::Rng;

/// Number of random bytes in a secret key.
pub const SECRET_KEY_BYTES: usize = 32;

/// Generate a new secret key: 32 random bytes rendered as lowercase hex.
pub fn generate_secret_key() -> String {
    let mut bytes = [0u8; SECRET_KEY_BYTES];
    rand::rng().fill(&mut bytes);
    hex_encode(&bytes)
}

fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secret_key_is_64_hex_chars() {
        let key = generate_secret_key();
        assert_eq!(key.len(), SECRET_KEY_BYTES * 2);
        assert!(key.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn secret_keys_are_unique() {
        assert_ne!(generate_secret_key(), generate_secret_key());
    }

    #[test]
    fn hex_encode_pads_single_digits() {
        assert_eq!(hex_encode(&[0x00, 0x0f, 0xff]), "000fff");
    }
}
