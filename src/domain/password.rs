//! Password digest

use sha2::{Digest, Sha256};

/// Compute the SHA-256 hex digest of a plaintext password
///
/// Deterministic and pure; the 64-character lowercase hex string is what
/// the account store persists and compares against.
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// NIST SHA-256 test vector: "abc"
    #[test]
    fn test_known_digest() {
        assert_eq!(
            hash_password("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    /// NIST SHA-256 test vector: empty input
    #[test]
    fn test_empty_digest() {
        assert_eq!(
            hash_password(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_digest_is_64_lowercase_hex() {
        let digest = hash_password("hunter2");
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(hash_password("pw1"), hash_password("pw1"));
    }

    #[test]
    fn test_different_passwords_differ() {
        assert_ne!(hash_password("pw1"), hash_password("pw2"));
    }
}
