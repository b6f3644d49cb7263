//! Text computations exposed by the services.
//!
//! Both are pure, deterministic, and total over valid UTF-8 input:
//! identical input always yields identical output, and neither
//! performs I/O. The HTTP layer guards against empty input before
//! calling either of them.

use sha2::{Digest, Sha256};

/// SHA-256 digest of the input's UTF-8 bytes as lowercase hex.
///
/// Always 64 characters.
pub fn sha256_hex(input: &str) -> String {
    hex::encode(Sha256::digest(input.as_bytes()))
}

/// Number of Unicode scalar values in the input.
///
/// Counts characters, not bytes: `"héllo"` is 5, not 6.
pub fn char_length(input: &str) -> usize {
    input.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha256_known_vectors() {
        assert_eq!(
            sha256_hex("hello"),
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
        assert_eq!(
            sha256_hex("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert_eq!(
            sha256_hex(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn sha256_is_deterministic() {
        assert_eq!(sha256_hex("same input"), sha256_hex("same input"));
    }

    #[test]
    fn sha256_output_shape() {
        let digest = sha256_hex("anything");
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn char_length_ascii() {
        assert_eq!(char_length("hello"), 5);
        assert_eq!(char_length(""), 0);
    }

    #[test]
    fn char_length_counts_chars_not_bytes() {
        assert_eq!(char_length("héllo"), 5);
        assert_eq!(char_length("日本語"), 3);
        assert_eq!("日本語".len(), 9); // bytes, for contrast
    }
}
