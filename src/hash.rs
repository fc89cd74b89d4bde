//! Fast non-cryptographic digests for hashed-presence keys

use xxhash_rust::xxh64::xxh64;

/// Digest an input string into the fixed-size key used for presence
/// tracking.
///
/// XXH64 with a zero seed, big-endian encoded. Suitable for
/// deduplication-style presence keys, not for anything adversarial.
pub fn digest(input: &str) -> [u8; 8] {
    xxh64(input.as_bytes(), 0).to_be_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_is_deterministic() {
        assert_eq!(digest("user:42"), digest("user:42"));
    }

    #[test]
    fn test_digest_distinguishes_inputs() {
        assert_ne!(digest("user:42"), digest("user:43"));
        assert_ne!(digest(""), digest("user:42"));
    }
}
