//! Property tests for content digests.

use std::io::Write;

use proptest::prelude::*;

use droid::{ContentDigest, Synchroniser};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Digesting the same bytes twice gives the same digest.
    #[test]
    fn property_digest_is_deterministic(bytes in proptest::collection::vec(any::<u8>(), 0..4096)) {
        prop_assert_eq!(ContentDigest::from_bytes(&bytes), ContentDigest::from_bytes(&bytes));
    }

    /// PROPERTY: A digest is always 40 lowercase hex characters.
    #[test]
    fn property_digest_is_lowercase_hex(bytes in proptest::collection::vec(any::<u8>(), 0..512)) {
        let digest = ContentDigest::from_bytes(&bytes);
        prop_assert_eq!(digest.as_str().len(), ContentDigest::HEX_LEN);
        prop_assert!(digest.as_str().chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
        prop_assert_eq!(ContentDigest::parse(digest.as_str()), Some(digest.clone()));
    }

    /// PROPERTY: Streaming a file gives the same digest as hashing it in memory.
    #[test]
    fn property_file_digest_matches_in_memory(bytes in proptest::collection::vec(any::<u8>(), 0..65536)) {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&bytes).unwrap();
        file.flush().unwrap();

        let from_file = Synchroniser::new(file.path()).digest().unwrap();
        prop_assert_eq!(from_file, ContentDigest::from_bytes(&bytes));
    }

    /// PROPERTY: `parse` never panics and only accepts 40 hex characters.
    #[test]
    fn property_parse_never_panics(input in "(?s).{0,64}") {
        if let Some(digest) = ContentDigest::parse(&input) {
            prop_assert_eq!(digest.as_str().len(), ContentDigest::HEX_LEN);
        }
    }
}
