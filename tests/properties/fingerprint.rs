//! Property tests for content fingerprints.

use proptest::prelude::*;

use clasp_shell::domain::fingerprint::{Fingerprint, FingerprintCache};
use std::path::Path;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Fingerprints are deterministic.
    #[test]
    fn property_fingerprint_is_deterministic(bytes in proptest::collection::vec(any::<u8>(), 0..512)) {
        prop_assert_eq!(Fingerprint::of(&bytes), Fingerprint::of(&bytes.clone()));
    }

    /// PROPERTY: Fingerprints are equal iff the bytes are equal.
    #[test]
    fn property_fingerprint_equal_iff_bytes_equal(
        a in proptest::collection::vec(any::<u8>(), 0..64),
        b in proptest::collection::vec(any::<u8>(), 0..64),
    ) {
        prop_assert_eq!(a == b, Fingerprint::of(&a) == Fingerprint::of(&b));
    }

    /// PROPERTY: Recording the same content repeatedly never grows the cache
    /// and is never novel after the first time.
    #[test]
    fn property_repeated_content_is_not_novel(
        content in proptest::collection::vec(any::<u8>(), 0..128),
        repeats in 1usize..8,
    ) {
        let mut cache = FingerprintCache::new();
        let path = Path::new("src/Code.js");
        let fp = Fingerprint::of(&content);

        prop_assert!(cache.is_novel(path, &fp));
        cache.set(path, fp);
        for _ in 0..repeats {
            prop_assert!(!cache.is_novel(path, &Fingerprint::of(&content)));
        }
        prop_assert_eq!(cache.len(), 1);
    }
}
