use nix_hash::{
    compress_hash, hash_string, AbstractHashSink, Hash, HashAlgorithm, HashFormat, HashSink,
};
use proptest::prelude::*;

fn any_algorithm() -> impl Strategy<Value = HashAlgorithm> {
    prop_oneof![
        Just(HashAlgorithm::Md5),
        Just(HashAlgorithm::Sha1),
        Just(HashAlgorithm::Sha256),
        Just(HashAlgorithm::Sha512),
    ]
}

fn any_format() -> impl Strategy<Value = HashFormat> {
    prop_oneof![
        Just(HashFormat::Base16),
        Just(HashFormat::Base32),
        Just(HashFormat::Base64),
        Just(HashFormat::Sri),
    ]
}

/// An arbitrary hash: random bytes of the right size for a random algorithm.
fn any_hash() -> impl Strategy<Value = Hash> {
    any_algorithm().prop_flat_map(|algo| {
        proptest::collection::vec(any::<u8>(), algo.digest_len())
            .prop_map(move |bytes| Hash::from_slice(algo, &bytes).unwrap())
    })
}

proptest! {
    #[test]
    fn typed_text_roundtrips(hash in any_hash(), format in any_format()) {
        let text = hash.encode(format, true);
        prop_assert_eq!(Hash::parse_any(&text, Some(hash.algorithm())).unwrap(), hash);
        prop_assert_eq!(Hash::parse_any_prefixed(&text).unwrap(), hash);
    }

    #[test]
    fn bare_text_roundtrips(hash in any_hash(), format in prop_oneof![
        Just(HashFormat::Base16),
        Just(HashFormat::Base32),
        Just(HashFormat::Base64),
    ]) {
        let text = hash.encode(format, false);
        prop_assert_eq!(Hash::parse_non_sri_unprefixed(&text, hash.algorithm()).unwrap(), hash);
    }

    #[test]
    fn encoded_lengths_follow_formulas(hash in any_hash()) {
        let n = hash.len();
        prop_assert_eq!(hash.encode(HashFormat::Base16, false).len(), 2 * n);
        prop_assert_eq!(hash.encode(HashFormat::Base32, false).len(), (8 * n + 4) / 5);
        prop_assert_eq!(hash.encode(HashFormat::Base64, false).len(), 4 * ((n + 2) / 3));
    }

    #[test]
    fn base32_is_lowercase_alphabet(hash in any_hash()) {
        let text = hash.encode(HashFormat::Base32, false);
        prop_assert!(text.bytes().all(|c| nix_hash::encoding::base32::ALPHABET.contains(&c)));
    }

    #[test]
    fn other_lengths_are_rejected(algo in any_algorithm(), len in 0usize..160) {
        prop_assume!(len != algo.base16_len() && len != algo.base32_len() && len != algo.base64_len());
        let text = "0".repeat(len);
        prop_assert!(Hash::parse_non_sri_unprefixed(&text, algo).is_err());
    }

    #[test]
    fn chunking_never_changes_the_digest(
        algo in any_algorithm(),
        data in proptest::collection::vec(any::<u8>(), 0..4096),
        cuts in proptest::collection::vec(any::<prop::sample::Index>(), 0..8),
    ) {
        let mut points: Vec<usize> = cuts.iter().map(|i| i.index(data.len() + 1)).collect();
        points.sort_unstable();

        let mut sink = HashSink::new(algo);
        let mut start = 0;
        for end in points.into_iter().chain(std::iter::once(data.len())) {
            sink.update(&data[start..end]);
            start = end;
        }
        let result = sink.finish();
        prop_assert_eq!(result.hash, hash_string(algo, &data));
        prop_assert_eq!(result.size, data.len() as u64);
    }

    #[test]
    fn snapshot_does_not_disturb_stream(
        algo in any_algorithm(),
        first in proptest::collection::vec(any::<u8>(), 0..2048),
        second in proptest::collection::vec(any::<u8>(), 0..2048),
    ) {
        let mut sink = HashSink::new(algo);
        sink.update(&first);
        let snapshot = sink.current_hash();
        sink.update(&second);
        let result = sink.finish();

        let whole: Vec<u8> = first.iter().chain(second.iter()).copied().collect();
        prop_assert_eq!(snapshot.hash, hash_string(algo, &first));
        prop_assert_eq!(snapshot.size, first.len() as u64);
        prop_assert_eq!(result.hash, hash_string(algo, &whole));
        prop_assert_eq!(result.size, whole.len() as u64);
    }

    #[test]
    fn forked_sinks_are_independent(
        algo in any_algorithm(),
        prefix in proptest::collection::vec(any::<u8>(), 0..512),
        left in proptest::collection::vec(any::<u8>(), 0..512),
        right in proptest::collection::vec(any::<u8>(), 0..512),
    ) {
        let mut sink = HashSink::new(algo);
        sink.update(&prefix);
        let mut fork = sink.clone();
        sink.update(&left);
        fork.update(&right);

        let with = |tail: &[u8]| -> Vec<u8> { prefix.iter().chain(tail).copied().collect() };
        prop_assert_eq!(sink.finish().hash, hash_string(algo, with(&left)));
        prop_assert_eq!(fork.finish().hash, hash_string(algo, with(&right)));
    }

    #[test]
    fn compression_to_own_length_is_identity(hash in any_hash()) {
        prop_assert_eq!(compress_hash(&hash, hash.len()).unwrap(), hash);
    }

    #[test]
    fn compression_preserves_xor_of_all_bytes(hash in any_hash(), size in 1usize..=64) {
        let folded = compress_hash(&hash, size).unwrap();
        let xor_all = |bytes: &[u8]| bytes.iter().fold(0u8, |acc, b| acc ^ b);
        prop_assert_eq!(folded.len(), size);
        prop_assert_eq!(xor_all(folded.as_bytes()), xor_all(hash.as_bytes()));
        prop_assert_eq!(folded.algorithm(), hash.algorithm());
    }
}
