use proptest::prelude::*;

use snapb_core::{compress_to_vec, decompress, decompress_to_vec, max_compressed_len};

proptest! {
    /// Arbitrary byte vectors round-trip exactly and respect the worst-case
    /// length bound.
    #[test]
    fn prop_roundtrip(data in proptest::collection::vec(any::<u8>(), 0..20_000)) {
        let compressed = compress_to_vec(&data).unwrap();
        prop_assert!(compressed.len() <= max_compressed_len(data.len()));
        let restored = decompress_to_vec(&compressed).unwrap();
        prop_assert_eq!(restored, data);
    }

    /// Runs of a single byte exercise the self-overlapping copy path at
    /// every length.
    #[test]
    fn prop_single_byte_runs_roundtrip(byte in any::<u8>(), len in 0usize..100_000) {
        let data = vec![byte; len];
        let restored = decompress_to_vec(&compress_to_vec(&data).unwrap()).unwrap();
        prop_assert_eq!(restored, data);
    }

    /// Garbage input to the decoder returns an error or a value, never a
    /// panic or out-of-bounds access.
    #[test]
    fn prop_decoder_survives_garbage(data in proptest::collection::vec(any::<u8>(), 0..2_048)) {
        let mut out = [0u8; 4_096];
        let _ = decompress(&data, &mut out);
    }
}
