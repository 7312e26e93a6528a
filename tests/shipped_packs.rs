//! The eleven shipped packs: authoring invariants, the binary layout and the
//! sentences they spell.

use chronocode_core::codec::{self, PACK_SIZE, WORD_BLOCK_LEN};
use chronocode_core::languages;
use chronocode_core::render::GridCanvas;
use chronocode_core::{FormatError, LanguageId, PhraseResolver};
use proptest::prelude::*;

#[test]
fn every_pack_validates() {
    for pack in languages::all() {
        if let Err(e) = pack.validate() {
            panic!("{} failed validation: {}", pack.id(), e);
        }
    }
}

#[test]
fn every_pack_survives_the_codec() {
    for pack in languages::all() {
        let bytes = codec::encode(&pack);
        assert_eq!(bytes.len(), PACK_SIZE);
        let decoded = codec::decode(pack.id(), &bytes)
            .unwrap_or_else(|e| panic!("{} did not decode: {}", pack.id(), e));
        assert_eq!(decoded, pack, "{} changed in transit", pack.id());
    }
}

#[test]
fn interval_block_follows_the_words() {
    let pack = languages::builtin(LanguageId::EnUs);
    let bytes = codec::encode(&pack);
    // row 0 of en_US: no carry, IT IS
    assert_eq!(&bytes[WORD_BLOCK_LEN..WORD_BLOCK_LEN + 5], &[0, 13, 14, 0, 0]);
    // row 10: carry, A QUARTER TO
    let row10 = WORD_BLOCK_LEN + 10 * 5;
    assert_eq!(&bytes[row10..row10 + 5], &[1, 15, 18, 22, 0]);
}

#[test]
fn short_buffers_are_rejected() {
    let bytes = codec::encode(&languages::builtin(LanguageId::SvSe));
    assert!(matches!(
        codec::decode(LanguageId::SvSe, &bytes[..PACK_SIZE - 1]),
        Err(FormatError::Size { expected: PACK_SIZE, actual }) if actual == PACK_SIZE - 1
    ));
}

#[test]
fn every_language_says_something_at_every_minute() {
    let resolver = PhraseResolver::default();
    for pack in languages::all() {
        for hour in 0..24 {
            for minute in 0..60 {
                let resolved = resolver.resolve(&pack, hour, minute);
                let text = GridCanvas::compose(&pack, &resolved.active, false).lit_text();
                assert!(!text.is_empty(), "{} {}:{:02} is dark", pack.id(), hour, minute);
            }
        }
    }
}

#[test]
fn english_sentences() {
    let pack = languages::builtin(LanguageId::EnUs);
    let resolver = PhraseResolver::default();
    let say = |hour, minute| {
        let resolved = resolver.resolve(&pack, hour, minute);
        GridCanvas::compose(&pack, &resolved.active, false).lit_text()
    };
    assert_eq!(say(15, 3), "IT IS THREE OCLOCK");
    assert_eq!(say(14, 47), "IT IS A QUARTER TO THREE");
    assert_eq!(say(0, 30), "IT IS HALF PAST TWELVE");
    assert_eq!(say(23, 55), "IT IS FIVE TO TWELVE");
}

proptest! {
    #[test]
    fn decode_never_panics(bytes in proptest::collection::vec(any::<u8>(), PACK_SIZE)) {
        let _ = codec::decode(LanguageId::EnUs, &bytes);
    }

    #[test]
    fn corrupted_interval_bytes_are_caught(offset in 0usize..65, value in 54u8..=255) {
        let mut bytes = codec::encode(&languages::builtin(LanguageId::NlNl));
        // every fifth byte is a carry flag, the rest are word references
        prop_assume!(offset % 5 != 0);
        bytes[WORD_BLOCK_LEN + offset] = value;
        let is_index_error = matches!(
            codec::decode(LanguageId::NlNl, &bytes),
            Err(FormatError::WordIndexOutOfRange { .. })
        );
        prop_assert!(is_index_error);
    }
}
