use hash_array::{
    hash::{crc32, crc32_with_seed, djb2a, fnv1a, murmur3_32, murmur3_32_const},
    hash32, Hash32, HashFunction,
};
use test_log::test;

const QUICK_BROWN_FOX: &str = "The quick brown fox jumps over the lazy dog";

#[test]
fn murmur3_reference_vectors() {
    for (input, seed, expected) in [
        ("", 0, 0),
        ("", 1, 0x514E_28B7),
        ("", u32::MAX, 0x81F1_6F39),
        ("test", 0, 0xBA6B_D213),
        ("Hello, world!", 0, 0xC036_3E43),
        ("Hello, world!", 0x9747_B28C, 0x2488_4CBA),
        ("a", 0x9747_B28C, 0x7FA0_9EA6),
        ("abc", 0x9747_B28C, 0xC84A_62DD),
        ("abcd", 0x9747_B28C, 0xF047_8627),
        (QUICK_BROWN_FOX, 0x9747_B28C, 0x2FA8_26CD),
        ("ππππππππ", 0x9747_B28C, 0xD580_63C1),
    ] {
        assert_eq!(expected, murmur3_32(input.as_bytes(), seed), "{input:?}");
        assert_eq!(expected, murmur3_32_const(input.as_bytes(), seed), "{input:?}");
    }
}

#[test]
fn murmur3_high_bytes_are_unsigned() {
    assert_eq!(0xBF12_A026, murmur3_32(&[0xFF, 0xFF, 0xFF], 0));
}

#[test]
fn simple_hash_reference_vectors() {
    assert_eq!(0x3BAB_EA14, djb2a(b"123456789"));
    assert_eq!(0xBB86_B11C, fnv1a(b"123456789"));
    assert_eq!(0xCBF4_3926, crc32(b"123456789"));

    assert_eq!(0x0059_601A, djb2a(&[0xFF, 0x80]));
    assert_eq!(0xEE1E_EA4A, fnv1a(&[0xFF, 0x80]));
    assert_eq!(0x3F45_6CAD, crc32(&[0xFF, 0x80]));
}

#[test]
fn crc32_continues_from_previous_crc() {
    assert_eq!(crc32(b"123456789"), crc32_with_seed(b"456789", crc32(b"123")));
}

#[test]
fn hash_function_matches_free_functions() {
    let input = QUICK_BROWN_FOX.as_bytes();

    assert_eq!(djb2a(input), HashFunction::from(hash_array::hash::Djb2a).hash32(input));
    assert_eq!(fnv1a(input), HashFunction::from(hash_array::hash::Fnv1a).hash32(input));
    assert_eq!(crc32(input), HashFunction::from(hash_array::hash::Crc32).hash32(input));
    assert_eq!(murmur3_32(input, 0), HashFunction::default().hash32(input));
}

#[test]
fn hash_literal_dispatch() {
    const TEST: u32 = hash32!("test");
    const HELLO: u32 = hash32!("Hello, world!");

    let classify = |s: &str| match murmur3_32(s.as_bytes(), 0) {
        TEST => "test",
        HELLO => "hello",
        _ => "other",
    };

    assert_eq!(0xBA6B_D213, TEST);
    assert_eq!("test", classify("test"));
    assert_eq!("hello", classify("Hello, world!"));
    assert_eq!("other", classify("Hello, world"));
}

#[test]
fn hash_literal_long_input() {
    const LONG: u32 = hash32!(
        "Lorem ipsum dolor sit amet, consectetur adipiscing elit sed. \
         Lorem ipsum dolor sit amet, consectetur adipiscing elit sed. \
         Lorem ipsum dolor sit amet, consectetur adipiscing elit sed. \
         Lorem ipsum dolor sit amet, consectetur adipiscing elit sed. \
         Lorem ipsum dolor sit amet, consectetur adipiscing elit sed. \
         Lorem ipsum dolor sit amet, consectetur adipiscing elit sed. \
         Lorem ipsum dolor sit amet, consectetur adipiscing elit sed. \
         Lorem ipsum dolor sit amet, consectetur adipiscing elit sed. \
         Lorem ipsum dolor sit amet, consectetur adipiscing elit sed. \
         Lorem ipsum dolor sit amet, consectetur adipiscing elit sed. \
         Lorem ipsum dolor sit amet, consectetur adipiscing elit sed. \
         Lorem ipsum dolor sit amet, consectetur adipiscing elit sed. "
    );

    let text = "Lorem ipsum dolor sit amet, consectetur adipiscing elit sed. ".repeat(12);
    assert_eq!(732, text.len());
    assert_eq!(murmur3_32(text.as_bytes(), 0), LONG);
}
