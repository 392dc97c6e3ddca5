use super::*;

#[test]
fn test_text_fields() {
    let cases: [(&str, &str, fn(&GameRecord) -> &str); 9] = [
        ("name", "Test Game", |g| g.name.as_str()),
        ("description", "A test", |g| g.description.as_str()),
        ("genre", "Action", |g| g.genre.as_str()),
        ("developer", "Sega", |g| g.developer.as_str()),
        ("publisher", "Sega", |g| g.publisher.as_str()),
        ("franchise", "Sonic", |g| g.franchise.as_str()),
        ("esrb_rating", "E", |g| g.esrb_rating.as_str()),
        ("serial", "MK-27000", |g| g.serial.as_str()),
        ("rom_name", "sonic.sms", |g| g.rom_name.as_str()),
    ];

    for (key, value, get) in cases {
        let mut game = GameRecord::default();
        apply_field(&mut game, key, value.as_bytes());
        assert_eq!(get(&game), value, "key {key}");
    }
}

#[test]
fn test_numeric_fields_are_big_endian() {
    let mut game = GameRecord::default();
    apply_field(&mut game, "crc", &[0x12, 0x34, 0x56, 0x78]);
    apply_field(&mut game, "size", &[0x00, 0x04, 0x00, 0x00]);
    apply_field(&mut game, "releasemonth", &[6]);
    apply_field(&mut game, "releaseyear", &[0x07, 0xc7]);

    assert_eq!(game.crc32, 0x12345678);
    assert_eq!(game.size, 262_144);
    assert_eq!(game.release_month, 6);
    assert_eq!(game.release_year, 1991);
}

#[test]
fn test_size_uses_all_eight_bytes() {
    let mut game = GameRecord::default();
    apply_field(&mut game, "size", &[0x01, 0, 0, 0, 0, 0, 0, 0x02]);
    assert_eq!(game.size, 0x0100_0000_0000_0002);
}

#[test]
fn test_md5_rendered_as_lowercase_hex() {
    let mut game = GameRecord::default();
    let raw = [
        0xde, 0xad, 0xbe, 0xef, 0x00, 0x01, 0x02, 0x03, 0x0a, 0x0b, 0x0c, 0x0d, 0xf0, 0xf1, 0xf2,
        0xf3,
    ];
    apply_field(&mut game, "md5", &raw);
    assert_eq!(game.md5, "deadbeef000102030a0b0c0df0f1f2f3");
    assert_eq!(game.md5.len(), 32);
}

#[test]
fn test_unknown_key_is_ignored() {
    let mut game = GameRecord::default();
    apply_field(&mut game, "unknown_field", b"value");
    apply_field(&mut game, "sha1", &[0xaa; 20]);
    assert_eq!(game, GameRecord::default());
}

#[test]
fn test_keys_are_case_sensitive() {
    let mut game = GameRecord::default();
    apply_field(&mut game, "Name", b"Sonic");
    assert!(game.name.is_empty());
}

#[test]
fn test_invalid_utf8_is_replaced() {
    let mut game = GameRecord::default();
    apply_field(&mut game, "name", &[b'A', 0xff, b'B']);
    assert_eq!(game.name, "A\u{fffd}B");
}

#[test]
fn test_be_uint() {
    assert_eq!(be_uint(&[]), 0);
    assert_eq!(be_uint(&[0x7f]), 0x7f);
    assert_eq!(be_uint(&[0x01, 0x00]), 256);
    assert_eq!(be_uint(&[0xff; 8]), u64::MAX);
    // Leading zero bytes don't count against the width
    assert_eq!(be_uint(&[0, 0, 0, 0, 0, 0, 0, 0, 0, 0x2a]), 42);
    assert_eq!(be_uint(&[0x01; 9]), u64::MAX);
}

#[test]
fn test_be_uint32_saturates() {
    assert_eq!(be_uint32(&[0xde, 0xad, 0xbe, 0xef]), 0xdeadbeef);
    assert_eq!(be_uint32(&[0x01, 0x00, 0x00, 0x00, 0x00]), u32::MAX);
}

#[test]
fn test_hex_lower() {
    assert_eq!(hex_lower(&[]), "");
    assert_eq!(hex_lower(&[0x00, 0x0f, 0xab]), "000fab");
}
