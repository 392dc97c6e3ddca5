use super::*;
use std::io::Cursor;

#[test]
fn test_crc32_check_value() {
    let hashes = compute_crc32(&mut Cursor::new(b"123456789")).unwrap();
    assert_eq!(hashes.crc32, 0xcbf43926);
    assert_eq!(hashes.crc32_hex(), "cbf43926");
    assert_eq!(hashes.md5, None);
    assert_eq!(hashes.data_size, 9);
}

#[test]
fn test_crc32_md5_check_values() {
    let hashes = compute_crc32_md5(&mut Cursor::new(b"123456789")).unwrap();
    assert_eq!(hashes.crc32, 0xcbf43926);
    assert_eq!(
        hashes.md5.as_deref(),
        Some("25f9e794323b453885f5181f1b624d0b")
    );
}

#[test]
fn test_empty_input() {
    let hashes = compute_crc32_md5(&mut Cursor::new(Vec::new())).unwrap();
    assert_eq!(hashes.crc32, 0);
    assert_eq!(hashes.crc32_hex(), "00000000");
    assert_eq!(
        hashes.md5.as_deref(),
        Some("d41d8cd98f00b204e9800998ecf8427e")
    );
    assert_eq!(hashes.data_size, 0);
}

#[test]
fn test_multi_chunk_matches_one_shot() {
    // Spans several 64KB chunks with a ragged tail
    let data: Vec<u8> = (0..(3 * 64 * 1024 + 123)).map(|i| (i % 251) as u8).collect();

    let hashes = compute_crc32_md5(&mut Cursor::new(&data)).unwrap();
    assert_eq!(hashes.crc32, crc32fast::hash(&data));
    assert_eq!(
        hashes.md5,
        Some(format!("{:x}", md5::compute(&data)))
    );
    assert_eq!(hashes.data_size, data.len() as u64);

    let crc_only = compute_crc32(&mut Cursor::new(&data)).unwrap();
    assert_eq!(crc_only.crc32, hashes.crc32);
}
