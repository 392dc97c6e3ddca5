use super::*;
use retro_rdb::Database;

const ROM: &[u8] = b"SEGA MASTER SYSTEM TEST ROM DATA";

fn sonic(crc32: u32) -> GameRecord {
    GameRecord {
        name: "Sonic the Hedgehog (USA, Europe)".to_string(),
        developer: "Ancient".to_string(),
        publisher: "Sega".to_string(),
        genre: "Platform".to_string(),
        franchise: "Sonic".to_string(),
        esrb_rating: "E".to_string(),
        release_month: 10,
        release_year: 1991,
        crc32,
        md5: "0123456789abcdef0123456789abcdef".to_string(),
        ..Default::default()
    }
}

fn store_with(games: Vec<GameRecord>) -> MetadataStore {
    MetadataStore::from_database("test.rdb", Database::from_games(games))
}

#[test]
fn test_apply_metadata_fills_empty_fields() {
    let mut entry = LibraryEntry::new("b519e833", "roms/sonic.sms");
    entry.apply_metadata(&sonic(0xb519e833));

    assert!(entry.matched);
    assert_eq!(entry.name, "Sonic the Hedgehog (USA, Europe)");
    assert_eq!(entry.display_name, "Sonic the Hedgehog");
    assert_eq!(entry.region, "us");
    assert_eq!(entry.developer, "Ancient");
    assert_eq!(entry.publisher, "Sega");
    assert_eq!(entry.genre, "Platform");
    assert_eq!(entry.franchise, "Sonic");
    assert_eq!(entry.esrb_rating, "E");
    assert_eq!(entry.release_date, "October 1991");
    assert_eq!(entry.md5, "0123456789abcdef0123456789abcdef");
}

#[test]
fn test_apply_metadata_keeps_existing_values() {
    let mut entry = LibraryEntry {
        display_name: "My Sonic".to_string(),
        region: "jp".to_string(),
        release_date: "1990".to_string(),
        ..LibraryEntry::new("b519e833", "sonic.sms")
    };
    entry.apply_metadata(&sonic(0xb519e833));

    assert_eq!(entry.display_name, "My Sonic");
    assert_eq!(entry.region, "jp");
    assert_eq!(entry.release_date, "1990");
    assert_eq!(entry.name, "Sonic the Hedgehog (USA, Europe)");
}

#[test]
fn test_apply_metadata_without_release_year() {
    let mut game = sonic(1);
    game.release_year = 0;
    let mut entry = LibraryEntry::new("00000001", "a.sms");
    entry.apply_metadata(&game);
    assert!(entry.release_date.is_empty());
}

#[test]
fn test_filename_fallback() {
    let mut entry = LibraryEntry::new("deadbeef", "Wonder Boy (Europe) (Rev 1).sms");
    entry.apply_filename_fallback("Wonder Boy (Europe) (Rev 1).sms");
    assert_eq!(entry.name, "Wonder Boy (Europe) (Rev 1)");
    assert_eq!(entry.display_name, "Wonder Boy");
    assert!(!entry.matched);
}

#[test]
fn test_clean_display_name() {
    assert_eq!(clean_display_name("Zillion (Japan).sms"), "Zillion");
    assert_eq!(clean_display_name("Wonder Boy.sms"), "Wonder Boy");
    assert_eq!(clean_display_name("noext"), "noext");
}

#[test]
fn test_identify_bytes_match() {
    let crc = crc32fast::hash(ROM);
    let store = store_with(vec![sonic(crc)]);

    let entry = identify_bytes(ROM, "sonic.sms", &store, IdentifyOptions::default()).unwrap();
    assert!(entry.matched);
    assert_eq!(entry.crc32, format!("{crc:08x}"));
    assert_eq!(entry.display_name, "Sonic the Hedgehog");
    // Database MD5 is used without re-hashing
    assert_eq!(entry.md5, "0123456789abcdef0123456789abcdef");
}

#[test]
fn test_identify_bytes_prefers_database_md5() {
    let crc = crc32fast::hash(ROM);
    let store = store_with(vec![sonic(crc)]);

    let options = IdentifyOptions { compute_md5: true };
    let entry = identify_bytes(ROM, "sonic.sms", &store, options).unwrap();
    assert_eq!(entry.md5, "0123456789abcdef0123456789abcdef");
}

#[test]
fn test_identify_bytes_no_match() {
    let store = store_with(vec![sonic(0x1)]);

    let entry = identify_bytes(ROM, "Homebrew (World).sms", &store, IdentifyOptions::default())
        .unwrap();
    assert!(!entry.matched);
    assert_eq!(entry.name, "Homebrew (World)");
    assert_eq!(entry.display_name, "Homebrew");
    assert!(entry.region.is_empty());
    assert!(entry.md5.is_empty());
}

#[test]
fn test_identify_bytes_computes_md5_when_unknown() {
    let store = MetadataStore::unloaded("missing.rdb");
    let options = IdentifyOptions { compute_md5: true };

    let entry = identify_bytes(ROM, "rom.bin", &store, options).unwrap();
    assert!(!entry.matched);
    assert_eq!(entry.md5, format!("{:x}", md5::compute(ROM)));
}
