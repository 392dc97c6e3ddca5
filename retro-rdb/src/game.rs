use serde::Serialize;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A single game entry decoded from an RDB file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GameRecord {
    /// Full No-Intro name (e.g., `"Sonic the Hedgehog (USA, Europe)"`)
    pub name: String,
    pub description: String,
    pub genre: String,
    pub developer: String,
    pub publisher: String,
    pub franchise: String,
    pub esrb_rating: String,
    /// ROM filename
    pub rom_name: String,
    pub serial: String,
    pub release_month: u32,
    pub release_year: u32,
    /// ROM size in bytes
    pub size: u64,
    /// CRC32 of the ROM data, 0 when absent
    pub crc32: u32,
    /// MD5 of the ROM data (lowercase hex), empty when absent
    pub md5: String,
}

impl GameRecord {
    /// Whether the record carries enough to be worth keeping: a name or a
    /// checksum. Records without either are dropped by the assembler.
    pub fn has_identity(&self) -> bool {
        !self.name.is_empty() || self.crc32 != 0
    }

    /// Release date for display, e.g. `"June 1991"`.
    ///
    /// Returns just the year when the month is missing or out of range, and
    /// `None` when there is no year.
    pub fn release_date(&self) -> Option<String> {
        if self.release_year == 0 {
            return None;
        }
        match self.release_month {
            1..=12 => Some(format!(
                "{} {}",
                MONTH_NAMES[self.release_month as usize - 1],
                self.release_year
            )),
            _ => Some(self.release_year.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_identity() {
        assert!(!GameRecord::default().has_identity());

        let named = GameRecord {
            name: "Wonder Boy".to_string(),
            ..Default::default()
        };
        assert!(named.has_identity());

        let checksummed = GameRecord {
            crc32: 0xdeadbeef,
            ..Default::default()
        };
        assert!(checksummed.has_identity());

        let md5_only = GameRecord {
            md5: "00112233445566778899aabbccddeeff".to_string(),
            ..Default::default()
        };
        assert!(!md5_only.has_identity());
    }

    #[test]
    fn test_release_date() {
        let mut game = GameRecord::default();
        assert_eq!(game.release_date(), None);

        game.release_month = 6;
        assert_eq!(game.release_date(), None);

        game.release_year = 1991;
        assert_eq!(game.release_date().as_deref(), Some("June 1991"));

        game.release_month = 1;
        assert_eq!(game.release_date().as_deref(), Some("January 1991"));

        game.release_month = 12;
        assert_eq!(game.release_date().as_deref(), Some("December 1991"));
    }

    #[test]
    fn test_release_date_year_only() {
        let mut game = GameRecord {
            release_year: 1987,
            ..Default::default()
        };
        assert_eq!(game.release_date().as_deref(), Some("1987"));

        game.release_month = 13;
        assert_eq!(game.release_date().as_deref(), Some("1987"));
    }
}
