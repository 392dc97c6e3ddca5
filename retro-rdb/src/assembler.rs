//! Record assembly: pairs decoded fields into keys and values and groups them
//! into [`GameRecord`]s at map boundaries.

use crate::decoder::{Field, FieldDecoder};
use crate::fields::apply_field;
use crate::format::HEADER_SIZE;
use crate::game::GameRecord;

/// Which half of a key/value pair the next field is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssemblerState {
    ExpectingKey,
    ExpectingValue,
}

/// Builds records incrementally from decoded fields.
#[derive(Debug)]
pub struct RecordAssembler {
    state: AssemblerState,
    pending_key: String,
    current: GameRecord,
    games: Vec<GameRecord>,
}

impl Default for RecordAssembler {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordAssembler {
    pub fn new() -> Self {
        Self {
            state: AssemblerState::ExpectingKey,
            pending_key: String::new(),
            current: GameRecord::default(),
            games: Vec::new(),
        }
    }

    pub fn state(&self) -> AssemblerState {
        self.state
    }

    /// Number of records finished so far.
    pub fn finished(&self) -> usize {
        self.games.len()
    }

    /// Handle a map header: flush the record in progress and start a new one.
    pub fn begin_record(&mut self) {
        self.flush();
        self.state = AssemblerState::ExpectingKey;
    }

    /// Handle a key or value payload, then flip to the other half of the pair.
    pub fn push_field(&mut self, payload: &[u8]) {
        self.state = match self.state {
            AssemblerState::ExpectingKey => {
                self.pending_key = String::from_utf8_lossy(payload).into_owned();
                AssemblerState::ExpectingValue
            }
            AssemblerState::ExpectingValue => {
                apply_field(&mut self.current, &self.pending_key, payload);
                AssemblerState::ExpectingKey
            }
        };
    }

    /// Flush the last record and return everything in source order.
    pub fn finish(mut self) -> Vec<GameRecord> {
        self.flush();
        self.games
    }

    /// Keep the current record if it has a name or checksum, then reset.
    fn flush(&mut self) {
        let game = std::mem::take(&mut self.current);
        if game.has_identity() {
            self.games.push(game);
        }
    }
}

/// Decode every record in an RDB buffer.
///
/// Stops at a nil terminator, the end of the buffer, a truncated field or an
/// unsupported tag. Records completed before the stop are kept, and so is the
/// one in progress if it already has a name or checksum.
pub fn assemble(data: &[u8]) -> Vec<GameRecord> {
    if data.len() <= HEADER_SIZE {
        return Vec::new();
    }

    let mut decoder = FieldDecoder::new(data);
    let mut assembler = RecordAssembler::new();

    loop {
        match decoder.next_field() {
            Field::MapStart => assembler.begin_record(),
            Field::Marker => {}
            Field::Value(payload) => assembler.push_field(payload),
            Field::End => break,
            Field::Truncated { offset } => {
                log::debug!(
                    "RDB truncated at offset {offset:#x} ({} bytes total), keeping {} records",
                    data.len(),
                    assembler.finished()
                );
                break;
            }
            Field::Unsupported { tag, offset } => {
                log::warn!(
                    "Unsupported RDB tag {tag:#04x} at offset {offset:#x}, stopping after {} records",
                    assembler.finished()
                );
                break;
            }
        }
    }

    assembler.finish()
}

#[cfg(test)]
#[path = "tests/assembler_tests.rs"]
mod tests;
