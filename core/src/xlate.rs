use log::warn;

/// Largest palette a 4-bit pixel can address.
pub const MAX_ENTRIES: usize = 16;

/// Maps the characters of the ASCII art to pixel values. A character's
/// position in the table is its value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationTable {
    entries: heapless::Vec<char, MAX_ENTRIES>,
}

impl TranslationTable {
    /// Builds the table from the first line of `text`. Characters past the
    /// sixteenth are dropped.
    pub fn parse(text: &str) -> Self {
        let line = text.lines().next().unwrap_or("");
        let mut entries = heapless::Vec::new();
        for ch in line.chars() {
            if entries.push(ch).is_err() {
                warn!(
                    "Translation line is longer than {} characters, ignoring the rest",
                    MAX_ENTRIES
                );
                break;
            }
        }
        let table = Self { entries };
        for (idx, ch) in table.entries.iter().enumerate() {
            if table.value_of(*ch) != Some(idx as u8) {
                warn!("Character '{}' appears more than once, value {} is unreachable", ch, idx);
            }
        }
        table
    }

    pub fn value_of(&self, ch: char) -> Option<u8> {
        self.entries.iter().position(|&entry| entry == ch).map(|idx| idx as u8)
    }

    pub fn char_of(&self, value: u8) -> Option<char> {
        self.entries.get(value as usize).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
