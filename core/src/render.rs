use alloc::string::String;
use core::fmt::Write;

use crate::mode::Mode;

/// Extension of generated pattern sources.
pub const EXTENSION: &str = "gen_data";

/// 16-bit words per output line.
const WORDS_PER_LINE: usize = 8;

/// Details for the comment header of a generated file.
pub struct Header<'a> {
    pub name: &'a str,
    pub mode: Mode,
    /// Formatted `YYYY-MM-DD HH:MM:SS`.
    pub timestamp: &'a str,
    pub author: &'a str,
}

pub fn file_name(name: &str) -> String {
    let mut file = String::from(name);
    file.push('.');
    file.push_str(EXTENSION);
    file
}

/// Renders `data` as a C `uint16_t` array, pairing bytes little-endian.
pub fn render(header: &Header, data: &[u8]) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_header(&mut out, header);
    let _ = write_words(&mut out, header.name, data);
    out
}

fn write_header(out: &mut impl Write, header: &Header) -> core::fmt::Result {
    writeln!(out, "// {}", file_name(header.name))?;
    writeln!(out, "// HuC6270 {} data", header.mode.repr())?;
    writeln!(out, "//")?;
    writeln!(out, "// Generated on {}", header.timestamp)?;
    writeln!(out, "// Generated by the cvtgfx script by {}", header.author)?;
    writeln!(out, "//")?;
    writeln!(out)
}

fn write_words(out: &mut impl Write, name: &str, data: &[u8]) -> core::fmt::Result {
    writeln!(out, "const uint16_t {name}[] = {{")?;
    let count = data.len().div_ceil(2);
    for (idx, pair) in data.chunks(2).enumerate() {
        if idx % WORDS_PER_LINE == 0 {
            out.write_str("  ")?;
        }
        let word = u16::from_le_bytes([pair[0], pair.get(1).copied().unwrap_or(0)]);
        write!(out, "0x{word:04X}")?;
        if idx + 1 != count {
            out.write_char(',')?;
        }
        if (idx + 1) % WORDS_PER_LINE == 0 {
            out.write_char('\n')?;
        }
    }
    writeln!(out, "}};")
}
