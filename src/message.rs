//! Message decoding
//!
//! Messages arrive URL-encoded from the command interface, possibly with raw
//! UTF-8 umlauts. They are decoded into one byte per glyph, with the umlauts
//! moved onto the private code points of the font.

use heapless::Vec;

use crate::font::BLOCK_CODE_POINT;

/// Longest message that is kept; the rest is cut off
pub const MAX_MESSAGE_LEN: usize = 128;

/// Lead byte of the two-byte UTF-8 sequences for Latin-1 letters
const UTF8_LATIN1_LEAD: u8 = 0xC3;

/// Decoded message, one font code point per character
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Message {
    code_points: Vec<u8, MAX_MESSAGE_LEN>,
}

impl Message {
    pub const fn new() -> Self {
        Self {
            code_points: Vec::new(),
        }
    }

    /// Decode a message as received from the command interface
    ///
    /// `%XX` escapes are resolved, `Ä Ö Ü ä ö ü` map to `0x80..=0x85`, other
    /// two-byte Latin-1 sequences map to the block glyph. A truncated or
    /// malformed escape ends the message; `%00` decodes to code point 0.
    pub fn decode(raw: &[u8]) -> Self {
        let mut message = Self::new();
        let mut i = 0;
        while i < raw.len() {
            let code_point = match raw[i] {
                b'%' => {
                    let Some(byte) = percent_escape(raw.get(i + 1..i + 3)) else {
                        break;
                    };
                    i += 2;
                    byte
                }
                UTF8_LATIN1_LEAD => {
                    let Some(&second) = raw.get(i + 1) else {
                        break;
                    };
                    i += 1;
                    umlaut_code_point(second)
                }
                byte => byte,
            };
            if message.code_points.push(code_point).is_err() {
                break;
            }
            i += 1;
        }
        message
    }

    /// Build a message from already decoded code points
    pub fn from_code_points(code_points: &[u8]) -> Self {
        let len = code_points.len().min(MAX_MESSAGE_LEN);
        let mut message = Self::new();
        // Cannot fail, len is within capacity
        let _ = message.code_points.extend_from_slice(&code_points[..len]);
        message
    }

    pub fn code_points(&self) -> &[u8] {
        &self.code_points
    }

    pub fn len(&self) -> usize {
        self.code_points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.code_points.is_empty()
    }

    pub fn clear(&mut self) {
        self.code_points.clear();
    }
}

/// Byte encoded by the two digits after a `%`
fn percent_escape(digits: Option<&[u8]>) -> Option<u8> {
    let &[high, low] = digits? else {
        return None;
    };
    Some((hex_digit(high)? << 4) | hex_digit(low)?)
}

const fn hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'A'..=b'F' => Some(c - b'A' + 10),
        b'a'..=b'f' => Some(c - b'a' + 10),
        _ => None,
    }
}

const fn umlaut_code_point(second: u8) -> u8 {
    match second {
        0x84 => 0x80, // Ä
        0x96 => 0x81, // Ö
        0x9C => 0x82, // Ü
        0xA4 => 0x83, // ä
        0xB6 => 0x84, // ö
        0xBC => 0x85, // ü
        _ => BLOCK_CODE_POINT,
    }
}
