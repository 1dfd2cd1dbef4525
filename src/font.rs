//! 5×7 dot-matrix font
//!
//! One byte per glyph column, bit 0 is the top row and bit 6 the bottom row.
//! The table covers printable ASCII (0x20..=0x7E), a block glyph at 0x7F and
//! six German umlauts on the private code points 0x80..=0x85.

/// Columns per glyph
pub const GLYPH_WIDTH: usize = 5;

/// Blank columns between two glyphs
pub const GLYPH_SPACING: usize = 2;

/// Horizontal pitch of one character
pub const PIXELS_PER_CHAR: usize = GLYPH_WIDTH + GLYPH_SPACING;

/// First code point in the table
pub const FIRST_CODE_POINT: u8 = 0x20;

/// Glyph drawn for anything the table does not cover
pub const BLOCK_CODE_POINT: u8 = 0x7F;

/// Number of glyphs in the table
pub const NUM_GLYPHS: usize = 102;

pub type Glyph = [u8; GLYPH_WIDTH];

#[rustfmt::skip]
static FONT: [Glyph; NUM_GLYPHS] = [
    [0x00, 0x00, 0x00, 0x00, 0x00], // space
    [0x00, 0x00, 0x5f, 0x00, 0x00], // !
    [0x00, 0x00, 0x01, 0x00, 0x01], // "
    [0x28, 0x7c, 0x28, 0x7c, 0x28], // #
    [0x24, 0x2a, 0x7f, 0x2a, 0x12], // $
    [0x4c, 0x2c, 0x10, 0x68, 0x64], // %
    [0x30, 0x4e, 0x55, 0x22, 0x40], // &
    [0x00, 0x00, 0x00, 0x01, 0x00], // '
    [0x00, 0x1c, 0x22, 0x41, 0x00], // (
    [0x00, 0x41, 0x22, 0x1c, 0x00], // )
    [0x01, 0x03, 0x01, 0x03, 0x01], // *
    [0x08, 0x08, 0x3e, 0x08, 0x08], // +
    [0x50, 0x30, 0x00, 0x00, 0x00], // ,
    [0x08, 0x08, 0x08, 0x08, 0x08], // -
    [0x60, 0x60, 0x00, 0x00, 0x00], // .
    [0x40, 0x20, 0x10, 0x08, 0x04], // /
    [0x3e, 0x51, 0x49, 0x45, 0x3e], // 0
    [0x00, 0x42, 0x7f, 0x40, 0x00], // 1
    [0x62, 0x51, 0x49, 0x49, 0x46], // 2
    [0x22, 0x41, 0x49, 0x49, 0x36], // 3
    [0x0c, 0x0a, 0x09, 0x7f, 0x08], // 4
    [0x4f, 0x49, 0x49, 0x49, 0x31], // 5
    [0x3e, 0x49, 0x49, 0x49, 0x32], // 6
    [0x03, 0x01, 0x71, 0x09, 0x07], // 7
    [0x36, 0x49, 0x49, 0x49, 0x36], // 8
    [0x26, 0x49, 0x49, 0x49, 0x3e], // 9
    [0x66, 0x66, 0x00, 0x00, 0x00], // :
    [0x56, 0x36, 0x00, 0x00, 0x00], // ;
    [0x00, 0x08, 0x14, 0x22, 0x41], // <
    [0x24, 0x24, 0x24, 0x24, 0x24], // =
    [0x00, 0x41, 0x22, 0x14, 0x08], // >
    [0x02, 0x01, 0x59, 0x09, 0x06], // ?
    [0x3e, 0x41, 0x5d, 0x55, 0x5e], // @
    [0x7c, 0x0a, 0x09, 0x0a, 0x7c], // A
    [0x7f, 0x49, 0x49, 0x49, 0x36], // B
    [0x3e, 0x41, 0x41, 0x41, 0x22], // C
    [0x7f, 0x41, 0x41, 0x22, 0x1c], // D
    [0x7f, 0x49, 0x49, 0x41, 0x41], // E
    [0x7f, 0x09, 0x09, 0x01, 0x01], // F
    [0x3e, 0x41, 0x49, 0x49, 0x7a], // G
    [0x7f, 0x08, 0x08, 0x08, 0x7f], // H
    [0x00, 0x41, 0x7f, 0x41, 0x00], // I
    [0x30, 0x40, 0x40, 0x40, 0x3f], // J
    [0x7f, 0x08, 0x0c, 0x12, 0x61], // K
    [0x7f, 0x40, 0x40, 0x40, 0x40], // L
    [0x7f, 0x02, 0x1c, 0x02, 0x7f], // M
    [0x7f, 0x02, 0x04, 0x08, 0x7f], // N
    [0x3e, 0x41, 0x41, 0x41, 0x3e], // O
    [0x7f, 0x09, 0x09, 0x09, 0x06], // P
    [0x3e, 0x41, 0x51, 0x61, 0x7e], // Q
    [0x7f, 0x09, 0x09, 0x09, 0x76], // R
    [0x26, 0x49, 0x49, 0x49, 0x32], // S
    [0x01, 0x01, 0x7f, 0x01, 0x01], // T
    [0x3f, 0x40, 0x40, 0x40, 0x3f], // U
    [0x1f, 0x20, 0x40, 0x20, 0x1f], // V
    [0x7f, 0x40, 0x38, 0x40, 0x7f], // W
    [0x63, 0x14, 0x08, 0x14, 0x63], // X
    [0x03, 0x04, 0x78, 0x04, 0x03], // Y
    [0x61, 0x51, 0x49, 0x45, 0x43], // Z
    [0x00, 0x7f, 0x41, 0x41, 0x00], // [
    [0x04, 0x08, 0x10, 0x20, 0x40], // \
    [0x00, 0x41, 0x41, 0x7f, 0x00], // ]
    [0x00, 0x04, 0x02, 0x01, 0x02], // ^
    [0x40, 0x40, 0x40, 0x40, 0x40], // _
    [0x00, 0x00, 0x01, 0x02, 0x00], // `
    [0x20, 0x54, 0x54, 0x54, 0x78], // a
    [0x7f, 0x44, 0x44, 0x44, 0x38], // b
    [0x38, 0x44, 0x44, 0x44, 0x08], // c
    [0x38, 0x44, 0x44, 0x44, 0x7f], // d
    [0x38, 0x54, 0x54, 0x54, 0x18], // e
    [0x08, 0x7e, 0x09, 0x09, 0x02], // f
    [0x48, 0x54, 0x54, 0x54, 0x38], // g
    [0x7f, 0x08, 0x08, 0x08, 0x70], // h
    [0x00, 0x48, 0x7a, 0x40, 0x00], // i
    [0x20, 0x40, 0x40, 0x48, 0x3a], // j
    [0x7f, 0x10, 0x28, 0x44, 0x00], // k
    [0x3f, 0x40, 0x40, 0x00, 0x00], // l
    [0x7c, 0x04, 0x38, 0x04, 0x78], // m
    [0x7c, 0x04, 0x04, 0x04, 0x78], // n
    [0x38, 0x44, 0x44, 0x44, 0x38], // o
    [0x7c, 0x14, 0x14, 0x14, 0x08], // p
    [0x08, 0x14, 0x14, 0x7c, 0x40], // q
    [0x7c, 0x04, 0x04, 0x04, 0x08], // r
    [0x48, 0x54, 0x54, 0x54, 0x24], // s
    [0x04, 0x04, 0x7f, 0x44, 0x44], // t
    [0x3c, 0x40, 0x40, 0x40, 0x7c], // u
    [0x1c, 0x20, 0x40, 0x20, 0x1c], // v
    [0x7c, 0x40, 0x38, 0x40, 0x7c], // w
    [0x44, 0x28, 0x10, 0x28, 0x44], // x
    [0x0c, 0x50, 0x50, 0x50, 0x3c], // y
    [0x44, 0x64, 0x54, 0x4c, 0x44], // z
    [0x00, 0x08, 0x36, 0x41, 0x00], // {
    [0x00, 0x00, 0x7f, 0x00, 0x00], // |
    [0x00, 0x41, 0x36, 0x08, 0x00], // }
    [0x00, 0x04, 0x02, 0x04, 0x08], // ~
    [0x7f, 0x41, 0x41, 0x41, 0x7f], // block
    [0x7d, 0x0a, 0x09, 0x0a, 0x7d], // Ä
    [0x3f, 0x41, 0x41, 0x41, 0x3f], // Ö
    [0x3d, 0x40, 0x40, 0x40, 0x3d], // Ü
    [0x20, 0x55, 0x54, 0x55, 0x78], // ä
    [0x38, 0x45, 0x44, 0x45, 0x38], // ö
    [0x3c, 0x41, 0x40, 0x41, 0x7c], // ü
];

/// Glyph for a decoded code point
pub fn glyph(code_point: u8) -> &'static Glyph {
    let index = code_point
        .checked_sub(FIRST_CODE_POINT)
        .map(usize::from)
        .filter(|&index| index < NUM_GLYPHS)
        .unwrap_or(usize::from(BLOCK_CODE_POINT - FIRST_CODE_POINT));
    &FONT[index]
}

/// Column `column` of the glyph for `code_point`; blank in the spacing
pub fn glyph_column(code_point: u8, column: usize) -> u8 {
    glyph(code_point).get(column).copied().unwrap_or(0)
}
