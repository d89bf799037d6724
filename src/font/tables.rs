// src/font/tables.rs

//! Static 8x8 glyph bitmaps, one table per covered codepoint range.
//!
//! Row `i` of a glyph is one byte; bit `j` (LSB = leftmost) is the pixel at
//! column `j`. The range dispatch over these tables lives in the parent
//! module.

/// Basic Latin, U+0000..=U+007F. Glyph 0 doubles as the fallback blank.
#[rustfmt::skip]
pub static BASIC: [[u8; 8]; 128] = [
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // U+0000
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // U+0001
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // U+0002
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // U+0003
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // U+0004
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // U+0005
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // U+0006
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // U+0007
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // U+0008
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // U+0009
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // U+000A
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // U+000B
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // U+000C
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // U+000D
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // U+000E
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // U+000F
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // U+0010
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // U+0011
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // U+0012
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // U+0013
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // U+0014
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // U+0015
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // U+0016
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // U+0017
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // U+0018
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // U+0019
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // U+001A
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // U+001B
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // U+001C
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // U+001D
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // U+001E
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // U+001F
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // U+0020 ' '
    [0x18, 0x3C, 0x3C, 0x18, 0x18, 0x00, 0x18, 0x00], // U+0021 '!'
    [0x36, 0x36, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // U+0022 '"'
    [0x36, 0x36, 0x7F, 0x36, 0x7F, 0x36, 0x36, 0x00], // U+0023 '#'
    [0x0C, 0x3E, 0x03, 0x1E, 0x30, 0x1F, 0x0C, 0x00], // U+0024 '$'
    [0x00, 0x63, 0x33, 0x18, 0x0C, 0x66, 0x63, 0x00], // U+0025 '%'
    [0x1C, 0x36, 0x1C, 0x6E, 0x3B, 0x33, 0x6E, 0x00], // U+0026 '&'
    [0x06, 0x06, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00], // U+0027 '''
    [0x18, 0x0C, 0x06, 0x06, 0x06, 0x0C, 0x18, 0x00], // U+0028 '('
    [0x06, 0x0C, 0x18, 0x18, 0x18, 0x0C, 0x06, 0x00], // U+0029 ')'
    [0x00, 0x66, 0x3C, 0xFF, 0x3C, 0x66, 0x00, 0x00], // U+002A '*'
    [0x00, 0x0C, 0x0C, 0x3F, 0x0C, 0x0C, 0x00, 0x00], // U+002B '+'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C, 0x06], // U+002C ','
    [0x00, 0x00, 0x00, 0x3F, 0x00, 0x00, 0x00, 0x00], // U+002D '-'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C, 0x00], // U+002E '.'
    [0x60, 0x30, 0x18, 0x0C, 0x06, 0x03, 0x01, 0x00], // U+002F '/'
    [0x3E, 0x63, 0x73, 0x7B, 0x6F, 0x67, 0x3E, 0x00], // U+0030 '0'
    [0x0C, 0x0E, 0x0C, 0x0C, 0x0C, 0x0C, 0x3F, 0x00], // U+0031 '1'
    [0x1E, 0x33, 0x30, 0x1C, 0x06, 0x33, 0x3F, 0x00], // U+0032 '2'
    [0x1E, 0x33, 0x30, 0x1C, 0x30, 0x33, 0x1E, 0x00], // U+0033 '3'
    [0x38, 0x3C, 0x36, 0x33, 0x7F, 0x30, 0x78, 0x00], // U+0034 '4'
    [0x3F, 0x03, 0x1F, 0x30, 0x30, 0x33, 0x1E, 0x00], // U+0035 '5'
    [0x1C, 0x06, 0x03, 0x1F, 0x33, 0x33, 0x1E, 0x00], // U+0036 '6'
    [0x3F, 0x33, 0x30, 0x18, 0x0C, 0x0C, 0x0C, 0x00], // U+0037 '7'
    [0x1E, 0x33, 0x33, 0x1E, 0x33, 0x33, 0x1E, 0x00], // U+0038 '8'
    [0x1E, 0x33, 0x33, 0x3E, 0x30, 0x18, 0x0E, 0x00], // U+0039 '9'
    [0x00, 0x0C, 0x0C, 0x00, 0x00, 0x0C, 0x0C, 0x00], // U+003A ':'
    [0x00, 0x0C, 0x0C, 0x00, 0x00, 0x0C, 0x0C, 0x06], // U+003B ';'
    [0x18, 0x0C, 0x06, 0x03, 0x06, 0x0C, 0x18, 0x00], // U+003C '<'
    [0x00, 0x00, 0x3F, 0x00, 0x00, 0x3F, 0x00, 0x00], // U+003D '='
    [0x06, 0x0C, 0x18, 0x30, 0x18, 0x0C, 0x06, 0x00], // U+003E '>'
    [0x1E, 0x33, 0x30, 0x18, 0x0C, 0x00, 0x0C, 0x00], // U+003F '?'
    [0x3E, 0x63, 0x7B, 0x7B, 0x7B, 0x03, 0x1E, 0x00], // U+0040 '@'
    [0x0C, 0x1E, 0x33, 0x33, 0x3F, 0x33, 0x33, 0x00], // U+0041 'A'
    [0x3F, 0x66, 0x66, 0x3E, 0x66, 0x66, 0x3F, 0x00], // U+0042 'B'
    [0x3C, 0x66, 0x03, 0x03, 0x03, 0x66, 0x3C, 0x00], // U+0043 'C'
    [0x1F, 0x36, 0x66, 0x66, 0x66, 0x36, 0x1F, 0x00], // U+0044 'D'
    [0x7F, 0x46, 0x16, 0x1E, 0x16, 0x46, 0x7F, 0x00], // U+0045 'E'
    [0x7F, 0x46, 0x16, 0x1E, 0x16, 0x06, 0x0F, 0x00], // U+0046 'F'
    [0x3C, 0x66, 0x03, 0x03, 0x73, 0x66, 0x7C, 0x00], // U+0047 'G'
    [0x33, 0x33, 0x33, 0x3F, 0x33, 0x33, 0x33, 0x00], // U+0048 'H'
    [0x1E, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // U+0049 'I'
    [0x78, 0x30, 0x30, 0x30, 0x33, 0x33, 0x1E, 0x00], // U+004A 'J'
    [0x67, 0x66, 0x36, 0x1E, 0x36, 0x66, 0x67, 0x00], // U+004B 'K'
    [0x0F, 0x06, 0x06, 0x06, 0x46, 0x66, 0x7F, 0x00], // U+004C 'L'
    [0x63, 0x77, 0x7F, 0x7F, 0x6B, 0x63, 0x63, 0x00], // U+004D 'M'
    [0x63, 0x67, 0x6F, 0x7B, 0x73, 0x63, 0x63, 0x00], // U+004E 'N'
    [0x1C, 0x36, 0x63, 0x63, 0x63, 0x36, 0x1C, 0x00], // U+004F 'O'
    [0x3F, 0x66, 0x66, 0x3E, 0x06, 0x06, 0x0F, 0x00], // U+0050 'P'
    [0x1E, 0x33, 0x33, 0x33, 0x3B, 0x1E, 0x38, 0x00], // U+0051 'Q'
    [0x3F, 0x66, 0x66, 0x3E, 0x36, 0x66, 0x67, 0x00], // U+0052 'R'
    [0x1E, 0x33, 0x07, 0x0E, 0x38, 0x33, 0x1E, 0x00], // U+0053 'S'
    [0x3F, 0x2D, 0x0C, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // U+0054 'T'
    [0x33, 0x33, 0x33, 0x33, 0x33, 0x33, 0x3F, 0x00], // U+0055 'U'
    [0x33, 0x33, 0x33, 0x33, 0x33, 0x1E, 0x0C, 0x00], // U+0056 'V'
    [0x63, 0x63, 0x63, 0x6B, 0x7F, 0x77, 0x63, 0x00], // U+0057 'W'
    [0x63, 0x63, 0x36, 0x1C, 0x1C, 0x36, 0x63, 0x00], // U+0058 'X'
    [0x33, 0x33, 0x33, 0x1E, 0x0C, 0x0C, 0x1E, 0x00], // U+0059 'Y'
    [0x7F, 0x63, 0x31, 0x18, 0x4C, 0x66, 0x7F, 0x00], // U+005A 'Z'
    [0x1E, 0x06, 0x06, 0x06, 0x06, 0x06, 0x1E, 0x00], // U+005B '['
    [0x03, 0x06, 0x0C, 0x18, 0x30, 0x60, 0x40, 0x00], // U+005C '\'
    [0x1E, 0x18, 0x18, 0x18, 0x18, 0x18, 0x1E, 0x00], // U+005D ']'
    [0x08, 0x1C, 0x36, 0x63, 0x00, 0x00, 0x00, 0x00], // U+005E '^'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF], // U+005F '_'
    [0x0C, 0x0C, 0x18, 0x00, 0x00, 0x00, 0x00, 0x00], // U+0060 '`'
    [0x00, 0x00, 0x1E, 0x30, 0x3E, 0x33, 0x6E, 0x00], // U+0061 'a'
    [0x07, 0x06, 0x06, 0x3E, 0x66, 0x66, 0x3B, 0x00], // U+0062 'b'
    [0x00, 0x00, 0x1E, 0x33, 0x03, 0x33, 0x1E, 0x00], // U+0063 'c'
    [0x38, 0x30, 0x30, 0x3E, 0x33, 0x33, 0x6E, 0x00], // U+0064 'd'
    [0x00, 0x00, 0x1E, 0x33, 0x3F, 0x03, 0x1E, 0x00], // U+0065 'e'
    [0x1C, 0x36, 0x06, 0x0F, 0x06, 0x06, 0x0F, 0x00], // U+0066 'f'
    [0x00, 0x00, 0x6E, 0x33, 0x33, 0x3E, 0x30, 0x1F], // U+0067 'g'
    [0x07, 0x06, 0x36, 0x6E, 0x66, 0x66, 0x67, 0x00], // U+0068 'h'
    [0x0C, 0x00, 0x0E, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // U+0069 'i'
    [0x30, 0x00, 0x30, 0x30, 0x30, 0x33, 0x33, 0x1E], // U+006A 'j'
    [0x07, 0x06, 0x66, 0x36, 0x1E, 0x36, 0x67, 0x00], // U+006B 'k'
    [0x0E, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // U+006C 'l'
    [0x00, 0x00, 0x33, 0x7F, 0x7F, 0x6B, 0x63, 0x00], // U+006D 'm'
    [0x00, 0x00, 0x1F, 0x33, 0x33, 0x33, 0x33, 0x00], // U+006E 'n'
    [0x00, 0x00, 0x1E, 0x33, 0x33, 0x33, 0x1E, 0x00], // U+006F 'o'
    [0x00, 0x00, 0x3B, 0x66, 0x66, 0x3E, 0x06, 0x0F], // U+0070 'p'
    [0x00, 0x00, 0x6E, 0x33, 0x33, 0x3E, 0x30, 0x78], // U+0071 'q'
    [0x00, 0x00, 0x3B, 0x6E, 0x66, 0x06, 0x0F, 0x00], // U+0072 'r'
    [0x00, 0x00, 0x3E, 0x03, 0x1E, 0x30, 0x1F, 0x00], // U+0073 's'
    [0x08, 0x0C, 0x3E, 0x0C, 0x0C, 0x2C, 0x18, 0x00], // U+0074 't'
    [0x00, 0x00, 0x33, 0x33, 0x33, 0x33, 0x6E, 0x00], // U+0075 'u'
    [0x00, 0x00, 0x33, 0x33, 0x33, 0x1E, 0x0C, 0x00], // U+0076 'v'
    [0x00, 0x00, 0x63, 0x6B, 0x7F, 0x7F, 0x36, 0x00], // U+0077 'w'
    [0x00, 0x00, 0x63, 0x36, 0x1C, 0x36, 0x63, 0x00], // U+0078 'x'
    [0x00, 0x00, 0x33, 0x33, 0x33, 0x3E, 0x30, 0x1F], // U+0079 'y'
    [0x00, 0x00, 0x3F, 0x19, 0x0C, 0x26, 0x3F, 0x00], // U+007A 'z'
    [0x38, 0x0C, 0x0C, 0x07, 0x0C, 0x0C, 0x38, 0x00], // U+007B '{'
    [0x18, 0x18, 0x18, 0x00, 0x18, 0x18, 0x18, 0x00], // U+007C '|'
    [0x07, 0x0C, 0x0C, 0x38, 0x0C, 0x0C, 0x07, 0x00], // U+007D '}'
    [0x6E, 0x3B, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // U+007E '~'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // U+007F
];

/// C1 controls, U+0080..=U+009F. Non-printing; every cell is blank, but the
/// table keeps the range addressable without tripping the fallback path.
pub static CONTROL: [[u8; 8]; 32] = [[0; 8]; 32];

/// Latin-1 supplement, U+00A0..=U+00FF.
#[rustfmt::skip]
pub static EXT_LATIN: [[u8; 8]; 96] = [
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // U+00A0 NBSP
    [0x0C, 0x00, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x00], // U+00A1 inverted !
    [0x00, 0x0C, 0x1E, 0x03, 0x03, 0x1E, 0x0C, 0x00], // U+00A2 cent
    [0x1C, 0x36, 0x06, 0x1F, 0x06, 0x67, 0x3F, 0x00], // U+00A3 pound
    [0x00, 0x42, 0x3C, 0x24, 0x24, 0x3C, 0x42, 0x00], // U+00A4 currency
    [0x33, 0x33, 0x1E, 0x3F, 0x0C, 0x3F, 0x0C, 0x00], // U+00A5 yen
    [0x18, 0x18, 0x18, 0x00, 0x18, 0x18, 0x18, 0x00], // U+00A6 broken bar
    [0x3C, 0x06, 0x1C, 0x36, 0x36, 0x1C, 0x30, 0x1E], // U+00A7 section
    [0x36, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // U+00A8 diaeresis
    [0x3C, 0x42, 0x99, 0x85, 0x85, 0x99, 0x42, 0x3C], // U+00A9 copyright
    [0x1E, 0x30, 0x3E, 0x33, 0x3E, 0x00, 0x3F, 0x00], // U+00AA fem ordinal
    [0x00, 0x00, 0x6C, 0x36, 0x1B, 0x36, 0x6C, 0x00], // U+00AB left guillemet
    [0x00, 0x00, 0x00, 0x3F, 0x30, 0x30, 0x00, 0x00], // U+00AC not sign
    [0x00, 0x00, 0x00, 0x3F, 0x00, 0x00, 0x00, 0x00], // U+00AD soft hyphen
    [0x3C, 0x42, 0x9D, 0x95, 0xAD, 0x99, 0x42, 0x3C], // U+00AE registered
    [0x3F, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // U+00AF macron
    [0x1C, 0x36, 0x36, 0x1C, 0x00, 0x00, 0x00, 0x00], // U+00B0 degree
    [0x0C, 0x0C, 0x3F, 0x0C, 0x0C, 0x00, 0x3F, 0x00], // U+00B1 plus-minus
    [0x0E, 0x18, 0x0C, 0x06, 0x1E, 0x00, 0x00, 0x00], // U+00B2 superscript 2
    [0x1E, 0x30, 0x1C, 0x30, 0x1E, 0x00, 0x00, 0x00], // U+00B3 superscript 3
    [0x18, 0x0C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // U+00B4 acute
    [0x00, 0x00, 0x33, 0x33, 0x33, 0x33, 0x3F, 0x03], // U+00B5 micro
    [0x7E, 0x1B, 0x1B, 0x1E, 0x18, 0x18, 0x3C, 0x00], // U+00B6 pilcrow
    [0x00, 0x00, 0x00, 0x0C, 0x0C, 0x00, 0x00, 0x00], // U+00B7 middle dot
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x0C], // U+00B8 cedilla
    [0x0C, 0x0E, 0x0C, 0x0C, 0x1E, 0x00, 0x00, 0x00], // U+00B9 superscript 1
    [0x1C, 0x36, 0x36, 0x1C, 0x00, 0x3E, 0x00, 0x00], // U+00BA masc ordinal
    [0x00, 0x00, 0x1B, 0x36, 0x6C, 0x36, 0x1B, 0x00], // U+00BB right guillemet
    [0x23, 0x33, 0x18, 0x0C, 0x66, 0xD3, 0xF8, 0x00], // U+00BC one quarter
    [0x23, 0x33, 0x18, 0x6C, 0xD6, 0x63, 0xF1, 0x00], // U+00BD one half
    [0x0E, 0x19, 0x0E, 0x99, 0x6E, 0xD8, 0xF0, 0x00], // U+00BE three quarters
    [0x0C, 0x00, 0x0C, 0x18, 0x30, 0x33, 0x1E, 0x00], // U+00BF inverted ?
    [0x06, 0x0C, 0x1E, 0x33, 0x3F, 0x33, 0x33, 0x00], // U+00C0 A grave
    [0x18, 0x0C, 0x1E, 0x33, 0x3F, 0x33, 0x33, 0x00], // U+00C1 A acute
    [0x1E, 0x0C, 0x1E, 0x33, 0x3F, 0x33, 0x33, 0x00], // U+00C2 A circumflex
    [0x3E, 0x0C, 0x1E, 0x33, 0x3F, 0x33, 0x33, 0x00], // U+00C3 A tilde
    [0x33, 0x0C, 0x1E, 0x33, 0x3F, 0x33, 0x33, 0x00], // U+00C4 A diaeresis
    [0x0C, 0x0C, 0x1E, 0x33, 0x3F, 0x33, 0x33, 0x00], // U+00C5 A ring
    [0x7C, 0x36, 0x33, 0x7F, 0x33, 0x33, 0x73, 0x00], // U+00C6 AE
    [0x3C, 0x66, 0x03, 0x03, 0x66, 0x3C, 0x18, 0x0C], // U+00C7 C cedilla
    [0x06, 0x3F, 0x03, 0x1F, 0x03, 0x03, 0x3F, 0x00], // U+00C8 E grave
    [0x18, 0x3F, 0x03, 0x1F, 0x03, 0x03, 0x3F, 0x00], // U+00C9 E acute
    [0x1E, 0x3F, 0x03, 0x1F, 0x03, 0x03, 0x3F, 0x00], // U+00CA E circumflex
    [0x33, 0x3F, 0x03, 0x1F, 0x03, 0x03, 0x3F, 0x00], // U+00CB E diaeresis
    [0x06, 0x1E, 0x0C, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // U+00CC I grave
    [0x18, 0x1E, 0x0C, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // U+00CD I acute
    [0x1E, 0x1E, 0x0C, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // U+00CE I circumflex
    [0x33, 0x1E, 0x0C, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // U+00CF I diaeresis
    [0x1F, 0x36, 0x66, 0x6F, 0x66, 0x36, 0x1F, 0x00], // U+00D0 Eth
    [0x3E, 0x33, 0x37, 0x3F, 0x3B, 0x33, 0x33, 0x00], // U+00D1 N tilde
    [0x06, 0x1E, 0x33, 0x33, 0x33, 0x33, 0x1E, 0x00], // U+00D2 O grave
    [0x18, 0x1E, 0x33, 0x33, 0x33, 0x33, 0x1E, 0x00], // U+00D3 O acute
    [0x1E, 0x1E, 0x33, 0x33, 0x33, 0x33, 0x1E, 0x00], // U+00D4 O circumflex
    [0x3E, 0x1E, 0x33, 0x33, 0x33, 0x33, 0x1E, 0x00], // U+00D5 O tilde
    [0x33, 0x1E, 0x33, 0x33, 0x33, 0x33, 0x1E, 0x00], // U+00D6 O diaeresis
    [0x00, 0x00, 0x33, 0x1E, 0x0C, 0x1E, 0x33, 0x00], // U+00D7 multiplication
    [0x3E, 0x73, 0x7B, 0x6F, 0x67, 0x63, 0x3E, 0x00], // U+00D8 O slash
    [0x06, 0x33, 0x33, 0x33, 0x33, 0x33, 0x3F, 0x00], // U+00D9 U grave
    [0x18, 0x33, 0x33, 0x33, 0x33, 0x33, 0x3F, 0x00], // U+00DA U acute
    [0x1E, 0x33, 0x33, 0x33, 0x33, 0x33, 0x3F, 0x00], // U+00DB U circumflex
    [0x33, 0x00, 0x33, 0x33, 0x33, 0x33, 0x3F, 0x00], // U+00DC U diaeresis
    [0x18, 0x33, 0x33, 0x1E, 0x0C, 0x0C, 0x1E, 0x00], // U+00DD Y acute
    [0x0F, 0x06, 0x3E, 0x66, 0x3E, 0x06, 0x0F, 0x00], // U+00DE Thorn
    [0x1E, 0x33, 0x33, 0x1B, 0x33, 0x33, 0x1B, 0x03], // U+00DF sharp s
    [0x06, 0x0C, 0x1E, 0x30, 0x3E, 0x33, 0x6E, 0x00], // U+00E0 a grave
    [0x18, 0x0C, 0x1E, 0x30, 0x3E, 0x33, 0x6E, 0x00], // U+00E1 a acute
    [0x1E, 0x00, 0x1E, 0x30, 0x3E, 0x33, 0x6E, 0x00], // U+00E2 a circumflex
    [0x3E, 0x00, 0x1E, 0x30, 0x3E, 0x33, 0x6E, 0x00], // U+00E3 a tilde
    [0x33, 0x00, 0x1E, 0x30, 0x3E, 0x33, 0x6E, 0x00], // U+00E4 a diaeresis
    [0x0C, 0x0C, 0x1E, 0x30, 0x3E, 0x33, 0x6E, 0x00], // U+00E5 a ring
    [0x00, 0x00, 0x76, 0xDB, 0x7B, 0x1B, 0x6E, 0x00], // U+00E6 ae
    [0x00, 0x00, 0x1E, 0x03, 0x03, 0x1E, 0x18, 0x0C], // U+00E7 c cedilla
    [0x06, 0x0C, 0x1E, 0x33, 0x3F, 0x03, 0x1E, 0x00], // U+00E8 e grave
    [0x18, 0x0C, 0x1E, 0x33, 0x3F, 0x03, 0x1E, 0x00], // U+00E9 e acute
    [0x1E, 0x00, 0x1E, 0x33, 0x3F, 0x03, 0x1E, 0x00], // U+00EA e circumflex
    [0x33, 0x00, 0x1E, 0x33, 0x3F, 0x03, 0x1E, 0x00], // U+00EB e diaeresis
    [0x06, 0x0C, 0x0E, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // U+00EC i grave
    [0x18, 0x0C, 0x0E, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // U+00ED i acute
    [0x1E, 0x00, 0x0E, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // U+00EE i circumflex
    [0x33, 0x00, 0x0E, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // U+00EF i diaeresis
    [0x36, 0x1C, 0x30, 0x3E, 0x33, 0x33, 0x1E, 0x00], // U+00F0 eth
    [0x3E, 0x00, 0x1F, 0x33, 0x33, 0x33, 0x33, 0x00], // U+00F1 n tilde
    [0x06, 0x0C, 0x1E, 0x33, 0x33, 0x33, 0x1E, 0x00], // U+00F2 o grave
    [0x18, 0x0C, 0x1E, 0x33, 0x33, 0x33, 0x1E, 0x00], // U+00F3 o acute
    [0x1E, 0x00, 0x1E, 0x33, 0x33, 0x33, 0x1E, 0x00], // U+00F4 o circumflex
    [0x3E, 0x00, 0x1E, 0x33, 0x33, 0x33, 0x1E, 0x00], // U+00F5 o tilde
    [0x33, 0x00, 0x1E, 0x33, 0x33, 0x33, 0x1E, 0x00], // U+00F6 o diaeresis
    [0x00, 0x0C, 0x00, 0x3F, 0x00, 0x0C, 0x00, 0x00], // U+00F7 division
    [0x00, 0x60, 0x3E, 0x7B, 0x6F, 0x67, 0x3E, 0x03], // U+00F8 o slash
    [0x06, 0x0C, 0x33, 0x33, 0x33, 0x33, 0x6E, 0x00], // U+00F9 u grave
    [0x18, 0x0C, 0x33, 0x33, 0x33, 0x33, 0x6E, 0x00], // U+00FA u acute
    [0x1E, 0x00, 0x33, 0x33, 0x33, 0x33, 0x6E, 0x00], // U+00FB u circumflex
    [0x33, 0x00, 0x33, 0x33, 0x33, 0x33, 0x6E, 0x00], // U+00FC u diaeresis
    [0x18, 0x0C, 0x33, 0x33, 0x33, 0x3E, 0x30, 0x1F], // U+00FD y acute
    [0x07, 0x06, 0x3E, 0x66, 0x66, 0x3E, 0x06, 0x0F], // U+00FE thorn
    [0x33, 0x00, 0x33, 0x33, 0x33, 0x3E, 0x30, 0x1F], // U+00FF y diaeresis
];

/// Greek, U+0390..=U+03C9.
#[rustfmt::skip]
pub static GREEK: [[u8; 8]; 58] = [
    [0x36, 0x00, 0x0E, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // U+0390 iota dialytika tonos
    [0x0C, 0x1E, 0x33, 0x33, 0x3F, 0x33, 0x33, 0x00], // U+0391 Alpha
    [0x3F, 0x66, 0x66, 0x3E, 0x66, 0x66, 0x3F, 0x00], // U+0392 Beta
    [0x3F, 0x33, 0x03, 0x03, 0x03, 0x03, 0x07, 0x00], // U+0393 Gamma
    [0x08, 0x1C, 0x1C, 0x36, 0x36, 0x63, 0x7F, 0x00], // U+0394 Delta
    [0x7F, 0x46, 0x16, 0x1E, 0x16, 0x46, 0x7F, 0x00], // U+0395 Epsilon
    [0x7F, 0x63, 0x31, 0x18, 0x4C, 0x66, 0x7F, 0x00], // U+0396 Zeta
    [0x33, 0x33, 0x33, 0x3F, 0x33, 0x33, 0x33, 0x00], // U+0397 Eta
    [0x1C, 0x36, 0x63, 0x7F, 0x63, 0x36, 0x1C, 0x00], // U+0398 Theta
    [0x1E, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // U+0399 Iota
    [0x67, 0x66, 0x36, 0x1E, 0x36, 0x66, 0x67, 0x00], // U+039A Kappa
    [0x08, 0x1C, 0x1C, 0x36, 0x36, 0x63, 0x63, 0x00], // U+039B Lambda
    [0x63, 0x77, 0x7F, 0x7F, 0x6B, 0x63, 0x63, 0x00], // U+039C Mu
    [0x63, 0x67, 0x6F, 0x7B, 0x73, 0x63, 0x63, 0x00], // U+039D Nu
    [0x7F, 0x00, 0x00, 0x3E, 0x00, 0x00, 0x7F, 0x00], // U+039E Xi
    [0x1C, 0x36, 0x63, 0x63, 0x63, 0x36, 0x1C, 0x00], // U+039F Omicron
    [0x7F, 0x36, 0x36, 0x36, 0x36, 0x36, 0x77, 0x00], // U+03A0 Pi
    [0x3F, 0x66, 0x66, 0x3E, 0x06, 0x06, 0x0F, 0x00], // U+03A1 Rho
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // U+03A2 (reserved)
    [0x7F, 0x06, 0x0C, 0x18, 0x0C, 0x06, 0x7F, 0x00], // U+03A3 Sigma
    [0x3F, 0x2D, 0x0C, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // U+03A4 Tau
    [0x33, 0x33, 0x33, 0x1E, 0x0C, 0x0C, 0x1E, 0x00], // U+03A5 Upsilon
    [0x0C, 0x3E, 0x6B, 0x6B, 0x6B, 0x3E, 0x0C, 0x00], // U+03A6 Phi
    [0x63, 0x63, 0x36, 0x1C, 0x1C, 0x36, 0x63, 0x00], // U+03A7 Chi
    [0x6B, 0x6B, 0x6B, 0x3E, 0x0C, 0x0C, 0x1E, 0x00], // U+03A8 Psi
    [0x3E, 0x63, 0x63, 0x63, 0x36, 0x36, 0x77, 0x00], // U+03A9 Omega
    [0x33, 0x00, 0x1E, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // U+03AA Iota dialytika
    [0x33, 0x00, 0x33, 0x33, 0x1E, 0x0C, 0x1E, 0x00], // U+03AB Upsilon dialytika
    [0x18, 0x00, 0x6E, 0x33, 0x33, 0x33, 0x6E, 0x00], // U+03AC alpha tonos
    [0x18, 0x00, 0x1E, 0x03, 0x0E, 0x03, 0x1E, 0x00], // U+03AD epsilon tonos
    [0x18, 0x00, 0x1F, 0x33, 0x33, 0x33, 0x33, 0x30], // U+03AE eta tonos
    [0x18, 0x00, 0x0E, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // U+03AF iota tonos
    [0x36, 0x00, 0x33, 0x33, 0x33, 0x33, 0x1E, 0x00], // U+03B0 upsilon dialytika tonos
    [0x00, 0x00, 0x6E, 0x33, 0x33, 0x33, 0x6E, 0x00], // U+03B1 alpha
    [0x1E, 0x33, 0x33, 0x1F, 0x33, 0x33, 0x1F, 0x03], // U+03B2 beta
    [0x00, 0x00, 0x33, 0x33, 0x1E, 0x0C, 0x0C, 0x0C], // U+03B3 gamma
    [0x1C, 0x06, 0x0C, 0x1E, 0x33, 0x33, 0x1E, 0x00], // U+03B4 delta
    [0x00, 0x00, 0x1E, 0x03, 0x0E, 0x03, 0x1E, 0x00], // U+03B5 epsilon
    [0x3F, 0x18, 0x0C, 0x06, 0x06, 0x1E, 0x30, 0x1C], // U+03B6 zeta
    [0x00, 0x00, 0x1F, 0x33, 0x33, 0x33, 0x33, 0x30], // U+03B7 eta
    [0x1E, 0x33, 0x33, 0x3F, 0x33, 0x33, 0x1E, 0x00], // U+03B8 theta
    [0x00, 0x00, 0x0C, 0x0C, 0x0C, 0x0C, 0x38, 0x00], // U+03B9 iota
    [0x00, 0x00, 0x33, 0x1B, 0x0F, 0x1B, 0x33, 0x00], // U+03BA kappa
    [0x03, 0x06, 0x0C, 0x1C, 0x36, 0x63, 0x63, 0x00], // U+03BB lambda
    [0x00, 0x00, 0x33, 0x33, 0x33, 0x33, 0x3F, 0x03], // U+03BC mu
    [0x00, 0x00, 0x33, 0x33, 0x33, 0x1E, 0x0C, 0x00], // U+03BD nu
    [0x3E, 0x06, 0x1E, 0x06, 0x06, 0x3E, 0x30, 0x1C], // U+03BE xi
    [0x00, 0x00, 0x1E, 0x33, 0x33, 0x33, 0x1E, 0x00], // U+03BF omicron
    [0x00, 0x00, 0x7F, 0x36, 0x36, 0x36, 0x36, 0x00], // U+03C0 pi
    [0x00, 0x00, 0x1E, 0x33, 0x33, 0x1F, 0x03, 0x03], // U+03C1 rho
    [0x00, 0x00, 0x1E, 0x03, 0x03, 0x1E, 0x30, 0x1C], // U+03C2 final sigma
    [0x00, 0x00, 0x3E, 0x1B, 0x1B, 0x1B, 0x0E, 0x00], // U+03C3 sigma
    [0x00, 0x00, 0x3F, 0x0C, 0x0C, 0x0C, 0x38, 0x00], // U+03C4 tau
    [0x00, 0x00, 0x33, 0x33, 0x33, 0x33, 0x1E, 0x00], // U+03C5 upsilon
    [0x00, 0x0C, 0x3E, 0x6B, 0x6B, 0x3E, 0x0C, 0x0C], // U+03C6 phi
    [0x00, 0x00, 0x63, 0x36, 0x1C, 0x36, 0x63, 0x00], // U+03C7 chi
    [0x00, 0x0C, 0x6B, 0x6B, 0x6B, 0x3E, 0x0C, 0x0C], // U+03C8 psi
    [0x00, 0x00, 0x36, 0x63, 0x6B, 0x6B, 0x36, 0x00], // U+03C9 omega
];

/// Box drawing, U+2500..=U+257F.
///
/// Light lines sit on row 4 / column 3, heavy lines add row 3 / column 4,
/// double lines sit on rows 3+5 / columns 2+5.
#[rustfmt::skip]
pub static BOX: [[u8; 8]; 128] = [
    [0x00, 0x00, 0x00, 0x00, 0xFF, 0x00, 0x00, 0x00], // U+2500 light horizontal
    [0x00, 0x00, 0x00, 0xFF, 0xFF, 0x00, 0x00, 0x00], // U+2501 heavy horizontal
    [0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x08], // U+2502 light vertical
    [0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18], // U+2503 heavy vertical
    [0x00, 0x00, 0x00, 0x00, 0x6D, 0x00, 0x00, 0x00], // U+2504 light triple dash horizontal
    [0x00, 0x00, 0x00, 0x6D, 0x6D, 0x00, 0x00, 0x00], // U+2505 heavy triple dash horizontal
    [0x08, 0x08, 0x00, 0x08, 0x08, 0x00, 0x08, 0x08], // U+2506 light triple dash vertical
    [0x18, 0x18, 0x00, 0x18, 0x18, 0x00, 0x18, 0x18], // U+2507 heavy triple dash vertical
    [0x00, 0x00, 0x00, 0x00, 0x55, 0x00, 0x00, 0x00], // U+2508 light quadruple dash horizontal
    [0x00, 0x00, 0x00, 0x55, 0x55, 0x00, 0x00, 0x00], // U+2509 heavy quadruple dash horizontal
    [0x08, 0x00, 0x08, 0x00, 0x08, 0x00, 0x08, 0x00], // U+250A light quadruple dash vertical
    [0x18, 0x00, 0x18, 0x00, 0x18, 0x00, 0x18, 0x00], // U+250B heavy quadruple dash vertical
    [0x00, 0x00, 0x00, 0x00, 0xF8, 0x08, 0x08, 0x08], // U+250C down and right
    [0x00, 0x00, 0x00, 0xF8, 0xF8, 0x08, 0x08, 0x08], // U+250D down light, right heavy
    [0x00, 0x00, 0x00, 0x00, 0xF8, 0x18, 0x18, 0x18], // U+250E down heavy, right light
    [0x00, 0x00, 0x00, 0xF8, 0xF8, 0x18, 0x18, 0x18], // U+250F heavy down and right
    [0x00, 0x00, 0x00, 0x00, 0x0F, 0x08, 0x08, 0x08], // U+2510 down and left
    [0x00, 0x00, 0x00, 0x0F, 0x0F, 0x08, 0x08, 0x08], // U+2511 down light, left heavy
    [0x00, 0x00, 0x00, 0x00, 0x1F, 0x18, 0x18, 0x18], // U+2512 down heavy, left light
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x18, 0x18, 0x18], // U+2513 heavy down and left
    [0x08, 0x08, 0x08, 0x08, 0xF8, 0x00, 0x00, 0x00], // U+2514 up and right
    [0x08, 0x08, 0x08, 0xF8, 0xF8, 0x00, 0x00, 0x00], // U+2515 up light, right heavy
    [0x18, 0x18, 0x18, 0x18, 0xF8, 0x00, 0x00, 0x00], // U+2516 up heavy, right light
    [0x18, 0x18, 0x18, 0xF8, 0xF8, 0x00, 0x00, 0x00], // U+2517 heavy up and right
    [0x08, 0x08, 0x08, 0x08, 0x0F, 0x00, 0x00, 0x00], // U+2518 up and left
    [0x08, 0x08, 0x08, 0x0F, 0x0F, 0x00, 0x00, 0x00], // U+2519 up light, left heavy
    [0x18, 0x18, 0x18, 0x18, 0x1F, 0x00, 0x00, 0x00], // U+251A up heavy, left light
    [0x18, 0x18, 0x18, 0x1F, 0x1F, 0x00, 0x00, 0x00], // U+251B heavy up and left
    [0x08, 0x08, 0x08, 0x08, 0xF8, 0x08, 0x08, 0x08], // U+251C vertical and right
    [0x08, 0x08, 0x08, 0xF8, 0xF8, 0x08, 0x08, 0x08], // U+251D vertical light, right heavy
    [0x18, 0x18, 0x18, 0x18, 0xF8, 0x08, 0x08, 0x08], // U+251E up heavy, right down light
    [0x08, 0x08, 0x08, 0x08, 0xF8, 0x18, 0x18, 0x18], // U+251F down heavy, right up light
    [0x18, 0x18, 0x18, 0x18, 0xF8, 0x18, 0x18, 0x18], // U+2520 vertical heavy, right light
    [0x18, 0x18, 0x18, 0xF8, 0xF8, 0x08, 0x08, 0x08], // U+2521 up right heavy, down light
    [0x08, 0x08, 0x08, 0xF8, 0xF8, 0x18, 0x18, 0x18], // U+2522 down right heavy, up light
    [0x18, 0x18, 0x18, 0xF8, 0xF8, 0x18, 0x18, 0x18], // U+2523 heavy vertical and right
    [0x08, 0x08, 0x08, 0x08, 0x0F, 0x08, 0x08, 0x08], // U+2524 vertical and left
    [0x08, 0x08, 0x08, 0x0F, 0x0F, 0x08, 0x08, 0x08], // U+2525 vertical light, left heavy
    [0x18, 0x18, 0x18, 0x18, 0x1F, 0x08, 0x08, 0x08], // U+2526 up heavy, left down light
    [0x08, 0x08, 0x08, 0x08, 0x1F, 0x18, 0x18, 0x18], // U+2527 down heavy, left up light
    [0x18, 0x18, 0x18, 0x18, 0x1F, 0x18, 0x18, 0x18], // U+2528 vertical heavy, left light
    [0x18, 0x18, 0x18, 0x1F, 0x1F, 0x08, 0x08, 0x08], // U+2529 up left heavy, down light
    [0x08, 0x08, 0x08, 0x1F, 0x1F, 0x18, 0x18, 0x18], // U+252A down left heavy, up light
    [0x18, 0x18, 0x18, 0x1F, 0x1F, 0x18, 0x18, 0x18], // U+252B heavy vertical and left
    [0x00, 0x00, 0x00, 0x00, 0xFF, 0x08, 0x08, 0x08], // U+252C down and horizontal
    [0x00, 0x00, 0x00, 0x0F, 0xFF, 0x08, 0x08, 0x08], // U+252D left heavy, right down light
    [0x00, 0x00, 0x00, 0xF8, 0xFF, 0x08, 0x08, 0x08], // U+252E right heavy, left down light
    [0x00, 0x00, 0x00, 0xFF, 0xFF, 0x08, 0x08, 0x08], // U+252F down light, horizontal heavy
    [0x00, 0x00, 0x00, 0x00, 0xFF, 0x18, 0x18, 0x18], // U+2530 down heavy, horizontal light
    [0x00, 0x00, 0x00, 0x0F, 0xFF, 0x18, 0x18, 0x18], // U+2531 right light, left down heavy
    [0x00, 0x00, 0x00, 0xF8, 0xFF, 0x18, 0x18, 0x18], // U+2532 left light, right down heavy
    [0x00, 0x00, 0x00, 0xFF, 0xFF, 0x18, 0x18, 0x18], // U+2533 heavy down and horizontal
    [0x08, 0x08, 0x08, 0x08, 0xFF, 0x00, 0x00, 0x00], // U+2534 up and horizontal
    [0x08, 0x08, 0x08, 0x0F, 0xFF, 0x00, 0x00, 0x00], // U+2535 left heavy, right up light
    [0x08, 0x08, 0x08, 0xF8, 0xFF, 0x00, 0x00, 0x00], // U+2536 right heavy, left up light
    [0x08, 0x08, 0x08, 0xFF, 0xFF, 0x00, 0x00, 0x00], // U+2537 up light, horizontal heavy
    [0x18, 0x18, 0x18, 0x18, 0xFF, 0x00, 0x00, 0x00], // U+2538 up heavy, horizontal light
    [0x18, 0x18, 0x18, 0x1F, 0xFF, 0x00, 0x00, 0x00], // U+2539 right light, left up heavy
    [0x18, 0x18, 0x18, 0xF8, 0xFF, 0x00, 0x00, 0x00], // U+253A left light, right up heavy
    [0x18, 0x18, 0x18, 0xFF, 0xFF, 0x00, 0x00, 0x00], // U+253B heavy up and horizontal
    [0x08, 0x08, 0x08, 0x08, 0xFF, 0x08, 0x08, 0x08], // U+253C vertical and horizontal
    [0x08, 0x08, 0x08, 0x0F, 0xFF, 0x08, 0x08, 0x08], // U+253D left heavy
    [0x08, 0x08, 0x08, 0xF8, 0xFF, 0x08, 0x08, 0x08], // U+253E right heavy
    [0x08, 0x08, 0x08, 0xFF, 0xFF, 0x08, 0x08, 0x08], // U+253F horizontal heavy
    [0x18, 0x18, 0x18, 0x18, 0xFF, 0x08, 0x08, 0x08], // U+2540 up heavy
    [0x08, 0x08, 0x08, 0x08, 0xFF, 0x18, 0x18, 0x18], // U+2541 down heavy
    [0x18, 0x18, 0x18, 0x18, 0xFF, 0x18, 0x18, 0x18], // U+2542 vertical heavy
    [0x18, 0x18, 0x18, 0x1F, 0xFF, 0x08, 0x08, 0x08], // U+2543 left up heavy
    [0x18, 0x18, 0x18, 0xF8, 0xFF, 0x08, 0x08, 0x08], // U+2544 right up heavy
    [0x08, 0x08, 0x08, 0x1F, 0xFF, 0x18, 0x18, 0x18], // U+2545 left down heavy
    [0x08, 0x08, 0x08, 0xF8, 0xFF, 0x18, 0x18, 0x18], // U+2546 right down heavy
    [0x18, 0x18, 0x18, 0xFF, 0xFF, 0x08, 0x08, 0x08], // U+2547 up horizontal heavy
    [0x08, 0x08, 0x08, 0xFF, 0xFF, 0x18, 0x18, 0x18], // U+2548 down horizontal heavy
    [0x18, 0x18, 0x18, 0x1F, 0xFF, 0x18, 0x18, 0x18], // U+2549 left vertical heavy
    [0x18, 0x18, 0x18, 0xF8, 0xFF, 0x18, 0x18, 0x18], // U+254A right vertical heavy
    [0x18, 0x18, 0x18, 0xFF, 0xFF, 0x18, 0x18, 0x18], // U+254B heavy vertical and horizontal
    [0x00, 0x00, 0x00, 0x00, 0x77, 0x00, 0x00, 0x00], // U+254C light double dash horizontal
    [0x00, 0x00, 0x00, 0x77, 0x77, 0x00, 0x00, 0x00], // U+254D heavy double dash horizontal
    [0x08, 0x08, 0x08, 0x00, 0x08, 0x08, 0x08, 0x00], // U+254E light double dash vertical
    [0x18, 0x18, 0x18, 0x00, 0x18, 0x18, 0x18, 0x00], // U+254F heavy double dash vertical
    [0x00, 0x00, 0x00, 0xFF, 0x00, 0xFF, 0x00, 0x00], // U+2550 double horizontal
    [0x24, 0x24, 0x24, 0x24, 0x24, 0x24, 0x24, 0x24], // U+2551 double vertical
    [0x00, 0x00, 0x00, 0xF8, 0x08, 0xF8, 0x08, 0x08], // U+2552 down single, right double
    [0x00, 0x00, 0x00, 0x00, 0xFC, 0x24, 0x24, 0x24], // U+2553 down double, right single
    [0x00, 0x00, 0x00, 0xFC, 0x04, 0xE4, 0x24, 0x24], // U+2554 double down and right
    [0x00, 0x00, 0x00, 0x0F, 0x08, 0x0F, 0x08, 0x08], // U+2555 down single, left double
    [0x00, 0x00, 0x00, 0x00, 0x3F, 0x24, 0x24, 0x24], // U+2556 down double, left single
    [0x00, 0x00, 0x00, 0x3F, 0x20, 0x27, 0x24, 0x24], // U+2557 double down and left
    [0x08, 0x08, 0x08, 0xF8, 0x08, 0xF8, 0x00, 0x00], // U+2558 up single, right double
    [0x24, 0x24, 0x24, 0x24, 0xFC, 0x00, 0x00, 0x00], // U+2559 up double, right single
    [0x24, 0x24, 0x24, 0xE4, 0x04, 0xFC, 0x00, 0x00], // U+255A double up and right
    [0x08, 0x08, 0x08, 0x0F, 0x08, 0x0F, 0x00, 0x00], // U+255B up single, left double
    [0x24, 0x24, 0x24, 0x24, 0x3F, 0x00, 0x00, 0x00], // U+255C up double, left single
    [0x24, 0x24, 0x24, 0x27, 0x20, 0x3F, 0x00, 0x00], // U+255D double up and left
    [0x08, 0x08, 0x08, 0xF8, 0x08, 0xF8, 0x08, 0x08], // U+255E vertical single, right double
    [0x24, 0x24, 0x24, 0x24, 0xE4, 0x24, 0x24, 0x24], // U+255F vertical double, right single
    [0x24, 0x24, 0x24, 0xE4, 0x04, 0xE4, 0x24, 0x24], // U+2560 double vertical and right
    [0x08, 0x08, 0x08, 0x0F, 0x08, 0x0F, 0x08, 0x08], // U+2561 vertical single, left double
    [0x24, 0x24, 0x24, 0x24, 0x27, 0x24, 0x24, 0x24], // U+2562 vertical double, left single
    [0x24, 0x24, 0x24, 0x27, 0x20, 0x27, 0x24, 0x24], // U+2563 double vertical and left
    [0x00, 0x00, 0x00, 0xFF, 0x00, 0xFF, 0x08, 0x08], // U+2564 down single, horizontal double
    [0x00, 0x00, 0x00, 0x00, 0xFF, 0x24, 0x24, 0x24], // U+2565 down double, horizontal single
    [0x00, 0x00, 0x00, 0xFF, 0x00, 0xE7, 0x24, 0x24], // U+2566 double down and horizontal
    [0x08, 0x08, 0x08, 0xFF, 0x00, 0xFF, 0x00, 0x00], // U+2567 up single, horizontal double
    [0x24, 0x24, 0x24, 0x24, 0xFF, 0x00, 0x00, 0x00], // U+2568 up double, horizontal single
    [0x24, 0x24, 0x24, 0xE7, 0x00, 0xFF, 0x00, 0x00], // U+2569 double up and horizontal
    [0x08, 0x08, 0x08, 0xFF, 0x08, 0xFF, 0x08, 0x08], // U+256A vertical single, horizontal double
    [0x24, 0x24, 0x24, 0x24, 0xFF, 0x24, 0x24, 0x24], // U+256B vertical double, horizontal single
    [0x24, 0x24, 0x24, 0xE7, 0x00, 0xE7, 0x24, 0x24], // U+256C double vertical and horizontal
    [0x00, 0x00, 0x00, 0x00, 0xF0, 0x18, 0x08, 0x08], // U+256D light arc down and right
    [0x00, 0x00, 0x00, 0x00, 0x0F, 0x18, 0x08, 0x08], // U+256E light arc down and left
    [0x08, 0x08, 0x18, 0x0F, 0x07, 0x00, 0x00, 0x00], // U+256F light arc up and left
    [0x08, 0x08, 0x18, 0xF0, 0xE0, 0x00, 0x00, 0x00], // U+2570 light arc up and right
    [0x80, 0x40, 0x20, 0x10, 0x08, 0x04, 0x02, 0x01], // U+2571 diagonal upper right to lower left
    [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80], // U+2572 diagonal upper left to lower right
    [0x81, 0x42, 0x24, 0x18, 0x18, 0x24, 0x42, 0x81], // U+2573 diagonal cross
    [0x00, 0x00, 0x00, 0x00, 0x0F, 0x00, 0x00, 0x00], // U+2574 light left
    [0x08, 0x08, 0x08, 0x08, 0x08, 0x00, 0x00, 0x00], // U+2575 light up
    [0x00, 0x00, 0x00, 0x00, 0xF8, 0x00, 0x00, 0x00], // U+2576 light right
    [0x00, 0x00, 0x00, 0x00, 0x08, 0x08, 0x08, 0x08], // U+2577 light down
    [0x00, 0x00, 0x00, 0x0F, 0x0F, 0x00, 0x00, 0x00], // U+2578 heavy left
    [0x18, 0x18, 0x18, 0x18, 0x18, 0x00, 0x00, 0x00], // U+2579 heavy up
    [0x00, 0x00, 0x00, 0xF8, 0xF8, 0x00, 0x00, 0x00], // U+257A heavy right
    [0x00, 0x00, 0x00, 0x00, 0x18, 0x18, 0x18, 0x18], // U+257B heavy down
    [0x00, 0x00, 0x00, 0xF8, 0xFF, 0x00, 0x00, 0x00], // U+257C light left, heavy right
    [0x08, 0x08, 0x08, 0x08, 0x18, 0x18, 0x18, 0x18], // U+257D light up, heavy down
    [0x00, 0x00, 0x00, 0x0F, 0xFF, 0x00, 0x00, 0x00], // U+257E heavy left, light right
    [0x18, 0x18, 0x18, 0x18, 0x08, 0x08, 0x08, 0x08], // U+257F heavy up, light down
];

/// Block elements, U+2580..=U+259F.
#[rustfmt::skip]
pub static BLOCK: [[u8; 8]; 32] = [
    [0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00], // U+2580 upper half
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF], // U+2581 lower eighth
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF], // U+2582 lower quarter
    [0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF], // U+2583 lower three eighths
    [0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF], // U+2584 lower half
    [0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF], // U+2585 lower five eighths
    [0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF], // U+2586 lower three quarters
    [0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF], // U+2587 lower seven eighths
    [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF], // U+2588 full block
    [0x7F, 0x7F, 0x7F, 0x7F, 0x7F, 0x7F, 0x7F, 0x7F], // U+2589 left seven eighths
    [0x3F, 0x3F, 0x3F, 0x3F, 0x3F, 0x3F, 0x3F, 0x3F], // U+258A left three quarters
    [0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F], // U+258B left five eighths
    [0x0F, 0x0F, 0x0F, 0x0F, 0x0F, 0x0F, 0x0F, 0x0F], // U+258C left half
    [0x07, 0x07, 0x07, 0x07, 0x07, 0x07, 0x07, 0x07], // U+258D left three eighths
    [0x03, 0x03, 0x03, 0x03, 0x03, 0x03, 0x03, 0x03], // U+258E left quarter
    [0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01], // U+258F left eighth
    [0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0], // U+2590 right half
    [0x44, 0x11, 0x44, 0x11, 0x44, 0x11, 0x44, 0x11], // U+2591 light shade
    [0x55, 0xAA, 0x55, 0xAA, 0x55, 0xAA, 0x55, 0xAA], // U+2592 medium shade
    [0xDD, 0x77, 0xDD, 0x77, 0xDD, 0x77, 0xDD, 0x77], // U+2593 dark shade
    [0xFF, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // U+2594 upper eighth
    [0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80], // U+2595 right eighth
    [0x00, 0x00, 0x00, 0x00, 0x0F, 0x0F, 0x0F, 0x0F], // U+2596 quadrant lower left
    [0x00, 0x00, 0x00, 0x00, 0xF0, 0xF0, 0xF0, 0xF0], // U+2597 quadrant lower right
    [0x0F, 0x0F, 0x0F, 0x0F, 0x00, 0x00, 0x00, 0x00], // U+2598 quadrant upper left
    [0x0F, 0x0F, 0x0F, 0x0F, 0xFF, 0xFF, 0xFF, 0xFF], // U+2599 upper left + lower half
    [0x0F, 0x0F, 0x0F, 0x0F, 0xF0, 0xF0, 0xF0, 0xF0], // U+259A upper left + lower right
    [0xFF, 0xFF, 0xFF, 0xFF, 0x0F, 0x0F, 0x0F, 0x0F], // U+259B upper half + lower left
    [0xFF, 0xFF, 0xFF, 0xFF, 0xF0, 0xF0, 0xF0, 0xF0], // U+259C upper half + lower right
    [0xF0, 0xF0, 0xF0, 0xF0, 0x00, 0x00, 0x00, 0x00], // U+259D quadrant upper right
    [0xF0, 0xF0, 0xF0, 0xF0, 0x0F, 0x0F, 0x0F, 0x0F], // U+259E upper right + lower left
    [0xF0, 0xF0, 0xF0, 0xF0, 0xFF, 0xFF, 0xFF, 0xFF], // U+259F upper right + lower half
];
