//! WinAnsiEncoding (code page 1252) for the standard Type1 fonts.

/// Characters placed in the 0x80..=0x9F block, indexed from 0x80.
/// `None` marks the five codes the encoding leaves undefined.
const HIGH_BLOCK: [Option<char>; 32] = [
    Some('\u{20AC}'),
    None,
    Some('\u{201A}'),
    Some('\u{0192}'),
    Some('\u{201E}'),
    Some('\u{2026}'),
    Some('\u{2020}'),
    Some('\u{2021}'),
    Some('\u{02C6}'),
    Some('\u{2030}'),
    Some('\u{0160}'),
    Some('\u{2039}'),
    Some('\u{0152}'),
    None,
    Some('\u{017D}'),
    None,
    None,
    Some('\u{2018}'),
    Some('\u{2019}'),
    Some('\u{201C}'),
    Some('\u{201D}'),
    Some('\u{2022}'),
    Some('\u{2013}'),
    Some('\u{2014}'),
    Some('\u{02DC}'),
    Some('\u{2122}'),
    Some('\u{0161}'),
    Some('\u{203A}'),
    Some('\u{0153}'),
    None,
    Some('\u{017E}'),
    Some('\u{0178}'),
];

/// Byte used to show characters the encoding cannot represent.
pub(crate) const REPLACEMENT: u8 = b'?';

/// Returns the WinAnsi code for `c`, if it has one.
///
/// ASCII and the Latin-1 range 0xA0..=0xFF map to themselves. The C1
/// control characters U+0080..=U+009F have no code; their slots hold
/// typographic characters such as `€` and `“` instead.
pub(crate) fn win_ansi_byte(c: char) -> Option<u8> {
    match c as u32 {
        code @ (0..=0x7F | 0xA0..=0xFF) => u8::try_from(code).ok(),
        0x80..=0x9F => None,
        _ => HIGH_BLOCK
            .iter()
            .position(|&slot| slot == Some(c))
            .and_then(|i| u8::try_from(0x80 + i).ok()),
    }
}

/// Encodes `s` for a WinAnsiEncoding font, replacing unmappable characters.
pub(crate) fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars()
        .map(|c| win_ansi_byte(c).unwrap_or(REPLACEMENT))
        .collect()
}
