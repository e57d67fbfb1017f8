//! Font metrics for the two built-in Type1 fonts used on markdown pages.
//!
//! Widths come from the Adobe core-font AFM files (1000 units per em) so
//! line measurement matches what a conforming viewer renders without
//! embedding any font program. Text is encoded WinAnsi; characters outside
//! the encoding degrade to `?`.

/// Glyph widths for Helvetica, ASCII 0x20..=0x7E, in 1/1000 em.
#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333,
    278, 278, 556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278,
    584, 584, 584, 556, 1015, 667, 667, 722, 722, 667, 611, 778, 722, 278,
    500, 667, 556, 833, 722, 778, 667, 778, 722, 667, 611, 722, 667, 944,
    667, 667, 611, 278, 278, 278, 469, 556, 333, 556, 556, 500, 556, 556,
    278, 556, 556, 222, 222, 500, 222, 833, 556, 556, 556, 556, 333, 500,
    278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

/// Glyph widths for Helvetica-Bold, ASCII 0x20..=0x7E, in 1/1000 em.
#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333,
    278, 278, 556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333,
    584, 584, 584, 611, 975, 722, 722, 722, 722, 667, 611, 778, 722, 278,
    556, 722, 611, 833, 722, 778, 667, 778, 722, 667, 611, 722, 667, 944,
    667, 667, 611, 333, 278, 333, 584, 556, 333, 556, 611, 556, 611, 556,
    333, 611, 611, 278, 278, 556, 278, 889, 611, 611, 611, 611, 389, 556,
    333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

/// Width assumed for bytes outside the ASCII table.
const HELVETICA_FALLBACK: u16 = 556;
const HELVETICA_BOLD_FALLBACK: u16 = 611;

/// The fonts available on generated text pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    /// Body text.
    Helvetica,
    /// Page titles.
    HelveticaBold,
}

impl Font {
    /// PostScript base font name.
    pub fn base_name(&self) -> &'static str {
        match self {
            Self::Helvetica => "Helvetica",
            Self::HelveticaBold => "Helvetica-Bold",
        }
    }

    /// Width of one encoded byte in 1/1000 em.
    fn glyph_width(&self, byte: u8) -> u16 {
        let (table, fallback) = match self {
            Self::Helvetica => (&HELVETICA_WIDTHS, HELVETICA_FALLBACK),
            Self::HelveticaBold => (&HELVETICA_BOLD_WIDTHS, HELVETICA_BOLD_FALLBACK),
        };
        if (0x20..=0x7E).contains(&byte) {
            table[(byte - 0x20) as usize]
        } else {
            fallback
        }
    }

    /// Width of `text` in points when set at `size`.
    ///
    /// Measures the WinAnsi encoding of the text, the same bytes that end
    /// up in the content stream.
    pub fn text_width(&self, text: &str, size: f64) -> f64 {
        let units: u64 = encode_win_ansi(text)
            .iter()
            .map(|&b| u64::from(self.glyph_width(b)))
            .sum();
        units as f64 * size / 1000.0
    }
}

/// Encode text as WinAnsi (cp1252) bytes.
///
/// Latin-1 characters map directly; the common typographic characters in
/// the 0x80..0x9F window are translated; everything else becomes `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '\u{20AC}' => 0x80, // €
            '\u{2026}' => 0x85, // …
            '\u{2018}' => 0x91, // '
            '\u{2019}' => 0x92, // '
            '\u{201C}' => 0x93, // "
            '\u{201D}' => 0x94, // "
            '\u{2022}' => 0x95, // •
            '\u{2013}' => 0x96, // –
            '\u{2014}' => 0x97, // —
            c if (c as u32) <= 0xFF => c as u8,
            _ => b'?',
        })
        .collect()
}
