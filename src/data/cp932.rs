// This is a part of recode.
// See README.md and LICENSE.txt for details.

//! Shift_JIS (code page 932) mapping chunks.
//!
//! An excerpt of the full code page: the single-byte ranges, the kana
//! rows, fullwidth alphanumerics, the head of the JIS X 0208 symbol and
//! kanji areas, and a few common kanji.

use crate::codec::dbcs::{Chunk, Part};

// 0x00-0x80 pass through
const ASCII: &[Part] = &[Part::Literal("\u{0}"), Part::Extend(128)];
// halfwidth katakana at 0xA1-0xDF
const HW_KATAKANA: &[Part] = &[Part::Literal("\u{ff61}"), Part::Extend(62)];
// JIS X 0208 row 1 head: ideographic space and punctuation
const ROW_81: &[Part] = &[Part::Literal(
    "\u{3000}\u{3001}\u{3002}\u{ff0c}\u{ff0e}\u{30fb}\u{ff1a}\u{ff1b}\u{ff1f}\u{ff01}",
)];
const CHOON: &[Part] = &[Part::Literal("\u{30fc}")];
// 0x8160 is the fullwidth tilde, not the JIS wave dash
const TILDE: &[Part] = &[Part::Literal("\u{ff5e}")];
const FW_DIGITS: &[Part] = &[Part::Literal("\u{ff10}"), Part::Extend(9)];
const FW_UPPER: &[Part] = &[Part::Literal("\u{ff21}"), Part::Extend(25)];
const FW_LOWER: &[Part] = &[Part::Literal("\u{ff41}"), Part::Extend(25)];
// hiragana 0x829F-0x82F1
const HIRAGANA: &[Part] = &[Part::Literal("\u{3041}"), Part::Extend(82)];
// katakana 0x8340-0x837E and 0x8380-0x8396
const KATAKANA_A: &[Part] = &[Part::Literal("\u{30a1}"), Part::Extend(62)];
const KATAKANA_B: &[Part] = &[Part::Literal("\u{30e0}"), Part::Extend(22)];
// first kanji of the level-1 area, and a few common ones
const A_KANJI: &[Part] = &[Part::Literal("\u{4e9c}")];
const HI: &[Part] = &[Part::Literal("\u{65e5}")];
const HON: &[Part] = &[Part::Literal("\u{672c}")];
const GO: &[Part] = &[Part::Literal("\u{8a9e}")];

pub const TABLE: &[Chunk] = &[
    Chunk { start: "00", parts: ASCII },
    Chunk { start: "a1", parts: HW_KATAKANA },
    Chunk { start: "8140", parts: ROW_81 },
    Chunk { start: "815b", parts: CHOON },
    Chunk { start: "8160", parts: TILDE },
    Chunk { start: "824f", parts: FW_DIGITS },
    Chunk { start: "8260", parts: FW_UPPER },
    Chunk { start: "8281", parts: FW_LOWER },
    Chunk { start: "829f", parts: HIRAGANA },
    Chunk { start: "8340", parts: KATAKANA_A },
    Chunk { start: "8380", parts: KATAKANA_B },
    Chunk { start: "889f", parts: A_KANJI },
    Chunk { start: "8cea", parts: GO },
    Chunk { start: "93fa", parts: HI },
    Chunk { start: "967b", parts: HON },
];
