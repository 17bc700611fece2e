// This is a part of recode.
// See README.md and LICENSE.txt for details.

//! EUC-JP mapping chunks.
//!
//! An excerpt: ASCII, halfwidth katakana behind the 0x8E single-shift,
//! the JIS X 0208 kana and symbol row heads, a few common kanji, and one
//! JIS X 0212 character behind the three-byte 0x8F single-shift.

use crate::codec::dbcs::{Chunk, Part};

const ASCII: &[Part] = &[Part::Literal("\u{0}"), Part::Extend(127)];
const HW_KATAKANA: &[Part] = &[Part::Literal("\u{ff61}"), Part::Extend(62)];
const ROW_1: &[Part] = &[Part::Literal(
    "\u{3000}\u{3001}\u{3002}\u{ff0c}\u{ff0e}\u{30fb}\u{ff1a}\u{ff1b}\u{ff1f}\u{ff01}",
)];
const HIRAGANA: &[Part] = &[Part::Literal("\u{3041}"), Part::Extend(82)];
const KATAKANA: &[Part] = &[Part::Literal("\u{30a1}"), Part::Extend(85)];
const HI: &[Part] = &[Part::Literal("\u{65e5}")];
const HON: &[Part] = &[Part::Literal("\u{672c}")];
const GO: &[Part] = &[Part::Literal("\u{8a9e}")];
// JIS X 0212
const X0212: &[Part] = &[Part::Literal("\u{736c}")];

pub const TABLE: &[Chunk] = &[
    Chunk { start: "00", parts: ASCII },
    Chunk { start: "8ea1", parts: HW_KATAKANA },
    Chunk { start: "a1a1", parts: ROW_1 },
    Chunk { start: "a4a1", parts: HIRAGANA },
    Chunk { start: "a5a1", parts: KATAKANA },
    Chunk { start: "b8ec", parts: GO },
    Chunk { start: "c6fc", parts: HI },
    Chunk { start: "cbdc", parts: HON },
    Chunk { start: "8fcbc6", parts: X0212 },
];
