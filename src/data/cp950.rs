// This is a part of recode.
// See README.md and LICENSE.txt for details.

//! Big5 (code page 950) mapping chunks.
//!
//! An excerpt: ASCII, the head of the symbol row, and a few common
//! characters, including the 0xA2CC/0xA451 double mapping of U+5341.

use crate::codec::dbcs::{Chunk, Part};

const ASCII: &[Part] = &[Part::Literal("\u{0}"), Part::Extend(127)];
// row 0xA1 head: ideographic space and punctuation
const ROW_A1: &[Part] = &[Part::Literal("\u{3000}\u{ff0c}\u{3001}\u{3002}\u{ff0e}")];
// "ten" appears twice in the code page; this one is excluded from the
// encode table by configuration
const SHI_SYMBOL: &[Part] = &[Part::Literal("\u{5341}")];
const YI: &[Part] = &[Part::Literal("\u{4e00}")];
const SHI: &[Part] = &[Part::Literal("\u{5341}")];

pub const TABLE: &[Chunk] = &[
    Chunk { start: "00", parts: ASCII },
    Chunk { start: "a140", parts: ROW_A1 },
    Chunk { start: "a2cc", parts: SHI_SYMBOL },
    Chunk { start: "a440", parts: YI },
    Chunk { start: "a451", parts: SHI },
];
