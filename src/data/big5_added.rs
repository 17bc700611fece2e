// This is a part of recode.
// See README.md and LICENSE.txt for details.

//! HKSCS additions layered over cp950: an excerpt containing the
//! composed-letter area, whose entries decode to two-code-point
//! sequences interleaved with their standalone base letters.

use crate::codec::dbcs::{Chunk, Part};

// 0x8862 [U+00CA U+0304], 0x8863 U+00CA, 0x8864 [U+00CA U+030C]
const E_CIRCUMFLEX_UPPER: &[Part] = &[Part::Literal(
    "\u{fff}\u{ca}\u{304}\u{ca}\u{fff}\u{ca}\u{30c}",
)];
// 0x88A3 [U+00EA U+0304], 0x88A4 U+00EA, 0x88A5 [U+00EA U+030C]
const E_CIRCUMFLEX_LOWER: &[Part] = &[Part::Literal(
    "\u{fff}\u{ea}\u{304}\u{ea}\u{fff}\u{ea}\u{30c}",
)];

pub const TABLE: &[Chunk] = &[
    Chunk { start: "8862", parts: E_CIRCUMFLEX_UPPER },
    Chunk { start: "88a3", parts: E_CIRCUMFLEX_LOWER },
];
