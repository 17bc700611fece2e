// This is a part of recode.
// See README.md and LICENSE.txt for details.

//! GBK (code page 936) mapping chunks.
//!
//! An excerpt of the full code page: ASCII, the one-byte euro sign, the
//! GB2312 symbol and letter rows, and a handful of common hanzi. Every
//! lead byte 0x81-0xFE carries a (possibly empty) two-byte chunk so that
//! the GB18030 four-byte space can be grafted under all of them.

use crate::codec::dbcs::{Chunk, Part};

const EMPTY: &[Part] = &[];

const ASCII: &[Part] = &[Part::Literal("\u{0}"), Part::Extend(127)];
const EURO: &[Part] = &[Part::Literal("\u{20ac}")];
// GB2312 row 1 head: ideographic space and punctuation
const ROW_A1: &[Part] = &[Part::Literal("\u{3000}\u{3001}\u{3002}\u{b7}")];
const ROW_A2E3: &[Part] = &[Part::Literal("\u{20ac}")];
// fullwidth digits and letters from row 3
const FW_DIGITS: &[Part] = &[Part::Literal("\u{ff10}"), Part::Extend(9)];
const FW_UPPER: &[Part] = &[Part::Literal("\u{ff21}"), Part::Extend(25)];
const FW_LOWER: &[Part] = &[Part::Literal("\u{ff41}"), Part::Extend(25)];
// first hanzi of row 16 and a few common characters
const ROW_B0: &[Part] = &[Part::Literal("\u{554a}\u{963f}\u{57c3}")];
const HUA: &[Part] = &[Part::Literal("\u{534e}")];
const GUO: &[Part] = &[Part::Literal("\u{56fd}")];
const GONG: &[Part] = &[Part::Literal("\u{5171}")];
const HE: &[Part] = &[Part::Literal("\u{548c}")];
const MIN: &[Part] = &[Part::Literal("\u{6c11}")];
const REN: &[Part] = &[Part::Literal("\u{4eba}")];
const YI: &[Part] = &[Part::Literal("\u{4e00}")];
const ZHONG: &[Part] = &[Part::Literal("\u{4e2d}")];

pub const TABLE: &[Chunk] = &[
    Chunk { start: "00", parts: ASCII },
    Chunk { start: "80", parts: EURO },
    Chunk { start: "a1a1", parts: ROW_A1 },
    Chunk { start: "a2e3", parts: ROW_A2E3 },
    Chunk { start: "a3b0", parts: FW_DIGITS },
    Chunk { start: "a3c1", parts: FW_UPPER },
    Chunk { start: "a3e1", parts: FW_LOWER },
    Chunk { start: "b0a1", parts: ROW_B0 },
    Chunk { start: "b9b2", parts: GONG },
    Chunk { start: "b9fa", parts: GUO },
    Chunk { start: "bacd", parts: HE },
    Chunk { start: "bbaa", parts: HUA },
    Chunk { start: "c3f1", parts: MIN },
    Chunk { start: "c8cb", parts: REN },
    Chunk { start: "d2bb", parts: YI },
    Chunk { start: "d6d0", parts: ZHONG },
    // two-byte nodes for every lead
    Chunk { start: "8140", parts: EMPTY }, Chunk { start: "8240", parts: EMPTY }, Chunk { start: "8340", parts: EMPTY },
    Chunk { start: "8440", parts: EMPTY }, Chunk { start: "8540", parts: EMPTY }, Chunk { start: "8640", parts: EMPTY },
    Chunk { start: "8740", parts: EMPTY }, Chunk { start: "8840", parts: EMPTY }, Chunk { start: "8940", parts: EMPTY },
    Chunk { start: "8a40", parts: EMPTY }, Chunk { start: "8b40", parts: EMPTY }, Chunk { start: "8c40", parts: EMPTY },
    Chunk { start: "8d40", parts: EMPTY }, Chunk { start: "8e40", parts: EMPTY }, Chunk { start: "8f40", parts: EMPTY },
    Chunk { start: "9040", parts: EMPTY }, Chunk { start: "9140", parts: EMPTY }, Chunk { start: "9240", parts: EMPTY },
    Chunk { start: "9340", parts: EMPTY }, Chunk { start: "9440", parts: EMPTY }, Chunk { start: "9540", parts: EMPTY },
    Chunk { start: "9640", parts: EMPTY }, Chunk { start: "9740", parts: EMPTY }, Chunk { start: "9840", parts: EMPTY },
    Chunk { start: "9940", parts: EMPTY }, Chunk { start: "9a40", parts: EMPTY }, Chunk { start: "9b40", parts: EMPTY },
    Chunk { start: "9c40", parts: EMPTY }, Chunk { start: "9d40", parts: EMPTY }, Chunk { start: "9e40", parts: EMPTY },
    Chunk { start: "9f40", parts: EMPTY }, Chunk { start: "a040", parts: EMPTY }, Chunk { start: "a140", parts: EMPTY },
    Chunk { start: "a240", parts: EMPTY }, Chunk { start: "a340", parts: EMPTY }, Chunk { start: "a440", parts: EMPTY },
    Chunk { start: "a540", parts: EMPTY }, Chunk { start: "a640", parts: EMPTY }, Chunk { start: "a740", parts: EMPTY },
    Chunk { start: "a840", parts: EMPTY }, Chunk { start: "a940", parts: EMPTY }, Chunk { start: "aa40", parts: EMPTY },
    Chunk { start: "ab40", parts: EMPTY }, Chunk { start: "ac40", parts: EMPTY }, Chunk { start: "ad40", parts: EMPTY },
    Chunk { start: "ae40", parts: EMPTY }, Chunk { start: "af40", parts: EMPTY }, Chunk { start: "b040", parts: EMPTY },
    Chunk { start: "b140", parts: EMPTY }, Chunk { start: "b240", parts: EMPTY }, Chunk { start: "b340", parts: EMPTY },
    Chunk { start: "b440", parts: EMPTY }, Chunk { start: "b540", parts: EMPTY }, Chunk { start: "b640", parts: EMPTY },
    Chunk { start: "b740", parts: EMPTY }, Chunk { start: "b840", parts: EMPTY }, Chunk { start: "b940", parts: EMPTY },
    Chunk { start: "ba40", parts: EMPTY }, Chunk { start: "bb40", parts: EMPTY }, Chunk { start: "bc40", parts: EMPTY },
    Chunk { start: "bd40", parts: EMPTY }, Chunk { start: "be40", parts: EMPTY }, Chunk { start: "bf40", parts: EMPTY },
    Chunk { start: "c040", parts: EMPTY }, Chunk { start: "c140", parts: EMPTY }, Chunk { start: "c240", parts: EMPTY },
    Chunk { start: "c340", parts: EMPTY }, Chunk { start: "c440", parts: EMPTY }, Chunk { start: "c540", parts: EMPTY },
    Chunk { start: "c640", parts: EMPTY }, Chunk { start: "c740", parts: EMPTY }, Chunk { start: "c840", parts: EMPTY },
    Chunk { start: "c940", parts: EMPTY }, Chunk { start: "ca40", parts: EMPTY }, Chunk { start: "cb40", parts: EMPTY },
    Chunk { start: "cc40", parts: EMPTY }, Chunk { start: "cd40", parts: EMPTY }, Chunk { start: "ce40", parts: EMPTY },
    Chunk { start: "cf40", parts: EMPTY }, Chunk { start: "d040", parts: EMPTY }, Chunk { start: "d140", parts: EMPTY },
    Chunk { start: "d240", parts: EMPTY }, Chunk { start: "d340", parts: EMPTY }, Chunk { start: "d440", parts: EMPTY },
    Chunk { start: "d540", parts: EMPTY }, Chunk { start: "d640", parts: EMPTY }, Chunk { start: "d740", parts: EMPTY },
    Chunk { start: "d840", parts: EMPTY }, Chunk { start: "d940", parts: EMPTY }, Chunk { start: "da40", parts: EMPTY },
    Chunk { start: "db40", parts: EMPTY }, Chunk { start: "dc40", parts: EMPTY }, Chunk { start: "dd40", parts: EMPTY },
    Chunk { start: "de40", parts: EMPTY }, Chunk { start: "df40", parts: EMPTY }, Chunk { start: "e040", parts: EMPTY },
    Chunk { start: "e140", parts: EMPTY }, Chunk { start: "e240", parts: EMPTY }, Chunk { start: "e340", parts: EMPTY },
    Chunk { start: "e440", parts: EMPTY }, Chunk { start: "e540", parts: EMPTY }, Chunk { start: "e640", parts: EMPTY },
    Chunk { start: "e740", parts: EMPTY }, Chunk { start: "e840", parts: EMPTY }, Chunk { start: "e940", parts: EMPTY },
    Chunk { start: "ea40", parts: EMPTY }, Chunk { start: "eb40", parts: EMPTY }, Chunk { start: "ec40", parts: EMPTY },
    Chunk { start: "ed40", parts: EMPTY }, Chunk { start: "ee40", parts: EMPTY }, Chunk { start: "ef40", parts: EMPTY },
    Chunk { start: "f040", parts: EMPTY }, Chunk { start: "f140", parts: EMPTY }, Chunk { start: "f240", parts: EMPTY },
    Chunk { start: "f340", parts: EMPTY }, Chunk { start: "f440", parts: EMPTY }, Chunk { start: "f540", parts: EMPTY },
    Chunk { start: "f640", parts: EMPTY }, Chunk { start: "f740", parts: EMPTY }, Chunk { start: "f840", parts: EMPTY },
    Chunk { start: "f940", parts: EMPTY }, Chunk { start: "fa40", parts: EMPTY }, Chunk { start: "fb40", parts: EMPTY },
    Chunk { start: "fc40", parts: EMPTY }, Chunk { start: "fd40", parts: EMPTY }, Chunk { start: "fe40", parts: EMPTY },
];
