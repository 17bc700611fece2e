// This is a part of recode.
// See README.md and LICENSE.txt for details.

//! Additions layered over cp936 for GBK and GB18030: an excerpt of the
//! GB18030-2005 two-byte assignments missing from the base code page.

use crate::codec::dbcs::{Chunk, Part};

const M_ACUTE: &[Part] = &[Part::Literal("\u{1e3f}")];
const N_GRAVE: &[Part] = &[Part::Literal("\u{1f9}")];

pub const TABLE: &[Chunk] = &[
    Chunk { start: "a8bc", parts: M_ACUTE },
    Chunk { start: "a8bf", parts: N_GRAVE },
];
