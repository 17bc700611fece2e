// This is a part of recode.
// See README.md and LICENSE.txt for details.

//! GB18030 four-byte pointer ranges.
//!
//! An excerpt of the full range table: the contiguous low-BMP segments up
//! to the Roman-numeral area, plus the single supplementary-plane range
//! that covers all of U+10000 and above from pointer 189000. Both arrays
//! are parallel and strictly ascending.

use crate::codec::gb18030::RangeTable;

const U_CHARS: &[u32] = &[
    0x0080, 0x00a5, 0x00a9, 0x00b2, 0x00b8, 0x00d8, 0x00e2, 0x00eb, 0x00ee, 0x00f4, 0x00f8,
    0x00fb, 0x00fd, 0x0102, 0x0114, 0x011c, 0x012c, 0x0145, 0x0149, 0x014e, 0x016c, 0x01cf,
    0x01d1, 0x01d3, 0x01d5, 0x01d7, 0x01d9, 0x01db, 0x01dd, 0x01fa, 0x0252, 0x0262, 0x02c8,
    0x02cc, 0x02da, 0x03a2, 0x03aa, 0x03c2, 0x03ca, 0x0402, 0x0450, 0x0452, 0x2011, 0x2017,
    0x201a, 0x201e, 0x2027, 0x2031, 0x2034, 0x2036, 0x203c, 0x20ad, 0x2104, 0x2106, 0x210a,
    0x2117, 0x2122, 0x216c, 0x10000,
];

const GB_CHARS: &[u32] = &[
    0, 36, 38, 45, 50, 81, 89, 95, 96, 100, 103, 104, 105, 109, 126, 133, 148, 172, 175, 179,
    208, 306, 307, 308, 309, 310, 311, 312, 313, 341, 428, 443, 544, 545, 558, 741, 742, 749,
    750, 805, 819, 820, 7922, 7924, 7925, 7927, 7934, 7943, 7944, 7945, 7950, 8062, 8148,
    8149, 8152, 8164, 8174, 8236, 189000,
];

pub static RANGES: RangeTable = RangeTable {
    u_chars: U_CHARS,
    gb_chars: GB_CHARS,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrays_are_parallel_and_ascending() {
        assert_eq!(U_CHARS.len(), GB_CHARS.len());
        assert!(U_CHARS.windows(2).all(|w| w[0] < w[1]));
        assert!(GB_CHARS.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn known_anchors() {
        // the first four-byte sequence is U+0080
        assert_eq!(RANGES.code_for_pointer(0), Some(0x80));
        // the currency sign sits in the GBK area, so its neighbors split
        assert_eq!(RANGES.code_for_pointer(35), Some(0xa3));
        assert_eq!(RANGES.code_for_pointer(36), Some(0xa5));
        // supplementary plane starts at pointer 189000
        assert_eq!(RANGES.pointer_for_code(0x10000), Some(189000));
        assert_eq!(RANGES.pointer_for_code(0x10400), Some(189000 + 0x400));
    }
}
