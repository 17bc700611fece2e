// This is a part of recode.
// See README.md and LICENSE.txt for details.

//! The GB18030 four-byte linear-range algorithm.
//!
//! GB18030 reserves the four-byte space `81-FE 30-39 81-FE 30-39` for every
//! Unicode code point missing from the two-byte GBK area. The four bytes
//! linearize to a single pointer (mixed radix 126/10/126/10, span sizes
//! 12600/1260/10/1) and a small table of parallel ascending range starts
//! defines a piecewise-linear bijection between pointer ranges and code
//! point ranges.

/// Parallel ascending arrays of range starts: `u_chars[i]` is the first
/// code point of a range and `gb_chars[i]` the corresponding first pointer.
/// Both built once per codec configuration and shared read-only.
#[derive(Debug, Clone, Copy)]
pub struct RangeTable {
    pub u_chars: &'static [u32],
    pub gb_chars: &'static [u32],
}

/// Finds the rightmost index `i` such that `table[i] <= val`, or `None`
/// when `val` precedes the whole table.
#[inline]
pub fn find_idx(table: &[u32], val: u32) -> Option<usize> {
    match table.partition_point(|&start| start <= val) {
        0 => None,
        i => Some(i - 1),
    }
}

impl RangeTable {
    /// Forward direction (decode): pointer to code point.
    pub fn code_for_pointer(&self, ptr: u32) -> Option<u32> {
        let idx = find_idx(self.gb_chars, ptr)?;
        Some(self.u_chars[idx] + (ptr - self.gb_chars[idx]))
    }

    /// Reverse direction (encode): code point to pointer, or `None` when
    /// the code point lies before every range.
    pub fn pointer_for_code(&self, code: u32) -> Option<u32> {
        let idx = find_idx(self.u_chars, code)?;
        Some(self.gb_chars[idx] + (code - self.u_chars[idx]))
    }
}

/// Linearizes a four-byte sequence into its pointer value.
#[inline]
pub fn join_pointer(b: [u8; 4]) -> u32 {
    (b[0] as u32 - 0x81) * 12600
        + (b[1] as u32 - 0x30) * 1260
        + (b[2] as u32 - 0x81) * 10
        + (b[3] as u32 - 0x30)
}

/// Decomposes a pointer value into its four-byte sequence.
#[inline]
pub fn split_pointer(ptr: u32) -> [u8; 4] {
    let (b1, ptr) = (ptr / 12600, ptr % 12600);
    let (b2, ptr) = (ptr / 1260, ptr % 1260);
    let (b3, b4) = (ptr / 10, ptr % 10);
    [
        (0x81 + b1) as u8,
        (0x30 + b2) as u8,
        (0x81 + b3) as u8,
        (0x30 + b4) as u8,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    static TABLE: RangeTable = RangeTable {
        u_chars: &[0x80, 0xa5, 0x10000],
        gb_chars: &[0, 36, 189000],
    };

    #[test]
    fn find_idx_contract() {
        let t = &[10u32, 20, 30];
        assert_eq!(find_idx(t, 9), None);
        assert_eq!(find_idx(t, 10), Some(0));
        assert_eq!(find_idx(t, 19), Some(0));
        assert_eq!(find_idx(t, 20), Some(1));
        assert_eq!(find_idx(t, 30), Some(2));
        assert_eq!(find_idx(t, 1000), Some(2));
    }

    #[test]
    fn pointer_round_trip() {
        for &ptr in &[0u32, 1, 35, 12599, 12600, 189000, 1237575] {
            assert_eq!(join_pointer(split_pointer(ptr)), ptr);
        }
        // pointer 0 is the first four-byte sequence
        assert_eq!(split_pointer(0), [0x81, 0x30, 0x81, 0x30]);
        // U+10000 is well known to live at 90 30 81 30
        assert_eq!(split_pointer(189000), [0x90, 0x30, 0x81, 0x30]);
        assert_eq!(join_pointer([0xfe, 0x39, 0xfe, 0x39]), 1587599);
    }

    #[test]
    fn linear_mapping() {
        assert_eq!(TABLE.code_for_pointer(0), Some(0x80));
        assert_eq!(TABLE.code_for_pointer(35), Some(0xa3));
        assert_eq!(TABLE.code_for_pointer(36), Some(0xa5));
        assert_eq!(TABLE.code_for_pointer(189000), Some(0x10000));
        assert_eq!(TABLE.code_for_pointer(189001), Some(0x10001));

        assert_eq!(TABLE.pointer_for_code(0x80), Some(0));
        assert_eq!(TABLE.pointer_for_code(0xa3), Some(35));
        assert_eq!(TABLE.pointer_for_code(0x10001), Some(189001));
        assert_eq!(TABLE.pointer_for_code(0x7f), None);
    }
}
