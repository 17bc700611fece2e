// This is a part of recode.
// See README.md and LICENSE.txt for details.

//! Internal utilities shared by the codecs.

use crate::types::DEFAULT_CHAR_UNICODE;

/// First UTF-16 high (lead) surrogate.
pub const SURROGATE_LEAD_START: u16 = 0xd800;
/// First UTF-16 low (trail) surrogate.
pub const SURROGATE_TRAIL_START: u16 = 0xdc00;
/// One past the last surrogate.
pub const SURROGATE_END: u16 = 0xe000;

/// True for a UTF-16 high (lead) surrogate.
#[inline]
pub fn is_lead_surrogate(unit: u16) -> bool {
    (SURROGATE_LEAD_START..SURROGATE_TRAIL_START).contains(&unit)
}

/// True for a UTF-16 low (trail) surrogate.
#[inline]
pub fn is_trail_surrogate(unit: u16) -> bool {
    (SURROGATE_TRAIL_START..SURROGATE_END).contains(&unit)
}

/// Combines a surrogate pair into the code point it encodes.
#[inline]
pub fn combine_surrogates(lead: u16, trail: u16) -> u32 {
    0x10000 + (lead as u32 - SURROGATE_LEAD_START as u32) * 0x400
        + (trail as u32 - SURROGATE_TRAIL_START as u32)
}

/// Appends a code point to the output, substituting the replacement
/// character for anything that is not a Unicode scalar value. Table values
/// are validated at build time, so the fallback only guards corrupt data.
#[inline]
pub fn push_code(out: &mut String, code: u32) {
    out.push(char::from_u32(code).unwrap_or(DEFAULT_CHAR_UNICODE));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surrogate_classification() {
        assert!(is_lead_surrogate(0xd800));
        assert!(is_lead_surrogate(0xdbff));
        assert!(!is_lead_surrogate(0xdc00));
        assert!(is_trail_surrogate(0xdc00));
        assert!(is_trail_surrogate(0xdfff));
        assert!(!is_trail_surrogate(0xe000));
        assert!(!is_lead_surrogate(0x3042));
    }

    #[test]
    fn combine() {
        assert_eq!(combine_surrogates(0xd800, 0xdc00), 0x10000);
        assert_eq!(combine_surrogates(0xd840, 0xdc0b), 0x2000b);
        assert_eq!(combine_surrogates(0xdbff, 0xdfff), 0x10ffff);
    }

    #[test]
    fn push_code_guards_non_scalar_values() {
        let mut s = String::new();
        push_code(&mut s, 0x3042);
        push_code(&mut s, 0xd800); // lone surrogate from a corrupt table
        push_code(&mut s, 0x10000);
        assert_eq!(s, "\u{3042}\u{fffd}\u{10000}");
    }
}
