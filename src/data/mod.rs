// This is a part of recode.
// See README.md and LICENSE.txt for details.

//! Mapping tables and per-encoding codec configurations.
//!
//! The multi-byte tables are excerpts of the corresponding code pages,
//! arranged exactly the way full tables would be: declarative chunks fed
//! to the trie builder, with supplement tables layered after their base.

pub mod big5_added;
pub mod cp932;
pub mod cp936;
pub mod cp950;
pub mod eucjp;
pub mod gb18030_ranges;
pub mod gbk_added;
pub mod sbcs;

use crate::codec::dbcs::{DbcsOptions, EncodeSkip};

/// Shift_JIS, Microsoft flavor. The backslash and overline slots encode
/// the yen sign and macron on top of their ASCII decode mappings, and the
/// IBM-extension duplicate kanji area is excluded from the encode table.
pub static SHIFT_JIS: DbcsOptions = DbcsOptions {
    name: "shift-jis",
    tables: &[cp932::TABLE],
    gb18030_ranges: None,
    encode_skip: &[EncodeSkip::Range(0xed40, 0xf940)],
    encode_add: &[('\u{a5}', 0x5c), ('\u{203e}', 0x7e)],
};

pub static EUC_JP: DbcsOptions = DbcsOptions {
    name: "euc-jp",
    tables: &[eucjp::TABLE],
    gb18030_ranges: None,
    encode_skip: &[],
    encode_add: &[('\u{a5}', 0x5c), ('\u{203e}', 0x7e)],
};

/// The base simplified-Chinese code page, with the one-byte euro sign.
pub static CP936: DbcsOptions = DbcsOptions {
    name: "cp936",
    tables: &[cp936::TABLE],
    gb18030_ranges: None,
    encode_skip: &[],
    encode_add: &[],
};

/// cp936 plus the GB18030-2005 two-byte additions.
pub static GBK: DbcsOptions = DbcsOptions {
    name: "gbk",
    tables: &[cp936::TABLE, gbk_added::TABLE],
    gb18030_ranges: None,
    encode_skip: &[],
    encode_add: &[],
};

/// GBK plus the four-byte ranges. The one-byte euro stays decodable but
/// the two-byte 0xA2E3 form is preferred when encoding.
pub static GB18030: DbcsOptions = DbcsOptions {
    name: "gb18030",
    tables: &[cp936::TABLE, gbk_added::TABLE],
    gb18030_ranges: Some(&gb18030_ranges::RANGES),
    encode_skip: &[EncodeSkip::Value(0x80)],
    encode_add: &[('\u{20ac}', 0xa2e3)],
};

pub static CP950: DbcsOptions = DbcsOptions {
    name: "cp950",
    tables: &[cp950::TABLE],
    gb18030_ranges: None,
    encode_skip: &[],
    encode_add: &[],
};

/// cp950 plus HKSCS. U+5341 appears at both 0xA2CC and 0xA451; the symbol
/// slot is skipped so the ideograph area wins the encode direction.
pub static BIG5_HKSCS: DbcsOptions = DbcsOptions {
    name: "big5-hkscs",
    tables: &[cp950::TABLE, big5_added::TABLE],
    gb18030_ranges: None,
    encode_skip: &[EncodeSkip::Value(0xa2cc)],
    encode_add: &[],
};
