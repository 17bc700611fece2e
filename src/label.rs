// This is a part of recode.
// See README.md and LICENSE.txt for details.

//! Encoding label resolution.
//!
//! Labels are matched loosely: case and punctuation are ignored and a
//! trailing `:NNNN` year suffix is dropped, so `UTF-16`, `utf16` and
//! `Utf_16` all name the same codec. Built codecs are cached process-wide
//! under their canonical name, so every alias of an encoding shares one
//! set of tables.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};

use log::debug;

use crate::codec::dbcs::{DbcsCodec, DbcsOptions};
use crate::codec::singlebyte::{SbcsCodec, SbcsOptions};
use crate::codec::utf_16::{Endian, Utf16AutoCodec, Utf16Codec};
use crate::codec::utf_7::{Utf7Codec, Utf7ImapCodec};
use crate::data;
use crate::error::{BuildError, Result};
use crate::types::CodecRef;

/// Reduces a label to lowercase alphanumerics, dropping a trailing
/// four-digit year suffix first.
pub fn canonical(label: &str) -> String {
    let lower = label.to_ascii_lowercase();
    let base = match lower.rfind(':') {
        Some(pos)
            if lower[pos + 1..].len() == 4
                && lower[pos + 1..].bytes().all(|b| b.is_ascii_digit()) =>
        {
            &lower[..pos]
        }
        _ => &lower[..],
    };
    base.chars().filter(char::is_ascii_alphanumeric).collect()
}

enum Definition {
    Dbcs(&'static DbcsOptions),
    Sbcs(&'static SbcsOptions),
    Utf16(Endian),
    Utf16Auto,
    Utf7,
    Utf7Imap,
}

/// Maps a canonical label to the codec definition and the cache key its
/// aliases share.
fn definition(canonical: &str) -> Option<(&'static str, Definition)> {
    let entry = match canonical {
        "shiftjis" | "sjis" | "csshiftjis" | "mskanji" | "xsjis" | "windows31j" | "ms31j"
        | "cp932" | "ms932" | "windows932" | "932" => {
            ("shift-jis", Definition::Dbcs(&data::SHIFT_JIS))
        }
        "eucjp" | "ujis" | "xeucjp" | "cseucpkdfmtjapanese" => {
            ("euc-jp", Definition::Dbcs(&data::EUC_JP))
        }

        "cp936" | "ms936" | "windows936" | "936" | "gb2312" | "gb231280" | "gb23121980"
        | "csgb2312" | "csiso58gb231280" | "euccn" => ("cp936", Definition::Dbcs(&data::CP936)),
        "gbk" | "xgbk" | "isoir58" => ("gbk", Definition::Dbcs(&data::GBK)),
        "gb18030" | "chinese" => ("gb18030", Definition::Dbcs(&data::GB18030)),

        "cp950" | "ms950" | "windows950" | "950" => ("cp950", Definition::Dbcs(&data::CP950)),
        "big5" | "big5hkscs" | "cnbig5" | "csbig5" | "xxbig5" => {
            ("big5-hkscs", Definition::Dbcs(&data::BIG5_HKSCS))
        }

        "windows1252" | "cp1252" | "1252" => {
            ("windows-1252", Definition::Sbcs(&data::sbcs::WINDOWS_1252))
        }
        "iso88591" | "latin1" | "l1" | "cp819" | "csisolatin1" => {
            ("iso-8859-1", Definition::Sbcs(&data::sbcs::ISO_8859_1))
        }

        "utf16be" => ("utf-16be", Definition::Utf16(Endian::Big)),
        "utf16le" | "ucs2" | "ucs2le" => ("utf-16le", Definition::Utf16(Endian::Little)),
        "utf16" => ("utf-16", Definition::Utf16Auto),
        "utf7" | "unicode11utf7" => ("utf-7", Definition::Utf7),
        "utf7imap" => ("utf-7-imap", Definition::Utf7Imap),

        _ => return None,
    };
    Some(entry)
}

static CACHE: OnceLock<Mutex<HashMap<&'static str, CodecRef>>> = OnceLock::new();

/// Resolves a label to its built codec, building and caching on first use.
pub fn codec_for_label(label: &str) -> Result<CodecRef> {
    let canon = canonical(label);
    let (key, defn) = definition(&canon).ok_or_else(|| BuildError::UnknownEncoding {
        label: label.to_owned(),
        canonical: canon.clone(),
    })?;

    let cache = CACHE.get_or_init(|| Mutex::new(HashMap::new()));
    let mut map = cache.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    if let Some(codec) = map.get(key) {
        return Ok(Arc::clone(codec));
    }

    debug!("building codec {} for label {:?}", key, label);
    let codec: CodecRef = match defn {
        Definition::Dbcs(options) => Arc::new(DbcsCodec::new(options)?),
        Definition::Sbcs(options) => Arc::new(SbcsCodec::new(options)?),
        Definition::Utf16(endian) => Arc::new(Utf16Codec::new(endian)),
        Definition::Utf16Auto => Arc::new(Utf16AutoCodec),
        Definition::Utf7 => Arc::new(Utf7Codec),
        Definition::Utf7Imap => Arc::new(Utf7ImapCodec),
    };
    map.insert(key, Arc::clone(&codec));
    Ok(codec)
}

/// True if the label names a supported encoding.
pub fn exists(label: &str) -> bool {
    definition(&canonical(label)).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_forms() {
        assert_eq!(canonical("UTF-16"), "utf16");
        assert_eq!(canonical("Shift_JIS"), "shiftjis");
        assert_eq!(canonical("GB18030:2005"), "gb18030");
        assert_eq!(canonical("x-Mac:12"), "xmac12");
    }

    #[test]
    fn aliases_share_one_codec() {
        let a = codec_for_label("Shift_JIS").unwrap();
        let b = codec_for_label("windows-31j").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(a.name(), "shift-jis");
    }

    #[test]
    fn unknown_label() {
        match codec_for_label("no-such-charset") {
            Err(BuildError::UnknownEncoding { label, canonical }) => {
                assert_eq!(label, "no-such-charset");
                assert_eq!(canonical, "nosuchcharset");
            }
            other => panic!("unexpected: {:?}", other.map(|c| c.name())),
        }
    }

    #[test]
    fn exists_matches_definition() {
        assert!(exists("GBK"));
        assert!(exists("utf-7"));
        assert!(!exists("klingon"));
    }
}
