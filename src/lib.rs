// This is a part of recode.
// See README.md and LICENSE.txt for details.

/*!
 * Character encoding support for Rust, modeled after streaming converters:
 * every encoding is a pair of incremental transforms between byte streams
 * and Unicode text.
 *
 * ```rust
 * let bytes = recode::encode("\u{65e5}\u{672c}", "shift_jis").unwrap();
 * assert_eq!(bytes, [0x93, 0xfa, 0x96, 0x7b]);
 * let text = recode::decode(&bytes, "shift_jis").unwrap();
 * assert_eq!(text, "\u{65e5}\u{672c}");
 * ```
 *
 * Or, streaming:
 *
 * ```rust
 * let mut decoder = recode::decoder_for("euc-jp").unwrap();
 * let mut text = decoder.write(&[0xc6]);
 * text.push_str(&decoder.write(&[0xfc]));
 * text.push_str(&decoder.end());
 * assert_eq!(text, "\u{65e5}");
 * ```
 *
 * Codecs are built lazily from declarative mapping tables the first time a
 * label resolves to them, cached process-wide, and shared read-only by any
 * number of concurrent streams. Building is the only fallible step;
 * conversion itself never fails and substitutes a default character for
 * unmappable input.
 */

pub mod bom;
pub mod codec;
pub mod data;
pub mod error;
pub mod label;
pub mod types;
mod util;

pub use crate::error::{BuildError, Result};
pub use crate::label::{canonical, codec_for_label, exists};
pub use crate::types::{Codec, CodecRef, Decoder, Encoder};

/// Creates a fresh streaming encoder for the labeled encoding.
pub fn encoder_for(label: &str) -> Result<Box<dyn Encoder>> {
    Ok(codec_for_label(label)?.encoder())
}

/// Creates a fresh streaming decoder for the labeled encoding. For
/// BOM-carrying encodings the stream's leading BOM, if any, is removed.
pub fn decoder_for(label: &str) -> Result<Box<dyn Decoder>> {
    let codec = codec_for_label(label)?;
    let decoder = codec.decoder();
    Ok(if codec.bom_aware() {
        Box::new(bom::StripBomDecoder::new(decoder))
    } else {
        decoder
    })
}

/// Encodes a whole string at once.
pub fn encode(text: &str, label: &str) -> Result<Vec<u8>> {
    let mut encoder = encoder_for(label)?;
    let mut out = encoder.write(text);
    out.extend_from_slice(&encoder.end());
    Ok(out)
}

/// Decodes a whole byte slice at once.
pub fn decode(bytes: &[u8], label: &str) -> Result<String> {
    let mut decoder = decoder_for(label)?;
    let mut out = decoder.write(bytes);
    out.push_str(&decoder.end());
    Ok(out)
}

#[cfg(test)]
mod tests {
    #[test]
    fn whole_string_shift_jis() {
        let bytes = crate::encode("\u{65e5}\u{672c}\u{8a9e}", "Shift_JIS").unwrap();
        assert_eq!(bytes, [0x93, 0xfa, 0x96, 0x7b, 0x8c, 0xea]);
        assert_eq!(
            crate::decode(&bytes, "sjis").unwrap(),
            "\u{65e5}\u{672c}\u{8a9e}"
        );
    }

    #[test]
    fn unknown_label_errors() {
        assert!(crate::encode("x", "no-such").is_err());
        assert!(crate::decode(b"x", "no-such").is_err());
    }

    #[test]
    fn decode_strips_bom_for_bom_aware_codecs() {
        let text = crate::decode(&[0xfe, 0xff, 0x00, 0x41], "utf-16be").unwrap();
        assert_eq!(text, "A");
        // multi-byte codecs are not BOM-aware
        let text = crate::decode(&[0x41], "gbk").unwrap();
        assert_eq!(text, "A");
    }

    #[test]
    fn encode_does_not_add_bom() {
        assert_eq!(crate::encode("A", "utf-16be").unwrap(), [0x00, 0x41]);
    }
}
