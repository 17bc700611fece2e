// This is a part of recode.
// See README.md and LICENSE.txt for details.

//! The single-byte codec: a 256-entry decode table and its inverse.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{BuildError, Result};
use crate::types::{Codec, Decoder, Encoder, DEFAULT_CHAR_SINGLE_BYTE};

/// Per-encoding configuration: a table of exactly 128 or 256 characters.
/// A 128-character table covers bytes 0x80-0xFF, with the lower half
/// implicitly ASCII. Holes are expressed as U+FFFD in the table itself.
#[derive(Debug, Clone, Copy)]
pub struct SbcsOptions {
    pub name: &'static str,
    pub chars: &'static str,
}

struct Tables {
    decode: [char; 0x100],
    encode: HashMap<char, u8>,
}

/// A built single-byte codec.
pub struct SbcsCodec {
    name: &'static str,
    tables: Arc<Tables>,
}

impl SbcsCodec {
    pub fn new(options: &SbcsOptions) -> Result<SbcsCodec> {
        let chars: Vec<char> = options.chars.chars().collect();
        let mut decode = ['\0'; 0x100];
        match chars.len() {
            0x100 => decode.copy_from_slice(&chars),
            0x80 => {
                for (i, slot) in decode.iter_mut().take(0x80).enumerate() {
                    *slot = i as u8 as char;
                }
                decode[0x80..].copy_from_slice(&chars);
            }
            len => {
                return Err(BuildError::BadSingleByteTable {
                    encoding: options.name,
                    len,
                })
            }
        }

        // later entries win, like the last table row read
        let mut encode = HashMap::with_capacity(0x100);
        for (i, &ch) in decode.iter().enumerate() {
            encode.insert(ch, i as u8);
        }

        Ok(SbcsCodec {
            name: options.name,
            tables: Arc::new(Tables { decode, encode }),
        })
    }
}

impl Codec for SbcsCodec {
    fn name(&self) -> &'static str {
        self.name
    }

    fn encoder(&self) -> Box<dyn Encoder> {
        let default = self
            .tables
            .encode
            .get(&DEFAULT_CHAR_SINGLE_BYTE)
            .copied()
            .unwrap_or(DEFAULT_CHAR_SINGLE_BYTE as u8);
        Box::new(SbcsEncoder {
            tables: Arc::clone(&self.tables),
            default,
        })
    }

    fn decoder(&self) -> Box<dyn Decoder> {
        Box::new(SbcsDecoder {
            tables: Arc::clone(&self.tables),
        })
    }
}

/// Stateless: every UTF-16 unit maps independently, so surrogate halves
/// (which can never appear in a single-byte table) each become the default
/// character.
pub struct SbcsEncoder {
    tables: Arc<Tables>,
    default: u8,
}

impl Encoder for SbcsEncoder {
    fn write_units(&mut self, input: &[u16]) -> Vec<u8> {
        input
            .iter()
            .map(|&u| {
                char::from_u32(u as u32)
                    .and_then(|ch| self.tables.encode.get(&ch).copied())
                    .unwrap_or(self.default)
            })
            .collect()
    }

    fn end(&mut self) -> Vec<u8> {
        Vec::new()
    }
}

pub struct SbcsDecoder {
    tables: Arc<Tables>,
}

impl Decoder for SbcsDecoder {
    fn write(&mut self, input: &[u8]) -> String {
        input.iter().map(|&b| self.tables.decode[b as usize]).collect()
    }

    fn end(&mut self) -> String {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sbcs;

    fn windows1252() -> SbcsCodec {
        SbcsCodec::new(&sbcs::WINDOWS_1252).expect("well-formed table")
    }

    #[test]
    fn ascii_lower_half_is_implicit() {
        let c = windows1252();
        let mut d = c.decoder();
        assert_eq!(d.write(b"Hello ~"), "Hello ~");
        let mut e = c.encoder();
        assert_eq!(e.write("Hello ~"), b"Hello ~");
    }

    #[test]
    fn upper_half_round_trip() {
        let c = windows1252();
        let mut d = c.decoder();
        assert_eq!(d.write(&[0x80, 0x93, 0x94, 0xe9]), "\u{20ac}\u{201c}\u{201d}\u{e9}");
        let mut e = c.encoder();
        assert_eq!(e.write("\u{20ac}\u{201c}\u{201d}\u{e9}"), &[0x80, 0x93, 0x94, 0xe9]);
    }

    #[test]
    fn unmappable_becomes_question_mark() {
        let mut e = windows1252().encoder();
        assert_eq!(e.write("\u{3042}"), b"?");
        // an astral char is two units, each unmappable on its own
        assert_eq!(e.write("\u{10000}"), b"??");
    }

    #[test]
    fn bad_table_length() {
        static BAD: SbcsOptions = SbcsOptions {
            name: "bad",
            chars: "abc",
        };
        assert!(matches!(
            SbcsCodec::new(&BAD),
            Err(BuildError::BadSingleByteTable { len: 3, .. })
        ));
    }

    #[test]
    fn latin1_is_identity_over_bytes() {
        let c = SbcsCodec::new(&sbcs::ISO_8859_1).unwrap();
        let mut d = c.decoder();
        let all: Vec<u8> = (0u16..0x100).map(|b| b as u8).collect();
        let text = d.write(&all);
        let mut e = c.encoder();
        assert_eq!(e.write(&text), all);
    }
}
