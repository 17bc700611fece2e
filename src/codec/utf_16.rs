// This is a part of recode.
// See README.md and LICENSE.txt for details.

//! UTF-16 codecs: fixed big- and little-endian variants, and an
//! auto-detecting `utf-16` that sniffs the byte order of the stream head.

use crate::types::{Codec, Decoder, Encoder, DEFAULT_CHAR_UNICODE};
use crate::util::is_lead_surrogate;

/// How many bytes the auto-detecting decoder buffers before committing to
/// a byte order when no BOM is present.
const DETECT_BUFFER: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endian {
    Big,
    Little,
}

/// A fixed-endianness UTF-16 codec.
pub struct Utf16Codec {
    endian: Endian,
}

impl Utf16Codec {
    pub fn new(endian: Endian) -> Utf16Codec {
        Utf16Codec { endian }
    }
}

impl Codec for Utf16Codec {
    fn name(&self) -> &'static str {
        match self.endian {
            Endian::Big => "utf-16be",
            Endian::Little => "utf-16le",
        }
    }

    fn encoder(&self) -> Box<dyn Encoder> {
        Box::new(Utf16Encoder {
            endian: self.endian,
        })
    }

    fn decoder(&self) -> Box<dyn Decoder> {
        Box::new(Utf16Decoder {
            endian: self.endian,
            odd: None,
            lead: None,
        })
    }

    fn bom_aware(&self) -> bool {
        true
    }
}

/// Stateless: code units pass through verbatim, including lone surrogates,
/// which are representable at the byte level.
pub struct Utf16Encoder {
    endian: Endian,
}

impl Encoder for Utf16Encoder {
    fn write_units(&mut self, input: &[u16]) -> Vec<u8> {
        let mut out = Vec::with_capacity(input.len() * 2);
        for &u in input {
            match self.endian {
                Endian::Big => out.extend_from_slice(&u.to_be_bytes()),
                Endian::Little => out.extend_from_slice(&u.to_le_bytes()),
            }
        }
        out
    }

    fn end(&mut self) -> Vec<u8> {
        Vec::new()
    }
}

/// Carries at most one odd byte and one unpaired high surrogate between
/// writes, so a surrogate pair split anywhere still decodes as one
/// character.
pub struct Utf16Decoder {
    endian: Endian,
    odd: Option<u8>,
    lead: Option<u16>,
}

impl Decoder for Utf16Decoder {
    fn write(&mut self, input: &[u8]) -> String {
        let mut units = Vec::with_capacity(input.len() / 2 + 2);
        if let Some(lead) = self.lead.take() {
            units.push(lead);
        }

        let mut bytes = input.iter().copied();
        if let Some(first) = self.odd.take() {
            match bytes.next() {
                Some(second) => units.push(pair_unit(self.endian, first, second)),
                None => {
                    self.odd = Some(first);
                    return String::from_utf16_lossy(&units);
                }
            }
        }
        loop {
            match (bytes.next(), bytes.next()) {
                (Some(a), Some(b)) => units.push(pair_unit(self.endian, a, b)),
                (Some(a), None) => {
                    self.odd = Some(a);
                    break;
                }
                _ => break,
            }
        }

        // a trailing high surrogate may pair with the next write
        if let Some(&last) = units.last() {
            if is_lead_surrogate(last) {
                self.lead = units.pop();
            }
        }
        String::from_utf16_lossy(&units)
    }

    fn end(&mut self) -> String {
        let mut out = String::new();
        if self.lead.take().is_some() {
            out.push(DEFAULT_CHAR_UNICODE);
        }
        if self.odd.take().is_some() {
            out.push(DEFAULT_CHAR_UNICODE);
        }
        out
    }
}

fn pair_unit(endian: Endian, first: u8, second: u8) -> u16 {
    match endian {
        Endian::Big => u16::from_be_bytes([first, second]),
        Endian::Little => u16::from_le_bytes([first, second]),
    }
}

/// The auto-detecting `utf-16` codec. Encoding always produces
/// little-endian with a BOM; decoding sniffs a BOM, then falls back to a
/// heuristic over the head of the stream, then to little-endian.
pub struct Utf16AutoCodec;

impl Codec for Utf16AutoCodec {
    fn name(&self) -> &'static str {
        "utf-16"
    }

    fn encoder(&self) -> Box<dyn Encoder> {
        Box::new(Utf16AutoEncoder {
            inner: Utf16Encoder {
                endian: Endian::Little,
            },
            bom_written: false,
        })
    }

    fn decoder(&self) -> Box<dyn Decoder> {
        Box::new(Utf16AutoDecoder {
            initial: Vec::new(),
            inner: None,
        })
    }

    fn bom_aware(&self) -> bool {
        true
    }
}

pub struct Utf16AutoEncoder {
    inner: Utf16Encoder,
    bom_written: bool,
}

impl Encoder for Utf16AutoEncoder {
    fn write_units(&mut self, input: &[u16]) -> Vec<u8> {
        let mut out = Vec::new();
        if !self.bom_written {
            self.bom_written = true;
            out = self.inner.write_units(&[0xfeff]);
        }
        out.extend_from_slice(&self.inner.write_units(input));
        out
    }

    fn end(&mut self) -> Vec<u8> {
        self.inner.end()
    }
}

pub struct Utf16AutoDecoder {
    initial: Vec<u8>,
    inner: Option<Utf16Decoder>,
}

impl Utf16AutoDecoder {
    fn commit(&mut self) -> &mut Utf16Decoder {
        let endian = detect_endianness(&self.initial);
        let decoder = self.inner.get_or_insert(Utf16Decoder {
            endian,
            odd: None,
            lead: None,
        });
        decoder
    }
}

impl Decoder for Utf16AutoDecoder {
    fn write(&mut self, input: &[u8]) -> String {
        if let Some(inner) = self.inner.as_mut() {
            return inner.write(input);
        }
        self.initial.extend_from_slice(input);
        if self.initial.len() < DETECT_BUFFER {
            return String::new();
        }
        let initial = std::mem::take(&mut self.initial);
        self.commit().write(&initial)
    }

    fn end(&mut self) -> String {
        if self.inner.is_none() && self.initial.is_empty() {
            return String::new();
        }
        let initial = std::mem::take(&mut self.initial);
        let inner = self.commit();
        let mut out = inner.write(&initial);
        out.push_str(&inner.end());
        out
    }
}

/// BOM first; otherwise count which interpretation makes the head look
/// more like text (a NUL in the high byte of a pair votes for that
/// order). Ties default to little-endian.
fn detect_endianness(buf: &[u8]) -> Endian {
    if buf.len() >= 2 {
        if buf[0] == 0xfe && buf[1] == 0xff {
            return Endian::Big;
        }
        if buf[0] == 0xff && buf[1] == 0xfe {
            return Endian::Little;
        }
    }
    let mut be = 0usize;
    let mut le = 0usize;
    for pair in buf.chunks_exact(2).take(DETECT_BUFFER / 2) {
        if pair[0] == 0 && pair[1] != 0 {
            be += 1;
        }
        if pair[0] != 0 && pair[1] == 0 {
            le += 1;
        }
    }
    if be > le {
        Endian::Big
    } else {
        Endian::Little
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_endian_round_trip() {
        for endian in [Endian::Big, Endian::Little] {
            let c = Utf16Codec::new(endian);
            let mut e = c.encoder();
            let mut bytes = e.write("a\u{3042}\u{10000}");
            bytes.extend_from_slice(&e.end());
            let mut d = c.decoder();
            let mut text = d.write(&bytes);
            text.push_str(&d.end());
            assert_eq!(text, "a\u{3042}\u{10000}");
        }
    }

    #[test]
    fn be_byte_layout() {
        let c = Utf16Codec::new(Endian::Big);
        let mut e = c.encoder();
        assert_eq!(e.write("A\u{3042}"), &[0x00, 0x41, 0x30, 0x42]);
    }

    #[test]
    fn decoder_carries_odd_byte() {
        let c = Utf16Codec::new(Endian::Big);
        let mut d = c.decoder();
        assert_eq!(d.write(&[0x00]), "");
        assert_eq!(d.write(&[0x41, 0x30]), "A");
        assert_eq!(d.write(&[0x42]), "\u{3042}");
        assert_eq!(d.end(), "");
    }

    #[test]
    fn decoder_carries_split_surrogate_pair() {
        // U+10000 = D800 DC00
        let c = Utf16Codec::new(Endian::Big);
        let mut d = c.decoder();
        assert_eq!(d.write(&[0xd8, 0x00]), "");
        assert_eq!(d.write(&[0xdc, 0x00]), "\u{10000}");
        assert_eq!(d.end(), "");
    }

    #[test]
    fn end_replaces_dangling_state() {
        let c = Utf16Codec::new(Endian::Big);
        let mut d = c.decoder();
        assert_eq!(d.write(&[0xd8, 0x00, 0x41]), "");
        // dangling lead surrogate and odd byte each become one replacement
        assert_eq!(d.end(), "\u{fffd}\u{fffd}");
        assert_eq!(d.end(), "");
    }

    #[test]
    fn auto_detects_bom() {
        let c = Utf16AutoCodec;
        let mut d = c.decoder();
        let mut out = d.write(&[0xfe, 0xff, 0x30, 0x42]);
        out.push_str(&d.end());
        assert_eq!(out, "\u{feff}\u{3042}");

        let mut d = c.decoder();
        let mut out = d.write(&[0xff, 0xfe, 0x42, 0x30]);
        out.push_str(&d.end());
        assert_eq!(out, "\u{feff}\u{3042}");
    }

    #[test]
    fn auto_heuristic_without_bom() {
        let c = Utf16AutoCodec;
        // ASCII text in big-endian order: NULs in the high bytes
        let mut d = c.decoder();
        let bytes: Vec<u8> = "hello".bytes().flat_map(|b| [0, b]).collect();
        let mut out = d.write(&bytes);
        out.push_str(&d.end());
        assert_eq!(out, "hello");

        // and little-endian defaults apply to a tie
        let mut d = c.decoder();
        let mut out = d.write(&[0x42, 0x30]);
        out.push_str(&d.end());
        assert_eq!(out, "\u{3042}");
    }

    #[test]
    fn auto_encoder_prepends_bom_once() {
        let c = Utf16AutoCodec;
        let mut e = c.encoder();
        assert_eq!(e.write("A"), &[0xff, 0xfe, 0x41, 0x00]);
        assert_eq!(e.write("B"), &[0x42, 0x00]);
        assert_eq!(e.end(), b"");
    }
}
