// This is a part of recode.
// See README.md and LICENSE.txt for details.

//! UTF-7 (RFC 2152) and its modified IMAP mailbox-name variant (RFC 3501
//! section 5.1.3).
//!
//! Both represent non-direct characters as base64-coded UTF-16BE between a
//! shift-in character and `-`. They differ in the shift character (`+` vs
//! `&`), the base64 alphabet (`/` vs `,`), the direct-character set, and
//! statefulness: the IMAP encoder keeps an open base64 section across
//! writes, the classic encoder closes every section within one write.

use base64::alphabet;
use base64::engine::general_purpose::GeneralPurposeConfig;
use base64::engine::{DecodePaddingMode, Engine, GeneralPurpose};

use crate::types::{Codec, Decoder, Encoder, DEFAULT_CHAR_UNICODE};

// Partial base64 groups carry stray trailing bits by construction, and
// terminators make padding illegal, so the engines must accept both.
const CONFIG: GeneralPurposeConfig = GeneralPurposeConfig::new()
    .with_encode_padding(false)
    .with_decode_padding_mode(DecodePaddingMode::Indifferent)
    .with_decode_allow_trailing_bits(true);

static B64: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, CONFIG);
static B64_IMAP: GeneralPurpose = GeneralPurpose::new(&alphabet::IMAP_MUTF7, CONFIG);

/// Decodes a run of base64 characters into text, UTF-16BE, dropping a
/// dangling odd byte. Undecodable runs contribute nothing.
fn base64_to_text(engine: &GeneralPurpose, mut chars: &[u8]) -> String {
    // a length of 1 mod 4 holds fewer than 8 usable bits; ignore the tail
    if chars.len() % 4 == 1 {
        chars = &chars[..chars.len() - 1];
    }
    let bytes = match engine.decode(chars) {
        Ok(bytes) => bytes,
        Err(_) => return String::new(),
    };
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|p| u16::from_be_bytes([p[0], p[1]]))
        .collect();
    String::from_utf16_lossy(&units)
}

fn push_direct(out: &mut String, byte: u8) {
    if byte < 0x80 {
        out.push(byte as char);
    } else {
        out.push(DEFAULT_CHAR_UNICODE);
    }
}

// ---------------------------------------------------------------------
// classic UTF-7

/// Characters passed through unencoded by the classic encoder, per the
/// RFC 2152 "Set D" plus whitespace.
fn is_direct(byte: u8) -> bool {
    byte.is_ascii_alphanumeric()
        || matches!(byte, b'\'' | b'(' | b')' | b',' | b'-' | b'.' | b'/' | b':' | b'?')
        || matches!(byte, b' ' | b'\t' | b'\r' | b'\n')
}

fn is_base64_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'+' || byte == b'/'
}

pub struct Utf7Codec;

impl Codec for Utf7Codec {
    fn name(&self) -> &'static str {
        "utf-7"
    }

    fn encoder(&self) -> Box<dyn Encoder> {
        Box::new(Utf7Encoder)
    }

    fn decoder(&self) -> Box<dyn Decoder> {
        Box::new(Utf7Decoder {
            in_base64: false,
            seen_base64: false,
            accum: Vec::new(),
        })
    }

    fn bom_aware(&self) -> bool {
        true
    }
}

pub struct Utf7Encoder;

impl Utf7Encoder {
    fn flush_run(out: &mut Vec<u8>, run: &mut Vec<u16>) {
        if run.is_empty() {
            return;
        }
        out.push(b'+');
        // "+" alone is its own escape: "+-"
        if run[..] != [b'+' as u16] {
            let bytes: Vec<u8> = run.iter().flat_map(|u| u.to_be_bytes()).collect();
            out.extend_from_slice(B64.encode(&bytes).as_bytes());
        }
        out.push(b'-');
        run.clear();
    }
}

impl Encoder for Utf7Encoder {
    fn write_units(&mut self, input: &[u16]) -> Vec<u8> {
        let mut out = Vec::with_capacity(input.len());
        let mut run: Vec<u16> = Vec::new();
        for &u in input {
            if u < 0x80 && is_direct(u as u8) {
                Self::flush_run(&mut out, &mut run);
                out.push(u as u8);
            } else {
                run.push(u);
            }
        }
        Self::flush_run(&mut out, &mut run);
        out
    }

    fn end(&mut self) -> Vec<u8> {
        Vec::new()
    }
}

pub struct Utf7Decoder {
    in_base64: bool,
    /// Whether any base64 character followed the shift-in; distinguishes
    /// the `+-` literal from an exactly-flushed section split by a chunk
    /// boundary.
    seen_base64: bool,
    /// Base64 characters of an open section not yet decoded; kept shorter
    /// than 8 (one exact 3-unit group) between writes.
    accum: Vec<u8>,
}

impl Decoder for Utf7Decoder {
    fn write(&mut self, input: &[u8]) -> String {
        let mut out = String::new();
        let mut i = 0;
        while i < input.len() {
            let b = input[i];
            if !self.in_base64 {
                if b == b'+' {
                    self.in_base64 = true;
                    self.seen_base64 = false;
                } else {
                    push_direct(&mut out, b);
                }
                i += 1;
            } else if is_base64_byte(b) {
                self.accum.push(b);
                self.seen_base64 = true;
                i += 1;
            } else {
                let literal_shift = !self.seen_base64 && b == b'-';
                let accum = std::mem::take(&mut self.accum);
                out.push_str(&base64_to_text(&B64, &accum));
                self.in_base64 = false;
                if b == b'-' {
                    if literal_shift {
                        out.push('+');
                    }
                    i += 1;
                }
                // any other terminator is reprocessed as a direct char
            }
        }

        // decode whole groups now, keep the remainder for the next write
        if self.in_base64 && self.accum.len() >= 8 {
            let keep = self.accum.len() % 8;
            let head: Vec<u8> = self.accum.drain(..self.accum.len() - keep).collect();
            out.push_str(&base64_to_text(&B64, &head));
        }
        out
    }

    fn end(&mut self) -> String {
        let mut out = String::new();
        if self.in_base64 && !self.accum.is_empty() {
            let accum = std::mem::take(&mut self.accum);
            out = base64_to_text(&B64, &accum);
        }
        self.in_base64 = false;
        self.accum.clear();
        out
    }
}

// ---------------------------------------------------------------------
// modified UTF-7 for IMAP mailbox names

fn is_base64_imap_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'+' || byte == b','
}

pub struct Utf7ImapCodec;

impl Codec for Utf7ImapCodec {
    fn name(&self) -> &'static str {
        "utf-7-imap"
    }

    fn encoder(&self) -> Box<dyn Encoder> {
        Box::new(Utf7ImapEncoder {
            in_base64: false,
            accum: Vec::new(),
        })
    }

    fn decoder(&self) -> Box<dyn Decoder> {
        Box::new(Utf7ImapDecoder {
            in_base64: false,
            seen_base64: false,
            accum: Vec::new(),
        })
    }

    fn bom_aware(&self) -> bool {
        true
    }
}

/// Unlike the classic encoder, a base64 section stays open across writes
/// and is only closed by a following direct character or by `end`.
pub struct Utf7ImapEncoder {
    in_base64: bool,
    /// UTF-16BE bytes not yet emitted; kept shorter than 3 (one exact
    /// 4-char group) between flushes.
    accum: Vec<u8>,
}

impl Utf7ImapEncoder {
    fn close_base64(&mut self, out: &mut Vec<u8>) {
        let accum = std::mem::take(&mut self.accum);
        if !accum.is_empty() {
            out.extend_from_slice(B64_IMAP.encode(&accum).as_bytes());
        }
        out.push(b'-');
        self.in_base64 = false;
    }
}

impl Encoder for Utf7ImapEncoder {
    fn write_units(&mut self, input: &[u16]) -> Vec<u8> {
        let mut out = Vec::with_capacity(input.len());
        for &u in input {
            if (0x20..=0x7e).contains(&u) {
                if self.in_base64 {
                    self.close_base64(&mut out);
                }
                out.push(u as u8);
                if u == b'&' as u16 {
                    out.push(b'-');
                }
            } else {
                if !self.in_base64 {
                    out.push(b'&');
                    self.in_base64 = true;
                }
                self.accum.extend_from_slice(&u.to_be_bytes());
                let emit = self.accum.len() - self.accum.len() % 3;
                if emit > 0 {
                    let head: Vec<u8> = self.accum.drain(..emit).collect();
                    out.extend_from_slice(B64_IMAP.encode(&head).as_bytes());
                }
            }
        }
        out
    }

    fn end(&mut self) -> Vec<u8> {
        let mut out = Vec::new();
        if self.in_base64 {
            self.close_base64(&mut out);
        }
        out
    }
}

pub struct Utf7ImapDecoder {
    in_base64: bool,
    seen_base64: bool,
    accum: Vec<u8>,
}

impl Decoder for Utf7ImapDecoder {
    fn write(&mut self, input: &[u8]) -> String {
        let mut out = String::new();
        let mut i = 0;
        while i < input.len() {
            let b = input[i];
            if !self.in_base64 {
                if b == b'&' {
                    self.in_base64 = true;
                    self.seen_base64 = false;
                } else {
                    push_direct(&mut out, b);
                }
                i += 1;
            } else if is_base64_imap_byte(b) {
                self.accum.push(b);
                self.seen_base64 = true;
                i += 1;
            } else {
                let literal_shift = !self.seen_base64 && b == b'-';
                let accum = std::mem::take(&mut self.accum);
                out.push_str(&base64_to_text(&B64_IMAP, &accum));
                self.in_base64 = false;
                if b == b'-' {
                    if literal_shift {
                        out.push('&');
                    }
                    i += 1;
                }
            }
        }

        if self.in_base64 && self.accum.len() >= 8 {
            let keep = self.accum.len() % 8;
            let head: Vec<u8> = self.accum.drain(..self.accum.len() - keep).collect();
            out.push_str(&base64_to_text(&B64_IMAP, &head));
        }
        out
    }

    fn end(&mut self) -> String {
        let mut out = String::new();
        if self.in_base64 && !self.accum.is_empty() {
            let accum = std::mem::take(&mut self.accum);
            out = base64_to_text(&B64_IMAP, &accum);
        }
        self.in_base64 = false;
        self.accum.clear();
        out
    }
}
