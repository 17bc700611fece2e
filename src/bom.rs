// This is a part of recode.
// See README.md and LICENSE.txt for details.

//! Byte-order-mark wrappers around arbitrary encoder/decoder streams.

use crate::types::{Decoder, Encoder};

const BOM: u16 = 0xfeff;

/// Encodes a U+FEFF through the inner encoder ahead of the first write.
pub struct PrependBomEncoder {
    inner: Box<dyn Encoder>,
    written: bool,
}

impl PrependBomEncoder {
    pub fn new(inner: Box<dyn Encoder>) -> PrependBomEncoder {
        PrependBomEncoder {
            inner,
            written: false,
        }
    }
}

impl Encoder for PrependBomEncoder {
    fn write_units(&mut self, input: &[u16]) -> Vec<u8> {
        let mut out = Vec::new();
        if !self.written {
            self.written = true;
            out = self.inner.write_units(&[BOM]);
        }
        out.extend_from_slice(&self.inner.write_units(input));
        out
    }

    fn end(&mut self) -> Vec<u8> {
        self.inner.end()
    }
}

/// Removes a single leading U+FEFF from the decoded stream, if present.
pub struct StripBomDecoder {
    inner: Box<dyn Decoder>,
    at_start: bool,
}

impl StripBomDecoder {
    pub fn new(inner: Box<dyn Decoder>) -> StripBomDecoder {
        StripBomDecoder {
            inner,
            at_start: true,
        }
    }

    fn strip(&mut self, text: String) -> String {
        if !self.at_start || text.is_empty() {
            return text;
        }
        self.at_start = false;
        match text.strip_prefix('\u{feff}') {
            Some(rest) => rest.to_owned(),
            None => text,
        }
    }
}

impl Decoder for StripBomDecoder {
    fn write(&mut self, input: &[u8]) -> String {
        let text = self.inner.write(input);
        self.strip(text)
    }

    fn end(&mut self) -> String {
        let text = self.inner.end();
        self.strip(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::utf_16::{Endian, Utf16Codec};
    use crate::types::Codec;

    #[test]
    fn prepend_once() {
        let c = Utf16Codec::new(Endian::Big);
        let mut e = PrependBomEncoder::new(c.encoder());
        assert_eq!(e.write("A"), &[0xfe, 0xff, 0x00, 0x41]);
        assert_eq!(e.write("B"), &[0x00, 0x42]);
        assert_eq!(e.end(), b"");
    }

    #[test]
    fn strip_only_at_start() {
        let c = Utf16Codec::new(Endian::Big);
        let mut d = StripBomDecoder::new(c.decoder());
        assert_eq!(d.write(&[0xfe, 0xff, 0x00, 0x41]), "A");
        // a later BOM is an ordinary zero-width no-break space
        assert_eq!(d.write(&[0xfe, 0xff]), "\u{feff}");
        assert_eq!(d.end(), "");
    }

    #[test]
    fn absent_bom_passes_through() {
        let c = Utf16Codec::new(Endian::Big);
        let mut d = StripBomDecoder::new(c.decoder());
        assert_eq!(d.write(&[0x00, 0x41]), "A");
    }

    #[test]
    fn bom_split_across_writes() {
        let c = Utf16Codec::new(Endian::Big);
        let mut d = StripBomDecoder::new(c.decoder());
        assert_eq!(d.write(&[0xfe]), "");
        assert_eq!(d.write(&[0xff, 0x00, 0x41]), "A");
    }
}
