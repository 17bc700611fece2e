// This is a part of recode.
// See README.md and LICENSE.txt for details.

/*!
 * Interfaces to the character encodings.
 *
 * # Streaming interface
 *
 * Every codec hands out stream-scoped [`Encoder`] and [`Decoder`] instances.
 * Both expose exactly two operations:
 *
 * - `write(input) -> output chunk`, which consumes a chunk of input and
 *   returns whatever output is fully determined by it, carrying any
 *   incomplete trailing sequence over to the next call; and
 * - `end() -> output chunk`, which flushes the carried state. Calling
 *   `end` again right away returns an empty chunk.
 *
 * Neither operation can fail: unmappable input is substituted with the
 * codec's default character and processing continues. The only fallible
 * step is building the codec itself (see [`crate::error::BuildError`]).
 *
 * Encoders consume UTF-16 code units rather than `&str` because lone and
 * split surrogates are part of the streaming contract; `write` is a
 * convenience over [`Encoder::write_units`] for well-formed text.
 *
 * A codec's tables are built once and shared; they are only ever read by
 * encoder/decoder instances, so one codec may serve any number of
 * concurrently running streams. The mutable cursor state lives in the
 * stream instances, which must not be shared.
 */

use std::sync::Arc;

/// The replacement character emitted for undecodable byte sequences.
pub const DEFAULT_CHAR_UNICODE: char = '\u{fffd}';

/// The character whose encoding is used for unencodable code points,
/// resolved against each codec's own table at build time.
pub const DEFAULT_CHAR_SINGLE_BYTE: char = '?';

/// A shared reference to a built codec, for code where the encoding is not
/// known at compile time.
pub type CodecRef = Arc<dyn Codec>;

/// A single character encoding with all of its tables built.
pub trait Codec: Send + Sync {
    /// The canonical name of this encoding. Unique across built-in
    /// encodings, but otherwise arbitrary.
    fn name(&self) -> &'static str;

    /// Creates a fresh stream-scoped encoder.
    fn encoder(&self) -> Box<dyn Encoder>;

    /// Creates a fresh stream-scoped decoder.
    fn decoder(&self) -> Box<dyn Decoder>;

    /// True if streams of this encoding conventionally begin with a BOM
    /// (and the BOM wrappers of [`crate::bom`] should apply).
    fn bom_aware(&self) -> bool {
        false
    }
}

/// Converts a Unicode string into a byte sequence, incrementally.
pub trait Encoder {
    /// Feeds UTF-16 code units and returns the encoded bytes.
    ///
    /// A trailing high surrogate (or an in-progress character-sequence
    /// match) is held back and resolved by the following call or by
    /// [`Encoder::end`].
    fn write_units(&mut self, input: &[u16]) -> Vec<u8>;

    /// Feeds a string slice. Equivalent to `write_units` over
    /// `input.encode_utf16()`.
    fn write(&mut self, input: &str) -> Vec<u8> {
        let units: Vec<u16> = input.encode_utf16().collect();
        self.write_units(&units)
    }

    /// Flushes carried state. Idempotent once drained.
    fn end(&mut self) -> Vec<u8>;
}

/// Converts a byte sequence into a Unicode string, incrementally.
pub trait Decoder {
    /// Feeds bytes and returns the decoded text. Bytes forming an
    /// incomplete multi-byte sequence are retained for the next call.
    fn write(&mut self, input: &[u8]) -> String;

    /// Flushes retained bytes, substituting the default character for any
    /// unresolvable prefix. Idempotent once drained.
    fn end(&mut self) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    // a contrived encoder: ASCII units pass through, everything else
    // becomes a fixed byte. Exercises the provided `write` on the trait.
    struct Passthrough;

    impl Encoder for Passthrough {
        fn write_units(&mut self, input: &[u16]) -> Vec<u8> {
            input
                .iter()
                .map(|&u| if u < 0x80 { u as u8 } else { b'*' })
                .collect()
        }
        fn end(&mut self) -> Vec<u8> {
            Vec::new()
        }
    }

    #[test]
    fn write_str_feeds_utf16_units() {
        let mut e = Passthrough;
        assert_eq!(e.write("Ab\u{3042}"), b"Ab*");
        // an astral char becomes two units, both out of ASCII range
        assert_eq!(e.write("\u{10000}"), b"**");
        assert_eq!(e.end(), b"");
    }
}
