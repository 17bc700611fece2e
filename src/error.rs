// This is a part of recode.
// See README.md and LICENSE.txt for details.

//! Fatal construction-time errors.
//!
//! Runtime conversion never fails: unmappable input is substituted with a
//! default character and processing continues. Everything in here can only
//! be raised while a codec is being built from its mapping-table data, or
//! while an encoding label is being resolved.

use thiserror::Error;

/// An error raised while building a codec or resolving an encoding label.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    /// A mapping chunk would turn an already-resolved trie slot into a
    /// child-node pointer. Indicates overlapping or conflicting table data.
    #[error("conflicting mapping table entry in {encoding} at address {addr:#x}")]
    TrieConflict { encoding: &'static str, addr: u32 },

    /// A chunk's starting address was not valid big-endian hex.
    #[error("bad chunk address {chunk:?} in {encoding}")]
    BadChunkAddress {
        encoding: &'static str,
        chunk: &'static str,
    },

    /// A lone high or low surrogate appeared in mapping-table data.
    #[error("malformed surrogate pair in {encoding} at chunk {chunk}")]
    MalformedSurrogate {
        encoding: &'static str,
        chunk: &'static str,
    },

    /// A chunk wrote past slot 0xFF of its leaf node.
    #[error("mapping chunk too long in {encoding} at chunk {chunk}")]
    ChunkOverflow {
        encoding: &'static str,
        chunk: &'static str,
    },

    /// A run-length extension part appeared where the previous slot does
    /// not hold a plain code point to extend from.
    #[error("extension without a preceding code point in {encoding} at chunk {chunk}")]
    ExtendWithoutBase {
        encoding: &'static str,
        chunk: &'static str,
    },

    /// A sequence marker announced more code units than the literal holds.
    #[error("truncated sequence in {encoding} at chunk {chunk}")]
    TruncatedSequence {
        encoding: &'static str,
        chunk: &'static str,
    },

    /// The GB18030 trie extension found a root slot for a lead byte that is
    /// not a child-node pointer; the two-byte table must cover all leads
    /// 0x81-0xFE before the four-byte space can be grafted on.
    #[error("GB18030 extension requires a two-byte node for lead {lead:#04x} in {encoding}")]
    MissingLeadNode { encoding: &'static str, lead: u8 },

    /// A single-byte codec was given a table that is not 128 or 256
    /// characters long.
    #[error("single-byte table for {encoding} has {len} chars (must be 128 or 256)")]
    BadSingleByteTable { encoding: &'static str, len: usize },

    /// The label did not resolve to any known encoding.
    #[error("encoding not recognized: {label:?} (searched as {canonical:?})")]
    UnknownEncoding { label: String, canonical: String },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BuildError>;
