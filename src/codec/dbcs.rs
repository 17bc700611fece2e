// This is a part of recode.
// See README.md and LICENSE.txt for details.

/*!
 * The multi-byte (DBCS) codec.
 *
 * A character is represented by one or more bytes. The decode direction is
 * driven by a byte trie: an arena of nodes, each a 256-slot array indexed
 * by the next input byte. Node 0 is the root. A slot either resolves to a
 * Unicode code point (possibly astral), points at a child node for the
 * next byte, points into a table of multi-code-point sequences, marks the
 * end of a reserved GB18030 four-byte range, or is unassigned.
 *
 * The encode direction is derived from the trie at build time: a sparse
 * two-level table from code point to byte-sequence value, plus a tree of
 * sequence mappings for characters that only encode as part of a longer
 * Unicode sequence.
 *
 * Tables are built once per encoding configuration from declarative
 * mapping chunks, then shared read-only between any number of streams.
 * All table defects are fatal at build time; at run time both directions
 * are total and substitute a default character for unmappable input.
 */

use std::collections::BTreeMap;
use std::sync::Arc;

use log::debug;

use crate::codec::gb18030::{self, RangeTable};
use crate::error::{BuildError, Result};
use crate::types::{Codec, Decoder, Encoder, DEFAULT_CHAR_SINGLE_BYTE, DEFAULT_CHAR_UNICODE};
use crate::util::{combine_surrogates, is_lead_surrogate, is_trail_surrogate, push_code};

/// One mapping chunk: a starting byte address (big-endian hex, at least one
/// byte) and the parts written to consecutive slots from there.
#[derive(Debug, Clone, Copy)]
pub struct Chunk {
    pub start: &'static str,
    pub parts: &'static [Part],
}

/// A piece of a mapping chunk.
///
/// Literal text is consumed as UTF-16 code units: surrogate pairs combine
/// into one astral code point, and a unit in the sentinel range
/// `0x0FF1..=0x0FFF` announces that the next `0xFFF - unit + 2` units form
/// a single multi-code-point sequence. `Units` is the same thing in raw
/// form, for generated rows a string literal cannot express.
#[derive(Debug, Clone, Copy)]
pub enum Part {
    Literal(&'static str),
    Units(&'static [u16]),
    /// Repeat the previously written code point + 1, + 2, ... for `n` slots.
    Extend(u16),
}

/// Byte-sequence values (or ranges of them) that must remain decodable but
/// are excluded from the derived encode table.
#[derive(Debug, Clone, Copy)]
pub enum EncodeSkip {
    Value(u32),
    Range(u32, u32),
}

/// Per-encoding configuration for a DBCS codec.
///
/// `tables` is an ordered list of chunk tables fed to a single trie-builder
/// pass: base table first, supplements after, so that a supplement can only
/// override leaf slots (structural conflicts are build errors).
#[derive(Debug, Clone, Copy)]
pub struct DbcsOptions {
    pub name: &'static str,
    pub tables: &'static [&'static [Chunk]],
    pub gb18030_ranges: Option<&'static RangeTable>,
    pub encode_skip: &'static [EncodeSkip],
    /// Extra code point -> byte-sequence pairs applied after derivation,
    /// for characters with no canonical decode-trie entry.
    pub encode_add: &'static [(char, u32)],
}

/// A decode-trie slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DecodeSlot {
    Unassigned,
    /// Terminates a reserved GB18030 four-byte range; resolve the last four
    /// bytes through the range table instead of a direct lookup.
    Gb18030,
    Code(u32),
    Node(u16),
    Seq(u16),
}

/// An encode-table bucket slot. `Bytes` holds the byte-sequence value to
/// emit: below 0x100 one byte, below 0x10000 two bytes high-then-low,
/// otherwise three bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EncodeSlot {
    Unassigned,
    Bytes(u32),
    Seq(u16),
}

/// A child in the encode sequence tree.
#[derive(Debug, Clone, Copy)]
enum SeqChild {
    Node(u16),
    Leaf(u32),
}

/// One node of the encode sequence tree: the next code point of a sequence
/// keyed against a child node or a leaf byte-sequence value, plus an
/// optional default for "this prefix alone encodes to these bytes" (needed
/// because one valid sequence can be a strict prefix of another).
#[derive(Debug, Default)]
struct SeqTreeNode {
    children: BTreeMap<u32, SeqChild>,
    default: Option<u32>,
}

fn blank_node() -> Box<[DecodeSlot; 0x100]> {
    Box::new([DecodeSlot::Unassigned; 0x100])
}

fn blank_bucket() -> Box<[EncodeSlot; 0x100]> {
    Box::new([EncodeSlot::Unassigned; 0x100])
}

/// The immutable tables shared by every stream of one codec.
struct Tables {
    decode_tables: Vec<Box<[DecodeSlot; 0x100]>>,
    decode_table_seq: Vec<Vec<u32>>,
    encode_table: Vec<Option<Box<[EncodeSlot; 0x100]>>>,
    encode_table_seq: Vec<SeqTreeNode>,
    def_char_sb: u32,
    def_char_unicode: char,
    gb18030: Option<RangeTable>,
}

impl Tables {
    fn encode_slot(&self, code: u32) -> EncodeSlot {
        match self.encode_table.get((code >> 8) as usize) {
            Some(Some(bucket)) => bucket[(code & 0xff) as usize],
            _ => EncodeSlot::Unassigned,
        }
    }
}

/// A built multi-byte codec.
pub struct DbcsCodec {
    name: &'static str,
    tables: Arc<Tables>,
}

struct Builder {
    name: &'static str,
    tables: Tables,
}

impl DbcsCodec {
    /// Builds the codec from its mapping-table configuration. All table
    /// defects are reported as errors; a codec that builds successfully
    /// never fails at run time.
    pub fn new(options: &DbcsOptions) -> Result<DbcsCodec> {
        let mut b = Builder {
            name: options.name,
            tables: Tables {
                decode_tables: vec![blank_node()],
                decode_table_seq: Vec::new(),
                encode_table: Vec::new(),
                encode_table_seq: Vec::new(),
                def_char_sb: DEFAULT_CHAR_SINGLE_BYTE as u32,
                def_char_unicode: DEFAULT_CHAR_UNICODE,
                gb18030: None,
            },
        };

        for table in options.tables {
            for chunk in *table {
                b.add_decode_chunk(chunk)?;
            }
        }

        b.fill_encode_table(0, 0, options.encode_skip);
        for &(ch, bytes) in options.encode_add {
            b.set_encode_char(ch as u32, bytes);
        }
        b.tables.def_char_sb = b.resolve_default_byte();

        if let Some(ranges) = options.gb18030_ranges {
            b.extend_gb18030_trie()?;
            b.tables.gb18030 = Some(*ranges);
        }

        debug!(
            "built {}: {} trie nodes, {} decode sequences, {} encode buckets, {} sequence tree nodes",
            b.name,
            b.tables.decode_tables.len(),
            b.tables.decode_table_seq.len(),
            b.tables.encode_table.iter().filter(|b| b.is_some()).count(),
            b.tables.encode_table_seq.len(),
        );

        Ok(DbcsCodec {
            name: options.name,
            tables: Arc::new(b.tables),
        })
    }
}

impl Builder {
    /// Descends to (creating on demand) the leaf node for all but the last
    /// byte of `addr`. A slot that already resolved to anything other than
    /// a child node is conflicting table data.
    fn decode_trie_node(&mut self, addr: u32) -> Result<usize> {
        let mut bytes = [0u8; 4];
        let mut len = 0;
        let mut a = addr;
        loop {
            bytes[len] = (a & 0xff) as u8;
            len += 1;
            a >>= 8;
            if a == 0 {
                break;
            }
        }

        let mut node = 0usize;
        // bytes[] is little-endian; walk from the most significant down to,
        // but not including, the low byte
        for i in (1..len).rev() {
            let byte = bytes[i] as usize;
            node = match self.tables.decode_tables[node][byte] {
                DecodeSlot::Unassigned => {
                    let next = self.tables.decode_tables.len();
                    self.tables.decode_tables[node][byte] = DecodeSlot::Node(next as u16);
                    self.tables.decode_tables.push(blank_node());
                    next
                }
                DecodeSlot::Node(n) => n as usize,
                _ => {
                    return Err(BuildError::TrieConflict {
                        encoding: self.name,
                        addr,
                    })
                }
            };
        }
        Ok(node)
    }

    fn add_decode_chunk(&mut self, chunk: &Chunk) -> Result<()> {
        let addr =
            u32::from_str_radix(chunk.start, 16).map_err(|_| BuildError::BadChunkAddress {
                encoding: self.name,
                chunk: chunk.start,
            })?;
        let node = self.decode_trie_node(addr)?;
        let mut cur = (addr & 0xff) as usize;

        for part in chunk.parts {
            match *part {
                Part::Literal(s) => {
                    let units: Vec<u16> = s.encode_utf16().collect();
                    self.write_units(node, &mut cur, &units, chunk)?;
                }
                Part::Units(units) => self.write_units(node, &mut cur, units, chunk)?,
                Part::Extend(n) => {
                    let base = match cur.checked_sub(1).map(|p| self.tables.decode_tables[node][p])
                    {
                        Some(DecodeSlot::Code(c)) => c,
                        _ => {
                            return Err(BuildError::ExtendWithoutBase {
                                encoding: self.name,
                                chunk: chunk.start,
                            })
                        }
                    };
                    for k in 0..n as u32 {
                        self.put(node, &mut cur, DecodeSlot::Code(base + 1 + k), chunk)?;
                    }
                }
            }
        }
        Ok(())
    }

    /// Writes one literal run of UTF-16 units into consecutive slots.
    fn write_units(
        &mut self,
        node: usize,
        cur: &mut usize,
        units: &[u16],
        chunk: &Chunk,
    ) -> Result<()> {
        let mut l = 0;
        while l < units.len() {
            let unit = units[l];
            l += 1;
            if is_lead_surrogate(unit) {
                match units.get(l).copied() {
                    Some(trail) if is_trail_surrogate(trail) => {
                        l += 1;
                        let code = combine_surrogates(unit, trail);
                        self.put(node, cur, DecodeSlot::Code(code), chunk)?;
                    }
                    _ => {
                        return Err(BuildError::MalformedSurrogate {
                            encoding: self.name,
                            chunk: chunk.start,
                        })
                    }
                }
            } else if is_trail_surrogate(unit) {
                return Err(BuildError::MalformedSurrogate {
                    encoding: self.name,
                    chunk: chunk.start,
                });
            } else if (0x0ff1..=0x0fff).contains(&unit) {
                // embedded sequence marker: the next `len` units are one
                // multi-code-point sequence
                let len = (0xfff - unit + 2) as usize;
                if l + len > units.len() {
                    return Err(BuildError::TruncatedSequence {
                        encoding: self.name,
                        chunk: chunk.start,
                    });
                }
                let seq: Vec<u32> = units[l..l + len].iter().map(|&u| u as u32).collect();
                l += len;
                let idx = self.tables.decode_table_seq.len() as u16;
                self.put(node, cur, DecodeSlot::Seq(idx), chunk)?;
                self.tables.decode_table_seq.push(seq);
            } else {
                self.put(node, cur, DecodeSlot::Code(unit as u32), chunk)?;
            }
        }
        Ok(())
    }

    fn put(&mut self, node: usize, cur: &mut usize, slot: DecodeSlot, chunk: &Chunk) -> Result<()> {
        if *cur > 0xff {
            return Err(BuildError::ChunkOverflow {
                encoding: self.name,
                chunk: chunk.start,
            });
        }
        self.tables.decode_tables[node][*cur] = slot;
        *cur += 1;
        Ok(())
    }

    /// Walks the decode trie depth-first, byte value ascending, installing
    /// the inverse mapping. The first byte sequence reaching a code point
    /// wins; later duplicates are ignored, except that a single-character
    /// mapping for a code point that already starts a sequence becomes that
    /// sequence's default terminator.
    fn fill_encode_table(&mut self, node: usize, prefix: u32, skip: &[EncodeSkip]) {
        for i in 0..0x100usize {
            let slot = self.tables.decode_tables[node][i];
            let mb = prefix | i as u32;
            if is_skipped(skip, mb) {
                continue;
            }
            match slot {
                DecodeSlot::Code(code) => self.set_encode_char(code, mb),
                DecodeSlot::Node(n) => self.fill_encode_table(n as usize, mb << 8, skip),
                DecodeSlot::Seq(s) => {
                    let seq = self.tables.decode_table_seq[s as usize].clone();
                    self.set_encode_sequence(&seq, mb);
                }
                DecodeSlot::Unassigned | DecodeSlot::Gb18030 => {}
            }
        }
    }

    fn encode_bucket(&mut self, code: u32) -> &mut [EncodeSlot; 0x100] {
        let high = (code >> 8) as usize;
        if self.tables.encode_table.len() <= high {
            self.tables.encode_table.resize_with(high + 1, || None);
        }
        self.tables.encode_table[high].get_or_insert_with(blank_bucket)
    }

    fn set_encode_char(&mut self, code: u32, bytes: u32) {
        let low = (code & 0xff) as usize;
        match self.encode_bucket(code)[low] {
            EncodeSlot::Seq(s) => {
                // a sequence starts here; the plain mapping becomes its
                // single-character default terminator
                self.tables.encode_table_seq[s as usize].default = Some(bytes);
            }
            EncodeSlot::Unassigned => self.encode_bucket(code)[low] = EncodeSlot::Bytes(bytes),
            EncodeSlot::Bytes(_) => {}
        }
    }

    fn set_encode_sequence(&mut self, seq: &[u32], bytes: u32) {
        debug_assert!(seq.len() >= 2);

        // root of the tree hangs off the encode table by the first code point
        let first = seq[0];
        let low = (first & 0xff) as usize;
        let mut node = match self.encode_bucket(first)[low] {
            EncodeSlot::Seq(s) => s as usize,
            prev => {
                let idx = self.tables.encode_table_seq.len();
                let default = match prev {
                    EncodeSlot::Bytes(b) => Some(b),
                    _ => None,
                };
                self.tables.encode_table_seq.push(SeqTreeNode {
                    children: BTreeMap::new(),
                    default,
                });
                self.encode_bucket(first)[low] = EncodeSlot::Seq(idx as u16);
                idx
            }
        };

        // intermediate code points allocate tree nodes as needed
        for &code in &seq[1..seq.len() - 1] {
            node = match self.tables.encode_table_seq[node].children.get(&code).copied() {
                Some(SeqChild::Node(n)) => n as usize,
                prev => {
                    let idx = self.tables.encode_table_seq.len();
                    let default = match prev {
                        Some(SeqChild::Leaf(b)) => Some(b),
                        _ => None,
                    };
                    self.tables.encode_table_seq.push(SeqTreeNode {
                        children: BTreeMap::new(),
                        default,
                    });
                    self.tables.encode_table_seq[node]
                        .children
                        .insert(code, SeqChild::Node(idx as u16));
                    idx
                }
            };
        }

        let last = *seq.last().expect("sequence is never empty");
        match self.tables.encode_table_seq[node].children.get(&last).copied() {
            Some(SeqChild::Node(n)) => {
                self.tables.encode_table_seq[n as usize].default = Some(bytes);
            }
            Some(SeqChild::Leaf(_)) => {}
            None => {
                self.tables.encode_table_seq[node]
                    .children
                    .insert(last, SeqChild::Leaf(bytes));
            }
        }
    }

    /// The byte value substituted for unencodable code points: the encoding
    /// of the configured default character, else of `?`, else literally `?`.
    fn resolve_default_byte(&self) -> u32 {
        for ch in [self.tables.def_char_unicode, DEFAULT_CHAR_SINGLE_BYTE] {
            if let EncodeSlot::Bytes(b) = self.tables.encode_slot(ch as u32) {
                return b;
            }
        }
        DEFAULT_CHAR_SINGLE_BYTE as u32
    }

    /// Grafts the reserved GB18030 four-byte space onto the trie: every
    /// second-byte digit slot of every lead points at one shared third-byte
    /// node, which points at one shared fourth-byte node of range markers.
    fn extend_gb18030_trie(&mut self) -> Result<()> {
        let third = self.tables.decode_tables.len() as u16;
        self.tables.decode_tables.push(blank_node());
        let fourth = self.tables.decode_tables.len() as u16;
        self.tables.decode_tables.push(blank_node());

        for lead in 0x81..=0xfe_usize {
            let second = match self.tables.decode_tables[0][lead] {
                DecodeSlot::Node(n) => n as usize,
                _ => {
                    return Err(BuildError::MissingLeadNode {
                        encoding: self.name,
                        lead: lead as u8,
                    })
                }
            };
            for b in 0x30..=0x39_usize {
                self.tables.decode_tables[second][b] = DecodeSlot::Node(third);
            }
        }
        for b in 0x81..=0xfe_usize {
            self.tables.decode_tables[third as usize][b] = DecodeSlot::Node(fourth);
        }
        for b in 0x30..=0x39_usize {
            self.tables.decode_tables[fourth as usize][b] = DecodeSlot::Gb18030;
        }
        Ok(())
    }
}

fn is_skipped(skip: &[EncodeSkip], mb: u32) -> bool {
    skip.iter().any(|s| match *s {
        EncodeSkip::Value(v) => v == mb,
        EncodeSkip::Range(from, to) => (from..=to).contains(&mb),
    })
}

impl Codec for DbcsCodec {
    fn name(&self) -> &'static str {
        self.name
    }

    fn encoder(&self) -> Box<dyn Encoder> {
        Box::new(DbcsEncoder {
            tables: Arc::clone(&self.tables),
            lead_surrogate: None,
            seq_node: None,
        })
    }

    fn decoder(&self) -> Box<dyn Decoder> {
        Box::new(DbcsDecoder {
            tables: Arc::clone(&self.tables),
            node: 0,
            pending: Vec::new(),
        })
    }
}

fn write_bytes_value(out: &mut Vec<u8>, value: u32) {
    if value < 0x100 {
        out.push(value as u8);
    } else if value < 0x10000 {
        out.push((value >> 8) as u8);
        out.push(value as u8);
    } else {
        out.push((value >> 16) as u8);
        out.push((value >> 8) as u8);
        out.push(value as u8);
    }
}

/// A stream-scoped DBCS encoder.
pub struct DbcsEncoder {
    tables: Arc<Tables>,
    /// A high surrogate waiting for its trail half.
    lead_surrogate: Option<u16>,
    /// Current position in the encode sequence tree, if mid-match.
    seq_node: Option<u16>,
}

impl Encoder for DbcsEncoder {
    fn write_units(&mut self, input: &[u16]) -> Vec<u8> {
        let per_unit = if self.tables.gb18030.is_some() { 4 } else { 3 };
        let mut out = Vec::with_capacity(input.len() * per_unit);
        let mut iter = input.iter();
        // a code point handed back for another pass (it was peeled off a
        // failed surrogate pair or a terminated sequence match)
        let mut replay: Option<u32> = None;

        loop {
            let mut code = match replay.take() {
                Some(c) => c,
                None => match iter.next() {
                    Some(&u) => u as u32,
                    None => break,
                },
            };

            // surrogate handling; replayed values are never in this range
            let mut unmappable = false;
            if (0xd800..0xe000).contains(&code) {
                if code < 0xdc00 {
                    if self.lead_surrogate.is_none() {
                        self.lead_surrogate = Some(code as u16);
                        continue;
                    }
                    // double lead: previous one is unmappable, keep the new
                    self.lead_surrogate = Some(code as u16);
                    unmappable = true;
                } else {
                    match self.lead_surrogate.take() {
                        Some(lead) => code = combine_surrogates(lead, code as u16),
                        None => unmappable = true,
                    }
                }
            } else if self.lead_surrogate.take().is_some() {
                // the dangling lead is unmappable; the current code point is
                // processed on the next pass
                replay = Some(code);
                unmappable = true;
            }

            let mut bytes: Option<u32> = None;
            if unmappable {
                // fall through to the default character; an in-progress
                // sequence match is left pending
            } else if let Some(s) = self.seq_node {
                let node = &self.tables.encode_table_seq[s as usize];
                match node.children.get(&code).copied() {
                    Some(SeqChild::Node(n)) => {
                        self.seq_node = Some(n);
                        continue;
                    }
                    Some(SeqChild::Leaf(b)) => {
                        self.seq_node = None;
                        bytes = Some(b);
                    }
                    None => {
                        self.seq_node = None;
                        match node.default {
                            Some(b) => {
                                // the prefix alone encodes; the current code
                                // point was not part of the sequence
                                bytes = Some(b);
                                replay = Some(code);
                            }
                            None => {
                                // no default: drop the pending prefix and
                                // encode the current code point on its own
                                replay = Some(code);
                                continue;
                            }
                        }
                    }
                }
            } else {
                match self.tables.encode_slot(code) {
                    EncodeSlot::Bytes(b) => bytes = Some(b),
                    EncodeSlot::Seq(s) => {
                        self.seq_node = Some(s);
                        continue;
                    }
                    EncodeSlot::Unassigned => {
                        if let Some(ranges) = &self.tables.gb18030 {
                            if let Some(ptr) = ranges.pointer_for_code(code) {
                                out.extend_from_slice(&gb18030::split_pointer(ptr));
                                continue;
                            }
                        }
                    }
                }
            }

            write_bytes_value(&mut out, bytes.unwrap_or(self.tables.def_char_sb));
        }
        out
    }

    fn end(&mut self) -> Vec<u8> {
        let mut out = Vec::new();
        if let Some(s) = self.seq_node.take() {
            // the only place a sequence can terminate with fewer than its
            // full length
            if let Some(b) = self.tables.encode_table_seq[s as usize].default {
                write_bytes_value(&mut out, b);
            }
        }
        if self.lead_surrogate.take().is_some() {
            write_bytes_value(&mut out, self.tables.def_char_sb);
        }
        out
    }
}

/// A stream-scoped DBCS decoder.
pub struct DbcsDecoder {
    tables: Arc<Tables>,
    /// Current trie node; 0 iff `pending` is empty.
    node: u16,
    /// Bytes of an incomplete sequence carried from the previous write.
    pending: Vec<u8>,
}

impl Decoder for DbcsDecoder {
    fn write(&mut self, input: &[u8]) -> String {
        let mut out = String::with_capacity(input.len() * 2);

        // the walk continues mid-node over carried bytes, so scanning starts
        // after them; error recovery may step back into them
        let carried = std::mem::take(&mut self.pending);
        let start = carried.len();
        let owned;
        let buf: &[u8] = if carried.is_empty() {
            input
        } else {
            let mut b = carried;
            b.extend_from_slice(input);
            owned = b;
            &owned
        };

        let mut node = self.node as usize;
        let mut seq_start = 0usize;
        let mut i = start;
        while i < buf.len() {
            let byte = buf[i] as usize;
            match self.tables.decode_tables[node][byte] {
                DecodeSlot::Code(code) => push_code(&mut out, code),
                DecodeSlot::Node(n) => {
                    node = n as usize;
                    i += 1;
                    continue;
                }
                DecodeSlot::Seq(s) => {
                    for &code in &self.tables.decode_table_seq[s as usize] {
                        push_code(&mut out, code);
                    }
                }
                DecodeSlot::Gb18030 => {
                    let ptr =
                        gb18030::join_pointer([buf[i - 3], buf[i - 2], buf[i - 1], buf[i]]);
                    match self.tables.gb18030.as_ref().and_then(|t| t.code_for_pointer(ptr)) {
                        Some(code) => push_code(&mut out, code),
                        None => out.push(self.tables.def_char_unicode),
                    }
                }
                DecodeSlot::Unassigned => {
                    // resynchronize: substitute for the first byte of the
                    // failed sequence and retry from the second
                    out.push(self.tables.def_char_unicode);
                    i = seq_start;
                }
            }
            node = 0;
            i += 1;
            seq_start = i;
        }

        self.node = node as u16;
        self.pending = buf[seq_start..].to_vec();
        out
    }

    fn end(&mut self) -> String {
        let mut out = String::new();
        while !self.pending.is_empty() {
            // the retained head byte is unresolvable; substitute for it and
            // reattempt the rest
            out.push(self.tables.def_char_unicode);
            let rest = self.pending.split_off(1);
            self.pending.clear();
            self.node = 0;
            if !rest.is_empty() {
                out.push_str(&self.write(&rest));
            }
        }
        self.node = 0;
        out
    }
}
