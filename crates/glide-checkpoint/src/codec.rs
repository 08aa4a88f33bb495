//! Binary encode/decode for the checkpoint format.
//!
//! All integers are little-endian. Strings are length-prefixed with a `u32`
//! length. The body is streamed through an LZ4 frame and an FNV-1a digest,
//! so it never has to be held in memory as one buffer.
//!
//! Body layout:
//!
//! ```text
//! [best flag u8] ([presents left u32] [moves str])?
//! [targets visited u64] [rounds u64]
//! [frontier len u64] ([position u32] [mask u32] [moves str])*
//! [index count u32] ([width u32] [node count u32] ([zero u32] [one u32])*)*
//! ```
//!
//! Absent trie children are written as `u32::MAX`.

use std::collections::VecDeque;
use std::io::{self, Read, Write};

use lz4_flex::frame::{FrameDecoder, FrameEncoder, FrameInfo};

use crate::error::CheckpointError;
use crate::hash::{board_fingerprint, HashingReader, HashingWriter};
use crate::{FORMAT_VERSION, MAGIC};
use glide_board::{Board, PresentCatalog};
use glide_core::{CellIndex, Direction, PresentMask};
use glide_search::{BestResult, DominanceIndex, FrontierRecord, SearchState, TrieNode};

const NO_CHILD: u32 = u32::MAX;

/// Cap on speculative preallocation while decoding untrusted lengths.
const MAX_PREALLOC: usize = 1 << 16;

// ── Primitive writers ───────────────────────────────────────────

/// Write a single byte.
pub fn write_u8(w: &mut dyn Write, v: u8) -> Result<(), CheckpointError> {
    w.write_all(&[v])?;
    Ok(())
}

/// Write a little-endian u32.
pub fn write_u32_le(w: &mut dyn Write, v: u32) -> Result<(), CheckpointError> {
    w.write_all(&v.to_le_bytes())?;
    Ok(())
}

/// Write a little-endian u64.
pub fn write_u64_le(w: &mut dyn Write, v: u64) -> Result<(), CheckpointError> {
    w.write_all(&v.to_le_bytes())?;
    Ok(())
}

/// Write a length-prefixed UTF-8 string (u32 length + bytes).
pub fn write_length_prefixed_str(w: &mut dyn Write, s: &str) -> Result<(), CheckpointError> {
    let len = u32::try_from(s.len()).map_err(|_| CheckpointError::Malformed {
        detail: format!("string of {} bytes is too long to encode", s.len()),
    })?;
    write_u32_le(w, len)?;
    w.write_all(s.as_bytes())?;
    Ok(())
}

// ── Primitive readers ───────────────────────────────────────────

/// Read a single byte.
pub fn read_u8(r: &mut dyn Read) -> Result<u8, CheckpointError> {
    let mut buf = [0u8; 1];
    read_exact(r, &mut buf)?;
    Ok(buf[0])
}

/// Read a little-endian u32.
pub fn read_u32_le(r: &mut dyn Read) -> Result<u32, CheckpointError> {
    let mut buf = [0u8; 4];
    read_exact(r, &mut buf)?;
    Ok(u32::from_le_bytes(buf))
}

/// Read a little-endian u64.
pub fn read_u64_le(r: &mut dyn Read) -> Result<u64, CheckpointError> {
    let mut buf = [0u8; 8];
    read_exact(r, &mut buf)?;
    Ok(u64::from_le_bytes(buf))
}

/// Read a length-prefixed UTF-8 string.
pub fn read_length_prefixed_str(r: &mut dyn Read) -> Result<String, CheckpointError> {
    let len = read_u32_le(r)? as usize;
    let mut buf = Vec::with_capacity(len.min(MAX_PREALLOC));
    let got = r.take(len as u64).read_to_end(&mut buf)?;
    if got != len {
        return Err(truncated());
    }
    String::from_utf8(buf).map_err(|e| CheckpointError::Malformed {
        detail: format!("invalid UTF-8 string: {e}"),
    })
}

/// `read_exact` that reports a short read as a malformed checkpoint.
fn read_exact(r: &mut dyn Read, buf: &mut [u8]) -> Result<(), CheckpointError> {
    r.read_exact(buf).map_err(|e| match e.kind() {
        io::ErrorKind::UnexpectedEof => truncated(),
        _ => CheckpointError::Io(e),
    })
}

fn truncated() -> CheckpointError {
    CheckpointError::Malformed {
        detail: "unexpected end of data".into(),
    }
}

fn read_moves(r: &mut dyn Read) -> Result<String, CheckpointError> {
    let moves = read_length_prefixed_str(r)?;
    if let Some(bad) = moves.chars().find(|&c| Direction::from_symbol(c).is_none()) {
        return Err(CheckpointError::Malformed {
            detail: format!("move string contains '{bad}'"),
        });
    }
    Ok(moves)
}

// ── Body ────────────────────────────────────────────────────────

/// Encode the search state body.
pub fn encode_state(w: &mut dyn Write, state: &SearchState) -> Result<(), CheckpointError> {
    match &state.best {
        Some(best) => {
            write_u8(w, 1)?;
            write_u32_le(w, best.presents_left)?;
            write_length_prefixed_str(w, &best.moves)?;
        }
        None => write_u8(w, 0)?,
    }
    write_u64_le(w, state.targets_visited)?;
    write_u64_le(w, state.rounds)?;

    write_u64_le(w, state.frontier.len() as u64)?;
    for record in &state.frontier {
        write_u32_le(w, record.position().0)?;
        write_u32_le(w, record.mask().bits())?;
        write_length_prefixed_str(w, record.moves())?;
    }

    write_u32_le(w, state.known.len() as u32)?;
    for index in &state.known {
        write_u32_le(w, index.width())?;
        write_u32_le(w, index.node_count() as u32)?;
        for node in index.nodes() {
            for child in node.children {
                write_u32_le(w, child.unwrap_or(NO_CHILD))?;
            }
        }
    }
    Ok(())
}

/// Decode a search state body.
///
/// Checks structure only; whether the state fits a particular board is
/// left to [`Search::resume`](glide_search::Search::resume).
pub fn decode_state(r: &mut dyn Read) -> Result<SearchState, CheckpointError> {
    let best = match read_u8(r)? {
        0 => None,
        1 => {
            let presents_left = read_u32_le(r)?;
            let moves = read_moves(r)?;
            Some(BestResult {
                presents_left,
                moves,
            })
        }
        flag => {
            return Err(CheckpointError::Malformed {
                detail: format!("invalid best-result flag {flag}"),
            })
        }
    };
    let targets_visited = read_u64_le(r)?;
    let rounds = read_u64_le(r)?;

    let frontier_len = read_u64_le(r)?;
    let mut frontier = VecDeque::with_capacity((frontier_len as usize).min(MAX_PREALLOC));
    for _ in 0..frontier_len {
        let position = CellIndex(read_u32_le(r)?);
        let mask = PresentMask(read_u32_le(r)?);
        let moves = read_moves(r)?;
        frontier.push_back(FrontierRecord::new(position, mask, moves));
    }

    let index_count = read_u32_le(r)? as usize;
    let mut known = Vec::with_capacity(index_count.min(MAX_PREALLOC));
    for cell in 0..index_count {
        let width = read_u32_le(r)?;
        let node_count = read_u32_le(r)? as usize;
        let mut nodes = Vec::with_capacity(node_count.min(MAX_PREALLOC));
        for _ in 0..node_count {
            let zero = read_u32_le(r)?;
            let one = read_u32_le(r)?;
            nodes.push(TrieNode {
                children: [zero, one].map(|c| (c != NO_CHILD).then_some(c)),
            });
        }
        let index = DominanceIndex::from_nodes(width, nodes).map_err(|e| {
            CheckpointError::Malformed {
                detail: format!("dominance index for cell {cell}: {e}"),
            }
        })?;
        known.push(index);
    }

    Ok(SearchState {
        best,
        targets_visited,
        rounds,
        frontier,
        known,
    })
}

// ── Whole file ──────────────────────────────────────────────────

/// Write a complete checkpoint: header, then the compressed body followed
/// by its digest.
pub fn encode_checkpoint(
    w: &mut dyn Write,
    board: &Board,
    catalog: &PresentCatalog,
    state: &SearchState,
) -> Result<(), CheckpointError> {
    w.write_all(&MAGIC)?;
    write_u8(w, FORMAT_VERSION)?;
    write_u64_le(w, board_fingerprint(board, catalog))?;

    let info = FrameInfo::new().content_checksum(true);
    let mut frame = FrameEncoder::with_frame_info(info, w);
    let mut body = HashingWriter::new(&mut frame);
    encode_state(&mut body, state)?;
    let digest = body.digest();
    write_u64_le(&mut frame, digest)?;
    frame.finish().map_err(io::Error::from)?;
    Ok(())
}

/// Read a complete checkpoint written for `board`.
///
/// # Errors
///
/// Fails with [`CheckpointError::InvalidMagic`],
/// [`UnsupportedVersion`](CheckpointError::UnsupportedVersion),
/// [`BoardMismatch`](CheckpointError::BoardMismatch),
/// [`BodyHashMismatch`](CheckpointError::BodyHashMismatch) or
/// [`Malformed`](CheckpointError::Malformed) for foreign or damaged data.
pub fn decode_checkpoint(
    r: &mut dyn Read,
    board: &Board,
    catalog: &PresentCatalog,
) -> Result<SearchState, CheckpointError> {
    let mut magic = [0u8; 4];
    read_exact(r, &mut magic).map_err(|e| match e {
        CheckpointError::Malformed { .. } => CheckpointError::InvalidMagic,
        other => other,
    })?;
    if magic != MAGIC {
        return Err(CheckpointError::InvalidMagic);
    }
    let version = read_u8(r)?;
    if version != FORMAT_VERSION {
        return Err(CheckpointError::UnsupportedVersion { found: version });
    }
    let recorded = read_u64_le(r)?;
    let current = board_fingerprint(board, catalog);
    if recorded != current {
        return Err(CheckpointError::BoardMismatch { recorded, current });
    }

    let mut body = HashingReader::new(FrameDecoder::new(r));
    let state = decode_state(&mut body).map_err(decompression_failure)?;
    let computed = body.digest();
    let mut frame = body.into_inner();
    let recorded = read_u64_le(&mut frame).map_err(decompression_failure)?;
    if recorded != computed {
        return Err(CheckpointError::BodyHashMismatch { recorded, computed });
    }
    let mut trailing = [0u8; 1];
    let extra = frame
        .read(&mut trailing)
        .map_err(|e| decompression_failure(e.into()))?;
    if extra != 0 {
        return Err(CheckpointError::Malformed {
            detail: "trailing data after body".into(),
        });
    }
    Ok(state)
}

/// Errors raised by the LZ4 decoder itself, or a stream that ends early,
/// mean corruption rather than I/O trouble.
fn decompression_failure(e: CheckpointError) -> CheckpointError {
    match e {
        CheckpointError::Io(io)
            if io.kind() == io::ErrorKind::UnexpectedEof
                || io
                    .get_ref()
                    .is_some_and(|inner| inner.is::<lz4_flex::frame::Error>()) =>
        {
            CheckpointError::Malformed {
                detail: format!("compressed body: {io}"),
            }
        }
        other => other,
    }
}
