//! FNV-1a hashing for board fingerprints and body integrity.
//!
//! These hashes are not cryptographically secure; they catch accidental
//! mismatches and corruption, nothing more.

use std::io::{self, Read, Write};

use glide_board::{Board, PresentCatalog};
use glide_core::CellKind;

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

/// Feed a single byte into an FNV-1a hash state.
#[inline]
fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
}

/// Feed a byte slice into an FNV-1a hash state.
#[inline]
fn fnv1a_bytes(mut hash: u64, bytes: &[u8]) -> u64 {
    for &b in bytes {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

/// Feed a u32 (as 4 LE bytes) into an FNV-1a hash state.
#[inline]
fn fnv1a_u32(hash: u64, v: u32) -> u64 {
    fnv1a_bytes(hash, &v.to_le_bytes())
}

fn kind_tag(kind: CellKind) -> u8 {
    match kind {
        CellKind::Empty => 0,
        CellKind::Wall => 1,
        CellKind::Tree => 2,
        CellKind::Target => 3,
        CellKind::HoleEntrance => 4,
    }
}

/// Fingerprint of everything that shapes a search over `board`.
///
/// Folds in the dimensions, edge behavior, every cell, the start, the
/// teleport connections and the present positions in bit order. Two boards
/// with the same fingerprint produce the same search.
pub fn board_fingerprint(board: &Board, catalog: &PresentCatalog) -> u64 {
    let mut hash = FNV_OFFSET;
    hash = fnv1a_u32(hash, board.rows());
    hash = fnv1a_u32(hash, board.cols());
    hash = fnv1a_byte(hash, u8::from(board.is_torus()));
    for &kind in board.cells() {
        hash = fnv1a_byte(hash, kind_tag(kind));
    }
    hash = fnv1a_u32(hash, board.start().0);
    for (from, to) in board.connections() {
        hash = fnv1a_u32(hash, from.0);
        hash = fnv1a_u32(hash, to.0);
    }
    hash = fnv1a_u32(hash, catalog.width());
    for cell in catalog.positions() {
        hash = fnv1a_u32(hash, cell.0);
    }
    hash
}

// ── Streaming digests ───────────────────────────────────────────

/// `Write` adapter that hashes every byte passing through.
pub(crate) struct HashingWriter<W> {
    inner: W,
    hash: u64,
}

impl<W: Write> HashingWriter<W> {
    pub(crate) fn new(inner: W) -> Self {
        Self {
            inner,
            hash: FNV_OFFSET,
        }
    }

    pub(crate) fn digest(&self) -> u64 {
        self.hash
    }
}

impl<W: Write> Write for HashingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.hash = fnv1a_bytes(self.hash, &buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// `Read` adapter that hashes every byte passing through.
pub(crate) struct HashingReader<R> {
    inner: R,
    hash: u64,
}

impl<R: Read> HashingReader<R> {
    pub(crate) fn new(inner: R) -> Self {
        Self {
            inner,
            hash: FNV_OFFSET,
        }
    }

    pub(crate) fn digest(&self) -> u64 {
        self.hash
    }

    pub(crate) fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> Read for HashingReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.hash = fnv1a_bytes(self.hash, &buf[..n]);
        Ok(n)
    }
}
