//! Storage backend: each block lives in memory, on disk (optionally LZ4
//! compressed), or as a symmetry-forbidden `Dummy` placeholder (spec §4.4).
//!
//! Grounded on `original_source/include/platform.h` for the I/O layer
//! contract (`io_write_compressed`/`io_read_compressed`); `lz4_flex` is the
//! pure-Rust compression crate (no system liblz4, matching the teacher's
//! preference for self-contained crates over FFI).

use crate::config::DiskUsageLevel;
use crate::error::{Error, Result};
use crate::scalar::Scalar;
use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

#[derive(Debug, Clone)]
pub enum Storage<T: Scalar> {
    InMemory(Vec<T>),
    OnDisk(DiskHandle),
    Dummy,
}

#[derive(Debug, Clone)]
pub struct DiskHandle {
    pub path: PathBuf,
    pub len: usize,
    pub compressed: bool,
}

/// Cumulative bytes moved through the disk I/O layer, for `summary`
/// reporting (spec §4.5).
#[derive(Debug, Default)]
pub struct IoStats {
    pub bytes_written_raw: AtomicU64,
    pub bytes_written_compressed: AtomicU64,
    pub bytes_read: AtomicU64,
    next_block_id: AtomicU64,
}

impl IoStats {
    pub fn snapshot(&self) -> (u64, u64, u64) {
        (
            self.bytes_written_raw.load(Ordering::Relaxed),
            self.bytes_written_compressed.load(Ordering::Relaxed),
            self.bytes_read.load(Ordering::Relaxed),
        )
    }

    /// Hands out a fresh scratch-file id for dematerialising a unique block
    /// (spec §6 `block-<run>-<id>.sb`).
    pub fn next_block_id(&self) -> u64 {
        self.next_block_id.fetch_add(1, Ordering::Relaxed)
    }
}

/// Scratch block filename: `block-<run>-<id>.sb` (spec §6).
pub fn scratch_path(scratch_dir: &Path, run_id: u64, block_id: u64) -> PathBuf {
    scratch_dir.join(format!("block-{run_id}-{block_id}.sb"))
}

fn bytes_of<T: Scalar>(buf: &[T]) -> Vec<u8> {
    let byte_len = std::mem::size_of_val(buf);
    let mut out = Vec::with_capacity(byte_len);
    for v in buf {
        let ptr = v as *const T as *const u8;
        out.extend_from_slice(unsafe { std::slice::from_raw_parts(ptr, std::mem::size_of::<T>()) });
    }
    out
}

fn values_of<T: Scalar>(bytes: &[u8], len: usize) -> Vec<T> {
    assert_eq!(bytes.len(), len * std::mem::size_of::<T>());
    let mut out = Vec::with_capacity(len);
    for chunk in bytes.chunks_exact(std::mem::size_of::<T>()) {
        let mut value = T::zero();
        unsafe {
            std::ptr::copy_nonoverlapping(
                chunk.as_ptr(),
                &mut value as *mut T as *mut u8,
                std::mem::size_of::<T>(),
            );
        }
        out.push(value);
    }
    out
}

impl<T: Scalar> Storage<T> {
    /// Writes the buffer to `path` (optionally LZ4-compressed) and frees
    /// RAM, transitioning `InMemory -> OnDisk`. A no-op if already on disk
    /// (idempotent per spec §4.4).
    pub fn store(&mut self, path: PathBuf, compress: bool, stats: &IoStats) -> Result<()> {
        let buf = match self {
            Storage::InMemory(buf) => buf,
            Storage::OnDisk(_) | Storage::Dummy => return Ok(()),
        };
        let len = buf.len();
        let raw = bytes_of(buf);
        stats.bytes_written_raw.fetch_add(raw.len() as u64, Ordering::Relaxed);
        let payload = if compress {
            lz4_flex::compress_prepend_size(&raw)
        } else {
            raw
        };
        stats
            .bytes_written_compressed
            .fetch_add(payload.len() as u64, Ordering::Relaxed);
        let mut f = fs::File::create(&path).map_err(|source| Error::Scratch {
            path: path.clone(),
            source,
        })?;
        f.write_all(&payload).map_err(|source| Error::Scratch {
            path: path.clone(),
            source,
        })?;
        *self = Storage::OnDisk(DiskHandle {
            path,
            len,
            compressed: compress,
        });
        Ok(())
    }

    /// Reads the buffer back from disk into a freshly allocated in-memory
    /// buffer. Idempotent if already in memory.
    pub fn load(&mut self, stats: &IoStats) -> Result<()> {
        let handle = match self {
            Storage::OnDisk(h) => h.clone(),
            Storage::InMemory(_) | Storage::Dummy => return Ok(()),
        };
        let mut payload = Vec::new();
        fs::File::open(&handle.path)
            .and_then(|mut f| f.read_to_end(&mut payload))
            .map_err(|source| Error::Scratch {
                path: handle.path.clone(),
                source,
            })?;
        stats.bytes_read.fetch_add(payload.len() as u64, Ordering::Relaxed);
        let raw = if handle.compressed {
            lz4_flex::decompress_size_prepended(&payload)
                .map_err(|e| Error::Numerical(format!("lz4 decompress failed: {e}")))?
        } else {
            payload
        };
        let values = values_of::<T>(&raw, handle.len);
        *self = Storage::InMemory(values);
        Ok(())
    }

    /// Frees without writing.
    pub fn unload(&mut self) {
        if matches!(self, Storage::InMemory(_)) {
            *self = Storage::Dummy;
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Storage::InMemory(buf) => buf.len(),
            Storage::OnDisk(h) => h.len,
            Storage::Dummy => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Disk policy table, §4.4.
pub fn should_be_on_disk(level: DiskUsageLevel, rank: usize, is_pppp: bool, is_ppp_star: bool) -> bool {
    use DiskUsageLevel::*;
    let on_disk = match level {
        Level0 => false,
        Level1 => rank >= 6,
        Level2 => rank >= 6 || is_pppp,
        Level3 | Level4 => rank >= 6 || is_pppp || is_ppp_star,
    };
    debug!(?level, rank, is_pppp, is_ppp_star, on_disk, "block storage-class decision");
    on_disk
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_load_roundtrip_real() {
        let dir = tempfile::tempdir().unwrap();
        let stats = IoStats::default();
        let mut s: Storage<f64> = Storage::InMemory(vec![1.0, 2.0, 3.0, 4.0]);
        let path = scratch_path(dir.path(), 1, 7);
        s.store(path, false, &stats).unwrap();
        assert!(matches!(s, Storage::OnDisk(_)));
        s.load(&stats).unwrap();
        assert!(matches!(&s, Storage::InMemory(buf) if buf == &[1.0, 2.0, 3.0, 4.0]));
    }

    #[test]
    fn store_load_roundtrip_compressed() {
        let dir = tempfile::tempdir().unwrap();
        let stats = IoStats::default();
        let mut s: Storage<f64> = Storage::InMemory((0..64).map(|i| i as f64).collect());
        let path = scratch_path(dir.path(), 2, 1);
        s.store(path, true, &stats).unwrap();
        s.load(&stats).unwrap();
        let expected: Vec<f64> = (0..64).map(|i| i as f64).collect();
        assert!(matches!(&s, Storage::InMemory(buf) if buf == &expected));
    }

    #[test]
    fn disk_policy_levels() {
        use DiskUsageLevel::*;
        assert!(!should_be_on_disk(Level0, 8, true, true));
        assert!(should_be_on_disk(Level1, 6, false, false));
        assert!(!should_be_on_disk(Level1, 4, true, true));
        assert!(should_be_on_disk(Level2, 4, true, false));
        assert!(!should_be_on_disk(Level2, 4, false, true));
        assert!(should_be_on_disk(Level3, 4, false, true));
    }
}
