//! Named, rank-r tensors: an ordered collection of blocks enumerating all
//! allowed spinor-block tuples (spec §4.5).
//!
//! Grounded on `original_source/src/datamodel/dgstack.c` for the
//! stack/lifecycle shape, and spec §6 "Persisted state layout" for the
//! `write`/`read` record format.

use crate::block::Block;
use crate::scalar::Scalar;
use crate::spinor::{SpinorBlockId, SpinorCatalog};
use crate::storage::Storage;
use crate::symmetry::{Irrep, SymmetryTable};
use std::io::{self, Read, Write};

#[derive(Debug, Clone)]
pub struct Diagram<T: Scalar> {
    pub name: String,
    pub rank: usize,
    /// `true` = hole (annihilation-type) dimension, per-dimension.
    pub qparts: Vec<bool>,
    pub valence: Vec<bool>,
    pub t3space: Vec<bool>,
    /// Current index order relative to canonical creation-after-annihilation
    /// form; identity is `[0, 1, ..., rank-1]` (spec Invariant 1).
    pub order: Vec<usize>,
    pub symmetry: Irrep,
    pub blocks: Vec<Block<T>>,
}

impl<T: Scalar> Diagram<T> {
    /// Enumerates all spinor-block tuples of rank r whose irrep product
    /// contains `operator_irrep`, building a (zero-initialised) [`Block`]
    /// per tuple (spec §4.5 `template`).
    #[allow(clippy::too_many_arguments)]
    pub fn template(
        name: impl Into<String>,
        qparts: Vec<bool>,
        valence: Vec<bool>,
        t3space: Vec<bool>,
        operator_irrep: Irrep,
        catalog: &SpinorCatalog,
        symmetry: &SymmetryTable,
        only_unique: bool,
    ) -> Self {
        let rank = qparts.len();
        let order: Vec<usize> = (0..rank).collect();

        let per_dim_blocks: Vec<Vec<SpinorBlockId>> = (0..rank)
            .map(|i| catalog.blocks_matching(None, qparts[i]).map(|b| b.id).collect())
            .collect();

        let mut tuples: Vec<Vec<SpinorBlockId>> = vec![Vec::new()];
        for dim_blocks in &per_dim_blocks {
            let mut next = Vec::with_capacity(tuples.len() * dim_blocks.len());
            for prefix in &tuples {
                for &b in dim_blocks {
                    let mut t = prefix.clone();
                    t.push(b);
                    next.push(t);
                }
            }
            tuples = next;
        }

        let n = rank / 2;
        let mut blocks = Vec::new();
        for tuple in tuples {
            let bra_irreps: Vec<Irrep> = tuple[..n].iter().map(|&id| catalog.block(id).irrep).collect();
            let ket_irreps: Vec<Irrep> = tuple[n..].iter().map(|&id| catalog.block(id).irrep).collect();
            if !symmetry.contains_irrep(&bra_irreps, &ket_irreps, operator_irrep) {
                continue;
            }
            let block = Block::new(tuple, &qparts, &valence, &t3space, catalog, only_unique);
            if !block.is_dummy() {
                blocks.push(block);
            }
        }

        Diagram {
            name: name.into(),
            rank,
            qparts,
            valence,
            t3space,
            order,
            symmetry: operator_irrep,
            blocks,
        }
    }

    pub fn find_block(&self, spinor_block_tuple: &[SpinorBlockId]) -> Option<&Block<T>> {
        self.blocks.iter().find(|b| b.spinor_blocks == spinor_block_tuple)
    }

    pub fn find_block_mut(&mut self, spinor_block_tuple: &[SpinorBlockId]) -> Option<&mut Block<T>> {
        self.blocks.iter_mut().find(|b| b.spinor_blocks == spinor_block_tuple)
    }

    fn block_index_for(&self, catalog: &SpinorCatalog, global_idx: &[usize]) -> Option<usize> {
        let tuple: Vec<SpinorBlockId> = global_idx.iter().map(|&g| catalog.block_of(g)).collect();
        self.blocks.iter().position(|b| b.spinor_blocks == tuple)
    }

    /// Reads an element by absolute (global spinor) index, transparently
    /// reconstructing it from the canonical twin (via `perm_to_unique` and
    /// `sign`) when the owning block is non-unique (spec §4.3.1).
    pub fn get_element(&self, catalog: &SpinorCatalog, global_idx: &[usize]) -> T {
        let Some(i) = self.block_index_for(catalog, global_idx) else {
            return T::zero();
        };
        let block = &self.blocks[i];
        if block.is_unique {
            return block.get(global_idx);
        }
        let Some(perm) = &block.perm_to_unique else {
            return T::zero();
        };
        let twin_tuple: Vec<SpinorBlockId> = perm.iter().map(|&p| block.spinor_blocks[p]).collect();
        let Some(twin) = self.blocks.iter().find(|b| b.is_unique && b.spinor_blocks == twin_tuple) else {
            return T::zero();
        };
        let permuted_idx: Vec<usize> = perm.iter().map(|&p| global_idx[p]).collect();
        let value = twin.get(&permuted_idx);
        if block.sign < 0 {
            T::zero() - value
        } else {
            value
        }
    }

    /// Writes an element by absolute index, writing through to the
    /// canonical twin's storage when the owning block is non-unique — this
    /// is what makes a single `set_element` zero an entire antisymmetry
    /// orbit at once.
    pub fn set_element(&mut self, catalog: &SpinorCatalog, global_idx: &[usize], value: T) {
        let Some(i) = self.block_index_for(catalog, global_idx) else {
            return;
        };
        if self.blocks[i].is_unique {
            self.blocks[i].set(global_idx, value);
            return;
        }
        let Some(perm) = self.blocks[i].perm_to_unique.clone() else {
            return;
        };
        let sign = self.blocks[i].sign;
        let twin_tuple: Vec<SpinorBlockId> = perm.iter().map(|&p| self.blocks[i].spinor_blocks[p]).collect();
        let Some(twin_idx) = self.blocks.iter().position(|b| b.is_unique && b.spinor_blocks == twin_tuple) else {
            return;
        };
        let permuted_idx: Vec<usize> = perm.iter().map(|&p| global_idx[p]).collect();
        let stored = if sign < 0 { T::zero() - value } else { value };
        self.blocks[twin_idx].set(&permuted_idx, stored);
    }

    pub fn get_quasiparticles(&self) -> String {
        self.qparts.iter().map(|&h| if h { 'h' } else { 'p' }).collect()
    }

    pub fn get_valence(&self) -> Vec<bool> {
        self.valence.clone()
    }

    pub fn get_order(&self) -> Vec<usize> {
        self.order.clone()
    }

    /// Per-block storage class and aggregate RAM/disk use.
    pub fn summary(&self) -> DiagramSummary {
        let mut summary = DiagramSummary::default();
        for b in &self.blocks {
            match &b.storage {
                Storage::InMemory(buf) => {
                    summary.blocks_in_memory += 1;
                    summary.bytes_in_memory += buf.len() * std::mem::size_of::<T>();
                }
                Storage::OnDisk(h) => {
                    summary.blocks_on_disk += 1;
                    summary.bytes_on_disk += h.len * std::mem::size_of::<T>();
                }
                Storage::Dummy => summary.blocks_dummy += 1,
            }
            if b.is_unique {
                summary.unique_blocks += 1;
            }
        }
        summary
    }

    /// Serialises the full diagram: header (rank, qparts/valence/t3space,
    /// order, symmetry irrep, block count), then per-block records (tuple,
    /// uniqueness metadata, shape, payload) — the record layout named in
    /// spec §6.
    pub fn write(&self, w: &mut impl Write) -> io::Result<()> {
        w.write_all(&(self.rank as u32).to_le_bytes())?;
        for &h in &self.qparts {
            w.write_all(&[h as u8])?;
        }
        for &v in &self.valence {
            w.write_all(&[v as u8])?;
        }
        for &t in &self.t3space {
            w.write_all(&[t as u8])?;
        }
        for &o in &self.order {
            w.write_all(&(o as u32).to_le_bytes())?;
        }
        w.write_all(&(self.symmetry.0).to_le_bytes())?;
        w.write_all(&[0u8; 64 * 8])?; // reserved area, per spec §6
        w.write_all(&(self.blocks.len() as u64).to_le_bytes())?;
        for block in &self.blocks {
            for id in &block.spinor_blocks {
                w.write_all(&id.0.to_le_bytes())?;
            }
            w.write_all(&[block.is_unique as u8])?;
            w.write_all(&(block.n_equal_perms as u32).to_le_bytes())?;
            for &s in &block.shape {
                w.write_all(&(s as u32).to_le_bytes())?;
            }
            match &block.storage {
                Storage::InMemory(buf) => {
                    w.write_all(&[0u8])?;
                    w.write_all(&(buf.len() as u64).to_le_bytes())?;
                    for v in buf {
                        let ptr = v as *const T as *const u8;
                        let bytes = unsafe { std::slice::from_raw_parts(ptr, std::mem::size_of::<T>()) };
                        w.write_all(bytes)?;
                    }
                }
                Storage::OnDisk(h) => {
                    w.write_all(&[1u8])?;
                    let path = h.path.to_string_lossy();
                    w.write_all(&(path.len() as u32).to_le_bytes())?;
                    w.write_all(path.as_bytes())?;
                }
                Storage::Dummy => {
                    w.write_all(&[2u8])?;
                }
            }
        }
        Ok(())
    }

    pub fn read(name: impl Into<String>, r: &mut impl Read) -> io::Result<Self> {
        let mut u32buf = [0u8; 4];
        r.read_exact(&mut u32buf)?;
        let rank = u32::from_le_bytes(u32buf) as usize;

        let mut read_bools = |n: usize| -> io::Result<Vec<bool>> {
            let mut buf = vec![0u8; n];
            r.read_exact(&mut buf)?;
            Ok(buf.into_iter().map(|b| b != 0).collect())
        };
        let qparts = read_bools(rank)?;
        let valence = read_bools(rank)?;
        let t3space = read_bools(rank)?;

        let mut order = Vec::with_capacity(rank);
        for _ in 0..rank {
            r.read_exact(&mut u32buf)?;
            order.push(u32::from_le_bytes(u32buf) as usize);
        }
        let mut irrep_buf = [0u8; 2];
        r.read_exact(&mut irrep_buf)?;
        let symmetry = Irrep(u16::from_le_bytes(irrep_buf));

        let mut reserved = [0u8; 64 * 8];
        r.read_exact(&mut reserved)?;

        let mut u64buf = [0u8; 8];
        r.read_exact(&mut u64buf)?;
        let n_blocks = u64::from_le_bytes(u64buf) as usize;

        let mut blocks = Vec::with_capacity(n_blocks);
        for _ in 0..n_blocks {
            let mut tuple_buf = [0u8; 4];
            let mut spinor_blocks = Vec::with_capacity(rank);
            for _ in 0..rank {
                r.read_exact(&mut tuple_buf)?;
                spinor_blocks.push(crate::spinor::SpinorBlockId(u32::from_le_bytes(tuple_buf)));
            }
            let mut byte = [0u8; 1];
            r.read_exact(&mut byte)?;
            let is_unique = byte[0] != 0;
            r.read_exact(&mut u32buf)?;
            let n_equal_perms = u32::from_le_bytes(u32buf) as usize;
            let mut shape = Vec::with_capacity(rank);
            for _ in 0..rank {
                r.read_exact(&mut u32buf)?;
                shape.push(u32::from_le_bytes(u32buf) as usize);
            }
            r.read_exact(&mut byte)?;
            let storage = match byte[0] {
                0 => {
                    r.read_exact(&mut u64buf)?;
                    let len = u64::from_le_bytes(u64buf) as usize;
                    let mut raw = vec![0u8; len * std::mem::size_of::<T>()];
                    r.read_exact(&mut raw)?;
                    let mut values = Vec::with_capacity(len);
                    for chunk in raw.chunks_exact(std::mem::size_of::<T>()) {
                        let mut value = T::zero();
                        unsafe {
                            std::ptr::copy_nonoverlapping(
                                chunk.as_ptr(),
                                &mut value as *mut T as *mut u8,
                                std::mem::size_of::<T>(),
                            );
                        }
                        values.push(value);
                    }
                    Storage::InMemory(values)
                }
                1 => {
                    r.read_exact(&mut u32buf)?;
                    let len = u32::from_le_bytes(u32buf) as usize;
                    let mut path_bytes = vec![0u8; len];
                    r.read_exact(&mut path_bytes)?;
                    let path = String::from_utf8_lossy(&path_bytes).to_string();
                    Storage::OnDisk(crate::storage::DiskHandle {
                        path: path.into(),
                        len: shape.iter().product(),
                        compressed: false,
                    })
                }
                _ => Storage::Dummy,
            };
            blocks.push(Block {
                rank,
                spinor_blocks,
                shape,
                indices: vec![Vec::new(); rank],
                is_unique,
                sign: 1,
                perm_to_unique: None,
                perm_from_unique: None,
                n_equal_perms,
                storage,
            });
        }

        Ok(Diagram {
            name: name.into(),
            rank,
            qparts,
            valence,
            t3space,
            order,
            symmetry,
            blocks,
        })
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DiagramSummary {
    pub blocks_in_memory: usize,
    pub blocks_on_disk: usize,
    pub blocks_dummy: usize,
    pub unique_blocks: usize,
    pub bytes_in_memory: usize,
    pub bytes_on_disk: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spinor::Spinor;

    fn small_catalog() -> (SpinorCatalog, SymmetryTable) {
        let spinors: Vec<Spinor> = (0..6)
            .map(|i| Spinor {
                global_index: i,
                irrep: Irrep(0),
                energy: i as f64,
                is_hole: i < 3,
                is_active: false,
                t3_space: false,
            })
            .collect();
        let catalog = SpinorCatalog::new(spinors, 8);
        let sym = SymmetryTable::new_abelian(vec!["A".into()], vec![vec![0]], 0);
        (catalog, sym)
    }

    #[test]
    fn template_covers_all_admissible_tuples() {
        let (catalog, sym) = small_catalog();
        let diagram = Diagram::<f64>::template(
            "hhpp",
            vec![true, true, false, false],
            vec![false, false, false, false],
            vec![false, false, false, false],
            sym.totsym,
            &catalog,
            &sym,
            false,
        );
        // single irrep -> exactly one admissible spinor-block tuple
        assert_eq!(diagram.blocks.len(), 1);
        assert_eq!(diagram.blocks[0].shape, vec![3, 3, 3, 3]);
    }

    #[test]
    fn write_read_roundtrip() {
        let (catalog, sym) = small_catalog();
        let mut diagram = Diagram::<f64>::template(
            "t2",
            vec![true, true, false, false],
            vec![false, false, false, false],
            vec![false, false, false, false],
            sym.totsym,
            &catalog,
            &sym,
            false,
        );
        diagram.blocks[0].set(&[0, 1, 3, 4], 2.5);

        let mut buf = Vec::new();
        diagram.write(&mut buf).unwrap();
        let mut cursor = std::io::Cursor::new(buf);
        let read_back = Diagram::<f64>::read("t2", &mut cursor).unwrap();
        assert_eq!(read_back.rank, diagram.rank);
        assert_eq!(read_back.blocks.len(), diagram.blocks.len());
        assert_eq!(read_back.blocks[0].shape, diagram.blocks[0].shape);
    }
}
