//! A dense sub-tensor for one tuple of spinor-block indices, plus
//! metadata: rank, per-dimension index maps, uniqueness, storage mode
//! (spec §4.3).
//!
//! Grounded on `original_source/src/datamodel/block.c`: the per-dimension
//! filter in `symblock_new`, and the fixed rank-2/rank-3 half-permutation
//! tables (`perms_2`, `perms_3`) driving the uniqueness/antisymmetry
//! analysis of §4.3.1.

use crate::scalar::Scalar;
use crate::spinor::{SpinorBlockId, SpinorCatalog};
use crate::storage::Storage;
use tracing::warn;

/// Dimension type after tagging bra/ket halves per §4.3.1 step 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DimType {
    Hole,
    Particle,
    ActiveHole,
    ActiveParticle,
}

fn dim_type(is_hole: bool, is_active: bool) -> DimType {
    match (is_hole, is_active) {
        (true, false) => DimType::Hole,
        (false, false) => DimType::Particle,
        (true, true) => DimType::ActiveHole,
        (false, true) => DimType::ActiveParticle,
    }
}

/// `(permutation, parity)` pairs for rank-n bra/ket halves, n in {1,2,3}
/// (spec.md covers CC models up to CCSDT, i.e. diagrams up to rank 6).
fn half_perm_table(n: usize) -> Vec<(Vec<usize>, i8)> {
    match n {
        1 => vec![(vec![0], 1)],
        2 => vec![(vec![0, 1], 1), (vec![1, 0], -1)],
        3 => vec![
            (vec![0, 1, 2], 1),
            (vec![0, 2, 1], -1),
            (vec![1, 2, 0], 1),
            (vec![1, 0, 2], -1),
            (vec![2, 0, 1], 1),
            (vec![2, 1, 0], -1),
        ],
        other => panic!("no permutation table for half-rank {other} (add one for rank-8+ diagrams)"),
    }
}

fn is_ascending(vals: &[u32]) -> bool {
    vals.windows(2).all(|w| w[0] <= w[1])
}

/// Orbit size for identical-type half, §4.3.1 step 5: 1 if all equal,
/// else the count of distinct spinor-block ids collapses to {1,2} (rank-4
/// half) or {1,3,6} (rank-6 half).
fn half_orbit_size(spinor_blocks: &[u32]) -> usize {
    match spinor_blocks.len() {
        1 => 1,
        2 => {
            if spinor_blocks[0] == spinor_blocks[1] {
                1
            } else {
                2
            }
        }
        3 => {
            let (a, b, c) = (spinor_blocks[0], spinor_blocks[1], spinor_blocks[2]);
            if a == b && b == c {
                1
            } else if a == b || b == c || a == c {
                3
            } else {
                6
            }
        }
        other => panic!("no orbit-size rule for half-rank {other}"),
    }
}

/// Finds the permutation sorting `spinor_blocks` into ascending order and
/// its parity, from the fixed half-permutation table.
fn sorting_permutation(spinor_blocks: &[u32]) -> (Vec<usize>, i8, bool) {
    let n = spinor_blocks.len();
    for (perm, sign) in half_perm_table(n) {
        let permuted: Vec<u32> = perm.iter().map(|&p| spinor_blocks[p]).collect();
        if is_ascending(&permuted) {
            let is_identity = perm.iter().enumerate().all(|(i, &p)| i == p);
            return (perm, sign, is_identity);
        }
    }
    unreachable!("sorting permutation search must always terminate: the identity permutation always yields a candidate ordering")
}

#[derive(Debug, Clone)]
pub struct Block<T: Scalar> {
    pub rank: usize,
    /// The r-tuple of spinor blocks identifying this block.
    pub spinor_blocks: Vec<SpinorBlockId>,
    /// Number of spinors surviving the diagram's filter, per dimension.
    pub shape: Vec<usize>,
    /// Ordered global spinor indices populating each dimension.
    pub indices: Vec<Vec<usize>>,
    pub is_unique: bool,
    pub sign: i8,
    pub perm_to_unique: Option<Vec<usize>>,
    pub perm_from_unique: Option<Vec<usize>>,
    pub n_equal_perms: usize,
    pub storage: Storage<T>,
}

impl<T: Scalar> Block<T> {
    /// Builds a block, filtering spinors per-dimension by qparts/valence/
    /// t3space (spec §4.3, §9 Open Question: filter first, then symmetry
    /// selection is the caller's job via [`crate::symmetry::SymmetryTable`]).
    /// If any resulting dimension is empty the block becomes `Dummy`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        spinor_blocks: Vec<SpinorBlockId>,
        qparts: &[bool],
        valence: &[bool],
        t3space: &[bool],
        catalog: &SpinorCatalog,
        only_unique: bool,
    ) -> Self {
        let rank = spinor_blocks.len();
        let mut indices = Vec::with_capacity(rank);
        for i in 0..rank {
            let block = catalog.block(spinor_blocks[i]);
            let mut dim_indices = Vec::new();
            for &g in &block.spinors {
                let s = catalog.spinor(g);
                if s.is_hole != qparts[i] {
                    continue;
                }
                if valence[i] && !s.is_active {
                    continue;
                }
                if t3space[i] && !s.t3_space {
                    continue;
                }
                dim_indices.push(g);
            }
            indices.push(dim_indices);
        }
        let shape: Vec<usize> = indices.iter().map(|v| v.len()).collect();
        let is_dummy = shape.contains(&0);

        let mut block = Block {
            rank,
            spinor_blocks,
            shape: shape.clone(),
            indices,
            is_unique: true,
            sign: 1,
            perm_to_unique: None,
            perm_from_unique: None,
            n_equal_perms: 1,
            storage: Storage::Dummy,
        };

        if is_dummy {
            return block;
        }

        if only_unique {
            block.analyze_uniqueness(qparts, valence);
        }

        if block.is_unique {
            let len: usize = shape.iter().product();
            block.storage = Storage::InMemory(vec![T::zero(); len]);
        }

        block
    }

    /// §4.3.1: tags bra/ket halves by type, finds the sorting permutation
    /// within each identically-typed half, and derives sign/orbit/
    /// perm_to_unique accordingly.
    fn analyze_uniqueness(&mut self, qparts: &[bool], valence: &[bool]) {
        let n = self.rank / 2;
        if n == 0 {
            return;
        }
        let types: Vec<DimType> = (0..self.rank)
            .map(|i| dim_type(qparts[i], valence[i]))
            .collect();

        let bra_uniform = types[..n].windows(2).all(|w| w[0] == w[1]);
        let ket_uniform = types[n..].windows(2).all(|w| w[0] == w[1]);

        let mut perm: Vec<usize> = (0..self.rank).collect();
        let mut bra_sign = 1i8;
        let mut ket_sign = 1i8;
        let mut bra_unique = true;
        let mut ket_unique = true;
        let mut bra_orbit = 1usize;
        let mut ket_orbit = 1usize;

        if bra_uniform {
            let bra_ids: Vec<u32> = self.spinor_blocks[..n].iter().map(|b| b.0).collect();
            let (p, sign, identity) = sorting_permutation(&bra_ids);
            bra_unique = identity;
            bra_sign = sign;
            bra_orbit = half_orbit_size(&bra_ids);
            perm[..n].copy_from_slice(&p[..n]);
        }
        if ket_uniform {
            let ket_ids: Vec<u32> = self.spinor_blocks[n..].iter().map(|b| b.0).collect();
            let (p, sign, identity) = sorting_permutation(&ket_ids);
            ket_unique = identity;
            ket_sign = sign;
            ket_orbit = half_orbit_size(&ket_ids);
            for i in 0..n {
                perm[n + i] = n + p[i];
            }
        }

        self.n_equal_perms = bra_orbit * ket_orbit;
        if bra_unique && ket_unique {
            self.is_unique = true;
            self.sign = 1;
        } else {
            self.is_unique = false;
            self.sign = bra_sign * ket_sign;
            let mut inverse = vec![0usize; self.rank];
            for (i, &p) in perm.iter().enumerate() {
                inverse[p] = i;
            }
            self.perm_to_unique = Some(perm);
            self.perm_from_unique = Some(inverse);
        }
    }

    pub fn is_dummy(&self) -> bool {
        matches!(self.storage, Storage::Dummy)
    }

    /// Materialises the per-element compound index in row-major order.
    pub fn gen_indices(&self) -> Vec<Vec<usize>> {
        let total: usize = self.shape.iter().product();
        let mut out = Vec::with_capacity(total);
        let mut counter = vec![0usize; self.rank];
        for _ in 0..total {
            out.push(counter.clone());
            for d in (0..self.rank).rev() {
                counter[d] += 1;
                if counter[d] < self.shape[d] || self.shape[d] == 0 {
                    break;
                }
                counter[d] = 0;
            }
        }
        out
    }

    fn linear_offset(&self, idx: &[usize]) -> Option<usize> {
        let mut offset = 0usize;
        for (&i, &s) in idx.iter().zip(&self.shape).take(self.rank) {
            if i >= s {
                return None;
            }
            offset = offset * s + i;
        }
        Some(offset)
    }

    /// Translates an absolute (global spinor) index tuple to a value;
    /// missing indices (not covered by this block's filtered dimensions)
    /// yield zero.
    pub fn get(&self, global_idx: &[usize]) -> T {
        let Some(local) = self.local_index(global_idx) else {
            return T::zero();
        };
        let Some(offset) = self.linear_offset(&local) else {
            return T::zero();
        };
        match &self.storage {
            Storage::InMemory(buf) => buf[offset],
            _ => T::zero(),
        }
    }

    /// Sets a value at an absolute index tuple; a no-op if the tuple
    /// doesn't belong to this block.
    pub fn set(&mut self, global_idx: &[usize], value: T) {
        let Some(local) = self.local_index(global_idx) else {
            return;
        };
        let Some(offset) = self.linear_offset(&local) else {
            return;
        };
        if let Storage::InMemory(buf) = &mut self.storage {
            buf[offset] = value;
        }
    }

    fn local_index(&self, global_idx: &[usize]) -> Option<Vec<usize>> {
        let mut local = Vec::with_capacity(self.rank);
        for (dim_indices, &g) in self.indices.iter().zip(global_idx).take(self.rank) {
            let pos = dim_indices.iter().position(|&x| x == g)?;
            local.push(pos);
        }
        Some(local)
    }

    pub fn clear(&mut self) {
        if let Storage::InMemory(buf) = &mut self.storage {
            for v in buf.iter_mut() {
                *v = T::zero();
            }
        }
    }

    /// Copies buffers between shape-identical blocks.
    pub fn copy_data(&mut self, src: &Block<T>) {
        assert_eq!(self.shape, src.shape, "copy_data requires identical shapes");
        if let (Storage::InMemory(dst), Storage::InMemory(s)) = (&mut self.storage, &src.storage) {
            dst.copy_from_slice(s);
        }
    }

    /// Destroys a non-unique (transient, reconstructed) block's buffer.
    /// Per the Design Notes' Open Question, calling this on a unique
    /// block is a programmer-error smell, not a crash: we warn and still
    /// free, matching the documented legacy behaviour.
    pub fn destroy(&mut self) {
        if self.is_unique {
            warn!("destroying unique block!");
        }
        self.storage = Storage::Dummy;
    }

    /// Reconstructs a non-unique block's data from its canonical twin:
    /// permute the unique buffer's dimensions and multiply by `sign`.
    pub fn restore_from_unique(&mut self, unique: &Block<T>) {
        let Some(perm_from_unique) = &self.perm_from_unique else {
            panic!("restore_from_unique called on a block with no perm_from_unique");
        };
        let Storage::InMemory(unique_buf) = &unique.storage else {
            panic!("restore_from_unique requires the unique twin to be resident in memory");
        };
        let mut buf = vec![T::zero(); unique_buf.len()];
        for idx in unique.gen_indices() {
            let mut permuted_idx = vec![0usize; self.rank];
            for (d, &p) in perm_from_unique.iter().enumerate() {
                permuted_idx[p] = idx[d];
            }
            let offset = unique.linear_offset(&idx).unwrap();
            let dest_offset = self.linear_offset(&permuted_idx).unwrap();
            let value = unique_buf[offset];
            buf[dest_offset] = if self.sign < 0 { T::zero() - value } else { value };
        }
        self.storage = Storage::InMemory(buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symmetry::Irrep;

    fn catalog_for_rank4() -> (SpinorCatalog, Vec<SpinorBlockId>) {
        use crate::spinor::Spinor;
        let spinors: Vec<Spinor> = (0..8)
            .map(|i| Spinor {
                global_index: i,
                irrep: Irrep(0),
                energy: i as f64,
                is_hole: i < 4,
                is_active: false,
                t3_space: false,
            })
            .collect();
        let catalog = SpinorCatalog::new(spinors, 2);
        let hole_blocks: Vec<_> = catalog.blocks_matching(None, true).map(|b| b.id).collect();
        (catalog, hole_blocks)
    }

    #[test]
    fn identical_bra_pair_collapses_orbit() {
        let (catalog, hole_blocks) = catalog_for_rank4();
        let b0 = hole_blocks[0];
        let spinor_blocks = vec![b0, b0, hole_blocks[0], hole_blocks[1]];
        let qparts = [true, true, true, true];
        let valence = [false, false, false, false];
        let t3 = [false, false, false, false];
        let block = Block::<f64>::new(spinor_blocks, &qparts, &valence, &t3, &catalog, true);
        assert!(block.is_unique);
        // bra pair collapses to orbit 1, but ket is a distinct pair (orbit 2)
        assert_eq!(block.n_equal_perms, 2);
    }

    #[test]
    fn distinct_bra_pair_is_nonunique_when_descending() {
        let (catalog, hole_blocks) = catalog_for_rank4();
        let spinor_blocks = vec![hole_blocks[1], hole_blocks[0], hole_blocks[0], hole_blocks[0]];
        let qparts = [true, true, true, true];
        let valence = [false, false, false, false];
        let t3 = [false, false, false, false];
        let block = Block::<f64>::new(spinor_blocks, &qparts, &valence, &t3, &catalog, true);
        assert!(!block.is_unique);
        assert_eq!(block.sign, -1);
        assert_eq!(block.n_equal_perms, 2);
    }

    #[test]
    fn get_set_roundtrip() {
        let (catalog, hole_blocks) = catalog_for_rank4();
        let spinor_blocks = vec![hole_blocks[0], hole_blocks[1]];
        let qparts = [true, true];
        let valence = [false, false];
        let t3 = [false, false];
        let mut block = Block::<f64>::new(spinor_blocks, &qparts, &valence, &t3, &catalog, false);
        let idx0 = block.indices[0][0];
        let idx1 = block.indices[1][0];
        block.set(&[idx0, idx1], 3.5);
        assert_eq!(block.get(&[idx0, idx1]), 3.5);
        assert_eq!(block.get(&[idx0, idx0]), 0.0);
    }

    #[test]
    fn dummy_when_filter_empties_a_dimension() {
        let (catalog, hole_blocks) = catalog_for_rank4();
        // qparts says "particle" but these spinor blocks are holes -> empty dim
        let spinor_blocks = vec![hole_blocks[0]];
        let qparts = [false];
        let valence = [false];
        let t3 = [false];
        let block = Block::<f64>::new(spinor_blocks, &qparts, &valence, &t3, &catalog, false);
        assert!(block.is_dummy());
    }
}
