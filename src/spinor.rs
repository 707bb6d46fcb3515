//! Spinor catalogue: per-spinor attributes, fast-access index lists, and
//! partitioning into irrep-pure spinor blocks (spec §4.2).

use crate::symmetry::Irrep;
use std::collections::HashMap;

/// A one-electron spinor with the attributes spec.md's data model requires.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spinor {
    pub global_index: usize,
    pub irrep: Irrep,
    pub energy: f64,
    pub is_hole: bool,
    pub is_active: bool,
    pub t3_space: bool,
}

/// Identifies one maximal group of spinors sharing irrep and per-block
/// attributes, bounded by the configured tile size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SpinorBlockId(pub u32);

#[derive(Debug, Clone)]
pub struct SpinorBlock {
    pub id: SpinorBlockId,
    pub irrep: Irrep,
    pub is_hole: bool,
    pub is_active: bool,
    /// Global spinor indices in this block, in stable (arbitrary) order.
    pub spinors: Vec<usize>,
}

/// Three ways a reference occupation may be supplied (spec §4.2); the
/// third (from an integral interface) arrives pre-set on each [`Spinor`]
/// and so has no variant here.
pub enum ReferenceOccupation<'a> {
    /// Explicit per-spinor hole/particle flags, indexed by global index.
    ExplicitFlags(&'a [bool]),
    /// Number of occupied (hole) spinors per irrep; within an irrep, the
    /// lowest-energy spinors fill first.
    PerIrrepCounts(&'a HashMap<Irrep, usize>),
}

impl<'a> ReferenceOccupation<'a> {
    fn assign(&self, spinors: &mut [Spinor]) {
        match self {
            ReferenceOccupation::ExplicitFlags(flags) => {
                for s in spinors.iter_mut() {
                    s.is_hole = flags[s.global_index];
                }
            }
            ReferenceOccupation::PerIrrepCounts(counts) => {
                let mut by_irrep: HashMap<Irrep, Vec<usize>> = HashMap::new();
                for (i, s) in spinors.iter().enumerate() {
                    by_irrep.entry(s.irrep).or_default().push(i);
                }
                for s in spinors.iter_mut() {
                    s.is_hole = false;
                }
                for (irrep, mut idxs) in by_irrep {
                    idxs.sort_by(|&a, &b| spinors[a].energy.partial_cmp(&spinors[b].energy).unwrap());
                    let n = counts.get(&irrep).copied().unwrap_or(0);
                    for &i in idxs.iter().take(n) {
                        spinors[i].is_hole = true;
                    }
                }
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct SpinorCatalog {
    spinors: Vec<Spinor>,
    blocks: Vec<SpinorBlock>,
    /// global spinor index -> (block index into `blocks`, offset within it)
    global_to_local: HashMap<usize, (usize, usize)>,
    tile_size: usize,
}

impl SpinorCatalog {
    /// Packs `spinors` into tile-bounded, irrep-pure spinor blocks. Classes
    /// are (irrep, hole/particle, active/inactive) as spec.md requires;
    /// `t3_space` does not split classes since it is a per-dimension
    /// filter applied at template time, not a partitioning criterion.
    /// Builds a catalogue from spinors whose `is_hole` flags are already
    /// set, e.g. by an [`crate::collaborators::IntegralSource`].
    pub fn new(mut spinors: Vec<Spinor>, tile_size: usize) -> Self {
        spinors.sort_by_key(|s| s.global_index);

        let mut classes: HashMap<(Irrep, bool, bool), Vec<usize>> = HashMap::new();
        for (idx, s) in spinors.iter().enumerate() {
            classes
                .entry((s.irrep, s.is_hole, s.is_active))
                .or_default()
                .push(idx);
        }

        let mut keys: Vec<_> = classes.keys().copied().collect();
        keys.sort_by_key(|(irrep, h, a)| (irrep.0, !h, !a));

        let mut blocks = Vec::new();
        let mut global_to_local = HashMap::new();
        let mut next_id = 0u32;
        for key in keys {
            let (irrep, is_hole, is_active) = key;
            let members = &classes[&key];
            for chunk in members.chunks(tile_size.max(1)) {
                let block_id = SpinorBlockId(next_id);
                next_id += 1;
                let spinor_globals: Vec<usize> =
                    chunk.iter().map(|&i| spinors[i].global_index).collect();
                for (offset, &global) in spinor_globals.iter().enumerate() {
                    global_to_local.insert(global, (blocks.len(), offset));
                }
                blocks.push(SpinorBlock {
                    id: block_id,
                    irrep,
                    is_hole,
                    is_active,
                    spinors: spinor_globals,
                });
            }
        }

        SpinorCatalog {
            spinors,
            blocks,
            global_to_local,
            tile_size,
        }
    }

    /// Builds a catalogue the other two ways spec.md §4.2 allows: explicit
    /// per-spinor flags or per-irrep occupied counts. `spinors`' own
    /// `is_hole` values are overwritten by `occupation` before packing.
    pub fn with_occupation(
        mut spinors: Vec<Spinor>,
        tile_size: usize,
        occupation: ReferenceOccupation,
    ) -> Self {
        spinors.sort_by_key(|s| s.global_index);
        occupation.assign(&mut spinors);
        Self::new(spinors, tile_size)
    }

    pub fn tile_size(&self) -> usize {
        self.tile_size
    }

    pub fn spinor(&self, global_index: usize) -> &Spinor {
        let (block, offset) = self.global_to_local[&global_index];
        let block = &self.blocks[block];
        self.spinor_by_global_unchecked(block.spinors[offset])
    }

    fn spinor_by_global_unchecked(&self, global_index: usize) -> &Spinor {
        self.spinors
            .binary_search_by_key(&global_index, |s| s.global_index)
            .ok()
            .map(|i| &self.spinors[i])
            .expect("spinor catalogue internal index out of sync")
    }

    pub fn block(&self, id: SpinorBlockId) -> &SpinorBlock {
        &self.blocks[id.0 as usize]
    }

    pub fn blocks(&self) -> &[SpinorBlock] {
        &self.blocks
    }

    pub fn block_of(&self, global_index: usize) -> SpinorBlockId {
        self.blocks[self.global_to_local[&global_index].0].id
    }

    pub fn is_hole(&self, global_index: usize) -> bool {
        self.spinor(global_index).is_hole
    }

    pub fn is_active(&self, global_index: usize) -> bool {
        self.spinor(global_index).is_active
    }

    pub fn is_t3_space_spinor(&self, global_index: usize) -> bool {
        self.spinor(global_index).t3_space
    }

    pub fn holes(&self) -> impl Iterator<Item = &Spinor> {
        self.spinors.iter().filter(|s| s.is_hole)
    }

    pub fn particles(&self) -> impl Iterator<Item = &Spinor> {
        self.spinors.iter().filter(|s| !s.is_hole)
    }

    pub fn active_holes(&self) -> impl Iterator<Item = &Spinor> {
        self.spinors.iter().filter(|s| s.is_hole && s.is_active)
    }

    pub fn active_particles(&self) -> impl Iterator<Item = &Spinor> {
        self.spinors.iter().filter(|s| !s.is_hole && s.is_active)
    }

    pub fn blocks_matching(
        &self,
        irrep_filter: Option<Irrep>,
        is_hole: bool,
    ) -> impl Iterator<Item = &SpinorBlock> {
        self.blocks
            .iter()
            .filter(move |b| b.is_hole == is_hole && irrep_filter.is_none_or(|i| i == b.irrep))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mk(global: usize, irrep: u16, is_hole: bool) -> Spinor {
        Spinor {
            global_index: global,
            irrep: Irrep(irrep),
            energy: global as f64,
            is_hole,
            is_active: false,
            t3_space: false,
        }
    }

    #[test]
    fn blocks_are_irrep_pure_and_within_tile_size() {
        let spinors: Vec<_> = (0..10).map(|i| mk(i, (i % 2) as u16, i < 5)).collect();
        let catalog = SpinorCatalog::new(spinors, 3);
        for block in catalog.blocks() {
            assert!(block.spinors.len() <= 3);
            for &g in &block.spinors {
                assert_eq!(catalog.spinor(g).irrep, block.irrep);
                assert_eq!(catalog.spinor(g).is_hole, block.is_hole);
            }
        }
    }

    #[test]
    fn global_to_block_roundtrip() {
        let spinors: Vec<_> = (0..20).map(|i| mk(i, (i % 3) as u16, i % 2 == 0)).collect();
        let catalog = SpinorCatalog::new(spinors, 4);
        for i in 0..20 {
            let block_id = catalog.block_of(i);
            let block = catalog.block(block_id);
            assert!(block.spinors.contains(&i));
        }
    }

    #[test]
    fn hole_particle_iterators_partition_all_spinors() {
        let spinors: Vec<_> = (0..10).map(|i| mk(i, 0, i < 4)).collect();
        let catalog = SpinorCatalog::new(spinors, 64);
        assert_eq!(catalog.holes().count(), 4);
        assert_eq!(catalog.particles().count(), 6);
    }

    #[test]
    fn explicit_flags_occupation_overrides_is_hole() {
        let spinors: Vec<_> = (0..6).map(|i| mk(i, 0, false)).collect();
        let flags = [true, true, false, false, false, false];
        let catalog = SpinorCatalog::with_occupation(
            spinors,
            64,
            ReferenceOccupation::ExplicitFlags(&flags),
        );
        assert_eq!(catalog.holes().count(), 2);
        assert!(catalog.is_hole(0) && catalog.is_hole(1));
        assert!(!catalog.is_hole(2));
    }

    #[test]
    fn per_irrep_counts_fill_lowest_energy_first() {
        // energies equal global_index; irrep 0 gets 2 holes, irrep 1 gets 1.
        let spinors: Vec<_> = (0..8).map(|i| mk(i, (i % 2) as u16, false)).collect();
        let mut counts = HashMap::new();
        counts.insert(Irrep(0), 2);
        counts.insert(Irrep(1), 1);
        let catalog = SpinorCatalog::with_occupation(
            spinors,
            64,
            ReferenceOccupation::PerIrrepCounts(&counts),
        );
        assert_eq!(catalog.holes().count(), 3);
        // irrep 0 members are 0,2,4,6 -> lowest two energies are 0,2
        assert!(catalog.is_hole(0) && catalog.is_hole(2));
        assert!(!catalog.is_hole(4) && !catalog.is_hole(6));
        // irrep 1 members are 1,3,5,7 -> lowest one energy is 1
        assert!(catalog.is_hole(1));
        assert!(!catalog.is_hole(3) && !catalog.is_hole(5) && !catalog.is_hole(7));
    }
}
