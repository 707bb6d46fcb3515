//! The operations surface the CC equations are built from: template,
//! reorder, mult, add/update, perm, diveps, closed/expand, selection,
//! restrict_triples, diffmax/findmax, scalar_product, clear (spec §4.7,
//! §4.8).
//!
//! Grounded on `original_source/src/rcc/engine/mult.c` for the contraction
//! shape (`supmat_dims`/`mulblocks_lapack`: reshape each operand to a
//! `uncontracted x contracted` matrix and call `C = A * Bᵀ`) and the
//! storage-residency-driven dispatch it documents as an 8-way switch; here
//! every operation opens with [`materialize`]/[`materialized_view`] and
//! closes with [`dematerialize`], which collapse that switch to "load
//! whatever's on disk, work entirely in memory, then re-apply the disk
//! policy" — the pure-Rust GEMM backend (`ndarray`) has no separate
//! in-memory/on-disk code path to choose between, only a residency one.

use crate::config::{DenominatorShift, EngineOptions, ThreadScheme};
use crate::diagram::Diagram;
use crate::error::{Error, Result};
use crate::scalar::Scalar;
use crate::spinor::{SpinorBlockId, SpinorCatalog};
use crate::storage::{scratch_path, should_be_on_disk, IoStats, Storage};
use crate::symmetry::SymmetryTable;
use ndarray::linalg::general_mat_mul;
use ndarray::{Array2, ArrayView2};
use rayon::prelude::*;
use tracing::{info, warn};

/// Loads every on-disk unique block of `d` into memory (spec §4.8
/// "materialise A and B").
pub fn materialize<T: Scalar>(d: &mut Diagram<T>, io: &IoStats) -> Result<()> {
    for blk in d.blocks.iter_mut() {
        if matches!(blk.storage, Storage::OnDisk(_)) {
            blk.storage.load(io)?;
        }
    }
    Ok(())
}

/// Applies the configured disk-usage policy (spec §4.4) to every unique
/// block of `d`, storing (and freeing the RAM of) those that qualify.
pub fn dematerialize<T: Scalar>(d: &mut Diagram<T>, opts: &EngineOptions, io: &IoStats) -> Result<()> {
    let is_pppp = !d.qparts.is_empty() && d.qparts.iter().all(|&h| !h);
    let is_ppp_star = d.qparts.len() >= 3 && d.qparts[d.qparts.len() - 3..].iter().all(|&h| !h);
    if !should_be_on_disk(opts.disk_usage_level, d.rank, is_pppp, is_ppp_star) {
        return Ok(());
    }
    for blk in d.blocks.iter_mut() {
        if !blk.is_unique {
            continue;
        }
        let path = scratch_path(&opts.scratch_dir, opts.run_id, io.next_block_id());
        blk.storage.store(path, opts.disk_usage_level.compresses(), io)?;
    }
    Ok(())
}

/// A read-only materialised copy of `d`: on-disk blocks loaded, nothing
/// about `d` itself touched. Used by operations that only ever read an
/// operand, so two arguments may safely alias the same diagram (spec §5:
/// "concurrent restores of non-unique input blocks are safe because they
/// go through per-call temporary buffers").
fn materialized_view<T: Scalar>(d: &Diagram<T>, io: &IoStats) -> Result<Diagram<T>> {
    let mut view = d.clone();
    materialize(&mut view, io)?;
    Ok(view)
}

/// Reconstructs block `idx`'s dense buffer: its own buffer if unique, or
/// its canonical twin's buffer permuted and signed via
/// [`crate::block::Block::restore_from_unique`] otherwise. `d` must
/// already be fully in memory (e.g. via [`materialized_view`]).
fn materialize_block<T: Scalar>(d: &Diagram<T>, idx: usize) -> Vec<T> {
    let blk = &d.blocks[idx];
    let len: usize = blk.shape.iter().product();
    if blk.is_unique {
        return match &blk.storage {
            Storage::InMemory(buf) => buf.clone(),
            _ => vec![T::zero(); len],
        };
    }
    let Some(perm) = &blk.perm_to_unique else {
        return vec![T::zero(); len];
    };
    let twin_tuple: Vec<SpinorBlockId> = perm.iter().map(|&p| blk.spinor_blocks[p]).collect();
    let Some(twin) = d.blocks.iter().find(|b| b.is_unique && b.spinor_blocks == twin_tuple) else {
        return vec![T::zero(); len];
    };
    let mut reconstructed = blk.clone();
    reconstructed.restore_from_unique(twin);
    match reconstructed.storage {
        Storage::InMemory(buf) => buf,
        _ => vec![T::zero(); len],
    }
}

pub fn clear<T: Scalar>(a: &mut Diagram<T>, opts: &EngineOptions, io: &IoStats) -> Result<()> {
    materialize(a, io)?;
    for blk in a.blocks.iter_mut() {
        blk.clear();
    }
    dematerialize(a, opts, io)?;
    Ok(())
}

pub fn copy<T: Scalar>(a: &Diagram<T>, name: impl Into<String>) -> Diagram<T> {
    let mut out = a.clone();
    out.name = name.into();
    out
}

/// Enumerates the cartesian product of `spaces`, e.g. used for the
/// contracted spinor-block combinations in [`mult`].
fn cartesian<U: Clone>(spaces: &[Vec<U>]) -> Vec<Vec<U>> {
    let mut combos: Vec<Vec<U>> = vec![Vec::new()];
    for space in spaces {
        let mut next = Vec::with_capacity(combos.len() * space.len().max(1));
        for prefix in &combos {
            for v in space {
                let mut c = prefix.clone();
                c.push(v.clone());
                next.push(c);
            }
        }
        combos = next;
    }
    combos
}

/// Creates B with A's dimensions permuted by `perm` (a permutation of
/// `0..rank`): B's dimension `i` is drawn from A's dimension `perm[i]`.
/// Uniqueness is re-derived for B (spec §4.7).
#[allow(clippy::too_many_arguments)]
pub fn reorder<T: Scalar>(
    a: &Diagram<T>,
    perm: &[usize],
    catalog: &SpinorCatalog,
    symmetry: &SymmetryTable,
    only_unique: bool,
    opts: &EngineOptions,
    io: &IoStats,
) -> Result<Diagram<T>> {
    if perm.len() != a.rank {
        return Err(Error::RankMismatch {
            expected: a.rank,
            actual: perm.len(),
        });
    }
    let a_mat = materialized_view(a, io)?;
    let new_qparts: Vec<bool> = perm.iter().map(|&p| a.qparts[p]).collect();
    let new_valence: Vec<bool> = perm.iter().map(|&p| a.valence[p]).collect();
    let new_t3space: Vec<bool> = perm.iter().map(|&p| a.t3space[p]).collect();
    let new_order: Vec<usize> = perm.iter().map(|&p| a.order[p]).collect();

    let mut out = Diagram::template(
        format!("{}_reordered", a.name),
        new_qparts,
        new_valence,
        new_t3space,
        a.symmetry,
        catalog,
        symmetry,
        only_unique,
    );
    out.order = new_order;

    for blk in out.blocks.iter_mut() {
        if !blk.is_unique {
            continue;
        }
        for local in blk.gen_indices() {
            let new_global: Vec<usize> = (0..a.rank).map(|d| blk.indices[d][local[d]]).collect();
            let mut source_global = vec![0usize; a.rank];
            for i in 0..a.rank {
                source_global[perm[i]] = new_global[i];
            }
            let value = a_mat.get_element(catalog, &source_global);
            blk.set(&new_global, value);
        }
    }
    dematerialize(&mut out, opts, io)?;
    Ok(out)
}

/// Contracts the trailing `ncontr` dimensions of `a` with the trailing
/// `ncontr` of `b`, producing a diagram of rank `rA + rB - 2*ncontr`
/// (spec §4.7, §4.8). Each destination block is computed as a single dense
/// GEMM: both operands are reshaped to `uncontracted x contracted`
/// matrices and `C = A * Bᵀ` summed over every contracted spinor-block
/// combination, grounded on `mult.c`'s `supmat_dims`/`mulblocks_lapack`.
/// Dispatch between `ThreadScheme::External` (destination blocks in
/// parallel, one single-threaded GEMM each) and `Internal` (sequential
/// outer loop) follows `opts.thread_scheme` (spec §5).
#[allow(clippy::too_many_arguments)]
pub fn mult<T: Scalar>(
    a: &Diagram<T>,
    b: &Diagram<T>,
    ncontr: usize,
    catalog: &SpinorCatalog,
    symmetry: &SymmetryTable,
    name: impl Into<String>,
    only_unique: bool,
    opts: &EngineOptions,
    io: &IoStats,
) -> Result<Diagram<T>> {
    let name = name.into();
    if ncontr > a.rank || ncontr > b.rank {
        return Err(Error::RankMismatch {
            expected: a.rank.min(b.rank),
            actual: ncontr,
        });
    }
    info!(%name, lhs = %a.name, rhs = %b.name, ncontr, scheme = ?opts.thread_scheme, "contraction dispatch");
    for k in 0..ncontr {
        let da = a.rank - ncontr + k;
        let db = b.rank - ncontr + k;
        if a.qparts[da] != b.qparts[db] || a.valence[da] != b.valence[db] || a.t3space[da] != b.t3space[db] {
            return Err(Error::IncompatibleContraction { dim: k });
        }
    }

    let n_left = a.rank - ncontr;
    let n_right = b.rank - ncontr;
    let mut new_qparts = a.qparts[..n_left].to_vec();
    new_qparts.extend_from_slice(&b.qparts[..n_right]);
    let mut new_valence = a.valence[..n_left].to_vec();
    new_valence.extend_from_slice(&b.valence[..n_right]);
    let mut new_t3space = a.t3space[..n_left].to_vec();
    new_t3space.extend_from_slice(&b.t3space[..n_right]);

    let new_symmetry = if symmetry.is_abelian() {
        symmetry.mul_abelian(a.symmetry, b.symmetry)
    } else {
        symmetry.totsym
    };

    let mut product = Diagram::template(
        name,
        new_qparts,
        new_valence,
        new_t3space,
        new_symmetry,
        catalog,
        symmetry,
        only_unique,
    );

    let a_mat = materialized_view(a, io)?;
    let b_mat = materialized_view(b, io)?;

    let contracted_block_spaces: Vec<Vec<SpinorBlockId>> = (0..ncontr)
        .map(|k| {
            let d = a.rank - ncontr + k;
            catalog.blocks_matching(None, a.qparts[d]).map(|blk| blk.id).collect()
        })
        .collect();
    let contracted_combos = cartesian(&contracted_block_spaces);

    let compute_one = |dst_tuple: &[SpinorBlockId]| -> Vec<T> {
        let c_left = &dst_tuple[..n_left];
        let c_right = &dst_tuple[n_left..];
        let mut acc: Option<Array2<T>> = None;
        for combo in &contracted_combos {
            let mut a_tuple = c_left.to_vec();
            a_tuple.extend_from_slice(combo);
            let mut b_tuple = c_right.to_vec();
            b_tuple.extend_from_slice(combo);
            let Some(ai) = a_mat.blocks.iter().position(|blk| blk.spinor_blocks == a_tuple) else {
                continue;
            };
            let Some(bi) = b_mat.blocks.iter().position(|blk| blk.spinor_blocks == b_tuple) else {
                continue;
            };
            let m: usize = a_mat.blocks[ai].shape[..n_left].iter().product();
            let n: usize = b_mat.blocks[bi].shape[..n_right].iter().product();
            let k: usize = a_mat.blocks[ai].shape[n_left..].iter().product();
            let a_buf = materialize_block(&a_mat, ai);
            let b_buf = materialize_block(&b_mat, bi);
            let a_view = match ArrayView2::from_shape((m, k), &a_buf) {
                Ok(v) => v,
                Err(e) => {
                    warn!(error = %e, "skipping malformed contraction block reshape");
                    continue;
                }
            };
            let b_view = match ArrayView2::from_shape((n, k), &b_buf) {
                Ok(v) => v,
                Err(e) => {
                    warn!(error = %e, "skipping malformed contraction block reshape");
                    continue;
                }
            };
            let slot = acc.get_or_insert_with(|| Array2::<T>::zeros((m, n)));
            general_mat_mul(T::one(), &a_view, &b_view.t(), T::one(), slot);
        }
        acc.map(|arr| arr.into_raw_vec_and_offset().0).unwrap_or_default()
    };

    let indices: Vec<usize> = product
        .blocks
        .iter()
        .enumerate()
        .filter(|(_, blk)| blk.is_unique)
        .map(|(i, _)| i)
        .collect();

    let computed: Vec<(usize, Vec<T>)> = match opts.thread_scheme {
        ThreadScheme::External => indices
            .par_iter()
            .map(|&i| (i, compute_one(&product.blocks[i].spinor_blocks)))
            .collect(),
        ThreadScheme::Internal => indices
            .iter()
            .map(|&i| (i, compute_one(&product.blocks[i].spinor_blocks)))
            .collect(),
    };

    for (i, buf) in computed {
        if buf.len() == product.blocks[i].shape.iter().product::<usize>() {
            product.blocks[i].storage = Storage::InMemory(buf);
        }
    }

    dematerialize(&mut product, opts, io)?;
    Ok(product)
}

/// `alpha*A + beta*B` elementwise; A and B must share a template.
pub fn add<T: Scalar>(
    alpha: T,
    a: &Diagram<T>,
    beta: T,
    b: &Diagram<T>,
    catalog: &SpinorCatalog,
    opts: &EngineOptions,
    io: &IoStats,
) -> Result<Diagram<T>> {
    if a.rank != b.rank {
        return Err(Error::RankMismatch {
            expected: a.rank,
            actual: b.rank,
        });
    }
    if a.qparts != b.qparts || a.valence != b.valence || a.t3space != b.t3space {
        return Err(Error::ShapeMismatch {
            lhs: a.qparts.iter().map(|&x| x as usize).collect(),
            rhs: b.qparts.iter().map(|&x| x as usize).collect(),
        });
    }
    let a_mat = materialized_view(a, io)?;
    let b_mat = materialized_view(b, io)?;
    let mut out = a_mat.clone();
    out.name = format!("{}_plus_{}", a.name, b.name);
    for blk in out.blocks.iter_mut() {
        if !blk.is_unique {
            continue;
        }
        for local in blk.gen_indices() {
            let global: Vec<usize> = (0..a.rank).map(|d| blk.indices[d][local[d]]).collect();
            let av = a_mat.get_element(catalog, &global);
            let bv = b_mat.get_element(catalog, &global);
            blk.set(&global, av * alpha + bv * beta);
        }
    }
    dematerialize(&mut out, opts, io)?;
    Ok(out)
}

/// `C += alpha*A` elementwise, in place.
pub fn update<T: Scalar>(
    c: &mut Diagram<T>,
    alpha: T,
    a: &Diagram<T>,
    catalog: &SpinorCatalog,
    opts: &EngineOptions,
    io: &IoStats,
) -> Result<()> {
    if c.rank != a.rank {
        return Err(Error::RankMismatch {
            expected: c.rank,
            actual: a.rank,
        });
    }
    materialize(c, io)?;
    let a_mat = materialized_view(a, io)?;
    for i in 0..c.blocks.len() {
        if !c.blocks[i].is_unique {
            continue;
        }
        for local in c.blocks[i].gen_indices() {
            let global: Vec<usize> = (0..c.rank).map(|d| c.blocks[i].indices[d][local[d]]).collect();
            let av = a_mat.get_element(catalog, &global);
            let cv = c.blocks[i].get(&global);
            c.blocks[i].set(&global, cv + alpha * av);
        }
    }
    dematerialize(c, opts, io)?;
    Ok(())
}

fn shift_factor(d: f64, opts: &EngineOptions) -> f64 {
    match opts.denominator_shift {
        DenominatorShift::None => {
            if d.abs() < opts.denominator_tiny {
                0.0
            } else {
                1.0 / d
            }
        }
        DenominatorShift::Real => 1.0 / (d + opts.shift_value * d.signum()),
        DenominatorShift::Imaginary | DenominatorShift::RealSimulatedImaginary => {
            d / (d * d + opts.shift_value * opts.shift_value)
        }
        DenominatorShift::Taylor => {
            if d.abs() < opts.denominator_tiny {
                0.0
            } else {
                let mut term = 1.0;
                let mut sum = 0.0;
                for _ in 0..=opts.shift_power.max(0) {
                    sum += term;
                    term *= -opts.shift_value / d;
                }
                sum / d
            }
        }
    }
}

/// Divides each element of A by the Møller-Plesset denominator built from
/// the spinors' orbital energies: hole (annihilation) dimensions add their
/// energy, particle (creation) dimensions subtract theirs (spec §4.7).
pub fn diveps<T: Scalar>(a: &Diagram<T>, catalog: &SpinorCatalog, opts: &EngineOptions, io: &IoStats) -> Result<Diagram<T>> {
    if opts.denominator_shift != DenominatorShift::None {
        warn!(name = %a.name, shift = ?opts.denominator_shift, power = opts.shift_power, "denominator shift active");
    }
    let mut out = materialized_view(a, io)?;
    let rank = a.rank;
    let qparts = a.qparts.clone();
    for blk in out.blocks.iter_mut() {
        if !blk.is_unique {
            continue;
        }
        for local in blk.gen_indices() {
            let global: Vec<usize> = (0..rank).map(|d| blk.indices[d][local[d]]).collect();
            let mut d_val = 0.0f64;
            for (dpos, &g) in global.iter().enumerate() {
                let eps = catalog.spinor(g).energy;
                if qparts[dpos] {
                    d_val += eps;
                } else {
                    d_val -= eps;
                }
            }
            let value = blk.get(&global);
            let factor = shift_factor(d_val, opts);
            blk.set(&global, value * T::from_f64(factor));
        }
    }
    dematerialize(&mut out, opts, io)?;
    Ok(out)
}

/// Extracts the purely-active (all-valence) subtensor of A into a new
/// diagram, zeroing the copied entries in A (spec §4.7). The returned
/// diagram is `expand`'s natural input for reconstructing A later.
pub fn closed<T: Scalar>(
    a: &mut Diagram<T>,
    catalog: &SpinorCatalog,
    symmetry: &SymmetryTable,
    name: impl Into<String>,
    opts: &EngineOptions,
    io: &IoStats,
) -> Result<Diagram<T>> {
    materialize(a, io)?;
    let all_valence = vec![true; a.rank];
    let mut out = Diagram::template(
        name,
        a.qparts.clone(),
        all_valence,
        a.t3space.clone(),
        a.symmetry,
        catalog,
        symmetry,
        true,
    );
    for blk in out.blocks.iter_mut() {
        if !blk.is_unique {
            continue;
        }
        for local in blk.gen_indices() {
            let global: Vec<usize> = (0..a.rank).map(|d| blk.indices[d][local[d]]).collect();
            let value = a.get_element(catalog, &global);
            blk.set(&global, value);
        }
    }
    for blk in out.blocks.iter() {
        if !blk.is_unique {
            continue;
        }
        for local in blk.gen_indices() {
            let global: Vec<usize> = (0..a.rank).map(|d| blk.indices[d][local[d]]).collect();
            a.set_element(catalog, &global, T::zero());
        }
    }
    dematerialize(a, opts, io)?;
    dematerialize(&mut out, opts, io)?;
    Ok(out)
}

/// Injects `small`'s elements back into `large` at their original
/// positions — the inverse of [`closed`].
pub fn expand<T: Scalar>(
    small: &Diagram<T>,
    large: &mut Diagram<T>,
    catalog: &SpinorCatalog,
    opts: &EngineOptions,
    io: &IoStats,
) -> Result<()> {
    let small_mat = materialized_view(small, io)?;
    materialize(large, io)?;
    for blk in small_mat.blocks.iter() {
        if !blk.is_unique {
            continue;
        }
        for local in blk.gen_indices() {
            let global: Vec<usize> = (0..small_mat.rank).map(|d| blk.indices[d][local[d]]).collect();
            let value = blk.get(&global);
            large.set_element(catalog, &global, value);
        }
    }
    dematerialize(large, opts, io)?;
    Ok(())
}

/// An antisymmetric permutation projector specifier, e.g. `(3/12|4/56)`:
/// groups separated by `|` act on disjoint dimension sets; within a group,
/// `/` partitions it into ordered subsets whose shuffles (interleavings
/// preserving each subset's internal order) are summed with sign (spec
/// §4.7 `perm`).
fn parse_perm_spec(spec: &str) -> Result<Vec<Vec<Vec<usize>>>> {
    let inner = spec.trim().trim_start_matches('(').trim_end_matches(')');
    if inner.is_empty() {
        return Err(Error::MalformedPermSpec(spec.to_string()));
    }
    let mut groups = Vec::new();
    for group_str in inner.split('|') {
        let mut subsets = Vec::new();
        for subset_str in group_str.split('/') {
            let mut subset = Vec::new();
            for ch in subset_str.chars() {
                let d = ch
                    .to_digit(10)
                    .ok_or_else(|| Error::MalformedPermSpec(spec.to_string()))? as usize;
                if d == 0 {
                    return Err(Error::MalformedPermSpec(spec.to_string()));
                }
                subset.push(d - 1);
            }
            if subset.is_empty() {
                return Err(Error::MalformedPermSpec(spec.to_string()));
            }
            subsets.push(subset);
        }
        groups.push(subsets);
    }
    Ok(groups)
}

/// Enumerates all signed shuffles (order-preserving interleavings) of a
/// group's subsets, via the standard inversion-counting construction.
fn group_shuffles(subsets: &[Vec<usize>]) -> Vec<(Vec<usize>, i8)> {
    fn helper(remaining: &mut [Vec<usize>], acc: &mut Vec<usize>, crossings: i32, results: &mut Vec<(Vec<usize>, i8)>) {
        if remaining.iter().all(|s| s.is_empty()) {
            let sign = if crossings % 2 == 0 { 1 } else { -1 };
            results.push((acc.clone(), sign));
            return;
        }
        for i in 0..remaining.len() {
            if remaining[i].is_empty() {
                continue;
            }
            let inversions_added: i32 = remaining[..i].iter().map(|s| s.len() as i32).sum();
            let elem = remaining[i].remove(0);
            acc.push(elem);
            helper(remaining, acc, crossings + inversions_added, results);
            acc.pop();
            remaining[i].insert(0, elem);
        }
    }
    let mut remaining = subsets.to_vec();
    let mut acc = Vec::new();
    let mut results = Vec::new();
    helper(&mut remaining, &mut acc, 0, &mut results);
    results
}

pub fn perm<T: Scalar>(
    a: &Diagram<T>,
    spec: &str,
    catalog: &SpinorCatalog,
    symmetry: &SymmetryTable,
    opts: &EngineOptions,
    io: &IoStats,
) -> Result<Diagram<T>> {
    let groups = parse_perm_spec(spec)?;

    let mut combos: Vec<(Vec<usize>, i8)> = vec![((0..a.rank).collect(), 1)];
    for subsets in &groups {
        let mut positions: Vec<usize> = subsets.iter().flatten().copied().collect();
        positions.sort_unstable();
        let shuffles = group_shuffles(subsets);
        let mut next = Vec::with_capacity(combos.len() * shuffles.len());
        for (perm_so_far, sign_so_far) in &combos {
            for (acc, sign) in &shuffles {
                let mut permuted = perm_so_far.clone();
                for (k, &pos) in positions.iter().enumerate() {
                    permuted[pos] = acc[k];
                }
                next.push((permuted, sign_so_far * sign));
            }
        }
        combos = next;
    }

    let mut result = a.clone();
    result.name = format!("{}_perm", a.name);
    clear(&mut result, opts, io)?;
    for (perm_vec, sign) in &combos {
        let reordered = reorder(a, perm_vec, catalog, symmetry, true, opts, io)?;
        let alpha = T::from_f64(*sign as f64);
        update(&mut result, alpha, &reordered, catalog, opts, io)?;
    }
    Ok(result)
}

/// A predicate applied per-element in [`selection`] (spec §4.7).
#[derive(Debug, Clone)]
pub enum SelectionRule {
    All,
    /// Counts bra-half indices whose value recurs somewhere in the ket
    /// half ("spectator" lines that pass through a diagram untouched) and
    /// keeps (or rejects) elements whose count equals `lines`. Grounded on
    /// `original_source/src/engine/selection.c`'s `selection_spectator`.
    Spectator { lines: usize },
    ActiveToActive,
    AtMostInactive(usize),
    OrbitalEnergyWindow { min: f64, max: f64 },
    ExcitationEnergyWindow { min: f64, max: f64 },
}

fn matches_rule(rule: &SelectionRule, global: &[usize], qparts: &[bool], catalog: &SpinorCatalog) -> bool {
    match rule {
        SelectionRule::All => true,
        SelectionRule::Spectator { lines } => {
            let half = global.len() / 2;
            let n_spectator = global[..half]
                .iter()
                .filter(|&&g| catalog.is_active(g) && global[half..].contains(&g))
                .count();
            n_spectator == *lines
        }
        SelectionRule::ActiveToActive => global.iter().all(|&g| catalog.is_active(g)),
        SelectionRule::AtMostInactive(n) => global.iter().filter(|&&g| !catalog.is_active(g)).count() <= *n,
        SelectionRule::OrbitalEnergyWindow { min, max } => global.iter().all(|&g| {
            let e = catalog.spinor(g).energy;
            e >= *min && e <= *max
        }),
        SelectionRule::ExcitationEnergyWindow { min, max } => {
            let mut d_val = 0.0f64;
            for (dpos, &g) in global.iter().enumerate() {
                let eps = catalog.spinor(g).energy;
                if qparts[dpos] {
                    d_val += eps;
                } else {
                    d_val -= eps;
                }
            }
            d_val.abs() >= *min && d_val.abs() <= *max
        }
    }
}

/// Zeros elements that do (`retain = false`) or don't (`retain = true`)
/// match `rule`, in place.
pub fn selection<T: Scalar>(
    a: &mut Diagram<T>,
    rule: &SelectionRule,
    catalog: &SpinorCatalog,
    retain: bool,
    opts: &EngineOptions,
    io: &IoStats,
) -> Result<()> {
    materialize(a, io)?;
    let qparts = a.qparts.clone();
    for blk in a.blocks.iter_mut() {
        if !blk.is_unique {
            continue;
        }
        for local in blk.gen_indices() {
            let global: Vec<usize> = (0..blk.rank).map(|d| blk.indices[d][local[d]]).collect();
            let matches = matches_rule(rule, &global, &qparts, catalog);
            if matches != retain {
                blk.set(&global, T::zero());
            }
        }
    }
    dematerialize(a, opts, io)?;
    Ok(())
}

/// Zeros every element of a rank-6 triples tensor whose spinors are not
/// *all* within the orbital-energy window `[lo, hi]`. Grounded on
/// `original_source/src/engine/restrict_devel.c`'s `restrict_triples`,
/// which brackets the same all-six-in-range test with an explicit
/// load/store pair (spec §4.7).
pub fn restrict_triples<T: Scalar>(
    a: &mut Diagram<T>,
    catalog: &SpinorCatalog,
    lo: f64,
    hi: f64,
    opts: &EngineOptions,
    io: &IoStats,
) -> Result<()> {
    if a.rank != 6 {
        return Err(Error::RankMismatch {
            expected: 6,
            actual: a.rank,
        });
    }
    materialize(a, io)?;
    for blk in a.blocks.iter_mut() {
        if !blk.is_unique {
            continue;
        }
        for local in blk.gen_indices() {
            let global: Vec<usize> = (0..6).map(|d| blk.indices[d][local[d]]).collect();
            let in_range = global.iter().all(|&g| {
                let e = catalog.spinor(g).energy;
                e >= lo && e <= hi
            });
            if !in_range {
                blk.set(&global, T::zero());
            }
        }
    }
    dematerialize(a, opts, io)?;
    Ok(())
}

/// Frees every non-unique block's buffer. Non-unique blocks are always
/// reconstructed on demand from their canonical twin and never persisted
/// (spec §4.3.1, §5), so this just drops any stray in-memory buffer a
/// caller may have left behind, normalising storage before serialisation
/// (spec §4.7).
pub fn clear_non_unique<T: Scalar>(a: &mut Diagram<T>) {
    for blk in a.blocks.iter_mut() {
        if !blk.is_unique {
            blk.storage = Storage::Dummy;
        }
    }
}

/// Validates the invariant [`clear_non_unique`] restores: only unique
/// blocks may carry a live (non-`Dummy`) buffer (spec §4.7).
pub fn check_unique<T: Scalar>(a: &Diagram<T>) -> Result<()> {
    for blk in &a.blocks {
        if !blk.is_unique && !matches!(blk.storage, Storage::Dummy) {
            return Err(Error::NonUniqueStorage {
                spinor_blocks: blk.spinor_blocks.iter().map(|id| id.0).collect(),
            });
        }
    }
    Ok(())
}

/// Maximum absolute value over every admissible element, with its
/// compound global index.
pub fn findmax<T: Scalar>(a: &Diagram<T>, catalog: &SpinorCatalog, io: &IoStats) -> Result<(f64, Vec<usize>)> {
    let a_mat = materialized_view(a, io)?;
    let mut best = (0.0f64, Vec::new());
    for blk in &a_mat.blocks {
        for local in blk.gen_indices() {
            let global: Vec<usize> = (0..blk.rank).map(|d| blk.indices[d][local[d]]).collect();
            let m = a_mat.get_element(catalog, &global).modulus();
            if m > best.0 {
                best = (m, global);
            }
        }
    }
    Ok(best)
}

/// Maximum absolute value of `A - B`, with its compound global index.
pub fn diffmax<T: Scalar>(a: &Diagram<T>, b: &Diagram<T>, catalog: &SpinorCatalog, io: &IoStats) -> Result<(f64, Vec<usize>)> {
    if a.rank != b.rank {
        return Err(Error::RankMismatch {
            expected: a.rank,
            actual: b.rank,
        });
    }
    let a_mat = materialized_view(a, io)?;
    let b_mat = materialized_view(b, io)?;
    let mut best = (0.0f64, Vec::new());
    for blk in &a_mat.blocks {
        for local in blk.gen_indices() {
            let global: Vec<usize> = (0..a.rank).map(|d| blk.indices[d][local[d]]).collect();
            let av = a_mat.get_element(catalog, &global);
            let bv = b_mat.get_element(catalog, &global);
            let diff = (av - bv).modulus();
            if diff > best.0 {
                best = (diff, global);
            }
        }
    }
    Ok(best)
}

/// Contracts every dimension of A with every dimension of B, with
/// independent per-operand conjugation (spec §4.7).
pub fn scalar_product<T: Scalar>(
    conj_a: bool,
    conj_b: bool,
    a: &Diagram<T>,
    b: &Diagram<T>,
    catalog: &SpinorCatalog,
    io: &IoStats,
) -> Result<T> {
    if a.rank != b.rank {
        return Err(Error::RankMismatch {
            expected: a.rank,
            actual: b.rank,
        });
    }
    let a_mat = materialized_view(a, io)?;
    let b_mat = materialized_view(b, io)?;
    let mut acc = T::zero();
    for blk in &a_mat.blocks {
        for local in blk.gen_indices() {
            let global: Vec<usize> = (0..a.rank).map(|d| blk.indices[d][local[d]]).collect();
            let mut av = a_mat.get_element(catalog, &global);
            if conj_a {
                av = av.conj();
            }
            let mut bv = b_mat.get_element(catalog, &global);
            if conj_b {
                bv = bv.conj();
            }
            acc = acc + av * bv;
        }
    }
    Ok(acc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DiskUsageLevel;
    use crate::spinor::Spinor;
    use crate::symmetry::Irrep;

    fn setup() -> (SpinorCatalog, SymmetryTable) {
        let spinors: Vec<Spinor> = (0..4)
            .map(|i| Spinor {
                global_index: i,
                irrep: Irrep(0),
                energy: if i < 2 { -1.0 } else { 1.0 },
                is_hole: i < 2,
                is_active: false,
                t3_space: false,
            })
            .collect();
        let catalog = SpinorCatalog::new(spinors, 8);
        let sym = SymmetryTable::new_abelian(vec!["A".into()], vec![vec![0]], 0);
        (catalog, sym)
    }

    fn hhpp_diagram(catalog: &SpinorCatalog, sym: &SymmetryTable, name: &str) -> Diagram<f64> {
        Diagram::template(
            name,
            vec![true, true, false, false],
            vec![false, false, false, false],
            vec![false, false, false, false],
            sym.totsym,
            catalog,
            sym,
            true,
        )
    }

    #[test]
    fn reorder_round_trip() {
        let (catalog, sym) = setup();
        let opts = EngineOptions::default();
        let io = IoStats::default();
        let mut a = hhpp_diagram(&catalog, &sym, "a");
        a.blocks[0].set(&[0, 1, 2, 3], 2.0);
        a.blocks[0].set(&[1, 0, 2, 3], -2.0);

        let perm = vec![1, 0, 2, 3];
        let b = reorder(&a, &perm, &catalog, &sym, true, &opts, &io).unwrap();
        let c = reorder(&b, &perm, &catalog, &sym, true, &opts, &io).unwrap();
        assert_eq!(a.get_element(&catalog, &[0, 1, 2, 3]), c.get_element(&catalog, &[0, 1, 2, 3]));
        assert_eq!(a.get_element(&catalog, &[1, 0, 2, 3]), c.get_element(&catalog, &[1, 0, 2, 3]));
    }

    fn rank2_hh_pair(catalog: &SpinorCatalog, sym: &SymmetryTable) -> (Diagram<f64>, Diagram<f64>) {
        let mut a = Diagram::<f64>::template(
            "f_hh",
            vec![true, true],
            vec![false, false],
            vec![false, false],
            sym.totsym,
            catalog,
            sym,
            true,
        );
        a.blocks[0].set(&[0, 0], 1.0);
        a.blocks[0].set(&[0, 1], 2.0);
        a.blocks[0].set(&[1, 0], 3.0);
        a.blocks[0].set(&[1, 1], 4.0);

        let mut b = Diagram::<f64>::template(
            "t_hh",
            vec![true, true],
            vec![false, false],
            vec![false, false],
            sym.totsym,
            catalog,
            sym,
            true,
        );
        b.blocks[0].set(&[0, 0], 5.0);
        b.blocks[0].set(&[0, 1], 6.0);
        b.blocks[0].set(&[1, 0], 7.0);
        b.blocks[0].set(&[1, 1], 8.0);
        (a, b)
    }

    #[test]
    fn mult_matches_dense_contraction_over_rank2() {
        let (catalog, sym) = setup();
        let opts = EngineOptions::default();
        let io = IoStats::default();
        let (a, b) = rank2_hh_pair(&catalog, &sym);

        let c = mult(&a, &b, 1, &catalog, &sym, "c", true, &opts, &io).unwrap();
        // C[i,j] = sum_k A[i,k]*B[j,k] (trailing dims of both operands contract)
        // C[0,1] = A[0,0]*B[1,0] + A[0,1]*B[1,1] = 1*7 + 2*8 = 23
        assert_eq!(c.get_element(&catalog, &[0, 1]), 23.0);
        // C[1,0] = A[1,0]*B[0,0] + A[1,1]*B[0,1] = 3*5 + 4*6 = 39
        assert_eq!(c.get_element(&catalog, &[1, 0]), 39.0);
    }

    #[test]
    fn mult_internal_and_external_scheme_agree() {
        let (catalog, sym) = setup();
        let io = IoStats::default();
        let (a, b) = rank2_hh_pair(&catalog, &sym);

        let external = EngineOptions {
            thread_scheme: ThreadScheme::External,
            ..Default::default()
        };
        let internal = EngineOptions {
            thread_scheme: ThreadScheme::Internal,
            ..Default::default()
        };
        let c_ext = mult(&a, &b, 1, &catalog, &sym, "c_ext", true, &external, &io).unwrap();
        let c_int = mult(&a, &b, 1, &catalog, &sym, "c_int", true, &internal, &io).unwrap();
        assert_eq!(c_ext.get_element(&catalog, &[0, 1]), c_int.get_element(&catalog, &[0, 1]));
        assert_eq!(c_ext.get_element(&catalog, &[1, 0]), c_int.get_element(&catalog, &[1, 0]));
    }

    #[test]
    fn mult_agrees_for_in_memory_and_on_disk_operand() {
        // Testable property: results are identical whether an operand is
        // resident in memory or was dematerialised to disk beforehand.
        let (catalog, sym) = setup();
        let dir = tempfile::tempdir().unwrap();
        let io = IoStats::default();
        let opts = EngineOptions {
            scratch_dir: dir.path().to_path_buf(),
            ..Default::default()
        };
        let (a, b) = rank2_hh_pair(&catalog, &sym);

        let in_mem = mult(&a, &b, 1, &catalog, &sym, "in_mem", true, &opts, &io).unwrap();

        let mut b_on_disk = b.clone();
        for blk in b_on_disk.blocks.iter_mut() {
            if blk.is_unique {
                let path = scratch_path(&opts.scratch_dir, opts.run_id, io.next_block_id());
                blk.storage.store(path, false, &io).unwrap();
            }
        }
        assert!(matches!(b_on_disk.blocks[0].storage, Storage::OnDisk(_)));
        let on_disk = mult(&a, &b_on_disk, 1, &catalog, &sym, "on_disk", true, &opts, &io).unwrap();

        assert_eq!(in_mem.get_element(&catalog, &[0, 1]), on_disk.get_element(&catalog, &[0, 1]));
        assert_eq!(in_mem.get_element(&catalog, &[1, 0]), on_disk.get_element(&catalog, &[1, 0]));
    }

    #[test]
    fn scalar_product_matches_dense_sum_of_squares() {
        let (catalog, sym) = setup();
        let io = IoStats::default();
        let mut a = Diagram::<f64>::template(
            "v",
            vec![true, true],
            vec![false, false],
            vec![false, false],
            sym.totsym,
            &catalog,
            &sym,
            true,
        );
        a.blocks[0].set(&[0, 0], 1.0);
        a.blocks[0].set(&[0, 1], 2.0);
        a.blocks[0].set(&[1, 0], 3.0);
        a.blocks[0].set(&[1, 1], 4.0);
        let sp = scalar_product(false, false, &a, &a, &catalog, &io).unwrap();
        assert_eq!(sp, 1.0 + 4.0 + 9.0 + 16.0);
    }

    #[test]
    fn diveps_matches_expected_denominator() {
        let (catalog, sym) = setup();
        let io = IoStats::default();
        let opts = EngineOptions {
            denominator_shift: DenominatorShift::None,
            ..Default::default()
        };
        let mut a = hhpp_diagram(&catalog, &sym, "r");
        a.blocks[0].set(&[0, 1, 2, 3], 1.0);
        let divided = diveps(&a, &catalog, &opts, &io).unwrap();
        // D = eps_0 + eps_1 - eps_2 - eps_3 = -1 -1 -1 -1 = -4
        assert_eq!(divided.get_element(&catalog, &[0, 1, 2, 3]), 1.0 / -4.0);
    }

    #[test]
    fn closed_expand_round_trip() {
        // all four spinors active, so the purely-active subtensor covers
        // the whole hhpp diagram rather than collapsing to nothing.
        let spinors: Vec<Spinor> = (0..4)
            .map(|i| Spinor {
                global_index: i,
                irrep: Irrep(0),
                energy: if i < 2 { -1.0 } else { 1.0 },
                is_hole: i < 2,
                is_active: true,
                t3_space: false,
            })
            .collect();
        let catalog = SpinorCatalog::new(spinors, 8);
        let sym = SymmetryTable::new_abelian(vec!["A".into()], vec![vec![0]], 0);
        let opts = EngineOptions::default();
        let io = IoStats::default();

        let mut a = hhpp_diagram(&catalog, &sym, "a");
        a.blocks[0].set(&[0, 1, 2, 3], 5.0);
        let before = a.get_element(&catalog, &[0, 1, 2, 3]);

        let small = closed(&mut a, &catalog, &sym, "small", &opts, &io).unwrap();
        assert_eq!(a.get_element(&catalog, &[0, 1, 2, 3]), 0.0);

        expand(&small, &mut a, &catalog, &opts, &io).unwrap();
        assert_eq!(a.get_element(&catalog, &[0, 1, 2, 3]), before);
    }

    #[test]
    fn perm_antisymmetrizes_a_pair() {
        let (catalog, sym) = setup();
        let opts = EngineOptions::default();
        let io = IoStats::default();
        let mut a = hhpp_diagram(&catalog, &sym, "a");
        a.blocks[0].set(&[0, 1, 2, 3], 3.0);
        let projected = perm(&a, "(1/2)", &catalog, &sym, &opts, &io).unwrap();
        // P(1/2): sum over shuffles of a single pair = identity - swap = a[0,1,..] - a[1,0,..]
        let v01 = projected.get_element(&catalog, &[0, 1, 2, 3]);
        let v10 = projected.get_element(&catalog, &[1, 0, 2, 3]);
        assert_eq!(v01, -v10);
    }

    #[test]
    fn findmax_reports_global_maximum() {
        let (catalog, sym) = setup();
        let io = IoStats::default();
        let mut a = hhpp_diagram(&catalog, &sym, "a");
        a.blocks[0].set(&[0, 1, 2, 3], -7.0);
        let (m, _) = findmax(&a, &catalog, &io).unwrap();
        assert_eq!(m, 7.0);
    }

    #[test]
    fn spectator_rule_counts_recurring_active_bra_indices() {
        let spinors: Vec<Spinor> = (0..4)
            .map(|i| Spinor {
                global_index: i,
                irrep: Irrep(0),
                energy: if i < 2 { -1.0 } else { 1.0 },
                is_hole: i < 2,
                is_active: true,
                t3_space: false,
            })
            .collect();
        let catalog = SpinorCatalog::new(spinors, 8);
        let sym = SymmetryTable::new_abelian(vec!["A".into()], vec![vec![0]], 0);
        let opts = EngineOptions::default();
        let io = IoStats::default();

        let mut a = hhpp_diagram(&catalog, &sym, "a");
        // [0,1,2,3]: bra={0,1}, ket={2,3}, no overlap => 0 spectator lines
        a.blocks[0].set(&[0, 1, 2, 3], 1.0);
        selection(&mut a, &SelectionRule::Spectator { lines: 0 }, &catalog, true, &opts, &io).unwrap();
        assert_eq!(a.get_element(&catalog, &[0, 1, 2, 3]), 1.0);

        let mut b = hhpp_diagram(&catalog, &sym, "b");
        b.blocks[0].set(&[0, 1, 2, 3], 1.0);
        selection(&mut b, &SelectionRule::Spectator { lines: 1 }, &catalog, true, &opts, &io).unwrap();
        assert_eq!(b.get_element(&catalog, &[0, 1, 2, 3]), 0.0);
    }

    #[test]
    fn restrict_triples_zeros_out_of_window_elements() {
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
        let opts = EngineOptions::default();
        let io = IoStats::default();

        let mut a = Diagram::<f64>::template(
            "t3",
            vec![true, true, true, false, false, false],
            vec![false; 6],
            vec![false; 6],
            sym.totsym,
            &catalog,
            &sym,
            true,
        );
        a.blocks[0].set(&[0, 1, 2, 3, 4, 5], 9.0);
        restrict_triples(&mut a, &catalog, 0.0, 10.0, &opts, &io).unwrap();
        assert_eq!(a.get_element(&catalog, &[0, 1, 2, 3, 4, 5]), 9.0);

        restrict_triples(&mut a, &catalog, 1.0, 10.0, &opts, &io).unwrap();
        // spinor 0 has energy 0.0, outside [1.0, 10.0] => whole tuple zeroed
        assert_eq!(a.get_element(&catalog, &[0, 1, 2, 3, 4, 5]), 0.0);
    }

    #[test]
    fn restrict_triples_rejects_non_rank6() {
        let (catalog, sym) = setup();
        let opts = EngineOptions::default();
        let io = IoStats::default();
        let mut a = hhpp_diagram(&catalog, &sym, "a");
        assert!(restrict_triples(&mut a, &catalog, 0.0, 1.0, &opts, &io).is_err());
    }

    #[test]
    fn clear_non_unique_then_check_unique_passes() {
        let (catalog, sym) = setup();
        // only_unique=false so every block is marked unique and carries a buffer
        let mut a = Diagram::<f64>::template(
            "t2",
            vec![true, true, false, false],
            vec![false, false, false, false],
            vec![false, false, false, false],
            sym.totsym,
            &catalog,
            &sym,
            false,
        );
        assert!(check_unique(&a).is_ok());
        // force one block to look non-unique with live storage, the
        // invariant clear_non_unique is meant to restore.
        a.blocks[0].is_unique = false;
        assert!(check_unique(&a).is_err());
        clear_non_unique(&mut a);
        assert!(check_unique(&a).is_ok());
    }

    #[test]
    fn disk_residency_round_trips_through_dematerialize_materialize() {
        let dir = tempfile::tempdir().unwrap();
        let (catalog, sym) = setup();
        let opts = EngineOptions {
            disk_usage_level: DiskUsageLevel::Level0,
            scratch_dir: dir.path().to_path_buf(),
            ..Default::default()
        };
        let io = IoStats::default();
        let mut a = hhpp_diagram(&catalog, &sym, "a");
        a.blocks[0].set(&[0, 1, 2, 3], 4.0);

        // Level0 keeps everything in memory; force it to disk directly to
        // exercise the materialize path regardless of policy.
        let path = scratch_path(&opts.scratch_dir, opts.run_id, io.next_block_id());
        a.blocks[0].storage.store(path, false, &io).unwrap();
        assert!(matches!(a.blocks[0].storage, Storage::OnDisk(_)));

        materialize(&mut a, &io).unwrap();
        assert!(matches!(a.blocks[0].storage, Storage::InMemory(_)));
        assert_eq!(a.get_element(&catalog, &[0, 1, 2, 3]), 4.0);
    }
}
