//! Irrep catalogue and the closed algebra of irrep labels (spec §4.1).
//!
//! Grounded on `original_source/src/rcc/symmetry.c`: the abelian
//! multiplication table lookup, the direct-product-decomposition "inverse
//! polish calculator" stack algorithm (`dpd_prod_to_sum`), and the Cinfv/
//! Dinfh continuous-group synthesis (`generate_irreps_Cinfv`,
//! `multiply_irreps_Cinfv`, `parse_infty_irrep_name`).

use crate::error::{Error, Result};
use std::collections::HashMap;

/// An irreducible representation, identified by its index into a
/// [`SymmetryTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Irrep(pub u16);

/// A finite abelian point-group multiplication table, or a non-abelian one
/// carrying full direct-sum decompositions for every pair.
#[derive(Debug, Clone)]
pub enum GroupKind {
    /// `table[i][j] = i (x) j`, a single irrep (abelian groups only).
    Abelian { table: Vec<Vec<Irrep>> },
    /// `table[i][j] = direct sum of irreps` (used by the general-rank
    /// decomposition and by the rank-2/4/6 fast paths when non-abelian).
    NonAbelian { table: Vec<Vec<Vec<Irrep>>> },
}

#[derive(Debug, Clone)]
pub struct SymmetryTable {
    pub names: Vec<String>,
    pub kind: GroupKind,
    pub totsym: Irrep,
    /// Complex-conjugate partner of each irrep. `None` means every irrep
    /// is self-conjugate (the common case for real abelian point groups).
    conjugate: Option<Vec<Irrep>>,
    name_index: HashMap<String, Irrep>,
}

impl SymmetryTable {
    pub fn new_abelian(names: Vec<String>, table: Vec<Vec<usize>>, totsym: usize) -> Self {
        let table = table
            .into_iter()
            .map(|row| row.into_iter().map(|i| Irrep(i as u16)).collect())
            .collect();
        let name_index = names
            .iter()
            .enumerate()
            .map(|(i, n)| (n.clone(), Irrep(i as u16)))
            .collect();
        SymmetryTable {
            names,
            kind: GroupKind::Abelian { table },
            totsym: Irrep(totsym as u16),
            conjugate: None,
            name_index,
        }
    }

    /// Supplies a non-trivial conjugation table (e.g. for double/Kramers
    /// groups where an irrep's complex-conjugate partner differs from
    /// itself).
    pub fn with_conjugation(mut self, conjugate: Vec<usize>) -> Self {
        self.conjugate = Some(conjugate.into_iter().map(|i| Irrep(i as u16)).collect());
        self
    }

    pub fn conj(&self, irrep: Irrep) -> Irrep {
        match &self.conjugate {
            Some(table) => table[irrep.0 as usize],
            None => irrep,
        }
    }

    pub fn num_irreps(&self) -> usize {
        self.names.len()
    }

    pub fn name(&self, irrep: Irrep) -> &str {
        &self.names[irrep.0 as usize]
    }

    pub fn by_name(&self, name: &str) -> Option<Irrep> {
        self.name_index.get(name).copied()
    }

    pub fn is_abelian(&self) -> bool {
        matches!(self.kind, GroupKind::Abelian { .. })
    }

    /// `mul(i, j) -> direct sum` (singleton for abelian groups).
    pub fn mul(&self, i: Irrep, j: Irrep) -> Vec<Irrep> {
        match &self.kind {
            GroupKind::Abelian { table } => vec![table[i.0 as usize][j.0 as usize]],
            GroupKind::NonAbelian { table } => table[i.0 as usize][j.0 as usize].clone(),
        }
    }

    /// For abelian groups only: the single-irrep product. Panics (a
    /// programmer error, per spec §7) if called on a non-abelian table.
    pub fn mul_abelian(&self, i: Irrep, j: Irrep) -> Irrep {
        match &self.kind {
            GroupKind::Abelian { table } => table[i.0 as usize][j.0 as usize],
            GroupKind::NonAbelian { .. } => {
                panic!("mul_abelian called on a non-abelian symmetry table")
            }
        }
    }

    /// Direct-product decomposition of an arbitrary-rank list of irreps
    /// into the direct sum that results from multiplying them all
    /// together, right to left, flattening direct sums as we fold.
    ///
    /// This is the general "inverse polish calculator" algorithm of
    /// `dpd_prod_to_sum`: fold irreps into a running multiset of partial
    /// products, starting from the rightmost input.
    pub fn dpd_prod_to_sum(&self, irreps: &[Irrep]) -> Vec<Irrep> {
        if irreps.is_empty() {
            return vec![self.totsym];
        }
        let mut stack: Vec<Irrep> = vec![irreps[irreps.len() - 1]];
        for &op1 in irreps[..irreps.len() - 1].iter().rev() {
            let mut result = Vec::new();
            for &op2 in &stack {
                result.extend(self.mul(op1, op2));
            }
            stack = result;
        }
        stack
    }

    /// `contains_totsym`: whether the direct product of `bra` (conjugated)
    /// and `ket` irreps contains the totally symmetric irrep. Fast paths
    /// for rank 2/4/6 (abelian only); general decomposition otherwise.
    pub fn contains_totsym(&self, bra: &[Irrep], ket: &[Irrep]) -> bool {
        self.contains_irrep(bra, ket, self.totsym)
    }

    /// Whether the direct product of `bra` (conjugated, per spec §4.3) and
    /// `ket` irreps contains `target` — the general form `template` uses
    /// to decide if a spinor-block tuple is allowed for a diagram whose
    /// operator irrep is `target` (spec §4.5).
    pub fn contains_irrep(&self, bra: &[Irrep], ket: &[Irrep], target: Irrep) -> bool {
        let bra_conj: Vec<Irrep> = bra.iter().map(|&i| self.conj(i)).collect();
        if self.is_abelian() {
            match (bra_conj.len(), ket.len()) {
                (1, 1) => return self.mul_abelian(bra_conj[0], ket[0]) == target,
                (2, 2) => {
                    let left = self.mul_abelian(bra_conj[0], bra_conj[1]);
                    let right = self.mul_abelian(ket[0], ket[1]);
                    return self.mul_abelian(left, target) == right;
                }
                (3, 3) => {
                    let left = self.mul_abelian(self.mul_abelian(bra_conj[0], bra_conj[1]), bra_conj[2]);
                    let right = self.mul_abelian(self.mul_abelian(ket[0], ket[1]), ket[2]);
                    return self.mul_abelian(left, target) == right;
                }
                _ => {}
            }
        }
        let mut all = Vec::with_capacity(bra_conj.len() + ket.len());
        all.extend_from_slice(&bra_conj);
        all.extend_from_slice(ket);
        self.dpd_prod_to_sum(&all).contains(&target)
    }

    /// Picks an operator irrep mapping a bra irrep to a ket irrep. For
    /// abelian groups this is unique; for Cinfv/Dinfh the representative
    /// with minimum |Omega| is preferred (handled by [`InfinityGroup`]
    /// when present).
    pub fn operator_symmetry(&self, bra: Irrep, ket: Irrep) -> Irrep {
        match &self.kind {
            GroupKind::Abelian { table } => {
                // mul(bra, x) = ket  =>  x = mul(bra, ket) since every
                // abelian irrep is its own inverse's partner through the
                // totally symmetric product in these point groups.
                for (x, row) in table.iter().enumerate() {
                    if row[bra.0 as usize] == ket {
                        return Irrep(x as u16);
                    }
                }
                self.totsym
            }
            GroupKind::NonAbelian { table } => {
                for (x, row) in table.iter().enumerate() {
                    if row[bra.0 as usize].contains(&ket) {
                        return Irrep(x as u16);
                    }
                }
                self.totsym
            }
        }
    }
}

/// A continuous-group irrep label: `(2*Omega, sign, gerade)`, per
/// `parse_infty_irrep_name`. `gerade` is `None` for groups without
/// inversion symmetry (Cinfv).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfinityLabel {
    pub two_omega: i32,
    pub sign: i32,
    pub gerade: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfinityGroupKind {
    Cinfv,
    Dinfh,
}

/// Continuous groups Cinfv/Dinfh synthesised up to a configured |Omega|max.
#[derive(Debug, Clone)]
pub struct InfinityGroup {
    pub kind: InfinityGroupKind,
    pub max_omega_x2: i32,
    pub names: Vec<String>,
}

impl InfinityGroup {
    pub fn new(kind: InfinityGroupKind, max_omega_x2: i32) -> Self {
        let names = match kind {
            InfinityGroupKind::Cinfv => generate_irreps_cinfv(max_omega_x2),
            InfinityGroupKind::Dinfh => generate_irreps_dinfh(max_omega_x2),
        };
        InfinityGroup {
            kind,
            max_omega_x2,
            names,
        }
    }

    pub fn parse(name: &str) -> InfinityLabel {
        parse_infty_irrep_name(name)
    }

    pub fn format(&self, label: InfinityLabel) -> String {
        match self.kind {
            InfinityGroupKind::Cinfv => format_cinfv(label),
            InfinityGroupKind::Dinfh => format_dinfh(label),
        }
    }

    pub fn multiply(&self, a: &str, b: &str) -> String {
        let la = Self::parse(a);
        let lb = Self::parse(b);
        let two_omega = la.sign * la.two_omega + lb.sign * lb.two_omega;
        let sign = if two_omega < 0 { -1 } else { 1 };
        let two_omega = two_omega.abs();
        let gerade = match (la.gerade, lb.gerade) {
            (Some(a), Some(b)) => Some(a == b),
            _ => None,
        };
        self.format(InfinityLabel {
            two_omega,
            sign,
            gerade,
        })
    }

    /// Finds the operator irrep mapping `bra` to `ket` with minimum |Omega|.
    pub fn operator_symmetry(&self, bra: &str, ket: &str) -> Result<String> {
        let mut best: Option<(i32, String)> = None;
        for candidate in &self.names {
            if self.multiply(bra, candidate) == *ket {
                let label = Self::parse(candidate);
                if best.as_ref().map(|(w, _)| label.two_omega < *w).unwrap_or(true) {
                    best = Some((label.two_omega, candidate.clone()));
                }
            }
        }
        best.map(|(_, name)| name)
            .ok_or_else(|| Error::Numerical(format!("no operator irrep maps {bra} to {ket}")))
    }
}

fn parse_infty_irrep_name(name: &str) -> InfinityLabel {
    let sign = if name.contains('-') { -1 } else { 1 };
    let gerade = if name.contains('g') {
        Some(true)
    } else if name.contains('u') {
        Some(false)
    } else {
        None
    };
    let is_half_integer = name.contains('/');
    let digits: String = name.chars().take_while(|c| c.is_ascii_digit()).collect();
    let mut two_omega: i32 = digits.parse().unwrap_or(0);
    if !is_half_integer {
        two_omega *= 2;
    }
    InfinityLabel {
        two_omega,
        sign,
        gerade,
    }
}

fn format_cinfv(label: InfinityLabel) -> String {
    if label.two_omega == 0 {
        return "0".to_string();
    }
    let sign_ch = if label.sign >= 0 { "+" } else { "-" };
    if label.two_omega % 2 != 0 {
        format!("{}/2{}", label.two_omega, sign_ch)
    } else {
        format!("{}{}", label.two_omega / 2, sign_ch)
    }
}

fn format_dinfh(label: InfinityLabel) -> String {
    if label.two_omega == 0 {
        return format!("0{}", if label.gerade.unwrap_or(true) { "g" } else { "u" });
    }
    let sign_ch = if label.sign >= 0 { "+" } else { "-" };
    let gu = if label.gerade.unwrap_or(true) { "g" } else { "u" };
    if label.two_omega % 2 != 0 {
        format!("{}/2{}{}", label.two_omega, gu, sign_ch)
    } else {
        format!("{}{}{}", label.two_omega / 2, gu, sign_ch)
    }
}

fn generate_irreps_cinfv(max_omega_x2: i32) -> Vec<String> {
    let mut names = Vec::new();
    let mut i = 1;
    while i < max_omega_x2 {
        names.push(format!("{}/2+", i));
        names.push(format!("{}/2-", i));
        i += 2;
    }
    names.push("0".to_string());
    for i in 1..=max_omega_x2 / 2 {
        names.push(format!("{}+", i));
        names.push(format!("{}-", i));
    }
    names
}

fn generate_irreps_dinfh(max_omega_x2: i32) -> Vec<String> {
    let mut names = Vec::new();
    let mut i = 1;
    while i < max_omega_x2 {
        names.push(format!("{}/2g+", i));
        names.push(format!("{}/2g-", i));
        i += 2;
    }
    i = 1;
    while i < max_omega_x2 {
        names.push(format!("{}/2u+", i));
        names.push(format!("{}/2u-", i));
        i += 2;
    }
    names.push("0g".to_string());
    for i in 1..=max_omega_x2 / 2 {
        names.push(format!("{}g+", i));
        names.push(format!("{}g-", i));
    }
    names.push("0u".to_string());
    for i in 1..=max_omega_x2 / 2 {
        names.push(format!("{}u+", i));
        names.push(format!("{}u-", i));
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    /// C2v-like abelian table: A1=0, A2=1, B1=2, B2=3, Klein-4 group.
    fn c2v() -> SymmetryTable {
        let names = vec!["A1", "A2", "B1", "B2"]
            .into_iter()
            .map(String::from)
            .collect();
        // Klein four-group multiplication: each irrep is its own inverse,
        // product of two distinct non-identity irreps is the third.
        let table = vec![
            vec![0, 1, 2, 3],
            vec![1, 0, 3, 2],
            vec![2, 3, 0, 1],
            vec![3, 2, 1, 0],
        ];
        SymmetryTable::new_abelian(names, table, 0)
    }

    #[test]
    fn symmetry_closure() {
        let t = c2v();
        for i in 0..t.num_irreps() {
            for j in 0..t.num_irreps() {
                let ii = Irrep(i as u16);
                let jj = Irrep(j as u16);
                let prod = t.mul_abelian(ii, jj);
                // every irrep is its own inverse in this Klein-4 group
                assert_eq!(t.mul_abelian(prod, jj), ii);
            }
            assert_eq!(t.mul_abelian(Irrep(i as u16), t.totsym), Irrep(i as u16));
        }
    }

    #[test]
    fn dpd_three_way_matches_pairwise() {
        let t = c2v();
        let a = Irrep(1);
        let b = Irrep(2);
        let c = Irrep(3);
        let direct = t.mul_abelian(t.mul_abelian(a, b), c);
        let via_dpd = t.dpd_prod_to_sum(&[a, b, c]);
        assert_eq!(via_dpd, vec![direct]);
    }

    #[test]
    fn contains_totsym_rank4() {
        let t = c2v();
        let a = Irrep(1);
        let b = Irrep(1);
        // bra = [A2, A2] -> totsym; ket = [A1, A1] -> totsym => contains totsym
        assert!(t.contains_totsym(&[a, b], &[Irrep(0), Irrep(0)]));
        assert!(!t.contains_totsym(&[a, b], &[Irrep(0), Irrep(2)]));
    }

    #[test]
    fn cinfv_roundtrip() {
        let g = InfinityGroup::new(InfinityGroupKind::Cinfv, 8);
        for name in &g.names {
            let label = InfinityGroup::parse(name);
            assert_eq!(&g.format(label), name);
        }
    }

    #[test]
    fn cinfv_multiplication_agrees_with_names() {
        let g = InfinityGroup::new(InfinityGroupKind::Cinfv, 8);
        // 1+ (x) 1- = 0
        assert_eq!(g.multiply("1+", "1-"), "0");
        // 1/2+ (x) 1/2+ = 1+
        assert_eq!(g.multiply("1/2+", "1/2+"), "1+");
    }

    #[test]
    fn dinfh_gerade_parity() {
        let g = InfinityGroup::new(InfinityGroupKind::Dinfh, 8);
        assert_eq!(g.multiply("1g+", "1u-"), "0u");
        assert_eq!(g.multiply("1g+", "1g-"), "0g");
    }
}
