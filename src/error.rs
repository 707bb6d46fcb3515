//! Error taxonomy for the engine (spec §7).
//!
//! Malformed-request and capacity errors are programmer errors in the CC
//! equation code; storage and numerical errors originate outside the core.
//! Tolerance issues (near-zero denominators) are never surfaced here — they
//! are handled locally by `diveps`'s shift policy.

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown diagram name: {0}")]
    UnknownDiagram(String),

    #[error("diagram name already exists on the stack: {0}")]
    DuplicateDiagram(String),

    #[error("rank mismatch: expected rank {expected}, got {actual}")]
    RankMismatch { expected: usize, actual: usize },

    #[error("shape mismatch between operands: {lhs:?} vs {rhs:?}")]
    ShapeMismatch { lhs: Vec<usize>, rhs: Vec<usize> },

    #[error("incompatible qparts/valence in contraction at dimension {dim}")]
    IncompatibleContraction { dim: usize },

    #[error("permutation rank {0} is not implemented")]
    UnimplementedPermutationRank(usize),

    #[error("malformed permutation specifier: {0}")]
    MalformedPermSpec(String),

    #[error("diagram stack overflow: capacity {capacity} exceeded")]
    StackOverflow { capacity: usize },

    #[error("memory allocation of {requested} bytes exceeds configured ceiling of {ceiling} bytes")]
    MemoryCeilingExceeded { requested: usize, ceiling: usize },

    #[error("scratch file error at {path}: {source}")]
    Scratch {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("numerical routine failed: {0}")]
    Numerical(String),

    #[error("non-unique block {spinor_blocks:?} retains live storage after clear_non_unique")]
    NonUniqueStorage { spinor_blocks: Vec<u32> },
}
