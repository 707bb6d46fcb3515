//! Runtime options for the engine — tile size, disk policy, arithmetic
//! mode, threading scheme and denominator shift policy.
//!
//! Field semantics follow `original_source/include/options.h`
//! (`CC_DISK_USAGE_LEVEL_*`, `CC_ARITH_*`); the shape of the struct itself
//! follows the teacher's plain `Default`-able config structs
//! (`CameraSettings`, `VsfHeader`).

use std::path::PathBuf;

/// Process-global arithmetic mode (spec.md Invariant 6). Fixed once at
/// startup for the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithMode {
    Real,
    Complex,
}

/// Disk usage level, §4.4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DiskUsageLevel {
    /// All blocks in memory.
    Level0,
    /// rank >= 6 blocks on disk.
    Level1,
    /// rank >= 6 and all pppp blocks on disk.
    Level2,
    /// Level2 plus all *ppp blocks on disk.
    Level3,
    /// Level3 plus LZ4 compression of all on-disk blocks.
    Level4,
}

impl DiskUsageLevel {
    pub fn compresses(self) -> bool {
        matches!(self, DiskUsageLevel::Level4)
    }
}

/// External vs internal thread scheduling for `mult` (§5).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThreadScheme {
    /// Outer loop over destination blocks is parallel; GEMM single-threaded.
    External,
    /// Outer loop sequential; GEMM itself multi-threaded.
    Internal,
}

/// Denominator shift formula applied by `diveps` when a shift is configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenominatorShift {
    None,
    Real,
    Imaginary,
    RealSimulatedImaginary,
    Taylor,
}

#[derive(Debug, Clone)]
pub struct EngineOptions {
    pub arith_mode: ArithMode,
    pub tile_size: usize,
    pub disk_usage_level: DiskUsageLevel,
    pub thread_scheme: ThreadScheme,
    pub num_threads: usize,
    pub denominator_shift: DenominatorShift,
    pub shift_value: f64,
    pub shift_power: i32,
    /// |D| below this threshold is treated per the shift policy rather
    /// than dividing (§4.7 `diveps`, §8 property 10).
    pub denominator_tiny: f64,
    pub memory_ceiling_bytes: Option<usize>,
    pub scratch_dir: PathBuf,
    pub stack_capacity: usize,
    pub run_id: u64,
}

impl Default for EngineOptions {
    fn default() -> Self {
        EngineOptions {
            arith_mode: ArithMode::Real,
            tile_size: 64,
            disk_usage_level: DiskUsageLevel::Level0,
            thread_scheme: ThreadScheme::External,
            num_threads: 1,
            denominator_shift: DenominatorShift::None,
            shift_value: 0.0,
            shift_power: 1,
            denominator_tiny: 1e-12,
            memory_ceiling_bytes: None,
            scratch_dir: PathBuf::from("."),
            stack_capacity: 4096,
            run_id: 0,
        }
    }
}
