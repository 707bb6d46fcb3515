//! Command-line driver for the tensor engine: builds a small toy spinor
//! catalogue, runs a handful of engine operations on it, and reports
//! diagram summaries and numerical results.
//!
//! Modeled on the teacher's `vsfinfo` inspector: a `clap`-derived
//! subcommand set, `colored` terminal output, and a `main` that prints to
//! stderr and exits non-zero on error rather than unwinding.

use clap::{Parser, Subcommand};
use colored::*;
use symblock::config::EngineOptions;
use symblock::spinor::{Spinor, SpinorCatalog};
use symblock::storage::IoStats;
use symblock::symmetry::{Irrep, SymmetryTable};
use symblock::{engine, Diagram};

#[derive(Parser)]
#[command(name = "symblock-cli")]
#[command(about = "Inspect and exercise the symmetry-blocked tensor engine", long_about = None)]
#[command(version)]
struct Cli {
    /// Number of hole spinors in the toy catalogue
    #[arg(long, default_value_t = 2)]
    holes: usize,

    /// Number of particle spinors in the toy catalogue
    #[arg(long, default_value_t = 2)]
    particles: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the hhpp diagram template and report its block summary
    Template,

    /// Fill hhpp with a constant value, antisymmetrize it, and show the result
    Antisymmetrize,

    /// Run a toy MP2-style contraction: divide hhpp by denominators, then
    /// contract with itself over its particle indices
    Contract,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Template => cmd_template(cli.holes, cli.particles),
        Commands::Antisymmetrize => cmd_antisymmetrize(cli.holes, cli.particles),
        Commands::Contract => cmd_contract(cli.holes, cli.particles),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn toy_system(holes: usize, particles: usize) -> (SpinorCatalog, SymmetryTable) {
    let spinors: Vec<Spinor> = (0..holes + particles)
        .map(|i| Spinor {
            global_index: i,
            irrep: Irrep(0),
            energy: if i < holes { -1.0 - i as f64 } else { 1.0 + (i - holes) as f64 },
            is_hole: i < holes,
            is_active: false,
            t3_space: false,
        })
        .collect();
    let catalog = SpinorCatalog::new(spinors, 64);
    let symmetry = SymmetryTable::new_abelian(vec!["A".into()], vec![vec![0]], 0);
    (catalog, symmetry)
}

fn print_summary(label: &str, diagram: &Diagram<f64>) {
    let summary = diagram.summary();
    println!("{}", label.cyan().bold());
    println!(
        " {} {} ({} unique)",
        "blocks:".cyan(),
        diagram.blocks.len().to_string().white(),
        summary.unique_blocks.to_string().white(),
    );
    println!(
        " {} {} in memory, {} on disk, {} dummy",
        "storage:".cyan(),
        summary.blocks_in_memory.to_string().white(),
        summary.blocks_on_disk.to_string().white(),
        summary.blocks_dummy.to_string().white(),
    );
}

fn cmd_template(holes: usize, particles: usize) -> Result<(), String> {
    let (catalog, sym) = toy_system(holes, particles);
    let hhpp = Diagram::<f64>::template(
        "hhpp",
        vec![true, true, false, false],
        vec![false, false, false, false],
        vec![false, false, false, false],
        sym.totsym,
        &catalog,
        &sym,
        true,
    );
    print_summary("hhpp", &hhpp);
    Ok(())
}

fn cmd_antisymmetrize(holes: usize, particles: usize) -> Result<(), String> {
    if holes < 2 || particles < 2 {
        return Err("need at least 2 holes and 2 particles".to_string());
    }
    let (catalog, sym) = toy_system(holes, particles);
    let mut hhpp = Diagram::<f64>::template(
        "hhpp",
        vec![true, true, false, false],
        vec![false, false, false, false],
        vec![false, false, false, false],
        sym.totsym,
        &catalog,
        &sym,
        true,
    );
    hhpp.set_element(&catalog, &[0, 1, holes, holes + 1], 3.0);

    let opts = EngineOptions::default();
    let io = IoStats::default();
    let antisym = engine::perm(&hhpp, "(1/2)", &catalog, &sym, &opts, &io).map_err(|e| e.to_string())?;
    print_summary("hhpp_perm", &antisym);
    println!(
        " {} {}",
        "[0,1,h,h+1] =".cyan(),
        antisym.get_element(&catalog, &[0, 1, holes, holes + 1]),
    );
    println!(
        " {} {}",
        "[1,0,h,h+1] =".cyan(),
        antisym.get_element(&catalog, &[1, 0, holes, holes + 1]),
    );
    Ok(())
}

fn cmd_contract(holes: usize, particles: usize) -> Result<(), String> {
    let (catalog, sym) = toy_system(holes, particles);
    let opts = EngineOptions::default();
    let io = IoStats::default();

    let mut hhpp = Diagram::<f64>::template(
        "hhpp",
        vec![true, true, false, false],
        vec![false, false, false, false],
        vec![false, false, false, false],
        sym.totsym,
        &catalog,
        &sym,
        true,
    );
    for blk in hhpp.blocks.iter_mut() {
        if !blk.is_unique {
            continue;
        }
        for local in blk.gen_indices() {
            let global: Vec<usize> = (0..blk.rank).map(|d| blk.indices[d][local[d]]).collect();
            blk.set(&global, 1.0);
        }
    }

    let divided = engine::diveps(&hhpp, &catalog, &opts, &io).map_err(|e| e.to_string())?;
    print_summary("hhpp / D", &divided);

    let energy = engine::scalar_product(false, false, &hhpp, &divided, &catalog, &io).map_err(|e| e.to_string())?;
    println!(" {} {:.6}", "correlation energy estimate:".cyan(), energy);
    Ok(())
}
