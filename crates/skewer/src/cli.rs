use std::path::PathBuf;

use clap::Parser;
use skewer_poly::MonomialOrder;
use skewer_solve::SolveConfig;

use crate::input::DEFAULT_INPUT;

/// Prints `x + y + z` for the line that meets all three rays in INPUT.
#[derive(Parser, Debug, Clone)]
#[command(name = "skewer", version)]
pub struct Cli {
    /// File with one ray per line: "px, py, pz @ vx, vy, vz"
    #[arg(default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    #[arg(long, help = "Print the sum for every solution, one per line")]
    pub all: bool,

    #[arg(long, default_value = "grevlex", help = "Ordering of the first Gröbner basis (lex, grlex, grevlex)")]
    pub initial_order: MonomialOrder,

    #[arg(long, default_value_t = 0, help = "Give up after reducing this many critical pairs (0 = never)")]
    pub max_pairs: usize,

    #[arg(long, default_value_t = 100, help = "Critical pairs reduced per batch")]
    pub batch_size: usize,

    #[arg(long, help = "Reduce critical pairs on a single thread")]
    pub sequential: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Cli {
    pub fn solve_config(&self) -> SolveConfig {
        SolveConfig {
            initial_order: self.initial_order,
            batch_size: self.batch_size,
            max_pairs: self.max_pairs,
            parallel: !self.sequential,
        }
    }
}
