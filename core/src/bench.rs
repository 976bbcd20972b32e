use evaluation::{EvalConfig, EvalKind, Evaluator};
use search::{select_move, SearchConfig, SearchError, SearchStats};
use utils::Position;

use crate::select::print_result;

/// Perft positions from https://github.com/AndyGrant/Ethereal/blob/master/src/perft/standard.epd
pub const POSITIONS: &[&str] = &[
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    "n1n5/PPPk4/8/8/8/8/4Kppp/5N1N b - - 0 1",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    "rnbqkb1r/ppppp1pp/7n/4Pp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3",
];

pub fn run(depth: u8) -> Result<(), SearchError> {
    let benchmark = Benchmark::new(depth);
    benchmark.run()
}

struct Benchmark {
    config: SearchConfig,
}

impl Benchmark {
    fn new(depth: u8) -> Self {
        Self {
            config: SearchConfig::with_depth(depth),
        }
    }

    fn run(self) -> Result<(), SearchError> {
        self.config.validate()?;
        self.print_header();

        let mut totals = SearchStats::default();

        for fen in POSITIONS {
            // Cold cache per position
            let mut evaluator = Evaluator::new(EvalKind::Full.build(EvalConfig::default()));
            let mut position = Position::from_fen(fen)?;

            println!("{}", fen);
            let result = select_move(&mut position, &mut evaluator, &self.config)?;
            print_result(&result);
            println!();

            totals.nodes += result.stats.nodes;
            totals.evaluations_computed += result.stats.evaluations_computed;
            totals.elapsed += result.stats.elapsed;
        }

        self.print_summary(&totals);
        Ok(())
    }

    fn print_header(&self) {
        println!("Running benchmark: depth {}\n", self.config.max_depth);
    }

    fn print_summary(&self, totals: &SearchStats) {
        println!("=== Benchmark Summary ===");
        println!("Positions: {}", POSITIONS.len());
        println!("Nodes: {}", totals.nodes);
        println!("Computed: {}", totals.evaluations_computed);
        println!("NPS: {}", totals.nodes_per_second());
        println!("Time: {} ms", totals.elapsed.as_millis());
    }
}
