use std::path::PathBuf;

use clap::{Parser, Subcommand};
use evaluation::{EvalConfig, EvalKind, PlacementScope};
use log::LevelFilter;
use search::{SearchConfig, TieBreak};

#[derive(Parser, Debug)]
#[command(name = "Cairn")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Depth-bounded alpha-beta move selection for chess")]
pub struct Args {
    /// Write the log to a file at debug level instead of the terminal.
    #[arg(short, long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Terminal log threshold.
    #[arg(long, default_value = "info", global = true)]
    pub log_level: LevelFilter,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Pick the best move for a position.
    Select {
        /// Position to search. Defaults to the initial setup.
        #[arg(long)]
        fen: Option<String>,

        /// Moves in long algebraic notation played on top of the position.
        #[arg(long, num_args = 1.., value_delimiter = ' ')]
        moves: Vec<String>,

        #[command(flatten)]
        search: SearchArgs,
    },
    /// Let the engine play itself, keeping one evaluation cache for the game.
    Play {
        #[arg(long)]
        fen: Option<String>,

        /// Maximum number of plies to play.
        #[arg(long, default_value_t = 20)]
        plies: usize,

        #[command(flatten)]
        search: SearchArgs,
    },
    /// Search a fixed set of positions and report totals.
    Bench {
        #[arg(long, default_value_t = 4)]
        depth: u8,
    },
}

#[derive(clap::Args, Debug, Clone)]
pub struct SearchArgs {
    /// Search depth in plies. Root moves count as ply 1.
    #[arg(short, long, default_value_t = 4)]
    pub depth: u8,

    /// Static evaluation: material, placement or full.
    #[arg(long, default_value_t = EvalKind::Full)]
    pub eval: EvalKind,

    /// Resolution of equally scored root moves: last or first.
    #[arg(long, default_value_t = TieBreak::LastWins)]
    pub tie_break: TieBreak,

    /// Disable one-ply move ordering.
    #[arg(long)]
    pub no_ordering: bool,

    #[arg(long, default_value_t = 1, value_parser = weight_parser())]
    pub material_weight: i32,

    #[arg(long, default_value_t = 1, value_parser = weight_parser())]
    pub placement_weight: i32,

    /// Score per legal move of the side to move.
    #[arg(long, default_value_t = 2, value_parser = weight_parser())]
    pub mobility_weight: i32,

    /// Score placement for the side to move only.
    #[arg(long)]
    pub side_to_move_placement: bool,
}

const MAX_WEIGHT: i64 = 1000;

fn weight_parser() -> clap::builder::RangedI64ValueParser<i32> {
    clap::value_parser!(i32).range(-MAX_WEIGHT..=MAX_WEIGHT)
}

impl SearchArgs {
    pub fn eval_config(&self) -> EvalConfig {
        EvalConfig {
            material_weight: self.material_weight,
            placement_weight: self.placement_weight,
            mobility_weight: self.mobility_weight,
            placement_scope: if self.side_to_move_placement {
                PlacementScope::SideToMove
            } else {
                PlacementScope::BothSides
            },
        }
    }

    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            max_depth: self.depth,
            tie_break: self.tie_break,
            move_ordering: !self.no_ordering,
        }
    }
}
