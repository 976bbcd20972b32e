use chess::Color;
use log::info;
use search::SearchError;

use crate::args::SearchArgs;
use crate::engine;

pub fn run(fen: Option<&str>, plies: usize, args: &SearchArgs) -> Result<(), SearchError> {
    let mut engine = engine::create(args)?;
    engine.set_position(engine::load_position(fen, &[])?);

    println!("Self-play from {}\n", engine.position().fen());

    let mut total_nodes = 0;
    for ply in 0..plies {
        let result = engine.search()?;

        let Some(mv) = result.best_move else {
            break;
        };

        let side = match engine.position().side_to_move() {
            Color::White => "white",
            Color::Black => "black",
        };
        println!(
            "{:>3}. {:<5} {:<6} score {:>8}  nodes {:>8}  computed {:>8}  cache {:>8}  {} ms",
            ply + 1,
            side,
            mv.to_string(),
            result.score,
            result.stats.nodes,
            result.stats.evaluations_computed,
            engine.evaluator().cache_len(),
            result.stats.elapsed.as_millis()
        );

        total_nodes += result.stats.nodes;
        engine.play(mv)?;
    }

    let outcome = match engine.position().outcome() {
        Some(outcome) => format!("{:?}", outcome),
        None => "unfinished".to_string(),
    };

    info!("Self-play finished after {} plies: {}", engine.position().ply(), outcome);

    println!("\nFinal position: {}", engine.position().fen());
    println!("Result: {}", outcome);
    println!("Nodes: {}", total_nodes);

    Ok(())
}
