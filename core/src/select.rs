use search::{SearchError, SearchResult};

use crate::args::SearchArgs;
use crate::engine;

pub fn run(fen: Option<&str>, moves: &[String], args: &SearchArgs) -> Result<(), SearchError> {
    let mut engine = engine::create(args)?;
    engine.set_position(engine::load_position(fen, moves)?);

    println!("Position: {}", engine.position().fen());
    println!(
        "Searching depth {} with {} evaluation\n",
        args.depth,
        engine.evaluator().name()
    );

    let result = engine.search()?;
    print_result(&result);

    Ok(())
}

pub fn print_result(result: &SearchResult) {
    match result.best_move {
        Some(mv) => println!("Best move: {}", mv),
        None => println!("Best move: none (game is over)"),
    }
    println!("Score: {}", result.score);
    println!("Nodes: {}", result.stats.nodes);
    println!("Computed: {}", result.stats.evaluations_computed);
    println!("NPS: {}", result.stats.nodes_per_second());
    println!("Time: {} ms", result.stats.elapsed.as_millis());
}
