use std::env;
use tracing::Level;

use flyer_tuning::{
    systems::top_solutions, utils::setup_logging, Nsga2Engine, OptimizerConfig, OptimizerError,
};

const REPORTED_SOLUTIONS: usize = 5;

/// Usage: `flyer_tune [config.yaml] [front.json]`
fn main() -> Result<(), OptimizerError> {
    setup_logging(Level::INFO);

    let args: Vec<String> = env::args().collect();

    let config = match args.get(1) {
        Some(path) => OptimizerConfig::load(path)?,
        None => OptimizerConfig::default(),
    };

    let mut engine = Nsga2Engine::new(config)?;
    let result = engine.run()?;

    println!(
        "Pareto front: {} solutions after {} generations ({} evaluations, {} penalized)",
        result.front.len(),
        result.generations,
        result.evaluations,
        result.penalized
    );
    for report in top_solutions(&result.front, REPORTED_SOLUTIONS)? {
        println!("{}", report);
    }

    if let Some(path) = args.get(2) {
        std::fs::write(path, result.front.to_json()?)?;
        println!("Front written to {}", path);
    }

    Ok(())
}
