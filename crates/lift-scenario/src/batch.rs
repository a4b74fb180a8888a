//! Many seeded random scenarios, each on a fresh elevator.

use lift_core::{Floor, LiftConfig};
use lift_sim::ElevatorBuilder;
use tracing::info;

use crate::{ScenarioGenerator, ScenarioResult, ScenarioRng};

#[derive(Clone, Debug)]
pub struct BatchConfig {
    pub lift:       LiftConfig,
    pub seed:       u64,
    pub runs:       usize,
    pub passengers: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self { lift: LiftConfig::default(), seed: 0, runs: 100, passengers: 5 }
    }
}

/// Result of one batch run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchRun {
    pub index:       usize,
    pub stops:       usize,
    pub sweeps:      usize,
    pub distance:    u32,
    pub final_floor: Floor,
    /// Queues empty and car idle after the drop-off phase.
    pub drained:     bool,
}

/// Run `config.runs` random scenarios and return them in index order.
///
/// Run `i` uses [`ScenarioRng::for_run`]`(config.seed, i)`, so results do not
/// depend on the `parallel` feature.
pub fn run_batch(config: &BatchConfig) -> ScenarioResult<Vec<BatchRun>> {
    let range = config.lift.floor_range()?;
    let generator = ScenarioGenerator::new(range, config.passengers)?;

    #[cfg(not(feature = "parallel"))]
    let runs: ScenarioResult<Vec<BatchRun>> =
        (0..config.runs).map(|i| run_one(config, &generator, i)).collect();

    #[cfg(feature = "parallel")]
    let runs: ScenarioResult<Vec<BatchRun>> = {
        use rayon::prelude::*;

        (0..config.runs)
            .into_par_iter()
            .map(|i| run_one(config, &generator, i))
            .collect()
    };

    let runs = runs?;
    info!(runs = runs.len(), seed = config.seed, "batch complete");
    Ok(runs)
}

fn run_one(config: &BatchConfig, generator: &ScenarioGenerator, index: usize) -> ScenarioResult<BatchRun> {
    let mut rng = ScenarioRng::for_run(config.seed, index as u64);
    let scenario = generator.generate(format!("random-{index}"), &mut rng);
    let mut elevator = ElevatorBuilder::new(config.lift.clone()).build()?;
    let outcome = scenario.execute(&mut elevator)?;
    Ok(BatchRun {
        index,
        stops:       outcome.pickup.stops.len() + outcome.dropoff.stops.len(),
        sweeps:      outcome.sweeps(),
        distance:    outcome.distance(),
        final_floor: outcome.final_floor(),
        drained:     elevator.is_drained(),
    })
}

// ── BatchSummary ──────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BatchSummary {
    pub runs:           usize,
    pub total_stops:    usize,
    pub total_distance: u64,
    pub mean_distance:  f64,
    pub max_distance:   u32,
    pub all_drained:    bool,
}

impl BatchSummary {
    pub fn from_runs(runs: &[BatchRun]) -> Self {
        let total_distance: u64 = runs.iter().map(|r| u64::from(r.distance)).sum();
        Self {
            runs: runs.len(),
            total_stops: runs.iter().map(|r| r.stops).sum(),
            total_distance,
            mean_distance: if runs.is_empty() { 0.0 } else { total_distance as f64 / runs.len() as f64 },
            max_distance: runs.iter().map(|r| r.distance).max().unwrap_or(0),
            all_drained: runs.iter().all(|r| r.drained),
        }
    }
}
