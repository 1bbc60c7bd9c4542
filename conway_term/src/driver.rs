// driver.rs - Frame loop: render one generation while computing the next

use anyhow::{Context, Result};
use conway::{History, Simulation, life};
use rand::Rng;

use crate::config::Config;
use crate::display::Surface;
use crate::input::Input;

/// What a finished run looked like.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Generations computed and published.
    pub generations: u64,
    pub final_population: usize,
    /// First generation that repeated one of the recent boards.
    pub cycle_detected_at: Option<u64>,
}

/// Runs until `input` asks to quit, checked only between generations.
///
/// Each frame draws the finalized board and waits out the frame interval
/// while the next generation is computed into the scratch buffer. The two
/// halves are joined before the buffers are swapped, so the renderer never
/// sees a board that is still being written.
pub async fn run<S, I, R>(config: &Config, surface: &mut S, input: &mut I, rng: &mut R) -> Result<RunSummary>
where
    S: Surface,
    I: Input,
    R: Rng + ?Sized,
{
    let mut sim = Simulation::random(config.dimension, rng)
        .with_context(|| format!("cannot build a {0}x{0} board", config.dimension))?;
    let mut history = History::new();
    let mut cycle_detected_at = None;

    log::info!(
        "starting {0}x{0} board with {1} live cells",
        config.dimension,
        sim.current().population()
    );

    while !input.quit_requested()? {
        let generation = sim.generation();
        if cycle_detected_at.is_none() && history.observe(sim.current()) {
            log::info!("board repeats a recent state at generation {generation}");
            cycle_detected_at = Some(generation);
        }

        let (current, next) = sim.buffers();
        let render = async {
            surface.draw(current, generation)?;
            tokio::time::sleep(config.frame_interval).await;
            Ok::<_, anyhow::Error>(())
        };
        let compute = async { life::step_into(current, next) };

        let (rendered, ()) = tokio::join!(render, compute);
        rendered.with_context(|| format!("failed to render generation {generation}"))?;

        sim.publish();
        log::debug!("generation {} population {}", sim.generation(), sim.current().population());
    }

    Ok(RunSummary {
        generations: sim.generation(),
        final_population: sim.current().population(),
        cycle_detected_at,
    })
}
