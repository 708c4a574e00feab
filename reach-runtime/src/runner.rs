//! Consumer run loop.
//!
//! Spawns the emitter, drains the queue, feeds the pipeline, and collects
//! result records. The pipeline and its goal collection are owned by this
//! thread alone; the producer never touches them.

use tracing::{info, warn};

use reach_core::{Action, PipelineError, ReachConfig, Sample, SampleResult, Vec3};
use reach_engine::Pipeline;

use crate::emitter::DataEmitter;
use crate::queue::{channel, Envelope};

/// Why the run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The emitter exhausted its trajectory and sent the sentinel.
    SourceDrained,
    /// The last active goal was consumed; nothing left to disambiguate.
    GoalsExhausted,
}

/// Everything a run produced.
#[derive(Debug)]
pub struct RunOutcome {
    pub results: Vec<SampleResult>,
    pub termination: Termination,
}

/// Drive one complete run over pre-loaded tables.
///
/// Rejected samples are skipped with a diagnostic; only an exhausted goal
/// set ends the run early.
pub fn run(
    config: &ReachConfig,
    goal_table: &[(u32, Vec3)],
    trajectory: Vec<Sample>,
    actions: Vec<Action>,
) -> Result<RunOutcome, PipelineError> {
    reach_core::tracing::init_tracing();
    let mut pipeline = Pipeline::new(config, goal_table)?;

    let (producer, receiver) = channel(
        config.runtime.effective_queue_capacity(),
        config.runtime.overflow,
    );
    let emitter = DataEmitter::new(trajectory, actions, &config.runtime);
    let producer_thread = emitter.spawn(producer);

    let mut results = Vec::new();
    let mut termination = Termination::SourceDrained;

    // Blocking dequeue; the sentinel makes shutdown explicit.
    for envelope in receiver.iter() {
        match envelope {
            Envelope::End => break,
            Envelope::Tick { sample, actions } => {
                match pipeline.process_sample(sample, &actions) {
                    Ok(Some(result)) => {
                        info!(
                            time = result.time,
                            pairs = ?result.probability_pairs(),
                            uncategorized = result.uncategorized,
                            "sample scored"
                        );
                        results.push(result);
                    }
                    Ok(None) => {}
                    Err(PipelineError::GoalsExhausted) => {
                        info!("all goals consumed, terminating run");
                        termination = Termination::GoalsExhausted;
                        break;
                    }
                    Err(error) => {
                        warn!(%error, "sample rejected");
                    }
                }
            }
        }
    }

    // Unblock a producer still pacing into a dead queue.
    drop(receiver);
    if producer_thread.join().is_err() {
        warn!("emitter thread panicked");
    }

    Ok(RunOutcome {
        results,
        termination,
    })
}
