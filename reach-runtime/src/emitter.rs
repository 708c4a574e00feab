//! Producer thread pacing historical rows onto the queue.
//!
//! Emulates real-time arrival: the emitter walks the trajectory on a
//! simulated clock, keeps only the newest position per tick (samples that
//! landed between ticks are skipped, as a live tracker would overwrite
//! them), attaches the actions due at the tick, and sleeps between
//! enqueues.

use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::{debug, info};

use reach_core::{Action, RuntimeConfig, Sample};

use crate::queue::{Envelope, Producer};

/// Walks the loaded tables and feeds the queue.
#[derive(Debug, Clone)]
pub struct DataEmitter {
    trajectory: Vec<Sample>,
    actions: Vec<Action>,
    time_step: f64,
    pacing: f64,
}

impl DataEmitter {
    /// `trajectory` and `actions` must be sorted by time; the loaders
    /// guarantee this.
    pub fn new(trajectory: Vec<Sample>, actions: Vec<Action>, config: &RuntimeConfig) -> Self {
        Self {
            trajectory,
            actions,
            time_step: config.effective_time_step(),
            pacing: config.effective_pacing(),
        }
    }

    /// Run the pacing loop to completion, then send the shutdown sentinel.
    pub fn emit(self, producer: Producer) {
        let mut clock = 0.0_f64;
        let mut trajectory_index = 0usize;
        let mut action_index = 0usize;
        let mut announced: Option<usize> = None;
        let total = self.trajectory.len();

        while trajectory_index < total {
            clock += self.time_step;

            // Newest trajectory row at or before this tick; rows that fell
            // between ticks are skipped.
            let mut newest: Option<usize> = None;
            while trajectory_index < total
                && self.trajectory[trajectory_index].time <= clock
            {
                newest = Some(trajectory_index);
                trajectory_index += 1;
            }

            if let Some(newest) = newest {
                let sample = self.trajectory[newest];

                // All actions due at or before this tick travel with the sample.
                let mut actions = Vec::new();
                while action_index < self.actions.len()
                    && self.actions[action_index].time <= clock
                {
                    actions.push(self.actions[action_index].clone());
                    action_index += 1;
                }

                // The next upcoming action is announced once as a look-ahead.
                if let Some(upcoming) = self.actions.get(action_index) {
                    if announced != Some(action_index) {
                        actions.push(upcoming.clone());
                        announced = Some(action_index);
                    }
                }

                debug!(time = sample.time, actions = actions.len(), "emitting tick");
                if !producer.send(Envelope::Tick { sample, actions }) {
                    info!("consumer disconnected, stopping emitter");
                    return;
                }
            }

            // Ticks without a due row still advance simulated real time.
            let sleep_ms = self.time_step * self.pacing;
            if sleep_ms > 0.0 {
                thread::sleep(Duration::from_micros((sleep_ms * 1000.0) as u64));
            }
        }

        producer.send(Envelope::End);
        info!("trajectory exhausted, emitter done");
    }

    /// Spawn the pacing loop on its own thread.
    pub fn spawn(self, producer: Producer) -> JoinHandle<()> {
        thread::Builder::new()
            .name("reach-emitter".into())
            .spawn(move || self.emit(producer))
            .expect("failed to spawn emitter thread")
    }
}
