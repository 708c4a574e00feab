//! Simulated real-time runtime for the Reach engine.
//!
//! A producer thread paces historical trajectory and action rows onto a
//! bounded queue; the consumer drains it, feeds the pipeline, and collects
//! result records. All mutable pipeline state is owned by the consumer
//! thread; the producer only walks the tables it was given.

pub mod emitter;
pub mod loader;
pub mod queue;
pub mod runner;

pub use emitter::DataEmitter;
pub use queue::{channel, Envelope, Producer};
pub use runner::{run, RunOutcome, Termination};
