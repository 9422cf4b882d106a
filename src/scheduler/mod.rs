pub mod hrrn;
pub mod mlfq;
pub mod round_robin;
pub mod srtf;

use std::num::NonZeroU64;

pub use crate::core::{ProcessId, SimCtx, Ticks};
pub use hrrn::Hrrn;
pub use mlfq::Mlfq;
pub use round_robin::RoundRobin;
pub use srtf::Srtf;

/// Maximum length of a round-robin burst.
pub type Quantum = NonZeroU64;

/// A scheduling policy: owns the ready structure and decides, one burst at a
/// time, which admitted process runs and for how long.
pub trait Scheduler {
    const NAME: &'static str;

    fn has_ready(&self) -> bool;

    /// Adds a freshly arrived process to the ready structure. Called exactly
    /// once per scheduled process, with `ctx.now` at or after its arrival.
    fn enqueue(&mut self, ctx: &SimCtx, pid: ProcessId);

    /// Runs one non-empty burst through [`SimCtx::run`]. Only called while
    /// [`Scheduler::has_ready`] holds.
    fn burst(&mut self, ctx: &mut SimCtx);

    /// Admits every pending process whose arrival time is at or before now.
    fn admit_arrived(&mut self, ctx: &mut SimCtx) {
        while let Some(pid) = ctx.pop_arrived() {
            self.enqueue(ctx, pid);
        }
    }
}

// Burst length for a quantum-limited run
fn slice(remaining: Ticks, quantum: Quantum) -> Ticks {
    remaining.min(quantum.get())
}
