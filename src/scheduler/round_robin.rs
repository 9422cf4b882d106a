use std::collections::VecDeque;

use super::{ProcessId, Quantum, Scheduler, SimCtx, Ticks, slice};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RrEntry {
    pub id: ProcessId,
    pub remaining: Ticks,
}

/// Round robin over a single FIFO with a fixed quantum.
#[derive(Debug)]
pub struct RoundRobin {
    ready: VecDeque<RrEntry>,
    quantum: Quantum,
}

impl RoundRobin {
    pub fn new(quantum: Quantum) -> Self {
        Self {
            ready: VecDeque::new(),
            quantum,
        }
    }
}

impl Scheduler for RoundRobin {
    const NAME: &'static str = "Round-robin";

    fn has_ready(&self) -> bool {
        !self.ready.is_empty()
    }

    fn enqueue(&mut self, ctx: &SimCtx, pid: ProcessId) {
        self.ready.push_back(RrEntry {
            id: pid,
            remaining: ctx.process(pid).service_time,
        });
    }

    fn burst(&mut self, ctx: &mut SimCtx) {
        let Some(mut entry) = self.ready.pop_front() else {
            return;
        };

        let duration = slice(entry.remaining, self.quantum);
        ctx.run(entry.id, duration);
        entry.remaining -= duration;

        // Arrivals during the burst queue up ahead of the preempted process
        self.admit_arrived(ctx);
        if entry.remaining > 0 {
            self.ready.push_back(entry);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{core::SimCore, sim::ProcessSet};

    fn run(arrivals: &[Ticks], services: &[Ticks], quantum: u64) -> String {
        let processes = ProcessSet::from_times(arrivals, services).unwrap();
        let quantum = Quantum::new(quantum).unwrap();
        SimCore::new(&processes, RoundRobin::new(quantum)).run().to_string()
    }

    #[test]
    fn preempts_after_quantum() {
        assert_eq!(run(&[0, 1], &[5, 3], 4), "(0) P0 (4) P1 (7) P0 (8)");
    }

    #[test]
    fn arrivals_queue_ahead_of_preempted_process() {
        // P1 arrives at t=2 while P0 runs; it must run before P0's second turn
        assert_eq!(run(&[0, 2], &[4, 2], 2), "(0) P0 (2) P1 (4) P0 (6)");
    }

    #[test]
    fn sole_process_keeps_running_across_quanta() {
        assert_eq!(run(&[0], &[7], 2), "(0) P0 (7)");
    }

    #[test]
    fn arrival_at_quantum_boundary_precedes_requeue() {
        // Three processes; P2 arrives exactly when P0's first quantum expires
        assert_eq!(
            run(&[0, 0, 3], &[6, 3, 3], 3),
            "(0) P0 (3) P1 (6) P2 (9) P0 (12)"
        );
    }
}
