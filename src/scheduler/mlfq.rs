use std::collections::VecDeque;

use super::{ProcessId, Quantum, Scheduler, SimCtx, Ticks, slice};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MlfqEntry {
    pub id: ProcessId,
    pub remaining: Ticks,
}

#[derive(Debug)]
struct Tier {
    queue: VecDeque<MlfqEntry>,
    // None runs to completion
    quantum: Option<Quantum>,
}

impl Tier {
    fn new(quantum: Option<Quantum>) -> Self {
        Self {
            queue: VecDeque::new(),
            quantum,
        }
    }
}

/// Multilevel feedback queue with three FIFO tiers: round robin with the
/// first quantum, round robin with the second quantum, then run to
/// completion. Every admission enters the top tier; a process that uses up a
/// tier's quantum drops one tier.
#[derive(Debug)]
pub struct Mlfq {
    tiers: [Tier; 3],
}

impl Mlfq {
    pub fn new(first_quantum: Quantum, second_quantum: Quantum) -> Self {
        Self {
            tiers: [
                Tier::new(Some(first_quantum)),
                Tier::new(Some(second_quantum)),
                Tier::new(None),
            ],
        }
    }

    /// Number of processes waiting in each tier, top first.
    pub fn tier_lengths(&self) -> [usize; 3] {
        self.tiers.each_ref().map(|tier| tier.queue.len())
    }
}

impl Scheduler for Mlfq {
    const NAME: &'static str = "Multilevel feedback queue";

    fn has_ready(&self) -> bool {
        self.tiers.iter().any(|tier| !tier.queue.is_empty())
    }

    fn enqueue(&mut self, ctx: &SimCtx, pid: ProcessId) {
        self.tiers[0].queue.push_back(MlfqEntry {
            id: pid,
            remaining: ctx.process(pid).service_time,
        });
    }

    fn burst(&mut self, ctx: &mut SimCtx) {
        let Some(level) = self.tiers.iter().position(|tier| !tier.queue.is_empty()) else {
            return;
        };
        let Some(mut entry) = self.tiers[level].queue.pop_front() else {
            return;
        };

        let duration = match self.tiers[level].quantum {
            Some(quantum) => slice(entry.remaining, quantum),
            None => entry.remaining,
        };
        ctx.run(entry.id, duration);
        entry.remaining -= duration;

        self.admit_arrived(ctx);
        if entry.remaining > 0 {
            let demoted = (level + 1).min(self.tiers.len() - 1);
            self.tiers[demoted].queue.push_back(entry);
        }
    }
}
