use std::cmp::Ordering;

use keyed_priority_queue::KeyedPriorityQueue;

use super::{ProcessId, Scheduler, SimCtx, Ticks};

/// Highest response ratio next. Non-preemptive.
#[derive(Debug)]
pub struct Hrrn {
    ready: KeyedPriorityQueue<ProcessId, HrrnEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HrrnEntry {
    pub id: ProcessId,
    pub waiting: Ticks,
    pub service: Ticks,
}

// Higher ratio compares greater, ties go to the lower id. Ratios are compared
// by cross-multiplication so equal fractions tie exactly.
impl Ord for HrrnEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = self.waiting as u128 * other.service as u128;
        let rhs = other.waiting as u128 * self.service as u128;
        lhs.cmp(&rhs).then_with(|| other.id.cmp(&self.id))
    }
}

impl PartialOrd for HrrnEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hrrn {
    pub fn new() -> Self {
        Self {
            ready: KeyedPriorityQueue::new(),
        }
    }

    // Every process left in the ready heap waited through the whole burst
    fn age(&mut self, waited: Ticks) {
        let mut aged = Vec::with_capacity(self.ready.len());
        while let Some((pid, mut entry)) = self.ready.pop() {
            entry.waiting += waited;
            aged.push((pid, entry));
        }
        for (pid, entry) in aged {
            self.ready.push(pid, entry);
        }
    }
}

impl Default for Hrrn {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for Hrrn {
    const NAME: &'static str = "Highest response ratio next";

    fn has_ready(&self) -> bool {
        !self.ready.is_empty()
    }

    // Processes admitted late are credited with the time they already waited
    fn enqueue(&mut self, ctx: &SimCtx, pid: ProcessId) {
        let process = ctx.process(pid);
        self.ready.push(
            pid,
            HrrnEntry {
                id: pid,
                waiting: ctx.now - process.arrival_time,
                service: process.service_time,
            },
        );
    }

    fn burst(&mut self, ctx: &mut SimCtx) {
        let Some((pid, entry)) = self.ready.pop() else {
            return;
        };

        ctx.run(pid, entry.service);
        self.age(entry.service);
        self.admit_arrived(ctx);
    }
}
