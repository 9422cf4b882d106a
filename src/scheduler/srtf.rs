use std::cmp::Ordering;

use keyed_priority_queue::KeyedPriorityQueue;

use super::{ProcessId, Scheduler, SimCtx, Ticks};

/// Shortest remaining time first, preempting whenever a process arrives.
#[derive(Debug)]
pub struct Srtf {
    ready: KeyedPriorityQueue<ProcessId, SrtfEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SrtfEntry {
    pub id: ProcessId,
    pub remaining: Ticks,
}

// KeyedPriorityQueue is a max-heap, so the least remaining time (then the
// lowest id) has to compare greatest
impl Ord for SrtfEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .remaining
            .cmp(&self.remaining)
            .then_with(|| other.id.cmp(&self.id))
    }
}

impl PartialOrd for SrtfEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Srtf {
    pub fn new() -> Self {
        Self {
            ready: KeyedPriorityQueue::new(),
        }
    }

    /// The entry that would run next.
    pub fn peek(&self) -> Option<&SrtfEntry> {
        self.ready.peek().map(|(_, entry)| entry)
    }
}

impl Default for Srtf {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for Srtf {
    const NAME: &'static str = "Shortest remaining time first";

    fn has_ready(&self) -> bool {
        !self.ready.is_empty()
    }

    fn enqueue(&mut self, ctx: &SimCtx, pid: ProcessId) {
        let remaining = ctx.process(pid).service_time;
        self.ready.push(pid, SrtfEntry { id: pid, remaining });
    }

    fn burst(&mut self, ctx: &mut SimCtx) {
        let Some((pid, mut entry)) = self.ready.pop() else {
            return;
        };

        // Run to completion unless someone arrives first; an arrival exactly
        // at the finish time is treated as an interruption with nothing left
        let finish = ctx.now + entry.remaining;
        let duration = match ctx.next_arrival_time() {
            Some(arrival) if arrival <= finish => arrival - ctx.now,
            _ => entry.remaining,
        };

        ctx.run(pid, duration);
        entry.remaining -= duration;
        self.admit_arrived(ctx);

        if entry.remaining > 0 {
            self.ready.push(pid, entry);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{core::SimCore, sim::ProcessSet};

    fn run(arrivals: &[Ticks], services: &[Ticks]) -> String {
        let processes = ProcessSet::from_times(arrivals, services).unwrap();
        SimCore::new(&processes, Srtf::new()).run().to_string()
    }

    #[test]
    fn entry_order_prefers_least_remaining_then_lowest_id() {
        let short = SrtfEntry { id: 3, remaining: 2 };
        let long = SrtfEntry { id: 0, remaining: 5 };
        let tie = SrtfEntry { id: 1, remaining: 2 };

        assert!(short > long);
        assert!(tie > short);
    }

    #[test]
    fn shorter_arrival_preempts() {
        assert_eq!(run(&[0, 1], &[8, 4]), "(0) P0 (1) P1 (5) P0 (12)");
    }

    #[test]
    fn equal_remaining_keeps_lower_id() {
        // At t=2 both have 2 left; P0 keeps the CPU
        assert_eq!(run(&[0, 2], &[4, 2]), "(0) P0 (4) P1 (6)");
        assert_eq!(run(&[0, 0], &[3, 3]), "(0) P0 (3) P1 (6)");
    }

    #[test]
    fn idles_until_first_arrival() {
        assert_eq!(run(&[3, 10], &[2, 1]), "(0) Idle (3) P0 (5) Idle (10) P1 (11)");
    }

    #[test]
    fn chosen_process_has_least_remaining_after_preemption() {
        let processes = ProcessSet::from_times(&[0, 1, 2, 3, 5], &[7, 5, 1, 3, 2]).unwrap();
        let mut core = SimCore::new(&processes, Srtf::new());

        while !core.is_finished() {
            core.step();
            if let Some(next) = core.scheduler.peek().copied() {
                assert!(
                    core.scheduler
                        .ready
                        .iter()
                        .all(|(_, other)| next.remaining <= other.remaining)
                );
            }
        }
    }
}
